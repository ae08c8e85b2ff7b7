pub mod interp;
pub mod offset;
