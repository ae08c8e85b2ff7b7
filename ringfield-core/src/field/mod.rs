pub mod blend;
pub mod boundary;
pub mod distance;
pub mod grid;
pub mod mask;
pub mod peak;
pub mod ring;
