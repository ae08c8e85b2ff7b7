//! Animation offset state owned by a display driver.
//!
//! The core never mutates this; a driver loop owns one [`OffsetState`], feeds it key presses
//! and clock ticks, and reads [`OffsetState::offset`] to pick a shape set from an
//! [`InterpolatedSequence`](crate::InterpolatedSequence).

/// Default auto-move period in milliseconds.
pub const DEFAULT_INTERVAL_MS: u64 = 50;

/// Direction of automatic movement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Toward negative offsets.
    Left,
    /// Toward positive offsets.
    Right,
}

/// Current animation offset plus manual/auto movement state.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct OffsetState {
    offset: i32,
    limit: i32,
    direction: Direction,
    auto: bool,
    interval_ms: u64,
    last_move_ms: u64,
}

impl OffsetState {
    /// Manual mode at offset 0, bounded to `[-limit, limit]`.
    pub fn new(limit: u32) -> Self {
        Self {
            offset: 0,
            limit: i32::try_from(limit).unwrap_or(i32::MAX),
            direction: Direction::Left,
            auto: false,
            interval_ms: DEFAULT_INTERVAL_MS,
            last_move_ms: 0,
        }
    }

    /// Override the auto-move period.
    pub fn with_interval_ms(mut self, interval_ms: u64) -> Self {
        self.interval_ms = interval_ms;
        self
    }

    /// Current offset in `[-limit, limit]`.
    pub fn offset(&self) -> i32 {
        self.offset
    }

    /// Offset translated to a sequence array index (`offset + limit`).
    pub fn array_index(&self) -> usize {
        (i64::from(self.offset) + i64::from(self.limit)) as usize
    }

    /// Bound on `|offset|`.
    pub fn limit(&self) -> i32 {
        self.limit
    }

    /// Whether automatic movement is on.
    pub fn is_auto(&self) -> bool {
        self.auto
    }

    /// Direction of the next automatic step.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Manual step toward negative offsets; ignored in auto mode or at the bound.
    pub fn step_left(&mut self) {
        if !self.auto && self.offset > -self.limit {
            self.offset -= 1;
        }
    }

    /// Manual step toward positive offsets; ignored in auto mode or at the bound.
    pub fn step_right(&mut self) {
        if !self.auto && self.offset < self.limit {
            self.offset += 1;
        }
    }

    /// Enter auto mode from offset 0, heading left.
    pub fn start_auto(&mut self) {
        self.auto = true;
        self.direction = Direction::Left;
        self.offset = 0;
    }

    /// Leave auto mode, keeping the current offset.
    pub fn stop_auto(&mut self) {
        self.auto = false;
    }

    /// Advance auto mode by the clock. Returns `true` when the offset changed.
    ///
    /// At most one step happens per interval. Reaching a bound spends one interval turning
    /// around without moving.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        if !self.auto || now_ms.saturating_sub(self.last_move_ms) < self.interval_ms {
            return false;
        }
        self.last_move_ms = now_ms;

        match self.direction {
            Direction::Left if self.offset > -self.limit => {
                self.offset -= 1;
                true
            }
            Direction::Left => {
                self.direction = Direction::Right;
                false
            }
            Direction::Right if self.offset < self.limit => {
                self.offset += 1;
                true
            }
            Direction::Right => {
                self.direction = Direction::Left;
                false
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/offset.rs"]
mod tests;
