//! Layout strategies.
//!
//! A strategy does two things: turns the active gesture into an ordering key
//! for the active block, and assigns every block its final position.

mod classic;
mod packed_rows;

pub use classic::{priority_order, Classic};
pub use packed_rows::PackedRows;

use supergrid_core::{BlockSet, ColumnSpan, LayoutPolicy, TRACK_COUNT};

use crate::active::ActiveBlock;

/// One layout policy.
pub trait LayoutStrategy {
    /// Update the active block's `y` from the gesture. Columns have already
    /// been snapped.
    fn resolve_active(&self, blocks: &mut BlockSet, active: &ActiveBlock);

    /// Assign `x`, `y`, and `pixel_y` for every block and return the
    /// container height.
    fn arrange(&self, blocks: &mut BlockSet, active: Option<&ActiveBlock>) -> f64;
}

/// Strategy implementing `policy`.
pub fn strategy_for(policy: LayoutPolicy) -> &'static dyn LayoutStrategy {
    match policy {
        LayoutPolicy::Classic => &Classic,
        LayoutPolicy::PackedRows => &PackedRows,
    }
}

/// Per-column level, such as the lowest occupied pixel in each track.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Skyline([f64; TRACK_COUNT]);

impl Skyline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Level of a single column.
    pub fn level(&self, column: usize) -> f64 {
        self.0[column]
    }

    /// Highest level across a span: where something spanning it must start.
    pub fn top(&self, span: ColumnSpan) -> f64 {
        span.columns().map(|c| self.0[c]).fold(0.0, f64::max)
    }

    /// Set every column of `span` to `level`.
    pub fn settle(&mut self, span: ColumnSpan, level: f64) {
        for column in span.columns() {
            self.0[column] = level;
        }
    }

    /// Highest level of any column.
    pub fn highest(&self) -> f64 {
        self.0.iter().copied().fold(0.0, f64::max)
    }
}
