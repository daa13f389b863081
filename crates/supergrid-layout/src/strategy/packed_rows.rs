//! Row-flow packing.
//!
//! Blocks are laid out like inline text: left to right until the next block
//! would overflow the last track, then on a new row below the tallest block
//! of the current one. `y` is a pixel offset under this policy.

use supergrid_core::{BlockId, BlockSet, TRACK_COUNT};

use super::LayoutStrategy;
use crate::active::ActiveBlock;

/// Row-flow policy.
#[derive(Debug, Clone, Copy, Default)]
pub struct PackedRows;

/// Cursor for row-flow placement.
#[derive(Debug, Clone, Copy, Default)]
struct RowFlow {
    x: usize,
    y: f64,
    row_height: f64,
}

impl RowFlow {
    /// Start a new row if `width` does not fit on the current one.
    fn wrap(&mut self, width: usize) {
        if self.x + width > TRACK_COUNT {
            self.y += self.row_height;
            self.row_height = 0.0;
            self.x = 0;
        }
    }

    /// Claim the slot at the cursor and return its column and pixel top.
    fn place(&mut self, width: usize, height: f64) -> (usize, f64) {
        self.wrap(width);
        let slot = (self.x, self.y);
        self.row_height = self.row_height.max(height);
        self.x += width;
        slot
    }

    fn height(&self) -> f64 {
        self.y + self.row_height
    }
}

impl PackedRows {
    /// Flow every other block in its current order and move the dragged
    /// block to the first row whose lower half begins at or below the drag
    /// position.
    ///
    /// The other blocks take their flowed slots, so the final pass compares
    /// the dragged block against the same flow it was placed into. Only the
    /// dragged block's `y` changes; its column stays where the pointer put it.
    fn seek_drop_target(blocks: &mut BlockSet, active: BlockId) {
        let Some((target_y, width, height)) = blocks
            .get(active)
            .map(|b| (b.y, b.width, b.pixel_height))
        else {
            return;
        };

        let order = blocks.ordered_by(|b| b.y + b.x as f64 / TRACK_COUNT as f64);
        let mut flow = RowFlow::default();
        let mut target = None;

        for id in order {
            if id == active {
                continue;
            }
            let Some(block) = blocks.get_mut(id) else {
                continue;
            };

            flow.wrap(block.width);
            if target.is_none() {
                let row_height = flow.row_height.max(block.pixel_height);
                let threshold = flow.y - height.min(row_height) * 0.5 + row_height;
                if threshold >= target_y && flow.x + width <= TRACK_COUNT {
                    target = Some(flow.y);
                }
            }

            let (x, y) = flow.place(block.width, block.pixel_height);
            block.x = x;
            block.y = y;
        }

        if let Some(y) = target {
            if let Some(block) = blocks.get_mut(active) {
                log::trace!("packed rows: drop target for {} at y {y}", block.id);
                block.y = y;
            }
        }
    }
}

impl LayoutStrategy for PackedRows {
    fn resolve_active(&self, blocks: &mut BlockSet, active: &ActiveBlock) {
        let Some(top) = active.top() else {
            return;
        };
        if let Some(block) = blocks.get_mut(active.id) {
            block.y = top;
        }
    }

    fn arrange(&self, blocks: &mut BlockSet, active: Option<&ActiveBlock>) -> f64 {
        if let Some(dragging) = active.filter(|a| a.pointer.is_some() && !a.is_resizing()) {
            Self::seek_drop_target(blocks, dragging.id);
        }

        let active_id = active.map(|a| a.id);
        let step = 1.0 / TRACK_COUNT as f64;
        let order = blocks.ordered_by(|b| {
            let penalty = if Some(b.id) == active_id { 0.0 } else { 0.5 * step };
            b.y + b.x as f64 * step + penalty
        });

        let mut flow = RowFlow::default();
        for id in order {
            let Some(block) = blocks.get_mut(id) else {
                continue;
            };
            block.clamp_to_grid();
            let (x, y) = flow.place(block.width, block.pixel_height);
            block.x = x;
            block.y = y;
            block.pixel_y = y;
        }

        flow.height()
    }
}
