//! Gravity stacking.

use supergrid_core::{BlockId, BlockOrder, BlockSet, TRACK_COUNT};

use super::{LayoutStrategy, Skyline};
use crate::active::ActiveBlock;
use crate::collision::resolve_rank;

/// Blocks settle on the lowest free pixel row across their columns, in rank
/// order.
#[derive(Debug, Clone, Copy, Default)]
pub struct Classic;

/// Order in which blocks claim space: by rank, then column.
///
/// Inactive blocks get half a rank of penalty so the active block wins a
/// tie for a slot; `x / 12` breaks the remaining ties left to right.
pub fn priority_order(blocks: &BlockSet, active: Option<BlockId>) -> BlockOrder {
    blocks.ordered_by(|block| {
        let penalty = if Some(block.id) == active { 0.0 } else { 0.5 };
        block.y + penalty + block.x as f64 / (TRACK_COUNT as f64 * 2.0)
    })
}

impl LayoutStrategy for Classic {
    fn resolve_active(&self, blocks: &mut BlockSet, active: &ActiveBlock) {
        let Some(top) = active.top() else {
            return;
        };
        let Some((span, height)) = blocks.get(active.id).map(|b| (b.span(), b.pixel_height))
        else {
            return;
        };

        let rank = resolve_rank(blocks, active.id, span, top, height);
        if let Some(block) = blocks.get_mut(active.id) {
            block.y = rank;
        }
    }

    fn arrange(&self, blocks: &mut BlockSet, active: Option<&ActiveBlock>) -> f64 {
        let order = priority_order(blocks, active.map(|a| a.id));
        let mut ranks = Skyline::new();
        let mut bottoms = Skyline::new();
        let mut container_height = 0.0_f64;

        for id in order {
            let Some(block) = blocks.get_mut(id) else {
                continue;
            };
            block.clamp_to_grid();
            let span = block.span();

            block.y = ranks.top(span);
            block.pixel_y = bottoms.top(span);
            ranks.settle(span, block.y + 1.0);
            bottoms.settle(span, block.pixel_bottom());

            container_height = container_height.max(block.pixel_bottom());
            log::trace!(
                "classic: block {} at column {} rank {} pixel {}",
                block.id,
                block.x,
                block.y,
                block.pixel_y
            );
        }

        container_height
    }
}
