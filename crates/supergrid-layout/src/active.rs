//! The block under an in-progress drag or resize.

use supergrid_core::{
    BlockError, BlockId, BlockSet, GridError, GridOptions, PixelPoint, PixelRect,
};

use crate::geometry::Geometry;

/// Latest pixel geometry reported by the gesture layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Pointer {
    /// Top-left corner of the dragged element
    Drag(PixelPoint),
    /// Box of the element being resized
    Resize(PixelRect),
}

impl Pointer {
    /// Top-left corner of the element.
    pub fn origin(&self) -> PixelPoint {
        match self {
            Self::Drag(point) => *point,
            Self::Resize(rect) => rect.origin(),
        }
    }
}

/// Interaction state for the single active block.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActiveBlock {
    pub id: BlockId,
    /// `None` until the first move or resize update after a start event
    pub pointer: Option<Pointer>,
}

impl ActiveBlock {
    pub fn new(id: BlockId) -> Self {
        Self { id, pointer: None }
    }

    pub fn is_resizing(&self) -> bool {
        matches!(self.pointer, Some(Pointer::Resize(_)))
    }

    /// Pixel top the gesture currently proposes.
    pub fn top(&self) -> Option<f64> {
        self.pointer.map(|p| p.origin().top)
    }

    /// Snap the block's columns (and, for fixed heights, its pixel height) to
    /// the pointer.
    ///
    /// A drag rounds the left edge to the nearest column. A resize converts
    /// the whole box; a span narrower than `min_block_width` is dropped and
    /// the block keeps its previous columns.
    pub fn snap(
        &self,
        blocks: &mut BlockSet,
        geometry: &Geometry,
        options: &GridOptions,
    ) -> Result<(), GridError> {
        let block = blocks
            .get_mut(self.id)
            .ok_or(BlockError::UnknownBlock { id: self.id })?;

        match self.pointer {
            Some(Pointer::Drag(point)) => {
                block.x = geometry.snap_drag(point.left, block.width);
            }
            Some(Pointer::Resize(rect)) => {
                match geometry.span_to_columns(rect.left, rect.width, options.min_block_width) {
                    Ok(span) => {
                        block.x = span.start;
                        block.width = span.width;
                    }
                    Err(err) => {
                        log::debug!(
                            "block {} keeps columns {}+{}: {err}",
                            block.id,
                            block.x,
                            block.width
                        );
                    }
                }
                if block.fixed_height {
                    block.pixel_height = options.snap_height(rect.height);
                }
            }
            None => {}
        }

        Ok(())
    }
}
