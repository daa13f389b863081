//! Seams to the presentation layer.
//!
//! The engine never touches elements or styles. It asks a [`ContentMeasure`]
//! for sizes and reports results to a [`GridEvents`] sink; both are handed
//! to the engine at construction.

use std::collections::HashMap;

use supergrid_core::{Block, BlockId, PixelRect};

/// Size queries answered by whatever renders the grid.
pub trait ContentMeasure {
    /// Rendered height of a block's content, in pixels.
    fn measure_content_height(&self, id: BlockId) -> f64;

    /// Inner width of the grid container, in pixels.
    fn measure_container_width(&self) -> f64;
}

/// Computed position of one block.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct Placement {
    pub id: BlockId,
    pub x: usize,
    pub width: usize,
    pub y: f64,
    pub pixel_y: f64,
    pub pixel_height: f64,
    /// Horizontal pixel offset; withheld while a resize is in progress so
    /// the resized element does not jump before the gesture ends
    pub left: Option<f64>,
}

impl Placement {
    pub fn new(block: &Block, left: Option<f64>) -> Self {
        Self {
            id: block.id,
            x: block.x,
            width: block.width,
            y: block.y,
            pixel_y: block.pixel_y,
            pixel_height: block.pixel_height,
            left,
        }
    }
}

/// Result of one completed layout pass.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct LayoutFrame {
    pub placements: Vec<Placement>,
    pub container_height: f64,
}

/// Which resize handles a gesture layer may attach to a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ResizeHandles {
    pub east: bool,
    pub west: bool,
    pub south: bool,
}

/// Notifications emitted by the engine. Every method defaults to doing
/// nothing.
pub trait GridEvents {
    /// A layout pass finished.
    fn on_layout(&mut self, _frame: &LayoutFrame) {}

    /// Drop-target outline for the active block; `None` hides it.
    fn on_placeholder(&mut self, _placeholder: Option<PixelRect>) {}

    /// The active block's resting geometry at the end of a gesture.
    fn on_commit(&mut self, _block: &Block) {}

    /// The grid entered or left single-column collapse.
    fn on_collapse(&mut self, _collapsed: bool) {}

    /// A drag or resize was committed, or the grid was packed.
    fn on_change(&mut self) {}

    /// The deferred initial layout ran.
    fn on_loaded(&mut self) {}
}

impl GridEvents for () {}

/// Measurements from a lookup table, for hosts that know sizes up front.
#[derive(Debug, Clone, Default)]
pub struct FixedMeasure {
    pub container_width: f64,
    pub heights: HashMap<BlockId, f64>,
    /// Height reported for blocks missing from `heights`
    pub default_height: f64,
}

impl FixedMeasure {
    pub fn new(container_width: f64) -> Self {
        Self {
            container_width,
            ..Default::default()
        }
    }

    pub fn with_default_height(mut self, height: f64) -> Self {
        self.default_height = height;
        self
    }

    pub fn set_height(&mut self, id: BlockId, height: f64) {
        self.heights.insert(id, height);
    }
}

impl ContentMeasure for FixedMeasure {
    fn measure_content_height(&self, id: BlockId) -> f64 {
        self.heights.get(&id).copied().unwrap_or(self.default_height)
    }

    fn measure_container_width(&self) -> f64 {
        self.container_width
    }
}
