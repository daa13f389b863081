//! Blocks: the rectangles arranged on the grid.

use std::fmt;

use crate::types::{ColumnSpan, PixelRect};

/// Stable handle for a block within one engine.
///
/// Handed out on insertion and never reused, even after the block is removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct BlockId(pub usize);

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Caller-supplied identifier, passed through to serialization untouched.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum ExternalId {
    Int(i64),
    Str(String),
}

impl From<i64> for ExternalId {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<&str> for ExternalId {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for ExternalId {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

/// Initial geometry for a new block.
///
/// Values are taken as given and clamped into the grid when the block is
/// created; nothing here is ever rejected.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockDescriptor {
    /// Opaque id echoed back by serialization
    pub external_id: Option<ExternalId>,
    /// Starting column
    pub x: i64,
    /// Vertical ordering key (row rank or pixel offset, depending on policy)
    pub y: f64,
    /// Column span
    pub width: i64,
    /// Fixed pixel height; `None` means the height follows the content
    pub height: Option<f64>,
    /// Block offers horizontal resize handles
    pub resizable_width: bool,
    /// Block offers a vertical resize handle
    pub resizable_height: bool,
}

impl Default for BlockDescriptor {
    fn default() -> Self {
        Self {
            external_id: None,
            x: 0,
            y: 0.0,
            width: 1,
            height: None,
            resizable_width: false,
            resizable_height: false,
        }
    }
}

impl BlockDescriptor {
    /// Descriptor at column `x` spanning `width` columns.
    pub fn new(x: i64, width: i64) -> Self {
        Self {
            x,
            width,
            ..Default::default()
        }
    }

    pub fn with_y(mut self, y: f64) -> Self {
        self.y = y;
        self
    }

    pub fn with_height(mut self, height: f64) -> Self {
        self.height = Some(height);
        self
    }

    pub fn with_external_id(mut self, id: impl Into<ExternalId>) -> Self {
        self.external_id = Some(id.into());
        self
    }

    pub fn with_resizable(mut self, width: bool, height: bool) -> Self {
        self.resizable_width = width;
        self.resizable_height = height;
        self
    }
}

/// A block placed on the grid.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    pub id: BlockId,
    pub external_id: Option<ExternalId>,
    /// Starting column
    pub x: usize,
    /// Column span
    pub width: usize,
    /// Ordering key: row rank under Classic, pixel offset under PackedRows
    pub y: f64,
    /// Computed pixel top
    pub pixel_y: f64,
    /// Pixel height, measured or fixed
    pub pixel_height: f64,
    /// Height is caller-owned and never re-measured
    pub fixed_height: bool,
    pub resizable_width: bool,
    pub resizable_height: bool,
}

impl Block {
    /// Build a block from a descriptor, clamping geometry into the grid.
    pub fn from_descriptor(id: BlockId, descriptor: &BlockDescriptor) -> Self {
        let span = ColumnSpan::clamped(descriptor.x, descriptor.width);
        let fixed = descriptor.height.filter(|h| h.is_finite());
        let y = if descriptor.y.is_finite() {
            descriptor.y.max(0.0)
        } else {
            0.0
        };

        Self {
            id,
            external_id: descriptor.external_id.clone(),
            x: span.start,
            width: span.width,
            y,
            pixel_y: 0.0,
            pixel_height: fixed.map_or(0.0, |h| h.max(0.0)),
            fixed_height: fixed.is_some(),
            resizable_width: descriptor.resizable_width,
            resizable_height: descriptor.resizable_height,
        }
    }

    /// Columns covered by the block.
    pub fn span(&self) -> ColumnSpan {
        ColumnSpan::new(self.x, self.width)
    }

    /// Pull `x`/`width` back inside the grid.
    pub fn clamp_to_grid(&mut self) {
        let span = ColumnSpan::clamped(self.x as i64, self.width as i64);
        self.x = span.start;
        self.width = span.width;
    }

    /// Pixel bottom edge.
    pub fn pixel_bottom(&self) -> f64 {
        self.pixel_y + self.pixel_height
    }

    /// Vertical midpoint of the computed pixel box.
    pub fn pixel_center_y(&self) -> f64 {
        self.pixel_y + self.pixel_height * 0.5
    }

    /// Pixel box given the width of one column.
    pub fn pixel_rect(&self, column_width: f64) -> PixelRect {
        PixelRect::new(
            self.x as f64 * column_width,
            self.pixel_y,
            self.width as f64 * column_width,
            self.pixel_height,
        )
    }
}
