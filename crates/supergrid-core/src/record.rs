//! Plain positional records: the grid's only documented wire shape.

use crate::block::{Block, BlockDescriptor, ExternalId};

/// Serialized position of one block.
///
/// `height` is present only for fixed-height blocks. Its absence tells a
/// consumer rebuilding the grid to measure the block's content instead.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BlockRecord {
    pub id: Option<ExternalId>,
    /// Starting column; out-of-range values are clamped on rebuild
    pub x_pos: i64,
    pub y_pos: f64,
    /// Column span; clamped on rebuild like `x_pos`
    pub width: i64,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub height: Option<f64>,
}

impl From<&Block> for BlockRecord {
    fn from(block: &Block) -> Self {
        Self {
            id: block.external_id.clone(),
            x_pos: block.x as i64,
            y_pos: block.y,
            width: block.width as i64,
            height: block.fixed_height.then_some(block.pixel_height),
        }
    }
}

impl From<&BlockRecord> for BlockDescriptor {
    fn from(record: &BlockRecord) -> Self {
        Self {
            external_id: record.id.clone(),
            x: record.x_pos,
            y: record.y_pos,
            width: record.width,
            height: record.height,
            ..Default::default()
        }
    }
}
