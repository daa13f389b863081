//! Layout engine for the supergrid.
//!
//! This crate arranges rectangular blocks on a six-track grid and keeps the
//! arrangement consistent while blocks are dragged and resized.
//!
//! # Architecture
//!
//! 1. **Geometry**: pixel offsets from gestures are snapped to whole columns
//! 2. **Active resolution**: the dragged or resized block gets an ordering
//!    key from the pointer position
//! 3. **Strategy**: a layout policy assigns every block its column and pixel
//!    top (`Classic` gravity stacking or `PackedRows` row flow)
//! 4. **Queries**: open-space discovery and greedy packing work on the
//!    settled layout
//!
//! # Example
//!
//! ```ignore
//! use supergrid_layout::{BlockDescriptor, FixedMeasure, GridOptions, SuperGrid};
//!
//! let measure = FixedMeasure::new(1200.0).with_default_height(100.0);
//! let mut grid = SuperGrid::new(GridOptions::interactive(), measure, ());
//! let id = grid.add_block(BlockDescriptor::new(0, 3));
//! grid.relayout();
//!
//! println!("{}", grid.to_json_string());
//! ```

mod active;
mod collision;
mod engine;
mod gaps;
mod geometry;
mod host;
mod pack;
mod serialize;
mod strategy;

pub use active::{ActiveBlock, Pointer};
pub use collision::resolve_rank;
pub use engine::SuperGrid;
pub use gaps::{find_open_spaces, OpenSpace};
pub use geometry::{Geometry, RESIZE_ERROR_MARGIN};
pub use host::{ContentMeasure, FixedMeasure, GridEvents, LayoutFrame, Placement, ResizeHandles};
pub use pack::pack_blocks;
pub use serialize::{records_from_json, records_to_json, to_records};
pub use strategy::{priority_order, strategy_for, Classic, LayoutStrategy, PackedRows, Skyline};

pub use supergrid_core::{
    Block, BlockDescriptor, BlockError, BlockId, BlockRecord, BlockSet, ColumnSpan, ExternalId,
    GeometryError, GridError, GridOptions, LayoutPolicy, PixelPoint, PixelRect, PolicyError,
    TRACK_COUNT,
};
