//! Error types for the supergrid engine.
//!
//! None of these ever escape a public engine operation. They travel through
//! internal helpers with `?` and are logged at the operation boundary, which
//! then leaves the grid untouched.

use thiserror::Error;

use crate::block::BlockId;

/// Top-level error type for the supergrid engine.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GridError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Block(#[from] BlockError),

    #[error(transparent)]
    Policy(#[from] PolicyError),
}

/// Errors while converting pixel geometry into grid columns.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    #[error("Container width must be positive, got {width}")]
    ZeroContainerWidth { width: f64 },

    #[error("Column span {start}..{end} is narrower than the minimum width {min_width}")]
    SpanTooNarrow {
        start: i64,
        end: i64,
        min_width: usize,
    },
}

/// Errors while addressing blocks or the active interaction.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BlockError {
    #[error("Unknown block {id}")]
    UnknownBlock { id: BlockId },

    #[error("Block {id} is not the active block (active: {active:?})")]
    NotActive { id: BlockId, active: Option<BlockId> },

    #[error("No block is currently being dragged or resized")]
    NoActiveBlock,

    #[error("Grid is static; interactive gestures are disabled")]
    StaticGrid,
}

/// Errors while reading layout configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PolicyError {
    #[error("Unknown layout policy: {name}")]
    Unknown { name: String },
}
