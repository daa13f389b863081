//! Core types for the supergrid layout engine.
//!
//! This crate provides the data model shared by the layout algorithms:
//! - Blocks, their descriptors, and the id-keyed block arena
//! - Pixel and column geometry value types
//! - Grid options and the layout policy selector
//! - The positional record used for serialization
//! - Error types

pub mod block;
pub mod errors;
pub mod options;
pub mod record;
pub mod set;
pub mod types;

pub use block::*;
pub use errors::*;
pub use options::*;
pub use record::*;
pub use set::*;
pub use types::*;
