//! Block storage.
//!
//! Blocks live in an insertion-ordered arena keyed by [`BlockId`]. Ids come
//! from a counter that only grows, so removing a block leaves no reusable
//! slot behind: lookups by a removed id simply miss, and iteration never
//! sees it.

use indexmap::IndexMap;
use smallvec::SmallVec;

use crate::block::{Block, BlockDescriptor, BlockId};

/// An ordering of block ids, usually produced by a sort key.
pub type BlockOrder = SmallVec<[BlockId; 16]>;

/// All live blocks of one grid.
#[derive(Debug, Clone, Default)]
pub struct BlockSet {
    /// Live blocks in insertion order
    blocks: IndexMap<BlockId, Block>,
    /// Counter for generating unique IDs
    next_id: usize,
}

impl BlockSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a block built from `descriptor` and return its new id.
    pub fn insert(&mut self, descriptor: &BlockDescriptor) -> BlockId {
        let id = BlockId(self.next_id);
        self.next_id += 1;
        self.blocks.insert(id, Block::from_descriptor(id, descriptor));
        id
    }

    /// Remove a block, keeping the relative order of the rest.
    pub fn remove(&mut self, id: BlockId) -> Option<Block> {
        self.blocks.shift_remove(&id)
    }

    /// Get a block by ID.
    pub fn get(&self, id: BlockId) -> Option<&Block> {
        self.blocks.get(&id)
    }

    /// Get a mutable block by ID.
    pub fn get_mut(&mut self, id: BlockId) -> Option<&mut Block> {
        self.blocks.get_mut(&id)
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Iterate over blocks in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Block> {
        self.blocks.values()
    }

    /// Iterate mutably over blocks in insertion order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Block> {
        self.blocks.values_mut()
    }

    /// Ids sorted ascending by `key`. The sort is stable, so blocks with equal
    /// keys keep their insertion order.
    pub fn ordered_by<F>(&self, key: F) -> BlockOrder
    where
        F: Fn(&Block) -> f64,
    {
        let mut keyed: SmallVec<[(f64, BlockId); 16]> =
            self.blocks.values().map(|b| (key(b), b.id)).collect();
        keyed.sort_by(|a, b| a.0.total_cmp(&b.0));
        keyed.into_iter().map(|(_, id)| id).collect()
    }
}
