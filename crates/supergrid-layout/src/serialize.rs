//! JSON projection of a grid.

use supergrid_core::{BlockRecord, BlockSet};

/// One record per live block, in insertion order.
pub fn to_records(blocks: &BlockSet) -> Vec<BlockRecord> {
    blocks.iter().map(BlockRecord::from).collect()
}

/// Render records as a JSON array.
pub fn records_to_json(records: &[BlockRecord]) -> serde_json::Result<String> {
    serde_json::to_string(records)
}

/// Parse a JSON array of records.
pub fn records_from_json(json: &str) -> serde_json::Result<Vec<BlockRecord>> {
    serde_json::from_str(json)
}
