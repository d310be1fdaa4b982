//! Block composition: filtering, ordering, deduplication.
//!
//! Both operations are pure, synchronous, and total over arbitrary input:
//! malformed entries are dropped, never reported as errors.

use std::collections::HashMap;

use crate::block::Block;

/// Compose generator outputs into an ordered block sequence.
///
/// Suppressed generations (`None`) and blocks with a null payload are
/// dropped; survivors are stable-sorted ascending by priority, so ties keep
/// input order.
#[must_use]
pub fn compose(blocks: Vec<Option<Block>>) -> Vec<Block> {
    let mut kept: Vec<Block> = blocks
        .into_iter()
        .flatten()
        .filter(Block::has_data)
        .collect();

    kept.sort_by_key(|block| block.priority);
    kept
}

/// Collapse duplicate block ids, keeping the last occurrence of each.
///
/// Used when multiple composition passes or overrides may produce colliding
/// identifiers. Each retained block sits at its id's first appearance in
/// input order before the final stable priority sort. Blocks with an empty
/// id carry no identity and are dropped.
#[must_use]
pub fn deduplicate(blocks: Vec<Block>) -> Vec<Block> {
    let mut order: Vec<String> = Vec::new();
    let mut latest: HashMap<String, Block> = HashMap::new();

    for block in blocks {
        if block.id.is_empty() {
            continue;
        }
        if !latest.contains_key(&block.id) {
            order.push(block.id.clone());
        }
        latest.insert(block.id.clone(), block);
    }

    let mut kept: Vec<Block> = order
        .into_iter()
        .filter_map(|id| latest.remove(&id))
        .collect();

    kept.sort_by_key(|block| block.priority);
    kept
}
