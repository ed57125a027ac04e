//! Small `'$'`-terminated tables for tests
//!
//! Lays words out as a plain trie in breadth-first order, so sibling lists
//! are contiguous and no node is shared.

use super::types::*;
use std::collections::{BTreeMap, VecDeque};

#[derive(Default)]
struct Node {
    children: BTreeMap<u8, Node>,
}

/// Lay `words` out as `'$'`-terminated sibling lists in breadth-first order
pub fn encode_words<I, S>(words: I) -> Vec<DawgRecord>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut root = Node::default();
    for word in words {
        let mut node = &mut root;
        for &letter in word.as_ref().as_bytes().iter().chain([&TERMINATOR]) {
            node = node.children.entry(letter).or_default();
        }
    }

    let mut records: Vec<DawgRecord> = Vec::new();
    let mut queue: VecDeque<(&Node, Option<usize>)> = VecDeque::from([(&root, None)]);
    while let Some((node, parent)) = queue.pop_front() {
        if node.children.is_empty() {
            continue;
        }
        let start = records.len();
        if let Some(parent) = parent {
            records[parent].link = start as RecordIndex;
        }
        let last = node.children.len() - 1;
        for (i, (&letter, child)) in node.children.iter().enumerate() {
            records.push(DawgRecord::new(letter, 0, i < last));
            queue.push_back((child, Some(start + i)));
        }
    }
    records
}
