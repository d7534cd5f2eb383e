use std::cmp::{Eq, Ord, Ordering, PartialEq, PartialOrd};
use std::fmt;

use crate::error::Error;
use crate::heap::MinHeap;
use crate::Result;

/// Secondary ordering key of a tree node.
///
/// Leaves carry their alphabet symbol; merge nodes carry the `Merged`
/// sentinel, which sorts before every symbol. Weight ties are therefore
/// broken the same way on every run, which pins down the exact codewords
/// the builder produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum NodeKey<S> {
    Merged,
    Symbol(S),
}

/// A node of the prefix-free code tree.
///
/// A node either owns both children (a merge node) or none (a leaf); no
/// partial-child state is representable. The weight of a merge node is the
/// sum of its children's weights and never changes after construction.
pub struct HuffmanNode<S> {
    weight: u64,
    key: NodeKey<S>,
    children: Option<Box<(HuffmanNode<S>, HuffmanNode<S>)>>,
}

impl<S> HuffmanNode<S> {
    pub fn leaf(symbol: S, weight: u64) -> Self {
        HuffmanNode {
            weight,
            key: NodeKey::Symbol(symbol),
            children: None,
        }
    }

    /// Merges two subtrees into a new node that takes ownership of both.
    pub fn merge(left: HuffmanNode<S>, right: HuffmanNode<S>) -> Self {
        HuffmanNode {
            weight: left.weight + right.weight,
            key: NodeKey::Merged,
            children: Some(Box::new((left, right))),
        }
    }

    pub fn weight(&self) -> u64 {
        self.weight
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_none()
    }

    pub fn symbol(&self) -> Option<&S> {
        match &self.key {
            NodeKey::Symbol(symbol) => Some(symbol),
            NodeKey::Merged => None,
        }
    }

    pub fn children(&self) -> Option<(&HuffmanNode<S>, &HuffmanNode<S>)> {
        self.children.as_ref().map(|pair| (&pair.0, &pair.1))
    }
}

impl<S: Ord> Ord for HuffmanNode<S> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.weight
            .cmp(&other.weight)
            .then_with(|| self.key.cmp(&other.key))
    }
}

impl<S: Ord> PartialOrd for HuffmanNode<S> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<S: Ord> PartialEq for HuffmanNode<S> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<S: Ord> Eq for HuffmanNode<S> {}

impl<S: fmt::Display> fmt::Display for HuffmanNode<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.key {
            NodeKey::Symbol(symbol) => write!(f, "{{{}:{}}}", self.weight, symbol),
            NodeKey::Merged => write!(f, "{{{}:$}}", self.weight),
        }
    }
}

/// Builds the prefix-free code tree by repeatedly merging the two
/// lowest-weight elements of the heap.
pub fn build_tree<S: Ord>(heap: MinHeap<HuffmanNode<S>>) -> Result<HuffmanNode<S>> {
    build_tree_observed(heap, |_| ())
}

/// Same as [`build_tree`], but invokes `observer` with the heap state after
/// every merge step.
pub fn build_tree_observed<S, F>(
    mut heap: MinHeap<HuffmanNode<S>>,
    mut observer: F,
) -> Result<HuffmanNode<S>>
where
    S: Ord,
    F: FnMut(&MinHeap<HuffmanNode<S>>),
{
    if heap.is_empty() {
        return Err(Error::EmptyAlphabet);
    }
    while heap.len() > 1 {
        let left = heap.extract_min()?;
        let right = heap.extract_min()?;
        heap.insert(HuffmanNode::merge(left, right));
        observer(&heap);
    }
    // a single-leaf alphabet never enters the loop; the leaf is the root
    heap.extract_min()
}
