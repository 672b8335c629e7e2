//! Work items and the traversal frontier.

use std::collections::VecDeque;

use waterline_config::TraversalOrder;

use crate::source::VertexId;

/// A source vertex waiting to be expanded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkItem {
    pub source: VertexId,
    /// Output vertex of `source` when it was admitted; None for pass-through
    /// vertices, which are expanded for connectivity but never create edges
    pub anchor: Option<u32>,
}

impl WorkItem {
    /// Work item for an admitted vertex
    pub fn anchored(source: VertexId, output: u32) -> Self {
        Self {
            source,
            anchor: Some(output),
        }
    }

    /// Work item for a rejected vertex
    pub fn pass_through(source: VertexId) -> Self {
        Self {
            source,
            anchor: None,
        }
    }
}

/// Explicit work list; LIFO for depth-first, FIFO for breadth-first
#[derive(Debug, Clone)]
pub struct Frontier {
    items: VecDeque<WorkItem>,
    order: TraversalOrder,
}

impl Frontier {
    pub fn new(order: TraversalOrder) -> Self {
        Self {
            items: VecDeque::new(),
            order,
        }
    }

    pub fn push(&mut self, item: WorkItem) {
        self.items.push_back(item);
    }

    pub fn pop(&mut self) -> Option<WorkItem> {
        match self.order {
            TraversalOrder::DepthFirst => self.items.pop_back(),
            TraversalOrder::BreadthFirst => self.items.pop_front(),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn order(&self) -> TraversalOrder {
        self.order
    }
}
