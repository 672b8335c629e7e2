//! Source-to-output vertex mapping.

use std::collections::HashMap;

use crate::source::VertexId;

/// Maps admitted source vertices to their output vertex index.
///
/// Output indices are handed out in insertion order, so the mapping is a
/// bijection onto `0..len()`. Entries are never removed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VertexMapping {
    to_output: HashMap<VertexId, u32>,
    /// Admitted source vertices, indexed by output index
    order: Vec<VertexId>,
}

impl VertexMapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `source` as the next output vertex and return its index.
    ///
    /// A source vertex that is already mapped keeps its existing index.
    pub fn insert(&mut self, source: VertexId) -> u32 {
        if let Some(&output) = self.to_output.get(&source) {
            return output;
        }
        let output = self.order.len() as u32;
        self.to_output.insert(source, output);
        self.order.push(source);
        output
    }

    /// Output index for an admitted source vertex
    pub fn get(&self, source: VertexId) -> Option<u32> {
        self.to_output.get(&source).copied()
    }

    pub fn contains(&self, source: VertexId) -> bool {
        self.to_output.contains_key(&source)
    }

    /// Source vertex behind an output index
    pub fn source_of(&self, output: u32) -> Option<VertexId> {
        self.order.get(output as usize).copied()
    }

    /// Admitted source vertices in output index order
    pub fn sources(&self) -> &[VertexId] {
        &self.order
    }

    /// Translate source corners into output indices; None if any is unmapped
    pub fn translate(&self, corners: &[VertexId]) -> Option<Vec<u32>> {
        corners.iter().map(|&v| self.get(v)).collect()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_assigns_sequential_indices() {
        let mut mapping = VertexMapping::new();
        assert_eq!(mapping.insert(VertexId(7)), 0);
        assert_eq!(mapping.insert(VertexId(3)), 1);
        assert_eq!(mapping.insert(VertexId(7)), 0);

        assert_eq!(mapping.len(), 2);
        assert_eq!(mapping.sources(), &[VertexId(7), VertexId(3)]);
        assert_eq!(mapping.source_of(1), Some(VertexId(3)));
    }

    #[test]
    fn test_translate() {
        let mut mapping = VertexMapping::new();
        mapping.insert(VertexId(4));
        mapping.insert(VertexId(2));

        assert_eq!(
            mapping.translate(&[VertexId(2), VertexId(4)]),
            Some(vec![1, 0])
        );
        assert_eq!(mapping.translate(&[VertexId(2), VertexId(5)]), None);
    }
}
