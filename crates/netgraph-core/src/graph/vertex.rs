//! Vertex and arc entities.

use std::fmt;

/// A network vertex: a label plus its typed annotations.
///
/// Annotations are initialized when the vertex is registered with a
/// [`Graph`](crate::graph::Graph) and only the store updates them.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Vertex {
    label: String,
    undirected_degree: usize,
}

impl Vertex {
    pub(crate) fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            undirected_degree: 0,
        }
    }

    /// The vertex identity.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Number of reciprocal (two-way) edges incident to this vertex.
    #[must_use]
    pub const fn undirected_degree(&self) -> usize {
        self.undirected_degree
    }

    pub(crate) const fn increment_undirected_degree(&mut self) {
        self.undirected_degree += 1;
    }

    pub(crate) const fn decrement_undirected_degree(&mut self) {
        self.undirected_degree = self.undirected_degree.saturating_sub(1);
    }
}

impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

/// A read-only view of one directed arc `start → end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Arc<'g> {
    start: &'g Vertex,
    end: &'g Vertex,
    data: Option<&'g str>,
}

impl<'g> Arc<'g> {
    pub(crate) const fn new(start: &'g Vertex, end: &'g Vertex, data: Option<&'g str>) -> Self {
        Self { start, end, data }
    }

    #[must_use]
    pub const fn start(&self) -> &'g Vertex {
        self.start
    }

    #[must_use]
    pub const fn end(&self) -> &'g Vertex {
        self.end
    }

    /// Edge payload (the label attached by the producer), if any.
    #[must_use]
    pub const fn data(&self) -> Option<&'g str> {
        self.data
    }
}
