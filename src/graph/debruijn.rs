// src/graph/debruijn.rs
use std::hash::{Hash, Hasher};
use std::io;

use ahash::AHashMap;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use tracing::debug;

use crate::kmer::{read_edges, KmerEdge};
use crate::reads::{ReadId, ReadRegistry};

/// One distinct (k-1)-mer and the reads known to contain it.
///
/// Equality and hashing use the label only.
#[derive(Debug, Clone)]
pub struct Vertex {
    label: String,
    reads: Vec<ReadId>,
}

impl Vertex {
    fn new(label: &str) -> Self {
        Self {
            label: label.to_string(),
            reads: Vec::new(),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Reads in the order they first touched this vertex.
    pub fn reads(&self) -> &[ReadId] {
        &self.reads
    }

    fn add_read(&mut self, read: ReadId) {
        if !self.reads.contains(&read) {
            self.reads.push(read);
        }
    }
}

impl PartialEq for Vertex {
    fn eq(&self, other: &Self) -> bool {
        self.label == other.label
    }
}

impl Eq for Vertex {}

impl Hash for Vertex {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.label.hash(state);
    }
}

/// De Bruijn graph over (k-1)-mers.
///
/// Vertices live in a petgraph arena and are found through `index`, keyed by
/// label, so the same (k-1)-mer always resolves to the same node. The graph is
/// only ever grown: nothing is removed once inserted.
#[derive(Debug, Clone)]
pub struct DeBruijnGraph {
    k: usize,
    graph: DiGraph<Vertex, ()>,
    index: AHashMap<String, NodeIndex>,
    in_degree: Vec<usize>,
}

impl DeBruijnGraph {
    pub fn new(k: usize) -> io::Result<Self> {
        if k < 2 {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("k-mer length must be at least 2, got {}", k),
            ));
        }
        Ok(Self {
            k,
            graph: DiGraph::new(),
            index: AHashMap::new(),
            in_degree: Vec::new(),
        })
    }

    /// Builds the graph from every read in the registry, in registry order.
    /// Reads shorter than `k` contribute nothing; a non-ASCII read is an
    /// `InvalidInput` error.
    pub fn build(k: usize, registry: &ReadRegistry) -> io::Result<Self> {
        let mut dbg = Self::new(k)?;
        if let Some((id, _)) = registry.iter().find(|(_, read)| !read.is_ascii()) {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("read {} contains non-ASCII characters", id),
            ));
        }
        for (id, read) in registry.iter() {
            dbg.add_read(id, read);
        }
        debug!(
            "Built de Bruijn graph: {} vertices, {} edges (k={})",
            dbg.vertex_count(),
            dbg.edge_count(),
            k
        );
        Ok(dbg)
    }

    pub fn add_read(&mut self, id: ReadId, read: &str) {
        for edge in read_edges(read, self.k) {
            self.insert_edge(edge, id);
        }
    }

    /// Inserts `prefix -> suffix` for one k-mer occurrence of `read`.
    /// The prefix vertex is resolved first; repeated edges collapse.
    pub fn insert_edge(&mut self, edge: KmerEdge<'_>, read: ReadId) {
        let left = self.vertex_or_insert(edge.prefix);
        self.graph[left].add_read(read);
        let right = self.vertex_or_insert(edge.suffix);
        self.graph[right].add_read(read);

        if self.graph.find_edge(left, right).is_none() {
            self.graph.add_edge(left, right, ());
            self.in_degree[right.index()] += 1;
        }
    }

    fn vertex_or_insert(&mut self, label: &str) -> NodeIndex {
        if let Some(&node) = self.index.get(label) {
            return node;
        }
        let node = self.graph.add_node(Vertex::new(label));
        self.index.insert(label.to_string(), node);
        self.in_degree.push(0);
        node
    }

    pub fn k(&self) -> usize {
        self.k
    }

    pub fn lookup(&self, label: &str) -> Option<NodeIndex> {
        self.index.get(label).copied()
    }

    pub fn vertex(&self, node: NodeIndex) -> Option<&Vertex> {
        self.graph.node_weight(node)
    }

    pub fn label(&self, node: NodeIndex) -> Option<&str> {
        self.vertex(node).map(Vertex::label)
    }

    /// Vertices in insertion order.
    pub fn vertices(&self) -> impl Iterator<Item = (NodeIndex, &Vertex)> {
        self.graph
            .node_indices()
            .map(move |node| (node, &self.graph[node]))
    }

    pub fn in_degree(&self, node: NodeIndex) -> usize {
        self.in_degree.get(node.index()).copied().unwrap_or(0)
    }

    pub fn has_edge(&self, from: &str, to: &str) -> bool {
        match (self.lookup(from), self.lookup(to)) {
            (Some(a), Some(b)) => self.graph.find_edge(a, b).is_some(),
            _ => false,
        }
    }

    /// Distinct `(source, destination)` label pairs, grouped by source in
    /// vertex insertion order.
    pub fn edges(&self) -> Vec<(&str, &str)> {
        let mut listing = Vec::with_capacity(self.graph.edge_count());
        for node in self.graph.node_indices() {
            let mut out: Vec<_> = self.graph.edges(node).collect();
            // petgraph yields the newest edge first
            out.sort_by_key(|e| e.id());
            for e in out {
                listing.push((
                    self.graph[e.source()].label(),
                    self.graph[e.target()].label(),
                ));
            }
        }
        listing
    }

    pub fn vertex_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub(crate) fn inner(&self) -> &DiGraph<Vertex, ()> {
        &self.graph
    }
}
