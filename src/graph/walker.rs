//! Contig construction from a single head vertex.
//!
//! A walk seeds the contig with a read that starts at the head, then keeps
//! appending unvisited reads whose prefix the contig already contains. When
//! no exact continuation exists it retries against every vertex near-identical
//! to the current one, accepting approximate containment. Every consumed
//! read is marked visited in the shared registry.

use std::time::Instant;

use petgraph::graph::NodeIndex;

use crate::graph::debruijn::DeBruijnGraph;
use crate::graph::overlap::{extends_approximately, extends_exactly, is_similar, overlap_cutoff};
use crate::graph::strategy::{Extension, ExtensionStrategy};
use crate::kmer::kmer::trailing_label;
use crate::reads::{ReadId, ReadRegistry};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkState {
    /// No contig text yet.
    Seeding,
    /// The contig ends in `current`'s label; `last_read` was appended last.
    Extending { current: NodeIndex, last_read: ReadId },
    Terminated,
}

#[derive(Debug, Clone, Copy)]
pub struct WalkOptions {
    /// Fall back to near-identical vertices when no exact extension exists.
    pub fuzzy: bool,
    /// Extension steps allowed after the seed.
    pub max_extensions: Option<usize>,
    pub deadline: Option<Instant>,
}

impl Default for WalkOptions {
    fn default() -> Self {
        Self {
            fuzzy: true,
            max_extensions: None,
            deadline: None,
        }
    }
}

/// The result of a finished walk.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Walk {
    pub sequence: String,
    /// Consumed reads in the order they were appended.
    pub reads: Vec<ReadId>,
    pub fuzzy_extensions: usize,
    /// A walk limit stopped the walk while extensions may have remained.
    pub truncated: bool,
}

pub struct ContigWalker<'a, S> {
    graph: &'a DeBruijnGraph,
    registry: &'a mut ReadRegistry,
    strategy: &'a S,
    options: WalkOptions,
    head: NodeIndex,
    state: WalkState,
    walk: Walk,
}

impl<'a, S: ExtensionStrategy> ContigWalker<'a, S> {
    pub fn new(
        graph: &'a DeBruijnGraph,
        registry: &'a mut ReadRegistry,
        strategy: &'a S,
        head: NodeIndex,
        options: WalkOptions,
    ) -> Self {
        Self {
            graph,
            registry,
            strategy,
            options,
            head,
            state: WalkState::Seeding,
            walk: Walk::default(),
        }
    }

    pub fn state(&self) -> WalkState {
        self.state
    }

    pub fn contig(&self) -> &str {
        &self.walk.sequence
    }

    /// Advances the state machine by one transition.
    pub fn step(&mut self) -> WalkState {
        self.state = match self.state {
            WalkState::Seeding => self.seed(),
            WalkState::Extending { current, last_read } => {
                if self.limit_reached() {
                    self.walk.truncated = true;
                    WalkState::Terminated
                } else {
                    self.extend(current, last_read)
                }
            }
            WalkState::Terminated => WalkState::Terminated,
        };
        self.state
    }

    /// Walks until termination.
    pub fn run(mut self) -> Walk {
        while self.step() != WalkState::Terminated {}
        self.walk
    }

    fn limit_reached(&self) -> bool {
        let extensions = self.walk.reads.len().saturating_sub(1);
        if self.options.max_extensions.is_some_and(|max| extensions >= max) {
            return true;
        }
        self.options.deadline.is_some_and(|d| Instant::now() >= d)
    }

    fn seed(&mut self) -> WalkState {
        let graph = self.graph;
        let registry = &*self.registry;
        let head = self.head;
        let Some(vertex) = graph.vertex(head) else {
            return WalkState::Terminated;
        };
        let label = vertex.label();

        let candidates = vertex
            .reads()
            .iter()
            .copied()
            .filter(|&id| registry.is_unvisited(id))
            .filter(|&id| registry.get(id).is_some_and(|read| read.starts_with(label)))
            .map(|read| Extension { read, via: head, cutoff: 0 });

        match self.strategy.choose(candidates) {
            Some(ext) => self.consume(ext, false),
            None => WalkState::Terminated,
        }
    }

    fn extend(&mut self, current: NodeIndex, last_read: ReadId) -> WalkState {
        if let Some(ext) = self.exact_extension(current, last_read) {
            return self.consume(ext, false);
        }
        if self.options.fuzzy {
            if let Some(ext) = self.fuzzy_extension(current) {
                return self.consume(ext, true);
            }
        }
        WalkState::Terminated
    }

    fn exact_extension(&self, current: NodeIndex, last_read: ReadId) -> Option<Extension> {
        let registry = &*self.registry;
        let contig = self.walk.sequence.as_str();
        let vertex = self.graph.vertex(current)?;
        let label = vertex.label();

        let candidates = vertex
            .reads()
            .iter()
            .copied()
            .filter(|&id| id != last_read && registry.is_unvisited(id))
            .filter_map(|id| {
                let read = registry.get(id)?;
                let cutoff = overlap_cutoff(read, label)?;
                extends_exactly(contig, read, cutoff).then_some(Extension {
                    read: id,
                    via: current,
                    cutoff,
                })
            });

        self.strategy.choose(candidates)
    }

    /// Scans every vertex, so one call costs
    /// O(vertices × reads per vertex × contig length × k).
    fn fuzzy_extension(&self, current: NodeIndex) -> Option<Extension> {
        let registry = &*self.registry;
        let contig = self.walk.sequence.as_str();
        let label = self.graph.label(current)?;

        let candidates = self
            .graph
            .vertices()
            .filter(move |(_, v)| is_similar(v.label(), label))
            .flat_map(move |(node, v)| {
                let near = v.label();
                v.reads()
                    .iter()
                    .copied()
                    .filter(move |&id| registry.is_unvisited(id))
                    .filter_map(move |id| {
                        let read = registry.get(id)?;
                        let cutoff = overlap_cutoff(read, near)?;
                        extends_approximately(contig, read, cutoff).then_some(Extension {
                            read: id,
                            via: node,
                            cutoff,
                        })
                    })
            });

        self.strategy.choose(candidates)
    }

    fn consume(&mut self, ext: Extension, fuzzy: bool) -> WalkState {
        let Some(read) = self.registry.get(ext.read) else {
            return WalkState::Terminated;
        };
        let Some(tail) = read.get(ext.cutoff..) else {
            return WalkState::Terminated;
        };
        let next = trailing_label(read, self.graph.k()).and_then(|label| self.graph.lookup(label));

        self.walk.sequence.push_str(tail);
        self.registry.mark_visited(ext.read);
        self.walk.reads.push(ext.read);
        if fuzzy {
            self.walk.fuzzy_extensions += 1;
        }

        match next {
            Some(current) => WalkState::Extending {
                current,
                last_read: ext.read,
            },
            None => WalkState::Terminated,
        }
    }
}
