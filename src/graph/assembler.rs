// src/graph/assembler.rs
use petgraph::graph::NodeIndex;
use tracing::{debug, warn};

use crate::graph::debruijn::DeBruijnGraph;
use crate::graph::strategy::ExtensionStrategy;
use crate::graph::walker::{ContigWalker, WalkOptions};
use crate::reads::{ReadId, ReadRegistry};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contig {
    pub id: usize,
    pub sequence: String,
    /// Label of the head vertex the walk started from.
    pub head: String,
    /// Reads consumed by this contig, in order.
    pub read_path: Vec<ReadId>,
    pub fuzzy_extensions: usize,
    pub truncated: bool,
}

impl Contig {
    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }
}

/// Walks every head in order against one shared registry.
///
/// Reads consumed by an earlier head are invisible to later ones. Walks that
/// produce no text are dropped, so contig ids are dense. Once the deadline in
/// `options` has passed, remaining heads are skipped.
pub fn assemble_contigs<S: ExtensionStrategy>(
    graph: &DeBruijnGraph,
    heads: &[NodeIndex],
    registry: &mut ReadRegistry,
    strategy: &S,
    options: WalkOptions,
) -> Vec<Contig> {
    let mut contigs = Vec::new();

    for (i, &head) in heads.iter().enumerate() {
        if options
            .deadline
            .is_some_and(|d| std::time::Instant::now() >= d)
        {
            warn!(
                "Time limit reached; skipping {} remaining heads",
                heads.len() - i
            );
            break;
        }

        let walk = ContigWalker::new(graph, registry, strategy, head, options).run();
        if walk.sequence.is_empty() {
            continue;
        }

        let contig = Contig {
            id: contigs.len(),
            sequence: walk.sequence,
            head: graph.label(head).unwrap_or_default().to_string(),
            read_path: walk.reads,
            fuzzy_extensions: walk.fuzzy_extensions,
            truncated: walk.truncated,
        };
        debug!(
            "contig_{}: {} bp from {} reads (head {})",
            contig.id,
            contig.len(),
            contig.read_path.len(),
            contig.head
        );
        if contig.truncated {
            warn!("contig_{} stopped at the walk limit", contig.id);
        }
        contigs.push(contig);
    }

    contigs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::heads::find_heads;
    use crate::graph::strategy::FirstMatch;

    fn assemble(k: usize, reads: &[&str]) -> (Vec<Contig>, ReadRegistry) {
        let mut registry = ReadRegistry::from_reads(reads.iter().copied());
        let graph = DeBruijnGraph::build(k, &registry).unwrap();
        let heads = find_heads(&graph);
        let contigs = assemble_contigs(
            &graph,
            &heads,
            &mut registry,
            &FirstMatch,
            WalkOptions::default(),
        );
        (contigs, registry)
    }

    #[test]
    fn test_cycle_emits_nothing() {
        let (contigs, registry) = assemble(3, &["ACGTAC"]);
        assert!(contigs.is_empty());
        assert_eq!(registry.unvisited_count(), 1);
    }

    #[test]
    fn test_two_reads_one_contig() {
        let (contigs, registry) = assemble(3, &["ACGT", "CGTA"]);
        assert_eq!(contigs.len(), 1);
        assert_eq!(contigs[0].sequence, "ACGTA");
        assert_eq!(contigs[0].head, "AC");
        assert_eq!(contigs[0].read_path, vec![0, 1]);
        assert_eq!(registry.unvisited_count(), 0);
    }

    #[test]
    fn test_reads_are_consumed_once() {
        let (contigs, _) = assemble(3, &["ACGT", "TCGT", "CGTA", "GTAA"]);
        let mut seen: Vec<ReadId> = contigs.iter().flat_map(|c| c.read_path.clone()).collect();
        let total = seen.len();
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), total);
        assert!(contigs.iter().enumerate().all(|(i, c)| c.id == i));
    }

    #[test]
    fn test_expired_deadline_skips_all_heads() {
        let mut registry = ReadRegistry::from_reads(["ACGT", "CGTA"]);
        let graph = DeBruijnGraph::build(3, &registry).unwrap();
        let heads = find_heads(&graph);
        let options = WalkOptions {
            deadline: Some(std::time::Instant::now()),
            ..WalkOptions::default()
        };
        let contigs = assemble_contigs(&graph, &heads, &mut registry, &FirstMatch, options);
        assert!(contigs.is_empty());
        assert_eq!(registry.unvisited_count(), 2);
    }
}
