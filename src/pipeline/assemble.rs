use std::fs::File;
use std::io;
use std::time::{Duration, Instant};

use tracing::{info, warn};

use crate::graph::assembler::{assemble_contigs, Contig};
use crate::graph::debruijn::DeBruijnGraph;
use crate::graph::heads::{find_heads, unreachable_vertices};
use crate::graph::strategy::StrategyKind;
use crate::graph::walker::WalkOptions;
use crate::io::reads::load_reads;
use crate::io::writer::{write_contigs, write_edges};
use crate::reads::ReadRegistry;
use crate::stats::AssemblyStats;

/// Configuration for an assembly run
#[derive(Clone, Debug)]
pub struct AssemblyConfig {
    /// K-mer length; vertices are (k-1)-mers
    pub k: usize,
    /// How to pick among reads that extend a contig equally well
    pub strategy: StrategyKind,
    /// Fall back to near-identical vertices when no exact overlap exists
    pub fuzzy: bool,
    /// Cap on extension steps per walk
    pub max_extensions: Option<usize>,
    /// Wall-clock budget for the walking phase
    pub time_limit: Option<Duration>,
}

impl Default for AssemblyConfig {
    fn default() -> Self {
        Self {
            k: 15,
            strategy: StrategyKind::FirstMatch,
            fuzzy: true,
            max_extensions: None,
            time_limit: None,
        }
    }
}

impl AssemblyConfig {
    pub fn validate(&self) -> io::Result<()> {
        if self.k < 2 {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("k-mer length must be at least 2, got {}", self.k),
            ));
        }
        Ok(())
    }

    fn walk_options(&self, start: Instant) -> WalkOptions {
        WalkOptions {
            fuzzy: self.fuzzy,
            max_extensions: self.max_extensions,
            deadline: self.time_limit.map(|limit| start + limit),
        }
    }
}

/// Where an assembly run writes its results
#[derive(Clone, Debug, Default)]
pub struct AssemblyOutputs {
    pub contigs: String,
    /// Optional `source -> destination` edge listing
    pub edges: Option<String>,
    /// Optional statistics as pretty JSON
    pub stats_json: Option<String>,
}

/// Graph, contigs and statistics of one in-memory run
#[derive(Debug, Clone)]
pub struct Assembly {
    pub graph: DeBruijnGraph,
    pub contigs: Vec<Contig>,
    pub stats: AssemblyStats,
}

/// Builds the graph over every read in `registry` and walks each head.
///
/// Consumed reads are marked visited in `registry`, so the caller can
/// inspect which reads ended up in no contig.
pub fn assemble(registry: &mut ReadRegistry, config: &AssemblyConfig) -> io::Result<Assembly> {
    config.validate()?;
    let k = config.k;

    let graph = DeBruijnGraph::build(k, registry)?;
    let heads = find_heads(&graph);
    let unreachable = unreachable_vertices(&graph, &heads);
    info!(
        "Graph: {} vertices, {} edges, {} heads",
        graph.vertex_count(),
        graph.edge_count(),
        heads.len()
    );
    if heads.is_empty() && graph.vertex_count() > 0 {
        warn!("Graph has no vertex without incoming edges; no contigs can be formed");
    } else if unreachable > 0 {
        warn!(
            "{} vertices are unreachable from any head and will not be assembled",
            unreachable
        );
    }

    let options = config.walk_options(Instant::now());
    let contigs = assemble_contigs(&graph, &heads, registry, &config.strategy, options);

    let mut stats = AssemblyStats {
        k,
        reads_loaded: registry.len(),
        reads_shorter_than_k: registry.iter().filter(|(_, r)| r.len() < k).count(),
        vertices: graph.vertex_count(),
        edges: graph.edge_count(),
        heads: heads.len(),
        unreachable_vertices: unreachable,
        ..AssemblyStats::default()
    };
    stats.record_contigs(&contigs);
    info!(
        "Assembled {} contigs from {} of {} reads",
        stats.contigs, stats.reads_consumed, stats.reads_loaded
    );

    Ok(Assembly {
        graph,
        contigs,
        stats,
    })
}

/// Loads reads from `input`, assembles them and writes the outputs.
///
/// Input errors abort before any graph is built.
pub fn assemble_reads(
    input: &str,
    outputs: &AssemblyOutputs,
    config: &AssemblyConfig,
) -> io::Result<AssemblyStats> {
    config.validate()?;
    info!("Starting assembly from: {} (k={})", input, config.k);

    let (mut registry, report) = load_reads(input)?;
    let mut assembly = assemble(&mut registry, config)?;
    assembly.stats.duplicate_reads = report.duplicates;

    write_contigs(&outputs.contigs, &assembly.contigs)?;
    info!("Wrote {} contigs to {}", assembly.contigs.len(), outputs.contigs);

    if let Some(path) = &outputs.edges {
        write_edges(path, &assembly.graph)?;
        info!("Wrote {} edges to {}", assembly.graph.edge_count(), path);
    }

    if let Some(path) = &outputs.stats_json {
        let file = File::create(path)?;
        serde_json::to_writer_pretty(file, &assembly.stats)?;
        info!("Wrote assembly statistics to {}", path);
    }

    Ok(assembly.stats)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_k_below_two() {
        let mut registry = ReadRegistry::from_reads(["ACGT"]);
        let config = AssemblyConfig { k: 1, ..AssemblyConfig::default() };
        let err = assemble(&mut registry, &config).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    }

    #[test]
    fn test_non_ascii_read_is_invalid_input() {
        let mut registry = ReadRegistry::from_reads(["ACGÜTAC"]);
        let config = AssemblyConfig { k: 3, ..AssemblyConfig::default() };
        let err = assemble(&mut registry, &config).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
        assert!(registry.is_unvisited(0));
    }

    #[test]
    fn test_assemble_in_memory() {
        let mut registry = ReadRegistry::from_reads(["ACGT", "CGTA", "AC"]);
        let config = AssemblyConfig { k: 3, ..AssemblyConfig::default() };
        let assembly = assemble(&mut registry, &config).unwrap();

        assert_eq!(assembly.contigs.len(), 1);
        assert_eq!(assembly.contigs[0].sequence, "ACGTA");
        assert_eq!(assembly.stats.reads_loaded, 3);
        assert_eq!(assembly.stats.reads_shorter_than_k, 1);
        assert_eq!(assembly.stats.heads, 1);
        assert_eq!(assembly.stats.reads_consumed, 2);
        // the short read is never part of the graph
        assert!(registry.is_unvisited(2));
    }

    #[test]
    fn test_cycle_is_a_valid_empty_result() {
        let mut registry = ReadRegistry::from_reads(["ACGTAC"]);
        let config = AssemblyConfig { k: 3, ..AssemblyConfig::default() };
        let assembly = assemble(&mut registry, &config).unwrap();
        assert!(assembly.contigs.is_empty());
        assert_eq!(assembly.stats.heads, 0);
        assert_eq!(assembly.stats.unreachable_vertices, 4);
    }

    #[test]
    fn test_missing_input_fails_fast() {
        let outputs = AssemblyOutputs {
            contigs: "/nonexistent/contigs.txt".to_string(),
            ..AssemblyOutputs::default()
        };
        let err = assemble_reads("/nonexistent/reads.txt", &outputs, &AssemblyConfig::default())
            .unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
