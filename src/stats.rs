use serde::Serialize;

use crate::graph::assembler::Contig;

/// Summary of one assembly run.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AssemblyStats {
    pub k: usize,
    pub reads_loaded: usize,
    pub duplicate_reads: usize,
    pub reads_shorter_than_k: usize,
    pub vertices: usize,
    pub edges: usize,
    pub heads: usize,
    /// Vertices no head reaches; they can never appear in a contig.
    pub unreachable_vertices: usize,
    pub contigs: usize,
    pub reads_consumed: usize,
    pub fuzzy_extensions: usize,
    pub truncated_walks: usize,
    pub total_length: usize,
    pub average_length: f64,
    pub n50: usize,
    pub largest: usize,
}

impl AssemblyStats {
    /// Fills the contig-derived fields.
    pub fn record_contigs(&mut self, contigs: &[Contig]) {
        let lengths: Vec<usize> = contigs.iter().map(Contig::len).collect();
        self.contigs = contigs.len();
        self.total_length = lengths.iter().sum();
        self.average_length = if lengths.is_empty() {
            0.0
        } else {
            self.total_length as f64 / lengths.len() as f64
        };
        self.n50 = n50(&lengths);
        self.largest = lengths.iter().copied().max().unwrap_or(0);
        self.reads_consumed = contigs.iter().map(|c| c.read_path.len()).sum();
        self.fuzzy_extensions = contigs.iter().map(|c| c.fuzzy_extensions).sum();
        self.truncated_walks = contigs.iter().filter(|c| c.truncated).count();
    }
}

impl std::fmt::Display for AssemblyStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "=== Assembly Statistics ===")?;
        writeln!(f, "k: {}", self.k)?;
        writeln!(
            f,
            "Reads: {} distinct ({} duplicates collapsed)",
            self.reads_loaded, self.duplicate_reads
        )?;
        writeln!(
            f,
            "Graph: {} vertices, {} edges, {} heads",
            self.vertices, self.edges, self.heads
        )?;
        if self.unreachable_vertices > 0 {
            writeln!(
                f,
                "Unreachable from any head: {} vertices",
                self.unreachable_vertices
            )?;
        }
        writeln!(f, "Contigs: {}", self.contigs)?;
        writeln!(
            f,
            "Reads consumed: {} ({} via fuzzy overlap)",
            self.reads_consumed, self.fuzzy_extensions
        )?;
        if self.truncated_walks > 0 {
            writeln!(f, "Walks stopped at limit: {}", self.truncated_walks)?;
        }
        writeln!(f, "Total length: {} bp", self.total_length)?;
        writeln!(f, "Average length: {:.2} bp", self.average_length)?;
        writeln!(f, "N50: {} bp", self.n50)?;
        writeln!(f, "Largest: {} bp", self.largest)?;
        Ok(())
    }
}

/// Length `L` such that contigs of length >= `L` hold at least half the bases.
pub fn n50(lengths: &[usize]) -> usize {
    let mut sorted = lengths.to_vec();
    sorted.sort_unstable();
    let total: usize = sorted.iter().sum();

    let mut acc = 0;
    let half_total = total / 2;
    sorted.iter().rev().find(|&&len| {
        acc += len;
        acc >= half_total
    }).copied().unwrap_or(0)
}
