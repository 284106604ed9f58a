//! De Bruijn graph contig assembly for short, error-containing reads.
//!
//! Reads are cut into k-mers, each k-mer becomes an edge between its
//! (k-1)-mer prefix and suffix, and contigs are grown from every vertex with
//! no incoming edge by chaining overlapping reads. Near-identical overlaps
//! left by sequencing errors are bridged with a Hamming-similarity fallback.

pub mod graph;
pub mod io;
pub mod kmer;
pub mod pipeline;
pub mod reads;
pub mod stats;
