//! K-mer extraction and de Bruijn edge decomposition

pub mod kmer;

pub use kmer::{decompose, extract_kmers, read_edges, KmerEdge};
