//! De Bruijn graph construction and contig walking

pub mod assembler;
pub mod debruijn;
pub mod heads;
pub mod overlap;
pub mod strategy;
pub mod walker;

pub use assembler::{assemble_contigs, Contig};
pub use debruijn::{DeBruijnGraph, Vertex};
pub use heads::{find_heads, unreachable_vertices};
pub use strategy::{ExtensionStrategy, FirstMatch, LongestOverlap, StrategyKind};
pub use walker::{ContigWalker, Walk, WalkOptions, WalkState};
