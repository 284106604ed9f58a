//! Read/reference loading and contig output

pub mod reads;
pub mod writer;

pub use reads::{load_reads, load_reference, open_input, LoadReport};
pub use writer::{write_contigs, write_edges, write_lines, SequenceWriter};
