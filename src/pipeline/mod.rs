//! Pipeline module - assembly and read simulation

pub mod assemble;
pub mod simulate;

pub use assemble::{assemble, assemble_reads, Assembly, AssemblyConfig, AssemblyOutputs};
pub use simulate::{simulate_file, simulate_reads, SimulationConfig};
