use clap::{ArgAction, Parser, Subcommand, ValueEnum};

use kontig::graph::StrategyKind;

#[derive(Parser, Debug)]
#[command(name = "kontig", version, about = "De Bruijn graph contig assembler", long_about = None)]
pub struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Assemble reads into contigs
    Assemble {
        /// Input reads, one per line; lines starting with '>' are skipped
        #[arg(short, long)]
        input: String,

        /// Output contigs, one per line
        #[arg(short, long, default_value = "contigs.txt")]
        output: String,

        /// K-mer length (at least 2)
        #[arg(short, long)]
        k: usize,

        /// Also write the de Bruijn edges as `source -> destination`
        #[arg(long)]
        edges: Option<String>,

        /// Write assembly statistics as JSON
        #[arg(long)]
        stats_json: Option<String>,

        /// Rule for choosing among reads that extend a contig
        #[arg(long, value_enum, default_value_t = Strategy::FirstMatch)]
        strategy: Strategy,

        /// Disable the error-tolerant overlap fallback
        #[arg(long)]
        no_fuzzy: bool,

        /// Maximum extension steps per contig
        #[arg(long)]
        max_extensions: Option<usize>,

        /// Wall-clock budget in seconds for contig walking
        #[arg(long)]
        time_limit_secs: Option<u64>,
    },

    /// Simulate error-containing reads from a reference sequence
    Simulate {
        /// Reference sequence; lines starting with '>' are skipped
        #[arg(short, long)]
        reference: String,

        /// Output reads, one per line
        #[arg(short, long, default_value = "reads.txt")]
        output: String,

        /// Expected coverage of each reference position
        #[arg(long, default_value_t = 10.0)]
        coverage: f64,

        /// Read length
        #[arg(long, default_value_t = 100)]
        read_length: usize,

        /// Per-base substitution probability
        #[arg(long, default_value_t = 0.01)]
        error_rate: f64,

        /// RNG seed for reproducible reads
        #[arg(long)]
        seed: Option<u64>,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Strategy {
    /// First eligible read in insertion order
    FirstMatch,
    /// Eligible read with the longest overlap
    LongestOverlap,
}

impl From<Strategy> for StrategyKind {
    fn from(strategy: Strategy) -> Self {
        match strategy {
            Strategy::FirstMatch => StrategyKind::FirstMatch,
            Strategy::LongestOverlap => StrategyKind::LongestOverlap,
        }
    }
}
