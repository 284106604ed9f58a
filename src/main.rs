mod cli_main;

use std::time::{Duration, Instant};

use clap::Parser;
use cli_main::{Cli, Commands};
use kontig::pipeline::{
    assemble_reads, simulate_file, AssemblyConfig, AssemblyOutputs, SimulationConfig,
};
use tracing::info;
use tracing_subscriber::FmtSubscriber;

fn main() {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => tracing::Level::INFO,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to install logger: {}", e);
    }

    let start = Instant::now();
    let result = match cli.command {
        Commands::Assemble {
            input,
            output,
            k,
            edges,
            stats_json,
            strategy,
            no_fuzzy,
            max_extensions,
            time_limit_secs,
        } => {
            let config = AssemblyConfig {
                k,
                strategy: strategy.into(),
                fuzzy: !no_fuzzy,
                max_extensions,
                time_limit: time_limit_secs.map(Duration::from_secs),
            };
            let outputs = AssemblyOutputs {
                contigs: output,
                edges,
                stats_json,
            };
            assemble_reads(&input, &outputs, &config).map(|stats| {
                println!("{}", stats);
                info!("Assembly completed in {:.2}s", start.elapsed().as_secs_f32());
            })
        }

        Commands::Simulate {
            reference,
            output,
            coverage,
            read_length,
            error_rate,
            seed,
        } => {
            let config = SimulationConfig {
                coverage,
                read_length,
                error_rate,
                seed,
            };
            simulate_file(&reference, &output, &config).map(|count| {
                info!("Simulated {} reads in {:.2}s", count, start.elapsed().as_secs_f32());
            })
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
