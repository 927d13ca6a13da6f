//! NEUT → RooTracker converter CLI

use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod convert;

#[derive(Parser)]
#[command(name = "nrt")]
#[command(about = "Convert NEUT vector files to the flat RooTracker format")]
#[command(version)]
struct Cli {
    /// Diagnostic depth (0-4); never changes behavior
    #[arg(short, long, global = true, default_value = "0")]
    verbosity: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert NEUT events to RooTracker records
    Convert {
        /// Input container file(s), chained in argument order
        #[arg(short, long, required = true, num_args = 1..)]
        input: Vec<PathBuf>,

        /// Output file
        #[arg(short, long, default_value = "vector.ntrac.jsonl")]
        output: PathBuf,

        /// Max entries to read before exiting. Default: all
        #[arg(short = 'n', long)]
        max_events: Option<u64>,

        /// Use GeV rather than the NEUT-native MeV
        #[arg(short = 'G', long)]
        gev: bool,

        /// Lite mode: a much smaller output schema, fewer variables
        #[arg(short = 'L', long)]
        lite: bool,

        /// Emulate the NuWro flavor of RooTracker
        #[arg(short = 'E', long)]
        emulate_nuwro: bool,

        /// Don't save non-final-state particles
        #[arg(short = 'S', long)]
        skip_non_fs: bool,

        /// Output the IsBound scalar
        #[arg(short = 'b', long)]
        save_isbound: bool,

        /// Comma-separated interaction modes to ignore, e.g. "1,2,27"
        #[arg(short = 'I', long)]
        ignore_modes: Option<String>,
    },
}

fn level_for(verbosity: u8) -> tracing::Level {
    match verbosity {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    }
}

/// Distinct exit code per fatal cause, so automation can tell "no input"
/// from "bad output path" from "bad data".
fn exit_code(err: &anyhow::Error) -> i32 {
    for cause in err.chain() {
        if let Some(e) = cause.downcast_ref::<nrt_core::Error>() {
            return match e {
                nrt_core::Error::NoInputFiles(_) => 2,
                nrt_core::Error::NoEntries => 4,
                nrt_core::Error::Output { .. } => 8,
                nrt_core::Error::MalformedEvent { .. }
                | nrt_core::Error::CapacityExceeded { .. } => 16,
                _ => 1,
            };
        }
    }
    1
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(level_for(cli.verbosity))
        .with_target(false)
        .init();

    let result = match cli.command {
        Commands::Convert {
            input,
            output,
            max_events,
            gev,
            lite,
            emulate_nuwro,
            skip_non_fs,
            save_isbound,
            ignore_modes,
        } => convert::cmd_convert(
            &input,
            &output,
            max_events,
            gev,
            lite,
            emulate_nuwro,
            skip_non_fs,
            save_isbound,
            ignore_modes.as_deref(),
        ),
    };

    if let Err(err) = result {
        eprintln!("error: {err:#}");
        std::process::exit(exit_code(&err));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_distinguish_fatal_causes() {
        let no_input = anyhow::Error::new(nrt_core::Error::NoInputFiles("x".into()));
        assert_eq!(exit_code(&no_input), 2);
        // Context wrapping must not hide the cause.
        assert_eq!(exit_code(&no_input.context("while opening the chain")), 2);

        assert_eq!(exit_code(&anyhow::Error::new(nrt_core::Error::NoEntries)), 4);
        assert_eq!(
            exit_code(&anyhow::Error::new(nrt_core::Error::Output {
                path: "/bad/path".into(),
                source: std::io::Error::other("denied"),
            })),
            8
        );
        assert_eq!(
            exit_code(&anyhow::Error::new(nrt_core::Error::MalformedEvent { n_particles: 1 })),
            16
        );
        assert_eq!(exit_code(&anyhow::anyhow!("anything else")), 1);
    }

    #[test]
    fn verbosity_maps_onto_levels() {
        assert_eq!(level_for(0), tracing::Level::WARN);
        assert_eq!(level_for(1), tracing::Level::INFO);
        assert_eq!(level_for(2), tracing::Level::DEBUG);
        assert_eq!(level_for(3), tracing::Level::TRACE);
        assert_eq!(level_for(4), tracing::Level::TRACE);
    }
}
