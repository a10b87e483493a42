//! Command-line entry point: renders the scissors icon and writes the ICO file.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use snip_icon::{IconRenderer, RenderConfig};

/// Renders the multi-resolution scissors icon into a single ICO file.
#[derive(Parser, Debug)]
#[command(name = "snip-icon", version, about)]
struct Args {
    /// Path of the ICO file to write.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Comma-separated pixel sizes to embed, smallest first.
    #[arg(short, long, value_delimiter = ',')]
    sizes: Option<Vec<u32>>,

    /// Read the full configuration from a JSON file instead.
    #[arg(short, long, conflicts_with_all = ["output", "sizes"])]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    match run(args) {
        Ok(path) => {
            println!("Icon saved: {}", path.display());
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

/// Maps `-v` counts to a filter level; `RUST_LOG` still takes precedence.
fn verbosity_level(verbose: u8) -> log::LevelFilter {
    match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    }
}

fn init_logging(verbose: u8) {
    env_logger::Builder::new()
        .filter_level(verbosity_level(verbose))
        .parse_default_env()
        .init();
}

fn run(args: Args) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let mut config = match args.config {
        Some(path) => RenderConfig::from_json(&std::fs::read_to_string(path)?)?,
        None => RenderConfig::default(),
    };
    if let Some(sizes) = args.sizes {
        config.sizes = sizes;
    }
    if let Some(output) = args.output {
        config.output = output;
    }

    let path = config.output.clone();
    IconRenderer::with_config(config)?.save()?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn args_are_well_formed() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }

    #[test]
    fn verbose_flag_counts() {
        let args = Args::try_parse_from(["snip-icon", "-vv"]).unwrap();
        assert_eq!(args.verbose, 2);

        let args = Args::try_parse_from(["snip-icon", "--verbose"]).unwrap();
        assert_eq!(args.verbose, 1);
    }

    #[test]
    fn verbosity_maps_to_filter_levels() {
        assert_eq!(verbosity_level(0), log::LevelFilter::Warn);
        assert_eq!(verbosity_level(1), log::LevelFilter::Info);
        assert_eq!(verbosity_level(2), log::LevelFilter::Debug);
        assert_eq!(verbosity_level(5), log::LevelFilter::Trace);
    }
}
