mod progress;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use filesplit::{SplitMode, SplitRequest, Splitter, SplitterConfig};
use log::info;
use std::path::PathBuf;

use progress::BarProgress;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Mode {
    /// NUMBER is the count of output files
    File,
    /// NUMBER is the count of lines per output file
    Line,
}

impl From<Mode> for SplitMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::File => SplitMode::ByFileCount,
            Mode::Line => SplitMode::ByLineCount,
        }
    }
}

/// Split a text file into numbered chunk files
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// How NUMBER is interpreted
    #[arg(value_enum)]
    mode: Mode,

    /// Number of output files, or lines per file
    #[arg(short = 'N', long, value_parser = clap::value_parser!(u64).range(1..))]
    number: u64,

    /// Path to the file to split
    #[arg(short = 'F', long)]
    file: PathBuf,

    /// YAML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory in which the output directory is created
    #[arg(short, long)]
    output_root: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = SplitterConfig::load_or_default(cli.config.as_deref())
        .context("Failed to load config")?;
    if let Some(root) = cli.output_root {
        config.output_root = root;
    }

    let number = usize::try_from(cli.number).context("NUMBER does not fit in memory")?;
    let request = SplitRequest::new(cli.mode.into(), cli.file, number);
    info!("Splitting {:?} ({:?}, {})", request.input, request.mode, number);

    let summary = Splitter::new(config)
        .run(request, &mut BarProgress::stderr())
        .context("Split failed")?;

    match summary.output_dir {
        Some(dir) => println!(
            "Done. Wrote {} files from {} lines to {}",
            summary.files_written,
            summary.total_lines,
            dir.display()
        ),
        None => println!("Done. Input is empty, nothing written."),
    }

    Ok(())
}
