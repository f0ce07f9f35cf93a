use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use tracing::{info, Level};

use poslog::{create_logs, load_params, Source};

/// Resample raw position logs to a fixed frequency and write CSV + binary outputs.
#[derive(Debug, Parser)]
#[command(name = "poslog-format", version, about)]
struct Cli {
    /// specify config file
    #[arg(short = 'c', long = "conf_file", value_name = "PATH_TO_CONF_FILE")]
    conf_file: Option<PathBuf>,

    /// specify source file
    #[arg(long = "src_file", value_name = "PATH_TO_SRC_FILE")]
    src_file: Option<PathBuf>,

    /// specify source directory (glob pattern)
    #[arg(long = "src_dir", value_name = "PATH_TO_SRC_DIR")]
    src_dir: Option<String>,

    /// specify target directory
    #[arg(long = "tgt_dir", value_name = "PATH_TO_TGT_DIR")]
    tgt_dir: Option<PathBuf>,

    /// root holding config/, raw/ and formatted/ (defaults to the current directory)
    #[arg(long, value_name = "PATH_TO_ROOT")]
    root: Option<PathBuf>,

    /// enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::INFO })
        .init();

    let root = match cli.root {
        Some(root) => root,
        None => std::env::current_dir().context("cannot resolve current directory")?,
    };

    let params = load_params(cli.conf_file.as_deref(), &root)?;
    let source = Source::from_args(cli.src_file, cli.src_dir)?;

    let written = create_logs(&source, cli.tgt_dir.as_deref(), &root, &params)?;

    info!("{} file(s) formatted", written.len());

    Ok(())
}
