use std::io::BufReader;
use std::path::PathBuf;

use clap::Parser;
use log::info;
use tracing_subscriber::EnvFilter;

use wallet::input::{NoteReader, parse_notes};

// The wallet the exercise was originally posed with.
const SAMPLE_WALLET: [u64; 9] = [100, 200, 200, 500, 100, 100, 500, 100, 100];

#[derive(Parser, Debug)]
#[clap(name = "wallet")]
#[command(about = "Minimum note moves to group a wallet by denomination", long_about = None)]
struct Cli {
    /// File with the note values; stdin is read when omitted.
    file: Option<PathBuf>,
    /// Note values given inline, e.g. `-n 100,200,100`.
    #[arg(short = 'n', long, num_args = 1.., conflicts_with = "file")]
    notes: Option<Vec<String>>,
    /// Solve the built-in sample wallet.
    #[arg(long, conflicts_with_all = ["file", "notes"])]
    demo: bool,
}

fn main() -> anyhow::Result<()> {
    // install global collector configured based on RUST_LOG env var.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Cli::parse();

    let values = if args.demo {
        SAMPLE_WALLET.to_vec()
    } else if let Some(notes) = args.notes {
        parse_notes(&notes.join(" "))?
    } else if let Some(path) = args.file {
        NoteReader::open(&path)?.read_notes()?
    } else {
        NoteReader::new(BufReader::new(std::io::stdin())).read_notes()?
    };

    info!("loaded {} notes", values.len());
    let moves = wallet::solve(&values)?;
    println!("{}", moves);
    Ok(())
}
