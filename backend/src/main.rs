//! CineTune data CLI - Convert CSV datasets to front-end JSON
//!
//! ```bash
//! cinetune-data movies                      # movies.csv → movies_real.json
//! cinetune-data music -i tracks.csv         # custom input
//! cinetune-data all                         # both pipelines
//! cinetune-data parse input.csv             # dump raw rows as JSON
//! ```
//!
//! Default paths can be overridden with `CINETUNE_MOVIES_CSV`,
//! `CINETUNE_MOVIES_JSON`, `CINETUNE_MUSIC_CSV` and `CINETUNE_MUSIC_JSON`
//! (a `.env` file is honored).

use clap::{Args, Parser, Subcommand};
use cinetune_data::{
    rows_to_json, run, Dataset, Movies, Music, PipelineConfig, PipelineError, RowReader,
};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "cinetune-data")]
#[command(about = "Convert movie and music CSV datasets to JSON", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert the movie dataset
    Movies(PathArgs),

    /// Convert the music dataset
    Music(PathArgs),

    /// Convert both datasets using the configured paths
    All,

    /// Parse a CSV file and output its rows as JSON
    Parse {
        /// Input CSV file
        input: PathBuf,

        /// CSV delimiter (auto-detect if not specified)
        #[arg(short, long)]
        delimiter: Option<char>,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Args)]
struct PathArgs {
    /// Input CSV file
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Output JSON file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// CSV delimiter (auto-detect if not specified)
    #[arg(short, long)]
    delimiter: Option<char>,
}

fn main() {
    // Load .env file (if present)
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Movies(args) => cmd_convert::<Movies>(PipelineConfig::movies(), args),
        Commands::Music(args) => cmd_convert::<Music>(PipelineConfig::music(), args),
        Commands::All => cmd_all(),
        Commands::Parse {
            input,
            delimiter,
            output,
        } => cmd_parse(&input, delimiter, output.as_deref()),
    };

    if let Err(e) = result {
        // Pipeline failures are already on the log
        if !e.is::<PipelineError>() {
            eprintln!("❌ Error: {}", e);
        }
        std::process::exit(1);
    }
}

fn cmd_convert<D: Dataset>(
    defaults: PipelineConfig,
    args: PathArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = defaults.with_overrides(args.input, args.output, args.delimiter);
    run::<D>(&config)?;
    Ok(())
}

fn cmd_all() -> Result<(), Box<dyn std::error::Error>> {
    run::<Movies>(&PipelineConfig::movies())?;
    run::<Music>(&PipelineConfig::music())?;
    eprintln!("\n✨ Done!");
    Ok(())
}

fn cmd_parse(
    input: &Path,
    delimiter: Option<char>,
    output: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    eprintln!("📄 Parsing CSV: {}", input.display());

    let reader = RowReader::open(input, delimiter)?;
    let info = reader.info().clone();
    eprintln!("   Encoding: {}", info.encoding);
    eprintln!(
        "   Delimiter: '{}'{}",
        format_delimiter(info.delimiter),
        if delimiter.is_none() { " (auto-detected)" } else { "" }
    );
    eprintln!("   Columns: {}", info.headers.join(", "));

    let rows = rows_to_json(reader);
    eprintln!("✅ Parsed {} records", rows.len());

    let json = serde_json::to_string_pretty(&rows)?;
    write_output(&json, output)?;

    Ok(())
}

fn format_delimiter(d: char) -> String {
    match d {
        '\t' => "\\t".to_string(),
        c => c.to_string(),
    }
}

fn write_output(content: &str, path: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    match path {
        Some(p) => {
            fs::write(p, content)?;
            eprintln!("💾 Output written to: {}", p.display());
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
