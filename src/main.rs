use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use word_neighbours::model::ModelFormat;
use word_neighbours::pipeline;

/// Collect nearest neighbours for every word in a word vector model.
///
/// Ranks every vocabulary word against every other by cosine similarity
/// and writes one `word<TAB>neighbour<TAB>similarity` line per pair — the
/// input relation for Chinese Whispers graph clustering.
#[derive(Parser)]
#[command(name = "word-neighbours", version, about)]
struct Cli {
    /// Path to a word vector model
    model: PathBuf,

    /// Path to the output file. Format: word<TAB>neighbour<TAB>similarity
    output: PathBuf,

    /// Number of nearest neighbours to collect for each word
    #[arg(short, default_value = "200")]
    n: usize,

    /// Collect neighbours only for this many of the most frequent words
    /// (default: all words)
    #[arg(long = "vocab_limit")]
    vocab_limit: Option<usize>,

    /// Model format: 'word2vec' for the original tool's output,
    /// 'gensim' for gensim's native save format
    #[arg(long = "format", value_enum, default_value = "word2vec")]
    format: ModelFormat,

    /// 1 for a binary model, 0 for a text model (word2vec only)
    #[arg(long = "binary", default_value = "1", value_parser = clap::value_parser!(u8).range(0..=1))]
    binary: u8,
}

fn main() -> Result<()> {
    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("word_neighbours=info")),
        )
        .init();

    let cli = Cli::parse();

    let summary = pipeline::run(
        &cli.model,
        &cli.output,
        cli.n,
        cli.vocab_limit,
        cli.format,
        cli.binary != 0,
    )?;

    println!("Number of processed words: {}", summary.words_processed);
    println!(
        "{}",
        format!(
            "Saved {} neighbour records to {}",
            summary.records_written,
            cli.output.display()
        )
        .bold()
    );

    Ok(())
}
