// End-to-end neighbour collection run.
//
// Load the model, walk the (possibly limited) vocabulary, and stream
// top-n neighbours to the output file with a progress bar. Output is
// written as it is computed — a mid-run failure leaves a partial file
// behind rather than buffering the whole relation in memory.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use crate::error::Result;
use crate::extract;
use crate::model::{self, ModelFormat};
use crate::output::tsv::TsvWriter;

/// What a completed run did, for the caller to report.
#[derive(Debug)]
pub struct RunSummary {
    pub vocab_size: usize,
    pub words_processed: usize,
    pub records_written: usize,
}

/// Run the full pipeline: model in, TSV neighbour relation out.
///
/// The output file is created (truncating any existing file) only after
/// the model has loaded, so a bad model path never clobbers previous
/// results.
pub fn run(
    model_path: &Path,
    output_path: &Path,
    n: usize,
    vocab_limit: Option<usize>,
    format: ModelFormat,
    binary: bool,
) -> Result<RunSummary> {
    println!("Loading model from {}", model_path.display());
    let vocab = model::load(model_path, format, binary)?;
    println!("Vocabulary size: {}", vocab.len());

    let sources = extract::source_count(vocab.len(), vocab_limit);
    println!("Collecting neighbours for {sources} most frequent words");
    println!("Saving word neighbours to {}", output_path.display());

    info!(
        sources,
        n,
        output = %output_path.display(),
        "Starting neighbour extraction"
    );

    let file = File::create(output_path)?;
    let mut sink = TsvWriter::new(BufWriter::new(file));

    let pb = ProgressBar::new(sources as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("  Neighbours [{bar:30}] {pos}/{len} ({eta})")
            .unwrap(),
    );

    let (words_processed, records_written) =
        extract::collect_neighbours(&vocab, n, vocab_limit, &mut sink, |done| {
            pb.set_position(done as u64)
        })?;
    pb.finish_and_clear();

    sink.finish()?;

    info!(words_processed, records_written, "Extraction finished");

    Ok(RunSummary {
        vocab_size: vocab.len(),
        words_processed,
        records_written,
    })
}
