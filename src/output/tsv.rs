// Tab-separated output writer.
//
// One line per record: `word<TAB>neighbour<TAB>similarity`, similarity with
// exactly 4 decimal places, newline-terminated, UTF-8. This is the exact
// shape the downstream Chinese Whispers clustering step consumes — no
// header, no trailing metadata.

use std::io::Write;

use super::NeighbourSink;
use crate::error::Result;
use crate::extract::NeighbourRecord;

/// Streams records to any `Write` destination as TSV lines.
pub struct TsvWriter<W: Write> {
    writer: W,
}

impl<W: Write> TsvWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Flush buffered output. Call once after the last record.
    pub fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

impl<W: Write> NeighbourSink for TsvWriter<W> {
    fn write_record(&mut self, record: &NeighbourRecord<'_>) -> Result<()> {
        writeln!(
            self.writer,
            "{}\t{}\t{:.4}",
            record.word, record.neighbour, record.similarity
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record<'a>(word: &'a str, neighbour: &'a str, similarity: f32) -> NeighbourRecord<'a> {
        NeighbourRecord {
            word,
            neighbour,
            similarity,
        }
    }

    #[test]
    fn writes_tab_separated_lines_with_four_decimals() {
        let mut sink = TsvWriter::new(Vec::new());
        sink.write_record(&record("cat", "dog", 0.993_88)).unwrap();
        sink.write_record(&record("cat", "car", 0.0)).unwrap();
        sink.finish().unwrap();

        let out = String::from_utf8(sink.writer).unwrap();
        assert_eq!(out, "cat\tdog\t0.9939\ncat\tcar\t0.0000\n");
    }

    #[test]
    fn negative_similarity_keeps_four_decimals() {
        let mut sink = TsvWriter::new(Vec::new());
        sink.write_record(&record("up", "down", -0.25)).unwrap();
        let out = String::from_utf8(sink.writer).unwrap();
        assert_eq!(out, "up\tdown\t-0.2500\n");
    }

    #[test]
    fn words_pass_through_unescaped() {
        let mut sink = TsvWriter::new(Vec::new());
        sink.write_record(&record("東京", "köln", 1.0)).unwrap();
        let out = String::from_utf8(sink.writer).unwrap();
        assert_eq!(out, "東京\tköln\t1.0000\n");
    }
}
