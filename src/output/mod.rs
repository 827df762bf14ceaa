// Output sinks for neighbour records.
//
// The extractor never touches the filesystem; it streams records into a
// `NeighbourSink` and leaves creation, truncation, and flushing to the
// sink implementation.

pub mod tsv;

use crate::error::Result;
use crate::extract::NeighbourRecord;

/// Destination for extracted neighbour records.
pub trait NeighbourSink {
    fn write_record(&mut self, record: &NeighbourRecord<'_>) -> Result<()>;
}

/// In-memory sink collecting owned (word, neighbour, similarity) tuples.
/// Test support — lets extraction results be asserted without touching disk.
#[derive(Default)]
pub struct VecSink {
    pub records: Vec<(String, String, f32)>,
}

impl NeighbourSink for VecSink {
    fn write_record(&mut self, record: &NeighbourRecord<'_>) -> Result<()> {
        self.records.push((
            record.word.to_string(),
            record.neighbour.to_string(),
            record.similarity,
        ));
        Ok(())
    }
}
