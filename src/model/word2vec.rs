// Parsers for the original word2vec tool's model formats.
//
// Both sub-formats open with an ASCII header line `<vocab_size> <dim>\n`.
// Text entries are whitespace-separated lines; binary entries are a word
// terminated by a single space, then `dim` little-endian f32 components,
// usually followed by a newline that the next word read skips over.

use std::io::BufRead;

use super::Vocabulary;
use crate::error::{NeighboursError, Result};

/// Cap on how far a header's claimed sizes are trusted for
/// pre-allocation. A lying header then costs reallocation as entries
/// actually arrive, not an allocation abort.
const MAX_PREALLOC: usize = 1 << 16;

/// Read a word2vec text model: one `word v1 .. vd` line per entry.
pub fn read_text<R: BufRead>(reader: &mut R) -> Result<Vocabulary> {
    let (vocab_size, dim) = read_header(reader)?;

    let mut words = Vec::with_capacity(vocab_size.min(MAX_PREALLOC));
    let mut vectors = Vec::with_capacity((vocab_size * dim).min(MAX_PREALLOC));
    let mut line = String::new();

    for entry in 0..vocab_size {
        line.clear();
        let read = reader
            .read_line(&mut line)
            .map_err(|e| NeighboursError::ModelLoad(format!("read failed at entry {entry}: {e}")))?;
        if read == 0 {
            return Err(NeighboursError::ModelLoad(format!(
                "file ends after {entry} of {vocab_size} entries"
            )));
        }

        let mut fields = line.split_whitespace();
        let word = fields.next().ok_or_else(|| {
            NeighboursError::ModelLoad(format!("entry {entry} is a blank line"))
        })?;

        let mut components = 0;
        for field in fields {
            let value: f32 = field.parse().map_err(|_| {
                NeighboursError::ModelLoad(format!(
                    "entry '{word}': '{field}' is not a valid float"
                ))
            })?;
            vectors.push(value);
            components += 1;
        }
        if components != dim {
            return Err(NeighboursError::ModelLoad(format!(
                "entry '{word}' has {components} components, header says {dim}"
            )));
        }
        words.push(word.to_string());
    }

    Vocabulary::new(words, vectors, dim)
}

/// Read a word2vec binary model: space-terminated word, then `dim`
/// little-endian f32s per entry.
pub fn read_binary<R: BufRead>(reader: &mut R) -> Result<Vocabulary> {
    let (vocab_size, dim) = read_header(reader)?;

    let mut words = Vec::with_capacity(vocab_size.min(MAX_PREALLOC));
    let mut vectors = Vec::with_capacity((vocab_size * dim).min(MAX_PREALLOC));

    for entry in 0..vocab_size {
        let word = read_word(reader, entry)?;
        let mut component = [0u8; 4];
        for _ in 0..dim {
            reader.read_exact(&mut component).map_err(|e| {
                NeighboursError::ModelLoad(format!("truncated vector for '{word}': {e}"))
            })?;
            vectors.push(f32::from_le_bytes(component));
        }
        words.push(word);
    }

    Vocabulary::new(words, vectors, dim)
}

/// Parse the `<vocab_size> <dim>` header line shared by both sub-formats.
fn read_header<R: BufRead>(reader: &mut R) -> Result<(usize, usize)> {
    let mut line = String::new();
    reader
        .read_line(&mut line)
        .map_err(|e| NeighboursError::ModelLoad(format!("cannot read header: {e}")))?;

    let mut fields = line.split_whitespace();
    let vocab_size: Option<usize> = fields.next().and_then(|f| f.parse().ok());
    let dim = fields.next().and_then(|f| f.parse().ok());

    match (vocab_size, dim, fields.next()) {
        (Some(vocab_size), Some(dim), None) => {
            // The counts come from untrusted input; reject a component
            // total that does not even fit in a usize.
            if vocab_size.checked_mul(dim).is_none() {
                return Err(NeighboursError::ModelLoad(format!(
                    "header claims {vocab_size} words of dimension {dim}, \
                     which overflows the addressable component count"
                )));
            }
            Ok((vocab_size, dim))
        }
        _ => Err(NeighboursError::ModelLoad(format!(
            "malformed header '{}', expected '<vocab_size> <dim>'",
            line.trim_end(),
        ))),
    }
}

/// Read one space-terminated word, skipping the line separator the binary
/// format leaves between entries.
fn read_word<R: BufRead>(reader: &mut R, entry: usize) -> Result<String> {
    let mut bytes = Vec::new();
    loop {
        let mut byte = [0u8; 1];
        reader.read_exact(&mut byte).map_err(|e| {
            NeighboursError::ModelLoad(format!("file ends inside entry {entry}: {e}"))
        })?;
        match byte[0] {
            b' ' => break,
            b'\n' | b'\r' if bytes.is_empty() => continue,
            b => bytes.push(b),
        }
    }

    String::from_utf8(bytes)
        .map_err(|_| NeighboursError::ModelLoad(format!("entry {entry} is not valid UTF-8")))
}
