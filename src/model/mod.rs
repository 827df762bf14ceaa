// Word vector model loading.
//
// A model file maps each vocabulary word to a dense f32 vector. Word order
// in the file is meaningful: training tools write words in descending
// corpus frequency, and the `vocab_limit` option relies on that ("first K
// entries" = "K most frequent words"), so loading preserves it exactly.

pub mod word2vec;

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use clap::ValueEnum;
use tracing::info;

use crate::error::{NeighboursError, Result};

/// On-disk format of the input model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModelFormat {
    /// Format written by the original word2vec tool (binary or text).
    Word2vec,
    /// Gensim's native `.save()` format.
    Gensim,
}

/// An immutable word-embedding table: words in model order, each with a
/// vector of the shared dimensionality `dim`. Vectors are stored flat
/// (row-major) so a word's slice can be handed out without allocation.
#[derive(Debug)]
pub struct Vocabulary {
    words: Vec<String>,
    vectors: Vec<f32>,
    dim: usize,
}

impl Vocabulary {
    /// Build a vocabulary from parallel word/vector storage.
    ///
    /// `vectors` must hold exactly `words.len() * dim` components.
    pub fn new(words: Vec<String>, vectors: Vec<f32>, dim: usize) -> Result<Self> {
        if !words.is_empty() && dim == 0 {
            return Err(NeighboursError::InvalidVocabulary(
                "vector dimensionality is zero".to_string(),
            ));
        }
        if vectors.len() != words.len() * dim {
            return Err(NeighboursError::InvalidVocabulary(format!(
                "expected {} vector components for {} words of dimension {}, got {}",
                words.len() * dim,
                words.len(),
                dim,
                vectors.len(),
            )));
        }
        Ok(Self {
            words,
            vectors,
            dim,
        })
    }

    /// Build a vocabulary from (word, vector) pairs, validating that every
    /// vector has the dimensionality of the first.
    pub fn from_pairs(pairs: Vec<(String, Vec<f32>)>) -> Result<Self> {
        let dim = pairs.first().map_or(0, |(_, v)| v.len());
        let mut words = Vec::with_capacity(pairs.len());
        let mut vectors = Vec::with_capacity(pairs.len() * dim);

        for (word, vector) in pairs {
            if vector.len() != dim {
                return Err(NeighboursError::InvalidVocabulary(format!(
                    "vector for '{}' has dimension {}, expected {}",
                    word,
                    vector.len(),
                    dim,
                )));
            }
            words.push(word);
            vectors.extend(vector);
        }

        Self::new(words, vectors, dim)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Shared vector dimensionality.
    pub fn dim(&self) -> usize {
        self.dim
    }

    pub fn word(&self, index: usize) -> &str {
        &self.words[index]
    }

    pub fn vector(&self, index: usize) -> &[f32] {
        &self.vectors[index * self.dim..(index + 1) * self.dim]
    }
}

/// Load a word vector model from disk.
///
/// `binary` only applies to the word2vec format. Gensim's native format is
/// pickle-serialized Python objects and is not parseable here; it fails
/// with a `ModelLoad` error pointing at the word2vec export path.
pub fn load(path: &Path, format: ModelFormat, binary: bool) -> Result<Vocabulary> {
    match format {
        ModelFormat::Word2vec => {
            let file = File::open(path).map_err(|e| {
                NeighboursError::ModelLoad(format!("cannot open {}: {e}", path.display()))
            })?;
            let mut reader = BufReader::new(file);

            let vocab = if binary {
                word2vec::read_binary(&mut reader)?
            } else {
                word2vec::read_text(&mut reader)?
            };

            info!(
                words = vocab.len(),
                dim = vocab.dim(),
                binary,
                "Loaded word2vec model"
            );
            Ok(vocab)
        }
        ModelFormat::Gensim => Err(NeighboursError::ModelLoad(
            "gensim native models are pickle-serialized and cannot be read directly; \
             export the model with save_word2vec_format() and re-run with \
             --format word2vec"
                .to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_pairs_accepts_uniform_dimensions() {
        let vocab = Vocabulary::from_pairs(vec![
            ("cat".to_string(), vec![1.0, 0.0]),
            ("dog".to_string(), vec![0.9, 0.1]),
        ])
        .unwrap();
        assert_eq!(vocab.len(), 2);
        assert_eq!(vocab.dim(), 2);
        assert_eq!(vocab.word(1), "dog");
        assert_eq!(vocab.vector(1), &[0.9, 0.1]);
    }

    #[test]
    fn from_pairs_rejects_mismatched_dimensions() {
        let err = Vocabulary::from_pairs(vec![
            ("cat".to_string(), vec![1.0, 0.0]),
            ("dog".to_string(), vec![0.9]),
        ])
        .unwrap_err();
        assert!(matches!(err, NeighboursError::InvalidVocabulary(_)));
    }

    #[test]
    fn new_rejects_wrong_component_count() {
        let err = Vocabulary::new(vec!["a".to_string()], vec![1.0, 2.0, 3.0], 2).unwrap_err();
        assert!(matches!(err, NeighboursError::InvalidVocabulary(_)));
    }

    #[test]
    fn empty_vocabulary_is_representable() {
        // Emptiness is rejected later, by the extractor — loading an empty
        // table is not itself an error.
        let vocab = Vocabulary::from_pairs(vec![]).unwrap();
        assert!(vocab.is_empty());
    }

    #[test]
    fn gensim_format_fails_with_model_load() {
        let err = load(Path::new("model.bin"), ModelFormat::Gensim, true).unwrap_err();
        assert!(matches!(err, NeighboursError::ModelLoad(_)));
        assert!(err.to_string().contains("save_word2vec_format"));
    }

    #[test]
    fn missing_file_fails_with_model_load() {
        let err = load(
            Path::new("/nonexistent/model.bin"),
            ModelFormat::Word2vec,
            true,
        )
        .unwrap_err();
        assert!(matches!(err, NeighboursError::ModelLoad(_)));
    }
}
