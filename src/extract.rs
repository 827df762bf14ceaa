// Neighbour extraction — the core of the tool.
//
// For each source word (the first `vocab_limit` words of the model, or all
// of them), rank every other vocabulary word by cosine similarity and
// stream the top n to the sink as (word, neighbour, similarity) records.
// Brute force on purpose: O(V² · d) with a bounded heap per source word,
// no approximate index. Sources are processed in vocabulary order, so the
// output is deterministic line for line.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use crate::error::{NeighboursError, Result};
use crate::model::Vocabulary;
use crate::output::NeighbourSink;
use crate::similarity;

/// One output tuple. `neighbour` is never the same word as `word`.
#[derive(Debug, Clone, Copy)]
pub struct NeighbourRecord<'a> {
    pub word: &'a str,
    pub neighbour: &'a str,
    pub similarity: f32,
}

/// A candidate neighbour: vocabulary index plus its similarity to the
/// current source word. Ordering is total (via `total_cmp`), with equal
/// similarities ranked by ascending vocabulary index — more frequent word
/// first — so ties break the same way on every run.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Scored {
    index: usize,
    similarity: f32,
}

impl Eq for Scored {}

impl Ord for Scored {
    fn cmp(&self, other: &Self) -> Ordering {
        self.similarity
            .total_cmp(&other.similarity)
            .then_with(|| other.index.cmp(&self.index))
    }
}

impl PartialOrd for Scored {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Keeps the n best candidates seen so far in a min-heap, evicting the
/// weakest when a better one arrives.
struct TopN {
    n: usize,
    heap: BinaryHeap<Reverse<Scored>>,
}

impl TopN {
    fn new(n: usize) -> Self {
        Self {
            n,
            heap: BinaryHeap::with_capacity(n.saturating_add(1)),
        }
    }

    fn push(&mut self, candidate: Scored) {
        if self.heap.len() < self.n {
            self.heap.push(Reverse(candidate));
        } else if let Some(Reverse(weakest)) = self.heap.peek() {
            if candidate > *weakest {
                self.heap.pop();
                self.heap.push(Reverse(candidate));
            }
        }
    }

    /// Best first: descending similarity, ties by ascending index.
    fn into_descending(self) -> Vec<Scored> {
        self.heap
            .into_sorted_vec()
            .into_iter()
            .map(|Reverse(scored)| scored)
            .collect()
    }
}

/// Number of source words a run will process.
pub fn source_count(vocab_len: usize, vocab_limit: Option<usize>) -> usize {
    vocab_limit.map_or(vocab_len, |limit| limit.min(vocab_len))
}

/// Collect the top `n` cosine neighbours for each source word and stream
/// them to `sink`. Returns `(source words processed, records written)`,
/// the latter counted as records actually reach the sink.
///
/// `progress` is called with the completed source-word count after each
/// source; nothing depends on it beyond observability.
///
/// Fails with `InvalidVocabulary` on an empty vocabulary and
/// `InvalidParameter` on `n == 0` or `vocab_limit == Some(0)`, in both
/// cases before any record reaches the sink.
pub fn collect_neighbours<F>(
    vocab: &Vocabulary,
    n: usize,
    vocab_limit: Option<usize>,
    sink: &mut dyn NeighbourSink,
    mut progress: F,
) -> Result<(usize, usize)>
where
    F: FnMut(usize),
{
    if vocab.is_empty() {
        return Err(NeighboursError::InvalidVocabulary(
            "vocabulary is empty".to_string(),
        ));
    }
    if n == 0 {
        return Err(NeighboursError::InvalidParameter(
            "n must be at least 1".to_string(),
        ));
    }
    if vocab_limit == Some(0) {
        return Err(NeighboursError::InvalidParameter(
            "vocab_limit must be at least 1".to_string(),
        ));
    }

    let sources = source_count(vocab.len(), vocab_limit);
    // Only min(n, candidates) entries can ever be kept, however large an
    // n the user asked for.
    let keep = n.min(vocab.len() - 1);

    // Norms never change during a run; precomputing them turns every pair
    // into a single dot product.
    let norms: Vec<f32> = (0..vocab.len())
        .map(|i| similarity::norm(vocab.vector(i)))
        .collect();

    let mut records = 0;

    for source in 0..sources {
        let source_vector = vocab.vector(source);
        let mut best = TopN::new(keep);

        for candidate in 0..vocab.len() {
            if candidate == source {
                continue;
            }
            let denom = norms[source] * norms[candidate];
            let sim = if denom < f32::EPSILON {
                0.0
            } else {
                similarity::dot(source_vector, vocab.vector(candidate)) / denom
            };
            best.push(Scored {
                index: candidate,
                similarity: sim,
            });
        }

        for scored in best.into_descending() {
            sink.write_record(&NeighbourRecord {
                word: vocab.word(source),
                neighbour: vocab.word(scored.index),
                similarity: scored.similarity,
            })?;
            records += 1;
        }

        progress(source + 1);
    }

    Ok((sources, records))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scored_orders_by_similarity_then_index() {
        let a = Scored {
            index: 3,
            similarity: 0.5,
        };
        let b = Scored {
            index: 1,
            similarity: 0.5,
        };
        let c = Scored {
            index: 0,
            similarity: 0.4,
        };
        // Equal similarity: the lower index ranks higher.
        assert!(b > a);
        assert!(a > c);
    }

    #[test]
    fn top_n_keeps_the_best_and_sorts_descending() {
        let mut top = TopN::new(2);
        for (index, similarity) in [(0, 0.1), (1, 0.9), (2, 0.5), (3, 0.7)] {
            top.push(Scored { index, similarity });
        }
        let best: Vec<usize> = top.into_descending().iter().map(|s| s.index).collect();
        assert_eq!(best, vec![1, 3]);
    }

    #[test]
    fn top_n_tie_at_the_boundary_prefers_lower_index() {
        let mut top = TopN::new(1);
        top.push(Scored {
            index: 5,
            similarity: 0.5,
        });
        top.push(Scored {
            index: 2,
            similarity: 0.5,
        });
        let best = top.into_descending();
        assert_eq!(best[0].index, 2);
    }

    #[test]
    fn source_count_caps_at_vocab_len() {
        assert_eq!(source_count(10, None), 10);
        assert_eq!(source_count(10, Some(3)), 3);
        assert_eq!(source_count(10, Some(500)), 10);
    }
}
