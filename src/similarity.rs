// Cosine similarity over dense f32 word vectors.
//
// This is the single comparison the whole tool is built on: neighbours are
// ranked purely by cosine of their embedding vectors. Values stay in the
// full [-1, 1] range — trained embeddings rarely go negative, but nothing
// guarantees that, and the output format must reflect what the model says.

/// Euclidean norm of a vector.
pub fn norm(v: &[f32]) -> f32 {
    v.iter().map(|x| x * x).sum::<f32>().sqrt()
}

/// Dot product of two equal-length vectors.
pub fn dot(a: &[f32], b: &[f32]) -> f32 {
    a.iter().zip(b.iter()).map(|(x, y)| x * y).sum()
}

/// Cosine similarity between two vectors: dot(a, b) / (‖a‖·‖b‖).
///
/// Returns 0.0 for mismatched lengths, empty input, or a near-zero norm
/// on either side (a zero vector has no direction to compare).
pub fn cosine(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }

    let denom = norm(a) * norm(b);
    if denom < f32::EPSILON {
        0.0
    } else {
        dot(a, b) / denom
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_vectors_are_one() {
        let a = vec![1.0, 2.0, 3.0];
        assert!((cosine(&a, &a) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn orthogonal_vectors_are_zero() {
        let a = vec![1.0, 0.0];
        let b = vec![0.0, 1.0];
        assert!(cosine(&a, &b).abs() < 1e-6);
    }

    #[test]
    fn opposite_vectors_are_negative_one() {
        // No clamping — anti-parallel vectors really do score -1.
        let a = vec![1.0, 0.0];
        let b = vec![-1.0, 0.0];
        assert!((cosine(&a, &b) + 1.0).abs() < 1e-6);
    }

    #[test]
    fn magnitude_does_not_matter() {
        let a = vec![1.0, 2.0, 3.0];
        let b = vec![2.0, 4.0, 6.0];
        assert!((cosine(&a, &b) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn zero_vector_scores_zero() {
        let a = vec![0.0, 0.0, 0.0];
        let b = vec![1.0, 2.0, 3.0];
        assert!(cosine(&a, &b).abs() < f32::EPSILON);
    }

    #[test]
    fn mismatched_lengths_score_zero() {
        let a = vec![1.0, 2.0];
        let b = vec![1.0, 2.0, 3.0];
        assert!(cosine(&a, &b).abs() < f32::EPSILON);
    }

    #[test]
    fn cosine_is_symmetric() {
        let a = vec![0.3, -1.2, 4.0, 0.5];
        let b = vec![2.0, -1.0, 0.25, 3.0];
        assert!((cosine(&a, &b) - cosine(&b, &a)).abs() < 1e-6);
    }
}
