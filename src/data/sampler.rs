// ============================================================
// Layer 4 — Sentence Sampler
// ============================================================
// Picks up to `count` items uniformly at random, without
// replacement, from a candidate list.
//
// Uses a Fisher-Yates shuffle via rand::seq::SliceRandom and
// keeps the first `count` items. The random source is passed
// in so tests can use a seeded StdRng.
//
// Reference: Rust Book §8 (Vectors)
//            rand crate documentation

use rand::seq::SliceRandom;
use rand::Rng;

/// Randomly choose `min(count, items.len())` distinct items.
///
/// # Example
/// ```ignore
/// let picked = sample_without_replacement(sentences, 5, &mut rand::thread_rng());
/// // picked.len() <= 5, no item appears twice
/// ```
pub fn sample_without_replacement<T, R>(mut items: Vec<T>, count: usize, rng: &mut R) -> Vec<T>
where
    R: Rng + ?Sized,
{
    items.shuffle(rng);
    items.truncate(count);

    tracing::debug!("Sampled {} items", items.len());

    items
}
