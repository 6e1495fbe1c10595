use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::internal::catalog::Recommendation;

/// Pick `n` distinct recommendations from `catalog` in random order using a
/// partial Fisher-Yates shuffle. Only the first `n` positions are shuffled,
/// so the cost is O(n) swaps regardless of catalog size.
///
/// When `n >= catalog.len()` the whole catalog is returned (still shuffled).
pub fn sample_without_replacement(
    catalog: &[Recommendation],
    n: usize,
    rng: &mut StdRng,
) -> Vec<Recommendation> {
    let mut pool: Vec<Recommendation> = catalog.to_vec();
    let take = n.min(pool.len());

    for i in 0..take {
        let j = rng.gen_range(i..pool.len());
        pool.swap(i, j);
    }

    pool.truncate(take);
    pool
}

/// Build the sampling RNG. A configured seed gives deterministic picks,
/// otherwise the RNG is seeded from the OS.
pub fn sampling_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::internal::catalog::STUDIO_CATALOG;

    #[test]
    fn returns_exactly_n_distinct_entries() {
        let mut rng = sampling_rng(Some(7));
        let picks = sample_without_replacement(&STUDIO_CATALOG, 4, &mut rng);

        assert_eq!(picks.len(), 4);
        for (i, a) in picks.iter().enumerate() {
            for b in picks.iter().skip(i + 1) {
                assert_ne!(a.title, b.title);
            }
        }
    }

    #[test]
    fn picks_come_from_the_catalog_unchanged() {
        let mut rng = sampling_rng(Some(42));
        let picks = sample_without_replacement(&STUDIO_CATALOG, 4, &mut rng);

        for pick in &picks {
            assert!(STUDIO_CATALOG.iter().any(|rec| rec == pick));
        }
    }

    #[test]
    fn same_seed_gives_same_picks() {
        let a = sample_without_replacement(&STUDIO_CATALOG, 4, &mut sampling_rng(Some(99)));
        let b = sample_without_replacement(&STUDIO_CATALOG, 4, &mut sampling_rng(Some(99)));
        assert_eq!(a, b);
    }

    #[test]
    fn oversized_request_returns_whole_catalog() {
        let mut rng = sampling_rng(Some(1));
        let picks = sample_without_replacement(&STUDIO_CATALOG, 10, &mut rng);
        assert_eq!(picks.len(), STUDIO_CATALOG.len());
    }
}
