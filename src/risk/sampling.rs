use rand::seq::index;
use rand::Rng;

/// Uniform sample of `k` distinct positions of `pool`, returned in draw order.
/// `k` larger than the pool is clamped to the pool size.
pub fn sample_without_replacement<T, R>(pool: &[T], k: usize, rng: &mut R) -> Vec<T>
where
    T: Copy,
    R: Rng + ?Sized,
{
    let amount = k.min(pool.len());
    index::sample(rng, pool.len(), amount)
        .into_iter()
        .map(|position| pool[position])
        .collect()
}

/// Single uniform pick. `None` on an empty pool.
pub fn choose_one<T, R>(pool: &[T], rng: &mut R) -> Option<T>
where
    T: Copy,
    R: Rng + ?Sized,
{
    if pool.is_empty() {
        None
    } else {
        Some(pool[rng.gen_range(0..pool.len())])
    }
}
