//! Fan-out over independent inputs.
//!
//! With the `parallel` feature, work runs on rayon's global thread pool.
//! Without it, inputs are processed sequentially. Output order always
//! matches input order.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Apply `op` to every item, preserving order.
#[cfg(feature = "parallel")]
pub(crate) fn map_ordered<T, R, F>(items: &[T], op: F) -> Vec<R>
where
    T: Sync,
    R: Send,
    F: Fn(usize, &T) -> R + Sync + Send,
{
    items.par_iter().enumerate().map(|(i, item)| op(i, item)).collect()
}

/// Apply `op` to every item, preserving order.
#[cfg(not(feature = "parallel"))]
pub(crate) fn map_ordered<T, R, F>(items: &[T], op: F) -> Vec<R>
where
    F: Fn(usize, &T) -> R,
{
    items.iter().enumerate().map(|(i, item)| op(i, item)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_preserved() {
        let items: Vec<usize> = (0..1000).collect();
        let out = map_ordered(&items, |i, &x| (i, x * 2));
        for (i, &(idx, doubled)) in out.iter().enumerate() {
            assert_eq!(idx, i);
            assert_eq!(doubled, i * 2);
        }
    }
}
