//! Freelist of emptied containers for allocation-free steady-state churn.

use log::trace;

/// A container the pool can scrub before handing it out again
pub trait Reusable: Default {
    /// Drops the contents, keeping any allocated capacity
    fn reset(&mut self);
}

impl<T> Reusable for Vec<T> {
    #[inline]
    fn reset(&mut self) {
        self.clear();
    }
}

/// Freelist for one kind of container
///
/// Released containers keep their capacity but never their contents. There
/// is no upper bound on the number of idle containers; it follows the peak
/// number of containers that became empty at the same time.
#[derive(Debug)]
pub struct ContainerPool<C> {
    free: Vec<C>,
    kind: &'static str,
}

impl<C: Reusable> ContainerPool<C> {
    /// Creates an empty pool; `kind` only labels trace output
    pub fn new(kind: &'static str) -> Self {
        Self { free: Vec::new(), kind }
    }

    /// Pops an idle container, or allocates a new one if none is left
    #[inline]
    pub fn acquire(&mut self) -> C {
        match self.free.pop() {
            Some(container) => container,
            None => {
                trace!("[ContainerPool] {}: freelist empty, allocating", self.kind);
                C::default()
            }
        }
    }

    /// Clears `container` and keeps it for the next `acquire`
    #[inline]
    pub fn release(&mut self, mut container: C) {
        container.reset();
        self.free.push(container);
    }

    /// Number of idle containers
    pub fn idle(&self) -> usize {
        self.free.len()
    }

    /// Drops every idle container
    pub fn clear(&mut self) {
        self.free.clear();
    }
}

/// Idle container counts, for diagnostics
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PoolStats {
    /// Idle cell buckets (cell -> items)
    pub buckets: usize,
    /// Idle item cell-sets (item -> cells)
    pub cell_sets: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_acquire_from_empty_pool_allocates() {
        let mut pool: ContainerPool<Vec<u32>> = ContainerPool::new("test");
        let v = pool.acquire();
        assert!(v.is_empty());
        assert_eq!(pool.idle(), 0);
    }

    #[test]
    fn test_release_clears_and_reuses() {
        let mut pool: ContainerPool<Vec<u32>> = ContainerPool::new("test");
        let mut v = pool.acquire();
        v.extend([1, 2, 3]);
        let capacity = v.capacity();
        pool.release(v);
        assert_eq!(pool.idle(), 1);

        let reused = pool.acquire();
        assert!(reused.is_empty(), "Reused container must carry no residue");
        assert_eq!(reused.capacity(), capacity, "Capacity should survive the round trip");
        assert_eq!(pool.idle(), 0);
    }

    #[test]
    fn test_pool_is_unbounded() {
        let mut pool: ContainerPool<Vec<u8>> = ContainerPool::new("test");
        for _ in 0..100 {
            pool.release(vec![1]);
        }
        assert_eq!(pool.idle(), 100);
        pool.clear();
        assert_eq!(pool.idle(), 0);
    }
}
