use bit_vec::BitVec;
use rustc_hash::FxHashSet;

/// Set of vertices already absorbed by a traversal.
///
/// `BitVec` suits dense vertex indices, `FxHashSet` suits huge graphs where
/// a traversal only touches a small part.
pub trait Visited<V>: Default {
    /// Marks `value` as visited, returning true only the first time.
    fn visit(&mut self, value: V) -> bool;

    fn is_visited(&self, value: &V) -> bool;

    /// Number of distinct visited values.
    fn visited_count(&self) -> usize;
}

impl Visited<usize> for FxHashSet<usize> {
    #[inline]
    fn visit(&mut self, value: usize) -> bool {
        self.insert(value)
    }

    #[inline]
    fn is_visited(&self, value: &usize) -> bool {
        self.contains(value)
    }

    #[inline]
    fn visited_count(&self) -> usize {
        self.len()
    }
}

impl Visited<usize> for BitVec {
    /// Grows the vector when `value` lies past its end.
    #[inline]
    fn visit(&mut self, value: usize) -> bool {
        let len = self.len();
        if value >= len {
            self.grow(value + 1 - len, false);
        }

        if self[value] {
            return false;
        }
        self.set(value, true);
        true
    }

    #[inline]
    fn is_visited(&self, value: &usize) -> bool {
        self.get(*value).unwrap_or(false)
    }

    fn visited_count(&self) -> usize {
        self.iter().filter(|&bit| bit).count()
    }
}
