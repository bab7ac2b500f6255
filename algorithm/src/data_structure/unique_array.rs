use fnv::FnvHashSet;
use std::ops::Index;
use std::hash::Hash;

/// Array that keeps insertion order and refuses elements whose key was seen before
pub struct UniqueArray<V, K: Hash + Eq + Clone=usize> {
    data: Vec<V>,
    id: FnvHashSet<K>
}

impl<V, K: Hash + Eq + Clone> UniqueArray<V, K> {
    pub fn new() -> UniqueArray<V, K> {
        UniqueArray {
            data: Vec::new(),
            id: FnvHashSet::default()
        }
    }

    pub fn with_capacity(capacity: usize) -> UniqueArray<V, K> {
        UniqueArray {
            data: Vec::with_capacity(capacity),
            id: FnvHashSet::with_capacity_and_hasher(capacity, Default::default())
        }
    }

    pub fn push(&mut self, id: K, value: V) -> bool {
        if !self.id.contains(&id) {
            self.id.insert(id);
            self.data.push(value);

            return true;
        }

        return false;
    }

    #[inline]
    pub fn contains(&self, id: &K) -> bool {
        self.id.contains(id)
    }

    pub fn get_value(self) -> Vec<V> {
        self.data
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }
}

impl<V, K: Hash + Eq + Clone> Index<usize> for UniqueArray<V, K> {
    type Output = V;

    fn index(&self, idx: usize)-> &V {
        &self.data[idx]
    }
}
