//! Binary min-heap with a key index for decrease-key

use std::hash::Hash;

use rustc_hash::FxHashMap;

/// A binary min-heap of items addressed by a unique key.
///
/// The position of every key inside the heap array is tracked, so an item
/// can be found and moved towards the root in O(log n). Misuse (pushing a
/// key twice, decreasing an absent key or "decreasing" to a value that is
/// not smaller) is a bug in the caller and panics.
#[derive(Debug)]
pub struct IndexedMinHeap<K, T> {
    entries: Vec<(K, T)>,
    positions: FxHashMap<K, usize>,
}

impl<K, T> Default for IndexedMinHeap<K, T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            positions: FxHashMap::default(),
        }
    }
}

impl<K, T> IndexedMinHeap<K, T>
where
    K: Hash + Eq + Clone,
    T: Ord,
{
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, key: &K) -> bool {
        self.positions.contains_key(key)
    }

    pub fn get(&self, key: &K) -> Option<&T> {
        self.positions.get(key).map(|&index| &self.entries[index].1)
    }

    pub fn peek_min(&self) -> Option<(&K, &T)> {
        self.entries.first().map(|(key, item)| (key, item))
    }

    pub fn push(&mut self, key: K, item: T) {
        assert!(!self.contains(&key), "key is already in the heap");

        let index = self.entries.len();
        self.positions.insert(key.clone(), index);
        self.entries.push((key, item));
        self.sift_up(index);
    }

    pub fn pop_min(&mut self) -> Option<(K, T)> {
        if self.entries.is_empty() {
            return None;
        }

        let last = self.entries.len() - 1;
        self.swap(0, last);
        let (key, item) = self.entries.pop()?;
        self.positions.remove(&key);

        if !self.entries.is_empty() {
            self.sift_down(0);
        }

        Some((key, item))
    }

    /// Replaces the item stored under `key` with a strictly smaller one.
    pub fn decrease(&mut self, key: &K, item: T) {
        let index = match self.positions.get(key) {
            Some(&index) => index,
            None => panic!("key is not in the heap"),
        };
        assert!(
            item < self.entries[index].1,
            "new item must be less than the one it replaces"
        );

        self.entries[index].1 = item;
        self.sift_up(index);
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.entries[index].1 < self.entries[parent].1 {
                self.swap(index, parent);
                index = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        let len = self.entries.len();
        loop {
            let left = 2 * index + 1;
            let right = left + 1;
            let mut smallest = index;

            if left < len && self.entries[left].1 < self.entries[smallest].1 {
                smallest = left;
            }
            if right < len && self.entries[right].1 < self.entries[smallest].1 {
                smallest = right;
            }
            if smallest == index {
                break;
            }

            self.swap(index, smallest);
            index = smallest;
        }
    }

    fn swap(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        self.entries.swap(a, b);
        for index in [a, b] {
            if let Some(position) = self.positions.get_mut(&self.entries[index].0) {
                *position = index;
            }
        }
    }
}
