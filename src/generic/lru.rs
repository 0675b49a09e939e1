/*!
A map of bounded size, which evicts the least recently used entry when full.

Each access to an entry stamps the entry with a fresh tick.
The ticks of all entries are mirrored in an ordered map from tick to key, so the least recently used entry is always the first entry of the ordered map.

For example, [Lru] backs the [memo cache](crate::atomic::Memoized) of atomic similarities, as the number of token pairs compared across many formula comparisons may grow without bound.

```rust
# use formula_sim::generic::lru::Lru;
let mut cache = Lru::new(2);

cache.insert("a", 1);
cache.insert("b", 2);
assert_eq!(cache.get(&"a"), Some(&1));

// "b" is now the least recently used entry.
assert_eq!(cache.insert("c", 3), Some(("b", 2)));

assert!(cache.get(&"b").is_none());
assert_eq!(cache.len(), 2);
```
*/

use std::{
    collections::{BTreeMap, HashMap},
    hash::Hash,
};

/// A map of bounded size, see the [module](crate::generic::lru) documentation.
pub struct Lru<K: Clone + Eq + Hash, V> {
    capacity: usize,
    tick: u64,
    entries: HashMap<K, (V, u64)>,
    recency: BTreeMap<u64, K>,
}

impl<K: Clone + Eq + Hash, V> Lru<K, V> {
    /// A fresh map holding at most `capacity` entries.
    ///
    /// A capacity of zero is treated as a capacity of one.
    pub fn new(capacity: usize) -> Self {
        Lru {
            capacity: capacity.max(1),
            tick: 0,
            entries: HashMap::default(),
            recency: BTreeMap::default(),
        }
    }

    fn next_tick(&mut self) -> u64 {
        self.tick += 1;
        self.tick
    }

    /// The value of `key`, if present, marking `key` as most recently used.
    pub fn get(&mut self, key: &K) -> Option<&V> {
        let tick = self.next_tick();
        let entry = self.entries.get_mut(key)?;
        let stale = std::mem::replace(&mut entry.1, tick);
        if let Some(key) = self.recency.remove(&stale) {
            self.recency.insert(tick, key);
        }
        Some(&entry.0)
    }

    /// Whether `key` is present, without marking `key` as used.
    pub fn contains(&self, key: &K) -> bool {
        self.entries.contains_key(key)
    }

    /// Stores `value` at `key`, marking `key` as most recently used.
    ///
    /// Returns the evicted entry, if storing `value` required an eviction.
    pub fn insert(&mut self, key: K, value: V) -> Option<(K, V)> {
        let tick = self.next_tick();

        if let Some(entry) = self.entries.get_mut(&key) {
            let stale = std::mem::replace(&mut entry.1, tick);
            entry.0 = value;
            self.recency.remove(&stale);
            self.recency.insert(tick, key);
            return None;
        }

        let mut evicted = None;
        if self.entries.len() >= self.capacity {
            if let Some((_, oldest)) = self.recency.pop_first() {
                if let Some((value, _)) = self.entries.remove(&oldest) {
                    evicted = Some((oldest, value));
                }
            }
        }

        self.recency.insert(tick, key.clone());
        self.entries.insert(key, (value, tick));
        evicted
    }

    /// A count of stored entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Removes all entries.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.recency.clear();
    }
}
