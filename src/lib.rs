//! An insertion-ordered map with array-like convenience operations.
//!
//! [`OrderedMap`] is a `HashMap`-style container that remembers the order in
//! which keys were first inserted, and layers positional access
//! ([`first_n`](OrderedMap::first_n), [`last_keys`](OrderedMap::last_keys)),
//! search ([`find`](OrderedMap::find)), transformation
//! ([`filter`](OrderedMap::filter), [`map_values`](OrderedMap::map_values),
//! [`concat`](OrderedMap::concat)), aggregation ([`fold`](OrderedMap::fold),
//! [`reduce`](OrderedMap::reduce), [`any`](OrderedMap::any),
//! [`all`](OrderedMap::all)) and reordering ([`reverse`](OrderedMap::reverse),
//! [`sort`](OrderedMap::sort), [`sorted`](OrderedMap::sorted)) on top of that
//! order.
//!
//! Lookup, insertion, update and removal are O(1) amortized; the
//! order-dependent operations are O(len).
//!
//! # Example
//!
//! ```
//! use ordered_collection::OrderedMap;
//!
//! let mut scores = OrderedMap::new();
//! scores.insert("ana", 3);
//! scores.insert("bo", 1);
//! scores.insert("cy", 2);
//!
//! assert_eq!(scores.first(), Some(&3));
//! assert_eq!(scores.last_keys(2), vec![&"bo", &"cy"]);
//!
//! let odd = scores.filter(|_, v| v % 2 == 1);
//! assert_eq!(odd.len(), 2);
//! assert_eq!(scores.len(), 3);
//!
//! scores.sort();
//! assert_eq!(scores.map(|k, _| *k), vec!["bo", "cy", "ana"]);
//! ```

use derive_where::derive_where;
use index_list::{Index, IndexList};
use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

mod entry;
mod ops;

pub use entry::{Entry, OccupiedEntry, VacantEntry};
pub use ops::EmptyReduceError;

/// An insertion-ordered map from `K` to `V`.
///
/// A key inserted for the first time is appended to the logical end of the
/// sequence. Re-inserting an existing key replaces its value without moving
/// its position. Removing a key unlinks it in O(1); inserting the same key
/// again afterwards is a fresh insertion and lands at the end.
///
/// Internally a `HashMap<K, Index>` maps each key to a slot in an
/// `IndexList<(K, V)>`, a doubly-linked list whose nodes live in one slab
/// vector. The list owns the `(K, V)` pairs and defines the iteration order;
/// the hash map provides O(1) lookup and O(1) unlinking by stored index,
/// without per-node allocations or O(n) shifts on removal from the middle.
/// Keys are stored on both sides, which is why mutating construction paths
/// require `K: Clone`.
///
/// [`iter`](OrderedMap::iter), [`keys`](OrderedMap::keys) and
/// [`values`](OrderedMap::values) all yield in insertion order, as do the
/// derived operations defined on top of them. The order itself can only be
/// changed wholesale, by [`reverse`](OrderedMap::reverse) or
/// [`sort`](OrderedMap::sort)/[`sort_by`](OrderedMap::sort_by).
///
/// Debug builds check that both halves of the structure agree on length.
#[derive_where(Default)]
pub struct OrderedMap<K, V> {
    map: HashMap<K, Index>,
    order: IndexList<(K, V)>,
}

impl<K, V> OrderedMap<K, V> {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self {
            map: HashMap::new(),
            order: IndexList::new(),
        }
    }

    /// Number of pairs in the map.
    pub fn len(&self) -> usize {
        let Self { map, order } = self;
        debug_assert_eq!(map.len(), order.len());
        order.len()
    }

    pub fn is_empty(&self) -> bool {
        let Self { map, order } = self;
        debug_assert_eq!(map.is_empty(), order.is_empty());
        order.is_empty()
    }

    /// Iterator over `(&K, &V)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.order.iter().map(|(k, v)| (k, v))
    }

    /// Iterator over keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.iter().map(|(k, _)| k)
    }

    /// Iterator over values in insertion order.
    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.iter().map(|(_, v)| v)
    }
}

impl<K: Eq + Hash, V> OrderedMap<K, V> {
    /// Inserts a key-value pair.
    ///
    /// If the key is new it is appended to the end and `None` is returned.
    /// If the key already exists its value is replaced in place, the old
    /// value is returned, and the pair keeps its position in the order.
    pub fn insert(&mut self, key: K, value: V) -> Option<V>
    where
        K: Clone,
    {
        match self.entry(key) {
            Entry::Occupied(mut occupied) => Some(occupied.insert(value)),
            Entry::Vacant(vacant) => {
                vacant.insert(value);
                None
            }
        }
    }

    pub fn get<Q: Eq + Hash + ?Sized>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
    {
        let Self { map, order } = self;
        let &idx = map.get(key)?;
        let (k, v) = order.get(idx).unwrap();
        debug_assert!(*k.borrow() == *key);
        Some(v)
    }

    pub fn get_mut<Q: Eq + Hash + ?Sized>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
    {
        let Self { map, order } = self;
        let &idx = map.get(key)?;
        let (k, v) = order.get_mut(idx).unwrap();
        debug_assert!(*(*k).borrow() == *key);
        Some(v)
    }

    pub fn contains_key<Q: Eq + Hash + ?Sized>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
    {
        self.map.contains_key(key)
    }

    /// Removes `key` if present and returns its value, in O(1).
    pub fn remove<Q: Eq + Hash + ?Sized>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
    {
        self.remove_entry(key).map(|(_, v)| v)
    }

    pub fn remove_entry<Q: Eq + Hash + ?Sized>(&mut self, key: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
    {
        let Self { map, order } = self;
        let idx = map.remove(key)?;
        let (k_stored, v) = order.remove(idx).unwrap();
        debug_assert!(*k_stored.borrow() == *key);
        Some((k_stored, v))
    }

    /// Removes and returns the oldest pair.
    pub fn pop_front(&mut self) -> Option<(K, V)> {
        let Self { map, order } = self;
        let (k, v) = order.remove_first()?;
        map.remove(&k).unwrap();
        Some((k, v))
    }

    /// Removes and returns the newest pair.
    pub fn pop_back(&mut self) -> Option<(K, V)> {
        let Self { map, order } = self;
        let (k, v) = order.remove_last()?;
        map.remove(&k).unwrap();
        Some((k, v))
    }

    pub fn clear(&mut self) {
        let Self { map, order } = self;
        map.clear();
        order.clear();
    }

    /// Gets the entry for `key`, for in-place manipulation.
    pub fn entry(&mut self, key: K) -> Entry<'_, K, V> {
        let Self { map, order } = self;
        Entry::new(map.entry(key), order)
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for OrderedMap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K: Eq + Hash + Clone, V: Clone> Clone for OrderedMap<K, V> {
    /// Rebuilds both halves of the structure, so the copy has storage and
    /// list indices of its own. Values are cloned shallowly.
    fn clone(&self) -> Self {
        self.iter().map(|(k, v)| (k.clone(), v.clone())).collect()
    }
}

impl<K: Eq + Hash + Clone, V> FromIterator<(K, V)> for OrderedMap<K, V> {
    /// Collects pairs in order. A key occurring more than once keeps the
    /// position of its first occurrence and the value of its last.
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl<K: Eq + Hash + Clone, V> Extend<(K, V)> for OrderedMap<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}

impl<K: Eq + Hash + Clone, V, const N: usize> From<[(K, V); N]> for OrderedMap<K, V> {
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

impl<K, V> IntoIterator for OrderedMap<K, V> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    fn into_iter(self) -> IntoIter<K, V> {
        IntoIter { order: self.order }
    }
}

/// Owning iterator over the pairs of an [`OrderedMap`], in insertion order.
pub struct IntoIter<K, V> {
    order: IndexList<(K, V)>,
}

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<(K, V)> {
        self.order.remove_first()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.order.len();
        (n, Some(n))
    }
}

impl<K, V> ExactSizeIterator for IntoIter<K, V> {}
