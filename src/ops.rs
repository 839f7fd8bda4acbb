//! Positional, search, transform, aggregate and ordering operations layered
//! on the insertion order of [`OrderedMap`].

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::hash::Hash;

use thiserror::Error;

use crate::OrderedMap;

/// Error returned by [`OrderedMap::reduce`] when the map has no pairs to
/// seed the accumulator from.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("reduce of an empty map with no initial value")]
pub struct EmptyReduceError;

impl<K, V> OrderedMap<K, V> {
    /// Value of the oldest pair, or `None` if the map is empty.
    pub fn first(&self) -> Option<&V> {
        self.values().next()
    }

    /// Key of the oldest pair.
    pub fn first_key(&self) -> Option<&K> {
        self.keys().next()
    }

    /// Value of the newest pair, or `None` if the map is empty.
    pub fn last(&self) -> Option<&V> {
        self.values().last()
    }

    /// Key of the newest pair.
    pub fn last_key(&self) -> Option<&K> {
        self.keys().last()
    }

    /// The first `min(n, len)` values in insertion order.
    ///
    /// A negative count is read from the other end: `first_n(-n)` is
    /// `last_n(n)`.
    pub fn first_n(&self, n: isize) -> Vec<&V> {
        if n < 0 {
            self.tail_values(n.unsigned_abs())
        } else {
            self.head_values(n.unsigned_abs())
        }
    }

    /// The last `min(n, len)` values, oldest to newest within the tail.
    ///
    /// A negative count is read from the other end: `last_n(-n)` is
    /// `first_n(n)`.
    pub fn last_n(&self, n: isize) -> Vec<&V> {
        if n < 0 {
            self.head_values(n.unsigned_abs())
        } else {
            self.tail_values(n.unsigned_abs())
        }
    }

    /// Key mirror of [`first_n`](OrderedMap::first_n).
    pub fn first_keys(&self, n: isize) -> Vec<&K> {
        if n < 0 {
            self.tail_keys(n.unsigned_abs())
        } else {
            self.head_keys(n.unsigned_abs())
        }
    }

    /// Key mirror of [`last_n`](OrderedMap::last_n).
    pub fn last_keys(&self, n: isize) -> Vec<&K> {
        if n < 0 {
            self.head_keys(n.unsigned_abs())
        } else {
            self.tail_keys(n.unsigned_abs())
        }
    }

    fn head_values(&self, n: usize) -> Vec<&V> {
        self.values().take(n).collect()
    }

    fn tail_values(&self, n: usize) -> Vec<&V> {
        let n = n.min(self.len());
        self.values().skip(self.len() - n).collect()
    }

    fn head_keys(&self, n: usize) -> Vec<&K> {
        self.keys().take(n).collect()
    }

    fn tail_keys(&self, n: usize) -> Vec<&K> {
        let n = n.min(self.len());
        self.keys().skip(self.len() - n).collect()
    }

    /// First value, in the current order, for which `pred` returns true.
    pub fn find<F>(&self, mut pred: F) -> Option<&V>
    where
        F: FnMut(&K, &V) -> bool,
    {
        self.iter().find(|&(k, v)| pred(k, v)).map(|(_, v)| v)
    }

    /// Same scan as [`find`](OrderedMap::find), returning the key instead.
    pub fn find_key<F>(&self, mut pred: F) -> Option<&K>
    where
        F: FnMut(&K, &V) -> bool,
    {
        self.iter().find(|&(k, v)| pred(k, v)).map(|(k, _)| k)
    }

    /// Applies `f` to every pair in order, collecting the results.
    pub fn map<T, F>(&self, mut f: F) -> Vec<T>
    where
        F: FnMut(&K, &V) -> T,
    {
        self.iter().map(|(k, v)| f(k, v)).collect()
    }

    /// Visits every pair in order for side effects; chainable.
    pub fn each<F>(&self, mut f: F) -> &Self
    where
        F: FnMut(&K, &V),
    {
        for (k, v) in self.iter() {
            f(k, v);
        }
        self
    }

    /// True if any pair satisfies `pred`. Stops at the first match; false
    /// for an empty map.
    pub fn any<F>(&self, mut pred: F) -> bool
    where
        F: FnMut(&K, &V) -> bool,
    {
        self.iter().any(|(k, v)| pred(k, v))
    }

    /// True if every pair satisfies `pred`. Stops at the first failure;
    /// vacuously true for an empty map.
    pub fn all<F>(&self, mut pred: F) -> bool
    where
        F: FnMut(&K, &V) -> bool,
    {
        self.iter().all(|(k, v)| pred(k, v))
    }

    /// Left fold over the pairs in insertion order, starting from `init`.
    pub fn fold<T, F>(&self, init: T, mut f: F) -> T
    where
        F: FnMut(T, &K, &V) -> T,
    {
        let mut acc = init;
        for (k, v) in self.iter() {
            acc = f(acc, k, v);
        }
        acc
    }

    /// Left fold seeded with the first value, folding over the remainder.
    ///
    /// A single-pair map returns its value without invoking `f`.
    ///
    /// # Errors
    ///
    /// [`EmptyReduceError`] if the map has no pairs.
    pub fn reduce<F>(&self, mut f: F) -> Result<V, EmptyReduceError>
    where
        V: Clone,
        F: FnMut(V, &K, &V) -> V,
    {
        let mut iter = self.iter();
        let (_, seed) = iter.next().ok_or(EmptyReduceError)?;
        let mut acc = seed.clone();
        for (k, v) in iter {
            acc = f(acc, k, v);
        }
        Ok(acc)
    }
}

impl<K: Eq + Hash, V> OrderedMap<K, V> {
    /// True if every given key is present. Vacuously true when `keys` is
    /// empty.
    pub fn contains_all<'a, Q, I>(&self, keys: I) -> bool
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized + 'a,
        I: IntoIterator<Item = &'a Q>,
    {
        keys.into_iter().all(|key| self.contains_key(key))
    }

    /// True if at least one given key is present. Vacuously false when
    /// `keys` is empty.
    pub fn contains_any<'a, Q, I>(&self, keys: I) -> bool
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized + 'a,
        I: IntoIterator<Item = &'a Q>,
    {
        keys.into_iter().any(|key| self.contains_key(key))
    }

    /// Applies `f` to the value under `key` if present, keeping its
    /// position; no-op otherwise. Chainable.
    pub fn update<Q, F>(&mut self, key: &Q, f: F) -> &mut Self
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
        F: FnOnce(&mut V),
    {
        if let Some(value) = self.get_mut(key) {
            f(value);
        }
        self
    }

    /// New map with the pairs for which `pred` returns true, in their
    /// original relative order. The receiver is untouched.
    pub fn filter<F>(&self, mut pred: F) -> Self
    where
        K: Clone,
        V: Clone,
        F: FnMut(&K, &V) -> bool,
    {
        self.iter()
            .filter(|&(k, v)| pred(k, v))
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    /// New map with the same keys in the same order, each value replaced by
    /// `f`'s result.
    pub fn map_values<T, F>(&self, mut f: F) -> OrderedMap<K, T>
    where
        K: Clone,
        F: FnMut(&K, &V) -> T,
    {
        self.iter().map(|(k, v)| (k.clone(), f(k, v))).collect()
    }

    /// Maps every pair to a sub-map and concatenates the results in source
    /// order. When sub-maps share a key, the later one wins and the earlier
    /// occurrence keeps the position, as in [`concat`](OrderedMap::concat).
    pub fn flat_map<T, F>(&self, mut f: F) -> OrderedMap<K, T>
    where
        K: Clone,
        F: FnMut(&K, &V) -> OrderedMap<K, T>,
    {
        let mut merged = OrderedMap::new();
        for (k, v) in self.iter() {
            merged.extend(f(k, v));
        }
        merged
    }

    /// New map combining the receiver with `others`, in argument order.
    ///
    /// Starts from a clone of the receiver; each operand's pairs are then
    /// overlaid: an existing key is updated in place without moving, a new
    /// key is appended. No operand is mutated.
    pub fn concat<'a, I>(&self, others: I) -> Self
    where
        K: Clone + 'a,
        V: Clone + 'a,
        I: IntoIterator<Item = &'a Self>,
    {
        let mut merged = self.clone();
        for other in others {
            for (k, v) in other.iter() {
                merged.insert(k.clone(), v.clone());
            }
        }
        merged
    }

    /// Reverses the order of all pairs in place; chainable. Applying it
    /// twice restores the original order.
    pub fn reverse(&mut self) -> &mut Self
    where
        K: Clone,
    {
        let mut entries = self.drain_to_vec();
        entries.reverse();
        self.extend(entries);
        self
    }

    /// Stable in-place sort of the pairs by natural value order, ascending.
    /// Equal values keep their relative order. Chainable.
    pub fn sort(&mut self) -> &mut Self
    where
        K: Clone,
        V: Ord,
    {
        self.sort_by(|a, b, _, _| a.cmp(b))
    }

    /// Stable in-place sort by `cmp(value_a, value_b, key_a, key_b)`.
    /// Chainable.
    pub fn sort_by<F>(&mut self, mut cmp: F) -> &mut Self
    where
        K: Clone,
        F: FnMut(&V, &V, &K, &K) -> Ordering,
    {
        let mut entries = self.drain_to_vec();
        entries.sort_by(|(ka, va), (kb, vb)| cmp(va, vb, ka, kb));
        self.extend(entries);
        self
    }

    /// Like [`sort`](OrderedMap::sort), but on a new map; the receiver is
    /// untouched.
    pub fn sorted(&self) -> Self
    where
        K: Clone,
        V: Clone + Ord,
    {
        self.sorted_by(|a, b, _, _| a.cmp(b))
    }

    /// Like [`sort_by`](OrderedMap::sort_by), but on a new map; the
    /// receiver is untouched.
    pub fn sorted_by<F>(&self, cmp: F) -> Self
    where
        K: Clone,
        V: Clone,
        F: FnMut(&V, &V, &K, &K) -> Ordering,
    {
        let mut out = self.clone();
        out.sort_by(cmp);
        out
    }

    /// Empties the map and returns the pairs in order. Reinserting them is
    /// how the whole-map reorderings rebuild both halves of the storage.
    fn drain_to_vec(&mut self) -> Vec<(K, V)> {
        self.map.clear();
        let mut entries = Vec::with_capacity(self.order.len());
        while let Some(pair) = self.order.remove_first() {
            entries.push(pair);
        }
        entries
    }
}
