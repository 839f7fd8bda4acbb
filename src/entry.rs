use index_list::{Index, IndexList};
use std::collections::hash_map::{
    Entry as StdEntry, OccupiedEntry as StdOccupiedEntry, VacantEntry as StdVacantEntry,
};
use std::mem;

/// A view into a single slot of an [`OrderedMap`](crate::OrderedMap), which
/// may be occupied or vacant.
///
/// The entry bridges the hash side (where presence is decided) and the order
/// list (where the pair lives). Inserting through a vacant entry appends the
/// pair at the end of the order; nothing done through an occupied entry moves
/// the pair.
pub enum Entry<'a, K, V> {
    Occupied(OccupiedEntry<'a, K, V>),
    Vacant(VacantEntry<'a, K, V>),
}

pub struct OccupiedEntry<'a, K, V> {
    entry: StdOccupiedEntry<'a, K, Index>,
    order: &'a mut IndexList<(K, V)>,
}

pub struct VacantEntry<'a, K, V> {
    entry: StdVacantEntry<'a, K, Index>,
    order: &'a mut IndexList<(K, V)>,
}

impl<'a, K, V> Entry<'a, K, V> {
    pub(crate) fn new(entry: StdEntry<'a, K, Index>, order: &'a mut IndexList<(K, V)>) -> Self {
        match entry {
            StdEntry::Occupied(entry) => Entry::Occupied(OccupiedEntry { entry, order }),
            StdEntry::Vacant(entry) => Entry::Vacant(VacantEntry { entry, order }),
        }
    }

    /// The key this entry was looked up with.
    pub fn key(&self) -> &K {
        match self {
            Entry::Occupied(occupied) => occupied.key(),
            Entry::Vacant(vacant) => vacant.key(),
        }
    }

    /// Applies `f` to the value if the entry is occupied.
    pub fn and_modify<F: FnOnce(&mut V)>(self, f: F) -> Self {
        match self {
            Entry::Occupied(mut occupied) => {
                f(occupied.get_mut());
                Entry::Occupied(occupied)
            }
            vacant => vacant,
        }
    }
}

impl<'a, K: Clone, V> Entry<'a, K, V> {
    pub fn or_insert(self, default: V) -> &'a mut V {
        self.or_insert_with(|| default)
    }

    pub fn or_insert_with<F: FnOnce() -> V>(self, default: F) -> &'a mut V {
        match self {
            Entry::Occupied(occupied) => occupied.into_mut(),
            Entry::Vacant(vacant) => vacant.insert(default()),
        }
    }

    pub fn or_default(self) -> &'a mut V
    where
        V: Default,
    {
        self.or_insert_with(V::default)
    }
}

impl<'a, K, V> OccupiedEntry<'a, K, V> {
    pub fn key(&self) -> &K {
        self.entry.key()
    }

    pub fn get(&self) -> &V {
        let Self { entry, order } = self;
        let idx = *entry.get();
        let (_, v) = order.get(idx).unwrap();
        v
    }

    pub fn get_mut(&mut self) -> &mut V {
        let Self { entry, order } = self;
        let idx = *entry.get();
        let (_, v) = order.get_mut(idx).unwrap();
        v
    }

    pub fn into_mut(self) -> &'a mut V {
        let Self { entry, order } = self;
        let idx = *entry.get();
        let (_, v) = order.get_mut(idx).unwrap();
        v
    }

    /// Replaces the value, returning the old one. The pair keeps its
    /// position in the order.
    pub fn insert(&mut self, value: V) -> V {
        mem::replace(self.get_mut(), value)
    }

    pub fn remove_entry(self) -> (K, V) {
        let Self { entry, order } = self;
        let idx = entry.remove();
        order.remove(idx).unwrap()
    }

    pub fn remove(self) -> V {
        self.remove_entry().1
    }
}

impl<'a, K, V> VacantEntry<'a, K, V> {
    pub fn key(&self) -> &K {
        self.entry.key()
    }

    pub fn into_key(self) -> K {
        self.entry.into_key()
    }

    /// Inserts the value, appending the new pair at the end of the order.
    pub fn insert(self, value: V) -> &'a mut V
    where
        K: Clone,
    {
        let Self { entry, order } = self;
        let key = entry.key().clone();
        let idx = order.insert_last((key, value));
        entry.insert(idx);
        let (_, v) = order.get_mut(idx).unwrap();
        v
    }
}
