//! Implementation of maps, backed by a red-black tree
#![warn(missing_docs)]

extern crate alloc;

use alloc::vec::Vec;
use compact_str::CompactString;
use core::{fmt, iter::FusedIterator, mem};

use crate::util::Tree;

//-----------------------------------------------------------------------------------------------//

/// The error returned by a cursor operation that needs a current entry when there is none
///
/// A cursor has no current entry before the first call to `next`, after an entry has been
/// removed, and on an empty map.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CursorError;

impl fmt::Display for CursorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cursor has no current entry")
    }
}

impl core::error::Error for CursorError {}

//-----------------------------------------------------------------------------------------------//

// Key of a live leaf. Leaves on a search path always have an occupied slot.
fn key_of<K, V>(slots: &[Option<(K, V)>], leaf: usize) -> &K {
    match &slots[leaf] {
        Some((key, _)) => key,
        None => unreachable!(),
    }
}

//-----------------------------------------------------------------------------------------------//

/// A simple map between keys and values, implemented using a red-black tree.
///
/// Keys are held in ascending order, and insertion, lookup and removal are all logarithmic in
/// the worst case. Keys are compared pairwise with `Ord`; if the implementation of `Ord` is
/// inconsistent with equality then the ordering of the map is unspecified, although no operation
/// will crash. A key is never replaced once stored - setting an existing key again only moves
/// the value.
#[derive(Clone)]
pub struct Map<K, V>
where
    K: Ord,
{
    tree: Tree,
    slots: Vec<Option<(K, V)>>,
}

impl<K, V> Map<K, V>
where
    K: Ord,
{
    /// Constructor
    pub fn new() -> Map<K, V> {
        Map {
            tree: Tree::new(),
            slots: Vec::new(),
        }
    }

    /// Constructor
    pub fn with_capacity(capacity: usize) -> Map<K, V> {
        Map {
            tree: Tree::with_capacity(capacity),
            slots: Vec::with_capacity(capacity),
        }
    }

    /// Get the number of key/value pairs in the `Map`
    #[inline]
    pub fn count(&self) -> usize {
        self.tree.count()
    }

    /// Check if there are any key/value pairs in the `Map`
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Remove all key/value pairs from the `Map`
    pub fn clear(&mut self) {
        self.tree.clear();
        self.slots.truncate(0);
    }

    /// Reserves capacity for at least `additional` more key/value pairs
    pub fn reserve(&mut self, additional: usize) {
        debug_assert_eq!(self.slots.len(), self.tree.allocated_count());

        let required = self.tree.reserve(additional);
        if required > 0 {
            self.slots.reserve(required);
        }
    }

    /// Get a value by key.
    ///
    /// If the key is not in the tree then `None` is returned.
    pub fn get(&self, key: &K) -> Option<&V> {
        let leaf = self.tree.get_by(|x| key.cmp(key_of(&self.slots, x)));
        if !leaf == 0 {
            return None;
        }

        self.slots[leaf].as_ref().map(|(_, value)| value)
    }

    /// Get a mutable referernce by key.
    ///
    /// If the key is not in the tree then `None` is returned - this function will not create a
    /// key if it does not exist. In this case use `set` instead.
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let slots = &self.slots;
        let leaf = self.tree.get_by(|x| key.cmp(key_of(slots, x)));
        if !leaf == 0 {
            return None;
        }

        self.slots[leaf].as_mut().map(|(_, value)| value)
    }

    /// Check if a key is in the `Map`
    pub fn contains_key(&self, key: &K) -> bool {
        let leaf = self.tree.get_by(|x| key.cmp(key_of(&self.slots, x)));
        !leaf != 0
    }

    /// Check if a value is in the `Map`
    ///
    /// Values are not ordered, so this is a full walk of the map and takes linear time. Values
    /// are compared structurally with `PartialEq`.
    pub fn contains_value(&self, value: &V) -> bool
    where
        V: PartialEq,
    {
        self.iter().any(|(_, v)| v == value)
    }

    /// Set a value by key.
    ///
    /// If the key was already present its value is overwritten in place and the previous value
    /// is returned; the stored key is kept and the count is unchanged. Otherwise the key/value
    /// pair is added, the tree rebalances around it, and `None` is returned.
    pub fn set(&mut self, key: K, value: V) -> Option<V> {
        let slots = &self.slots;
        let leaf = self.tree.set_by(|x| key.cmp(key_of(slots, x)));

        if leaf == self.slots.len() {
            self.slots.push(Some((key, value)));
            None
        } else {
            match self.slots[leaf].as_mut() {
                Some((_, old)) => Some(mem::replace(old, value)),
                None => {
                    self.slots[leaf] = Some((key, value));
                    None
                }
            }
        }
    }

    /// Unset a value by key.
    ///
    /// The removed value is returned. If the key does not exist, then this function has no
    /// effect and `None` is returned.
    pub fn unset(&mut self, key: &K) -> Option<V> {
        let slots = &self.slots;
        let leaf = self.tree.get_by(|x| key.cmp(key_of(slots, x)));
        if !leaf == 0 {
            return None;
        }

        self.tree.unset(leaf);
        self.slots[leaf].take().map(|(_, value)| value)
    }

    /// Get the first key in the map
    pub fn first(&self) -> Option<(&K, &V)> {
        let leaf = self.tree.first();
        if !leaf == 0 {
            return None;
        }

        self.slots[leaf].as_ref().map(|(key, value)| (key, value))
    }

    /// Get the last key in the map
    pub fn last(&self) -> Option<(&K, &V)> {
        let leaf = self.tree.last();
        if !leaf == 0 {
            return None;
        }

        self.slots[leaf].as_ref().map(|(key, value)| (key, value))
    }

    /// Pop the first key from the map
    pub fn pop_first(&mut self) -> Option<(K, V)> {
        let leaf = self.tree.first();
        if !leaf == 0 {
            return None;
        }

        self.tree.unset(leaf);
        self.slots[leaf].take()
    }

    /// Pop the last key from the map
    pub fn pop_last(&mut self) -> Option<(K, V)> {
        let leaf = self.tree.last();
        if !leaf == 0 {
            return None;
        }

        self.tree.unset(leaf);
        self.slots[leaf].take()
    }

    /// Iterate over the key/value pairs in the `Map`
    pub fn iter(&self) -> MapIterator<'_, K, V> {
        MapIterator {
            map: self,
            leaf: self.tree.first(),
            count: self.tree.count(),
        }
    }

    /// Iterate over the keys in the `Map`
    pub fn keys(&self) -> MapKeyIterator<'_, K, V> {
        MapKeyIterator { iter: self.iter() }
    }

    /// Iterate over the values in the `Map`
    pub fn values(&self) -> MapValueIterator<'_, K, V> {
        MapValueIterator { iter: self.iter() }
    }

    /// Get a cursor over the key/value pairs in the `Map`
    ///
    /// A cursor walks the map in ascending key order like an iterator, but borrows the map
    /// exclusively so the current entry can be removed or have its value replaced in place as
    /// the walk goes. The cursor computes the position of the following entry before a removal
    /// takes effect, so removing the current entry never disturbs the rest of the walk.
    pub fn cursor(&mut self) -> MapCursor<'_, K, V> {
        let leaf = self.tree.first();
        MapCursor {
            map: self,
            leaf,
            last: !0,
        }
    }
}

impl<K, V> Default for Map<K, V>
where
    K: Ord,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, K, V> IntoIterator for &'a Map<K, V>
where
    K: Ord,
{
    type Item = (&'a K, &'a V);
    type IntoIter = MapIterator<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K, V> FromIterator<(K, V)> for Map<K, V>
where
    K: Ord,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut map = Self::with_capacity(iter.size_hint().0);
        for (key, value) in iter {
            map.set(key, value);
        }
        map
    }
}

impl<K, V> Extend<(K, V)> for Map<K, V>
where
    K: Ord,
{
    /// Set every pair from the iterator, in the iterator's own order. A later pair for a
    /// duplicate key wins.
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.set(key, value);
        }
    }
}

//-----------------------------------------------------------------------------------------------//

/// Iterator over a `Map`
pub struct MapIterator<'a, K, V>
where
    K: Ord,
{
    map: &'a Map<K, V>,
    leaf: usize,
    count: usize,
}

impl<'a, K, V> Iterator for MapIterator<'a, K, V>
where
    K: Ord,
{
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<(&'a K, &'a V)> {
        if !self.leaf == 0 {
            return None;
        }

        let leaf = self.leaf;
        self.leaf = self.map.tree.next(leaf);
        self.count -= 1;

        self.map.slots[leaf].as_ref().map(|(key, value)| (key, value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.count, Some(self.count))
    }
}

impl<K, V> FusedIterator for MapIterator<'_, K, V> where K: Ord {}

//-----------------------------------------------------------------------------------------------//

/// Iterator over the keys of a `Map`
pub struct MapKeyIterator<'a, K, V>
where
    K: Ord,
{
    iter: MapIterator<'a, K, V>,
}

impl<'a, K, V> Iterator for MapKeyIterator<'a, K, V>
where
    K: Ord,
{
    type Item = &'a K;

    fn next(&mut self) -> Option<&'a K> {
        self.iter.next().map(|(key, _)| key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<K, V> FusedIterator for MapKeyIterator<'_, K, V> where K: Ord {}

//-----------------------------------------------------------------------------------------------//

/// Iterator over the values of a `Map`
pub struct MapValueIterator<'a, K, V>
where
    K: Ord,
{
    iter: MapIterator<'a, K, V>,
}

impl<'a, K, V> Iterator for MapValueIterator<'a, K, V>
where
    K: Ord,
{
    type Item = &'a V;

    fn next(&mut self) -> Option<&'a V> {
        self.iter.next().map(|(_, value)| value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<K, V> FusedIterator for MapValueIterator<'_, K, V> where K: Ord {}

//-----------------------------------------------------------------------------------------------//

/// A mutating cursor over a `Map`
///
/// Walks the key/value pairs in ascending key order. Unlike an iterator, the cursor can remove
/// the entry it most recently produced, or replace that entry's value in place; both require a
/// current entry and report `CursorError` otherwise. The cursor holds the map's unique borrow,
/// so no other reader or writer can interleave with the walk.
pub struct MapCursor<'a, K, V>
where
    K: Ord,
{
    map: &'a mut Map<K, V>,
    leaf: usize,
    last: usize,
}

impl<K, V> MapCursor<'_, K, V>
where
    K: Ord,
{
    /// Step to the next key/value pair
    ///
    /// Returns `None` once the walk is exhausted. The final entry remains current, so it can
    /// still be removed or have its value replaced.
    pub fn next(&mut self) -> Option<(&K, &V)> {
        if !self.leaf == 0 {
            return None;
        }

        let leaf = self.leaf;
        self.leaf = self.map.tree.next(leaf);
        self.last = leaf;

        self.map.slots[leaf].as_ref().map(|(key, value)| (key, value))
    }

    /// Get a mutable reference to the value of the current entry
    ///
    /// The key cannot be reached this way - keys are immutable once stored, since changing one
    /// would disturb the ordering of the tree.
    pub fn value_mut(&mut self) -> Result<&mut V, CursorError> {
        if !self.last == 0 {
            return Err(CursorError);
        }

        match self.map.slots[self.last].as_mut() {
            Some((_, value)) => Ok(value),
            None => unreachable!(),
        }
    }

    /// Remove the current entry and return it
    ///
    /// The entry most recently produced by `next` is removed from the map. Removing twice
    /// without an intervening `next`, or before `next` has produced anything, fails with
    /// `CursorError` and leaves the map untouched.
    pub fn remove(&mut self) -> Result<(K, V), CursorError> {
        if !self.last == 0 {
            return Err(CursorError);
        }

        let leaf = self.last;
        self.last = !0;
        self.map.tree.unset(leaf);

        match self.map.slots[leaf].take() {
            Some(entry) => Ok(entry),
            None => unreachable!(),
        }
    }
}

//-----------------------------------------------------------------------------------------------//

/// A simple map between strings and values, implemented using a red-black tree.
///
/// This is specialised version of `Map` that stores keys as a string.
pub struct StringMap<V> {
    tree: Tree,
    slots: Vec<Option<(CompactString, V)>>,
}

impl<V> StringMap<V> {
    /// Constructor
    pub fn new() -> StringMap<V> {
        StringMap {
            tree: Tree::new(),
            slots: Vec::new(),
        }
    }

    /// Constructor
    pub fn with_capacity(capacity: usize) -> StringMap<V> {
        StringMap {
            tree: Tree::with_capacity(capacity),
            slots: Vec::with_capacity(capacity),
        }
    }

    /// Get the number of string/value pairs in the `StringMap`
    #[inline]
    pub fn count(&self) -> usize {
        self.tree.count()
    }

    /// Check if there are any string/value pairs in the `StringMap`
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Remove all string/value pairs from the `StringMap`
    pub fn clear(&mut self) {
        self.tree.clear();
        self.slots.truncate(0);
    }

    /// Reserves capacity for at least `additional` more string/value pairs
    pub fn reserve(&mut self, additional: usize) {
        debug_assert_eq!(self.slots.len(), self.tree.allocated_count());

        let required = self.tree.reserve(additional);
        if required > 0 {
            self.slots.reserve(required);
        }
    }

    /// Get a value by string.
    ///
    /// If the string is not in the tree then `None` is returned.
    pub fn get(&self, key: &str) -> Option<&V> {
        let leaf = self.tree.get_by(|x| key.cmp(key_of(&self.slots, x).as_str()));
        if !leaf == 0 {
            return None;
        }

        self.slots[leaf].as_ref().map(|(_, value)| value)
    }

    /// Get a mutable referernce by string.
    ///
    /// If the string is not in the tree then `None` is returned - this function will not create
    /// a string if it does not exist. In this case use `set` instead.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut V> {
        let slots = &self.slots;
        let leaf = self.tree.get_by(|x| key.cmp(key_of(slots, x).as_str()));
        if !leaf == 0 {
            return None;
        }

        self.slots[leaf].as_mut().map(|(_, value)| value)
    }

    /// Check if a string is in the `StringMap`
    pub fn contains_key(&self, key: &str) -> bool {
        let leaf = self.tree.get_by(|x| key.cmp(key_of(&self.slots, x).as_str()));
        !leaf != 0
    }

    /// Set a value by string.
    ///
    /// If the string was already present its value is overwritten in place and the previous
    /// value is returned; otherwise the string/value pair is added and `None` is returned.
    pub fn set(&mut self, key: &str, value: V) -> Option<V> {
        let slots = &self.slots;
        let leaf = self.tree.set_by(|x| key.cmp(key_of(slots, x).as_str()));

        if leaf == self.slots.len() {
            self.slots.push(Some((CompactString::new(key), value)));
            None
        } else {
            match self.slots[leaf].as_mut() {
                Some((_, old)) => Some(mem::replace(old, value)),
                None => {
                    self.slots[leaf] = Some((CompactString::new(key), value));
                    None
                }
            }
        }
    }

    /// Unset a value by string.
    ///
    /// The removed value is returned. If the string does not exist, then this function has no
    /// effect and `None` is returned.
    pub fn unset(&mut self, key: &str) -> Option<V> {
        let slots = &self.slots;
        let leaf = self.tree.get_by(|x| key.cmp(key_of(slots, x).as_str()));
        if !leaf == 0 {
            return None;
        }

        self.tree.unset(leaf);
        self.slots[leaf].take().map(|(_, value)| value)
    }

    /// Get the first string in the map
    pub fn first(&self) -> Option<(&str, &V)> {
        let leaf = self.tree.first();
        if !leaf == 0 {
            return None;
        }

        self.slots[leaf].as_ref().map(|(key, value)| (key.as_str(), value))
    }

    /// Get the last string in the map
    pub fn last(&self) -> Option<(&str, &V)> {
        let leaf = self.tree.last();
        if !leaf == 0 {
            return None;
        }

        self.slots[leaf].as_ref().map(|(key, value)| (key.as_str(), value))
    }

    /// Pop the first string from the map
    pub fn pop_first(&mut self) -> Option<(CompactString, V)> {
        let leaf = self.tree.first();
        if !leaf == 0 {
            return None;
        }

        self.tree.unset(leaf);
        self.slots[leaf].take()
    }

    /// Pop the last string from the map
    pub fn pop_last(&mut self) -> Option<(CompactString, V)> {
        let leaf = self.tree.last();
        if !leaf == 0 {
            return None;
        }

        self.tree.unset(leaf);
        self.slots[leaf].take()
    }

    /// Iterate over the string/value pairs in the `StringMap`
    pub fn iter(&self) -> StringMapIterator<'_, V> {
        StringMapIterator {
            map: self,
            leaf: self.tree.first(),
            count: self.tree.count(),
        }
    }
}

impl<V> Default for StringMap<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, V> IntoIterator for &'a StringMap<V> {
    type Item = (&'a str, &'a V);
    type IntoIter = StringMapIterator<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, V> FromIterator<(&'a str, V)> for StringMap<V> {
    fn from_iter<I: IntoIterator<Item = (&'a str, V)>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut map = Self::with_capacity(iter.size_hint().0);
        for (key, value) in iter {
            map.set(key, value);
        }
        map
    }
}

//-----------------------------------------------------------------------------------------------//

/// Iterator over a `StringMap`
pub struct StringMapIterator<'a, V> {
    map: &'a StringMap<V>,
    leaf: usize,
    count: usize,
}

impl<'a, V> Iterator for StringMapIterator<'a, V> {
    type Item = (&'a str, &'a V);

    fn next(&mut self) -> Option<(&'a str, &'a V)> {
        if !self.leaf == 0 {
            return None;
        }

        let leaf = self.leaf;
        self.leaf = self.map.tree.next(leaf);
        self.count -= 1;

        self.map.slots[leaf].as_ref().map(|(key, value)| (key.as_str(), value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.count, Some(self.count))
    }
}

impl<V> FusedIterator for StringMapIterator<'_, V> {}

//-----------------------------------------------------------------------------------------------//

#[test]
// A very simple test of setting a map
fn test_map_0() {
    use alloc::{
        string::{String, ToString},
        vec,
    };

    let mut map = Map::new();

    debug_assert_eq!(map.set(5, "Five".to_string()), None);
    debug_assert_eq!(map.set(1, "One".to_string()), None);
    debug_assert_eq!(map.set(9, "Nine".to_string()), None);

    debug_assert_eq!(map.get(&5), Some(&"Five".to_string()));
    debug_assert_eq!(map.get(&4), None);
    debug_assert!(map.contains_key(&9));
    debug_assert!(!map.contains_key(&2));

    let v: Vec<(i32, String)> = map.iter().map(|(k, v)| (*k, v.clone())).collect();
    debug_assert_eq!(
        v,
        vec![
            (1, "One".to_string()),
            (5, "Five".to_string()),
            (9, "Nine".to_string())
        ]
    );
}

#[test]
// Setting an existing key overwrites the value in place
fn test_map_1() {
    use alloc::string::ToString;

    let mut map = Map::new();

    debug_assert_eq!(map.set(7, "old".to_string()), None);
    debug_assert_eq!(map.set(7, "new".to_string()), Some("old".to_string()));

    debug_assert_eq!(map.count(), 1);
    debug_assert_eq!(map.get(&7), Some(&"new".to_string()));

    debug_assert_eq!(map.unset(&7), Some("new".to_string()));
    debug_assert_eq!(map.unset(&7), None);
    debug_assert_eq!(map.count(), 0);
}

#[test]
// Unsetting keys keeps the remaining keys in order
fn test_map_2() {
    use alloc::vec;

    let mut map = Map::new();

    for key in [5, 3, 8, 1, 4, 7, 9] {
        map.set(key, key * 10);
    }

    let keys: Vec<i32> = map.keys().copied().collect();
    debug_assert_eq!(keys, vec![1, 3, 4, 5, 7, 8, 9]);

    debug_assert_eq!(map.unset(&3), Some(30));
    debug_assert_eq!(map.unset(&8), Some(80));

    let keys: Vec<i32> = map.keys().copied().collect();
    debug_assert_eq!(keys, vec![1, 4, 5, 7, 9]);
    debug_assert_eq!(map.count(), 5);
}

#[test]
// An empty map returns absences, never errors
fn test_map_3() {
    let mut map: Map<i32, i32> = Map::new();

    debug_assert!(map.is_empty());
    debug_assert_eq!(map.get(&1), None);
    debug_assert_eq!(map.unset(&1), None);
    debug_assert_eq!(map.first(), None);
    debug_assert_eq!(map.last(), None);
    debug_assert_eq!(map.pop_first(), None);
    debug_assert_eq!(map.pop_last(), None);
    debug_assert!(!map.contains_key(&1));
    debug_assert_eq!(map.iter().next(), None);
    debug_assert_eq!(map.count(), 0);
}

#[test]
// Ascending insertion, the worst case for an unbalanced tree
fn test_map_4() {
    const COUNT: usize = 1000;

    let mut map = Map::new();
    for key in 1..=COUNT {
        map.set(key, key * 2);
    }

    debug_assert_eq!(map.count(), COUNT);

    for key in 1..=COUNT {
        debug_assert_eq!(map.get(&key), Some(&(key * 2)));
    }

    let mut previous = 0;
    for (key, _) in &map {
        debug_assert!(previous < *key);
        previous = *key;
    }

    debug_assert_eq!(map.first(), Some((&1, &2)));
    debug_assert_eq!(map.last(), Some((&COUNT, &(COUNT * 2))));
}

#[test]
// A randomised mirror test against the standard ordered map
fn test_map_5() {
    use alloc::collections::BTreeMap;
    use rand::prelude::*;

    const COUNT: usize = 10000;

    let mut rng = SmallRng::seed_from_u64(1234567890);

    let mut map = Map::new();
    let mut mirror = BTreeMap::new();

    for _ in 0..COUNT {
        let key = rng.random_range(0..500);
        if rng.random_bool(0.5) {
            let value = rng.random_range(0..usize::MAX);
            debug_assert_eq!(map.set(key, value), mirror.insert(key, value));
        } else {
            debug_assert_eq!(map.unset(&key), mirror.remove(&key));
        }
    }

    debug_assert_eq!(map.count(), mirror.len());

    let mut walk = map.iter();
    for (key, value) in &mirror {
        debug_assert_eq!(walk.next(), Some((key, value)));
    }
    debug_assert_eq!(walk.next(), None);
}

#[test]
// Removing every second key through a cursor
fn test_map_6() {
    use alloc::vec;

    let mut map = Map::new();
    for key in 0..10 {
        map.set(key, key * key);
    }

    let mut cursor = map.cursor();
    debug_assert_eq!(cursor.remove(), Err(CursorError));

    let mut removed = Vec::new();
    let mut keep = true;
    while let Some((key, _)) = cursor.next() {
        if !keep {
            let key = *key;
            debug_assert_eq!(cursor.remove(), Ok((key, key * key)));
            debug_assert_eq!(cursor.remove(), Err(CursorError));
            removed.push(key);
        }
        keep = !keep;
    }

    debug_assert_eq!(removed, vec![1, 3, 5, 7, 9]);
    debug_assert_eq!(map.count(), 5);

    for key in removed {
        debug_assert!(!map.contains_key(&key));
    }

    let keys: Vec<i32> = map.keys().copied().collect();
    debug_assert_eq!(keys, vec![0, 2, 4, 6, 8]);
}

#[test]
// Replacing values in place through a cursor
fn test_map_7() {
    use alloc::vec;

    let mut map = Map::new();
    for key in 0..5 {
        map.set(key, key);
    }

    let mut cursor = map.cursor();
    debug_assert_eq!(cursor.value_mut(), Err(CursorError));

    while let Some((_, value)) = cursor.next() {
        let doubled = value * 2;
        *cursor.value_mut().unwrap() = doubled;
    }

    let values: Vec<i32> = map.values().copied().collect();
    debug_assert_eq!(values, vec![0, 2, 4, 6, 8]);
    debug_assert_eq!(map.count(), 5);
}

#[test]
// A stress test with setting and getting
fn test_map_8() {
    use alloc::string::ToString;
    use rand::prelude::*;

    const COUNT: usize = 1000000;

    let mut rng = SmallRng::seed_from_u64(1234567890);

    let mut map = Map::new();
    for _ in 0..COUNT {
        let key = rng.random_range(0..usize::MAX);
        let value = key.to_string();
        map.set(key, value);
    }

    debug_assert_eq!(map.count(), COUNT);

    let mut rng = SmallRng::seed_from_u64(1234567890);

    for _ in 0..COUNT {
        let key = rng.random_range(0..usize::MAX);
        let value = key.to_string();
        debug_assert_eq!(map.get(&key), Some(&value));
    }

    debug_assert_eq!(map.count(), COUNT);
}

#[test]
// A stress test with setting and popping from both ends
fn test_map_9() {
    use rand::prelude::*;

    const COUNT: usize = 100000;

    let mut rng = SmallRng::seed_from_u64(9876543210);

    let mut map = Map::new();
    for _ in 0..COUNT {
        let key = rng.random_range(0..usize::MAX);
        map.set(key, key);
    }

    debug_assert_eq!(map.count(), COUNT);

    let mut low = 0;
    let mut high = usize::MAX;
    while !map.is_empty() {
        let (key, value) = map.pop_first().unwrap();
        debug_assert_eq!(key, value);
        debug_assert!(low <= key);
        low = key;

        if let Some((key, value)) = map.pop_last() {
            debug_assert_eq!(key, value);
            debug_assert!(key <= high);
            high = key;
        }
    }

    debug_assert_eq!(map.count(), 0);
}

#[test]
// Extending a map applies pairs in order, so later duplicates win
fn test_map_10() {
    use alloc::vec;

    let mut map = Map::new();
    map.set(1, "a");
    map.extend(vec![(2, "b"), (3, "c"), (2, "d")]);

    debug_assert_eq!(map.count(), 3);
    debug_assert_eq!(map.get(&2), Some(&"d"));

    let map: Map<i32, &str> = vec![(4, "x"), (5, "y"), (4, "z")].into_iter().collect();
    debug_assert_eq!(map.count(), 2);
    debug_assert_eq!(map.get(&4), Some(&"z"));
}

#[test]
// Values are found by a full walk
fn test_map_11() {
    let mut map = Map::new();
    for key in 0..100 {
        map.set(key, key * 3);
    }

    debug_assert!(map.contains_value(&297));
    debug_assert!(!map.contains_value(&298));

    map.clear();
    debug_assert!(map.is_empty());
    debug_assert!(!map.contains_value(&297));

    // The map remains usable after clearing
    map.set(1, 2);
    debug_assert_eq!(map.count(), 1);
}

#[test]
// A very simple test of setting a string map
fn test_string_map_0() {
    use alloc::vec;

    let mut map = StringMap::new();

    debug_assert_eq!(map.set("five", 5), None);
    debug_assert_eq!(map.set("one", 1), None);
    debug_assert_eq!(map.set("nine", 9), None);
    debug_assert_eq!(map.set("one", 10), Some(1));

    debug_assert_eq!(map.get("five"), Some(&5));
    debug_assert_eq!(map.get("seven"), None);
    debug_assert!(map.contains_key("nine"));

    let v: Vec<(&str, i32)> = map.iter().map(|(k, v)| (k, *v)).collect();
    debug_assert_eq!(v, vec![("five", 5), ("nine", 9), ("one", 10)]);

    debug_assert_eq!(map.unset("nine"), Some(9));
    debug_assert_eq!(map.unset("nine"), None);
    debug_assert_eq!(map.count(), 2);

    debug_assert_eq!(map.first(), Some(("five", &5)));
    debug_assert_eq!(map.last(), Some(("one", &10)));
}

#[test]
// String maps pop owned strings
fn test_string_map_1() {
    use compact_str::CompactString;

    let map: StringMap<i32> = [("b", 2), ("a", 1), ("c", 3)].into_iter().collect();

    let mut map = map;
    debug_assert_eq!(map.pop_first(), Some((CompactString::new("a"), 1)));
    debug_assert_eq!(map.pop_last(), Some((CompactString::new("c"), 3)));
    debug_assert_eq!(map.count(), 1);
    debug_assert_eq!(map.get_mut("b").map(|v| mem::replace(v, 20)), Some(2));
    debug_assert_eq!(map.get("b"), Some(&20));
}
