//! Insertion-ordered key-value collection with chainable transformations.
//!
//! This module provides [`Collection`], an ordered mapping from unique keys
//! to values. The backing store is an association list (`Vec<(K, V)>`), so
//! keys only need to implement `Eq`; no hashing or ordering is required.
//!
//! # Overview
//!
//! A `Collection` is either *sequence-keyed* (`Collection<usize, V>`, keys
//! assigned `0..n` on construction) or *explicitly keyed* (any `Eq` key
//! type). Iteration order is insertion order. Transformations take `&self`
//! and return a new `Collection`; only `push`, `append`, `insert`, `pop` and
//! `shift` mutate in place.
//!
//! Operations that drop entries (`filter`, `partition`, `slice`, the
//! `take_while`/`skip` families, `chunk`) keep the original key of every
//! surviving entry. Operations that rebuild the sequence (`take`, `concat`,
//! `collapse`, `flat_map`, `zip`, `sample`) renumber from zero and therefore
//! return `Collection<usize, _>`.
//!
//! # Time Complexity
//!
//! | Operation               | Complexity |
//! |-------------------------|------------|
//! | `get` / `contains_key`  | O(n)       |
//! | `insert`                | O(n)       |
//! | `push` / `pop`          | O(n) / O(1)|
//! | `iter` / `values`       | O(1) + O(n)|
//! | `map` / `filter`        | O(n)       |
//! | `group_by`              | O(n * g)   |
//!
//! where `g` is the number of distinct groups. The linear costs are the
//! price of the `K: Eq`-only bound; this type targets small, single-threaded
//! value transformation, not bulk storage.
//!
//! # Examples
//!
//! ```rust
//! use gather::Collection;
//!
//! let people: Collection<usize, (&str, &str)> = Collection::from(vec![
//!     ("Arief", "IT"),
//!     ("Hilmi", "IT"),
//!     ("Bangun", "HR"),
//! ]);
//!
//! let by_department = people.group_by(|_, person| person.1);
//! assert_eq!(by_department.len(), 2);
//! assert_eq!(by_department.get(&"IT").map(Collection::len), Some(2));
//!
//! // The receiver is unchanged.
//! assert_eq!(people.len(), 3);
//! ```

use std::borrow::Borrow;
use std::fmt;
use std::mem;
use std::ops::{Bound, RangeBounds};

use rand::seq::IndexedRandom;

use crate::iter::{Iter, Keys, Values};
use crate::spread::Spread;

/// An insertion-ordered mapping from unique keys to values, supporting
/// chained functional transformations.
///
/// See the [module documentation](self) for an overview of the ordering and
/// key-preservation contract.
#[derive(Clone, PartialEq, Eq)]
pub struct Collection<K, V> {
    pub(crate) entries: Vec<(K, V)>,
}

impl<K, V> Collection<K, V> {
    /// Creates an empty collection.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use gather::Collection;
    ///
    /// let collection: Collection<usize, i32> = Collection::new();
    /// assert!(collection.is_empty());
    /// ```
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Builds a collection from entries whose keys are already known to be
    /// unique, skipping the per-entry duplicate scan.
    pub(crate) const fn from_entries_unchecked(entries: Vec<(K, V)>) -> Self {
        Self { entries }
    }

    /// Position of `key` in the backing store, if present.
    pub(crate) fn position<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        self.entries
            .iter()
            .position(|(existing, _)| existing.borrow() == key)
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns the number of entries. Alias of [`len`](Self::len).
    #[must_use]
    pub fn count(&self) -> usize {
        self.len()
    }

    /// Returns `true` if the collection has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns `true` if the collection has at least one entry.
    #[must_use]
    pub fn is_not_empty(&self) -> bool {
        !self.is_empty()
    }

    /// Returns an iterator over `(&K, &V)` pairs in insertion order.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter::new(self.entries.iter())
    }

    /// Returns an iterator over keys in insertion order.
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys::new(self.iter())
    }

    /// Returns an iterator over values in insertion order.
    pub fn values(&self) -> Values<'_, K, V> {
        Values::new(self.iter())
    }

    /// Returns every entry as an ordered `Vec` of cloned `(key, value)`
    /// pairs.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use gather::Collection;
    ///
    /// let collection = Collection::from(vec![1, 2, 3]);
    /// assert_eq!(collection.all(), vec![(0, 1), (1, 2), (2, 3)]);
    /// ```
    #[must_use]
    pub fn all(&self) -> Vec<(K, V)>
    where
        K: Clone,
        V: Clone,
    {
        self.entries.clone()
    }

    /// Returns a reference to the value stored under `key`.
    ///
    /// The key may be any borrowed form of `K`, as with the standard map
    /// types.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use gather::collection;
    ///
    /// let collection = collection! { "name" => "Terry", "country" => "USA" };
    /// assert_eq!(collection.get("name"), Some(&"Terry"));
    /// assert_eq!(collection.get("missing"), None);
    /// ```
    #[must_use]
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        self.position(key).map(|position| &self.entries[position].1)
    }

    /// Returns a mutable reference to the value stored under `key`.
    #[must_use]
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        self.position(key)
            .map(|position| &mut self.entries[position].1)
    }

    /// Returns `true` if an entry exists under `key`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use gather::Collection;
    ///
    /// let collection = Collection::from(vec!["Terry", "Andrew"]);
    /// assert!(collection.contains_key(&0));
    /// assert!(!collection.contains_key(&9));
    /// ```
    #[must_use]
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        self.position(key).is_some()
    }

    /// Inserts `value` under `key`, returning the previous value if the key
    /// was already present.
    ///
    /// Overwriting keeps the entry at its original position; a fresh key
    /// appends at the end.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use gather::Collection;
    ///
    /// let mut collection = Collection::new();
    /// assert_eq!(collection.insert("a", 1), None);
    /// assert_eq!(collection.insert("a", 10), Some(1));
    /// assert_eq!(collection.len(), 1);
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> Option<V>
    where
        K: Eq,
    {
        match self.position(&key) {
            Some(existing) => Some(mem::replace(&mut self.entries[existing].1, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    /// Removes and returns the last value in insertion order.
    ///
    /// Returns `None` when the collection is empty; a stored value is never
    /// conflated with absence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use gather::Collection;
    ///
    /// let mut collection = Collection::from(vec![1, 2, 3]);
    /// assert_eq!(collection.pop(), Some(3));
    /// assert_eq!(collection.all(), vec![(0, 1), (1, 2)]);
    /// ```
    pub fn pop(&mut self) -> Option<V> {
        self.entries.pop().map(|(_, value)| value)
    }

    /// Removes and returns the first value in insertion order.
    ///
    /// The remaining entries keep their keys.
    pub fn shift(&mut self) -> Option<V> {
        if self.entries.is_empty() {
            None
        } else {
            Some(self.entries.remove(0).1)
        }
    }

    /// Returns a reference to the first value in insertion order.
    #[must_use]
    pub fn first(&self) -> Option<&V> {
        self.entries.first().map(|(_, value)| value)
    }

    /// Returns a reference to the last value in insertion order.
    #[must_use]
    pub fn last(&self) -> Option<&V> {
        self.entries.last().map(|(_, value)| value)
    }

    /// Returns the first value satisfying `predicate`, or `None` if no
    /// entry qualifies.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use gather::Collection;
    ///
    /// let collection = Collection::from(vec![1, 2, 3, 4, 5, 6, 7, 8, 9]);
    /// assert_eq!(collection.first_where(|_, value| *value > 5), Some(&6));
    /// assert_eq!(collection.first_where(|_, value| *value > 50), None);
    /// ```
    #[must_use]
    pub fn first_where<F>(&self, mut predicate: F) -> Option<&V>
    where
        F: FnMut(&K, &V) -> bool,
    {
        self.entries
            .iter()
            .find(|(key, value)| predicate(key, value))
            .map(|(_, value)| value)
    }

    /// Returns the last value satisfying `predicate`, or `None` if no entry
    /// qualifies.
    #[must_use]
    pub fn last_where<F>(&self, mut predicate: F) -> Option<&V>
    where
        F: FnMut(&K, &V) -> bool,
    {
        self.entries
            .iter()
            .rev()
            .find(|(key, value)| predicate(key, value))
            .map(|(_, value)| value)
    }

    /// Returns `true` if any value equals `value`.
    ///
    /// Comparison is `PartialEq`: exact type-and-value equality, with no
    /// loose coercion.
    #[must_use]
    pub fn contains(&self, value: &V) -> bool
    where
        V: PartialEq,
    {
        self.entries.iter().any(|(_, existing)| existing == value)
    }

    /// Returns `true` if any entry satisfies `predicate`.
    #[must_use]
    pub fn any<F>(&self, mut predicate: F) -> bool
    where
        F: FnMut(&K, &V) -> bool,
    {
        self.entries
            .iter()
            .any(|(key, value)| predicate(key, value))
    }

    /// Returns one value chosen uniformly at random, or `None` when empty.
    #[must_use]
    pub fn random(&self) -> Option<&V> {
        self.entries
            .choose(&mut rand::rng())
            .map(|(_, value)| value)
    }

    /// Returns `amount` values sampled uniformly at random.
    ///
    /// Sampling is **without replacement**: each entry contributes at most
    /// once, `amount` is clamped to `len()`, and the order of the result is
    /// randomized. The result is sequence-keyed from zero.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use gather::Collection;
    ///
    /// let collection = Collection::from(vec![1, 2, 3, 4, 5]);
    /// let sampled = collection.sample(3);
    /// assert_eq!(sampled.len(), 3);
    /// assert!(sampled.values().all(|value| collection.contains(value)));
    /// ```
    #[must_use]
    pub fn sample(&self, amount: usize) -> Collection<usize, V>
    where
        V: Clone,
    {
        let amount = amount.min(self.entries.len());
        rand::seq::index::sample(&mut rand::rng(), self.entries.len(), amount)
            .into_iter()
            .map(|position| self.entries[position].1.clone())
            .collect()
    }

    /// Applies `transform` to every value, keeping keys and order unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use gather::Collection;
    ///
    /// let collection = Collection::from(vec![1, 2, 3]);
    /// let doubled = collection.map(|value| value * 2);
    /// assert_eq!(doubled.all(), vec![(0, 2), (1, 4), (2, 6)]);
    /// ```
    #[must_use]
    pub fn map<W, F>(&self, mut transform: F) -> Collection<K, W>
    where
        K: Clone,
        F: FnMut(&V) -> W,
    {
        Collection::from_entries_unchecked(
            self.entries
                .iter()
                .map(|(key, value)| (key.clone(), transform(value)))
                .collect(),
        )
    }

    /// Applies `transform` to every `(key, value)` pair, keeping keys and
    /// order unchanged.
    #[must_use]
    pub fn map_with_key<W, F>(&self, mut transform: F) -> Collection<K, W>
    where
        K: Clone,
        F: FnMut(&K, &V) -> W,
    {
        Collection::from_entries_unchecked(
            self.entries
                .iter()
                .map(|(key, value)| (key.clone(), transform(key, value)))
                .collect(),
        )
    }

    /// Converts every value into `W` through its `From<V>` implementation,
    /// keeping keys and order unchanged.
    ///
    /// This is the typed rendering of "pass each value to a one-argument
    /// constructor".
    ///
    /// # Examples
    ///
    /// ```rust
    /// use gather::Collection;
    ///
    /// #[derive(Debug, PartialEq)]
    /// struct Person {
    ///     name: String,
    /// }
    ///
    /// impl From<&'static str> for Person {
    ///     fn from(name: &'static str) -> Self {
    ///         Self { name: name.to_string() }
    ///     }
    /// }
    ///
    /// let collection = Collection::from(vec!["Terry Davis"]);
    /// let people = collection.map_into::<Person>();
    /// assert_eq!(people.first(), Some(&Person { name: "Terry Davis".to_string() }));
    /// ```
    #[must_use]
    pub fn map_into<W>(&self) -> Collection<K, W>
    where
        K: Clone,
        V: Clone,
        W: From<V>,
    {
        self.map(|value| W::from(value.clone()))
    }

    /// Applies `transform` to every value with the value's tuple elements
    /// spread as positional arguments.
    ///
    /// Values must be tuples of arity 1 through 8; passing a non-tuple value
    /// type is a compile error, so there is no runtime shape-mismatch
    /// condition. Keys and order are unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use gather::Collection;
    ///
    /// let names = Collection::from(vec![("Terry", "Davis"), ("Andrew", "Terry")]);
    /// let full = names.map_spread(|first: &str, last: &str| format!("{first} {last}"));
    /// assert_eq!(full.first(), Some(&"Terry Davis".to_string()));
    /// ```
    #[must_use]
    pub fn map_spread<F, R>(&self, mut transform: F) -> Collection<K, R>
    where
        K: Clone,
        V: Clone + Spread<F, R>,
    {
        Collection::from_entries_unchecked(
            self.entries
                .iter()
                .map(|(key, value)| (key.clone(), value.clone().spread(&mut transform)))
                .collect(),
        )
    }

    /// Buckets values by the group key returned from `transform`.
    ///
    /// `transform` maps each value to a `(group_key, item)` pair. The result
    /// is keyed by group key in first-encounter order; each group is a
    /// sequence-keyed collection of its items in encounter order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use gather::Collection;
    ///
    /// let people = Collection::from(vec![("Terry", "IT"), ("Davis", "IT"), ("Budi", "HR")]);
    /// let groups = people.map_to_groups(|person| (person.1, person.0));
    /// assert_eq!(groups.get(&"IT").map(Collection::all), Some(vec![(0, "Terry"), (1, "Davis")]));
    /// assert_eq!(groups.get(&"HR").map(Collection::all), Some(vec![(0, "Budi")]));
    /// ```
    #[must_use]
    pub fn map_to_groups<G, T, F>(&self, mut transform: F) -> Collection<G, Collection<usize, T>>
    where
        G: Eq,
        F: FnMut(&V) -> (G, T),
    {
        let mut groups: Collection<G, Collection<usize, T>> = Collection::new();
        for (_, value) in &self.entries {
            let (group_key, item) = transform(value);
            match groups.position(&group_key) {
                Some(existing) => {
                    let group = &mut groups.entries[existing].1;
                    let next_key = group.len();
                    group.entries.push((next_key, item));
                }
                None => {
                    let group = Collection::from_entries_unchecked(vec![(0, item)]);
                    groups.entries.push((group_key, group));
                }
            }
        }
        groups
    }

    /// Buckets entries by the group key returned from `grouper`.
    ///
    /// The result is keyed by group key in first-encounter order. Each group
    /// keeps the original `(key, value)` entries of its members, in their
    /// original relative order. The union of all groups (ignoring group
    /// order) is the original collection.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use gather::Collection;
    ///
    /// let people = Collection::from(vec![
    ///     ("Arief", "IT"),
    ///     ("Hilmi", "IT"),
    ///     ("Bangun", "HR"),
    /// ]);
    ///
    /// let groups = people.group_by(|_, person| person.1);
    /// assert_eq!(
    ///     groups.get(&"IT").map(Collection::all),
    ///     Some(vec![(0, ("Arief", "IT")), (1, ("Hilmi", "IT"))]),
    /// );
    /// assert_eq!(
    ///     groups.get(&"HR").map(Collection::all),
    ///     Some(vec![(2, ("Bangun", "HR"))]),
    /// );
    /// ```
    #[must_use]
    pub fn group_by<G, F>(&self, mut grouper: F) -> Collection<G, Collection<K, V>>
    where
        K: Clone,
        V: Clone,
        G: Eq,
        F: FnMut(&K, &V) -> G,
    {
        let mut groups: Collection<G, Collection<K, V>> = Collection::new();
        for (key, value) in &self.entries {
            let group_key = grouper(key, value);
            let entry = (key.clone(), value.clone());
            match groups.position(&group_key) {
                Some(existing) => groups.entries[existing].1.entries.push(entry),
                None => {
                    let group = Collection::from_entries_unchecked(vec![entry]);
                    groups.entries.push((group_key, group));
                }
            }
        }
        groups
    }

    /// Pairs this collection's values with `other`'s, position by position.
    ///
    /// The result length is the shorter of the two; surplus entries on
    /// either side are dropped. The result is sequence-keyed from zero.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use gather::Collection;
    ///
    /// let left = Collection::from(vec![1, 2, 3]);
    /// let right = Collection::from(vec![4, 5, 6]);
    /// assert_eq!(left.zip(&right).all(), vec![(0, (1, 4)), (1, (2, 5)), (2, (3, 6))]);
    /// ```
    #[must_use]
    pub fn zip<K2, W>(&self, other: &Collection<K2, W>) -> Collection<usize, (V, W)>
    where
        V: Clone,
        W: Clone,
    {
        self.values()
            .zip(other.values())
            .map(|(left, right)| (left.clone(), right.clone()))
            .collect()
    }

    /// Appends `other`'s values after this collection's values.
    ///
    /// No deduplication is performed; the result is sequence-keyed from
    /// zero.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use gather::Collection;
    ///
    /// let left = Collection::from(vec![1, 2, 3]);
    /// let right = Collection::from(vec![4, 5, 6]);
    /// let joined = left.concat(&right);
    /// assert_eq!(joined.values().copied().collect::<Vec<_>>(), vec![1, 2, 3, 4, 5, 6]);
    /// ```
    #[must_use]
    pub fn concat<K2>(&self, other: &Collection<K2, V>) -> Collection<usize, V>
    where
        V: Clone,
    {
        self.values().chain(other.values()).cloned().collect()
    }

    /// Uses this collection's values as keys, paired positionally with
    /// `values`'s values.
    ///
    /// Pairing stops at the shorter side; surplus keys or values are
    /// dropped.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use gather::Collection;
    ///
    /// let keys = Collection::from(vec!["name", "country"]);
    /// let values = Collection::from(vec!["Terry", "USA"]);
    /// let combined = keys.combine(&values);
    /// assert_eq!(combined.get("name"), Some(&"Terry"));
    /// assert_eq!(combined.get("country"), Some(&"USA"));
    /// ```
    #[must_use]
    pub fn combine<K2, W>(&self, values: &Collection<K2, W>) -> Collection<V, W>
    where
        V: Eq + Clone,
        W: Clone,
    {
        self.values()
            .zip(values.values())
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()
    }

    /// Flattens one level of nesting.
    ///
    /// Every value must itself be iterable; the inner sequences are
    /// concatenated in order into a single sequence-keyed collection.
    /// Non-iterable value types are a compile error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use gather::Collection;
    ///
    /// let nested = Collection::from(vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 9]]);
    /// let flat = nested.collapse();
    /// assert_eq!(flat.values().copied().collect::<Vec<_>>(), vec![1, 2, 3, 4, 5, 6, 7, 8, 9]);
    /// ```
    #[must_use]
    pub fn collapse(&self) -> Collection<usize, V::Item>
    where
        V: Clone + IntoIterator,
    {
        self.values()
            .flat_map(|value| value.clone().into_iter())
            .collect()
    }

    /// Maps every value to a sequence and flattens the results.
    ///
    /// Equivalent to [`map`](Self::map) followed by
    /// [`collapse`](Self::collapse); the result is sequence-keyed from zero.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use gather::Collection;
    ///
    /// let people = Collection::from(vec![
    ///     ("Terry", vec!["Racist", "Coding"]),
    ///     ("Andrew", vec!["Coding", "Sleeping"]),
    /// ]);
    /// let hobbies = people.flat_map(|person| person.1.clone());
    /// assert_eq!(
    ///     hobbies.values().copied().collect::<Vec<_>>(),
    ///     vec!["Racist", "Coding", "Coding", "Sleeping"],
    /// );
    /// ```
    #[must_use]
    pub fn flat_map<I, F>(&self, mut transform: F) -> Collection<usize, I::Item>
    where
        I: IntoIterator,
        F: FnMut(&V) -> I,
    {
        self.values().flat_map(|value| transform(value)).collect()
    }

    /// Concatenates every value's `Display` rendering, separated by
    /// `separator`.
    #[must_use]
    pub fn join(&self, separator: &str) -> String
    where
        V: fmt::Display,
    {
        self.join_with(separator, separator)
    }

    /// Concatenates every value's `Display` rendering, using `separator`
    /// between all pairs except the last, which uses `last_separator`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use gather::Collection;
    ///
    /// let names = Collection::from(vec!["Terry", "Andrew", "Racist", "Davis"]);
    /// assert_eq!(names.join("-"), "Terry-Andrew-Racist-Davis");
    /// assert_eq!(names.join_with(", ", " and "), "Terry, Andrew, Racist and Davis");
    /// ```
    #[must_use]
    pub fn join_with(&self, separator: &str, last_separator: &str) -> String
    where
        V: fmt::Display,
    {
        let last_position = self.entries.len().saturating_sub(1);
        let mut rendered = String::new();
        for (position, (_, value)) in self.entries.iter().enumerate() {
            if position > 0 {
                rendered.push_str(if position == last_position {
                    last_separator
                } else {
                    separator
                });
            }
            rendered.push_str(&value.to_string());
        }
        rendered
    }

    /// Keeps only the entries satisfying `predicate`.
    ///
    /// Surviving entries keep their **original keys**; the result is never
    /// renumbered. For a sequence-keyed collection this leaves gaps in the
    /// key sequence where entries were dropped.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use gather::Collection;
    ///
    /// let numbers = Collection::from(vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);
    /// let even = numbers.filter(|_, value| value % 2 == 0);
    /// assert_eq!(even.all(), vec![(1, 2), (3, 4), (5, 6), (7, 8), (9, 10)]);
    /// ```
    #[must_use]
    pub fn filter<F>(&self, mut predicate: F) -> Self
    where
        K: Clone,
        V: Clone,
        F: FnMut(&K, &V) -> bool,
    {
        Self::from_entries_unchecked(
            self.entries
                .iter()
                .filter(|(key, value)| predicate(key, value))
                .cloned()
                .collect(),
        )
    }

    /// Keeps only the entries **not** satisfying `predicate`.
    ///
    /// The complement of [`filter`](Self::filter); original keys are
    /// preserved.
    #[must_use]
    pub fn reject<F>(&self, mut predicate: F) -> Self
    where
        K: Clone,
        V: Clone,
        F: FnMut(&K, &V) -> bool,
    {
        self.filter(|key, value| !predicate(key, value))
    }

    /// Splits the entries into `(matching, non_matching)` by `predicate`.
    ///
    /// Both halves preserve original keys and relative order; together they
    /// reconstruct the receiver, disjointly.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use gather::collection;
    ///
    /// let grades = collection! { "aba" => 91, "abo" => 90, "abe" => 89 };
    /// let (passing, failing) = grades.partition(|_, grade| *grade <= 90);
    /// assert_eq!(passing.all(), vec![("abo", 90), ("abe", 89)]);
    /// assert_eq!(failing.all(), vec![("aba", 91)]);
    /// ```
    #[must_use]
    pub fn partition<F>(&self, mut predicate: F) -> (Self, Self)
    where
        K: Clone,
        V: Clone,
        F: FnMut(&K, &V) -> bool,
    {
        let mut matching = Vec::new();
        let mut non_matching = Vec::new();
        for (key, value) in &self.entries {
            if predicate(key, value) {
                matching.push((key.clone(), value.clone()));
            } else {
                non_matching.push((key.clone(), value.clone()));
            }
        }
        (
            Self::from_entries_unchecked(matching),
            Self::from_entries_unchecked(non_matching),
        )
    }

    /// Returns the entries in the positional sub-range `range`.
    ///
    /// Bounds are clamped to the collection, so an out-of-range request
    /// yields a shorter (possibly empty) result rather than failing.
    /// Original keys are preserved.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use gather::Collection;
    ///
    /// let numbers = Collection::from(vec![1, 2, 3, 4, 5, 6, 7, 8, 9]);
    /// assert_eq!(numbers.slice(3..5).all(), vec![(3, 4), (4, 5)]);
    /// assert_eq!(numbers.slice(3..).len(), 6);
    /// assert_eq!(numbers.slice(100..).len(), 0);
    /// ```
    #[must_use]
    pub fn slice<R>(&self, range: R) -> Self
    where
        K: Clone,
        V: Clone,
        R: RangeBounds<usize>,
    {
        let length = self.entries.len();
        let start = match range.start_bound() {
            Bound::Included(&bound) => bound,
            Bound::Excluded(&bound) => bound.saturating_add(1),
            Bound::Unbounded => 0,
        };
        let end = match range.end_bound() {
            Bound::Included(&bound) => bound.saturating_add(1),
            Bound::Excluded(&bound) => bound,
            Bound::Unbounded => length,
        };
        let start = start.min(length);
        let end = end.clamp(start, length);
        Self::from_entries_unchecked(self.entries[start..end].to_vec())
    }

    /// Returns the first `count` values (or the last `|count|` when `count`
    /// is negative), renumbered from zero.
    ///
    /// `count` is clamped to the collection length.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use gather::Collection;
    ///
    /// let numbers = Collection::from(vec![1, 2, 3, 4, 5]);
    /// assert_eq!(numbers.take(3).values().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
    /// assert_eq!(numbers.take(-2).values().copied().collect::<Vec<_>>(), vec![4, 5]);
    /// ```
    #[must_use]
    pub fn take(&self, count: isize) -> Collection<usize, V>
    where
        V: Clone,
    {
        let length = self.entries.len();
        let amount = count.unsigned_abs().min(length);
        let taken = if count >= 0 {
            &self.entries[..amount]
        } else {
            &self.entries[length - amount..]
        };
        taken.iter().map(|(_, value)| value.clone()).collect()
    }

    /// Returns the longest prefix of entries satisfying `predicate`.
    ///
    /// Evaluation stops at the first failing entry; the remainder is never
    /// scanned. Original keys are preserved.
    #[must_use]
    pub fn take_while<F>(&self, mut predicate: F) -> Self
    where
        K: Clone,
        V: Clone,
        F: FnMut(&K, &V) -> bool,
    {
        Self::from_entries_unchecked(
            self.entries
                .iter()
                .take_while(|(key, value)| predicate(key, value))
                .cloned()
                .collect(),
        )
    }

    /// Returns the prefix of entries before `predicate` first holds.
    ///
    /// Evaluation stops at the first satisfying entry, which is excluded.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use gather::Collection;
    ///
    /// let numbers = Collection::from(vec![1, 2, 3, 4]);
    /// let prefix = numbers.take_until(|_, value| *value == 3);
    /// assert_eq!(prefix.all(), vec![(0, 1), (1, 2)]);
    /// ```
    #[must_use]
    pub fn take_until<F>(&self, mut predicate: F) -> Self
    where
        K: Clone,
        V: Clone,
        F: FnMut(&K, &V) -> bool,
    {
        self.take_while(|key, value| !predicate(key, value))
    }

    /// Drops the first `count` entries, preserving keys on the remainder.
    ///
    /// `count` is clamped to the collection length.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use gather::Collection;
    ///
    /// let numbers = Collection::from(vec![1, 2, 3, 4, 5]);
    /// assert_eq!(numbers.skip(3).all(), vec![(3, 4), (4, 5)]);
    /// ```
    #[must_use]
    pub fn skip(&self, count: usize) -> Self
    where
        K: Clone,
        V: Clone,
    {
        Self::from_entries_unchecked(self.entries.iter().skip(count).cloned().collect())
    }

    /// Drops the longest prefix of entries satisfying `predicate`,
    /// preserving keys on the remainder.
    ///
    /// Once an entry fails the predicate, everything from that entry onward
    /// is kept without further testing.
    #[must_use]
    pub fn skip_while<F>(&self, mut predicate: F) -> Self
    where
        K: Clone,
        V: Clone,
        F: FnMut(&K, &V) -> bool,
    {
        Self::from_entries_unchecked(
            self.entries
                .iter()
                .skip_while(|(key, value)| predicate(key, value))
                .cloned()
                .collect(),
        )
    }

    /// Drops entries until `predicate` first holds; the satisfying entry
    /// and everything after it are kept with their original keys.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use gather::Collection;
    ///
    /// let numbers = Collection::from(vec![1, 2, 3, 4]);
    /// let rest = numbers.skip_until(|_, value| *value == 3);
    /// assert_eq!(rest.all(), vec![(2, 3), (3, 4)]);
    /// ```
    #[must_use]
    pub fn skip_until<F>(&self, mut predicate: F) -> Self
    where
        K: Clone,
        V: Clone,
        F: FnMut(&K, &V) -> bool,
    {
        self.skip_while(|key, value| !predicate(key, value))
    }

    /// Splits the entries into sequential chunks of at most `size` entries.
    ///
    /// Entries keep their original keys inside each chunk; the last chunk
    /// may be shorter. A `size` of zero yields an empty collection rather
    /// than failing.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use gather::Collection;
    ///
    /// let numbers = Collection::from(vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);
    /// let chunks = numbers.chunk(3);
    /// assert_eq!(chunks.len(), 4);
    /// assert_eq!(chunks.get(&1).map(Collection::all), Some(vec![(3, 4), (4, 5), (5, 6)]));
    /// assert_eq!(chunks.get(&3).map(Collection::all), Some(vec![(9, 10)]));
    /// ```
    #[must_use]
    pub fn chunk(&self, size: usize) -> Collection<usize, Self>
    where
        K: Clone,
        V: Clone,
    {
        if size == 0 {
            return Collection::new();
        }
        self.entries
            .chunks(size)
            .map(|chunk| Self::from_entries_unchecked(chunk.to_vec()))
            .collect()
    }
}

impl<V> Collection<usize, V> {
    /// Appends `value` under the next sequential integer key.
    ///
    /// The next key is one past the largest existing key (zero when empty),
    /// so keys stay unique even after filtering left gaps.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use gather::Collection;
    ///
    /// let mut collection = Collection::new();
    /// collection.push(1);
    /// collection.push(2);
    /// assert_eq!(collection.all(), vec![(0, 1), (1, 2)]);
    /// ```
    pub fn push(&mut self, value: V) {
        let next_key = self
            .entries
            .iter()
            .map(|(key, _)| key + 1)
            .max()
            .unwrap_or(0);
        self.entries.push((next_key, value));
    }

    /// Appends every value in `values` under sequential integer keys.
    pub fn append<I>(&mut self, values: I)
    where
        I: IntoIterator<Item = V>,
    {
        for value in values {
            self.push(value);
        }
    }
}

impl<K, V> Default for Collection<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for Collection<K, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_map().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::Collection;

    #[test]
    fn push_after_pop_reuses_freed_key() {
        let mut collection: Collection<usize, i32> = Collection::new();
        collection.append([1, 2, 3]);
        assert_eq!(collection.pop(), Some(3));
        collection.push(30);
        assert_eq!(collection.all(), vec![(0, 1), (1, 2), (2, 30)]);
    }

    #[test]
    fn push_after_filter_gap_stays_unique() {
        let collection = Collection::from(vec![1, 2, 3, 4]);
        let mut odd = collection.filter(|_, value| value % 2 == 1);
        assert_eq!(odd.all(), vec![(0, 1), (2, 3)]);
        odd.push(5);
        assert_eq!(odd.all(), vec![(0, 1), (2, 3), (3, 5)]);
    }

    #[test]
    fn insert_overwrite_keeps_position() {
        let mut collection = Collection::new();
        collection.insert("a", 1);
        collection.insert("b", 2);
        assert_eq!(collection.insert("a", 10), Some(1));
        assert_eq!(collection.all(), vec![("a", 10), ("b", 2)]);
    }

    #[test]
    fn shift_preserves_remaining_keys() {
        let mut collection = Collection::from(vec![1, 2, 3]);
        assert_eq!(collection.shift(), Some(1));
        assert_eq!(collection.all(), vec![(1, 2), (2, 3)]);
    }

    #[test]
    fn slice_clamps_out_of_range_bounds() {
        let collection = Collection::from(vec![1, 2, 3]);
        assert_eq!(collection.slice(1..100).all(), vec![(1, 2), (2, 3)]);
        assert!(collection.slice(5..9).is_empty());
    }

    #[test]
    fn take_clamps_to_length() {
        let collection = Collection::from(vec![1, 2]);
        assert_eq!(collection.take(10).len(), 2);
        assert_eq!(collection.take(-10).len(), 2);
    }

    #[test]
    fn chunk_of_zero_is_empty() {
        let collection = Collection::from(vec![1, 2, 3]);
        assert!(collection.chunk(0).is_empty());
    }

    #[test]
    fn sample_clamps_and_draws_without_replacement() {
        let collection = Collection::from(vec![1, 2, 3]);
        let sampled = collection.sample(10);
        assert_eq!(sampled.len(), 3);
        let mut values: Vec<i32> = sampled.values().copied().collect();
        values.sort_unstable();
        assert_eq!(values, vec![1, 2, 3]);
    }
}
