//! Serde support for [`Collection`].
//!
//! A `Collection` serializes as a map whose entries appear in insertion
//! order, and deserializes preserving the order in which the format yields
//! them. A duplicate key in the input follows the [`insert`] policy: the
//! last value wins, at the position of the first occurrence.
//!
//! [`insert`]: Collection::insert

use std::marker::PhantomData;

use crate::collection::Collection;

impl<K, V> serde::Serialize for Collection<K, V>
where
    K: serde::Serialize,
    V: serde::Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

struct CollectionVisitor<K, V> {
    marker: PhantomData<(K, V)>,
}

impl<K, V> CollectionVisitor<K, V> {
    const fn new() -> Self {
        Self {
            marker: PhantomData,
        }
    }
}

impl<'de, K, V> serde::de::Visitor<'de> for CollectionVisitor<K, V>
where
    K: serde::Deserialize<'de> + Eq,
    V: serde::Deserialize<'de>,
{
    type Value = Collection<K, V>;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str("a map")
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::MapAccess<'de>,
    {
        let mut collection = Collection::new();
        while let Some((key, value)) = map.next_entry()? {
            collection.insert(key, value);
        }
        Ok(collection)
    }
}

impl<'de, K, V> serde::Deserialize<'de> for Collection<K, V>
where
    K: serde::Deserialize<'de> + Eq,
    V: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_map(CollectionVisitor::new())
    }
}
