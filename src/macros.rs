//! The [`collection!`] literal macro.

/// Creates a [`Collection`](crate::Collection) from a literal.
///
/// The keyed form (`key => value`) builds an explicitly keyed collection;
/// the plain list form builds a sequence-keyed collection with keys `0..n`.
///
/// # Examples
///
/// ```rust
/// use gather::collection;
///
/// let grades = collection! { "aba" => 91, "abo" => 90 };
/// assert_eq!(grades.get("aba"), Some(&91));
///
/// let numbers = collection![1, 2, 3];
/// assert_eq!(numbers.all(), vec![(0, 1), (1, 2), (2, 3)]);
/// ```
#[macro_export]
macro_rules! collection {
    () => {
        $crate::Collection::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut collection = $crate::Collection::new();
        $(collection.insert($key, $value);)+
        collection
    }};
    ($($value:expr),+ $(,)?) => {
        <$crate::Collection<usize, _> as ::core::iter::FromIterator<_>>::from_iter(
            [$($value),+],
        )
    };
}

#[cfg(test)]
mod tests {
    use crate::Collection;

    #[test]
    fn empty_literal_builds_empty_collection() {
        let collection: Collection<usize, i32> = collection![];
        assert!(collection.is_empty());
    }

    #[test]
    fn keyed_literal_preserves_order() {
        let collection = collection! { "b" => 2, "a" => 1 };
        assert_eq!(collection.all(), vec![("b", 2), ("a", 1)]);
    }

    #[test]
    fn sequence_literal_assigns_indices() {
        let collection = collection!["x", "y"];
        assert_eq!(collection.all(), vec![(0, "x"), (1, "y")]);
    }
}
