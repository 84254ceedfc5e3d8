use std::cmp::Ordering;

/// A total order over values of type `K`, used to arrange the keys of a
/// [`TreeMap`](super::TreeMap).
///
/// Any closure or function of the form `Fn(&K, &K) -> Ordering` is a Comparator.
///
/// # Examples
/// ```
/// # use app_containers::collections::tree::TreeMap;
/// let mut map = TreeMap::with_comparator(|a: &i32, b: &i32| b.cmp(a));
/// map.set(1, 'a');
/// map.set(3, 'c');
/// assert_eq!(map.get_first_key(), Some(&3));
/// ```
pub trait Comparator<K: ?Sized> {
    fn compare(&self, a: &K, b: &K) -> Ordering;
}

/// The default [`Comparator`], which delegates to [`Ord`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NaturalOrder;

impl<K: Ord + ?Sized> Comparator<K> for NaturalOrder {
    fn compare(&self, a: &K, b: &K) -> Ordering {
        a.cmp(b)
    }
}

impl<K: ?Sized, F: Fn(&K, &K) -> Ordering> Comparator<K> for F {
    fn compare(&self, a: &K, b: &K) -> Ordering {
        self(a, b)
    }
}
