use std::borrow::{Borrow, BorrowMut};
use std::cmp::{self, Ordering};
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::mem::{self, MaybeUninit};
use std::ops::{Deref, DerefMut};
use std::ptr;
use std::slice;

use crate::collections::contiguous::Array;
#[doc(inline)]
pub use crate::util::error::{CapacityOverflow, IndexOutOfBounds, RangeOutOfBounds};
use crate::util::fmt::write_joined;
use crate::util::result::ResultExtension;

const DEFAULT_CAP: usize = 10;

/// A variable size contiguous collection, based on [`Array<T>`], with an explicit capacity that
/// grows by a factor of 1.5 whenever an element is added to a full list.
///
/// Applicable slice functionality (iteration, searching, indexing) is provided through
/// [`Deref<Target = [T]>`](Deref), which only ever exposes the `len` initialized elements.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the ArrayList.
/// - `i`: The index of the item in question.
/// - `r`: The number of items in a range.
///
/// | Method | Complexity |
/// |-|-|
/// | `get` | `O(1)` |
/// | `len` | `O(1)` |
/// | `add` | `O(1)`*, `O(n)` |
/// | `insert` | `O(n-i)` |
/// | `remove_by_index` | `O(n-i)` |
/// | `remove_by_range` | `O(n-i)` |
/// | `remove` | `O(n)` |
/// | `has` | `O(n)` |
/// | `sort` | `O(n^2)` |
/// | `sort_by` | `O(n log n)` |
/// | `sub_array_list` | `O(r)` |
/// | `increase_capacity_to` | `O(n)`**, `O(1)` |
/// | `trim_to_current_length` | `O(n)` |
///
/// \* If the ArrayList doesn't have enough capacity for the new element, `add` will take `O(n)`.
///
/// \** If the ArrayList already has the requested capacity, nothing happens.
pub struct ArrayList<T> {
    pub(crate) arr: Array<MaybeUninit<T>>,
    pub(crate) len: usize,
}

impl<T> ArrayList<T> {
    /// Creates a new, empty ArrayList with the default capacity of 10.
    ///
    /// # Examples
    /// ```
    /// # use app_containers::collections::contiguous::ArrayList;
    /// let list: ArrayList<u8> = ArrayList::new();
    /// assert_eq!(list.len(), 0);
    /// assert_eq!(list.cap(), 10);
    /// ```
    pub fn new() -> ArrayList<T> {
        ArrayList::with_cap(DEFAULT_CAP)
    }

    /// Creates a new ArrayList with capacity exactly equal to the provided value, allowing values
    /// to be added without reallocation.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    pub fn with_cap(cap: usize) -> ArrayList<T> {
        ArrayList {
            arr: Array::new_uninit(cap),
            len: 0,
        }
    }

    /// Returns the length of the ArrayList.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the ArrayList contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the current capacity of the ArrayList. The capacity is always exactly the value
    /// produced by growth or by the capacity manipulation methods.
    pub const fn cap(&self) -> usize {
        self.arr.size()
    }

    /// Appends the provided value to the end of the ArrayList, growing first if it is full. Always
    /// returns true.
    ///
    /// # Panics
    /// Panics if the memory layout of the ArrayList would have a size that exceeds [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use app_containers::collections::contiguous::ArrayList;
    /// let mut list = ArrayList::new();
    /// for i in 0..12 {
    ///     assert!(list.add(i));
    /// }
    /// assert_eq!(list.cap(), 15);
    /// ```
    pub fn add(&mut self, value: T) -> bool {
        if self.len == self.cap() {
            self.grow();
        }
        self.arr[self.len] = MaybeUninit::new(value);
        self.len += 1;
        true
    }

    /// Returns a reference to the element at `index`.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn get(&self, index: usize) -> &T {
        self.try_get(index).throw()
    }

    pub fn try_get(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        IndexOutOfBounds::check(index, self.len)?;
        Ok(&self[index])
    }

    /// Replaces the element at `index` with `value`, returning the previous element.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn set(&mut self, index: usize, value: T) -> T {
        self.try_set(index, value).throw()
    }

    pub fn try_set(&mut self, index: usize, value: T) -> Result<T, IndexOutOfBounds> {
        IndexOutOfBounds::check(index, self.len)?;
        Ok(mem::replace(&mut self[index], value))
    }

    /// Inserts the provided value at the given index, growing and moving items as necessary.
    ///
    /// # Panics
    /// Panics if `index > len`.
    ///
    /// # Examples
    /// ```
    /// # use app_containers::collections::contiguous::ArrayList;
    /// let mut list: ArrayList<_> = (1..=3).collect();
    /// list.insert(1, 9);
    /// assert_eq!(&*list, &[1, 9, 2, 3]);
    /// ```
    pub fn insert(&mut self, index: usize, value: T) {
        self.try_insert(index, value).throw()
    }

    pub fn try_insert(&mut self, index: usize, value: T) -> Result<(), IndexOutOfBounds> {
        IndexOutOfBounds::check_insert(index, self.len)?;

        if self.len == self.cap() {
            self.grow();
        }

        let mut prev = MaybeUninit::new(value);
        for i in index..=self.len {
            prev = mem::replace(&mut self.arr[i], prev);
        }

        self.len += 1;
        Ok(())
    }

    /// Removes the element at the provided index, moving all following values to fill in the gap.
    ///
    /// # Panics
    /// Panics if the provided index is out of bounds.
    pub fn remove_by_index(&mut self, index: usize) -> T {
        self.try_remove_by_index(index).throw()
    }

    pub fn try_remove_by_index(&mut self, index: usize) -> Result<T, IndexOutOfBounds> {
        IndexOutOfBounds::check(index, self.len)?;

        let mut next = MaybeUninit::uninit();
        // Iterate backwards to index.
        for i in (index..self.len).rev() {
            next = mem::replace(&mut self.arr[i], next);
        }

        self.len -= 1;
        // SAFETY: next contains the value which was previously located at index, which we've
        // already checked to be less than len and therefore initialized.
        Ok(unsafe { next.assume_init() })
    }

    /// Removes the elements in `from..to`, shifting the remaining tail left to fill the gap.
    ///
    /// # Panics
    /// Panics if `to > len` or `from >= min(len, to)`.
    ///
    /// # Examples
    /// ```
    /// # use app_containers::collections::contiguous::ArrayList;
    /// let mut list: ArrayList<_> = (0..6).collect();
    /// list.remove_by_range(1, 4);
    /// assert_eq!(&*list, &[0, 4, 5]);
    /// ```
    pub fn remove_by_range(&mut self, from: usize, to: usize) {
        self.try_remove_by_range(from, to).throw()
    }

    pub fn try_remove_by_range(&mut self, from: usize, to: usize) -> Result<(), RangeOutOfBounds> {
        RangeOutOfBounds::check(from, to, self.len)?;

        let old_len = self.len;
        // Shrink first so that a panicking drop leaks the tail instead of double dropping.
        self.len = from;

        let base = self.arr.ptr.as_ptr();
        // SAFETY: from..to is within the initialized elements, which are dropped exactly once and
        // then overwritten by the tail. ptr::copy handles the overlapping regions.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(base.add(from).cast::<T>(), to - from));
            ptr::copy(base.add(to), base.add(from), old_len - to);
        }

        self.len = old_len - (to - from);
        Ok(())
    }

    /// Removes the first element equal to `value`, returning true if one was found.
    pub fn remove(&mut self, value: &T) -> bool
    where
        T: PartialEq,
    {
        match self.get_index_of(value) {
            Some(index) => {
                self.remove_by_index(index);
                true
            },
            None => false,
        }
    }

    /// Returns true if the ArrayList contains an element equal to `value`.
    pub fn has(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.contains(value)
    }

    /// Returns the index of the first element equal to `value`.
    pub fn get_index_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.iter().position(|item| item == value)
    }

    /// Returns the index of the last element equal to `value`.
    pub fn get_last_index_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.iter().rposition(|item| item == value)
    }

    /// Replaces every element with the result of `f(&element, index)`, in index order.
    pub fn replace_all_elements<F>(&mut self, mut f: F)
    where
        F: FnMut(&T, usize) -> T,
    {
        for index in 0..self.len {
            let new_value = f(&self[index], index);
            self[index] = new_value;
        }
    }

    /// Calls `f(&element, index, &self)` for every element, in index order.
    pub fn for_each<F>(&self, mut f: F)
    where
        F: FnMut(&T, usize, &Self),
    {
        for (index, value) in self.iter().enumerate() {
            f(value, index, self);
        }
    }

    /// Sorts the ArrayList in ascending order with a bubble sort. Pairs that aren't comparable
    /// (where [`PartialOrd::partial_cmp`] returns None) are left as they are.
    ///
    /// # Examples
    /// ```
    /// # use app_containers::collections::contiguous::ArrayList;
    /// let mut list: ArrayList<f64> = [3.0, 1.0, 2.0].into_iter().collect();
    /// list.sort();
    /// assert_eq!(&*list, &[1.0, 2.0, 3.0]);
    /// ```
    pub fn sort(&mut self)
    where
        T: PartialOrd,
    {
        let len = self.len;
        for pass in 0..len {
            for i in 0..(len - 1 - pass) {
                if self[i].partial_cmp(&self[i + 1]) == Some(Ordering::Greater) {
                    self.swap(i, i + 1);
                }
            }
        }
    }

    /// Sorts the ArrayList in place with the provided comparator.
    pub fn sort_by<F>(&mut self, compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        self.deref_mut().sort_by(compare)
    }

    /// Creates a new ArrayList containing clones of the elements in `from..to`.
    ///
    /// # Panics
    /// Panics if `to > len` or `from >= min(len, to)`.
    pub fn sub_array_list(&self, from: usize, to: usize) -> ArrayList<T>
    where
        T: Clone,
    {
        self.try_sub_array_list(from, to).throw()
    }

    pub fn try_sub_array_list(&self, from: usize, to: usize) -> Result<ArrayList<T>, RangeOutOfBounds>
    where
        T: Clone,
    {
        RangeOutOfBounds::check(from, to, self.len)?;
        Ok(self[from..to].iter().cloned().collect())
    }

    /// Clones all elements into a plain [`Array`] of exactly `len` elements.
    pub fn convert_to_array(&self) -> Array<T>
    where
        T: Clone,
    {
        Array::from_iter_sized(self.iter().cloned())
    }

    /// Removes all elements without changing the capacity.
    pub fn clear(&mut self) {
        let len = self.len;
        self.len = 0;
        // SAFETY: The first len values were initialized and are no longer reachable.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(
                self.arr.ptr.as_ptr().cast::<T>(),
                len,
            ));
        }
    }

    /// Raises the capacity to `new_cap`. Requests below the current length or capacity are
    /// ignored.
    ///
    /// # Panics
    /// Panics if the memory layout of the ArrayList would have a size that exceeds [`isize::MAX`].
    pub fn increase_capacity_to(&mut self, new_cap: usize) {
        self.try_increase_capacity_to(new_cap).throw()
    }

    pub fn try_increase_capacity_to(&mut self, new_cap: usize) -> Result<(), CapacityOverflow> {
        if new_cap < self.len || new_cap <= self.cap() {
            return Ok(());
        }

        Array::<T>::try_make_layout(new_cap)?;
        self.realloc_with_cap(new_cap);
        Ok(())
    }

    /// Shrinks the capacity of the ArrayList so that it is equal to its length.
    pub fn trim_to_current_length(&mut self) {
        self.realloc_with_cap(self.len);
    }

    /// Reallocates the internal Array with the provided capacity. Never called with a capacity
    /// below len.
    pub(crate) fn realloc_with_cap(&mut self, new_cap: usize) {
        self.arr.realloc(new_cap);
    }

    /// Grows the internal Array by a factor of 1.5 (at least one slot), so that the ArrayList can
    /// take at least one more element.
    ///
    /// # Panics
    /// Panics if the memory layout of the ArrayList would have a size that exceeds [`isize::MAX`].
    pub(crate) fn grow(&mut self) {
        let cap = self.cap();
        let new_cap = cmp::max(
            cap.checked_add(cap / 2).ok_or(CapacityOverflow).throw(),
            cap + 1,
        );

        self.realloc_with_cap(new_cap);
    }
}

impl<T> Extend<T> for ArrayList<T> {
    fn extend<A: IntoIterator<Item = T>>(&mut self, iter: A) {
        for item in iter {
            self.add(item);
        }
    }
}

impl<T> FromIterator<T> for ArrayList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(value: I) -> Self {
        let iter = value.into_iter();
        let mut list = ArrayList::with_cap(cmp::max(iter.size_hint().0, DEFAULT_CAP));

        for item in iter {
            list.add(item);
        }

        list
    }
}

impl<T> Default for ArrayList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for ArrayList<T> {
    fn drop(&mut self) {
        // Call drop on all initialized values in place. The MaybeUninit values left in self.arr
        // have a no-op drop, so dropping it afterwards only deallocates.
        self.clear();
    }
}

impl<T> Deref for ArrayList<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        // SAFETY: ArrayList is valid as a slice for len values, which are all initialized. The
        // pointer is nonnull, properly aligned and the range entirely contained within the Array.
        unsafe {
            slice::from_raw_parts(
                // Reinterpret *mut MaybeUninit<T> as *mut T for all values < len.
                self.arr.ptr.as_ptr().cast(),
                self.len,
            )
        }
    }
}

impl<T> DerefMut for ArrayList<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        // SAFETY: As for deref, with the borrow checker preventing other access to self.
        unsafe {
            slice::from_raw_parts_mut(
                self.arr.ptr.as_ptr().cast(),
                self.len,
            )
        }
    }
}

impl<T> AsRef<[T]> for ArrayList<T> {
    fn as_ref(&self) -> &[T] {
        self.deref()
    }
}

impl<T> AsMut<[T]> for ArrayList<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.deref_mut()
    }
}

impl<T> Borrow<[T]> for ArrayList<T> {
    fn borrow(&self) -> &[T] {
        self.as_ref()
    }
}

impl<T> BorrowMut<[T]> for ArrayList<T> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut()
    }
}

impl<T: Clone> Clone for ArrayList<T> {
    fn clone(&self) -> Self {
        let mut list = Self::with_cap(self.cap());

        for value in self.iter() {
            list.add(value.clone());
        }

        list
    }
}

impl<T> From<ArrayList<T>> for Array<T> {
    fn from(mut value: ArrayList<T>) -> Self {
        // Dealloc all uninit values > len.
        value.trim_to_current_length();

        let arr = mem::take(&mut value.arr);
        // value now owns an empty Array, so its drop does nothing.
        value.len = 0;

        // SAFETY: The Array has exactly len values, which are all initialized.
        unsafe { arr.assume_init() }
    }
}

impl<T> From<Array<T>> for ArrayList<T> {
    fn from(value: Array<T>) -> Self {
        let len = value.size();
        ArrayList {
            arr: value.forget_init(),
            len,
        }
    }
}

impl<T: PartialEq> PartialEq for ArrayList<T> {
    fn eq(&self, other: &Self) -> bool {
        **self == **other
    }
}

impl<T: Eq> Eq for ArrayList<T> {}

impl<T: Hash> Hash for ArrayList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (**self).hash(state);
    }
}

impl<T: Debug> Debug for ArrayList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArrayList")
            .field("contents", &&**self)
            .field("len", &self.len)
            .field("cap", &self.cap())
            .finish()
    }
}

/// Writes the elements separated by commas, e.g. `1,2,3`.
impl<T: Display> Display for ArrayList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_joined(f, self.iter())
    }
}
