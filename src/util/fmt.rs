use std::fmt::{self, Debug, Display, Formatter};

/// Writes the contained string verbatim through [`Debug`], used for bucket dumps.
pub struct DebugRaw(pub String);

impl Debug for DebugRaw {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Writes `key:value` pairs separated by commas, the plain text form shared by [`PlainArray`] and
/// [`LightWeightMap`].
///
/// [`PlainArray`]: crate::collections::sparse::PlainArray
/// [`LightWeightMap`]: crate::collections::light_weight::LightWeightMap
#[allow(unused)]
pub(crate) fn write_pairs<K, V, I>(f: &mut Formatter<'_>, pairs: I) -> fmt::Result
where
    K: Display,
    V: Display,
    I: IntoIterator<Item = (K, V)>,
{
    for (index, (key, value)) in pairs.into_iter().enumerate() {
        if index != 0 {
            write!(f, ",")?;
        }
        write!(f, "{key}:{value}")?;
    }
    Ok(())
}

/// Formats a cloneable iterator as a debug list, for use as a field of
/// [`debug_struct`](Formatter::debug_struct).
pub struct DebugList<I>(pub I);

impl<I> Debug for DebugList<I>
where
    I: Iterator + Clone,
    I::Item: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.clone()).finish()
    }
}

/// Writes every item separated by commas, e.g. `1,2,3`.
#[allow(unused)]
pub(crate) fn write_joined<T, I>(f: &mut Formatter<'_>, items: I) -> fmt::Result
where
    T: Display,
    I: IntoIterator<Item = T>,
{
    for (index, item) in items.into_iter().enumerate() {
        if index != 0 {
            write!(f, ",")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}
