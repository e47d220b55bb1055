use super::ArrayBuffer;
use crate::core::*;
use std::{fmt, marker::PhantomData, ops::Index, rc::Rc};

/// Immutable indexed sequence.
///
/// Clones share storage. Transformations build a new array.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ImmutableArray<T>(Rc<[T]>);

impl<T> ImmutableArray<T> {
    pub fn empty() -> Self {
        Self(Rc::from(Vec::new()))
    }

    pub fn of<const N: usize>(values: [T; N]) -> Self {
        Self(Rc::from(Vec::from(values)))
    }

    pub fn from_slice(values: &[T]) -> Self
    where
        T: Clone,
    {
        Self(Rc::from(values))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Result<&T> {
        Error::check_index(index, self.len())?;
        Ok(&self.0[index])
    }

    pub fn get_option(&self, index: usize) -> Option<&T> {
        self.0.get(index)
    }

    pub fn as_slice(&self) -> &[T] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.0.iter()
    }

    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.0.to_vec()
    }

    /// True if both share the same storage.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    pub fn factory() -> ImmutableArrayFactory<T> {
        ImmutableArrayFactory::new()
    }
}

impl<T> Default for ImmutableArray<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: fmt::Debug> fmt::Debug for ImmutableArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ImmutableArray")?;
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Index<usize> for ImmutableArray<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.0[index]
    }
}

impl<T> FromIterator<T> for ImmutableArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a, T> IntoIterator for &'a ImmutableArray<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<T> From<Vec<T>> for ImmutableArray<T> {
    fn from(values: Vec<T>) -> Self {
        Self(Rc::from(values))
    }
}

impl<T> From<ArrayBuffer<T>> for ImmutableArray<T> {
    fn from(buffer: ArrayBuffer<T>) -> Self {
        Self::from(buffer.into_vec())
    }
}

impl<T: Clone> From<ImmutableArray<T>> for Vec<T> {
    fn from(array: ImmutableArray<T>) -> Self {
        array.to_vec()
    }
}

impl<T> Traversable for ImmutableArray<T> {
    type Element = T;
    type Iter<'a> = std::slice::Iter<'a, T> where T: 'a;

    fn iter(&self) -> Self::Iter<'_> {
        self.0.iter()
    }

    fn known_size(&self) -> Option<usize> {
        Some(self.len())
    }
}

impl<T> Functor for ImmutableArray<T> {
    type Mapped<U> = ImmutableArray<U>;

    fn map<U>(&self, mapper: impl FnMut(&T) -> U) -> ImmutableArray<U> {
        ops::map(self.iter(), mapper, &ImmutableArrayFactory::new())
    }
}

impl<T> Transformable for ImmutableArray<T> {
    type Family = ImmutableArrayFamily;
}

impl<T> Seq for ImmutableArray<T> {
    fn get(&self, index: usize) -> Result<&T> {
        Self::get(self, index)
    }

    fn get_option(&self, index: usize) -> Option<&T> {
        Self::get_option(self, index)
    }

    fn last(&self) -> Option<&T> {
        self.0.last()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ImmutableArrayFamily;

impl CollectionFamily for ImmutableArrayFamily {
    type C<T> = ImmutableArray<T>;
    type Factory<T> = ImmutableArrayFactory<T>;

    fn factory<T>() -> Self::Factory<T> {
        ImmutableArrayFactory::new()
    }
}

/// Collects into a buffer, then freezes it.
pub struct ImmutableArrayFactory<T>(PhantomData<fn() -> T>);

impl<T> ImmutableArrayFactory<T> {
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T> Default for ImmutableArrayFactory<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Factory<T> for ImmutableArrayFactory<T> {
    type Builder = ArrayBuffer<T>;
    type Output = ImmutableArray<T>;

    fn new_builder(&self) -> ArrayBuffer<T> {
        ArrayBuffer::new()
    }

    fn add_to_builder(&self, builder: &mut ArrayBuffer<T>, value: T) {
        builder.append(value);
    }

    fn size_hint(&self, builder: &mut ArrayBuffer<T>, size: usize) {
        builder.size_hint(size);
    }

    fn merge_builder(
        &self,
        mut builder1: ArrayBuffer<T>,
        builder2: ArrayBuffer<T>,
    ) -> ArrayBuffer<T> {
        builder1.append_all(builder2);
        builder1
    }

    fn build(&self, builder: ArrayBuffer<T>) -> ImmutableArray<T> {
        ImmutableArray::from(builder)
    }
}
