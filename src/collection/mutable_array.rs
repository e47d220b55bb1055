use super::ArrayBuffer;
use crate::core::*;
use log::*;
use std::{
    cmp::Ordering,
    fmt,
    marker::PhantomData,
    ops::{Index, IndexMut},
};

/// Fixed length sequence with replaceable elements.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MutableArray<T>(Box<[T]>);

impl<T> MutableArray<T> {
    pub fn empty() -> Self {
        Self(Box::new([]))
    }

    /// Adopts storage without copying.
    pub fn wrap(values: Vec<T>) -> Self {
        trace!("MutableArray wrapping {} elements", values.len());
        Self(values.into_boxed_slice())
    }

    pub fn of<const N: usize>(values: [T; N]) -> Self {
        Self(Box::new(values))
    }

    pub fn from_slice(values: &[T]) -> Self
    where
        T: Clone,
    {
        Self(values.into())
    }

    pub fn fill(len: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self(vec![value; len].into_boxed_slice())
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

    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        Error::check_index(index, self.len())?;
        Ok(&mut self.0[index])
    }

    pub fn as_slice(&self) -> &[T] {
        &self.0
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.0.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.0.iter_mut()
    }

    pub fn into_vec(self) -> Vec<T> {
        self.0.into_vec()
    }

    pub fn factory() -> MutableArrayFactory<T> {
        MutableArrayFactory::new()
    }
}

impl<T> Default for MutableArray<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: fmt::Debug> fmt::Debug for MutableArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("MutableArray")?;
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Index<usize> for MutableArray<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.0[index]
    }
}

impl<T> IndexMut<usize> for MutableArray<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.0[index]
    }
}

impl<T> FromIterator<T> for MutableArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<T> IntoIterator for MutableArray<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_vec().into_iter()
    }
}

impl<'a, T> IntoIterator for &'a MutableArray<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<T> From<Vec<T>> for MutableArray<T> {
    fn from(values: Vec<T>) -> Self {
        Self::wrap(values)
    }
}

impl<T> From<MutableArray<T>> for Vec<T> {
    fn from(array: MutableArray<T>) -> Self {
        array.into_vec()
    }
}

impl<T> Traversable for MutableArray<T> {
    type Element = T;
    type Iter<'a> = std::slice::Iter<'a, T> where T: 'a;

    fn iter(&self) -> Self::Iter<'_> {
        self.0.iter()
    }

    fn known_size(&self) -> Option<usize> {
        Some(self.len())
    }
}

impl<T> Functor for MutableArray<T> {
    type Mapped<U> = MutableArray<U>;

    fn map<U>(&self, mapper: impl FnMut(&T) -> U) -> MutableArray<U> {
        ops::map(self.iter(), mapper, &MutableArrayFactory::new())
    }
}

impl<T> Transformable for MutableArray<T> {
    type Family = MutableArrayFamily;
}

impl<T> Seq for MutableArray<T> {
    fn get(&self, index: usize) -> Result<&T> {
        Self::get(self, index)
    }

    fn get_option(&self, index: usize) -> Option<&T> {
        Self::get_option(self, index)
    }
}

impl<T> MutableSeq for MutableArray<T> {
    fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        Self::get_mut(self, index)
    }

    fn swap(&mut self, i: usize, j: usize) -> Result<()> {
        Error::check_index(i, self.len())?;
        Error::check_index(j, self.len())?;
        self.0.swap(i, j);
        Ok(())
    }

    fn map_in_place(&mut self, mut mapper: impl FnMut(&T) -> T) {
        for slot in self.0.iter_mut() {
            *slot = mapper(slot);
        }
    }

    fn sort_by(&mut self, compare: impl FnMut(&T, &T) -> Ordering) {
        self.0.sort_by(compare)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MutableArrayFamily;

impl CollectionFamily for MutableArrayFamily {
    type C<T> = MutableArray<T>;
    type Factory<T> = MutableArrayFactory<T>;

    fn factory<T>() -> Self::Factory<T> {
        MutableArrayFactory::new()
    }
}

/// Collects into a buffer, then wraps its storage.
pub struct MutableArrayFactory<T>(PhantomData<fn() -> T>);

impl<T> MutableArrayFactory<T> {
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T> Default for MutableArrayFactory<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Factory<T> for MutableArrayFactory<T> {
    type Builder = ArrayBuffer<T>;
    type Output = MutableArray<T>;

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

    fn build(&self, builder: ArrayBuffer<T>) -> MutableArray<T> {
        MutableArray::wrap(builder.into_vec())
    }
}
