use crate::core::*;
use crate::util::exact_size;
use auto_enums::auto_enum;
use log::*;
use std::{
    fmt,
    hash::{Hash, Hasher},
    marker::PhantomData,
    ops::{Index, IndexMut},
};

/// Smallest non zero capacity buffer grows to.
pub const DEFAULT_CAPACITY: usize = 16;

/// Salt mixed into the hash of a buffer so that it differs from hashes of other
/// containers with the same elements.
pub const HASH_MAGIC: i32 = -1142720889;

/// Capacity to grow to from `current` so that at least `needed` elements fit.
pub const fn grown_capacity(current: usize, needed: usize) -> usize {
    let grown = current.saturating_add(current / 2);
    let target = if needed > grown { needed } else { grown };
    if target > DEFAULT_CAPACITY {
        target
    } else {
        DEFAULT_CAPACITY
    }
}

/// Contiguous growable sequence.
///
/// Append is amortized O(1), random access is O(1), prepend and insert are
/// O(size) since there is no head room.
///
/// Growth: when an element doesn't fit, storage is reallocated to
/// `max(DEFAULT_CAPACITY, max(needed, capacity + capacity / 2))` and live elements
/// are moved over. Bulk operations with a known source size grow at most once.
///
/// Operations that fail validation don't mutate the buffer.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct ArrayBuffer<T> {
    elements: Vec<T>,
}

impl<T> ArrayBuffer<T> {
    pub const fn new() -> Self {
        Self {
            elements: Vec::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            elements: Vec::with_capacity(capacity),
        }
    }

    /// Fails with InvalidCapacity if capacity can't be allocated for T.
    pub fn try_with_capacity(capacity: usize) -> Result<Self> {
        let max = Self::max_capacity();
        if capacity > max {
            return Err(Error::InvalidCapacity {
                requested: capacity,
                max,
            });
        }
        Ok(Self::with_capacity(capacity))
    }

    pub fn of<const N: usize>(values: [T; N]) -> Self {
        Self {
            elements: Vec::from(values),
        }
    }

    pub fn from_slice(values: &[T]) -> Self
    where
        T: Clone,
    {
        Self {
            elements: values.to_vec(),
        }
    }

    pub fn max_capacity() -> usize {
        match std::mem::size_of::<T>() {
            0 => usize::MAX,
            size => isize::MAX as usize / size,
        }
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.elements.capacity()
    }

    /// Makes room for `size` elements in total.
    pub fn size_hint(&mut self, size: usize) {
        if size > self.capacity() {
            self.grow(size);
        }
    }

    fn grow(&mut self, needed: usize) {
        let old = self.capacity();
        let new = grown_capacity(old, needed);
        self.elements.reserve_exact(new - self.elements.len());
        trace!("ArrayBuffer grown from {} to {}", old, self.capacity());
    }

    fn check_index(&self, index: usize) -> Result<()> {
        Error::check_index(index, self.len())
    }

    pub fn get(&self, index: usize) -> Result<&T> {
        self.check_index(index)?;
        Ok(&self.elements[index])
    }

    pub fn get_option(&self, index: usize) -> Option<&T> {
        self.elements.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        self.check_index(index)?;
        Ok(&mut self.elements[index])
    }

    /// Replaces element at index and returns the previous one.
    pub fn set(&mut self, index: usize, value: T) -> Result<T> {
        Ok(std::mem::replace(self.get_mut(index)?, value))
    }

    pub fn append(&mut self, value: T) {
        if self.len() == self.capacity() {
            self.grow(self.len() + 1);
        }
        self.elements.push(value);
    }

    /// Grows at most once if size of values is known.
    /// If values panics midway, elements added before that stay.
    pub fn append_all<I: IntoIterator<Item = T>>(&mut self, values: I) {
        let values = values.into_iter();
        if let Some(count) = exact_size(&values) {
            if count > 0 && self.len() + count > self.capacity() {
                debug!("ArrayBuffer presizing for {} appended elements", count);
                self.grow(self.len() + count);
            }
        }
        for value in values {
            self.append(value);
        }
    }

    pub fn prepend(&mut self, value: T) {
        if self.len() == self.capacity() {
            self.grow(self.len() + 1);
        }
        self.elements.insert(0, value);
    }

    /// Shifts existing elements once.
    /// Values of unknown size are first collected into a temporary.
    pub fn prepend_all<I: IntoIterator<Item = T>>(&mut self, values: I) {
        self.splice_at(0, values);
    }

    /// Fails with IndexOutOfRange if index isn't in `[0, size]`.
    pub fn insert(&mut self, index: usize, value: T) -> Result<()> {
        if index > self.len() {
            return Err(Error::IndexOutOfRange {
                index,
                size: self.len(),
            });
        }
        if self.len() == self.capacity() {
            self.grow(self.len() + 1);
        }
        self.elements.insert(index, value);
        Ok(())
    }

    /// Fails with IndexOutOfRange if index isn't in `[0, size]`.
    pub fn insert_all<I: IntoIterator<Item = T>>(&mut self, index: usize, values: I) -> Result<()> {
        if index > self.len() {
            return Err(Error::IndexOutOfRange {
                index,
                size: self.len(),
            });
        }
        self.splice_at(index, values);
        Ok(())
    }

    fn splice_at<I: IntoIterator<Item = T>>(&mut self, index: usize, values: I) {
        debug_assert!(index <= self.len());
        let values = sized(values.into_iter());
        let (count, _) = values.size_hint();
        if count == 0 {
            return;
        }
        if self.len() + count > self.capacity() {
            debug!("ArrayBuffer presizing for {} inserted elements", count);
            self.grow(self.len() + count);
        }
        self.elements.splice(index..index, values);
    }

    /// Fails with IndexOutOfRange if index isn't in `[0, size)`.
    pub fn remove(&mut self, index: usize) -> Result<T> {
        self.check_index(index)?;
        Ok(self.elements.remove(index))
    }

    /// Fails with IndexOutOfRange if window doesn't fit in `[0, size]`.
    pub fn remove_range(&mut self, index: usize, count: usize) -> Result<()> {
        Error::check_range(index, count, self.len())?;
        self.elements.drain(index..index + count);
        Ok(())
    }

    /// Drops all elements, keeps capacity.
    pub fn clear(&mut self) {
        self.elements.clear();
    }

    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.elements
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.elements.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.elements.iter_mut()
    }

    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.elements.clone()
    }

    pub fn into_vec(self) -> Vec<T> {
        self.elements
    }

    pub fn factory() -> ArrayBufferFactory<T> {
        ArrayBufferFactory::new()
    }
}

/// Source with exactly known size, materialized if it has to be.
#[auto_enum(Iterator)]
fn sized<I: Iterator>(iter: I) -> impl Iterator<Item = I::Item> {
    match exact_size(&iter) {
        Some(_) => iter,
        None => iter.collect::<Vec<_>>().into_iter(),
    }
}

impl<T> Default for ArrayBuffer<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for ArrayBuffer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ArrayBuffer")?;
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: Hash> Hash for ArrayBuffer<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        HASH_MAGIC.hash(state);
        self.as_slice().hash(state);
    }
}

impl<T> Index<usize> for ArrayBuffer<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.elements[index]
    }
}

impl<T> IndexMut<usize> for ArrayBuffer<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.elements[index]
    }
}

impl<T> FromIterator<T> for ArrayBuffer<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut buffer = Self::new();
        buffer.append_all(iter);
        buffer
    }
}

impl<T> Extend<T> for ArrayBuffer<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.append_all(iter)
    }
}

impl<T> IntoIterator for ArrayBuffer<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a ArrayBuffer<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

impl<T> From<Vec<T>> for ArrayBuffer<T> {
    fn from(elements: Vec<T>) -> Self {
        Self { elements }
    }
}

impl<T> From<ArrayBuffer<T>> for Vec<T> {
    fn from(buffer: ArrayBuffer<T>) -> Self {
        buffer.elements
    }
}

impl<T, const N: usize> From<[T; N]> for ArrayBuffer<T> {
    fn from(values: [T; N]) -> Self {
        Self::of(values)
    }
}

// ************************ Capabilities *************************** //

impl<T> Traversable for ArrayBuffer<T> {
    type Element = T;
    type Iter<'a> = std::slice::Iter<'a, T> where T: 'a;

    fn iter(&self) -> Self::Iter<'_> {
        self.elements.iter()
    }

    fn known_size(&self) -> Option<usize> {
        Some(self.len())
    }
}

impl<T> Functor for ArrayBuffer<T> {
    type Mapped<U> = ArrayBuffer<U>;

    fn map<U>(&self, mapper: impl FnMut(&T) -> U) -> ArrayBuffer<U> {
        ops::map(self.iter(), mapper, &ArrayBufferFactory::new())
    }
}

impl<T> Transformable for ArrayBuffer<T> {
    type Family = ArrayBufferFamily;
}

impl<T> Seq for ArrayBuffer<T> {
    fn get(&self, index: usize) -> Result<&T> {
        Self::get(self, index)
    }

    fn get_option(&self, index: usize) -> Option<&T> {
        Self::get_option(self, index)
    }
}

impl<T> MutableSeq for ArrayBuffer<T> {
    fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        Self::get_mut(self, index)
    }

    fn swap(&mut self, i: usize, j: usize) -> Result<()> {
        self.check_index(i)?;
        self.check_index(j)?;
        self.elements.swap(i, j);
        Ok(())
    }

    fn sort_by(&mut self, compare: impl FnMut(&T, &T) -> std::cmp::Ordering) {
        self.elements.sort_by(compare)
    }
}

impl<T> Buffer for ArrayBuffer<T> {
    fn append(&mut self, value: T) {
        Self::append(self, value)
    }

    fn append_all<I: IntoIterator<Item = T>>(&mut self, values: I) {
        Self::append_all(self, values)
    }

    fn prepend(&mut self, value: T) {
        Self::prepend(self, value)
    }

    fn prepend_all<I: IntoIterator<Item = T>>(&mut self, values: I) {
        Self::prepend_all(self, values)
    }

    fn insert(&mut self, index: usize, value: T) -> Result<()> {
        Self::insert(self, index, value)
    }

    fn insert_all<I: IntoIterator<Item = T>>(&mut self, index: usize, values: I) -> Result<()> {
        Self::insert_all(self, index, values)
    }

    fn remove(&mut self, index: usize) -> Result<T> {
        Self::remove(self, index)
    }

    fn remove_range(&mut self, index: usize, count: usize) -> Result<()> {
        Self::remove_range(self, index, count)
    }

    fn clear(&mut self) {
        Self::clear(self)
    }
}

// ************************ Family *************************** //

#[derive(Debug, Clone, Copy, Default)]
pub struct ArrayBufferFamily;

impl CollectionFamily for ArrayBufferFamily {
    type C<T> = ArrayBuffer<T>;
    type Factory<T> = ArrayBufferFactory<T>;

    fn factory<T>() -> Self::Factory<T> {
        ArrayBufferFactory::new()
    }
}

/// Builds buffers by appending into a buffer.
pub struct ArrayBufferFactory<T>(PhantomData<fn() -> T>);

impl<T> ArrayBufferFactory<T> {
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T> Default for ArrayBufferFactory<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Factory<T> for ArrayBufferFactory<T> {
    type Builder = ArrayBuffer<T>;
    type Output = ArrayBuffer<T>;

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

    fn build(&self, builder: ArrayBuffer<T>) -> ArrayBuffer<T> {
        builder
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, Rng, SeedableRng};
    use std::{hash::BuildHasher, rc::Rc};

    #[test]
    fn append_get() {
        let mut buffer = ArrayBuffer::of([1, 2]);
        buffer.append(3);
        assert_eq!(buffer.len(), 3);
        assert_eq!(buffer.get(buffer.len() - 1), Ok(&3));
    }

    #[test]
    fn clear() {
        let mut buffer = ArrayBuffer::of(['a', 'b']);
        buffer.clear();
        assert_eq!(buffer.len(), 0);
        assert_eq!(buffer.get(0), Err(Error::IndexOutOfRange { index: 0, size: 0 }));
    }

    #[test]
    fn clear_releases_elements() {
        let shared = Rc::new(());
        let mut buffer = ArrayBuffer::new();
        buffer.append(shared.clone());
        buffer.append(shared.clone());
        assert_eq!(Rc::strong_count(&shared), 3);
        buffer.clear();
        assert_eq!(Rc::strong_count(&shared), 1);
    }

    #[test]
    fn growth_policy() {
        assert_eq!(grown_capacity(0, 1), DEFAULT_CAPACITY);
        assert_eq!(grown_capacity(0, 40), 40);
        assert_eq!(grown_capacity(16, 17), 24);
        assert_eq!(grown_capacity(24, 25), 36);
        assert_eq!(grown_capacity(24, 100), 100);
    }

    #[test]
    fn growth() {
        let mut buffer = ArrayBuffer::new();
        assert_eq!(buffer.capacity(), 0);
        buffer.append(0u64);
        assert!(buffer.capacity() >= DEFAULT_CAPACITY);
        for i in 1..17 {
            buffer.append(i);
        }
        assert!(buffer.capacity() >= 24);
    }

    #[test]
    fn logarithmic_reallocations() {
        let mut buffer = ArrayBuffer::new();
        let mut reallocations = 0;
        let mut capacity = buffer.capacity();
        for i in 0..100_000u32 {
            buffer.append(i);
            if buffer.capacity() != capacity {
                capacity = buffer.capacity();
                reallocations += 1;
            }
        }
        // log_1.5(100_000 / 16) ~ 22
        assert!(reallocations <= 30, "{} reallocations", reallocations);
    }

    #[test]
    fn append_all_presizes_once() {
        let mut buffer = ArrayBuffer::of([0u8]);
        let capacity = buffer.capacity();
        buffer.append_all(vec![1; 1000]);
        assert_eq!(buffer.len(), 1001);
        assert!(buffer.capacity() >= 1001);
        assert_ne!(buffer.capacity(), capacity);
    }

    #[test]
    fn prepend_all_and_append_all() {
        let mut buffer = ArrayBuffer::of(['a', 'b']);
        buffer.prepend_all(['x', 'y']);
        assert_eq!(buffer.as_slice(), &['x', 'y', 'a', 'b']);

        let mut buffer = ArrayBuffer::of(['a', 'b']);
        buffer.append_all(['x', 'y']);
        assert_eq!(buffer.as_slice(), &['a', 'b', 'x', 'y']);
    }

    #[test]
    fn prepend_all_unknown_size() {
        let mut buffer = ArrayBuffer::of([10, 11]);
        buffer.prepend_all((0..10).filter(|x| x % 3 == 0));
        assert_eq!(buffer.as_slice(), &[0, 3, 6, 9, 10, 11]);
    }

    #[test]
    fn prepend() {
        let mut buffer = ArrayBuffer::new();
        buffer.prepend(2);
        buffer.prepend(1);
        assert_eq!(buffer.as_slice(), &[1, 2]);
    }

    #[test]
    fn insert() {
        let mut buffer = ArrayBuffer::of([1, 4]);
        buffer.insert(1, 2).unwrap();
        buffer.insert_all(2, [3]).unwrap();
        buffer.insert(4, 5).unwrap();
        assert_eq!(buffer.as_slice(), &[1, 2, 3, 4, 5]);
        assert_eq!(
            buffer.insert(6, 0),
            Err(Error::IndexOutOfRange { index: 6, size: 5 })
        );
        assert!(buffer.insert_all(6, [0]).is_err());
        assert_eq!(buffer.len(), 5);
    }

    #[test]
    fn remove() {
        let mut buffer = ArrayBuffer::of([1, 2, 3, 4, 5]);
        assert_eq!(buffer.remove(1), Ok(2));
        assert_eq!(buffer.as_slice(), &[1, 3, 4, 5]);
        assert!(buffer.remove(4).is_err());

        buffer.remove_range(1, 2).unwrap();
        assert_eq!(buffer.as_slice(), &[1, 5]);
        assert_eq!(
            buffer.remove_range(1, 2),
            Err(Error::RangeOutOfBounds {
                index: 1,
                count: 2,
                size: 2
            })
        );
        assert!(buffer.remove_range(0, 3).is_err());
        assert_eq!(buffer.as_slice(), &[1, 5]);
        buffer.remove_range(2, 0).unwrap();
        buffer.remove_range(0, 2).unwrap();
        assert!(buffer.is_empty());
    }

    #[test]
    fn set() {
        let mut buffer = ArrayBuffer::of(["a", "b"]);
        assert_eq!(buffer.set(1, "c"), Ok("b"));
        assert!(buffer.set(2, "d").is_err());
        assert_eq!(buffer.as_slice(), &["a", "c"]);
    }

    #[test]
    fn capacity_limit() {
        assert!(ArrayBuffer::<u64>::try_with_capacity(8).is_ok());
        assert_eq!(
            ArrayBuffer::<u64>::try_with_capacity(usize::MAX)
                .map(|_| ())
                .map_err(|e| e.kind()),
            Err(ErrorKind::InvalidArgument)
        );
    }

    #[test]
    fn equality_ignores_capacity() {
        let mut a = ArrayBuffer::with_capacity(100);
        a.append_all([1, 2, 3]);
        let b = ArrayBuffer::of([1, 2, 3]);
        assert_eq!(a, b);

        let hasher = ahash::RandomState::with_seeds(1, 2, 3, 4);
        assert_eq!(
            BuildHasher::hash_one(&hasher, &a),
            BuildHasher::hash_one(&hasher, &b)
        );
        assert_ne!(
            BuildHasher::hash_one(&hasher, &a),
            BuildHasher::hash_one(&hasher, vec![1, 2, 3])
        );
        assert_ne!(a, ArrayBuffer::of([1, 2]));
    }

    #[test]
    fn seq_ops() {
        let buffer = ArrayBuffer::of([1, 2, 3, 4, 1]);
        let (prefix, rest) = buffer.span(|x| *x < 3);
        assert_eq!(prefix, ArrayBuffer::of([1, 2]));
        assert_eq!(rest, ArrayBuffer::of([3, 4, 1]));

        assert_eq!(buffer.get_option(5), None);
        assert_eq!(buffer.get_option(usize::MAX), None);
        assert_eq!(Seq::index_of(&buffer, &1), Some(0));
        assert_eq!(buffer.index_of_from(&1, 1), Some(4));
        assert_eq!(buffer.index_of(&9), None);
        assert_eq!(buffer.index_where(|x| *x > 2), Some(2));

        let abcd = ArrayBuffer::of(['a', 'b', 'c', 'd']);
        assert_eq!(abcd.updated(2, 'x'), Ok(ArrayBuffer::of(['a', 'b', 'x', 'd'])));
        assert!(abcd.updated(4, 'x').unwrap_err().is_index_out_of_range());
    }

    #[test]
    fn functor() {
        let buffer = ArrayBuffer::of([1, 2, 3]);
        let mapped: ArrayBuffer<String> = buffer.map(|x| x.to_string());
        assert_eq!(mapped, ArrayBuffer::of(["1".to_string(), "2".into(), "3".into()]));
        assert_eq!(buffer.flat_map(|x| [*x, *x]), ArrayBuffer::of([1, 1, 2, 2, 3, 3]));
        assert_eq!(buffer.filter(|x| x % 2 == 1), ArrayBuffer::of([1, 3]));
    }

    #[test]
    fn factory_round_trip() {
        let source = vec![5, 3, 8, 1];
        let built = ArrayBuffer::factory().from_iter(source.iter().copied());
        assert_eq!(built.as_slice(), source.as_slice());

        let factory = ArrayBufferFactory::new();
        let mut a = factory.builder();
        a.extend([1, 2]);
        let mut b = factory.builder();
        b.extend([3]);
        assert_eq!(a.merge(b).build(), ArrayBuffer::of([1, 2, 3]));
    }

    #[test]
    fn mutable_seq() {
        let mut buffer = ArrayBuffer::of([3, 1, 2]);
        buffer.sort_by(|a, b| a.cmp(b));
        assert_eq!(buffer.as_slice(), &[1, 2, 3]);
        buffer.map_in_place(|x| x * 10);
        assert_eq!(buffer.as_slice(), &[10, 20, 30]);
        MutableSeq::swap(&mut buffer, 0, 2).unwrap();
        assert_eq!(buffer.as_slice(), &[30, 20, 10]);
        assert!(MutableSeq::swap(&mut buffer, 0, 3).is_err());
    }

    #[test]
    fn random_against_vec() {
        let mut rng = StdRng::seed_from_u64(0x6b61_6c61);
        let mut buffer = ArrayBuffer::new();
        let mut model = Vec::new();

        for step in 0..2000u32 {
            match rng.gen_range(0..7) {
                0 => {
                    buffer.append(step);
                    model.push(step);
                }
                1 => {
                    buffer.prepend(step);
                    model.insert(0, step);
                }
                2 => {
                    let index = rng.gen_range(0..=model.len());
                    buffer.insert(index, step).unwrap();
                    model.insert(index, step);
                }
                3 if !model.is_empty() => {
                    let index = rng.gen_range(0..model.len());
                    assert_eq!(buffer.remove(index), Ok(model.remove(index)));
                }
                4 => {
                    let index = rng.gen_range(0..=model.len());
                    let count = rng.gen_range(0..=model.len() - index);
                    buffer.remove_range(index, count).unwrap();
                    model.drain(index..index + count);
                }
                5 => {
                    let values = (0..rng.gen_range(0..5)).map(|i| step + i).collect::<Vec<_>>();
                    buffer.prepend_all(values.iter().copied().filter(|_| true));
                    model.splice(0..0, values);
                }
                _ => {
                    let values = (0..rng.gen_range(0..5)).map(|i| step + i).collect::<Vec<_>>();
                    buffer.append_all(values.clone());
                    model.extend(values);
                }
            }
            assert_eq!(buffer.as_slice(), model.as_slice());
            assert!(buffer.capacity() >= buffer.len());
        }
    }
}
