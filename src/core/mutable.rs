use super::{Error, Result, Seq};
use log::*;
use std::cmp::Ordering;

/// Sequence whose elements can be replaced in place, but whose size is fixed.
pub trait MutableSeq: Seq {
    /// Replaces element at index and returns the previous one.
    fn set(&mut self, index: usize, value: Self::Element) -> Result<Self::Element> {
        Ok(std::mem::replace(self.get_mut(index)?, value))
    }

    fn get_mut(&mut self, index: usize) -> Result<&mut Self::Element>;

    fn swap(&mut self, i: usize, j: usize) -> Result<()>;

    fn map_in_place(&mut self, mut mapper: impl FnMut(&Self::Element) -> Self::Element) {
        for index in 0..self.size() {
            let slot = self.get_mut(index);
            debug_assert!(slot.is_ok(), "get_mut failed inside of size at {}", index);
            match slot {
                Ok(slot) => {
                    let value = mapper(&*slot);
                    *slot = value;
                }
                Err(error) => error!("Skipped in map_in_place: {}", error),
            }
        }
    }

    /// Stable sort.
    fn sort_by(&mut self, compare: impl FnMut(&Self::Element, &Self::Element) -> Ordering);
}

/// Growable mutable sequence.
///
/// Operations that fail validation leave the buffer untouched.
pub trait Buffer: MutableSeq {
    fn append(&mut self, value: Self::Element);

    fn append_all<I: IntoIterator<Item = Self::Element>>(&mut self, values: I) {
        for value in values {
            self.append(value);
        }
    }

    fn prepend(&mut self, value: Self::Element);

    fn prepend_all<I: IntoIterator<Item = Self::Element>>(&mut self, values: I) {
        let values = values.into_iter().collect::<Vec<_>>();
        for value in values.into_iter().rev() {
            self.prepend(value);
        }
    }

    /// Inserts value before element at index.
    /// Fails with IndexOutOfRange if index isn't in `[0, size]`.
    fn insert(&mut self, index: usize, value: Self::Element) -> Result<()>;

    fn insert_all<I: IntoIterator<Item = Self::Element>>(
        &mut self,
        index: usize,
        values: I,
    ) -> Result<()> {
        let size = self.size();
        if index > size {
            return Err(Error::IndexOutOfRange { index, size });
        }
        for (i, value) in values.into_iter().enumerate() {
            self.insert(index + i, value)?;
        }
        Ok(())
    }

    /// Fails with IndexOutOfRange if index isn't in `[0, size)`.
    fn remove(&mut self, index: usize) -> Result<Self::Element>;

    /// Removes `count` elements starting at index.
    /// Fails with IndexOutOfRange if window doesn't fit in `[0, size]`.
    fn remove_range(&mut self, index: usize, count: usize) -> Result<()>;

    fn clear(&mut self);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ops, Functor, Transformable, Traversable, VecFactory, VecFamily};

    /// Vec reporting `extra` more elements than it holds.
    struct Overstated {
        values: Vec<i32>,
        extra: usize,
    }

    impl Traversable for Overstated {
        type Element = i32;
        type Iter<'a> = std::slice::Iter<'a, i32>;

        fn iter(&self) -> Self::Iter<'_> {
            self.values.iter()
        }

        fn known_size(&self) -> Option<usize> {
            Some(self.values.len() + self.extra)
        }
    }

    impl Functor for Overstated {
        type Mapped<U> = Vec<U>;

        fn map<U>(&self, mapper: impl FnMut(&i32) -> U) -> Vec<U> {
            ops::map(self.values.iter(), mapper, &VecFactory::new())
        }
    }

    impl Transformable for Overstated {
        type Family = VecFamily;
    }

    impl Seq for Overstated {}

    impl MutableSeq for Overstated {
        fn get_mut(&mut self, index: usize) -> Result<&mut i32> {
            let size = self.values.len();
            self.values
                .get_mut(index)
                .ok_or(Error::IndexOutOfRange { index, size })
        }

        fn swap(&mut self, i: usize, j: usize) -> Result<()> {
            Error::check_index(i, self.values.len())?;
            Error::check_index(j, self.values.len())?;
            self.values.swap(i, j);
            Ok(())
        }

        fn sort_by(&mut self, compare: impl FnMut(&i32, &i32) -> Ordering) {
            self.values.sort_by(compare)
        }
    }

    #[test]
    fn map_in_place() {
        let mut seq = Overstated {
            values: vec![1, 2, 3],
            extra: 0,
        };
        seq.map_in_place(|x| x * 10);
        assert_eq!(seq.values, vec![10, 20, 30]);
        assert_eq!(seq.set(1, 5), Ok(20));
        assert_eq!(seq.values, vec![10, 5, 30]);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "get_mut failed inside of size")]
    fn map_in_place_past_reported_size() {
        let mut seq = Overstated {
            values: vec![1, 2],
            extra: 1,
        };
        seq.map_in_place(|x| x + 1);
    }
}
