//! Family agnostic implementations of transformations.
//!
//! Every operation consumes source sequence exactly once, left to right, and
//! feeds the result into builders of given factory. Source and target family
//! don't need to match.

use super::{Error, Factory, Result};
use crate::util::exact_size;
use ahash::AHashSet;
use std::hash::Hash;

pub fn map<T, U, I, F>(source: I, mapper: impl FnMut(T) -> U, factory: &F) -> F::Output
where
    I: IntoIterator<Item = T>,
    F: Factory<U>,
{
    factory.from_iter(source.into_iter().map(mapper))
}

pub fn filter<T, I, F>(source: I, predicate: impl FnMut(&T) -> bool, factory: &F) -> F::Output
where
    I: IntoIterator<Item = T>,
    F: Factory<T>,
{
    factory.from_iter(source.into_iter().filter(predicate))
}

pub fn filter_not<T, I, F>(
    source: I,
    mut predicate: impl FnMut(&T) -> bool,
    factory: &F,
) -> F::Output
where
    I: IntoIterator<Item = T>,
    F: Factory<T>,
{
    filter(source, |value| !predicate(value), factory)
}

pub fn flat_map<T, U, I, J, F>(source: I, mapper: impl FnMut(T) -> J, factory: &F) -> F::Output
where
    I: IntoIterator<Item = T>,
    J: IntoIterator<Item = U>,
    F: Factory<U>,
{
    factory.from_iter(source.into_iter().flat_map(mapper))
}

/// Splits source into longest prefix whose elements all satisfy predicate and the remainder.
///
/// Prefix accumulation stops at first element failing the predicate, matching
/// is not resumed after that.
pub fn span<T, I, F>(
    source: I,
    mut predicate: impl FnMut(&T) -> bool,
    factory: &F,
) -> (F::Output, F::Output)
where
    I: IntoIterator<Item = T>,
    F: Factory<T>,
{
    let mut source = source.into_iter();
    let mut prefix = factory.builder();
    let mut rest = factory.builder();

    for value in source.by_ref() {
        if predicate(&value) {
            prefix.add(value);
        } else {
            rest.add(value);
            break;
        }
    }
    rest.extend(source);

    (prefix.build(), rest.build())
}

/// Splits source into elements that satisfy predicate and those that don't.
pub fn partition<T, I, F>(
    source: I,
    mut predicate: impl FnMut(&T) -> bool,
    factory: &F,
) -> (F::Output, F::Output)
where
    I: IntoIterator<Item = T>,
    F: Factory<T>,
{
    let mut matching = factory.builder();
    let mut rest = factory.builder();
    for value in source {
        if predicate(&value) {
            matching.add(value);
        } else {
            rest.add(value);
        }
    }
    (matching.build(), rest.build())
}

/// Builds both parts separately and merges the builders.
pub fn concat<T, I, J, F>(prefix: I, suffix: J, factory: &F) -> F::Output
where
    I: IntoIterator<Item = T>,
    J: IntoIterator<Item = T>,
    F: Factory<T>,
{
    let mut head = factory.builder();
    head.extend(prefix);
    let mut tail = factory.builder();
    tail.extend(suffix);
    head.merge(tail).build()
}

pub fn prepended<T, I, F>(source: I, value: T, factory: &F) -> F::Output
where
    I: IntoIterator<Item = T>,
    F: Factory<T>,
{
    factory.from_iter(std::iter::once(value).chain(source))
}

pub fn prepended_all<T, I, J, F>(source: I, prefix: J, factory: &F) -> F::Output
where
    I: IntoIterator<Item = T>,
    J: IntoIterator<Item = T>,
    F: Factory<T>,
{
    concat(prefix, source, factory)
}

pub fn appended<T, I, F>(source: I, value: T, factory: &F) -> F::Output
where
    I: IntoIterator<Item = T>,
    F: Factory<T>,
{
    factory.from_iter(source.into_iter().chain(std::iter::once(value)))
}

pub fn appended_all<T, I, J, F>(source: I, suffix: J, factory: &F) -> F::Output
where
    I: IntoIterator<Item = T>,
    J: IntoIterator<Item = T>,
    F: Factory<T>,
{
    concat(source, suffix, factory)
}

/// Copy of source with element at index replaced by value.
///
/// Fails with IndexOutOfRange if index is outside of `[0, size)`.
pub fn updated<T, I, F>(source: I, index: usize, value: T, factory: &F) -> Result<F::Output>
where
    I: IntoIterator<Item = T>,
    F: Factory<T>,
{
    let source = source.into_iter();
    let mut builder = factory.builder();
    if let Some(size) = exact_size(&source) {
        Error::check_index(index, size)?;
        builder.size_hint(size);
    }
    let mut replacement = Some(value);
    for (i, element) in source.enumerate() {
        if i == index {
            if let Some(value) = replacement.take() {
                builder.add(value);
                continue;
            }
        }
        builder.add(element);
    }

    match replacement {
        None => Ok(builder.build()),
        Some(_) => Err(Error::IndexOutOfRange {
            index,
            size: builder.len(),
        }),
    }
}

pub fn drop<T, I, F>(source: I, n: usize, factory: &F) -> F::Output
where
    I: IntoIterator<Item = T>,
    F: Factory<T>,
{
    factory.from_iter(source.into_iter().skip(n))
}

pub fn drop_while<T, I, F>(source: I, predicate: impl FnMut(&T) -> bool, factory: &F) -> F::Output
where
    I: IntoIterator<Item = T>,
    F: Factory<T>,
{
    factory.from_iter(source.into_iter().skip_while(predicate))
}

pub fn take<T, I, F>(source: I, n: usize, factory: &F) -> F::Output
where
    I: IntoIterator<Item = T>,
    F: Factory<T>,
{
    factory.from_iter(source.into_iter().take(n))
}

pub fn take_while<T, I, F>(source: I, predicate: impl FnMut(&T) -> bool, factory: &F) -> F::Output
where
    I: IntoIterator<Item = T>,
    F: Factory<T>,
{
    factory.from_iter(source.into_iter().take_while(predicate))
}

pub fn reversed<T, I, F>(source: I, factory: &F) -> F::Output
where
    I: IntoIterator<Item = T>,
    I::IntoIter: DoubleEndedIterator,
    F: Factory<T>,
{
    factory.from_iter(source.into_iter().rev())
}

/// Keeps first occurrence of each element.
pub fn distinct<T, I, F>(source: I, factory: &F) -> F::Output
where
    T: Eq + Hash + Clone,
    I: IntoIterator<Item = T>,
    F: Factory<T>,
{
    let mut seen = AHashSet::new();
    factory.from_iter(
        source
            .into_iter()
            .filter(|value| seen.insert(value.clone())),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::VecFactory;

    #[test]
    fn span_stops_at_first_failure() {
        let (prefix, rest) = span([1, 2, 3, 4, 1], |x| *x < 3, &VecFactory::new());
        assert_eq!(prefix, vec![1, 2]);
        assert_eq!(rest, vec![3, 4, 1]);
    }

    #[test]
    fn span_edges() {
        let (prefix, rest) = span(Vec::<i32>::new(), |_| true, &VecFactory::new());
        assert!(prefix.is_empty() && rest.is_empty());

        let (prefix, rest) = span([1, 2], |_| true, &VecFactory::new());
        assert_eq!((prefix, rest), (vec![1, 2], vec![]));

        let (prefix, rest) = span([1, 2], |_| false, &VecFactory::new());
        assert_eq!((prefix, rest), (vec![], vec![1, 2]));
    }

    #[test]
    fn span_consumes_once() {
        let mut calls = 0;
        let (prefix, rest) = span(
            [1, 2, 3, 4, 1],
            |x| {
                calls += 1;
                *x < 3
            },
            &VecFactory::new(),
        );
        assert_eq!(calls, 3);
        assert_eq!(prefix.len() + rest.len(), 5);
    }

    #[test]
    fn updated_replaces() {
        let factory = VecFactory::new();
        assert_eq!(
            updated(['a', 'b', 'c', 'd'], 2, 'x', &factory),
            Ok(vec!['a', 'b', 'x', 'd'])
        );
        assert_eq!(
            updated(['a', 'b', 'c', 'd'], 4, 'x', &factory),
            Err(Error::IndexOutOfRange { index: 4, size: 4 })
        );
    }

    #[test]
    fn updated_unknown_size() {
        let factory = VecFactory::new();
        let source = (0..6).filter(|x| x % 2 == 0);
        assert_eq!(updated(source.clone(), 1, 7, &factory), Ok(vec![0, 7, 4]));
        assert_eq!(
            updated(source, 3, 7, &factory),
            Err(Error::IndexOutOfRange { index: 3, size: 3 })
        );
    }

    #[test]
    fn cross_family() {
        let factory = VecFactory::new();
        assert_eq!(map([1, 2, 3], |x| x * 2, &factory), vec![2, 4, 6]);
        assert_eq!(filter(1..=6, |x| x % 3 == 0, &factory), vec![3, 6]);
        assert_eq!(filter_not(1..=6, |x| x % 3 == 0, &factory), vec![1, 2, 4, 5]);
        assert_eq!(flat_map([1, 2], |x| vec![x; x], &factory), vec![1, 2, 2]);
    }

    #[test]
    fn concat_family() {
        let factory = VecFactory::new();
        assert_eq!(concat([1, 2], [3], &factory), vec![1, 2, 3]);
        assert_eq!(prepended([2, 3], 1, &factory), vec![1, 2, 3]);
        assert_eq!(
            prepended_all(['a', 'b'], ['x', 'y'], &VecFactory::new()),
            vec!['x', 'y', 'a', 'b']
        );
        assert_eq!(appended([1, 2], 3, &factory), vec![1, 2, 3]);
        assert_eq!(
            appended_all(['a', 'b'], ['x', 'y'], &VecFactory::new()),
            vec!['a', 'b', 'x', 'y']
        );
    }

    #[test]
    fn slicing() {
        let factory = VecFactory::new();
        assert_eq!(drop([1, 2, 3], 1, &factory), vec![2, 3]);
        assert_eq!(drop([1, 2, 3], 5, &factory), Vec::<i32>::new());
        assert_eq!(drop_while([1, 2, 3, 1], |x| *x < 2, &factory), vec![2, 3, 1]);
        assert_eq!(take([1, 2, 3], 2, &factory), vec![1, 2]);
        assert_eq!(take_while([1, 2, 3, 1], |x| *x < 3, &factory), vec![1, 2]);
        assert_eq!(reversed([1, 2, 3], &factory), vec![3, 2, 1]);
    }

    #[test]
    fn partition_and_distinct() {
        let factory = VecFactory::new();
        assert_eq!(
            partition([1, 2, 3, 4, 5], |x| x % 2 == 1, &factory),
            (vec![1, 3, 5], vec![2, 4])
        );
        assert_eq!(distinct([3, 1, 3, 2, 1], &factory), vec![3, 1, 2]);
    }
}
