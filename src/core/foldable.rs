use super::{Error, Result, Traversable};
use std::cmp::Ordering;

/// Reductions over elements. Implemented for every [`Traversable`].
pub trait Foldable: Traversable {
    fn fold_left<U>(&self, zero: U, op: impl FnMut(U, &Self::Element) -> U) -> U {
        self.iter().fold(zero, op)
    }

    fn fold_right<U>(&self, zero: U, mut op: impl FnMut(&Self::Element, U) -> U) -> U {
        let elements = self.iter().collect::<Vec<_>>();
        elements
            .into_iter()
            .rev()
            .fold(zero, |acc, element| op(element, acc))
    }

    /// Fails with AbsentValue if empty.
    fn reduce_left(
        &self,
        op: impl FnMut(Self::Element, &Self::Element) -> Self::Element,
    ) -> Result<Self::Element>
    where
        Self::Element: Clone,
    {
        self.reduce_left_option(op).ok_or(Error::AbsentValue)
    }

    fn reduce_left_option(
        &self,
        op: impl FnMut(Self::Element, &Self::Element) -> Self::Element,
    ) -> Option<Self::Element>
    where
        Self::Element: Clone,
    {
        let mut iter = self.iter();
        let first = iter.next()?.clone();
        Some(iter.fold(first, op))
    }

    /// Fails with AbsentValue if empty.
    fn reduce_right(
        &self,
        op: impl FnMut(&Self::Element, Self::Element) -> Self::Element,
    ) -> Result<Self::Element>
    where
        Self::Element: Clone,
    {
        self.reduce_right_option(op).ok_or(Error::AbsentValue)
    }

    fn reduce_right_option(
        &self,
        mut op: impl FnMut(&Self::Element, Self::Element) -> Self::Element,
    ) -> Option<Self::Element>
    where
        Self::Element: Clone,
    {
        let elements = self.iter().collect::<Vec<_>>();
        let mut iter = elements.into_iter().rev();
        let last = iter.next()?.clone();
        Some(iter.fold(last, |acc, element| op(element, acc)))
    }

    fn forall(&self, mut predicate: impl FnMut(&Self::Element) -> bool) -> bool {
        self.iter().all(|element| predicate(element))
    }

    fn exists(&self, mut predicate: impl FnMut(&Self::Element) -> bool) -> bool {
        self.iter().any(|element| predicate(element))
    }

    fn count(&self, mut predicate: impl FnMut(&Self::Element) -> bool) -> usize {
        self.iter().filter(|element| predicate(*element)).count()
    }

    fn contains(&self, value: &Self::Element) -> bool
    where
        Self::Element: PartialEq,
    {
        self.iter().any(|element| element == value)
    }

    fn find(&self, mut predicate: impl FnMut(&Self::Element) -> bool) -> Option<&Self::Element> {
        self.iter().find(|element| predicate(*element))
    }

    /// First maximal element.
    fn max_by(
        &self,
        mut compare: impl FnMut(&Self::Element, &Self::Element) -> Ordering,
    ) -> Option<&Self::Element> {
        self.iter().fold(None, |max, element| match max {
            Some(max) if compare(element, max) != Ordering::Greater => Some(max),
            _ => Some(element),
        })
    }

    /// First minimal element.
    fn min_by(
        &self,
        mut compare: impl FnMut(&Self::Element, &Self::Element) -> Ordering,
    ) -> Option<&Self::Element> {
        self.iter().fold(None, |min, element| match min {
            Some(min) if compare(element, min) != Ordering::Less => Some(min),
            _ => Some(element),
        })
    }
}

impl<C: Traversable + ?Sized> Foldable for C {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folds_on_option() {
        let some = Some(3);
        let none: Option<i32> = None;

        assert_eq!(some.fold_left(1, |acc, x| acc + x), 4);
        assert_eq!(none.fold_left(1, |acc, x| acc + x), 1);
        assert_eq!(some.fold_right(1, |x, acc| x - acc), 2);
        assert_eq!(some.reduce_left(|a, b| a + b), Ok(3));
        assert_eq!(none.reduce_left(|a, b| a + b), Err(Error::AbsentValue));
        assert_eq!(none.reduce_right_option(|a, b| a + b), None);
    }

    #[test]
    fn predicates_on_option() {
        let some = Some(3);
        let none: Option<i32> = None;

        assert!(some.forall(|x| *x == 3));
        assert!(none.forall(|_| false));
        assert!(some.exists(|x| *x == 3));
        assert!(!none.exists(|_| true));
        assert_eq!(Foldable::count(&some, |x| *x > 0), 1);
        assert!(Foldable::contains(&some, &3));
        assert!(!Foldable::contains(&none, &3));
        assert_eq!(Foldable::find(&some, |x| *x > 5), None);
    }

    #[test]
    fn first_extremum() {
        let pairs = Some((1, 'a'));
        assert_eq!(pairs.max_by(|a, b| a.0.cmp(&b.0)), Some(&(1, 'a')));
        assert_eq!(None::<i32>.min_by(|a, b| a.cmp(b)), None);
    }
}
