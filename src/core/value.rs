//! `Option` as a zero-or-one element container.

use super::{Error, Functor, Result, Traversable};
use std::result;

/// Container that holds at most one value.
pub trait ValueContainer: Traversable {
    fn is_defined(&self) -> bool;

    /// Fails with AbsentValue if empty.
    fn get(&self) -> Result<&Self::Element>;

    fn get_or_else<'a>(&'a self, default: &'a Self::Element) -> &'a Self::Element {
        self.get().unwrap_or(default)
    }

    fn get_or_else_with(&self, default: impl FnOnce() -> Self::Element) -> Self::Element
    where
        Self::Element: Clone,
    {
        match self.get() {
            Ok(value) => value.clone(),
            Err(_) => default(),
        }
    }

    /// Value, or the error made by `error` if empty.
    fn get_or_throw<X>(&self, error: impl FnOnce() -> X) -> result::Result<&Self::Element, X> {
        self.get().map_err(|_| error())
    }

    fn as_option(&self) -> Option<&Self::Element> {
        self.get().ok()
    }

    fn to_option(&self) -> Option<Self::Element>
    where
        Self::Element: Clone,
    {
        self.as_option().cloned()
    }
}

impl<T> Traversable for Option<T> {
    type Element = T;

    type Iter<'a> = std::option::Iter<'a, T> where T: 'a;

    fn iter(&self) -> Self::Iter<'_> {
        Option::iter(self)
    }

    fn known_size(&self) -> Option<usize> {
        Some(usize::from(self.is_some()))
    }
}

impl<T> Functor for Option<T> {
    type Mapped<U> = Option<U>;

    fn map<U>(&self, mapper: impl FnMut(&T) -> U) -> Option<U> {
        self.as_ref().map(mapper)
    }
}

impl<T> ValueContainer for Option<T> {
    fn is_defined(&self) -> bool {
        self.is_some()
    }

    fn get(&self) -> Result<&T> {
        self.as_ref().ok_or(Error::AbsentValue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Foldable, VecFactory};

    #[test]
    fn get() {
        assert_eq!(ValueContainer::get(&Some(1)), Ok(&1));
        assert_eq!(ValueContainer::get(&None::<i32>), Err(Error::AbsentValue));
        assert_eq!(*None::<i32>.get_or_else(&5), 5);
        assert_eq!(Some(2).get_or_else_with(|| 5), 2);
        assert!(Some(()).is_defined());
    }

    #[test]
    fn get_or_throw() {
        assert_eq!(Some(3).get_or_throw(|| "absent"), Ok(&3));
        assert_eq!(None::<i32>.get_or_throw(|| "absent"), Err("absent"));
        let mut called = false;
        assert_eq!(Some(3).get_or_throw(|| called = true), Ok(&3));
        assert!(!called);
    }

    #[test]
    fn options() {
        let value = Some(String::from("kala"));
        assert_eq!(value.as_option(), Some(&String::from("kala")));
        assert_eq!(value.to_option(), Some(String::from("kala")));
        assert_eq!(None::<String>.as_option(), None);
        assert_eq!(ValueContainer::to_option(&None::<String>), None);
    }

    #[test]
    fn size() {
        assert_eq!(Some('a').size(), 1);
        assert!(Traversable::is_empty(&None::<char>));
        assert_eq!(Some('a').to(&VecFactory::new()), vec!['a']);
    }

    #[test]
    fn map_by_ref() {
        let value = Some(String::from("kala"));
        assert_eq!(Functor::map(&value, |s| s.len()), Some(4));
        assert_eq!(value.fold_left(0, |acc, s| acc + s.len()), 4);
        assert_eq!(Functor::map(&None::<String>, |s| s.len()), None);
    }
}
