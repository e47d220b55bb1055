use super::{ops, Coll, CollectionFamily, Error, Result, Transformable};

/// Ordered container with positional access.
///
/// Defaults are linear. Indexed containers override [`Seq::get_option`] to be O(1).
pub trait Seq: Transformable {
    /// Fails with IndexOutOfRange if index isn't in `[0, size)`.
    fn get(&self, index: usize) -> Result<&Self::Element> {
        self.get_option(index)
            .ok_or_else(|| Error::IndexOutOfRange {
                index,
                size: self.size(),
            })
    }

    /// Total variant of [`Seq::get`].
    fn get_option(&self, index: usize) -> Option<&Self::Element> {
        if let Some(size) = self.known_size() {
            if index >= size {
                return None;
            }
        }
        self.iter().nth(index)
    }

    fn is_defined_at(&self, index: usize) -> bool {
        index < self.size()
    }

    fn first(&self) -> Option<&Self::Element> {
        self.iter().next()
    }

    fn last(&self) -> Option<&Self::Element> {
        self.iter().last()
    }

    fn index_of(&self, value: &Self::Element) -> Option<usize>
    where
        Self::Element: PartialEq,
    {
        self.index_of_from(value, 0)
    }

    /// First index at or after `from` of value.
    fn index_of_from(&self, value: &Self::Element, from: usize) -> Option<usize>
    where
        Self::Element: PartialEq,
    {
        self.index_where_from(|element| element == value, from)
    }

    fn index_where(&self, predicate: impl FnMut(&Self::Element) -> bool) -> Option<usize> {
        self.index_where_from(predicate, 0)
    }

    /// First index at or after `from` of element satisfying predicate.
    fn index_where_from(
        &self,
        mut predicate: impl FnMut(&Self::Element) -> bool,
        from: usize,
    ) -> Option<usize> {
        self.iter()
            .enumerate()
            .skip(from)
            .find(|&(_, element)| predicate(element))
            .map(|(i, _)| i)
    }

    fn last_index_of(&self, value: &Self::Element) -> Option<usize>
    where
        Self::Element: PartialEq,
    {
        self.iter()
            .enumerate()
            .filter(|&(_, element)| element == value)
            .map(|(i, _)| i)
            .last()
    }

    /// Copy with element at index replaced.
    /// Fails with IndexOutOfRange if index isn't in `[0, size)`.
    fn updated(
        &self,
        index: usize,
        value: Self::Element,
    ) -> Result<Coll<Self::Family, Self::Element>>
    where
        Self::Element: Clone,
    {
        ops::updated(
            self.iter().cloned(),
            index,
            value,
            &<Self::Family as CollectionFamily>::factory::<Self::Element>(),
        )
    }

    fn drop(&self, n: usize) -> Coll<Self::Family, Self::Element>
    where
        Self::Element: Clone,
    {
        ops::drop(
            self.iter().cloned(),
            n,
            &<Self::Family as CollectionFamily>::factory::<Self::Element>(),
        )
    }

    fn drop_while(
        &self,
        predicate: impl FnMut(&Self::Element) -> bool,
    ) -> Coll<Self::Family, Self::Element>
    where
        Self::Element: Clone,
    {
        ops::drop_while(
            self.iter().cloned(),
            predicate,
            &<Self::Family as CollectionFamily>::factory::<Self::Element>(),
        )
    }

    fn take(&self, n: usize) -> Coll<Self::Family, Self::Element>
    where
        Self::Element: Clone,
    {
        ops::take(
            self.iter().cloned(),
            n,
            &<Self::Family as CollectionFamily>::factory::<Self::Element>(),
        )
    }

    fn take_while(
        &self,
        predicate: impl FnMut(&Self::Element) -> bool,
    ) -> Coll<Self::Family, Self::Element>
    where
        Self::Element: Clone,
    {
        ops::take_while(
            self.iter().cloned(),
            predicate,
            &<Self::Family as CollectionFamily>::factory::<Self::Element>(),
        )
    }

    fn concat<I: IntoIterator<Item = Self::Element>>(
        &self,
        suffix: I,
    ) -> Coll<Self::Family, Self::Element>
    where
        Self::Element: Clone,
    {
        ops::concat(
            self.iter().cloned(),
            suffix,
            &<Self::Family as CollectionFamily>::factory::<Self::Element>(),
        )
    }

    fn prepended(&self, value: Self::Element) -> Coll<Self::Family, Self::Element>
    where
        Self::Element: Clone,
    {
        ops::prepended(
            self.iter().cloned(),
            value,
            &<Self::Family as CollectionFamily>::factory::<Self::Element>(),
        )
    }

    fn prepended_all<I: IntoIterator<Item = Self::Element>>(
        &self,
        prefix: I,
    ) -> Coll<Self::Family, Self::Element>
    where
        Self::Element: Clone,
    {
        ops::prepended_all(
            self.iter().cloned(),
            prefix,
            &<Self::Family as CollectionFamily>::factory::<Self::Element>(),
        )
    }

    fn appended(&self, value: Self::Element) -> Coll<Self::Family, Self::Element>
    where
        Self::Element: Clone,
    {
        ops::appended(
            self.iter().cloned(),
            value,
            &<Self::Family as CollectionFamily>::factory::<Self::Element>(),
        )
    }

    fn appended_all<I: IntoIterator<Item = Self::Element>>(
        &self,
        suffix: I,
    ) -> Coll<Self::Family, Self::Element>
    where
        Self::Element: Clone,
    {
        ops::appended_all(
            self.iter().cloned(),
            suffix,
            &<Self::Family as CollectionFamily>::factory::<Self::Element>(),
        )
    }

    fn reversed(&self) -> Coll<Self::Family, Self::Element>
    where
        Self::Element: Clone,
    {
        let elements = self.iter().collect::<Vec<_>>();
        ops::reversed(
            elements.into_iter().cloned(),
            &<Self::Family as CollectionFamily>::factory::<Self::Element>(),
        )
    }
}
