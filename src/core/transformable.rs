use super::{ops, Coll, CollectionFamily, Factory, Functor};
use std::hash::Hash;

/// Container whose transformations produce a new container of the same family.
///
/// All operations are shared implementations from [`ops`], given the factory of
/// `Self::Family`.
pub trait Transformable: Functor {
    type Family: CollectionFamily;

    fn filter(
        &self,
        predicate: impl FnMut(&Self::Element) -> bool,
    ) -> Coll<Self::Family, Self::Element>
    where
        Self::Element: Clone,
    {
        ops::filter(
            self.iter().cloned(),
            predicate,
            &<Self::Family as CollectionFamily>::factory::<Self::Element>(),
        )
    }

    fn filter_not(
        &self,
        predicate: impl FnMut(&Self::Element) -> bool,
    ) -> Coll<Self::Family, Self::Element>
    where
        Self::Element: Clone,
    {
        ops::filter_not(
            self.iter().cloned(),
            predicate,
            &<Self::Family as CollectionFamily>::factory::<Self::Element>(),
        )
    }

    fn flat_map<U, J: IntoIterator<Item = U>>(
        &self,
        mapper: impl FnMut(&Self::Element) -> J,
    ) -> Coll<Self::Family, U> {
        ops::flat_map(
            self.iter(),
            mapper,
            &<Self::Family as CollectionFamily>::factory::<U>(),
        )
    }

    /// Longest prefix satisfying predicate and the rest.
    fn span(
        &self,
        predicate: impl FnMut(&Self::Element) -> bool,
    ) -> (
        Coll<Self::Family, Self::Element>,
        Coll<Self::Family, Self::Element>,
    )
    where
        Self::Element: Clone,
    {
        ops::span(
            self.iter().cloned(),
            predicate,
            &<Self::Family as CollectionFamily>::factory::<Self::Element>(),
        )
    }

    fn partition(
        &self,
        predicate: impl FnMut(&Self::Element) -> bool,
    ) -> (
        Coll<Self::Family, Self::Element>,
        Coll<Self::Family, Self::Element>,
    )
    where
        Self::Element: Clone,
    {
        ops::partition(
            self.iter().cloned(),
            predicate,
            &<Self::Family as CollectionFamily>::factory::<Self::Element>(),
        )
    }

    fn distinct(&self) -> Coll<Self::Family, Self::Element>
    where
        Self::Element: Eq + Hash + Clone,
    {
        ops::distinct(
            self.iter().cloned(),
            &<Self::Family as CollectionFamily>::factory::<Self::Element>(),
        )
    }

    /// Maps into a collection of any family.
    fn map_to<U, F: Factory<U>>(
        &self,
        mapper: impl FnMut(&Self::Element) -> U,
        factory: &F,
    ) -> F::Output {
        ops::map(self.iter(), mapper, factory)
    }

    /// Filters into a collection of any family.
    fn filter_to<F: Factory<Self::Element>>(
        &self,
        predicate: impl FnMut(&Self::Element) -> bool,
        factory: &F,
    ) -> F::Output
    where
        Self::Element: Clone,
    {
        ops::filter(self.iter().cloned(), predicate, factory)
    }
}
