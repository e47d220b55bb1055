use super::Factory;

/// Container whose elements can be visited in order, any number of times.
pub trait Traversable {
    type Element;

    type Iter<'a>: Iterator<Item = &'a Self::Element>
    where
        Self: 'a;

    fn iter(&self) -> Self::Iter<'_>;

    /// Size if it can be known without traversal.
    fn known_size(&self) -> Option<usize> {
        None
    }

    fn size(&self) -> usize {
        self.known_size().unwrap_or_else(|| self.iter().count())
    }

    fn is_empty(&self) -> bool {
        match self.known_size() {
            Some(size) => size == 0,
            None => self.iter().next().is_none(),
        }
    }

    fn for_each(&self, action: impl FnMut(&Self::Element)) {
        self.iter().for_each(action)
    }

    /// Copies elements into a collection of any family.
    fn to<F: Factory<Self::Element>>(&self, factory: &F) -> F::Output
    where
        Self::Element: Clone,
    {
        factory.from_iter(self.iter().cloned())
    }
}
