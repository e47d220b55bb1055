use super::Traversable;

/// Container that can be mapped into a container of the same shape.
pub trait Functor: Traversable {
    type Mapped<U>;

    fn map<U>(&self, mapper: impl FnMut(&Self::Element) -> U) -> Self::Mapped<U>;
}
