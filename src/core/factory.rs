use crate::util::exact_size;
use getset::CopyGetters;
use std::marker::PhantomData;

/// Describes how to construct a collection of one family, element by element.
///
/// Factories are stateless. All accumulation state lives in `Self::Builder` which
/// is created by [`Factory::new_builder`] and consumed by [`Factory::build`].
/// Generic operations never construct concrete collections directly, instead they
/// are given a factory for the desired result family.
pub trait Factory<T> {
    /// Private accumulation structure.
    type Builder;

    /// Finished collection.
    type Output;

    fn new_builder(&self) -> Self::Builder;

    fn add_to_builder(&self, builder: &mut Self::Builder, value: T);

    /// Hint that builder will in total hold `size` elements.
    /// No-op is always a valid implementation.
    fn size_hint(&self, _builder: &mut Self::Builder, _size: usize) {}

    /// Concatenates elements of builder2 after those of builder1.
    fn merge_builder(&self, builder1: Self::Builder, builder2: Self::Builder) -> Self::Builder;

    fn build(&self, builder: Self::Builder) -> Self::Output;

    fn builder(&self) -> Builder<'_, T, Self>
    where
        Self: Sized,
    {
        Builder::new(self)
    }

    fn empty(&self) -> Self::Output {
        self.build(self.new_builder())
    }

    fn from_iter<I: IntoIterator<Item = T>>(&self, values: I) -> Self::Output
    where
        Self: Sized,
    {
        let mut builder = self.builder();
        builder.extend(values);
        builder.build()
    }

    /// Collection of `n` copies of value.
    fn fill(&self, n: usize, value: T) -> Self::Output
    where
        T: Clone,
        Self: Sized,
    {
        self.from_iter(std::iter::repeat(value).take(n))
    }

    /// Collection of `g(0), g(1), .., g(n - 1)`.
    fn tabulate(&self, n: usize, g: impl FnMut(usize) -> T) -> Self::Output
    where
        Self: Sized,
    {
        self.from_iter((0..n).map(g))
    }
}

/// Single use accumulator of one collection.
///
/// Pairs factory with its builder state. Building consumes it so it can't be
/// reused afterwards.
#[derive(CopyGetters)]
pub struct Builder<'f, T, F: Factory<T>> {
    #[getset(get_copy = "pub")]
    factory: &'f F,
    inner: F::Builder,
    added: usize,
    _marker: PhantomData<fn(T)>,
}

impl<'f, T, F: Factory<T>> Builder<'f, T, F> {
    pub fn new(factory: &'f F) -> Self {
        Self {
            factory,
            inner: factory.new_builder(),
            added: 0,
            _marker: PhantomData,
        }
    }

    /// Number of elements added so far.
    pub fn len(&self) -> usize {
        self.added
    }

    pub fn is_empty(&self) -> bool {
        self.added == 0
    }

    /// Hint that `additional` more elements will be added.
    pub fn size_hint(&mut self, additional: usize) {
        self.factory
            .size_hint(&mut self.inner, self.added.saturating_add(additional));
    }

    pub fn add(&mut self, value: T) {
        self.factory.add_to_builder(&mut self.inner, value);
        self.added += 1;
    }

    /// Adds all values in order. Presizes if the count is known upfront.
    pub fn extend<I: IntoIterator<Item = T>>(&mut self, values: I) {
        let values = values.into_iter();
        if let Some(additional) = exact_size(&values) {
            self.size_hint(additional);
        }
        for value in values {
            self.add(value);
        }
    }

    /// Appends everything other builder holds after elements of self.
    pub fn merge(self, other: Self) -> Self {
        let added = self.added + other.added;
        Self {
            factory: self.factory,
            inner: self.factory.merge_builder(self.inner, other.inner),
            added,
            _marker: PhantomData,
        }
    }

    pub fn build(self) -> F::Output {
        self.factory.build(self.inner)
    }
}

/// Type constructor of one collection family.
pub trait CollectionFamily {
    type C<T>;

    type Factory<T>: Factory<T, Output = Self::C<T>>;

    fn factory<T>() -> Self::Factory<T>;
}

/// Collection of family F with elements T.
pub type Coll<F, T> = <F as CollectionFamily>::C<T>;

/// Std `Vec` as a target family.
#[derive(Debug, Clone, Copy, Default)]
pub struct VecFamily;

impl CollectionFamily for VecFamily {
    type C<T> = Vec<T>;
    type Factory<T> = VecFactory<T>;

    fn factory<T>() -> Self::Factory<T> {
        VecFactory::new()
    }
}

#[derive(Debug)]
pub struct VecFactory<T>(PhantomData<fn() -> T>);

impl<T> VecFactory<T> {
    pub const fn new() -> Self {
        VecFactory(PhantomData)
    }
}

impl<T> Default for VecFactory<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for VecFactory<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for VecFactory<T> {}

impl<T> Factory<T> for VecFactory<T> {
    type Builder = Vec<T>;
    type Output = Vec<T>;

    fn new_builder(&self) -> Self::Builder {
        Vec::new()
    }

    fn add_to_builder(&self, builder: &mut Self::Builder, value: T) {
        builder.push(value);
    }

    fn size_hint(&self, builder: &mut Self::Builder, size: usize) {
        builder.reserve(size.saturating_sub(builder.len()));
    }

    fn merge_builder(
        &self,
        mut builder1: Self::Builder,
        mut builder2: Self::Builder,
    ) -> Self::Builder {
        builder1.append(&mut builder2);
        builder1
    }

    fn build(&self, builder: Self::Builder) -> Self::Output {
        builder
    }
}
