use std::fmt;

/// A lazy stage applying a function to each element of its parent.
#[derive(Clone)]
pub struct Map<S, F> {
    parent: S,
    f: F,
}

impl<S, F> Map<S, F> {
    pub(crate) fn new(parent: S, f: F) -> Self {
        Map { parent, f }
    }
}

impl<S, F> fmt::Debug for Map<S, F>
where
    S: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Map").field("parent", &self.parent).finish()
    }
}

impl<S, U, F> IntoIterator for Map<S, F>
where
    S: IntoIterator,
    F: FnMut(S::Item, usize) -> U,
{
    type Item = U;
    type IntoIter = MapIter<S::IntoIter, F>;

    fn into_iter(self) -> Self::IntoIter {
        MapIter {
            inner: self.parent.into_iter(),
            f: self.f,
            index: 0,
        }
    }
}

pub struct MapIter<I, F> {
    inner: I,
    f: F,
    index: usize,
}

impl<I, F> fmt::Debug for MapIter<I, F>
where
    I: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MapIter")
            .field("inner", &self.inner)
            .field("index", &self.index)
            .finish()
    }
}

impl<I, U, F> Iterator for MapIter<I, F>
where
    I: Iterator,
    F: FnMut(I::Item, usize) -> U,
{
    type Item = U;

    fn next(&mut self) -> Option<U> {
        let value = self.inner.next()?;
        let index = self.index;
        self.index += 1;
        Some((self.f)(value, index))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}
