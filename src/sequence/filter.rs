use std::fmt;

/// A lazy stage yielding only the parent elements accepted by a predicate.
///
/// The index handed to the predicate counts parent elements, rejected ones
/// included.
#[derive(Clone)]
pub struct Filter<S, P> {
    parent: S,
    predicate: P,
}

impl<S, P> Filter<S, P> {
    pub(crate) fn new(parent: S, predicate: P) -> Self {
        Filter { parent, predicate }
    }
}

impl<S, P> fmt::Debug for Filter<S, P>
where
    S: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Filter").field("parent", &self.parent).finish()
    }
}

impl<S, P> IntoIterator for Filter<S, P>
where
    S: IntoIterator,
    P: FnMut(&S::Item, usize) -> bool,
{
    type Item = S::Item;
    type IntoIter = FilterIter<S::IntoIter, P>;

    fn into_iter(self) -> Self::IntoIter {
        FilterIter {
            inner: self.parent.into_iter(),
            predicate: self.predicate,
            index: 0,
        }
    }
}

pub struct FilterIter<I, P> {
    inner: I,
    predicate: P,
    index: usize,
}

impl<I, P> fmt::Debug for FilterIter<I, P>
where
    I: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilterIter")
            .field("inner", &self.inner)
            .field("index", &self.index)
            .finish()
    }
}

impl<I, P> Iterator for FilterIter<I, P>
where
    I: Iterator,
    P: FnMut(&I::Item, usize) -> bool,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        for value in self.inner.by_ref() {
            let index = self.index;
            self.index += 1;
            if (self.predicate)(&value, index) {
                return Some(value);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (_, upper) = self.inner.size_hint();
        (0, upper)
    }
}
