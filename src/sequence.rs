//! A chainable wrapper over any iterable source.
//!
//! Transformations (`map`, `filter`) build lazy stages and do no work until
//! the resulting sequence is iterated. Consumption operations drive the
//! iteration immediately. Every callback receives the element together with a
//! zero-based index that restarts at 0 on each pass over the sequence.

mod filter;
mod map;

pub use filter::{Filter, FilterIter};
pub use map::{Map, MapIter};

/// A lazy sequence wrapping a single source.
///
/// Cloning a `Sequence` clones its source, so a clone is an independent,
/// fresh pass exactly when cloning the source is. Borrowed collections and
/// [`crate::Range`] are restartable this way; one-shot iterators are not.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Sequence<S> {
    source: S,
}

/// Wraps `source` in a [`Sequence`].
pub fn iterate<S>(source: S) -> Sequence<S>
where
    S: IntoIterator,
{
    Sequence::new(source)
}

impl<S> Sequence<S>
where
    S: IntoIterator,
{
    pub fn new(source: S) -> Self {
        Sequence { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn into_inner(self) -> S {
        self.source
    }

    /// Consumes the sequence into a `Vec`, preserving encounter order.
    pub fn into_vec(self) -> Vec<S::Item> {
        self.collect()
    }

    pub fn collect<C>(self) -> C
    where
        C: FromIterator<S::Item>,
    {
        self.source.into_iter().collect()
    }

    pub fn extend_into<C>(self, target: &mut C)
    where
        C: Extend<S::Item>,
    {
        target.extend(self.source);
    }

    pub fn for_each<F>(self, mut f: F)
    where
        F: FnMut(S::Item, usize),
    {
        for (index, value) in self.source.into_iter().enumerate() {
            f(value, index);
        }
    }

    /// Like [`Sequence::for_each`], but stops at the first error `f` returns
    /// and hands it back unchanged.
    pub fn try_for_each<E, F>(self, mut f: F) -> Result<(), E>
    where
        F: FnMut(S::Item, usize) -> Result<(), E>,
    {
        self.source
            .into_iter()
            .enumerate()
            .try_for_each(|(index, value)| f(value, index))
    }

    pub fn map<U, F>(self, f: F) -> Sequence<Map<S, F>>
    where
        F: FnMut(S::Item, usize) -> U,
    {
        Sequence::new(Map::new(self.source, f))
    }

    pub fn filter<P>(self, predicate: P) -> Sequence<Filter<S, P>>
    where
        P: FnMut(&S::Item, usize) -> bool,
    {
        Sequence::new(Filter::new(self.source, predicate))
    }

    /// Left fold starting from `initial`. An empty sequence returns `initial`.
    pub fn reduce<A, F>(self, mut f: F, initial: A) -> A
    where
        F: FnMut(A, S::Item, usize) -> A,
    {
        self.source
            .into_iter()
            .enumerate()
            .fold(initial, |acc, (index, value)| f(acc, value, index))
    }

    pub fn try_reduce<A, E, F>(self, mut f: F, initial: A) -> Result<A, E>
    where
        F: FnMut(A, S::Item, usize) -> Result<A, E>,
    {
        self.source
            .into_iter()
            .enumerate()
            .try_fold(initial, |acc, (index, value)| f(acc, value, index))
    }

    /// True if `predicate` holds for every element. Stops at the first
    /// failure.
    pub fn every<P>(self, mut predicate: P) -> bool
    where
        P: FnMut(S::Item, usize) -> bool,
    {
        self.source
            .into_iter()
            .enumerate()
            .all(|(index, value)| predicate(value, index))
    }

    /// True if `predicate` holds for some element. Stops at the first match.
    pub fn some<P>(self, mut predicate: P) -> bool
    where
        P: FnMut(S::Item, usize) -> bool,
    {
        self.source
            .into_iter()
            .enumerate()
            .any(|(index, value)| predicate(value, index))
    }
}

impl<S> IntoIterator for Sequence<S>
where
    S: IntoIterator,
{
    type Item = S::Item;
    type IntoIter = S::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        self.source.into_iter()
    }
}

impl<'a, S> IntoIterator for &'a Sequence<S>
where
    &'a S: IntoIterator,
{
    type Item = <&'a S as IntoIterator>::Item;
    type IntoIter = <&'a S as IntoIterator>::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        (&self.source).into_iter()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    const FIB: [i32; 5] = [1, 1, 2, 3, 5];

    fn fib() -> Sequence<Vec<i32>> {
        iterate(FIB.to_vec())
    }

    #[test]
    fn wraps_one_shot_iterators() {
        let mut items = FIB.into_iter();
        let seq = iterate(std::iter::from_fn(move || items.next()));
        assert_eq!(seq.into_vec(), FIB);
    }

    #[test]
    fn iterates_by_reference() {
        let seq = fib();
        let doubled: Vec<i32> = (&seq).into_iter().map(|n| n * 2).collect();
        assert_eq!(doubled, [2, 2, 4, 6, 10]);
        // Borrowing leaves the source intact for a second pass.
        assert_eq!(seq.into_vec(), FIB);
    }

    #[test]
    fn map_yields_transformed_elements_in_order() {
        let strings = fib().map(|n, _| n.to_string()).into_vec();
        assert_eq!(strings, ["1", "1", "2", "3", "5"]);
    }

    #[test]
    fn map_agrees_with_mapping_the_collected_vec() {
        let f = |n: i32| n * n - 3;
        let direct: Vec<i32> = fib().into_vec().into_iter().map(f).collect();
        assert_eq!(fib().map(|n, _| f(n)).into_vec(), direct);
    }

    #[test]
    fn filter_keeps_matching_elements_in_order() {
        assert_eq!(fib().filter(|n, _| n % 2 == 0).into_vec(), [2]);
        assert_eq!(fib().filter(|n, _| *n != 2).into_vec(), [1, 1, 3, 5]);
    }

    #[test]
    fn callbacks_see_zero_based_indices() {
        let indexed = fib().map(|n, i| (i, n)).into_vec();
        assert_eq!(indexed, [(0, 1), (1, 1), (2, 2), (3, 3), (4, 5)]);

        let odd_positions = fib().filter(|_, i| i % 2 == 1).into_vec();
        assert_eq!(odd_positions, [1, 3]);
    }

    #[test]
    fn index_restarts_on_each_pass() {
        let seq = iterate(&FIB[..]).map(|n, i| n * 10 + i as i32);
        let first = seq.clone().into_vec();
        let second = seq.into_vec();
        assert_eq!(first, [10, 11, 22, 33, 54]);
        assert_eq!(first, second);
    }

    #[test]
    fn transformations_are_lazy() {
        let calls = Cell::new(0);
        let seq = fib().map(|n, _| {
            calls.set(calls.get() + 1);
            n
        });
        assert_eq!(calls.get(), 0);

        let mut iter = seq.into_iter();
        assert_eq!(iter.next(), Some(1));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn filter_is_lazy_and_restarts() {
        let calls = Cell::new(0);
        let seq = iterate(&FIB[..]).filter(|_, i| {
            calls.set(calls.get() + 1);
            i != 1
        });
        assert_eq!(calls.get(), 0);

        let first = seq.clone().into_vec();
        assert_eq!(calls.get(), 5);
        let second = seq.into_vec();
        assert_eq!(first, [&1, &2, &3, &5]);
        assert_eq!(first, second);
        assert_eq!(calls.get(), 10);
    }

    #[test]
    #[should_panic(expected = "callback failed on 2")]
    fn for_each_propagates_callback_panic() {
        fib().for_each(|n, _| {
            if n == 2 {
                panic!("callback failed on {n}");
            }
        });
    }

    #[test]
    #[should_panic(expected = "mapping failed at index 3")]
    fn map_propagates_callback_panic_when_iterated() {
        let seq = fib().map(|n, i| {
            if i == 3 {
                panic!("mapping failed at index {i}");
            }
            n
        });
        seq.into_vec();
    }

    #[test]
    fn for_each_visits_every_element_with_its_index() {
        let mut seen = Vec::new();
        fib().for_each(|n, i| seen.push((i, n)));
        assert_eq!(seen, [(0, 1), (1, 1), (2, 2), (3, 3), (4, 5)]);
    }

    #[test]
    fn try_for_each_stops_at_first_error() {
        let mut seen = Vec::new();
        let result = fib().try_for_each(|n, _| {
            if n > 2 {
                return Err(n);
            }
            seen.push(n);
            Ok(())
        });
        assert_eq!(result, Err(3));
        assert_eq!(seen, [1, 1, 2]);
    }

    #[test]
    fn reduce_folds_left() {
        assert_eq!(fib().reduce(|acc, n, _| acc + n, 0), 12);
        let digits = fib().reduce(|acc, n, _| format!("{acc}{n}"), String::from(">"));
        assert_eq!(digits, ">11235");
    }

    #[test]
    fn reduce_on_empty_returns_initial() {
        let empty = iterate(Vec::<i32>::new());
        assert_eq!(empty.reduce(|_, _, _| panic!("not called"), 42), 42);
    }

    #[test]
    fn try_reduce_propagates_error_unchanged() {
        let result: Result<i32, String> = fib().try_reduce(
            |acc, n, i| {
                if i == 3 {
                    Err(format!("bad element {n}"))
                } else {
                    Ok(acc + n)
                }
            },
            0,
        );
        assert_eq!(result, Err("bad element 3".to_string()));
        assert_eq!(fib().try_reduce(|acc, n, _| Ok::<_, ()>(acc * n), 1), Ok(30));
    }

    #[test]
    fn every_and_some() {
        assert!(fib().every(|n, _| n < 10));
        assert!(!fib().every(|n, _| n < 3));
        assert!(fib().some(|n, _| n > 3));
        assert!(!fib().some(|n, _| n < 0));
    }

    #[test]
    fn every_and_some_on_empty() {
        assert!(iterate(Vec::<i32>::new()).every(|_, _| false));
        assert!(!iterate(Vec::<i32>::new()).some(|_, _| true));
    }

    #[test]
    fn every_and_some_short_circuit() {
        let visited = Cell::new(0);
        let all_small = fib().every(|n, _| {
            visited.set(visited.get() + 1);
            n < 2
        });
        assert!(!all_small);
        assert_eq!(visited.get(), 3);

        visited.set(0);
        let any_two = fib().some(|n, _| {
            visited.set(visited.get() + 1);
            n == 2
        });
        assert!(any_two);
        assert_eq!(visited.get(), 3);
    }

    #[test]
    fn collect_and_extend_into() {
        let set: std::collections::BTreeSet<i32> = fib().collect();
        assert_eq!(set.into_iter().collect::<Vec<_>>(), [1, 2, 3, 5]);

        let mut target = vec![0];
        fib().filter(|n, _| *n > 1).extend_into(&mut target);
        assert_eq!(target, [0, 2, 3, 5]);
    }

    #[test]
    fn into_inner_returns_source() {
        assert_eq!(fib().into_inner(), FIB.to_vec());
        assert_eq!(fib().source(), &FIB.to_vec());
    }
}
