//! Lazy arithmetic progressions.
//!
//! A range yields `start, start + step, start + 2 * step, ...` for as long as
//! the value has not reached `end` in the direction of `step`. A step whose
//! sign points away from `end` produces an empty range rather than an error.

use std::{fmt, iter::FusedIterator};

use log::{debug, trace};
use num_traits::{CheckedAdd, CheckedDiv, CheckedSub, Num, One, ToPrimitive, Zero};

use crate::{
    error::{Error, Result},
    sequence::Sequence,
};

/// Numeric types a [`Range`] can step over.
pub trait RangeValue:
    Clone + PartialOrd + Num + CheckedAdd + CheckedSub + CheckedDiv + ToPrimitive + fmt::Debug
{
}

impl<N> RangeValue for N where
    N: Clone + PartialOrd + Num + CheckedAdd + CheckedSub + CheckedDiv + ToPrimitive + fmt::Debug
{
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Range<N> {
    start: N,
    end: N,
    step: N,
}

impl<N> Range<N>
where
    N: RangeValue,
{
    pub fn new(start: N, end: N, step: N) -> Result<Self> {
        if step.is_zero() {
            debug!("Rejected range {start:?}..{end:?} with zero step");
            return Err(Error::ZeroStep);
        }
        Ok(Self::new_unchecked(start, end, step))
    }

    fn new_unchecked(start: N, end: N, step: N) -> Self {
        trace!("Created range {start:?}..{end:?} by {step:?}");
        Range { start, end, step }
    }

    pub fn start(&self) -> &N {
        &self.start
    }

    pub fn end(&self) -> &N {
        &self.end
    }

    pub fn step(&self) -> &N {
        &self.step
    }

    /// Starts a fresh pass over the range.
    pub fn iter(&self) -> RangeIter<N> {
        self.clone().into_iter()
    }
}

impl<N> IntoIterator for Range<N>
where
    N: RangeValue,
{
    type Item = N;
    type IntoIter = RangeIter<N>;

    fn into_iter(self) -> RangeIter<N> {
        let ascending = self.step > N::zero();
        RangeIter {
            cursor: Some(self.start),
            end: self.end,
            step: self.step,
            ascending,
        }
    }
}

impl<'a, N> IntoIterator for &'a Range<N>
where
    N: RangeValue,
{
    type Item = N;
    type IntoIter = RangeIter<N>;

    fn into_iter(self) -> RangeIter<N> {
        self.iter()
    }
}

#[derive(Clone, Debug)]
pub struct RangeIter<N> {
    // None once the range is exhausted or the next step would overflow.
    cursor: Option<N>,
    end: N,
    step: N,
    ascending: bool,
}

impl<N> RangeIter<N>
where
    N: RangeValue,
{
    fn in_bounds(&self, value: &N) -> bool {
        if self.ascending {
            *value < self.end
        } else {
            *value > self.end
        }
    }

    /// Number of values left, or `None` if it can't be computed in `N` or
    /// doesn't fit in a `usize`.
    fn remaining(&self) -> Option<usize> {
        let Some(cursor) = &self.cursor else {
            return Some(0);
        };
        if !self.in_bounds(cursor) {
            return Some(0);
        }
        let distance = self.end.checked_sub(cursor)?;
        let whole = distance.checked_div(&self.step)?;
        let partial = distance - whole.clone() * self.step.clone();
        let count = if partial.is_zero() {
            whole
        } else {
            whole.checked_add(&N::one())?
        };
        count.to_usize()
    }
}

impl<N> Iterator for RangeIter<N>
where
    N: RangeValue,
{
    type Item = N;

    fn next(&mut self) -> Option<N> {
        let current = self.cursor.take()?;
        if !self.in_bounds(&current) {
            return None;
        }
        self.cursor = current.checked_add(&self.step);
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.remaining() {
            Some(count) => (count, Some(count)),
            None => (0, None),
        }
    }
}

impl<N> FusedIterator for RangeIter<N> where N: RangeValue {}

/// Defaults for the parts of a range other than its end.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RangeOptions<N> {
    pub start: N,
    pub step: N,
}

impl<N> Default for RangeOptions<N>
where
    N: Zero + One,
{
    fn default() -> Self {
        RangeOptions {
            start: N::zero(),
            step: N::one(),
        }
    }
}

/// `0, 1, ..., end - 1`.
pub fn range_to<N>(end: N) -> Sequence<Range<N>>
where
    N: RangeValue,
{
    range_from_to(N::zero(), end)
}

pub fn range_from_to<N>(start: N, end: N) -> Sequence<Range<N>>
where
    N: RangeValue,
{
    Sequence::new(Range::new_unchecked(start, end, N::one()))
}

pub fn range_from_to_by<N>(start: N, end: N, step: N) -> Result<Sequence<Range<N>>>
where
    N: RangeValue,
{
    Ok(Sequence::new(Range::new(start, end, step)?))
}

pub fn range_with<N>(end: N, options: RangeOptions<N>) -> Result<Sequence<Range<N>>>
where
    N: RangeValue,
{
    range_from_to_by(options.start, end, options.step)
}

/// Builds a range from an argument list: `[end]`, `[start, end]` or
/// `[start, end, step]`.
pub fn range<N>(args: &[N]) -> Result<Sequence<Range<N>>>
where
    N: RangeValue,
{
    match args {
        [end] => Ok(range_to(end.clone())),
        [start, end] => Ok(range_from_to(start.clone(), end.clone())),
        [start, end, step] => range_from_to_by(start.clone(), end.clone(), step.clone()),
        _ => {
            debug!("Rejected range with {} arguments", args.len());
            Err(Error::InvalidArgumentCount(args.len()))
        }
    }
}
