use crate::errors::{Result, SequenceError};

/// Concrete positions selected by a `(start, stop, step)` slice over `len` elements.
///
/// Bounds are clamped rather than rejected, so every yielded position is
/// valid for the length the range was resolved against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct StepRange {
    next: isize,
    stop: isize,
    step: isize,
}

impl StepRange {
    pub(crate) fn resolve(
        start: Option<isize>,
        stop: Option<isize>,
        step: isize,
        len: usize,
    ) -> Result<Self> {
        if step == 0 {
            return Err(SequenceError::ZeroStep);
        }
        let len = len as isize;
        let (lower, upper) = if step > 0 { (0, len) } else { (-1, len - 1) };
        let clamp = |bound: isize| {
            if bound < 0 {
                (bound + len).max(lower)
            } else {
                bound.min(upper)
            }
        };

        let start = match start {
            Some(bound) => clamp(bound),
            None if step > 0 => lower,
            None => upper,
        };
        let stop = match stop {
            Some(bound) => clamp(bound),
            None if step > 0 => upper,
            None => lower,
        };

        Ok(StepRange {
            next: start,
            stop,
            step,
        })
    }
}

impl Iterator for StepRange {
    type Item = isize;

    fn next(&mut self) -> Option<Self::Item> {
        let more = if self.step > 0 {
            self.next < self.stop
        } else {
            self.next > self.stop
        };
        if !more {
            return None;
        }
        let current = self.next;
        self.next = self.next.checked_add(self.step).unwrap_or(self.stop);
        Some(current)
    }
}
