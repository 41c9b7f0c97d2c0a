//! Timing sweep for [`Sequence::bubble_sort`] over growing input sizes.
//!
//! For every size the sweep builds one input of each [`InputShape`], sorts it
//! once and records the wall-clock durations as a [`SweepRow`]. [`CsvTable`]
//! writes those rows as a comma-separated table.

use crate::Sequence;
use rand::seq::SliceRandom;
use rand::Rng;
use std::io::{self, Write};
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Arrangement of the `0..len` input handed to the sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputShape {
    /// Already in ascending order.
    Sorted,
    /// Ascending except for a shuffled prefix covering a tenth of the positions.
    MostlySorted,
    /// A uniformly shuffled permutation.
    Random,
}

impl InputShape {
    /// All shapes, in table column order.
    pub const ALL: [InputShape; 3] = [
        InputShape::Sorted,
        InputShape::MostlySorted,
        InputShape::Random,
    ];

    pub fn column_header(&self) -> &'static str {
        match self {
            InputShape::Sorted => "Already Sorted Time (s)",
            InputShape::MostlySorted => "Almost Sorted Time (s)",
            InputShape::Random => "Completely Random Time (s)",
        }
    }
}

/// Build a sequence holding a permutation of `0..len` arranged as `shape`.
pub fn build_input<R: Rng + ?Sized>(shape: InputShape, len: usize, rng: &mut R) -> Sequence<usize> {
    let mut values: Vec<usize> = (0..len).collect();
    match shape {
        InputShape::Sorted => {}
        InputShape::MostlySorted => values[..len / 10].shuffle(rng),
        InputShape::Random => values.shuffle(rng),
    }
    Sequence::from_elements(values)
}

/// Wall-clock time of a single in-place sort.
pub fn time_sort<T: Ord>(seq: &mut Sequence<T>) -> Duration {
    let started = Instant::now();
    seq.bubble_sort();
    started.elapsed()
}

/// Sort timings for one input size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepRow {
    pub len: usize,
    pub sorted: Duration,
    pub mostly_sorted: Duration,
    pub random: Duration,
}

impl SweepRow {
    pub fn duration(&self, shape: InputShape) -> Duration {
        match shape {
            InputShape::Sorted => self.sorted,
            InputShape::MostlySorted => self.mostly_sorted,
            InputShape::Random => self.random,
        }
    }
}

/// Iterator yielding one [`SweepRow`] per size in `1..=max_len`.
///
/// Nothing is measured or logged until the first call to `next`.
pub struct Sweep<R> {
    next_len: usize,
    max_len: usize,
    rng: R,
    phase: Phase,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Pending,
    Running,
    Finished,
}

impl<R: Rng> Sweep<R> {
    pub fn new(max_len: usize, rng: R) -> Self {
        Self {
            next_len: 1,
            max_len,
            rng,
            phase: Phase::Pending,
        }
    }

    fn measure(&mut self, shape: InputShape, len: usize) -> Duration {
        let mut seq = build_input(shape, len, &mut self.rng);
        let elapsed = time_sort(&mut seq);
        debug_assert!(seq.is_sorted());
        elapsed
    }
}

impl<R: Rng> Iterator for Sweep<R> {
    type Item = SweepRow;

    fn next(&mut self) -> Option<Self::Item> {
        match self.phase {
            Phase::Finished => return None,
            Phase::Pending => {
                info!(max_len = self.max_len, "starting bubble sort sweep");
                self.phase = Phase::Running;
            }
            Phase::Running => {}
        }
        if self.next_len > self.max_len {
            info!(rows = self.next_len - 1, "bubble sort sweep finished");
            self.phase = Phase::Finished;
            return None;
        }
        let len = self.next_len;
        self.next_len += 1;

        let row = SweepRow {
            len,
            sorted: self.measure(InputShape::Sorted, len),
            mostly_sorted: self.measure(InputShape::MostlySorted, len),
            random: self.measure(InputShape::Random, len),
        };
        debug!(
            len,
            sorted = row.sorted.as_secs_f64(),
            mostly_sorted = row.mostly_sorted.as_secs_f64(),
            random = row.random.as_secs_f64(),
            "measured sweep row"
        );
        Some(row)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = match self.phase {
            Phase::Finished => 0,
            _ => (self.max_len + 1).saturating_sub(self.next_len),
        };
        (left, Some(left))
    }
}

/// Comma-separated table of sweep rows. The header is written on creation.
pub struct CsvTable<W: Write> {
    out: W,
    rows: usize,
}

impl<W: Write> CsvTable<W> {
    pub fn new(mut out: W) -> io::Result<Self> {
        write!(out, "List Length")?;
        for shape in InputShape::ALL {
            write!(out, ",{}", shape.column_header())?;
        }
        writeln!(out)?;
        Ok(Self { out, rows: 0 })
    }

    pub fn write_row(&mut self, row: &SweepRow) -> io::Result<()> {
        write!(self.out, "{}", row.len)?;
        for shape in InputShape::ALL {
            write!(self.out, ",{}", row.duration(shape).as_secs_f64())?;
        }
        writeln!(self.out)?;
        self.rows += 1;
        Ok(())
    }

    /// Number of data rows written so far.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Flush and hand back the underlying writer.
    pub fn finish(mut self) -> io::Result<W> {
        self.out.flush()?;
        Ok(self.out)
    }
}
