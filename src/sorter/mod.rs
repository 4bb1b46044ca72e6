//! Animated Lomuto QuickSort
//!
//! [`AnimatedSort`] sorts a slice in place and, after every swap, hands the
//! current values plus a [`Highlight`] to a [`FrameSink`] and sleeps for the
//! step delay so the swap is visible. The sort checks a shared [`CancelFlag`]
//! at the top of every recursive call and on each iteration of the partition
//! scan; clearing the flag from another thread stops it at the next check.
//!
//! The [`worker`] module runs a sort on a background thread and streams the
//! frames back over a channel.

pub mod worker;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

/// Pause after each swap
pub const DEFAULT_STEP_DELAY: Duration = Duration::from_millis(100);

/// Sort order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    Ascending,
    #[default]
    Descending,
}

impl Direction {
    pub fn flipped(self) -> Self {
        match self {
            Direction::Ascending => Direction::Descending,
            Direction::Descending => Direction::Ascending,
        }
    }

    /// Whether `value` belongs on the left of `pivot` in this order
    pub fn precedes(self, value: u32, pivot: u32) -> bool {
        match self {
            Direction::Ascending => value < pivot,
            Direction::Descending => value > pivot,
        }
    }

    /// Whether `values` is fully ordered in this direction
    pub fn is_sorted(self, values: &[u32]) -> bool {
        values.windows(2).all(|w| match self {
            Direction::Ascending => w[0] <= w[1],
            Direction::Descending => w[0] >= w[1],
        })
    }

    pub fn label(self) -> &'static str {
        match self {
            Direction::Ascending => "ascending",
            Direction::Descending => "descending",
        }
    }
}

/// Shared "sort is active" flag.
///
/// Armed by the foreground thread before a sort starts and cleared either by
/// the foreground thread (cancellation) or by the sort itself on completion.
#[derive(Debug, Clone, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    /// A new flag, already armed
    pub fn armed() -> Self {
        CancelFlag(Arc::new(AtomicBool::new(true)))
    }

    pub fn is_active(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    pub fn cancel(&self) {
        self.0.store(false, Ordering::Release);
    }
}

/// Cells to mark in the frame produced by the latest swap
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Highlight {
    pub swapped: Option<(usize, usize)>,
    pub pivot: Option<usize>,
}

impl Highlight {
    pub const NONE: Highlight = Highlight {
        swapped: None,
        pivot: None,
    };

    pub fn is_swapped(&self, index: usize) -> bool {
        self.swapped.is_some_and(|(a, b)| a == index || b == index)
    }

    pub fn is_pivot(&self, index: usize) -> bool {
        self.pivot == Some(index)
    }
}

/// Receives a snapshot after every swap
pub trait FrameSink {
    fn frame(&mut self, values: &[u32], highlight: Highlight);
}

/// Frames collected in memory
impl FrameSink for Vec<(Vec<u32>, Highlight)> {
    fn frame(&mut self, values: &[u32], highlight: Highlight) {
        self.push((values.to_vec(), highlight));
    }
}

/// How a sort run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOutcome {
    Completed,
    Cancelled,
}

/// One QuickSort run over a borrowed slice
pub struct AnimatedSort<'a, S: FrameSink> {
    values: &'a mut [u32],
    direction: Direction,
    flag: CancelFlag,
    sink: S,
    step_delay: Duration,
    swaps: usize,
}

impl<'a, S: FrameSink> AnimatedSort<'a, S> {
    pub fn new(values: &'a mut [u32], direction: Direction, flag: CancelFlag, sink: S) -> Self {
        AnimatedSort {
            values,
            direction,
            flag,
            sink,
            step_delay: DEFAULT_STEP_DELAY,
            swaps: 0,
        }
    }

    pub fn with_step_delay(mut self, delay: Duration) -> Self {
        self.step_delay = delay;
        self
    }

    /// Swaps so far that changed the values (a position swapped with itself,
    /// or two equal values exchanged, does not count)
    pub fn swaps(&self) -> usize {
        self.swaps
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Sort the whole slice.
    ///
    /// On [`SortOutcome::Completed`] the flag is cleared. A cancelled run
    /// leaves the slice partially sorted, still a permutation of the input.
    pub fn run(&mut self) -> SortOutcome {
        if let Some(high) = self.values.len().checked_sub(1) {
            self.quicksort(0, high);
        }

        if self.flag.is_active() {
            self.flag.cancel();
            SortOutcome::Completed
        } else {
            SortOutcome::Cancelled
        }
    }

    fn quicksort(&mut self, low: usize, high: usize) {
        if !self.flag.is_active() || low >= high {
            return;
        }

        let Some(pivot) = self.partition(low, high) else {
            return;
        };

        if pivot > low {
            self.quicksort(low, pivot - 1);
        }
        self.quicksort(pivot + 1, high);
    }

    /// Lomuto partition of `low..=high` around `values[high]`.
    ///
    /// Every frame, including the pivot placement, marks `high` as the pivot.
    /// Returns the pivot's final index, or `None` if cancelled mid-scan.
    fn partition(&mut self, low: usize, high: usize) -> Option<usize> {
        let pivot = self.values[high];
        // `boundary` is one past the last element placed left of the pivot
        let mut boundary = low;

        for j in low..high {
            if !self.flag.is_active() {
                return None;
            }
            if self.direction.precedes(self.values[j], pivot) {
                self.swap(boundary, j, high);
                boundary += 1;
            }
        }

        if !self.flag.is_active() {
            return None;
        }
        self.swap(boundary, high, high);
        Some(boundary)
    }

    /// Swap two positions, emit a frame and pause.
    ///
    /// Self-swaps are shown and paused on like any other swap.
    fn swap(&mut self, a: usize, b: usize, pivot: usize) {
        if self.values[a] != self.values[b] {
            self.swaps += 1;
        }
        self.values.swap(a, b);

        let highlight = Highlight {
            swapped: Some((a, b)),
            pivot: Some(pivot),
        };
        self.sink.frame(self.values, highlight);

        if !self.step_delay.is_zero() {
            thread::sleep(self.step_delay);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type Frames = Vec<(Vec<u32>, Highlight)>;

    fn sort(values: &mut [u32], direction: Direction) -> (SortOutcome, Frames) {
        let mut run = AnimatedSort::new(values, direction, CancelFlag::armed(), Frames::new())
            .with_step_delay(Duration::ZERO);
        let outcome = run.run();
        (outcome, run.into_sink())
    }

    #[test]
    fn test_descending_scenario() {
        let mut values = [42, 7, 900, 15, 3];
        let (outcome, _) = sort(&mut values, Direction::Descending);
        assert_eq!(outcome, SortOutcome::Completed);
        assert_eq!(values, [900, 42, 15, 7, 3]);
    }

    #[test]
    fn test_ascending() {
        let mut values = [5, 1, 4, 1, 5, 9, 2, 6];
        sort(&mut values, Direction::Ascending);
        assert_eq!(values, [1, 1, 2, 4, 5, 5, 6, 9]);
    }

    #[test]
    fn test_empty_and_single_are_noops() {
        let mut empty: [u32; 0] = [];
        let (outcome, frames) = sort(&mut empty, Direction::Ascending);
        assert_eq!(outcome, SortOutcome::Completed);
        assert!(frames.is_empty());

        let mut single = [17];
        let (_, frames) = sort(&mut single, Direction::Descending);
        assert_eq!(single, [17]);
        assert!(frames.is_empty());
    }

    #[test]
    fn test_frame_per_swap_with_highlight() {
        let mut values = [3, 1, 2];
        let (_, frames) = sort(&mut values, Direction::Ascending);
        assert_eq!(values, [1, 2, 3]);

        // Pivot 2: 1 < 2 moves to slot 0, then the pivot lands at 1
        let (first, highlight) = &frames[0];
        assert_eq!(first, &vec![1, 3, 2]);
        assert_eq!(highlight.swapped, Some((0, 1)));
        assert_eq!(highlight.pivot, Some(2));

        let (second, highlight) = &frames[1];
        assert_eq!(second, &vec![1, 2, 3]);
        assert_eq!(highlight.swapped, Some((1, 2)));
        assert_eq!(highlight.pivot, Some(2));
        assert_eq!(frames.len(), 2);
    }

    #[test]
    fn test_sorted_input_has_no_value_changing_swap() {
        let mut values = [900, 42, 15, 7, 3];
        let mut run = AnimatedSort::new(
            &mut values,
            Direction::Descending,
            CancelFlag::armed(),
            Frames::new(),
        )
        .with_step_delay(Duration::ZERO);
        assert_eq!(run.run(), SortOutcome::Completed);
        assert_eq!(run.swaps(), 0);

        // Every self-swap is still shown, with the pivot at the range end
        let frames = run.into_sink();
        assert!(!frames.is_empty());
        assert!(frames.iter().all(|(v, _)| v == &vec![900, 42, 15, 7, 3]));
        assert!(frames
            .iter()
            .all(|(_, h)| h.swapped.is_some_and(|(a, b)| a == b)));
        assert_eq!(frames[0].1.pivot, Some(4));
        assert_eq!(values, [900, 42, 15, 7, 3]);
    }

    #[test]
    fn test_self_swaps_pause_like_any_swap() {
        let mut values = [1, 2, 3];
        let delay = Duration::from_millis(20);
        let started = std::time::Instant::now();
        let mut run = AnimatedSort::new(&mut values, Direction::Ascending, CancelFlag::armed(), Frames::new())
            .with_step_delay(delay);
        run.run();
        let frames = run.into_sink().len();
        // Pivot 3 self-swaps 0, 1 and 2, then pivot 2 self-swaps 0 and 1
        assert_eq!(frames, 5);
        assert!(started.elapsed() >= delay * frames as u32);
    }

    #[test]
    fn test_sort_twice_reverses() {
        let mut values = [42, 7, 900, 15, 3];
        let mut direction = Direction::Descending;
        sort(&mut values, direction);
        direction = direction.flipped();
        sort(&mut values, direction);
        assert_eq!(values, [3, 7, 15, 42, 900]);
    }

    #[test]
    fn test_cancelled_flag_stops_before_any_swap() {
        let flag = CancelFlag::armed();
        flag.cancel();
        let mut values = [4, 3, 2, 1];
        let mut run = AnimatedSort::new(&mut values, Direction::Ascending, flag, Frames::new())
            .with_step_delay(Duration::ZERO);
        assert_eq!(run.run(), SortOutcome::Cancelled);
        assert_eq!(run.swaps(), 0);
        assert_eq!(values, [4, 3, 2, 1]);
    }

    /// Cancels after a fixed number of frames
    struct CancelAfter {
        flag: CancelFlag,
        remaining: usize,
    }

    impl FrameSink for CancelAfter {
        fn frame(&mut self, _values: &[u32], _highlight: Highlight) {
            self.remaining = self.remaining.saturating_sub(1);
            if self.remaining == 0 {
                self.flag.cancel();
            }
        }
    }

    #[test]
    fn test_cancel_mid_partition() {
        let flag = CancelFlag::armed();
        let sink = CancelAfter {
            flag: flag.clone(),
            remaining: 2,
        };
        let mut values = [0, 6, 5, 4, 3, 2, 1];
        let mut run = AnimatedSort::new(&mut values, Direction::Descending, flag, sink)
            .with_step_delay(Duration::ZERO);

        assert_eq!(run.run(), SortOutcome::Cancelled);
        assert_eq!(run.swaps(), 2);
        assert_eq!(values, [6, 5, 0, 4, 3, 2, 1]);

        let mut sorted = values.to_vec();
        sorted.sort_unstable();
        assert_eq!(sorted, vec![0, 1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_completion_clears_flag() {
        let flag = CancelFlag::armed();
        let mut values = [2, 1];
        let mut run = AnimatedSort::new(&mut values, Direction::Ascending, flag.clone(), Frames::new())
            .with_step_delay(Duration::ZERO);
        assert_eq!(run.run(), SortOutcome::Completed);
        assert!(!flag.is_active());
    }
}
