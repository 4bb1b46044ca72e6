//! Interaction policy for one sort screen
//!
//! A [`Session`] owns the displayed [`NumberSet`], the sort direction, the
//! current swap highlight and at most one background [`SortWorker`]. It has no
//! terminal dependency: the UI forwards clicks and commands to it and renders
//! whatever it exposes.
//!
//! # Ordering with the sort thread
//!
//! While a sort runs, the worker owns the buffer and the session only holds a
//! copy taken from the latest frame. Anything that replaces the set first
//! cancels the worker and joins it, dropping undelivered frames, so a
//! regenerated set can never be overwritten by a stale swap.

pub mod errors;

pub use errors::{InputError, SessionError};

use crate::numbers::{NumberGenerator, NumberSet, SMALL_THRESHOLD};
use crate::sorter::worker::{SortEvent, SortWorker};
use crate::sorter::{Direction, Highlight, SortOutcome, DEFAULT_STEP_DELAY};
use rand::rngs::StdRng;
use rand::Rng;
use std::num::NonZeroUsize;
use std::time::{Duration, Instant};

/// Largest count accepted at the prompt
pub const MAX_COUNT: u64 = 100_000;

/// Parse the count typed at the prompt
pub fn parse_count(input: &str) -> Result<NonZeroUsize, InputError> {
    let trimmed = input.trim();
    let count: i64 = trimmed.parse().map_err(|_| InputError::NotANumber {
        input: trimmed.to_string(),
    })?;
    if count <= 0 {
        return Err(InputError::NotPositive {
            input: trimmed.to_string(),
        });
    }
    let count = count as u64;
    if count > MAX_COUNT {
        return Err(InputError::TooLarge { count });
    }
    // 0 < count <= MAX_COUNT, so both conversions hold
    NonZeroUsize::new(count as usize).ok_or(InputError::NotPositive {
        input: trimmed.to_string(),
    })
}

/// Size of the set produced by clicking a small value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegenPolicy {
    /// The clicked value becomes the new count
    #[default]
    ClickedValue,
    /// The set keeps its current length
    KeepLength,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionOptions {
    pub step_delay: Duration,
    pub regen_policy: RegenPolicy,
}

impl Default for SessionOptions {
    fn default() -> Self {
        SessionOptions {
            step_delay: DEFAULT_STEP_DELAY,
            regen_policy: RegenPolicy::default(),
        }
    }
}

/// Result of a successful cell click
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// The set was replaced; `cancelled_sort` tells whether a sort was running
    Regenerated { len: usize, cancelled_sort: bool },
}

/// What [`Session::pump`] observed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PumpResult {
    pub frames: usize,
    pub finished: Option<SortOutcome>,
}

impl PumpResult {
    pub fn changed(&self) -> bool {
        self.frames > 0 || self.finished.is_some()
    }
}

pub struct Session<R = StdRng> {
    generator: NumberGenerator<R>,
    numbers: NumberSet,
    direction: Direction,
    highlight: Highlight,
    worker: Option<SortWorker>,
    options: SessionOptions,
}

impl<R: Rng> Session<R> {
    /// Generate a first set of `count` values and show it
    pub fn start(
        mut generator: NumberGenerator<R>,
        count: NonZeroUsize,
        options: SessionOptions,
    ) -> Self {
        let numbers = generator.generate(count);
        tracing::info!(count = count.get(), "generated number set");
        Session {
            generator,
            numbers,
            direction: Direction::default(),
            highlight: Highlight::NONE,
            worker: None,
            options,
        }
    }

    /// Session over a given set, for replaying known inputs
    pub fn with_numbers(
        generator: NumberGenerator<R>,
        numbers: NumberSet,
        options: SessionOptions,
    ) -> Self {
        Session {
            generator,
            numbers,
            direction: Direction::default(),
            highlight: Highlight::NONE,
            worker: None,
            options,
        }
    }

    pub fn numbers(&self) -> &NumberSet {
        &self.numbers
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn highlight(&self) -> Highlight {
        self.highlight
    }

    pub fn is_sorting(&self) -> bool {
        self.worker.is_some()
    }

    pub fn options(&self) -> &SessionOptions {
        &self.options
    }

    /// Click the cell showing `index`.
    ///
    /// Values at or below [`SMALL_THRESHOLD`] regenerate the set (cancelling
    /// any running sort); larger values are refused and nothing changes.
    pub fn click(&mut self, index: usize) -> Result<ClickOutcome, SessionError> {
        let value = self
            .numbers
            .get(index)
            .ok_or(SessionError::EmptyCell { index })?;

        if value > SMALL_THRESHOLD {
            tracing::debug!(index, value, "rejected click on large value");
            return Err(SessionError::ValueTooLarge { value });
        }

        let len = match self.options.regen_policy {
            RegenPolicy::ClickedValue => value as usize,
            RegenPolicy::KeepLength => self.numbers.len(),
        };
        // Generated values are never 0, but a replayed set might hold one
        let count = NonZeroUsize::new(len).unwrap_or(NonZeroUsize::MIN);
        let cancelled_sort = self.regenerate(count);
        Ok(ClickOutcome::Regenerated {
            len: count.get(),
            cancelled_sort,
        })
    }

    /// Replace the set with `count` fresh values.
    ///
    /// Returns whether a running sort had to be cancelled first.
    pub fn regenerate(&mut self, count: NonZeroUsize) -> bool {
        let cancelled = self.cancel_sort();
        self.numbers = self.generator.generate(count);
        self.highlight = Highlight::NONE;
        tracing::info!(count = count.get(), cancelled, "regenerated number set");
        cancelled
    }

    /// Start sorting the displayed set in the current direction
    pub fn start_sort(&mut self) -> Result<(), SessionError> {
        if self.is_sorting() {
            return Err(SessionError::AlreadySorting);
        }
        tracing::info!(
            len = self.numbers.len(),
            direction = self.direction.label(),
            "starting sort"
        );
        self.worker = Some(SortWorker::spawn(
            self.numbers.values().to_vec(),
            self.direction,
            self.options.step_delay,
        ));
        Ok(())
    }

    /// Stop a running sort and wait for its thread.
    ///
    /// The display keeps the last frame that was applied and the direction is
    /// left alone. A sort that already finished but was never pumped counts
    /// as completed: its sorted values are shown and the direction flips.
    /// Returns whether a sort was actually interrupted.
    pub fn cancel_sort(&mut self) -> bool {
        let Some(worker) = self.worker.take() else {
            return false;
        };
        self.highlight = Highlight::NONE;
        match worker.cancel() {
            Some((values, SortOutcome::Completed)) => {
                if let Some(numbers) = NumberSet::from_values(values) {
                    self.numbers = numbers;
                }
                self.direction = self.direction.flipped();
                tracing::info!(
                    next_direction = self.direction.label(),
                    "sort had already finished"
                );
                false
            }
            _ => {
                tracing::info!("sort cancelled");
                true
            }
        }
    }

    /// Apply every event the sort thread has sent so far
    pub fn pump(&mut self) -> PumpResult {
        let mut result = PumpResult::default();
        loop {
            let Some(event) = self.worker.as_ref().and_then(SortWorker::try_next) else {
                break;
            };
            self.apply(event, &mut result);
        }
        result
    }

    /// Block until the running sort finishes or `timeout` passes
    pub fn wait_for_sort(&mut self, timeout: Duration) -> Option<SortOutcome> {
        let deadline = Instant::now() + timeout;
        let mut result = PumpResult::default();
        while result.finished.is_none() {
            let remaining = deadline.checked_duration_since(Instant::now())?;
            let event = self.worker.as_ref()?.next_timeout(remaining)?;
            self.apply(event, &mut result);
        }
        result.finished
    }

    /// Cancel any sort and hand the generator back for the next session
    pub fn reset(mut self) -> NumberGenerator<R> {
        self.cancel_sort();
        tracing::info!("session reset");
        self.generator
    }

    fn apply(&mut self, event: SortEvent, result: &mut PumpResult) {
        match event {
            SortEvent::Frame { values, highlight } => {
                if let Some(numbers) = NumberSet::from_values(values) {
                    self.numbers = numbers;
                }
                self.highlight = highlight;
                result.frames += 1;
            }
            SortEvent::Finished { values, outcome } => {
                if let Some(numbers) = NumberSet::from_values(values) {
                    self.numbers = numbers;
                }
                self.highlight = Highlight::NONE;
                self.worker = None;
                if outcome == SortOutcome::Completed {
                    self.direction = self.direction.flipped();
                }
                tracing::info!(
                    ?outcome,
                    next_direction = self.direction.label(),
                    "sort finished"
                );
                result.finished = Some(outcome);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quick() -> SessionOptions {
        SessionOptions {
            step_delay: Duration::ZERO,
            regen_policy: RegenPolicy::ClickedValue,
        }
    }

    fn session_with(values: Vec<u32>, options: SessionOptions) -> Session {
        Session::with_numbers(
            NumberGenerator::from_seed(1),
            NumberSet::from_values(values).unwrap(),
            options,
        )
    }

    #[test]
    fn test_parse_count() {
        assert_eq!(parse_count("5").unwrap().get(), 5);
        assert_eq!(parse_count("  12\n").unwrap().get(), 12);
        assert!(matches!(parse_count("abc"), Err(InputError::NotANumber { .. })));
        assert!(matches!(parse_count(""), Err(InputError::NotANumber { .. })));
        assert!(matches!(parse_count("2.5"), Err(InputError::NotANumber { .. })));
        assert!(matches!(parse_count("0"), Err(InputError::NotPositive { .. })));
        assert!(matches!(parse_count("-3"), Err(InputError::NotPositive { .. })));
        assert!(matches!(parse_count("100001"), Err(InputError::TooLarge { .. })));
        assert_eq!(
            parse_count("x").unwrap_err().to_string(),
            "Please enter a valid positive number!"
        );
    }

    #[test]
    fn test_sort_scenario_flips_direction() {
        let mut session = session_with(vec![42, 7, 900, 15, 3], quick());
        assert_eq!(session.direction(), Direction::Descending);

        session.start_sort().unwrap();
        let outcome = session.wait_for_sort(Duration::from_secs(5));

        assert_eq!(outcome, Some(SortOutcome::Completed));
        assert_eq!(session.numbers().values(), &[900, 42, 15, 7, 3]);
        assert_eq!(session.direction(), Direction::Ascending);
        assert_eq!(session.highlight(), Highlight::NONE);
        assert!(!session.is_sorting());
    }

    #[test]
    fn test_click_large_value_rejected() {
        let mut session = session_with(vec![42, 7, 900, 15, 3], quick());
        let err = session.click(2).unwrap_err();
        assert_eq!(err, SessionError::ValueTooLarge { value: 900 });
        assert_eq!(err.to_string(), "Please select a value smaller or equal to 30.");
        assert_eq!(session.numbers().values(), &[42, 7, 900, 15, 3]);
    }

    #[test]
    fn test_click_small_value_regenerates_with_clicked_count() {
        let mut session = session_with(vec![42, 7, 900, 15, 3], quick());
        let outcome = session.click(3).unwrap();
        assert_eq!(
            outcome,
            ClickOutcome::Regenerated {
                len: 15,
                cancelled_sort: false
            }
        );
        assert_eq!(session.numbers().len(), 15);
        assert!(session.numbers().has_small_value());
    }

    #[test]
    fn test_click_keep_length_policy() {
        let options = SessionOptions {
            regen_policy: RegenPolicy::KeepLength,
            ..quick()
        };
        let mut session = session_with(vec![42, 7, 900, 15, 3], options);
        session.click(1).unwrap();
        assert_eq!(session.numbers().len(), 5);
    }

    #[test]
    fn test_click_placeholder() {
        let mut session = session_with(vec![1, 2], quick());
        assert_eq!(session.click(5), Err(SessionError::EmptyCell { index: 5 }));
    }

    #[test]
    fn test_second_sort_request_refused() {
        let options = SessionOptions {
            step_delay: Duration::from_millis(20),
            ..quick()
        };
        let mut session = session_with((1..=50).collect(), options);
        session.start_sort().unwrap();
        assert_eq!(session.start_sort(), Err(SessionError::AlreadySorting));
        assert!(session.cancel_sort());
    }

    #[test]
    fn test_cancel_keeps_direction() {
        let options = SessionOptions {
            step_delay: Duration::from_millis(20),
            ..quick()
        };
        let mut session = session_with((1..=50).collect(), options);
        session.start_sort().unwrap();
        assert!(session.cancel_sort());
        assert_eq!(session.direction(), Direction::Descending);
        assert_eq!(session.highlight(), Highlight::NONE);
        assert!(!session.cancel_sort());
    }

    #[test]
    fn test_click_after_unpumped_completion_flips_direction() {
        let mut session = session_with(vec![42, 7, 900, 15, 3], quick());
        session.start_sort().unwrap();
        // The sort finishes on its own thread; nothing pumps its events
        std::thread::sleep(Duration::from_millis(200));

        let outcome = session.click(1).unwrap();
        assert_eq!(
            outcome,
            ClickOutcome::Regenerated {
                len: 7,
                cancelled_sort: false
            }
        );
        assert_eq!(session.direction(), Direction::Ascending);
        assert!(!session.is_sorting());
    }

    #[test]
    fn test_cancel_after_unpumped_completion_shows_sorted_values() {
        let mut session = session_with(vec![42, 7, 900, 15, 3], quick());
        session.start_sort().unwrap();
        std::thread::sleep(Duration::from_millis(200));

        assert!(!session.cancel_sort());
        assert_eq!(session.numbers().values(), &[900, 42, 15, 7, 3]);
        assert_eq!(session.direction(), Direction::Ascending);
    }
}
