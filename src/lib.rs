//! # Introduction
//!
//! sortgrid shows a grid of random integers in the terminal. Each number is a
//! clickable cell: values at or below 30 regenerate the set, larger ones are
//! refused. The Sort command runs an animated Lomuto QuickSort on a background
//! thread, highlighting each swap, and the sort direction flips after every
//! completed run.
//!
//! ## Pipeline
//!
//! ```text
//! Prompt → Generator → Session ⇄ Sort worker → Frames → TUI
//! ```
//!
//! 1. [`numbers`]: [`numbers::NumberSet`] and the seedable generator.
//! 2. [`sorter`]: the animated quicksort, its cancel flag, and the
//!    [`sorter::worker`] thread that streams frames.
//! 3. [`grid`]: pure index ↔ `(row, col)` mapping.
//! 4. [`session`]: click policy, sort lifecycle and direction toggle.
//! 5. [`config`]: command-line options.
//! 6. [`ui`]: ratatui-based TUI; not part of the stable library API.

pub mod config;
pub mod grid;
pub mod numbers;
pub mod session;
pub mod sorter;
pub mod ui;
