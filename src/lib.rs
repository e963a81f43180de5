//! Debounced gesture recognition for a mechanical push-button.
//!
//! Feed the machine one raw reading at a time, together with a monotonic
//! millisecond timestamp, and it answers with at most one recognized
//! [`Input`] per call. It is meant for poll- or interrupt-driven control
//! loops that sample a single button themselves:
//!
//! ```text
//!   raw reading + timestamp
//!            |
//!     [ debounce filter ] -- reading stable for 20 ms --> debounced edge
//!            |                                                  |
//!            +------------- dwell timing ------------+          |
//!                                                    V          V
//!                                           [ gesture state machine ]
//!                                                        |
//!                                                        V
//!             Input: click, double click, long press, ..., release
//! ```
//!
//! The machine never allocates, never blocks and has no failure path. All
//! timing windows are fixed constants exported from this crate.

#![cfg_attr(not(test), no_std)]

mod button;
mod input;
mod log;

pub use button::{Button, Polarity, CLICK_CUTOFF_MS, DEBOUNCE_MS, DOUBLE_CLICK_TIMEOUT_MS};
pub use input::Input;
