//! hourcalc
//!
//! Hours-and-minutes calculator for the terminal.
//!
//! Follows a Pure Core / Impure Shell architecture: `model` and `state`
//! hold the calculator with no I/O, `config`, `logging` and `view` talk to
//! the outside world, and `batch` replays key scripts without a terminal.

pub mod batch;
pub mod config;
pub mod logging;
pub mod model;
pub mod state;
pub mod view;

#[cfg(test)]
mod test_harness;

#[cfg(test)]
mod tests;
