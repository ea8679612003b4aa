#![forbid(unsafe_code)]

//! Folio Runtime
//!
//! Ties the pure core to a real terminal.
//!
//! # Key Components
//!
//! - [`Model`] - Trait for application state and behavior
//! - [`Cmd`] - Commands for side effects
//! - [`Program`] - Event loop over crossterm input and ratatui output
//! - [`ProgramSimulator`] - Headless, deterministic driver for tests
//!
//! # How it fits
//! `folio-core` owns state and transitions, `folio-app` implements [`Model`]
//! on top of it, and this crate feeds terminal events in and draws frames
//! out. Nothing above this crate touches the terminal directly.

pub mod program;
pub mod simulator;

pub use program::{Cmd, Model, Program, ProgramConfig};
pub use simulator::{CmdRecord, ProgramSimulator, buffer_to_text};
