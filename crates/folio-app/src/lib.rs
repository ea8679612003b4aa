#![forbid(unsafe_code)]

//! Folio: a personal portfolio rendered in the terminal.
//!
//! The binary wires [`app::AppModel`] into the `folio-runtime` program loop.
//! Everything that decides what the catalogue shows (tag filter, layout mode,
//! strip scroll bookkeeping) lives in `folio-core`; this crate renders it and
//! translates clicks, keys, and wheel notches into core operations.

pub mod app;
pub mod chrome;
pub mod cli;
pub mod hits;
pub mod links;
pub mod logging;
pub mod sections;
pub mod theme;
pub mod widgets;
