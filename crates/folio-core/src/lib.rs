#![forbid(unsafe_code)]

//! Core: portfolio data, project catalogue filtering, view state, and
//! scroll bookkeeping.
//!
//! Everything in this crate is a pure function of explicit inputs. The
//! terminal adapter (`folio-runtime` + `folio-app`) measures the viewport and
//! the strip container and feeds plain numbers in; nothing here touches I/O.

pub mod animation;
pub mod catalogue;
pub mod event;
pub mod geometry;
pub mod nav;
pub mod profile;
pub mod scroll;
pub mod view;

pub use catalogue::{Catalogue, Project, filter, tag_universe};
pub use scroll::{ScrollAffordances, ScrollDirection, StripScroll, scroll_affordances};
pub use view::{LayoutMode, ViewState, compute_layout_mode};
