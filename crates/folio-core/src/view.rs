#![forbid(unsafe_code)]

//! Project catalogue view state.
//!
//! [`ViewState`] is the single owner of everything the catalogue view
//! mutates: the selected tag, the layout mode, and the strip scroll
//! container. Every transition is a plain method call that runs to
//! completion; derived values (filtered list, tag universe) are recomputed
//! on read.
//!
//! # Layout mode
//!
//! [`compute_layout_mode`] maps a viewport width to [`LayoutMode`]. The
//! result is applied on construction and on *every* resize, which overwrites
//! a manual toggle made in between. A manual Grid/Strip choice therefore
//! lasts only until the next resize event.
//!
//! # Strip lifetime
//!
//! The strip is re-mounted (offset 0, affordances re-measured) whenever its
//! content changes: a different tag, a cleared filter, or a switch back to
//! Strip mode.

use std::collections::BTreeSet;
use std::time::Duration;

use crate::catalogue::{Catalogue, Project};
use crate::scroll::{ScrollAffordances, ScrollDirection, StripScroll};

/// Viewports narrower than this use the grid.
pub const LAYOUT_BREAKPOINT_PX: u32 = 768;

/// How the filtered projects are arranged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LayoutMode {
    /// Single horizontally scrolling row.
    #[default]
    Strip,
    /// Multi-column wrapping grid.
    Grid,
}

impl LayoutMode {
    pub const fn label(self) -> &'static str {
        match self {
            LayoutMode::Strip => "Strip",
            LayoutMode::Grid => "Grid",
        }
    }

    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            LayoutMode::Strip => LayoutMode::Grid,
            LayoutMode::Grid => LayoutMode::Strip,
        }
    }
}

/// Grid iff the viewport is narrower than 768 px.
#[must_use]
pub const fn compute_layout_mode(viewport_width_px: u32) -> LayoutMode {
    if viewport_width_px < LAYOUT_BREAKPOINT_PX {
        LayoutMode::Grid
    } else {
        LayoutMode::Strip
    }
}

// ---------------------------------------------------------------------------
// ViewState
// ---------------------------------------------------------------------------

/// Mutable state of the catalogue view.
#[derive(Debug, Clone)]
pub struct ViewState<'c> {
    catalogue: &'c Catalogue,
    selected_tag: Option<String>,
    layout_mode: LayoutMode,
    strip: StripScroll,
}

impl<'c> ViewState<'c> {
    /// Initial state: no filter, layout from the viewport, strip mounted
    /// with an unmeasured (zero) client width.
    pub fn new(catalogue: &'c Catalogue, viewport_width_px: u32) -> Self {
        let mut strip = StripScroll::default();
        strip.mount(catalogue.len(), 0);
        Self {
            catalogue,
            selected_tag: None,
            layout_mode: compute_layout_mode(viewport_width_px),
            strip,
        }
    }

    pub fn catalogue(&self) -> &'c Catalogue {
        self.catalogue
    }

    pub fn selected_tag(&self) -> Option<&str> {
        self.selected_tag.as_deref()
    }

    pub fn layout_mode(&self) -> LayoutMode {
        self.layout_mode
    }

    pub fn strip(&self) -> &StripScroll {
        &self.strip
    }

    /// Projects passing the current filter, in catalogue order.
    pub fn filtered(&self) -> Vec<&'c Project> {
        self.catalogue.filter(self.selected_tag.as_deref())
    }

    /// Whether the empty state should be shown.
    pub fn is_empty_result(&self) -> bool {
        match self.selected_tag.as_deref() {
            None => self.catalogue.is_empty(),
            Some(tag) => self.catalogue.count_tagged(tag) == 0,
        }
    }

    pub fn tag_universe(&self) -> BTreeSet<&'c str> {
        self.catalogue.tag_universe()
    }

    /// Select `tag`. Re-selecting the current tag keeps it selected.
    ///
    /// Returns `true` if the selection changed.
    pub fn select_tag(&mut self, tag: &str) -> bool {
        if self.selected_tag.as_deref() == Some(tag) {
            return false;
        }
        self.selected_tag = Some(tag.to_owned());
        #[cfg(feature = "tracing")]
        tracing::info!(
            tag,
            matches = self.catalogue.count_tagged(tag),
            "project filter selected"
        );
        self.remount_strip();
        true
    }

    /// Drop the filter. Returns `true` if a tag was selected.
    pub fn clear_tag(&mut self) -> bool {
        if self.selected_tag.take().is_none() {
            return false;
        }
        #[cfg(feature = "tracing")]
        tracing::info!("project filter cleared");
        self.remount_strip();
        true
    }

    pub fn toggle_layout_mode(&mut self) -> LayoutMode {
        self.apply_layout(self.layout_mode.toggled());
        self.layout_mode
    }

    /// Viewport resize: recompute the layout mode, overwriting any manual
    /// choice.
    pub fn on_viewport_resize(&mut self, viewport_width_px: u32) -> LayoutMode {
        let mode = compute_layout_mode(viewport_width_px);
        #[cfg(feature = "tracing")]
        tracing::debug!(
            width_px = viewport_width_px,
            mode = mode.label(),
            "viewport resized"
        );
        self.apply_layout(mode);
        self.layout_mode
    }

    /// The strip container was measured (mount or resize).
    pub fn set_strip_client_width(&mut self, client_width_px: u32) {
        self.strip.set_client_width(client_width_px);
    }

    /// Control states, or `None` outside Strip mode.
    pub fn scroll_affordances(&self) -> Option<ScrollAffordances> {
        match self.layout_mode {
            LayoutMode::Strip => Some(self.strip.affordances()),
            LayoutMode::Grid => None,
        }
    }

    /// Activate a scroll control. Disabled controls and Grid mode are
    /// silent no-ops.
    pub fn scroll_by(&mut self, direction: ScrollDirection) -> bool {
        let allowed = self
            .scroll_affordances()
            .is_some_and(|a| a.allows(direction));
        if !allowed {
            return false;
        }
        let started = self.strip.scroll_by(direction);
        #[cfg(feature = "tracing")]
        tracing::debug!(
            ?direction,
            from = self.strip.offset(),
            to = self.strip.destination(),
            started,
            "strip scroll"
        );
        started
    }

    /// Wheel notch over the strip.
    pub fn wheel(&mut self, direction: ScrollDirection) -> bool {
        self.layout_mode == LayoutMode::Strip && self.strip.wheel(direction)
    }

    /// Smoothly bring card `index` to the left edge.
    pub fn scroll_to_item(&mut self, index: usize) -> bool {
        if self.layout_mode != LayoutMode::Strip {
            return false;
        }
        let left = self.strip.geometry().item_left(index);
        self.strip.scroll_to(i64::from(left), true)
    }

    /// Advance the smooth scroll.
    pub fn tick(&mut self, dt: Duration) -> bool {
        self.strip.tick(dt)
    }

    pub fn is_animating(&self) -> bool {
        self.strip.is_animating()
    }

    fn apply_layout(&mut self, mode: LayoutMode) -> bool {
        if mode == self.layout_mode {
            return false;
        }
        #[cfg(feature = "tracing")]
        tracing::info!(
            from = self.layout_mode.label(),
            to = mode.label(),
            "layout mode changed"
        );
        self.layout_mode = mode;
        if mode == LayoutMode::Strip {
            self.remount_strip();
        }
        true
    }

    fn remount_strip(&mut self) {
        let count = self.filtered().len();
        let client = self.strip.client_width();
        self.strip.mount(count, client);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn state(width: u32) -> ViewState<'static> {
        ViewState::new(Catalogue::builtin(), width)
    }

    #[test]
    fn breakpoint() {
        assert_eq!(compute_layout_mode(767), LayoutMode::Grid);
        assert_eq!(compute_layout_mode(768), LayoutMode::Strip);
        assert_eq!(compute_layout_mode(0), LayoutMode::Grid);
    }

    #[test]
    fn initial_state() {
        let view = state(1024);
        assert_eq!(view.selected_tag(), None);
        assert_eq!(view.layout_mode(), LayoutMode::Strip);
        assert_eq!(view.filtered().len(), 9);
    }

    #[test]
    fn select_is_idempotent() {
        let mut view = state(1024);
        assert!(view.select_tag("Rust"));
        let first: Vec<_> = view.filtered().iter().map(|p| p.title()).collect();
        assert!(!view.select_tag("Rust"));
        let second: Vec<_> = view.filtered().iter().map(|p| p.title()).collect();
        assert_eq!(view.selected_tag(), Some("Rust"));
        assert_eq!(first, second);
    }

    #[test]
    fn clear_restores_everything() {
        let mut view = state(1024);
        view.select_tag("C++");
        assert_eq!(view.filtered().len(), 2);
        assert!(view.clear_tag());
        assert_eq!(view.filtered().len(), 9);
        assert!(!view.clear_tag());
    }

    #[test]
    fn unknown_tag_is_empty_result() {
        let mut view = state(1024);
        view.select_tag("Haskell");
        assert!(view.filtered().is_empty());
        assert!(view.is_empty_result());
    }

    #[test]
    fn resize_overwrites_manual_toggle() {
        let mut view = state(1024);
        assert_eq!(view.toggle_layout_mode(), LayoutMode::Grid);
        assert_eq!(view.on_viewport_resize(1100), LayoutMode::Strip);
    }

    #[test]
    fn grid_has_no_affordances() {
        let mut view = state(1024);
        view.set_strip_client_width(300);
        assert!(view.scroll_affordances().is_some());
        view.on_viewport_resize(600);
        assert_eq!(view.scroll_affordances(), None);
        assert!(!view.scroll_by(ScrollDirection::Right));
    }

    #[test]
    fn disabled_control_is_noop() {
        let mut view = state(1024);
        view.set_strip_client_width(300);
        assert!(!view.scroll_by(ScrollDirection::Left));
        assert_eq!(view.strip().offset(), 0);
    }

    #[test]
    fn filter_change_remounts_strip() {
        let mut view = state(1024);
        view.set_strip_client_width(300);
        view.scroll_by(ScrollDirection::Right);
        while view.is_animating() {
            view.tick(Duration::from_millis(50));
        }
        assert!(view.strip().offset() > 0);
        view.select_tag("Rust");
        assert_eq!(view.strip().offset(), 0);
        assert_eq!(view.strip().item_count(), 5);
        assert_eq!(view.strip().client_width(), 300);
    }
}
