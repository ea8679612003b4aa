#![forbid(unsafe_code)]

//! Mouse hit regions.
//!
//! The view registers a region for every clickable thing it draws; the next
//! mouse event is resolved against the regions of the last frame.
//!
//! # Invariants
//!
//! 1. A hit test returns the region registered last among those containing
//!    the point, so overlays registered after the content win.
//! 2. Regions are clipped to the area they were drawn into; nothing outside a
//!    scrolled viewport is clickable.

use std::cell::RefCell;

use folio_core::nav::SectionId;
use ratatui::layout::{Position, Rect};

use crate::sections::projects::ProjectAction;

/// What a click on a region does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Hit {
    Nav(SectionId),
    /// Mobile menu button.
    Menu,
    /// Backdrop or close control of the mobile sidebar.
    CloseSidebar,
    /// Résumé download.
    Download,
    /// Outbound link with an unresolved target.
    Link(String),
    Project(ProjectAction),
    /// The horizontal project strip, for wheel routing.
    Strip,
}

/// Regions registered during one render.
#[derive(Debug, Default)]
pub struct HitMap {
    regions: RefCell<Vec<(Rect, Hit)>>,
}

impl HitMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&self) {
        self.regions.borrow_mut().clear();
    }

    /// Register `rect`. Empty rects are ignored.
    pub fn register(&self, rect: Rect, hit: Hit) {
        if !rect.is_empty() {
            self.regions.borrow_mut().push((rect, hit));
        }
    }

    /// Topmost region containing `(x, y)`.
    pub fn hit_test(&self, x: u16, y: u16) -> Option<Hit> {
        self.regions
            .borrow()
            .iter()
            .rev()
            .find(|(rect, _)| rect.contains(Position::new(x, y)))
            .map(|(_, hit)| hit.clone())
    }

    /// Whether any region containing `(x, y)` carries `hit`, covered or not.
    pub fn contains_hit(&self, x: u16, y: u16, hit: &Hit) -> bool {
        self.regions
            .borrow()
            .iter()
            .any(|(rect, h)| h == hit && rect.contains(Position::new(x, y)))
    }

    pub fn len(&self) -> usize {
        self.regions.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.borrow().is_empty()
    }

    /// Move the regions of an off-screen render into this map.
    ///
    /// `other` was drawn into a scratch buffer whose `(scroll_x, scroll_y)`
    /// point is shown at the top-left of `viewport`.
    pub fn absorb_scrolled(&self, other: HitMap, scroll_x: u16, scroll_y: u16, viewport: Rect) {
        for (rect, hit) in other.regions.into_inner() {
            let left = i32::from(rect.x) - i32::from(scroll_x) + i32::from(viewport.x);
            let top = i32::from(rect.y) - i32::from(scroll_y) + i32::from(viewport.y);
            let right = left + i32::from(rect.width);
            let bottom = top + i32::from(rect.height);

            let x0 = left.max(i32::from(viewport.left()));
            let y0 = top.max(i32::from(viewport.top()));
            let x1 = right.min(i32::from(viewport.right()));
            let y1 = bottom.min(i32::from(viewport.bottom()));
            if x1 <= x0 || y1 <= y0 {
                continue;
            }
            // All four bounds lie inside `viewport`, so they fit in u16.
            let clipped = Rect::new(
                u16::try_from(x0).unwrap_or(0),
                u16::try_from(y0).unwrap_or(0),
                u16::try_from(x1 - x0).unwrap_or(0),
                u16::try_from(y1 - y0).unwrap_or(0),
            );
            self.register(clipped, hit);
        }
    }
}
