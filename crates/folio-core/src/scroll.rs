#![forbid(unsafe_code)]

//! Horizontal strip scrolling.
//!
//! Two layers:
//!
//! - [`scroll_affordances`] is the pure rule deciding whether the left/right
//!   controls are enabled, given the three numbers any scroll container
//!   exposes (offset, scrollable width, visible width).
//! - [`StripScroll`] stands in for the browser's scroll container: it owns
//!   the offset, clamps it, snaps programmatic targets to card starts, runs
//!   the smooth-scroll tween, and refreshes the affordances whenever the
//!   offset or the geometry changes.
//!
//! All values are pixels.

use std::ops::Range;
use std::time::Duration;

use crate::animation::{Animation, Tween};

/// Rounding slack subtracted from the right limit.
pub const SCROLL_SLACK_PX: u32 = 10;
/// Fraction of the visible width moved by one control activation, in percent.
pub const SCROLL_STEP_PERCENT: u32 = 80;
/// Duration of a programmatic smooth scroll.
pub const SMOOTH_SCROLL_DURATION: Duration = Duration::from_millis(300);
/// Distance moved by one wheel notch.
pub const WHEEL_STEP_PX: u32 = 40;
/// Width of a project card.
pub const CARD_WIDTH_PX: u32 = 240;
/// Gap between adjacent cards.
pub const CARD_GAP_PX: u32 = 12;

// ---------------------------------------------------------------------------
// Affordances
// ---------------------------------------------------------------------------

/// Enabled state of the left/right scroll controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct ScrollAffordances {
    pub can_scroll_left: bool,
    pub can_scroll_right: bool,
}

impl ScrollAffordances {
    /// Both controls disabled.
    pub const NONE: Self = Self {
        can_scroll_left: false,
        can_scroll_right: false,
    };

    /// Whether the control for `direction` is enabled.
    #[must_use]
    pub const fn allows(self, direction: ScrollDirection) -> bool {
        match direction {
            ScrollDirection::Left => self.can_scroll_left,
            ScrollDirection::Right => self.can_scroll_right,
        }
    }
}

/// Compute the control states for a container.
///
/// `can_scroll_right` uses a 10 px slack so a container that stopped a
/// fraction of a pixel short of its end does not keep the control lit.
#[must_use]
pub fn scroll_affordances(offset: u32, scroll_width: u32, client_width: u32) -> ScrollAffordances {
    let right_limit =
        i64::from(scroll_width) - i64::from(client_width) - i64::from(SCROLL_SLACK_PX);
    ScrollAffordances {
        can_scroll_left: offset > 0,
        can_scroll_right: i64::from(offset) < right_limit,
    }
}

/// Direction of a scroll request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScrollDirection {
    Left,
    Right,
}

impl ScrollDirection {
    const fn sign(self) -> i64 {
        match self {
            ScrollDirection::Left => -1,
            ScrollDirection::Right => 1,
        }
    }
}

/// Distance of one control activation: 80% of the visible width.
#[must_use]
pub fn scroll_step(client_width: u32) -> u32 {
    (u64::from(client_width) * u64::from(SCROLL_STEP_PERCENT) / 100) as u32
}

/// The unclamped offset a control activation asks for.
///
/// May be negative or beyond the end; the container clamps it.
#[must_use]
pub fn requested_offset(offset: u32, client_width: u32, direction: ScrollDirection) -> i64 {
    i64::from(offset) + direction.sign() * i64::from(scroll_step(client_width))
}

// ---------------------------------------------------------------------------
// Strip geometry
// ---------------------------------------------------------------------------

/// Fixed-width cards laid out left to right with a constant gap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StripGeometry {
    pub card_width: u32,
    pub gap: u32,
}

impl Default for StripGeometry {
    fn default() -> Self {
        Self {
            card_width: CARD_WIDTH_PX,
            gap: CARD_GAP_PX,
        }
    }
}

impl StripGeometry {
    /// Distance between the left edges of adjacent cards.
    #[inline]
    pub const fn pitch(&self) -> u32 {
        self.card_width + self.gap
    }

    /// Total scrollable width for `count` cards.
    #[must_use]
    pub fn content_width(&self, count: usize) -> u32 {
        if count == 0 {
            return 0;
        }
        let n = count as u64;
        let width = n * u64::from(self.card_width) + (n - 1) * u64::from(self.gap);
        width.min(u64::from(u32::MAX)) as u32
    }

    /// Left edge of card `index`.
    #[must_use]
    pub fn item_left(&self, index: usize) -> u32 {
        (index as u64 * u64::from(self.pitch())).min(u64::from(u32::MAX)) as u32
    }
}

// ---------------------------------------------------------------------------
// StripScroll
// ---------------------------------------------------------------------------

/// Scroll container for the project strip.
#[derive(Debug, Clone)]
pub struct StripScroll {
    geometry: StripGeometry,
    item_count: usize,
    client_width: u32,
    offset: u32,
    snap: bool,
    animation: Option<Tween>,
    affordances: ScrollAffordances,
}

impl Default for StripScroll {
    fn default() -> Self {
        Self::new(StripGeometry::default())
    }
}

impl StripScroll {
    /// Create an empty strip with mandatory snapping to card starts.
    pub fn new(geometry: StripGeometry) -> Self {
        Self {
            geometry,
            item_count: 0,
            client_width: 0,
            offset: 0,
            snap: true,
            animation: None,
            affordances: ScrollAffordances::NONE,
        }
    }

    #[cfg(test)]
    #[must_use]
    pub(crate) fn without_snap(mut self) -> Self {
        self.snap = false;
        self
    }

    /// (Re)mount the strip with new content: offset back to 0, animation
    /// cancelled, affordances measured.
    pub fn mount(&mut self, item_count: usize, client_width: u32) {
        self.item_count = item_count;
        self.client_width = client_width;
        self.offset = 0;
        self.animation = None;
        self.refresh();
    }

    /// The visible width changed. Keeps the offset where possible.
    pub fn set_client_width(&mut self, client_width: u32) {
        self.client_width = client_width;
        if let Some(tween) = self.animation {
            let target = tween.target().min(self.max_offset());
            if target != tween.target() {
                self.animation = Some(Tween::new(self.offset, target, SMOOTH_SCROLL_DURATION));
            }
        }
        self.offset = self.offset.min(self.max_offset());
        self.refresh();
    }

    pub fn geometry(&self) -> StripGeometry {
        self.geometry
    }

    pub fn item_count(&self) -> usize {
        self.item_count
    }

    pub fn offset(&self) -> u32 {
        self.offset
    }

    pub fn client_width(&self) -> u32 {
        self.client_width
    }

    pub fn scroll_width(&self) -> u32 {
        self.geometry.content_width(self.item_count)
    }

    /// Largest reachable offset.
    pub fn max_offset(&self) -> u32 {
        self.scroll_width().saturating_sub(self.client_width)
    }

    /// Control states as of the last scroll/resize/mount.
    pub fn affordances(&self) -> ScrollAffordances {
        self.affordances
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Where an in-flight animation will stop, or the current offset.
    pub fn destination(&self) -> u32 {
        self.animation.map_or(self.offset, |t| t.target())
    }

    /// Smoothly scroll by one step. Returns `false` when the clamped,
    /// snapped destination equals the current offset.
    pub fn scroll_by(&mut self, direction: ScrollDirection) -> bool {
        let requested = requested_offset(self.offset, self.client_width, direction);
        let target = self.resolve_target(requested, Some(direction));
        self.start_animation(target)
    }

    /// Programmatic scroll to an absolute offset.
    pub fn scroll_to(&mut self, requested: i64, animated: bool) -> bool {
        let target = self.resolve_target(requested, None);
        if animated {
            self.start_animation(target)
        } else {
            self.animation = None;
            let moved = target != self.offset;
            self.offset = target;
            self.refresh();
            moved
        }
    }

    /// One wheel notch: immediate, unsnapped, clamped.
    pub fn wheel(&mut self, direction: ScrollDirection) -> bool {
        let requested = i64::from(self.offset) + direction.sign() * i64::from(WHEEL_STEP_PX);
        self.animation = None;
        let target = self.clamp(requested);
        let moved = target != self.offset;
        self.offset = target;
        self.refresh();
        moved
    }

    /// Advance the smooth scroll. Returns `true` when the offset moved.
    pub fn tick(&mut self, dt: Duration) -> bool {
        let Some(mut tween) = self.animation else {
            return false;
        };
        tween.tick(dt);
        let before = self.offset;
        self.offset = tween.position().min(self.max_offset());
        self.animation = if tween.is_complete() {
            None
        } else {
            Some(tween)
        };
        self.refresh();
        self.offset != before
    }

    /// Indices of cards at least partly inside the viewport.
    pub fn visible_range(&self) -> Range<usize> {
        if self.item_count == 0 || self.client_width == 0 {
            return 0..0;
        }
        let pitch = u64::from(self.geometry.pitch().max(1));
        let left = u64::from(self.offset);
        let right = left + u64::from(self.client_width);
        let first = (left / pitch) as usize;
        let last = right.div_ceil(pitch) as usize;
        first.min(self.item_count)..last.min(self.item_count)
    }

    fn clamp(&self, requested: i64) -> u32 {
        requested.clamp(0, i64::from(self.max_offset())) as u32
    }

    fn resolve_target(&self, requested: i64, direction: Option<ScrollDirection>) -> u32 {
        let clamped = self.clamp(requested);
        if !self.snap || self.item_count == 0 {
            return clamped;
        }
        let snapped = self.nearest_snap(clamped);
        let Some(direction) = direction else {
            return snapped;
        };
        // A directional step never lands behind the current offset.
        let ahead = match direction {
            ScrollDirection::Right => snapped > self.offset,
            ScrollDirection::Left => snapped < self.offset,
        };
        if ahead {
            snapped
        } else if clamped == self.offset {
            self.offset
        } else {
            self.next_snap(direction).unwrap_or(clamped)
        }
    }

    /// Snap positions: each card start, capped at the end of the strip.
    fn snap_points(&self) -> impl Iterator<Item = u32> + '_ {
        let max = self.max_offset();
        (0..self.item_count)
            .map(move |i| self.geometry.item_left(i).min(max))
            .chain(std::iter::once(max))
    }

    fn nearest_snap(&self, offset: u32) -> u32 {
        self.snap_points()
            .min_by_key(|p| p.abs_diff(offset))
            .unwrap_or(offset)
    }

    fn next_snap(&self, direction: ScrollDirection) -> Option<u32> {
        let current = self.offset;
        match direction {
            ScrollDirection::Right => self.snap_points().filter(|&p| p > current).min(),
            ScrollDirection::Left => self.snap_points().filter(|&p| p < current).max(),
        }
    }

    fn start_animation(&mut self, target: u32) -> bool {
        if target == self.offset {
            self.animation = None;
            return false;
        }
        self.animation = Some(Tween::new(self.offset, target, SMOOTH_SCROLL_DURATION));
        true
    }

    fn refresh(&mut self) {
        self.affordances = scroll_affordances(self.offset, self.scroll_width(), self.client_width);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
