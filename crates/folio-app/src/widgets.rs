#![forbid(unsafe_code)]

//! Small widgets and text helpers shared by the sections.
//!
//! Everything here is tiny-area safe: a zero-sized area draws nothing.

use std::borrow::Cow;
use std::cell::Cell;

use folio_core::event::{KeyCode, KeyEvent};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Widget;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

use crate::theme;

/// Display width in terminal cells, saturating at `u16::MAX`.
pub fn display_width(text: &str) -> u16 {
    u16::try_from(text.width()).unwrap_or(u16::MAX)
}

/// Cut `text` to at most `max_width` cells, marking the cut with an ellipsis.
pub fn truncate_to_width(text: &str, max_width: u16) -> Cow<'_, str> {
    if display_width(text) <= max_width {
        return Cow::Borrowed(text);
    }
    if max_width == 0 {
        return Cow::Borrowed("");
    }
    let budget = usize::from(max_width) - 1;
    let mut out = String::new();
    let mut used = 0usize;
    for g in text.graphemes(true) {
        let w = g.width();
        if used + w > budget {
            break;
        }
        out.push_str(g);
        used += w;
    }
    out.push_str(theme::ELLIPSIS);
    Cow::Owned(out)
}

/// Split a word that is wider than a line into line-sized pieces.
fn hard_break(word: &str, width: usize) -> Vec<String> {
    let mut pieces = Vec::new();
    let mut current = String::new();
    let mut used = 0usize;
    for g in word.graphemes(true) {
        let w = g.width();
        if used + w > width && !current.is_empty() {
            pieces.push(std::mem::take(&mut current));
            used = 0;
        }
        current.push_str(g);
        used += w;
    }
    if !current.is_empty() {
        pieces.push(current);
    }
    pieces
}

/// Word-wrap `text` to `width` cells.
pub fn wrap(text: &str, width: u16) -> Vec<String> {
    let width = usize::from(width);
    if width == 0 {
        return Vec::new();
    }
    let mut lines = Vec::new();
    let mut line = String::new();
    let mut used = 0usize;
    for word in text.split_whitespace() {
        let w = word.width();
        let needed = if line.is_empty() { w } else { used + 1 + w };
        if needed <= width {
            if !line.is_empty() {
                line.push(' ');
            }
            line.push_str(word);
            used = needed;
            continue;
        }
        if !line.is_empty() {
            lines.push(std::mem::take(&mut line));
            used = 0;
        }
        if w <= width {
            line.push_str(word);
            used = w;
        } else {
            let mut pieces = hard_break(word, width);
            if let Some(last) = pieces.pop() {
                lines.extend(pieces);
                used = last.width();
                line = last;
            }
        }
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

/// Word-wrap and keep at most `max_lines`, ending the last kept line with an
/// ellipsis when text was dropped.
pub fn wrap_clamped(text: &str, width: u16, max_lines: usize) -> Vec<String> {
    let mut lines = wrap(text, width);
    if lines.len() <= max_lines {
        return lines;
    }
    lines.truncate(max_lines);
    if let Some(last) = lines.last_mut() {
        let room = width.saturating_sub(1);
        let mut kept = truncate_to_width(last, room).into_owned();
        if !kept.ends_with(theme::ELLIPSIS) {
            kept.push_str(theme::ELLIPSIS);
        }
        *last = kept;
    }
    lines
}

/// Draw `text` at `(x, y)` clipped to `area`. Returns the column after it.
pub fn draw_text(buf: &mut Buffer, area: Rect, x: u16, y: u16, text: &str, style: Style) -> u16 {
    if y < area.top() || y >= area.bottom() || x >= area.right() || x < area.left() {
        return x;
    }
    let room = usize::from(area.right() - x);
    buf.set_stringn(x, y, text, room, style).0
}

// ---------------------------------------------------------------------------
// Badge
// ---------------------------------------------------------------------------

/// Blank cells on each side of a badge label.
const BADGE_PADDING: u16 = 1;

/// A compact label with padding and style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Badge<'a> {
    label: &'a str,
    style: Style,
}

impl<'a> Badge<'a> {
    /// Create a new badge with 1 cell padding on each side.
    #[must_use]
    pub fn new(label: &'a str) -> Self {
        Self {
            label,
            style: Style::default(),
        }
    }

    #[must_use]
    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Display width in terminal cells (label width + padding).
    #[inline]
    #[must_use]
    pub fn width(&self) -> u16 {
        display_width(self.label).saturating_add(2 * BADGE_PADDING)
    }

    /// Area the badge occupies when drawn at `(x, y)`.
    pub fn rect_at(&self, x: u16, y: u16) -> Rect {
        Rect::new(x, y, self.width(), 1)
    }
}

impl Widget for Badge<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        let y = area.y;
        let pad = " ".repeat(usize::from(BADGE_PADDING));
        let mut x = draw_text(buf, area, area.x, y, &pad, self.style);
        x = draw_text(buf, area, x, y, self.label, self.style);
        draw_text(buf, area, x, y, &pad, self.style);
    }
}

// ---------------------------------------------------------------------------
// Button
// ---------------------------------------------------------------------------

/// Clickable label. Disabled buttons keep their place but render dimmed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Button<'a> {
    label: &'a str,
    enabled: bool,
    outline: bool,
}

impl<'a> Button<'a> {
    #[must_use]
    pub fn new(label: &'a str) -> Self {
        Self {
            label,
            enabled: true,
            outline: false,
        }
    }

    #[must_use]
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Use the secondary look.
    #[must_use]
    pub fn outline(mut self) -> Self {
        self.outline = true;
        self
    }

    fn badge(&self) -> Badge<'a> {
        let style = if self.outline {
            theme::button_outline(self.enabled)
        } else {
            theme::button(self.enabled)
        };
        Badge::new(self.label).with_style(style)
    }

    pub fn width(&self) -> u16 {
        self.badge().width()
    }
}

impl Widget for Button<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.badge().render(area, buf);
    }
}

// ---------------------------------------------------------------------------
// Flow layout
// ---------------------------------------------------------------------------

/// Place items of the given widths left to right, wrapping onto new rows.
///
/// Returns `(x, row)` per item, relative to the start of the area. An item
/// wider than the row starts a row of its own.
pub fn flow_layout(widths: &[u16], max_width: u16, gap: u16) -> Vec<(u16, u16)> {
    let mut out = Vec::with_capacity(widths.len());
    let mut x = 0u16;
    let mut row = 0u16;
    for &w in widths {
        if x > 0 && x.saturating_add(w) > max_width {
            x = 0;
            row = row.saturating_add(1);
        }
        out.push((x, row));
        x = x.saturating_add(w).saturating_add(gap);
    }
    out
}

/// Rows used by [`flow_layout`] for these widths.
pub fn flow_rows(widths: &[u16], max_width: u16, gap: u16) -> u16 {
    flow_layout(widths, max_width, gap)
        .last()
        .map_or(0, |&(_, row)| row + 1)
}

// ---------------------------------------------------------------------------
// Vertical scrolling
// ---------------------------------------------------------------------------

/// Vertical scroll position of a content pane.
///
/// The pane measures its content during rendering, so the limits live in
/// cells that the view can update through `&self`.
#[derive(Debug, Default)]
pub struct VScroll {
    offset: u16,
    max: Cell<u16>,
    page: Cell<u16>,
}

impl VScroll {
    /// Record the content and viewport heights seen by the last render.
    pub fn measure(&self, content_height: u16, viewport_height: u16) {
        self.max.set(content_height.saturating_sub(viewport_height));
        self.page.set(viewport_height);
    }

    /// Offset to render with, clamped to the last measurement.
    pub fn offset(&self) -> u16 {
        self.offset.min(self.max.get())
    }

    pub fn max_offset(&self) -> u16 {
        self.max.get()
    }

    pub fn reset(&mut self) {
        self.offset = 0;
    }

    /// Move by `delta` rows. Returns whether the offset changed.
    pub fn scroll_by(&mut self, delta: i32) -> bool {
        let before = self.offset();
        let target = i32::from(before) + delta;
        self.offset = u16::try_from(target.clamp(0, i32::from(self.max.get()))).unwrap_or(0);
        self.offset != before
    }

    /// Scroll the least distance that shows rows `top..top + height`.
    pub fn reveal(&mut self, top: u16, height: u16) {
        let page = self.page.get();
        let offset = self.offset();
        if top < offset {
            self.offset = top;
        } else if top.saturating_add(height) > offset.saturating_add(page) {
            self.offset = top.saturating_add(height).saturating_sub(page);
        }
        self.offset = self.offset.min(self.max.get());
    }

    /// Handle navigation keys. Returns whether the key was consumed.
    pub fn handle_key(&mut self, key: &KeyEvent) -> bool {
        let page = i32::from(self.page.get().saturating_sub(1).max(1));
        match key.code {
            KeyCode::Up => {
                self.scroll_by(-1);
            }
            KeyCode::Down => {
                self.scroll_by(1);
            }
            KeyCode::PageUp => {
                self.scroll_by(-page);
            }
            KeyCode::PageDown => {
                self.scroll_by(page);
            }
            KeyCode::Home => self.offset = 0,
            KeyCode::End => self.offset = self.max.get(),
            _ => return false,
        }
        true
    }
}

/// Copy the window of `src` starting at `(src_x, src_y)` into `dst_area`.
///
/// A wide character cut in half at the left edge becomes a blank.
pub fn blit(src: &Buffer, src_x: u16, src_y: u16, dst: &mut Buffer, dst_area: Rect) {
    for dy in 0..dst_area.height {
        for dx in 0..dst_area.width {
            let from = (
                src.area.x.saturating_add(src_x).saturating_add(dx),
                src.area.y.saturating_add(src_y).saturating_add(dy),
            );
            let Some(cell) = src.cell(from) else {
                continue;
            };
            let Some(target) = dst.cell_mut((dst_area.x + dx, dst_area.y + dy)) else {
                continue;
            };
            *target = cell.clone();
            if dx == 0 && target.symbol().is_empty() {
                target.set_symbol(" ");
            }
        }
    }
}
