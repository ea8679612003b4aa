#![forbid(unsafe_code)]

//! Shared UI chrome: sidebar, mobile menu bar, footer, status bar, and help
//! overlay.

use folio_core::geometry::CellMetrics;
use folio_core::nav::{SIDEBAR_WIDTH_PX, SectionId, Sidebar};
use folio_core::profile::{FOOTER_LINKS, IDENTITY, Icon};
use folio_core::view::LayoutMode;
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Clear, Paragraph, Widget};

use crate::hits::{Hit, HitMap};
use crate::sections::nav_icon;
use crate::theme;
use crate::widgets::{self, Button};

// ---------------------------------------------------------------------------
// Layout
// ---------------------------------------------------------------------------

/// Where each piece of chrome goes for a terminal area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChromeLayout {
    /// Fixed column on desktop; overlay on mobile while open.
    pub sidebar: Option<Rect>,
    /// Mobile only: the row holding the menu button.
    pub menu_bar: Option<Rect>,
    /// Section content, padded.
    pub content: Rect,
    pub footer: Rect,
    pub status: Rect,
    /// Everything except the status bar.
    pub body: Rect,
}

/// Horizontal padding around section content.
const CONTENT_PAD_X: u16 = theme::spacing::SM;

/// Split `area` for the current sidebar state.
pub fn layout(area: Rect, metrics: CellMetrics, sidebar: &Sidebar) -> ChromeLayout {
    let status = Rect::new(area.x, area.bottom().saturating_sub(1), area.width, area.height.min(1));
    let body = Rect::new(area.x, area.y, area.width, area.height.saturating_sub(1));

    let column = u16::try_from(metrics.to_cols(SIDEBAR_WIDTH_PX))
        .unwrap_or(u16::MAX)
        .min(body.width / 2);

    let (sidebar_rect, menu_bar, main) = if sidebar.is_mobile() {
        let menu = Rect::new(body.x, body.y, body.width, body.height.min(1));
        let main = Rect::new(body.x, body.y + menu.height, body.width, body.height - menu.height);
        let overlay_width = metrics
            .to_cols(SIDEBAR_WIDTH_PX)
            .min(u32::from(body.width)) as u16;
        let overlay = sidebar
            .is_open()
            .then(|| Rect::new(body.x, body.y, overlay_width, body.height));
        (overlay, Some(menu), main)
    } else {
        let side = Rect::new(body.x, body.y, column, body.height);
        let main = Rect::new(body.x + column, body.y, body.width - column, body.height);
        (Some(side), None, main)
    };

    let footer = Rect::new(
        main.x,
        main.bottom().saturating_sub(1),
        main.width,
        main.height.min(1),
    );
    let content = Rect::new(
        main.x + CONTENT_PAD_X.min(main.width / 2),
        main.y + main.height.min(1),
        main.width.saturating_sub(2 * CONTENT_PAD_X),
        main.height.saturating_sub(3),
    );

    ChromeLayout {
        sidebar: sidebar_rect,
        menu_bar,
        content,
        footer,
        status,
        body,
    }
}

// ---------------------------------------------------------------------------
// Sidebar
// ---------------------------------------------------------------------------

/// Name, role, nav list, and the résumé download.
pub fn render_sidebar(current: SectionId, mobile: bool, area: Rect, buf: &mut Buffer, hits: &HitMap) {
    if area.width < 6 || area.height < 4 {
        return;
    }
    Clear.render(area, buf);
    buf.set_style(area, theme::sidebar());

    let inner = Rect::new(area.x + 1, area.y, area.width - 2, area.height);
    let name = widgets::truncate_to_width(IDENTITY.name, inner.width.saturating_sub(2));
    widgets::draw_text(buf, inner, inner.x + 1, inner.y + 1, &name, theme::heading());
    hits.register(Rect::new(inner.x, inner.y + 1, inner.width, 1), Hit::Nav(SectionId::Home));
    widgets::draw_text(buf, inner, inner.x + 1, inner.y + 2, IDENTITY.role, theme::muted());
    if mobile {
        let close = Rect::new(inner.right().saturating_sub(2), inner.y + 1, 2, 1);
        widgets::draw_text(buf, inner, close.x, close.y, theme::DISMISS, theme::link());
        hits.register(close, Hit::CloseSidebar);
    }
    let rule = "─".repeat(usize::from(area.width));
    widgets::draw_text(buf, area, area.x, area.y + 3, &rule, theme::muted());

    let mut y = inner.y + 5;
    for id in SectionId::NAV {
        if y + 1 >= area.bottom().saturating_sub(3) {
            break;
        }
        let row = Rect::new(inner.x, y, inner.width, 1);
        let style = if id == current {
            theme::nav_active()
        } else {
            theme::nav_item()
        };
        buf.set_style(row, style);
        let x = widgets::draw_text(buf, row, row.x + 1, y, theme::icon_glyph(nav_icon(id)), theme::link());
        widgets::draw_text(buf, row, x + 1, y, id.label(), style);
        hits.register(row, Hit::Nav(id));
        y += 2;
    }

    let bottom = area.bottom();
    if bottom >= area.y + 6 {
        widgets::draw_text(buf, area, area.x, bottom - 3, &rule, theme::muted());
        let label = format!("{} Download Resume", theme::icon_glyph(Icon::Download));
        let button = Button::new(&label);
        let rect = Rect::new(inner.x, bottom - 2, inner.width, 1);
        buf.set_style(rect, theme::button(true));
        let x = rect.x + rect.width.saturating_sub(button.width()) / 2;
        button.render(Rect::new(x, rect.y, button.width(), 1).intersection(rect), buf);
        hits.register(rect, Hit::Download);
    }
}

/// Mobile header row with the menu button.
pub fn render_menu_bar(area: Rect, buf: &mut Buffer, hits: &HitMap) {
    if area.is_empty() {
        return;
    }
    buf.set_style(area, theme::status_bar());
    let label = format!("{} Menu", theme::icon_glyph(Icon::Menu));
    let button = Button::new(&label).outline();
    let rect = Rect::new(area.x + 1, area.y, button.width(), 1).intersection(area);
    button.render(rect, buf);
    hits.register(rect, Hit::Menu);
    let x = rect.right() + 2;
    widgets::draw_text(buf, area, x, area.y, IDENTITY.name, theme::heading());
}

/// Copyright and outbound links.
pub fn render_footer(area: Rect, buf: &mut Buffer, hits: &HitMap) {
    if area.is_empty() {
        return;
    }
    let notice = format!("© {}. All rights reserved.", IDENTITY.name);
    let links_width: u16 = FOOTER_LINKS
        .iter()
        .map(|l| widgets::display_width(l.label) + 2)
        .sum();
    let notice_room = area.width.saturating_sub(links_width + 2);
    let shown = widgets::truncate_to_width(&notice, notice_room);
    widgets::draw_text(buf, area, area.x + 1, area.y, &shown, theme::footer());

    if area.width < links_width + 2 {
        return;
    }
    let mut x = area.right() - links_width;
    for link in &FOOTER_LINKS {
        let width = widgets::display_width(link.label);
        widgets::draw_text(buf, area, x, area.y, link.label, theme::link());
        hits.register(Rect::new(x, area.y, width, 1), Hit::Link(link.url.to_string()));
        x += width + 2;
    }
}

// ---------------------------------------------------------------------------
// Status bar
// ---------------------------------------------------------------------------

/// Everything the status bar shows.
#[derive(Debug, Clone, Copy)]
pub struct StatusBarState<'a> {
    pub section: SectionId,
    pub section_title: &'a str,
    /// Projects only.
    pub layout_mode: Option<LayoutMode>,
    pub selected_tag: Option<&'a str>,
    /// Last link opened or other notice.
    pub message: Option<&'a str>,
    pub terminal_width: u16,
    pub terminal_height: u16,
}

pub fn render_status_bar(state: &StatusBarState<'_>, area: Rect, buf: &mut Buffer) {
    if area.is_empty() {
        return;
    }
    buf.set_style(area, theme::status_bar());

    let bar = theme::status_bar();
    let sep = Span::styled(" │ ", bar);
    let mut spans = vec![
        Span::styled(format!(" {}", state.section_title), theme::heading().bg(theme::bg::SURFACE)),
        Span::styled(
            format!(" [{}/{}]", state.section.index() + 1, SectionId::ALL.len()),
            bar,
        ),
    ];
    if let Some(mode) = state.layout_mode {
        spans.push(sep.clone());
        spans.push(Span::styled(mode.label(), bar));
        spans.push(sep.clone());
        spans.push(Span::styled(
            format!("tag: {}", state.selected_tag.unwrap_or("all")),
            bar,
        ));
    }
    if let Some(message) = state.message {
        spans.push(sep);
        spans.push(Span::styled(message, theme::status_message().bg(theme::bg::SURFACE)));
    }
    Paragraph::new(Line::from(spans)).render(area, buf);

    let right = format!("{}×{}  ? help ", state.terminal_width, state.terminal_height);
    let width = widgets::display_width(&right);
    if area.width > width + 40 {
        widgets::draw_text(buf, area, area.right() - width, area.y, &right, bar);
    }
}

// ---------------------------------------------------------------------------
// Help overlay
// ---------------------------------------------------------------------------

/// A key and what it does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HelpEntry {
    pub key: &'static str,
    pub action: &'static str,
}

/// Bindings available everywhere.
pub const GLOBAL_KEYS: [HelpEntry; 8] = [
    HelpEntry {
        key: "1-6",
        action: "Jump to a section",
    },
    HelpEntry {
        key: "Tab / S-Tab",
        action: "Next / previous section",
    },
    HelpEntry {
        key: "m",
        action: "Toggle menu (narrow terminals)",
    },
    HelpEntry {
        key: "d",
        action: "Download resume",
    },
    HelpEntry {
        key: "?",
        action: "Toggle this help",
    },
    HelpEntry {
        key: "Esc",
        action: "Close help or menu",
    },
    HelpEntry {
        key: "Click",
        action: "Links, tags, buttons",
    },
    HelpEntry {
        key: "q / Ctrl+C",
        action: "Quit",
    },
];

/// Centered overlay listing global and section key bindings.
pub fn render_help_overlay(section_title: &str, section_keys: &[HelpEntry], area: Rect, buf: &mut Buffer) {
    let overlay_width = ((u32::from(area.width) * 60) / 100).clamp(36, 72) as u16;
    let overlay_height = ((u32::from(area.height) * 70) / 100).clamp(14, 28) as u16;
    let overlay_width = overlay_width.min(area.width.saturating_sub(2));
    let overlay_height = overlay_height.min(area.height.saturating_sub(2));
    let x = area.x + area.width.saturating_sub(overlay_width) / 2;
    let y = area.y + area.height.saturating_sub(overlay_height) / 2;
    let overlay_area = Rect::new(x, y, overlay_width, overlay_height);

    let block = Block::bordered()
        .border_type(BorderType::Double)
        .title(" Keyboard Shortcuts ")
        .title_alignment(Alignment::Center)
        .style(theme::help_overlay());
    let inner = block.inner(overlay_area);
    Clear.render(overlay_area, buf);
    block.render(overlay_area, buf);

    if inner.width < 10 || inner.height < 5 {
        return;
    }

    let key_width = GLOBAL_KEYS
        .iter()
        .chain(section_keys)
        .map(|e| widgets::display_width(e.key))
        .max()
        .unwrap_or(0)
        + 2;
    let entry = |e: &HelpEntry| {
        Line::from(vec![
            Span::styled(format!(" {:<width$}", e.key, width = usize::from(key_width)), theme::help_key()),
            Span::styled(e.action, theme::body()),
        ])
    };

    let mut lines = vec![Line::styled(" Global", theme::subtitle())];
    lines.extend(GLOBAL_KEYS.iter().map(entry));
    if !section_keys.is_empty() {
        lines.push(Line::default());
        lines.push(Line::styled(format!(" {section_title}"), theme::subtitle()));
        lines.extend(section_keys.iter().map(entry));
    }
    let body = Rect::new(inner.x, inner.y, inner.width, inner.height - 1);
    Paragraph::new(lines).render(body, buf);

    let hint = "Press ? or Esc to close";
    Paragraph::new(Line::styled(hint, theme::muted()))
        .alignment(Alignment::Center)
        .render(Rect::new(inner.x, inner.bottom() - 1, inner.width, 1), buf);
}

/// Fill `area` with the base style.
pub fn render_background(area: Rect, buf: &mut Buffer) {
    buf.set_style(area, theme::base());
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_runtime::buffer_to_text;

    const METRICS: CellMetrics = CellMetrics::new(8);

    fn render_sidebar_text(current: SectionId, mobile: bool) -> (String, HitMap) {
        let area = Rect::new(0, 0, 32, 24);
        let mut buf = Buffer::empty(area);
        let hits = HitMap::new();
        render_sidebar(current, mobile, area, &mut buf, &hits);
        (buffer_to_text(&buf), hits)
    }

    #[test]
    fn desktop_layout_has_fixed_sidebar_column() {
        let sidebar = Sidebar::new(METRICS.to_px(128));
        let l = layout(Rect::new(0, 0, 128, 40), METRICS, &sidebar);
        assert_eq!(l.sidebar, Some(Rect::new(0, 0, 32, 39)));
        assert_eq!(l.menu_bar, None);
        assert_eq!(l.status, Rect::new(0, 39, 128, 1));
        assert_eq!(l.footer, Rect::new(32, 38, 96, 1));
        assert_eq!(l.content.x, 34);
        assert_eq!(l.content.width, 92);
    }

    #[test]
    fn mobile_layout_overlays_when_open() {
        let mut sidebar = Sidebar::new(METRICS.to_px(70));
        let closed = layout(Rect::new(0, 0, 70, 30), METRICS, &sidebar);
        assert_eq!(closed.sidebar, None);
        assert_eq!(closed.menu_bar, Some(Rect::new(0, 0, 70, 1)));
        assert_eq!(closed.content.width, 66);

        sidebar.open();
        let open = layout(Rect::new(0, 0, 70, 30), METRICS, &sidebar);
        assert_eq!(open.sidebar, Some(Rect::new(0, 0, 32, 29)));
        assert_eq!(open.content, closed.content);
    }

    #[test]
    fn tiny_terminal_does_not_underflow() {
        let sidebar = Sidebar::new(8);
        let l = layout(Rect::new(0, 0, 3, 1), METRICS, &sidebar);
        assert_eq!(l.content.height, 0);
        let l = layout(Rect::new(0, 0, 0, 0), METRICS, &Sidebar::new(2000));
        assert!(l.content.is_empty());
    }

    #[test]
    fn sidebar_lists_nav_and_download() {
        let (text, hits) = render_sidebar_text(SectionId::Projects, false);
        assert!(text.contains("Rasmus Hogslätt"));
        assert!(text.contains("Software developer"));
        for id in SectionId::NAV {
            assert!(text.contains(id.label()), "{}", id.label());
        }
        assert!(text.contains("Download Resume"));
        assert_eq!(hits.hit_test(1, 1), Some(Hit::Nav(SectionId::Home)));
        assert_eq!(hits.hit_test(5, 22), Some(Hit::Download));
        assert!(!text.contains(theme::DISMISS));
    }

    #[test]
    fn mobile_sidebar_has_close_control() {
        let (text, hits) = render_sidebar_text(SectionId::Home, true);
        assert!(text.contains(theme::DISMISS));
        assert_eq!(hits.hit_test(29, 1), Some(Hit::CloseSidebar));
    }

    #[test]
    fn footer_links_are_clickable() {
        let area = Rect::new(0, 0, 80, 1);
        let mut buf = Buffer::empty(area);
        let hits = HitMap::new();
        render_footer(area, &mut buf, &hits);
        let text = buffer_to_text(&buf);
        assert!(text.contains("© Rasmus Hogslätt. All rights reserved."));
        assert!(text.contains("LinkedIn"));
        assert_eq!(hits.len(), FOOTER_LINKS.len());
    }

    #[test]
    fn status_bar_shows_position_and_filter() {
        let area = Rect::new(0, 0, 120, 1);
        let mut buf = Buffer::empty(area);
        let state = StatusBarState {
            section: SectionId::Projects,
            section_title: "Personal Projects",
            layout_mode: Some(LayoutMode::Grid),
            selected_tag: Some("Rust"),
            message: Some("Opened https://example.com"),
            terminal_width: 120,
            terminal_height: 40,
        };
        render_status_bar(&state, area, &mut buf);
        let text = buffer_to_text(&buf);
        assert!(text.contains("Personal Projects [5/6]"));
        assert!(text.contains("Grid"));
        assert!(text.contains("tag: Rust"));
        assert!(text.contains("Opened https://example.com"));
        assert!(text.contains("120×40"));
    }

    #[test]
    fn help_overlay_lists_section_keys() {
        let area = Rect::new(0, 0, 100, 40);
        let mut buf = Buffer::empty(area);
        let keys = [HelpEntry {
            key: "g",
            action: "Toggle strip / grid",
        }];
        render_help_overlay("Personal Projects", &keys, area, &mut buf);
        let text = buffer_to_text(&buf);
        assert!(text.contains("Keyboard Shortcuts"));
        assert!(text.contains("Toggle strip / grid"));
        assert!(text.contains("Press ? or Esc to close"));
    }
}
