#![forbid(unsafe_code)]

//! Page sections shown in the content pane.
//!
//! Each section implements the [`Section`] trait and can be navigated to via
//! the sidebar or number keys.

pub mod about;
pub mod education;
pub mod experience;
pub mod hobbies;
pub mod home;
pub mod projects;

use folio_core::event::{Event, MouseEventKind};
use folio_core::nav::SectionId;
use folio_core::profile::Icon;
use folio_runtime::Cmd;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;

use crate::app::AppMsg;
use crate::chrome::HelpEntry;
use crate::hits::HitMap;
use crate::theme;
use crate::widgets::{self, VScroll};

/// Rows scrolled per mouse wheel notch in text panes.
pub const WHEEL_ROWS: i32 = 3;

/// Tallest content a scrolled pane renders off-screen.
const SCRATCH_ROWS: u16 = 512;

/// A page section.
pub trait Section {
    fn id(&self) -> SectionId;

    /// Heading shown at the top of the section.
    fn title(&self) -> &'static str {
        self.id().label()
    }

    /// Handle an event the app did not consume.
    fn update(&mut self, event: &Event) -> Cmd<AppMsg>;

    /// Render into `area`, registering clickable regions in `hits`.
    fn view(&self, area: Rect, buf: &mut Buffer, hits: &HitMap);

    /// Return keybindings specific to this section for the help overlay.
    fn keybindings(&self) -> Vec<HelpEntry> {
        Vec::new()
    }
}

/// Sidebar icon of a section.
pub const fn nav_icon(id: SectionId) -> Icon {
    match id {
        SectionId::Home => Icon::Menu,
        SectionId::About => Icon::User,
        SectionId::Education => Icon::GraduationCap,
        SectionId::Experience => Icon::Briefcase,
        SectionId::Projects => Icon::FolderKanban,
        SectionId::Hobbies => Icon::Coffee,
    }
}

/// Keys every vertically scrolled section shares.
pub(crate) fn scroll_keybindings() -> Vec<HelpEntry> {
    vec![
        HelpEntry {
            key: "↑/↓",
            action: "Scroll",
        },
        HelpEntry {
            key: "PgUp/PgDn",
            action: "Scroll a page",
        },
    ]
}

/// Feed scroll keys and wheel notches to `scroll`.
pub(crate) fn update_scroll(scroll: &mut VScroll, event: &Event) -> Cmd<AppMsg> {
    match event {
        Event::Key(key) if key.is_press() => {
            scroll.handle_key(key);
        }
        Event::Mouse(mouse) => match mouse.kind {
            MouseEventKind::ScrollUp => {
                scroll.scroll_by(-WHEEL_ROWS);
            }
            MouseEventKind::ScrollDown => {
                scroll.scroll_by(WHEEL_ROWS);
            }
            _ => {}
        },
        _ => {}
    }
    Cmd::none()
}

/// Render content taller than `area` through `scroll`.
///
/// `draw` paints into an off-screen area of the same width and returns the
/// number of rows it used.
pub(crate) fn render_scrolled<F>(scroll: &VScroll, area: Rect, buf: &mut Buffer, hits: &HitMap, draw: F)
where
    F: FnOnce(Rect, &mut Buffer, &HitMap) -> u16,
{
    if area.is_empty() {
        return;
    }
    let canvas = Rect::new(0, 0, area.width, SCRATCH_ROWS);
    let mut scratch = Buffer::empty(canvas);
    let local = HitMap::new();
    let used = draw(canvas, &mut scratch, &local).min(SCRATCH_ROWS);

    scroll.measure(used, area.height);
    let offset = scroll.offset();
    widgets::blit(&scratch, 0, offset, buf, area);
    hits.absorb_scrolled(local, 0, offset, area);

    if scroll.max_offset() > 0 {
        let marker = format!("{}/{}", offset, scroll.max_offset());
        let x = area.right().saturating_sub(widgets::display_width(&marker));
        widgets::draw_text(buf, area, x, area.y, &marker, theme::muted());
    }
}

/// Section heading with an icon. Returns the next free row.
pub(crate) fn draw_heading(buf: &mut Buffer, area: Rect, y: u16, icon: Icon, title: &str) -> u16 {
    let x = widgets::draw_text(buf, area, area.x, y, theme::icon_glyph(icon), theme::link());
    widgets::draw_text(buf, area, x + 1, y, title, theme::heading());
    y + 2
}

/// Word-wrapped paragraph. Returns the row after it.
pub(crate) fn draw_paragraph(buf: &mut Buffer, area: Rect, y: u16, text: &str, style: ratatui::style::Style) -> u16 {
    let mut row = y;
    for line in widgets::wrap(text, area.width) {
        widgets::draw_text(buf, area, area.x, row, &line, style);
        row += 1;
    }
    row
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::event::KeyCode;
    use folio_runtime::buffer_to_text;

    #[test]
    fn every_section_has_a_distinct_icon() {
        let icons: Vec<Icon> = SectionId::ALL.iter().map(|&id| nav_icon(id)).collect();
        for (i, a) in icons.iter().enumerate() {
            assert!(!icons[i + 1..].contains(a), "{a:?} used twice");
        }
    }

    #[test]
    fn scrolled_render_clips_and_reports_position() {
        let scroll = VScroll::default();
        let area = Rect::new(0, 0, 12, 3);
        let mut buf = Buffer::empty(area);
        let hits = HitMap::new();
        render_scrolled(&scroll, area, &mut buf, &hits, |canvas, scratch, _| {
            for row in 0..6 {
                scratch.set_string(canvas.x, row, format!("line {row}"), ratatui::style::Style::default());
            }
            6
        });
        assert_eq!(scroll.max_offset(), 3);
        let text = buffer_to_text(&buf);
        assert!(text.starts_with("line 0"));
        assert!(text.contains("0/3"));
        assert!(!text.contains("line 3"));
    }

    #[test]
    fn wheel_and_keys_scroll() {
        let mut scroll = VScroll::default();
        scroll.measure(20, 5);
        update_scroll(&mut scroll, &Event::key(KeyCode::Down));
        assert_eq!(scroll.offset(), 1);
        update_scroll(
            &mut scroll,
            &Event::Mouse(folio_core::event::MouseEvent::new(MouseEventKind::ScrollDown, 0, 0)),
        );
        assert_eq!(scroll.offset(), 4);
    }
}
