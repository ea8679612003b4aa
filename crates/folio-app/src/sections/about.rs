#![forbid(unsafe_code)]

//! About me: paragraphs and highlight cards.

use folio_core::event::Event;
use folio_core::nav::SectionId;
use folio_core::profile::{ABOUT_PARAGRAPHS, HIGHLIGHTS, IDENTITY, Icon};
use folio_runtime::Cmd;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::{Block, BorderType, Widget};

use super::{Section, draw_heading, draw_paragraph, render_scrolled, scroll_keybindings, update_scroll};
use crate::app::AppMsg;
use crate::chrome::HelpEntry;
use crate::hits::HitMap;
use crate::theme;
use crate::widgets::{self, VScroll};

/// Highlight cards sit side by side when each gets at least this many columns.
const MIN_HIGHLIGHT_WIDTH: u16 = 20;

#[derive(Debug, Default)]
pub struct About {
    scroll: VScroll,
}

impl About {
    pub fn new() -> Self {
        Self::default()
    }

    fn draw(area: Rect, buf: &mut Buffer) -> u16 {
        let mut y = draw_heading(buf, area, area.y, Icon::User, "About Me");
        for paragraph in ABOUT_PARAGRAPHS {
            y = draw_paragraph(buf, area, y, paragraph, theme::body()) + 1;
        }

        let count = HIGHLIGHTS.len() as u16;
        let gap = theme::spacing::XS;
        let side_by_side = area.width >= count * MIN_HIGHLIGHT_WIDTH + (count - 1) * gap;
        let card_width = if side_by_side {
            (area.width - (count - 1) * gap) / count
        } else {
            area.width
        };
        for (i, highlight) in HIGHLIGHTS.iter().enumerate() {
            let i = i as u16;
            let rect = if side_by_side {
                Rect::new(area.x + i * (card_width + gap), y, card_width, 3)
            } else {
                Rect::new(area.x, y + i * 3, card_width, 3)
            };
            let block = Block::bordered()
                .border_type(BorderType::Rounded)
                .border_style(theme::card_border(false));
            let inner = block.inner(rect);
            block.render(rect, buf);
            let x = widgets::draw_text(buf, inner, inner.x + 1, inner.y, theme::icon_glyph(highlight.icon), theme::link());
            let label = widgets::truncate_to_width(highlight.label, inner.width.saturating_sub(4));
            widgets::draw_text(buf, inner, x + 1, inner.y, &label, theme::body());
        }
        y += if side_by_side { 3 } else { 3 * count };

        let portrait = format!("Portrait: {}", IDENTITY.portrait);
        widgets::draw_text(buf, area, area.x, y + 1, &portrait, theme::muted());
        y + 2
    }
}

impl Section for About {
    fn id(&self) -> SectionId {
        SectionId::About
    }

    fn title(&self) -> &'static str {
        "About Me"
    }

    fn update(&mut self, event: &Event) -> Cmd<AppMsg> {
        update_scroll(&mut self.scroll, event)
    }

    fn view(&self, area: Rect, buf: &mut Buffer, hits: &HitMap) {
        render_scrolled(&self.scroll, area, buf, hits, |canvas, scratch, _| {
            Self::draw(canvas, scratch)
        });
    }

    fn keybindings(&self) -> Vec<HelpEntry> {
        scroll_keybindings()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_runtime::buffer_to_text;

    #[test]
    fn renders_highlights() {
        let area = Rect::new(0, 0, 80, 30);
        let mut buf = Buffer::empty(area);
        About::new().view(area, &mut buf, &HitMap::new());
        let text = buffer_to_text(&buf);
        assert!(text.contains("About Me"));
        assert!(text.contains("evangelist"));
        assert!(text.contains("Safe & Performant code"));
    }

    #[test]
    fn narrow_pane_stacks_highlights_and_scrolls() {
        let about = About::new();
        let area = Rect::new(0, 0, 30, 8);
        let mut buf = Buffer::empty(area);
        about.view(area, &mut buf, &HitMap::new());
        assert!(about.scroll.max_offset() > 0);
    }
}
