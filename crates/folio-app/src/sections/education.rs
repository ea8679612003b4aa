#![forbid(unsafe_code)]

//! Education card.

use folio_core::event::Event;
use folio_core::nav::SectionId;
use folio_core::profile::{EDUCATION, Icon};
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

#[derive(Debug, Default)]
pub struct Education {
    scroll: VScroll,
}

impl Education {
    pub fn new() -> Self {
        Self::default()
    }

    fn draw(area: Rect, buf: &mut Buffer) -> u16 {
        let y = draw_heading(buf, area, area.y, Icon::GraduationCap, "Education");

        let text_width = area.width.saturating_sub(4);
        let summary = widgets::wrap(EDUCATION.summary, text_width);
        let height = 4 + summary.len() as u16;
        let rect = Rect::new(area.x, y, area.width, height);
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(theme::card_border(false));
        let inner = block.inner(rect);
        block.render(rect, buf);

        let inner = Rect::new(inner.x + 1, inner.y, inner.width.saturating_sub(2), inner.height);
        widgets::draw_text(buf, inner, inner.x, inner.y, &widgets::truncate_to_width(EDUCATION.degree, inner.width), theme::card_title());
        let school = format!("{} | {}", EDUCATION.school, EDUCATION.year);
        widgets::draw_text(buf, inner, inner.x, inner.y + 1, &school, theme::muted());
        draw_paragraph(buf, inner, inner.y + 2, EDUCATION.summary, theme::body());
        y + height
    }
}

impl Section for Education {
    fn id(&self) -> SectionId {
        SectionId::Education
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
    fn renders_degree_and_school() {
        let area = Rect::new(0, 0, 70, 14);
        let mut buf = Buffer::empty(area);
        Education::new().view(area, &mut buf, &HitMap::new());
        let text = buffer_to_text(&buf);
        assert!(text.contains("Master's Degree in Technology of Media"));
        assert!(text.contains("Linköping University | 2024"));
        assert!(text.contains("Mixed reality"));
    }
}
