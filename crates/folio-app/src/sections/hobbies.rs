#![forbid(unsafe_code)]

//! Hobbies, read as one sentence.

use folio_core::event::Event;
use folio_core::nav::SectionId;
use folio_core::profile::{HOBBIES, HOBBIES_INTRO, Icon, hobby_sentence};
use folio_runtime::Cmd;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;

use super::{Section, draw_heading, draw_paragraph, render_scrolled, scroll_keybindings, update_scroll};
use crate::app::AppMsg;
use crate::chrome::HelpEntry;
use crate::hits::HitMap;
use crate::theme;
use crate::widgets::VScroll;

#[derive(Debug, Default)]
pub struct Hobbies {
    scroll: VScroll,
}

/// The intro followed by every hobby with its icon.
pub fn hobbies_paragraph() -> String {
    let items: Vec<String> = HOBBIES
        .iter()
        .map(|h| format!("{} {}", theme::icon_glyph(h.icon), h.name))
        .collect();
    format!("{HOBBIES_INTRO} {}", hobby_sentence(items.iter().map(String::as_str)))
}

impl Hobbies {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Section for Hobbies {
    fn id(&self) -> SectionId {
        SectionId::Hobbies
    }

    fn title(&self) -> &'static str {
        "Hobbies & Interests"
    }

    fn update(&mut self, event: &Event) -> Cmd<AppMsg> {
        update_scroll(&mut self.scroll, event)
    }

    fn view(&self, area: Rect, buf: &mut Buffer, hits: &HitMap) {
        let paragraph = hobbies_paragraph();
        render_scrolled(&self.scroll, area, buf, hits, |canvas, scratch, _| {
            let y = draw_heading(scratch, canvas, canvas.y, Icon::Coffee, self.title());
            draw_paragraph(scratch, canvas, y, &paragraph, theme::body())
        });
    }

    fn keybindings(&self) -> Vec<HelpEntry> {
        scroll_keybindings()
    }
}
