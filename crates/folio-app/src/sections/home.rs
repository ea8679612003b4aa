#![forbid(unsafe_code)]

//! Landing banner.

use folio_core::event::{Event, KeyCode};
use folio_core::nav::SectionId;
use folio_core::profile::IDENTITY;
use folio_runtime::Cmd;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Widget;

use super::Section;
use crate::app::AppMsg;
use crate::chrome::HelpEntry;
use crate::hits::{Hit, HitMap};
use crate::theme;
use crate::widgets::{self, Button};

const GREETING: &str = "Hello, I'm ";

#[derive(Debug, Default)]
pub struct Home;

impl Home {
    pub fn new() -> Self {
        Self
    }
}

impl Section for Home {
    fn id(&self) -> SectionId {
        SectionId::Home
    }

    fn update(&mut self, event: &Event) -> Cmd<AppMsg> {
        match event {
            Event::Key(key) if key.is_press() && key.code == KeyCode::Enter => {
                Cmd::msg(AppMsg::Navigate(SectionId::About))
            }
            _ => Cmd::none(),
        }
    }

    fn view(&self, area: Rect, buf: &mut Buffer, hits: &HitMap) {
        if area.height < 5 || area.width < 10 {
            return;
        }
        let top = area.y + area.height.saturating_sub(5) / 2;

        let greeting_width =
            widgets::display_width(GREETING) + widgets::display_width(IDENTITY.name);
        let x = area.x + area.width.saturating_sub(greeting_width) / 2;
        let x = widgets::draw_text(buf, area, x, top, GREETING, theme::heading());
        widgets::draw_text(
            buf,
            area,
            x,
            top,
            IDENTITY.name,
            Style::new().fg(theme::accent::PRIMARY).add_modifier(Modifier::BOLD),
        );

        let headline = IDENTITY.headline;
        let x = area.x + area.width.saturating_sub(widgets::display_width(headline)) / 2;
        widgets::draw_text(buf, area, x, top + 2, headline, theme::subtitle());

        let about = Button::new("About Me");
        let experience = Button::new("Experience").outline();
        let total = about.width() + theme::spacing::SM + experience.width();
        let x = area.x + area.width.saturating_sub(total) / 2;
        let row = top + 4;

        let about_rect = Rect::new(x, row, about.width(), 1).intersection(area);
        about.render(about_rect, buf);
        hits.register(about_rect, Hit::Nav(SectionId::About));

        let x = x + about.width() + theme::spacing::SM;
        let experience_rect = Rect::new(x, row, experience.width(), 1).intersection(area);
        experience.render(experience_rect, buf);
        hits.register(experience_rect, Hit::Nav(SectionId::Experience));
    }

    fn keybindings(&self) -> Vec<HelpEntry> {
        vec![HelpEntry {
            key: "Enter",
            action: "About me",
        }]
    }
}
