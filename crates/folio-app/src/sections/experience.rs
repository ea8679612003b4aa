#![forbid(unsafe_code)]

//! Work history cards with skill badges.

use folio_core::event::Event;
use folio_core::nav::SectionId;
use folio_core::profile::{EXPERIENCE, Experience as Role, Icon};
use folio_runtime::Cmd;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::{Block, BorderType, Widget};

use super::{Section, draw_heading, render_scrolled, scroll_keybindings, update_scroll};
use crate::app::AppMsg;
use crate::chrome::HelpEntry;
use crate::hits::HitMap;
use crate::theme;
use crate::widgets::{self, Badge, VScroll};

#[derive(Debug, Default)]
pub struct Experience {
    scroll: VScroll,
}

/// Skill badges of one role.
fn skill_badges(role: &Role) -> Vec<Badge<'static>> {
    role.skills
        .iter()
        .map(|skill| Badge::new(skill).with_style(theme::skill_badge()))
        .collect()
}

impl Experience {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rows a card needs at `width` columns, borders included.
    fn card_height(role: &Role, width: u16) -> u16 {
        let text_width = width.saturating_sub(4);
        let widths: Vec<u16> = skill_badges(role).iter().map(Badge::width).collect();
        let skills = widgets::flow_rows(&widths, text_width, 1);
        let description = widgets::wrap(role.description, text_width).len() as u16;
        2 + 3 + skills + 1 + description
    }

    fn draw_card(role: &Role, rect: Rect, buf: &mut Buffer) {
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(theme::card_border(false));
        let inner = block.inner(rect);
        block.render(rect, buf);
        let inner = Rect::new(inner.x + 1, inner.y, inner.width.saturating_sub(2), inner.height);

        let title = widgets::truncate_to_width(role.title, inner.width);
        widgets::draw_text(buf, inner, inner.x, inner.y, &title, theme::card_title());
        let meta = format!("{} | {}", role.company, role.period);
        let meta = widgets::truncate_to_width(&meta, inner.width);
        widgets::draw_text(buf, inner, inner.x, inner.y + 1, &meta, theme::muted());
        let logo = format!("Logo: {}", role.logo);
        let logo = widgets::truncate_to_width(&logo, inner.width);
        widgets::draw_text(buf, inner, inner.x, inner.y + 2, &logo, theme::muted());

        let badges = skill_badges(role);
        let widths: Vec<u16> = badges.iter().map(Badge::width).collect();
        let positions = widgets::flow_layout(&widths, inner.width, 1);
        let mut y = inner.y + 3;
        for (badge, (dx, row)) in badges.into_iter().zip(&positions) {
            badge.render(badge.rect_at(inner.x + dx, y + row).intersection(inner), buf);
        }
        y += widgets::flow_rows(&widths, inner.width, 1) + 1;

        for line in widgets::wrap(role.description, inner.width) {
            widgets::draw_text(buf, inner, inner.x, y, &line, theme::body());
            y += 1;
        }
    }

    fn draw(area: Rect, buf: &mut Buffer) -> u16 {
        let mut y = draw_heading(buf, area, area.y, Icon::Briefcase, "Professional Experience");
        for role in &EXPERIENCE {
            let height = Self::card_height(role, area.width);
            Self::draw_card(role, Rect::new(area.x, y, area.width, height), buf);
            y += height + 1;
        }
        y
    }
}

impl Section for Experience {
    fn id(&self) -> SectionId {
        SectionId::Experience
    }

    fn title(&self) -> &'static str {
        "Professional Experience"
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
