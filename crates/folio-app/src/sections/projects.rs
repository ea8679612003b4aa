#![forbid(unsafe_code)]

//! Personal projects: tag filter, horizontal strip or grid of cards, and the
//! empty state.
//!
//! All catalogue state lives in [`ViewState`]; this module turns it into
//! cells. Strip geometry is kept in pixels by the core and converted to
//! columns here with the configured [`CellMetrics`].
//!
//! # Card layout (rows inside the border)
//!
//! ```text
//! 0  image line (file name, or placeholder)
//! 1  title
//! 2  description, clamped
//! 3  to two lines
//! 4  tag badges, at most
//! 5  two rows
//! 6
//! 7  Code PDF            Demo
//! ```

use std::cell::Cell;
use std::time::Duration;

use folio_core::catalogue::{Catalogue, LinkKind, Project};
use folio_core::event::{Event, KeyCode, MouseEventKind};
use folio_core::geometry::CellMetrics;
use folio_core::nav::SectionId;
use folio_core::profile::Icon;
use folio_core::scroll::ScrollDirection;
use folio_core::view::{LayoutMode, ViewState};
use folio_runtime::Cmd;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::{Block, BorderType, Widget};

use super::{Section, WHEEL_ROWS, draw_heading, render_scrolled};
use crate::app::AppMsg;
use crate::chrome::HelpEntry;
use crate::hits::{Hit, HitMap};
use crate::theme;
use crate::widgets::{self, Badge, Button, VScroll};

/// Animation frame requested while the strip scrolls smoothly.
pub const FRAME: Duration = Duration::from_millis(16);

/// Card height including its border.
pub const CARD_HEIGHT: u16 = 10;

const DESCRIPTION_LINES: usize = 2;
const TAG_ROWS: u16 = 2;
const HINT: &str = "Scroll to see more projects";
const EMPTY_TITLE: &str = "No projects found";
const SHOW_ALL: &str = "Show all projects";

/// Something the user asked the catalogue view to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectAction {
    ScrollLeft,
    ScrollRight,
    ToggleLayout,
    SelectTag(String),
    ClearTag,
    /// Select the tag after the current one; past the last tag, show all.
    NextTag,
    PrevTag,
    FocusNext,
    FocusPrev,
    Focus(usize),
    /// Open a link of the focused card.
    Open(LinkKind),
}

/// The projects section.
#[derive(Debug)]
pub struct Projects {
    view: ViewState<'static>,
    metrics: CellMetrics,
    /// Index into the filtered list.
    focused: usize,
    grid_scroll: VScroll,
    /// Grid columns used by the last render.
    grid_columns: Cell<u16>,
}

impl Projects {
    /// The built-in catalogue, optionally pre-filtered.
    pub fn new(metrics: CellMetrics, initial_tag: Option<&str>) -> Self {
        Self::with_catalogue(Catalogue::builtin(), metrics, initial_tag)
    }

    pub fn with_catalogue(
        catalogue: &'static Catalogue,
        metrics: CellMetrics,
        initial_tag: Option<&str>,
    ) -> Self {
        let mut view = ViewState::new(catalogue, 0);
        if let Some(tag) = initial_tag {
            view.select_tag(tag);
        }
        Self {
            view,
            metrics,
            focused: 0,
            grid_scroll: VScroll::default(),
            grid_columns: Cell::new(1),
        }
    }

    pub fn view_state(&self) -> &ViewState<'static> {
        &self.view
    }

    pub fn focused(&self) -> usize {
        self.focused
    }

    /// The focused card, if any project passes the filter.
    pub fn focused_project(&self) -> Option<&'static Project> {
        self.view.filtered().get(self.focused).copied()
    }

    /// New viewport and strip container widths, in pixels.
    pub fn on_resize(&mut self, viewport_width_px: u32, strip_client_width_px: u32) {
        self.view.on_viewport_resize(viewport_width_px);
        self.view.set_strip_client_width(strip_client_width_px);
    }

    /// Advance the smooth scroll by one frame.
    pub fn on_tick(&mut self) -> Cmd<AppMsg> {
        self.view.tick(FRAME);
        self.continue_animation()
    }

    /// One wheel notch over the strip.
    pub fn wheel(&mut self, direction: ScrollDirection) -> Cmd<AppMsg> {
        self.view.wheel(direction);
        Cmd::none()
    }

    fn continue_animation(&self) -> Cmd<AppMsg> {
        if self.view.is_animating() {
            Cmd::tick(FRAME)
        } else {
            Cmd::none()
        }
    }

    fn filter_changed(&mut self) {
        self.focused = 0;
        self.grid_scroll.reset();
    }

    /// Apply an action from a key, a click, or the app.
    pub fn apply(&mut self, action: ProjectAction) -> Cmd<AppMsg> {
        match action {
            ProjectAction::ScrollLeft => {
                self.view.scroll_by(ScrollDirection::Left);
                self.continue_animation()
            }
            ProjectAction::ScrollRight => {
                self.view.scroll_by(ScrollDirection::Right);
                self.continue_animation()
            }
            ProjectAction::ToggleLayout => {
                self.view.toggle_layout_mode();
                self.grid_scroll.reset();
                Cmd::none()
            }
            ProjectAction::SelectTag(tag) => {
                if self.view.select_tag(&tag) {
                    self.filter_changed();
                }
                Cmd::none()
            }
            ProjectAction::ClearTag => {
                if self.view.clear_tag() {
                    self.filter_changed();
                }
                Cmd::none()
            }
            ProjectAction::NextTag => self.step_tag(true),
            ProjectAction::PrevTag => self.step_tag(false),
            ProjectAction::FocusNext => {
                let next = (self.focused + 1).min(self.view.filtered().len().saturating_sub(1));
                self.apply(ProjectAction::Focus(next))
            }
            ProjectAction::FocusPrev => {
                self.apply(ProjectAction::Focus(self.focused.saturating_sub(1)))
            }
            ProjectAction::Focus(index) => {
                if index >= self.view.filtered().len() {
                    return Cmd::none();
                }
                self.focused = index;
                self.reveal_focused();
                self.continue_animation()
            }
            ProjectAction::Open(kind) => match self.focused_project().and_then(|p| p.link(kind)) {
                Some(link) => Cmd::msg(AppMsg::OpenLink(link.target.to_string())),
                None => Cmd::none(),
            },
        }
    }

    fn step_tag(&mut self, forward: bool) -> Cmd<AppMsg> {
        match self.adjacent_tag(forward) {
            Some(tag) => self.apply(ProjectAction::SelectTag(tag)),
            None => self.apply(ProjectAction::ClearTag),
        }
    }

    /// Tag after (or before) the selected one. `None` means "all projects".
    fn adjacent_tag(&self, forward: bool) -> Option<String> {
        let tags: Vec<&str> = self.view.tag_universe().into_iter().collect();
        let current = self
            .view
            .selected_tag()
            .and_then(|t| tags.iter().position(|&x| x == t));
        let next = match (current, forward) {
            (None, true) => tags.first(),
            (None, false) => tags.last(),
            (Some(i), true) => tags.get(i + 1),
            (Some(i), false) => i.checked_sub(1).and_then(|i| tags.get(i)),
        };
        next.map(|t| (*t).to_string())
    }

    fn reveal_focused(&mut self) {
        match self.view.layout_mode() {
            LayoutMode::Strip => {
                let strip = self.view.strip();
                let geometry = strip.geometry();
                let left = geometry.item_left(self.focused);
                let right = left + geometry.card_width;
                let shown = strip.destination()..=strip.destination() + strip.client_width();
                if !(shown.contains(&left) && shown.contains(&right)) {
                    self.view.scroll_to_item(self.focused);
                }
            }
            LayoutMode::Grid => {
                let columns = usize::from(self.grid_columns.get().max(1));
                let row = u16::try_from(self.focused / columns).unwrap_or(u16::MAX);
                let top = row.saturating_mul(CARD_HEIGHT + 1);
                self.grid_scroll.reveal(top, CARD_HEIGHT);
            }
        }
    }

    // -----------------------------------------------------------------------
    // Rendering
    // -----------------------------------------------------------------------

    fn cols(&self, px: u32) -> u16 {
        u16::try_from(self.metrics.to_cols_round(px)).unwrap_or(u16::MAX)
    }

    /// Heading row with scroll controls and the layout toggle. Returns the
    /// next free row.
    fn draw_header(&self, area: Rect, buf: &mut Buffer, hits: &HitMap) -> u16 {
        let y = area.y;
        draw_heading(buf, area, y, Icon::FolderKanban, self.title());

        let mode = self.view.layout_mode();
        let toggle_label = format!("{} view", mode.toggled().label());
        let toggle = Button::new(&toggle_label).outline();
        let mut controls: Vec<(Button<'_>, ProjectAction)> = Vec::new();
        if let Some(affordances) = self.view.scroll_affordances() {
            controls.push((
                Button::new(theme::CHEVRON_LEFT).outline().enabled(affordances.can_scroll_left),
                ProjectAction::ScrollLeft,
            ));
            controls.push((
                Button::new(theme::CHEVRON_RIGHT).outline().enabled(affordances.can_scroll_right),
                ProjectAction::ScrollRight,
            ));
        }
        controls.push((toggle, ProjectAction::ToggleLayout));

        let total: u16 = controls.iter().map(|(b, _)| b.width() + 1).sum();
        let mut x = area.right().saturating_sub(total.saturating_sub(1)).max(area.x);
        for (button, action) in controls {
            let rect = Rect::new(x, y, button.width(), 1).intersection(area);
            button.render(rect, buf);
            hits.register(rect, Hit::Project(action));
            x = x.saturating_add(button.width() + 1);
        }
        y + 2
    }

    /// Active filter chip, or the project count. Returns the next free row.
    fn draw_filter_line(&self, area: Rect, buf: &mut Buffer, hits: &HitMap, y: u16) -> u16 {
        let shown = self.view.filtered().len();
        let total = self.view.catalogue().len();
        match self.view.selected_tag() {
            Some(tag) => {
                let x = widgets::draw_text(buf, area, area.x, y, "Filtered by ", theme::muted());
                let chip_label = format!("{tag} {}", theme::DISMISS);
                let chip = Badge::new(&chip_label).with_style(theme::badge(true));
                let rect = chip.rect_at(x, y).intersection(area);
                chip.render(rect, buf);
                hits.register(rect, Hit::Project(ProjectAction::ClearTag));
                let count = format!("  {shown} of {total}");
                widgets::draw_text(buf, area, x + chip.width(), y, &count, theme::muted());
            }
            None => {
                let line = format!("All projects ({total})");
                widgets::draw_text(buf, area, area.x, y, &line, theme::muted());
            }
        }
        y + 1
    }

    /// Every tag as a clickable badge. Returns the next free row.
    fn draw_tag_bar(&self, area: Rect, buf: &mut Buffer, hits: &HitMap, y: u16) -> u16 {
        let selected = self.view.selected_tag();
        let tags: Vec<&str> = self.view.tag_universe().into_iter().collect();
        let badges: Vec<Badge<'_>> = tags
            .iter()
            .map(|&tag| Badge::new(tag).with_style(theme::badge(selected == Some(tag))))
            .collect();
        let widths: Vec<u16> = badges.iter().map(Badge::width).collect();
        let positions = widgets::flow_layout(&widths, area.width, 1);
        for ((badge, tag), (dx, row)) in badges.iter().zip(&tags).zip(&positions) {
            let rect = badge.rect_at(area.x + dx, y + row).intersection(area);
            badge.render(rect, buf);
            hits.register(rect, Hit::Project(ProjectAction::SelectTag((*tag).to_string())));
        }
        y + widgets::flow_rows(&widths, area.width, 1)
    }

    fn draw_card(
        &self,
        project: &Project,
        index: usize,
        rect: Rect,
        buf: &mut Buffer,
        hits: &HitMap,
    ) {
        hits.register(rect, Hit::Project(ProjectAction::Focus(index)));
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(theme::card_border(index == self.focused));
        let inner = block.inner(rect);
        block.render(rect, buf);
        let inner = Rect::new(inner.x + 1, inner.y, inner.width.saturating_sub(2), inner.height);
        if inner.is_empty() {
            return;
        }

        let image = match project.image() {
            Some(path) => path.rsplit('/').next().unwrap_or(path).to_string(),
            None => "no preview".to_string(),
        };
        let image = widgets::truncate_to_width(&image, inner.width.saturating_sub(2)).into_owned();
        buf.set_style(Rect::new(inner.x, inner.y, inner.width, 1), theme::image_placeholder());
        let x = inner.x + inner.width.saturating_sub(widgets::display_width(&image)) / 2;
        widgets::draw_text(buf, inner, x, inner.y, &image, theme::image_placeholder());

        let title = widgets::truncate_to_width(project.title(), inner.width);
        widgets::draw_text(buf, inner, inner.x, inner.y + 1, &title, theme::card_title());

        for (i, line) in widgets::wrap_clamped(project.description(), inner.width, DESCRIPTION_LINES)
            .iter()
            .enumerate()
        {
            widgets::draw_text(buf, inner, inner.x, inner.y + 2 + i as u16, line, theme::muted());
        }

        let selected = self.view.selected_tag();
        let badges: Vec<Badge<'_>> = project
            .tags()
            .iter()
            .map(|tag| Badge::new(tag).with_style(theme::badge(selected == Some(tag.as_str()))))
            .collect();
        let widths: Vec<u16> = badges.iter().map(Badge::width).collect();
        let positions = widgets::flow_layout(&widths, inner.width, 1);
        let tag_top = inner.y + 4;
        for ((badge, tag), (dx, row)) in badges.iter().zip(project.tags()).zip(&positions) {
            if *row >= TAG_ROWS {
                break;
            }
            let rect = badge.rect_at(inner.x + dx, tag_top + row).intersection(inner);
            badge.render(rect, buf);
            hits.register(rect, Hit::Project(ProjectAction::SelectTag(tag.clone())));
        }

        let actions_y = inner.y + 7;
        let mut x = inner.x;
        for link in project.links() {
            let button = match link.kind {
                LinkKind::Demo => Button::new(link.kind.label()),
                LinkKind::Code | LinkKind::Report => Button::new(link.kind.label()).outline(),
            };
            let left = if link.kind == LinkKind::Demo {
                inner.right().saturating_sub(button.width()).max(x)
            } else {
                x
            };
            let rect = Rect::new(left, actions_y, button.width(), 1).intersection(inner);
            button.render(rect, buf);
            hits.register(rect, Hit::Link(link.target.to_string()));
            x = left + button.width() + 1;
        }
    }

    fn draw_strip(&self, area: Rect, buf: &mut Buffer, hits: &HitMap) {
        let strip = self.view.strip();
        let geometry = strip.geometry();
        let projects = self.view.filtered();
        let card_cols = self.cols(geometry.card_width);
        let content_cols = self.cols(strip.scroll_width()).saturating_add(card_cols);
        let height = CARD_HEIGHT.min(area.height);
        let viewport = Rect::new(area.x, area.y, area.width, height);

        let canvas = Rect::new(0, 0, content_cols, CARD_HEIGHT);
        let mut scratch = Buffer::empty(canvas);
        let local = HitMap::new();
        for index in strip.visible_range() {
            let Some(project) = projects.get(index) else {
                continue;
            };
            let x = self.cols(geometry.item_left(index));
            let rect = Rect::new(x, 0, card_cols, CARD_HEIGHT).intersection(canvas);
            self.draw_card(project, index, rect, &mut scratch, &local);
        }

        hits.register(viewport, Hit::Strip);
        let offset = self.cols(strip.offset());
        widgets::blit(&scratch, offset, 0, buf, viewport);
        hits.absorb_scrolled(local, offset, 0, viewport);

        let hint_y = area.y + height + 1;
        if hint_y < area.bottom() {
            let hint = format!("{} {HINT} {}", theme::CHEVRON_LEFT, theme::CHEVRON_RIGHT);
            let x = area.x + area.width.saturating_sub(widgets::display_width(&hint)) / 2;
            widgets::draw_text(buf, area, x, hint_y, &hint, theme::muted());
        }
    }

    fn draw_grid(&self, area: Rect, buf: &mut Buffer, hits: &HitMap) {
        let card_cols = self.cols(self.view.strip().geometry().card_width).max(1);
        let gap = theme::spacing::XS;
        let columns = ((area.width + gap) / (card_cols + gap)).max(1);
        self.grid_columns.set(columns);
        let width = area.width.saturating_sub((columns - 1) * gap) / columns;
        let projects = self.view.filtered();

        render_scrolled(&self.grid_scroll, area, buf, hits, |canvas, scratch, local| {
            let mut used = 0;
            for (index, project) in projects.iter().enumerate() {
                let column = (index % usize::from(columns)) as u16;
                let row = u16::try_from(index / usize::from(columns)).unwrap_or(u16::MAX);
                let top = row.saturating_mul(CARD_HEIGHT + 1);
                let rect = Rect::new(canvas.x + column * (width + gap), canvas.y + top, width, CARD_HEIGHT)
                    .intersection(canvas);
                self.draw_card(project, index, rect, scratch, local);
                used = top + CARD_HEIGHT;
            }
            used
        });
    }

    fn draw_empty_state(&self, area: Rect, buf: &mut Buffer, hits: &HitMap) {
        if area.height < 3 {
            return;
        }
        let top = area.y + area.height.saturating_sub(5) / 2;
        let center = |text: &str| area.x + area.width.saturating_sub(widgets::display_width(text)) / 2;

        widgets::draw_text(buf, area, center(EMPTY_TITLE), top, EMPTY_TITLE, theme::heading());
        if let Some(tag) = self.view.selected_tag() {
            let reason = format!("Nothing is tagged \"{tag}\".");
            widgets::draw_text(buf, area, center(&reason), top + 1, &reason, theme::muted());
        }
        let button = Button::new(SHOW_ALL);
        let rect = Rect::new(center(SHOW_ALL).saturating_sub(1), top + 3, button.width(), 1)
            .intersection(area);
        button.render(rect, buf);
        hits.register(rect, Hit::Project(ProjectAction::ClearTag));
    }
}

impl Section for Projects {
    fn id(&self) -> SectionId {
        SectionId::Projects
    }

    fn title(&self) -> &'static str {
        "Personal Projects"
    }

    fn update(&mut self, event: &Event) -> Cmd<AppMsg> {
        match event {
            Event::Key(key) if key.is_press() => {
                let action = match key.code {
                    KeyCode::Left | KeyCode::Char('h') => ProjectAction::ScrollLeft,
                    KeyCode::Right | KeyCode::Char('l') => ProjectAction::ScrollRight,
                    KeyCode::Char('g') => ProjectAction::ToggleLayout,
                    KeyCode::Char('t') => ProjectAction::NextTag,
                    KeyCode::Char('T') => ProjectAction::PrevTag,
                    KeyCode::Char('x') | KeyCode::Backspace => ProjectAction::ClearTag,
                    KeyCode::Char(']') => ProjectAction::FocusNext,
                    KeyCode::Char('[') => ProjectAction::FocusPrev,
                    KeyCode::Char('c') => ProjectAction::Open(LinkKind::Code),
                    KeyCode::Char('p') => ProjectAction::Open(LinkKind::Report),
                    KeyCode::Char('o') => ProjectAction::Open(LinkKind::Demo),
                    _ => {
                        if self.view.layout_mode() == LayoutMode::Grid {
                            self.grid_scroll.handle_key(key);
                        }
                        return Cmd::none();
                    }
                };
                self.apply(action)
            }
            Event::Mouse(mouse) if self.view.layout_mode() == LayoutMode::Grid => {
                match mouse.kind {
                    MouseEventKind::ScrollUp => {
                        self.grid_scroll.scroll_by(-WHEEL_ROWS);
                    }
                    MouseEventKind::ScrollDown => {
                        self.grid_scroll.scroll_by(WHEEL_ROWS);
                    }
                    _ => {}
                }
                Cmd::none()
            }
            _ => Cmd::none(),
        }
    }

    fn view(&self, area: Rect, buf: &mut Buffer, hits: &HitMap) {
        if area.is_empty() {
            return;
        }
        let mut y = self.draw_header(area, buf, hits);
        y = self.draw_filter_line(area, buf, hits, y);
        y = self.draw_tag_bar(area, buf, hits, y + 1) + 1;
        if y >= area.bottom() {
            return;
        }
        let body = Rect::new(area.x, y, area.width, area.bottom() - y);

        if self.view.is_empty_result() {
            self.draw_empty_state(body, buf, hits);
            return;
        }
        match self.view.layout_mode() {
            LayoutMode::Strip => self.draw_strip(body, buf, hits),
            LayoutMode::Grid => self.draw_grid(body, buf, hits),
        }
    }

    fn keybindings(&self) -> Vec<HelpEntry> {
        vec![
            HelpEntry {
                key: "←/→ h/l",
                action: "Scroll the strip",
            },
            HelpEntry {
                key: "g",
                action: "Toggle strip / grid",
            },
            HelpEntry {
                key: "t / T",
                action: "Next / previous tag",
            },
            HelpEntry {
                key: "x / Bksp",
                action: "Show all projects",
            },
            HelpEntry {
                key: "[ / ]",
                action: "Focus previous / next card",
            },
            HelpEntry {
                key: "c / p / o",
                action: "Open code / PDF / demo",
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_runtime::buffer_to_text;

    const METRICS: CellMetrics = CellMetrics::new(8);

    /// 128 columns at 8 px: a 1024 px viewport with a 100 column strip.
    fn mounted(tag: Option<&str>) -> Projects {
        let mut projects = Projects::new(METRICS, tag);
        projects.on_resize(1024, METRICS.to_px(100));
        projects
    }

    fn render(projects: &Projects, width: u16, height: u16) -> (String, HitMap) {
        let area = Rect::new(0, 0, width, height);
        let mut buf = Buffer::empty(area);
        let hits = HitMap::new();
        projects.view(area, &mut buf, &hits);
        (buffer_to_text(&buf), hits)
    }

    fn settle(projects: &mut Projects) {
        for _ in 0..200 {
            if !projects.view_state().is_animating() {
                break;
            }
            projects.on_tick();
        }
    }

    #[test]
    fn strip_mode_shows_controls_and_hint() {
        let projects = mounted(None);
        assert_eq!(projects.view_state().layout_mode(), LayoutMode::Strip);
        let (text, _) = render(&projects, 100, 30);
        assert!(text.contains("Personal Projects"));
        assert!(text.contains("All projects (9)"));
        assert!(text.contains(HINT));
        assert!(text.contains("Grid view"));
        assert!(text.contains(theme::CHEVRON_RIGHT));
    }

    #[test]
    fn scroll_right_requests_frames_until_settled() {
        let mut projects = mounted(None);
        let cmd = projects.apply(ProjectAction::ScrollRight);
        assert!(matches!(cmd, Cmd::Tick(d) if d == FRAME));
        settle(&mut projects);
        let strip = projects.view_state().strip();
        assert!(strip.offset() > 0);
        assert!(projects.view_state().scroll_affordances().unwrap_or_default().can_scroll_left);
        assert!(projects.on_tick().is_none());
    }

    #[test]
    fn disabled_left_control_is_noop() {
        let mut projects = mounted(None);
        assert!(projects.apply(ProjectAction::ScrollLeft).is_none());
        assert_eq!(projects.view_state().strip().offset(), 0);
    }

    #[test]
    fn tag_click_filters_and_resets_focus() {
        let mut projects = mounted(None);
        projects.apply(ProjectAction::Focus(3));
        assert_eq!(projects.focused(), 3);
        projects.apply(ProjectAction::SelectTag("C++".into()));
        assert_eq!(projects.view_state().filtered().len(), 2);
        assert_eq!(projects.focused(), 0);
        let (text, _) = render(&projects, 100, 30);
        assert!(text.contains("Filtered by"));
        assert!(text.contains("2 of 9"));
    }

    #[test]
    fn tag_badges_are_clickable() {
        let projects = mounted(None);
        let (_, hits) = render(&projects, 100, 30);
        let rust = Hit::Project(ProjectAction::SelectTag("Rust".into()));
        let found = (0..30u16).any(|y| (0..100u16).any(|x| hits.hit_test(x, y) == Some(rust.clone())));
        assert!(found);
    }

    #[test]
    fn empty_state_offers_show_all() {
        let mut projects = mounted(Some("rust"));
        assert!(projects.view_state().is_empty_result());
        let (text, hits) = render(&projects, 100, 30);
        assert!(text.contains(EMPTY_TITLE));
        assert!(text.contains(SHOW_ALL));
        assert!(!text.contains(HINT));

        let clear = Hit::Project(ProjectAction::ClearTag);
        let found = (0..30u16).any(|y| (0..100u16).any(|x| hits.hit_test(x, y) == Some(clear.clone())));
        assert!(found);
        projects.apply(ProjectAction::ClearTag);
        assert!(!projects.view_state().is_empty_result());
    }

    #[test]
    fn tag_cycle_wraps_through_all() {
        let mut projects = mounted(None);
        let first = projects.view_state().tag_universe().into_iter().next().map(str::to_string);
        projects.apply(ProjectAction::NextTag);
        assert_eq!(projects.view_state().selected_tag().map(str::to_string), first);
        projects.apply(ProjectAction::PrevTag);
        assert_eq!(projects.view_state().selected_tag(), None);
        projects.apply(ProjectAction::PrevTag);
        let last = projects.view_state().tag_universe().into_iter().last().map(str::to_string);
        assert_eq!(projects.view_state().selected_tag().map(str::to_string), last);
    }

    #[test]
    fn grid_mode_hides_strip_controls() {
        let mut projects = Projects::new(METRICS, None);
        projects.on_resize(600, 600);
        assert_eq!(projects.view_state().layout_mode(), LayoutMode::Grid);
        let (text, _) = render(&projects, 70, 40);
        assert!(text.contains("Strip view"));
        assert!(!text.contains(HINT));
        assert!(!text.contains(theme::CHEVRON_LEFT));
    }

    #[test]
    fn focusing_offscreen_card_scrolls_strip() {
        let mut projects = mounted(None);
        let cmd = projects.apply(ProjectAction::Focus(8));
        assert!(matches!(cmd, Cmd::Tick(_)));
        settle(&mut projects);
        let strip = projects.view_state().strip();
        assert_eq!(strip.offset(), strip.max_offset());
    }

    #[test]
    fn open_uses_focused_card_links() {
        let mut projects = mounted(Some("Rust"));
        let first = projects.focused_project().map(Project::title);
        assert_eq!(first, Some("Visualizing RC car in Mixed Reality"));
        let cmd = projects.apply(ProjectAction::Open(LinkKind::Report));
        assert!(matches!(cmd, Cmd::Msg(AppMsg::OpenLink(ref t)) if t.ends_with(".pdf")));
    }

    #[test]
    fn resize_overrides_manual_layout() {
        let mut projects = mounted(None);
        projects.apply(ProjectAction::ToggleLayout);
        assert_eq!(projects.view_state().layout_mode(), LayoutMode::Grid);
        projects.on_resize(1024, METRICS.to_px(100));
        assert_eq!(projects.view_state().layout_mode(), LayoutMode::Strip);
    }
}
