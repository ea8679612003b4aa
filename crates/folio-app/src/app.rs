#![forbid(unsafe_code)]

//! Main application model, message routing, and section navigation.
//!
//! This module contains the top-level [`AppModel`] that implements the Elm
//! architecture via [`Model`]. It owns one value per page section, the
//! sidebar state, and the hit regions of the last frame.
//!
//! Input is routed in this order: the help overlay swallows keys while shown,
//! global bindings come next, and everything else goes to the current
//! section. Clicks are resolved against the regions registered by the last
//! render.

use folio_core::event::{Event, KeyCode, MouseButton, MouseEventKind};
use folio_core::geometry::CellMetrics;
use folio_core::nav::{SectionId, Sidebar};
use folio_core::profile::IDENTITY;
use folio_core::scroll::ScrollDirection;
use folio_core::view::LayoutMode;
use folio_runtime::{Cmd, Model};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use std::time::Duration;
use tracing::{debug, info};

use crate::chrome::{self, HelpEntry, StatusBarState};
use crate::cli::Opts;
use crate::hits::{Hit, HitMap};
use crate::links::resolve_link;
use crate::sections::about::About;
use crate::sections::education::Education;
use crate::sections::experience::Experience;
use crate::sections::hobbies::Hobbies;
use crate::sections::home::Home;
use crate::sections::projects::{ProjectAction, Projects};
use crate::sections::Section;

// ---------------------------------------------------------------------------
// AppMsg
// ---------------------------------------------------------------------------

/// Top-level application message.
#[derive(Debug)]
pub enum AppMsg {
    /// A raw terminal event, routed by the app.
    Event(Event),
    /// Terminal resize (also the first measurement on mount).
    Resize {
        /// New terminal width.
        width: u16,
        /// New terminal height.
        height: u16,
    },
    /// Animation frame.
    Tick,
    /// Show a section. Closes the mobile sidebar.
    Navigate(SectionId),
    NextSection,
    PrevSection,
    /// Mobile menu button.
    ToggleSidebar,
    CloseSidebar,
    ToggleHelp,
    /// Open a link target, relative or absolute.
    OpenLink(String),
    /// Open the résumé.
    Download,
    Project(ProjectAction),
    Quit,
}

impl From<Event> for AppMsg {
    fn from(event: Event) -> Self {
        match event {
            Event::Resize { width, height } => Self::Resize { width, height },
            Event::Tick => Self::Tick,
            other => Self::Event(other),
        }
    }
}

/// Message for a click on `hit`. The strip region only routes the wheel.
fn click_message(hit: Hit) -> Option<AppMsg> {
    match hit {
        Hit::Nav(id) => Some(AppMsg::Navigate(id)),
        Hit::Menu => Some(AppMsg::ToggleSidebar),
        Hit::CloseSidebar => Some(AppMsg::CloseSidebar),
        Hit::Download => Some(AppMsg::Download),
        Hit::Link(target) => Some(AppMsg::OpenLink(target)),
        Hit::Project(action) => Some(AppMsg::Project(action)),
        Hit::Strip => None,
    }
}

// ---------------------------------------------------------------------------
// AppModel
// ---------------------------------------------------------------------------

/// Top-level application state.
#[derive(Debug)]
pub struct AppModel {
    metrics: CellMetrics,
    sidebar: Sidebar,
    current: SectionId,
    home: Home,
    about: About,
    education: Education,
    experience: Experience,
    projects: Projects,
    hobbies: Hobbies,
    help_visible: bool,
    /// Last link opened, shown in the status bar.
    status: Option<String>,
    asset_base: String,
    /// Auto-exit after this many milliseconds (0 = disabled).
    exit_after_ms: u64,
    terminal_width: u16,
    terminal_height: u16,
    /// Clickable regions of the last frame.
    hits: HitMap,
}

impl Default for AppModel {
    fn default() -> Self {
        Self::new(&Opts::default())
    }
}

impl AppModel {
    pub fn new(opts: &Opts) -> Self {
        let metrics = CellMetrics::new(opts.cell_width);
        Self {
            metrics,
            // Real widths arrive with the mount measurement.
            sidebar: Sidebar::new(0),
            current: opts.section,
            home: Home::new(),
            about: About::new(),
            education: Education::new(),
            experience: Experience::new(),
            projects: Projects::new(metrics, opts.tag.as_deref()),
            hobbies: Hobbies::new(),
            help_visible: false,
            status: None,
            asset_base: opts.asset_base.clone(),
            exit_after_ms: opts.exit_after_ms,
            terminal_width: 0,
            terminal_height: 0,
            hits: HitMap::new(),
        }
    }

    pub fn current_section(&self) -> SectionId {
        self.current
    }

    pub fn sidebar(&self) -> &Sidebar {
        &self.sidebar
    }

    pub fn projects(&self) -> &Projects {
        &self.projects
    }

    pub fn help_visible(&self) -> bool {
        self.help_visible
    }

    pub fn status_message(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn terminal_size(&self) -> (u16, u16) {
        (self.terminal_width, self.terminal_height)
    }

    /// What a click at `(x, y)` would hit in the last frame.
    pub fn hit_test(&self, x: u16, y: u16) -> Option<Hit> {
        self.hits.hit_test(x, y)
    }

    fn section(&self) -> &dyn Section {
        match self.current {
            SectionId::Home => &self.home,
            SectionId::About => &self.about,
            SectionId::Education => &self.education,
            SectionId::Experience => &self.experience,
            SectionId::Projects => &self.projects,
            SectionId::Hobbies => &self.hobbies,
        }
    }

    fn section_mut(&mut self) -> &mut dyn Section {
        match self.current {
            SectionId::Home => &mut self.home,
            SectionId::About => &mut self.about,
            SectionId::Education => &mut self.education,
            SectionId::Experience => &mut self.experience,
            SectionId::Projects => &mut self.projects,
            SectionId::Hobbies => &mut self.hobbies,
        }
    }

    fn area(&self) -> Rect {
        Rect::new(0, 0, self.terminal_width, self.terminal_height)
    }

    fn handle_msg(&mut self, msg: AppMsg) -> Cmd<AppMsg> {
        match msg {
            AppMsg::Quit => Cmd::quit(),

            AppMsg::Resize { width, height } => {
                self.terminal_width = width;
                self.terminal_height = height;
                let viewport_px = self.metrics.to_px(width);
                self.sidebar.on_viewport_resize(viewport_px);
                let layout = chrome::layout(self.area(), self.metrics, &self.sidebar);
                self.projects
                    .on_resize(viewport_px, self.metrics.to_px(layout.content.width));
                debug!(
                    width,
                    height,
                    viewport_px,
                    mobile = self.sidebar.is_mobile(),
                    "terminal resized"
                );
                Cmd::none()
            }

            AppMsg::Tick => self.projects.on_tick(),

            AppMsg::Navigate(id) => {
                let from = self.current;
                self.current = id;
                self.sidebar.on_nav_link_click();
                debug!(from = from.anchor(), to = id.anchor(), "navigate");
                Cmd::none()
            }
            AppMsg::NextSection => self.handle_msg(AppMsg::Navigate(self.current.next())),
            AppMsg::PrevSection => self.handle_msg(AppMsg::Navigate(self.current.prev())),

            AppMsg::ToggleSidebar => {
                self.sidebar.toggle();
                Cmd::none()
            }
            AppMsg::CloseSidebar => {
                self.sidebar.close();
                Cmd::none()
            }
            AppMsg::ToggleHelp => {
                self.help_visible = !self.help_visible;
                Cmd::none()
            }

            AppMsg::OpenLink(target) => {
                let url = resolve_link(&self.asset_base, &target);
                info!(%url, "open link");
                self.status = Some(format!("Open {url}"));
                Cmd::log(format!("open {url}"))
            }
            AppMsg::Download => self.handle_msg(AppMsg::OpenLink(IDENTITY.cv_path.to_string())),

            AppMsg::Project(action) => self.projects.apply(action),

            AppMsg::Event(event) => self.handle_event(event),
        }
    }

    fn handle_event(&mut self, event: Event) -> Cmd<AppMsg> {
        match event {
            Event::Resize { width, height } => self.handle_msg(AppMsg::Resize { width, height }),
            Event::Tick => self.handle_msg(AppMsg::Tick),
            Event::Key(key) if key.is_press() => {
                if self.help_visible {
                    return match key.code {
                        KeyCode::Escape | KeyCode::Char('?') => self.handle_msg(AppMsg::ToggleHelp),
                        KeyCode::Char('q') => Cmd::quit(),
                        _ => Cmd::none(),
                    };
                }
                let global = match key.code {
                    KeyCode::Char('c') if key.ctrl() => Some(AppMsg::Quit),
                    KeyCode::Char('q') => Some(AppMsg::Quit),
                    KeyCode::Tab => Some(AppMsg::NextSection),
                    KeyCode::BackTab => Some(AppMsg::PrevSection),
                    KeyCode::Char(c @ '1'..='6') => c
                        .to_digit(10)
                        .and_then(|n| SectionId::from_index(n as usize - 1))
                        .map(AppMsg::Navigate),
                    KeyCode::Char('m') => Some(AppMsg::ToggleSidebar),
                    KeyCode::Char('?') => Some(AppMsg::ToggleHelp),
                    KeyCode::Char('d') => Some(AppMsg::Download),
                    KeyCode::Escape if self.sidebar.is_open() => Some(AppMsg::CloseSidebar),
                    _ => None,
                };
                match global {
                    Some(msg) => self.handle_msg(msg),
                    None => self.section_mut().update(&Event::Key(key)),
                }
            }
            Event::Key(_) => Cmd::none(),
            Event::Mouse(mouse) => match mouse.kind {
                MouseEventKind::Down(MouseButton::Left) => {
                    if self.help_visible {
                        return self.handle_msg(AppMsg::ToggleHelp);
                    }
                    match self.hits.hit_test(mouse.x, mouse.y).and_then(click_message) {
                        Some(msg) => self.handle_msg(msg),
                        None => Cmd::none(),
                    }
                }
                MouseEventKind::ScrollUp
                | MouseEventKind::ScrollDown
                | MouseEventKind::ScrollLeft
                | MouseEventKind::ScrollRight => {
                    if self.over_strip(mouse.x, mouse.y) {
                        let direction = match mouse.kind {
                            MouseEventKind::ScrollUp | MouseEventKind::ScrollLeft => ScrollDirection::Left,
                            _ => ScrollDirection::Right,
                        };
                        self.projects.wheel(direction)
                    } else {
                        self.section_mut().update(&Event::Mouse(mouse))
                    }
                }
                _ => Cmd::none(),
            },
        }
    }

    /// Wheel over the horizontal strip scrolls it instead of the page.
    fn over_strip(&self, x: u16, y: u16) -> bool {
        !self.help_visible
            && self.current == SectionId::Projects
            && self.projects.view_state().layout_mode() == LayoutMode::Strip
            && self.hits.contains_hit(x, y, &Hit::Strip)
    }

    fn keybindings(&self) -> Vec<HelpEntry> {
        self.section().keybindings()
    }
}

impl Model for AppModel {
    type Message = AppMsg;

    fn init(&mut self) -> Cmd<Self::Message> {
        if self.exit_after_ms > 0 {
            let ms = self.exit_after_ms;
            Cmd::task(move || {
                std::thread::sleep(Duration::from_millis(ms));
                AppMsg::Quit
            })
        } else {
            Cmd::none()
        }
    }

    fn update(&mut self, msg: Self::Message) -> Cmd<Self::Message> {
        self.handle_msg(msg)
    }

    fn view(&self, area: Rect, buf: &mut Buffer) {
        self.hits.clear();
        chrome::render_background(area, buf);
        let layout = chrome::layout(area, self.metrics, &self.sidebar);

        let section = self.section();
        section.view(layout.content, buf, &self.hits);
        chrome::render_footer(layout.footer, buf, &self.hits);

        if let Some(menu_bar) = layout.menu_bar {
            chrome::render_menu_bar(menu_bar, buf, &self.hits);
        }
        if let Some(sidebar_area) = layout.sidebar {
            let mobile = self.sidebar.is_mobile();
            if mobile {
                // Backdrop: any click outside the overlay closes it.
                self.hits.register(layout.body, Hit::CloseSidebar);
            }
            chrome::render_sidebar(self.current, mobile, sidebar_area, buf, &self.hits);
        }

        let layout_mode = (self.current == SectionId::Projects)
            .then(|| self.projects.view_state().layout_mode());
        let status = StatusBarState {
            section: self.current,
            section_title: section.title(),
            layout_mode,
            selected_tag: self.projects.view_state().selected_tag(),
            message: self.status.as_deref(),
            terminal_width: area.width,
            terminal_height: area.height,
        };
        chrome::render_status_bar(&status, layout.status, buf);

        if self.help_visible {
            chrome::render_help_overlay(section.title(), &self.keybindings(), area, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::event::{KeyEvent, Modifiers};

    fn mounted(width: u16) -> AppModel {
        let mut app = AppModel::default();
        let _ = app.init();
        let _ = app.update(AppMsg::Resize { width, height: 40 });
        app
    }

    fn press(app: &mut AppModel, code: KeyCode) -> Cmd<AppMsg> {
        app.update(Event::key(code).into())
    }

    #[test]
    fn events_convert_to_messages() {
        assert!(matches!(
            AppMsg::from(Event::Resize { width: 3, height: 4 }),
            AppMsg::Resize { width: 3, height: 4 }
        ));
        assert!(matches!(AppMsg::from(Event::Tick), AppMsg::Tick));
        assert!(matches!(AppMsg::from(Event::key(KeyCode::Enter)), AppMsg::Event(_)));
    }

    #[test]
    fn number_keys_and_tab_navigate() {
        let mut app = mounted(128);
        press(&mut app, KeyCode::Char('5'));
        assert_eq!(app.current_section(), SectionId::Projects);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.current_section(), SectionId::Hobbies);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.current_section(), SectionId::Home);
        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.current_section(), SectionId::Hobbies);
        press(&mut app, KeyCode::Char('7'));
        assert_eq!(app.current_section(), SectionId::Hobbies);
    }

    #[test]
    fn quit_keys() {
        let mut app = mounted(128);
        assert!(matches!(press(&mut app, KeyCode::Char('q')), Cmd::Quit));
        let ctrl_c = KeyEvent::new(KeyCode::Char('c')).with_modifiers(Modifiers::CTRL);
        assert!(matches!(app.update(AppMsg::Event(Event::Key(ctrl_c))), Cmd::Quit));
    }

    #[test]
    fn help_swallows_section_keys() {
        let mut app = mounted(128);
        press(&mut app, KeyCode::Char('5'));
        press(&mut app, KeyCode::Char('?'));
        assert!(app.help_visible());
        let before = app.projects().view_state().layout_mode();
        press(&mut app, KeyCode::Char('g'));
        assert_eq!(app.projects().view_state().layout_mode(), before);
        press(&mut app, KeyCode::Escape);
        assert!(!app.help_visible());
    }

    #[test]
    fn resize_drives_breakpoints() {
        let mut app = mounted(128);
        assert!(!app.sidebar().is_mobile());
        assert_eq!(app.projects().view_state().layout_mode(), LayoutMode::Strip);
        let _ = app.update(AppMsg::Resize { width: 70, height: 40 });
        assert!(app.sidebar().is_mobile());
        assert_eq!(app.projects().view_state().layout_mode(), LayoutMode::Grid);
        assert_eq!(app.terminal_size(), (70, 40));
    }

    #[test]
    fn menu_key_toggles_only_on_mobile() {
        let mut app = mounted(128);
        press(&mut app, KeyCode::Char('m'));
        assert!(!app.sidebar().is_open());

        let _ = app.update(AppMsg::Resize { width: 70, height: 40 });
        press(&mut app, KeyCode::Char('m'));
        assert!(app.sidebar().is_open());
        press(&mut app, KeyCode::Escape);
        assert!(!app.sidebar().is_open());

        press(&mut app, KeyCode::Char('m'));
        let _ = app.update(AppMsg::Navigate(SectionId::Experience));
        assert!(!app.sidebar().is_open());
    }

    #[test]
    fn download_resolves_cv_against_asset_base() {
        let mut app = mounted(128);
        let cmd = press(&mut app, KeyCode::Char('d'));
        assert!(matches!(cmd, Cmd::Log(ref line) if line == "open https://rasmushogslatt.com/reports/CV.pdf"));
        assert_eq!(
            app.status_message(),
            Some("Open https://rasmushogslatt.com/reports/CV.pdf")
        );
    }

    #[test]
    fn absolute_links_open_unchanged() {
        let mut app = mounted(128);
        let _ = app.update(AppMsg::OpenLink("https://github.com/x".into()));
        assert_eq!(app.status_message(), Some("Open https://github.com/x"));
    }

    #[test]
    fn view_registers_sidebar_regions() {
        let app = mounted(128);
        let mut buf = Buffer::empty(Rect::new(0, 0, 128, 40));
        app.view(buf.area, &mut buf);
        assert_eq!(app.hit_test(2, 1), Some(Hit::Nav(SectionId::Home)));
        assert_eq!(app.hit_test(2, 37), Some(Hit::Download));
    }

    #[test]
    fn exit_after_ms_schedules_quit_task() {
        let opts = Opts {
            exit_after_ms: 5,
            ..Opts::default()
        };
        let mut app = AppModel::new(&opts);
        assert!(matches!(app.init(), Cmd::Task(_)));
        assert!(AppModel::default().init().is_none());
    }
}
