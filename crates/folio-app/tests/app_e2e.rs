#![forbid(unsafe_code)]

//! End-to-end flows through the simulator: breakpoints, tag filtering, the
//! mobile sidebar, strip scrolling, and link opening.

use folio_app::app::{AppModel, AppMsg};
use folio_app::cli::Opts;
use folio_app::sections::projects::ProjectAction;
use folio_core::event::{Event, KeyCode, MouseEvent, MouseEventKind};
use folio_core::nav::SectionId;
use folio_core::view::LayoutMode;
use folio_runtime::ProgramSimulator;
use unicode_width::UnicodeWidthStr;

const W: u16 = 128;
const H: u16 = 40;
const NARROW: u16 = 70;

fn sim_with(opts: Opts, width: u16) -> ProgramSimulator<AppModel> {
    let mut sim = ProgramSimulator::new(AppModel::new(&opts));
    sim.mount(width, H);
    sim
}

fn sim(width: u16) -> ProgramSimulator<AppModel> {
    sim_with(Opts::default(), width)
}

fn projects_sim() -> ProgramSimulator<AppModel> {
    sim_with(
        Opts {
            section: SectionId::Projects,
            ..Opts::default()
        },
        W,
    )
}

/// First cell showing `needle` at a position accepted by `accept`.
fn find_where(text: &str, needle: &str, accept: impl Fn(u16, u16) -> bool) -> Option<(u16, u16)> {
    text.lines().enumerate().find_map(|(y, line)| {
        let y = u16::try_from(y).ok()?;
        line.match_indices(needle).find_map(|(byte, _)| {
            let x = u16::try_from(line[..byte].width()).ok()?;
            accept(x, y).then_some((x, y))
        })
    })
}

fn find(text: &str, needle: &str) -> (u16, u16) {
    find_where(text, needle, |_, _| true).unwrap_or_else(|| panic!("{needle:?} not rendered:\n{text}"))
}

fn click_text(sim: &mut ProgramSimulator<AppModel>, width: u16, needle: &str) {
    let text = sim.render_text(width, H);
    let (x, y) = find(&text, needle);
    sim.inject_event(Event::click(x, y));
}

fn press(sim: &mut ProgramSimulator<AppModel>, code: KeyCode) {
    sim.inject_event(Event::key(code));
}

// ---------------------------------------------------------------------------
// Layout mode
// ---------------------------------------------------------------------------

#[test]
fn crossing_the_breakpoint_switches_layout() {
    let mut sim = projects_sim();
    assert_eq!(sim.model().projects().view_state().layout_mode(), LayoutMode::Strip);
    let text = sim.render_text(W, H);
    assert!(text.contains("Scroll to see more projects"));
    assert!(text.contains("Grid view"));

    sim.inject_event(Event::Resize { width: NARROW, height: H });
    assert_eq!(sim.model().projects().view_state().layout_mode(), LayoutMode::Grid);
    let text = sim.render_text(NARROW, H);
    assert!(!text.contains("Scroll to see more projects"));
    assert!(text.contains("Strip view"));
    assert!(text.contains("Menu"));
}

#[test]
fn resize_overrides_manual_layout_choice() {
    let mut sim = projects_sim();
    press(&mut sim, KeyCode::Char('g'));
    assert_eq!(sim.model().projects().view_state().layout_mode(), LayoutMode::Grid);

    sim.inject_event(Event::Resize { width: W + 2, height: H });
    assert_eq!(sim.model().projects().view_state().layout_mode(), LayoutMode::Strip);
}

#[test]
fn exact_breakpoint_width_is_strip() {
    // 96 columns at 8px is 768px.
    let mut sim = projects_sim();
    sim.inject_event(Event::Resize { width: 96, height: H });
    assert_eq!(sim.model().projects().view_state().layout_mode(), LayoutMode::Strip);
    sim.inject_event(Event::Resize { width: 95, height: H });
    assert_eq!(sim.model().projects().view_state().layout_mode(), LayoutMode::Grid);
}

// ---------------------------------------------------------------------------
// Tag filter
// ---------------------------------------------------------------------------

#[test]
fn clicking_a_tag_filters_and_the_chip_clears() {
    let mut sim = projects_sim();
    click_text(&mut sim, W, "Threading");
    let view = sim.model().projects().view_state();
    assert_eq!(view.selected_tag(), Some("Threading"));
    assert!(view.filtered().iter().all(|p| p.tags().iter().any(|t| t == "Threading")));

    let text = sim.render_text(W, H);
    assert!(text.contains("Filtered by"));
    assert!(text.contains("tag: Threading"));

    // The chip is on the filter line, above the tag bar.
    click_text(&mut sim, W, "Threading");
    assert_eq!(sim.model().projects().view_state().selected_tag(), None);
    assert!(sim.render_text(W, H).contains("All projects (9)"));
}

#[test]
fn selecting_the_same_tag_twice_keeps_it() {
    let mut sim = projects_sim();
    sim.send(AppMsg::Project(ProjectAction::SelectTag("Rust".into())));
    let first: Vec<String> = sim
        .model()
        .projects()
        .view_state()
        .filtered()
        .iter()
        .map(|p| p.title().to_string())
        .collect();
    // Click the badge in the tag bar, below the filter line.
    let text = sim.render_text(W, H);
    let (x, y) = find_where(&text, "Rust", |x, y| x >= 32 && y >= 5).expect("tag bar badge");
    sim.inject_event(Event::click(x, y));
    let view = sim.model().projects().view_state();
    assert_eq!(view.selected_tag(), Some("Rust"));
    let second: Vec<String> = view.filtered().iter().map(|p| p.title().to_string()).collect();
    assert_eq!(first, second);
}

#[test]
fn tag_keys_cycle_through_all() {
    let mut sim = projects_sim();
    let first = sim
        .model()
        .projects()
        .view_state()
        .tag_universe()
        .into_iter()
        .next()
        .map(str::to_string);
    press(&mut sim, KeyCode::Char('t'));
    assert_eq!(sim.model().projects().view_state().selected_tag(), first.as_deref());
    press(&mut sim, KeyCode::Char('T'));
    assert_eq!(sim.model().projects().view_state().selected_tag(), None);
    press(&mut sim, KeyCode::Char('t'));
    press(&mut sim, KeyCode::Char('x'));
    assert_eq!(sim.model().projects().view_state().selected_tag(), None);
}

#[test]
fn unknown_initial_tag_shows_empty_state() {
    let opts = Opts {
        section: SectionId::Projects,
        tag: Some("COBOL".into()),
        ..Opts::default()
    };
    let mut sim = sim_with(opts, W);
    assert!(sim.model().projects().view_state().is_empty_result());
    let text = sim.render_text(W, H);
    assert!(text.contains("No projects found"));
    assert!(text.contains("Nothing is tagged \"COBOL\"."));
    assert!(!text.contains("Scroll to see more projects"));

    click_text(&mut sim, W, "Show all projects");
    let view = sim.model().projects().view_state();
    assert_eq!(view.selected_tag(), None);
    assert_eq!(view.filtered().len(), 9);
}

// ---------------------------------------------------------------------------
// Strip scrolling
// ---------------------------------------------------------------------------

#[test]
fn scroll_buttons_animate_until_settled() {
    let mut sim = projects_sim();
    let affordances = sim.model().projects().view_state().scroll_affordances();
    let affordances = affordances.expect("strip mode reports affordances");
    assert!(!affordances.can_scroll_left);
    assert!(affordances.can_scroll_right);

    click_text(&mut sim, W, "›");
    assert!(sim.pending_tick().is_some());
    let frames = sim.settle(500);
    assert!(frames > 1);

    let view = sim.model().projects().view_state();
    assert!(!view.is_animating());
    assert!(view.strip().offset() > 0);
    assert!(view.scroll_affordances().is_some_and(|a| a.can_scroll_left));
}

#[test]
fn right_arrow_scrolls_and_left_returns() {
    let mut sim = projects_sim();
    press(&mut sim, KeyCode::Right);
    sim.settle(500);
    assert!(sim.model().projects().view_state().strip().offset() > 0);
    press(&mut sim, KeyCode::Left);
    sim.settle(500);
    assert_eq!(sim.model().projects().view_state().strip().offset(), 0);
}

#[test]
fn wheel_over_strip_scrolls_horizontally() {
    let mut sim = projects_sim();
    let text = sim.render_text(W, H);
    let (x, y) = find(&text, "Visualizing RC car");
    sim.inject_event(Event::Mouse(MouseEvent::new(MouseEventKind::ScrollDown, x, y)));
    assert!(sim.model().projects().view_state().strip().offset() > 0);
    sim.inject_event(Event::Mouse(MouseEvent::new(MouseEventKind::ScrollUp, x, y)));
    assert_eq!(sim.model().projects().view_state().strip().offset(), 0);
}

#[test]
fn card_code_button_opens_repository() {
    let mut sim = projects_sim();
    click_text(&mut sim, W, "Code");
    assert_eq!(
        sim.model().status_message(),
        Some("Open https://github.com/yourusername/project-one")
    );
    assert!(sim.logs().iter().any(|l| l.contains("project-one")));
}

// ---------------------------------------------------------------------------
// Chrome
// ---------------------------------------------------------------------------

#[test]
fn mobile_sidebar_opens_and_closes() {
    let mut sim = sim(NARROW);
    assert!(sim.model().sidebar().is_mobile());
    assert!(!sim.render_text(NARROW, H).contains("Download Resume"));

    click_text(&mut sim, NARROW, "Menu");
    assert!(sim.model().sidebar().is_open());
    assert!(sim.render_text(NARROW, H).contains("Download Resume"));

    // Backdrop to the right of the overlay.
    sim.inject_event(Event::click(NARROW - 2, H / 2));
    assert!(!sim.model().sidebar().is_open());

    press(&mut sim, KeyCode::Char('m'));
    assert!(sim.model().sidebar().is_open());
    sim.inject_event(Event::Resize { width: W, height: H });
    assert!(!sim.model().sidebar().is_open());
    assert!(!sim.model().sidebar().is_mobile());
}

#[test]
fn mobile_nav_click_navigates_and_closes() {
    let mut sim = sim(NARROW);
    press(&mut sim, KeyCode::Char('m'));
    click_text(&mut sim, NARROW, "Education");
    assert_eq!(sim.model().current_section(), SectionId::Education);
    assert!(!sim.model().sidebar().is_open());
}

#[test]
fn desktop_sidebar_navigates() {
    let mut sim = sim(W);
    let text = sim.render_text(W, H);
    let (x, y) = find_where(&text, "Experience", |x, _| x < 32).expect("sidebar entry");
    sim.inject_event(Event::click(x, y));
    assert_eq!(sim.model().current_section(), SectionId::Experience);
    assert!(sim.render_text(W, H).contains("Professional Experience"));
}

#[test]
fn every_section_renders_its_heading() {
    let mut sim = sim(W);
    let headings = [
        (KeyCode::Char('1'), "Hello, I'm Rasmus Hogslätt"),
        (KeyCode::Char('2'), "About Me"),
        (KeyCode::Char('3'), "Education"),
        (KeyCode::Char('4'), "Professional Experience"),
        (KeyCode::Char('5'), "Personal Projects"),
        (KeyCode::Char('6'), "Hobbies & Interests"),
    ];
    for (key, heading) in headings {
        press(&mut sim, key);
        let text = sim.render_text(W, H);
        assert!(text.contains(heading), "{heading} missing:\n{text}");
    }
}

#[test]
fn footer_and_download_open_links() {
    let mut sim = sim(W);
    click_text(&mut sim, W, "LinkedIn");
    assert_eq!(
        sim.model().status_message(),
        Some("Open https://www.linkedin.com/in/rasmushogslatt/")
    );
    click_text(&mut sim, W, "Download Resume");
    assert_eq!(
        sim.model().status_message(),
        Some("Open https://rasmushogslatt.com/reports/CV.pdf")
    );
}

#[test]
fn custom_asset_base_resolves_relative_links() {
    let opts = Opts {
        asset_base: "http://localhost:3000/".into(),
        ..Opts::default()
    };
    let mut sim = sim_with(opts, W);
    press(&mut sim, KeyCode::Char('d'));
    assert_eq!(
        sim.model().status_message(),
        Some("Open http://localhost:3000/reports/CV.pdf")
    );
}

#[test]
fn help_overlay_lists_section_keys() {
    let mut sim = projects_sim();
    press(&mut sim, KeyCode::Char('?'));
    let text = sim.render_text(W, H);
    assert!(text.contains("Keyboard Shortcuts"));
    assert!(text.contains("Toggle strip / grid"));
    // Any click dismisses.
    sim.inject_event(Event::click(0, 0));
    assert!(!sim.model().help_visible());
}

#[test]
fn q_quits() {
    let mut sim = sim(W);
    assert!(sim.is_running());
    press(&mut sim, KeyCode::Char('q'));
    assert!(!sim.is_running());
}
