#![forbid(unsafe_code)]

//! Project catalogue and tag filtering.
//!
//! The catalogue is an ordered, immutable list of [`Project`] records. A
//! project has no identifier: its position in the list is the only key, so
//! every derived view (the tag universe, a filtered list) is computed from
//! the same list in the same order and is therefore stable across redraws.
//!
//! Optional fields are explicit `Option`s. Rendering code asks capability
//! questions ([`Project::has_report`], [`Project::links`]) instead of probing
//! for empty strings.

use std::collections::BTreeSet;
use std::sync::OnceLock;

// ---------------------------------------------------------------------------
// Project
// ---------------------------------------------------------------------------

/// A single portfolio entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    title: String,
    description: String,
    image: Option<String>,
    tags: Vec<String>,
    github: Option<String>,
    demo: Option<String>,
    report: Option<String>,
}

impl Project {
    /// Create a project with the required fields.
    ///
    /// `tags` must be non-empty; the built-in catalogue is checked by tests.
    #[must_use]
    pub fn new<T, S>(title: impl Into<String>, description: impl Into<String>, tags: T) -> Self
    where
        T: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let tags: Vec<String> = tags.into_iter().map(Into::into).collect();
        debug_assert!(!tags.is_empty(), "a project needs at least one tag");
        Self {
            title: title.into(),
            description: description.into(),
            image: None,
            tags,
            github: None,
            demo: None,
            report: None,
        }
    }

    /// Attach a preview image path.
    #[must_use]
    pub fn with_image(mut self, path: impl Into<String>) -> Self {
        self.image = Some(path.into());
        self
    }

    /// Attach a source repository URL.
    #[must_use]
    pub fn with_github(mut self, url: impl Into<String>) -> Self {
        self.github = Some(url.into());
        self
    }

    /// Attach a demo URL (live site or video).
    #[must_use]
    pub fn with_demo(mut self, url: impl Into<String>) -> Self {
        self.demo = Some(url.into());
        self
    }

    /// Attach a report (PDF path or URL).
    #[must_use]
    pub fn with_report(mut self, target: impl Into<String>) -> Self {
        self.report = Some(target.into());
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn image(&self) -> Option<&str> {
        self.image.as_deref()
    }

    /// Tags in declaration order.
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn github(&self) -> Option<&str> {
        self.github.as_deref()
    }

    pub fn demo(&self) -> Option<&str> {
        self.demo.as_deref()
    }

    pub fn report(&self) -> Option<&str> {
        self.report.as_deref()
    }

    /// Exact, case-sensitive tag membership.
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    #[must_use]
    pub fn has_report(&self) -> bool {
        self.report.is_some()
    }

    /// Outbound actions in display order: Code, PDF, Demo.
    pub fn links(&self) -> impl Iterator<Item = ProjectLink<'_>> {
        [
            (LinkKind::Code, self.github.as_deref()),
            (LinkKind::Report, self.report.as_deref()),
            (LinkKind::Demo, self.demo.as_deref()),
        ]
        .into_iter()
        .filter_map(|(kind, target)| target.map(|target| ProjectLink { kind, target }))
    }

    /// The link of a given kind, if present.
    #[must_use]
    pub fn link(&self, kind: LinkKind) -> Option<ProjectLink<'_>> {
        self.links().find(|link| link.kind == kind)
    }
}

/// Kind of outbound project action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LinkKind {
    /// Source repository.
    Code,
    /// Written report, usually a PDF.
    Report,
    /// Live demo or video.
    Demo,
}

impl LinkKind {
    /// Button label.
    pub const fn label(self) -> &'static str {
        match self {
            LinkKind::Code => "Code",
            LinkKind::Report => "PDF",
            LinkKind::Demo => "Demo",
        }
    }
}

/// An outbound action attached to a project. The target is opaque.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectLink<'a> {
    pub kind: LinkKind,
    pub target: &'a str,
}

// ---------------------------------------------------------------------------
// Catalogue
// ---------------------------------------------------------------------------

/// Ordered, immutable list of projects.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Catalogue {
    projects: Vec<Project>,
}

impl Catalogue {
    /// Create a catalogue. Order is preserved verbatim.
    #[must_use]
    pub fn new(projects: Vec<Project>) -> Self {
        Self { projects }
    }

    /// The portfolio's own projects, built once per process.
    pub fn builtin() -> &'static Catalogue {
        static BUILTIN: OnceLock<Catalogue> = OnceLock::new();
        BUILTIN.get_or_init(builtin_projects)
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Project> {
        self.projects.iter()
    }

    /// See [`tag_universe`].
    pub fn tag_universe(&self) -> BTreeSet<&str> {
        tag_universe(self)
    }

    /// See [`filter`].
    pub fn filter(&self, selected_tag: Option<&str>) -> Vec<&Project> {
        filter(self, selected_tag)
    }

    /// Number of projects carrying `tag`.
    pub fn count_tagged(&self, tag: &str) -> usize {
        self.projects.iter().filter(|p| p.has_tag(tag)).count()
    }
}

impl<'a> IntoIterator for &'a Catalogue {
    type Item = &'a Project;
    type IntoIter = std::slice::Iter<'a, Project>;

    fn into_iter(self) -> Self::IntoIter {
        self.projects.iter()
    }
}

/// Every distinct tag in the catalogue, ascending.
///
/// Recomputed on each call; the catalogue never changes so there is nothing
/// to invalidate.
pub fn tag_universe(catalogue: &Catalogue) -> BTreeSet<&str> {
    catalogue
        .iter()
        .flat_map(|p| p.tags.iter().map(String::as_str))
        .collect()
}

/// Projects matching `selected_tag`, in catalogue order.
///
/// `None` is the identity. A tag nobody carries yields an empty list, which
/// callers render as the empty state rather than treating as an error.
pub fn filter<'a>(catalogue: &'a Catalogue, selected_tag: Option<&str>) -> Vec<&'a Project> {
    match selected_tag {
        None => catalogue.iter().collect(),
        Some(tag) => catalogue.iter().filter(|p| p.has_tag(tag)).collect(),
    }
}

// ---------------------------------------------------------------------------
// Built-in data
// ---------------------------------------------------------------------------

fn builtin_projects() -> Catalogue {
    Catalogue::new(vec![
        Project::new(
            "Visualizing RC car in Mixed Reality",
            "Visualization and control of an RC car in Mixed Reality. Implemented in Rust, \
             involving contributions to the open source Bevy Engine. This was part of my \
             master's thesis.",
            ["Rust", "C", "MR", "3D-graphics", "Android"],
        )
        .with_image("/projects/thesis.png")
        .with_github("https://github.com/yourusername/project-one")
        .with_demo("https://www.youtube.com/watch?v=vJKHNgr7sD4")
        .with_report("/reports/MasterThesis.pdf"),
        Project::new(
            "Guitar Tablature App",
            "Many people that play the Guitar find Guitar tablature very useful, as \
             traditional musical notation can unncessarily hard to learn if you only care \
             about playing the Guitar. This program parses MusicXML files, a widely used \
             musical notation format for any instrument, into Guitar tablature and lets you \
             play back what the song is meant to sound like. It uses the Karplus-Strong \
             algorithm to let you tune you guitar sound the way you like. The idea behind \
             this is that for quality musical notation, it is often easier to find the the \
             MusicXML file for, let's say Piano, than a good Guitar tablature. By parsing \
             the MusicXML for Piano and other instruments to Guitar, this broadens the scope \
             for guitarists, when looking for tablature.",
            ["Rust", "Audio"],
        )
        .with_image("/projects/tabapp.png")
        .with_github("https://github.com/RasmusHogslatt/cdefgab")
        .with_demo("https://rasmushogslatt.github.io/cdefgab/"),
        Project::new(
            "Monte Carlo Path Tracer",
            "A Monte Carlo pathtracer that renders realisitc reflections, refractions and \
             direct and indirect illumination of diffuse objects.",
            ["C++", "3D-Rendering", "Mathematics"],
        )
        .with_image("/projects/mcpt.png")
        .with_github("https://github.com/RasmusHogslatt/raytracer/tree/master"),
        Project::new(
            "Water Simulation",
            "Real-time water simulation with adjustable parameters.",
            ["C++", "OpenGL", "Shader", "GLSL", "Rendering", "Mathematics"],
        )
        .with_image("/projects/pw.png")
        .with_github("https://github.com/RasmusHogslatt/Procedural-waves")
        .with_demo("https://www.youtube.com/watch?v=N_k3nFntPOg&t=2s")
        .with_report("https://rasmushogslatt.com/assets/pw.pdf"),
        Project::new(
            "Flappy Bird Clone",
            "Implemented my own genetic training algorithm and neural networks from scratch \
             in Rust and used these to train birds in my own Bevy based implementation of \
             the Flappy Bird game.",
            ["Rust", "AI", "ML"],
        )
        .with_image("/projects/flappybird.png")
        .with_demo("https://www.youtube.com/watch?v=uUAlo93hbfk")
        .with_report("/reports/flappybird-report.pdf"),
        Project::new(
            "DnCNN Image Denoising",
            "Implemented my own deep learning convolutional neural network, DnCNN, for \
             denoising images.",
            ["Python", "Deep Learning", "ML", "CNN"],
        )
        .with_image("/projects/dncnn.png"),
        Project::new(
            "Legonization of Images",
            "A program that converts an uploaded image into a lego mosaic and calculates \
             pieces required to reproduce with actual bricks. Support multiple brick types. \
             Color matching was done using CIELAB.",
            ["Matlab", "Image Processing", "TypeScript"],
        )
        .with_image("/projects/legonization.png"),
        Project::new(
            "Multithreaded MD5-based password cracker",
            "Explored multithreading in Rust by implementing a MD5 based password cracker.",
            ["Rust", "Threading"],
        )
        .with_github("https://github.com/RasmusHogslatt/Password-Cracker"),
        Project::new(
            "Game of Life",
            "For my first project in Rust, I implemented Conway's Game of Life. The user \
             clicks on the tiles that should be active and then starts the simulation. It is \
             fascinating how simple rules can produce very complex patterns.",
            ["Rust"],
        )
        .with_image("/projects/gameoflife.png")
        .with_github("https://github.com/yourusername/game-of-life"),
    ])
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn small() -> Catalogue {
        Catalogue::new(vec![
            Project::new("a", "", ["x", "y"]),
            Project::new("b", "", ["y"]),
            Project::new("c", "", ["z", "x"]),
        ])
    }

    fn titles<'a>(projects: &[&'a Project]) -> Vec<&'a str> {
        projects.iter().map(|p| p.title()).collect()
    }

    #[test]
    fn builtin_has_nine_projects_with_tags() {
        let cat = Catalogue::builtin();
        assert_eq!(cat.len(), 9);
        assert!(cat.iter().all(|p| !p.tags().is_empty()));
        assert!(cat.iter().all(|p| !p.title().is_empty()));
    }

    #[test]
    fn builtin_descriptions_are_single_spaced_prose() {
        let cat = Catalogue::builtin();
        let description = |title: &str| {
            cat.iter()
                .find(|p| p.title() == title)
                .map(Project::description)
                .unwrap_or_default()
        };
        let tabs = description("Guitar Tablature App");
        assert!(tabs.starts_with("Many people that play the Guitar find Guitar tablature"));
        assert!(tabs.ends_with("this broadens the scope for guitarists, when looking for tablature."));
        assert_eq!(
            description("Monte Carlo Path Tracer"),
            "A Monte Carlo pathtracer that renders realisitc reflections, refractions and \
             direct and indirect illumination of diffuse objects."
        );
        assert!(description("Legonization of Images").starts_with("A program that converts"));
        for project in cat {
            assert!(!project.description().contains("  "), "{}", project.title());
        }
    }

    #[test]
    fn builtin_is_shared() {
        assert!(std::ptr::eq(Catalogue::builtin(), Catalogue::builtin()));
    }

    #[test]
    fn tag_universe_sorted_and_deduped() {
        let cat = small();
        let tags: Vec<&str> = tag_universe(&cat).into_iter().collect();
        assert_eq!(tags, vec!["x", "y", "z"]);
    }

    #[test]
    fn tag_universe_of_empty_catalogue_is_empty() {
        assert!(tag_universe(&Catalogue::default()).is_empty());
    }

    #[test]
    fn filter_none_is_identity() {
        let cat = small();
        assert_eq!(titles(&filter(&cat, None)), vec!["a", "b", "c"]);
    }

    #[test]
    fn filter_keeps_order() {
        let cat = small();
        assert_eq!(titles(&filter(&cat, Some("x"))), vec!["a", "c"]);
        assert_eq!(titles(&filter(&cat, Some("y"))), vec!["a", "b"]);
    }

    #[test]
    fn filter_unknown_tag_is_empty() {
        let cat = small();
        assert!(filter(&cat, Some("nope")).is_empty());
    }

    #[test]
    fn filter_is_case_sensitive() {
        let cat = small();
        assert!(filter(&cat, Some("X")).is_empty());
    }

    #[test]
    fn links_follow_display_order() {
        let p = Project::new("p", "", ["t"])
            .with_demo("d")
            .with_github("g")
            .with_report("r");
        let kinds: Vec<LinkKind> = p.links().map(|l| l.kind).collect();
        assert_eq!(kinds, vec![LinkKind::Code, LinkKind::Report, LinkKind::Demo]);
        assert_eq!(p.link(LinkKind::Report).map(|l| l.target), Some("r"));
    }

    #[test]
    fn missing_links_are_skipped() {
        let p = Project::new("p", "", ["t"]).with_demo("d");
        assert_eq!(p.links().count(), 1);
        assert!(!p.has_report());
        assert!(p.link(LinkKind::Code).is_none());
    }

    #[test]
    fn count_tagged_matches_filter() {
        let cat = Catalogue::builtin();
        for tag in cat.tag_universe() {
            assert_eq!(cat.count_tagged(tag), cat.filter(Some(tag)).len());
        }
    }
}
