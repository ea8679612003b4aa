#![forbid(unsafe_code)]

//! Command-line argument parsing for the portfolio.
//!
//! Parses args manually (no external dependencies) to keep the binary lean.
//! Supports environment variable overrides via `FOLIO_*` prefix.

use std::env;
use std::fmt;
use std::path::PathBuf;
use std::process;

use folio_core::geometry::DEFAULT_CELL_WIDTH_PX;
use folio_core::nav::SectionId;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Site root used to resolve relative asset links such as `/reports/CV.pdf`.
pub const DEFAULT_ASSET_BASE: &str = "https://rasmushogslatt.com";

const HELP_TEXT: &str = "\
Folio: Rasmus Hogslätt's portfolio in the terminal

USAGE:
    folio [OPTIONS]

OPTIONS:
    --section=NAME       Start section (default: home)
    --tag=TAG            Start with the project catalogue filtered by TAG
    --cell-width=N       Pixels per terminal column (default: 8)
    --asset-base=URL     Base for relative links (default: https://rasmushogslatt.com)
    --log-file=PATH      Write logs to PATH (filter with RUST_LOG)
    --no-mouse           Disable mouse event capture
    --exit-after-ms=N    Auto-quit after N milliseconds (for testing)
    --help, -h           Show this help message
    --version, -V        Show version

SECTIONS:
    1  home         Greeting and quick links
    2  about        About me and highlights
    3  education    Degree and thesis
    4  experience   Work history with skills
    5  projects     Personal projects, filterable by tag
    6  hobbies      What I do for fun

KEYBINDINGS:
    1-6             Jump to a section
    Tab / Shift-Tab Cycle through sections
    m               Toggle the sidebar on narrow terminals
    d               Download resume
    ?               Toggle help overlay
    q / Ctrl+C      Quit

PROJECTS:
    Left / Right    Scroll the project strip
    g               Toggle strip / grid layout
    t / T           Select next / previous tag
    x / Backspace   Clear the tag filter
    [ / ]           Focus previous / next card
    c / p / o       Open code / PDF / demo of the focused card

ENVIRONMENT VARIABLES:
    FOLIO_SECTION        Override --section
    FOLIO_TAG            Override --tag
    FOLIO_CELL_WIDTH     Override --cell-width
    FOLIO_ASSET_BASE     Override --asset-base
    FOLIO_LOG_FILE       Override --log-file
    FOLIO_EXIT_AFTER_MS  Auto-quit after N milliseconds (for testing)";

/// Parsed command-line options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Opts {
    /// Section shown first.
    pub section: SectionId,
    /// Initial project filter.
    pub tag: Option<String>,
    /// Pixels represented by one terminal column.
    pub cell_width: u16,
    /// Base URL for relative link targets.
    pub asset_base: String,
    /// File logging target; logging is off without one.
    pub log_file: Option<PathBuf>,
    /// Whether mouse events are enabled.
    pub mouse: bool,
    /// Auto-exit after this many milliseconds (0 = disabled).
    pub exit_after_ms: u64,
}

impl Default for Opts {
    fn default() -> Self {
        Self {
            section: SectionId::Home,
            tag: None,
            cell_width: DEFAULT_CELL_WIDTH_PX,
            asset_base: DEFAULT_ASSET_BASE.into(),
            log_file: None,
            mouse: true,
            exit_after_ms: 0,
        }
    }
}

/// What the command line asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Parsed {
    Run(Opts),
    Help,
    Version,
}

/// A command line that cannot be run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliError {
    UnknownArgument(String),
    InvalidValue { flag: &'static str, value: String },
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownArgument(arg) => write!(f, "Unknown argument: {arg}"),
            Self::InvalidValue { flag, value } => write!(f, "Invalid {flag} value: {value}"),
        }
    }
}

impl std::error::Error for CliError {}

fn parse_section(value: &str) -> Option<SectionId> {
    if let Ok(n) = value.parse::<usize>() {
        return n.checked_sub(1).and_then(SectionId::from_index);
    }
    SectionId::from_anchor(value)
}

fn parse_cell_width(value: &str) -> Option<u16> {
    value.parse().ok().filter(|&n: &u16| n > 0)
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

impl Opts {
    /// Parse command-line arguments and environment variables.
    ///
    /// Prints help or version and exits when asked to; prints the error and
    /// exits with status 1 on a bad command line.
    pub fn parse() -> Self {
        let args: Vec<String> = env::args().skip(1).collect();
        match Self::from_sources(&args, |key| env::var(key).ok()) {
            Ok(Parsed::Run(opts)) => opts,
            Ok(Parsed::Help) => {
                println!("{HELP_TEXT}");
                process::exit(0);
            }
            Ok(Parsed::Version) => {
                println!("folio {VERSION}");
                process::exit(0);
            }
            Err(e) => {
                eprintln!("{e}");
                if matches!(e, CliError::UnknownArgument(_)) {
                    eprintln!("Run with --help for usage information.");
                }
                process::exit(1);
            }
        }
    }

    /// Resolve options from explicit arguments and an environment lookup.
    ///
    /// Environment variables take precedence over defaults but are overridden
    /// by explicit command-line flags. Unparseable environment values are
    /// ignored; unparseable flags are errors.
    pub fn from_sources<F>(args: &[String], env_var: F) -> Result<Parsed, CliError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut opts = Self::default();

        // Apply environment variable defaults first
        if let Some(section) = env_var("FOLIO_SECTION").and_then(|v| parse_section(&v)) {
            opts.section = section;
        }
        if let Some(tag) = env_var("FOLIO_TAG").and_then(|v| non_empty(&v)) {
            opts.tag = Some(tag);
        }
        if let Some(n) = env_var("FOLIO_CELL_WIDTH").and_then(|v| parse_cell_width(&v)) {
            opts.cell_width = n;
        }
        if let Some(base) = env_var("FOLIO_ASSET_BASE").and_then(|v| non_empty(&v)) {
            opts.asset_base = base;
        }
        if let Some(path) = env_var("FOLIO_LOG_FILE").and_then(|v| non_empty(&v)) {
            opts.log_file = Some(PathBuf::from(path));
        }
        if let Some(n) = env_var("FOLIO_EXIT_AFTER_MS").and_then(|v| v.parse().ok()) {
            opts.exit_after_ms = n;
        }

        // Parse command-line args (override env vars)
        for arg in args {
            match arg.as_str() {
                "--help" | "-h" => return Ok(Parsed::Help),
                "--version" | "-V" => return Ok(Parsed::Version),
                "--no-mouse" => opts.mouse = false,
                other => {
                    if let Some(val) = other.strip_prefix("--section=") {
                        opts.section = parse_section(val).ok_or_else(|| CliError::InvalidValue {
                            flag: "--section",
                            value: val.to_string(),
                        })?;
                    } else if let Some(val) = other.strip_prefix("--tag=") {
                        opts.tag = non_empty(val);
                    } else if let Some(val) = other.strip_prefix("--cell-width=") {
                        opts.cell_width =
                            parse_cell_width(val).ok_or_else(|| CliError::InvalidValue {
                                flag: "--cell-width",
                                value: val.to_string(),
                            })?;
                    } else if let Some(val) = other.strip_prefix("--asset-base=") {
                        opts.asset_base = non_empty(val).ok_or_else(|| CliError::InvalidValue {
                            flag: "--asset-base",
                            value: val.to_string(),
                        })?;
                    } else if let Some(val) = other.strip_prefix("--log-file=") {
                        let path = non_empty(val).ok_or_else(|| CliError::InvalidValue {
                            flag: "--log-file",
                            value: val.to_string(),
                        })?;
                        opts.log_file = Some(PathBuf::from(path));
                    } else if let Some(val) = other.strip_prefix("--exit-after-ms=") {
                        opts.exit_after_ms = val.parse().map_err(|_| CliError::InvalidValue {
                            flag: "--exit-after-ms",
                            value: val.to_string(),
                        })?;
                    } else {
                        return Err(CliError::UnknownArgument(other.to_string()));
                    }
                }
            }
        }

        Ok(Parsed::Run(opts))
    }
}
