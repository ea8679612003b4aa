#![forbid(unsafe_code)]

//! Outbound link resolution.
//!
//! Targets are opaque strings: nothing is fetched or validated. Site-relative
//! paths are joined to the configured asset base so the status bar can show
//! something a reader could paste into a browser.

/// Schemes passed through untouched.
const ABSOLUTE_PREFIXES: [&str; 3] = ["https://", "http://", "mailto:"];

/// Whether `target` already names a complete location.
pub fn is_absolute(target: &str) -> bool {
    ABSOLUTE_PREFIXES.iter().any(|prefix| {
        target
            .get(..prefix.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
    })
}

/// Resolve `target` against `base`.
///
/// Absolute targets pass through; `/path` is joined to `base`; anything else
/// is returned unchanged.
pub fn resolve_link(base: &str, target: &str) -> String {
    if is_absolute(target) {
        return target.to_string();
    }
    match target.strip_prefix('/') {
        Some(path) => format!("{}/{path}", base.trim_end_matches('/')),
        None => target.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absolute_targets_pass_through() {
        for target in [
            "https://github.com/RasmusHogslatt",
            "HTTP://example.com",
            "mailto:r.hogslatt@gmail.com",
        ] {
            assert_eq!(resolve_link("https://site", target), target);
        }
    }

    #[test]
    fn rooted_paths_join_the_base() {
        assert_eq!(
            resolve_link("https://rasmushogslatt.com", "/reports/CV.pdf"),
            "https://rasmushogslatt.com/reports/CV.pdf"
        );
        assert_eq!(
            resolve_link("http://localhost:3000//", "/me.jpg"),
            "http://localhost:3000/me.jpg"
        );
    }

    #[test]
    fn other_targets_are_unchanged() {
        assert_eq!(resolve_link("https://site", "notes.txt"), "notes.txt");
        assert_eq!(resolve_link("https://site", ""), "");
    }

    #[test]
    fn short_targets_are_not_absolute() {
        assert!(!is_absolute("http"));
        assert!(!is_absolute("é"));
        assert!(!is_absolute("ééééé"));
    }
}
