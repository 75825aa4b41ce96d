//! Anchor ids for headings.

use std::collections::HashSet;
use std::sync::OnceLock;

use regex::Regex;

/// Id used when a heading has no alphanumeric characters at all.
pub const FALLBACK_SLUG: &str = "section";

/// Lowercases `text` and collapses every run of non-alphanumeric characters
/// into a single hyphen, trimming hyphens from both ends.
pub fn slugify(text: &str) -> String {
    static NON_ALNUM: OnceLock<Regex> = OnceLock::new();
    let re = NON_ALNUM
        .get_or_init(|| Regex::new(r"[^\p{L}\p{N}]+").expect("Invalid slug regex"));

    re.replace_all(&text.to_lowercase(), "-")
        .trim_matches('-')
        .to_string()
}

/// Hands out anchor ids that are unique within one document.
#[derive(Debug, Default)]
pub struct AnchorRegistry {
    used: HashSet<String>,
}

impl AnchorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the slug of `text`, suffixed with `-1`, `-2`, ... if it was
    /// already handed out.
    pub fn assign(&mut self, text: &str) -> String {
        let mut base = slugify(text);
        if base.is_empty() {
            base = FALLBACK_SLUG.to_string();
        }

        let mut candidate = base.clone();
        let mut n = 1usize;
        while self.used.contains(&candidate) {
            candidate = format!("{base}-{n}");
            n += 1;
        }
        self.used.insert(candidate.clone());
        candidate
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugify_simple() {
        assert_eq!(slugify("Hello World"), "hello-world");
    }

    #[test]
    fn slugify_collapses_punctuation_runs() {
        assert_eq!(slugify("Hello, World!"), "hello-world");
        assert_eq!(slugify("a -- b__c"), "a-b-c");
    }

    #[test]
    fn slugify_trims() {
        assert_eq!(slugify("  (Intro)  "), "intro");
    }

    #[test]
    fn slugify_keeps_unicode_letters() {
        assert_eq!(slugify("Über Größe"), "über-größe");
    }

    #[test]
    fn slugify_empty() {
        assert_eq!(slugify(""), "");
        assert_eq!(slugify("!!!"), "");
    }

    #[test]
    fn collisions_get_numeric_suffixes() {
        let mut anchors = AnchorRegistry::new();
        assert_eq!(anchors.assign("Notes"), "notes");
        assert_eq!(anchors.assign("Notes"), "notes-1");
        assert_eq!(anchors.assign("notes"), "notes-2");
    }

    #[test]
    fn suffix_skips_ids_taken_by_other_headings() {
        let mut anchors = AnchorRegistry::new();
        assert_eq!(anchors.assign("Notes 1"), "notes-1");
        assert_eq!(anchors.assign("Notes"), "notes");
        assert_eq!(anchors.assign("Notes"), "notes-2");
    }

    #[test]
    fn empty_slug_falls_back() {
        let mut anchors = AnchorRegistry::new();
        assert_eq!(anchors.assign("???"), "section");
        assert_eq!(anchors.assign(""), "section-1");
    }
}
