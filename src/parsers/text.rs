//! Term availability inside a course's free-text extended info.
//!
//! The extended info block runs corequisites, prerequisites and the terms a
//! course is usually offered together, e.g.
//! `"Term Typically Offered: F, W, SPPrerequisite: STAT 130."`. The term list
//! ends where the next `P`-word label starts (`Prerequisite`), at a newline,
//! or at the end of the text.
//!
//! Membership is raw substring containment, not token matching, so a short
//! code can match inside a longer one (`"S"` is found in `"SP"`).

use regex::Regex;
use std::sync::LazyLock;

/// Label preceding the term list
pub const TERM_LABEL: &str = "Term Typically Offered:";

static TERMS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"{}\s*(.*?)(?:P[a-z]|\n|$)",
        regex::escape(TERM_LABEL)
    ))
    .unwrap()
});

/// The raw terms string following the "Term Typically Offered:" label
///
/// `None` when the label is absent, which is not the same as `Some("")`: a
/// label followed by nothing.
pub fn terms_offered(prerequisites_raw: &str) -> Option<String> {
    TERMS_RE
        .captures(prerequisites_raw)
        .and_then(|caps| caps.get(1))
        .map(|terms| terms.as_str().trim_end().to_string())
}

/// Whether `term_code` appears in the course's terms
///
/// `None` means the course has no term data at all.
pub fn offered_in_term(prerequisites_raw: &str, term_code: &str) -> Option<bool> {
    terms_offered(prerequisites_raw).map(|terms| terms.contains(term_code))
}
