use crate::parsers::text::{offered_in_term, terms_offered};

#[cfg(test)]
mod terms_offered_tests {
    use super::*;

    #[test]
    fn test_simple_term_list() {
        let raw = "Term Typically Offered: F, W, SP";
        assert_eq!(terms_offered(raw).as_deref(), Some("F, W, SP"));
    }

    #[test]
    fn test_stops_at_prerequisite_label() {
        // Catalog pages run the labels together with no separator
        let raw = "Term Typically Offered: F, W, SPPrerequisite: MATH 118 or equivalent.";
        assert_eq!(terms_offered(raw).as_deref(), Some("F, W, SP"));

        let raw = "Term Typically Offered: F, SU\nPrerequisite: STAT 130.";
        assert_eq!(terms_offered(raw).as_deref(), Some("F, SU"));
    }

    #[test]
    fn test_label_after_other_info() {
        let raw = "Corequisite: STAT 131.\nTerm Typically Offered: W  \nCR/NC grading only.";
        assert_eq!(terms_offered(raw).as_deref(), Some("W"));
    }

    #[test]
    fn test_whitespace_after_label() {
        let raw = "Term Typically Offered:\n   F, W";
        assert_eq!(terms_offered(raw).as_deref(), Some("F, W"));
    }

    #[test]
    fn test_absent_label_is_none() {
        assert_eq!(terms_offered("Prerequisite: STAT 130."), None);
        assert_eq!(terms_offered(""), None);
        // Case matters
        assert_eq!(terms_offered("term typically offered: F"), None);
    }

    #[test]
    fn test_empty_but_present_is_distinct_from_absent() {
        let present = terms_offered("Term Typically Offered:");
        assert_eq!(present.as_deref(), Some(""));
        assert_ne!(present, terms_offered("Prerequisite: none"));
    }
}

#[cfg(test)]
mod offered_in_term_tests {
    use super::*;

    #[test]
    fn test_membership() {
        let raw = "Term Typically Offered: F, W, SP";
        assert_eq!(offered_in_term(raw, "F"), Some(true));
        assert_eq!(offered_in_term(raw, "W"), Some(true));
        assert_eq!(offered_in_term(raw, "SP"), Some(true));
        assert_eq!(offered_in_term(raw, "SU"), Some(false));
    }

    #[test]
    fn test_no_term_data() {
        assert_eq!(offered_in_term("Prerequisite: STAT 130.", "F"), None);
    }

    #[test]
    fn test_substring_containment_matches_partial_codes() {
        // "S" is not a term code of its own but is contained in "SP"
        let raw = "Term Typically Offered: SP";
        assert_eq!(offered_in_term(raw, "S"), Some(true));
    }
}
