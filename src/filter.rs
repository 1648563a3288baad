use regex::Regex;
use url::Url;

/// Origin of the Cal Poly course catalog
pub const CATALOG_ORIGIN: &str = "https://catalog.calpoly.edu";

/// Path segment under which department course listings live
const DEPARTMENT_SEGMENT: &str = "coursesaz";

/// Decides which links on the index page are department listings
///
/// A department URL is `<origin>/coursesaz/<lowercase letters>/` and nothing
/// else: the index itself, extra path segments, query strings, digits and
/// uppercase letters are all rejected.
#[derive(Debug, Clone)]
pub struct DepartmentUrlFilter {
    origin: String,
    department_regex: Regex,
}

impl Default for DepartmentUrlFilter {
    fn default() -> Self {
        Self::for_origin(CATALOG_ORIGIN).expect("Default department pattern should be valid")
    }
}

impl DepartmentUrlFilter {
    /// Create a filter for the site hosting the given index page
    pub fn new(index_url: &Url) -> Result<Self, regex::Error> {
        Self::for_origin(&index_url.origin().ascii_serialization())
    }

    /// Create a filter from a bare origin such as `https://catalog.calpoly.edu`
    pub fn for_origin(origin: &str) -> Result<Self, regex::Error> {
        let origin = origin.trim_end_matches('/').to_string();
        let pattern = format!(
            r"^{}/{}/[a-z]+/$",
            regex::escape(&origin),
            DEPARTMENT_SEGMENT
        );

        Ok(Self {
            origin,
            department_regex: Regex::new(&pattern)?,
        })
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// Whether an absolute URL is a department listing page
    pub fn is_department_url(&self, url: &str) -> bool {
        self.department_regex.is_match(url)
    }

    /// Turn a root-relative href into an absolute URL on this origin.
    /// Anything else is returned unchanged.
    pub fn normalize_href(&self, href: &str) -> String {
        if href.starts_with('/') {
            format!("{}{}", self.origin, href)
        } else {
            href.to_string()
        }
    }
}

/// Whether `url` is a department listing on the Cal Poly catalog
pub fn valid_course_url(url: &str) -> bool {
    DepartmentUrlFilter::default().is_department_url(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_course_url() {
        assert!(valid_course_url("https://catalog.calpoly.edu/coursesaz/aged/"));
        assert!(valid_course_url("https://catalog.calpoly.edu/coursesaz/stat/"));

        // No department segment
        assert!(!valid_course_url("https://catalog.calpoly.edu/coursesaz/"));
        // Extra path
        assert!(!valid_course_url(
            "https://catalog.calpoly.edu/coursesaz/aged/something"
        ));
        assert!(!valid_course_url(
            "https://catalog.calpoly.edu/coursesaz/aged/something/"
        ));
        // Missing trailing slash
        assert!(!valid_course_url("https://catalog.calpoly.edu/coursesaz/aged"));
        // Uppercase and digits
        assert!(!valid_course_url("https://catalog.calpoly.edu/coursesaz/AGED/"));
        assert!(!valid_course_url("https://catalog.calpoly.edu/coursesaz/cs1/"));
        // Other hosts and schemes
        assert!(!valid_course_url("http://catalog.calpoly.edu/coursesaz/aged/"));
        assert!(!valid_course_url("https://catalogXcalpoly.edu/coursesaz/aged/"));
        // Root-relative links must be normalized first
        assert!(!valid_course_url("/coursesaz/aged/"));
    }

    #[test]
    fn test_normalize_href() {
        let filter = DepartmentUrlFilter::default();
        assert_eq!(
            filter.normalize_href("/coursesaz/stat/"),
            "https://catalog.calpoly.edu/coursesaz/stat/"
        );
        assert_eq!(
            filter.normalize_href("https://example.com/coursesaz/stat/"),
            "https://example.com/coursesaz/stat/"
        );
        assert_eq!(filter.normalize_href("#top"), "#top");
    }

    #[test]
    fn test_filter_from_index_url() {
        let index = Url::parse("http://localhost:8080/coursesaz/").unwrap();
        let filter = DepartmentUrlFilter::new(&index).unwrap();

        assert_eq!(filter.origin(), "http://localhost:8080");
        assert!(filter.is_department_url("http://localhost:8080/coursesaz/math/"));
        assert!(!filter.is_department_url("https://catalog.calpoly.edu/coursesaz/math/"));
        assert_eq!(
            filter.normalize_href("/coursesaz/math/"),
            "http://localhost:8080/coursesaz/math/"
        );
    }
}
