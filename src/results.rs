use indexmap::IndexMap;

/// A department listing discovered on the catalog index page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepartmentLink {
    /// Link text as shown on the index page
    pub display_text: String,

    /// Absolute URL of the department page
    pub url: String,
}

impl DepartmentLink {
    pub fn new(display_text: String, url: String) -> Self {
        Self { display_text, url }
    }
}

/// One course as it appears on a department page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseRecord {
    /// Catalog identifier, e.g. "STAT 130"
    pub code: String,

    pub name: String,

    /// Units text, verbatim (e.g. "4 units")
    pub units: String,

    /// Extended info block: prerequisites, corequisites and terms offered.
    /// Empty when the course has none.
    pub prerequisites_raw: String,

    /// Empty when the course has no description
    pub description: String,
}

/// All courses of one department, keyed by course code in page order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepartmentCatalog {
    pub name: String,
    pub courses: IndexMap<String, CourseRecord>,
}

impl DepartmentCatalog {
    pub fn new(name: String) -> Self {
        Self {
            name,
            courses: IndexMap::new(),
        }
    }

    /// Adds a course. A repeated code replaces the earlier record in place.
    pub fn insert(&mut self, course: CourseRecord) {
        self.courses.insert(course.code.clone(), course);
    }

    pub fn course(&self, code: &str) -> Option<&CourseRecord> {
        self.courses.get(code)
    }
}

/// The whole catalog: department name to its courses, in discovery order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FullCatalog {
    pub departments: IndexMap<String, DepartmentCatalog>,
}

impl FullCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merges a department, overwriting any department of the same name
    pub fn merge(&mut self, department: DepartmentCatalog) {
        if self.departments.contains_key(&department.name) {
            ::log::warn!(
                "Department {} appears twice; keeping the later page",
                department.name
            );
        }
        self.departments.insert(department.name.clone(), department);
    }

    pub fn department(&self, name: &str) -> Option<&DepartmentCatalog> {
        self.departments.get(name)
    }

    pub fn department_names(&self) -> impl Iterator<Item = &str> {
        self.departments.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.departments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.departments.is_empty()
    }

    /// Total number of courses across all departments
    pub fn course_count(&self) -> usize {
        self.departments.values().map(|d| d.courses.len()).sum()
    }
}
