//! On-disk JSON snapshot of a harvested catalog.
//!
//! Layout, indented by four spaces:
//!
//! ```json
//! {
//!     "Statistics (STAT)": {
//!         "courses": {
//!             "STAT 130": {
//!                 "name": "Introduction to Statistical Reasoning",
//!                 "units": "4 units",
//!                 "prerequisites": "Term Typically Offered: F, W, SP",
//!                 "description": "..."
//!             }
//!         }
//!     }
//! }
//! ```

use crate::catalog::BuildReport;
use crate::error::SnapshotError;
use crate::results::{CourseRecord, DepartmentCatalog, FullCatalog};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::ser::PrettyFormatter;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

#[derive(Debug, Serialize, Deserialize)]
struct SnapshotDepartment {
    courses: IndexMap<String, SnapshotCourse>,
}

#[derive(Debug, Serialize, Deserialize)]
struct SnapshotCourse {
    name: String,
    units: String,
    prerequisites: String,
    description: String,
}

type Snapshot = IndexMap<String, SnapshotDepartment>;

impl From<&CourseRecord> for SnapshotCourse {
    fn from(course: &CourseRecord) -> Self {
        Self {
            name: course.name.clone(),
            units: course.units.clone(),
            prerequisites: course.prerequisites_raw.clone(),
            description: course.description.clone(),
        }
    }
}

fn to_snapshot(catalog: &FullCatalog) -> Snapshot {
    catalog
        .departments
        .iter()
        .map(|(name, department)| {
            let courses = department
                .courses
                .iter()
                .map(|(code, course)| (code.clone(), SnapshotCourse::from(course)))
                .collect();
            (name.clone(), SnapshotDepartment { courses })
        })
        .collect()
}

fn from_snapshot(snapshot: Snapshot) -> FullCatalog {
    let mut catalog = FullCatalog::new();
    for (name, department) in snapshot {
        let mut dept = DepartmentCatalog::new(name);
        for (code, course) in department.courses {
            dept.insert(CourseRecord {
                code,
                name: course.name,
                units: course.units,
                prerequisites_raw: course.prerequisites,
                description: course.description,
            });
        }
        catalog.merge(dept);
    }
    catalog
}

/// Write the catalog as indented JSON
pub fn write_to<W: Write>(catalog: &FullCatalog, writer: W) -> Result<(), SnapshotError> {
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(writer, formatter);
    to_snapshot(catalog).serialize(&mut serializer)?;
    Ok(())
}

/// Render the catalog as an indented JSON string
pub fn to_json(catalog: &FullCatalog) -> Result<String, SnapshotError> {
    let mut buf = Vec::new();
    write_to(catalog, &mut buf)?;
    // serde_json only ever emits UTF-8
    Ok(String::from_utf8(buf).expect("serde_json output is valid UTF-8"))
}

pub fn from_json(json: &str) -> Result<FullCatalog, SnapshotError> {
    let snapshot: Snapshot = serde_json::from_str(json)?;
    Ok(from_snapshot(snapshot))
}

/// Save the catalog to `path`, replacing any existing file
pub fn save<P: AsRef<Path>>(catalog: &FullCatalog, path: P) -> Result<(), SnapshotError> {
    let mut writer = BufWriter::new(File::create(path.as_ref())?);
    write_to(catalog, &mut writer)?;
    writer.flush()?;
    ::log::info!(
        "Wrote {} departments to {}",
        catalog.len(),
        path.as_ref().display()
    );
    Ok(())
}

/// Save a harvest to `path` unless it produced no departments
///
/// Returns `false` and leaves any existing file untouched when the catalog
/// is empty.
pub fn save_report<P: AsRef<Path>>(
    report: &BuildReport,
    path: P,
) -> Result<bool, SnapshotError> {
    if report.catalog.is_empty() {
        ::log::warn!(
            "Harvest produced no departments; not writing {}",
            path.as_ref().display()
        );
        return Ok(false);
    }
    save(&report.catalog, path)?;
    Ok(true)
}

pub fn load<P: AsRef<Path>>(path: P) -> Result<FullCatalog, SnapshotError> {
    let reader = BufReader::new(File::open(path.as_ref())?);
    let snapshot: Snapshot = serde_json::from_reader(reader)?;
    Ok(from_snapshot(snapshot))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_catalog() -> FullCatalog {
        let mut stat = DepartmentCatalog::new("Statistics (STAT)".to_string());
        stat.insert(CourseRecord {
            code: "STAT 130".to_string(),
            name: "Introduction to Statistical Reasoning".to_string(),
            units: "4 units".to_string(),
            prerequisites_raw: "Term Typically Offered: F, W, SP".to_string(),
            description: "Scientific method.".to_string(),
        });
        stat.insert(CourseRecord {
            code: "STAT 150".to_string(),
            name: "Introduction to the Discipline".to_string(),
            units: "1 unit".to_string(),
            prerequisites_raw: String::new(),
            description: String::new(),
        });

        let mut catalog = FullCatalog::new();
        catalog.merge(stat);
        catalog.merge(DepartmentCatalog::new("Art (ART)".to_string()));
        catalog
    }

    #[test]
    fn test_layout_and_indentation() {
        let json = to_json(&sample_catalog()).unwrap();

        let expected_head = r#"{
    "Statistics (STAT)": {
        "courses": {
            "STAT 130": {
                "name": "Introduction to Statistical Reasoning",
                "units": "4 units",
                "prerequisites": "Term Typically Offered: F, W, SP",
                "description": "Scientific method."
            },"#;
        assert!(json.starts_with(expected_head), "unexpected layout:\n{}", json);

        // Departments keep discovery order rather than sorting
        let stat_pos = json.find("Statistics (STAT)").unwrap();
        let art_pos = json.find("Art (ART)").unwrap();
        assert!(stat_pos < art_pos);
    }

    #[test]
    fn test_reload_restores_codes_and_order() {
        let catalog = sample_catalog();
        let reloaded = from_json(&to_json(&catalog).unwrap()).unwrap();

        assert_eq!(reloaded, catalog);
        let stat = reloaded.department("Statistics (STAT)").unwrap();
        assert_eq!(stat.course("STAT 150").unwrap().code, "STAT 150");
    }

    #[test]
    fn test_save_and_load_file() {
        let path = std::env::temp_dir().join(format!(
            "course-catalog-snapshot-{}.json",
            std::process::id()
        ));

        let catalog = sample_catalog();
        save(&catalog, &path).unwrap();
        let loaded = load(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(loaded, catalog);
    }

    fn report(catalog: FullCatalog) -> BuildReport {
        BuildReport {
            links_found: catalog.len(),
            catalog,
            failures: Vec::new(),
        }
    }

    #[test]
    fn test_empty_report_keeps_existing_snapshot() {
        let path = std::env::temp_dir().join(format!(
            "course-catalog-empty-report-{}.json",
            std::process::id()
        ));
        save(&sample_catalog(), &path).unwrap();
        let before = std::fs::read_to_string(&path).unwrap();

        let written = save_report(&report(FullCatalog::new()), &path).unwrap();
        let after = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert!(!written);
        assert_eq!(after, before);
    }

    #[test]
    fn test_report_replaces_snapshot() {
        let path = std::env::temp_dir().join(format!(
            "course-catalog-report-{}.json",
            std::process::id()
        ));
        std::fs::write(&path, "{}").unwrap();

        let written = save_report(&report(sample_catalog()), &path).unwrap();
        let loaded = load(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert!(written);
        assert_eq!(loaded, sample_catalog());
    }

    #[test]
    fn test_malformed_snapshot() {
        assert!(matches!(
            from_json(r#"{"Art (ART)": {"courses": []}}"#),
            Err(SnapshotError::Json(_))
        ));
        assert!(matches!(
            load("/nonexistent/course_info.json"),
            Err(SnapshotError::Io(_))
        ));
    }
}
