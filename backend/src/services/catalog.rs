use crate::models::{ExamInfo, ExamResult};
use std::collections::HashMap;

/// Source of exam schedule information, keyed by normalized course code
pub trait ExamCatalog: Send + Sync {
    /// Human-readable name of the data source
    fn source_name(&self) -> &'static str;

    /// Looks up a course code that has already been normalized
    fn get(&self, course_code: &str) -> Option<&ExamInfo>;
}

/// Trims surrounding whitespace and upper-cases a raw course code.
pub fn normalize_course_code(raw: &str) -> String {
    raw.trim().to_uppercase()
}

/// Resolves each non-blank course code against the catalog, keeping input
/// order and duplicates.
pub fn lookup_exams<S: AsRef<str>>(catalog: &dyn ExamCatalog, courses: &[S]) -> Vec<ExamResult> {
    courses
        .iter()
        .map(|raw| normalize_course_code(raw.as_ref()))
        .filter(|code| !code.is_empty())
        .map(|code| match catalog.get(&code) {
            Some(info) => ExamResult::found(code, info),
            None => ExamResult::not_found(code),
        })
        .collect()
}

/// Hardcoded exam table used until a registrar feed exists
#[derive(Debug, Clone)]
pub struct MockExamCatalog {
    exams: HashMap<String, ExamInfo>,
}

impl MockExamCatalog {
    pub fn new() -> Self {
        let mut catalog = Self {
            exams: HashMap::new(),
        };

        catalog.insert("MATA31", "2026-04-22", "09:00", "UTSC - HL 001");
        catalog.insert("PHY101", "2026-04-24", "14:00", "UTSC - BV 473");
        catalog.insert("CHEM101", "2026-04-26", "19:00", "UTSC - IC 130");

        catalog
    }

    fn insert(&mut self, course_code: &str, date: &str, time: &str, location: &str) {
        self.exams.insert(
            normalize_course_code(course_code),
            ExamInfo {
                date: date.to_string(),
                time: time.to_string(),
                location: location.to_string(),
            },
        );
    }
}

impl ExamCatalog for MockExamCatalog {
    fn source_name(&self) -> &'static str {
        "mock"
    }

    fn get(&self, course_code: &str) -> Option<&ExamInfo> {
        self.exams.get(course_code)
    }
}
