use serde::{Deserialize, Serialize};

/// Scheduling details for a single course's exam.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ExamInfo {
    pub date: String,
    pub time: String,
    pub location: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExamStatus {
    Found,
    NotFound,
}

/// One entry of a lookup response. Fields other than `course_code` and
/// `status` are `None` when the course is unknown.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ExamResult {
    pub course_code: String,
    pub date: Option<String>,
    pub time: Option<String>,
    pub location: Option<String>,
    pub status: ExamStatus,
}

impl ExamResult {
    pub fn found(course_code: String, info: &ExamInfo) -> Self {
        Self {
            course_code,
            date: Some(info.date.clone()),
            time: Some(info.time.clone()),
            location: Some(info.location.clone()),
            status: ExamStatus::Found,
        }
    }

    pub fn not_found(course_code: String) -> Self {
        Self {
            course_code,
            date: None,
            time: None,
            location: None,
            status: ExamStatus::NotFound,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct NewExamRecord {
    pub course_code: String,
    pub date: String,
    pub time: String,
    pub location: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ExamRecord {
    pub id: i32,
    pub course_code: String,
    pub date: String,
    pub time: String,
    pub location: String,
}

impl ExamRecord {
    pub fn from_new(id: i32, new: NewExamRecord) -> Self {
        Self {
            id,
            course_code: new.course_code,
            date: new.date,
            time: new.time,
            location: new.location,
        }
    }
}
