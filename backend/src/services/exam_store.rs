use crate::error::ApiError;
use crate::models::{ExamRecord, NewExamRecord};
use std::sync::Mutex;

/// In-memory list of exam records.
///
/// Id assignment and the append happen under one lock, so concurrent creates
/// always receive distinct, consecutive ids.
#[derive(Debug)]
pub struct ExamStore {
    records: Mutex<Vec<ExamRecord>>,
}

impl ExamStore {
    pub fn new(records: Vec<ExamRecord>) -> Self {
        Self {
            records: Mutex::new(records),
        }
    }

    /// Store holding the two records every process starts with
    pub fn seeded() -> Self {
        Self::new(vec![
            ExamRecord {
                id: 1,
                course_code: "MATA31".to_string(),
                date: "2026-04-22".to_string(),
                time: "09:00".to_string(),
                location: "UTSC - HL 001".to_string(),
            },
            ExamRecord {
                id: 2,
                course_code: "PHY101".to_string(),
                date: "2026-04-24".to_string(),
                time: "14:00".to_string(),
                location: "UTSC - BV 473".to_string(),
            },
        ])
    }

    pub fn list(&self) -> Result<Vec<ExamRecord>, ApiError> {
        let records = self.records.lock().map_err(|_| ApiError::StoreUnavailable)?;
        Ok(records.clone())
    }

    pub fn create(&self, new: NewExamRecord) -> Result<ExamRecord, ApiError> {
        let mut records = self.records.lock().map_err(|_| ApiError::StoreUnavailable)?;

        // Next id follows the last element, not the maximum
        let id = records.last().map(|r| r.id + 1).unwrap_or(1);
        let record = ExamRecord::from_new(id, new);
        records.push(record.clone());

        Ok(record)
    }
}
