pub mod catalog;
pub mod exam_store;

pub use catalog::{ExamCatalog, MockExamCatalog};
pub use exam_store::ExamStore;
