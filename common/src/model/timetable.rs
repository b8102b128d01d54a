use serde::{Deserialize, Serialize};

use crate::model::syllabus::Level;

/// One exam sitting as described by the CMS: a session label, the
/// registration cutoff, and the per-paper exam dates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Timetable {
    pub id: u32,
    #[serde(rename = "examSession")]
    pub exam_session: String,
    #[serde(rename = "registrationDeadline")]
    pub registration_deadline: String,
    pub subjects: Vec<ExamSlot>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExamSlot {
    pub level: Level,
    #[serde(rename = "examDate")]
    pub exam_date: String,
}
