pub mod download;
pub mod lead_form;
pub mod syllabus;
