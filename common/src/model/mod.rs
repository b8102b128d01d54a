pub mod content;
pub mod lead;
pub mod post;
pub mod syllabus;
pub mod timetable;
