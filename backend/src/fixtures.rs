//! Built-in seed catalogue served when the CMS is unreachable.
//!
//! Every payload built from this module is tagged
//! [`ContentSource::Fixture`](common::model::content::ContentSource), so the
//! degraded mode stays visible all the way to the browser console.

use chrono::Utc;

use common::model::post::BlogPost;
use common::model::syllabus::{Level, Syllabus};
use common::model::timetable::{ExamSlot, Timetable};

pub fn syllabi() -> Vec<Syllabus> {
    vec![
        syllabus(
            1,
            Level::F1,
            "Accountant in Business (AB/FAB)",
            "Introduces the role of accounting within business, covering business organization, corporate governance, human resources, and accounting systems.",
            "syllabus/f1-accountant-in-business.pdf",
        ),
        syllabus(
            2,
            Level::F2,
            "Management Accounting (MA/FMA)",
            "Covers the fundamentals of management accounting including costing, budgeting, and performance measurement.",
            "syllabus/f2-management-accounting.pdf",
        ),
        syllabus(
            3,
            Level::F3,
            "Financial Accounting (FA/FFA)",
            "Introduces financial accounting principles, double-entry bookkeeping, and preparation of basic financial statements.",
            "syllabus/f3-financial-accounting.pdf",
        ),
        syllabus(
            4,
            Level::F5,
            "Performance Management (PM)",
            "Advanced management accounting covering performance measurement, budgeting, and strategic performance management.",
            "syllabus/f5-performance-management.pdf",
        ),
        syllabus(
            5,
            Level::F7,
            "Financial Reporting (FR)",
            "Advanced financial accounting and reporting, including consolidated financial statements and analysis.",
            "syllabus/f7-financial-reporting.pdf",
        ),
        syllabus(
            6,
            Level::P1,
            "Governance, Risk and Ethics (SBL)",
            "Strategic level paper covering corporate governance, risk management, and professional ethics.",
            "syllabus/p1-governance-risk-ethics.pdf",
        ),
        syllabus(
            7,
            Level::P7,
            "Advanced Audit and Assurance (AAA)",
            "Advanced auditing covering complex audits, regulatory environment, and professional responsibilities.",
            "syllabus/p7-advanced-audit-assurance.pdf",
        ),
    ]
}

pub fn posts() -> Vec<BlogPost> {
    let today = Utc::now().to_rfc3339();
    vec![
        BlogPost {
            id: 1,
            title: "How to Pass ACCA F1: Complete Study Guide".to_string(),
            slug: "how-to-pass-acca-f1".to_string(),
            excerpt: "Everything you need to know to ace your ACCA F1 exam".to_string(),
            content: "Start with the examinable documents, build a weekly plan around the study text chapters, and leave the last two weeks for mock exams under timed conditions.".to_string(),
            published_at: today.clone(),
        },
        BlogPost {
            id: 2,
            title: "ACCA Exam Tips: Time Management Strategies".to_string(),
            slug: "acca-exam-time-management".to_string(),
            excerpt: "Master time management for your ACCA exams".to_string(),
            content: "Allocate 1.8 minutes per mark, answer the questions you know first, and never leave an objective-test question blank.".to_string(),
            published_at: today,
        },
    ]
}

pub fn timetables() -> Vec<Timetable> {
    vec![
        Timetable {
            id: 1,
            exam_session: "June 2026".to_string(),
            registration_deadline: "2026-04-30".to_string(),
            subjects: vec![
                slot(Level::F1, "2026-06-01"),
                slot(Level::F2, "2026-06-03"),
                slot(Level::F3, "2026-06-05"),
                slot(Level::F5, "2026-06-08"),
                slot(Level::F7, "2026-06-10"),
            ],
        },
        Timetable {
            id: 2,
            exam_session: "December 2026".to_string(),
            registration_deadline: "2026-10-31".to_string(),
            subjects: vec![
                slot(Level::F1, "2026-12-01"),
                slot(Level::F2, "2026-12-03"),
                slot(Level::F3, "2026-12-05"),
                slot(Level::P1, "2026-12-08"),
                slot(Level::P7, "2026-12-10"),
            ],
        },
    ]
}

fn syllabus(id: u32, level: Level, title: &str, description: &str, file_key: &str) -> Syllabus {
    Syllabus {
        id,
        level,
        title: title.to_string(),
        description: description.to_string(),
        file_key: file_key.to_string(),
        version: "2024-2025".to_string(),
        updated_at: "2024-09-01".to_string(),
    }
}

fn slot(level: Level, exam_date: &str) -> ExamSlot {
    ExamSlot {
        level,
        exam_date: exam_date.to_string(),
    }
}
