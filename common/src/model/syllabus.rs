use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The qualification-stage codes a syllabus document can be requested for.
///
/// The set is closed: the download issuer refuses any code outside it, so
/// nothing un-enumerated ever reaches a storage key. Codes parse
/// case-insensitively (`"f1"`, `"F1"`) and always render lowercase, which is
/// also their canonical JSON form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Level {
    F1,
    F2,
    F3,
    F4,
    F5,
    F6,
    F7,
    F8,
    F9,
    P1,
    P2,
    P3,
    P4,
    P5,
    P6,
    P7,
}

impl Level {
    pub const ALL: [Level; 16] = [
        Level::F1,
        Level::F2,
        Level::F3,
        Level::F4,
        Level::F5,
        Level::F6,
        Level::F7,
        Level::F8,
        Level::F9,
        Level::P1,
        Level::P2,
        Level::P3,
        Level::P4,
        Level::P5,
        Level::P6,
        Level::P7,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Level::F1 => "f1",
            Level::F2 => "f2",
            Level::F3 => "f3",
            Level::F4 => "f4",
            Level::F5 => "f5",
            Level::F6 => "f6",
            Level::F7 => "f7",
            Level::F8 => "f8",
            Level::F9 => "f9",
            Level::P1 => "p1",
            Level::P2 => "p2",
            Level::P3 => "p3",
            Level::P4 => "p4",
            Level::P5 => "p5",
            Level::P6 => "p6",
            Level::P7 => "p7",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Level {
    type Err = UnknownLevel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_ascii_lowercase();
        Level::ALL
            .iter()
            .copied()
            .find(|level| level.as_str() == code)
            .ok_or_else(|| UnknownLevel(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownLevel(pub String);

impl fmt::Display for UnknownLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown syllabus level: {}", self.0)
    }
}

impl std::error::Error for UnknownLevel {}

impl TryFrom<String> for Level {
    type Error = UnknownLevel;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Level> for String {
    fn from(level: Level) -> Self {
        level.as_str().to_string()
    }
}

/// One downloadable syllabus document as described by the CMS.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Syllabus {
    pub id: u32,
    pub level: Level,
    pub title: String,
    pub description: String,
    /// Descriptive storage key from the CMS record. Informational only: the
    /// download issuer derives the signed key from `level` alone.
    #[serde(rename = "fileKey")]
    pub file_key: String,
    pub version: String,
    #[serde(rename = "updatedAt")]
    pub updated_at: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_code_case_insensitively() {
        for level in Level::ALL {
            assert_eq!(level.as_str().parse::<Level>().unwrap(), level);
            assert_eq!(
                level.as_str().to_ascii_uppercase().parse::<Level>().unwrap(),
                level
            );
        }
    }

    #[test]
    fn rejects_unknown_codes() {
        assert!("f0".parse::<Level>().is_err());
        assert!("p8".parse::<Level>().is_err());
        assert!("".parse::<Level>().is_err());
        assert!("../../etc/passwd".parse::<Level>().is_err());
    }

    #[test]
    fn json_form_is_lowercase() {
        let json = serde_json::to_string(&Level::F1).unwrap();
        assert_eq!(json, "\"f1\"");
        let parsed: Level = serde_json::from_str("\"F7\"").unwrap();
        assert_eq!(parsed, Level::F7);
    }
}
