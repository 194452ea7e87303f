//! Student roster parsing from CSV text.
//!
//! The parser is deliberately forgiving: it targets hand-exported spreadsheets,
//! so malformed cells degrade to defaults instead of failing the whole upload.
//! There is no quoting or escaping support.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// A student with a name and a skill feature vector.
///
/// Immutable once parsed; skill ordering follows the roster's header columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    /// Display name (first CSV column).
    pub name: String,
    /// Numeric skill scores, one per skill column.
    pub skills: Vec<f32>,
}

impl Student {
    /// Creates a new student.
    #[must_use]
    pub fn new(name: impl Into<String>, skills: Vec<f32>) -> Self {
        Self {
            name: name.into(),
            skills,
        }
    }
}

/// A parsed roster: students plus the skill column headers.
///
/// # Examples
///
/// ```
/// use agrupar::roster::Roster;
///
/// let roster = Roster::parse("name,math,coding\nAlice,5,2\nBob,1,4");
/// assert_eq!(roster.len(), 2);
/// assert_eq!(roster.skill_headers(), ["math", "coding"]);
/// assert_eq!(roster.students()[0].skills, vec![5.0, 2.0]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Roster {
    students: Vec<Student>,
    skill_headers: Vec<String>,
}

impl Roster {
    /// Parses CSV text into a roster.
    ///
    /// The first line is the header row; its first column names the student
    /// column and the remaining columns name skills. Each following line is one
    /// student. Parsing never fails:
    ///
    /// - fewer than two lines yields an empty roster;
    /// - an empty name cell becomes `"Unknown"`;
    /// - a cell that fails numeric parsing becomes `0.0`.
    ///
    /// Cells are whitespace-trimmed, which also strips `\r` from CRLF input.
    #[must_use]
    pub fn parse(csv_text: &str) -> Self {
        let lines: Vec<&str> = csv_text.trim().split('\n').collect();
        if lines.len() < 2 {
            return Self::default();
        }

        let headers: Vec<String> = lines[0].split(',').map(|h| h.trim().to_string()).collect();
        let skill_headers = headers[1..].to_vec();

        let students = lines[1..]
            .iter()
            .map(|line| {
                let values: Vec<&str> = line.split(',').map(str::trim).collect();
                let name = match values.first() {
                    Some(v) if !v.is_empty() => (*v).to_string(),
                    _ => "Unknown".to_string(),
                };
                let skills = values[1..]
                    .iter()
                    .map(|v| v.parse::<f32>().unwrap_or(0.0))
                    .collect();
                Student { name, skills }
            })
            .collect();

        Self {
            students,
            skill_headers,
        }
    }

    /// Reads and parses a roster from a CSV file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file can't be read.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Ok(Self::parse(&text))
    }

    /// Returns the parsed students.
    #[must_use]
    pub fn students(&self) -> &[Student] {
        &self.students
    }

    /// Returns the skill column headers (header columns after the name column).
    #[must_use]
    pub fn skill_headers(&self) -> &[String] {
        &self.skill_headers
    }

    /// Returns the number of students.
    #[must_use]
    pub fn len(&self) -> usize {
        self.students.len()
    }

    /// Returns true if the roster has no students.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }
}

#[cfg(test)]
#[path = "roster_tests.rs"]
mod tests;
