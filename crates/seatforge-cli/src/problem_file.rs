//! Classroom problem files.
//!
//! A problem file describes one classroom: grid size, roster, rules and
//! optional seat grids. TOML example:
//!
//! ```toml
//! rows = 2
//! cols = 3
//! students = ["Alice", { name = "Bob", gender = "male" }, "Cara"]
//! unavailable = [[1, 2]]
//!
//! [[constraints]]
//! type = "together"
//! student1 = "Alice"
//! student2 = "Bob"
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;

use seatforge::{Constraint, Problem, SeatRestriction, Student};

use crate::error::CliError;

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum StudentEntry {
    Name(String),
    Full(Student),
}

impl From<StudentEntry> for Student {
    fn from(entry: StudentEntry) -> Self {
        match entry {
            StudentEntry::Name(name) => Student::new(name),
            StudentEntry::Full(student) => student,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProblemFile {
    pub rows: usize,
    pub cols: usize,
    #[serde(default)]
    pub students: Vec<StudentEntry>,
    #[serde(default)]
    pub constraints: Vec<Constraint>,
    pub availability: Option<Vec<Vec<bool>>>,
    pub seat_genders: Option<Vec<Vec<SeatRestriction>>>,
    /// Seats closed on top of `availability`, as `[row, col]`.
    #[serde(default)]
    pub unavailable: Vec<[usize; 2]>,
}

impl ProblemFile {
    /// Reads a problem file, choosing the parser by extension.
    pub fn load(path: &Path) -> Result<Self, CliError> {
        let text = fs::read_to_string(path).map_err(|source| CliError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let parse_err = |message: String| CliError::Parse {
            path: path.to_path_buf(),
            message,
        };

        match path.extension().and_then(|e| e.to_str()) {
            Some("toml") => toml::from_str(&text).map_err(|e| parse_err(e.to_string())),
            Some("yaml") | Some("yml") => {
                serde_yaml::from_str(&text).map_err(|e| parse_err(e.to_string()))
            }
            Some("json") => serde_json::from_str(&text).map_err(|e| parse_err(e.to_string())),
            _ => Err(CliError::UnsupportedFormat(path.to_path_buf())),
        }
    }

    pub fn into_problem(self) -> Result<Problem, CliError> {
        let mut builder = Problem::builder(self.rows, self.cols)
            .students(self.students)
            .constraints(self.constraints);
        if let Some(grid) = self.availability {
            builder = builder.availability(grid);
        }
        if let Some(grid) = self.seat_genders {
            builder = builder.seat_genders(grid);
        }
        for [row, col] in self.unavailable {
            builder = builder.unavailable(row, col);
        }
        Ok(builder.build()?)
    }
}
