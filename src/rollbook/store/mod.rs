//! # Storage Layer
//!
//! The [`RecordStore`] trait is the seam between the roster and wherever its lines live.
//! A store reads and writes the *whole* collection at once; there is no per-record update.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production storage, one delimited text file.
//!   - Writes go to a temp file next to the target and are renamed over it.
//!   - A missing file loads as an empty collection.
//!   - Lines are decoded one at a time, so a line that is not UTF-8 costs only itself.
//!
//! - [`memory::InMemoryStore`]: Keeps encoded lines in memory for tests.
//!   - Can be told to fail saves, to exercise rollback paths.
//!
//! Both implementations go through the line codec, so a record that survives the
//! memory store also survives the file store.

use crate::codec;
use crate::error::Result;
use crate::model::Student;
use tracing::warn;

pub mod fs;
pub mod memory;

/// Abstract interface for student storage.
pub trait RecordStore {
    /// Read every well-formed record, in stored order.
    fn load(&self) -> Result<Vec<Student>>;

    /// Replace the stored collection with `students`.
    ///
    /// Must be all-or-nothing: on error the previous contents stay readable.
    fn save(&mut self, students: &[Student]) -> Result<()>;
}

/// Decodes stored bytes line by line, skipping blank, non-UTF-8 and malformed lines.
pub(crate) fn parse_records(content: &[u8]) -> Vec<Student> {
    let mut students = Vec::new();
    for (number, raw) in content.split(|b| *b == b'\n').enumerate() {
        let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
        if raw.is_empty() {
            continue;
        }
        let line = match std::str::from_utf8(raw) {
            Ok(line) => line,
            Err(e) => {
                warn!(line = number + 1, error = %e, "skipping record that is not valid UTF-8");
                continue;
            }
        };
        match codec::decode(line) {
            Ok(student) => students.push(student),
            Err(e) => warn!(line = number + 1, error = %e, "skipping unreadable record"),
        }
    }
    students
}

pub(crate) fn render_records(students: &[Student]) -> String {
    let mut out = String::new();
    for student in students {
        out.push_str(&student.to_line());
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_skips_blank_and_short_lines() {
        let content = "Asha,10A,7,\"80\",80,80.00,A,1,\n\nBroken,line,3\r\n";
        let students = parse_records(content.as_bytes());
        assert_eq!(students.len(), 1);
        assert_eq!(students[0].name(), "Asha");
    }

    #[test]
    fn parse_accepts_crlf() {
        let content = "A,1,1,\"50\",50,50.00,C,1,ok\r\nB,1,2,\"60\",60,60.00,B,1,fine\r\n";
        let students = parse_records(content.as_bytes());
        assert_eq!(students.len(), 2);
        assert_eq!(students[0].teacher_comment(), "ok");
        assert_eq!(students[1].teacher_comment(), "fine");
    }

    #[test]
    fn render_writes_one_line_per_record() {
        let students = vec![
            Student::new("A", "1", 1, vec![10]),
            Student::new("B", "1", 2, vec![20]),
        ];
        let text = render_records(&students);
        assert_eq!(text.lines().count(), 2);
        assert!(text.ends_with('\n'));
        assert_eq!(parse_records(text.as_bytes()), students);
    }

    #[test]
    fn parse_skips_only_the_line_that_is_not_utf8() {
        let mut content = b"A,1,1,\"50\",50,50.00,C,1,ok\n".to_vec();
        content.extend_from_slice(b"Ren\xe9,1,2,\"60\",60,60.00,B,1,\n");
        content.extend_from_slice(b"C,1,3,\"70\",70,70.00,B+,1,\n");

        let students = parse_records(&content);
        let names: Vec<&str> = students.iter().map(|s| s.name()).collect();
        assert_eq!(names, vec!["A", "C"]);
    }
}
