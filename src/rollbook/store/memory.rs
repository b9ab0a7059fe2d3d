use super::{parse_records, render_records, RecordStore};
use crate::error::{RollbookError, Result};
use crate::model::Student;

/// In-memory storage for testing and development.
/// Keeps the encoded text so records still pass through the line codec.
#[derive(Default)]
pub struct InMemoryStore {
    content: String,
    fail_loads: bool,
    fail_saves: bool,
    saves: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from raw stored text, as if read from a file.
    pub fn with_content(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ..Self::default()
        }
    }

    /// When set, every `load` fails as an unreadable file would.
    pub fn set_fail_loads(&mut self, fail: bool) {
        self.fail_loads = fail;
    }

    /// When set, every `save` fails and leaves the stored text untouched.
    pub fn set_fail_saves(&mut self, fail: bool) {
        self.fail_saves = fail;
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Number of successful saves so far.
    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl RecordStore for InMemoryStore {
    fn load(&self) -> Result<Vec<Student>> {
        if self.fail_loads {
            return Err(RollbookError::Store("simulated load failure".to_string()));
        }
        Ok(parse_records(self.content.as_bytes()))
    }

    fn save(&mut self, students: &[Student]) -> Result<()> {
        if self.fail_saves {
            return Err(RollbookError::Store("simulated save failure".to_string()));
        }
        self.content = render_records(students);
        self.saves += 1;
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::roster::Roster;

    /// A roster over an in-memory store, preloaded with `students` in order.
    pub fn roster_with(students: &[Student]) -> Roster<InMemoryStore> {
        Roster::open(InMemoryStore::with_content(render_records(students)))
    }

    pub fn sample_students() -> Vec<Student> {
        vec![
            Student::new("Asha", "10A", 1, vec![50, 50]),
            Student::new("Ravi", "10A", 2, vec![90, 90]),
            Student::new("Meera", "10B", 1, vec![90, 90]),
            Student::new("Tom", "10B", 3, vec![30, 30]),
        ]
    }
}
