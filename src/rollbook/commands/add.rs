use crate::commands::{CmdMessage, CmdResult, NewStudent};
use crate::error::Result;
use crate::model::Student;
use crate::roster::Roster;
use crate::store::RecordStore;

use super::helpers::validate_marks;

pub fn run<S: RecordStore>(roster: &mut Roster<S>, input: NewStudent) -> Result<CmdResult> {
    validate_marks(&input.marks)?;

    let student = Student::new(input.name, input.class_name, input.roll, input.marks)
        .with_comment(input.comment);
    roster.add(student.clone())?;

    Ok(CmdResult::default()
        .with_message(CmdMessage::success(format!(
            "Student added: {} (class {}, roll {})",
            student.name(),
            student.class_name(),
            student.roll()
        )))
        .with_affected_students(vec![student]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RollbookError;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn adds_student_with_comment() {
        let mut roster = Roster::open(InMemoryStore::new());
        let input = NewStudent::new("Asha", "10A", 1, vec![70, 80]).with_comment("Neat work");
        let result = run(&mut roster, input).unwrap();

        assert_eq!(result.affected_students.len(), 1);
        assert_eq!(roster.all()[0].teacher_comment(), "Neat work");
        assert!(roster.store().content().contains("Neat work"));
    }

    #[test]
    fn rejects_out_of_range_marks_before_touching_roster() {
        let mut roster = Roster::open(InMemoryStore::new());
        let err = run(&mut roster, NewStudent::new("Asha", "10A", 1, vec![120])).unwrap_err();
        assert!(matches!(err, RollbookError::InvalidInput(_)));
        assert!(roster.is_empty());
        assert_eq!(roster.store().save_count(), 0);
    }

    #[test]
    fn duplicate_is_an_error() {
        let mut roster = Roster::open(InMemoryStore::new());
        run(&mut roster, NewStudent::new("Asha", "10A", 1, vec![70])).unwrap();
        let err = run(&mut roster, NewStudent::new("Ravi", "10A", 1, vec![60])).unwrap_err();
        assert!(matches!(err, RollbookError::DuplicateStudent { .. }));
        assert_eq!(roster.len(), 1);
    }
}
