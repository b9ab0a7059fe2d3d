//! Read-only queries. None of these write to the store.

use crate::commands::{CmdMessage, CmdResult};
use crate::error::{RollbookError, Result};
use crate::roster::Roster;
use crate::store::RecordStore;

pub fn all<S: RecordStore>(roster: &Roster<S>) -> Result<CmdResult> {
    let result = CmdResult::default().with_listed_students(roster.all().to_vec());
    if roster.is_empty() {
        return Ok(result.with_message(CmdMessage::info("No students found.")));
    }
    Ok(result)
}

pub fn by_roll<S: RecordStore>(roster: &Roster<S>, roll: i32) -> Result<CmdResult> {
    let student = roster
        .get_by_roll(roll)
        .ok_or(RollbookError::StudentNotFound(roll))?;
    Ok(CmdResult::default().with_listed_students(vec![student.clone()]))
}

pub fn topper<S: RecordStore>(roster: &Roster<S>) -> Result<CmdResult> {
    match roster.topper() {
        Some(student) => Ok(CmdResult::default().with_listed_students(vec![student.clone()])),
        None => Ok(CmdResult::default().with_message(CmdMessage::info("No students available."))),
    }
}

pub fn class<S: RecordStore>(roster: &Roster<S>, class_name: &str) -> Result<CmdResult> {
    let students: Vec<_> = roster
        .students_in_class(class_name)
        .into_iter()
        .cloned()
        .collect();
    let result = CmdResult::default();
    if students.is_empty() {
        return Ok(result.with_message(CmdMessage::info(format!(
            "No students in class {}.",
            class_name
        ))));
    }
    Ok(result.with_listed_students(students))
}
