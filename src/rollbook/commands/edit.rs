use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::roster::Roster;
use crate::store::RecordStore;

use super::helpers::{shared_roll_warning, validate_marks};

pub fn marks<S: RecordStore>(
    roster: &mut Roster<S>,
    roll: i32,
    marks: Vec<i32>,
) -> Result<CmdResult> {
    validate_marks(&marks)?;

    let mut result = CmdResult::default();
    if let Some(warning) = shared_roll_warning(roster, roll) {
        result.add_message(warning);
    }

    let updated = roster.edit_marks(roll, marks)?.clone();
    result.add_message(CmdMessage::success(format!(
        "Marks updated for {} (roll {}): {:.2}% {}",
        updated.name(),
        updated.roll(),
        updated.percentage(),
        updated.grade()
    )));
    Ok(result.with_affected_students(vec![updated]))
}

pub fn comment<S: RecordStore>(
    roster: &mut Roster<S>,
    roll: i32,
    comment: String,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    if let Some(warning) = shared_roll_warning(roster, roll) {
        result.add_message(warning);
    }

    let updated = roster.edit_teacher_comment(roll, comment)?.clone();
    result.add_message(CmdMessage::success(format!(
        "Comment saved for {} (roll {})",
        updated.name(),
        updated.roll()
    )));
    Ok(result.with_affected_students(vec![updated]))
}
