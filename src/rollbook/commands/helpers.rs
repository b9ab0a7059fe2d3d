use crate::commands::CmdMessage;
use crate::error::{RollbookError, Result};
use crate::model::MAX_MARK;
use crate::roster::Roster;
use crate::store::RecordStore;

pub fn validate_marks(marks: &[i32]) -> Result<()> {
    if let Some((i, m)) = marks
        .iter()
        .enumerate()
        .find(|(_, m)| !(0..=MAX_MARK).contains(*m))
    {
        return Err(RollbookError::InvalidInput(format!(
            "mark {} for subject {} is outside 0-{}",
            m,
            i + 1,
            MAX_MARK
        )));
    }
    Ok(())
}

/// A warning when `roll` is used in more than one class, since roll-only
/// operations cannot tell those students apart.
pub fn shared_roll_warning<S: RecordStore>(roster: &Roster<S>, roll: i32) -> Option<CmdMessage> {
    let classes = roster.classes_with_roll(roll);
    if classes.len() > 1 {
        Some(CmdMessage::warning(format!(
            "Roll {} is used in classes {}",
            roll,
            classes.join(", ")
        )))
    } else {
        None
    }
}
