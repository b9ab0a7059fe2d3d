use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::roster::Roster;
use crate::store::RecordStore;

use super::helpers::shared_roll_warning;

pub fn run<S: RecordStore>(roster: &mut Roster<S>, roll: i32) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    if let Some(warning) = shared_roll_warning(roster, roll) {
        result.add_message(warning);
    }

    let removed: Vec<_> = roster
        .all()
        .iter()
        .filter(|s| s.roll() == roll)
        .cloned()
        .collect();
    let count = roster.remove_by_roll(roll)?;

    result.add_message(CmdMessage::success(format!(
        "Deleted {} student{} with roll {}",
        count,
        if count == 1 { "" } else { "s" },
        roll
    )));
    Ok(result.with_affected_students(removed))
}
