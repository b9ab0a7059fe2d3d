use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::roster::Roster;
use crate::store::RecordStore;

pub fn run<S: RecordStore>(roster: &mut Roster<S>) -> Result<CmdResult> {
    roster.sort_by_percentage_desc()?;
    Ok(CmdResult::default()
        .with_listed_students(roster.all().to_vec())
        .with_message(CmdMessage::success("Sorted by percentage (descending).")))
}
