//! # API Facade
//!
//! The single entry point for UI clients (the CLI subcommands and the interactive menu).
//! It owns the [`Roster`] and dispatches each call to the matching command function.
//!
//! The facade holds no logic of its own. Rules about records live in the roster,
//! input checks and user-facing messages live in `commands/*.rs`.
//!
//! `RollbookApi<S: RecordStore>` is generic over storage:
//! - Production: `RollbookApi<FileStore>`
//! - Testing: `RollbookApi<InMemoryStore>`

use crate::commands;
use crate::error::Result;
use crate::model::Student;
use crate::roster::Roster;
use crate::store::RecordStore;

pub struct RollbookApi<S: RecordStore> {
    roster: Roster<S>,
}

impl<S: RecordStore> RollbookApi<S> {
    pub fn new(store: S) -> Self {
        Self {
            roster: Roster::open(store),
        }
    }

    pub fn add_student(&mut self, input: commands::NewStudent) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.roster, input)
    }

    pub fn list_students(&self) -> Result<commands::CmdResult> {
        commands::view::all(&self.roster)
    }

    pub fn view_student(&self, roll: i32) -> Result<commands::CmdResult> {
        commands::view::by_roll(&self.roster, roll)
    }

    pub fn topper(&self) -> Result<commands::CmdResult> {
        commands::view::topper(&self.roster)
    }

    pub fn class_students(&self, class_name: &str) -> Result<commands::CmdResult> {
        commands::view::class(&self.roster, class_name)
    }

    pub fn sort_students(&mut self) -> Result<commands::CmdResult> {
        commands::sort::run(&mut self.roster)
    }

    pub fn edit_marks(&mut self, roll: i32, marks: Vec<i32>) -> Result<commands::CmdResult> {
        commands::edit::marks(&mut self.roster, roll, marks)
    }

    pub fn edit_comment(&mut self, roll: i32, comment: String) -> Result<commands::CmdResult> {
        commands::edit::comment(&mut self.roster, roll, comment)
    }

    pub fn remove_students(&mut self, roll: i32) -> Result<commands::CmdResult> {
        commands::remove::run(&mut self.roster, roll)
    }

    /// True when `(roll, class_name)` is already taken.
    pub fn is_taken(&self, roll: i32, class_name: &str) -> bool {
        self.roster
            .all()
            .iter()
            .any(|s| s.roll() == roll && s.class_name() == class_name)
    }

    pub fn roll_exists(&self, roll: i32) -> bool {
        self.roster.roll_exists(roll)
    }

    pub fn student(&self, roll: i32) -> Option<&Student> {
        self.roster.get_by_roll(roll)
    }

    pub fn roster(&self) -> &Roster<S> {
        &self.roster
    }
}

pub use crate::commands::{CmdMessage, CmdResult, MessageLevel, NewStudent};
