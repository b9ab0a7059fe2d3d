//! # Command Layer
//!
//! One function per user-facing operation. Each takes the roster plus plain Rust
//! arguments and returns a [`CmdResult`]: the students to show and the messages to print.
//! Nothing here touches the terminal.
//!
//! Range checks on user input (marks in 0..=100) live here, not in the roster. The
//! roster trusts its callers; the command layer is the caller that faces users.

use crate::model::Student;

pub mod add;
pub mod edit;
pub mod helpers;
pub mod remove;
pub mod sort;
pub mod view;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_students: Vec<Student>,
    pub listed_students: Vec<Student>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_students(mut self, students: Vec<Student>) -> Self {
        self.affected_students = students;
        self
    }

    pub fn with_listed_students(mut self, students: Vec<Student>) -> Self {
        self.listed_students = students;
        self
    }

    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }
}

/// Input for creating a student.
#[derive(Debug, Clone)]
pub struct NewStudent {
    pub name: String,
    pub class_name: String,
    pub roll: i32,
    pub marks: Vec<i32>,
    pub comment: String,
}

impl NewStudent {
    pub fn new(
        name: impl Into<String>,
        class_name: impl Into<String>,
        roll: i32,
        marks: Vec<i32>,
    ) -> Self {
        Self {
            name: name.into(),
            class_name: class_name.into(),
            roll,
            marks,
            comment: String::new(),
        }
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = comment.into();
        self
    }
}
