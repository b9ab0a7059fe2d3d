//! The interactive numbered menu.
//!
//! Mirrors the subcommands one-to-one, collecting arguments through [`Prompter`]
//! instead of the command line. Errors from an action are printed and the menu carries
//! on; only end of input stops it early.

use super::print::{print_error, print_messages, print_report_cards};
use super::prompt::{is_end_of_input, Prompter};
use rollbook::api::{CmdMessage, CmdResult, NewStudent, RollbookApi};
use rollbook::error::{RollbookError, Result};
use rollbook::store::RecordStore;
use std::io::{BufRead, Write};

const MENU: &str = "
Menu:
1. Add Student
2. View All Report Cards
3. Search by Roll
4. Show Topper
5. Sort by Percentage (desc)
6. Edit Student Marks
7. Edit Teacher Comment
8. List Students by Class
9. Delete Student
0. Exit";

const MAX_SUBJECTS: i32 = 50;

pub fn run<S: RecordStore, R: BufRead, W: Write>(
    api: &mut RollbookApi<S>,
    prompter: &mut Prompter<R, W>,
) -> Result<()> {
    writeln!(prompter.out(), "Student Report Card Management System")?;
    match menu_loop(api, prompter) {
        Err(e) if is_end_of_input(&e) => {
            writeln!(prompter.out())?;
            Ok(())
        }
        other => other,
    }
}

fn menu_loop<S: RecordStore, R: BufRead, W: Write>(
    api: &mut RollbookApi<S>,
    p: &mut Prompter<R, W>,
) -> Result<()> {
    loop {
        writeln!(p.out(), "{}", MENU)?;
        let choice = p.read_int("Choose option: ")?;

        let mut heading = None;
        let outcome = match choice {
            0 => {
                writeln!(p.out(), "Exiting. Goodbye!")?;
                return Ok(());
            }
            1 => add(api, p),
            2 => api.list_students(),
            3 => {
                let roll = p.read_int("Enter roll to search: ")?;
                api.view_student(roll)
            }
            4 => {
                heading = Some("Class Topper:");
                api.topper()
            }
            5 => api.sort_students().map(|mut result| {
                result.listed_students.clear();
                result
            }),
            6 => edit_marks(api, p),
            7 => edit_comment(api, p),
            8 => {
                let class_name = p.read_line("Class: ")?;
                api.class_students(&class_name)
            }
            9 => {
                let roll = p.read_int("Roll to delete: ")?;
                api.remove_students(roll)
            }
            _ => Ok(CmdResult::default().with_message(CmdMessage::error("Invalid choice."))),
        };

        show(p.out(), outcome, heading)?;
        p.pause()?;
    }
}

fn show<W: Write>(out: &mut W, outcome: Result<CmdResult>, heading: Option<&str>) -> Result<()> {
    match outcome {
        Ok(result) => {
            if let (Some(heading), false) = (heading, result.listed_students.is_empty()) {
                writeln!(out, "{}", heading)?;
            }
            print_report_cards(out, &result.listed_students)?;
            print_messages(out, &result.messages)?;
        }
        Err(e) if is_end_of_input(&e) => return Err(e),
        Err(e) => print_error(out, &e)?,
    }
    Ok(())
}

fn add<S: RecordStore, R: BufRead, W: Write>(
    api: &mut RollbookApi<S>,
    p: &mut Prompter<R, W>,
) -> Result<CmdResult> {
    let name = p.read_line("Name: ")?;
    let class_name = p.read_line("Class: ")?;

    let roll = loop {
        let roll = p.read_int("Roll no: ")?;
        if !api.is_taken(roll, &class_name) {
            break roll;
        }
        writeln!(
            p.out(),
            "Error: Roll {} already exists in class {}. Try another.",
            roll, class_name
        )?;
    };

    let count = p.read_count("Number of subjects: ", MAX_SUBJECTS)?;
    let marks = p.read_marks(count)?;
    let comment = p.read_line("Teacher comment (optional): ")?;

    api.add_student(NewStudent::new(name, class_name, roll, marks).with_comment(comment))
}

fn edit_marks<S: RecordStore, R: BufRead, W: Write>(
    api: &mut RollbookApi<S>,
    p: &mut Prompter<R, W>,
) -> Result<CmdResult> {
    let roll = p.read_int("Roll to edit marks: ")?;
    let current = match api.student(roll) {
        Some(student) => student
            .marks()
            .iter()
            .map(|m| m.to_string())
            .collect::<Vec<_>>()
            .join(" "),
        None => return Err(RollbookError::StudentNotFound(roll)),
    };
    writeln!(p.out(), "Current marks: {}", current)?;

    let count = p.read_count("Number of subjects (replace): ", MAX_SUBJECTS)?;
    let marks = p.read_marks(count)?;
    api.edit_marks(roll, marks)
}

fn edit_comment<S: RecordStore, R: BufRead, W: Write>(
    api: &mut RollbookApi<S>,
    p: &mut Prompter<R, W>,
) -> Result<CmdResult> {
    let roll = p.read_int("Roll to comment on: ")?;
    let current = match api.student(roll) {
        Some(student) => student.teacher_comment().to_string(),
        None => return Err(RollbookError::StudentNotFound(roll)),
    };
    if !current.is_empty() {
        writeln!(p.out(), "Current comment: {}", current)?;
    }

    let comment = p.read_line("New comment: ")?;
    api.edit_comment(roll, comment)
}
