use super::styles::{grade_style, heading, result_style};
use colored::Colorize;
use rollbook::api::{CmdMessage, MessageLevel};
use rollbook::error::RollbookError;
use rollbook::model::Student;
use std::io::{self, Write};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const NAME_WIDTH: usize = 24;
const CLASS_WIDTH: usize = 8;

pub(super) fn print_messages<W: Write>(out: &mut W, messages: &[CmdMessage]) -> io::Result<()> {
    for message in messages {
        match message.level {
            MessageLevel::Info => writeln!(out, "{}", message.content.dimmed())?,
            MessageLevel::Success => writeln!(out, "{}", message.content.green())?,
            MessageLevel::Warning => writeln!(out, "{}", message.content.yellow())?,
            MessageLevel::Error => writeln!(out, "{}", message.content.red())?,
        }
    }
    Ok(())
}

pub(super) fn print_error<W: Write>(out: &mut W, error: &RollbookError) -> io::Result<()> {
    writeln!(out, "{}", format!("Error: {}", error).red())
}

pub(super) fn print_report_cards<W: Write>(out: &mut W, students: &[Student]) -> io::Result<()> {
    for student in students {
        write!(out, "{}", student.report_card())?;
    }
    Ok(())
}

pub(super) fn print_table<W: Write>(out: &mut W, students: &[Student]) -> io::Result<()> {
    if students.is_empty() {
        return Ok(());
    }

    writeln!(
        out,
        "{}",
        heading().apply_to(format!(
            "{:>6}  {}  {}  {:>6}  {:>7}  {:<5} {}",
            "Roll",
            pad_to_width("Class", CLASS_WIDTH),
            pad_to_width("Name", NAME_WIDTH),
            "Total",
            "Percent",
            "Grade",
            "Result"
        ))
    )?;

    for s in students {
        let result = if s.is_pass() { "PASS" } else { "FAIL" };
        writeln!(
            out,
            "{:>6}  {}  {}  {:>6}  {:>6.2}%  {} {}",
            s.roll(),
            pad_to_width(&truncate_to_width(s.class_name(), CLASS_WIDTH), CLASS_WIDTH),
            pad_to_width(&truncate_to_width(s.name(), NAME_WIDTH), NAME_WIDTH),
            s.total(),
            s.percentage(),
            grade_style(s.grade()).apply_to(format!("{:<5}", s.grade())),
            result_style(s.is_pass()).apply_to(result),
        )?;
    }
    Ok(())
}

fn pad_to_width(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(padding))
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }
    result
}
