//! # Line Codec
//!
//! Each student is stored as one comma-delimited line:
//!
//! ```text
//! name,class,roll,"m1;m2;m3",total,percentage,grade,pass,comment
//! ```
//!
//! - Any field containing `,` or `"` is wrapped in quotes, with inner quotes doubled.
//! - The marks field is always quoted and joined by `;`. It is empty for zero subjects.
//! - `percentage` has exactly two decimals; `pass` is `1` or `0`.
//!
//! Total, percentage, grade and pass are written for readers of the raw file only.
//! Decoding throws them away and recalculates from the marks, so a hand-edited total
//! can never disagree with the marks it came from.
//!
//! One record is one line, so free text may not contain `\n` or `\r`. [`check_student`]
//! rejects such records before they are written.
//!
//! Decoding needs at least [`FIELD_COUNT`] fields. Anything past the comment (field 8)
//! is ignored, so files written by a newer layout with trailing fields still load.

use crate::error::{RollbookError, Result};
use crate::model::Student;

pub const DELIMITER: char = ',';
pub const MARKS_DELIMITER: char = ';';
pub const QUOTE: char = '"';

/// Minimum number of fields a stored line must carry.
pub const FIELD_COUNT: usize = 9;

const NAME: usize = 0;
const CLASS: usize = 1;
const ROLL: usize = 2;
const MARKS: usize = 3;
const COMMENT: usize = 8;

pub fn escape_field(value: &str) -> String {
    if !value.contains(DELIMITER) && !value.contains(QUOTE) {
        return value.to_string();
    }
    let mut out = String::with_capacity(value.len() + 2);
    out.push(QUOTE);
    for c in value.chars() {
        if c == QUOTE {
            out.push(QUOTE);
        }
        out.push(c);
    }
    out.push(QUOTE);
    out
}

fn check_text(field: &str, value: &str) -> Result<()> {
    if value.contains(|c: char| c == '\n' || c == '\r') {
        return Err(RollbookError::InvalidInput(format!(
            "{} may not contain a line break",
            field
        )));
    }
    Ok(())
}

/// Fails with `InvalidInput` if any text field of `student` cannot be stored on one line.
pub fn check_student(student: &Student) -> Result<()> {
    check_text("name", student.name())?;
    check_text("class", student.class_name())?;
    check_text("comment", student.teacher_comment())
}

/// Strips surrounding quotes and collapses doubled quotes. Unquoted input is returned as is.
pub fn unescape_field(raw: &str) -> String {
    let inner = match raw
        .strip_prefix(QUOTE)
        .and_then(|rest| rest.strip_suffix(QUOTE))
    {
        Some(inner) => inner,
        None => return raw.to_string(),
    };

    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars().peekable();
    while let Some(c) = chars.next() {
        if c == QUOTE && chars.peek() == Some(&QUOTE) {
            chars.next();
        }
        out.push(c);
    }
    out
}

/// Splits a line on [`DELIMITER`], ignoring delimiters inside quoted sections.
///
/// Quote characters are kept in the returned fields; run them through
/// [`unescape_field`] to get the value back.
pub fn split_fields(line: &str) -> Vec<&str> {
    let mut fields = Vec::new();
    let mut in_quotes = false;
    let mut start = 0;

    for (i, c) in line.char_indices() {
        if c == QUOTE {
            in_quotes = !in_quotes;
        } else if c == DELIMITER && !in_quotes {
            fields.push(&line[start..i]);
            start = i + c.len_utf8();
        }
    }
    fields.push(&line[start..]);
    fields
}

/// Parses a `;`-joined marks list. Tokens that are not integers become `0`.
pub fn parse_marks(raw: &str) -> Vec<i32> {
    if raw.is_empty() {
        return Vec::new();
    }
    raw.split(MARKS_DELIMITER)
        .map(|token| token.trim().parse().unwrap_or(0))
        .collect()
}

pub fn encode(student: &Student) -> String {
    let mut marks = String::new();
    for (i, m) in student.marks().iter().enumerate() {
        if i > 0 {
            marks.push(MARKS_DELIMITER);
        }
        marks.push_str(&m.to_string());
    }

    format!(
        "{name},{class},{roll},\"{marks}\",{total},{percentage:.2},{grade},{pass},{comment}",
        name = escape_field(student.name()),
        class = escape_field(student.class_name()),
        roll = student.roll(),
        marks = marks,
        total = student.total(),
        percentage = student.percentage(),
        grade = student.grade(),
        pass = if student.is_pass() { "1" } else { "0" },
        comment = escape_field(student.teacher_comment()),
    )
}

pub fn decode(line: &str) -> Result<Student> {
    let fields = split_fields(line);
    if fields.len() < FIELD_COUNT {
        return Err(RollbookError::MalformedRecord(format!(
            "expected at least {} fields, found {}",
            FIELD_COUNT,
            fields.len()
        )));
    }

    let roll_field = fields[ROLL].trim();
    let roll: i32 = roll_field.parse().map_err(|_| {
        RollbookError::MalformedRecord(format!("roll is not a number: {:?}", roll_field))
    })?;

    let marks = parse_marks(&unescape_field(fields[MARKS]));
    let student = Student::new(
        unescape_field(fields[NAME]),
        unescape_field(fields[CLASS]),
        roll,
        marks,
    )
    .with_comment(unescape_field(fields[COMMENT]));

    Ok(student)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Grade;
    use proptest::prelude::*;

    #[test]
    fn encodes_plain_record() {
        let s = Student::new("Asha", "10A", 7, vec![80, 90, 70]).with_comment("Good");
        assert_eq!(s.to_line(), "Asha,10A,7,\"80;90;70\",240,80.00,A,1,Good");
    }

    #[test]
    fn encodes_empty_marks_as_quoted_empty_field() {
        let s = Student::new("Nil", "1", 1, vec![]);
        assert_eq!(s.to_line(), "Nil,1,1,\"\",0,0.00,F,0,");
    }

    #[test]
    fn escapes_delimiter_and_quote() {
        assert_eq!(escape_field("plain"), "plain");
        assert_eq!(escape_field("a,b"), "\"a,b\"");
        assert_eq!(escape_field("say \"hi\""), "\"say \"\"hi\"\"\"");
    }

    #[test]
    fn unescape_leaves_unquoted_values_alone() {
        assert_eq!(unescape_field("plain"), "plain");
        assert_eq!(unescape_field("\""), "\"");
        assert_eq!(unescape_field("\"\""), "");
    }

    #[test]
    fn name_with_comma_and_quotes_round_trips() {
        let s = Student::new("Jane, \"Q\"", "5, \"B\"", 4, vec![50]).with_comment("a,\"b\"");
        let line = s.to_line();
        assert!(line.starts_with("\"Jane, \"\"Q\"\"\","));

        let back = Student::from_line(&line).unwrap();
        assert_eq!(back.name(), "Jane, \"Q\"");
        assert_eq!(back.class_name(), "5, \"B\"");
        assert_eq!(back.teacher_comment(), "a,\"b\"");
        assert_eq!(back, s);
    }

    #[test]
    fn split_respects_quotes() {
        let fields = split_fields("\"a,b\",c,\"1;2\"");
        assert_eq!(fields, vec!["\"a,b\"", "c", "\"1;2\""]);
    }

    #[test]
    fn rejects_short_lines() {
        let err = Student::from_line("Asha,10A,7").unwrap_err();
        assert!(matches!(err, RollbookError::MalformedRecord(_)));
    }

    #[test]
    fn rejects_non_numeric_roll() {
        let err = Student::from_line("Asha,10A,seven,\"1\",1,1.00,F,0,").unwrap_err();
        assert!(matches!(err, RollbookError::MalformedRecord(_)));
    }

    #[test]
    fn bad_mark_tokens_become_zero() {
        let s = Student::from_line("Asha,10A,7,\"80;abc;;70\",0,0.00,F,0,").unwrap();
        assert_eq!(s.marks(), &[80, 0, 0, 70]);
        assert_eq!(s.total(), 150);
    }

    #[test]
    fn stored_derived_fields_are_ignored() {
        let s = Student::from_line("Asha,10A,7,\"95;95\",3,1.00,F,0,").unwrap();
        assert_eq!(s.total(), 190);
        assert_eq!(s.grade(), Grade::APlus);
        assert!(s.is_pass());
    }

    #[test]
    fn extra_trailing_fields_are_ignored() {
        let s = Student::from_line("Asha,10A,7,\"60\",60,60.00,B,1,Nice,\"history\",more").unwrap();
        assert_eq!(s.teacher_comment(), "Nice");
        assert_eq!(s.marks(), &[60]);
    }

    #[test]
    fn single_line_fields_pass_the_check() {
        let s = Student::new("Jane, \"Q\"", "5B", 1, vec![50]).with_comment("fine, really");
        assert!(check_student(&s).is_ok());
    }

    #[test]
    fn line_breaks_in_any_text_field_are_rejected() {
        let cases = [
            Student::new("Asha\nRavi", "10A", 1, vec![]),
            Student::new("Asha", "10\rA", 1, vec![]),
            Student::new("Asha", "10A", 1, vec![]).with_comment("Good\nMallory,10A,1,\"100\",0,0,F,0,x"),
        ];
        for s in &cases {
            assert!(matches!(check_student(s), Err(RollbookError::InvalidInput(_))));
        }
    }

    proptest! {
        #[test]
        fn text_with_a_line_break_never_passes(
            before in "[ -~]{0,12}",
            brk in prop::sample::select(vec!["\n", "\r", "\r\n"]),
            after in "[ -~]{0,12}",
        ) {
            let comment = format!("{}{}{}", before, brk, after);
            let s = Student::new("Asha", "10A", 1, vec![60]).with_comment(comment);
            prop_assert!(check_student(&s).is_err());
        }

        #[test]
        fn encode_then_decode_preserves_record(
            name in "[ -~]{0,24}",
            class_name in "[ -~]{0,8}",
            roll in any::<i32>(),
            marks in prop::collection::vec(0i32..=100, 0..8),
            comment in "[ -~]{0,32}",
        ) {
            let s = Student::new(name, class_name, roll, marks).with_comment(comment);
            let back = Student::from_line(&s.to_line()).unwrap();
            prop_assert_eq!(back, s);
        }
    }
}
