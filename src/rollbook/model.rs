use crate::codec;
use crate::error::Result;
use std::fmt;

/// Percentage at or above which a student passes.
pub const PASS_THRESHOLD: f64 = 35.0;

/// Highest mark a single subject can carry.
pub const MAX_MARK: i32 = 100;

const RULE: &str = "------------------------------------------";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Grade {
    APlus,
    A,
    BPlus,
    B,
    C,
    F,
}

impl Grade {
    /// Brackets are inclusive at their lower bound and checked high to low.
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage >= 90.0 {
            Grade::APlus
        } else if percentage >= 80.0 {
            Grade::A
        } else if percentage >= 70.0 {
            Grade::BPlus
        } else if percentage >= 60.0 {
            Grade::B
        } else if percentage >= 50.0 {
            Grade::C
        } else {
            Grade::F
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Grade::APlus => "A+",
            Grade::A => "A",
            Grade::BPlus => "B+",
            Grade::B => "B",
            Grade::C => "C",
            Grade::F => "F",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

pub fn is_passing(percentage: f64) -> bool {
    percentage >= PASS_THRESHOLD
}

/// One student's record.
///
/// `marks` is private so the derived fields (`total`, `percentage`, `grade`,
/// `pass`) can only change together with it, through [`Student::set_marks`].
#[derive(Debug, Clone, PartialEq)]
pub struct Student {
    name: String,
    class_name: String,
    roll: i32,
    marks: Vec<i32>,
    teacher_comment: String,

    total: i64,
    percentage: f64,
    grade: Grade,
    pass: bool,
}

impl Student {
    pub fn new(
        name: impl Into<String>,
        class_name: impl Into<String>,
        roll: i32,
        marks: Vec<i32>,
    ) -> Self {
        let mut student = Self {
            name: name.into(),
            class_name: class_name.into(),
            roll,
            marks,
            teacher_comment: String::new(),
            total: 0,
            percentage: 0.0,
            grade: Grade::F,
            pass: false,
        };
        student.recalculate();
        student
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.teacher_comment = comment.into();
        self
    }

    /// Recomputes every derived field from `marks`.
    pub fn recalculate(&mut self) {
        self.total = self.marks.iter().map(|&m| i64::from(m)).sum();
        let max_total = self.marks.len() as i64 * i64::from(MAX_MARK);
        self.percentage = if max_total > 0 {
            (100.0 * self.total as f64) / max_total as f64
        } else {
            0.0
        };
        self.grade = Grade::from_percentage(self.percentage);
        self.pass = is_passing(self.percentage);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    pub fn roll(&self) -> i32 {
        self.roll
    }

    pub fn marks(&self) -> &[i32] {
        &self.marks
    }

    pub fn total(&self) -> i64 {
        self.total
    }

    pub fn percentage(&self) -> f64 {
        self.percentage
    }

    pub fn grade(&self) -> Grade {
        self.grade
    }

    pub fn is_pass(&self) -> bool {
        self.pass
    }

    pub fn teacher_comment(&self) -> &str {
        &self.teacher_comment
    }

    pub fn set_marks(&mut self, marks: Vec<i32>) {
        self.marks = marks;
        self.recalculate();
    }

    pub fn set_teacher_comment(&mut self, comment: impl Into<String>) {
        self.teacher_comment = comment.into();
    }

    /// Encodes the record as one storage line (no trailing newline).
    pub fn to_line(&self) -> String {
        codec::encode(self)
    }

    /// Decodes one storage line. Stored derived fields are ignored and recomputed.
    pub fn from_line(line: &str) -> Result<Self> {
        codec::decode(line)
    }

    pub fn report_card(&self) -> String {
        let marks = self
            .marks
            .iter()
            .map(|m| m.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        let result = if self.pass { "PASS" } else { "FAIL" };

        let mut out = String::new();
        out.push_str(RULE);
        out.push('\n');
        out.push_str("Report Card\n");
        out.push_str(&format!("Name    : {}\n", self.name));
        out.push_str(&format!("Class   : {}\n", self.class_name));
        out.push_str(&format!("Roll No.: {}\n", self.roll));
        out.push_str(&format!("Marks   : {}\n", marks));
        out.push_str(&format!("Total   : {}\n", self.total));
        out.push_str(&format!("Percent : {:.2}%\n", self.percentage));
        out.push_str(&format!("Grade   : {}\n", self.grade));
        out.push_str(&format!("Result  : {}\n", result));
        out.push_str(RULE);
        out.push('\n');
        out.push_str("Teacher Comments:\n");
        out.push_str(&self.teacher_comment);
        out.push('\n');
        out.push_str(RULE);
        out.push('\n');
        out
    }
}
