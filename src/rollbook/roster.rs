//! # Roster
//!
//! The roster owns the ordered list of students and the store it is bound to.
//!
//! ## Durability Contract
//!
//! Every mutating method (`add`, `remove_by_roll`, `edit_marks`,
//! `edit_teacher_comment`, `sort_by_percentage_desc`) writes the full collection
//! through the store before returning `Ok`. If that write fails the in-memory change is
//! rolled back, so after any return, success or error, memory matches what is stored.
//!
//! [`Roster::find_by_roll`] is the one exception: it hands out `&mut Student`, and
//! changes made through it stay in memory until the next successful mutating call (or
//! [`Roster::save`]). Use the edit methods when the change has to survive a restart.
//!
//! Writes are refused while the store is in an unknown state: if [`Roster::open`] could
//! not load it, nothing is saved until a later [`Roster::load`] succeeds, so records the
//! roster never saw are not replaced by an empty or partial list. Records whose text
//! holds a line break are refused too, with `InvalidInput`.
//!
//! ## Roll Numbers
//!
//! A roll number is unique within a class, and `add` enforces that. Lookups by roll alone
//! do not know the class: `find_by_roll` and the edit methods act on the first match in
//! current order, and `remove_by_roll` removes every match. Callers that care can ask
//! [`Roster::classes_with_roll`] first.

use crate::codec;
use crate::error::{RollbookError, Result};
use crate::model::Student;
use crate::store::RecordStore;
use tracing::{debug, info, warn};

pub struct Roster<S: RecordStore> {
    store: S,
    students: Vec<Student>,
    load_error: Option<String>,
}

impl<S: RecordStore> Roster<S> {
    /// Binds `store` and loads it. Never fails: an unreadable store starts empty and
    /// read-only.
    pub fn open(store: S) -> Self {
        let mut roster = Self {
            store,
            students: Vec::new(),
            load_error: None,
        };
        if let Err(e) = roster.load() {
            warn!(error = %e, "could not load records, starting empty and refusing writes");
            roster.load_error = Some(e.to_string());
        }
        roster
    }

    /// Replaces the in-memory list with what the store holds.
    pub fn load(&mut self) -> Result<()> {
        self.students = self.store.load()?;
        self.load_error = None;
        Ok(())
    }

    /// Writes the current list, including any changes made through `find_by_roll`.
    pub fn save(&mut self) -> Result<()> {
        self.persist()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn all(&self) -> &[Student] {
        &self.students
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    pub fn add(&mut self, student: Student) -> Result<()> {
        let duplicate = self
            .students
            .iter()
            .any(|s| s.roll() == student.roll() && s.class_name() == student.class_name());
        if duplicate {
            return Err(RollbookError::DuplicateStudent {
                roll: student.roll(),
                class_name: student.class_name().to_string(),
            });
        }

        let snapshot = self.students.clone();
        debug!(roll = student.roll(), class = student.class_name(), "adding student");
        self.students.push(student);
        self.commit(snapshot)
    }

    /// First student with `roll`, in current order. Changes through the returned
    /// reference are not saved until the next write.
    pub fn find_by_roll(&mut self, roll: i32) -> Option<&mut Student> {
        self.students.iter_mut().find(|s| s.roll() == roll)
    }

    pub fn get_by_roll(&self, roll: i32) -> Option<&Student> {
        self.students.iter().find(|s| s.roll() == roll)
    }

    /// Removes every student with `roll`, across all classes. Returns how many went.
    pub fn remove_by_roll(&mut self, roll: i32) -> Result<usize> {
        if !self.roll_exists(roll) {
            return Err(RollbookError::StudentNotFound(roll));
        }

        let snapshot = self.students.clone();
        self.students.retain(|s| s.roll() != roll);
        let removed = snapshot.len() - self.students.len();
        debug!(roll, removed, "removing students");
        self.commit(snapshot)?;
        Ok(removed)
    }

    pub fn edit_marks(&mut self, roll: i32, marks: Vec<i32>) -> Result<&Student> {
        let idx = self.position(roll)?;
        let snapshot = self.students.clone();
        self.students[idx].set_marks(marks);
        self.commit(snapshot)?;
        Ok(&self.students[idx])
    }

    pub fn edit_teacher_comment(
        &mut self,
        roll: i32,
        comment: impl Into<String>,
    ) -> Result<&Student> {
        let idx = self.position(roll)?;
        let snapshot = self.students.clone();
        self.students[idx].set_teacher_comment(comment);
        self.commit(snapshot)?;
        Ok(&self.students[idx])
    }

    /// Highest percentage; on a tie the earliest student in current order wins.
    pub fn topper(&self) -> Option<&Student> {
        let mut best: Option<&Student> = None;
        for s in &self.students {
            match best {
                Some(b) if s.percentage() <= b.percentage() => {}
                _ => best = Some(s),
            }
        }
        best
    }

    /// Stable sort, highest percentage first, then saved.
    pub fn sort_by_percentage_desc(&mut self) -> Result<()> {
        let snapshot = self.students.clone();
        self.students
            .sort_by(|a, b| b.percentage().total_cmp(&a.percentage()));
        self.commit(snapshot)
    }

    /// Exact, case-sensitive class match, in current order.
    pub fn students_in_class(&self, class_name: &str) -> Vec<&Student> {
        self.students
            .iter()
            .filter(|s| s.class_name() == class_name)
            .collect()
    }

    pub fn roll_exists(&self, roll: i32) -> bool {
        self.students.iter().any(|s| s.roll() == roll)
    }

    /// Classes that hold a student with `roll`, in first-seen order, without repeats.
    pub fn classes_with_roll(&self, roll: i32) -> Vec<&str> {
        let mut classes: Vec<&str> = Vec::new();
        for s in self.students.iter().filter(|s| s.roll() == roll) {
            if !classes.contains(&s.class_name()) {
                classes.push(s.class_name());
            }
        }
        classes
    }

    fn position(&self, roll: i32) -> Result<usize> {
        self.students
            .iter()
            .position(|s| s.roll() == roll)
            .ok_or(RollbookError::StudentNotFound(roll))
    }

    fn persist(&mut self) -> Result<()> {
        if let Some(reason) = &self.load_error {
            return Err(RollbookError::Store(format!(
                "records were not loaded ({}), refusing to overwrite them",
                reason
            )));
        }
        for student in &self.students {
            codec::check_student(student)?;
        }
        self.store.save(&self.students)
    }

    /// Saves, or restores `snapshot` if the save fails.
    fn commit(&mut self, snapshot: Vec<Student>) -> Result<()> {
        if let Err(e) = self.persist() {
            info!(error = %e, "write not completed, rolling back in-memory change");
            self.students = snapshot;
            return Err(e);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::{roster_with, sample_students};
    use crate::store::memory::InMemoryStore;

    fn rolls<S: RecordStore>(roster: &Roster<S>) -> Vec<i32> {
        roster.all().iter().map(|s| s.roll()).collect()
    }

    #[test]
    fn open_loads_existing_records() {
        let roster = roster_with(&sample_students());
        assert_eq!(roster.len(), 4);
        assert_eq!(rolls(&roster), vec![1, 2, 1, 3]);
    }

    #[test]
    fn open_empty_store() {
        let roster = Roster::open(InMemoryStore::new());
        assert!(roster.is_empty());
        assert!(roster.topper().is_none());
    }

    #[test]
    fn add_appends_and_saves() {
        let mut roster = Roster::open(InMemoryStore::new());
        roster.add(Student::new("Asha", "10A", 1, vec![70])).unwrap();
        roster.add(Student::new("Ravi", "10B", 1, vec![80])).unwrap();

        assert_eq!(roster.len(), 2);
        assert_eq!(roster.store().save_count(), 2);
        assert_eq!(roster.store().content().lines().count(), 2);
    }

    #[test]
    fn add_rejects_same_roll_in_same_class() {
        let mut roster = roster_with(&sample_students());
        let before = roster.store().content().to_string();

        let err = roster
            .add(Student::new("Other", "10A", 2, vec![10]))
            .unwrap_err();
        assert!(matches!(
            err,
            RollbookError::DuplicateStudent { roll: 2, ref class_name } if class_name == "10A"
        ));
        assert_eq!(roster.len(), 4);
        assert_eq!(roster.store().save_count(), 0);
        assert_eq!(roster.store().content(), before);
    }

    #[test]
    fn add_rolls_back_when_save_fails() {
        let before = roster_with(&sample_students()).store().content().to_string();
        let mut store = InMemoryStore::with_content(before.clone());
        store.set_fail_saves(true);
        let mut roster = Roster::open(store);

        let result = roster.add(Student::new("New", "10C", 9, vec![99]));
        assert!(matches!(result, Err(RollbookError::Store(_))));
        assert_eq!(roster.len(), 4);
        assert!(!roster.roll_exists(9));
        assert_eq!(roster.store().content(), before);
    }

    #[test]
    fn failed_open_refuses_every_write() {
        let content = roster_with(&sample_students()).store().content().to_string();
        let mut store = InMemoryStore::with_content(content.clone());
        store.set_fail_loads(true);
        let mut roster = Roster::open(store);
        assert!(roster.is_empty());

        let err = roster.add(Student::new("New", "10C", 9, vec![99])).unwrap_err();
        assert!(matches!(err, RollbookError::Store(_)));
        assert!(roster.is_empty());
        assert!(roster.sort_by_percentage_desc().is_err());
        assert!(roster.save().is_err());

        assert_eq!(roster.store().save_count(), 0);
        assert_eq!(roster.store().content(), content);
    }

    #[test]
    fn comment_with_line_break_is_rejected_and_store_unchanged() {
        let mut roster = roster_with(&sample_students());
        let before = roster.store().content().to_string();

        let err = roster
            .edit_teacher_comment(1, "Good\nMallory,10A,1,\"100\",0,0,F,0,x")
            .unwrap_err();
        assert!(matches!(err, RollbookError::InvalidInput(_)));
        assert_eq!(roster.get_by_roll(1).unwrap().teacher_comment(), "");
        assert_eq!(roster.store().content(), before);

        let reloaded = Roster::open(InMemoryStore::with_content(before));
        assert_eq!(reloaded.len(), 4);
        assert!(reloaded.all().iter().all(|s| s.name() != "Mallory"));
    }

    #[test]
    fn add_with_line_break_in_name_is_rejected() {
        let mut roster = Roster::open(InMemoryStore::new());
        let err = roster
            .add(Student::new("Asha\r\nRavi", "10A", 1, vec![70]))
            .unwrap_err();
        assert!(matches!(err, RollbookError::InvalidInput(_)));
        assert!(roster.is_empty());
        assert_eq!(roster.store().save_count(), 0);
    }

    #[test]
    fn find_by_roll_returns_first_match_and_does_not_save() {
        let mut roster = roster_with(&sample_students());
        let found = roster.find_by_roll(1).unwrap();
        assert_eq!(found.name(), "Asha");

        found.set_teacher_comment("unsaved");
        assert_eq!(roster.store().save_count(), 0);
        assert!(!roster.store().content().contains("unsaved"));

        roster.save().unwrap();
        assert!(roster.store().content().contains("unsaved"));
    }

    #[test]
    fn find_missing_roll() {
        let mut roster = roster_with(&sample_students());
        assert!(roster.find_by_roll(42).is_none());
        assert!(roster.get_by_roll(42).is_none());
    }

    #[test]
    fn remove_by_roll_removes_every_match() {
        let mut roster = roster_with(&sample_students());
        let removed = roster.remove_by_roll(1).unwrap();
        assert_eq!(removed, 2);
        assert_eq!(rolls(&roster), vec![2, 3]);
        assert_eq!(roster.store().content().lines().count(), 2);
    }

    #[test]
    fn remove_missing_roll_leaves_store_untouched() {
        let mut roster = roster_with(&sample_students());
        let before = roster.store().content().to_string();

        let err = roster.remove_by_roll(99).unwrap_err();
        assert!(matches!(err, RollbookError::StudentNotFound(99)));
        assert_eq!(roster.len(), 4);
        assert_eq!(roster.store().save_count(), 0);
        assert_eq!(roster.store().content(), before);
    }

    #[test]
    fn edit_marks_recalculates_and_saves() {
        let mut roster = roster_with(&sample_students());
        let updated = roster.edit_marks(3, vec![85, 85]).unwrap();
        assert_eq!(updated.name(), "Tom");
        assert_eq!(updated.class_name(), "10B");
        assert_eq!(updated.total(), 170);
        assert_eq!(updated.grade().as_str(), "A");

        let reloaded = Roster::open(InMemoryStore::with_content(roster.store().content()));
        assert_eq!(reloaded.get_by_roll(3).unwrap().marks(), &[85, 85]);
    }

    #[test]
    fn edit_marks_missing_roll() {
        let mut roster = roster_with(&sample_students());
        assert!(matches!(
            roster.edit_marks(77, vec![1]),
            Err(RollbookError::StudentNotFound(77))
        ));
        assert_eq!(roster.store().save_count(), 0);
    }

    #[test]
    fn edit_comment_keeps_marks() {
        let mut roster = roster_with(&sample_students());
        let updated = roster.edit_teacher_comment(2, "Excellent, keep it up").unwrap();
        assert_eq!(updated.teacher_comment(), "Excellent, keep it up");
        assert_eq!(updated.marks(), &[90, 90]);
        assert!(roster
            .store()
            .content()
            .contains("\"Excellent, keep it up\""));
    }

    #[test]
    fn edit_comment_rolls_back_on_failed_save() {
        let mut store = InMemoryStore::new();
        store
            .save(&[Student::new("Asha", "10A", 1, vec![50])])
            .unwrap();
        store.set_fail_saves(true);
        let mut roster = Roster::open(store);

        assert!(roster.edit_teacher_comment(1, "lost").is_err());
        assert_eq!(roster.get_by_roll(1).unwrap().teacher_comment(), "");
    }

    #[test]
    fn topper_prefers_first_on_tie() {
        let roster = roster_with(&sample_students());
        let top = roster.topper().unwrap();
        assert_eq!(top.name(), "Ravi");
    }

    #[test]
    fn sort_is_stable_and_saved() {
        let students = vec![
            Student::new("Fifty", "X", 1, vec![50]),
            Student::new("NinetyA", "X", 2, vec![90]),
            Student::new("NinetyB", "X", 3, vec![90]),
            Student::new("Thirty", "X", 4, vec![30]),
        ];
        let mut roster = roster_with(&students);
        roster.sort_by_percentage_desc().unwrap();
        assert_eq!(rolls(&roster), vec![2, 3, 1, 4]);

        let reloaded = Roster::open(InMemoryStore::with_content(roster.store().content()));
        assert_eq!(rolls(&reloaded), vec![2, 3, 1, 4]);
    }

    #[test]
    fn students_in_class_is_exact() {
        let mut students = sample_students();
        students.push(Student::new("Lower", "10a", 5, vec![60]));
        let roster = roster_with(&students);

        let names: Vec<&str> = roster
            .students_in_class("10A")
            .iter()
            .map(|s| s.name())
            .collect();
        assert_eq!(names, vec!["Asha", "Ravi"]);
        assert!(roster.students_in_class("11").is_empty());
    }

    #[test]
    fn roll_lookups_ignore_class() {
        let roster = roster_with(&sample_students());
        assert!(roster.roll_exists(1));
        assert!(!roster.roll_exists(4));
        assert_eq!(roster.classes_with_roll(1), vec!["10A", "10B"]);
        assert!(roster.classes_with_roll(4).is_empty());
    }
}
