use super::{Student, StudentId};
use crate::errors::TrackerError;
use std::collections::{BTreeMap, HashSet};
use tracing::debug;

pub const DEFAULT_FIRST_ID: u32 = 10000;

/// Registered students, keyed by id.
///
/// Ids are handed out in increasing order and never reused, so iterating by
/// id also follows the order in which students were added.
#[derive(Debug)]
pub struct Roster {
    students: BTreeMap<StudentId, Student>,
    emails: HashSet<String>,
    // `None` once the id space is used up.
    next_id: Option<u32>,
}

impl Default for Roster {
    fn default() -> Roster {
        Roster::new(DEFAULT_FIRST_ID)
    }
}

impl Roster {
    pub fn new(first_id: u32) -> Roster {
        Roster {
            students: BTreeMap::new(),
            emails: HashSet::new(),
            next_id: Some(first_id),
        }
    }

    pub fn add_student(
        &mut self,
        first_name: &str,
        last_name: &str,
        email: &str,
    ) -> Result<StudentId, TrackerError> {
        if self.emails.contains(email) {
            return Err(TrackerError::DuplicateEmail(email.to_owned()));
        }
        let id = StudentId(self.next_id.ok_or(TrackerError::IdsExhausted)?);
        self.next_id = id.0.checked_add(1);
        self.emails.insert(email.to_owned());
        let student = Student::new(
            id,
            first_name.to_owned(),
            last_name.to_owned(),
            email.to_owned(),
        );
        debug!(%student, email, "student added");
        self.students.insert(id, student);
        Ok(id)
    }

    pub fn student(&self, id: StudentId) -> Result<&Student, TrackerError> {
        self.students
            .get(&id)
            .ok_or_else(|| TrackerError::StudentNotFound(id.to_string()))
    }

    pub fn student_mut(&mut self, id: StudentId) -> Result<&mut Student, TrackerError> {
        self.students
            .get_mut(&id)
            .ok_or_else(|| TrackerError::StudentNotFound(id.to_string()))
    }

    pub fn ids(&self) -> Vec<StudentId> {
        self.students.keys().copied().collect()
    }

    pub fn students(&self) -> impl Iterator<Item = &Student> {
        self.students.values()
    }

    pub fn students_mut(&mut self) -> impl Iterator<Item = &mut Student> {
        self.students.values_mut()
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }
}
