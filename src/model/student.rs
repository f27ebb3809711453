use super::{COURSES, Course};
use std::collections::BTreeSet;
use std::fmt;

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct StudentId(pub u32);

impl fmt::Display for StudentId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Clone, Debug)]
pub struct Student {
    pub id: StudentId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    points: [u64; COURSES],
    submissions: [u32; COURSES],
    notified: BTreeSet<Course>,
}

impl Student {
    pub fn new(id: StudentId, first_name: String, last_name: String, email: String) -> Student {
        Student {
            id,
            first_name,
            last_name,
            email,
            points: [0; COURSES],
            submissions: [0; COURSES],
            notified: BTreeSet::new(),
        }
    }

    pub fn points(&self, course: Course) -> u64 {
        self.points[course.index()]
    }

    pub fn submissions(&self, course: Course) -> u32 {
        self.submissions[course.index()]
    }

    pub fn is_enrolled(&self, course: Course) -> bool {
        self.points(course) > 0
    }

    /// Record one submission of `points` (which must be positive) for `course`.
    pub(crate) fn add_submission(&mut self, course: Course, points: u64) {
        debug_assert!(points > 0, "empty submissions are not recorded");
        self.points[course.index()] += points;
        self.submissions[course.index()] += 1;
    }

    pub fn has_completed(&self, course: Course, threshold: u64) -> bool {
        self.points(course) >= threshold
    }

    pub fn is_notified_for(&self, course: Course) -> bool {
        self.notified.contains(&course)
    }

    pub(crate) fn mark_notified(&mut self, course: Course) {
        self.notified.insert(course);
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn progress(&self) -> Progress {
        Progress {
            id: self.id,
            points: self.points,
        }
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} ({})", self.full_name(), self.id)
    }
}

/// Snapshot of the points a student has accumulated in every course.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Progress {
    pub id: StudentId,
    pub points: [u64; COURSES],
}

impl Progress {
    pub fn points(&self, course: Course) -> u64 {
        self.points[course.index()]
    }
}

impl fmt::Display for Progress {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} points: ", self.id)?;
        for (i, course) in Course::ALL.into_iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}={}", course, self.points(course))?;
        }
        Ok(())
    }
}
