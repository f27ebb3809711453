use crate::errors::TrackerError;
use std::fmt;
use std::str::FromStr;

pub const COURSES: usize = 4;

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Course {
    Java,
    Dsa,
    Databases,
    Spring,
}

impl Course {
    /// All courses, in display order.
    pub const ALL: [Course; COURSES] = [
        Course::Java,
        Course::Dsa,
        Course::Databases,
        Course::Spring,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            Course::Java => "Java",
            Course::Dsa => "DSA",
            Course::Databases => "Databases",
            Course::Spring => "Spring",
        }
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Course {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Course, TrackerError> {
        Course::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| TrackerError::UnknownCourse(s.to_owned()))
    }
}
