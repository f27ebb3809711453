use crate::errors::TrackerError;
use crate::model::{COURSES, Course, Student};
use std::str::FromStr;
use tracing::trace;

/// Points earned in one submission event, per course.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct PointsUpdate(pub [u32; COURSES]);

impl PointsUpdate {
    pub fn get(&self, course: Course) -> u32 {
        self.0[course.index()]
    }
}

impl FromStr for PointsUpdate {
    type Err = TrackerError;

    /// Parse exactly one non-negative integer per course, separated by spaces.
    /// Values must fit in a signed 32-bit integer.
    fn from_str(s: &str) -> Result<PointsUpdate, TrackerError> {
        let parts = s.split(' ').collect::<Vec<_>>();
        if parts.len() != COURSES {
            return Err(TrackerError::InvalidPointsFormat);
        }
        let mut points = [0; COURSES];
        for (slot, part) in points.iter_mut().zip(parts) {
            *slot = part
                .parse::<i32>()
                .ok()
                .and_then(|p| u32::try_from(p).ok())
                .ok_or(TrackerError::InvalidPointsFormat)?;
        }
        Ok(PointsUpdate(points))
    }
}

/// Fold a points update into the student counters. Every course with a
/// positive value counts as exactly one submission, whatever its size.
pub fn apply_points(student: &mut Student, update: &PointsUpdate) {
    for course in Course::ALL {
        let points = update.get(course);
        if points > 0 {
            student.add_submission(course, u64::from(points));
            trace!(%student, %course, points, "submission recorded");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::StudentId;

    fn student() -> Student {
        Student::new(StudentId(1), "A".into(), "B".into(), "a@b.c".into())
    }

    #[test]
    fn test_parse() {
        assert_eq!(
            "1 0 +3 400".parse::<PointsUpdate>(),
            Ok(PointsUpdate([1, 0, 3, 400]))
        );
        assert_eq!(
            "2147483647 0 0 0".parse::<PointsUpdate>(),
            Ok(PointsUpdate([2147483647, 0, 0, 0]))
        );
        for bad in [
            "1 2 3",
            "1 2 3 4 5",
            "1 2 3 -4",
            "1 2 three 4",
            "1  2 3",
            "",
            "1 3000000000 0 0",
            "2147483648 0 0 0",
        ] {
            assert_eq!(
                bad.parse::<PointsUpdate>(),
                Err(TrackerError::InvalidPointsFormat),
                "{bad:?}"
            );
        }
    }

    #[test]
    fn test_zero_is_not_a_submission() {
        let mut s = student();
        apply_points(&mut s, &PointsUpdate([0, 0, 0, 0]));
        for course in Course::ALL {
            assert_eq!(s.points(course), 0);
            assert_eq!(s.submissions(course), 0);
        }
    }

    #[test]
    fn test_accumulation() {
        let mut s = student();
        let updates = [[10, 0, 5, 0], [1000, 0, 0, 0], [0, 0, 7, 3], [1, 1, 1, 1]];
        for update in updates {
            apply_points(&mut s, &PointsUpdate(update));
        }
        for course in Course::ALL {
            let i = course.index();
            let sum: u64 = updates.iter().map(|u| u64::from(u[i])).sum();
            let count = updates.iter().filter(|u| u[i] > 0).count() as u32;
            assert_eq!(s.points(course), sum);
            assert_eq!(s.submissions(course), count);
        }
        assert_eq!(s.points(Course::Java), 1011);
        assert_eq!(s.submissions(Course::Java), 3);
    }
}
