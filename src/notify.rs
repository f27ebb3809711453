use crate::model::{Catalog, Course, Roster, StudentId};
use std::collections::BTreeSet;
use std::fmt;
use tracing::info;

/// A student reached the completion threshold of a course.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Notification {
    pub student: StudentId,
    pub email: String,
    pub full_name: String,
    pub course: Course,
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "To: {}", self.email)?;
        writeln!(f, "Re: Your Learning Progress")?;
        write!(
            f,
            "Hello, {}! You have accomplished our {} course!",
            self.full_name, self.course
        )
    }
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct NotificationScan {
    pub notifications: Vec<Notification>,
}

impl NotificationScan {
    /// Number of distinct students notified during this scan.
    pub fn notified_students(&self) -> usize {
        self.notifications
            .iter()
            .map(|n| n.student)
            .collect::<BTreeSet<_>>()
            .len()
    }
}

/// Notify every student who completed a course and has not been told yet.
/// A (student, course) pair is reported at most once over the roster lifetime.
pub fn scan(roster: &mut Roster, catalog: &Catalog) -> NotificationScan {
    let mut notifications = Vec::new();
    for student in roster.students_mut() {
        for course in catalog.courses() {
            if student.has_completed(course, catalog.threshold(course))
                && !student.is_notified_for(course)
            {
                student.mark_notified(course);
                info!(%student, %course, "course completion notified");
                notifications.push(Notification {
                    student: student.id,
                    email: student.email.clone(),
                    full_name: student.full_name(),
                    course,
                });
            }
        }
    }
    NotificationScan { notifications }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::points::{PointsUpdate, apply_points};

    fn add(roster: &mut Roster, email: &str, points: [u32; 4]) -> StudentId {
        let id = roster.add_student("Jane", "Doe", email).unwrap();
        apply_points(roster.student_mut(id).unwrap(), &PointsUpdate(points));
        id
    }

    #[test]
    fn test_all_courses_completed_once() {
        let mut roster = Roster::default();
        add(&mut roster, "jane@doe.com", [600, 400, 480, 550]);
        let catalog = Catalog::default();
        let first = scan(&mut roster, &catalog);
        assert_eq!(first.notifications.len(), 4);
        assert_eq!(first.notified_students(), 1);
        assert_eq!(
            first.notifications.iter().map(|n| n.course).collect::<Vec<_>>(),
            Course::ALL.to_vec()
        );
        let second = scan(&mut roster, &catalog);
        assert!(second.notifications.is_empty());
        assert_eq!(second.notified_students(), 0);
    }

    #[test]
    fn test_no_renotification_after_more_points() {
        let mut roster = Roster::default();
        let id = add(&mut roster, "jane@doe.com", [600, 0, 0, 0]);
        let catalog = Catalog::default();
        assert_eq!(scan(&mut roster, &catalog).notifications.len(), 1);
        apply_points(
            roster.student_mut(id).unwrap(),
            &PointsUpdate([100, 399, 0, 0]),
        );
        assert!(scan(&mut roster, &catalog).notifications.is_empty());
        apply_points(roster.student_mut(id).unwrap(), &PointsUpdate([0, 1, 0, 0]));
        let scan = scan(&mut roster, &catalog);
        assert_eq!(scan.notifications.len(), 1);
        assert_eq!(scan.notifications[0].course, Course::Dsa);
    }

    #[test]
    fn test_counts_students() {
        let mut roster = Roster::default();
        add(&mut roster, "a@a.a", [600, 400, 0, 0]);
        add(&mut roster, "b@b.b", [599, 0, 0, 0]);
        add(&mut roster, "c@c.c", [0, 0, 0, 1000]);
        let scan = scan(&mut roster, &Catalog::default());
        assert_eq!(scan.notifications.len(), 3);
        assert_eq!(scan.notified_students(), 2);
    }

    #[test]
    fn test_message() {
        let n = Notification {
            student: StudentId(10000),
            email: "jane@doe.com".into(),
            full_name: "Jane Doe".into(),
            course: Course::Databases,
        };
        assert_eq!(
            n.to_string(),
            "To: jane@doe.com\nRe: Your Learning Progress\n\
             Hello, Jane Doe! You have accomplished our Databases course!"
        );
    }
}
