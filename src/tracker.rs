use crate::config::{Config, get_config};
use crate::errors::TrackerError;
use crate::model::{Catalog, Course, DEFAULT_FIRST_ID, Progress, Roster, StudentId};
use crate::notify::{self, NotificationScan};
use crate::points::{PointsUpdate, apply_points};
use crate::stats::{self, DetailRow, Summary};
use eyre::Report;

/// All the tracker state for one session.
#[derive(Debug, Default)]
pub struct Tracker {
    roster: Roster,
    catalog: Catalog,
}

impl Tracker {
    pub fn new(roster: Roster, catalog: Catalog) -> Tracker {
        Tracker { roster, catalog }
    }

    pub fn from_config(config: &Config) -> Result<Tracker, Report> {
        let first_id = get_config(config, "roster", "first_id")?.unwrap_or(DEFAULT_FIRST_ID);
        Ok(Tracker::new(
            Roster::new(first_id),
            Catalog::from_config(config)?,
        ))
    }

    pub fn add_student(
        &mut self,
        first_name: &str,
        last_name: &str,
        email: &str,
    ) -> Result<StudentId, TrackerError> {
        self.roster.add_student(first_name, last_name, email)
    }

    pub fn list_student_ids(&self) -> Vec<StudentId> {
        self.roster.ids()
    }

    pub fn record_points(
        &mut self,
        id: StudentId,
        update: &PointsUpdate,
    ) -> Result<(), TrackerError> {
        apply_points(self.roster.student_mut(id)?, update);
        Ok(())
    }

    pub fn progress(&self, id: StudentId) -> Result<Progress, TrackerError> {
        Ok(self.roster.student(id)?.progress())
    }

    pub fn statistics_summary(&self) -> Summary {
        Summary::new(&stats::statistics(&self.roster, &self.catalog))
    }

    /// Detail table for the course named `name` (case insensitive).
    pub fn course_detail(&self, name: &str) -> Result<(Course, Vec<DetailRow>), TrackerError> {
        let course = name.parse::<Course>()?;
        Ok((
            course,
            stats::course_detail(&self.roster, course, self.catalog.threshold(course)),
        ))
    }

    pub fn run_notification_scan(&mut self) -> NotificationScan {
        notify::scan(&mut self.roster, &self.catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::{Category, Ranking};

    #[test]
    fn test_record_unknown_student() {
        let mut t = Tracker::default();
        assert_eq!(
            t.record_points(StudentId(10000), &PointsUpdate([1, 1, 1, 1])),
            Err(TrackerError::StudentNotFound("10000".into()))
        );
        assert!(t.progress(StudentId(10000)).is_err());
    }

    #[test]
    fn test_session() {
        let mut t = Tracker::default();
        assert!(t.list_student_ids().is_empty());
        let jane = t.add_student("Jane", "Doe", "jane@doe.com").unwrap();
        let john = t.add_student("John", "Smith", "john@smith.com").unwrap();
        assert_eq!(
            t.add_student("J", "D", "jane@doe.com"),
            Err(TrackerError::DuplicateEmail("jane@doe.com".into()))
        );
        assert_eq!(t.list_student_ids(), vec![jane, john]);

        t.record_points(jane, &PointsUpdate([125, 0, 0, 0])).unwrap();
        t.record_points(john, &PointsUpdate([300, 10, 0, 0])).unwrap();
        assert_eq!(
            t.progress(jane).unwrap().to_string(),
            "10000 points: Java=125; DSA=0; Databases=0; Spring=0"
        );

        let summary = t.statistics_summary();
        assert_eq!(
            summary.get(Category::MostPopular),
            Some(&Ranking::Courses(vec![Course::Java]))
        );
        assert_eq!(
            summary.get(Category::LeastPopular),
            Some(&Ranking::NotApplicable)
        );

        let (course, rows) = t.course_detail("JAVA").unwrap();
        assert_eq!(course, Course::Java);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].id, john);
        assert_eq!(rows[1].completed.to_string(), "20.8");
        assert_eq!(
            t.course_detail("Rust"),
            Err(TrackerError::UnknownCourse("Rust".into()))
        );

        assert!(t.run_notification_scan().notifications.is_empty());
    }

    #[test]
    fn test_from_config() {
        let config = Config::parse("[roster]\nfirst_id = 1\n[thresholds]\nJava = 100\n").unwrap();
        let mut t = Tracker::from_config(&config).unwrap();
        let id = t.add_student("Jane", "Doe", "jane@doe.com").unwrap();
        assert_eq!(id, StudentId(1));
        t.record_points(id, &PointsUpdate([100, 0, 0, 0])).unwrap();
        let scan = t.run_notification_scan();
        assert_eq!(scan.notified_students(), 1);
        assert_eq!(scan.notifications[0].course, Course::Java);
    }
}
