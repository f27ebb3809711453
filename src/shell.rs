use crate::checks::parse_credentials;
use crate::display::{display_course_detail, display_ids, display_notifications, display_summary};
use crate::errors::TrackerError;
use crate::model::StudentId;
use crate::points::PointsUpdate;
use crate::tracker::Tracker;
use eyre::Report;
use std::io::{BufRead, Write};
use tracing::{debug, warn};

/// Line-oriented interactive front-end over a `Tracker`.
pub struct Shell<R, W> {
    tracker: Tracker,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(tracker: Tracker, input: R, output: W) -> Shell<R, W> {
        Shell {
            tracker,
            input,
            output,
        }
    }

    /// Next trimmed input line, or `None` at end of input.
    fn read_line(&mut self) -> Result<Option<String>, Report> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_owned()))
    }

    fn say(&mut self, message: impl std::fmt::Display) -> Result<(), Report> {
        writeln!(self.output, "{message}")?;
        Ok(())
    }

    /// Run commands until `exit` or end of input.
    pub fn run(&mut self) -> Result<(), Report> {
        self.say("Learning Progress Tracker")?;
        while let Some(line) = self.read_line()? {
            debug!(command = %line, "dispatching command");
            match line.to_lowercase().as_str() {
                "exit" => {
                    self.say("Bye!")?;
                    break;
                }
                "add students" => self.add_students()?,
                "list" => display_ids(&mut self.output, &self.tracker.list_student_ids())?,
                "add points" => self.add_points()?,
                "find" => self.find()?,
                "statistics" => self.statistics()?,
                "notify" => {
                    let scan = self.tracker.run_notification_scan();
                    display_notifications(&mut self.output, &scan)?;
                }
                "back" => self.say("Enter 'exit' to exit the program.")?,
                "" => self.say("No input")?,
                _ => self.say("Unknown command!")?,
            }
            self.output.flush()?;
        }
        Ok(())
    }

    fn add_students(&mut self) -> Result<(), Report> {
        self.say("Enter student credentials or 'back' to return:")?;
        let mut added = 0;
        while let Some(line) = self.read_line()? {
            if line == "back" {
                self.say(format!("Total {added} students have been added."))?;
                break;
            }
            let result = parse_credentials(&line).and_then(|c| {
                self.tracker
                    .add_student(c.first_name, c.last_name, c.email)
            });
            match result {
                Ok(_) => {
                    added += 1;
                    self.say("The student has been added.")?;
                }
                Err(e) => self.say(e)?,
            }
        }
        Ok(())
    }

    fn add_points(&mut self) -> Result<(), Report> {
        self.say("Enter an id and points or 'back' to return:")?;
        while let Some(line) = self.read_line()? {
            if line == "back" {
                break;
            }
            let result = line
                .split_once(' ')
                .ok_or(TrackerError::InvalidPointsFormat)
                .and_then(|(id, points)| {
                    let update = points.parse::<PointsUpdate>()?;
                    let id = parse_id(id)?;
                    self.tracker.record_points(id, &update)
                });
            match result {
                Ok(()) => self.say("Points updated.")?,
                Err(e) => {
                    warn!(%e, input = %line, "points rejected");
                    self.say(e)?;
                }
            }
        }
        Ok(())
    }

    fn find(&mut self) -> Result<(), Report> {
        self.say("Enter an id or 'back' to return:")?;
        while let Some(line) = self.read_line()? {
            if line == "back" {
                break;
            }
            match parse_id(&line).and_then(|id| self.tracker.progress(id)) {
                Ok(progress) => self.say(progress)?,
                Err(e) => self.say(e)?,
            }
        }
        Ok(())
    }

    fn statistics(&mut self) -> Result<(), Report> {
        self.say("Type the name of a course to see details or 'back' to quit:")?;
        let summary = self.tracker.statistics_summary();
        display_summary(&mut self.output, &summary)?;
        while let Some(line) = self.read_line()? {
            if line == "back" {
                break;
            }
            match self.tracker.course_detail(&line) {
                Ok((course, rows)) => display_course_detail(&mut self.output, course, &rows)?,
                Err(e) => self.say(e)?,
            }
        }
        Ok(())
    }
}

/// Ids that do not parse are reported the same way as unknown ones.
fn parse_id(s: &str) -> Result<StudentId, TrackerError> {
    s.parse::<u32>()
        .map(StudentId)
        .map_err(|_| TrackerError::StudentNotFound(s.to_owned()))
}
