use crate::model::{Course, StudentId};
use crate::notify::NotificationScan;
use crate::stats::{DetailRow, Summary};
use eyre::Report;
use serde::Serialize;
use std::io::Write;

#[derive(Serialize)]
struct DetailRecord {
    id: u32,
    points: u64,
    completed: String,
}

pub fn display_ids(out: &mut impl Write, ids: &[StudentId]) -> Result<(), Report> {
    if ids.is_empty() {
        writeln!(out, "No students found")?;
    } else {
        writeln!(out, "Students:")?;
        for id in ids {
            writeln!(out, "{id}")?;
        }
    }
    Ok(())
}

pub fn display_summary(out: &mut impl Write, summary: &Summary) -> Result<(), Report> {
    write!(out, "{summary}")?;
    Ok(())
}

/// Write the tab-separated table of the students enrolled in a course.
pub fn display_course_detail(
    out: &mut impl Write,
    course: Course,
    rows: &[DetailRow],
) -> Result<(), Report> {
    writeln!(out, "{course}")?;
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b'\t')
        .terminator(csv::Terminator::Any(b'\n'))
        .has_headers(false)
        .from_writer(&mut *out);
    writer.write_record(["id", "points", "completed"])?;
    for row in rows {
        writer.serialize(DetailRecord {
            id: row.id.0,
            points: row.points,
            completed: format!("{}%", row.completed),
        })?;
    }
    writer.flush()?;
    Ok(())
}

pub fn display_notifications(
    out: &mut impl Write,
    scan: &NotificationScan,
) -> Result<(), Report> {
    for notification in &scan.notifications {
        writeln!(out, "{notification}")?;
    }
    writeln!(
        out,
        "Total {} students have been notified.",
        scan.notified_students()
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::Percent;

    fn render(f: impl FnOnce(&mut Vec<u8>) -> Result<(), Report>) -> String {
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_display_ids() {
        assert_eq!(render(|o| display_ids(o, &[])), "No students found\n");
        assert_eq!(
            render(|o| display_ids(o, &[StudentId(10000), StudentId(10001)])),
            "Students:\n10000\n10001\n"
        );
    }

    #[test]
    fn test_display_course_detail() {
        let rows = [
            DetailRow {
                id: StudentId(10001),
                points: 125,
                completed: Percent::completion(125, 400),
            },
            DetailRow {
                id: StudentId(10000),
                points: 5,
                completed: Percent::completion(5, 400),
            },
        ];
        assert_eq!(
            render(|o| display_course_detail(o, Course::Dsa, &rows)),
            "DSA\nid\tpoints\tcompleted\n10001\t125\t31.3%\n10000\t5\t1.3%\n"
        );
        assert_eq!(
            render(|o| display_course_detail(o, Course::Spring, &[])),
            "Spring\nid\tpoints\tcompleted\n"
        );
    }

    #[test]
    fn test_display_empty_notifications() {
        assert_eq!(
            render(|o| display_notifications(o, &NotificationScan::default())),
            "Total 0 students have been notified.\n"
        );
    }
}
