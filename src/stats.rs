use crate::model::{Catalog, Course, Roster, StudentId};
use std::fmt;
use tracing::debug;

/// Aggregated figures for one course.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CourseStat {
    pub course: Course,
    pub enrolled: usize,
    pub submissions: u64,
    pub total_score: u64,
}

impl CourseStat {
    pub fn new(course: Course) -> CourseStat {
        CourseStat {
            course,
            enrolled: 0,
            submissions: 0,
            total_score: 0,
        }
    }

    pub fn average_score(&self) -> f64 {
        if self.submissions == 0 {
            0.0
        } else {
            self.total_score as f64 / self.submissions as f64
        }
    }
}

/// Compute one `CourseStat` per course of the catalog, in catalog order.
pub fn statistics(roster: &Roster, catalog: &Catalog) -> Vec<CourseStat> {
    let mut stats = catalog.courses().map(CourseStat::new).collect::<Vec<_>>();
    for student in roster.students() {
        for stat in &mut stats {
            let points = student.points(stat.course);
            if points > 0 {
                stat.enrolled += 1;
            }
            stat.total_score += points;
            stat.submissions += u64::from(student.submissions(stat.course));
        }
    }
    debug!(students = roster.len(), ?stats, "statistics computed");
    stats
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Metric {
    Enrolled,
    Submissions,
    AverageScore,
}

impl Metric {
    pub fn value(self, stat: &CourseStat) -> f64 {
        match self {
            Metric::Enrolled => stat.enrolled as f64,
            Metric::Submissions => stat.submissions as f64,
            Metric::AverageScore => stat.average_score(),
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Direction {
    Maximize,
    Minimize,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Ranking {
    NotApplicable,
    Courses(Vec<Course>),
}

impl fmt::Display for Ranking {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Ranking::NotApplicable => f.write_str("n/a"),
            Ranking::Courses(courses) => {
                for (i, course) in courses.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{course}")?;
                }
                Ok(())
            }
        }
    }
}

/// Select the courses with the best value of `metric`.
///
/// A zero best value never ranks. When every course has the same value,
/// maximizing reports all courses while minimizing reports nothing.
pub fn rank(stats: &[CourseStat], metric: Metric, direction: Direction) -> Ranking {
    if stats.is_empty() {
        return Ranking::NotApplicable;
    }
    let values = stats.iter().map(|s| metric.value(s)).collect::<Vec<_>>();
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let (best, worst) = match direction {
        Direction::Maximize => (max, min),
        Direction::Minimize => (min, max),
    };
    if best == worst {
        return if best != 0.0 && direction == Direction::Maximize {
            Ranking::Courses(stats.iter().map(|s| s.course).collect())
        } else {
            Ranking::NotApplicable
        };
    }
    if best == 0.0 {
        return Ranking::NotApplicable;
    }
    Ranking::Courses(
        stats
            .iter()
            .zip(values)
            .filter_map(|(s, v)| (v == best).then_some(s.course))
            .collect(),
    )
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Category {
    MostPopular,
    LeastPopular,
    HighestActivity,
    LowestActivity,
    EasiestCourse,
    HardestCourse,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::MostPopular,
        Category::LeastPopular,
        Category::HighestActivity,
        Category::LowestActivity,
        Category::EasiestCourse,
        Category::HardestCourse,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Category::MostPopular => "Most popular",
            Category::LeastPopular => "Least popular",
            Category::HighestActivity => "Highest activity",
            Category::LowestActivity => "Lowest activity",
            Category::EasiestCourse => "Easiest course",
            Category::HardestCourse => "Hardest course",
        }
    }

    pub fn metric(self) -> Metric {
        match self {
            Category::MostPopular | Category::LeastPopular => Metric::Enrolled,
            Category::HighestActivity | Category::LowestActivity => Metric::Submissions,
            Category::EasiestCourse | Category::HardestCourse => Metric::AverageScore,
        }
    }

    pub fn direction(self) -> Direction {
        match self {
            Category::MostPopular | Category::HighestActivity | Category::EasiestCourse => {
                Direction::Maximize
            }
            Category::LeastPopular | Category::LowestActivity | Category::HardestCourse => {
                Direction::Minimize
            }
        }
    }
}

/// The six named rankings shown by the statistics command.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Summary {
    pub rankings: Vec<(Category, Ranking)>,
}

impl Summary {
    pub fn new(stats: &[CourseStat]) -> Summary {
        Summary {
            rankings: Category::ALL
                .into_iter()
                .map(|c| (c, rank(stats, c.metric(), c.direction())))
                .collect(),
        }
    }

    pub fn get(&self, category: Category) -> Option<&Ranking> {
        self.rankings
            .iter()
            .find_map(|(c, r)| (*c == category).then_some(r))
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (category, ranking) in &self.rankings {
            writeln!(f, "{}: {}", category.title(), ranking)?;
        }
        Ok(())
    }
}

/// Completion percentage, kept in tenths of a percent.
#[derive(Clone, Copy, Debug, Eq, Ord, PartialEq, PartialOrd)]
pub struct Percent(pub u64);

impl Percent {
    /// `100 * points / threshold`, rounded half-up to one decimal place.
    /// The computation is exact: no binary floating point is involved.
    pub fn completion(points: u64, threshold: u64) -> Percent {
        debug_assert!(threshold > 0, "completion threshold must be positive");
        let num = u128::from(points) * 2000 + u128::from(threshold);
        let den = u128::from(threshold) * 2;
        Percent(u64::try_from(num / den).unwrap_or(u64::MAX))
    }
}

impl fmt::Display for Percent {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}.{}", self.0 / 10, self.0 % 10)
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct DetailRow {
    pub id: StudentId,
    pub points: u64,
    pub completed: Percent,
}

/// Students enrolled in `course`, best first; equal points are ordered by id.
pub fn course_detail(roster: &Roster, course: Course, threshold: u64) -> Vec<DetailRow> {
    let mut rows = roster
        .students()
        .filter(|s| s.is_enrolled(course))
        .map(|s| DetailRow {
            id: s.id,
            points: s.points(course),
            completed: Percent::completion(s.points(course), threshold),
        })
        .collect::<Vec<_>>();
    rows.sort_by_key(|r| (std::cmp::Reverse(r.points), r.id));
    rows
}
