pub use self::catalog::Catalog;
pub use self::course::{COURSES, Course};
pub use self::roster::{DEFAULT_FIRST_ID, Roster};
pub use self::student::{Progress, Student, StudentId};

mod catalog;
mod course;
mod roster;
mod student;
