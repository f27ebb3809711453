use thiserror::Error;

/// Recoverable errors reported back to the user.
///
/// The `Display` implementation of each variant is the message shown in the
/// shell before prompting again.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TrackerError {
    #[error("This email is already taken.")]
    DuplicateEmail(String),

    #[error("No student is found for id={0}.")]
    StudentNotFound(String),

    #[error("Unknown course.")]
    UnknownCourse(String),

    #[error("No more student ids are available.")]
    IdsExhausted,

    #[error("Incorrect points format.")]
    InvalidPointsFormat,

    #[error("Incorrect credentials.")]
    InvalidCredentialsFormat,

    #[error("Incorrect first name")]
    InvalidFirstName,

    #[error("Incorrect last name")]
    InvalidLastName,

    #[error("Incorrect email")]
    InvalidEmail,
}
