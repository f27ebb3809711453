use crate::errors::TrackerError;
use regex::Regex;
use std::sync::LazyLock;

// Letters, possibly joined by single hyphens or apostrophes, at least two
// characters long.
static NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z](?:['-]?[A-Za-z])+$").expect("invalid name regex"));

static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("invalid email regex"));

pub fn is_valid_first_name(name: &str) -> bool {
    NAME.is_match(name)
}

/// A last name may hold several words separated by single spaces. Trailing
/// spaces are ignored.
pub fn is_valid_last_name(name: &str) -> bool {
    let name = name.trim_end_matches(' ');
    !name.is_empty() && name.split(' ').all(|part| NAME.is_match(part))
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL.is_match(email)
}

#[derive(Debug, Eq, PartialEq)]
pub struct Credentials<'a> {
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub email: &'a str,
}

/// Split a `first last... email` line and check every field.
pub fn parse_credentials(line: &str) -> Result<Credentials<'_>, TrackerError> {
    if line.split(' ').count() < 3 {
        return Err(TrackerError::InvalidCredentialsFormat);
    }
    let (first_name, rest) = line
        .split_once(' ')
        .ok_or(TrackerError::InvalidCredentialsFormat)?;
    let (last_name, email) = rest
        .rsplit_once(' ')
        .ok_or(TrackerError::InvalidCredentialsFormat)?;
    if !is_valid_first_name(first_name) {
        Err(TrackerError::InvalidFirstName)
    } else if !is_valid_last_name(last_name) {
        Err(TrackerError::InvalidLastName)
    } else if !is_valid_email(email) {
        Err(TrackerError::InvalidEmail)
    } else {
        Ok(Credentials {
            first_name,
            last_name: last_name.trim_end_matches(' '),
            email,
        })
    }
}
