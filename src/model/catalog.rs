use super::{COURSES, Course};
use crate::config::{Config, config_keys, get_config};
use eyre::{Report, bail};

const DEFAULT_THRESHOLDS: [u64; COURSES] = [600, 400, 480, 550];

/// Completion threshold of every course.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Catalog {
    thresholds: [u64; COURSES],
}

impl Default for Catalog {
    fn default() -> Catalog {
        Catalog {
            thresholds: DEFAULT_THRESHOLDS,
        }
    }
}

impl Catalog {
    /// Build the catalog, overriding the default thresholds with the
    /// `[thresholds]` section of the configuration.
    pub fn from_config(config: &Config) -> Result<Catalog, Report> {
        let mut catalog = Catalog::default();
        for key in config_keys(config, "thresholds") {
            let Ok(course) = key.parse::<Course>() else {
                bail!("unknown course {key} in thresholds configuration");
            };
            if let Some(threshold) = get_config::<u64>(config, "thresholds", &key)? {
                if threshold == 0 {
                    bail!("completion threshold for {course} must be positive");
                }
                catalog.thresholds[course.index()] = threshold;
            }
        }
        Ok(catalog)
    }

    pub fn courses(&self) -> impl Iterator<Item = Course> {
        Course::ALL.into_iter()
    }

    pub fn threshold(&self, course: Course) -> u64 {
        self.thresholds[course.index()]
    }
}
