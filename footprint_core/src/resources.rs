//! Fixed list of educational resources shown at the end of a session.

use std::fmt;

/// Resource titles, in display order
pub const RESOURCES: [&str; 2] = ["Climate Change 101", "Tips for Sustainable Living"];

#[derive(Clone, Copy, Debug, Default)]
pub struct EducationalResources;

impl fmt::Display for EducationalResources {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Educational Resources:")?;
        for (index, title) in RESOURCES.iter().enumerate() {
            write!(f, "\n{}. {}", index + 1, title)?;
        }
        Ok(())
    }
}
