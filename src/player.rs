//! Player identity: a display name plus the disc color played.

use crate::common::Disc;
use crate::config::{NAME_MAX_LEN, NAME_MIN_LEN};

/// One seat at the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    name: String,
    disc: Disc,
}

impl Player {
    /// Create a player. Name validation is a form concern; the terminal
    /// variant uses free-form default names.
    pub fn new(name: impl Into<String>, disc: Disc) -> Self {
        Player {
            name: name.into(),
            disc,
        }
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Disc color this player drops.
    pub fn disc(&self) -> Disc {
        self.disc
    }
}

/// Whether a submitted name satisfies the form rule: 3 to 20 characters, each
/// ASCII alphanumeric, `-` or `_`.
pub fn valid_name(name: &str) -> bool {
    (NAME_MIN_LEN..=NAME_MAX_LEN).contains(&name.len())
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}
