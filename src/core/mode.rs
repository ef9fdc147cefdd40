//! # Mode
//!
//! Which of the two rule lists is active. Every index-based operation in
//! the core is relative to the current mode.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, ValueEnum, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Allowed,
    Blacklist,
}

impl Mode {
    /// The opposite list (Tab target, transfer destination).
    pub fn other(self) -> Self {
        match self {
            Mode::Allowed => Mode::Blacklist,
            Mode::Blacklist => Mode::Allowed,
        }
    }

    /// Document file name inside the store root.
    pub fn file_name(self) -> &'static str {
        match self {
            Mode::Allowed => "allowed.json",
            Mode::Blacklist => "blacklist.json",
        }
    }

    /// Name of the list field under `permissions`.
    pub fn field(self) -> &'static str {
        match self {
            Mode::Allowed => "allow",
            Mode::Blacklist => "blacklist",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Mode::Allowed => "Allowed",
            Mode::Blacklist => "Blacklist",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
