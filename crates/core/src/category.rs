// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Traveler categories

use std::fmt;
use std::str::FromStr;

/// The two kinds of traveler that share the pier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Hacker,
    Serf,
}

impl Category {
    /// Both categories, hackers first
    pub const ALL: [Category; 2] = [Category::Hacker, Category::Serf];

    /// Label used in the event log
    pub fn label(self) -> &'static str {
        match self {
            Category::Hacker => "HACK",
            Category::Serf => "SERF",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "HACK" => Ok(Category::Hacker),
            "SERF" => Ok(Category::Serf),
            other => Err(format!("unknown category: {other}")),
        }
    }
}
