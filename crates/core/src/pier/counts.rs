// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Pier counters and the group reservation rules

use crate::category::Category;
use crate::error::HarborError;
use std::fmt;

/// Travelers in a boarding group
pub const GROUP_SIZE: u32 = 4;

/// A hacker count and a serf count
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Occupancy {
    pub hackers: u32,
    pub serfs: u32,
}

impl Occupancy {
    pub const fn new(hackers: u32, serfs: u32) -> Self {
        Self { hackers, serfs }
    }

    pub fn get(&self, category: Category) -> u32 {
        match category {
            Category::Hacker => self.hackers,
            Category::Serf => self.serfs,
        }
    }

    pub fn add(&mut self, category: Category, n: u32) {
        match category {
            Category::Hacker => self.hackers += n,
            Category::Serf => self.serfs += n,
        }
    }

    pub fn total(&self) -> u32 {
        self.hackers + self.serfs
    }

    /// Component-wise subtraction, `None` if either side would go negative
    pub fn checked_sub(&self, other: Occupancy) -> Option<Occupancy> {
        Some(Occupancy {
            hackers: self.hackers.checked_sub(other.hackers)?,
            serfs: self.serfs.checked_sub(other.serfs)?,
        })
    }

    /// Both components at least as large as `other`'s
    pub fn covers(&self, other: Occupancy) -> bool {
        self.hackers >= other.hackers && self.serfs >= other.serfs
    }
}

impl fmt::Display for Occupancy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.hackers, self.serfs)
    }
}

/// The two group shapes allowed on board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GroupKind {
    /// Four travelers of one category
    FourOf(Category),
    /// Two hackers and two serfs
    Mixed,
}

impl GroupKind {
    /// Travelers of each category the group takes off the pier
    pub fn composition(self) -> Occupancy {
        match self {
            GroupKind::FourOf(Category::Hacker) => Occupancy::new(GROUP_SIZE, 0),
            GroupKind::FourOf(Category::Serf) => Occupancy::new(0, GROUP_SIZE),
            GroupKind::Mixed => Occupancy::new(2, 2),
        }
    }

    /// Gate releases a captain of `captain`'s category owes its members
    pub fn released_members(self, captain: Category) -> Occupancy {
        let mut members = self.composition();
        match captain {
            Category::Hacker => members.hackers = members.hackers.saturating_sub(1),
            Category::Serf => members.serfs = members.serfs.saturating_sub(1),
        }
        members
    }

    /// The group shape with exactly this composition, if it is a legal one
    pub fn from_composition(composition: Occupancy) -> Option<Self> {
        match (composition.hackers, composition.serfs) {
            (GROUP_SIZE, 0) => Some(GroupKind::FourOf(Category::Hacker)),
            (0, GROUP_SIZE) => Some(GroupKind::FourOf(Category::Serf)),
            (2, 2) => Some(GroupKind::Mixed),
            _ => None,
        }
    }
}

impl fmt::Display for GroupKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GroupKind::FourOf(category) => write!(f, "4x{category}"),
            GroupKind::Mixed => f.write_str("2+2"),
        }
    }
}

/// Counters shared by every traveler
///
/// `available` counts everyone standing on the pier, including travelers
/// already reserved into a group that has not boarded yet. `grouped` is the
/// reserved part of `available`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PierCounts {
    available: Occupancy,
    grouped: Occupancy,
}

impl PierCounts {
    pub fn available(&self) -> Occupancy {
        self.available
    }

    pub fn grouped(&self) -> Occupancy {
        self.grouped
    }

    /// Travelers of `category` on the pier and not yet reserved
    pub fn unreserved(&self, category: Category) -> u32 {
        self.available
            .get(category)
            .saturating_sub(self.grouped.get(category))
    }

    pub fn is_full(&self, capacity: u32) -> bool {
        self.available.total() >= capacity
    }

    /// A traveler of `category` steps onto the pier
    pub fn join(&mut self, category: Category) {
        self.available.add(category, 1);
    }

    /// Reserve a group for a traveler of `category` who just joined.
    ///
    /// Four of the traveler's own category win over a mixed group whenever
    /// both are possible.
    pub fn try_reserve(&mut self, category: Category) -> Option<GroupKind> {
        let kind = if self.unreserved(category) >= GROUP_SIZE {
            GroupKind::FourOf(category)
        } else if self.unreserved(Category::Hacker) >= 2 && self.unreserved(Category::Serf) >= 2 {
            GroupKind::Mixed
        } else {
            return None;
        };

        let composition = kind.composition();
        self.grouped.add(Category::Hacker, composition.hackers);
        self.grouped.add(Category::Serf, composition.serfs);
        Some(kind)
    }

    /// Take a reserved group off the pier
    pub fn finalize(&mut self, kind: GroupKind) -> Result<(), HarborError> {
        let composition = kind.composition();
        let grouped = self.grouped.checked_sub(composition).ok_or_else(|| {
            HarborError::Invariant(format!(
                "boarding {kind} with only {} reserved",
                self.grouped
            ))
        })?;
        let available = self.available.checked_sub(composition).ok_or_else(|| {
            HarborError::Invariant(format!(
                "boarding {kind} with only {} on the pier",
                self.available
            ))
        })?;

        self.grouped = grouped;
        self.available = available;
        Ok(())
    }
}

#[cfg(test)]
#[path = "counts_tests.rs"]
mod tests;
