// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Person state machine
//!
//! Every traveler runs the same protocol:
//! 1. Announce itself
//! 2. Look for room on the pier, retreating and coming back while it is full
//! 3. Join the pier and either reserve a group (becoming its captain) or
//!    queue on its category's gate
//! 4. Captains board, sail, release their members and wait for them to leave;
//!    queued members leave when released

use crate::category::Category;
use crate::delay::DelaySource;
use crate::error::HarborError;
use crate::event::{PersonId, PierEvent};
use crate::harbor::Harbor;
use crate::pier::GroupKind;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, trace};

/// Shortest pause before a retreated traveler comes back
pub const RETREAT_FLOOR: Duration = Duration::from_micros(20);

/// Where a traveler is in the crossing protocol
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersonState {
    /// Generated, not yet announced
    Arriving,
    /// Looking for room on the pier
    CheckingCapacity,
    /// Found the pier full and walked away for a while
    Retreated,
    /// Reserved a group and leads it across
    Captain(GroupKind),
    /// On the pier, waiting for a captain to release it
    QueuedMember,
    /// Left the harbor
    Departed,
}

/// A single traveler
#[derive(Debug, Clone)]
pub struct Person {
    id: PersonId,
    state: PersonState,
    retreats: u32,
}

impl Person {
    pub fn new(id: PersonId) -> Self {
        Self {
            id,
            state: PersonState::Arriving,
            retreats: 0,
        }
    }

    pub fn id(&self) -> PersonId {
        self.id
    }

    pub fn state(&self) -> PersonState {
        self.state
    }

    /// Times this traveler found the pier full
    pub fn retreats(&self) -> u32 {
        self.retreats
    }

    pub fn is_departed(&self) -> bool {
        self.state == PersonState::Departed
    }

    /// Run the current state to completion and move to the next one
    pub async fn step<D: DelaySource>(
        &mut self,
        harbor: &Harbor<D>,
    ) -> Result<PersonState, HarborError> {
        let next = match self.state {
            PersonState::Arriving => self.arrive(harbor).await?,
            PersonState::CheckingCapacity => self.check_capacity(harbor).await?,
            PersonState::Retreated => self.come_back(harbor).await?,
            PersonState::Captain(kind) => self.lead(harbor, kind).await?,
            PersonState::QueuedMember => self.wait_for_captain(harbor).await?,
            PersonState::Departed => PersonState::Departed,
        };

        trace!(person = %self.id, from = ?self.state, to = ?next, "person transition");
        self.state = next;
        Ok(next)
    }

    async fn arrive<D: DelaySource>(&self, harbor: &Harbor<D>) -> Result<PersonState, HarborError> {
        harbor.pier().lock().await.record(self.id, PierEvent::Starts)?;
        Ok(PersonState::CheckingCapacity)
    }

    /// Capacity check and joining happen in one critical section, so an
    /// admitted traveler is counted before anyone else can look.
    async fn check_capacity<D: DelaySource>(
        &mut self,
        harbor: &Harbor<D>,
    ) -> Result<PersonState, HarborError> {
        let mut pier = harbor.pier().lock().await;

        if pier.is_full() {
            let seq = pier.record(self.id, PierEvent::LeavesQueue)?;
            self.retreats += 1;
            debug!(person = %self.id, seq, retreats = self.retreats, "pier full, retreating");
            return Ok(PersonState::Retreated);
        }

        pier.join(self.id.category);
        pier.record(self.id, PierEvent::Waits)?;

        match pier.try_reserve(self.id.category) {
            Some(kind) => {
                debug!(person = %self.id, group = %kind, "reserved a group");
                Ok(PersonState::Captain(kind))
            }
            None => Ok(PersonState::QueuedMember),
        }
    }

    async fn come_back<D: DelaySource>(&self, harbor: &Harbor<D>) -> Result<PersonState, HarborError> {
        let ceiling = harbor
            .config()
            .check_pier
            .saturating_sub(Duration::from_micros(1));
        tokio::time::sleep(harbor.delays().between(RETREAT_FLOOR, ceiling)).await;

        harbor.pier().lock().await.record(self.id, PierEvent::IsBack)?;
        Ok(PersonState::CheckingCapacity)
    }

    async fn lead<D: DelaySource>(
        &self,
        harbor: &Harbor<D>,
        kind: GroupKind,
    ) -> Result<PersonState, HarborError> {
        let primitives = harbor.primitives();
        let boarding = primitives.boarding.acquire().await?;

        {
            let mut pier = harbor.pier().lock().await;
            pier.finalize(kind)?;
            let seq = pier.record(self.id, PierEvent::Boards)?;
            debug!(captain = %self.id, group = %kind, seq, "group boards");
        }

        let voyage = harbor
            .delays()
            .between(Duration::ZERO, harbor.config().sail_time);
        tokio::time::sleep(voyage).await;

        let members = kind.released_members(self.id.category);
        for category in Category::ALL {
            for _ in 0..members.get(category) {
                primitives.gate(category).post();
            }
        }
        primitives.exit_barrier.await_parties(members.total()).await?;

        let seq = harbor
            .pier()
            .lock()
            .await
            .record(self.id, PierEvent::CaptainExits)?;
        boarding.release();

        debug!(captain = %self.id, group = %kind, seq, ?voyage, "group departed");
        Ok(PersonState::Departed)
    }

    async fn wait_for_captain<D: DelaySource>(
        &self,
        harbor: &Harbor<D>,
    ) -> Result<PersonState, HarborError> {
        let primitives = harbor.primitives();
        primitives.gate(self.id.category).wait().await?;

        harbor
            .pier()
            .lock()
            .await
            .record(self.id, PierEvent::MemberExits)?;
        primitives.exit_barrier.arrive();

        Ok(PersonState::Departed)
    }
}

/// Run one traveler from arrival to departure
pub async fn run_person<D: DelaySource>(
    harbor: Arc<Harbor<D>>,
    id: PersonId,
) -> Result<(), HarborError> {
    let mut person = Person::new(id);
    while !person.is_departed() {
        person.step(&harbor).await?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "worker_tests.rs"]
mod tests;
