use std::sync::{Mutex, MutexGuard};

use crate::core::fight::{self, Bout};
use crate::domain::model::{Boxer, BoxerId, FightResult};
use crate::domain::ports::{BoxerRepository, RandomSource};
use crate::utils::error::{BoxingError, Result};

/// Number of boxers a ring holds for one fight.
pub const RING_CAPACITY: usize = 2;

/// Boxers waiting for the next fight, in entry order.
///
/// Holds snapshots of the boxers; the repository stays the source of truth
/// for their records.
#[derive(Debug, Clone, Default)]
pub struct Ring {
    boxers: Vec<Boxer>,
}

impl Ring {
    pub fn new() -> Self {
        Self {
            boxers: Vec::with_capacity(RING_CAPACITY),
        }
    }

    pub fn enter(&mut self, boxer: Boxer) -> Result<()> {
        if self.is_full() {
            tracing::warn!("Ring is full, rejecting boxer '{}'", boxer.name());
            return Err(BoxingError::RingFull {
                capacity: RING_CAPACITY,
            });
        }

        tracing::info!(
            "Boxer '{}' (ID {}) entered the ring as boxer {}",
            boxer.name(),
            boxer.id(),
            self.boxers.len() + 1
        );
        self.boxers.push(boxer);
        Ok(())
    }

    /// Looks the boxer up and enters it. A full ring is reported before any lookup.
    pub fn enter_by_id<R>(&mut self, repository: &R, id: BoxerId) -> Result<()>
    where
        R: BoxerRepository + ?Sized,
    {
        if self.is_full() {
            return Err(BoxingError::RingFull {
                capacity: RING_CAPACITY,
            });
        }
        let boxer = repository.get_boxer_by_id(id)?;
        self.enter(boxer)
    }

    pub fn boxers(&self) -> &[Boxer] {
        &self.boxers
    }

    pub fn len(&self) -> usize {
        self.boxers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boxers.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.boxers.len() >= RING_CAPACITY
    }

    pub fn clear(&mut self) {
        if self.boxers.is_empty() {
            return;
        }
        tracing::info!("Clearing {} boxer(s) from the ring", self.boxers.len());
        self.boxers.clear();
    }

    /// Fights the two boxers in the ring and returns the winner's name.
    pub fn fight<R, S>(&mut self, repository: &mut R, random: &S) -> Result<String>
    where
        R: BoxerRepository + ?Sized,
        S: RandomSource + ?Sized,
    {
        let bout = self.fight_with_report(repository, random)?;
        Ok(bout.winner.name().to_string())
    }

    /// Same as [`Ring::fight`] but hands back the whole [`Bout`].
    ///
    /// Stats are written winner first. If either write fails the error is
    /// returned as-is and the ring keeps both boxers.
    pub fn fight_with_report<R, S>(&mut self, repository: &mut R, random: &S) -> Result<Bout>
    where
        R: BoxerRepository + ?Sized,
        S: RandomSource + ?Sized,
    {
        let (boxer_1, boxer_2) = match self.boxers.as_slice() {
            [first, second] => (first, second),
            others => {
                tracing::warn!("Fight requested with {} boxer(s) in the ring", others.len());
                return Err(BoxingError::NotEnoughBoxers {
                    present: others.len(),
                });
            }
        };

        let draw = random.next_f64();
        if !(0.0..1.0).contains(&draw) {
            tracing::warn!("Random source returned {} outside [0, 1)", draw);
        }

        let bout = fight::resolve(boxer_1, boxer_2, draw);

        if let Err(e) = repository.update_stats(bout.winner.id(), FightResult::Win) {
            tracing::error!(
                "Failed to record win for boxer ID {}: {}",
                bout.winner.id(),
                e
            );
            return Err(e.into());
        }
        if let Err(e) = repository.update_stats(bout.loser.id(), FightResult::Loss) {
            tracing::error!(
                "Failed to record loss for boxer ID {} after win for ID {} was already saved: {}",
                bout.loser.id(),
                bout.winner.id(),
                e
            );
            return Err(e.into());
        }

        tracing::info!(
            "'{}' defeated '{}' (p={:.4}, draw={:.4})",
            bout.winner.name(),
            bout.loser.name(),
            bout.probability,
            bout.draw
        );

        self.clear();
        Ok(bout)
    }
}

/// A [`Ring`] that can be shared between callers.
///
/// Each operation holds the lock for its whole duration, so a fight can never
/// interleave with an entry or a clear.
#[derive(Debug, Default)]
pub struct SharedRing {
    inner: Mutex<Ring>,
}

impl SharedRing {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Ring::new()),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Ring>> {
        self.inner.lock().map_err(|_| BoxingError::RingUnavailable)
    }

    pub fn enter(&self, boxer: Boxer) -> Result<()> {
        self.lock()?.enter(boxer)
    }

    pub fn enter_by_id<R>(&self, repository: &R, id: BoxerId) -> Result<()>
    where
        R: BoxerRepository + ?Sized,
    {
        self.lock()?.enter_by_id(repository, id)
    }

    /// Copy of the boxers currently in the ring.
    pub fn boxers(&self) -> Result<Vec<Boxer>> {
        Ok(self.lock()?.boxers().to_vec())
    }

    pub fn clear(&self) -> Result<()> {
        self.lock()?.clear();
        Ok(())
    }

    pub fn fight<R, S>(&self, repository: &mut R, random: &S) -> Result<String>
    where
        R: BoxerRepository + ?Sized,
        S: RandomSource + ?Sized,
    {
        self.lock()?.fight(repository, random)
    }

    pub fn fight_with_report<R, S>(&self, repository: &mut R, random: &S) -> Result<Bout>
    where
        R: BoxerRepository + ?Sized,
        S: RandomSource + ?Sized,
    {
        self.lock()?.fight_with_report(repository, random)
    }
}
