#![deny(warnings)]

//! Session state for a running game: the clock, the player's custom chips
//! and which hardware has already been announced.
//!
//! The catalog and scoring crates are pure; every piece of mutable game
//! state they need lives here and is passed into them explicitly.

use serde::{Deserialize, Serialize};
use sim_core::{
    validate_custom_chip, CustomChip, GameTime, HardwareComponent, HardwareKind, ValidationError,
};
use std::collections::BTreeSet;
use thiserror::Error;
use tracing::{debug, info};

#[derive(Debug, Error, PartialEq)]
pub enum SessionError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    #[error("custom chip id already registered: {0}")]
    DuplicateChip(String),
}

/// Caller-owned game context.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameSession {
    now: GameTime,
    custom_chips: Vec<CustomChip>,
    /// Names already reported by `advance_quarter`.
    announced: BTreeSet<String>,
}

impl GameSession {
    /// Start a session at `start`. Hardware already on sale at `start` counts
    /// as announced.
    pub fn new(start: GameTime) -> Result<Self, SessionError> {
        sim_core::validate_time(&start)?;
        let announced = sim_catalog::get_available_hardware(start, &[])
            .into_iter()
            .map(|c| c.name)
            .collect();
        Ok(Self {
            now: start,
            custom_chips: Vec::new(),
            announced,
        })
    }

    pub fn now(&self) -> GameTime {
        self.now
    }

    pub fn custom_chips(&self) -> &[CustomChip] {
        &self.custom_chips
    }

    /// Add a chip finished by research. Ids must be unique.
    pub fn register_custom_chip(&mut self, chip: CustomChip) -> Result<(), SessionError> {
        validate_custom_chip(&chip)?;
        if self.custom_chips.iter().any(|c| c.id == chip.id) {
            return Err(SessionError::DuplicateChip(chip.id));
        }
        info!(id = %chip.id, chip = %chip.name, kind = %chip.kind, "custom chip registered");
        self.custom_chips.push(chip);
        Ok(())
    }

    pub fn available_hardware(&self) -> Vec<HardwareComponent> {
        sim_catalog::get_available_hardware(self.now, &self.custom_chips)
    }

    pub fn available_by_kind(&self, kind: HardwareKind) -> Vec<HardwareComponent> {
        sim_catalog::get_available_hardware_by_type(kind, self.now, &self.custom_chips)
    }

    pub fn is_available(&self, name: &str) -> bool {
        sim_catalog::is_hardware_available(name, self.now, &self.custom_chips)
    }

    /// Move the clock one quarter forward and return hardware unlocked by the
    /// move that has not been announced yet in this session.
    pub fn advance_quarter(&mut self) -> Vec<HardwareComponent> {
        let prev = self.now;
        self.now = prev.next_quarter();
        let unlocked = sim_catalog::get_newly_available_hardware(prev, self.now);
        let fresh: Vec<HardwareComponent> = unlocked
            .into_iter()
            .filter(|c| self.announced.insert(c.name.clone()))
            .collect();
        if fresh.is_empty() {
            debug!(now = %self.now, "no new hardware");
        } else {
            let names: Vec<&str> = fresh.iter().map(|c| c.name.as_str()).collect();
            info!(now = %self.now, ?names, "new hardware announced");
        }
        fresh
    }

    /// Advance `quarters` times, collecting every announcement.
    pub fn advance_quarters(&mut self, quarters: u32) -> Vec<HardwareComponent> {
        (0..quarters).flat_map(|_| self.advance_quarter()).collect()
    }
}
