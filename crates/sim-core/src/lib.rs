#![deny(warnings)]

//! Core domain models and invariants for Silicon Wars.
//!
//! This crate defines serializable types shared by the catalog, scoring and
//! runtime crates, with validation helpers for the values that come from
//! outside the core (scenario files, research results, the model editor).

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// First year of the hardware timeline.
pub const FIRST_YEAR: i32 = 1983;
/// Last year a game may run to.
pub const LAST_YEAR: i32 = 2100;

/// A point on the quarterly game clock.
///
/// Field order matters: the derived `Ord` compares `year` first and then
/// `quarter`, which is exactly the availability ordering.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct GameTime {
    pub year: i32,
    pub quarter: u8,
}

impl GameTime {
    /// Build a time without validation. Out-of-range quarters still compare,
    /// they just compare meaninglessly.
    pub const fn new(year: i32, quarter: u8) -> Self {
        Self { year, quarter }
    }

    /// Build a time, rejecting quarters outside 1..=4 and years outside
    /// [FIRST_YEAR, LAST_YEAR].
    pub fn checked(year: i32, quarter: u8) -> Result<Self, ValidationError> {
        let t = Self::new(year, quarter);
        validate_time(&t)?;
        Ok(t)
    }

    /// The following quarter; Q4 rolls over into Q1 of the next year.
    pub fn next_quarter(self) -> Self {
        if self.quarter >= 4 {
            Self::new(self.year + 1, 1)
        } else {
            Self::new(self.year, self.quarter + 1)
        }
    }
}

impl fmt::Display for GameTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Q{} {}", self.quarter, self.year)
    }
}

/// Hardware categories in the catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HardwareKind {
    /// Central Processing Unit
    Cpu,
    /// Graphics chip or adapter
    Gpu,
    /// Main memory
    Memory,
    /// Sound chip or card
    Sound,
    /// Tape, floppy, hard disk and optical drives
    Storage,
    /// Monitors
    Display,
}

impl HardwareKind {
    pub const ALL: [HardwareKind; 6] = [
        HardwareKind::Cpu,
        HardwareKind::Gpu,
        HardwareKind::Memory,
        HardwareKind::Sound,
        HardwareKind::Storage,
        HardwareKind::Display,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            HardwareKind::Cpu => "cpu",
            HardwareKind::Gpu => "gpu",
            HardwareKind::Memory => "memory",
            HardwareKind::Sound => "sound",
            HardwareKind::Storage => "storage",
            HardwareKind::Display => "display",
        }
    }
}

impl fmt::Display for HardwareKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for HardwareKind {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cpu" => Ok(HardwareKind::Cpu),
            "gpu" => Ok(HardwareKind::Gpu),
            "memory" | "ram" => Ok(HardwareKind::Memory),
            "sound" => Ok(HardwareKind::Sound),
            "storage" => Ok(HardwareKind::Storage),
            "display" => Ok(HardwareKind::Display),
            other => Err(ValidationError::UnknownKind(other.to_string())),
        }
    }
}

/// Buyer segments a configuration is scored against.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Segment {
    Gaming,
    Business,
    Workstation,
}

impl Segment {
    pub const ALL: [Segment; 3] = [Segment::Gaming, Segment::Business, Segment::Workstation];
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Segment::Gaming => "gaming",
            Segment::Business => "business",
            Segment::Workstation => "workstation",
        })
    }
}

/// A static catalog entry. Defined once, never mutated.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct HardwareRecord {
    /// Unique display name, e.g. "Intel 80486".
    pub name: &'static str,
    pub kind: HardwareKind,
    /// Performance on a 0-100 scale.
    pub performance: u8,
    /// Unit cost in currency units.
    pub cost: u32,
    /// First quarter in which the part can be selected.
    pub available_from: GameTime,
}

impl HardwareRecord {
    /// True iff `now` is at or after the record's availability window.
    pub fn is_available_at(&self, now: GameTime) -> bool {
        now >= self.available_from
    }
}

/// A player-researched component. Exclusive to the player and always
/// available once developed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CustomChip {
    pub id: String,
    pub name: String,
    pub kind: HardwareKind,
    pub performance: u8,
    pub cost: u32,
    /// Quarter in which research completed.
    pub developed: GameTime,
}

/// A catalog entry as seen by callers at a given time.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HardwareComponent {
    pub name: String,
    pub kind: HardwareKind,
    pub performance: u8,
    pub cost: u32,
    /// Year the part was (or will be) introduced.
    pub year: i32,
    /// Quarter the part was (or will be) introduced.
    pub quarter: u8,
    pub available: bool,
    /// Player-only part.
    pub exclusive: bool,
}

impl HardwareComponent {
    /// Project a static record at time `now`.
    pub fn from_record(record: &HardwareRecord, now: GameTime) -> Self {
        Self {
            name: record.name.to_string(),
            kind: record.kind,
            performance: record.performance,
            cost: record.cost,
            year: record.available_from.year,
            quarter: record.available_from.quarter,
            available: record.is_available_at(now),
            exclusive: false,
        }
    }

    /// Project a custom chip; always available and exclusive.
    pub fn from_custom(chip: &CustomChip) -> Self {
        Self {
            name: chip.name.clone(),
            kind: chip.kind,
            performance: chip.performance,
            cost: chip.cost,
            year: chip.developed.year,
            quarter: chip.developed.quarter,
            available: true,
            exclusive: true,
        }
    }
}

/// A computer model as configured in the model editor.
///
/// One component name per scored slot, plus optional accessories (storage
/// and display parts) and an optional case.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ComputerModel {
    pub name: String,
    pub cpu: String,
    pub gpu: String,
    pub ram: String,
    pub sound: String,
    #[serde(default)]
    pub accessories: Vec<String>,
    /// Case name from the case table.
    #[serde(default)]
    pub case: Option<String>,
    /// Explicit case quality (0-100); overrides the case table when set.
    #[serde(default)]
    pub case_quality: Option<u8>,
}

/// Validation errors for values supplied from outside the core.
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    /// Year outside supported range.
    #[error("year {0} is out of supported range [1983, 2100]")]
    YearOutOfRange(i32),
    /// Quarter must be 1..=4.
    #[error("quarter {0} is not in 1..=4")]
    QuarterOutOfRange(u8),
    /// Score-like fields are capped at 100.
    #[error("{field} must be <= 100, got {value}")]
    ScoreOutOfRange { field: &'static str, value: u8 },
    /// Names and identifiers must be non-blank.
    #[error("{0} must not be empty")]
    Empty(&'static str),
    /// Unrecognized hardware category.
    #[error("unknown hardware kind: {0}")]
    UnknownKind(String),
}

/// Validate a game time.
pub fn validate_time(t: &GameTime) -> Result<(), ValidationError> {
    if !(FIRST_YEAR..=LAST_YEAR).contains(&t.year) {
        return Err(ValidationError::YearOutOfRange(t.year));
    }
    if !(1..=4).contains(&t.quarter) {
        return Err(ValidationError::QuarterOutOfRange(t.quarter));
    }
    Ok(())
}

/// Validate a custom chip coming out of research.
pub fn validate_custom_chip(chip: &CustomChip) -> Result<(), ValidationError> {
    if chip.id.trim().is_empty() {
        return Err(ValidationError::Empty("chip id"));
    }
    if chip.name.trim().is_empty() {
        return Err(ValidationError::Empty("chip name"));
    }
    if chip.performance > 100 {
        return Err(ValidationError::ScoreOutOfRange {
            field: "performance",
            value: chip.performance,
        });
    }
    validate_time(&chip.developed)
}

/// Validate a computer model before it is priced or scored.
pub fn validate_model(model: &ComputerModel) -> Result<(), ValidationError> {
    if model.name.trim().is_empty() {
        return Err(ValidationError::Empty("model name"));
    }
    if let Some(q) = model.case_quality {
        if q > 100 {
            return Err(ValidationError::ScoreOutOfRange {
                field: "case_quality",
                value: q,
            });
        }
    }
    Ok(())
}
