#![deny(warnings)]

//! Hardware catalog and availability resolver for Silicon Wars.
//!
//! The static tables in [`tables`] describe the historical timeline. Every
//! query here is a pure function of the tables, the caller's game time and
//! the caller's snapshot of custom chips; nothing is cached or mutated.
//!
//! All "what can I buy" lookups route through [`get_available_hardware`] so
//! that there is exactly one availability rule.

pub mod cost;
pub mod tables;

pub use cost::{calculate_model_cost, case_quality, DEFAULT_CASE_QUALITY};
pub use tables::CaseRecord;

use sim_core::{CustomChip, GameTime, HardwareComponent, HardwareKind, HardwareRecord};
use tracing::trace;

/// Earliest quarter in the timeline.
pub const fn earliest_time() -> GameTime {
    GameTime::new(sim_core::FIRST_YEAR, 1)
}

/// Static records for one category, in release order.
pub fn records(kind: HardwareKind) -> &'static [HardwareRecord] {
    match kind {
        HardwareKind::Cpu => tables::CPUS,
        HardwareKind::Gpu => tables::GPUS,
        HardwareKind::Memory => tables::MEMORY,
        HardwareKind::Sound => tables::SOUND,
        HardwareKind::Storage => tables::STORAGE,
        HardwareKind::Display => tables::DISPLAYS,
    }
}

/// Every static record, grouped by category.
pub fn all_records() -> impl Iterator<Item = &'static HardwareRecord> {
    HardwareKind::ALL.into_iter().flat_map(records)
}

/// All static records projected at `now`, locked ones included, followed by
/// the custom chips (always available, always exclusive).
///
/// Quarters outside 1..=4 are not rejected; they simply compare as numbers.
pub fn get_available_components(now: GameTime, custom_chips: &[CustomChip]) -> Vec<HardwareComponent> {
    let mut out: Vec<HardwareComponent> = all_records()
        .map(|r| HardwareComponent::from_record(r, now))
        .collect();
    out.extend(custom_chips.iter().map(HardwareComponent::from_custom));
    trace!(%now, total = out.len(), custom = custom_chips.len(), "projected catalog");
    out
}

/// Components purchasable at `now`.
pub fn get_available_hardware(now: GameTime, custom_chips: &[CustomChip]) -> Vec<HardwareComponent> {
    get_available_components(now, custom_chips)
        .into_iter()
        .filter(|c| c.available)
        .collect()
}

/// Purchasable components of one category.
pub fn get_available_hardware_by_type(
    kind: HardwareKind,
    now: GameTime,
    custom_chips: &[CustomChip],
) -> Vec<HardwareComponent> {
    get_available_hardware(now, custom_chips)
        .into_iter()
        .filter(|c| c.kind == kind)
        .collect()
}

/// Exact-name membership test against the purchasable set.
pub fn is_hardware_available(name: &str, now: GameTime, custom_chips: &[CustomChip]) -> bool {
    get_available_hardware(now, custom_chips)
        .iter()
        .any(|c| c.name == name)
}

/// Static records locked at `prev` but unlocked at `now`.
///
/// Custom chips never show up here; they arrive through research. When
/// `now <= prev` the result is empty.
pub fn get_newly_available_hardware(prev: GameTime, now: GameTime) -> Vec<HardwareComponent> {
    let before = get_available_hardware(prev, &[]);
    get_available_hardware(now, &[])
        .into_iter()
        .filter(|c| !before.iter().any(|b| b.name == c.name))
        .collect()
}

/// Exact-name lookup within one category.
pub fn find_record(kind: HardwareKind, name: &str) -> Option<&'static HardwareRecord> {
    records(kind).iter().find(|r| r.name == name)
}

pub fn component_by_cpu(name: &str) -> Option<&'static HardwareRecord> {
    find_record(HardwareKind::Cpu, name)
}

pub fn component_by_gpu(name: &str) -> Option<&'static HardwareRecord> {
    find_record(HardwareKind::Gpu, name)
}

pub fn component_by_ram(name: &str) -> Option<&'static HardwareRecord> {
    find_record(HardwareKind::Memory, name)
}

pub fn component_by_sound(name: &str) -> Option<&'static HardwareRecord> {
    find_record(HardwareKind::Sound, name)
}

pub fn component_by_storage(name: &str) -> Option<&'static HardwareRecord> {
    find_record(HardwareKind::Storage, name)
}

pub fn component_by_display(name: &str) -> Option<&'static HardwareRecord> {
    find_record(HardwareKind::Display, name)
}

/// Accessories are storage or display parts.
pub fn accessory_by_name(name: &str) -> Option<&'static HardwareRecord> {
    component_by_storage(name).or_else(|| component_by_display(name))
}

pub fn case_by_name(name: &str) -> Option<&'static CaseRecord> {
    tables::CASES.iter().find(|c| c.name == name)
}

/// All known cases.
pub fn cases() -> &'static [CaseRecord] {
    tables::CASES
}
