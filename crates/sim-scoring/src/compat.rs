//! Tier-based compatibility heuristics between the four scored slots.

use serde::Serialize;
use std::fmt;

use crate::{profile, Build, Slot};

/// Starting point before any rule fires.
pub const BASE_SCORE: i32 = 80;
pub const MIN_SCORE: i32 = 20;
pub const MAX_SCORE: i32 = 100;

/// A rule that raised the compatibility score.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Synergy {
    /// CPU, GPU and RAM are all high-end.
    HighEnd,
    /// CPU and RAM are within one tier.
    BalancedCpuRam,
    /// CPU and GPU both tier 4 or better.
    StrongCpuGpu,
    /// Capable sound paired with a capable GPU.
    Multimedia,
}

impl Synergy {
    pub fn bonus(self) -> i32 {
        match self {
            Synergy::HighEnd => 15,
            Synergy::BalancedCpuRam => 8,
            Synergy::StrongCpuGpu => 10,
            Synergy::Multimedia => 5,
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Synergy::HighEnd => "High-end components work together perfectly",
            Synergy::BalancedCpuRam => "CPU and RAM are well balanced",
            Synergy::StrongCpuGpu => "Strong CPU and GPU complement each other",
            Synergy::Multimedia => "Sound and graphics make a strong multimedia pairing",
        }
    }
}

impl fmt::Display for Synergy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// A rule that lowered the compatibility score.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Bottleneck {
    /// CPU more than two tiers ahead of RAM.
    RamLimitsCpu,
    /// RAM more than two tiers ahead of CPU.
    RamUnderused,
    /// CPU and GPU more than three tiers apart.
    CpuGpuMismatch,
}

impl Bottleneck {
    pub fn penalty(self) -> i32 {
        match self {
            Bottleneck::RamLimitsCpu => 15,
            Bottleneck::RamUnderused => 8,
            Bottleneck::CpuGpuMismatch => 12,
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Bottleneck::RamLimitsCpu => "Not enough RAM to keep the CPU busy",
            Bottleneck::RamUnderused => "RAM is oversized for this CPU",
            Bottleneck::CpuGpuMismatch => "CPU and GPU are from different generations",
        }
    }
}

impl fmt::Display for Bottleneck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Result of [`evaluate_compatibility`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Compatibility {
    /// Clamped to [MIN_SCORE, MAX_SCORE].
    pub score: u8,
    pub synergies: Vec<Synergy>,
    pub bottlenecks: Vec<Bottleneck>,
}

/// Which rules fire for the given tiers. Rules are independent; every one
/// that applies is reported.
pub fn rules_for_tiers(cpu: u8, gpu: u8, ram: u8, sound: u8) -> (Vec<Synergy>, Vec<Bottleneck>) {
    let (cpu, gpu, ram, sound) = (i32::from(cpu), i32::from(gpu), i32::from(ram), i32::from(sound));
    let mut synergies = Vec::new();
    let mut bottlenecks = Vec::new();

    if cpu >= 6 && gpu >= 4 && ram >= 6 {
        synergies.push(Synergy::HighEnd);
    }

    if (cpu - ram).abs() <= 1 {
        synergies.push(Synergy::BalancedCpuRam);
    } else if cpu > ram + 2 {
        bottlenecks.push(Bottleneck::RamLimitsCpu);
    } else if ram > cpu + 2 {
        bottlenecks.push(Bottleneck::RamUnderused);
    }

    if cpu >= 4 && gpu >= 4 {
        synergies.push(Synergy::StrongCpuGpu);
    }
    if (cpu - gpu).abs() > 3 {
        bottlenecks.push(Bottleneck::CpuGpuMismatch);
    }

    if sound >= 3 && gpu >= 4 {
        synergies.push(Synergy::Multimedia);
    }

    (synergies, bottlenecks)
}

/// Apply fired rules to the base score and clamp.
pub fn score_from_rules(synergies: &[Synergy], bottlenecks: &[Bottleneck]) -> u8 {
    let raw = BASE_SCORE + synergies.iter().map(|s| s.bonus()).sum::<i32>()
        - bottlenecks.iter().map(|b| b.penalty()).sum::<i32>();
    raw.clamp(MIN_SCORE, MAX_SCORE) as u8
}

/// Score how well the chosen parts work together.
pub fn evaluate_compatibility(build: &Build<'_>) -> Compatibility {
    let (synergies, bottlenecks) = rules_for_tiers(
        profile(Slot::Cpu, build.cpu).tier,
        profile(Slot::Gpu, build.gpu).tier,
        profile(Slot::Ram, build.ram).tier,
        profile(Slot::Sound, build.sound).tier,
    );
    Compatibility {
        score: score_from_rules(&synergies, &bottlenecks),
        synergies,
        bottlenecks,
    }
}
