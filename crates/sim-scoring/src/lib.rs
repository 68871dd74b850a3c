#![deny(warnings)]

//! Component scoring and compatibility engine for Silicon Wars.
//!
//! Turns component names into per-segment fitness scores, weights them into
//! a category score, checks tier compatibility and rates build quality.
//! Nothing here depends on game time, and unknown names never fail: they
//! score with the documented per-slot defaults.

pub mod compat;
pub mod profiles;
pub mod quality;

pub use compat::{evaluate_compatibility, Bottleneck, Compatibility, Synergy};
pub use profiles::Profile;
pub use quality::{
    evaluate_build_quality, get_quality_rating, BuildQuality, BuildQualityLine, QualityPart,
    QualityRating,
};

use serde::Serialize;
use sim_core::{ComputerModel, Segment};
use std::fmt;
use tracing::debug;

/// The four scored component slots.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Slot {
    Cpu,
    Gpu,
    Ram,
    Sound,
}

impl Slot {
    pub const ALL: [Slot; 4] = [Slot::Cpu, Slot::Gpu, Slot::Ram, Slot::Sound];
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Slot::Cpu => "CPU",
            Slot::Gpu => "GPU",
            Slot::Ram => "RAM",
            Slot::Sound => "Sound",
        })
    }
}

/// The component names being scored. All four slots are required.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Build<'a> {
    pub cpu: &'a str,
    pub gpu: &'a str,
    pub ram: &'a str,
    pub sound: &'a str,
}

impl<'a> Build<'a> {
    pub fn get(&self, slot: Slot) -> &'a str {
        match slot {
            Slot::Cpu => self.cpu,
            Slot::Gpu => self.gpu,
            Slot::Ram => self.ram,
            Slot::Sound => self.sound,
        }
    }
}

impl<'a> From<&'a ComputerModel> for Build<'a> {
    fn from(m: &'a ComputerModel) -> Self {
        Build {
            cpu: &m.cpu,
            gpu: &m.gpu,
            ram: &m.ram,
            sound: &m.sound,
        }
    }
}

/// Score of one component for one segment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ComponentScore {
    /// 0-100.
    pub score: u8,
    /// Generation rank within the slot, only used for compatibility.
    pub tier: u8,
    pub quality_rating: QualityRating,
}

/// Table row for `name`, or the slot default when the name is unknown.
pub fn profile(slot: Slot, name: &str) -> Profile {
    profiles::lookup(slot, name).unwrap_or_else(|| {
        debug!(%slot, component = name, "unknown component, scoring with defaults");
        profiles::default_for(slot)
    })
}

/// True if `name` has its own row in the slot's table.
pub fn is_known(slot: Slot, name: &str) -> bool {
    profiles::lookup(slot, name).is_some()
}

pub fn evaluate_component(slot: Slot, name: &str, segment: Segment) -> ComponentScore {
    let p = profile(slot, name);
    let score = p.score(segment);
    ComponentScore {
        score,
        tier: p.tier,
        quality_rating: QualityRating::from_score(score),
    }
}

pub fn evaluate_cpu(name: &str, segment: Segment) -> ComponentScore {
    evaluate_component(Slot::Cpu, name, segment)
}

pub fn evaluate_gpu(name: &str, segment: Segment) -> ComponentScore {
    evaluate_component(Slot::Gpu, name, segment)
}

pub fn evaluate_ram(name: &str, segment: Segment) -> ComponentScore {
    evaluate_component(Slot::Ram, name, segment)
}

pub fn evaluate_sound(name: &str, segment: Segment) -> ComponentScore {
    evaluate_component(Slot::Sound, name, segment)
}

/// Per-slot weights for a segment. Each vector sums to 1.0.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct SegmentWeights {
    pub cpu: f64,
    pub gpu: f64,
    pub ram: f64,
    pub sound: f64,
}

impl SegmentWeights {
    pub fn get(&self, slot: Slot) -> f64 {
        match slot {
            Slot::Cpu => self.cpu,
            Slot::Gpu => self.gpu,
            Slot::Ram => self.ram,
            Slot::Sound => self.sound,
        }
    }

    pub fn total(&self) -> f64 {
        self.cpu + self.gpu + self.ram + self.sound
    }
}

pub fn segment_weights(segment: Segment) -> SegmentWeights {
    match segment {
        Segment::Gaming => SegmentWeights {
            cpu: 0.25,
            gpu: 0.40,
            ram: 0.20,
            sound: 0.15,
        },
        Segment::Business => SegmentWeights {
            cpu: 0.50,
            gpu: 0.10,
            ram: 0.30,
            sound: 0.10,
        },
        Segment::Workstation => SegmentWeights {
            cpu: 0.60,
            gpu: 0.15,
            ram: 0.20,
            sound: 0.05,
        },
    }
}

/// Weighted segment score of a build, rounded to the nearest integer.
pub fn calculate_category_score(build: &Build<'_>, segment: Segment) -> u8 {
    let w = segment_weights(segment);
    let total: f64 = Slot::ALL
        .iter()
        .map(|&slot| {
            let s = evaluate_component(slot, build.get(slot), segment).score;
            f64::from(s) * w.get(slot)
        })
        .sum();
    total.round() as u8
}

/// Overall index: business 40%, gaming 30%, compatibility 15%, build quality 15%.
pub fn overall_score(business: u8, gaming: u8, compatibility: u8, build_quality: u8) -> u8 {
    let v = f64::from(business) * 0.4
        + f64::from(gaming) * 0.3
        + f64::from(compatibility) * 0.15
        + f64::from(build_quality) * 0.15;
    v.round() as u8
}

/// Everything the evaluation screen shows for one model.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ConfigurationReport {
    pub model: String,
    pub gaming: u8,
    pub business: u8,
    pub workstation: u8,
    pub compatibility: Compatibility,
    pub build_quality: BuildQuality,
    pub overall: u8,
    /// Slots whose component had no table row and scored with defaults.
    pub unrecognized: Vec<Slot>,
}

/// Score a model across all segments plus compatibility and build quality.
///
/// Case quality comes from the model, then the case table, then the default.
pub fn evaluate_configuration(model: &ComputerModel) -> ConfigurationReport {
    let build = Build::from(model);
    let gaming = calculate_category_score(&build, Segment::Gaming);
    let business = calculate_category_score(&build, Segment::Business);
    let workstation = calculate_category_score(&build, Segment::Workstation);
    let compatibility = evaluate_compatibility(&build);
    let build_quality = evaluate_build_quality(&build, sim_catalog::case_quality(model));
    let overall = overall_score(business, gaming, compatibility.score, build_quality.score);
    let unrecognized = Slot::ALL
        .into_iter()
        .filter(|&s| !is_known(s, build.get(s)))
        .collect();
    ConfigurationReport {
        model: model.name.clone(),
        gaming,
        business,
        workstation,
        compatibility,
        build_quality,
        overall,
        unrecognized,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn office_model() -> ComputerModel {
        ComputerModel {
            name: "Office 486".into(),
            cpu: "Intel 80486".into(),
            gpu: "VGA Graphics".into(),
            ram: "2MB RAM".into(),
            sound: "Yamaha YM2149".into(),
            accessories: vec![],
            case: None,
            case_quality: None,
        }
    }

    #[test]
    fn business_office_scores() {
        let m = office_model();
        let b = Build::from(&m);
        assert_eq!(evaluate_cpu(b.cpu, Segment::Business).score, 98);
        assert_eq!(evaluate_gpu(b.gpu, Segment::Business).score, 85);
        assert_eq!(evaluate_ram(b.ram, Segment::Business).score, 98);
        assert_eq!(evaluate_sound(b.sound, Segment::Business).score, 45);
        // 49 + 8.5 + 29.4 + 4.5 = 91.4
        assert_eq!(calculate_category_score(&b, Segment::Business), 91);
    }

    #[test]
    fn unknown_cpu_uses_default_tuple() {
        let s = evaluate_cpu("Foobar9000", Segment::Gaming);
        assert_eq!(s.score, 30);
        assert_eq!(s.tier, 1);
        assert_eq!(s.quality_rating, QualityRating::Poor);
    }

    #[test]
    fn slot_defaults_are_asymmetric() {
        assert_eq!(profile(Slot::Cpu, "?"), profiles::DEFAULT_CPU);
        let ram = profile(Slot::Ram, "?");
        assert_eq!((ram.gaming, ram.business, ram.workstation, ram.tier), (15, 10, 5, 1));
        assert_eq!(profile(Slot::Gpu, "?"), profiles::DEFAULT_GPU);
        assert_eq!(profile(Slot::Sound, "?"), profiles::DEFAULT_SOUND);
    }

    #[test]
    fn weights_sum_to_one() {
        for seg in Segment::ALL {
            assert!((segment_weights(seg).total() - 1.0).abs() < 1e-9, "{seg}");
        }
    }

    #[test]
    fn every_catalog_part_has_a_profile() {
        use sim_core::HardwareKind;
        for (kind, slot) in [
            (HardwareKind::Cpu, Slot::Cpu),
            (HardwareKind::Gpu, Slot::Gpu),
            (HardwareKind::Memory, Slot::Ram),
            (HardwareKind::Sound, Slot::Sound),
        ] {
            for r in sim_catalog::records(kind) {
                assert!(is_known(slot, r.name), "{} has no {slot} profile", r.name);
            }
        }
    }

    #[test]
    fn office_configuration_report() {
        let r = evaluate_configuration(&office_model());
        assert_eq!(r.business, 91);
        // 22 + 30 + 16 + 5.25
        assert_eq!(r.gaming, 73);
        assert_eq!(r.compatibility.score, 100);
        assert_eq!(r.build_quality.score, 75);
        // 36.4 + 21.9 + 15 + 11.25
        assert_eq!(r.overall, 85);
        assert!(r.unrecognized.is_empty());
    }

    #[test]
    fn report_flags_unknown_slots() {
        let mut m = office_model();
        m.cpu = "Foobar9000".into();
        m.sound = "Kazoo".into();
        let r = evaluate_configuration(&m);
        assert_eq!(r.unrecognized, vec![Slot::Cpu, Slot::Sound]);
    }

    #[test]
    fn report_uses_case_table() {
        let mut m = office_model();
        let base = evaluate_configuration(&m).build_quality.score;
        m.case = Some("Premium Tower".into());
        assert!(evaluate_configuration(&m).build_quality.score >= base);
    }

    fn any_name(slot: Slot) -> impl Strategy<Value = String> {
        let names: Vec<String> = profiles::table(slot).iter().map(|(n, _)| n.to_string()).collect();
        prop_oneof![
            proptest::sample::select(names),
            "[a-zA-Z0-9 ]{0,12}",
        ]
    }

    proptest! {
        #[test]
        fn category_scores_bounded_and_idempotent(
            cpu in any_name(Slot::Cpu),
            gpu in any_name(Slot::Gpu),
            ram in any_name(Slot::Ram),
            sound in any_name(Slot::Sound),
        ) {
            let b = Build { cpu: &cpu, gpu: &gpu, ram: &ram, sound: &sound };
            for seg in Segment::ALL {
                let s = calculate_category_score(&b, seg);
                prop_assert!(s <= 100);
                prop_assert_eq!(s, calculate_category_score(&b, seg));
            }
            prop_assert_eq!(evaluate_compatibility(&b), evaluate_compatibility(&b));
        }

        #[test]
        fn overall_is_bounded(a in 0u8..=100, b in 0u8..=100, c in 0u8..=100, d in 0u8..=100) {
            prop_assert!(overall_score(a, b, c, d) <= 100);
        }
    }
}
