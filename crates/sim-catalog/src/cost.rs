//! Bill-of-materials pricing for computer models.

use rust_decimal::Decimal;
use sim_core::ComputerModel;
use tracing::debug;

use crate::{
    accessory_by_name, case_by_name, component_by_cpu, component_by_gpu, component_by_ram,
    component_by_sound,
};

/// Cost charged for a CPU missing from the catalog.
pub const DEFAULT_CPU_COST: u32 = 50;
/// Cost charged for a GPU missing from the catalog.
pub const DEFAULT_GPU_COST: u32 = 30;
/// Cost charged for memory missing from the catalog.
pub const DEFAULT_RAM_COST: u32 = 40;
/// Cost charged for a sound part missing from the catalog.
pub const DEFAULT_SOUND_COST: u32 = 5;
/// Cost charged per unrecognized accessory.
pub const DEFAULT_ACCESSORY_COST: u32 = 50;
/// Cost charged when the model has no case, or an unknown one.
pub const DEFAULT_CASE_COST: u32 = 80;
/// Case quality assumed when neither the model nor the case table says.
pub const DEFAULT_CASE_QUALITY: u8 = 70;

fn cost_or(found: Option<u32>, slot: &str, name: &str, default: u32) -> u32 {
    found.unwrap_or_else(|| {
        debug!(slot, part = name, fallback = default, "unknown part, using default cost");
        default
    })
}

/// Total unit cost of a model: CPU, GPU, RAM, sound, accessories and case.
///
/// Names missing from the catalog are charged the documented defaults; this
/// never fails.
pub fn calculate_model_cost(model: &ComputerModel) -> Decimal {
    let mut total: u64 = 0;
    total += u64::from(cost_or(
        component_by_cpu(&model.cpu).map(|r| r.cost),
        "cpu",
        &model.cpu,
        DEFAULT_CPU_COST,
    ));
    total += u64::from(cost_or(
        component_by_gpu(&model.gpu).map(|r| r.cost),
        "gpu",
        &model.gpu,
        DEFAULT_GPU_COST,
    ));
    total += u64::from(cost_or(
        component_by_ram(&model.ram).map(|r| r.cost),
        "ram",
        &model.ram,
        DEFAULT_RAM_COST,
    ));
    total += u64::from(cost_or(
        component_by_sound(&model.sound).map(|r| r.cost),
        "sound",
        &model.sound,
        DEFAULT_SOUND_COST,
    ));
    for acc in &model.accessories {
        total += u64::from(cost_or(
            accessory_by_name(acc).map(|r| r.cost),
            "accessory",
            acc,
            DEFAULT_ACCESSORY_COST,
        ));
    }
    let case_cost = model
        .case
        .as_deref()
        .and_then(case_by_name)
        .map(|c| c.cost)
        .unwrap_or(DEFAULT_CASE_COST);
    total += u64::from(case_cost);
    Decimal::from(total)
}

/// Case quality used for build-quality scoring: the model's explicit value,
/// else the case table's, else [`DEFAULT_CASE_QUALITY`].
pub fn case_quality(model: &ComputerModel) -> u8 {
    model
        .case_quality
        .or_else(|| model.case.as_deref().and_then(case_by_name).map(|c| c.quality))
        .unwrap_or(DEFAULT_CASE_QUALITY)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model(cpu: &str) -> ComputerModel {
        ComputerModel {
            name: "Office 486".into(),
            cpu: cpu.into(),
            gpu: "VGA Graphics".into(),
            ram: "2MB RAM".into(),
            sound: "Yamaha YM2149".into(),
            accessories: vec![],
            case: None,
            case_quality: None,
        }
    }

    #[test]
    fn known_parts_sum_with_default_case() {
        // 260 + 90 + 130 + 10 + 80 (no case)
        assert_eq!(calculate_model_cost(&model("Intel 80486")), Decimal::new(570, 0));
    }

    #[test]
    fn unknown_cpu_uses_default() {
        // 50 + 90 + 130 + 10 + 80
        assert_eq!(calculate_model_cost(&model("Nonexistent")), Decimal::new(360, 0));
    }

    #[test]
    fn every_slot_falls_back() {
        let m = ComputerModel {
            name: "Mystery".into(),
            cpu: "?".into(),
            gpu: "?".into(),
            ram: "?".into(),
            sound: "?".into(),
            accessories: vec!["Mouse".into(), "Joystick".into()],
            case: Some("Cardboard Box".into()),
            case_quality: None,
        };
        assert_eq!(calculate_model_cost(&m), Decimal::new(50 + 30 + 40 + 5 + 50 + 50 + 80, 0));
    }

    #[test]
    fn accessories_and_case_are_priced_from_catalog() {
        let mut m = model("Intel 80486");
        m.accessories = vec!["40MB Hard Drive".into(), "VGA Monitor".into()];
        m.case = Some("Metal Desktop".into());
        assert_eq!(calculate_model_cost(&m), Decimal::new(260 + 90 + 130 + 10 + 280 + 300 + 140, 0));
    }

    #[test]
    fn case_quality_precedence() {
        let mut m = model("Intel 80486");
        assert_eq!(case_quality(&m), DEFAULT_CASE_QUALITY);
        m.case = Some("Premium Tower".into());
        assert_eq!(case_quality(&m), 95);
        m.case_quality = Some(40);
        assert_eq!(case_quality(&m), 40);
    }
}
