//! Quality rating ladder and build-quality blend.

use serde::Serialize;
use std::fmt;

use crate::{profile, Build, Slot};

/// Discrete rating for a 0-100 score. The UI localizes via [`QualityRating::key`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QualityRating {
    Poor,
    Weak,
    Sufficient,
    Satisfactory,
    Good,
    VeryGood,
    Outstanding,
    Excellent,
}

impl QualityRating {
    /// The score ladder. Thresholds are checked from the top down.
    pub fn from_score(score: u8) -> Self {
        match score {
            95..=u8::MAX => QualityRating::Excellent,
            90..=94 => QualityRating::Outstanding,
            80..=89 => QualityRating::VeryGood,
            70..=79 => QualityRating::Good,
            60..=69 => QualityRating::Satisfactory,
            50..=59 => QualityRating::Sufficient,
            40..=49 => QualityRating::Weak,
            _ => QualityRating::Poor,
        }
    }

    /// Stable identifier for localization lookups.
    pub fn key(self) -> &'static str {
        match self {
            QualityRating::Excellent => "excellent",
            QualityRating::Outstanding => "outstanding",
            QualityRating::VeryGood => "very_good",
            QualityRating::Good => "good",
            QualityRating::Satisfactory => "satisfactory",
            QualityRating::Sufficient => "sufficient",
            QualityRating::Weak => "weak",
            QualityRating::Poor => "poor",
        }
    }

    /// English fallback text.
    pub fn label(self) -> &'static str {
        match self {
            QualityRating::Excellent => "Excellent",
            QualityRating::Outstanding => "Outstanding",
            QualityRating::VeryGood => "Very good",
            QualityRating::Good => "Good",
            QualityRating::Satisfactory => "Satisfactory",
            QualityRating::Sufficient => "Sufficient",
            QualityRating::Weak => "Weak",
            QualityRating::Poor => "Poor",
        }
    }
}

impl fmt::Display for QualityRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

pub fn get_quality_rating(score: u8) -> QualityRating {
    QualityRating::from_score(score)
}

/// What a build-quality line describes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QualityPart {
    Component(Slot),
    Case,
}

/// One descriptive line of a build-quality report.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BuildQualityLine {
    pub part: QualityPart,
    /// Component name; `None` for the case line.
    pub name: Option<String>,
    pub score: u8,
    pub rating: QualityRating,
}

impl fmt::Display for BuildQualityLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.part, &self.name) {
            (QualityPart::Component(slot), Some(name)) => {
                write!(f, "{slot}: {name} ({}, {})", self.score, self.rating)
            }
            (QualityPart::Component(slot), None) => {
                write!(f, "{slot}: ({}, {})", self.score, self.rating)
            }
            (QualityPart::Case, _) => write!(f, "Case quality: {} ({})", self.score, self.rating),
        }
    }
}

/// Result of [`evaluate_build_quality`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BuildQuality {
    pub score: u8,
    pub rating: QualityRating,
    pub components: Vec<BuildQualityLine>,
}

/// Component blend weights: cpu, gpu, ram, sound.
pub const COMPONENT_WEIGHTS: [(Slot, f64); 4] = [
    (Slot::Cpu, 0.35),
    (Slot::Gpu, 0.25),
    (Slot::Ram, 0.25),
    (Slot::Sound, 0.15),
];
/// Share of the final score taken by the component blend; the case takes the rest.
pub const COMPONENT_SHARE: f64 = 0.85;
/// Case term ceiling in points.
pub const CASE_MAX_POINTS: f64 = 85.0;

/// Blend component quality and case quality into one build rating.
pub fn evaluate_build_quality(build: &Build<'_>, case_quality: u8) -> BuildQuality {
    let mut components = Vec::with_capacity(5);
    let mut blend = 0.0;
    for (slot, weight) in COMPONENT_WEIGHTS {
        let name = build.get(slot);
        let q = profile(slot, name).quality();
        blend += f64::from(q) * weight;
        components.push(BuildQualityLine {
            part: QualityPart::Component(slot),
            name: Some(name.to_string()),
            score: q,
            rating: QualityRating::from_score(q),
        });
    }
    let case_q = case_quality.min(100);
    components.push(BuildQualityLine {
        part: QualityPart::Case,
        name: None,
        score: case_q,
        rating: QualityRating::from_score(case_q),
    });

    let case_points = f64::from(case_q) / 100.0 * CASE_MAX_POINTS;
    let raw = blend * COMPONENT_SHARE + case_points * (1.0 - COMPONENT_SHARE);
    let score = raw.round().clamp(0.0, 100.0) as u8;
    BuildQuality {
        score,
        rating: QualityRating::from_score(score),
        components,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn office() -> Build<'static> {
        Build {
            cpu: "Intel 80486",
            gpu: "VGA Graphics",
            ram: "2MB RAM",
            sound: "Yamaha YM2149",
        }
    }

    #[test]
    fn ladder_thresholds() {
        let cases = [
            (100, QualityRating::Excellent),
            (95, QualityRating::Excellent),
            (94, QualityRating::Outstanding),
            (90, QualityRating::Outstanding),
            (89, QualityRating::VeryGood),
            (80, QualityRating::VeryGood),
            (79, QualityRating::Good),
            (70, QualityRating::Good),
            (69, QualityRating::Satisfactory),
            (60, QualityRating::Satisfactory),
            (59, QualityRating::Sufficient),
            (50, QualityRating::Sufficient),
            (49, QualityRating::Weak),
            (40, QualityRating::Weak),
            (39, QualityRating::Poor),
            (0, QualityRating::Poor),
        ];
        for (score, rating) in cases {
            assert_eq!(get_quality_rating(score), rating, "score {score}");
        }
        assert_eq!(QualityRating::VeryGood.key(), "very_good");
        assert_eq!(QualityRating::VeryGood.to_string(), "Very good");
    }

    #[test]
    fn office_build_with_default_case() {
        // component qualities 93, 73, 86, 35 -> blend 77.55
        // 77.55 * 0.85 + 59.5 * 0.15 = 74.84
        let q = evaluate_build_quality(&office(), 70);
        assert_eq!(q.score, 75);
        assert_eq!(q.rating, QualityRating::Good);
        let scores: Vec<u8> = q.components.iter().map(|l| l.score).collect();
        assert_eq!(scores, vec![93, 73, 86, 35, 70]);
        assert_eq!(q.components[4].part, QualityPart::Case);
        assert_eq!(q.components[0].to_string(), "CPU: Intel 80486 (93, Outstanding)");
        assert_eq!(q.components[4].to_string(), "Case quality: 70 (Good)");
    }

    #[test]
    fn better_case_never_hurts() {
        let cheap = evaluate_build_quality(&office(), 20);
        let premium = evaluate_build_quality(&office(), 95);
        assert!(premium.score >= cheap.score);
    }

    proptest! {
        #[test]
        fn build_quality_in_range(case in 0u8..=255) {
            let q = evaluate_build_quality(&office(), case);
            prop_assert!(q.score <= 100);
            prop_assert_eq!(q.components.len(), 5);
            prop_assert_eq!(q.rating, QualityRating::from_score(q.score));
        }

        #[test]
        fn ladder_is_monotonic(a in 0u8..=100, b in 0u8..=100) {
            if a <= b {
                prop_assert!(QualityRating::from_score(a) <= QualityRating::from_score(b));
            }
        }
    }
}
