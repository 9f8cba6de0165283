// Classifier - heuristic rule-based vehicle sound diagnosis
//
// This module maps a feature record to a diagnosis by scanning a fixed,
// ordered decision list: each rule pairs a predicate over the features with
// a verdict template, the first matching rule wins, and a default verdict
// covers everything that falls through. Keeping the rules in one static
// table keeps the tuning constants auditable and testable in isolation.
//
// The duration rule is evaluated before any acoustic rule: short clips make
// the energy and ZCR estimates unreliable, so extreme acoustic values never
// override it.

use serde::{Deserialize, Serialize};

use crate::analysis::features::Features;

/// Minimum clip length for the acoustic rules to apply at all
const MIN_RELIABLE_DURATION_SECS: f32 = 1.5;

/// Squeal band: both floors must be exceeded strictly
const SQUEAL_ENERGY_FLOOR: f32 = 0.22;
const SQUEAL_ZCR_FLOOR: f32 = 0.11;

/// Knock band: energy floor exceeded strictly, ZCR strictly below ceiling
const KNOCK_ENERGY_FLOOR: f32 = 0.16;
const KNOCK_ZCR_CEILING: f32 = 0.06;

/// Urgency levels ranking how soon the user should act
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Urgency {
    /// Clip too short for reliable pattern matching
    NeedMoreAudio,
    /// Likely serious mechanical event; act promptly
    Urgent,
    /// Worth addressing in the near term
    Soon,
    /// Nothing conclusive; keep observing
    Monitor,
}

impl Urgency {
    /// Human-readable label used by the presentation layer
    pub fn label(&self) -> &'static str {
        match self {
            Urgency::NeedMoreAudio => "Need More Audio",
            Urgency::Urgent => "Urgent",
            Urgency::Soon => "Soon",
            Urgency::Monitor => "Monitor",
        }
    }
}

/// Diagnosis produced for one analyzed clip
///
/// Created fresh per analysis request and never mutated afterwards. The
/// `reason` text is the bare rationale; the presentation layer appends the
/// rounded feature values when rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnosis {
    /// Severity classification
    pub urgency: Urgency,
    /// Short label for the suspected issue
    pub issue: String,
    /// Fixed per-rule confidence score (0.0-1.0)
    pub confidence: f32,
    /// Rationale for the verdict
    pub reason: String,
    /// Recommended action
    pub next_step: String,
}

/// Fixed diagnosis template attached to a rule
struct Verdict {
    urgency: Urgency,
    issue: &'static str,
    confidence: f32,
    reason: &'static str,
    next_step: &'static str,
}

impl Verdict {
    fn to_diagnosis(&self) -> Diagnosis {
        Diagnosis {
            urgency: self.urgency,
            issue: self.issue.to_string(),
            confidence: self.confidence,
            reason: self.reason.to_string(),
            next_step: self.next_step.to_string(),
        }
    }
}

/// One entry in the ordered decision list
struct Rule {
    matches: fn(&Features) -> bool,
    verdict: Verdict,
}

fn too_short(features: &Features) -> bool {
    features.duration_seconds < MIN_RELIABLE_DURATION_SECS
}

fn squeal_band(features: &Features) -> bool {
    features.energy > SQUEAL_ENERGY_FLOOR && features.zcr > SQUEAL_ZCR_FLOOR
}

fn knock_band(features: &Features) -> bool {
    features.energy > KNOCK_ENERGY_FLOOR && features.zcr < KNOCK_ZCR_CEILING
}

/// Ordered rule table, evaluated top to bottom
///
/// The squeal and knock bands are disjoint region checks. Features landing
/// between them (zcr in [0.06, 0.11], or energy at or below 0.16) fall
/// through to the default verdict; that gap is a tuning choice and must not
/// be closed.
static RULES: [Rule; 3] = [
    Rule {
        matches: too_short,
        verdict: Verdict {
            urgency: Urgency::NeedMoreAudio,
            issue: "Recording too short",
            confidence: 0.25,
            reason: "Low sample length reduces pattern reliability.",
            next_step: "Record 5-10 seconds near the sound source while parked.",
        },
    },
    Rule {
        matches: squeal_band,
        verdict: Verdict {
            urgency: Urgency::Soon,
            issue: "Possible belt squeal or high-pitch friction",
            confidence: 0.67,
            reason: "High overall energy with rapid zero-crossing can indicate squeal-like noise.",
            next_step: "Inspect serpentine belt condition and tension. Seek mechanic confirmation.",
        },
    },
    Rule {
        matches: knock_band,
        verdict: Verdict {
            urgency: Urgency::Urgent,
            issue: "Possible knock or low-frequency rattle",
            confidence: 0.64,
            reason: "Strong energy with lower crossing rate can indicate lower-frequency mechanical events.",
            next_step: "Avoid hard driving. Get a professional inspection as soon as possible.",
        },
    },
];

/// Verdict for feature records that match no rule
static DEFAULT_VERDICT: Verdict = Verdict {
    urgency: Urgency::Monitor,
    issue: "No dominant critical pattern detected",
    confidence: 0.52,
    reason: "Feature levels are moderate and not strongly matched to severe heuristics.",
    next_step: "Re-test in a quieter environment and compare under idle vs light rev.",
};

/// Classify a feature record into a diagnosis
///
/// Total function: every valid feature record produces a diagnosis, and the
/// same record always produces the identical diagnosis.
pub fn classify(features: &Features) -> Diagnosis {
    RULES
        .iter()
        .find(|rule| (rule.matches)(features))
        .map_or(&DEFAULT_VERDICT, |rule| &rule.verdict)
        .to_diagnosis()
}

#[cfg(test)]
#[path = "classifier_tests.rs"]
mod tests;
