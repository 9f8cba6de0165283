use super::*;

/// Helper to create Features struct for testing
fn create_features(energy: f32, zcr: f32, duration_seconds: f32) -> Features {
    Features {
        energy,
        zcr,
        duration_seconds,
    }
}

#[test]
fn test_short_clip_needs_more_audio() {
    let features = create_features(0.05, 0.02, 1.0);
    let diagnosis = classify(&features);

    assert_eq!(diagnosis.urgency, Urgency::NeedMoreAudio);
    assert_eq!(diagnosis.issue, "Recording too short");
    assert_eq!(diagnosis.confidence, 0.25);
}

#[test]
fn test_duration_rule_dominates_extreme_acoustics() {
    // Even features that would match the squeal band are overruled by a
    // short clip
    let features = create_features(0.99, 0.99, 1.0);
    let diagnosis = classify(&features);

    assert_eq!(
        diagnosis.urgency,
        Urgency::NeedMoreAudio,
        "Duration rule must override energy {} / zcr {}",
        features.energy,
        features.zcr
    );

    // And features that would match the knock band
    let features = create_features(0.50, 0.01, 1.49);
    let diagnosis = classify(&features);
    assert_eq!(diagnosis.urgency, Urgency::NeedMoreAudio);
}

#[test]
fn test_squeal_band() {
    // High energy AND high ZCR = belt squeal / high-pitch friction
    let features = create_features(0.30, 0.15, 4.0);
    let diagnosis = classify(&features);

    assert_eq!(diagnosis.urgency, Urgency::Soon);
    assert_eq!(diagnosis.issue, "Possible belt squeal or high-pitch friction");
    assert_eq!(diagnosis.confidence, 0.67);
}

#[test]
fn test_knock_band() {
    // High energy AND low ZCR = knock / low-frequency rattle
    let features = create_features(0.20, 0.03, 3.0);
    let diagnosis = classify(&features);

    assert_eq!(diagnosis.urgency, Urgency::Urgent);
    assert_eq!(diagnosis.issue, "Possible knock or low-frequency rattle");
    assert_eq!(diagnosis.confidence, 0.64);
}

#[test]
fn test_fallthrough_to_monitor() {
    // Moderate features match no acoustic band
    let features = create_features(0.10, 0.08, 5.0);
    let diagnosis = classify(&features);

    assert_eq!(diagnosis.urgency, Urgency::Monitor);
    assert_eq!(diagnosis.issue, "No dominant critical pattern detected");
    assert_eq!(diagnosis.confidence, 0.52);
}

#[test]
fn test_boundary_cases() {
    // Energy exactly at the squeal floor does not match (strict >)
    let features = create_features(0.22, 0.50, 3.0);
    let diagnosis = classify(&features);
    assert_ne!(
        diagnosis.urgency,
        Urgency::Soon,
        "energy == 0.22 must not satisfy the squeal band"
    );

    // Energy exactly at the knock floor does not match (strict >)
    let features = create_features(0.16, 0.01, 3.0);
    let diagnosis = classify(&features);
    assert_ne!(
        diagnosis.urgency,
        Urgency::Urgent,
        "energy == 0.16 must not satisfy the knock band"
    );

    // ZCR exactly at the knock ceiling does not match (strict <)
    let features = create_features(0.50, 0.06, 3.0);
    let diagnosis = classify(&features);
    assert_ne!(
        diagnosis.urgency,
        Urgency::Urgent,
        "zcr == 0.06 must not satisfy the knock band"
    );

    // Duration exactly at the minimum is long enough (strict <)
    let features = create_features(0.30, 0.15, 1.5);
    let diagnosis = classify(&features);
    assert_eq!(
        diagnosis.urgency,
        Urgency::Soon,
        "duration == 1.5 must not trigger the short-clip rule"
    );
}

#[test]
fn test_zcr_gap_falls_through() {
    // The region between the knock ceiling and the squeal floor is a
    // deliberate dead zone, even at high energy
    for zcr in [0.06, 0.08, 0.10, 0.11] {
        let features = create_features(0.90, zcr, 3.0);
        let diagnosis = classify(&features);
        assert_eq!(
            diagnosis.urgency,
            Urgency::Monitor,
            "zcr {} in the gap must fall through to Monitor",
            zcr
        );
    }
}

#[test]
fn test_classify_is_deterministic() {
    let features = create_features(0.30, 0.15, 4.0);
    let first = classify(&features);
    let second = classify(&features);
    assert_eq!(first, second);
}

#[test]
fn test_urgency_labels() {
    assert_eq!(Urgency::NeedMoreAudio.label(), "Need More Audio");
    assert_eq!(Urgency::Urgent.label(), "Urgent");
    assert_eq!(Urgency::Soon.label(), "Soon");
    assert_eq!(Urgency::Monitor.label(), "Monitor");
}

#[test]
fn test_confidence_in_range_for_all_verdicts() {
    let cases = [
        create_features(0.0, 0.0, 0.5),
        create_features(0.30, 0.15, 4.0),
        create_features(0.20, 0.03, 3.0),
        create_features(0.10, 0.08, 5.0),
    ];

    for features in cases {
        let diagnosis = classify(&features);
        assert!(
            (0.0..=1.0).contains(&diagnosis.confidence),
            "Confidence {} out of range for {:?}",
            diagnosis.confidence,
            features
        );
        assert!(!diagnosis.reason.is_empty());
        assert!(!diagnosis.next_step.is_empty());
    }
}

#[test]
fn test_diagnosis_serde_roundtrip() {
    let diagnosis = classify(&create_features(0.20, 0.03, 3.0));
    let json = serde_json::to_string(&diagnosis).unwrap();
    let parsed: Diagnosis = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, diagnosis);
}
