use mindbalance_scales::definition::Tier;
use mindbalance_scales::get_scale;
use mindbalance_scales::severity::{Extra, classify};
use mindbalance_scales::submit;

fn answered(values: &[u32]) -> Vec<Option<u32>> {
    values.iter().copied().map(Some).collect()
}

#[test]
fn phq9_cutoffs_are_inclusive_on_the_lower_band() {
    let phq9 = get_scale("phq9").unwrap();
    let expected = [
        (0, "minimal"),
        (4, "minimal"),
        (5, "mild"),
        (9, "mild"),
        (10, "moderate"),
        (14, "moderate"),
        (15, "modsev"),
        (19, "modsev"),
        (20, "severe"),
        (27, "severe"),
    ];
    for (total, key) in expected {
        assert_eq!(classify(phq9, total).key, key, "total {total}");
    }
}

#[test]
fn phq9_all_zero_is_minimal_without_banner() {
    let result = submit("phq9", &answered(&[0; 9])).unwrap();
    assert_eq!(result.total, 0);
    assert_eq!(result.severity.key, "minimal");
    assert_eq!(result.severity.badge, Tier::Minimal);
    assert!(!result.has_safety_risk());
}

#[test]
fn phq9_all_three_is_severe() {
    let result = submit("phq9", &answered(&[3; 9])).unwrap();
    assert_eq!(result.total, 27);
    assert_eq!(result.max, 27);
    assert_eq!(result.severity.key, "severe");
    assert_eq!(result.severity.badge, Tier::Severe);
}

#[test]
fn phq9_self_harm_item_raises_banner_at_minimal_total() {
    let mut values = [0; 9];
    values[8] = 1;
    let result = submit("phq9", &answered(&values)).unwrap();

    assert_eq!(result.total, 1);
    assert_eq!(result.severity.key, "minimal");
    assert!(result.has_safety_risk());
    assert!(matches!(
        result.extras.as_slice(),
        [Extra::SafetyRisk { item: 8, .. }]
    ));
}

#[test]
fn safety_banner_is_independent_of_severity() {
    // Same total, the point moved between item 1 and item 9.
    let without = submit("phq9", &answered(&[2, 1, 1, 1, 1, 1, 1, 1, 0])).unwrap();
    let with = submit("phq9", &answered(&[1, 1, 1, 1, 1, 1, 1, 1, 1])).unwrap();

    assert_eq!(without.total, with.total);
    assert_eq!(without.severity, with.severity);
    assert!(!without.has_safety_risk());
    assert!(with.has_safety_risk());
}

#[test]
fn quick_screens_turn_positive_at_three() {
    for id in ["phq2", "gad2"] {
        assert_eq!(submit(id, &answered(&[1, 1])).unwrap().severity.key, "screen-neg");
        assert_eq!(submit(id, &answered(&[2, 1])).unwrap().severity.key, "screen-pos");
        assert_eq!(submit(id, &answered(&[3, 3])).unwrap().severity.key, "screen-pos");
    }
}

#[test]
fn dass21_classifies_each_dimension_on_its_own_cutoffs() {
    let result = submit("dass21", &answered(&[1; 21])).unwrap();
    assert_eq!(result.severity.key, "dim");

    let Some(Extra::Dimensions { dimensions, .. }) = result.extras.first() else {
        panic!("expected a dimension breakdown, got {:?}", result.extras);
    };
    let verdict = |id: &str| {
        dimensions
            .iter()
            .find(|d| d.id == id)
            .map(|d| (d.score, d.severity.key.as_str()))
            .unwrap()
    };

    assert_eq!(verdict("depression"), (14, "moderate"));
    assert_eq!(verdict("anxiety"), (14, "moderate"));
    assert_eq!(verdict("stress"), (14, "normal"));
}

#[test]
fn dass21_extremes() {
    let result = submit("dass21", &answered(&[3; 21])).unwrap();
    let Some(Extra::Dimensions { dimensions, .. }) = result.extras.first() else {
        panic!("expected a dimension breakdown");
    };
    for d in dimensions {
        assert_eq!(d.score, 42);
        assert_eq!(d.severity.key, "extreme");
        assert_eq!(d.severity.badge, Tier::Severe);
    }
}

#[test]
fn who5_full_marks_is_good_wellbeing_at_one_hundred_percent() {
    let result = submit("who5", &answered(&[5; 5])).unwrap();
    assert_eq!(result.total, 25);
    assert_eq!(result.severity.key, "good");
    assert!(result
        .extras
        .iter()
        .any(|e| matches!(e, Extra::Percentage { percent: 100, .. })));
}

#[test]
fn who5_classifies_on_percentage() {
    let who5 = get_scale("who5").unwrap();
    let expected = [
        (0, "marked"),
        (7, "marked"),
        (8, "moderate"),
        (12, "moderate"),
        (13, "mild"),
        (17, "mild"),
        (18, "good"),
    ];
    for (total, key) in expected {
        assert_eq!(classify(who5, total).key, key, "total {total}");
    }
}

#[test]
fn maas_classifies_on_item_mean() {
    let result = |values: &[u32]| submit("maas", &answered(values)).unwrap().severity.key;
    assert_eq!(result(&[2; 5]), "low");
    assert_eq!(result(&[3, 3, 3, 3, 2]), "low");
    assert_eq!(result(&[3; 5]), "moderate");
    assert_eq!(result(&[4, 4, 4, 4, 3]), "moderate");
    assert_eq!(result(&[4; 5]), "high");
}

#[test]
fn higher_is_better_scales_use_exclusive_ceilings() {
    let rses = get_scale("rses").unwrap();
    assert_eq!(classify(rses, 14).key, "low");
    assert_eq!(classify(rses, 15).key, "normal");
    assert_eq!(classify(rses, 24).key, "normal");
    assert_eq!(classify(rses, 25).key, "high");

    let swls = get_scale("swls").unwrap();
    assert_eq!(classify(swls, 5).key, "extremely_dissatisfied");
    assert_eq!(classify(swls, 20).key, "neutral");
    assert_eq!(classify(swls, 21).key, "slightly");
    assert_eq!(classify(swls, 31).key, "extremely");

    let cdrisc = get_scale("cdrisc").unwrap();
    assert_eq!(classify(cdrisc, 16).key, "verylow");
    assert_eq!(classify(cdrisc, 33).key, "high");
}

#[test]
fn pss10_reversed_total_drives_classification() {
    // Raw sum would be 0; reversed items lift it to 16.
    let result = submit("pss10", &answered(&[0; 10])).unwrap();
    assert_eq!(result.total, 16);
    assert_eq!(result.severity.key, "moderate");
}

#[test]
fn audit_scales_always_carry_their_note() {
    for (id, n) in [("audit10", 10), ("auditc", 3)] {
        let result = submit(id, &answered(&vec![0; n])).unwrap();
        assert_eq!(result.severity.key, "low");
        assert!(matches!(result.extras.as_slice(), [Extra::Note { .. }]));
    }
}

#[test]
fn out_of_range_totals_fall_into_the_edge_bands() {
    let phq9 = get_scale("phq9").unwrap();
    assert_eq!(classify(phq9, 1000).key, "severe");
    let swls = get_scale("swls").unwrap();
    assert_eq!(classify(swls, 0).key, "extremely_dissatisfied");
}
