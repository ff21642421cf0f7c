use std::collections::HashSet;

use mindbalance_scales::category::categories;
use mindbalance_scales::definition::{Classifier, OptionsSpec, ScaleDefinition, Scoring};
use mindbalance_scales::error::ScaleError;
use mindbalance_scales::scoring::score;
use mindbalance_scales::{all_scales, get_scale, submit, validate};

#[test]
fn catalogue_has_eighteen_unique_scales() {
    let ids: HashSet<_> = all_scales().iter().map(|s| s.id.as_str()).collect();
    assert_eq!(all_scales().len(), 18);
    assert_eq!(ids.len(), 18);
}

#[test]
fn every_scale_resolves_by_id() {
    for scale in all_scales() {
        let found = get_scale(&scale.id).unwrap();
        assert_eq!(found.title, scale.title);
    }
}

#[test]
fn unknown_scale_is_an_error() {
    assert_eq!(
        get_scale("bdi2").unwrap_err(),
        ScaleError::UnknownScale("bdi2".to_string())
    );
    assert!(matches!(
        submit("bdi2", &[Some(0)]),
        Err(ScaleError::UnknownScale(_))
    ));
}

#[test]
fn per_question_options_match_question_count() {
    for scale in all_scales() {
        match &scale.options {
            OptionsSpec::PerQuestion(sets) => {
                assert_eq!(sets.len(), scale.questions.len(), "{}", scale.id);
                assert!(sets.iter().all(|s| !s.is_empty()), "{}", scale.id);
            }
            OptionsSpec::Uniform(options) => assert!(!options.is_empty(), "{}", scale.id),
        }
    }
}

#[test]
fn declared_max_matches_option_sets() {
    for scale in all_scales() {
        assert_eq!(scale.attainable_max(), scale.max, "{}", scale.id);
    }
}

/// The answer vector giving the largest (or smallest) contribution per item.
fn extreme_answers(scale: &ScaleDefinition, highest: bool) -> Vec<Option<u32>> {
    let reversed: &[usize] = match &scale.scoring {
        Scoring::Reversed { items } => items,
        _ => &[],
    };
    (0..scale.item_count())
        .map(|i| {
            let (min, max) = scale.options.value_range(i).unwrap();
            Some(if reversed.contains(&i) == highest { min } else { max })
        })
        .collect()
}

#[test]
fn scores_stay_within_zero_and_max() {
    for scale in all_scales() {
        let high = score(scale, &extreme_answers(scale, true)).unwrap().total;
        let low = score(scale, &extreme_answers(scale, false)).unwrap().total;
        assert_eq!(high, scale.max, "{}", scale.id);
        assert!(low <= high, "{}", scale.id);
    }
}

fn assert_ascending(id: &str, classifier: &Classifier) {
    let bounds: Vec<f64> = classifier.bands.iter().map(|b| b.ceiling.bound()).collect();
    assert!(
        bounds.windows(2).all(|w| w[0] < w[1]),
        "{id}: ceilings not ascending: {bounds:?}"
    );
}

#[test]
fn band_ceilings_ascend() {
    for scale in all_scales() {
        assert_ascending(&scale.id, &scale.classifier);
        if let Scoring::Dimensions { dimensions, .. } = &scale.scoring {
            for d in dimensions {
                assert_ascending(&format!("{}/{}", scale.id, d.id), &d.classifier);
            }
        }
    }
}

#[test]
fn every_attainable_total_maps_to_exactly_one_band() {
    for scale in all_scales() {
        let classifier = &scale.classifier;
        for total in scale.attainable_min()..=scale.max {
            let value = classifier.basis_value(total, scale.item_count());
            let admitting = classifier
                .bands
                .iter()
                .position(|b| b.ceiling.admits(value));
            let expected = admitting
                .map(|i| &classifier.bands[i].severity)
                .unwrap_or(&classifier.top);
            assert_eq!(classifier.band_for(value), expected, "{} total {total}", scale.id);
        }
    }
}

#[test]
fn dass21_dimensions_partition_the_items() {
    let dass = get_scale("dass21").unwrap();
    let Scoring::Dimensions { dimensions, .. } = &dass.scoring else {
        panic!("dass21 should score by dimension");
    };
    let mut seen: Vec<usize> = dimensions.iter().flat_map(|d| d.items.clone()).collect();
    seen.sort_unstable();
    assert_eq!(seen, (0..21).collect::<Vec<_>>());
    assert!(dimensions.iter().all(|d| d.items.len() == 7));
}

#[test]
fn submit_is_deterministic() {
    for scale in all_scales() {
        let answers = extreme_answers(scale, true);
        assert_eq!(
            submit(&scale.id, &answers).unwrap(),
            submit(&scale.id, &answers).unwrap()
        );
    }
}

#[test]
fn validate_matches_submit_preconditions() {
    assert!(validate("gad2", &[Some(0), Some(3)]).is_ok());
    assert_eq!(
        validate("gad2", &[Some(0), None]),
        Err(ScaleError::IncompleteAnswers { missing: vec![1] })
    );
    assert_eq!(
        validate("gad2", &[Some(0)]),
        Err(ScaleError::AnswerCount {
            expected: 2,
            actual: 1
        })
    );
    assert_eq!(
        validate("gad2", &[Some(0), Some(9)]),
        Err(ScaleError::InvalidAnswerValue { index: 1, value: 9 })
    );
}

#[test]
fn categories_only_reference_registered_scales() {
    let mut listed = HashSet::new();
    for category in categories() {
        for id in &category.scale_ids {
            assert!(get_scale(id).is_ok(), "{} lists unknown {id}", category.id);
            listed.insert(id.as_str());
        }
    }
    assert_eq!(listed.len(), all_scales().len());
}

#[test]
fn definitions_serialize_with_tagged_options() {
    let json = serde_json::to_value(get_scale("auditc").unwrap()).unwrap();
    assert_eq!(json["options"]["kind"], "per_question");
    assert_eq!(json["options"]["options"].as_array().unwrap().len(), 3);
    assert_eq!(json["scoring"]["kind"], "sum");

    let json = serde_json::to_value(get_scale("phq9").unwrap()).unwrap();
    assert_eq!(json["options"]["kind"], "uniform");
    assert_eq!(json["classifier"]["bands"][3]["severity"]["badge"], "moderately_severe");
}

#[test]
fn structured_input_lists_dimensions() {
    let dass = get_scale("dass21").unwrap();
    let submission = dass.submit(&vec![Some(1); 21]).unwrap();
    let text = dass.to_structured_input(&submission);

    assert!(text.starts_with("## DASS-21"));
    assert!(text.contains("- Score: 21 / 63"));
    assert!(text.contains("- Depression: 14 (Moderate)"));
    assert!(text.contains("- Stress: 14 (Normal)"));
}
