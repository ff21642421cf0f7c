use mindbalance_scales::error::ScaleError;
use mindbalance_scales::get_scale;
use mindbalance_scales::scoring::score;

fn answered(values: &[u32]) -> Vec<Option<u32>> {
    values.iter().copied().map(Some).collect()
}

#[test]
fn phq9_sums_raw_values() {
    let phq9 = get_scale("phq9").unwrap();
    assert_eq!(score(phq9, &answered(&[0; 9])).unwrap().total, 0);
    assert_eq!(score(phq9, &answered(&[3; 9])).unwrap().total, 27);
    assert_eq!(
        score(phq9, &answered(&[1, 2, 3, 0, 1, 2, 3, 0, 1])).unwrap().total,
        13
    );
}

#[test]
fn unanswered_slots_are_rejected_not_zeroed() {
    let phq9 = get_scale("phq9").unwrap();
    let mut answers = answered(&[1; 9]);
    answers[1] = None;
    answers[7] = None;

    let err = score(phq9, &answers).unwrap_err();
    assert_eq!(
        err,
        ScaleError::IncompleteAnswers {
            missing: vec![1, 7]
        }
    );
}

#[test]
fn wrong_answer_count_is_rejected() {
    let gad7 = get_scale("gad7").unwrap();
    let err = score(gad7, &answered(&[0; 6])).unwrap_err();
    assert_eq!(
        err,
        ScaleError::AnswerCount {
            expected: 7,
            actual: 6
        }
    );
}

#[test]
fn value_outside_option_set_is_rejected() {
    let phq9 = get_scale("phq9").unwrap();
    let mut values = [0; 9];
    values[4] = 4;
    let err = score(phq9, &answered(&values)).unwrap_err();
    assert_eq!(err, ScaleError::InvalidAnswerValue { index: 4, value: 4 });
}

#[test]
fn audit10_checks_each_question_against_its_own_options() {
    let audit = get_scale("audit10").unwrap();

    // Items 9 and 10 only offer 0, 2 and 4.
    let mut values = [0; 10];
    values[8] = 1;
    let err = score(audit, &answered(&values)).unwrap_err();
    assert_eq!(err, ScaleError::InvalidAnswerValue { index: 8, value: 1 });

    values[8] = 2;
    values[9] = 4;
    values[0] = 3;
    assert_eq!(score(audit, &answered(&values)).unwrap().total, 9);
}

#[test]
fn k10_options_start_at_one() {
    let k10 = get_scale("k10").unwrap();
    assert_eq!(score(k10, &answered(&[1; 10])).unwrap().total, 10);
    let err = score(k10, &answered(&[0; 10])).unwrap_err();
    assert_eq!(err, ScaleError::InvalidAnswerValue { index: 0, value: 0 });
}

#[test]
fn pss10_reverses_positive_items() {
    let pss = get_scale("pss10").unwrap();

    // Reversed items 4, 5, 7, 8 contribute 4 - v.
    assert_eq!(score(pss, &answered(&[0; 10])).unwrap().total, 16);
    assert_eq!(score(pss, &answered(&[4; 10])).unwrap().total, 24);
    assert_eq!(
        score(pss, &answered(&[4, 4, 4, 0, 0, 4, 0, 0, 4, 4])).unwrap().total,
        40
    );
}

#[test]
fn pss10_midpoint_is_unchanged_by_reversal() {
    let pss = get_scale("pss10").unwrap();
    // 2 mirrors to 2 on a 0-4 scale, so every item contributes the same.
    assert_eq!(score(pss, &answered(&[2; 10])).unwrap().total, 20);
}

#[test]
fn rses_reverses_negative_items_on_descending_options() {
    let rses = get_scale("rses").unwrap();

    // "Strongly agree" everywhere: 5 positives at 3, 5 negatives at 3 - 3.
    assert_eq!(score(rses, &answered(&[3; 10])).unwrap().total, 15);
    assert_eq!(
        score(rses, &answered(&[3, 3, 0, 3, 0, 3, 3, 0, 0, 0])).unwrap().total,
        30
    );
}

#[test]
fn gq6_reverses_within_one_to_seven() {
    let gq6 = get_scale("gq6").unwrap();

    // Items 3 and 6 contribute 8 - v.
    assert_eq!(score(gq6, &answered(&[7; 6])).unwrap().total, 30);
    assert_eq!(score(gq6, &answered(&[7, 7, 1, 7, 7, 1])).unwrap().total, 42);
    assert_eq!(score(gq6, &answered(&[1; 6])).unwrap().total, 18);
}

#[test]
fn dass21_doubles_each_dimension() {
    let dass = get_scale("dass21").unwrap();
    let result = score(dass, &answered(&[1; 21])).unwrap();

    assert_eq!(result.total, 21);
    assert_eq!(result.dimensions.len(), 3);
    for d in &result.dimensions {
        assert_eq!(d.raw, 7, "{}", d.id);
        assert_eq!(d.score, 14, "{}", d.id);
    }
}

#[test]
fn dass21_dimensions_use_fixed_item_sets() {
    let dass = get_scale("dass21").unwrap();

    // Only depression items (3, 5, 10, 13, 16, 17, 21) answered at 3.
    let mut values = [0; 21];
    for item in [3, 5, 10, 13, 16, 17, 21] {
        values[item - 1] = 3;
    }
    let result = score(dass, &answered(&values)).unwrap();

    let by_id = |id: &str| result.dimensions.iter().find(|d| d.id == id).unwrap();
    assert_eq!(by_id("depression").score, 42);
    assert_eq!(by_id("anxiety").score, 0);
    assert_eq!(by_id("stress").score, 0);
}

#[test]
fn completeness_tracks_unanswered_slots() {
    use mindbalance_scales::answers::{AnswerVector, is_complete};

    let mut answers: AnswerVector = vec![None; 7];
    assert!(!is_complete(&answers));
    for slot in answers.iter_mut() {
        *slot = Some(0);
    }
    assert!(is_complete(&answers));
}
