use crate::definition::{
    AnswerOption, Basis, Classifier, ExtraRule, OptionsSpec, ScaleDefinition, Scoring, Tier,
};

use super::{at_most, options, severity, strings};

fn how_often() -> Vec<AnswerOption> {
    options(&[
        ("Never", 0),
        ("Monthly or less", 1),
        ("2 to 4 times a month", 2),
        ("2 to 3 times a week", 3),
        ("4 or more times a week", 4),
    ])
}

fn drinks_per_day() -> Vec<AnswerOption> {
    options(&[
        ("1 or 2", 0),
        ("3 or 4", 1),
        ("5 or 6", 2),
        ("7 to 9", 3),
        ("10 or more", 4),
    ])
}

fn occasions() -> Vec<AnswerOption> {
    options(&[
        ("Never", 0),
        ("Less than monthly", 1),
        ("Monthly", 2),
        ("Weekly", 3),
        ("Daily or almost daily", 4),
    ])
}

fn ever_happened() -> Vec<AnswerOption> {
    options(&[
        ("No", 0),
        ("Yes, but not in the last year", 2),
        ("Yes, during the last year", 4),
    ])
}

/// AUDIT: Alcohol Use Disorders Identification Test, full 10 items.
/// Items 1–8 are rated 0–4; items 9–10 score 0, 2 or 4. Total 0–40.
pub fn audit10() -> ScaleDefinition {
    ScaleDefinition {
        id: "audit10".to_string(),
        title: "AUDIT-10 Alcohol Use Disorders Identification Test".to_string(),
        timeframe: "Over the past year".to_string(),
        questions: strings(&[
            "How often do you have a drink containing alcohol?",
            "How many standard drinks do you have on a typical day when you are drinking?",
            "How often do you have six or more drinks on one occasion?",
            "How often during the last year have you found that you were not able to stop drinking once you had started?",
            "How often during the last year have you failed to do what was normally expected of you because of drinking?",
            "How often during the last year have you needed a first drink in the morning to get yourself going after a heavy drinking session?",
            "How often during the last year have you had a feeling of guilt or remorse after drinking?",
            "How often during the last year have you been unable to remember what happened the night before because of your drinking?",
            "Have you or someone else been injured because of your drinking?",
            "Has a relative, friend, doctor, or other health worker been concerned about your drinking or suggested you cut down?",
        ]),
        options: OptionsSpec::PerQuestion(vec![
            how_often(),
            drinks_per_day(),
            occasions(),
            occasions(),
            occasions(),
            occasions(),
            occasions(),
            occasions(),
            ever_happened(),
            ever_happened(),
        ]),
        max: 40,
        scoring: Scoring::Sum,
        classifier: Classifier {
            basis: Basis::Total,
            bands: vec![
                at_most(
                    7,
                    "low",
                    "Low risk",
                    Tier::Minimal,
                    "Keep to low-risk drinking or an alcohol-free lifestyle.",
                ),
                at_most(
                    15,
                    "hazard",
                    "Hazardous drinking",
                    Tier::Mild,
                    "Cut down on drinking, and seek professional support if needed.",
                ),
                at_most(
                    19,
                    "harmful",
                    "Harmful drinking",
                    Tier::Moderate,
                    "A professional assessment is recommended, along with a plan to cut down or stop.",
                ),
            ],
            top: severity(
                "dependence",
                "Possible alcohol dependence",
                Tier::Severe,
                "Seek a medical assessment soon for structured treatment and support.",
            ),
        },
        extras: vec![ExtraRule::Note {
            text: "Some cutoffs are adjusted for sex, culture and clinical setting; interpret together with professional judgement.".to_string(),
        }],
    }
}

/// AUDIT-C: the three AUDIT consumption items. Total 0–12.
pub fn auditc() -> ScaleDefinition {
    ScaleDefinition {
        id: "auditc".to_string(),
        title: "AUDIT-C Alcohol Use Screen".to_string(),
        timeframe: "Over the past year".to_string(),
        questions: strings(&[
            "How often do you have a drink containing alcohol?",
            "How many standard drinks do you have on a typical day when you are drinking? (1 standard drink is about 330ml beer, 100ml wine or 30ml spirits)",
            "How often do you have six or more drinks on one occasion?",
        ]),
        options: OptionsSpec::PerQuestion(vec![how_often(), drinks_per_day(), occasions()]),
        max: 12,
        scoring: Scoring::Sum,
        classifier: Classifier {
            basis: Basis::Total,
            bands: vec![
                at_most(
                    3,
                    "low",
                    "Low risk",
                    Tier::Minimal,
                    "Keep to low-risk drinking or an alcohol-free lifestyle.",
                ),
                at_most(
                    5,
                    "hazard",
                    "Possibly hazardous drinking",
                    Tier::Mild,
                    "Reduce how much and how often you drink; consult a professional if that is difficult.",
                ),
                at_most(
                    7,
                    "high",
                    "High risk",
                    Tier::Moderate,
                    "A professional assessment and a personal plan to cut down or stop are recommended.",
                ),
            ],
            top: severity(
                "probable",
                "Probable alcohol use disorder",
                Tier::Severe,
                "Seek a medical assessment soon for structured intervention and support.",
            ),
        },
        extras: vec![ExtraRule::Note {
            text: "Common positive cutoffs are 4 or more for men and 3 or more for women; interpret with personal circumstances and professional judgement.".to_string(),
        }],
    }
}
