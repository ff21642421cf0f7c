use crate::definition::{Basis, Classifier, OptionsSpec, ScaleDefinition, Scoring, Tier};

use super::{at_most, options, severity, strings};

/// K10: Kessler Psychological Distress Scale. 10 items rated 1–5, total 10–50.
pub fn k10() -> ScaleDefinition {
    ScaleDefinition {
        id: "k10".to_string(),
        title: "K10 Psychological Distress Scale".to_string(),
        timeframe: "In the past four weeks".to_string(),
        questions: strings(&[
            "About how often did you feel tired out for no good reason?",
            "About how often did you feel nervous?",
            "About how often did you feel so nervous that nothing could calm you down?",
            "About how often did you feel hopeless?",
            "About how often did you feel restless or fidgety?",
            "About how often did you feel so restless you could not sit still?",
            "About how often did you feel depressed?",
            "About how often did you feel that everything was an effort?",
            "About how often did you feel so sad that nothing could cheer you up?",
            "About how often did you feel worthless?",
        ]),
        options: OptionsSpec::Uniform(options(&[
            ("None of the time", 1),
            ("A little of the time", 2),
            ("Some of the time", 3),
            ("Most of the time", 4),
            ("All of the time", 5),
        ])),
        max: 50,
        scoring: Scoring::Sum,
        classifier: Classifier {
            basis: Basis::Total,
            bands: vec![
                at_most(
                    19,
                    "well",
                    "Likely to be well",
                    Tier::Minimal,
                    "Keep looking after yourself.",
                ),
                at_most(
                    24,
                    "mild",
                    "Mild distress",
                    Tier::Mild,
                    "Self-help strategies are advised; watch for changes.",
                ),
                at_most(
                    29,
                    "moderate",
                    "Moderate distress",
                    Tier::Moderate,
                    "A professional assessment and intervention are recommended.",
                ),
            ],
            top: severity(
                "severe",
                "Severe distress",
                Tier::Severe,
                "Seek a medical assessment soon for structured intervention.",
            ),
        },
        extras: Vec::new(),
    }
}
