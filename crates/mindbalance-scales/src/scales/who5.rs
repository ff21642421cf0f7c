use crate::definition::{
    Basis, Classifier, ExtraRule, OptionsSpec, ScaleDefinition, Scoring, Tier,
};

use super::{below, options, severity, strings};

/// Raw WHO-5 totals are multiplied by this to give a 0–100 percentage.
pub const WHO5_PERCENT_FACTOR: u32 = 4;

/// WHO-5 Well-Being Index. 5 items rated 0–5, total 0–25.
///
/// Classified on the percentage score; higher is better.
pub fn who5() -> ScaleDefinition {
    ScaleDefinition {
        id: "who5".to_string(),
        title: "WHO-5 Well-Being Index".to_string(),
        timeframe: "Over the last two weeks".to_string(),
        questions: strings(&[
            "I have felt cheerful and in good spirits",
            "I have felt calm and relaxed",
            "I have felt active and vigorous",
            "I woke up feeling fresh and rested",
            "My daily life has been filled with things that interest me",
        ]),
        options: OptionsSpec::Uniform(options(&[
            ("At no time", 0),
            ("Some of the time", 1),
            ("Less than half of the time", 2),
            ("More than half of the time", 3),
            ("Most of the time", 4),
            ("All of the time", 5),
        ])),
        max: 25,
        scoring: Scoring::Sum,
        classifier: Classifier {
            basis: Basis::Scaled {
                factor: WHO5_PERCENT_FACTOR,
            },
            bands: vec![
                below(
                    29,
                    "marked",
                    "Markedly reduced well-being",
                    Tier::Severe,
                    "Seek a professional assessment soon; structured intervention and support may be needed.",
                ),
                below(
                    51,
                    "moderate",
                    "Moderately reduced well-being",
                    Tier::Moderate,
                    "Talk with a professional about how low mood is affecting you and get targeted advice.",
                ),
                below(
                    70,
                    "mild",
                    "Slightly reduced well-being",
                    Tier::Mild,
                    "Try self-help (exercise, sleep, social contact, hobbies) and watch how things develop.",
                ),
            ],
            top: severity(
                "good",
                "Good well-being",
                Tier::Minimal,
                "Keep up your healthy lifestyle and social connections.",
            ),
        },
        extras: vec![ExtraRule::Percentage {
            factor: WHO5_PERCENT_FACTOR,
            note: "Raw score x 4. A score of 50% or lower suggests reduced well-being worth attention; 28% or lower warrants further assessment.".to_string(),
        }],
    }
}
