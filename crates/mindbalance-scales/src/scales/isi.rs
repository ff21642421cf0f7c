use crate::definition::{Basis, Classifier, OptionsSpec, ScaleDefinition, Scoring, Tier};

use super::{at_most, options, severity, strings};

/// ISI: Insomnia Severity Index. 7 items rated 0–4, total 0–28.
pub fn isi() -> ScaleDefinition {
    ScaleDefinition {
        id: "isi".to_string(),
        title: "ISI Insomnia Severity Index".to_string(),
        timeframe: "Over the last two weeks".to_string(),
        questions: strings(&[
            "Difficulty falling asleep",
            "Difficulty staying asleep",
            "Problems waking up too early",
            "How dissatisfied are you with your current sleep pattern?",
            "How much does your sleep problem interfere with your daytime functioning?",
            "How noticeable to others is the impairment of your quality of life due to your sleep problem?",
            "How worried or distressed are you about your current sleep problem?",
        ]),
        options: OptionsSpec::Uniform(options(&[
            ("None", 0),
            ("Mild", 1),
            ("Moderate", 2),
            ("Severe", 3),
            ("Very severe", 4),
        ])),
        max: 28,
        scoring: Scoring::Sum,
        classifier: Classifier {
            basis: Basis::Total,
            bands: vec![
                at_most(
                    7,
                    "none",
                    "No clinically significant insomnia",
                    Tier::Minimal,
                    "Keep up good sleep hygiene.",
                ),
                at_most(
                    14,
                    "mild",
                    "Subthreshold insomnia",
                    Tier::Mild,
                    "Improve sleep habits and try relaxation training.",
                ),
                at_most(
                    21,
                    "moderate",
                    "Moderate insomnia",
                    Tier::Moderate,
                    "A professional assessment is recommended; consider cognitive behavioural therapy for insomnia.",
                ),
            ],
            top: severity(
                "severe",
                "Severe insomnia",
                Tier::Severe,
                "Seek a medical assessment soon for structured treatment.",
            ),
        },
        extras: Vec::new(),
    }
}
