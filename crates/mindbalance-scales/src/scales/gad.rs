use crate::definition::{Basis, Classifier, OptionsSpec, ScaleDefinition, Scoring, Tier};

use super::{at_most, below, frequency_options, severity, strings};

/// GAD-7: Generalized Anxiety Disorder scale. 7 items rated 0–3, total 0–21.
pub fn gad7() -> ScaleDefinition {
    ScaleDefinition {
        id: "gad7".to_string(),
        title: "GAD-7 Anxiety Self-Assessment".to_string(),
        timeframe: "Over the last two weeks".to_string(),
        questions: strings(&[
            "Feeling nervous, anxious, or on edge",
            "Not being able to stop or control worrying",
            "Worrying too much about different things",
            "Trouble relaxing",
            "Being so restless that it is hard to sit still",
            "Becoming easily annoyed or irritable",
            "Feeling afraid, as if something awful might happen",
        ]),
        options: OptionsSpec::Uniform(frequency_options()),
        max: 21,
        scoring: Scoring::Sum,
        classifier: Classifier {
            basis: Basis::Total,
            bands: vec![
                at_most(
                    4,
                    "minimal",
                    "Minimal / no anxiety",
                    Tier::Minimal,
                    "Keep good sleep and exercise habits and keep watching your mood and stress levels.",
                ),
                at_most(
                    9,
                    "mild",
                    "Mild anxiety",
                    Tier::Mild,
                    "Try relaxation training and self-help strategies, and talk to a professional if needed.",
                ),
                at_most(
                    14,
                    "moderate",
                    "Moderate anxiety",
                    Tier::Moderate,
                    "A professional assessment and intervention are recommended. Psychotherapy may help.",
                ),
            ],
            top: severity(
                "severe",
                "Severe anxiety",
                Tier::Severe,
                "Seek a medical assessment soon and follow medical advice for structured treatment.",
            ),
        },
        extras: Vec::new(),
    }
}

/// GAD-2: the first two GAD-7 items as a quick screen. Positive at 3+.
pub fn gad2() -> ScaleDefinition {
    ScaleDefinition {
        id: "gad2".to_string(),
        title: "GAD-2 Anxiety Quick Screen".to_string(),
        timeframe: "Over the last two weeks".to_string(),
        questions: strings(&[
            "Feeling nervous, anxious, or on edge",
            "Not being able to stop or control worrying",
        ]),
        options: OptionsSpec::Uniform(frequency_options()),
        max: 6,
        scoring: Scoring::Sum,
        classifier: Classifier {
            basis: Basis::Total,
            bands: vec![below(
                3,
                "screen-neg",
                "Negative / lower risk",
                Tier::Minimal,
                "Keep up a healthy lifestyle and keep monitoring. If symptoms persist or worsen, consult a professional.",
            )],
            top: severity(
                "screen-pos",
                "Positive screen (further assessment advised)",
                Tier::Mild,
                "Complete the GAD-7 or seek a professional assessment for fuller advice.",
            ),
        },
        extras: Vec::new(),
    }
}
