use crate::definition::{Basis, Classifier, OptionsSpec, ScaleDefinition, Scoring, Tier};

use super::{below, options, severity, strings};

/// GQ-6 items 3 and 6 (0-based 2 and 5) are scored in reverse.
pub const GQ6_REVERSED: [usize; 2] = [2, 5];

/// GQ-6: Gratitude Questionnaire. 6 items rated 1–7, total 6–42.
pub fn gq6() -> ScaleDefinition {
    ScaleDefinition {
        id: "gq6".to_string(),
        title: "GQ-6 Gratitude Questionnaire".to_string(),
        timeframe: "In general".to_string(),
        questions: strings(&[
            "I have so much in life to be thankful for",
            "If I had to list everything that I felt grateful for, it would be a very long list",
            "When I look at the world, I don't see much to be grateful for",
            "I am grateful to a wide variety of people",
            "As I get older I find myself more able to appreciate the people, events, and situations that have been part of my life history",
            "Long amounts of time can go by before I feel grateful to something or someone",
        ]),
        options: OptionsSpec::Uniform(options(&[
            ("Strongly disagree", 1),
            ("Disagree", 2),
            ("Slightly disagree", 3),
            ("Neutral", 4),
            ("Slightly agree", 5),
            ("Agree", 6),
            ("Strongly agree", 7),
        ])),
        max: 42,
        scoring: Scoring::Reversed {
            items: GQ6_REVERSED.to_vec(),
        },
        classifier: Classifier {
            basis: Basis::Total,
            bands: vec![
                below(
                    28,
                    "low",
                    "Gratitude to cultivate",
                    Tier::Moderate,
                    "Build a gratitude habit by noticing the good things in each day.",
                ),
                below(
                    35,
                    "moderate",
                    "Moderate gratitude",
                    Tier::Mild,
                    "Your gratitude is good; try writing down three things you are thankful for each day.",
                ),
            ],
            top: severity(
                "high",
                "High gratitude",
                Tier::Minimal,
                "You have a strong disposition toward gratitude, which benefits mental health.",
            ),
        },
        extras: Vec::new(),
    }
}
