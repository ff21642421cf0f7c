use crate::definition::{Basis, Classifier, OptionsSpec, ScaleDefinition, Scoring, Tier};

use super::{below, options, severity, strings};

/// Negatively worded RSES items (0-based), scored in reverse.
pub const RSES_REVERSED: [usize; 5] = [2, 4, 7, 8, 9];

/// RSES: Rosenberg Self-Esteem Scale. 10 items scored 0–3, total 0–30.
/// Options run from "strongly agree" (3) down to "strongly disagree" (0).
pub fn rses() -> ScaleDefinition {
    ScaleDefinition {
        id: "rses".to_string(),
        title: "RSES Rosenberg Self-Esteem Scale".to_string(),
        timeframe: "In general".to_string(),
        questions: strings(&[
            "I feel that I am a person of worth, at least on an equal plane with others",
            "I feel that I have a number of good qualities",
            "All in all, I am inclined to feel that I am a failure",
            "I am able to do things as well as most other people",
            "I feel I do not have much to be proud of",
            "I take a positive attitude toward myself",
            "On the whole, I am satisfied with myself",
            "I wish I could have more respect for myself",
            "I certainly feel useless at times",
            "At times I think I am no good at all",
        ]),
        options: OptionsSpec::Uniform(options(&[
            ("Strongly agree", 3),
            ("Agree", 2),
            ("Disagree", 1),
            ("Strongly disagree", 0),
        ])),
        max: 30,
        scoring: Scoring::Reversed {
            items: RSES_REVERSED.to_vec(),
        },
        classifier: Classifier {
            basis: Basis::Total,
            bands: vec![
                below(
                    15,
                    "low",
                    "Low self-esteem",
                    Tier::Moderate,
                    "Pay attention to your sense of self-worth: try writing down your strengths, or seek professional support.",
                ),
                below(
                    25,
                    "normal",
                    "Normal self-esteem",
                    Tier::Mild,
                    "Your self-esteem is in the normal range; positive self-affirmation can build confidence further.",
                ),
            ],
            top: severity(
                "high",
                "High self-esteem",
                Tier::Minimal,
                "You have a healthy level of self-esteem. Keep up your positive self-image.",
            ),
        },
        extras: Vec::new(),
    }
}
