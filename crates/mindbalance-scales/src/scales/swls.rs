use crate::definition::{Basis, Classifier, OptionsSpec, ScaleDefinition, Scoring, Tier};

use super::{below, options, severity, strings};

/// SWLS: Satisfaction With Life Scale. 5 items rated 1–7, total 5–35.
pub fn swls() -> ScaleDefinition {
    ScaleDefinition {
        id: "swls".to_string(),
        title: "SWLS Satisfaction With Life Scale".to_string(),
        timeframe: "In general".to_string(),
        questions: strings(&[
            "In most ways my life is close to my ideal",
            "The conditions of my life are excellent",
            "I am satisfied with my life",
            "So far I have gotten the important things I want in life",
            "If I could live my life over, I would change almost nothing",
        ]),
        options: OptionsSpec::Uniform(options(&[
            ("Strongly disagree", 1),
            ("Disagree", 2),
            ("Slightly disagree", 3),
            ("Neither agree nor disagree", 4),
            ("Slightly agree", 5),
            ("Agree", 6),
            ("Strongly agree", 7),
        ])),
        max: 35,
        scoring: Scoring::Sum,
        classifier: Classifier {
            basis: Basis::Total,
            bands: vec![
                below(
                    10,
                    "extremely_dissatisfied",
                    "Extremely dissatisfied",
                    Tier::Severe,
                    "Professional psychological support is strongly recommended to explore meaning and possible change.",
                ),
                below(
                    15,
                    "dissatisfied",
                    "Dissatisfied",
                    Tier::ModeratelySevere,
                    "Consider discussing what troubles you with a professional to find ways to improve.",
                ),
                below(
                    21,
                    "neutral",
                    "Neutral",
                    Tier::Moderate,
                    "Reflect on your life goals and look for directions that could raise your satisfaction.",
                ),
                below(
                    26,
                    "slightly",
                    "Slightly satisfied",
                    Tier::Mild,
                    "Broadly satisfied; think about which areas could still improve.",
                ),
                below(
                    31,
                    "satisfied",
                    "Satisfied",
                    Tier::Minimal,
                    "You are satisfied with your life overall and your quality of life is good.",
                ),
            ],
            top: severity(
                "extremely",
                "Extremely satisfied",
                Tier::Minimal,
                "You are very satisfied with your life. Keep up your positive outlook.",
            ),
        },
        extras: Vec::new(),
    }
}
