use crate::definition::{Basis, Classifier, OptionsSpec, ScaleDefinition, Scoring, Tier};

use super::{at_most, options, severity, strings};

/// SPIN: Social Phobia Inventory. 17 items rated 0–4, total 0–68.
pub fn spin() -> ScaleDefinition {
    ScaleDefinition {
        id: "spin".to_string(),
        title: "SPIN Social Phobia Inventory".to_string(),
        timeframe: "Over the past week".to_string(),
        questions: strings(&[
            "I am afraid of people in authority",
            "I am bothered by blushing in front of people",
            "Parties and social events scare me",
            "I avoid talking to people I don't know",
            "Being criticized scares me a lot",
            "Fear of embarrassment causes me to avoid doing things or speaking to people",
            "Sweating in front of people causes me distress",
            "I avoid going to parties",
            "I avoid activities in which I am the center of attention",
            "Talking to strangers scares me",
            "I avoid having to give speeches",
            "I would do anything to avoid being criticized",
            "Heart palpitations bother me when I am around people",
            "I am afraid of doing things when people might be watching",
            "Being embarrassed or looking stupid are among my worst fears",
            "I avoid speaking to anyone in authority",
            "Trembling or shaking in front of others is distressing to me",
        ]),
        options: OptionsSpec::Uniform(options(&[
            ("Not at all", 0),
            ("A little bit", 1),
            ("Somewhat", 2),
            ("Very much", 3),
            ("Extremely", 4),
        ])),
        max: 68,
        scoring: Scoring::Sum,
        classifier: Classifier {
            basis: Basis::Total,
            bands: vec![
                at_most(
                    20,
                    "none",
                    "No social anxiety",
                    Tier::Minimal,
                    "Your social anxiety is low and social functioning is good.",
                ),
                at_most(
                    30,
                    "mild",
                    "Mild social anxiety",
                    Tier::Mild,
                    "Some social worries; gradual exposure and social skills practice can help.",
                ),
                at_most(
                    40,
                    "moderate",
                    "Moderate social anxiety",
                    Tier::Moderate,
                    "Professional help is recommended; cognitive behavioural therapy works well for social anxiety.",
                ),
                at_most(
                    50,
                    "severe",
                    "Severe social anxiety",
                    Tier::ModeratelySevere,
                    "Professional psychological treatment is strongly recommended and may need combined intervention.",
                ),
            ],
            top: severity(
                "verysevere",
                "Very severe social anxiety",
                Tier::Severe,
                "Please seek professional help as soon as possible.",
            ),
        },
        extras: Vec::new(),
    }
}
