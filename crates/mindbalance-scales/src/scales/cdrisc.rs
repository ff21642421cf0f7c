use crate::definition::{Basis, Classifier, OptionsSpec, ScaleDefinition, Scoring, Tier};

use super::{below, options, severity, strings};

/// CD-RISC-10: Connor-Davidson Resilience Scale, 10-item form. Rated 0–4.
pub fn cdrisc() -> ScaleDefinition {
    ScaleDefinition {
        id: "cdrisc".to_string(),
        title: "CD-RISC-10 Resilience Scale".to_string(),
        timeframe: "Over the past month".to_string(),
        questions: strings(&[
            "I am able to adapt when changes occur",
            "I can deal with whatever comes my way",
            "I try to see the humorous side of things when I am faced with problems",
            "Having to cope with stress can make me stronger",
            "I tend to bounce back after illness, injury, or other hardships",
            "I believe I can achieve my goals, even if there are obstacles",
            "Under pressure, I stay focused and think clearly",
            "I am not easily discouraged by failure",
            "I think of myself as a strong person when dealing with life's challenges and difficulties",
            "I am able to handle unpleasant or painful feelings",
        ]),
        options: OptionsSpec::Uniform(options(&[
            ("Not true at all", 0),
            ("Rarely true", 1),
            ("Sometimes true", 2),
            ("Often true", 3),
            ("True nearly all the time", 4),
        ])),
        max: 40,
        scoring: Scoring::Sum,
        classifier: Classifier {
            basis: Basis::Total,
            bands: vec![
                below(
                    17,
                    "verylow",
                    "Resilience needs building",
                    Tier::ModeratelySevere,
                    "Consider professional guidance to learn resilience-building techniques.",
                ),
                below(
                    25,
                    "low",
                    "Lower resilience",
                    Tier::Moderate,
                    "Build coping skills such as problem solving, seeking support and positive reframing.",
                ),
                below(
                    33,
                    "moderate",
                    "Moderate resilience",
                    Tier::Mild,
                    "Your resilience is good; taking on challenges can strengthen it further.",
                ),
            ],
            top: severity(
                "high",
                "High resilience",
                Tier::Minimal,
                "You recover and grow well in the face of adversity.",
            ),
        },
        extras: Vec::new(),
    }
}
