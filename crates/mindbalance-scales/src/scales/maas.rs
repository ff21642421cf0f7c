use crate::definition::{Basis, Classifier, OptionsSpec, ScaleDefinition, Scoring, Tier};

use super::{below, options, severity, strings};

/// MAAS-5: Mindful Attention Awareness Scale, short form. 5 items rated 1–5.
///
/// Classified on the item mean; higher means more mindful.
pub fn maas() -> ScaleDefinition {
    ScaleDefinition {
        id: "maas".to_string(),
        title: "MAAS Mindful Attention Awareness Scale (short form)".to_string(),
        timeframe: "In everyday life".to_string(),
        questions: strings(&[
            "I could be experiencing some emotion and not be conscious of it until some time later",
            "I break or spill things because of carelessness, not paying attention, or thinking of something else",
            "I find it difficult to stay focused on what's happening in the present",
            "I tend to walk quickly to get where I'm going without paying attention to what I experience along the way",
            "It seems I am running on automatic without much awareness of what I'm doing",
        ]),
        options: OptionsSpec::Uniform(options(&[
            ("Almost always", 1),
            ("Very frequently", 2),
            ("Somewhat frequently", 3),
            ("Very infrequently", 4),
            ("Almost never", 5),
        ])),
        max: 25,
        scoring: Scoring::Sum,
        classifier: Classifier {
            basis: Basis::ItemMean,
            bands: vec![
                below(
                    3,
                    "low",
                    "Lower mindfulness",
                    Tier::Moderate,
                    "Start structured mindfulness training, beginning with five minutes a day.",
                ),
                below(
                    4,
                    "moderate",
                    "Moderate mindfulness",
                    Tier::Mild,
                    "Add more mindfulness practice such as meditation or focused breathing.",
                ),
            ],
            top: severity(
                "high",
                "High mindfulness",
                Tier::Minimal,
                "You have good mindful awareness. Keep it up.",
            ),
        },
        extras: Vec::new(),
    }
}
