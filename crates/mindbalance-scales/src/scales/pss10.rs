use crate::definition::{Basis, Classifier, OptionsSpec, ScaleDefinition, Scoring, Tier};

use super::{at_most, options, severity, strings};

/// Positively worded PSS-10 items (0-based), scored in reverse.
pub const PSS10_REVERSED: [usize; 4] = [3, 4, 6, 7];

/// PSS-10: Perceived Stress Scale. 10 items rated 0–4, four reverse-scored.
pub fn pss10() -> ScaleDefinition {
    ScaleDefinition {
        id: "pss10".to_string(),
        title: "PSS-10 Perceived Stress Scale".to_string(),
        timeframe: "In the last month".to_string(),
        questions: strings(&[
            "How often have you been upset because of something that happened unexpectedly?",
            "How often have you felt that you were unable to control the important things in your life?",
            "How often have you felt nervous and stressed?",
            "How often have you felt confident about your ability to handle your personal problems?",
            "How often have you felt that things were going your way?",
            "How often have you found that you could not cope with all the things that you had to do?",
            "How often have you been able to control irritations in your life?",
            "How often have you felt that you were on top of things?",
            "How often have you been angered because of things that happened that were outside of your control?",
            "How often have you felt difficulties were piling up so high that you could not overcome them?",
        ]),
        options: OptionsSpec::Uniform(options(&[
            ("Never", 0),
            ("Almost never", 1),
            ("Sometimes", 2),
            ("Fairly often", 3),
            ("Very often", 4),
        ])),
        max: 40,
        scoring: Scoring::Reversed {
            items: PSS10_REVERSED.to_vec(),
        },
        classifier: Classifier {
            basis: Basis::Total,
            bands: vec![
                at_most(
                    13,
                    "low",
                    "Low stress",
                    Tier::Minimal,
                    "Keep up good routines and coping strategies.",
                ),
                at_most(
                    26,
                    "moderate",
                    "Moderate stress",
                    Tier::Mild,
                    "Try relaxation training and time management, and talk to a professional if needed.",
                ),
            ],
            top: severity(
                "high",
                "High stress",
                Tier::Moderate,
                "A professional assessment and intervention are recommended; look after your physical and mental health.",
            ),
        },
        extras: Vec::new(),
    }
}
