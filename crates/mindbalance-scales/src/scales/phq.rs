use crate::definition::{
    Basis, Classifier, ExtraRule, OptionsSpec, ScaleDefinition, Scoring, Tier,
};

use super::{at_most, below, frequency_options, options, severity, strings};

/// 0-based position of the PHQ-9 self-harm item.
pub const PHQ9_SELF_HARM_ITEM: usize = 8;

/// PHQ-9: Patient Health Questionnaire, depression module.
/// 9 items rated 0–3, total 0–27.
pub fn phq9() -> ScaleDefinition {
    ScaleDefinition {
        id: "phq9".to_string(),
        title: "PHQ-9 Depression Self-Assessment".to_string(),
        timeframe: "Over the last two weeks".to_string(),
        questions: strings(&[
            "Little interest or pleasure in doing things",
            "Feeling down, depressed, or hopeless",
            "Trouble falling or staying asleep, or sleeping too much",
            "Feeling tired or having little energy",
            "Poor appetite or overeating",
            "Feeling bad about yourself, or that you are a failure or have let yourself or your family down",
            "Trouble concentrating on things, such as reading the newspaper or watching television",
            "Moving or speaking so slowly that other people could have noticed, or the opposite: being so fidgety or restless that you have been moving around a lot more than usual",
            "Thoughts that you would be better off dead, or of hurting yourself in some way",
        ]),
        options: OptionsSpec::Uniform(frequency_options()),
        max: 27,
        scoring: Scoring::Sum,
        classifier: Classifier {
            basis: Basis::Total,
            bands: vec![
                at_most(
                    4,
                    "minimal",
                    "Minimal / none",
                    Tier::Minimal,
                    "Keep an eye on how you feel and keep a regular routine and exercise. If symptoms persist or affect daily life, consider talking to a professional.",
                ),
                at_most(
                    9,
                    "mild",
                    "Mild",
                    Tier::Mild,
                    "Talk with a professional about psychoeducation and self-help strategies, and keep monitoring for changes.",
                ),
                at_most(
                    14,
                    "moderate",
                    "Moderate",
                    Tier::Moderate,
                    "A professional assessment is recommended. Psychotherapy may help, and combined treatment can be considered under medical advice.",
                ),
                at_most(
                    19,
                    "modsev",
                    "Moderately severe",
                    Tier::ModeratelySevere,
                    "Seek a professional assessment soon and follow medical advice. Structured psychotherapy and medication may be needed.",
                ),
            ],
            top: severity(
                "severe",
                "Severe",
                Tier::Severe,
                "Seek a medical assessment as soon as possible. If needed, go to a hospital or emergency department for safety and treatment.",
            ),
        },
        extras: vec![ExtraRule::ItemRisk {
            item: PHQ9_SELF_HARM_ITEM,
            message: "If you have thoughts of harming yourself or others, seek help now: call your local emergency number or go to the nearest hospital emergency department.".to_string(),
        }],
    }
}

/// PHQ-2: the first two PHQ-9 items as a quick screen. Positive at 3+.
pub fn phq2() -> ScaleDefinition {
    ScaleDefinition {
        id: "phq2".to_string(),
        title: "PHQ-2 Depression Quick Screen".to_string(),
        timeframe: "Over the last two weeks".to_string(),
        questions: strings(&[
            "Little interest or pleasure in doing things",
            "Feeling down, depressed, or hopeless",
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
                "Complete the PHQ-9 for a fuller picture and talk with a professional soon.",
            ),
        },
        extras: Vec::new(),
    }
}

/// PHQ-15: somatic symptom severity. 15 items rated 0–2, total 0–30.
pub fn phq15() -> ScaleDefinition {
    ScaleDefinition {
        id: "phq15".to_string(),
        title: "PHQ-15 Somatic Symptom Scale".to_string(),
        timeframe: "Over the last four weeks".to_string(),
        questions: strings(&[
            "Stomach pain",
            "Back pain",
            "Pain in your arms, legs, or joints (knees, hips, etc.)",
            "Headaches",
            "Chest pain",
            "Dizziness",
            "Fainting spells",
            "Feeling your heart pound or race",
            "Shortness of breath",
            "Constipation, loose bowels, or diarrhea",
            "Nausea, gas, or indigestion",
            "Feeling tired or having low energy",
            "Trouble sleeping",
            "Menstrual cramps or other problems with your periods (if applicable)",
            "Sexual problems",
        ]),
        options: OptionsSpec::Uniform(options(&[
            ("Not bothered at all", 0),
            ("Bothered a little", 1),
            ("Bothered a lot", 2),
        ])),
        max: 30,
        scoring: Scoring::Sum,
        classifier: Classifier {
            basis: Basis::Total,
            bands: vec![
                at_most(
                    4,
                    "minimal",
                    "Minimal / none",
                    Tier::Minimal,
                    "Keep a healthy lifestyle and watch for changes.",
                ),
                at_most(
                    9,
                    "low",
                    "Low",
                    Tier::Mild,
                    "Self-management is advised; consult a professional if needed.",
                ),
                at_most(
                    14,
                    "moderate",
                    "Medium",
                    Tier::Moderate,
                    "A professional assessment and targeted intervention are recommended.",
                ),
            ],
            top: severity(
                "high",
                "High",
                Tier::Severe,
                "Seek a medical assessment and structured intervention as soon as possible.",
            ),
        },
        extras: Vec::new(),
    }
}
