use crate::definition::{
    Basis, Classifier, Dimension, ExtraRule, OptionsSpec, ScaleDefinition, Scoring, Tier,
};

use super::{at_most, options, severity, strings};

/// DASS-21 sums are doubled to line up with the 42-item instrument's cutoffs.
pub const DASS21_MULTIPLIER: u32 = 2;

/// DASS-21: Depression Anxiety Stress Scales, short form.
///
/// 21 items rated 0–3, seven per dimension. The verdict lives in the three
/// dimension results; the overall severity only points at them.
pub fn dass21() -> ScaleDefinition {
    ScaleDefinition {
        id: "dass21".to_string(),
        title: "DASS-21 Depression Anxiety Stress Scales".to_string(),
        timeframe: "Over the past week".to_string(),
        questions: strings(&[
            "I found it hard to wind down",
            "I was aware of dryness of my mouth",
            "I couldn't seem to experience any positive feeling at all",
            "I experienced breathing difficulty (e.g. excessively rapid breathing, breathlessness in the absence of physical exertion)",
            "I found it difficult to work up the initiative to do things",
            "I tended to over-react to situations",
            "I experienced trembling (e.g. in the hands)",
            "I felt that I was using a lot of nervous energy",
            "I was worried about situations in which I might panic and make a fool of myself",
            "I felt that I had nothing to look forward to",
            "I found myself getting agitated",
            "I found it difficult to relax",
            "I felt down-hearted and blue",
            "I was intolerant of anything that kept me from getting on with what I was doing",
            "I felt I was close to panic",
            "I was unable to become enthusiastic about anything",
            "I felt I wasn't worth much as a person",
            "I felt that I was rather touchy",
            "I was aware of the action of my heart in the absence of physical exertion",
            "I felt scared without any good reason",
            "I felt that life was meaningless",
        ]),
        options: OptionsSpec::Uniform(options(&[
            ("Did not apply to me at all", 0),
            ("Applied to me to some degree, or some of the time", 1),
            ("Applied to me a considerable degree, or a good part of time", 2),
            ("Applied to me very much, or most of the time", 3),
        ])),
        max: 63,
        scoring: Scoring::Dimensions {
            multiplier: DASS21_MULTIPLIER,
            dimensions: vec![
                Dimension {
                    id: "depression".to_string(),
                    name: "Depression".to_string(),
                    items: one_based(&[3, 5, 10, 13, 16, 17, 21]),
                    classifier: dimension_classifier([9, 13, 20, 27]),
                },
                Dimension {
                    id: "anxiety".to_string(),
                    name: "Anxiety".to_string(),
                    items: one_based(&[2, 4, 7, 9, 15, 19, 20]),
                    classifier: dimension_classifier([7, 9, 14, 19]),
                },
                Dimension {
                    id: "stress".to_string(),
                    name: "Stress".to_string(),
                    items: one_based(&[1, 6, 8, 11, 12, 14, 18]),
                    classifier: dimension_classifier([14, 18, 25, 33]),
                },
            ],
        },
        classifier: Classifier {
            basis: Basis::Total,
            bands: Vec::new(),
            top: severity(
                "dim",
                "Dimension results",
                Tier::Minimal,
                "See the depression, anxiety and stress results below.",
            ),
        },
        extras: vec![ExtraRule::DimensionBreakdown {
            note: "Scores are doubled. If any dimension is moderate or above, a professional assessment is recommended.".to_string(),
        }],
    }
}

/// Item numbers as printed on the form, converted to 0-based positions.
fn one_based(items: &[usize]) -> Vec<usize> {
    items.iter().map(|i| i - 1).collect()
}

/// Normal / mild / moderate / severe / extremely severe, with the four
/// inclusive ceilings that separate them.
fn dimension_classifier(ceilings: [u32; 4]) -> Classifier {
    let [normal, mild, moderate, severe] = ceilings;
    Classifier {
        basis: Basis::Total,
        bands: vec![
            at_most(normal, "normal", "Normal", Tier::Minimal, ""),
            at_most(mild, "mild", "Mild", Tier::Mild, ""),
            at_most(moderate, "moderate", "Moderate", Tier::Moderate, ""),
            at_most(severe, "severe", "Severe", Tier::ModeratelySevere, ""),
        ],
        top: severity("extreme", "Extremely severe", Tier::Severe, ""),
    }
}
