//! Scale definitions. Pure data: each module returns one or more
//! [`ScaleDefinition`](crate::definition::ScaleDefinition)s built from the
//! published items, option sets and cutoffs.

pub mod audit;
pub mod cdrisc;
pub mod dass21;
pub mod gad;
pub mod gq6;
pub mod isi;
pub mod k10;
pub mod maas;
pub mod phq;
pub mod pss10;
pub mod rses;
pub mod spin;
pub mod swls;
pub mod who5;

use crate::definition::{AnswerOption, Band, Ceiling, Severity, Tier};

pub(crate) fn options(pairs: &[(&str, u32)]) -> Vec<AnswerOption> {
    pairs
        .iter()
        .map(|(label, value)| AnswerOption {
            label: label.to_string(),
            value: *value,
        })
        .collect()
}

pub(crate) fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub(crate) fn severity(key: &str, label: &str, badge: Tier, advice: &str) -> Severity {
    Severity {
        key: key.to_string(),
        label: label.to_string(),
        badge,
        advice: advice.to_string(),
    }
}

/// Band for values `<= ceiling`.
pub(crate) fn at_most(ceiling: u32, key: &str, label: &str, badge: Tier, advice: &str) -> Band {
    Band {
        ceiling: Ceiling::AtMost(f64::from(ceiling)),
        severity: severity(key, label, badge, advice),
    }
}

/// Band for values `< ceiling`.
pub(crate) fn below(ceiling: u32, key: &str, label: &str, badge: Tier, advice: &str) -> Band {
    Band {
        ceiling: Ceiling::Below(f64::from(ceiling)),
        severity: severity(key, label, badge, advice),
    }
}

/// The two-week symptom frequency options shared by the PHQ and GAD families.
pub(crate) fn frequency_options() -> Vec<AnswerOption> {
    options(&[
        ("Not at all", 0),
        ("Several days", 1),
        ("More than half the days", 2),
        ("Nearly every day", 3),
    ])
}
