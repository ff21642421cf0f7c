use std::sync::LazyLock;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A named grouping of scales for browsing.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub description: String,
    pub scale_ids: Vec<String>,
}

fn category(id: &str, name: &str, description: &str, scale_ids: &[&str]) -> Category {
    Category {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        scale_ids: scale_ids.iter().map(|s| s.to_string()).collect(),
    }
}

/// All categories, in display order.
pub fn categories() -> &'static [Category] {
    static CATEGORIES: LazyLock<Vec<Category>> = LazyLock::new(|| {
        vec![
            category(
                "core",
                "Core assessments",
                "Common mental health screening scales",
                &["phq9", "gad7", "dass21", "k10"],
            ),
            category(
                "quick_screen",
                "Quick screens",
                "Two to five minute check-ins",
                &["phq2", "gad2", "who5"],
            ),
            category(
                "specific",
                "Specific concerns",
                "In-depth assessment of particular problems",
                &["pss10", "isi", "phq15", "spin", "auditc", "audit10"],
            ),
            category(
                "positive",
                "Positive psychology",
                "Personal psychological resources",
                &["rses", "cdrisc", "swls", "maas", "gq6"],
            ),
        ]
    });
    &CATEGORIES
}
