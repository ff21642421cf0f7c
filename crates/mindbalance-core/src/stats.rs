//! Per-user usage statistics over saved assessments, moods and journal entries.

use std::collections::{BTreeMap, HashSet};

use jiff::civil::Date;
use jiff::tz::TimeZone;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::gratitude::GratitudeEntry;
use crate::models::mood::MoodEntry;
use crate::models::record::AssessmentRecord;

/// Number of most recent mood entries in the trend.
pub const MOOD_TREND_LEN: usize = 30;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScaleStat {
    pub scale_id: String,
    pub scale_title: String,
    pub count: usize,
    /// Mean of `total / max` in percent, rounded to two decimals.
    pub avg_percentage: f64,
    pub last_assessment: jiff::Timestamp,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct UserStats {
    pub total_assessments: usize,
    pub scale_stats: Vec<ScaleStat>,
    /// Oldest first.
    pub mood_trend: Vec<MoodPoint>,
    pub gratitude_count: usize,
    pub streak_days: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MoodPoint {
    pub date: Date,
    pub mood: u8,
}

/// Summarize one user's activity as of `today` (UTC).
pub fn user_stats(
    records: &[AssessmentRecord],
    moods: &[MoodEntry],
    gratitude: &[GratitudeEntry],
    today: Date,
) -> UserStats {
    UserStats {
        total_assessments: records.len(),
        scale_stats: scale_stats(records),
        mood_trend: mood_trend(moods),
        gratitude_count: gratitude.len(),
        streak_days: streak_days(records, today),
    }
}

/// The latest [`MOOD_TREND_LEN`] moods by date, in ascending date order.
pub fn mood_trend(moods: &[MoodEntry]) -> Vec<MoodPoint> {
    let mut points: Vec<MoodPoint> = moods
        .iter()
        .map(|m| MoodPoint {
            date: m.date,
            mood: m.mood,
        })
        .collect();
    points.sort_by(|a, b| b.date.cmp(&a.date));
    points.truncate(MOOD_TREND_LEN);
    points.reverse();
    points
}

/// Records grouped by scale, most used first.
pub fn scale_stats(records: &[AssessmentRecord]) -> Vec<ScaleStat> {
    let mut groups: BTreeMap<(&str, &str), Vec<&AssessmentRecord>> = BTreeMap::new();
    for record in records {
        groups
            .entry((&record.scale_id, &record.scale_title))
            .or_default()
            .push(record);
    }

    let mut stats: Vec<ScaleStat> = groups
        .into_iter()
        .filter_map(|((scale_id, scale_title), group)| {
            let last_assessment = group.iter().map(|r| r.created_at).max()?;
            let mean = group.iter().map(|r| r.percentage()).sum::<f64>() / group.len() as f64;
            Some(ScaleStat {
                scale_id: scale_id.to_string(),
                scale_title: scale_title.to_string(),
                count: group.len(),
                avg_percentage: (mean * 100.0).round() / 100.0,
                last_assessment,
            })
        })
        .collect();

    // Stable sort keeps the BTreeMap's id order among equal counts.
    stats.sort_by(|a, b| b.count.cmp(&a.count));
    stats
}

/// Consecutive UTC days, ending `today`, with at least one assessment.
pub fn streak_days(records: &[AssessmentRecord], today: Date) -> u32 {
    let days: HashSet<Date> = records
        .iter()
        .map(|r| r.created_at.to_zoned(TimeZone::UTC).date())
        .collect();

    let mut streak = 0;
    let mut day = today;
    while days.contains(&day) {
        streak += 1;
        match day.yesterday() {
            Ok(previous) => day = previous,
            Err(_) => break,
        }
    }
    streak
}
