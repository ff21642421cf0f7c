use jiff::civil::date;
use mindbalance_core::models::gratitude::{GratitudeEntry, NewGratitude};
use mindbalance_core::models::mood::{MoodEntry, NewMood};
use mindbalance_core::models::record::{AssessmentRecord, NewRecord};
use mindbalance_core::stats::{
    MOOD_TREND_LEN, mood_trend, scale_stats, streak_days, user_stats,
};

fn record(scale: &str, total: u32, max: u32, at: &str) -> AssessmentRecord {
    NewRecord {
        scale_id: scale.to_string(),
        scale_title: format!("{scale} title"),
        total,
        max,
        label: String::new(),
        values: Vec::new(),
    }
    .into_record("ana", at.parse().unwrap())
}

#[test]
fn groups_by_scale_with_rounded_average() {
    let records = vec![
        record("phq9", 9, 27, "2026-03-01T08:00:00Z"),
        record("phq9", 10, 27, "2026-03-03T08:00:00Z"),
        record("phq9", 0, 27, "2026-03-02T08:00:00Z"),
        record("who5", 25, 25, "2026-03-01T09:00:00Z"),
    ];

    let stats = scale_stats(&records);
    assert_eq!(stats.len(), 2);

    let phq9 = &stats[0];
    assert_eq!(phq9.scale_id, "phq9");
    assert_eq!(phq9.count, 3);
    // (33.33.. + 37.03.. + 0) / 3
    assert_eq!(phq9.avg_percentage, 23.46);
    assert_eq!(
        phq9.last_assessment,
        "2026-03-03T08:00:00Z".parse::<jiff::Timestamp>().unwrap()
    );

    assert_eq!(stats[1].scale_id, "who5");
    assert_eq!(stats[1].avg_percentage, 100.0);
}

#[test]
fn zero_max_counts_as_zero_percent() {
    let stats = scale_stats(&[record("odd", 3, 0, "2026-03-01T08:00:00Z")]);
    assert_eq!(stats[0].avg_percentage, 0.0);
}

#[test]
fn streak_counts_back_from_today() {
    let records = vec![
        record("phq9", 1, 27, "2026-03-10T23:30:00Z"),
        record("gad7", 1, 21, "2026-03-09T01:00:00Z"),
        record("gad7", 1, 21, "2026-03-09T05:00:00Z"),
        record("phq9", 1, 27, "2026-03-08T12:00:00Z"),
        record("phq9", 1, 27, "2026-03-06T12:00:00Z"),
    ];

    assert_eq!(streak_days(&records, date(2026, 3, 10)), 3);
    assert_eq!(streak_days(&records, date(2026, 3, 11)), 0);
    assert_eq!(streak_days(&records, date(2026, 3, 6)), 1);
}

#[test]
fn user_stats_totals() {
    let records = vec![
        record("phq9", 1, 27, "2026-03-10T08:00:00Z"),
        record("gad7", 1, 21, "2026-03-10T09:00:00Z"),
    ];
    let stats = user_stats(&records, &[], &[], date(2026, 3, 10));
    assert_eq!(stats.total_assessments, 2);
    assert_eq!(stats.scale_stats.len(), 2);
    assert_eq!(stats.streak_days, 1);
}

#[test]
fn empty_history() {
    let stats = user_stats(&[], &[], &[], date(2026, 3, 10));
    assert_eq!(stats.total_assessments, 0);
    assert!(stats.scale_stats.is_empty());
    assert!(stats.mood_trend.is_empty());
    assert_eq!(stats.gratitude_count, 0);
    assert_eq!(stats.streak_days, 0);
}

fn mood_on(day: jiff::civil::Date, mood: u8) -> MoodEntry {
    NewMood {
        mood,
        note: None,
        tags: Vec::new(),
        date: Some(day),
    }
    .into_entry("ana", day)
    .unwrap()
}

fn thanks(content: &str) -> GratitudeEntry {
    NewGratitude {
        content: content.to_string(),
        mood: None,
    }
    .into_entry("ana", "2026-03-10T08:00:00Z".parse().unwrap())
    .unwrap()
}

#[test]
fn mood_trend_keeps_latest_entries_oldest_first() {
    let start = date(2026, 1, 1);
    let moods: Vec<MoodEntry> = (0..40)
        .map(|i| {
            let day = start.checked_add(jiff::Span::new().days(i)).unwrap();
            mood_on(day, (i % 5) as u8 + 1)
        })
        .rev()
        .collect();

    let trend = mood_trend(&moods);
    assert_eq!(trend.len(), MOOD_TREND_LEN);
    assert_eq!(trend[0].date, date(2026, 1, 11));
    assert_eq!(trend.last().unwrap().date, date(2026, 2, 9));
    assert!(trend.windows(2).all(|w| w[0].date < w[1].date));
}

#[test]
fn user_stats_include_moods_and_journal() {
    let moods = vec![mood_on(date(2026, 3, 9), 2), mood_on(date(2026, 3, 10), 4)];
    let gratitude = vec![thanks("sunshine"), thanks("a good talk")];

    let stats = user_stats(&[], &moods, &gratitude, date(2026, 3, 10));
    assert_eq!(stats.gratitude_count, 2);
    assert_eq!(
        stats.mood_trend.iter().map(|p| p.mood).collect::<Vec<_>>(),
        vec![2, 4]
    );
}

#[test]
fn counts_are_full_width_lengths() {
    let records: Vec<AssessmentRecord> = (0..3)
        .map(|_| record("gad7", 5, 21, "2026-03-01T08:00:00Z"))
        .collect();
    let stats = user_stats(&records, &[], &[], date(2026, 3, 1));

    let total: usize = stats.total_assessments;
    let per_scale: usize = stats.scale_stats[0].count;
    assert_eq!(total, records.len());
    assert_eq!(per_scale, records.len());
}
