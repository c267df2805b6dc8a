use crate::models::{
    Activity, ActivityCount, AnalyticsResponse, DashboardResponse, MoodEntry, RecentEntry,
    SeriesPoint,
};
use chrono::{Datelike, Weekday};

pub const RECENT_COUNT: usize = 5;
pub const TRACKED_ACTIVITIES: [Activity; 4] = [
    Activity::Work,
    Activity::Exercise,
    Activity::Social,
    Activity::Rest,
];

const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];
const WEEKS_PER_MONTH: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Averages {
    pub mood: Option<f64>,
    pub energy: Option<f64>,
    pub sleep: Option<f64>,
    pub count: usize,
}

pub fn build_dashboard(entries: &[MoodEntry]) -> DashboardResponse {
    let averages = averages(entries);
    DashboardResponse {
        average_mood: averages.mood,
        average_energy: averages.energy,
        average_sleep: averages.sleep,
        entry_count: averages.count,
        recent: recent_entries(entries, RECENT_COUNT),
    }
}

pub fn build_analytics(entries: &[MoodEntry]) -> AnalyticsResponse {
    AnalyticsResponse {
        weekly: weekly_series(entries),
        monthly: monthly_series(entries),
        activity_breakdown: activity_breakdown(entries),
    }
}

pub fn averages(entries: &[MoodEntry]) -> Averages {
    Averages {
        mood: mean_of(entries, |entry| entry.mood),
        energy: mean_of(entries, |entry| entry.energy),
        sleep: mean_of(entries, |entry| entry.sleep),
        count: entries.len(),
    }
}

fn mean_of(entries: &[MoodEntry], field: impl Fn(&MoodEntry) -> u8) -> Option<f64> {
    if entries.is_empty() {
        return None;
    }
    let sum: u64 = entries.iter().map(|entry| u64::from(field(entry))).sum();
    Some(sum as f64 / entries.len() as f64)
}

/// The last `limit` entries, newest first.
pub fn recent_entries(entries: &[MoodEntry], limit: usize) -> Vec<RecentEntry> {
    entries
        .iter()
        .rev()
        .take(limit)
        .map(|entry| RecentEntry {
            date: entry.date,
            mood: entry.mood,
            activity: entry.activity,
            emoji: mood_emoji(entry.mood).to_string(),
        })
        .collect()
}

pub fn mood_emoji(mood: u8) -> &'static str {
    match mood {
        8..=u8::MAX => "\u{1F60A}",
        6..=7 => "\u{1F610}",
        4..=5 => "\u{1F614}",
        _ => "\u{1F622}",
    }
}

/// Mean mood and energy per day of week, Monday first.
pub fn weekly_series(entries: &[MoodEntry]) -> Vec<SeriesPoint> {
    let mut buckets = [Bucket::default(); 7];
    for entry in entries {
        buckets[entry.date.weekday().num_days_from_monday() as usize].add(entry);
    }

    WEEKDAYS
        .iter()
        .zip(buckets)
        .map(|(day, bucket)| bucket.point(day.to_string()))
        .collect()
}

/// Mean mood and energy per week of month. Days from the 22nd on count toward week 4.
pub fn monthly_series(entries: &[MoodEntry]) -> Vec<SeriesPoint> {
    let mut buckets = [Bucket::default(); WEEKS_PER_MONTH];
    for entry in entries {
        let week = ((entry.date.day0() / 7) as usize).min(WEEKS_PER_MONTH - 1);
        buckets[week].add(entry);
    }

    buckets
        .into_iter()
        .enumerate()
        .map(|(index, bucket)| bucket.point(format!("Week {}", index + 1)))
        .collect()
}

/// Entry counts for the tracked activities only.
pub fn activity_breakdown(entries: &[MoodEntry]) -> Vec<ActivityCount> {
    TRACKED_ACTIVITIES
        .iter()
        .map(|&activity| ActivityCount {
            activity,
            count: entries
                .iter()
                .filter(|entry| entry.activity == activity)
                .count(),
        })
        .collect()
}

#[derive(Debug, Clone, Copy, Default)]
struct Bucket {
    mood: u64,
    energy: u64,
    count: usize,
}

impl Bucket {
    fn add(&mut self, entry: &MoodEntry) {
        self.mood = self.mood.saturating_add(u64::from(entry.mood));
        self.energy = self.energy.saturating_add(u64::from(entry.energy));
        self.count += 1;
    }

    fn point(self, label: String) -> SeriesPoint {
        let mean = |sum: u64| (self.count > 0).then(|| sum as f64 / self.count as f64);
        SeriesPoint {
            label,
            mood: mean(self.mood),
            energy: mean(self.energy),
            entries: self.count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mood_log::sample_entries;
    use chrono::NaiveDate;

    fn entry(date: NaiveDate, mood: u8, activity: Activity) -> MoodEntry {
        MoodEntry {
            date,
            mood,
            energy: mood,
            activity,
            sleep: mood,
            notes: None,
        }
    }

    fn approx(value: Option<f64>, expected: f64) -> bool {
        value.is_some_and(|v| (v - expected).abs() < 1e-9)
    }

    #[test]
    fn averages_over_seed() {
        let averages = averages(&sample_entries());
        assert_eq!(averages.count, 7);
        assert!(approx(averages.mood, 52.0 / 7.0));
        assert!(approx(averages.energy, 46.0 / 7.0));
        assert!(approx(averages.sleep, 7.0));
    }

    #[test]
    fn averages_of_empty_store_are_absent() {
        assert_eq!(averages(&[]), Averages::default());
    }

    #[test]
    fn recent_entries_are_newest_first() {
        let base = NaiveDate::from_ymd_opt(2026, 2, 1).unwrap();
        let entries: Vec<MoodEntry> = (1..=8)
            .map(|n| entry(base + chrono::Duration::days(n), n as u8, Activity::Other))
            .collect();

        let moods: Vec<u8> = recent_entries(&entries, RECENT_COUNT)
            .iter()
            .map(|recent| recent.mood)
            .collect();
        assert_eq!(moods, vec![8, 7, 6, 5, 4]);
    }

    #[test]
    fn recent_entries_of_short_store() {
        let recent = recent_entries(&sample_entries()[..2], RECENT_COUNT);
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].mood, 6);
    }

    #[test]
    fn emoji_thresholds() {
        assert_eq!(mood_emoji(10), "\u{1F60A}");
        assert_eq!(mood_emoji(8), "\u{1F60A}");
        assert_eq!(mood_emoji(7), "\u{1F610}");
        assert_eq!(mood_emoji(4), "\u{1F614}");
        assert_eq!(mood_emoji(3), "\u{1F622}");
    }

    #[test]
    fn weekly_series_buckets_by_weekday() {
        // 2024-01-15 is a Monday, so the seed fills each day once.
        let series = weekly_series(&sample_entries());
        let labels: Vec<&str> = series.iter().map(|p| p.label.as_str()).collect();
        assert_eq!(labels, vec!["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"]);
        assert!(approx(series[0].mood, 8.0));
        assert!(approx(series[4].energy, 4.0));
        assert!(approx(series[6].mood, 9.0));
        assert!(series.iter().all(|p| p.entries == 1));
    }

    #[test]
    fn weekly_series_averages_same_weekday() {
        let monday = NaiveDate::from_ymd_opt(2026, 1, 5).unwrap();
        let entries = vec![
            entry(monday, 4, Activity::Work),
            entry(monday + chrono::Duration::weeks(1), 8, Activity::Work),
        ];
        let series = weekly_series(&entries);
        assert!(approx(series[0].mood, 6.0));
        assert_eq!(series[1].mood, None);
    }

    #[test]
    fn monthly_series_folds_late_days_into_week_four() {
        let entries = vec![
            entry(NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(), 2, Activity::Rest),
            entry(NaiveDate::from_ymd_opt(2026, 1, 8).unwrap(), 4, Activity::Rest),
            entry(NaiveDate::from_ymd_opt(2026, 1, 22).unwrap(), 6, Activity::Rest),
            entry(NaiveDate::from_ymd_opt(2026, 1, 31).unwrap(), 10, Activity::Rest),
        ];
        let series = monthly_series(&entries);
        assert_eq!(series.len(), 4);
        assert_eq!(series[3].label, "Week 4");
        assert!(approx(series[0].mood, 2.0));
        assert!(approx(series[1].mood, 4.0));
        assert_eq!(series[2].mood, None);
        assert!(approx(series[3].mood, 8.0));
    }

    #[test]
    fn breakdown_counts_only_tracked_activities() {
        let entries = sample_entries();
        let breakdown = activity_breakdown(&entries);
        let counts: Vec<(Activity, usize)> =
            breakdown.iter().map(|c| (c.activity, c.count)).collect();
        assert_eq!(
            counts,
            vec![
                (Activity::Work, 1),
                (Activity::Exercise, 2),
                (Activity::Social, 1),
                (Activity::Rest, 1),
            ]
        );

        let total: usize = breakdown.iter().map(|c| c.count).sum();
        let tracked = entries
            .iter()
            .filter(|e| TRACKED_ACTIVITIES.contains(&e.activity))
            .count();
        assert_eq!(total, tracked);
        assert!(total < entries.len());
    }

    #[test]
    fn dashboard_reflects_store() {
        let dashboard = build_dashboard(&sample_entries());
        assert_eq!(dashboard.entry_count, 7);
        assert_eq!(dashboard.recent.len(), RECENT_COUNT);
        assert_eq!(dashboard.recent[0].date.to_string(), "2024-01-21");
    }
}
