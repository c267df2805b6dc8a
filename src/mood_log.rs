use crate::errors::{FormError, TransitionError};
use crate::models::{Activity, MoodEntry, MoodForm};
use chrono::NaiveDate;

pub const SCALE_MIN: u8 = 1;
pub const SCALE_MAX: u8 = 10;

/// A parsed mood form, waiting for a date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoodDraft {
    pub mood: u8,
    pub energy: u8,
    pub activity: Activity,
    pub sleep: u8,
    pub notes: Option<String>,
}

impl MoodDraft {
    pub fn into_entry(self, date: NaiveDate) -> MoodEntry {
        MoodEntry {
            date,
            mood: self.mood,
            energy: self.energy,
            activity: self.activity,
            sleep: self.sleep,
            notes: self.notes,
        }
    }
}

impl MoodForm {
    pub fn parse(&self) -> Result<MoodDraft, FormError> {
        let mood = parse_scale(&self.mood, "mood")?;
        let energy = parse_scale(&self.energy, "energy")?;
        let activity = self.activity.trim();
        if activity.is_empty() {
            return Err(FormError::Missing("activity"));
        }
        let activity = activity
            .parse::<Activity>()
            .map_err(|_| FormError::UnknownActivity(activity.to_string()))?;
        let sleep = parse_scale(&self.sleep, "sleep")?;
        let notes = Some(self.notes.trim())
            .filter(|notes| !notes.is_empty())
            .map(str::to_string);

        Ok(MoodDraft {
            mood,
            energy,
            activity,
            sleep,
            notes,
        })
    }

    pub fn clear(&mut self) {
        *self = MoodForm::default();
    }
}

fn parse_scale(value: &str, field: &'static str) -> Result<u8, FormError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(FormError::Missing(field));
    }
    match value.parse::<u8>() {
        Ok(n) if (SCALE_MIN..=SCALE_MAX).contains(&n) => Ok(n),
        _ => Err(FormError::OutOfRange(field)),
    }
}

/// The week of demo entries every fresh store starts with.
pub fn sample_entries() -> Vec<MoodEntry> {
    const SAMPLE: [(u32, u8, u8, Activity, u8); 7] = [
        (15, 8, 7, Activity::Exercise, 8),
        (16, 6, 5, Activity::Work, 6),
        (17, 9, 8, Activity::Social, 7),
        (18, 7, 6, Activity::Reading, 8),
        (19, 5, 4, Activity::Rest, 5),
        (20, 8, 7, Activity::Creative, 7),
        (21, 9, 9, Activity::Exercise, 8),
    ];

    SAMPLE
        .iter()
        .filter_map(|&(day, mood, energy, activity, sleep)| {
            Some(MoodEntry {
                date: NaiveDate::from_ymd_opt(2024, 1, day)?,
                mood,
                energy,
                activity,
                sleep,
                notes: None,
            })
        })
        .collect()
}

/// Append-only log of mood entries with a single in-flight submission slot.
#[derive(Debug, Clone, Default)]
pub struct MoodLog {
    entries: Vec<MoodEntry>,
    pending: bool,
}

impl MoodLog {
    pub fn seeded() -> Self {
        Self::from_entries(sample_entries())
    }

    pub fn from_entries(entries: Vec<MoodEntry>) -> Self {
        Self {
            entries,
            pending: false,
        }
    }

    pub fn entries(&self) -> &[MoodEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    pub fn begin_submit(&mut self) -> Result<(), TransitionError> {
        if self.pending {
            return Err(TransitionError::SubmitPending);
        }
        self.pending = true;
        Ok(())
    }

    pub fn complete_submit(&mut self, entry: MoodEntry) -> Result<&MoodEntry, TransitionError> {
        if !self.pending {
            return Err(TransitionError::NoSubmitPending);
        }
        self.pending = false;
        self.entries.push(entry);
        self.entries.last().ok_or(TransitionError::NoSubmitPending)
    }

    pub fn abort_submit(&mut self) {
        self.pending = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(mood: &str, energy: &str, activity: &str, sleep: &str, notes: &str) -> MoodForm {
        MoodForm {
            mood: mood.into(),
            energy: energy.into(),
            activity: activity.into(),
            sleep: sleep.into(),
            notes: notes.into(),
        }
    }

    #[test]
    fn seed_covers_one_week() {
        let log = MoodLog::seeded();
        assert_eq!(log.len(), 7);
        assert_eq!(
            log.entries()[0].date,
            NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
        );
        assert_eq!(
            log.entries()[6].date,
            NaiveDate::from_ymd_opt(2024, 1, 21).unwrap()
        );
    }

    #[test]
    fn parse_accepts_selected_values() {
        let draft = form("9", "8", "Exercise", "9", "").parse().unwrap();
        assert_eq!(draft.mood, 9);
        assert_eq!(draft.energy, 8);
        assert_eq!(draft.activity, Activity::Exercise);
        assert_eq!(draft.sleep, 9);
        assert_eq!(draft.notes, None);

        let draft = form("1", "10", "reading", "5", " long day ").parse().unwrap();
        assert_eq!(draft.activity, Activity::Reading);
        assert_eq!(draft.notes.as_deref(), Some("long day"));
    }

    #[test]
    fn parse_rejects_unselected_or_out_of_range_values() {
        assert_eq!(
            form("", "8", "Work", "9", "").parse(),
            Err(FormError::Missing("mood"))
        );
        assert_eq!(
            form("11", "8", "Work", "9", "").parse(),
            Err(FormError::OutOfRange("mood"))
        );
        assert_eq!(
            form("5", "0", "Work", "9", "").parse(),
            Err(FormError::OutOfRange("energy"))
        );
        assert_eq!(
            form("5", "5", "Gardening", "9", "").parse(),
            Err(FormError::UnknownActivity("Gardening".into()))
        );
        assert_eq!(
            form("5", "5", "Work", "x", "").parse(),
            Err(FormError::OutOfRange("sleep"))
        );
    }

    #[test]
    fn submit_appends_exactly_one_entry() {
        let mut log = MoodLog::seeded();
        let today = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();
        let draft = form("9", "8", "Exercise", "9", "").parse().unwrap();

        log.begin_submit().unwrap();
        assert!(log.is_pending());
        let entry = log.complete_submit(draft.into_entry(today)).unwrap().clone();

        assert_eq!(log.len(), 8);
        assert!(!log.is_pending());
        assert_eq!(entry.mood, 9);
        assert_eq!(entry.date, today);
        assert_eq!(log.entries().last(), Some(&entry));
    }

    #[test]
    fn double_submit_is_rejected() {
        let mut log = MoodLog::default();
        log.begin_submit().unwrap();
        assert_eq!(log.begin_submit(), Err(TransitionError::SubmitPending));
        log.abort_submit();
        assert!(log.begin_submit().is_ok());
    }

    #[test]
    fn complete_without_begin_is_rejected() {
        let mut log = MoodLog::default();
        let entry = form("5", "5", "Rest", "5", "")
            .parse()
            .unwrap()
            .into_entry(NaiveDate::from_ymd_opt(2026, 1, 1).unwrap());
        assert_eq!(
            log.complete_submit(entry).unwrap_err(),
            TransitionError::NoSubmitPending
        );
        assert!(log.is_empty());
    }
}
