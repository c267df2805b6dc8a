use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Activity {
    Work,
    Exercise,
    Social,
    Rest,
    Creative,
    Reading,
    Other,
}

impl Activity {
    pub const ALL: [Activity; 7] = [
        Activity::Work,
        Activity::Exercise,
        Activity::Social,
        Activity::Rest,
        Activity::Creative,
        Activity::Reading,
        Activity::Other,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Activity::Work => "Work",
            Activity::Exercise => "Exercise",
            Activity::Social => "Social",
            Activity::Rest => "Rest",
            Activity::Creative => "Creative",
            Activity::Reading => "Reading",
            Activity::Other => "Other",
        }
    }
}

impl fmt::Display for Activity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Activity {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Activity::ALL
            .into_iter()
            .find(|activity| activity.as_str().eq_ignore_ascii_case(value.trim()))
            .ok_or(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodEntry {
    pub date: NaiveDate,
    pub mood: u8,
    pub energy: u8,
    pub activity: Activity,
    pub sleep: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

/// Top-level navigation of the signed-in view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Tab {
    #[default]
    Dashboard,
    LogMood,
    Analytics,
    Quotes,
    Chat,
}

/// Raw login/register form input.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthForm {
    pub email: String,
    pub password: String,
    pub name: String,
}

/// Raw mood form input, held as the string values the form selects produce.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MoodForm {
    pub mood: String,
    pub energy: String,
    pub activity: String,
    pub sleep: String,
    pub notes: String,
}

#[derive(Debug, Deserialize)]
pub struct TabRequest {
    pub tab: Tab,
}

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    LoggedOut,
    Authenticating,
    LoggedIn,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SessionResponse {
    pub status: SessionStatus,
    pub user: Option<UserProfile>,
    pub active_tab: Tab,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MoodsResponse {
    pub entries: Vec<MoodEntry>,
    pub form: MoodForm,
    pub pending: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatResponse {
    pub messages: Vec<ChatMessage>,
    pub awaiting_reply: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct QuoteResponse {
    pub quote: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecentEntry {
    pub date: NaiveDate,
    pub mood: u8,
    pub activity: Activity,
    pub emoji: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DashboardResponse {
    pub average_mood: Option<f64>,
    pub average_energy: Option<f64>,
    pub average_sleep: Option<f64>,
    pub entry_count: usize,
    pub recent: Vec<RecentEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub label: String,
    pub mood: Option<f64>,
    pub energy: Option<f64>,
    pub entries: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityCount {
    pub activity: Activity,
    pub count: usize,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AnalyticsResponse {
    pub weekly: Vec<SeriesPoint>,
    pub monthly: Vec<SeriesPoint>,
    pub activity_breakdown: Vec<ActivityCount>,
}
