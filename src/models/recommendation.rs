use super::lunar::LunarPhase;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The six daily field activities, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Activity {
    Plant,
    Water,
    Prune,
    Harvest,
    Fertilize,
    Weed,
}

impl Activity {
    pub const ALL: [Activity; 6] = [
        Activity::Plant,
        Activity::Water,
        Activity::Prune,
        Activity::Harvest,
        Activity::Fertilize,
        Activity::Weed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Activity::Plant => "Sembrar",
            Activity::Water => "Regar",
            Activity::Prune => "Podar",
            Activity::Harvest => "Cosechar",
            Activity::Fertilize => "Abonar",
            Activity::Weed => "Desherbar",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Activity::Plant => "🌱",
            Activity::Water => "💧",
            Activity::Prune => "✂",
            Activity::Harvest => "🧺",
            Activity::Fertilize => "💩",
            Activity::Weed => "🌿",
        }
    }

    pub fn color(&self) -> ratatui::style::Color {
        use ratatui::style::Color;
        match self {
            Activity::Plant => Color::Green,
            Activity::Water => Color::Blue,
            Activity::Prune => Color::Magenta,
            Activity::Harvest => Color::Yellow,
            Activity::Fertilize => Color::LightRed,
            Activity::Weed => Color::Cyan,
        }
    }
}

impl std::fmt::Display for Activity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Verdict for one activity on one day. Recomputed per day, never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityRecommendation {
    pub activity: Activity,
    pub is_recommended: bool,
    pub reason: String,
}

/// Suitability of one catalog crop on one day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CropRecommendation {
    pub crop_id: String,
    pub crop_name: String,
    pub is_recommended: bool,
    /// 0-100
    pub recommendation_level: u8,
    pub reason: String,
}

/// The full recommendation bundle for one calendar day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyRecommendation {
    pub date: NaiveDate,
    pub lunar_phase: LunarPhase,
    pub weather_condition: String,
    pub temperature_c: f64,
    pub humidity: f64,
    pub precipitation_mm: f64,
    /// Always 6 entries: plant, water, prune, harvest, fertilize, weed
    pub activities: Vec<ActivityRecommendation>,
    /// One entry per catalog crop, sorted descending by level
    pub crops: Vec<CropRecommendation>,
}

impl DailyRecommendation {
    pub fn top_crops(&self, count: usize) -> &[CropRecommendation] {
        &self.crops[..self.crops.len().min(count)]
    }
}
