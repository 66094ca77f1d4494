use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyBand {
    pub month: String,
    pub best: f64,
    pub likely: f64,
    pub worst: f64,
}

impl MonthlyBand {
    pub fn new(month: impl Into<String>, best: f64, likely: f64, worst: f64) -> Self {
        Self {
            month: month.into(),
            best,
            likely,
            worst,
        }
    }
}

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct InterventionSet {
    pub drip: bool,
    pub mulch: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoiResult {
    pub cost: f64,
    pub profit: f64,
    pub savings_fraction: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ForecastDay {
    pub day: String,
    pub rain_mm: Option<f64>,
    pub temp_max: f64,
    pub temp_min: f64,
}

impl ForecastDay {
    pub fn rain_or_zero(&self) -> f64 {
        self.rain_mm.unwrap_or(0.0)
    }

    pub fn avg_temp(&self) -> f64 {
        (self.temp_max + self.temp_min) / 2.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SowingWindow {
    pub start_day_label: String,
    pub start_date: NaiveDate,
    pub days_from_now: u32,
    pub pre_rain_mm: f64,
    pub dry_days_following: u32,
    pub score: u32,
    pub reasons: Vec<String>,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Month {
    Jan,
    Feb,
    Mar,
    Apr,
    May,
    Jun,
    Jul,
    Aug,
    Sep,
    Oct,
    Nov,
    Dec,
}

impl Month {
    pub const ALL: [Month; 12] = [
        Month::Jan,
        Month::Feb,
        Month::Mar,
        Month::Apr,
        Month::May,
        Month::Jun,
        Month::Jul,
        Month::Aug,
        Month::Sep,
        Month::Oct,
        Month::Nov,
        Month::Dec,
    ];

    pub fn from_number(number: u32) -> Option<Month> {
        number
            .checked_sub(1)
            .and_then(|idx| Self::ALL.get(idx as usize).copied())
    }

    pub fn number(self) -> u32 {
        self.index() as u32 + 1
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn label(self) -> &'static str {
        match self {
            Month::Jan => "Jan",
            Month::Feb => "Feb",
            Month::Mar => "Mar",
            Month::Apr => "Apr",
            Month::May => "May",
            Month::Jun => "Jun",
            Month::Jul => "Jul",
            Month::Aug => "Aug",
            Month::Sep => "Sep",
            Month::Oct => "Oct",
            Month::Nov => "Nov",
            Month::Dec => "Dec",
        }
    }

    pub fn offset(self, months: usize) -> Month {
        Self::ALL[(self.index() + months) % 12]
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Deserialize, Serialize)]
pub enum Season {
    Kharif,
    Rabi,
    Zaid,
}

impl Season {
    pub fn for_month(month: Month) -> Season {
        match month.number() {
            6..=10 => Season::Kharif,
            11 | 12 | 1 | 2 => Season::Rabi,
            _ => Season::Zaid,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Season::Kharif => "Kharif",
            Season::Rabi => "Rabi",
            Season::Zaid => "Zaid",
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
pub enum WaterStatus {
    Critical,
    Moderate,
    Safe,
}

impl WaterStatus {
    pub fn classify(available_mm: f64) -> WaterStatus {
        if available_mm < 300.0 {
            WaterStatus::Critical
        } else if available_mm < 600.0 {
            WaterStatus::Moderate
        } else {
            WaterStatus::Safe
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CropRecommendation {
    pub name: String,
    pub score: i32,
    #[serde(rename = "type")]
    pub crop_type: String,
    pub water_req: String,
    pub sunlight: String,
    pub temperature: String,
    pub climate: String,
    pub reasons: Vec<String>,
    pub seed_cost_per_kg: u32,
    pub input_cost_per_acre: u32,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Safe,
    Critical,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CropCheck {
    pub feasible: bool,
    pub verdict: Verdict,
    pub message: String,
    pub needed_mm: f64,
    pub available_mm: f64,
    pub shortfall_mm: f64,
    pub advice: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastSummary {
    pub rain_days: u32,
    pub total_rain_mm: f64,
    pub advice: String,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
pub enum SoilMoistureStatus {
    Dry,
    Optimal,
    Saturated,
}

impl SoilMoistureStatus {
    pub fn classify(moisture_percent: f64) -> SoilMoistureStatus {
        if moisture_percent < 15.0 {
            SoilMoistureStatus::Dry
        } else if moisture_percent < 40.0 {
            SoilMoistureStatus::Optimal
        } else {
            SoilMoistureStatus::Saturated
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            SoilMoistureStatus::Dry => "Dry - Needs Irrigation",
            SoilMoistureStatus::Optimal => "Optimal Moisture",
            SoilMoistureStatus::Saturated => "Saturated / Wet",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationSuggestion {
    pub label: String,
    pub value: String,
    pub name: String,
    pub lat: f64,
    pub lng: f64,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
pub enum SoilClass {
    #[serde(rename = "Black Soil (Heavy)")]
    Heavy,
    #[serde(rename = "Medium Soil")]
    Medium,
    #[serde(rename = "Red/Light Soil")]
    Light,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VoiceAction {
    Calculate,
    Reset,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct VoiceCommand {
    pub soil: Option<SoilClass>,
    pub crop: Option<String>,
    pub location: Option<String>,
    pub action: Option<VoiceAction>,
}
