use chrono::{Days, NaiveDate};

use super::types::{ForecastDay, SowingWindow};

pub const MIN_FORECAST_DAYS: usize = 5;
pub const DRY_LOOKAHEAD_DAYS: usize = 3;
pub const DRY_DAY_RAIN_MM: f64 = 3.0;

const IDEAL_RAIN_POINTS: u32 = 30;
const MARGINAL_RAIN_POINTS: u32 = 15;
const DRY_DAY_POINTS: u32 = 20;
const TEMPERATURE_POINTS: u32 = 15;

#[derive(Debug, Clone, Copy)]
struct CandidateScore {
    index: usize,
    rain_mm: f64,
    dry_days: u32,
    avg_temp: f64,
    score: u32,
}

impl CandidateScore {
    fn reasons(&self) -> Vec<String> {
        let mut reasons = Vec::new();
        if is_ideal_rain(self.rain_mm) {
            reasons.push("light rain for soil moisture".to_string());
        }
        if self.dry_days >= 2 {
            reasons.push(format!("{} dry days following", self.dry_days));
        }
        if is_optimal_temperature(self.avg_temp) {
            reasons.push("optimal temperature".to_string());
        }
        reasons
    }
}

// `reference` plus the forecast length must stay within NaiveDate's range.
pub fn find_best_window(forecast: &[ForecastDay], reference: NaiveDate) -> Option<SowingWindow> {
    if forecast.len() < MIN_FORECAST_DAYS {
        return None;
    }

    let last_candidate = forecast.len() - DRY_LOOKAHEAD_DAYS;
    let mut best = score_candidate(forecast, 0);
    for index in 1..=last_candidate {
        let candidate = score_candidate(forecast, index);
        if candidate.score > best.score {
            best = candidate;
        }
    }

    Some(SowingWindow {
        start_day_label: forecast[best.index].day.clone(),
        start_date: reference + Days::new(best.index as u64),
        days_from_now: best.index as u32,
        pre_rain_mm: best.rain_mm,
        dry_days_following: best.dry_days,
        score: best.score,
        reasons: best.reasons(),
    })
}

fn score_candidate(forecast: &[ForecastDay], index: usize) -> CandidateScore {
    let day = &forecast[index];
    let rain_mm = day.rain_or_zero();
    let lookahead_end = (index + 1 + DRY_LOOKAHEAD_DAYS).min(forecast.len());
    let dry_days = forecast[index + 1..lookahead_end]
        .iter()
        .filter(|next| next.rain_or_zero() < DRY_DAY_RAIN_MM)
        .count() as u32;
    let avg_temp = day.avg_temp();

    let mut score = 0;
    if is_ideal_rain(rain_mm) {
        score += IDEAL_RAIN_POINTS;
    } else if rain_mm > 0.0 && rain_mm < 5.0 {
        score += MARGINAL_RAIN_POINTS;
    }
    score += DRY_DAY_POINTS * dry_days;
    if is_optimal_temperature(avg_temp) {
        score += TEMPERATURE_POINTS;
    }

    CandidateScore {
        index,
        rain_mm,
        dry_days,
        avg_temp,
        score,
    }
}

fn is_ideal_rain(rain_mm: f64) -> bool {
    (5.0..=15.0).contains(&rain_mm)
}

fn is_optimal_temperature(avg_temp: f64) -> bool {
    (20.0..=30.0).contains(&avg_temp)
}
