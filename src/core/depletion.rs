use super::types::{Month, MonthlyBand};

pub const DEFAULT_CROP_WATER_MM: f64 = 500.0;
pub const ACTIVE_SEASON_MONTHS: f64 = 5.0;
pub const SIMULATION_MONTHS: usize = 6;

pub const BASE_GROUNDWATER_MM: f64 = 500.0;
pub const EVAPORATION_LOSS_MM: f64 = 150.0;

const WORST_USAGE_FACTOR: f64 = 1.2;
const BEST_USAGE_FACTOR: f64 = 0.9;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RainfallPercentiles {
    pub worst: f64,
    pub likely: f64,
    pub best: f64,
}

const fn percentiles(worst: f64, likely: f64, best: f64) -> RainfallPercentiles {
    RainfallPercentiles {
        worst,
        likely,
        best,
    }
}

// 20th/50th/80th percentile monthly rainfall in mm, January first.
pub const MONTHLY_RAINFALL: [RainfallPercentiles; 12] = [
    percentiles(0.0, 0.0, 5.0),
    percentiles(0.0, 0.0, 5.0),
    percentiles(0.0, 5.0, 10.0),
    percentiles(0.0, 10.0, 20.0),
    percentiles(10.0, 25.0, 40.0),
    percentiles(80.0, 150.0, 220.0),
    percentiles(150.0, 250.0, 350.0),
    percentiles(120.0, 200.0, 300.0),
    percentiles(50.0, 120.0, 180.0),
    percentiles(10.0, 40.0, 80.0),
    percentiles(0.0, 10.0, 30.0),
    percentiles(0.0, 0.0, 10.0),
];

pub fn simulate_depletion(
    crop_water_mm: Option<f64>,
    water_balance_mm: f64,
    start: Month,
) -> Vec<MonthlyBand> {
    let monthly_usage = crop_water_mm.unwrap_or(DEFAULT_CROP_WATER_MM) / ACTIVE_SEASON_MONTHS;

    let mut worst = water_balance_mm;
    let mut likely = water_balance_mm;
    let mut best = water_balance_mm;

    (0..SIMULATION_MONTHS)
        .map(|offset| {
            let month = start.offset(offset);
            let rain = MONTHLY_RAINFALL[month.index()];

            worst += rain.worst - monthly_usage * WORST_USAGE_FACTOR;
            likely += rain.likely - monthly_usage;
            best += rain.best - monthly_usage * BEST_USAGE_FACTOR;

            MonthlyBand::new(
                month.label(),
                reported_level(best),
                reported_level(likely),
                reported_level(worst),
            )
        })
        .collect()
}

fn reported_level(balance: f64) -> f64 {
    let whole = balance.trunc();
    if whole > 0.0 { whole } else { 0.0 }
}

pub fn water_balance(rain_30d_mm: f64) -> f64 {
    (BASE_GROUNDWATER_MM + rain_30d_mm - EVAPORATION_LOSS_MM).max(0.0)
}

pub fn soil_advice(soil_type: Option<&str>) -> &'static str {
    let Some(soil) = soil_type else {
        return "Standard irrigation.";
    };
    let soil = soil.to_lowercase();
    if soil.contains("black") || soil.contains("clay") {
        "Retains water well. Delay irrigation."
    } else if soil.contains("sandy") || soil.contains("light") {
        "Drains fast. Frequent light irrigation."
    } else {
        "Standard irrigation."
    }
}
