use super::types::{ForecastDay, ForecastSummary};

pub const RAIN_DAY_THRESHOLD_MM: f64 = 5.0;

pub fn summarize_rain(days: &[ForecastDay]) -> (u32, f64) {
    days.iter().fold((0, 0.0), |(rain_days, total), day| {
        let rain = day.rain_or_zero();
        let rain_days = if rain > RAIN_DAY_THRESHOLD_MM {
            rain_days + 1
        } else {
            rain_days
        };
        (rain_days, total + rain)
    })
}

pub fn summarize_forecast(days: &[ForecastDay]) -> ForecastSummary {
    let (rain_days, total_rain) = summarize_rain(days);
    let advice = if rain_days >= 3 {
        "Heavy rain expected. Delay sowing water-sensitive crops."
    } else if rain_days >= 1 {
        "Some rain expected. Good time for transplanting."
    } else if total_rain < 10.0 {
        "Dry week ahead. Plan irrigation for water-hungry crops."
    } else {
        "Mixed conditions. Monitor daily."
    };
    summary(rain_days, total_rain, advice)
}

// The water-balance report looks at the weekly total before counting rain days.
pub fn summarize_balance_forecast(days: &[ForecastDay]) -> ForecastSummary {
    let (rain_days, total_rain) = summarize_rain(days);
    let advice = if total_rain < 10.0 {
        "Dry week ahead. Plan irrigation."
    } else if rain_days >= 3 {
        "Heavy rain expected. Delay sowing."
    } else if rain_days >= 1 {
        "Some rain expected. Good for transplanting."
    } else {
        "Mixed conditions. Monitor daily."
    };
    summary(rain_days, total_rain, advice)
}

fn summary(rain_days: u32, total_rain: f64, advice: &str) -> ForecastSummary {
    ForecastSummary {
        rain_days,
        total_rain_mm: (total_rain * 10.0).round() / 10.0,
        advice: advice.to_string(),
    }
}
