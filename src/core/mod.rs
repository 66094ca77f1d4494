mod advisory;
mod crops;
mod depletion;
mod locations;
mod market;
mod scenario;
mod sowing;
mod types;
mod voice;

pub use advisory::{summarize_balance_forecast, summarize_forecast, summarize_rain};
pub use crops::{
    CROPS, Crop, CropCheckInput, InputCosts, SOILS, SoilProfile, SoilTexture, check_crop,
    crop_water_need, find_crop, recommend_crops,
};
pub use depletion::{simulate_depletion, soil_advice, water_balance};
pub use locations::suggest;
pub use market::{MarketQuote, PriceTrend, market_prices, normalize_commodity};
pub use scenario::{Intervention, adjust_scenarios, compute_roi, seasonal_multiplier};
pub use sowing::find_best_window;
pub use types::{
    CropCheck, CropRecommendation, ForecastDay, ForecastSummary, InterventionSet,
    LocationSuggestion, Month, MonthlyBand, RoiResult, Season, SoilClass, SoilMoistureStatus,
    SowingWindow, Verdict, VoiceAction, VoiceCommand, WaterStatus,
};
pub use voice::parse_voice_command;
