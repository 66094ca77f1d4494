use serde::Serialize;

use super::advisory::summarize_rain;
use super::depletion::DEFAULT_CROP_WATER_MM;
use super::types::{
    CropCheck, CropRecommendation, ForecastDay, Month, Season, Verdict, WaterStatus,
};

pub const MAX_RECOMMENDATIONS: usize = 5;
pub const MIN_RECOMMENDATION_SCORE: i32 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Crop {
    pub name: &'static str,
    pub water_mm: u32,
    pub season: &'static str,
    #[serde(rename = "type")]
    pub crop_type: &'static str,
    pub soil: &'static [&'static str],
    pub sunlight: &'static str,
    pub temperature: &'static str,
    pub climate: &'static str,
}

impl Crop {
    pub fn grows_in(&self, season: Season) -> bool {
        self.season == "Annual" || self.season.split('/').any(|s| s == season.as_str())
    }

    pub fn costs(&self) -> InputCosts {
        SEED_COSTS
            .iter()
            .find(|(name, _)| *name == self.name)
            .map(|(_, costs)| *costs)
            .unwrap_or(FALLBACK_COSTS)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputCosts {
    pub seed_per_kg: u32,
    pub input_per_acre: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SoilTexture {
    Heavy,
    Medium,
    Light,
}

impl SoilTexture {
    pub fn classify(soil_type: &str) -> SoilTexture {
        let soil = soil_type.to_lowercase();
        if ["black", "clay", "heavy"].iter().any(|k| soil.contains(k)) {
            SoilTexture::Heavy
        } else if ["red", "light", "sandy"].iter().any(|k| soil.contains(k)) {
            SoilTexture::Light
        } else {
            SoilTexture::Medium
        }
    }

    fn accepts(self, crop_soil: &str) -> bool {
        match self {
            SoilTexture::Heavy => ["Clay", "Black", "Heavy"].contains(&crop_soil),
            SoilTexture::Light => ["Sandy", "Light", "Red"].contains(&crop_soil),
            SoilTexture::Medium => false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SoilProfile {
    pub name: &'static str,
    #[serde(rename = "type")]
    pub texture: SoilTexture,
    pub retention: &'static str,
    pub desc: &'static str,
}

const fn crop(
    name: &'static str,
    water_mm: u32,
    season: &'static str,
    crop_type: &'static str,
    soil: &'static [&'static str],
    sunlight: &'static str,
    temperature: &'static str,
    climate: &'static str,
) -> Crop {
    Crop {
        name,
        water_mm,
        season,
        crop_type,
        soil,
        sunlight,
        temperature,
        climate,
    }
}

pub const CROPS: &[Crop] = &[
    crop("Rice (Paddy)", 1200, "Kharif", "Cereal", &["Clay", "Heavy"], "Full Sun", "20-35°C", "Humid & Tropical"),
    crop("Wheat", 450, "Rabi", "Cereal", &["Medium", "Heavy"], "Full Sun", "10-25°C", "Cool & Dry"),
    crop("Jowar (Sorghum)", 400, "Kharif/Rabi", "Millet", &["Medium", "Light", "Black"], "Full Sun", "25-35°C", "Hot & Dry"),
    crop("Bajra (Pearl Millet)", 350, "Kharif", "Millet", &["Light", "Sandy"], "Full Sun", "25-35°C", "Hot & Arid"),
    crop("Maize (Corn)", 500, "Kharif/Rabi", "Cereal", &["Medium", "Red"], "Full Sun", "18-27°C", "Warm"),
    crop("Ragi (Finger Millet)", 350, "Kharif", "Millet", &["Red", "Light"], "Full Sun", "20-30°C", "Tropical/Subtropical"),
    crop("Tur (Arhar/Pigeon Pea)", 500, "Kharif", "Pulse", &["Medium", "Black"], "Full Sun", "25-30°C", "Semi-Arid"),
    crop("Gram (Chana/Chickpea)", 300, "Rabi", "Pulse", &["Medium", "Black"], "Full Sun", "15-25°C", "Cool & Dry"),
    crop("Moong (Green Gram)", 300, "Kharif/Zaid", "Pulse", &["Medium"], "Full Sun", "25-35°C", "Warm"),
    crop("Urad (Black Gram)", 350, "Kharif", "Pulse", &["Medium", "Heavy"], "Full Sun", "25-35°C", "Warm & Humid"),
    crop("Sugarcane", 1800, "Annual", "Cash Crop", &["Heavy", "Black"], "Full Sun", "20-35°C", "Tropical & Humid"),
    crop("Cotton", 700, "Kharif", "Cash Crop", &["Black", "Medium"], "Full Sun", "21-30°C", "Warm & Semi-Arid"),
    crop("Soybean", 500, "Kharif", "Oilseed", &["Medium", "Black"], "Full Sun", "20-30°C", "Warm & Moist"),
    crop("Groundnut", 500, "Kharif", "Oilseed", &["Light", "Sandy"], "Full Sun", "25-30°C", "Tropics"),
    crop("Sunflower", 450, "Kharif/Rabi", "Oilseed", &["Medium"], "Full Sun", "20-25°C", "Adaptable"),
    crop("Mustard", 300, "Rabi", "Oilseed", &["Medium", "Light"], "Full Sun", "10-25°C", "Cool"),
    crop("Onion", 500, "Rabi/Kharif", "Vegetable", &["Medium", "Light"], "Full Sun", "15-25°C", "Mild"),
    crop("Potato", 500, "Rabi", "Vegetable", &["Medium"], "Full Sun", "15-20°C", "Cool"),
    crop("Tomato", 600, "Annual", "Vegetable", &["Medium", "Red"], "Full Sun", "20-30°C", "Warm"),
    crop("Brinjal (Eggplant)", 600, "Annual", "Vegetable", &["Medium"], "Full Sun", "25-30°C", "Warm"),
    crop("Okra (Bhindi)", 400, "Kharif/Zaid", "Vegetable", &["Medium"], "Full Sun", "22-35°C", "Warm"),
    crop("Cabbage", 400, "Rabi", "Vegetable", &["Medium"], "Part Sun", "15-20°C", "Cool & Moist"),
    crop("Banana", 1500, "Annual", "Fruit", &["Medium", "Heavy"], "Full Sun", "25-30°C", "Tropical Humid"),
    crop("Mango", 1000, "Annual", "Fruit", &["Medium", "Red"], "Full Sun", "24-30°C", "Tropical"),
    crop("Grapes", 700, "Annual", "Fruit", &["Medium"], "Full Sun", "15-35°C", "Dry/Mediterranean"),
    crop("Pomegranate", 600, "Annual", "Fruit", &["Light", "Red"], "Full Sun", "25-35°C", "Semi-Arid"),
    crop("Papaya", 1000, "Annual", "Fruit", &["Medium"], "Full Sun", "25-30°C", "Tropical"),
];

const fn costs(seed_per_kg: u32, input_per_acre: u32) -> InputCosts {
    InputCosts {
        seed_per_kg,
        input_per_acre,
    }
}

pub const FALLBACK_COSTS: InputCosts = costs(100, 15_000);

// INR; cane and fruit seed prices are per cutting or sapling.
pub const SEED_COSTS: &[(&str, InputCosts)] = &[
    ("Rice (Paddy)", costs(80, 18_000)),
    ("Wheat", costs(45, 12_000)),
    ("Jowar (Sorghum)", costs(60, 8_000)),
    ("Bajra (Pearl Millet)", costs(50, 7_000)),
    ("Maize (Corn)", costs(350, 15_000)),
    ("Ragi (Finger Millet)", costs(70, 9_000)),
    ("Tur (Arhar/Pigeon Pea)", costs(120, 10_000)),
    ("Gram (Chana/Chickpea)", costs(80, 9_000)),
    ("Moong (Green Gram)", costs(150, 8_000)),
    ("Urad (Black Gram)", costs(140, 8_500)),
    ("Sugarcane", costs(5, 45_000)),
    ("Cotton", costs(800, 25_000)),
    ("Soybean", costs(90, 12_000)),
    ("Groundnut", costs(120, 15_000)),
    ("Sunflower", costs(200, 11_000)),
    ("Mustard", costs(100, 8_000)),
    ("Onion", costs(1_500, 35_000)),
    ("Potato", costs(35, 40_000)),
    ("Tomato", costs(2_500, 50_000)),
    ("Brinjal (Eggplant)", costs(3_000, 45_000)),
    ("Okra (Bhindi)", costs(800, 25_000)),
    ("Cabbage", costs(2_000, 35_000)),
    ("Mango", costs(150, 80_000)),
    ("Banana", costs(25, 60_000)),
    ("Grapes", costs(50, 150_000)),
    ("Pomegranate", costs(100, 100_000)),
    ("Orange", costs(80, 70_000)),
];

pub const SOILS: &[SoilProfile] = &[
    SoilProfile {
        name: "Black Soil (Regur/Kali) - Heavy",
        texture: SoilTexture::Heavy,
        retention: "high",
        desc: "High water retention. Good for Cotton, Sugarcane.",
    },
    SoilProfile {
        name: "Red Soil (Lal) - Light",
        texture: SoilTexture::Light,
        retention: "low",
        desc: "Porous, low retention. Good for Groundnut, Millets.",
    },
    SoilProfile {
        name: "Medium Soil (Loam/Domat) - Balanced",
        texture: SoilTexture::Medium,
        retention: "medium",
        desc: "Balanced moisture. Good for Vegetables, Wheat, Pulses.",
    },
    SoilProfile {
        name: "Alluvial Soil (Zalod) - Fertile",
        texture: SoilTexture::Medium,
        retention: "medium",
        desc: "Very fertile river soil. Great for Rice, Wheat.",
    },
    SoilProfile {
        name: "Laterite Soil (Jambhi) - Acidic",
        texture: SoilTexture::Light,
        retention: "low",
        desc: "Iron-rich, rocky. Good for Cashew, Mango.",
    },
    SoilProfile {
        name: "Clay Soil (Chikani) - Very Heavy",
        texture: SoilTexture::Heavy,
        retention: "very_high",
        desc: "Holds water too long. Risk of root rot if not drained.",
    },
    SoilProfile {
        name: "Sandy Soil (Retili) - Very Light",
        texture: SoilTexture::Light,
        retention: "very_low",
        desc: "Drains instantly. Needs frequent irrigation. Good for Melons.",
    },
];

pub fn find_crop(name: &str) -> Option<&'static Crop> {
    CROPS.iter().find(|crop| crop.name == name)
}

pub fn crop_water_need(name: &str) -> Option<f64> {
    find_crop(name).map(|crop| crop.water_mm as f64)
}

fn soil_matches(crop: &Crop, texture: SoilTexture, soil_lower: &str) -> bool {
    crop.soil
        .iter()
        .any(|s| texture.accepts(s) || soil_lower.contains(&s.to_lowercase()))
}

pub fn recommend_crops(
    soil_type: &str,
    season: Season,
    available_water_mm: f64,
) -> Vec<CropRecommendation> {
    let soil_lower = soil_type.to_lowercase();
    let texture = SoilTexture::classify(soil_type);
    let status = WaterStatus::classify(available_water_mm);

    let mut recommended: Vec<CropRecommendation> = CROPS
        .iter()
        .filter(|crop| crop.grows_in(season))
        .filter_map(|crop| {
            let mut score = 0;
            let mut reasons = Vec::new();

            if soil_matches(crop, texture, &soil_lower) {
                score += 40;
                reasons.push("Great Soil Match".to_string());
            } else {
                reasons.push("Soil Tolerable".to_string());
            }

            match status {
                WaterStatus::Critical if crop.water_mm < 400 => {
                    score += 50;
                    reasons.push("Drought Resistant".to_string());
                }
                WaterStatus::Critical => {
                    score -= 50;
                    reasons.push("Requires too much water".to_string());
                }
                WaterStatus::Moderate if crop.water_mm < 800 => {
                    score += 30;
                    reasons.push("Good Water Fit".to_string());
                }
                WaterStatus::Moderate => {}
                WaterStatus::Safe => {
                    score += 20;
                    reasons.push("Ample Water".to_string());
                }
            }

            if score < MIN_RECOMMENDATION_SCORE {
                return None;
            }
            let costs = crop.costs();
            Some(CropRecommendation {
                name: crop.name.to_string(),
                score,
                crop_type: crop.crop_type.to_string(),
                water_req: format!("{}mm", crop.water_mm),
                sunlight: crop.sunlight.to_string(),
                temperature: crop.temperature.to_string(),
                climate: crop.climate.to_string(),
                reasons,
                seed_cost_per_kg: costs.seed_per_kg,
                input_cost_per_acre: costs.input_per_acre,
            })
        })
        .collect();

    recommended.sort_by(|a, b| b.score.cmp(&a.score));
    recommended.truncate(MAX_RECOMMENDATIONS);
    recommended
}

#[derive(Debug, Clone)]
pub struct CropCheckInput<'a> {
    pub crop_name: &'a str,
    pub available_water_mm: f64,
    pub soil_type: Option<&'a str>,
}

fn soil_warning(crop: &Crop, soil_type: &str) -> Option<String> {
    let user_soil = soil_type.to_lowercase();
    let ideal: Vec<String> = crop.soil.iter().map(|s| s.to_lowercase()).collect();
    let has = |name: &str| ideal.iter().any(|s| s == name);

    if has("clay") && (user_soil.contains("sandy") || user_soil.contains("light")) {
        Some(format!(
            "{} needs Heavy/Clay soil, but you have Light soil.",
            crop.name
        ))
    } else if has("sandy") && (user_soil.contains("clay") || user_soil.contains("heavy")) {
        Some(format!(
            "{} needs Light/Sandy soil, avoiding waterlogging.",
            crop.name
        ))
    } else {
        None
    }
}

pub fn check_crop(
    input: &CropCheckInput<'_>,
    current_month: Month,
    forecast: Option<&[ForecastDay]>,
) -> CropCheck {
    let crop = find_crop(input.crop_name);
    let needed = crop
        .map(|c| c.water_mm as f64)
        .unwrap_or(DEFAULT_CROP_WATER_MM);
    let available = input.available_water_mm;

    let warning = match (crop, input.soil_type) {
        (Some(crop), Some(soil)) => soil_warning(crop, soil),
        _ => None,
    };
    let feasible = available >= needed && warning.is_none();
    let shortfall = needed - available;

    let mut advice = Vec::new();
    let season = Season::for_month(current_month);
    if let Some(crop) = crop {
        if !crop.grows_in(season) {
            advice.push(format!(
                "{} is a {} crop, but currently it's {}. Yield may be low.",
                crop.name,
                crop.season,
                season.as_str()
            ));
        }
    }

    if let Some(days) = forecast {
        let (rain_days, total_rain) = summarize_rain(days);
        let is_pulse = crop.is_some_and(|c| c.crop_type == "Pulse");
        if rain_days >= 3 {
            advice.push("Heavy rain alert! Delay sowing/spraying.".to_string());
        } else if total_rain < 5.0 && available < needed {
            advice.push("Dry week ahead. Ensure irrigation is planned.".to_string());
        } else if total_rain > 20.0 && is_pulse {
            advice.push("Excess rain warning for Pulses. Ensure drainage.".to_string());
        }
    }

    let (verdict, mut message) = if feasible {
        (
            Verdict::Safe,
            format!(
                "Success! You have {}mm. {} needs approx {}mm.",
                available.trunc(),
                input.crop_name,
                needed
            ),
        )
    } else if let Some(warning) = &warning {
        (Verdict::Critical, format!("Soil Warning: {warning}"))
    } else {
        (
            Verdict::Critical,
            format!(
                "Not Viable. {} ({}mm) exceeds your water ({}mm) by {}mm.",
                input.crop_name,
                needed,
                available.trunc(),
                shortfall.trunc()
            ),
        )
    };
    if !advice.is_empty() {
        message.push(' ');
        message.push_str(&advice.join(" "));
    }

    CropCheck {
        feasible,
        verdict,
        message,
        needed_mm: needed,
        available_mm: available,
        shortfall_mm: shortfall,
        advice,
    }
}
