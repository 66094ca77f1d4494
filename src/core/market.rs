use serde::Serialize;

pub const FALLBACK_MODAL_PRICE: u32 = 5_000;
const QUOTE_DATE: &str = "06-Feb";

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceTrend {
    Up,
    Stable,
    Down,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketQuote {
    pub market: &'static str,
    pub state: &'static str,
    pub min_price: u32,
    pub max_price: u32,
    pub modal_price: u32,
    pub trend: PriceTrend,
    pub date: &'static str,
}

const fn quote(
    market: &'static str,
    min_price: u32,
    max_price: u32,
    modal_price: u32,
    trend: PriceTrend,
) -> MarketQuote {
    MarketQuote {
        market,
        state: "MH",
        min_price,
        max_price,
        modal_price,
        trend,
        date: QUOTE_DATE,
    }
}

// Rs per quintal at Maharashtra APMC yards.
pub const MARKET_PRICES: &[(&str, &[MarketQuote])] = &[
    (
        "Rice",
        &[
            quote("Pune APMC", 2_800, 3_500, 3_100, PriceTrend::Up),
            quote("Nashik APMC", 2_700, 3_300, 3_000, PriceTrend::Stable),
        ],
    ),
    (
        "Wheat",
        &[
            quote("Mumbai Vashi", 3_200, 4_000, 3_600, PriceTrend::Up),
            quote("Pune APMC", 3_000, 3_800, 3_400, PriceTrend::Stable),
        ],
    ),
    ("Jowar", &[quote("Solapur APMC", 3_500, 4_200, 3_800, PriceTrend::Up)]),
    ("Bajra", &[quote("Ahmednagar APMC", 2_200, 2_600, 2_400, PriceTrend::Down)]),
];

const FALLBACK_QUOTES: &[MarketQuote] = &[
    quote(
        "District Mandi",
        FALLBACK_MODAL_PRICE - 300,
        FALLBACK_MODAL_PRICE + 300,
        FALLBACK_MODAL_PRICE,
        PriceTrend::Stable,
    ),
    quote(
        "State Market",
        FALLBACK_MODAL_PRICE - 200,
        FALLBACK_MODAL_PRICE + 500,
        FALLBACK_MODAL_PRICE + 200,
        PriceTrend::Up,
    ),
];

pub fn normalize_commodity(name: &str) -> String {
    if name.contains("Sorghum") {
        "Jowar".to_string()
    } else if name.contains("Pearl") {
        "Bajra".to_string()
    } else {
        name.split(' ').next().unwrap_or_default().to_string()
    }
}

pub fn market_prices(commodity: &str) -> &'static [MarketQuote] {
    MARKET_PRICES
        .iter()
        .find(|(name, _)| *name == commodity)
        .map(|(_, quotes)| *quotes)
        .unwrap_or(FALLBACK_QUOTES)
}
