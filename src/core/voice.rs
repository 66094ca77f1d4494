//! Keyword-driven parsing of transcribed voice commands.
//!
//! Matching is plain substring search on the lower-cased transcript, so short
//! keywords can fire inside longer words. Tables are scanned in order and the
//! first hit wins.

use super::types::{SoilClass, VoiceAction, VoiceCommand};

const SOIL_KEYWORDS: &[(SoilClass, &[&str])] = &[
    (SoilClass::Heavy, &["black", "clay", "heavy", "deep", "kali"]),
    (SoilClass::Medium, &["medium", "loam", "silt", "madhyam"]),
    (SoilClass::Light, &["red", "light", "sandy", "halki", "lal"]),
];

const CROP_KEYWORDS: &[(&str, &[&str])] = &[
    ("Cotton (Kapas)", &["cotton", "kapas", "kapaas"]),
    ("Soybean", &["soybean", "soya", "soyabean"]),
    ("Wheat (Gehu)", &["wheat", "gehu", "gahu"]),
    ("Sugarcane (Us)", &["sugarcane", "cane", "us", "oos"]),
    ("Gram (Chana)", &["gram", "chana", "chickpea"]),
    ("Maize (Makka)", &["maize", "corn", "makka", "maka"]),
    ("Tur (Arhar)", &["tur", "arhar", "pigeon pea"]),
    ("Bajra", &["bajra", "pearl millet"]),
    ("Jowar (Sorghum)", &["jowar", "sorghum"]),
    ("Onion", &["onion", "kanda", "pyaz"]),
    ("Groundnut", &["groundnut", "peanut", "shenga"]),
    ("Rice (Paddy)", &["rice", "paddy", "dhan", "bhat"]),
];

const LOCATION_PREPOSITIONS: &[&str] = &["in", "at", "for", "to"];
const LOCATION_TRAILERS: &[&str] = &["weather", "forecast", "rain", "soil", "today", "tomorrow"];
const MIN_LOCATION_CHARS: usize = 4;

pub fn parse_voice_command(text: &str) -> VoiceCommand {
    let lower = text.to_lowercase();
    VoiceCommand {
        soil: detect_soil(&lower),
        crop: detect_crop(&lower),
        location: detect_location(&lower),
        action: detect_action(&lower),
    }
}

fn contains_any(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| text.contains(k))
}

fn detect_soil(lower: &str) -> Option<SoilClass> {
    SOIL_KEYWORDS
        .iter()
        .find(|(_, keywords)| contains_any(lower, keywords))
        .map(|(class, _)| *class)
}

fn detect_crop(lower: &str) -> Option<String> {
    CROP_KEYWORDS
        .iter()
        .find(|(_, keywords)| contains_any(lower, keywords))
        .map(|(name, _)| name.to_string())
}

fn detect_action(lower: &str) -> Option<VoiceAction> {
    if contains_any(lower, &["check", "calculate", "show result"]) {
        Some(VoiceAction::Calculate)
    } else if contains_any(lower, &["reset", "clear"]) {
        Some(VoiceAction::Reset)
    } else {
        None
    }
}

fn is_place_char(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_whitespace()
}

// Leftmost preposition followed by whitespace, then the run of letters and spaces.
fn place_after_preposition(lower: &str) -> Option<&str> {
    for (start, _) in lower.char_indices() {
        let rest = &lower[start..];
        for preposition in LOCATION_PREPOSITIONS {
            let Some(after) = rest.strip_prefix(preposition) else {
                continue;
            };
            let gap = after.len() - after.trim_start().len();
            if gap == 0 {
                continue;
            }
            let run_len = after
                .char_indices()
                .find(|(_, c)| !is_place_char(*c))
                .map(|(idx, _)| idx)
                .unwrap_or(after.len());
            // at least one place character must follow the whitespace, unless
            // the gap itself is long enough to donate one
            let captured_past_gap = run_len > gap;
            let gap_chars = after[..gap].chars().count();
            if captured_past_gap || gap_chars >= 2 {
                return Some(&after[..run_len]);
            }
        }
    }
    None
}

fn strip_trailer(place: &str) -> &str {
    let mut search_from = 0;
    while let Some(offset) = place[search_from..].find(char::is_whitespace) {
        let ws_start = search_from + offset;
        let tail = place[ws_start..].trim_start();
        if LOCATION_TRAILERS.iter().any(|t| tail.starts_with(t)) {
            return &place[..ws_start];
        }
        let ws_len = place[ws_start..].len() - tail.len();
        search_from = ws_start + ws_len;
        if search_from >= place.len() {
            break;
        }
    }
    place
}

fn detect_location(lower: &str) -> Option<String> {
    let captured = place_after_preposition(lower)?;
    let place = strip_trailer(captured.trim());
    (place.chars().count() >= MIN_LOCATION_CHARS).then(|| place.to_string())
}
