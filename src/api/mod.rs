use axum::{
    Router,
    extract::{Json, Query},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::{Datelike, Days, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use thiserror::Error;
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{debug, info, warn};

use crate::core::{
    CROPS, Crop, CropCheck, CropCheckInput, CropRecommendation, ForecastDay, ForecastSummary,
    InterventionSet, LocationSuggestion, MarketQuote, Month, MonthlyBand, RoiResult, SOILS, Season,
    SoilMoistureStatus, SoilProfile, SowingWindow, VoiceCommand, WaterStatus, adjust_scenarios,
    check_crop, compute_roi, crop_water_need, find_best_window, find_crop, market_prices,
    normalize_commodity, parse_voice_command, recommend_crops, simulate_depletion, soil_advice,
    suggest, summarize_balance_forecast, summarize_forecast, water_balance,
};

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    NotFound(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
        };
        warn!(%status, error = %self, "request rejected");
        error_response(status, &self.to_string())
    }
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

#[derive(Debug, Serialize)]
struct StatusResponse {
    message: &'static str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SimulateWaterPayload {
    #[serde(alias = "crop_name")]
    crop_name: String,
    #[serde(alias = "water_balance")]
    water_balance: f64,
    #[serde(alias = "month_start")]
    month_start: u32,
}

#[derive(Debug, Serialize)]
struct SimulateWaterResponse {
    simulation: Vec<MonthlyBand>,
}

#[derive(Debug, Deserialize)]
struct BandPayload {
    month: String,
    best: Option<f64>,
    likely: Option<f64>,
    worst: Option<f64>,
}

impl From<BandPayload> for MonthlyBand {
    fn from(value: BandPayload) -> Self {
        MonthlyBand {
            month: value.month,
            best: value.best.unwrap_or(f64::NAN),
            likely: value.likely.unwrap_or(f64::NAN),
            worst: value.worst.unwrap_or(f64::NAN),
        }
    }
}

#[derive(Debug, Deserialize)]
struct AdjustPayload {
    #[serde(default)]
    simulation: Vec<BandPayload>,
    #[serde(default)]
    interventions: InterventionSet,
}

#[derive(Debug, Serialize)]
struct AdjustResponse {
    adjusted: Vec<MonthlyBand>,
    roi: RoiResult,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ForecastDayPayload {
    day: String,
    #[serde(alias = "rain_mm")]
    rain_mm: Option<f64>,
    #[serde(alias = "temp_max")]
    temp_max: Option<f64>,
    #[serde(alias = "temp_min")]
    temp_min: Option<f64>,
}

impl From<ForecastDayPayload> for ForecastDay {
    fn from(value: ForecastDayPayload) -> Self {
        ForecastDay {
            day: value.day,
            rain_mm: value.rain_mm,
            temp_max: value.temp_max.unwrap_or(f64::NAN),
            temp_min: value.temp_min.unwrap_or(f64::NAN),
        }
    }
}

fn forecast_days(payload: Vec<ForecastDayPayload>) -> Vec<ForecastDay> {
    payload.into_iter().map(ForecastDay::from).collect()
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ForecastPayload {
    #[serde(default)]
    forecast: Vec<ForecastDayPayload>,
    #[serde(default, alias = "reference_date")]
    reference_date: Option<NaiveDate>,
}

#[derive(Debug, Serialize)]
struct SowingWindowResponse {
    window: Option<SowingWindow>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WaterBalancePayload {
    #[serde(alias = "rain_30d_mm")]
    rain_30d_mm: f64,
    #[serde(default, alias = "soil_type")]
    soil_type: Option<String>,
    #[serde(default)]
    month: Option<u32>,
    #[serde(default)]
    region: Option<String>,
    #[serde(default)]
    pincode: Option<String>,
    #[serde(default)]
    forecast: Option<Vec<ForecastDayPayload>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct WaterBalanceResponse {
    region: String,
    pincode: String,
    available_water_mm: f64,
    status: WaterStatus,
    season: Season,
    advice: String,
    recommended_crops: Vec<String>,
    smart_recommendations: Vec<CropRecommendation>,
    forecast_summary: Option<ForecastSummary>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RecommendPayload {
    #[serde(alias = "soil_type")]
    soil_type: String,
    season: Season,
    #[serde(alias = "available_water_mm")]
    available_water_mm: f64,
}

#[derive(Debug, Serialize)]
struct RecommendResponse {
    recommendations: Vec<CropRecommendation>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CheckCropPayload {
    #[serde(alias = "crop_name")]
    crop_name: String,
    #[serde(alias = "available_water_mm")]
    available_water_mm: f64,
    #[serde(default, alias = "soil_type")]
    soil_type: Option<String>,
    #[serde(default)]
    month: Option<u32>,
    #[serde(default)]
    forecast: Option<Vec<ForecastDayPayload>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CheckCropResponse {
    #[serde(flatten)]
    check: CropCheck,
    crop_details: Option<&'static Crop>,
}

#[derive(Debug, Serialize)]
struct CropsResponse {
    crops: &'static [Crop],
}

#[derive(Debug, Serialize)]
struct SoilsResponse {
    soils: &'static [SoilProfile],
}

#[derive(Debug, Deserialize)]
struct SuggestionsQuery {
    #[serde(default)]
    query: String,
}

#[derive(Debug, Serialize)]
struct SuggestionsResponse {
    suggestions: Vec<LocationSuggestion>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SoilStatusQuery {
    #[serde(alias = "moisture_percent")]
    moisture_percent: f64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SoilStatusResponse {
    moisture_percent: f64,
    status: SoilMoistureStatus,
    description: &'static str,
}

#[derive(Debug, Deserialize)]
struct MarketPricesQuery {
    commodity: String,
}

#[derive(Debug, Serialize)]
struct MarketPricesResponse {
    commodity: String,
    prices: &'static [MarketQuote],
}

#[derive(Debug, Deserialize)]
struct VoicePayload {
    text: String,
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn parse_month(month: Option<u32>, field: &str) -> Result<Month, ApiError> {
    match month {
        None => Month::from_number(today().month())
            .ok_or_else(|| ApiError::BadRequest("current month is unavailable".to_string())),
        Some(number) => Month::from_number(number)
            .ok_or_else(|| ApiError::BadRequest(format!("{field} must be between 1 and 12"))),
    }
}

fn require_finite(value: f64, field: &str) -> Result<f64, ApiError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ApiError::BadRequest(format!("{field} must be a finite number")))
    }
}

fn simulate_water(payload: SimulateWaterPayload) -> Result<SimulateWaterResponse, ApiError> {
    let start = parse_month(Some(payload.month_start), "monthStart")?;
    let balance = require_finite(payload.water_balance, "waterBalance")?;
    let crop_water = crop_water_need(&payload.crop_name);
    if crop_water.is_none() {
        debug!(crop = %payload.crop_name, "unknown crop, using default water need");
    }
    Ok(SimulateWaterResponse {
        simulation: simulate_depletion(crop_water, balance, start),
    })
}

fn adjust(payload: AdjustPayload) -> AdjustResponse {
    let forecast: Vec<MonthlyBand> = payload
        .simulation
        .into_iter()
        .map(MonthlyBand::from)
        .collect();
    AdjustResponse {
        adjusted: adjust_scenarios(&forecast, payload.interventions),
        roi: compute_roi(payload.interventions),
    }
}

fn sowing_window(payload: ForecastPayload) -> Result<SowingWindowResponse, ApiError> {
    let reference = payload.reference_date.unwrap_or_else(today);
    let forecast = forecast_days(payload.forecast);
    if reference
        .checked_add_days(Days::new(forecast.len() as u64))
        .is_none()
    {
        return Err(ApiError::BadRequest(
            "referenceDate is too late for the forecast length".to_string(),
        ));
    }
    Ok(SowingWindowResponse {
        window: find_best_window(&forecast, reference),
    })
}

fn water_balance_report(payload: WaterBalancePayload) -> Result<WaterBalanceResponse, ApiError> {
    let rain = require_finite(payload.rain_30d_mm, "rain30dMm")?;
    if rain < 0.0 {
        return Err(ApiError::BadRequest("rain30dMm must be >= 0".to_string()));
    }
    let month = parse_month(payload.month, "month")?;
    let season = Season::for_month(month);
    let balance = water_balance(rain);
    let soil_type = payload.soil_type.as_deref();

    let smart_recommendations = recommend_crops(soil_type.unwrap_or("Medium"), season, balance);
    let recommended_crops = smart_recommendations
        .iter()
        .map(|rec| rec.name.clone())
        .collect();
    let forecast_summary = payload
        .forecast
        .map(|days| summarize_balance_forecast(&forecast_days(days)));

    Ok(WaterBalanceResponse {
        region: payload.region.unwrap_or_else(|| "Unknown".to_string()),
        pincode: payload.pincode.unwrap_or_else(|| "Unknown".to_string()),
        available_water_mm: balance.trunc(),
        status: WaterStatus::classify(balance),
        season,
        advice: format!("Water Balance: {balance:.0}mm. {}", soil_advice(soil_type)),
        recommended_crops,
        smart_recommendations,
        forecast_summary,
    })
}

fn recommend(payload: RecommendPayload) -> Result<RecommendResponse, ApiError> {
    let available = require_finite(payload.available_water_mm, "availableWaterMm")?;
    Ok(RecommendResponse {
        recommendations: recommend_crops(&payload.soil_type, payload.season, available),
    })
}

fn crop_check(payload: CheckCropPayload) -> Result<CheckCropResponse, ApiError> {
    let available = require_finite(payload.available_water_mm, "availableWaterMm")?;
    let month = parse_month(payload.month, "month")?;
    let forecast = payload.forecast.map(forecast_days);
    let input = CropCheckInput {
        crop_name: &payload.crop_name,
        available_water_mm: available,
        soil_type: payload.soil_type.as_deref(),
    };
    Ok(CheckCropResponse {
        check: check_crop(&input, month, forecast.as_deref()),
        crop_details: find_crop(&payload.crop_name),
    })
}

fn market_report(query: MarketPricesQuery) -> MarketPricesResponse {
    let commodity = normalize_commodity(query.commodity.trim());
    let prices = market_prices(&commodity);
    MarketPricesResponse { commodity, prices }
}

fn soil_status(query: SoilStatusQuery) -> Result<SoilStatusResponse, ApiError> {
    let moisture = require_finite(query.moisture_percent, "moisturePercent")?;
    let status = SoilMoistureStatus::classify(moisture);
    Ok(SoilStatusResponse {
        moisture_percent: moisture,
        status,
        description: status.description(),
    })
}

pub fn router() -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/health", get(index_handler))
        .route("/api/simulate-water", post(simulate_water_handler))
        .route("/api/adjust-scenarios", post(adjust_handler))
        .route("/api/roi", get(roi_handler))
        .route("/api/sowing-window", post(sowing_window_handler))
        .route("/api/forecast-summary", post(forecast_summary_handler))
        .route("/api/water-balance", post(water_balance_handler))
        .route("/api/recommend-crops", post(recommend_handler))
        .route("/api/check-crop", post(check_crop_handler))
        .route("/api/crops", get(crops_handler))
        .route("/api/soils", get(soils_handler))
        .route("/api/suggestions", get(suggestions_handler))
        .route("/api/soil-status", get(soil_status_handler))
        .route("/api/market-prices", get(market_prices_handler))
        .route("/api/voice-command", post(voice_command_handler))
        .fallback(not_found_handler)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

pub async fn run_http_server(addr: SocketAddr) -> std::io::Result<()> {
    let listener = TcpListener::bind(addr).await?;
    info!("Water accountant API listening on http://{addr}");
    info!("Local access: http://127.0.0.1:{}/", addr.port());

    axum::serve(listener, router()).await
}

async fn index_handler() -> Response {
    json_response(
        StatusCode::OK,
        StatusResponse {
            message: "Village Water Accountant backend is running",
        },
    )
}

async fn not_found_handler() -> Response {
    ApiError::NotFound("Not found".to_string()).into_response()
}

async fn simulate_water_handler(
    Json(payload): Json<SimulateWaterPayload>,
) -> Result<Response, ApiError> {
    debug!(crop = %payload.crop_name, month = payload.month_start, "simulating depletion");
    Ok(json_response(StatusCode::OK, simulate_water(payload)?))
}

async fn adjust_handler(Json(payload): Json<AdjustPayload>) -> Response {
    debug!(
        months = payload.simulation.len(),
        drip = payload.interventions.drip,
        mulch = payload.interventions.mulch,
        "adjusting scenarios"
    );
    json_response(StatusCode::OK, adjust(payload))
}

async fn roi_handler(Query(interventions): Query<InterventionSet>) -> Response {
    json_response(StatusCode::OK, compute_roi(interventions))
}

async fn sowing_window_handler(
    Json(payload): Json<ForecastPayload>,
) -> Result<Response, ApiError> {
    debug!(days = payload.forecast.len(), "scoring sowing window");
    Ok(json_response(StatusCode::OK, sowing_window(payload)?))
}

async fn forecast_summary_handler(Json(payload): Json<ForecastPayload>) -> Response {
    let forecast = forecast_days(payload.forecast);
    json_response(StatusCode::OK, summarize_forecast(&forecast))
}

async fn water_balance_handler(
    Json(payload): Json<WaterBalancePayload>,
) -> Result<Response, ApiError> {
    Ok(json_response(StatusCode::OK, water_balance_report(payload)?))
}

async fn recommend_handler(Json(payload): Json<RecommendPayload>) -> Result<Response, ApiError> {
    Ok(json_response(StatusCode::OK, recommend(payload)?))
}

async fn check_crop_handler(Json(payload): Json<CheckCropPayload>) -> Result<Response, ApiError> {
    debug!(crop = %payload.crop_name, "checking crop viability");
    Ok(json_response(StatusCode::OK, crop_check(payload)?))
}

async fn crops_handler() -> Response {
    json_response(StatusCode::OK, CropsResponse { crops: CROPS })
}

async fn soils_handler() -> Response {
    json_response(StatusCode::OK, SoilsResponse { soils: SOILS })
}

async fn suggestions_handler(Query(query): Query<SuggestionsQuery>) -> Response {
    json_response(
        StatusCode::OK,
        SuggestionsResponse {
            suggestions: suggest(&query.query),
        },
    )
}

async fn soil_status_handler(Query(query): Query<SoilStatusQuery>) -> Result<Response, ApiError> {
    Ok(json_response(StatusCode::OK, soil_status(query)?))
}

async fn market_prices_handler(Query(query): Query<MarketPricesQuery>) -> Response {
    debug!(commodity = %query.commodity, "looking up market prices");
    json_response(StatusCode::OK, market_report(query))
}

async fn voice_command_handler(Json(payload): Json<VoicePayload>) -> Response {
    let command: VoiceCommand = parse_voice_command(&payload.text);
    json_response(StatusCode::OK, command)
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    let mut response = (status, Json(body)).into_response();
    response.headers_mut().insert(
        header::CACHE_CONTROL,
        header::HeaderValue::from_static("no-store"),
    );
    response
}

fn error_response(status: StatusCode, msg: &str) -> Response {
    json_response(
        status,
        ErrorResponse {
            error: msg.to_string(),
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{Body, to_bytes};
    use axum::http::Request;
    use serde_json::Value;
    use std::fs;
    use std::path::Path;
    use tower::ServiceExt;

    const EPS: f64 = 1e-9;

    fn assert_approx(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() <= EPS,
            "expected {expected}, got {actual}"
        );
    }

    fn assert_golden_snapshot(path: &str, actual: &str) {
        let update = matches!(
            std::env::var("UPDATE_GOLDEN").as_deref(),
            Ok("1") | Ok("true") | Ok("TRUE")
        );
        let snapshot_path = Path::new(path);

        if update {
            if let Some(parent) = snapshot_path.parent() {
                fs::create_dir_all(parent).expect("failed to create snapshot directory");
            }
            fs::write(snapshot_path, actual).expect("failed to write golden snapshot");
            return;
        }

        let expected = fs::read_to_string(snapshot_path).unwrap_or_else(|_| {
            panic!("missing golden snapshot at {path}; run with UPDATE_GOLDEN=1 to generate")
        });
        assert_eq!(
            actual, expected,
            "snapshot mismatch for {path}; run with UPDATE_GOLDEN=1 to refresh if expected"
        );
    }

    async fn send(request: Request<Body>) -> (StatusCode, Value) {
        let response = router().oneshot(request).await.expect("router is infallible");
        let status = response.status();
        assert_eq!(
            response
                .headers()
                .get(header::CACHE_CONTROL)
                .and_then(|v| v.to_str().ok()),
            Some("no-store")
        );
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body should be readable");
        let json = serde_json::from_slice(&bytes).expect("body should be json");
        (status, json)
    }

    fn post_json(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .expect("valid request")
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder()
            .uri(uri)
            .body(Body::empty())
            .expect("valid request")
    }

    #[test]
    fn simulate_payload_accepts_camel_and_snake_keys() {
        let camel: SimulateWaterPayload = serde_json::from_str(
            r#"{"cropName": "Cotton", "waterBalance": 400, "monthStart": 6}"#,
        )
        .expect("camel case parses");
        let snake: SimulateWaterPayload = serde_json::from_str(
            r#"{"crop_name": "Cotton", "water_balance": 400, "month_start": 6}"#,
        )
        .expect("snake case parses");
        assert_eq!(camel.crop_name, snake.crop_name);
        assert_approx(camel.water_balance, snake.water_balance);
        assert_eq!(camel.month_start, snake.month_start);
    }

    #[test]
    fn simulate_water_rejects_out_of_range_month() {
        let payload = SimulateWaterPayload {
            crop_name: "Cotton".to_string(),
            water_balance: 400.0,
            month_start: 13,
        };
        let err = simulate_water(payload).err().expect("must reject month 13");
        assert!(err.to_string().contains("monthStart"));
    }

    #[test]
    fn golden_snapshot_simulate_water_cotton_june() {
        let payload = SimulateWaterPayload {
            crop_name: "Cotton".to_string(),
            water_balance: 400.0,
            month_start: 6,
        };
        let response = simulate_water(payload).expect("valid payload");
        let json = format!(
            "{}\n",
            serde_json::to_string(&response).expect("response should serialize")
        );
        assert_golden_snapshot("tests/golden/simulate_water_cotton_june.json", &json);
    }

    #[test]
    fn adjust_turns_missing_band_values_into_null() {
        let payload: AdjustPayload = serde_json::from_str(
            r#"{
              "simulation": [
                {"month": "Jun", "best": 900, "likely": 700, "worst": 500},
                {"month": "Jul", "best": 900, "worst": 500}
              ],
              "interventions": {"drip": true}
            }"#,
        )
        .expect("json should parse");
        let response = adjust(payload);
        assert_approx(response.adjusted[0].worst, 580.0);
        assert_approx(response.adjusted[0].likely, 764.0);
        assert!(response.adjusted[1].likely.is_nan());
        assert_approx(response.adjusted[1].worst, 660.0);
        assert_approx(response.roi.cost, 20_000.0);

        let json: Value = serde_json::to_value(&response).expect("serializes");
        assert_eq!(json["adjusted"][1]["likely"], Value::Null);
        assert_eq!(json["roi"]["savingsFraction"], serde_json::json!(0.4));
    }

    #[test]
    fn sowing_window_uses_supplied_reference_date() {
        let payload: ForecastPayload = serde_json::from_str(
            r#"{
              "referenceDate": "2024-07-01",
              "forecast": [
                {"day": "Mon", "rainMm": 0, "tempMax": 36, "tempMin": 30},
                {"day": "Tue", "rain_mm": 10, "temp_max": 30, "temp_min": 20},
                {"day": "Wed", "rainMm": 0, "tempMax": 33, "tempMin": 31},
                {"day": "Thu", "tempMax": 33, "tempMin": 31},
                {"day": "Fri", "rainMm": 1, "tempMax": 33, "tempMin": 31}
              ]
            }"#,
        )
        .expect("json should parse");
        let window = sowing_window(payload)
            .expect("valid payload")
            .window
            .expect("five days yield a window");
        assert_eq!(window.days_from_now, 1);
        assert_eq!(window.score, 105);
        assert_eq!(
            window.start_date,
            NaiveDate::from_ymd_opt(2024, 7, 2).expect("valid date")
        );
    }

    #[test]
    fn water_balance_report_classifies_and_recommends() {
        let payload: WaterBalancePayload = serde_json::from_str(
            r#"{"rain30dMm": 20, "soilType": "Black Soil (Heavy)", "month": 7, "region": "Latur"}"#,
        )
        .expect("json should parse");
        let report = water_balance_report(payload).expect("valid payload");
        assert_approx(report.available_water_mm, 370.0);
        assert_eq!(report.status, WaterStatus::Moderate);
        assert_eq!(report.season, Season::Kharif);
        assert_eq!(
            report.advice,
            "Water Balance: 370mm. Retains water well. Delay irrigation."
        );
        assert_eq!(report.region, "Latur");
        assert_eq!(report.pincode, "Unknown");
        assert_eq!(report.recommended_crops.len(), report.smart_recommendations.len());
        assert!(report.forecast_summary.is_none());
    }

    #[test]
    fn water_balance_report_rejects_negative_rain() {
        let payload: WaterBalancePayload =
            serde_json::from_str(r#"{"rain30dMm": -5, "month": 7}"#).expect("json should parse");
        let err = water_balance_report(payload).err().expect("must reject");
        assert!(err.to_string().contains("rain30dMm"));
    }

    #[test]
    fn sowing_window_rejects_reference_date_at_calendar_end() {
        let payload = ForecastPayload {
            forecast: (0..5)
                .map(|idx| ForecastDayPayload {
                    day: format!("D{idx}"),
                    rain_mm: Some(0.0),
                    temp_max: Some(30.0),
                    temp_min: Some(20.0),
                })
                .collect(),
            reference_date: Some(NaiveDate::MAX),
        };
        let err = sowing_window(payload).err().expect("must reject");
        assert!(err.to_string().contains("referenceDate"));
    }

    #[test]
    fn water_balance_forecast_summary_checks_weekly_total_first() {
        let payload: WaterBalancePayload = serde_json::from_str(
            r#"{
              "rain30dMm": 100,
              "month": 7,
              "forecast": [
                {"day": "Mon", "rainMm": 6},
                {"day": "Tue", "rainMm": 0},
                {"day": "Wed", "rainMm": 0}
              ]
            }"#,
        )
        .expect("json should parse");
        let report = water_balance_report(payload).expect("valid payload");
        let summary = report.forecast_summary.expect("forecast was supplied");
        assert_eq!(summary.rain_days, 1);
        assert_eq!(summary.advice, "Dry week ahead. Plan irrigation.");
    }

    #[test]
    fn market_report_normalizes_catalogue_names() {
        let report = market_report(MarketPricesQuery {
            commodity: "Jowar (Sorghum)".to_string(),
        });
        assert_eq!(report.commodity, "Jowar");
        assert_eq!(report.prices.len(), 1);
        assert_eq!(report.prices[0].market, "Solapur APMC");

        let fallback = market_report(MarketPricesQuery {
            commodity: "Cotton".to_string(),
        });
        assert_eq!(fallback.commodity, "Cotton");
        assert_eq!(fallback.prices[0].market, "District Mandi");
    }

    #[test]
    fn crop_check_includes_catalogue_details() {
        let payload: CheckCropPayload = serde_json::from_str(
            r#"{"cropName": "Soybean", "availableWaterMm": 650, "month": 7}"#,
        )
        .expect("json should parse");
        let response = crop_check(payload).expect("valid payload");
        assert!(response.check.feasible);
        assert_eq!(response.crop_details.map(|c| c.water_mm), Some(500));

        let json = serde_json::to_value(&response).expect("serializes");
        assert_eq!(json["verdict"], "safe");
        assert_eq!(json["cropDetails"]["type"], "Oilseed");
    }

    #[tokio::test]
    async fn roi_endpoint_reads_query_flags() {
        let (status, body) = send(get("/api/roi?drip=true&mulch=true")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["cost"], serde_json::json!(25_000.0));
        assert_eq!(body["profit"], serde_json::json!(55_000.0));
    }

    #[tokio::test]
    async fn market_prices_endpoint_serves_bundled_quotes() {
        let (status, json) = send(get("/api/market-prices?commodity=Rice%20(Paddy)")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["commodity"], "Rice");
        assert_eq!(json["prices"][0]["market"], "Pune APMC");
        assert_eq!(json["prices"][0]["modalPrice"], 3_100);
        assert_eq!(json["prices"][1]["trend"], "stable");
    }

    #[tokio::test]
    async fn short_forecast_returns_null_window() {
        let body = r#"{"forecast": [{"day": "Mon", "rainMm": 5, "tempMax": 30, "tempMin": 20}]}"#;
        let (status, json) = send(post_json("/api/sowing-window", body)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["window"], Value::Null);
    }

    #[tokio::test]
    async fn invalid_month_is_a_json_bad_request() {
        let body = r#"{"cropName": "Wheat", "waterBalance": 300, "monthStart": 0}"#;
        let (status, json) = send(post_json("/api/simulate-water", body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"], "monthStart must be between 1 and 12");
    }

    #[tokio::test]
    async fn unknown_route_is_json_not_found() {
        let (status, json) = send(get("/api/does-not-exist")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["error"], "Not found");
    }

    #[tokio::test]
    async fn suggestions_and_voice_endpoints_round_out_the_surface() {
        let (status, json) = send(get("/api/suggestions?query=nag")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["suggestions"][0]["name"], "Nagpur");

        let (status, json) = send(post_json(
            "/api/voice-command",
            r#"{"text": "Check soybean on red soil"}"#,
        ))
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["crop"], "Soybean");
        assert_eq!(json["soil"], "Red/Light Soil");
        assert_eq!(json["action"], "calculate");

        let (status, json) = send(get("/api/soil-status?moisturePercent=12.5")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["status"], "Dry");

        let (_, json) = send(get("/api/crops")).await;
        assert_eq!(json["crops"].as_array().map(Vec::len), Some(CROPS.len()));
        let (_, json) = send(get("/api/soils")).await;
        assert_eq!(json["soils"][0]["type"], "heavy");
    }
}
