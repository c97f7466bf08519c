use axum::{
    Router,
    extract::{
        Json, Query,
        rejection::{JsonRejection, QueryRejection},
    },
    http::{StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::get,
};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use thiserror::Error;
use tokio::net::TcpListener;
use tracing::{debug, info, warn};

use crate::core::{ComparisonSummary, VehicleProfile, compare_vehicles};

const INDEX_HTML: &str = include_str!("../../web/index.html");
const STYLES_CSS: &str = include_str!("../../web/styles.css");
const APP_JS: &str = include_str!("../../web/app.js");

pub const MAX_VEHICLES: usize = 8;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProfileError {
    #[error("vehicle {index}: {field} must be a finite number")]
    NotFinite { index: usize, field: &'static str },
    #[error("vehicle {index}: {field} must be >= 0")]
    Negative { index: usize, field: &'static str },
    #[error("vehicle {index}: {field} must be > 0")]
    NotPositive { index: usize, field: &'static str },
    #[error("at most {max} vehicles can be compared at once, got {count}")]
    TooManyVehicles { count: usize, max: usize },
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct VehiclePayload {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub sales_tax_rate: Option<f64>,
    pub fees: Option<f64>,
    pub down_payment: Option<f64>,
    pub trade_in: Option<f64>,
    pub interest_rate: Option<f64>,
    pub loan_term_months: Option<u32>,
    pub miles_per_year: Option<f64>,
    pub mpg: Option<f64>,
    pub gas_price: Option<f64>,
    pub insurance_monthly: Option<f64>,
    pub maintenance_yearly: Option<f64>,
    pub ownership_years: Option<f64>,
}

impl VehiclePayload {
    fn apply_to(self, mut profile: VehicleProfile) -> VehicleProfile {
        if let Some(v) = self.name.filter(|n| !n.trim().is_empty()) {
            profile.name = v;
        }
        if let Some(v) = self.price {
            profile.price = v;
        }
        if let Some(v) = self.sales_tax_rate {
            profile.sales_tax_rate = v;
        }
        if let Some(v) = self.fees {
            profile.fees = v;
        }
        if let Some(v) = self.down_payment {
            profile.down_payment = v;
        }
        if let Some(v) = self.trade_in {
            profile.trade_in = v;
        }
        if let Some(v) = self.interest_rate {
            profile.interest_rate = v;
        }
        if let Some(v) = self.loan_term_months {
            profile.loan_term_months = v;
        }
        if let Some(v) = self.miles_per_year {
            profile.miles_per_year = v;
        }
        if let Some(v) = self.mpg {
            profile.mpg = v;
        }
        if let Some(v) = self.gas_price {
            profile.gas_price = v;
        }
        if let Some(v) = self.insurance_monthly {
            profile.insurance_monthly = v;
        }
        if let Some(v) = self.maintenance_yearly {
            profile.maintenance_yearly = v;
        }
        if let Some(v) = self.ownership_years {
            profile.ownership_years = v;
        }
        profile
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct ComparePayload {
    vehicles: Vec<VehiclePayload>,
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

pub fn build_profiles(payloads: Vec<VehiclePayload>) -> Result<Vec<VehicleProfile>, ProfileError> {
    if payloads.len() > MAX_VEHICLES {
        return Err(ProfileError::TooManyVehicles {
            count: payloads.len(),
            max: MAX_VEHICLES,
        });
    }

    if payloads.is_empty() {
        return Ok(VehicleProfile::default_pair());
    }

    payloads
        .into_iter()
        .enumerate()
        .map(|(index, payload)| {
            let profile = payload.apply_to(VehicleProfile::numbered_default(index));
            validate_profile(index, &profile)?;
            Ok(profile)
        })
        .collect()
}

pub fn validate_profile(index: usize, profile: &VehicleProfile) -> Result<(), ProfileError> {
    for (field, value) in [
        ("price", profile.price),
        ("salesTaxRate", profile.sales_tax_rate),
        ("fees", profile.fees),
        ("downPayment", profile.down_payment),
        ("tradeIn", profile.trade_in),
        ("interestRate", profile.interest_rate),
        ("milesPerYear", profile.miles_per_year),
        ("mpg", profile.mpg),
        ("gasPrice", profile.gas_price),
        ("insuranceMonthly", profile.insurance_monthly),
        ("maintenanceYearly", profile.maintenance_yearly),
        ("ownershipYears", profile.ownership_years),
    ] {
        if !value.is_finite() {
            return Err(ProfileError::NotFinite { index, field });
        }
        if value < 0.0 {
            return Err(ProfileError::Negative { index, field });
        }
    }

    if profile.loan_term_months == 0 {
        return Err(ProfileError::NotPositive {
            index,
            field: "loanTermMonths",
        });
    }
    if profile.mpg <= 0.0 {
        return Err(ProfileError::NotPositive { index, field: "mpg" });
    }
    if profile.ownership_years <= 0.0 {
        return Err(ProfileError::NotPositive {
            index,
            field: "ownershipYears",
        });
    }

    Ok(())
}

pub async fn run_http_server(port: u16) -> std::io::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let app = router();

    let listener = TcpListener::bind(addr).await?;
    info!(%addr, "vehicle cost API listening");
    info!("local access: http://127.0.0.1:{port}/");

    axum::serve(listener, app).await
}

fn router() -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/index.html", get(index_handler))
        .route("/styles.css", get(styles_handler))
        .route("/app.js", get(app_js_handler))
        .route(
            "/api/compare",
            get(compare_get_handler).post(compare_post_handler),
        )
        .fallback(not_found_handler)
}

async fn index_handler() -> impl IntoResponse {
    with_cache_control(Html(INDEX_HTML))
}

async fn styles_handler() -> impl IntoResponse {
    with_cache_control((
        [(header::CONTENT_TYPE, "text/css; charset=utf-8")],
        STYLES_CSS,
    ))
}

async fn app_js_handler() -> impl IntoResponse {
    with_cache_control((
        [(
            header::CONTENT_TYPE,
            "application/javascript; charset=utf-8",
        )],
        APP_JS,
    ))
}

async fn not_found_handler() -> Response {
    error_response(StatusCode::NOT_FOUND, "Not found")
}

async fn compare_get_handler(
    payload: Result<Query<VehiclePayload>, QueryRejection>,
) -> Response {
    match payload {
        Ok(Query(payload)) => compare_handler_impl(vec![payload]),
        Err(rejection) => malformed_request(&rejection.body_text()),
    }
}

async fn compare_post_handler(payload: Result<Json<ComparePayload>, JsonRejection>) -> Response {
    match payload {
        Ok(Json(payload)) => compare_handler_impl(payload.vehicles),
        Err(rejection) => malformed_request(&rejection.body_text()),
    }
}

fn malformed_request(msg: &str) -> Response {
    warn!(error = %msg, "malformed comparison request");
    error_response(StatusCode::BAD_REQUEST, msg)
}

fn compare_handler_impl(payloads: Vec<VehiclePayload>) -> Response {
    let profiles = match build_profiles(payloads) {
        Ok(profiles) => profiles,
        Err(err) => {
            warn!(error = %err, "rejected comparison request");
            return error_response(StatusCode::BAD_REQUEST, &err.to_string());
        }
    };

    let summary: ComparisonSummary = compare_vehicles(&profiles);
    debug!(
        vehicles = profiles.len(),
        cheapest = ?summary.cheapest_index,
        savings = summary.savings_vs_most_expensive,
        "computed comparison"
    );
    json_response(StatusCode::OK, summary)
}

fn with_cache_control<R: IntoResponse>(response: R) -> Response {
    let mut response = response.into_response();
    response.headers_mut().insert(
        header::CACHE_CONTROL,
        header::HeaderValue::from_static("no-store"),
    );
    response
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    with_cache_control((status, Json(body)))
}

fn error_response(status: StatusCode, msg: &str) -> Response {
    json_response(
        status,
        ErrorResponse {
            error: msg.to_string(),
        },
    )
}
