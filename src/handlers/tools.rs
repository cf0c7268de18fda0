//! JSON wrappers around the calculator formulas. No quota applies here.

use axum::Json;
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::extract::JsonBody;
use crate::tools::{
    age::{self, AgeBreakdown},
    bmi::{self, Bmi},
    color::{self, ColorInput, ColorSet},
    emi::{self, EmiInput, EmiResult},
    hash::{self, HashAlgorithm},
    password::{self, GeneratedPassword, PasswordOptions},
    percentage::{self, PercentageQuery, PercentageResult},
    text::{self, Case, TextStats},
    units::{self, Conversion, ConversionRequest},
};

#[derive(Deserialize)]
pub struct AgeRequest {
    pub birth_date: NaiveDate,
    /// Defaults to today (UTC).
    #[serde(default)]
    pub on: Option<NaiveDate>,
}

#[derive(Deserialize)]
pub struct BmiRequest {
    pub weight_kg: f64,
    pub height_cm: f64,
}

#[derive(Deserialize)]
pub struct HashRequest {
    pub text: String,
    #[serde(default)]
    pub algorithm: HashAlgorithm,
}

#[derive(Serialize)]
pub struct HashResponse {
    pub algorithm: HashAlgorithm,
    pub digest: String,
}

#[derive(Deserialize)]
pub struct TextRequest {
    pub text: String,
}

#[derive(Deserialize)]
pub struct CaseRequest {
    pub text: String,
    pub case: Case,
}

#[derive(Serialize)]
pub struct CaseResponse {
    pub text: String,
}

pub async fn age_handler(JsonBody(req): JsonBody<AgeRequest>) -> Result<Json<AgeBreakdown>, AppError> {
    let on = req.on.unwrap_or_else(|| Utc::now().date_naive());
    Ok(Json(age::age(req.birth_date, on)?))
}

pub async fn bmi_handler(JsonBody(req): JsonBody<BmiRequest>) -> Result<Json<Bmi>, AppError> {
    Ok(Json(bmi::bmi(req.weight_kg, req.height_cm)?))
}

pub async fn color_handler(JsonBody(input): JsonBody<ColorInput>) -> Result<Json<ColorSet>, AppError> {
    Ok(Json(color::convert(&input)?))
}

pub async fn emi_handler(JsonBody(input): JsonBody<EmiInput>) -> Result<Json<EmiResult>, AppError> {
    Ok(Json(emi::calculate(&input)?))
}

pub async fn hash_handler(JsonBody(req): JsonBody<HashRequest>) -> Json<HashResponse> {
    Json(HashResponse {
        algorithm: req.algorithm,
        digest: hash::digest_hex(&req.text, req.algorithm),
    })
}

pub async fn percentage_handler(
    JsonBody(query): JsonBody<PercentageQuery>,
) -> Result<Json<PercentageResult>, AppError> {
    Ok(Json(percentage::evaluate(query)?))
}

pub async fn password_handler(
    JsonBody(options): JsonBody<PasswordOptions>,
) -> Result<Json<GeneratedPassword>, AppError> {
    let generated = password::generate(&options, &mut rand::rng())?;
    Ok(Json(generated))
}

pub async fn text_stats_handler(JsonBody(req): JsonBody<TextRequest>) -> Json<TextStats> {
    Json(text::stats(&req.text))
}

pub async fn text_case_handler(JsonBody(req): JsonBody<CaseRequest>) -> Json<CaseResponse> {
    Json(CaseResponse {
        text: text::convert_case(&req.text, req.case),
    })
}

pub async fn units_handler(JsonBody(req): JsonBody<ConversionRequest>) -> Result<Json<Conversion>, AppError> {
    Ok(Json(units::convert(req.value, &req.from, &req.to)?))
}
