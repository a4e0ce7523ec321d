mod args;
mod report;

use axum::{
    Router,
    extract::{Json, Query},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use tokio::net::TcpListener;

pub use args::{
    Cli, CliDeductionTier, CliPropertyKind, Command, LifeArgs, LoanArgs, LoanTermsArgs,
    PurchaseArgs, RentArgs, build_life_input, build_loan_input, build_purchase_input,
    build_rent_input,
};
use args::{
    default_life_args, default_loan_args, default_purchase_args, default_rent_args,
};
pub use report::{life_report, loan_report, purchase_report, rent_report};

use crate::core::{
    ChildInfo, LifeInput, LifeResult, LoanInput, LoanResult, PurchaseInput, PurchaseResult,
    RentInput, RentResult, run_life_simulation, run_loan_simulation, run_purchase_simulation,
    run_rent_simulation,
};
use crate::format::{LifeDisplay, LoanDisplay, PurchaseDisplay, RentDisplay};

#[derive(Copy, Clone, Debug, Eq, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case")]
enum ApiDeductionTier {
    #[serde(alias = "certified")]
    Certificated,
    #[serde(alias = "ZEH")]
    Zeh,
    Eco,
    #[serde(alias = "general")]
    Other,
}

impl From<ApiDeductionTier> for CliDeductionTier {
    fn from(value: ApiDeductionTier) -> Self {
        match value {
            ApiDeductionTier::Certificated => CliDeductionTier::Certificated,
            ApiDeductionTier::Zeh => CliDeductionTier::Zeh,
            ApiDeductionTier::Eco => CliDeductionTier::Eco,
            ApiDeductionTier::Other => CliDeductionTier::Other,
        }
    }
}

/// Form fields arrive either as JSON numbers or as the raw input text.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
enum AmountValue {
    Number(f64),
    Text(String),
}

#[derive(Debug, Default)]
struct LoanTermsPayload {
    age: Option<f64>,
    loan_years: Option<u32>,
    loan_price: Option<f64>,
    interest_rate: Option<f64>,
    bonus_price: Option<f64>,
    salary: Option<f64>,
    is_tax_deduction: Option<bool>,
    is_child_future_aid: Option<bool>,
    deduction_tier: Option<ApiDeductionTier>,
}

// Loan fields are repeated rather than flattened: query strings only carry
// text, which flattened numeric fields cannot parse.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct LoanPayload {
    age: Option<f64>,
    loan_years: Option<u32>,
    loan_price: Option<f64>,
    interest_rate: Option<f64>,
    bonus_price: Option<f64>,
    salary: Option<f64>,
    is_tax_deduction: Option<bool>,
    is_child_future_aid: Option<bool>,
    deduction_tier: Option<ApiDeductionTier>,
    other_fee: Option<f64>,
}

impl LoanPayload {
    fn terms(&self) -> LoanTermsPayload {
        LoanTermsPayload {
            age: self.age,
            loan_years: self.loan_years,
            loan_price: self.loan_price,
            interest_rate: self.interest_rate,
            bonus_price: self.bonus_price,
            salary: self.salary,
            is_tax_deduction: self.is_tax_deduction,
            is_child_future_aid: self.is_child_future_aid,
            deduction_tier: self.deduction_tier,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct PurchasePayload {
    age: Option<f64>,
    loan_years: Option<u32>,
    loan_price: Option<f64>,
    interest_rate: Option<f64>,
    bonus_price: Option<f64>,
    salary: Option<f64>,
    is_tax_deduction: Option<bool>,
    is_child_future_aid: Option<bool>,
    deduction_tier: Option<ApiDeductionTier>,
    house_price: Option<f64>,
    is_apartment: Option<bool>,
    management_fee: Option<f64>,
    maintenance_cost: Option<f64>,
}

impl PurchasePayload {
    fn terms(&self) -> LoanTermsPayload {
        LoanTermsPayload {
            age: self.age,
            loan_years: self.loan_years,
            loan_price: self.loan_price,
            interest_rate: self.interest_rate,
            bonus_price: self.bonus_price,
            salary: self.salary,
            is_tax_deduction: self.is_tax_deduction,
            is_child_future_aid: self.is_child_future_aid,
            deduction_tier: self.deduction_tier,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct RentPayload {
    age: Option<f64>,
    rent_price: Option<f64>,
    condo_fee: Option<f64>,
    renewal_fee: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct ChildPayload {
    is_private_school: bool,
    lessons_cost: Option<AmountValue>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct LifePayload {
    monthly_rent_price: Option<f64>,
    age: Option<f64>,
    salary: Option<f64>,
    is_working_partner: Option<bool>,
    partner_salary: Option<f64>,
    partner_age: Option<f64>,
    living_expenses: Option<f64>,
    utilities_cost: Option<f64>,
    insurance: Option<f64>,
    hobby_cost: Option<f64>,
    entertainment_cost: Option<f64>,
    other_cost: Option<f64>,
    saving_cost: Option<f64>,
    saving_cost_rate: Option<f64>,
    children: Option<Vec<ChildPayload>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct LoanResponse {
    #[serde(flatten)]
    result: LoanResult,
    display: LoanDisplay,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PurchaseResponse {
    #[serde(flatten)]
    result: PurchaseResult,
    display: PurchaseDisplay,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RentResponse {
    #[serde(flatten)]
    result: RentResult,
    display: RentDisplay,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct LifeResponse {
    #[serde(flatten)]
    result: LifeResult,
    monthly_balance: f64,
    display: LifeDisplay,
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
}

pub async fn run_http_server(port: u16) -> std::io::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = TcpListener::bind(addr).await?;
    tracing::info!("homesim HTTP API listening on http://{addr}");
    tracing::info!("Local access: http://127.0.0.1:{port}/api/loan");

    axum::serve(listener, router()).await
}

fn router() -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/api/loan", get(loan_get_handler).post(loan_post_handler))
        .route(
            "/api/purchase",
            get(purchase_get_handler).post(purchase_post_handler),
        )
        .route("/api/rent", get(rent_get_handler).post(rent_post_handler))
        .route("/api/life", get(life_get_handler).post(life_post_handler))
        .fallback(not_found_handler)
}

async fn health_handler() -> Response {
    json_response(StatusCode::OK, HealthResponse { status: "ok" })
}

async fn not_found_handler() -> Response {
    error_response(StatusCode::NOT_FOUND, "Not found")
}

async fn loan_get_handler(Query(payload): Query<LoanPayload>) -> Response {
    loan_handler_impl(payload)
}

async fn loan_post_handler(Json(payload): Json<LoanPayload>) -> Response {
    loan_handler_impl(payload)
}

async fn purchase_get_handler(Query(payload): Query<PurchasePayload>) -> Response {
    purchase_handler_impl(payload)
}

async fn purchase_post_handler(Json(payload): Json<PurchasePayload>) -> Response {
    purchase_handler_impl(payload)
}

async fn rent_get_handler(Query(payload): Query<RentPayload>) -> Response {
    rent_handler_impl(payload)
}

async fn rent_post_handler(Json(payload): Json<RentPayload>) -> Response {
    rent_handler_impl(payload)
}

async fn life_get_handler(Query(payload): Query<LifePayload>) -> Response {
    life_handler_impl(payload)
}

async fn life_post_handler(Json(payload): Json<LifePayload>) -> Response {
    life_handler_impl(payload)
}

fn loan_handler_impl(payload: LoanPayload) -> Response {
    tracing::debug!(?payload, "loan request");
    respond(loan_input_from_payload(payload).map(|input| build_loan_response(&input)))
}

fn purchase_handler_impl(payload: PurchasePayload) -> Response {
    tracing::debug!(?payload, "purchase request");
    respond(purchase_input_from_payload(payload).map(|input| build_purchase_response(&input)))
}

fn rent_handler_impl(payload: RentPayload) -> Response {
    tracing::debug!(?payload, "rent request");
    respond(rent_input_from_payload(payload).map(|input| build_rent_response(&input)))
}

fn life_handler_impl(payload: LifePayload) -> Response {
    tracing::debug!(?payload, "life request");
    respond(life_input_from_payload(payload).map(|input| build_life_response(&input)))
}

fn respond<T: Serialize>(outcome: Result<T, String>) -> Response {
    match outcome {
        Ok(body) => json_response(StatusCode::OK, body),
        Err(msg) => {
            tracing::warn!("rejected request: {msg}");
            error_response(StatusCode::BAD_REQUEST, &msg)
        }
    }
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

fn build_loan_response(input: &LoanInput) -> LoanResponse {
    let result = run_loan_simulation(input);
    LoanResponse {
        display: LoanDisplay::from(&result),
        result,
    }
}

fn build_purchase_response(input: &PurchaseInput) -> PurchaseResponse {
    let result = run_purchase_simulation(input);
    PurchaseResponse {
        display: PurchaseDisplay::from(&result),
        result,
    }
}

fn build_rent_response(input: &RentInput) -> RentResponse {
    let result = run_rent_simulation(input);
    RentResponse {
        display: RentDisplay::from(&result),
        result,
    }
}

fn build_life_response(input: &LifeInput) -> LifeResponse {
    let result = run_life_simulation(input);
    LifeResponse {
        monthly_balance: result.monthly_balance(),
        display: LifeDisplay::from(&result),
        result,
    }
}

fn apply_loan_terms(terms: &mut LoanTermsArgs, payload: LoanTermsPayload) {
    if let Some(v) = payload.age {
        terms.age = v;
    }
    if let Some(v) = payload.loan_years {
        terms.loan_years = v;
    }
    if let Some(v) = payload.loan_price {
        terms.loan_price = v;
    }
    if let Some(v) = payload.interest_rate {
        terms.interest_rate = v;
    }
    if let Some(v) = payload.bonus_price {
        terms.bonus_price = v;
    }
    if let Some(v) = payload.salary {
        terms.salary = v;
    }
    if let Some(v) = payload.is_tax_deduction {
        terms.tax_deduction = v;
    }
    if let Some(v) = payload.is_child_future_aid {
        terms.child_future_aid = v;
    }
    if let Some(v) = payload.deduction_tier {
        terms.deduction_tier = v.into();
    }
}

fn loan_input_from_payload(payload: LoanPayload) -> Result<LoanInput, String> {
    let mut args = default_loan_args();
    apply_loan_terms(&mut args.terms, payload.terms());
    if let Some(v) = payload.other_fee {
        args.other_fee = v;
    }
    build_loan_input(args)
}

fn purchase_input_from_payload(payload: PurchasePayload) -> Result<PurchaseInput, String> {
    let mut args = default_purchase_args();
    apply_loan_terms(&mut args.terms, payload.terms());
    if let Some(v) = payload.house_price {
        args.house_price = v;
    }
    if let Some(v) = payload.is_apartment {
        args.property = if v {
            CliPropertyKind::Apartment
        } else {
            CliPropertyKind::DetachedHouse
        };
    }
    if let Some(v) = payload.management_fee {
        args.management_fee = v;
    }
    if let Some(v) = payload.maintenance_cost {
        args.maintenance_cost = v;
    }
    build_purchase_input(args)
}

fn rent_input_from_payload(payload: RentPayload) -> Result<RentInput, String> {
    let mut args = default_rent_args();
    if let Some(v) = payload.age {
        args.age = v;
    }
    if let Some(v) = payload.rent_price {
        args.rent_price = v;
    }
    if let Some(v) = payload.condo_fee {
        args.condo_fee = v;
    }
    if let Some(v) = payload.renewal_fee {
        args.renewal_fee = Some(v);
    }
    build_rent_input(args)
}

fn child_from_payload(payload: ChildPayload) -> Result<ChildInfo, String> {
    match payload.lessons_cost {
        None => Ok(ChildInfo {
            is_private_school: payload.is_private_school,
            lessons_cost: 0.0,
        }),
        Some(AmountValue::Number(lessons_cost)) => Ok(ChildInfo {
            is_private_school: payload.is_private_school,
            lessons_cost,
        }),
        Some(AmountValue::Text(raw)) => {
            ChildInfo::from_form(payload.is_private_school, &raw).map_err(|e| e.to_string())
        }
    }
}

fn life_input_from_payload(payload: LifePayload) -> Result<LifeInput, String> {
    let mut args = default_life_args();
    if let Some(v) = payload.monthly_rent_price {
        args.monthly_rent_price = v;
    }
    if let Some(v) = payload.age {
        args.age = v;
    }
    if let Some(v) = payload.salary {
        args.salary = v;
    }
    if let Some(v) = payload.is_working_partner {
        args.working_partner = v;
    }
    if let Some(v) = payload.partner_salary {
        args.partner_salary = v;
    }
    if let Some(v) = payload.partner_age {
        args.partner_age = v;
    }
    if let Some(v) = payload.living_expenses {
        args.living_expenses = v;
    }
    if let Some(v) = payload.utilities_cost {
        args.utilities_cost = v;
    }
    if let Some(v) = payload.insurance {
        args.insurance = v;
    }
    if let Some(v) = payload.hobby_cost {
        args.hobby_cost = v;
    }
    if let Some(v) = payload.entertainment_cost {
        args.entertainment_cost = v;
    }
    if let Some(v) = payload.other_cost {
        args.other_cost = v;
    }
    if let Some(v) = payload.saving_cost {
        args.saving_cost = v;
    }
    if let Some(v) = payload.saving_cost_rate {
        args.saving_cost_rate = v;
    }
    if let Some(children) = payload.children {
        args.children = children
            .into_iter()
            .map(child_from_payload)
            .collect::<Result<Vec<_>, _>>()?;
    }
    build_life_input(args)
}

#[cfg(test)]
fn parse_payload<T: serde::de::DeserializeOwned>(json: &str) -> Result<T, String> {
    serde_json::from_str::<T>(json).map_err(|e| format!("Invalid API JSON payload: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{DeductionTier, Property};
    use axum::body::{Body, to_bytes};
    use axum::http::Request;
    use tower::ServiceExt;

    const EPS: f64 = 1e-6;

    fn assert_approx(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() <= EPS,
            "expected {expected}, got {actual}"
        );
    }

    fn loan_request_from_json(json: &str) -> Result<LoanInput, String> {
        loan_input_from_payload(parse_payload(json)?)
    }

    fn purchase_request_from_json(json: &str) -> Result<PurchaseInput, String> {
        purchase_input_from_payload(parse_payload(json)?)
    }

    fn rent_request_from_json(json: &str) -> Result<RentInput, String> {
        rent_input_from_payload(parse_payload(json)?)
    }

    fn life_request_from_json(json: &str) -> Result<LifeInput, String> {
        life_input_from_payload(parse_payload(json)?)
    }

    async fn call(request: Request<Body>) -> (StatusCode, serde_json::Value) {
        let response = router().oneshot(request).await.expect("router is infallible");
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body should be readable");
        let value = serde_json::from_slice(&bytes).expect("body should be JSON");
        (status, value)
    }

    #[test]
    fn loan_request_from_json_parses_web_keys() {
        let json = r#"{
          "age": 35,
          "loanYears": 30,
          "loanPrice": 4000,
          "interestRate": 0.8,
          "bonusPrice": 10,
          "otherFee": 15000,
          "salary": 700,
          "isTaxDeduction": false,
          "isChildFutureAid": true,
          "deductionTier": "certificated"
        }"#;
        let input = loan_request_from_json(json).expect("json should parse");

        assert_approx(input.age, 35.0);
        assert_eq!(input.loan_years, 30);
        assert_approx(input.loan_price, 4000.0);
        assert_approx(input.interest_rate, 0.8);
        assert_approx(input.bonus_price, 10.0);
        assert_approx(input.other_fee, 15_000.0);
        assert_approx(input.salary, 700.0);
        assert!(!input.is_tax_deduction);
        assert!(input.is_child_future_aid);
        assert_eq!(input.deduction_tier, DeductionTier::Certificated);
    }

    #[test]
    fn loan_request_uses_form_defaults() {
        let input = loan_request_from_json("{}").expect("empty payload is valid");

        assert_approx(input.age, 30.0);
        assert_eq!(input.loan_years, 35);
        assert_approx(input.loan_price, 3000.0);
        assert_approx(input.other_fee, 20_000.0);
        assert!(input.is_tax_deduction);
        assert!(!input.is_child_future_aid);
        assert_eq!(input.deduction_tier, DeductionTier::Zeh);
    }

    #[test]
    fn loan_request_rejects_zero_term_and_unknown_tier() {
        let err = loan_request_from_json(r#"{"loanYears": 0}"#).expect_err("must reject");
        assert!(err.contains("loanYears"));

        let err =
            loan_request_from_json(r#"{"deductionTier": "gold"}"#).expect_err("must reject");
        assert!(err.contains("Invalid API JSON payload"));
    }

    #[test]
    fn purchase_request_selects_property_kind() {
        let input = purchase_request_from_json(
            r#"{"housePrice": 4500, "isApartment": false, "maintenanceCost": 800}"#,
        )
        .expect("json should parse");
        assert_approx(input.house_price, 4500.0);
        assert_eq!(
            input.property,
            Property::DetachedHouse {
                maintenance_cost: 800.0
            }
        );

        let input = purchase_request_from_json(r#"{"managementFee": 25000}"#)
            .expect("json should parse");
        assert_eq!(
            input.property,
            Property::Apartment {
                management_fee: 25_000.0
            }
        );
    }

    #[test]
    fn rent_request_keeps_explicit_renewal_fee() {
        let input = rent_request_from_json(r#"{"rentPrice": 80000, "renewalFee": 0}"#)
            .expect("json should parse");
        assert_approx(input.rent_price, 80_000.0);
        assert_approx(input.renewal_fee, 0.0);

        let input = rent_request_from_json(r#"{"rentPrice": 80000}"#).expect("json should parse");
        assert_approx(input.renewal_fee, 80_000.0);
    }

    #[test]
    fn life_request_accepts_numeric_and_text_lessons_cost() {
        let json = r#"{
          "isWorkingPartner": true,
          "partnerSalary": 300,
          "partnerAge": 28,
          "children": [
            {"isPrivateSchool": true, "lessonsCost": "12000"},
            {"isPrivateSchool": false, "lessonsCost": 5000},
            {}
          ]
        }"#;
        let input = life_request_from_json(json).expect("json should parse");

        assert_approx(input.partner_salary, 300.0);
        assert_approx(input.partner_age, 28.0);
        assert_eq!(input.children.len(), 3);
        assert!(input.children[0].is_private_school);
        assert_approx(input.children[0].lessons_cost, 12_000.0);
        assert_approx(input.children[1].lessons_cost, 5_000.0);
        assert!(!input.children[2].is_private_school);
        assert_approx(input.children[2].lessons_cost, 0.0);
    }

    #[test]
    fn life_request_rejects_unparseable_lessons_cost() {
        let json = r#"{"children": [{"lessonsCost": "a lot"}]}"#;
        let err = life_request_from_json(json).expect_err("must reject text");
        assert!(err.contains("invalid amount"));
    }

    #[test]
    fn life_request_rejects_retired_age() {
        let err = life_request_from_json(r#"{"age": 70}"#).expect_err("must reject");
        assert!(err.contains("retirement age"));
    }

    #[test]
    fn loan_response_serialization_contains_expected_fields() {
        let input = loan_request_from_json(r#"{"isTaxDeduction": false}"#).expect("valid");
        let response = build_loan_response(&input);
        let json = serde_json::to_string(&response).expect("response should serialize");

        assert!(json.contains("\"monthlyReturningPrice\":84686.0"));
        assert!(json.contains("\"bonusMonthReturningPrice\""));
        assert!(json.contains("\"allLoanPlusDebtPrice\""));
        assert!(json.contains("\"allPayingCost\""));
        assert!(json.contains("\"display\""));
        assert!(json.contains("104,686円"));
    }

    #[test]
    fn life_response_includes_monthly_balance() {
        let input = life_request_from_json("{}").expect("valid");
        let response = build_life_response(&input);
        let value = serde_json::to_value(&response).expect("response should serialize");

        assert_eq!(value["monthlyBalance"], serde_json::json!(213_667.0));
        assert_eq!(value["monthlyIncome"], serde_json::json!(416_667.0));
        assert_eq!(value["display"]["allIncome"], "1.8 億円");
    }

    #[test]
    fn purchase_response_nests_loan_figures() {
        let input = purchase_request_from_json(r#"{"isTaxDeduction": false}"#).expect("valid");
        let response = build_purchase_response(&input);
        let value = serde_json::to_value(&response).expect("response should serialize");

        assert_eq!(value["loan"]["monthlyCost"], serde_json::json!(104_686.0));
        assert_eq!(value["initialCost"], serde_json::json!(210.0));
        assert_eq!(value["display"]["initialCost"], "210 万円");
    }

    #[tokio::test]
    async fn rent_endpoint_answers_get_queries() {
        let request = Request::builder()
            .uri("/api/rent?age=30&rentPrice=50000&condoFee=10000&renewalFee=50000")
            .body(Body::empty())
            .expect("valid request");
        let (status, body) = call(request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["monthlyCost"], serde_json::json!(60_000.0));
        assert_eq!(body["allPayingCost"], serde_json::json!(53_900_000.0));
    }

    #[tokio::test]
    async fn life_endpoint_answers_posts() {
        let request = Request::builder()
            .method("POST")
            .uri("/api/life")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(
                r#"{"monthlyRentPrice":0,"livingExpenses":0,"utilitiesCost":0,"insurance":0,
                    "hobbyCost":0,"entertainmentCost":0,"otherCost":0,"salary":0}"#,
            ))
            .expect("valid request");
        let (status, body) = call(request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["allSavingCost"].as_f64().map(f64::round), Some(12_726_000.0));
    }

    #[tokio::test]
    async fn invalid_input_returns_bad_request() {
        let request = Request::builder()
            .method("POST")
            .uri("/api/loan")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(r#"{"loanYears":0}"#))
            .expect("valid request");
        let (status, body) = call(request).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "loanYears must be > 0");
    }

    #[tokio::test]
    async fn unknown_route_is_not_found() {
        let request = Request::builder()
            .uri("/api/unknown")
            .body(Body::empty())
            .expect("valid request");
        let (status, body) = call(request).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Not found");
    }

    #[tokio::test]
    async fn health_reports_ok() {
        let request = Request::builder()
            .uri("/health")
            .body(Body::empty())
            .expect("valid request");
        let (status, body) = call(request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }
}
