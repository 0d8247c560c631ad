//! API handlers for the creative compliance server
//!
//! Provides REST endpoints for:
//! - Compliance checking
//! - Rule listing
//! - Canvas format listing

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::Serialize;
use tracing::info;

use crate::error::ServerError;
use crate::AppState;

use compliance_engine::{CanvasFormat, ComplianceReport, ComplianceRequest, RuleName};

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
}

/// Handler: GET /health
pub async fn handle_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: "creative-server",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Rule list response
#[derive(Serialize)]
pub struct RuleListResponse {
    pub success: bool,
    pub rules: Vec<&'static str>,
    pub count: usize,
}

/// Handler: GET /api/rules
///
/// The names are stable; clients derive passed checks by excluding the
/// rules listed in a report's violations and warnings.
pub async fn handle_list_rules() -> Json<RuleListResponse> {
    let rules: Vec<&'static str> = RuleName::ALL.iter().map(|r| r.as_str()).collect();
    let count = rules.len();

    Json(RuleListResponse {
        success: true,
        rules,
        count,
    })
}

/// Format list response
#[derive(Serialize)]
pub struct FormatListResponse {
    pub success: bool,
    pub formats: Vec<FormatInfo>,
}

/// Canvas format metadata
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormatInfo {
    pub format: &'static str,
    pub label: &'static str,
    pub width: u32,
    pub height: u32,
    pub safe_zone_top: Option<u32>,
    pub safe_zone_bottom: Option<u32>,
}

/// Handler: GET /api/formats
pub async fn handle_list_formats() -> Json<FormatListResponse> {
    let formats = CanvasFormat::ALL
        .iter()
        .map(|format| {
            let (width, height) = format.dimensions();
            let zone = format.safe_zone();
            FormatInfo {
                format: format.tag(),
                label: format.label(),
                width,
                height,
                safe_zone_top: zone.map(|z| z.top),
                safe_zone_bottom: zone.map(|z| z.bottom),
            }
        })
        .collect();

    Json(FormatListResponse {
        success: true,
        formats,
    })
}

/// Handler: POST /api/check-compliance
pub async fn handle_check_compliance(
    State(state): State<AppState>,
    payload: Result<Json<ComplianceRequest>, JsonRejection>,
) -> Result<Json<ComplianceReport>, ServerError> {
    let Json(req) = payload?;

    info!(
        "Compliance check: format={}, objects={}, screenshot={}",
        req.canvas_data.format.tag(),
        req.canvas_data.objects.len(),
        req.screenshot.is_some()
    );

    req.validate()?;

    let report = state.engine.run_compliance_checks(&req).await;

    Ok(Json(report))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_health_endpoint() {
        let response = handle_health().await;
        assert_eq!(response.status, "healthy");
        assert_eq!(response.service, "creative-server");
    }

    #[tokio::test]
    async fn test_list_rules() {
        let response = handle_list_rules().await;
        assert!(response.success);
        assert_eq!(response.count, 10);
        assert!(response.rules.contains(&"Drinkaware Lock-up"));
    }

    #[tokio::test]
    async fn test_list_formats() {
        let response = handle_list_formats().await;
        let story = response
            .formats
            .iter()
            .find(|f| f.format == "9:16")
            .unwrap();
        assert_eq!(story.height, 1920);
        assert_eq!(story.safe_zone_top, Some(200));
        assert_eq!(story.safe_zone_bottom, Some(250));
    }
}
