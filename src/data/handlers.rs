use axum::{extract::State, routing::get, Json, Router};
use tracing::instrument;

use crate::auth::extractors::CurrentUser;
use crate::data::dto::{DashboardData, ReportsData};
use crate::data::repo::{self, DataPoint, GrowthPoint, ReportItem};
use crate::data::stats;
use crate::error::ApiError;
use crate::state::AppState;

pub fn data_routes() -> Router<AppState> {
    Router::new()
        .route("/data/dashboard", get(dashboard))
        .route("/data/reports", get(reports))
        .route("/data/sales", get(sales))
        .route("/data/users", get(users))
        .route("/data/categories", get(categories))
}

#[instrument(skip_all)]
pub async fn dashboard(
    State(state): State<AppState>,
    CurrentUser(_user): CurrentUser,
) -> Result<Json<DashboardData>, ApiError> {
    let sales_data = repo::list_sales(&state.db).await?;
    let user_growth = repo::list_user_growth(&state.db).await?;
    let categories = repo::list_categories(&state.db).await?;
    let reports = repo::list_reports(&state.db).await?;
    let stats = stats::dashboard_stats(&state.db).await?;

    Ok(Json(DashboardData {
        sales_data,
        user_growth,
        categories,
        reports,
        stats,
    }))
}

#[instrument(skip_all)]
pub async fn reports(
    State(state): State<AppState>,
    CurrentUser(_user): CurrentUser,
) -> Result<Json<ReportsData>, ApiError> {
    let reports = repo::list_reports(&state.db).await?;
    let stats = stats::reports_stats(&state.db).await?;

    Ok(Json(ReportsData { reports, stats }))
}

#[instrument(skip_all)]
pub async fn sales(
    State(state): State<AppState>,
    CurrentUser(_user): CurrentUser,
) -> Result<Json<Vec<DataPoint>>, ApiError> {
    Ok(Json(repo::list_sales(&state.db).await?))
}

#[instrument(skip_all)]
pub async fn users(
    State(state): State<AppState>,
    CurrentUser(_user): CurrentUser,
) -> Result<Json<Vec<GrowthPoint>>, ApiError> {
    Ok(Json(repo::list_user_growth(&state.db).await?))
}

#[instrument(skip_all)]
pub async fn categories(
    State(state): State<AppState>,
    CurrentUser(_user): CurrentUser,
) -> Result<Json<Vec<DataPoint>>, ApiError> {
    Ok(Json(repo::list_categories(&state.db).await?))
}
