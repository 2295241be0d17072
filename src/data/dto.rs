use serde::Serialize;

use crate::data::repo::{DataPoint, GrowthPoint, ReportItem};
use crate::data::stats::{DashboardStats, ReportsStats};

/// Composite view behind GET /data/dashboard.
#[derive(Debug, Serialize)]
pub struct DashboardData {
    pub sales_data: Vec<DataPoint>,
    pub user_growth: Vec<GrowthPoint>,
    pub categories: Vec<DataPoint>,
    pub reports: Vec<ReportItem>,
    pub stats: DashboardStats,
}

/// Composite view behind GET /data/reports.
#[derive(Debug, Serialize)]
pub struct ReportsData {
    pub reports: Vec<ReportItem>,
    pub stats: ReportsStats,
}
