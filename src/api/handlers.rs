use crate::service::SalesAggregator;
use axum::{
    extract::{Json, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use std::sync::Arc;

/// 错误响应体
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// 健康检查
pub async fn health_check() -> &'static str {
    "OK"
}

/// 销售汇总报表接口
/// 每次请求重新读取账本快照并从头聚合, 无缓存
pub async fn sales_data(State(aggregator): State<Arc<SalesAggregator>>) -> Response {
    match aggregator.generate_report().await {
        Ok(report) => (StatusCode::OK, Json(report)).into_response(),
        Err(e) => {
            tracing::error!("Error reading the ledger file: {}", e);
            let response = ErrorResponse {
                error: "Failed to read data file".to_string(),
            };
            (StatusCode::INTERNAL_SERVER_ERROR, Json(response)).into_response()
        }
    }
}
