use axum::{routing::get, Router};
use sales_insight_rust::{api, AppConfig, FileLedgerSource, SalesAggregator};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tracing::info;
use tracing_subscriber::fmt::time::ChronoLocal;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 初始化日志 - 使用本地时间格式
    tracing_subscriber::fmt()
        .with_timer(ChronoLocal::new("%Y-%m-%d %H:%M:%S".to_string()))
        .with_target(true)
        .with_level(true)
        .init();

    // 加载配置
    let config = AppConfig::from_env();
    info!("Starting server with config: {:?}", config);

    // 账本数据源 + 聚合服务 (无状态, 可被并发请求共享)
    let source = FileLedgerSource::new(&config.ledger.path);
    let aggregator = Arc::new(SalesAggregator::new(source));
    info!("Ledger file: {}", config.ledger.path);

    // API 路由
    let api_routes = Router::new()
        .route("/api/sales-data", get(api::sales_data))
        .with_state(aggregator);

    // 静态页面: 未命中 API 的请求回落到前端构建产物, 兜底 index.html
    let index_path = format!("{}/index.html", config.server.static_dir);
    let static_files =
        ServeDir::new(&config.server.static_dir).not_found_service(ServeFile::new(index_path));

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // 合并路由
    let app = Router::new()
        .route("/health", get(api::health_check))
        .merge(api_routes)
        .fallback_service(static_files)
        .layer(ServiceBuilder::new().layer(cors));

    // 启动服务器
    let addr = format!("{}:{}", config.server.host, config.server.port);
    info!("Server listening on {}", addr);
    info!("API Endpoints:");
    info!("  GET /api/sales-data - 销售汇总报表");
    info!("  GET /health         - 健康检查");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
