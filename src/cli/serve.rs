use crate::cli::ServeArgs;
use crate::config::Config;
use crate::pipeline::Pipeline;
use crate::ranking::RankedEntry;
use axum::{extract::State, routing::get, Json, Router};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

pub async fn execute(args: ServeArgs) -> anyhow::Result<()> {
    info!("Loading config from {:?}", args.config);
    let config = Config::load_or_default(&args.config)?;
    config.validate()?;

    let pipeline = Arc::new(Pipeline::new(config)?);

    let app = Router::new()
        .route("/api/rankings", get(rankings))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(pipeline);

    info!("Listening on http://{}", args.bind);
    let listener = tokio::net::TcpListener::bind(args.bind).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Presentation glue only: one pipeline run per request, always 200 with a
/// JSON array. Failures upstream already degraded to fallback content.
async fn rankings(State(pipeline): State<Arc<Pipeline>>) -> Json<Vec<RankedEntry>> {
    let snapshot = pipeline.run().await;
    Json(snapshot.entries)
}
