use crate::cli::ServeArgs;
use crate::infra::{AppState, InMemorySessionSink};
use crate::routes::with_diagnosis_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use plant_diag::config::AppConfig;
use plant_diag::diagnosis::{DiagnosisEngine, DiagnosisService, KnowledgeBase};
use plant_diag::error::AppError;
use plant_diag::telemetry;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    // Reference data is loaded exactly once; a malformed override file is a
    // fatal startup error rather than a per-request one.
    let knowledge = match config.knowledge.override_paths()? {
        Some((problems, matrix)) => KnowledgeBase::load(problems, matrix)?,
        None => KnowledgeBase::builtin(),
    };
    let knowledge = Arc::new(knowledge);

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let sink = Arc::new(InMemorySessionSink::default());
    let service = Arc::new(DiagnosisService::new(
        DiagnosisEngine::new(knowledge.clone()),
        sink,
    ));

    let app = with_diagnosis_routes(service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        problems = knowledge.problems().len(),
        "plant diagnosis service ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
