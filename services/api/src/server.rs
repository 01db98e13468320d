use crate::cli::ServeArgs;
use crate::infra::{AppState, InMemoryAssessmentRepository};
use crate::routes::with_assessment_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use energy_profile::assessment::{AssessmentService, QuestionBank};
use energy_profile::config::AppConfig;
use energy_profile::error::AppError;
use energy_profile::telemetry;
use std::sync::atomic::{AtomicBool, Ordering};
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

    let bank = QuestionBank::load()?;
    info!(
        questions = bank.all_questions(true).len(),
        "question bank integrity verified"
    );

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let repository = Arc::new(InMemoryAssessmentRepository::default());
    let assessment_service = Arc::new(AssessmentService::new(repository, config.assessment));

    let app = with_assessment_routes(assessment_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        require_complete = config.assessment.require_complete,
        "energy profile service ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
