use anyhow::Result;
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use trivia_api::application::{ports::util::SlugGenerator, services::ApplicationServices};
use trivia_api::config::AppConfig;
use trivia_api::domain::{
    answer::AnswerRepository, category::CategoryRepository, question::QuestionRepository,
};
use trivia_api::infrastructure::{
    database,
    repositories::{
        PostgresAnswerRepository, PostgresCategoryRepository, PostgresQuestionRepository,
    },
    util::DefaultSlugGenerator,
};
use trivia_api::presentation::http::{routes::build_router, state::HttpState};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    let pool =
        database::init_pool(config.database_url(), config.database_max_connections()).await?;
    database::run_migrations(&pool).await?;
    tracing::info!("database ready");

    let category_repo: Arc<dyn CategoryRepository> =
        Arc::new(PostgresCategoryRepository::new(pool.clone()));
    let question_repo: Arc<dyn QuestionRepository> =
        Arc::new(PostgresQuestionRepository::new(pool.clone()));
    let answer_repo: Arc<dyn AnswerRepository> =
        Arc::new(PostgresAnswerRepository::new(pool.clone()));
    let slugger: Arc<dyn SlugGenerator> = Arc::new(DefaultSlugGenerator);

    let services = Arc::new(ApplicationServices::new(
        category_repo,
        question_repo,
        answer_repo,
        slugger,
    ));

    let state = HttpState { services };

    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on http://{address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    tracing::info!("database pool closed");

    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

/// Resolves on Ctrl-C, or SIGTERM on unix. A handler that cannot be installed
/// is logged and never fires.
async fn shutdown_signal() {
    let interrupt = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "ctrl-c handler unavailable");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let sigterm = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "SIGTERM handler unavailable");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let sigterm = std::future::pending::<()>();

    tokio::select! {
        _ = interrupt => tracing::info!("interrupt received, draining connections"),
        _ = sigterm => tracing::info!("SIGTERM received, draining connections"),
    }
}
