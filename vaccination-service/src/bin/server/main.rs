use std::net::SocketAddr;
use std::sync::Arc;

use auth::TokenService;
use chrono::Duration;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use vaccination_service::config::Config;
use vaccination_service::domain::principal::service::AccessService;
use vaccination_service::inbound::http::router::create_router;
use vaccination_service::inbound::http::router::AppState;
use vaccination_service::outbound::repositories::PostgresAppointmentStore;
use vaccination_service::outbound::repositories::PostgresCalendarStore;
use vaccination_service::outbound::repositories::PostgresChildStore;
use vaccination_service::outbound::repositories::PostgresCountryStore;
use vaccination_service::outbound::repositories::PostgresCredentialStore;
use vaccination_service::outbound::repositories::PostgresHealthCenterStore;
use vaccination_service::outbound::repositories::PostgresTutorStore;
use vaccination_service::outbound::repositories::PostgresVaccinationStore;
use vaccination_service::outbound::repositories::PostgresVaccineLotStore;
use vaccination_service::outbound::repositories::PostgresVaccineStore;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "vaccination_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "vaccination-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    // A missing or empty jwt.secret fails here, before anything binds.
    let config = Config::load()?;

    tracing::info!(
        http_port = config.server.http_port,
        token_ttl_hours = config.jwt.expiration_hours,
        "Configuration loaded"
    );

    let pg_pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .connect(&config.database.url)
        .await?;
    tracing::info!(
        max_connections = config.database.max_connections,
        database = "postgresql",
        "Database connection pool created"
    );

    let tokens = Arc::new(TokenService::new(
        config.jwt.secret.as_bytes(),
        Duration::hours(config.jwt.expiration_hours),
    )?);

    let credentials = Arc::new(PostgresCredentialStore::new(pg_pool.clone()));
    let access = Arc::new(AccessService::new(credentials, Arc::clone(&tokens))?);

    let state = AppState {
        access,
        tokens,
        countries: Arc::new(PostgresCountryStore::new(pg_pool.clone())),
        health_centers: Arc::new(PostgresHealthCenterStore::new(pg_pool.clone())),
        vaccines: Arc::new(PostgresVaccineStore::new(pg_pool.clone())),
        vaccine_lots: Arc::new(PostgresVaccineLotStore::new(pg_pool.clone())),
        tutors: Arc::new(PostgresTutorStore::new(pg_pool.clone())),
        children: Arc::new(PostgresChildStore::new(pg_pool.clone())),
        vaccinations: Arc::new(PostgresVaccinationStore::new(pg_pool.clone())),
        appointments: Arc::new(PostgresAppointmentStore::new(pg_pool.clone())),
        calendars: Arc::new(PostgresCalendarStore::new(pg_pool)),
    };

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let application = create_router(state);
    axum::serve(
        listener,
        application.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
