use std::sync::Arc;
use std::time::Duration;

use auth::Role;
use auth::TokenService;
use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::get;
use axum::routing::post;
use axum::routing::put;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::appointments;
use super::handlers::calendars;
use super::handlers::children;
use super::handlers::countries;
use super::handlers::health_centers;
use super::handlers::login;
use super::handlers::tutors;
use super::handlers::vaccinations;
use super::handlers::vaccine_lots;
use super::handlers::vaccines;
use super::middleware::authenticate;
use super::middleware::authorize;
use crate::domain::appointments::ports::AppointmentStore;
use crate::domain::calendars::ports::CalendarStore;
use crate::domain::children::ports::ChildStore;
use crate::domain::countries::ports::CountryStore;
use crate::domain::health_centers::ports::HealthCenterStore;
use crate::domain::principal::service::AccessService;
use crate::domain::tutors::ports::TutorStore;
use crate::domain::vaccinations::ports::VaccinationStore;
use crate::domain::vaccine_lots::ports::VaccineLotStore;
use crate::domain::vaccines::ports::VaccineStore;

/// Roles allowed to modify catalog data: countries, health centers,
/// vaccines, lots, and calendars.
const CATALOG_WRITERS: &[Role] = &[Role::Administrador, Role::Director];

/// Roles allowed to manage children, tutors, and appointments.
const CARE_WRITERS: &[Role] = &[Role::Administrador, Role::Director, Role::Doctor];

/// Roles allowed to record vaccination events.
const VACCINATORS: &[Role] = &[Role::Administrador, Role::Doctor];

#[derive(Clone)]
pub struct AppState {
    pub access: Arc<AccessService>,
    pub tokens: Arc<TokenService>,
    pub countries: Arc<dyn CountryStore>,
    pub health_centers: Arc<dyn HealthCenterStore>,
    pub vaccines: Arc<dyn VaccineStore>,
    pub vaccine_lots: Arc<dyn VaccineLotStore>,
    pub tutors: Arc<dyn TutorStore>,
    pub children: Arc<dyn ChildStore>,
    pub vaccinations: Arc<dyn VaccinationStore>,
    pub appointments: Arc<dyn AppointmentStore>,
    pub calendars: Arc<dyn CalendarStore>,
}

pub fn create_router(state: AppState) -> Router {
    let public_routes = Router::new().route("/api/auth/login", post(login::login));

    // Every protected route authenticates first; write routes then pass the
    // per-group role gate declared in their resource router.
    let protected_routes = Router::new()
        .nest("/api/countries", countries_routes())
        .nest("/api/health-centers", health_centers_routes())
        .nest("/api/vaccines", vaccines_routes())
        .nest("/api/vaccine-lots", vaccine_lots_routes())
        .nest("/api/tutors", tutors_routes())
        .nest("/api/children", children_routes())
        .nest("/api/vaccinations", vaccinations_routes())
        .nest("/api/appointments", appointments_routes())
        .nest("/api/calendars", calendars_routes())
        .route_layer(middleware::from_fn_with_state(state.clone(), authenticate));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}

fn countries_routes() -> Router<AppState> {
    let writes = Router::new()
        .route("/", post(countries::create_country))
        .route(
            "/:id",
            put(countries::update_country).delete(countries::delete_country),
        )
        .route_layer(middleware::from_fn(|req, next| {
            authorize(CATALOG_WRITERS, req, next)
        }));

    let reads = Router::new()
        .route("/", get(countries::list_countries))
        .route("/:id", get(countries::get_country));

    writes.merge(reads)
}

fn health_centers_routes() -> Router<AppState> {
    let writes = Router::new()
        .route("/", post(health_centers::create_health_center))
        .route(
            "/:id",
            put(health_centers::update_health_center).delete(health_centers::delete_health_center),
        )
        .route_layer(middleware::from_fn(|req, next| {
            authorize(CATALOG_WRITERS, req, next)
        }));

    let reads = Router::new()
        .route("/", get(health_centers::list_health_centers))
        .route("/:id", get(health_centers::get_health_center));

    writes.merge(reads)
}

fn vaccines_routes() -> Router<AppState> {
    let writes = Router::new()
        .route("/", post(vaccines::create_vaccine))
        .route(
            "/:id",
            put(vaccines::update_vaccine).delete(vaccines::delete_vaccine),
        )
        .route_layer(middleware::from_fn(|req, next| {
            authorize(CATALOG_WRITERS, req, next)
        }));

    let reads = Router::new()
        .route("/", get(vaccines::list_vaccines))
        .route("/:id", get(vaccines::get_vaccine));

    writes.merge(reads)
}

fn vaccine_lots_routes() -> Router<AppState> {
    let writes = Router::new()
        .route("/", post(vaccine_lots::create_vaccine_lot))
        .route(
            "/:id",
            put(vaccine_lots::update_vaccine_lot).delete(vaccine_lots::delete_vaccine_lot),
        )
        .route_layer(middleware::from_fn(|req, next| {
            authorize(CATALOG_WRITERS, req, next)
        }));

    let reads = Router::new()
        .route("/", get(vaccine_lots::list_vaccine_lots))
        .route("/:id", get(vaccine_lots::get_vaccine_lot));

    writes.merge(reads)
}

fn tutors_routes() -> Router<AppState> {
    let writes = Router::new()
        .route("/", post(tutors::create_tutor))
        .route(
            "/:id",
            put(tutors::update_tutor).delete(tutors::delete_tutor),
        )
        .route_layer(middleware::from_fn(|req, next| {
            authorize(CARE_WRITERS, req, next)
        }));

    let reads = Router::new()
        .route("/", get(tutors::list_tutors))
        .route("/:id", get(tutors::get_tutor));

    writes.merge(reads)
}

fn children_routes() -> Router<AppState> {
    let writes = Router::new()
        .route("/", post(children::create_child))
        .route(
            "/:id",
            put(children::update_child).delete(children::delete_child),
        )
        .route_layer(middleware::from_fn(|req, next| {
            authorize(CARE_WRITERS, req, next)
        }));

    let reads = Router::new()
        .route("/", get(children::list_children))
        .route("/:id", get(children::get_child));

    writes.merge(reads)
}

fn vaccinations_routes() -> Router<AppState> {
    let writes = Router::new()
        .route("/", post(vaccinations::create_vaccination))
        .route(
            "/:id",
            put(vaccinations::update_vaccination).delete(vaccinations::delete_vaccination),
        )
        .route_layer(middleware::from_fn(|req, next| {
            authorize(VACCINATORS, req, next)
        }));

    let reads = Router::new()
        .route("/", get(vaccinations::list_vaccinations))
        .route("/:id", get(vaccinations::get_vaccination));

    writes.merge(reads)
}

fn appointments_routes() -> Router<AppState> {
    let writes = Router::new()
        .route("/", post(appointments::create_appointment))
        .route(
            "/:id",
            put(appointments::update_appointment).delete(appointments::delete_appointment),
        )
        .route_layer(middleware::from_fn(|req, next| {
            authorize(CARE_WRITERS, req, next)
        }));

    let reads = Router::new()
        .route("/", get(appointments::list_appointments))
        .route("/:id", get(appointments::get_appointment));

    writes.merge(reads)
}

fn calendars_routes() -> Router<AppState> {
    let writes = Router::new()
        .route("/", post(calendars::create_calendar_entry))
        .route(
            "/:id",
            put(calendars::update_calendar_entry).delete(calendars::delete_calendar_entry),
        )
        .route_layer(middleware::from_fn(|req, next| {
            authorize(CATALOG_WRITERS, req, next)
        }));

    let reads = Router::new()
        .route("/", get(calendars::list_calendar_entries))
        .route("/:id", get(calendars::get_calendar_entry));

    writes.merge(reads)
}
