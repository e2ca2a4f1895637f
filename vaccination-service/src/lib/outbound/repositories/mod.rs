pub mod appointments;
pub mod calendars;
pub mod children;
pub mod countries;
pub mod credentials;
pub mod health_centers;
mod support;
pub mod tutors;
pub mod vaccinations;
pub mod vaccine_lots;
pub mod vaccines;

pub use appointments::PostgresAppointmentStore;
pub use calendars::PostgresCalendarStore;
pub use children::PostgresChildStore;
pub use countries::PostgresCountryStore;
pub use credentials::PostgresCredentialStore;
pub use health_centers::PostgresHealthCenterStore;
pub use tutors::PostgresTutorStore;
pub use vaccinations::PostgresVaccinationStore;
pub use vaccine_lots::PostgresVaccineLotStore;
pub use vaccines::PostgresVaccineStore;
