pub mod appointments;
pub mod calendars;
pub mod children;
pub mod countries;
pub mod errors;
pub mod health_centers;
pub mod principal;
pub mod tutors;
pub mod vaccinations;
pub mod vaccine_lots;
pub mod vaccines;
