//! In-memory implementations of the persistence ports.
//!
//! The real adapters are thin translations to stored procedures in an
//! external database; these stand-ins let the full HTTP stack run in tests
//! with no database, while still exercising the error contract (not-found,
//! constraint violations).

use std::collections::HashMap;
use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;
use std::sync::Mutex;

use async_trait::async_trait;
use uuid::Uuid;
use vaccination_service::domain::appointments::models::Appointment;
use vaccination_service::domain::appointments::models::AppointmentStatus;
use vaccination_service::domain::appointments::models::CreateAppointmentCommand;
use vaccination_service::domain::appointments::models::UpdateAppointmentCommand;
use vaccination_service::domain::appointments::ports::AppointmentStore;
use vaccination_service::domain::calendars::models::CalendarEntry;
use vaccination_service::domain::calendars::models::CreateCalendarEntryCommand;
use vaccination_service::domain::calendars::ports::CalendarStore;
use vaccination_service::domain::children::models::Child;
use vaccination_service::domain::children::models::CreateChildCommand;
use vaccination_service::domain::children::ports::ChildStore;
use vaccination_service::domain::countries::models::Country;
use vaccination_service::domain::countries::models::CreateCountryCommand;
use vaccination_service::domain::countries::ports::CountryStore;
use vaccination_service::domain::errors::StoreError;
use vaccination_service::domain::health_centers::models::CreateHealthCenterCommand;
use vaccination_service::domain::health_centers::models::HealthCenter;
use vaccination_service::domain::health_centers::ports::HealthCenterStore;
use vaccination_service::domain::principal::models::StoredCredential;
use vaccination_service::domain::principal::ports::CredentialStore;
use vaccination_service::domain::tutors::models::CreateTutorCommand;
use vaccination_service::domain::tutors::models::Tutor;
use vaccination_service::domain::tutors::ports::TutorStore;
use vaccination_service::domain::vaccinations::models::CreateVaccinationCommand;
use vaccination_service::domain::vaccinations::models::Vaccination;
use vaccination_service::domain::vaccinations::ports::VaccinationStore;
use vaccination_service::domain::vaccine_lots::models::CreateVaccineLotCommand;
use vaccination_service::domain::vaccine_lots::models::VaccineLot;
use vaccination_service::domain::vaccine_lots::ports::VaccineLotStore;
use vaccination_service::domain::vaccines::models::CreateVaccineCommand;
use vaccination_service::domain::vaccines::models::Vaccine;
use vaccination_service::domain::vaccines::ports::VaccineStore;

#[derive(Default)]
pub struct InMemoryCredentialStore {
    users: Mutex<HashMap<String, StoredCredential>>,
}

impl InMemoryCredentialStore {
    pub fn insert(&self, credential: StoredCredential) {
        self.users
            .lock()
            .unwrap()
            .insert(credential.username.clone(), credential);
    }
}

#[async_trait]
impl CredentialStore for InMemoryCredentialStore {
    async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<StoredCredential>, StoreError> {
        Ok(self.users.lock().unwrap().get(username).cloned())
    }
}

/// Country store with a call counter, so tests can assert that rejected
/// requests never reach the persistence layer. Mirrors the stored
/// procedure's uniqueness rule on `iso_code` as a constraint error.
#[derive(Default)]
pub struct InMemoryCountryStore {
    rows: Mutex<HashMap<Uuid, Country>>,
    pub calls: AtomicUsize,
}

#[async_trait]
impl CountryStore for InMemoryCountryStore {
    async fn create(&self, command: CreateCountryCommand) -> Result<Country, StoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let mut rows = self.rows.lock().unwrap();
        if rows.values().any(|c| c.iso_code == command.iso_code) {
            return Err(StoreError::Constraint(format!(
                "Country code {} is already registered",
                command.iso_code.as_str()
            )));
        }
        let country = Country {
            id: Uuid::new_v4(),
            name: command.name,
            iso_code: command.iso_code,
        };
        rows.insert(country.id, country.clone());
        Ok(country)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Country>, StoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.rows.lock().unwrap().get(&id).cloned())
    }

    async fn list(&self) -> Result<Vec<Country>, StoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.rows.lock().unwrap().values().cloned().collect())
    }

    async fn update(&self, id: Uuid, command: CreateCountryCommand) -> Result<Country, StoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let mut rows = self.rows.lock().unwrap();
        match rows.get_mut(&id) {
            Some(country) => {
                country.name = command.name;
                country.iso_code = command.iso_code;
                Ok(country.clone())
            }
            None => Err(StoreError::NotFound(format!("Country {id}"))),
        }
    }

    async fn delete(&self, id: Uuid) -> Result<(), StoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.rows
            .lock()
            .unwrap()
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| StoreError::NotFound(format!("Country {id}")))
    }
}

#[derive(Default)]
pub struct InMemoryHealthCenterStore {
    rows: Mutex<HashMap<Uuid, HealthCenter>>,
}

#[async_trait]
impl HealthCenterStore for InMemoryHealthCenterStore {
    async fn create(
        &self,
        command: CreateHealthCenterCommand,
    ) -> Result<HealthCenter, StoreError> {
        let center = HealthCenter {
            id: Uuid::new_v4(),
            name: command.name,
            address: command.address,
            country_id: command.country_id,
        };
        self.rows.lock().unwrap().insert(center.id, center.clone());
        Ok(center)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<HealthCenter>, StoreError> {
        Ok(self.rows.lock().unwrap().get(&id).cloned())
    }

    async fn list(&self) -> Result<Vec<HealthCenter>, StoreError> {
        Ok(self.rows.lock().unwrap().values().cloned().collect())
    }

    async fn update(
        &self,
        id: Uuid,
        command: CreateHealthCenterCommand,
    ) -> Result<HealthCenter, StoreError> {
        let mut rows = self.rows.lock().unwrap();
        match rows.get_mut(&id) {
            Some(center) => {
                center.name = command.name;
                center.address = command.address;
                center.country_id = command.country_id;
                Ok(center.clone())
            }
            None => Err(StoreError::NotFound(format!("Health center {id}"))),
        }
    }

    async fn delete(&self, id: Uuid) -> Result<(), StoreError> {
        self.rows
            .lock()
            .unwrap()
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| StoreError::NotFound(format!("Health center {id}")))
    }
}

#[derive(Default)]
pub struct InMemoryVaccineStore {
    rows: Mutex<HashMap<Uuid, Vaccine>>,
}

#[async_trait]
impl VaccineStore for InMemoryVaccineStore {
    async fn create(&self, command: CreateVaccineCommand) -> Result<Vaccine, StoreError> {
        let vaccine = Vaccine {
            id: Uuid::new_v4(),
            name: command.name,
            disease: command.disease,
            doses_required: command.doses_required,
        };
        self.rows.lock().unwrap().insert(vaccine.id, vaccine.clone());
        Ok(vaccine)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Vaccine>, StoreError> {
        Ok(self.rows.lock().unwrap().get(&id).cloned())
    }

    async fn list(&self) -> Result<Vec<Vaccine>, StoreError> {
        Ok(self.rows.lock().unwrap().values().cloned().collect())
    }

    async fn update(&self, id: Uuid, command: CreateVaccineCommand) -> Result<Vaccine, StoreError> {
        let mut rows = self.rows.lock().unwrap();
        match rows.get_mut(&id) {
            Some(vaccine) => {
                vaccine.name = command.name;
                vaccine.disease = command.disease;
                vaccine.doses_required = command.doses_required;
                Ok(vaccine.clone())
            }
            None => Err(StoreError::NotFound(format!("Vaccine {id}"))),
        }
    }

    async fn delete(&self, id: Uuid) -> Result<(), StoreError> {
        self.rows
            .lock()
            .unwrap()
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| StoreError::NotFound(format!("Vaccine {id}")))
    }
}

#[derive(Default)]
pub struct InMemoryVaccineLotStore {
    rows: Mutex<HashMap<Uuid, VaccineLot>>,
}

#[async_trait]
impl VaccineLotStore for InMemoryVaccineLotStore {
    async fn create(&self, command: CreateVaccineLotCommand) -> Result<VaccineLot, StoreError> {
        let lot = VaccineLot {
            id: Uuid::new_v4(),
            vaccine_id: command.vaccine_id,
            lot_number: command.lot_number,
            expiration_date: command.expiration_date,
            quantity: command.quantity,
        };
        self.rows.lock().unwrap().insert(lot.id, lot.clone());
        Ok(lot)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<VaccineLot>, StoreError> {
        Ok(self.rows.lock().unwrap().get(&id).cloned())
    }

    async fn list(&self) -> Result<Vec<VaccineLot>, StoreError> {
        Ok(self.rows.lock().unwrap().values().cloned().collect())
    }

    async fn update(
        &self,
        id: Uuid,
        command: CreateVaccineLotCommand,
    ) -> Result<VaccineLot, StoreError> {
        let mut rows = self.rows.lock().unwrap();
        match rows.get_mut(&id) {
            Some(lot) => {
                lot.vaccine_id = command.vaccine_id;
                lot.lot_number = command.lot_number;
                lot.expiration_date = command.expiration_date;
                lot.quantity = command.quantity;
                Ok(lot.clone())
            }
            None => Err(StoreError::NotFound(format!("Vaccine lot {id}"))),
        }
    }

    async fn delete(&self, id: Uuid) -> Result<(), StoreError> {
        self.rows
            .lock()
            .unwrap()
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| StoreError::NotFound(format!("Vaccine lot {id}")))
    }
}

#[derive(Default)]
pub struct InMemoryTutorStore {
    rows: Mutex<HashMap<Uuid, Tutor>>,
}

#[async_trait]
impl TutorStore for InMemoryTutorStore {
    async fn create(&self, command: CreateTutorCommand) -> Result<Tutor, StoreError> {
        let tutor = Tutor {
            id: Uuid::new_v4(),
            first_name: command.first_name,
            last_name: command.last_name,
            document_id: command.document_id,
            email: command.email,
            phone: command.phone,
        };
        self.rows.lock().unwrap().insert(tutor.id, tutor.clone());
        Ok(tutor)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Tutor>, StoreError> {
        Ok(self.rows.lock().unwrap().get(&id).cloned())
    }

    async fn list(&self) -> Result<Vec<Tutor>, StoreError> {
        Ok(self.rows.lock().unwrap().values().cloned().collect())
    }

    async fn update(&self, id: Uuid, command: CreateTutorCommand) -> Result<Tutor, StoreError> {
        let mut rows = self.rows.lock().unwrap();
        match rows.get_mut(&id) {
            Some(tutor) => {
                tutor.first_name = command.first_name;
                tutor.last_name = command.last_name;
                tutor.document_id = command.document_id;
                tutor.email = command.email;
                tutor.phone = command.phone;
                Ok(tutor.clone())
            }
            None => Err(StoreError::NotFound(format!("Tutor {id}"))),
        }
    }

    async fn delete(&self, id: Uuid) -> Result<(), StoreError> {
        self.rows
            .lock()
            .unwrap()
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| StoreError::NotFound(format!("Tutor {id}")))
    }
}

#[derive(Default)]
pub struct InMemoryChildStore {
    rows: Mutex<HashMap<Uuid, Child>>,
}

#[async_trait]
impl ChildStore for InMemoryChildStore {
    async fn create(&self, command: CreateChildCommand) -> Result<Child, StoreError> {
        let child = Child {
            id: Uuid::new_v4(),
            first_name: command.first_name,
            last_name: command.last_name,
            birth_date: command.birth_date,
            gender: command.gender,
            tutor_id: command.tutor_id,
            health_center_id: command.health_center_id,
        };
        self.rows.lock().unwrap().insert(child.id, child.clone());
        Ok(child)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Child>, StoreError> {
        Ok(self.rows.lock().unwrap().get(&id).cloned())
    }

    async fn list(&self) -> Result<Vec<Child>, StoreError> {
        Ok(self.rows.lock().unwrap().values().cloned().collect())
    }

    async fn update(&self, id: Uuid, command: CreateChildCommand) -> Result<Child, StoreError> {
        let mut rows = self.rows.lock().unwrap();
        match rows.get_mut(&id) {
            Some(child) => {
                child.first_name = command.first_name;
                child.last_name = command.last_name;
                child.birth_date = command.birth_date;
                child.gender = command.gender;
                child.tutor_id = command.tutor_id;
                child.health_center_id = command.health_center_id;
                Ok(child.clone())
            }
            None => Err(StoreError::NotFound(format!("Child {id}"))),
        }
    }

    async fn delete(&self, id: Uuid) -> Result<(), StoreError> {
        self.rows
            .lock()
            .unwrap()
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| StoreError::NotFound(format!("Child {id}")))
    }
}

#[derive(Default)]
pub struct InMemoryVaccinationStore {
    rows: Mutex<HashMap<Uuid, Vaccination>>,
}

#[async_trait]
impl VaccinationStore for InMemoryVaccinationStore {
    async fn create(&self, command: CreateVaccinationCommand) -> Result<Vaccination, StoreError> {
        let vaccination = Vaccination {
            id: Uuid::new_v4(),
            child_id: command.child_id,
            lot_id: command.lot_id,
            dose_number: command.dose_number,
            applied_by: command.applied_by,
            applied_at: command.applied_at,
        };
        self.rows
            .lock()
            .unwrap()
            .insert(vaccination.id, vaccination.clone());
        Ok(vaccination)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Vaccination>, StoreError> {
        Ok(self.rows.lock().unwrap().get(&id).cloned())
    }

    async fn list(&self) -> Result<Vec<Vaccination>, StoreError> {
        Ok(self.rows.lock().unwrap().values().cloned().collect())
    }

    async fn update(
        &self,
        id: Uuid,
        command: CreateVaccinationCommand,
    ) -> Result<Vaccination, StoreError> {
        let mut rows = self.rows.lock().unwrap();
        match rows.get_mut(&id) {
            Some(vaccination) => {
                vaccination.child_id = command.child_id;
                vaccination.lot_id = command.lot_id;
                vaccination.dose_number = command.dose_number;
                vaccination.applied_by = command.applied_by;
                vaccination.applied_at = command.applied_at;
                Ok(vaccination.clone())
            }
            None => Err(StoreError::NotFound(format!("Vaccination {id}"))),
        }
    }

    async fn delete(&self, id: Uuid) -> Result<(), StoreError> {
        self.rows
            .lock()
            .unwrap()
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| StoreError::NotFound(format!("Vaccination {id}")))
    }
}

#[derive(Default)]
pub struct InMemoryAppointmentStore {
    rows: Mutex<HashMap<Uuid, Appointment>>,
}

#[async_trait]
impl AppointmentStore for InMemoryAppointmentStore {
    async fn create(&self, command: CreateAppointmentCommand) -> Result<Appointment, StoreError> {
        let appointment = Appointment {
            id: Uuid::new_v4(),
            child_id: command.child_id,
            health_center_id: command.health_center_id,
            scheduled_at: command.scheduled_at,
            status: AppointmentStatus::Pendiente,
        };
        self.rows
            .lock()
            .unwrap()
            .insert(appointment.id, appointment.clone());
        Ok(appointment)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Appointment>, StoreError> {
        Ok(self.rows.lock().unwrap().get(&id).cloned())
    }

    async fn list(&self) -> Result<Vec<Appointment>, StoreError> {
        Ok(self.rows.lock().unwrap().values().cloned().collect())
    }

    async fn update(
        &self,
        id: Uuid,
        command: UpdateAppointmentCommand,
    ) -> Result<Appointment, StoreError> {
        let mut rows = self.rows.lock().unwrap();
        match rows.get_mut(&id) {
            Some(appointment) => {
                appointment.child_id = command.child_id;
                appointment.health_center_id = command.health_center_id;
                appointment.scheduled_at = command.scheduled_at;
                appointment.status = command.status;
                Ok(appointment.clone())
            }
            None => Err(StoreError::NotFound(format!("Appointment {id}"))),
        }
    }

    async fn delete(&self, id: Uuid) -> Result<(), StoreError> {
        self.rows
            .lock()
            .unwrap()
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| StoreError::NotFound(format!("Appointment {id}")))
    }
}

#[derive(Default)]
pub struct InMemoryCalendarStore {
    rows: Mutex<HashMap<Uuid, CalendarEntry>>,
}

#[async_trait]
impl CalendarStore for InMemoryCalendarStore {
    async fn create(
        &self,
        command: CreateCalendarEntryCommand,
    ) -> Result<CalendarEntry, StoreError> {
        let entry = CalendarEntry {
            id: Uuid::new_v4(),
            country_id: command.country_id,
            vaccine_id: command.vaccine_id,
            dose_number: command.dose_number,
            recommended_age_months: command.recommended_age_months,
        };
        self.rows.lock().unwrap().insert(entry.id, entry.clone());
        Ok(entry)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<CalendarEntry>, StoreError> {
        Ok(self.rows.lock().unwrap().get(&id).cloned())
    }

    async fn list(&self) -> Result<Vec<CalendarEntry>, StoreError> {
        Ok(self.rows.lock().unwrap().values().cloned().collect())
    }

    async fn update(
        &self,
        id: Uuid,
        command: CreateCalendarEntryCommand,
    ) -> Result<CalendarEntry, StoreError> {
        let mut rows = self.rows.lock().unwrap();
        match rows.get_mut(&id) {
            Some(entry) => {
                entry.country_id = command.country_id;
                entry.vaccine_id = command.vaccine_id;
                entry.dose_number = command.dose_number;
                entry.recommended_age_months = command.recommended_age_months;
                Ok(entry.clone())
            }
            None => Err(StoreError::NotFound(format!("Calendar entry {id}"))),
        }
    }

    async fn delete(&self, id: Uuid) -> Result<(), StoreError> {
        self.rows
            .lock()
            .unwrap()
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| StoreError::NotFound(format!("Calendar entry {id}")))
    }
}
