use std::fmt;
use std::str::FromStr;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use super::errors::UnknownAppointmentStatus;

/// Scheduled visit of a child to a health center.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Appointment {
    pub id: Uuid,
    pub child_id: Uuid,
    pub health_center_id: Uuid,
    pub scheduled_at: DateTime<Utc>,
    pub status: AppointmentStatus,
}

/// Appointment lifecycle state, wire form exactly as stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppointmentStatus {
    Pendiente,
    Atendida,
    Cancelada,
}

impl AppointmentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AppointmentStatus::Pendiente => "Pendiente",
            AppointmentStatus::Atendida => "Atendida",
            AppointmentStatus::Cancelada => "Cancelada",
        }
    }
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AppointmentStatus {
    type Err = UnknownAppointmentStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Pendiente" => Ok(AppointmentStatus::Pendiente),
            "Atendida" => Ok(AppointmentStatus::Atendida),
            "Cancelada" => Ok(AppointmentStatus::Cancelada),
            other => Err(UnknownAppointmentStatus(other.to_string())),
        }
    }
}

/// Validated fields for scheduling an appointment. New appointments always
/// start `Pendiente`.
#[derive(Debug, Clone)]
pub struct CreateAppointmentCommand {
    pub child_id: Uuid,
    pub health_center_id: Uuid,
    pub scheduled_at: DateTime<Utc>,
}

/// Validated fields for a full appointment update (reschedule or status
/// change).
#[derive(Debug, Clone)]
pub struct UpdateAppointmentCommand {
    pub child_id: Uuid,
    pub health_center_id: Uuid,
    pub scheduled_at: DateTime<Utc>,
    pub status: AppointmentStatus,
}
