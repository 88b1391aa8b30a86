use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::Role;

/// Colour family a status badge is drawn with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTone {
    Positive,
    Pending,
    Attention,
    Critical,
    Neutral,
}

// ---------------------------------------------------------------------------
// Appointments
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AppointmentStatus {
    Scheduled,
    Confirmed,
    CheckedIn,
    Completed,
    Cancelled,
}

impl AppointmentStatus {
    pub fn label(&self) -> &'static str {
        match self {
            AppointmentStatus::Scheduled => "Scheduled",
            AppointmentStatus::Confirmed => "Confirmed",
            AppointmentStatus::CheckedIn => "Checked In",
            AppointmentStatus::Completed => "Completed",
            AppointmentStatus::Cancelled => "Cancelled",
        }
    }

    pub fn tone(&self) -> StatusTone {
        match self {
            AppointmentStatus::Scheduled => StatusTone::Pending,
            AppointmentStatus::Confirmed | AppointmentStatus::CheckedIn => StatusTone::Attention,
            AppointmentStatus::Completed => StatusTone::Positive,
            AppointmentStatus::Cancelled => StatusTone::Critical,
        }
    }

    /// Still ahead of the patient (not completed or cancelled).
    pub fn is_upcoming(&self) -> bool {
        matches!(
            self,
            AppointmentStatus::Scheduled
                | AppointmentStatus::Confirmed
                | AppointmentStatus::CheckedIn
        )
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Appointment {
    pub id: String,
    pub patient_name: String,
    pub doctor_name: String,
    pub department: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub reason: String,
    pub status: AppointmentStatus,
}

/// Counts feeding the appointment stat cards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AppointmentSummary {
    pub total: usize,
    pub upcoming: usize,
    pub completed: usize,
    pub cancelled: usize,
}

impl AppointmentSummary {
    pub fn from_appointments(appointments: &[Appointment]) -> Self {
        appointments
            .iter()
            .fold(Self::default(), |mut summary, appt| {
                summary.total += 1;
                match appt.status {
                    s if s.is_upcoming() => summary.upcoming += 1,
                    AppointmentStatus::Completed => summary.completed += 1,
                    AppointmentStatus::Cancelled => summary.cancelled += 1,
                    _ => {}
                }
                summary
            })
    }
}

// ---------------------------------------------------------------------------
// Prescriptions
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PrescriptionStatus {
    Active,
    Pending,
    Dispensed,
    Expired,
}

impl PrescriptionStatus {
    pub fn label(&self) -> &'static str {
        match self {
            PrescriptionStatus::Active => "Active",
            PrescriptionStatus::Pending => "Pending",
            PrescriptionStatus::Dispensed => "Dispensed",
            PrescriptionStatus::Expired => "Expired",
        }
    }

    pub fn tone(&self) -> StatusTone {
        match self {
            PrescriptionStatus::Active => StatusTone::Positive,
            PrescriptionStatus::Pending => StatusTone::Pending,
            PrescriptionStatus::Dispensed => StatusTone::Neutral,
            PrescriptionStatus::Expired => StatusTone::Critical,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Prescription {
    pub id: String,
    pub patient_name: String,
    pub medication: String,
    pub dosage: String,
    pub frequency: String,
    pub prescribed_by: String,
    pub issued_on: NaiveDate,
    pub refills_remaining: u32,
    pub status: PrescriptionStatus,
}

// ---------------------------------------------------------------------------
// Laboratory
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum LabPriority {
    Routine,
    Urgent,
    Stat,
}

impl LabPriority {
    pub fn label(&self) -> &'static str {
        match self {
            LabPriority::Routine => "Routine",
            LabPriority::Urgent => "Urgent",
            LabPriority::Stat => "STAT",
        }
    }

    pub fn tone(&self) -> StatusTone {
        match self {
            LabPriority::Routine => StatusTone::Neutral,
            LabPriority::Urgent => StatusTone::Attention,
            LabPriority::Stat => StatusTone::Critical,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum LabTestStatus {
    Requested,
    SampleCollected,
    InProgress,
    Completed,
}

impl LabTestStatus {
    pub fn label(&self) -> &'static str {
        match self {
            LabTestStatus::Requested => "Requested",
            LabTestStatus::SampleCollected => "Sample Collected",
            LabTestStatus::InProgress => "In Progress",
            LabTestStatus::Completed => "Completed",
        }
    }

    pub fn tone(&self) -> StatusTone {
        match self {
            LabTestStatus::Requested => StatusTone::Pending,
            LabTestStatus::SampleCollected | LabTestStatus::InProgress => StatusTone::Attention,
            LabTestStatus::Completed => StatusTone::Positive,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LabTest {
    pub id: String,
    pub patient_name: String,
    pub test_name: String,
    pub requested_by: String,
    pub requested_on: NaiveDate,
    pub priority: LabPriority,
    pub status: LabTestStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<String>,
}

// ---------------------------------------------------------------------------
// Pharmacy inventory
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InventoryItem {
    pub name: String,
    pub category: String,
    pub stock: u32,
    pub reorder_level: u32,
    pub expires_on: NaiveDate,
}

impl InventoryItem {
    pub fn is_low_stock(&self) -> bool {
        self.stock <= self.reorder_level
    }

    pub fn stock_label(&self) -> &'static str {
        if self.stock == 0 {
            "Out of Stock"
        } else if self.is_low_stock() {
            "Low Stock"
        } else {
            "In Stock"
        }
    }

    pub fn stock_tone(&self) -> StatusTone {
        if self.stock == 0 {
            StatusTone::Critical
        } else if self.is_low_stock() {
            StatusTone::Attention
        } else {
            StatusTone::Positive
        }
    }
}

// ---------------------------------------------------------------------------
// Staff directory (admin)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StaffMember {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub department: String,
    pub active: bool,
}
