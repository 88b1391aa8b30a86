pub mod appointment_table;
pub mod lab_test_table;
pub mod prescription_table;
pub mod status;

pub use appointment_table::{AppointmentTable, Counterpart};
pub use lab_test_table::LabTestTable;
pub use prescription_table::PrescriptionTable;
pub use status::StatusBadge;
