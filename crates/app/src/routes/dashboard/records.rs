//! Sample clinical records rendered by the dashboards. Dates are laid out
//! around `today` so the pages always show a mix of past and upcoming work.

use chrono::{Days, NaiveDate, NaiveTime};
use shared_types::{
    Appointment, AppointmentStatus, InventoryItem, LabPriority, LabTest, LabTestStatus,
    Prescription, PrescriptionStatus, Role, StaffMember,
};

fn shift(today: NaiveDate, offset: i64) -> NaiveDate {
    let days = Days::new(offset.unsigned_abs());
    let shifted = if offset >= 0 {
        today.checked_add_days(days)
    } else {
        today.checked_sub_days(days)
    };
    shifted.unwrap_or(today)
}

fn at(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or(NaiveTime::MIN)
}

#[allow(clippy::too_many_arguments)]
fn appointment(
    id: &str,
    patient: &str,
    doctor: &str,
    department: &str,
    date: NaiveDate,
    time: NaiveTime,
    reason: &str,
    status: AppointmentStatus,
) -> Appointment {
    Appointment {
        id: id.to_string(),
        patient_name: patient.to_string(),
        doctor_name: doctor.to_string(),
        department: department.to_string(),
        date,
        time,
        reason: reason.to_string(),
        status,
    }
}

/// A single patient's bookings across departments.
pub fn patient_appointments(today: NaiveDate) -> Vec<Appointment> {
    use AppointmentStatus::*;
    let me = "You";
    vec![
        appointment("AP-1041", me, "Dr. Amara Osei", "Cardiology", shift(today, 2), at(9, 30), "Blood pressure review", Confirmed),
        appointment("AP-1057", me, "Dr. Lena Fischer", "Dermatology", shift(today, 9), at(14, 0), "Skin check", Scheduled),
        appointment("AP-1002", me, "Dr. Amara Osei", "Cardiology", shift(today, -21), at(10, 15), "ECG follow-up", Completed),
        appointment("AP-0987", me, "Dr. Priya Raman", "General Practice", shift(today, -40), at(11, 0), "Annual physical", Completed),
        appointment("AP-0950", me, "Dr. Lena Fischer", "Dermatology", shift(today, -55), at(15, 45), "Rash consultation", Cancelled),
    ]
}

/// A doctor's clinic list.
pub fn doctor_appointments(today: NaiveDate) -> Vec<Appointment> {
    use AppointmentStatus::*;
    let doctor = "You";
    vec![
        appointment("AP-2101", "Grace Mensah", doctor, "Cardiology", today, at(8, 30), "Chest pain follow-up", CheckedIn),
        appointment("AP-2102", "Tomás Herrera", doctor, "Cardiology", today, at(9, 15), "Palpitations", Confirmed),
        appointment("AP-2103", "Yuki Tanaka", doctor, "Cardiology", today, at(11, 0), "Post-op review", Scheduled),
        appointment("AP-2110", "Nadia Rahman", doctor, "Cardiology", shift(today, 1), at(10, 0), "Holter results", Scheduled),
        appointment("AP-2111", "Oliver Brandt", doctor, "Cardiology", shift(today, 1), at(13, 30), "Hypertension check", Confirmed),
        appointment("AP-2120", "Chidi Okeke", doctor, "Cardiology", shift(today, 4), at(9, 0), "New referral", Scheduled),
        appointment("AP-2090", "Ingrid Larsen", doctor, "Cardiology", shift(today, -1), at(15, 0), "Echo review", Completed),
        appointment("AP-2088", "Samuel Adeyemi", doctor, "Cardiology", shift(today, -2), at(9, 45), "Medication review", Cancelled),
    ]
}

#[allow(clippy::too_many_arguments)]
fn prescription(
    id: &str,
    patient: &str,
    medication: &str,
    dosage: &str,
    frequency: &str,
    prescribed_by: &str,
    issued_on: NaiveDate,
    refills_remaining: u32,
    status: PrescriptionStatus,
) -> Prescription {
    Prescription {
        id: id.to_string(),
        patient_name: patient.to_string(),
        medication: medication.to_string(),
        dosage: dosage.to_string(),
        frequency: frequency.to_string(),
        prescribed_by: prescribed_by.to_string(),
        issued_on,
        refills_remaining,
        status,
    }
}

/// Prescriptions issued to a single patient.
pub fn patient_prescriptions(today: NaiveDate) -> Vec<Prescription> {
    use PrescriptionStatus::*;
    let me = "You";
    vec![
        prescription("RX-5501", me, "Lisinopril", "10 mg", "Once daily", "Dr. Amara Osei", shift(today, -21), 2, Active),
        prescription("RX-5502", me, "Atorvastatin", "20 mg", "Once daily at night", "Dr. Amara Osei", shift(today, -21), 0, Active),
        prescription("RX-5488", me, "Hydrocortisone cream", "1%", "Twice daily", "Dr. Lena Fischer", shift(today, -55), 0, Expired),
        prescription("RX-5520", me, "Vitamin D3", "1000 IU", "Once daily", "Dr. Priya Raman", shift(today, -3), 1, Pending),
    ]
}

/// The pharmacy's dispensing queue.
pub fn pharmacy_prescriptions(today: NaiveDate) -> Vec<Prescription> {
    use PrescriptionStatus::*;
    vec![
        prescription("RX-6010", "Grace Mensah", "Metoprolol", "25 mg", "Twice daily", "Dr. Amara Osei", today, 3, Pending),
        prescription("RX-6011", "Nadia Rahman", "Amoxicillin", "500 mg", "Three times daily", "Dr. Priya Raman", today, 0, Pending),
        prescription("RX-6004", "Oliver Brandt", "Amlodipine", "5 mg", "Once daily", "Dr. Amara Osei", shift(today, -1), 5, Active),
        prescription("RX-5998", "Yuki Tanaka", "Apixaban", "5 mg", "Twice daily", "Dr. Amara Osei", shift(today, -2), 2, Dispensed),
        prescription("RX-5970", "Ingrid Larsen", "Salbutamol inhaler", "100 mcg", "As needed", "Dr. Priya Raman", shift(today, -30), 0, Expired),
    ]
}

#[allow(clippy::too_many_arguments)]
fn lab_test(
    id: &str,
    patient: &str,
    test_name: &str,
    requested_by: &str,
    requested_on: NaiveDate,
    priority: LabPriority,
    status: LabTestStatus,
    result: Option<&str>,
) -> LabTest {
    LabTest {
        id: id.to_string(),
        patient_name: patient.to_string(),
        test_name: test_name.to_string(),
        requested_by: requested_by.to_string(),
        requested_on,
        priority,
        status,
        result: result.map(str::to_string),
    }
}

/// Results a patient can see.
pub fn patient_lab_results(today: NaiveDate) -> Vec<LabTest> {
    use LabPriority::*;
    use LabTestStatus::*;
    let me = "You";
    vec![
        lab_test("LT-3301", me, "Lipid panel", "Dr. Amara Osei", shift(today, -20), Routine, Completed, Some("LDL 3.1 mmol/L")),
        lab_test("LT-3302", me, "HbA1c", "Dr. Priya Raman", shift(today, -20), Routine, Completed, Some("5.6%")),
        lab_test("LT-3340", me, "Vitamin D", "Dr. Priya Raman", shift(today, -3), Routine, InProgress, None),
    ]
}

/// The laboratory work queue.
pub fn lab_queue(today: NaiveDate) -> Vec<LabTest> {
    use LabPriority::*;
    use LabTestStatus::*;
    vec![
        lab_test("LT-4001", "Grace Mensah", "Troponin I", "Dr. Amara Osei", today, Stat, SampleCollected, None),
        lab_test("LT-4002", "Nadia Rahman", "Full blood count", "Dr. Priya Raman", today, Urgent, Requested, None),
        lab_test("LT-4003", "Chidi Okeke", "Thyroid panel", "Dr. Priya Raman", today, Routine, Requested, None),
        lab_test("LT-3995", "Oliver Brandt", "Basic metabolic panel", "Dr. Amara Osei", shift(today, -1), Routine, InProgress, None),
        lab_test("LT-3990", "Yuki Tanaka", "INR", "Dr. Amara Osei", shift(today, -1), Urgent, Completed, Some("2.4")),
        lab_test("LT-3981", "Ingrid Larsen", "Urinalysis", "Dr. Lena Fischer", shift(today, -2), Routine, Completed, Some("No abnormalities")),
    ]
}

fn stock(name: &str, category: &str, stock: u32, reorder_level: u32, expires_on: NaiveDate) -> InventoryItem {
    InventoryItem {
        name: name.to_string(),
        category: category.to_string(),
        stock,
        reorder_level,
        expires_on,
    }
}

pub fn inventory(today: NaiveDate) -> Vec<InventoryItem> {
    vec![
        stock("Amoxicillin 500 mg", "Antibiotic", 240, 100, shift(today, 300)),
        stock("Metoprolol 25 mg", "Cardiovascular", 60, 80, shift(today, 420)),
        stock("Lisinopril 10 mg", "Cardiovascular", 310, 120, shift(today, 510)),
        stock("Apixaban 5 mg", "Anticoagulant", 0, 40, shift(today, 200)),
        stock("Salbutamol inhaler", "Respiratory", 35, 30, shift(today, 90)),
        stock("Insulin glargine", "Endocrine", 18, 25, shift(today, 45)),
    ]
}

fn staff(id: &str, name: &str, email: &str, role: Role, department: &str, active: bool) -> StaffMember {
    StaffMember {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        role,
        department: department.to_string(),
        active,
    }
}

pub fn staff_directory() -> Vec<StaffMember> {
    vec![
        staff("U-001", "Amara Osei", "a.osei@clinic.org", Role::Doctor, "Cardiology", true),
        staff("U-002", "Priya Raman", "p.raman@clinic.org", Role::Doctor, "General Practice", true),
        staff("U-003", "Lena Fischer", "l.fischer@clinic.org", Role::Doctor, "Dermatology", false),
        staff("U-004", "Marcus Bell", "m.bell@clinic.org", Role::LabTechnician, "Pathology", true),
        staff("U-005", "Hana Kobayashi", "h.kobayashi@clinic.org", Role::Pharmacist, "Pharmacy", true),
        staff("U-006", "Diego Alvarez", "d.alvarez@clinic.org", Role::Admin, "Operations", true),
        staff("U-007", "Grace Mensah", "grace.mensah@mail.test", Role::Patient, "-", true),
    ]
}

/// Appointments still ahead of `today`, earliest first.
pub fn upcoming(appointments: &[Appointment], today: NaiveDate) -> Vec<Appointment> {
    let mut list: Vec<Appointment> = appointments
        .iter()
        .filter(|a| a.date >= today && a.status.is_upcoming())
        .cloned()
        .collect();
    list.sort_by_key(|a| (a.date, a.time));
    list
}

/// Appointments booked on `date`, in clinic order.
pub fn on_date(appointments: &[Appointment], date: NaiveDate) -> Vec<Appointment> {
    let mut list: Vec<Appointment> = appointments
        .iter()
        .filter(|a| a.date == date)
        .cloned()
        .collect();
    list.sort_by_key(|a| a.time);
    list
}

/// Lab tests not yet completed, STAT first.
pub fn open_tests(tests: &[LabTest]) -> Vec<LabTest> {
    let mut list: Vec<LabTest> = tests
        .iter()
        .filter(|t| t.status != LabTestStatus::Completed)
        .cloned()
        .collect();
    list.sort_by_key(|t| match t.priority {
        LabPriority::Stat => 0,
        LabPriority::Urgent => 1,
        LabPriority::Routine => 2,
    });
    list
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 1).unwrap()
    }

    #[test]
    fn shift_moves_both_ways() {
        assert_eq!(shift(today(), 1), NaiveDate::from_ymd_opt(2026, 3, 2).unwrap());
        assert_eq!(shift(today(), -1), NaiveDate::from_ymd_opt(2026, 2, 28).unwrap());
    }

    #[test]
    fn upcoming_skips_past_and_closed_appointments() {
        let list = upcoming(&doctor_appointments(today()), today());
        let ids: Vec<&str> = list.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["AP-2101", "AP-2102", "AP-2103", "AP-2110", "AP-2111", "AP-2120"]);
    }

    #[test]
    fn on_date_is_ordered_by_time() {
        let tomorrow = shift(today(), 1);
        let list = on_date(&doctor_appointments(today()), tomorrow);
        let times: Vec<NaiveTime> = list.iter().map(|a| a.time).collect();
        assert_eq!(times, vec![at(10, 0), at(13, 30)]);
        assert!(on_date(&doctor_appointments(today()), shift(today(), 30)).is_empty());
    }

    #[test]
    fn open_tests_put_stat_first() {
        let open = open_tests(&lab_queue(today()));
        assert_eq!(open.len(), 4);
        assert_eq!(open[0].priority, LabPriority::Stat);
        assert!(open.iter().all(|t| t.status != LabTestStatus::Completed));
    }

    #[test]
    fn directory_covers_every_role() {
        let directory = staff_directory();
        for role in shared_types::ALL_ROLES {
            assert!(directory.iter().any(|s| s.role == *role), "{role}");
        }
    }
}
