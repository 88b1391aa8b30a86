use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Dashboard section a signed-in user belongs to.
///
/// The lowercase slug returned by [`Role::as_str`] doubles as the second
/// path segment of every dashboard route (`/dashboard/<slug>/...`), which is
/// what the auth gate compares against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Patient,
    Doctor,
    LabTechnician,
    Pharmacist,
    Admin,
}

/// All roles in sidebar / display order.
pub const ALL_ROLES: &[Role] = &[
    Role::Patient,
    Role::Doctor,
    Role::LabTechnician,
    Role::Pharmacist,
    Role::Admin,
];

impl Role {
    /// Canonical slug used on the wire and in dashboard paths.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Patient => "patient",
            Role::Doctor => "doctor",
            Role::LabTechnician => "lab-technician",
            Role::Pharmacist => "pharmacist",
            Role::Admin => "admin",
        }
    }

    /// Parse a role string from the auth API or a URL segment.
    ///
    /// Case-insensitive; the lab role also accepts the underscore, space and
    /// run-together spellings. Unknown values yield `None`.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "patient" => Some(Role::Patient),
            "doctor" => Some(Role::Doctor),
            "lab-technician" | "lab_technician" | "lab technician" | "labtechnician" => {
                Some(Role::LabTechnician)
            }
            "pharmacist" => Some(Role::Pharmacist),
            "admin" => Some(Role::Admin),
            _ => None,
        }
    }

    /// Human-readable name for headers and badges.
    pub fn display_name(&self) -> &'static str {
        match self {
            Role::Patient => "Patient",
            Role::Doctor => "Doctor",
            Role::LabTechnician => "Lab Technician",
            Role::Pharmacist => "Pharmacist",
            Role::Admin => "Administrator",
        }
    }

    /// Root of this role's dashboard section.
    pub fn dashboard_path(&self) -> String {
        format!("/dashboard/{}", self.as_str())
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Role {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Role {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Role::parse(&raw)
            .ok_or_else(|| serde::de::Error::custom(format!("unsupported role `{raw}`")))
    }
}
