use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::store::Record;

/// Declares an enumerated domain persisted and serialized as its display text.
macro_rules! text_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $text:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $text)]
                $variant,
            )+
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $text,)+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

text_enum! {
    Gender {
        Male => "Male",
        Female => "Female",
    }
}

text_enum! {
    /// States covered by the demo data set.
    UsState {
        Michigan => "Michigan",
        Ohio => "Ohio",
        Illinois => "Illinois",
        Indiana => "Indiana",
    }
}

text_enum! {
    ContactSystem {
        Phone => "Phone",
        Fax => "Fax",
        Pager => "Pager",
        Sms => "SMS",
    }
}

text_enum! {
    ContactUse {
        Home => "Home",
        Work => "Work",
        Mobile => "Mobile",
    }
}

text_enum! {
    OrganizationType {
        HealthcareProvider => "Healthcare Provider",
        HospitalDepartment => "Hospital Department",
        OrganizationalTeam => "Organizational Team",
        Government => "Government",
        InsuranceCompany => "Insurance Company",
    }
}

text_enum! {
    ClaimStatus {
        Active => "Active",
        Cancelled => "Cancelled",
        Draft => "Draft",
    }
}

text_enum! {
    ClaimType {
        Institutional => "Institutional",
        Oral => "Oral",
        Pharmacy => "Pharmacy",
        Professional => "Professional",
        Vision => "Vision",
    }
}

text_enum! {
    ServiceType {
        MedicalCare => "Medical Care",
        Surgery => "Surgery",
        Consultation => "Consultation",
        DiagnosticXRay => "Diagnostic X-Ray",
        DiagnosticLab => "Diagnostic Lab",
        RadiationTherapy => "Radiation Therapy",
    }
}

text_enum! {
    /// Kind of records contained in an uploaded file.
    UploadFileType {
        Patients => "Patients",
        Organizations => "Organizations",
        Claims => "Claims",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Patient {
    pub id: Option<i64>,
    pub name: String,
    pub gender: Gender,
    pub primary_care_provider: String,
    pub state: UsState,
    pub modified_date: OffsetDateTime,
    pub contacts: Vec<ContactPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactPoint {
    pub system: ContactSystem,
    pub value: String,
    #[serde(rename = "use")]
    pub contact_use: ContactUse,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Organization {
    pub id: Option<i64>,
    pub name: String,
    #[serde(rename = "type")]
    pub organization_type: OrganizationType,
    pub is_active: bool,
    pub modified_date: OffsetDateTime,
    pub addresses: Vec<Address>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Address {
    pub street: String,
    pub city: String,
    pub state: UsState,
}

/// An insurance claim. Patient and organization are free-text copies, not references.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claim {
    pub id: Option<i64>,
    pub patient_name: String,
    pub organization_name: String,
    pub status: ClaimStatus,
    #[serde(rename = "type")]
    pub claim_type: ClaimType,
    pub modified_date: OffsetDateTime,
    pub line_items: Vec<LineItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub service: ServiceType,
    pub amount: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Upload {
    pub id: Option<i64>,
    pub file_type: UploadFileType,
    pub upload_timestamp: OffsetDateTime,
    pub processed_timestamp: OffsetDateTime,
    /// Base64-encoded file body.
    pub file_content: String,
}

/// Application login. The password is stored as given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: Option<i64>,
    pub username: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl User {
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            username: username.into(),
            password: password.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
        }
    }
}

impl Record for Patient {
    const COLLECTION: &'static str = "patients";

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn assign_id(&mut self, id: i64) {
        self.id = Some(id);
    }
}

impl Record for Organization {
    const COLLECTION: &'static str = "organizations";

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn assign_id(&mut self, id: i64) {
        self.id = Some(id);
    }
}

impl Record for Claim {
    const COLLECTION: &'static str = "claims";

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn assign_id(&mut self, id: i64) {
        self.id = Some(id);
    }
}

impl Record for Upload {
    const COLLECTION: &'static str = "uploads";

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn assign_id(&mut self, id: i64) {
        self.id = Some(id);
    }
}

impl Record for User {
    const COLLECTION: &'static str = "users";

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn assign_id(&mut self, id: i64) {
        self.id = Some(id);
    }
}
