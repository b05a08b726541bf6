use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::Serialize;

/// Declares a closed string-backed enum: `Display`, `FromStr`, serde
/// serialization as the label, and a `VALUES` table for iteration.
macro_rules! closed_enum {
    ($name:ident { $($variant:ident => $label:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const VALUES: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = UnknownValue;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($label => Ok($name::$variant),)+
                    _ => Err(UnknownValue {
                        field: stringify!($name),
                        value: s.to_string(),
                    }),
                }
            }
        }

        impl Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }
    };
}

/// A string that does not belong to a closed enum's value set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownValue {
    pub field: &'static str,
    pub value: String,
}

impl fmt::Display for UnknownValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown {} value: {:?}", self.field, self.value)
    }
}

impl std::error::Error for UnknownValue {}

closed_enum!(RequestType {
    WebsiteUpdate => "Website update",
    SocialMediaCampaign => "Social media campaign",
    YoutubeThumbnailDesign => "YouTube thumbnail design",
    AutomationWorkflow => "Automation workflow",
    LandingPageForAdmissions => "Landing page for admissions",
    Design => "Design",
    Video => "Video",
    Other => "Other",
});

closed_enum!(Department {
    Admissions => "Admissions",
    Marketing => "Marketing",
    It => "IT",
    Academic => "Academic",
    Management => "Management",
});

// Variant order is the severity order; `Ord` follows it.
closed_enum!(Priority {
    Low => "Low",
    Medium => "Medium",
    High => "High",
    Critical => "Critical",
});

closed_enum!(RequestStatus {
    New => "New",
    InProgress => "In Progress",
    OnHold => "On Hold",
    Completed => "Completed",
    Rejected => "Rejected",
});

closed_enum!(LeadSource {
    Website => "Website",
    WalkIn => "Walk in",
    WhatsApp => "WhatsApp",
    Referral => "Referral",
    Campaign => "Campaign",
});

closed_enum!(Campus {
    Asm => "ASM",
    Absm => "ABSM",
    Ssv => "SSV",
    Aasc => "AASC",
    Acet => "ACET",
});

// Variant order is the forward funnel order; Closed is a terminal
// side-branch and sits outside `FUNNEL`.
closed_enum!(LeadStatus {
    New => "New",
    Contacted => "Contacted",
    CampusVisit => "Campus Visit",
    ApplicationSubmitted => "Application Submitted",
    Enrolled => "Enrolled",
    Closed => "Closed",
});

impl LeadStatus {
    pub const FUNNEL: &'static [LeadStatus] = &[
        LeadStatus::New,
        LeadStatus::Contacted,
        LeadStatus::CampusVisit,
        LeadStatus::ApplicationSubmitted,
        LeadStatus::Enrolled,
    ];
}

closed_enum!(AssetType {
    SensesPanel => "Senses Panel",
    Projector => "Projector",
    Camera => "Camera",
    Laptop => "Laptop",
    Printer => "Printer",
});

closed_enum!(Condition {
    Working => "Working",
    NeedsService => "Needs Service",
    NotWorking => "Not Working",
});

closed_enum!(AmcStatus {
    Active => "Active",
    Expired => "Expired",
    NotCovered => "Not Covered",
});

#[derive(Debug, Clone, Serialize)]
pub struct Comment {
    pub user: String,
    pub text: String,
    pub date: NaiveDate,
}

#[derive(Debug, Clone, Serialize)]
pub struct TimelineEvent {
    pub status: RequestStatus,
    pub date: NaiveDate,
}

#[derive(Debug, Clone, Serialize)]
pub struct ServiceEntry {
    pub date: NaiveDate,
    pub description: String,
    pub technician: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct DigitalRequest {
    pub id: String,
    pub request_type: RequestType,
    pub department: Department,
    pub requested_by: String,
    pub priority: Priority,
    pub status: RequestStatus,
    pub created_at: NaiveDate,
    pub due_date: NaiveDate,
    pub assigned_to: String,
    pub description: String,
    pub comments: Vec<Comment>,
    pub timeline: Vec<TimelineEvent>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AdmissionLead {
    pub lead_id: String,
    pub student_name: String,
    pub parent_name: String,
    pub email: String,
    pub phone: String,
    pub source: LeadSource,
    pub campus: Campus,
    pub grade_applied: String,
    pub status: LeadStatus,
    pub counselor: String,
    pub created_at: NaiveDate,
    // Sampled independently of created_at; no ordering is guaranteed.
    pub last_contact_date: NaiveDate,
    pub probability_score: u8,
}

#[derive(Debug, Clone, Serialize)]
pub struct ItAsset {
    pub asset_id: String,
    pub asset_type: AssetType,
    pub campus: Campus,
    pub room_no: String,
    pub serial_no: String,
    pub vendor_name: String,
    pub condition: Condition,
    pub purchase_date: NaiveDate,
    pub installation_date: NaiveDate,
    pub warranty_expiry_date: NaiveDate,
    pub last_serviced_date: NaiveDate,
    pub next_service_date: NaiveDate,
    pub amc_status: AmcStatus,
    pub last_updated: NaiveDate,
    pub service_history: Vec<ServiceEntry>,
}

/// One slice of a categorical chart: pie segments, bar heights.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NamedCount {
    pub name: String,
    pub value: usize,
}

/// One point of a daily trend line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DatePoint {
    pub date: NaiveDate,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CrossTabRow {
    pub name: String,
    pub values: Vec<usize>,
}

/// Row-per-group breakdown with a fixed column domain, zero-filled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CrossTab {
    pub columns: Vec<String>,
    pub rows: Vec<CrossTabRow>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn priority_orders_by_severity() {
        assert!(Priority::Critical > Priority::High);
        assert!(Priority::High > Priority::Medium);
        assert!(Priority::Medium > Priority::Low);
    }

    #[test]
    fn labels_round_trip() {
        for status in RequestStatus::VALUES {
            assert_eq!(status.as_str().parse::<RequestStatus>().as_ref(), Ok(status));
        }
        for campus in Campus::VALUES {
            assert_eq!(campus.as_str().parse::<Campus>().as_ref(), Ok(campus));
        }
    }

    #[test]
    fn unknown_label_is_rejected() {
        let err = "Urgent".parse::<Priority>().unwrap_err();
        assert_eq!(err.value, "Urgent");
    }

    #[test]
    fn funnel_excludes_closed() {
        assert_eq!(LeadStatus::FUNNEL.len(), 5);
        assert!(!LeadStatus::FUNNEL.contains(&LeadStatus::Closed));
    }
}
