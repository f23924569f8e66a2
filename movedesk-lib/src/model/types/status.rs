//! Status and label enums shared by quotes and moving requests

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use serde::Serialize;

/// Lifecycle status of a quote or moving request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Status {
    Pending,
    InProgress,
    Completed,
    Cancelled,
}

impl Status {
    /// All statuses, in tab order.
    pub const ALL: [Status; 4] = [
        Status::Pending,
        Status::InProgress,
        Status::Completed,
        Status::Cancelled,
    ];

    /// The wire form (`"in-progress"`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Pending => "pending",
            Status::InProgress => "in-progress",
            Status::Completed => "completed",
            Status::Cancelled => "cancelled",
        }
    }

    /// Human-readable label (`"In Progress"`).
    pub fn label(&self) -> &'static str {
        match self {
            Status::Pending => "Pending",
            Status::InProgress => "In Progress",
            Status::Completed => "Completed",
            Status::Cancelled => "Cancelled",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown status.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown status '{0}'")]
pub struct UnknownStatus(pub String);

impl FromStr for Status {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Status::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| UnknownStatus(s.to_string()))
    }
}

/// Size of a move as captured by the quote form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveSize {
    Studio,
    OneBedroom,
    TwoBedroom,
    ThreeBedroom,
    FourPlusBedroom,
    SmallOffice,
    LargeOffice,
    Other,
}

impl MoveSize {
    const WIRE: [(&'static str, MoveSize); 8] = [
        ("studio", MoveSize::Studio),
        ("1bedroom", MoveSize::OneBedroom),
        ("2bedroom", MoveSize::TwoBedroom),
        ("3bedroom", MoveSize::ThreeBedroom),
        ("4bedroom", MoveSize::FourPlusBedroom),
        ("office_small", MoveSize::SmallOffice),
        ("office_large", MoveSize::LargeOffice),
        ("other", MoveSize::Other),
    ];

    /// Parses the wire form, `None` for unknown sizes.
    pub fn from_wire(raw: &str) -> Option<Self> {
        Self::WIRE
            .iter()
            .find(|(wire, _)| *wire == raw)
            .map(|(_, size)| *size)
    }

    pub fn label(&self) -> &'static str {
        match self {
            MoveSize::Studio => "Studio",
            MoveSize::OneBedroom => "1 Bedroom",
            MoveSize::TwoBedroom => "2 Bedroom",
            MoveSize::ThreeBedroom => "3 Bedroom",
            MoveSize::FourPlusBedroom => "4+ Bedroom",
            MoveSize::SmallOffice => "Small Office",
            MoveSize::LargeOffice => "Large Office",
            MoveSize::Other => "Other",
        }
    }

    /// Label for a raw wire value, falling back to the raw text.
    pub fn label_for(raw: &str) -> String {
        Self::from_wire(raw)
            .map(|size| size.label().to_string())
            .unwrap_or_else(|| raw.to_string())
    }
}

/// Kind of moving service requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ServiceType {
    Local,
    LongDistance,
    Commercial,
    Residential,
}

impl ServiceType {
    pub fn from_wire(raw: &str) -> Option<Self> {
        match raw {
            "local" => Some(ServiceType::Local),
            "long-distance" | "longDistance" => Some(ServiceType::LongDistance),
            "commercial" => Some(ServiceType::Commercial),
            "residential" => Some(ServiceType::Residential),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ServiceType::Local => "Local",
            ServiceType::LongDistance => "Long Distance",
            ServiceType::Commercial => "Commercial",
            ServiceType::Residential => "Residential",
        }
    }

    /// Label for a raw wire value, falling back to the raw text.
    pub fn label_for(raw: &str) -> String {
        Self::from_wire(raw)
            .map(|kind| kind.label().to_string())
            .unwrap_or_else(|| raw.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_round_trips_wire_form() {
        for status in Status::ALL {
            assert_eq!(status.as_str().parse::<Status>(), Ok(status));
        }
        assert_eq!(
            "archived".parse::<Status>(),
            Err(UnknownStatus("archived".into()))
        );
    }

    #[test]
    fn test_status_serde_uses_kebab_case() {
        let json = serde_json::to_string(&Status::InProgress).unwrap();
        assert_eq!(json, r#""in-progress""#);
    }

    #[test]
    fn test_move_size_labels() {
        assert_eq!(MoveSize::label_for("4bedroom"), "4+ Bedroom");
        assert_eq!(MoveSize::label_for("office_small"), "Small Office");
        assert_eq!(MoveSize::label_for("castle"), "castle");
    }

    #[test]
    fn test_service_type_labels() {
        assert_eq!(ServiceType::label_for("long-distance"), "Long Distance");
        assert_eq!(ServiceType::label_for("boat"), "boat");
    }
}
