//! Parking space entity.

use serde::{Deserialize, Serialize};

use super::id::SpaceId;

/// A single parking space.
///
/// Availability is server-authoritative: the client changes it only by
/// sending a full update, never by patching the flag locally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParkingSpace {
    /// Server-assigned identifier (immutable).
    pub id: SpaceId,
    /// Space label (e.g., "A-12").
    pub number: String,
    /// Whether the space is currently free.
    pub is_available: bool,
}

/// Create payload for a parking space: the entity minus its server-assigned id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewParkingSpace {
    /// Space label.
    pub number: String,
    /// Initial availability.
    pub is_available: bool,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parking_space_wire_shape() {
        let space: ParkingSpace =
            serde_json::from_str(r#"{"id":2,"number":"A-12","isAvailable":true}"#).unwrap();
        assert_eq!(space.id, SpaceId::new(2));
        assert!(space.is_available);

        let json = serde_json::to_value(&space).unwrap();
        assert_eq!(json["isAvailable"], true);
    }
}
