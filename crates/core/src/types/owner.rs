//! Car owner entity.

use serde::{Deserialize, Serialize};

use super::id::OwnerId;

/// A registered car owner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarOwner {
    /// Server-assigned identifier (immutable).
    pub id: OwnerId,
    /// Owner's full display name.
    pub full_name: String,
}

/// Create payload for a car owner: the entity minus its server-assigned id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCarOwner {
    /// Owner's full display name.
    pub full_name: String,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_car_owner_wire_shape() {
        let owner: CarOwner = serde_json::from_str(r#"{"id":1,"fullName":"Jane Doe"}"#).unwrap();
        assert_eq!(owner.id, OwnerId::new(1));
        assert_eq!(owner.full_name, "Jane Doe");

        let json = serde_json::to_value(&owner).unwrap();
        assert_eq!(json["fullName"], "Jane Doe");
    }

    #[test]
    fn test_new_car_owner_has_no_id() {
        let draft = NewCarOwner {
            full_name: "New Owner".to_string(),
        };
        let json = serde_json::to_value(&draft).unwrap();
        assert!(json.get("id").is_none());
    }
}
