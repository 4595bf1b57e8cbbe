//! Car entity.

use serde::{Deserialize, Serialize};

use super::id::CarId;
use super::owner::CarOwner;

/// A car registered to an owner.
///
/// The owner is embedded by value as returned by the server - a materialized
/// snapshot, not a reference into the owner store. Edits to an owner made
/// elsewhere do not retroactively update already-fetched cars; the snapshot
/// refreshes only when the holding collection is re-fetched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Car {
    /// Server-assigned identifier (immutable).
    pub id: CarId,
    /// License plate number.
    pub number: String,
    /// Owner snapshot as materialized by the server.
    pub owner: CarOwner,
}

/// Create payload for a car: the entity minus its server-assigned id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCar {
    /// License plate number.
    pub number: String,
    /// Owner the car is registered to.
    pub owner: CarOwner,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::types::id::OwnerId;

    #[test]
    fn test_car_wire_shape() {
        let car: Car = serde_json::from_str(
            r#"{"id":5,"number":"AB123CD","owner":{"id":1,"fullName":"Jane Doe"}}"#,
        )
        .unwrap();
        assert_eq!(car.id, CarId::new(5));
        assert_eq!(car.number, "AB123CD");
        assert_eq!(car.owner.id, OwnerId::new(1));
    }
}
