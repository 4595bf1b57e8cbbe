//! Booking entity and its detailed projection.

use serde::{Deserialize, Serialize};

use super::car::Car;
use super::id::{BookingId, CarId, SpaceId};
use super::space::ParkingSpace;

/// A booking tying a car to a parking space.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    /// Server-assigned identifier (immutable).
    pub id: BookingId,
    /// Foreign key to the booked car.
    pub car_id: CarId,
    /// Foreign key to the booked space.
    pub parking_space_id: SpaceId,
    /// Whether the booking has been paid.
    pub is_paid: bool,
}

/// Read-only projection of a booking with its related car and parking space
/// materialized by the server.
///
/// Exists for display only and is never sent back to the server as-is;
/// payment changes go through the narrower [`PaymentUpdate`] call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingDetailed {
    /// Server-assigned identifier (immutable).
    pub id: BookingId,
    /// Foreign key to the booked car.
    pub car_id: CarId,
    /// Foreign key to the booked space.
    pub parking_space_id: SpaceId,
    /// Whether the booking has been paid.
    pub is_paid: bool,
    /// Car snapshot as materialized by the server.
    pub car: Car,
    /// Parking space snapshot as materialized by the server.
    pub parking_space: ParkingSpace,
}

/// Create payload for a booking: the entity minus its server-assigned id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBooking {
    /// Foreign key to the booked car.
    pub car_id: CarId,
    /// Foreign key to the booked space.
    pub parking_space_id: SpaceId,
    /// Whether the booking has been paid.
    pub is_paid: bool,
}

/// Narrow PATCH body for updating a booking's payment status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentUpdate {
    /// New payment status.
    pub is_paid: bool,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_booking_wire_shape() {
        let booking: Booking =
            serde_json::from_str(r#"{"id":3,"carId":5,"parkingSpaceId":2,"isPaid":false}"#)
                .unwrap();
        assert_eq!(booking.id, BookingId::new(3));
        assert_eq!(booking.car_id, CarId::new(5));
        assert_eq!(booking.parking_space_id, SpaceId::new(2));
        assert!(!booking.is_paid);
    }

    #[test]
    fn test_booking_detailed_wire_shape() {
        let detailed: BookingDetailed = serde_json::from_str(
            r#"{
                "id": 3,
                "carId": 5,
                "parkingSpaceId": 2,
                "isPaid": true,
                "car": {"id":5,"number":"AB123CD","owner":{"id":1,"fullName":"Jane Doe"}},
                "parkingSpace": {"id":2,"number":"A-12","isAvailable":false}
            }"#,
        )
        .unwrap();
        assert_eq!(detailed.car.number, "AB123CD");
        assert_eq!(detailed.parking_space.number, "A-12");
        assert!(detailed.is_paid);
    }

    #[test]
    fn test_payment_update_body() {
        let json = serde_json::to_string(&PaymentUpdate { is_paid: true }).unwrap();
        assert_eq!(json, r#"{"isPaid":true}"#);
    }
}
