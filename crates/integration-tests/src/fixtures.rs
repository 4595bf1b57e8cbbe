//! Shared entity fixtures for the integration tests.

use valet_core::{
    Booking, BookingDetailed, BookingId, Car, CarId, CarOwner, OwnerId, ParkingSpace, SpaceId,
};

#[must_use]
pub fn owner(id: i64, full_name: &str) -> CarOwner {
    CarOwner {
        id: OwnerId::new(id),
        full_name: full_name.to_string(),
    }
}

#[must_use]
pub fn car(id: i64, number: &str, car_owner: CarOwner) -> Car {
    Car {
        id: CarId::new(id),
        number: number.to_string(),
        owner: car_owner,
    }
}

#[must_use]
pub fn space(id: i64, number: &str, is_available: bool) -> ParkingSpace {
    ParkingSpace {
        id: SpaceId::new(id),
        number: number.to_string(),
        is_available,
    }
}

#[must_use]
pub const fn booking(id: i64, car_id: i64, space_id: i64, is_paid: bool) -> Booking {
    Booking {
        id: BookingId::new(id),
        car_id: CarId::new(car_id),
        parking_space_id: SpaceId::new(space_id),
        is_paid,
    }
}

#[must_use]
pub fn booking_detailed(id: i64, booked_car: Car, booked_space: ParkingSpace) -> BookingDetailed {
    BookingDetailed {
        id: BookingId::new(id),
        car_id: booked_car.id,
        parking_space_id: booked_space.id,
        is_paid: false,
        car: booked_car,
        parking_space: booked_space,
    }
}
