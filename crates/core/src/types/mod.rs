//! Domain types for the parking API.
//!
//! All entity identity is server-assigned; clients never generate IDs. The
//! structs serialize to the API's camelCase JSON shapes.

pub mod booking;
pub mod car;
pub mod id;
pub mod owner;
pub mod space;

pub use booking::{Booking, BookingDetailed, NewBooking, PaymentUpdate};
pub use car::{Car, NewCar};
pub use id::*;
pub use owner::{CarOwner, NewCarOwner};
pub use space::{NewParkingSpace, ParkingSpace};
