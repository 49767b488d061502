//! Domain model: the reservation entity, its enumerated attributes and
//! confirmation codes.

pub mod code;
pub mod enums;
#[cfg(test)]
pub mod fixtures;
pub mod macros;
pub mod reservation;
pub mod timefmt;

pub use code::{generate_confirmation_code, CODE_ALPHABET, CODE_LEN};
pub use enums::{
    BarLocation, DietaryPreference, EventType, LabeledEnum, OrganizerType, PaymentOption,
    ReservationStatus, SeatingArea, UnknownToken,
};
pub use reservation::{Reservation, ReservationDraft};
