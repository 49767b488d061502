//! Enumerated reservation attributes.
//!
//! Every enum carries a stable wire token (used in JSON, query parameters
//! and the database) and a display label (used in feeds, reports, emails
//! and the public form). The label is exposed through an accessor instead
//! of `Display` so the two representations cannot be mixed up.

use crate::define_labeled_enum;

/// Enum with a wire token and a display label, as generated by
/// [`define_labeled_enum!`](crate::define_labeled_enum).
pub trait LabeledEnum: Copy {
    fn token(&self) -> &'static str;
    fn display_name(&self) -> &'static str;
}

/// Error returned when a wire token does not match any variant.
#[derive(Debug, Clone, thiserror::Error)]
#[error("unknown {kind} value '{value}'")]
pub struct UnknownToken {
    kind: &'static str,
    value: String,
}

impl UnknownToken {
    pub fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}

define_labeled_enum!(
    /// Lifecycle status of a reservation. New reservations always start
    /// out `Pending`; staff move them from there.
    ReservationStatus {
        Pending = "PENDING" => "Pending Review",
        Confirmed = "CONFIRMED" => "Confirmed",
        Rejected = "REJECTED" => "Rejected",
        Cancelled = "CANCELLED" => "Cancelled",
        Completed = "COMPLETED" => "Completed",
    }
);

define_labeled_enum!(
    /// Which of the two bars the reservation is for.
    BarLocation {
        Hubble = "HUBBLE" => "Hubble Community Café",
        Meteor = "METEOR" => "Meteor Community Café",
    }
);

define_labeled_enum!(
    /// What kind of event it is, as asked on the reservation forms.
    EventType {
        Borrel = "BORREL" => "Borrel / Drinks",
        Lunch = "LUNCH" => "Lunch",
        Activity = "ACTIVITY" => "Activity",
        Graduation = "GRADUATION" => "Graduation / PhD Defense",
        Dinner = "DINNER" => "Dinner",
        Party = "PARTY" => "Party",
        Meeting = "MEETING" => "Meeting",
        Other = "OTHER" => "Other",
    }
);

define_labeled_enum!(
    /// Who the event is organized for.
    OrganizerType {
        Association = "ASSOCIATION" => "Association / Study Association",
        Company = "COMPANY" => "Company / Business",
        Private = "PRIVATE" => "Private / Individual",
        University = "UNIVERSITY" => "University / TU/e",
        Phd = "PHD" => "PhD Candidate",
        Student = "STUDENT" => "Student",
        Staff = "STAFF" => "Staff",
        Other = "OTHER" => "Other",
    }
);

define_labeled_enum!(
    /// Seating preference inside the bar.
    SeatingArea {
        Inside = "INSIDE" => "Inside",
        Outside = "OUTSIDE" => "Outside (Terrace)",
        Both = "BOTH" => "Both / No Preference",
    }
);

define_labeled_enum!(
    /// How the reservation will be paid.
    PaymentOption {
        Individual = "INDIVIDUAL" => "People pay individually",
        OnePerson = "ONE_PERSON" => "One person pays at the end",
        Invoice = "INVOICE" => "Invoice (>50 euros only)",
        CostCenter = "COST_CENTER" => "Kostenplaats",
        Vouchers = "VOUCHERS" => "Vouchers/Coins",
    }
);

define_labeled_enum!(
    /// Dietary preference for catered events.
    DietaryPreference {
        None = "NONE" => "No special requirements",
        Vegetarian = "VEGETARIAN" => "Vegetarian",
        Vegan = "VEGAN" => "Vegan",
        Halal = "HALAL" => "Halal",
        GlutenFree = "GLUTEN_FREE" => "Gluten-free",
        LactoseFree = "LACTOSE_FREE" => "Lactose-free",
        NutAllergy = "NUT_ALLERGY" => "Nut allergy",
        Other = "OTHER" => "Other (specify in comments)",
    }
);

#[cfg(test)]
#[path = "enums_tests.rs"]
mod enums_tests;
