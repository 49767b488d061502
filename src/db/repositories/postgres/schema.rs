// Diesel table definition for the reservation store.

diesel::table! {
    reservations (id) {
        id -> BigInt,
        confirmation_code -> Text,
        contact_name -> Text,
        email -> Text,
        phone_number -> Nullable<Text>,
        organization_name -> Nullable<Text>,
        event_title -> Text,
        description -> Nullable<Text>,
        event_type -> Text,
        organizer_type -> Text,
        expected_guests -> Nullable<Integer>,
        event_date -> Date,
        start_time -> Time,
        end_time -> Time,
        setup_time_minutes -> Nullable<Integer>,
        location -> Text,
        seating_area -> Nullable<Text>,
        specific_area -> Nullable<Text>,
        payment_option -> Text,
        cost_center -> Nullable<Text>,
        invoice_name -> Nullable<Text>,
        invoice_address -> Nullable<Text>,
        vat_number -> Nullable<Text>,
        food_required -> Nullable<Bool>,
        dietary_preference -> Nullable<Text>,
        dietary_notes -> Nullable<Text>,
        drinks_included -> Nullable<Bool>,
        budget_per_person -> Nullable<Double>,
        comments -> Nullable<Text>,
        terms_accepted -> Nullable<Bool>,
        referral_source -> Nullable<Text>,
        status -> Text,
        internal_notes -> Nullable<Text>,
        created_at -> Timestamp,
        updated_at -> Timestamp,
        confirmed_by -> Nullable<Text>,
    }
}
