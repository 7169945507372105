//! Diesel schema for user directory persistence.

diesel::table! {
    /// Personnel identity records.
    users (id) {
        /// User identifier.
        id -> Uuid,
        /// Passport identifier in `SERIES NUMBER` form.
        #[max_length = 64]
        passport -> Varchar,
        /// Family name.
        surname -> Text,
        /// Given name.
        given_name -> Text,
        /// Patronymic.
        patronymic -> Text,
        /// Postal address.
        address -> Text,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last update timestamp.
        updated_at -> Timestamptz,
    }
}
