//! Diesel schema for task ledger persistence.

diesel::table! {
    /// Work intervals owned by users.
    tasks (id) {
        /// Task identifier.
        id -> Uuid,
        /// Owning user identifier (foreign relation, no constraint).
        user_id -> Uuid,
        /// Free-text description.
        description -> Text,
        /// Start timestamp.
        started_at -> Timestamptz,
        /// End timestamp, null while the interval is open.
        ended_at -> Nullable<Timestamptz>,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last update timestamp.
        updated_at -> Timestamptz,
    }
}
