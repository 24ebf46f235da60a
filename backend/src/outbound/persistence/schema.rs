//! Diesel table definitions for the PostgreSQL schema.
//!
//! Must match `backend/migrations` exactly.

diesel::table! {
    /// Exercise owners.
    users (id) {
        /// Primary key: UUID v4 identifier.
        id -> Uuid,
        /// Username as submitted; not unique.
        username -> Text,
        /// Insertion timestamp, used for list ordering.
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// Logged exercises. `owner_id` has no foreign key.
    exercises (id) {
        /// Primary key: UUID v4 identifier.
        id -> Uuid,
        /// Identifier of the owning user.
        owner_id -> Uuid,
        description -> Text,
        duration -> Int4,
        /// Calendar day the exercise was performed on.
        date -> Date,
        /// Insertion timestamp, used for log ordering.
        created_at -> Timestamptz,
    }
}
