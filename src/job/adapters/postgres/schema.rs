//! Diesel schema for job persistence.

diesel::table! {
    /// Tracked job applications.
    jobs (id) {
        /// Store-assigned identifier.
        id -> Int8,
        /// Job title.
        #[max_length = 200]
        title -> Varchar,
        /// Company name.
        #[max_length = 200]
        company -> Varchar,
        /// Canonical status name, guarded by a check constraint.
        #[max_length = 50]
        status -> Varchar,
        /// Optional application date.
        applied_on -> Nullable<Date>,
        /// Optional free-form notes.
        #[max_length = 2000]
        notes -> Nullable<Varchar>,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last modification timestamp.
        updated_at -> Timestamptz,
    }
}
