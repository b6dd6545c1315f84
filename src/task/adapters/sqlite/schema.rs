//! Diesel schema for task persistence.

diesel::table! {
    /// Task records.
    tasks (id) {
        /// Store-assigned surrogate key.
        id -> BigInt,
        /// Non-empty task title.
        title -> Text,
        /// Optional free-form description.
        description -> Nullable<Text>,
        /// Workflow state.
        status -> Text,
        /// Scheduling priority.
        priority -> Text,
        /// Creation timestamp.
        created_at -> Timestamp,
        /// Last update timestamp.
        updated_at -> Timestamp,
    }
}
