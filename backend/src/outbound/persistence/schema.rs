//! Diesel table definitions for the directory schema.
//!
//! `students.department_id` is a plain nullable text column: rows may point at
//! departments that do not exist, so joins between the two tables are always
//! written with an explicit `ON` clause.

diesel::table! {
    /// Pre-seeded departments; read-only from this service.
    departments (id) {
        /// Opaque text identifier.
        id -> Text,
        name -> Text,
        address -> Text,
    }
}

diesel::table! {
    /// Registered students.
    students (id) {
        /// Storage-assigned identifier (`BIGSERIAL`).
        id -> Int8,
        first_name -> Text,
        last_name -> Text,
        /// Caller-supplied external student code.
        student_id -> Text,
        address -> Text,
        /// Department reference; may be null or dangling.
        department_id -> Nullable<Text>,
    }
}

diesel::allow_tables_to_appear_in_same_query!(departments, students);
