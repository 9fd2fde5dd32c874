//! UUID utilities

use uuid::Uuid;

/// Generate a new UUIDv4
pub fn generate() -> Uuid {
    Uuid::new_v4()
}

/// Generate a new UUIDv4 in the hyphenated text form stored in `papers.id`
pub fn generate_id() -> String {
    generate().to_string()
}
