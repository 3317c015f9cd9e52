//! Opaque identifier generation.
//!
//! Record ids are short random tokens drawn from OS entropy, never from the
//! seeded stream: two runs with the same seed produce the same data but fresh
//! identifiers.

/// Returns a short collision-resistant id (the first segment of a v4 UUID).
pub fn short_id() -> String {
    let id = uuid::Uuid::new_v4().to_string();
    match id.split('-').next() {
        Some(part) if !part.is_empty() => part.to_string(),
        _ => id,
    }
}
