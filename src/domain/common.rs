/// Identifies entities that expose a stable unique identifier.
pub trait Identifiable {
    fn id(&self) -> &str;
}

/// Generates a fresh random record identifier.
pub fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
