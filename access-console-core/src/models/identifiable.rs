/// Trait for records that can be uniquely identified by their backend id
pub trait Identifiable {
    /// Returns the unique identifier of the record
    fn get_id(&self) -> i64;
}
