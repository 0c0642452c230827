/// A stored user record. The id is assigned by the database sequence and is
/// never reused after deletion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub username: String,
}
