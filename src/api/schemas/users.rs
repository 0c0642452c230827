use serde::{Deserialize, Serialize};

/// Wire representation of a user. Exactly two fields are exposed: the
/// server-assigned id and the username.
#[derive(Debug, Serialize)]
pub struct User {
    pub id: i64,
    pub username: String,
}

#[derive(Debug, Serialize)]
pub struct UserList {
    pub results: Vec<User>,
}

/// Write payload shared by create and update. The username is modelled as
/// optional so a missing field surfaces as a validation error rather than a
/// deserialization rejection.
#[derive(Debug, Deserialize)]
pub struct UserWrite {
    #[serde(default)]
    pub username: Option<String>,
}

impl UserWrite {
    /// Extracts the username, rejecting missing or blank values.
    ///
    /// # Errors
    /// Returns the message describing the failing `username` field.
    pub fn validate(self) -> Result<String, String> {
        match self.username {
            Some(username) if !username.trim().is_empty() => Ok(username),
            Some(_) => Err("This field may not be blank.".to_string()),
            None => Err("This field is required.".to_string()),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ApiRoot {
    pub users: String,
}
