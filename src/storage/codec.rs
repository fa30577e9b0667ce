//! Hash value encoding.
//!
//! Records are stored as JSON strings so every backend shares one typed
//! decode step at the store boundary.

use std::collections::HashMap;

use crate::domain::User;
use crate::error::StorageResult;

/// Serialize a user into a hash field value.
pub fn encode_user(user: &User) -> StorageResult<String> {
    Ok(serde_json::to_string(user)?)
}

/// Deserialize a hash field value into a user.
pub fn decode_user(raw: &str) -> StorageResult<User> {
    Ok(serde_json::from_str(raw)?)
}

/// Decode a full hash, skipping values that are not valid user records.
pub fn decode_entries(raw: HashMap<String, String>) -> HashMap<String, User> {
    raw.into_iter()
        .filter_map(|(id, value)| match decode_user(&value) {
            Ok(user) => Some((id, user)),
            Err(e) => {
                tracing::warn!(id = %id, error = %e, "Skipping undecodable user entry");
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StorageError;

    fn sample() -> User {
        User {
            id: "u1".to_string(),
            name: Some("Ann".to_string()),
            phone: Some("555".to_string()),
            email: None,
        }
    }

    #[test]
    fn test_encode_decode_preserves_fields() {
        let user = sample();
        let raw = encode_user(&user).unwrap();
        assert_eq!(decode_user(&raw).unwrap(), user);
    }

    #[test]
    fn test_decode_rejects_garbage() {
        assert!(matches!(
            decode_user("not a record"),
            Err(StorageError::Serialization(_))
        ));
    }

    #[test]
    fn test_decode_entries_skips_corrupt_values() {
        let mut raw = HashMap::new();
        raw.insert("u1".to_string(), encode_user(&sample()).unwrap());
        raw.insert("bad".to_string(), "{not json".to_string());

        let decoded = decode_entries(raw);
        assert_eq!(decoded.len(), 1);
        assert_eq!(decoded["u1"], sample());
    }
}
