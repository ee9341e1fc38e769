//! Account entity and its JSON shape. Zero values mean "not supplied" and are omitted on output.

use serde::{Deserialize, Deserializer, Serialize};

fn is_zero(n: &i64) -> bool {
    *n == 0
}

/// An explicit JSON `null` decodes to the zero value, same as an omitted key.
fn null_as_default<'de, D, T>(de: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(de)?.unwrap_or_default())
}

/// One stored account. Also used as the partial payload for updates: every
/// field left at its zero value is treated as absent.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Account {
    #[serde(skip_serializing_if = "is_zero", deserialize_with = "null_as_default")]
    pub id: i64,
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "null_as_default")]
    pub firstname: String,
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "null_as_default")]
    pub lastname: String,
    #[serde(skip_serializing_if = "is_zero", deserialize_with = "null_as_default")]
    pub mobilenumber: i64,
    /// Write-only: accepted on input, stored as a hash, never serialized.
    #[serde(skip_serializing, deserialize_with = "null_as_default")]
    pub password: String,
}

impl Account {
    /// True when no mutable field carries a value (an all-default update body).
    pub fn is_blank(&self) -> bool {
        self.firstname.is_empty()
            && self.lastname.is_empty()
            && self.mobilenumber == 0
            && self.password.is_empty()
    }

    /// Copy every non-default field of `patch` onto `self`. `id` is never touched.
    pub fn apply(&mut self, patch: &Account) {
        if !patch.firstname.is_empty() {
            self.firstname = patch.firstname.clone();
        }
        if !patch.lastname.is_empty() {
            self.lastname = patch.lastname.clone();
        }
        if patch.mobilenumber != 0 {
            self.mobilenumber = patch.mobilenumber;
        }
        if !patch.password.is_empty() {
            self.password = patch.password.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn omits_zero_fields_and_password() {
        let a = Account {
            id: 3,
            firstname: "Ann".into(),
            password: "secret".into(),
            ..Default::default()
        };
        let v = serde_json::to_value(&a).unwrap();
        assert_eq!(v, serde_json::json!({"id": 3, "firstname": "Ann"}));
    }

    #[test]
    fn partial_body_deserializes_with_defaults() {
        let a: Account = serde_json::from_str(r#"{"lastname":"Chen"}"#).unwrap();
        assert_eq!(a.lastname, "Chen");
        assert!(a.firstname.is_empty());
        assert_eq!(a.mobilenumber, 0);
        assert!(!a.is_blank());
        let empty: Account = serde_json::from_str("{}").unwrap();
        assert!(empty.is_blank());
    }

    #[test]
    fn null_fields_decode_as_zero_values() {
        let a: Account =
            serde_json::from_str(r#"{"id":null,"firstname":null,"lastname":"Chen","mobilenumber":null}"#).unwrap();
        assert_eq!(a.id, 0);
        assert!(a.firstname.is_empty());
        assert_eq!(a.lastname, "Chen");
        assert_eq!(a.mobilenumber, 0);
    }

    #[test]
    fn apply_keeps_omitted_fields() {
        let mut stored = Account {
            id: 1,
            firstname: "Ann".into(),
            lastname: "Lee".into(),
            mobilenumber: 5551234,
            password: "h".into(),
        };
        let patch = Account {
            id: 99,
            lastname: "Chen".into(),
            ..Default::default()
        };
        stored.apply(&patch);
        assert_eq!(stored.id, 1);
        assert_eq!(stored.firstname, "Ann");
        assert_eq!(stored.lastname, "Chen");
        assert_eq!(stored.mobilenumber, 5551234);
        assert_eq!(stored.password, "h");
    }
}
