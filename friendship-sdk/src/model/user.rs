use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use yew::AttrValue;

/// user record as the backend serializes it.
/// only `username` matters to the client, the remaining profile fields are carried through untouched
#[derive(Serialize, Deserialize, Default, Clone, Debug, PartialEq)]
pub struct UserRef {
    pub username: AttrValue,
    #[serde(flatten)]
    pub profile: Map<String, Value>,
}

impl UserRef {
    pub fn new(username: impl Into<AttrValue>) -> Self {
        Self {
            username: username.into(),
            profile: Map::new(),
        }
    }

    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.profile.insert(key.into(), value.into());
        self
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_profile_fields_survive() {
        let json = r#"{"username":"bob","email":"bob@example.com","id":7}"#;
        let user: UserRef = serde_json::from_str(json).unwrap();
        assert_eq!(user.username, "bob");
        assert_eq!(user.profile.get("id"), Some(&Value::from(7)));

        let back: Value = serde_json::to_value(&user).unwrap();
        assert_eq!(back, serde_json::from_str::<Value>(json).unwrap());
    }
}
