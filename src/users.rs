use std::collections::HashMap;

use serde::Deserialize;
use serde_json::Value;

/// Maps Slack user IDs to the names shown for `<@ID>` mentions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserDirectory {
    names: HashMap<String, String>,
}

#[derive(Debug, Deserialize)]
struct Member {
    id: Option<String>,
    name: Option<String>,
    real_name: Option<String>,
    profile: Option<Profile>,
}

#[derive(Debug, Deserialize)]
struct Profile {
    display_name: Option<String>,
    real_name: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum UsersList {
    Response { members: Vec<Member> },
    Members(Vec<Member>),
}

impl Member {
    fn display_name(&self) -> Option<&str> {
        let profile = self.profile.as_ref();
        [
            profile.and_then(|p| p.display_name.as_deref()),
            profile.and_then(|p| p.real_name.as_deref()),
            self.real_name.as_deref(),
            self.name.as_deref(),
        ]
        .into_iter()
        .flatten()
        .find(|name| !name.is_empty())
    }

    fn into_entry(self) -> Option<(String, String)> {
        let name = self.display_name()?.to_string();
        let id = self.id.filter(|id| !id.is_empty())?;
        Some((id, name))
    }
}

impl UserDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: impl Into<String>, name: impl Into<String>) -> Option<String> {
        self.names.insert(id.into(), name.into())
    }

    pub fn get(&self, id: &str) -> Option<&str> {
        self.names.get(id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.names.iter().map(|(id, name)| (id.as_str(), name.as_str()))
    }

    /// Build a directory from a `users.list` response body.
    ///
    /// Accepts either the full response (`{"ok": true, "members": [...]}`) or
    /// a bare array of member objects. The name for each member is the first
    /// non-empty of `profile.display_name`, `profile.real_name`, `real_name`
    /// and `name`; members without any of them are skipped.
    pub fn from_users_list(json: &str) -> Result<Self, serde_json::Error> {
        let members = match serde_json::from_str::<UsersList>(json)? {
            UsersList::Response { members } | UsersList::Members(members) => members,
        };
        Ok(members.into_iter().filter_map(Member::into_entry).collect())
    }

    /// Build a directory from an already parsed JSON value.
    ///
    /// Besides the `users.list` shapes this accepts a flat `{"U123": "Alice"}`
    /// object. Returns `None` when the value has none of these shapes.
    pub fn from_json_value(value: &Value) -> Option<Self> {
        match value {
            Value::Array(_) => members_from_value(value),
            Value::Object(obj) => {
                if let Some(members) = obj.get("members") {
                    return members_from_value(members);
                }
                obj.iter()
                    .map(|(id, name)| name.as_str().map(|name| (id.clone(), name.to_string())))
                    .collect()
            }
            _ => None,
        }
    }
}

fn members_from_value(value: &Value) -> Option<UserDirectory> {
    let members = Vec::<Member>::deserialize(value).ok()?;
    Some(members.into_iter().filter_map(Member::into_entry).collect())
}

impl<K, V> FromIterator<(K, V)> for UserDirectory
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut directory = Self::new();
        directory.extend(iter);
        directory
    }
}

impl<K, V> Extend<(K, V)> for UserDirectory
where
    K: Into<String>,
    V: Into<String>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (id, name) in iter {
            self.insert(id, name);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_insert_and_get() {
        let mut users = UserDirectory::new();
        assert!(users.is_empty());
        users.insert("U123", "Alice");
        assert_eq!(users.get("U123"), Some("Alice"));
        assert_eq!(users.get("U999"), None);
        assert_eq!(users.len(), 1);
    }

    #[test]
    fn test_insert_replaces() {
        let mut users: UserDirectory = [("U1", "old")].into_iter().collect();
        assert_eq!(users.insert("U1", "new"), Some("old".to_string()));
        assert_eq!(users.get("U1"), Some("new"));
    }

    #[test]
    fn test_users_list_response() {
        let body = r#"{
            "ok": true,
            "members": [
                {"id": "U1", "name": "alice", "real_name": "Alice Liddell",
                 "profile": {"display_name": "ali", "real_name": "Alice Liddell"}},
                {"id": "U2", "name": "bob", "profile": {"display_name": "", "real_name": "Bob Dylan"}},
                {"id": "U3", "name": "carol", "real_name": "Carol"},
                {"id": "U4", "name": "dave"},
                {"id": "U5"},
                {"name": "no-id"}
            ],
            "response_metadata": {"next_cursor": ""}
        }"#;
        let users = UserDirectory::from_users_list(body).unwrap();
        assert_eq!(users.get("U1"), Some("ali"));
        assert_eq!(users.get("U2"), Some("Bob Dylan"));
        assert_eq!(users.get("U3"), Some("Carol"));
        assert_eq!(users.get("U4"), Some("dave"));
        assert_eq!(users.get("U5"), None);
        assert_eq!(users.len(), 4);
    }

    #[test]
    fn test_users_list_bare_array() {
        let users = UserDirectory::from_users_list(r#"[{"id": "U1", "name": "alice"}]"#).unwrap();
        assert_eq!(users.get("U1"), Some("alice"));
    }

    #[test]
    fn test_users_list_invalid_json() {
        assert!(UserDirectory::from_users_list("not json").is_err());
        assert!(UserDirectory::from_users_list(r#"{"ok": false}"#).is_err());
    }

    #[test]
    fn test_from_json_value_flat_object() {
        let users = UserDirectory::from_json_value(&json!({"U1": "Alice", "U2": "Bob"})).unwrap();
        assert_eq!(users.get("U1"), Some("Alice"));
        assert_eq!(users.get("U2"), Some("Bob"));
    }

    #[test]
    fn test_from_json_value_members() {
        let value = json!({"members": [{"id": "U1", "profile": {"display_name": "ali"}}]});
        let users = UserDirectory::from_json_value(&value).unwrap();
        assert_eq!(users.get("U1"), Some("ali"));

        let value = json!([{"id": "U2", "name": "bob"}]);
        let users = UserDirectory::from_json_value(&value).unwrap();
        assert_eq!(users.get("U2"), Some("bob"));
    }

    #[test]
    fn test_from_json_value_rejects_other_shapes() {
        assert!(UserDirectory::from_json_value(&json!("U1")).is_none());
        assert!(UserDirectory::from_json_value(&json!({"U1": 42})).is_none());
        assert!(UserDirectory::from_json_value(&json!([1, 2])).is_none());
    }
}
