use serde::{Deserialize, Deserializer, Serialize, de};
use serde_json::{Map, Value};

// -------- REQUEST DTOs --------

/// Body of `POST /account/register`.
///
/// Every field is optional on the wire so that a missing `email` or
/// `password` reaches validation instead of failing deserialization.
/// Only a JSON object is accepted; arrays are not read by position.
#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>, // Plain text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RegistrationFields {
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    password: Option<String>,
    #[serde(default)]
    first_name: Option<String>,
    #[serde(default)]
    last_name: Option<String>,
}

impl<'de> Deserialize<'de> for RegistrationRequest {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let object = Map::<String, Value>::deserialize(deserializer)?;
        let fields = RegistrationFields::deserialize(Value::Object(object))
            .map_err(de::Error::custom)?;
        Ok(Self {
            email: fields.email,
            password: fields.password,
            first_name: fields.first_name,
            last_name: fields.last_name,
        })
    }
}

impl RegistrationRequest {
    /// Returns `(email, password)` when both are present and non-empty.
    pub fn credentials(&self) -> Option<(&str, &str)> {
        let email = self.email.as_deref().filter(|e| !e.is_empty())?;
        let password = self.password.as_deref().filter(|p| !p.is_empty())?;
        Some((email, password))
    }
}
