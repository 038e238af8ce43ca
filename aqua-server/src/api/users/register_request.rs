use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    /// Display name (required)
    pub name: String,

    /// Login email, unique across users (required)
    pub email: String,

    /// Credential secret, stored opaque (required)
    pub password: String,

    /// Free-form sex/gender text
    #[serde(default)]
    pub sex: Option<String>,

    #[serde(default)]
    pub age: Option<i32>,

    /// Body weight the daily goal is derived from
    #[serde(default)]
    pub weight_kg: Option<f64>,
}
