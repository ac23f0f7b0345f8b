use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Serialize, Deserialize)]
pub struct GoogleNearbySearchResponse {
    #[serde(default)]
    pub html_attributions: Vec<String>,

    #[serde(default)]
    pub results: Vec<Value>,

    pub status: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_page_token: Option<String>,
}
