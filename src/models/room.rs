use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

/// Read-only offering presented for selection in the booking flow.
/// Created and edited through the admin surface only.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Room {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    pub description: String,
    /// Nightly base rate before any discount.
    pub price: f64,
    /// Percent off the base rate, 0..=100.
    #[serde(default)]
    pub discount: f64,
    #[serde(default)]
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime>,
}

impl Room {
    pub fn id_hex(&self) -> String {
        self.id.map(|id| id.to_hex()).unwrap_or_default()
    }
}

/// Admin create/update payload. Timestamps and the id are owned by the API.
#[derive(Debug, Deserialize, Serialize)]
pub struct RoomInput {
    pub name: String,
    pub description: String,
    pub price: f64,
    #[serde(default)]
    pub discount: f64,
    #[serde(default)]
    pub image: String,
}
