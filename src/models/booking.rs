use chrono::{DateTime as ChronoDateTime, Utc};
use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

fn default_adults() -> u32 {
    1
}

/// Contact and party details collected on the guest-details step.
/// Fields default so that missing input reaches the wizard's validation
/// (which can name the offending field) instead of failing deserialization.
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct GuestInfo {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub special_requests: String,
    #[serde(default = "default_adults")]
    pub adults: u32,
    #[serde(default)]
    pub children: u32,
}

/// Finalized booking record. The `room_name` through `total_price` fields
/// are snapshots computed once at submission time; later edits to the room
/// or activity offerings must not alter them.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Booking {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub check_in: DateTime,
    pub check_out: DateTime,
    pub room_id: String,
    pub activity_ids: Vec<String>,
    #[serde(flatten)]
    pub guest: GuestInfo,
    pub room_name: String,
    pub activity_names: Vec<String>,
    pub nights: i64,
    pub room_discounted_price: f64,
    pub activity_discounted_total: f64,
    pub total_price: f64,
    pub is_booked: bool,
    pub is_payment: bool,
    pub is_completed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime>,
}

/// Request body for the final booking submit.
#[derive(Debug, Deserialize)]
pub struct BookingInput {
    pub check_in: ChronoDateTime<Utc>,
    pub check_out: ChronoDateTime<Utc>,
    #[serde(default)]
    pub room_id: String,
    #[serde(default)]
    pub activity_ids: Vec<String>,
    #[serde(flatten)]
    pub guest: GuestInfo,
}

/// Admin-only update of the three lifecycle flags. Snapshot fields are
/// immutable once written.
#[derive(Debug, Deserialize)]
pub struct BookingStatusUpdate {
    pub is_booked: Option<bool>,
    pub is_payment: Option<bool>,
    pub is_completed: Option<bool>,
}
