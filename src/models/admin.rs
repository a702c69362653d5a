use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdminRole {
    Admin,
    Staff,
}

/// Console account. Passwords are bcrypt hashes; the plain value only
/// appears in the signin request body.
#[derive(Debug, Deserialize, Serialize)]
pub struct AdminUser {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub role: Option<AdminRole>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_signin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failed_signins: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime>,
}

#[derive(Debug, Serialize)]
pub struct AdminSession {
    pub id: ObjectId,
    pub email: String,
    pub role: Option<AdminRole>,
}
