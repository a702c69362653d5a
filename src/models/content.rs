use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

/// Singleton document of banner images, one field per page section.
/// The home carousel holds up to four images; the rest are single URLs.
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Banner {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    #[serde(default)]
    pub home: Vec<String>,
    #[serde(default)]
    pub rooms: String,
    #[serde(default)]
    pub activities: String,
    #[serde(default)]
    pub gallery: String,
    #[serde(default)]
    pub about: String,
    #[serde(default)]
    pub contact: String,
    #[serde(default)]
    pub footer: String,
}

/// Singleton about-page content.
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct AboutContent {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub years_of_excellence: i32,
    #[serde(default)]
    pub room_count: i32,
    #[serde(default)]
    pub image: String,
}

/// Singleton company contact details shown in the footer and contact page.
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct CompanyDetails {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub logo: String,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Faq {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct FaqInput {
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Feature {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub icon: String,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct FeatureInput {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub icon: String,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct GalleryImage {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub url: String,
    #[serde(default)]
    pub caption: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime>,
}
