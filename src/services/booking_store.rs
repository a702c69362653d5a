use mongodb::{bson::doc, Client, Collection};

use crate::db::mongo::DB_NAME;
use crate::models::booking::Booking;
use crate::services::booking_wizard::{BookingError, BookingStore};

/// MongoDB-backed booking store. `find_incomplete` and `insert` are separate
/// unguarded operations; there is no uniqueness constraint on the contact
/// identity.
pub struct MongoBookingStore {
    collection: Collection<Booking>,
}

impl MongoBookingStore {
    pub fn new(client: &Client) -> Self {
        Self {
            collection: client.database(DB_NAME).collection("bookings"),
        }
    }
}

impl BookingStore for MongoBookingStore {
    async fn find_incomplete(&self, email: &str, phone: &str) -> Result<bool, BookingError> {
        let filter = doc! {
            "email": email,
            "phone": phone,
            "is_completed": false,
        };
        match self.collection.find_one(filter).await {
            Ok(existing) => Ok(existing.is_some()),
            Err(err) => Err(BookingError::Persistence(err.to_string())),
        }
    }

    async fn insert(&self, booking: &Booking) -> Result<(), BookingError> {
        self.collection
            .insert_one(booking)
            .await
            .map(|_| ())
            .map_err(|err| BookingError::Persistence(err.to_string()))
    }
}
