use chrono::{DateTime, Utc};
use mongodb::bson;

use crate::models::activity::Activity;
use crate::models::booking::{Booking, BookingInput, GuestInfo};
use crate::models::room::Room;
use crate::services::pricing_service::PricingService;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardStep {
    SelectRoom,
    GuestDetails,
    Confirmed,
}

#[derive(Debug)]
pub enum BookingError {
    /// Missing or malformed required field; fixable by the user in place.
    Validation(String),
    /// An incomplete booking already exists for the same contact identity.
    Duplicate,
    /// Write to the store failed; resubmitting is an explicit user action.
    Persistence(String),
}

impl std::fmt::Display for BookingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BookingError::Validation(msg) => write!(f, "Validation error: {}", msg),
            BookingError::Duplicate => write!(
                f,
                "An incomplete booking already exists for this email and phone"
            ),
            BookingError::Persistence(msg) => write!(f, "Persistence error: {}", msg),
        }
    }
}

impl std::error::Error for BookingError {}

/// Append-only persistence boundary for finalized bookings. The duplicate
/// check and the insert are two separate operations with no transaction
/// between them; two concurrent submits with identical contact details can
/// both pass the check. Accepted weak-consistency behavior.
#[allow(async_fn_in_trait)]
pub trait BookingStore {
    async fn find_incomplete(&self, email: &str, phone: &str) -> Result<bool, BookingError>;
    async fn insert(&self, booking: &Booking) -> Result<(), BookingError>;
}

/// In-progress booking, owned by one session and never persisted until the
/// final submit. Mutation here is permissive; validation belongs to the
/// wizard so the UI can disable invalid choices instead of the state
/// rejecting them.
#[derive(Debug, Clone)]
pub struct BookingDraft {
    pub check_in: DateTime<Utc>,
    pub check_out: DateTime<Utc>,
    pub room_id: String,
    pub activity_ids: Vec<String>,
    pub guest: GuestInfo,
}

impl BookingDraft {
    pub fn new(check_in: DateTime<Utc>, check_out: DateTime<Utc>) -> Self {
        Self {
            check_in,
            check_out,
            room_id: String::new(),
            activity_ids: Vec::new(),
            guest: GuestInfo::default(),
        }
    }

    pub fn select_room(&mut self, room_id: impl Into<String>) {
        self.room_id = room_id.into();
    }

    /// Adds the activity if absent, removes it if present. Selection order
    /// is kept for display.
    pub fn toggle_activity(&mut self, activity_id: &str) {
        if let Some(pos) = self.activity_ids.iter().position(|id| id == activity_id) {
            self.activity_ids.remove(pos);
        } else {
            self.activity_ids.push(activity_id.to_string());
        }
    }

    pub fn set_dates(&mut self, check_in: DateTime<Utc>, check_out: DateTime<Utc>) {
        self.check_in = check_in;
        self.check_out = check_out;
    }

    pub fn guest_mut(&mut self) -> &mut GuestInfo {
        &mut self.guest
    }
}

impl From<BookingInput> for BookingDraft {
    fn from(input: BookingInput) -> Self {
        Self {
            check_in: input.check_in,
            check_out: input.check_out,
            room_id: input.room_id,
            activity_ids: input.activity_ids,
            guest: input.guest,
        }
    }
}

/// Step controller for the booking flow: SelectRoom -> GuestDetails ->
/// Confirmed, with a back edge from GuestDetails. Confirmed is terminal for
/// the session. Every failed transition leaves the step unchanged.
pub struct BookingWizard {
    pub draft: BookingDraft,
    step: WizardStep,
}

impl BookingWizard {
    pub fn new(draft: BookingDraft) -> Self {
        Self {
            draft,
            step: WizardStep::SelectRoom,
        }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    /// SelectRoom -> GuestDetails. The room guard reads the draft at
    /// transition time, not from an earlier snapshot.
    pub fn continue_to_details(&mut self) -> Result<(), BookingError> {
        if self.step != WizardStep::SelectRoom {
            return Err(BookingError::Validation(
                "room selection step already completed".to_string(),
            ));
        }
        if self.draft.room_id.trim().is_empty() {
            return Err(BookingError::Validation(
                "please select a room to continue".to_string(),
            ));
        }
        self.step = WizardStep::GuestDetails;
        Ok(())
    }

    /// GuestDetails -> SelectRoom. There is no way back from Confirmed.
    pub fn back(&mut self) -> Result<(), BookingError> {
        if self.step != WizardStep::GuestDetails {
            return Err(BookingError::Validation(
                "cannot go back from this step".to_string(),
            ));
        }
        self.step = WizardStep::SelectRoom;
        Ok(())
    }

    /// GuestDetails -> Confirmed. Validates the details, runs the duplicate
    /// guard, computes the price snapshot and persists the booking with a
    /// single insert. Any failure leaves the wizard in GuestDetails so the
    /// user can fix the input or retry.
    pub async fn submit<S: BookingStore>(
        &mut self,
        store: &S,
        rooms: &[Room],
        activities: &[Activity],
    ) -> Result<Booking, BookingError> {
        if self.step != WizardStep::GuestDetails {
            return Err(BookingError::Validation(
                "booking is not ready to submit".to_string(),
            ));
        }

        // One submit in flight per draft: the exclusive borrow holds for the
        // whole call, so a second attempt can only start once this one has
        // returned.
        match Self::finalize(&self.draft, store, rooms, activities).await {
            Ok(booking) => {
                self.step = WizardStep::Confirmed;
                Ok(booking)
            }
            Err(err) => Err(err),
        }
    }

    pub fn validate_details(draft: &BookingDraft) -> Result<(), BookingError> {
        let guest = &draft.guest;
        if guest.first_name.trim().is_empty() || guest.last_name.trim().is_empty() {
            return Err(BookingError::Validation(
                "first and last name are required".to_string(),
            ));
        }
        if !guest.email.contains('@') {
            return Err(BookingError::Validation(
                "a valid email address is required".to_string(),
            ));
        }
        if guest.phone.trim().is_empty() {
            return Err(BookingError::Validation(
                "a phone number is required".to_string(),
            ));
        }
        if guest.adults < 1 {
            return Err(BookingError::Validation(
                "at least one adult is required".to_string(),
            ));
        }
        Ok(())
    }

    async fn finalize<S: BookingStore>(
        draft: &BookingDraft,
        store: &S,
        rooms: &[Room],
        activities: &[Activity],
    ) -> Result<Booking, BookingError> {
        Self::validate_details(draft)?;

        // Existence is checked here, against the loaded offerings, so a room
        // cleared after the select step cannot slip through.
        let room = rooms
            .iter()
            .find(|r| r.id_hex() == draft.room_id)
            .ok_or_else(|| {
                BookingError::Validation("the selected room is no longer available".to_string())
            })?;

        // Unknown activity ids are tolerated: they price at zero and record
        // as "N/A", matching how the site has always rendered them.
        let selected: Vec<&Activity> = draft
            .activity_ids
            .iter()
            .filter_map(|id| activities.iter().find(|a| &a.id_hex() == id))
            .collect();
        let activity_names: Vec<String> = draft
            .activity_ids
            .iter()
            .map(|id| {
                activities
                    .iter()
                    .find(|a| &a.id_hex() == id)
                    .map(|a| a.name.clone())
                    .unwrap_or_else(|| "N/A".to_string())
            })
            .collect();

        let quote = PricingService::quote(Some(room), &selected, draft.check_in, draft.check_out)
            .ok_or_else(|| {
                BookingError::Validation("check-out must be after check-in".to_string())
            })?;

        if store
            .find_incomplete(&draft.guest.email, &draft.guest.phone)
            .await?
        {
            return Err(BookingError::Duplicate);
        }

        let booking = Booking {
            id: None,
            check_in: bson::DateTime::from_millis(draft.check_in.timestamp_millis()),
            check_out: bson::DateTime::from_millis(draft.check_out.timestamp_millis()),
            room_id: draft.room_id.clone(),
            activity_ids: draft.activity_ids.clone(),
            guest: draft.guest.clone(),
            room_name: room.name.clone(),
            activity_names,
            nights: quote.nights,
            room_discounted_price: PricingService::round2(quote.room_rate),
            activity_discounted_total: PricingService::round2(quote.activity_total),
            total_price: PricingService::round2(quote.grand_total),
            is_booked: false,
            is_payment: false,
            is_completed: false,
            created_at: Some(bson::DateTime::now()),
        };

        store.insert(&booking).await?;
        Ok(booking)
    }
}
