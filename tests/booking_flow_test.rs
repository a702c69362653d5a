mod common;

use chrono::{TimeZone, Utc};
use serial_test::serial;

use bookverse_api::services::booking_wizard::{
    BookingDraft, BookingError, BookingWizard, WizardStep,
};
use common::{fixture_activities, fixture_rooms, BookingLog, TEST_DIVE_ID, TEST_ROOM_ID, TEST_SPA_ID};

fn guest_draft() -> BookingDraft {
    let mut draft = BookingDraft::new(
        Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap(),
        Utc.with_ymd_and_hms(2024, 6, 4, 0, 0, 0).unwrap(),
    );
    draft.select_room(TEST_ROOM_ID);
    let guest = draft.guest_mut();
    guest.first_name = "Ada".to_string();
    guest.last_name = "Lovelace".to_string();
    guest.email = "ada@example.com".to_string();
    guest.phone = "+441234567".to_string();
    guest.adults = 2;
    draft
}

#[actix_rt::test]
#[serial]
async fn test_full_wizard_journey() {
    let store = BookingLog::default();
    let rooms = fixture_rooms();
    let activities = fixture_activities();

    let mut wizard = BookingWizard::new(guest_draft());
    assert_eq!(wizard.step(), WizardStep::SelectRoom);

    wizard.draft.toggle_activity(TEST_SPA_ID);
    wizard.draft.toggle_activity(TEST_DIVE_ID);
    wizard.continue_to_details().unwrap();
    assert_eq!(wizard.step(), WizardStep::GuestDetails);

    // Step back to reconsider the room, then forward again
    wizard.back().unwrap();
    assert_eq!(wizard.step(), WizardStep::SelectRoom);
    wizard.continue_to_details().unwrap();

    let booking = wizard.submit(&store, &rooms, &activities).await.unwrap();
    assert_eq!(wizard.step(), WizardStep::Confirmed);

    // 3 nights at 200 less 10%, plus 50 and 80 less 25%, once
    assert_eq!(booking.nights, 3);
    assert_eq!(booking.total_price, 650.0);
    assert_eq!(booking.room_name, "Ocean View Suite");
    assert_eq!(
        booking.activity_names,
        vec!["Spa Day".to_string(), "Reef Dive".to_string()]
    );
    assert_eq!(store.bookings.lock().unwrap().len(), 1);
}

#[actix_rt::test]
#[serial]
async fn test_second_incomplete_booking_for_same_guest_is_blocked() {
    let store = BookingLog::default();
    let rooms = fixture_rooms();
    let activities = fixture_activities();

    let mut first = BookingWizard::new(guest_draft());
    first.continue_to_details().unwrap();
    first.submit(&store, &rooms, &activities).await.unwrap();

    let mut second = BookingWizard::new(guest_draft());
    second.continue_to_details().unwrap();
    let err = second.submit(&store, &rooms, &activities).await.unwrap_err();
    assert!(matches!(err, BookingError::Duplicate));
    assert_eq!(second.step(), WizardStep::GuestDetails);
    assert_eq!(store.bookings.lock().unwrap().len(), 1);
}

#[actix_rt::test]
#[serial]
async fn test_completed_booking_does_not_block_new_one() {
    let store = BookingLog::default();
    let rooms = fixture_rooms();
    let activities = fixture_activities();

    let mut first = BookingWizard::new(guest_draft());
    first.continue_to_details().unwrap();
    first.submit(&store, &rooms, &activities).await.unwrap();

    // Staff closed out the stay; the guard only watches incomplete bookings
    store.bookings.lock().unwrap()[0].is_completed = true;

    let mut second = BookingWizard::new(guest_draft());
    second.continue_to_details().unwrap();
    second.submit(&store, &rooms, &activities).await.unwrap();
    assert_eq!(store.bookings.lock().unwrap().len(), 2);
}

#[actix_rt::test]
#[serial]
async fn test_unknown_activity_prices_at_zero() {
    let store = BookingLog::default();
    let rooms = fixture_rooms();
    let activities = fixture_activities();

    let mut wizard = BookingWizard::new(guest_draft());
    wizard.draft.toggle_activity("65f0ffffffffffffffffffff");
    wizard.continue_to_details().unwrap();

    let booking = wizard.submit(&store, &rooms, &activities).await.unwrap();
    assert_eq!(booking.activity_discounted_total, 0.0);
    assert_eq!(booking.activity_names, vec!["N/A".to_string()]);
    // Room-only total: 3 nights at 180
    assert_eq!(booking.total_price, 540.0);
}
