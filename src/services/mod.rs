pub mod booking_store;
pub mod booking_wizard;
pub mod image_service;
pub mod pricing_service;
