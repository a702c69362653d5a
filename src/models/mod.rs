pub mod activity;
pub mod admin;
pub mod booking;
pub mod contact;
pub mod content;
pub mod room;
