pub mod activity;
pub mod admin;
pub mod auth;
pub mod booking;
pub mod contact;
pub mod content;
pub mod health;
pub mod room;
