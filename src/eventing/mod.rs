//! Eventing - Service to State Notifications

pub mod app_event;
