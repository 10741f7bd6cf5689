//! Data models for stored entities.

pub mod contact;

pub use contact::Contact;
