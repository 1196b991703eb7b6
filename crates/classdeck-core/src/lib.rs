//! classdeck-core - Core library for Classdeck
//!
//! This crate contains the shared models, REST client, auth session service,
//! and the generic filterable-collection engine used by all Classdeck
//! client surfaces (CLI today, richer frontends later).

pub mod auth;
pub mod bulk;
pub mod client;
pub mod collection;
pub mod config;
pub mod envelope;
pub mod error;
pub mod form;
pub mod models;
pub mod notify;
pub mod util;

pub use error::{Error, Result};
pub use models::{Assignment, Course, ListItem, Notification, Report, Resource, Role};
