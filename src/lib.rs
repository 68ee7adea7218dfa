//! Lookup, translation and formatting helpers for Discord bots
//!
//! - [`resolver`]: mentions, IDs and names to guild members, roles, channels
//!   and messages
//! - [`locale`]: translation tables with English fallback
//! - [`format`]: durations, numbers and text
//! - [`adapters`]: trait seams over Discord and HTTP with their
//!   serenity/reqwest implementations

pub mod adapters;
pub mod commands;
pub mod embed;
pub mod format;
pub mod links;
pub mod locale;
pub mod logging;
pub mod params;
pub mod permissions;
pub mod resolver;
