//! Bot Logger - leveled daily-file logging for the Discord bot
//!
//! This library provides the logger, its configuration, and the embed color
//! palette shared by the bot's commands.

pub mod colors;
pub mod config;
pub mod logging;
