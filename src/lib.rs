//! # Body Composition Telegram Bot
//!
//! A Telegram bot that walks a user through a short questionnaire and
//! computes either their Body Mass Index or a Navy-method body-fat
//! estimate, followed by risk notes, recommendations and a consultation
//! link.

pub mod bot;
pub mod commands;
pub mod config;
pub mod dialogue;
pub mod errors;
pub mod input_parser;
pub mod localization;
pub mod logging;
pub mod measurement_types;
pub mod metrics;
pub mod registry;
pub mod response;
pub mod risk;
