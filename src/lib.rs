//! Whiteboard challenges service
//!
//! This crate provides the working-hours engine, which counts the business
//! hours inside a timezone-aware range under a configurable work window,
//! lunch deduction and holiday list. It also provides the smaller challenges
//! served next to it (letter counting, Mastermind and a sarcastic chatbot)
//! and the HTTP API that exposes all of them.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod responder;
pub mod store;
