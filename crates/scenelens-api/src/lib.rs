//! HTTP front-end: routes, handlers, server-rendered views and the central error responder.

pub mod constants;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod setup;
pub mod state;
pub mod telemetry;
pub mod utils;
pub mod views;
