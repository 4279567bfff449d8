//! MCP server module
//!
//! Exposes the calculator and meal tools over stdio.

pub mod server;

pub use server::CalorieService;
