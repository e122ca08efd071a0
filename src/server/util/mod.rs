//! Utility functions and helpers for server operations.
//!
//! This module provides reusable utility functions for common server tasks, including
//! input validation (usernames, hex colors) and the recipe image codec (base64 payload
//! verification and blob reference derivation). These utilities are used across services
//! and controllers.

pub mod image;
pub mod validate;
