//! Server application core modules.
//!
//! This module contains all server-side functionality for the Platter application, including
//! HTTP routing, session identity, database operations, recipe composition validation, and
//! the relation toggle services. It provides the complete backend infrastructure for managing
//! user accounts, recipes, favorites, shopping carts, and subscriptions.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod util;
