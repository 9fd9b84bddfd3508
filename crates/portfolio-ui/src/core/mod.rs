//! Core, DOM-free primitives and helpers for the picker UI.
pub mod catalog;
pub mod config;
pub mod dates;
pub mod toggle;
