//! Utility helpers shared by pages and components.
//!
//! DESIGN
//! ======
//! Utilities here are pure functions with no reactive state, so they can be
//! unit-tested without a browser.

pub mod mapping_route;
