//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render table cells and the edit dialog; pages own the signals
//! and pass them down explicitly.

pub mod edit_term_mapping_dialog;
pub mod status_badge;
