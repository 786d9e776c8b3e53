//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its load state and delegates cell and dialog rendering to
//! `components`.

pub mod code_type_mappings;
pub mod term_mappings;
