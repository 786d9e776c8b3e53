//! Client-side view state.
//!
//! DESIGN
//! ======
//! State is plain data with transition methods so the page components stay
//! thin and the load/edit state machines can be tested without a browser.

pub mod edit;
pub mod list;
