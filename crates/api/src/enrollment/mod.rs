//! Class assignment service.
//!
//! [`AssignmentService`] loads the state the consistency checks need, runs
//! them, and performs the write. Held in [`AppState`](crate::state::AppState)
//! as an `Arc<AssignmentService>`.

pub mod service;

pub use service::AssignmentService;
