//! Schoolhouse domain rules.
//!
//! Pure logic shared by the repository and HTTP layers: identifier formats,
//! session calendar math, fee aggregation and the class assignment
//! consistency checks. Nothing in this crate performs I/O.

pub mod assignment;
pub mod class_code;
pub mod error;
pub mod fees;
pub mod roles;
pub mod roll_number;
pub mod search;
pub mod session_period;
pub mod student;
pub mod types;
