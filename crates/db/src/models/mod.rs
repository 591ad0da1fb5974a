//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) for patches

pub mod classroom;
pub mod dashboard;
pub mod fee;
pub mod fee_structure;
pub mod gallery;
pub mod important_date;
pub mod notice;
pub mod session;
pub mod staff;
pub mod student;
pub mod student_class;
