pub mod assignment;
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
