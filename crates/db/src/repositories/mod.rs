//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod classroom_repo;
pub mod dashboard_repo;
pub mod fee_repo;
pub mod fee_structure_repo;
pub mod gallery_repo;
pub mod important_date_repo;
pub mod notice_repo;
pub mod session_repo;
pub mod staff_repo;
pub mod student_class_repo;
pub mod student_repo;

pub use classroom_repo::ClassRoomRepo;
pub use dashboard_repo::DashboardRepo;
pub use fee_repo::FeeRepo;
pub use fee_structure_repo::FeeStructureRepo;
pub use gallery_repo::GalleryRepo;
pub use important_date_repo::ImportantDateRepo;
pub use notice_repo::NoticeRepo;
pub use session_repo::SessionRepo;
pub use staff_repo::StaffRepo;
pub use student_class_repo::StudentClassRepo;
pub use student_repo::StudentRepo;
