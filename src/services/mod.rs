pub mod course_service;
pub mod lesson_service;
pub mod material_service;
pub mod progress_service;
pub mod user_service;

pub use course_service::CourseService;
pub use lesson_service::LessonService;
pub use material_service::MaterialService;
pub use progress_service::ProgressService;
pub use user_service::UserService;
