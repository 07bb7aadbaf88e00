pub mod course_repository;
pub mod lesson_repository;
pub mod material_repository;
pub mod progress_repository;
pub mod user_repository;

pub use course_repository::{CourseRepository, MongoCourseRepository};
pub use lesson_repository::{LessonRepository, MongoLessonRepository};
pub use material_repository::{MaterialRepository, MongoMaterialRepository};
pub use progress_repository::{MongoProgressRepository, ProgressRepository};
pub use user_repository::{MongoUserRepository, UserRepository};

#[cfg(test)]
pub use user_repository::MockUserRepository;
