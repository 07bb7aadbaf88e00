pub mod auth_handler;
pub mod course_handler;
pub mod health_handler;
pub mod lesson_handler;
pub mod material_handler;
pub mod progress_handler;

pub use auth_handler::{login, me, register, register_admin};
pub use course_handler::{create_course, delete_course, get_all_courses, get_course, update_course};
pub use health_handler::{health_check, health_check_ready};
pub use lesson_handler::{
    create_lesson, delete_lesson, get_course_progress, get_lesson, get_lessons_for_course,
    update_lesson,
};
pub use material_handler::{
    create_material_for_lesson, delete_material, get_materials_for_lesson, update_material,
};
pub use progress_handler::{complete_lesson, get_course_stats};
