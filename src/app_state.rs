use std::sync::Arc;

use crate::{
    auth::JwtService,
    config::Config,
    db::Database,
    errors::AppResult,
    repositories::{
        CourseRepository, LessonRepository, MongoCourseRepository, MongoLessonRepository,
        MongoMaterialRepository, MongoProgressRepository, MongoUserRepository, UserRepository,
    },
    services::{CourseService, LessonService, MaterialService, ProgressService, UserService},
};

#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<UserService>,
    pub course_service: Arc<CourseService>,
    pub lesson_service: Arc<LessonService>,
    pub material_service: Arc<MaterialService>,
    pub progress_service: Arc<ProgressService>,
    pub jwt_service: Arc<JwtService>,
    pub user_repository: Arc<dyn UserRepository>,
    pub db: Database,
    pub config: Arc<Config>,
}

impl AppState {
    pub async fn new(config: Config) -> AppResult<Self> {
        let db = Database::connect(&config).await?;

        let user_repository = Arc::new(MongoUserRepository::new(&db));
        user_repository.ensure_indexes().await?;

        let course_repository = Arc::new(MongoCourseRepository::new(&db));
        course_repository.ensure_indexes().await?;

        let lesson_repository = Arc::new(MongoLessonRepository::new(&db));
        lesson_repository.ensure_indexes().await?;

        let material_repository = Arc::new(MongoMaterialRepository::new(&db));
        material_repository.ensure_indexes().await?;

        let progress_repository = Arc::new(MongoProgressRepository::new(&db));
        progress_repository.ensure_indexes().await?;

        let user_repository: Arc<dyn UserRepository> = user_repository;
        let course_repository: Arc<dyn CourseRepository> = course_repository;
        let lesson_repository: Arc<dyn LessonRepository> = lesson_repository;

        let jwt_service = Arc::new(JwtService::new(
            &config.jwt_secret,
            config.jwt_expiration_minutes,
        ));

        let user_service = Arc::new(UserService::new(Arc::clone(&user_repository)));
        let course_service = Arc::new(CourseService::new(Arc::clone(&course_repository)));
        let lesson_service = Arc::new(LessonService::new(
            Arc::clone(&lesson_repository),
            Arc::clone(&course_repository),
        ));
        let material_service = Arc::new(MaterialService::new(
            material_repository,
            Arc::clone(&lesson_repository),
        ));
        let progress_service = Arc::new(ProgressService::new(
            course_repository,
            lesson_repository,
            progress_repository,
        ));

        Ok(Self {
            user_service,
            course_service,
            lesson_service,
            material_service,
            progress_service,
            jwt_service,
            user_repository,
            db,
            config: Arc::new(config),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_cloneable() {
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }
}
