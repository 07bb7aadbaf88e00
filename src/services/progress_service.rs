use std::collections::HashSet;
use std::sync::Arc;

use uuid::Uuid;

use crate::{
    errors::{AppError, AppResult},
    models::{
        domain::{CompletionRecord, Lesson},
        dto::{
            request::ProgressStatus,
            response::{CourseProgressSummary, LessonProgress},
        },
    },
    repositories::{CourseRepository, LessonRepository, ProgressRepository},
};

pub struct ProgressService {
    courses: Arc<dyn CourseRepository>,
    lessons: Arc<dyn LessonRepository>,
    progress: Arc<dyn ProgressRepository>,
}

impl ProgressService {
    pub fn new(
        courses: Arc<dyn CourseRepository>,
        lessons: Arc<dyn LessonRepository>,
        progress: Arc<dyn ProgressRepository>,
    ) -> Self {
        Self {
            courses,
            lessons,
            progress,
        }
    }

    /// Marks a lesson completed for a user. Repeat calls are no-ops: the
    /// storage upsert updates the existing record in place.
    pub async fn mark_complete(&self, user_id: &Uuid, lesson_id: &Uuid) -> AppResult<()> {
        self.lessons.find_by_id(lesson_id).await?.ok_or_else(|| {
            AppError::NotFound(format!("Lesson with id '{}' not found", lesson_id))
        })?;

        self.progress.mark_completed(user_id, lesson_id).await?;

        log::info!("User {} completed lesson {}", user_id, lesson_id);
        Ok(())
    }

    /// Every lesson of the course with the caller's completion state
    /// attached. A lesson with no completion record counts as uncompleted,
    /// and the optional status filter is applied after that defaulting.
    pub async fn lessons_with_progress(
        &self,
        course_id: &Uuid,
        user_id: &Uuid,
        status: Option<ProgressStatus>,
    ) -> AppResult<Vec<LessonProgress>> {
        self.require_course(course_id).await?;

        let lessons = self.lessons.find_by_course(course_id).await?;
        let records = self.records_for(user_id, &lessons).await?;

        Ok(Self::attach_progress(lessons, &records, status))
    }

    /// Completion statistics for one user over one course.
    pub async fn course_summary(
        &self,
        course_id: &Uuid,
        user_id: &Uuid,
    ) -> AppResult<CourseProgressSummary> {
        self.require_course(course_id).await?;

        let lessons = self.lessons.find_by_course(course_id).await?;
        let records = self.records_for(user_id, &lessons).await?;

        let completed = records.iter().filter(|r| r.is_completed).count() as i64;

        Ok(Self::summarize(lessons.len() as i64, completed))
    }

    async fn require_course(&self, course_id: &Uuid) -> AppResult<()> {
        self.courses.find_by_id(course_id).await?.ok_or_else(|| {
            AppError::NotFound(format!("Course with id '{}' not found", course_id))
        })?;
        Ok(())
    }

    /// The completion records for this user restricted to the given lessons.
    /// Restricting by lesson id is what excludes records from other courses.
    async fn records_for(
        &self,
        user_id: &Uuid,
        lessons: &[Lesson],
    ) -> AppResult<Vec<CompletionRecord>> {
        let lesson_ids: Vec<Uuid> = lessons.iter().map(|l| l.id).collect();
        self.progress
            .find_for_user_in_lessons(user_id, &lesson_ids)
            .await
    }

    /// Outer-join merge: each lesson appears exactly once, completion
    /// defaults to false when no record exists. Ordered by lesson id
    /// ascending for a stable response.
    fn attach_progress(
        lessons: Vec<Lesson>,
        records: &[CompletionRecord],
        status: Option<ProgressStatus>,
    ) -> Vec<LessonProgress> {
        let completed_ids: HashSet<Uuid> = records
            .iter()
            .filter(|r| r.is_completed)
            .map(|r| r.lesson_id)
            .collect();

        let mut rows: Vec<LessonProgress> = lessons
            .into_iter()
            .map(|lesson| LessonProgress {
                is_completed: completed_ids.contains(&lesson.id),
                id: lesson.id,
                title: lesson.title,
                scheduled_at: lesson.scheduled_at,
            })
            .collect();

        rows.sort_by(|a, b| a.id.cmp(&b.id));

        match status {
            Some(ProgressStatus::Completed) => rows.retain(|row| row.is_completed),
            Some(ProgressStatus::Uncompleted) => rows.retain(|row| !row.is_completed),
            None => {}
        }

        rows
    }

    fn summarize(total: i64, completed: i64) -> CourseProgressSummary {
        // An empty course has zero progress, not a division by zero.
        let percentage = if total == 0 {
            0.0
        } else {
            (completed as f64 / total as f64 * 100.0 * 100.0).round() / 100.0
        };

        CourseProgressSummary {
            total_lessons: total,
            completed_lessons: completed,
            uncompleted_lessons: total - completed,
            progress_percentage: percentage,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lessons(course_id: Uuid, count: usize) -> Vec<Lesson> {
        (0..count)
            .map(|i| Lesson::new(course_id, &format!("Lesson {}", i + 1), None))
            .collect()
    }

    #[test]
    fn test_summarize_empty_course() {
        let summary = ProgressService::summarize(0, 0);

        assert_eq!(summary.total_lessons, 0);
        assert_eq!(summary.completed_lessons, 0);
        assert_eq!(summary.uncompleted_lessons, 0);
        assert_eq!(summary.progress_percentage, 0.0);
    }

    #[test]
    fn test_summarize_one_of_three() {
        let summary = ProgressService::summarize(3, 1);

        assert_eq!(summary.total_lessons, 3);
        assert_eq!(summary.completed_lessons, 1);
        assert_eq!(summary.uncompleted_lessons, 2);
        assert_eq!(summary.progress_percentage, 33.33);
    }

    #[test]
    fn test_summarize_two_of_three() {
        let summary = ProgressService::summarize(3, 2);
        assert_eq!(summary.progress_percentage, 66.67);
    }

    #[test]
    fn test_summarize_all_completed() {
        let summary = ProgressService::summarize(4, 4);
        assert_eq!(summary.progress_percentage, 100.0);
        assert_eq!(summary.uncompleted_lessons, 0);
    }

    #[test]
    fn test_attach_progress_defaults_to_uncompleted() {
        let course_id = Uuid::new_v4();
        let all = lessons(course_id, 3);

        let rows = ProgressService::attach_progress(all, &[], None);

        assert_eq!(rows.len(), 3);
        assert!(rows.iter().all(|row| !row.is_completed));
    }

    #[test]
    fn test_attach_progress_marks_completed_lessons() {
        let course_id = Uuid::new_v4();
        let user_id = Uuid::new_v4();
        let all = lessons(course_id, 3);
        let records = vec![CompletionRecord::completed(user_id, all[1].id)];

        let rows = ProgressService::attach_progress(all.clone(), &records, None);

        assert_eq!(rows.len(), 3);
        assert_eq!(
            rows.iter().filter(|row| row.is_completed).count(),
            1
        );
        let completed_row = rows.iter().find(|row| row.is_completed).unwrap();
        assert_eq!(completed_row.id, all[1].id);
    }

    #[test]
    fn test_attach_progress_is_ordered_by_lesson_id() {
        let course_id = Uuid::new_v4();
        let all = lessons(course_id, 5);

        let rows = ProgressService::attach_progress(all, &[], None);

        let mut sorted = rows.clone();
        sorted.sort_by(|a, b| a.id.cmp(&b.id));
        assert_eq!(rows, sorted);
    }

    #[test]
    fn test_uncompleted_filter_includes_lessons_without_records() {
        let course_id = Uuid::new_v4();
        let user_id = Uuid::new_v4();
        let all = lessons(course_id, 3);
        // One completed record, one explicit not-completed record, one
        // lesson with no record at all.
        let records = vec![
            CompletionRecord::completed(user_id, all[0].id),
            CompletionRecord {
                user_id,
                lesson_id: all[1].id,
                is_completed: false,
            },
        ];

        let rows = ProgressService::attach_progress(
            all,
            &records,
            Some(ProgressStatus::Uncompleted),
        );

        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|row| !row.is_completed));
    }

    #[test]
    fn test_completed_filter_keeps_only_completed() {
        let course_id = Uuid::new_v4();
        let user_id = Uuid::new_v4();
        let all = lessons(course_id, 3);
        let records = vec![CompletionRecord::completed(user_id, all[2].id)];

        let rows = ProgressService::attach_progress(
            all.clone(),
            &records,
            Some(ProgressStatus::Completed),
        );

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id, all[2].id);
    }

    #[test]
    fn test_records_for_other_lessons_are_ignored() {
        let course_id = Uuid::new_v4();
        let user_id = Uuid::new_v4();
        let all = lessons(course_id, 2);
        // A record pointing at a lesson outside this course's set.
        let records = vec![CompletionRecord::completed(user_id, Uuid::new_v4())];

        let rows = ProgressService::attach_progress(all, &records, None);

        assert!(rows.iter().all(|row| !row.is_completed));
    }
}
