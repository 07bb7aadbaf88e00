use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Lesson {
    pub id: Uuid,
    pub course_id: Uuid,
    pub title: String,
    pub scheduled_at: DateTime<Utc>,
}

impl Lesson {
    pub fn new(course_id: Uuid, title: &str, scheduled_at: Option<DateTime<Utc>>) -> Self {
        Lesson {
            id: Uuid::new_v4(),
            course_id,
            title: title.to_string(),
            scheduled_at: scheduled_at.unwrap_or_else(Utc::now),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lesson_schedule_defaults_to_now() {
        let before = Utc::now();
        let lesson = Lesson::new(Uuid::new_v4(), "Ownership", None);

        assert!(lesson.scheduled_at >= before);
        assert!(lesson.scheduled_at <= Utc::now());
    }

    #[test]
    fn test_lesson_keeps_explicit_schedule() {
        let when = Utc::now() + chrono::Duration::days(7);
        let lesson = Lesson::new(Uuid::new_v4(), "Borrowing", Some(when));

        assert_eq!(lesson.scheduled_at, when);
    }
}
