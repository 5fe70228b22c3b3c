use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::double_option;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lesson {
    pub id: Uuid,
    pub name: String,
    pub current_hours: i32,
    pub amount_of_hours: i32,
    pub lesson_type_id: Uuid,
    pub subgroup_id: Uuid,
    pub classroom_type_ids: Vec<Uuid>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateLessonRequest {
    pub name: String,
    pub amount_of_hours: i32,
    pub lesson_type_id: Uuid,
    pub subgroup_id: Uuid,
    #[serde(default)]
    pub classroom_type_ids: Vec<Uuid>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateLessonRequest {
    pub name: Option<String>,
    pub amount_of_hours: Option<i32>,
    pub lesson_type_id: Option<Uuid>,
    pub classroom_type_ids: Option<Vec<Uuid>>,
}

/// One occurrence of a lesson spanning periods `lesson_start..=lesson_end`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LessonBlock {
    pub id: Uuid,
    pub lesson_date: NaiveDate,
    pub lesson_start: i32,
    pub lesson_end: i32,
    pub lesson_id: Uuid,
    pub classroom_id: Option<Uuid>,
    pub teacher_id: Option<Uuid>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateLessonBlockRequest {
    pub lesson_date: NaiveDate,
    pub lesson_start: i32,
    pub lesson_end: i32,
    pub lesson_id: Uuid,
    pub classroom_id: Option<Uuid>,
    pub teacher_id: Option<Uuid>,
}

/// An explicit `null` for `classroom_id` or `teacher_id` clears it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateLessonBlockRequest {
    pub lesson_date: Option<NaiveDate>,
    pub lesson_start: Option<i32>,
    pub lesson_end: Option<i32>,
    #[serde(default, deserialize_with = "double_option")]
    pub classroom_id: Option<Option<Uuid>>,
    #[serde(default, deserialize_with = "double_option")]
    pub teacher_id: Option<Option<Uuid>>,
}
