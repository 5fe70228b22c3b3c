use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LessonType {
    pub id: Uuid,
    pub name: String,
    pub color: i32,
    pub schedule_id: Uuid,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateLessonTypeRequest {
    pub name: String,
    pub color: i32,
    pub schedule_id: Uuid,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateLessonTypeRequest {
    pub name: Option<String>,
    pub color: Option<i32>,
}
