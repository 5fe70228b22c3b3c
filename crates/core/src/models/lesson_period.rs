use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LessonPeriod {
    pub id: Uuid,
    pub start: NaiveTime,
    pub schedule_settings_id: Uuid,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateLessonPeriodRequest {
    pub start: NaiveTime,
    pub schedule_id: Uuid,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateLessonPeriodRequest {
    pub start: Option<NaiveTime>,
}
