use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const DEFAULT_SCHOOL_DAYS: &str = "1111100";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    pub id: Uuid,
    pub name: String,
    pub user_id: Uuid,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateScheduleRequest {
    pub name: String,
    pub school_hour: i32,
    pub school_year_start: NaiveDate,
    pub school_year_end: NaiveDate,
    pub school_days: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateScheduleRequest {
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleSettings {
    pub id: Uuid,
    pub schedule_id: Uuid,
    pub school_hour: i32,
    pub school_year_start: NaiveDate,
    pub school_year_end: NaiveDate,
    pub school_days: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateScheduleSettingsRequest {
    pub school_hour: Option<i32>,
    pub school_year_start: Option<NaiveDate>,
    pub school_year_end: Option<NaiveDate>,
    pub school_days: Option<String>,
}
