use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayOff {
    pub id: Uuid,
    pub name: String,
    pub from: NaiveDate,
    pub to: NaiveDate,
    pub schedule_settings_id: Uuid,
}

/// A missing `to` makes the day off a single day.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateDayOffRequest {
    pub name: String,
    pub from: NaiveDate,
    pub to: Option<NaiveDate>,
    pub schedule_id: Uuid,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateDayOffRequest {
    pub name: Option<String>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}
