use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassroomType {
    pub id: Uuid,
    pub name: String,
    pub schedule_id: Uuid,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateClassroomTypeRequest {
    pub name: String,
    pub schedule_id: Uuid,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateClassroomTypeRequest {
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classroom {
    pub id: Uuid,
    pub name: String,
    pub capacity: i32,
    pub schedule_id: Uuid,
    pub classroom_type_ids: Vec<Uuid>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateClassroomRequest {
    pub name: String,
    pub capacity: i32,
    pub schedule_id: Uuid,
    #[serde(default)]
    pub classroom_type_ids: Vec<Uuid>,
}

/// `classroom_type_ids`, when present, replaces the whole set.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateClassroomRequest {
    pub name: Option<String>,
    pub capacity: Option<i32>,
    pub classroom_type_ids: Option<Vec<Uuid>>,
}
