use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use planner_core::models::{
    classroom::{Classroom, ClassroomType},
    day_off::DayOff,
    group::{Group, Student, Subgroup},
    lesson::{Lesson, LessonBlock},
    lesson_period::LessonPeriod,
    lesson_type::LessonType,
    schedule::{Schedule, ScheduleSettings},
    teacher::Teacher,
    user::User,
};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct DbUser {
    pub id: Uuid,
    pub login: String,
    pub custom_url: String,
}

#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct DbCredentials {
    pub user_id: Uuid,
    pub password_hash: String,
    pub role: String,
}

#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct DbSession {
    pub token: Uuid,
    pub user_id: Uuid,
    pub role: String,
    pub expires_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct DbSchedule {
    pub id: Uuid,
    pub name: String,
    pub user_id: Uuid,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct DbScheduleSettings {
    pub id: Uuid,
    pub schedule_id: Uuid,
    pub school_hour: i32,
    pub school_year_start: NaiveDate,
    pub school_year_end: NaiveDate,
    pub school_days: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct DbDayOff {
    pub id: Uuid,
    pub name: String,
    pub from_date: NaiveDate,
    pub to_date: NaiveDate,
    pub schedule_settings_id: Uuid,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct DbLessonPeriod {
    pub id: Uuid,
    pub start_time: NaiveTime,
    pub schedule_settings_id: Uuid,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct DbTeacher {
    pub id: Uuid,
    pub name: String,
    pub surname: String,
    pub schedule_id: Uuid,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct DbClassroomType {
    pub id: Uuid,
    pub name: String,
    pub schedule_id: Uuid,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct DbClassroom {
    pub id: Uuid,
    pub name: String,
    pub capacity: i32,
    pub schedule_id: Uuid,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct DbLessonType {
    pub id: Uuid,
    pub name: String,
    pub color: i32,
    pub schedule_id: Uuid,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct DbGroup {
    pub id: Uuid,
    pub name: String,
    pub student_count: i32,
    pub schedule_id: Uuid,
}

/// Rows below a group also carry the owning schedule id, joined in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct DbSubgroup {
    pub id: Uuid,
    pub name: String,
    pub student_count: i32,
    pub group_id: Uuid,
    pub schedule_id: Uuid,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct DbStudent {
    pub id: Uuid,
    pub album_number: String,
    pub group_id: Uuid,
    pub schedule_id: Uuid,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct DbLesson {
    pub id: Uuid,
    pub name: String,
    pub current_hours: i32,
    pub amount_of_hours: i32,
    pub lesson_type_id: Uuid,
    pub subgroup_id: Uuid,
    pub schedule_id: Uuid,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct DbLessonBlock {
    pub id: Uuid,
    pub lesson_date: NaiveDate,
    pub lesson_start: i32,
    pub lesson_end: i32,
    pub lesson_id: Uuid,
    pub classroom_id: Option<Uuid>,
    pub teacher_id: Option<Uuid>,
    pub schedule_id: Uuid,
}

impl From<DbUser> for User {
    fn from(row: DbUser) -> Self {
        User {
            id: row.id,
            login: row.login,
            custom_url: row.custom_url,
        }
    }
}

impl From<DbSchedule> for Schedule {
    fn from(row: DbSchedule) -> Self {
        Schedule {
            id: row.id,
            name: row.name,
            user_id: row.user_id,
        }
    }
}

impl From<DbScheduleSettings> for ScheduleSettings {
    fn from(row: DbScheduleSettings) -> Self {
        ScheduleSettings {
            id: row.id,
            schedule_id: row.schedule_id,
            school_hour: row.school_hour,
            school_year_start: row.school_year_start,
            school_year_end: row.school_year_end,
            school_days: row.school_days,
        }
    }
}

impl From<DbDayOff> for DayOff {
    fn from(row: DbDayOff) -> Self {
        DayOff {
            id: row.id,
            name: row.name,
            from: row.from_date,
            to: row.to_date,
            schedule_settings_id: row.schedule_settings_id,
        }
    }
}

impl From<DbLessonPeriod> for LessonPeriod {
    fn from(row: DbLessonPeriod) -> Self {
        LessonPeriod {
            id: row.id,
            start: row.start_time,
            schedule_settings_id: row.schedule_settings_id,
        }
    }
}

impl From<DbTeacher> for Teacher {
    fn from(row: DbTeacher) -> Self {
        Teacher {
            id: row.id,
            name: row.name,
            surname: row.surname,
            schedule_id: row.schedule_id,
        }
    }
}

impl From<DbClassroomType> for ClassroomType {
    fn from(row: DbClassroomType) -> Self {
        ClassroomType {
            id: row.id,
            name: row.name,
            schedule_id: row.schedule_id,
        }
    }
}

impl DbClassroom {
    pub fn into_classroom(self, classroom_type_ids: Vec<Uuid>) -> Classroom {
        Classroom {
            id: self.id,
            name: self.name,
            capacity: self.capacity,
            schedule_id: self.schedule_id,
            classroom_type_ids,
        }
    }
}

impl From<DbLessonType> for LessonType {
    fn from(row: DbLessonType) -> Self {
        LessonType {
            id: row.id,
            name: row.name,
            color: row.color,
            schedule_id: row.schedule_id,
        }
    }
}

impl From<DbGroup> for Group {
    fn from(row: DbGroup) -> Self {
        Group {
            id: row.id,
            name: row.name,
            student_count: row.student_count,
            schedule_id: row.schedule_id,
        }
    }
}

impl From<DbSubgroup> for Subgroup {
    fn from(row: DbSubgroup) -> Self {
        Subgroup {
            id: row.id,
            name: row.name,
            student_count: row.student_count,
            group_id: row.group_id,
        }
    }
}

impl From<DbStudent> for Student {
    fn from(row: DbStudent) -> Self {
        Student {
            id: row.id,
            album_number: row.album_number,
            group_id: row.group_id,
        }
    }
}

impl DbLesson {
    pub fn into_lesson(self, classroom_type_ids: Vec<Uuid>) -> Lesson {
        Lesson {
            id: self.id,
            name: self.name,
            current_hours: self.current_hours,
            amount_of_hours: self.amount_of_hours,
            lesson_type_id: self.lesson_type_id,
            subgroup_id: self.subgroup_id,
            classroom_type_ids,
        }
    }
}

impl From<DbLessonBlock> for LessonBlock {
    fn from(row: DbLessonBlock) -> Self {
        LessonBlock {
            id: row.id,
            lesson_date: row.lesson_date,
            lesson_start: row.lesson_start,
            lesson_end: row.lesson_end,
            lesson_id: row.lesson_id,
            classroom_id: row.classroom_id,
            teacher_id: row.teacher_id,
        }
    }
}
