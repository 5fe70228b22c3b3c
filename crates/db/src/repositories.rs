//! Storage access, one repository trait per entity.
//!
//! Every read, update and delete takes a [`Scope`](planner_core::scope::Scope)
//! so a caller only ever sees rows it may touch. A row that is missing and
//! a row that is out of scope look the same: `None`, or `false` for deletes.

pub mod classroom;
pub mod classroom_type;
pub mod day_off;
pub mod group;
pub mod lesson;
pub mod lesson_block;
pub mod lesson_period;
pub mod lesson_type;
pub mod schedule;
pub mod schedule_settings;
pub mod session;
pub mod student;
pub mod subgroup;
pub mod teacher;
pub mod user;

pub use classroom::ClassroomRepository;
pub use classroom_type::ClassroomTypeRepository;
pub use day_off::DayOffRepository;
pub use group::GroupRepository;
pub use lesson::LessonRepository;
pub use lesson_block::LessonBlockRepository;
pub use lesson_period::LessonPeriodRepository;
pub use lesson_type::LessonTypeRepository;
pub use schedule::ScheduleRepository;
pub use schedule_settings::ScheduleSettingsRepository;
pub use session::SessionRepository;
pub use student::StudentRepository;
pub use subgroup::SubgroupRepository;
pub use teacher::TeacherRepository;
pub use user::UserRepository;

/// Everything the API needs from storage, usable as `dyn Store`
pub trait Store:
    UserRepository
    + SessionRepository
    + ScheduleRepository
    + ScheduleSettingsRepository
    + DayOffRepository
    + LessonPeriodRepository
    + TeacherRepository
    + ClassroomTypeRepository
    + ClassroomRepository
    + LessonTypeRepository
    + GroupRepository
    + SubgroupRepository
    + StudentRepository
    + LessonRepository
    + LessonBlockRepository
    + Send
    + Sync
{
}

impl<T> Store for T where
    T: UserRepository
        + SessionRepository
        + ScheduleRepository
        + ScheduleSettingsRepository
        + DayOffRepository
        + LessonPeriodRepository
        + TeacherRepository
        + ClassroomTypeRepository
        + ClassroomRepository
        + LessonTypeRepository
        + GroupRepository
        + SubgroupRepository
        + StudentRepository
        + LessonRepository
        + LessonBlockRepository
        + Send
        + Sync
{
}

/// Joins from a schedule-level table alias to its owner
pub(crate) const SCHEDULE_OWNER: &str = "s.user_id";
