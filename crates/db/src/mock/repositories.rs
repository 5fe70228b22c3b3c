use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use eyre::Result;
use mockall::mock;
use planner_core::{
    models::{
        classroom::{CreateClassroomRequest, CreateClassroomTypeRequest},
        group::{CreateGroupRequest, CreateStudentRequest, CreateSubgroupRequest},
        lesson::{CreateLessonBlockRequest, CreateLessonRequest},
        lesson_type::CreateLessonTypeRequest,
        schedule::CreateScheduleRequest,
        teacher::CreateTeacherRequest,
        user::CreateUserRequest,
    },
    pagination::{Page, Pagination},
    scope::Scope,
    update::FieldUpdates,
};
use uuid::Uuid;

use crate::models::*;
use crate::repositories::{
    ClassroomRepository, ClassroomTypeRepository, DayOffRepository, GroupRepository,
    LessonBlockRepository, LessonPeriodRepository, LessonRepository, LessonTypeRepository,
    ScheduleRepository, ScheduleSettingsRepository, SessionRepository, StudentRepository,
    SubgroupRepository, TeacherRepository, UserRepository,
};

// One mock standing in for the whole store
mock! {
    pub Store {}

    #[async_trait]
    impl UserRepository for Store {
        async fn get_user(&self, id: Uuid, scope: Scope) -> Result<Option<DbUser>>;
        async fn find_user_by_login(
            &self,
            login: &str,
            exclude: Option<Uuid>,
        ) -> Result<Option<DbUser>>;
        async fn find_user_by_custom_url(
            &self,
            custom_url: &str,
            exclude: Option<Uuid>,
        ) -> Result<Option<DbUser>>;
        async fn create_user(
            &self,
            request: &CreateUserRequest,
            password_hash: &str,
        ) -> Result<DbUser>;
        async fn update_user(
            &self,
            id: Uuid,
            updates: &FieldUpdates,
            scope: Scope,
        ) -> Result<Option<DbUser>>;
        async fn delete_user(&self, id: Uuid, scope: Scope) -> Result<bool>;
    }

    #[async_trait]
    impl SessionRepository for Store {
        async fn find_credentials(&self, login: &str) -> Result<Option<DbCredentials>>;
        async fn create_session(
            &self,
            user_id: Uuid,
            expires_at: DateTime<Utc>,
        ) -> Result<DbSession>;
        async fn find_session(&self, token: Uuid) -> Result<Option<DbSession>>;
        async fn delete_session(&self, token: Uuid) -> Result<()>;
    }

    #[async_trait]
    impl ScheduleRepository for Store {
        async fn get_schedule(&self, id: Uuid, scope: Scope) -> Result<Option<DbSchedule>>;
        async fn list_schedules(&self, scope: Scope, page: &Pagination) -> Result<Page<DbSchedule>>;
        async fn find_schedule_by_name(
            &self,
            user_id: Uuid,
            name: &str,
        ) -> Result<Option<DbSchedule>>;
        async fn create_schedule(
            &self,
            user_id: Uuid,
            request: &CreateScheduleRequest,
            school_days: &str,
        ) -> Result<DbSchedule>;
        async fn update_schedule(
            &self,
            id: Uuid,
            updates: &FieldUpdates,
            scope: Scope,
        ) -> Result<Option<DbSchedule>>;
        async fn delete_schedule(&self, id: Uuid, scope: Scope) -> Result<bool>;
    }

    #[async_trait]
    impl ScheduleSettingsRepository for Store {
        async fn get_settings_by_schedule(
            &self,
            schedule_id: Uuid,
            scope: Scope,
        ) -> Result<Option<DbScheduleSettings>>;
        async fn get_settings(&self, id: Uuid, scope: Scope) -> Result<Option<DbScheduleSettings>>;
        async fn update_settings(
            &self,
            id: Uuid,
            updates: &FieldUpdates,
            scope: Scope,
        ) -> Result<Option<DbScheduleSettings>>;
        async fn count_day_offs_outside(
            &self,
            settings_id: Uuid,
            start: NaiveDate,
            end: NaiveDate,
        ) -> Result<i64>;
        async fn count_lesson_blocks_outside(
            &self,
            schedule_id: Uuid,
            start: NaiveDate,
            end: NaiveDate,
        ) -> Result<i64>;
        async fn count_lesson_blocks_off_school_days(
            &self,
            schedule_id: Uuid,
            school_days: &str,
        ) -> Result<i64>;
    }

    #[async_trait]
    impl DayOffRepository for Store {
        async fn get_day_off(&self, id: Uuid, scope: Scope) -> Result<Option<DbDayOff>>;
        async fn list_day_offs(
            &self,
            schedule_id: Uuid,
            scope: Scope,
            page: &Pagination,
        ) -> Result<Page<DbDayOff>>;
        async fn create_day_off(
            &self,
            settings_id: Uuid,
            name: &str,
            from: NaiveDate,
            to: NaiveDate,
        ) -> Result<DbDayOff>;
        async fn update_day_off(
            &self,
            id: Uuid,
            updates: &FieldUpdates,
            scope: Scope,
        ) -> Result<Option<DbDayOff>>;
        async fn delete_day_off(&self, id: Uuid, scope: Scope) -> Result<bool>;
    }

    #[async_trait]
    impl LessonPeriodRepository for Store {
        async fn get_lesson_period(&self, id: Uuid, scope: Scope) -> Result<Option<DbLessonPeriod>>;
        async fn list_lesson_periods(
            &self,
            schedule_id: Uuid,
            scope: Scope,
            page: &Pagination,
        ) -> Result<Page<DbLessonPeriod>>;
        async fn lesson_periods_of(&self, settings_id: Uuid) -> Result<Vec<DbLessonPeriod>>;
        async fn count_lesson_periods(&self, settings_id: Uuid) -> Result<i64>;
        async fn create_lesson_period(
            &self,
            settings_id: Uuid,
            start: NaiveTime,
        ) -> Result<DbLessonPeriod>;
        async fn update_lesson_period(
            &self,
            id: Uuid,
            updates: &FieldUpdates,
            scope: Scope,
        ) -> Result<Option<DbLessonPeriod>>;
        async fn delete_lesson_period(&self, id: Uuid, scope: Scope) -> Result<bool>;
    }

    #[async_trait]
    impl TeacherRepository for Store {
        async fn get_teacher(&self, id: Uuid, scope: Scope) -> Result<Option<DbTeacher>>;
        async fn list_teachers(
            &self,
            schedule_id: Uuid,
            scope: Scope,
            page: &Pagination,
        ) -> Result<Page<DbTeacher>>;
        async fn find_teacher_by_name(
            &self,
            schedule_id: Uuid,
            name: &str,
            surname: &str,
        ) -> Result<Option<DbTeacher>>;
        async fn create_teacher(&self, request: &CreateTeacherRequest) -> Result<DbTeacher>;
        async fn update_teacher(
            &self,
            id: Uuid,
            updates: &FieldUpdates,
            scope: Scope,
        ) -> Result<Option<DbTeacher>>;
        async fn delete_teacher(&self, id: Uuid, scope: Scope) -> Result<bool>;
    }

    #[async_trait]
    impl ClassroomTypeRepository for Store {
        async fn get_classroom_type(
            &self,
            id: Uuid,
            scope: Scope,
        ) -> Result<Option<DbClassroomType>>;
        async fn list_classroom_types(
            &self,
            schedule_id: Uuid,
            scope: Scope,
            page: &Pagination,
        ) -> Result<Page<DbClassroomType>>;
        async fn find_classroom_type_by_name(
            &self,
            schedule_id: Uuid,
            name: &str,
        ) -> Result<Option<DbClassroomType>>;
        async fn create_classroom_type(
            &self,
            request: &CreateClassroomTypeRequest,
        ) -> Result<DbClassroomType>;
        async fn update_classroom_type(
            &self,
            id: Uuid,
            updates: &FieldUpdates,
            scope: Scope,
        ) -> Result<Option<DbClassroomType>>;
        async fn delete_classroom_type(&self, id: Uuid, scope: Scope) -> Result<bool>;
    }

    #[async_trait]
    impl ClassroomRepository for Store {
        async fn get_classroom(&self, id: Uuid, scope: Scope) -> Result<Option<DbClassroom>>;
        async fn list_classrooms(
            &self,
            schedule_id: Uuid,
            scope: Scope,
            page: &Pagination,
        ) -> Result<Page<DbClassroom>>;
        async fn find_classroom_by_name(
            &self,
            schedule_id: Uuid,
            name: &str,
        ) -> Result<Option<DbClassroom>>;
        async fn create_classroom(&self, request: &CreateClassroomRequest) -> Result<DbClassroom>;
        async fn update_classroom(
            &self,
            id: Uuid,
            updates: &FieldUpdates,
            scope: Scope,
        ) -> Result<Option<DbClassroom>>;
        async fn delete_classroom(&self, id: Uuid, scope: Scope) -> Result<bool>;
        async fn classroom_type_ids(&self, classroom_id: Uuid) -> Result<Vec<Uuid>>;
        async fn set_classroom_types(&self, classroom_id: Uuid, type_ids: &[Uuid]) -> Result<()>;
    }

    #[async_trait]
    impl LessonTypeRepository for Store {
        async fn get_lesson_type(&self, id: Uuid, scope: Scope) -> Result<Option<DbLessonType>>;
        async fn list_lesson_types(
            &self,
            schedule_id: Uuid,
            scope: Scope,
            page: &Pagination,
        ) -> Result<Page<DbLessonType>>;
        async fn find_lesson_type_by_name(
            &self,
            schedule_id: Uuid,
            name: &str,
        ) -> Result<Option<DbLessonType>>;
        async fn create_lesson_type(
            &self,
            request: &CreateLessonTypeRequest,
        ) -> Result<DbLessonType>;
        async fn update_lesson_type(
            &self,
            id: Uuid,
            updates: &FieldUpdates,
            scope: Scope,
        ) -> Result<Option<DbLessonType>>;
        async fn delete_lesson_type(&self, id: Uuid, scope: Scope) -> Result<bool>;
    }

    #[async_trait]
    impl GroupRepository for Store {
        async fn get_group(&self, id: Uuid, scope: Scope) -> Result<Option<DbGroup>>;
        async fn list_groups(
            &self,
            schedule_id: Uuid,
            scope: Scope,
            page: &Pagination,
        ) -> Result<Page<DbGroup>>;
        async fn find_group_by_name(
            &self,
            schedule_id: Uuid,
            name: &str,
        ) -> Result<Option<DbGroup>>;
        async fn create_group(&self, request: &CreateGroupRequest) -> Result<DbGroup>;
        async fn update_group(
            &self,
            id: Uuid,
            updates: &FieldUpdates,
            scope: Scope,
        ) -> Result<Option<DbGroup>>;
        async fn delete_group(&self, id: Uuid, scope: Scope) -> Result<bool>;
        async fn max_subgroup_student_count(&self, group_id: Uuid) -> Result<Option<i32>>;
    }

    #[async_trait]
    impl SubgroupRepository for Store {
        async fn get_subgroup(&self, id: Uuid, scope: Scope) -> Result<Option<DbSubgroup>>;
        async fn list_subgroups(
            &self,
            group_id: Uuid,
            scope: Scope,
            page: &Pagination,
        ) -> Result<Page<DbSubgroup>>;
        async fn find_subgroup_by_name(
            &self,
            group_id: Uuid,
            name: &str,
        ) -> Result<Option<DbSubgroup>>;
        async fn create_subgroup(&self, request: &CreateSubgroupRequest) -> Result<DbSubgroup>;
        async fn update_subgroup(
            &self,
            id: Uuid,
            updates: &FieldUpdates,
            scope: Scope,
        ) -> Result<Option<DbSubgroup>>;
        async fn delete_subgroup(&self, id: Uuid, scope: Scope) -> Result<bool>;
    }

    #[async_trait]
    impl StudentRepository for Store {
        async fn get_student(&self, id: Uuid, scope: Scope) -> Result<Option<DbStudent>>;
        async fn list_students(
            &self,
            group_id: Uuid,
            scope: Scope,
            page: &Pagination,
        ) -> Result<Page<DbStudent>>;
        async fn find_student_by_album_number(
            &self,
            schedule_id: Uuid,
            album_number: &str,
        ) -> Result<Option<DbStudent>>;
        async fn create_student(&self, request: &CreateStudentRequest) -> Result<DbStudent>;
        async fn update_student(
            &self,
            id: Uuid,
            updates: &FieldUpdates,
            scope: Scope,
        ) -> Result<Option<DbStudent>>;
        async fn delete_student(&self, id: Uuid, scope: Scope) -> Result<bool>;
    }

    #[async_trait]
    impl LessonRepository for Store {
        async fn get_lesson(&self, id: Uuid, scope: Scope) -> Result<Option<DbLesson>>;
        async fn list_lessons(
            &self,
            schedule_id: Uuid,
            scope: Scope,
            page: &Pagination,
        ) -> Result<Page<DbLesson>>;
        async fn find_lesson_by_name(
            &self,
            schedule_id: Uuid,
            name: &str,
        ) -> Result<Option<DbLesson>>;
        async fn create_lesson(&self, request: &CreateLessonRequest) -> Result<DbLesson>;
        async fn update_lesson(
            &self,
            id: Uuid,
            updates: &FieldUpdates,
            scope: Scope,
        ) -> Result<Option<DbLesson>>;
        async fn delete_lesson(&self, id: Uuid, scope: Scope) -> Result<bool>;
        async fn lesson_classroom_type_ids(&self, lesson_id: Uuid) -> Result<Vec<Uuid>>;
        async fn set_lesson_classroom_types(
            &self,
            lesson_id: Uuid,
            type_ids: &[Uuid],
        ) -> Result<()>;
        async fn sum_lesson_block_hours(&self, lesson_id: Uuid) -> Result<Option<i64>>;
        async fn set_current_hours(&self, lesson_id: Uuid, hours: i32) -> Result<()>;
    }

    #[async_trait]
    impl LessonBlockRepository for Store {
        async fn get_lesson_block(&self, id: Uuid, scope: Scope) -> Result<Option<DbLessonBlock>>;
        async fn list_lesson_blocks(
            &self,
            lesson_id: Uuid,
            scope: Scope,
            page: &Pagination,
        ) -> Result<Page<DbLessonBlock>>;
        async fn create_lesson_block(
            &self,
            request: &CreateLessonBlockRequest,
        ) -> Result<DbLessonBlock>;
        async fn update_lesson_block(
            &self,
            id: Uuid,
            updates: &FieldUpdates,
            scope: Scope,
        ) -> Result<Option<DbLessonBlock>>;
        async fn delete_lesson_block(&self, id: Uuid, scope: Scope) -> Result<bool>;
    }
}
