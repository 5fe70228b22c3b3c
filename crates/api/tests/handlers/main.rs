mod test_utils;

mod auth_test;
mod classroom_test;
mod day_off_test;
mod errors_test;
mod group_test;
mod health_test;
mod lesson_block_test;
mod lesson_period_test;
mod lesson_test;
mod schedule_test;
mod student_test;
mod teacher_test;
mod user_test;
