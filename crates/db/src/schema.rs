use eyre::Result;
use sqlx::{Pool, Postgres};
use tracing::info;

/// Tables in dependency order. Ownership cascades from users down to
/// lesson blocks; optional lesson block references are cleared instead.
const TABLES: &[(&str, &str)] = &[
    (
        "users",
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            login VARCHAR(255) NOT NULL UNIQUE,
            custom_url VARCHAR(255) NOT NULL UNIQUE,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
        );
        "#,
    ),
    (
        "auth",
        r#"
        CREATE TABLE IF NOT EXISTS auth (
            user_id UUID PRIMARY KEY REFERENCES users(id) ON DELETE CASCADE,
            password_hash VARCHAR(255) NOT NULL,
            role VARCHAR(32) NOT NULL DEFAULT 'User'
        );
        "#,
    ),
    (
        "sessions",
        r#"
        CREATE TABLE IF NOT EXISTS sessions (
            token UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            user_id UUID NOT NULL REFERENCES users(id) ON DELETE CASCADE,
            expires_at TIMESTAMP WITH TIME ZONE NOT NULL,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
        );
        "#,
    ),
    (
        "schedules",
        r#"
        CREATE TABLE IF NOT EXISTS schedules (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            name VARCHAR(255) NOT NULL,
            user_id UUID NOT NULL REFERENCES users(id) ON DELETE CASCADE,
            UNIQUE (user_id, name)
        );
        "#,
    ),
    (
        "schedule_settings",
        r#"
        CREATE TABLE IF NOT EXISTS schedule_settings (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            schedule_id UUID NOT NULL UNIQUE REFERENCES schedules(id) ON DELETE CASCADE,
            school_hour INTEGER NOT NULL,
            school_year_start DATE NOT NULL,
            school_year_end DATE NOT NULL,
            school_days CHAR(7) NOT NULL DEFAULT '1111100'
        );
        "#,
    ),
    (
        "day_offs",
        r#"
        CREATE TABLE IF NOT EXISTS day_offs (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            name VARCHAR(255) NOT NULL,
            from_date DATE NOT NULL,
            to_date DATE NOT NULL,
            schedule_settings_id UUID NOT NULL REFERENCES schedule_settings(id) ON DELETE CASCADE,
            CONSTRAINT valid_day_off_range CHECK (to_date >= from_date)
        );
        "#,
    ),
    (
        "lesson_periods",
        r#"
        CREATE TABLE IF NOT EXISTS lesson_periods (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            start_time TIME NOT NULL,
            schedule_settings_id UUID NOT NULL REFERENCES schedule_settings(id) ON DELETE CASCADE
        );
        "#,
    ),
    (
        "teachers",
        r#"
        CREATE TABLE IF NOT EXISTS teachers (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            name VARCHAR(255) NOT NULL,
            surname VARCHAR(255) NOT NULL,
            schedule_id UUID NOT NULL REFERENCES schedules(id) ON DELETE CASCADE,
            UNIQUE (schedule_id, name, surname)
        );
        "#,
    ),
    (
        "classroom_types",
        r#"
        CREATE TABLE IF NOT EXISTS classroom_types (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            name VARCHAR(255) NOT NULL,
            schedule_id UUID NOT NULL REFERENCES schedules(id) ON DELETE CASCADE,
            UNIQUE (schedule_id, name)
        );
        "#,
    ),
    (
        "classrooms",
        r#"
        CREATE TABLE IF NOT EXISTS classrooms (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            name VARCHAR(255) NOT NULL,
            capacity INTEGER NOT NULL,
            schedule_id UUID NOT NULL REFERENCES schedules(id) ON DELETE CASCADE,
            UNIQUE (schedule_id, name)
        );
        "#,
    ),
    (
        "classroom_classroom_types",
        r#"
        CREATE TABLE IF NOT EXISTS classroom_classroom_types (
            classroom_id UUID NOT NULL REFERENCES classrooms(id) ON DELETE CASCADE,
            classroom_type_id UUID NOT NULL REFERENCES classroom_types(id) ON DELETE CASCADE,
            PRIMARY KEY (classroom_id, classroom_type_id)
        );
        "#,
    ),
    (
        "lesson_types",
        r#"
        CREATE TABLE IF NOT EXISTS lesson_types (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            name VARCHAR(255) NOT NULL,
            color INTEGER NOT NULL,
            schedule_id UUID NOT NULL REFERENCES schedules(id) ON DELETE CASCADE,
            UNIQUE (schedule_id, name)
        );
        "#,
    ),
    (
        "groups",
        r#"
        CREATE TABLE IF NOT EXISTS groups (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            name VARCHAR(255) NOT NULL,
            student_count INTEGER NOT NULL,
            schedule_id UUID NOT NULL REFERENCES schedules(id) ON DELETE CASCADE,
            UNIQUE (schedule_id, name)
        );
        "#,
    ),
    (
        "subgroups",
        r#"
        CREATE TABLE IF NOT EXISTS subgroups (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            name VARCHAR(255) NOT NULL,
            student_count INTEGER NOT NULL,
            group_id UUID NOT NULL REFERENCES groups(id) ON DELETE CASCADE,
            UNIQUE (group_id, name)
        );
        "#,
    ),
    (
        "students",
        r#"
        CREATE TABLE IF NOT EXISTS students (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            album_number VARCHAR(255) NOT NULL,
            group_id UUID NOT NULL REFERENCES groups(id) ON DELETE CASCADE
        );
        "#,
    ),
    (
        "lessons",
        r#"
        CREATE TABLE IF NOT EXISTS lessons (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            name VARCHAR(255) NOT NULL,
            current_hours INTEGER NOT NULL DEFAULT 0,
            amount_of_hours INTEGER NOT NULL,
            lesson_type_id UUID NOT NULL REFERENCES lesson_types(id) ON DELETE CASCADE,
            subgroup_id UUID NOT NULL REFERENCES subgroups(id) ON DELETE CASCADE,
            UNIQUE (subgroup_id, name)
        );
        "#,
    ),
    (
        "lesson_classroom_types",
        r#"
        CREATE TABLE IF NOT EXISTS lesson_classroom_types (
            lesson_id UUID NOT NULL REFERENCES lessons(id) ON DELETE CASCADE,
            classroom_type_id UUID NOT NULL REFERENCES classroom_types(id) ON DELETE CASCADE,
            PRIMARY KEY (lesson_id, classroom_type_id)
        );
        "#,
    ),
    (
        "lesson_blocks",
        r#"
        CREATE TABLE IF NOT EXISTS lesson_blocks (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            lesson_date DATE NOT NULL,
            lesson_start INTEGER NOT NULL,
            lesson_end INTEGER NOT NULL,
            lesson_id UUID NOT NULL REFERENCES lessons(id) ON DELETE CASCADE,
            classroom_id UUID NULL REFERENCES classrooms(id) ON DELETE SET NULL,
            teacher_id UUID NULL REFERENCES teachers(id) ON DELETE SET NULL,
            CONSTRAINT valid_lesson_block_range CHECK (lesson_end >= lesson_start)
        );
        "#,
    ),
];

const INDEXES: &[&str] = &[
    "CREATE INDEX IF NOT EXISTS idx_sessions_user_id ON sessions(user_id);",
    "CREATE INDEX IF NOT EXISTS idx_schedules_user_id ON schedules(user_id);",
    "CREATE INDEX IF NOT EXISTS idx_day_offs_settings_id ON day_offs(schedule_settings_id);",
    "CREATE INDEX IF NOT EXISTS idx_lesson_periods_settings_id ON lesson_periods(schedule_settings_id);",
    "CREATE INDEX IF NOT EXISTS idx_students_group_id ON students(group_id);",
    "CREATE INDEX IF NOT EXISTS idx_lessons_subgroup_id ON lessons(subgroup_id);",
    "CREATE INDEX IF NOT EXISTS idx_lesson_blocks_lesson_id ON lesson_blocks(lesson_id);",
];

pub async fn initialize_database(pool: &Pool<Postgres>) -> Result<()> {
    info!("Initializing database schema...");

    for (name, statement) in TABLES {
        sqlx::query(statement).execute(pool).await?;
        info!("Table {} is ready", name);
    }

    for statement in INDEXES {
        sqlx::query(statement).execute(pool).await?;
    }

    info!("Database schema initialized successfully");
    Ok(())
}
