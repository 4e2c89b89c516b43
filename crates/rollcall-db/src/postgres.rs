//! PostgreSQL-backed [`ClassroomStore`].

use async_trait::async_trait;
use rollcall_models::{
    AttendanceRecord, AttendanceStatus, Class, ClassDetail, NewUser, StudentSummary, User,
    UserCredentials,
};
use sqlx::{FromRow, PgPool};
use tracing::instrument;
use uuid::Uuid;

use crate::store::{ClassroomStore, StoreError};

#[derive(FromRow)]
struct ClassRow {
    id: Uuid,
    class_name: String,
    teacher_id: Uuid,
}

impl ClassRow {
    fn with_students(self, students: Vec<Uuid>) -> Class {
        Class {
            id: self.id,
            class_name: self.class_name,
            teacher_id: self.teacher_id,
            students,
        }
    }
}

fn unique_violation(e: sqlx::Error, what: &str) -> StoreError {
    if let sqlx::Error::Database(db_err) = &e {
        if db_err.is_unique_violation() {
            return StoreError::Conflict(what.to_string());
        }
    }
    StoreError::Database(e)
}

#[derive(Clone, Debug)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ClassroomStore for PgStore {
    #[instrument(skip(self, new_user), fields(email = %new_user.email))]
    async fn create_user(&self, new_user: NewUser) -> Result<User, StoreError> {
        sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (name, email, password, role)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, email, role
            "#,
        )
        .bind(&new_user.name)
        .bind(&new_user.email)
        .bind(&new_user.password_hash)
        .bind(new_user.role)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| unique_violation(e, "email"))
    }

    #[instrument(skip(self))]
    async fn find_credentials_by_email(
        &self,
        email: &str,
    ) -> Result<Option<UserCredentials>, StoreError> {
        let credentials = sqlx::query_as::<_, UserCredentials>(
            "SELECT id, role, password FROM users WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(credentials)
    }

    #[instrument(skip(self))]
    async fn find_user(&self, id: Uuid) -> Result<Option<User>, StoreError> {
        let user =
            sqlx::query_as::<_, User>("SELECT id, name, email, role FROM users WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(user)
    }

    #[instrument(skip(self))]
    async fn create_class(&self, teacher_id: Uuid, class_name: &str) -> Result<Class, StoreError> {
        let row = sqlx::query_as::<_, ClassRow>(
            r#"
            INSERT INTO classes (class_name, teacher_id)
            SELECT $1, id FROM users WHERE id = $2 AND role = 'teacher'
            RETURNING id, class_name, teacher_id
            "#,
        )
        .bind(class_name)
        .bind(teacher_id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| StoreError::InvalidReference("teacher".to_string()))?;

        Ok(row.with_students(Vec::new()))
    }

    #[instrument(skip(self))]
    async fn enroll_student(
        &self,
        class_id: Uuid,
        teacher_id: Uuid,
        student_id: Uuid,
    ) -> Result<Option<Class>, StoreError> {
        let mut tx = self.pool.begin().await?;

        let Some(class) = sqlx::query_as::<_, ClassRow>(
            r#"
            SELECT id, class_name, teacher_id
            FROM classes
            WHERE id = $1 AND teacher_id = $2
            FOR UPDATE
            "#,
        )
        .bind(class_id)
        .bind(teacher_id)
        .fetch_optional(&mut *tx)
        .await?
        else {
            return Ok(None);
        };

        let is_student = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (SELECT 1 FROM users WHERE id = $1 AND role = 'student')",
        )
        .bind(student_id)
        .fetch_one(&mut *tx)
        .await?;

        if !is_student {
            return Err(StoreError::InvalidReference("student".to_string()));
        }

        sqlx::query(
            r#"
            INSERT INTO class_students (class_id, student_id)
            VALUES ($1, $2)
            ON CONFLICT (class_id, student_id) DO NOTHING
            "#,
        )
        .bind(class_id)
        .bind(student_id)
        .execute(&mut *tx)
        .await?;

        sqlx::query(
            r#"
            INSERT INTO attendance (class_id, student_id)
            VALUES ($1, $2)
            ON CONFLICT (class_id, student_id) DO NOTHING
            "#,
        )
        .bind(class_id)
        .bind(student_id)
        .execute(&mut *tx)
        .await?;

        let students = sqlx::query_scalar::<_, Uuid>(
            "SELECT student_id FROM class_students WHERE class_id = $1 ORDER BY position",
        )
        .bind(class_id)
        .fetch_all(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(Some(class.with_students(students)))
    }

    #[instrument(skip(self))]
    async fn find_class_detail(&self, class_id: Uuid) -> Result<Option<ClassDetail>, StoreError> {
        let Some(class) = sqlx::query_as::<_, ClassRow>(
            "SELECT id, class_name, teacher_id FROM classes WHERE id = $1",
        )
        .bind(class_id)
        .fetch_optional(&self.pool)
        .await?
        else {
            return Ok(None);
        };

        let students = sqlx::query_as::<_, StudentSummary>(
            r#"
            SELECT u.id, u.name, u.email
            FROM class_students cs
            JOIN users u ON u.id = cs.student_id
            WHERE cs.class_id = $1
            ORDER BY cs.position
            "#,
        )
        .bind(class_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(Some(ClassDetail {
            id: class.id,
            class_name: class.class_name,
            teacher_id: class.teacher_id,
            students,
        }))
    }

    #[instrument(skip(self))]
    async fn list_enrolled_students(&self) -> Result<Vec<StudentSummary>, StoreError> {
        let students = sqlx::query_as::<_, StudentSummary>(
            r#"
            SELECT u.id, u.name, u.email
            FROM class_students cs
            JOIN classes c ON c.id = cs.class_id
            JOIN users u ON u.id = cs.student_id
            ORDER BY c.created_at, c.id, cs.position
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(students)
    }

    #[instrument(skip(self))]
    async fn find_attendance(
        &self,
        class_id: Uuid,
        student_id: Uuid,
    ) -> Result<Option<AttendanceRecord>, StoreError> {
        let record = sqlx::query_as::<_, AttendanceRecord>(
            "SELECT id, status FROM attendance WHERE class_id = $1 AND student_id = $2",
        )
        .bind(class_id)
        .bind(student_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(record)
    }

    #[instrument(skip(self))]
    async fn record_attendance(
        &self,
        class_id: Uuid,
        teacher_id: Uuid,
        student_id: Uuid,
        status: AttendanceStatus,
    ) -> Result<Option<AttendanceRecord>, StoreError> {
        let record = sqlx::query_as::<_, AttendanceRecord>(
            r#"
            UPDATE attendance AS a
            SET status = $4, recorded_at = NOW()
            FROM classes AS c
            WHERE a.class_id = c.id
              AND c.id = $1
              AND c.teacher_id = $2
              AND a.student_id = $3
            RETURNING a.id, a.status
            "#,
        )
        .bind(class_id)
        .bind(teacher_id)
        .bind(student_id)
        .bind(status)
        .fetch_optional(&self.pool)
        .await?;

        Ok(record)
    }
}
