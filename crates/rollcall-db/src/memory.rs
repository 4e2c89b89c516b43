//! In-process [`ClassroomStore`] for tests and `--in-memory` servers.
//!
//! All state sits behind one [`RwLock`]; every mutation holds the write
//! guard for its whole check-and-insert, which gives the same uniqueness
//! guarantees as the Postgres constraints.

use std::collections::HashMap;

use async_trait::async_trait;
use rollcall_models::{
    AttendanceRecord, AttendanceStatus, Class, ClassDetail, NewUser, Role, StudentSummary, User,
    UserCredentials,
};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::store::{ClassroomStore, StoreError};

struct StoredUser {
    user: User,
    password_hash: String,
}

struct StoredClass {
    id: Uuid,
    class_name: String,
    teacher_id: Uuid,
    students: Vec<Uuid>,
}

impl StoredClass {
    fn to_class(&self) -> Class {
        Class {
            id: self.id,
            class_name: self.class_name.clone(),
            teacher_id: self.teacher_id,
            students: self.students.clone(),
        }
    }
}

#[derive(Default)]
struct State {
    users: HashMap<Uuid, StoredUser>,
    emails: HashMap<String, Uuid>,
    classes: Vec<StoredClass>,
    attendance: HashMap<(Uuid, Uuid), AttendanceRecord>,
}

impl State {
    fn has_role(&self, id: Uuid, role: Role) -> bool {
        self.users
            .get(&id)
            .is_some_and(|stored| stored.user.role == role)
    }

    fn summary(&self, id: Uuid) -> Option<StudentSummary> {
        self.users.get(&id).map(|stored| StudentSummary {
            id: stored.user.id,
            name: stored.user.name.clone(),
            email: stored.user.email.clone(),
        })
    }
}

#[derive(Default)]
pub struct MemoryStore {
    state: RwLock<State>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes a user out-of-band, leaving their enrollments dangling the
    /// way an external deletion would.
    pub async fn remove_user(&self, id: Uuid) -> bool {
        let mut state = self.state.write().await;
        match state.users.remove(&id) {
            Some(stored) => {
                state.emails.remove(&stored.user.email);
                true
            }
            None => false,
        }
    }
}

#[async_trait]
impl ClassroomStore for MemoryStore {
    async fn create_user(&self, new_user: NewUser) -> Result<User, StoreError> {
        let mut state = self.state.write().await;

        if state.emails.contains_key(&new_user.email) {
            return Err(StoreError::Conflict("email".to_string()));
        }

        let user = User {
            id: Uuid::new_v4(),
            name: new_user.name,
            email: new_user.email,
            role: new_user.role,
        };
        state.emails.insert(user.email.clone(), user.id);
        state.users.insert(
            user.id,
            StoredUser {
                user: user.clone(),
                password_hash: new_user.password_hash,
            },
        );

        Ok(user)
    }

    async fn find_credentials_by_email(
        &self,
        email: &str,
    ) -> Result<Option<UserCredentials>, StoreError> {
        let state = self.state.read().await;

        Ok(state
            .emails
            .get(email)
            .and_then(|id| state.users.get(id))
            .map(|stored| UserCredentials {
                id: stored.user.id,
                role: stored.user.role,
                password: stored.password_hash.clone(),
            }))
    }

    async fn find_user(&self, id: Uuid) -> Result<Option<User>, StoreError> {
        let state = self.state.read().await;
        Ok(state.users.get(&id).map(|stored| stored.user.clone()))
    }

    async fn create_class(&self, teacher_id: Uuid, class_name: &str) -> Result<Class, StoreError> {
        let mut state = self.state.write().await;

        if !state.has_role(teacher_id, Role::Teacher) {
            return Err(StoreError::InvalidReference("teacher".to_string()));
        }

        let class = StoredClass {
            id: Uuid::new_v4(),
            class_name: class_name.to_string(),
            teacher_id,
            students: Vec::new(),
        };
        let created = class.to_class();
        state.classes.push(class);

        Ok(created)
    }

    async fn enroll_student(
        &self,
        class_id: Uuid,
        teacher_id: Uuid,
        student_id: Uuid,
    ) -> Result<Option<Class>, StoreError> {
        let mut state = self.state.write().await;

        let Some(index) = state
            .classes
            .iter()
            .position(|class| class.id == class_id && class.teacher_id == teacher_id)
        else {
            return Ok(None);
        };

        if !state.has_role(student_id, Role::Student) {
            return Err(StoreError::InvalidReference("student".to_string()));
        }

        let class = &mut state.classes[index];
        if !class.students.contains(&student_id) {
            class.students.push(student_id);
        }
        let enrolled = class.to_class();

        state
            .attendance
            .entry((class_id, student_id))
            .or_insert_with(|| AttendanceRecord {
                id: Uuid::new_v4(),
                status: None,
            });

        Ok(Some(enrolled))
    }

    async fn find_class_detail(&self, class_id: Uuid) -> Result<Option<ClassDetail>, StoreError> {
        let state = self.state.read().await;

        Ok(state
            .classes
            .iter()
            .find(|class| class.id == class_id)
            .map(|class| ClassDetail {
                id: class.id,
                class_name: class.class_name.clone(),
                teacher_id: class.teacher_id,
                students: class
                    .students
                    .iter()
                    .filter_map(|id| state.summary(*id))
                    .collect(),
            }))
    }

    async fn list_enrolled_students(&self) -> Result<Vec<StudentSummary>, StoreError> {
        let state = self.state.read().await;

        Ok(state
            .classes
            .iter()
            .flat_map(|class| class.students.iter())
            .filter_map(|id| state.summary(*id))
            .collect())
    }

    async fn find_attendance(
        &self,
        class_id: Uuid,
        student_id: Uuid,
    ) -> Result<Option<AttendanceRecord>, StoreError> {
        let state = self.state.read().await;
        Ok(state.attendance.get(&(class_id, student_id)).cloned())
    }

    async fn record_attendance(
        &self,
        class_id: Uuid,
        teacher_id: Uuid,
        student_id: Uuid,
        status: AttendanceStatus,
    ) -> Result<Option<AttendanceRecord>, StoreError> {
        let mut state = self.state.write().await;

        let owns_class = state
            .classes
            .iter()
            .any(|class| class.id == class_id && class.teacher_id == teacher_id);
        if !owns_class {
            return Ok(None);
        }

        Ok(state
            .attendance
            .get_mut(&(class_id, student_id))
            .map(|record| {
                record.status = Some(status);
                record.clone()
            }))
    }
}
