//! Classes and their rosters.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// A class with its roster as bare student ids, in enrollment order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Class {
    pub id: Uuid,
    pub class_name: String,
    pub teacher_id: Uuid,
    pub students: Vec<Uuid>,
}

/// A roster entry as shown to class members.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct StudentSummary {
    pub id: Uuid,
    pub name: String,
    pub email: String,
}

/// A class with its roster resolved to [`StudentSummary`] entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClassDetail {
    pub id: Uuid,
    pub class_name: String,
    pub teacher_id: Uuid,
    pub students: Vec<StudentSummary>,
}

impl ClassDetail {
    pub fn is_owned_by(&self, user_id: Uuid) -> bool {
        self.teacher_id == user_id
    }

    pub fn has_student(&self, user_id: Uuid) -> bool {
        self.students.iter().any(|student| student.id == user_id)
    }
}
