use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Student,
    Teacher,
}

impl Role {
    /// Login treats anything other than `"teacher"` as a student.
    pub fn from_login(role: Option<&str>) -> Self {
        match role {
            Some("teacher") => Role::Teacher,
            _ => Role::Student,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::Teacher => "teacher",
        }
    }

    /// Profile table joined against `users` for this role.
    pub fn table(&self) -> &'static str {
        match self {
            Role::Student => "students",
            Role::Teacher => "teachers",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct DbStudent {
    pub student_id: i64,
    pub name: String,
    pub grade: String,
    pub user_id: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct DbTeacher {
    pub teacher_id: i64,
    pub name: String,
    pub subject: String,
    pub user_id: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_roles_fall_back_to_student() {
        assert_eq!(Role::from_login(Some("teacher")), Role::Teacher);
        assert_eq!(Role::from_login(Some("student")), Role::Student);
        assert_eq!(Role::from_login(Some("Teacher")), Role::Student);
        assert_eq!(Role::from_login(Some("admin")), Role::Student);
        assert_eq!(Role::from_login(None), Role::Student);
    }

    #[test]
    fn teacher_row_serializes_with_column_names() {
        let row = DbTeacher {
            teacher_id: 1,
            name: "Karthikeyan".into(),
            subject: "Maths".into(),
            user_id: Some(2),
        };
        let v = serde_json::to_value(&row).unwrap();
        assert_eq!(
            v,
            serde_json::json!({"teacher_id": 1, "name": "Karthikeyan", "subject": "Maths", "user_id": 2})
        );
    }
}
