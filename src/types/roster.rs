use serde::{Deserialize, Serialize};

use crate::error::RosterError;
use crate::middleware::JsonFields;

/// Body of `POST /login`. Absent or non-string fields never match a stored user.
#[derive(Debug, Clone, Default)]
pub struct LoginRequest {
    pub name: Option<String>,
    pub role: Option<String>,
    pub password: Option<String>,
}

impl From<JsonFields> for LoginRequest {
    fn from(f: JsonFields) -> Self {
        Self {
            name: f.string("name"),
            role: f.string("role"),
            password: f.string("password"),
        }
    }
}

/// Body of `POST /teachers`. Scalar values are kept in their text form.
#[derive(Debug, Clone, Default)]
pub struct NewTeacherRequest {
    pub name: Option<String>,
    pub password: Option<String>,
    pub subject: Option<String>,
}

impl From<JsonFields> for NewTeacherRequest {
    fn from(f: JsonFields) -> Self {
        Self {
            name: f.text("name"),
            password: f.text("password"),
            subject: f.text("subject"),
        }
    }
}

/// Body of `POST /students`. Scalar values are kept in their text form.
#[derive(Debug, Clone, Default)]
pub struct NewStudentRequest {
    pub name: Option<String>,
    pub password: Option<String>,
    pub grade: Option<String>,
}

impl From<JsonFields> for NewStudentRequest {
    fn from(f: JsonFields) -> Self {
        Self {
            name: f.text("name"),
            password: f.text("password"),
            grade: f.text("grade"),
        }
    }
}

/// A teacher or student with every column present, ready for insertion.
#[derive(Debug, Clone, PartialEq)]
pub struct NewMember {
    pub name: String,
    pub password: String,
    /// `subject` for teachers, `grade` for students.
    pub detail: String,
}

impl TryFrom<NewTeacherRequest> for NewMember {
    type Error = RosterError;

    fn try_from(req: NewTeacherRequest) -> Result<Self, Self::Error> {
        Ok(NewMember {
            name: required(req.name, "name")?,
            password: required(req.password, "password")?,
            detail: required(req.subject, "subject")?,
        })
    }
}

impl TryFrom<NewStudentRequest> for NewMember {
    type Error = RosterError;

    fn try_from(req: NewStudentRequest) -> Result<Self, Self::Error> {
        Ok(NewMember {
            name: required(req.name, "name")?,
            password: required(req.password, "password")?,
            detail: required(req.grade, "grade")?,
        })
    }
}

fn required(value: Option<String>, field: &'static str) -> Result<String, RosterError> {
    value.ok_or(RosterError::Validation(field))
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ReadinessResponse {
    pub ready: bool,
}
