use crate::domain::ports::{base_full_name, Named};
use serde::{Deserialize, Serialize};

pub const TEACHER_TITLE: &str = "Professor";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub first_name: String,
    pub last_name: String,
}

impl Person {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }
}

impl Named for Person {
    fn first_name(&self) -> &str {
        &self.first_name
    }

    fn last_name(&self) -> &str {
        &self.last_name
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub student_id: u32,
    #[serde(flatten)]
    pub person: Person,
}

impl Student {
    pub fn new(student_id: u32, first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            student_id,
            person: Person::new(first_name, last_name),
        }
    }

    pub fn take_test(&self) -> String {
        let line = format!(
            "{} with sid {} is taking a test",
            self.full_name(),
            self.student_id
        );
        tracing::info!("📝 {}", line);
        line
    }
}

impl Named for Student {
    fn first_name(&self) -> &str {
        &self.person.first_name
    }

    fn last_name(&self) -> &str {
        &self.person.last_name
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Teacher {
    #[serde(flatten)]
    pub person: Person,
}

impl Teacher {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            person: Person::new(first_name, last_name),
        }
    }
}

impl Named for Teacher {
    fn first_name(&self) -> &str {
        &self.person.first_name
    }

    fn last_name(&self) -> &str {
        &self.person.last_name
    }

    fn full_name(&self) -> String {
        format!(
            "{} {}",
            TEACHER_TITLE,
            base_full_name(self.first_name(), self.last_name())
        )
    }
}
