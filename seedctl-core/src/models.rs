//! Plain records carried back from read queries

use std::fmt;

use chrono::NaiveDateTime;
use serde::Serialize;

/// A row of `users` as returned by `fetch_users`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserRecord {
    pub id: i32,
    pub email: String,
    /// Creation timestamp rendered as text; empty when the column is NULL
    pub created_at: String,
}

impl UserRecord {
    pub(crate) fn new(id: i32, email: String, created_at: Option<NaiveDateTime>) -> Self {
        Self {
            id,
            email,
            created_at: created_at.map(|ts| ts.to_string()).unwrap_or_default(),
        }
    }
}

impl fmt::Display for UserRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}) {} @ {}", self.id, self.email, self.created_at)
    }
}

/// A row of `example_table`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct ExampleRowRecord {
    pub id: i32,
    pub name: String,
    pub age: i32,
}

impl fmt::Display for ExampleRowRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}) {}, age {}", self.id, self.name, self.age)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn user_timestamp_renders_as_text() {
        let ts = NaiveDate::from_ymd_opt(2024, 3, 1)
            .unwrap()
            .and_hms_micro_opt(9, 30, 5, 123_456)
            .unwrap();
        let user = UserRecord::new(1, "alice@example.com".to_string(), Some(ts));

        assert_eq!(user.created_at, "2024-03-01 09:30:05.123456");
        assert_eq!(
            user.to_string(),
            "(1) alice@example.com @ 2024-03-01 09:30:05.123456"
        );
    }

    #[test]
    fn null_timestamp_renders_empty() {
        let user = UserRecord::new(7, "bob@example.com".to_string(), None);
        assert_eq!(user.created_at, "");
    }

    #[test]
    fn user_serializes_flat() {
        let user = UserRecord {
            id: 2,
            email: "bob@example.com".to_string(),
            created_at: "2024-03-01 09:30:05".to_string(),
        };
        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["id"], 2);
        assert_eq!(json["email"], "bob@example.com");
        assert_eq!(json["created_at"], "2024-03-01 09:30:05");
    }

    #[test]
    fn example_row_display() {
        let row = ExampleRowRecord {
            id: 3,
            name: "Charlie".to_string(),
            age: 35,
        };
        assert_eq!(row.to_string(), "(3) Charlie, age 35");
    }
}
