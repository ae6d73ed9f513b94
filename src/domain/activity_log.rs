//! ActivityLog - Back-Office Audit Entries

use serde::{Deserialize, Serialize};

use crate::domain::record::{CellRef, TableRecord};

/// One audit entry: who did what, to which entity, and when
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityLog {
    pub id: i64,
    /// Account that performed the action
    pub actor: String,
    /// Action code (e.g. "CREATE_OPERATOR")
    pub action: String,
    #[serde(default)]
    pub target: Option<String>,
    #[serde(default)]
    pub ip_address: Option<String>,
    pub created_at: String,
}

impl ActivityLog {
    /// Human-readable action label
    pub fn action_label(&self) -> &str {
        match self.action.as_str() {
            "LOGIN" => "Signed in",
            "LOGOUT" => "Signed out",
            "CREATE_MANAGER" | "CREATE_EXECUTIVE" | "CREATE_OPERATOR" => "Created account",
            "UPDATE_MANAGER" | "UPDATE_EXECUTIVE" | "UPDATE_OPERATOR" => "Updated account",
            "DELETE_MANAGER" | "DELETE_EXECUTIVE" | "DELETE_OPERATOR" => "Deleted account",
            other => other,
        }
    }
}

impl TableRecord for ActivityLog {
    fn cell(&self, key: &str) -> CellRef<'_> {
        match key {
            "id" => CellRef::Number(self.id as f64),
            "actor" => CellRef::Text(&self.actor),
            "action" => CellRef::Text(&self.action),
            "target" => self.target.as_deref().into(),
            "ipAddress" => self.ip_address.as_deref().into(),
            "createdAt" => CellRef::Text(&self.created_at),
            _ => CellRef::Null,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_action_falls_back_to_code() {
        let log = ActivityLog {
            id: 1,
            actor: "admin".into(),
            action: "RESET_PIN".into(),
            target: None,
            ip_address: None,
            created_at: "2024-05-01 10:00:00".into(),
        };
        assert_eq!(log.action_label(), "RESET_PIN");
        assert_eq!(log.cell("target"), CellRef::Null);
    }
}
