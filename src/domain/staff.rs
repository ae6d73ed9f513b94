//! Staff - Managers, Executives and Operators
//!
//! Field names follow the back-office API payloads, including its mixed casing.

use serde::{Deserialize, Serialize};

use crate::domain::record::{CellRef, TableRecord};

/// A regional manager
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Manager {
    pub id: i64,
    pub full_name: String,
    #[serde(rename = "Email")]
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(rename = "Region")]
    pub region: String,
    #[serde(rename = "Status")]
    pub status: String,
    /// Registration timestamp, ISO-like string as sent by the API
    pub created_at: String,
}

impl TableRecord for Manager {
    fn cell(&self, key: &str) -> CellRef<'_> {
        match key {
            "id" => CellRef::Number(self.id as f64),
            "fullName" => CellRef::Text(&self.full_name),
            "Email" => CellRef::Text(&self.email),
            "phone" => self.phone.as_deref().into(),
            "Region" => CellRef::Text(&self.region),
            "Status" => CellRef::Text(&self.status),
            "createdAt" => CellRef::Text(&self.created_at),
            _ => CellRef::Null,
        }
    }
}

/// An executive reporting to a manager
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Executive {
    pub id: i64,
    pub full_name: String,
    #[serde(rename = "Email")]
    pub email: String,
    #[serde(rename = "Region")]
    pub region: String,
    #[serde(default)]
    pub manager_name: Option<String>,
    #[serde(rename = "Status")]
    pub status: String,
    pub created_at: String,
}

impl TableRecord for Executive {
    fn cell(&self, key: &str) -> CellRef<'_> {
        match key {
            "id" => CellRef::Number(self.id as f64),
            "fullName" => CellRef::Text(&self.full_name),
            "Email" => CellRef::Text(&self.email),
            "Region" => CellRef::Text(&self.region),
            "managerName" => self.manager_name.as_deref().into(),
            "Status" => CellRef::Text(&self.status),
            "createdAt" => CellRef::Text(&self.created_at),
            _ => CellRef::Null,
        }
    }
}

/// A terminal operator selling tickets
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Operator {
    pub id: i64,
    pub full_name: String,
    #[serde(rename = "Email")]
    pub email: String,
    #[serde(rename = "Region")]
    pub region: String,
    pub terminal_code: String,
    #[serde(default)]
    pub executive_name: Option<String>,
    #[serde(rename = "Status")]
    pub status: String,
    pub created_at: String,
}

impl TableRecord for Operator {
    fn cell(&self, key: &str) -> CellRef<'_> {
        match key {
            "id" => CellRef::Number(self.id as f64),
            "fullName" => CellRef::Text(&self.full_name),
            "Email" => CellRef::Text(&self.email),
            "Region" => CellRef::Text(&self.region),
            "terminalCode" => CellRef::Text(&self.terminal_code),
            "executiveName" => self.executive_name.as_deref().into(),
            "Status" => CellRef::Text(&self.status),
            "createdAt" => CellRef::Text(&self.created_at),
            _ => CellRef::Null,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manager_parses_api_payload() {
        let manager: Manager = serde_json::from_str(
            r#"{
                "id": 12,
                "fullName": "Grace Mensah",
                "Email": "grace@lotto.example",
                "Region": "North",
                "Status": "Active",
                "createdAt": "2024-03-02T08:15:00Z"
            }"#,
        )
        .expect("manager should parse");

        assert_eq!(manager.phone, None);
        assert_eq!(manager.cell("id"), CellRef::Number(12.0));
        assert_eq!(manager.cell("Region"), CellRef::Text("North"));
        assert_eq!(manager.cell("phone"), CellRef::Null);
        assert_eq!(manager.cell("unknown"), CellRef::Null);
    }

    #[test]
    fn operator_exposes_terminal_code() {
        let operator = Operator {
            id: 4,
            full_name: "Kofi Boateng".into(),
            email: "kofi@lotto.example".into(),
            region: "South".into(),
            terminal_code: "T-0042".into(),
            executive_name: Some("Ama Owusu".into()),
            status: "Suspended".into(),
            created_at: "2023-11-20".into(),
        };

        assert_eq!(operator.cell("terminalCode"), CellRef::Text("T-0042"));
        assert_eq!(operator.cell("executiveName"), CellRef::Text("Ama Owusu"));
    }
}
