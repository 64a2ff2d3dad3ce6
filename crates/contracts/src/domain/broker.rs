use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::collection::Record;

/// Listing agent. `license_number` carries the CRECI registration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Broker {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub whatsapp: Option<String>,
    pub license_number: String,
}

impl Record for Broker {
    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }

    fn fresh_id() -> String {
        format!("broker-{}", Uuid::new_v4())
    }
}
