use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::collection::Record;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Owner {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl Record for Owner {
    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }

    fn fresh_id() -> String {
        format!("owner-{}", Uuid::new_v4())
    }
}
