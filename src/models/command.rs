use serde::{Deserialize, Serialize};

numeric_id!(CommandId);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Command {
    pub id: CommandId,
    pub name: String,
    pub description: String,
}
