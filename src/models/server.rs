// src/models/server.rs
use serde::{Deserialize, Serialize};

numeric_id!(ServerId);
numeric_id!(PlayerId);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Server {
    pub id: ServerId,
    pub name: String,
    pub ip: String,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    // Not guaranteed to match any server in the fetched list
    pub server_id: ServerId,
    pub status: String,
}

impl Player {
    /// Name of the server this player is on, looked up in `servers`.
    pub fn server_name<'a>(&self, servers: &'a [Server]) -> Option<&'a str> {
        servers
            .iter()
            .find(|server| server.id == self.server_id)
            .map(|server| server.name.as_str())
    }
}
