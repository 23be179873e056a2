use serde::{Deserialize, Serialize};

use super::{PlayerId, ServerId};

/// Body of `POST /api/send-message`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessagePayload {
    pub message: String,
    pub servers: Vec<ServerId>,
    pub players: Vec<PlayerId>,
}

/// Body of `POST /api/execute-command`.
///
/// The backend takes the command id as a decimal string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandPayload {
    pub command: String,
    #[serde(default)]
    pub args: String,
    pub servers: Vec<ServerId>,
    pub players: Vec<PlayerId>,
}

/// What the mock backend answers to a dispatch. Clients only look at the
/// HTTP status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DispatchReceipt {
    pub status: String,
    pub message: String,
    pub data: serde_json::Value,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn command_payload_matches_backend_contract() {
        let payload = CommandPayload {
            command: "5".into(),
            args: String::new(),
            servers: vec![ServerId(1)],
            players: vec![PlayerId(9)],
        };
        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({"command": "5", "args": "", "servers": [1], "players": [9]})
        );
    }

    #[test]
    fn command_payload_args_default_to_empty() {
        let payload: CommandPayload =
            serde_json::from_value(json!({"command": "2", "servers": [], "players": [4]}))
                .unwrap();
        assert_eq!(payload.args, "");
        assert_eq!(payload.players, vec![PlayerId(4)]);
    }
}
