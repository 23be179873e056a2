use super::{FormKind, FormState, TargetedForm, Targets, ValidationError};
use crate::api::SEND_MESSAGE_PATH;
use crate::models::MessagePayload;

/// Broadcasts free text to the selected servers and players.
pub struct MessageKind;

pub type MessageForm = TargetedForm<MessageKind>;

impl FormKind for MessageKind {
    type Input = String;
    type Payload = MessagePayload;

    const TITLE: &'static str = "Send Cross-Server Message";
    const ENDPOINT: &'static str = SEND_MESSAGE_PATH;
    const SUBMIT_LABEL: &'static str = "Send Message";
    const BUSY_LABEL: &'static str = "Sending...";
    const SUCCESS: &'static str = "Message sent successfully!";
    const FAILURE: &'static str = "Failed to send message";
    const LOADS_COMMANDS: bool = false;

    fn payload(message: &String, targets: Targets) -> Result<MessagePayload, ValidationError> {
        if message.trim().is_empty() {
            return Err(ValidationError::EmptyMessage);
        }
        let targets = targets.require()?;
        Ok(MessagePayload {
            message: message.clone(),
            servers: targets.servers,
            players: targets.players,
        })
    }

    fn input_lines(state: &FormState<String>) -> Vec<String> {
        let mut lines = vec!["Message:".to_string()];
        if state.input.is_empty() {
            lines.push("  (enter your message)".to_string());
        } else {
            lines.extend(state.input.lines().map(|line| format!("  {}", line)));
        }
        lines
    }
}

impl TargetedForm<MessageKind> {
    pub fn set_message(&self, text: impl Into<String>) {
        let text = text.into();
        self.update_input(|message| *message = text);
    }
}
