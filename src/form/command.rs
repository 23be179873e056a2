use super::{FormKind, FormState, TargetedForm, Targets, ValidationError};
use crate::api::EXECUTE_COMMAND_PATH;
use crate::models::{Command, CommandId, CommandPayload};

/// Runs a catalog command with optional arguments on the selected targets.
pub struct CommandKind;

pub type CommandForm = TargetedForm<CommandKind>;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandInput {
    pub command: Option<CommandId>,
    pub args: String,
}

impl FormKind for CommandKind {
    type Input = CommandInput;
    type Payload = CommandPayload;

    const TITLE: &'static str = "Execute Cross-Server Command";
    const ENDPOINT: &'static str = EXECUTE_COMMAND_PATH;
    const SUBMIT_LABEL: &'static str = "Execute Command";
    const BUSY_LABEL: &'static str = "Executing...";
    const SUCCESS: &'static str = "Command executed successfully!";
    const FAILURE: &'static str = "Failed to execute command";
    const LOADS_COMMANDS: bool = true;

    fn payload(input: &CommandInput, targets: Targets) -> Result<CommandPayload, ValidationError> {
        let command = input.command.ok_or(ValidationError::NoCommand)?;
        let targets = targets.require()?;
        Ok(CommandPayload {
            command: command.to_string(),
            args: input.args.clone(),
            servers: targets.servers,
            players: targets.players,
        })
    }

    fn input_lines(state: &FormState<CommandInput>) -> Vec<String> {
        let mut lines = vec!["Command:".to_string()];
        if state.commands.is_empty() {
            lines.push("  (no commands)".to_string());
        }
        for command in &state.commands {
            let marker = if state.input.command == Some(command.id) { '>' } else { ' ' };
            lines.push(format!("  {} [{}] {} - {}", marker, command.id, command.name, command.description));
        }
        if let Some(command) = find_command(&state.commands, state.input.command) {
            lines.push(format!("  Description: {}", command.description));
        }

        lines.push("Arguments (optional):".to_string());
        if state.input.args.is_empty() {
            lines.push("  (none)".to_string());
        } else {
            lines.push(format!("  {}", state.input.args));
        }
        lines
    }
}

fn find_command(commands: &[Command], id: Option<CommandId>) -> Option<&Command> {
    let id = id?;
    commands.iter().find(|command| command.id == id)
}

impl TargetedForm<CommandKind> {
    pub fn select_command(&self, command: Option<CommandId>) {
        self.update_input(|input| input.command = command);
    }

    /// Selects by the id as typed. Blank or non-numeric text clears the
    /// selection, like picking the placeholder option.
    pub fn select_command_str(&self, value: &str) {
        self.select_command(value.parse().ok());
    }

    pub fn set_args(&self, args: impl Into<String>) {
        let args = args.into();
        self.update_input(|input| input.args = args);
    }

    /// The catalog entry matching the selected id, if the catalog has it.
    pub fn selected_command(&self) -> Option<Command> {
        let state = self.snapshot();
        find_command(&state.commands, state.input.command).cloned()
    }
}
