// src/shell.rs
use std::fmt;

use log::{debug, info};
use tokio::io::{self, AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};

use crate::config::Config;
use crate::form::{CommandForm, CommandKind, MessageForm, MessageKind, SubmitOutcome, Toggle};
use crate::models::{CommandId, PlayerId, ServerId};
use crate::render::{form_lines, side_by_side};

pub const TITLE: &str = "MiniUltiMaxConsole";
pub const SUBTITLE: &str = "Console with streamlined connection workflow and automation";

pub const USAGE: &str = "\
commands:
  msg text <message>      set the message
  msg server <id>         toggle a server for the message
  msg player <id>         toggle a player for the message
  msg send                send the message
  cmd select <id|->       pick a command (- clears)
  cmd args <args>         set command arguments
  cmd server <id>         toggle a server for the command
  cmd player <id>         toggle a player for the command
  cmd send                execute the command
  show                    redraw both forms
  help                    this text
  quit                    leave the console";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellInput {
    MessageText(String),
    MessageServer(ServerId),
    MessagePlayer(PlayerId),
    MessageSend,
    CommandSelect(Option<CommandId>),
    CommandArgs(String),
    CommandServer(ServerId),
    CommandPlayer(PlayerId),
    CommandSend,
    Show,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    Empty,
    Unknown(String),
    MissingArgument(&'static str),
    InvalidId(String),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Empty input"),
            Self::Unknown(input) => write!(f, "Unknown input: {}", input),
            Self::MissingArgument(what) => write!(f, "Missing {}", what),
            Self::InvalidId(raw) => write!(f, "Invalid id: {}", raw),
        }
    }
}

impl std::error::Error for ParseError {}

fn parse_id<T: std::str::FromStr>(raw: &str) -> Result<T, ParseError> {
    if raw.is_empty() {
        return Err(ParseError::MissingArgument("id"));
    }
    raw.parse().map_err(|_| ParseError::InvalidId(raw.to_string()))
}

/// Splits off the first word; the rest keeps its inner spacing.
fn split_word(input: &str) -> (&str, &str) {
    let input = input.trim_start();
    match input.find(char::is_whitespace) {
        Some(end) => (&input[..end], input[end..].trim_start()),
        None => (input, ""),
    }
}

impl ShellInput {
    pub fn parse(line: &str) -> Result<Self, ParseError> {
        let (form, rest) = split_word(line.trim_end());
        let (action, arg) = split_word(rest);

        match (form, action) {
            ("", _) => Err(ParseError::Empty),
            ("show", "") => Ok(Self::Show),
            ("help", "") => Ok(Self::Help),
            ("quit", "") | ("exit", "") => Ok(Self::Quit),

            ("msg", "text") => Ok(Self::MessageText(arg.to_string())),
            ("msg", "server") => parse_id(arg).map(Self::MessageServer),
            ("msg", "player") => parse_id(arg).map(Self::MessagePlayer),
            ("msg", "send") => Ok(Self::MessageSend),

            ("cmd", "select") => match arg {
                "" => Err(ParseError::MissingArgument("command id")),
                "-" => Ok(Self::CommandSelect(None)),
                raw => parse_id(raw).map(|id| Self::CommandSelect(Some(id))),
            },
            ("cmd", "args") => Ok(Self::CommandArgs(arg.to_string())),
            ("cmd", "server") => parse_id(arg).map(Self::CommandServer),
            ("cmd", "player") => parse_id(arg).map(Self::CommandPlayer),
            ("cmd", "send") => Ok(Self::CommandSend),

            _ => Err(ParseError::Unknown(line.trim().to_string())),
        }
    }
}

/// Header plus both forms. Each form keeps its own errors.
pub struct Shell {
    message: MessageForm,
    command: CommandForm,
}

impl Shell {
    pub fn new(config: &Config) -> Self {
        Self {
            message: MessageForm::new(config),
            command: CommandForm::new(config),
        }
    }

    pub fn message(&self) -> &MessageForm {
        &self.message
    }

    pub fn command(&self) -> &CommandForm {
        &self.command
    }

    pub fn mount(&self) {
        self.message.mount();
        self.command.mount();
    }

    pub async fn settle(&self) {
        self.message.settle().await;
        self.command.settle().await;
    }

    pub fn render(&self) -> String {
        let message = form_lines::<MessageKind>(&self.message.snapshot());
        let command = form_lines::<CommandKind>(&self.command.snapshot());

        let mut screen = format!("{}\n{}\n\n", TITLE, SUBTITLE);
        for row in side_by_side(&message, &command) {
            screen.push_str(row.trim_end());
            screen.push('\n');
        }
        screen
    }

    /// Applies one operator input to the form it names.
    pub fn apply(&self, input: ShellInput) -> Applied {
        debug!("Shell input: {:?}", input);
        match input {
            ShellInput::MessageText(text) => self.message.set_message(text),
            ShellInput::MessageServer(id) => return server_toggled(id, self.message.toggle_server(id)),
            ShellInput::MessagePlayer(id) => return player_toggled(id, self.message.toggle_player(id)),
            ShellInput::MessageSend => return Applied::Submitted(self.message.submit()),
            ShellInput::CommandSelect(id) => self.command.select_command(id),
            ShellInput::CommandArgs(args) => self.command.set_args(args),
            ShellInput::CommandServer(id) => return server_toggled(id, self.command.toggle_server(id)),
            ShellInput::CommandPlayer(id) => return player_toggled(id, self.command.toggle_player(id)),
            ShellInput::CommandSend => return Applied::Submitted(self.command.submit()),
            ShellInput::Show | ShellInput::Help | ShellInput::Quit => {}
        }
        Applied::Updated
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    Updated,
    Submitted(SubmitOutcome),
    UnknownServer(ServerId),
    UnknownPlayer(PlayerId),
}

impl Applied {
    /// Line shown above the redrawn forms. Validation errors already show
    /// up as the form's banner.
    pub fn note(&self) -> Option<String> {
        match self {
            Self::UnknownServer(id) => Some(format!("Unknown server {}", id)),
            Self::UnknownPlayer(id) => Some(format!("Unknown player {}", id)),
            Self::Submitted(SubmitOutcome::Busy) => Some("Still waiting on the previous request".to_string()),
            _ => None,
        }
    }
}

fn server_toggled(id: ServerId, toggle: Toggle) -> Applied {
    match toggle {
        Toggle::Unknown => Applied::UnknownServer(id),
        _ => Applied::Updated,
    }
}

fn player_toggled(id: PlayerId, toggle: Toggle) -> Applied {
    match toggle {
        Toggle::Unknown => Applied::UnknownPlayer(id),
        _ => Applied::Updated,
    }
}

async fn write_out<W: AsyncWrite + Unpin>(out: &mut W, text: &str) -> io::Result<()> {
    out.write_all(text.as_bytes()).await?;
    out.flush().await
}

/// Mounts both forms and serves operator lines from stdin until `quit` or
/// end of input.
pub async fn run(shell: Shell) -> io::Result<()> {
    shell.mount();
    run_with(&shell, BufReader::new(io::stdin()), &mut io::stdout()).await
}

/// Console loop over any line source. Input is never held up by requests:
/// each form redraws on its own when one of its requests finishes.
pub async fn run_with<R, W>(shell: &Shell, reader: R, out: &mut W) -> io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = reader.lines();
    write_out(out, &format!("{}\ntype `help` for commands\n> ", shell.render())).await?;

    loop {
        let line = tokio::select! {
            line = lines.next_line() => line?,
            _ = shell.message.changed() => {
                write_out(out, &format!("\n{}> ", shell.render())).await?;
                continue;
            }
            _ = shell.command.changed() => {
                write_out(out, &format!("\n{}> ", shell.render())).await?;
                continue;
            }
        };
        let Some(line) = line else {
            break;
        };

        let reply = match ShellInput::parse(&line) {
            Ok(ShellInput::Quit) => break,
            Ok(ShellInput::Help) => format!("{}\n", USAGE),
            Ok(input) => {
                let applied = shell.apply(input);
                match applied.note() {
                    Some(note) => format!("{}\n{}", note, shell.render()),
                    None => shell.render(),
                }
            }
            Err(ParseError::Empty) => String::new(),
            Err(e) => format!("{}\n{}\n", e, USAGE),
        };
        write_out(out, &format!("{}> ", reply)).await?;
    }

    info!("Console closed");
    Ok(())
}
