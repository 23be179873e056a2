// src/render.rs
//! Plain-text views of the console forms.

use crate::form::{FormKind, FormState, Selection};
use crate::models::{Player, PlayerId, Server, ServerId};

const COLUMN_GAP: usize = 4;

fn checkbox(checked: bool) -> &'static str {
    if checked {
        "[x]"
    } else {
        "[ ]"
    }
}

pub fn server_line(server: &Server, selected: &Selection<ServerId>) -> String {
    format!(
        "{} [{}] {} ({}) - {}",
        checkbox(selected.contains(server.id)),
        server.id,
        server.name,
        server.ip,
        server.status
    )
}

/// A player whose server is not in `servers` shows as on `Unknown`.
pub fn player_line(player: &Player, servers: &[Server], selected: &Selection<PlayerId>) -> String {
    format!(
        "{} [{}] {} (Server: {}) - {}",
        checkbox(selected.contains(player.id)),
        player.id,
        player.name,
        player.server_name(servers).unwrap_or("Unknown"),
        player.status
    )
}

pub fn form_lines<K: FormKind>(state: &FormState<K::Input>) -> Vec<String> {
    let mut lines = vec![format!("== {} ==", K::TITLE)];

    if let Some(error) = &state.error {
        lines.push(format!("! {}", error));
    }
    if let Some(success) = &state.success {
        lines.push(format!("+ {}", success));
    }

    lines.extend(K::input_lines(state));

    lines.push("Servers:".to_string());
    if state.servers.is_empty() {
        lines.push("  (none)".to_string());
    }
    for server in &state.servers {
        lines.push(format!("  {}", server_line(server, &state.selected_servers)));
    }

    lines.push("Players:".to_string());
    if state.players.is_empty() {
        lines.push("  (none)".to_string());
    }
    for player in &state.players {
        lines.push(format!(
            "  {}",
            player_line(player, &state.servers, &state.selected_players)
        ));
    }

    let label = if state.loading { K::BUSY_LABEL } else { K::SUBMIT_LABEL };
    lines.push(format!("< {} >", label));
    lines
}

/// Lays two blocks of lines out as columns.
pub fn side_by_side(left: &[String], right: &[String]) -> Vec<String> {
    let width = left.iter().map(|line| line.chars().count()).max().unwrap_or(0);
    let rows = left.len().max(right.len());

    (0..rows)
        .map(|row| {
            let l = left.get(row).map(String::as_str).unwrap_or("");
            let r = right.get(row).map(String::as_str).unwrap_or("");
            if r.is_empty() {
                return l.to_string();
            }
            let pad = width - l.chars().count() + COLUMN_GAP;
            format!("{}{}{}", l, " ".repeat(pad), r)
        })
        .collect()
}
