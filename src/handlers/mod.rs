// src/handlers/mod.rs
pub mod commands;
pub mod dispatch;
pub mod index;
pub mod players;
pub mod servers;

use actix_web::web;

/// Registers the console REST surface. Expects a `web::Data<ConsoleStore>`
/// on the app.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(index::health))
        .route("/api/servers", web::get().to(servers::get_servers))
        .route("/api/players", web::get().to(players::get_players))
        .route("/api/players/{server_id}", web::get().to(players::get_players_on_server))
        .route("/api/commands", web::get().to(commands::get_commands))
        .route("/api/send-message", web::post().to(dispatch::send_message))
        .route("/api/execute-command", web::post().to(dispatch::execute_command));
}
