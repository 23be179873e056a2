// src/handlers/players.rs
use actix_web::{web, HttpResponse};
use log::debug;

use crate::models::ServerId;
use crate::storage::memory::ConsoleStore;

pub async fn get_players(storage: web::Data<ConsoleStore>) -> HttpResponse {
    let players = storage.get_players();
    debug!("Serving {} players", players.len());
    HttpResponse::Ok().json(players)
}

pub async fn get_players_on_server(
    storage: web::Data<ConsoleStore>,
    path: web::Path<ServerId>,
) -> HttpResponse {
    let server_id = path.into_inner();
    let players = storage.players_on(server_id);
    debug!("Serving {} players on server {}", players.len(), server_id);
    HttpResponse::Ok().json(players)
}
