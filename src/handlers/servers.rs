// src/handlers/servers.rs
use actix_web::{web, HttpResponse};
use log::debug;

use crate::storage::memory::ConsoleStore;

pub async fn get_servers(storage: web::Data<ConsoleStore>) -> HttpResponse {
    let servers = storage.get_servers();
    debug!("Serving {} servers", servers.len());
    HttpResponse::Ok().json(servers)
}
