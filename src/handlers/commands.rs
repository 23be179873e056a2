// src/handlers/commands.rs
use actix_web::{web, HttpResponse};
use log::debug;

use crate::storage::memory::ConsoleStore;

pub async fn get_commands(storage: web::Data<ConsoleStore>) -> HttpResponse {
    let commands = storage.get_commands();
    debug!("Serving {} commands", commands.len());
    HttpResponse::Ok().json(commands)
}
