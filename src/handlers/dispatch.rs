// src/handlers/dispatch.rs
use actix_web::{web, HttpResponse};
use log::{info, warn};

use crate::models::{CommandPayload, DispatchReceipt, MessagePayload};
use crate::storage::memory::{ConsoleStore, Dispatch};

fn receipt<T: serde::Serialize>(message: &str, data: &T) -> HttpResponse {
    HttpResponse::Ok().json(DispatchReceipt {
        status: "success".to_string(),
        message: message.to_string(),
        data: serde_json::to_value(data).unwrap_or_default(),
    })
}

pub async fn send_message(
    storage: web::Data<ConsoleStore>,
    payload: web::Json<MessagePayload>,
) -> HttpResponse {
    let payload = payload.into_inner();
    if payload.servers.is_empty() && payload.players.is_empty() {
        warn!("Message dispatched with no targets");
    }
    info!(
        "Message to {} server(s) and {} player(s): {:?}",
        payload.servers.len(),
        payload.players.len(),
        payload.message
    );

    let response = receipt("Message sent successfully", &payload);
    storage.record(Dispatch::Message(payload));
    response
}

pub async fn execute_command(
    storage: web::Data<ConsoleStore>,
    payload: web::Json<CommandPayload>,
) -> HttpResponse {
    let payload = payload.into_inner();
    info!(
        "Command {} ({:?}) on {} server(s) and {} player(s)",
        payload.command,
        payload.args,
        payload.servers.len(),
        payload.players.len()
    );

    let response = receipt("Command executed successfully", &payload);
    storage.record(Dispatch::Command(payload));
    response
}
