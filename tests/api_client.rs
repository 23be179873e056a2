mod common;

use common::spawn_backend;
use muc::api::{ApiClient, ApiError};
use muc::config::Config;
use muc::models::{MessagePayload, PlayerId, ServerId};
use muc::storage::memory::{ConsoleStore, Dispatch};

#[actix_web::test]
async fn lists_come_back_in_id_order() {
    let backend = spawn_backend(ConsoleStore::seeded());
    let client = ApiClient::new(&backend.config);

    let servers = client.fetch_servers().await.unwrap();
    let ids: Vec<ServerId> = servers.iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![ServerId(1), ServerId(2), ServerId(3)]);

    let commands = client.fetch_commands().await.unwrap();
    assert_eq!(commands[0].name, "restart");
    backend.stop().await;
}

#[actix_web::test]
async fn players_on_one_server() {
    let backend = spawn_backend(ConsoleStore::seeded());
    let client = ApiClient::new(&backend.config);

    let players = client.fetch_players_on(ServerId(1)).await.unwrap();
    let ids: Vec<PlayerId> = players.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![PlayerId(1), PlayerId(2)]);
    backend.stop().await;
}

#[actix_web::test]
async fn send_message_posts_json() {
    let backend = spawn_backend(ConsoleStore::new());
    let client = ApiClient::new(&backend.config);
    let payload = MessagePayload {
        message: "gg".into(),
        servers: vec![],
        players: vec![PlayerId(7)],
    };

    client.send_message(&payload).await.unwrap();

    assert_eq!(backend.posts(), 1);
    assert_eq!(backend.store.dispatches(), vec![Dispatch::Message(payload)]);
    backend.stop().await;
}

#[actix_web::test]
async fn unknown_route_is_a_status_error() {
    let backend = spawn_backend(ConsoleStore::new());
    let client = ApiClient::new(&backend.config.clone().with_api_url(format!(
        "{}/missing",
        backend.config.api_base_url
    )));

    let err = client.fetch_servers().await.unwrap_err();
    assert_eq!(err, ApiError::Status(404));
    backend.stop().await;
}

#[actix_web::test]
async fn refused_connection_is_a_network_error() {
    let client = ApiClient::new(&Config::default().with_api_url("http://127.0.0.1:9"));
    let err = client.fetch_commands().await.unwrap_err();
    assert!(matches!(err, ApiError::Network(_)), "{:?}", err);
}
