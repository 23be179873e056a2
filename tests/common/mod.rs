//! Mock backend bound to an ephemeral port for driving the forms end to end.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use actix_web::dev::{Service, ServerHandle};
use actix_web::http::Method;
use actix_web::{web, App, HttpServer};

use muc::config::Config;
use muc::handlers;
use muc::models::{Command, CommandId, Player, PlayerId, Server, ServerId};
use muc::storage::memory::ConsoleStore;

pub struct TestBackend {
    pub store: web::Data<ConsoleStore>,
    pub config: Config,
    posts: Arc<AtomicUsize>,
    handle: ServerHandle,
}

impl TestBackend {
    /// POST requests that reached the backend.
    pub fn posts(&self) -> usize {
        self.posts.load(Ordering::SeqCst)
    }

    pub async fn stop(self) {
        self.handle.stop(false).await;
    }
}

pub fn spawn_backend(store: ConsoleStore) -> TestBackend {
    spawn_with(store, |_| {})
}

/// Routes registered by `overrides` win over the regular ones.
pub fn spawn_with(store: ConsoleStore, overrides: fn(&mut web::ServiceConfig)) -> TestBackend {
    let store = web::Data::new(store);
    let posts = Arc::new(AtomicUsize::new(0));

    let data = store.clone();
    let counter = posts.clone();
    let server = HttpServer::new(move || {
        let counter = counter.clone();
        App::new()
            .app_data(data.clone())
            .wrap_fn(move |req, srv| {
                if req.method() == Method::POST {
                    counter.fetch_add(1, Ordering::SeqCst);
                }
                srv.call(req)
            })
            .configure(overrides)
            .configure(handlers::configure)
    })
    .workers(1)
    .bind(("127.0.0.1", 0))
    .expect("Failed to bind test backend");

    let addr = server.addrs()[0];
    let server = server.run();
    let handle = server.handle();
    actix_web::rt::spawn(server);

    TestBackend {
        store,
        config: Config::default().with_api_url(format!("http://{}", addr)),
        posts,
        handle,
    }
}

pub fn server(id: u64, name: &str, ip: &str) -> Server {
    Server {
        id: ServerId(id),
        name: name.to_string(),
        ip: ip.to_string(),
        status: "online".to_string(),
    }
}

pub fn player(id: u64, name: &str, server_id: u64) -> Player {
    Player {
        id: PlayerId(id),
        name: name.to_string(),
        server_id: ServerId(server_id),
        status: "online".to_string(),
    }
}

pub fn command(id: u64, name: &str, description: &str) -> Command {
    Command {
        id: CommandId(id),
        name: name.to_string(),
        description: description.to_string(),
    }
}

/// EU-1 with Bob on it and a `kick` command.
pub fn eu_fleet() -> ConsoleStore {
    let store = ConsoleStore::new();
    store.add_server(server(1, "EU-1", "10.0.0.1"));
    store.add_player(player(9, "Bob", 1));
    store.add_command(command(5, "kick", "Kick a player"));
    store
}
