// src/api/mod.rs
mod error;

pub use error::ApiError;

use log::{debug, error};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::Config;
use crate::models::{Command, CommandPayload, MessagePayload, Player, Server, ServerId};

pub const SERVERS_PATH: &str = "/api/servers";
pub const PLAYERS_PATH: &str = "/api/players";
pub const COMMANDS_PATH: &str = "/api/commands";
pub const SEND_MESSAGE_PATH: &str = "/api/send-message";
pub const EXECUTE_COMMAND_PATH: &str = "/api/execute-command";

/// Thin JSON client for the console backend. Cheap to clone.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.api_base_url.clone(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn fetch_servers(&self) -> Result<Vec<Server>, ApiError> {
        self.get_list(SERVERS_PATH).await
    }

    pub async fn fetch_players(&self) -> Result<Vec<Player>, ApiError> {
        self.get_list(PLAYERS_PATH).await
    }

    pub async fn fetch_players_on(&self, server: ServerId) -> Result<Vec<Player>, ApiError> {
        self.get_list(&format!("{}/{}", PLAYERS_PATH, server)).await
    }

    pub async fn fetch_commands(&self) -> Result<Vec<Command>, ApiError> {
        self.get_list(COMMANDS_PATH).await
    }

    pub async fn send_message(&self, payload: &MessagePayload) -> Result<(), ApiError> {
        self.post_json(SEND_MESSAGE_PATH, payload).await
    }

    pub async fn execute_command(&self, payload: &CommandPayload) -> Result<(), ApiError> {
        self.post_json(EXECUTE_COMMAND_PATH, payload).await
    }

    async fn get_list<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>, ApiError> {
        let url = self.url(path);
        debug!("GET {}", url);

        let response = self.http.get(&url).send().await.map_err(|e| {
            error!("GET {} failed: {}", url, e);
            ApiError::from(e)
        })?;

        if !response.status().is_success() {
            error!("GET {} returned {}", url, response.status());
            return Err(ApiError::Status(response.status().as_u16()));
        }

        Ok(response.json::<Vec<T>>().await?)
    }

    /// Posts `payload` as JSON. Only the status decides the outcome; the
    /// response body is never read.
    pub async fn post_json<P: Serialize + ?Sized>(
        &self,
        path: &str,
        payload: &P,
    ) -> Result<(), ApiError> {
        let url = self.url(path);
        debug!("POST {}", url);

        // .json() sets Content-Type: application/json
        let response = self.http.post(&url).json(payload).send().await.map_err(|e| {
            error!("POST {} failed: {}", url, e);
            ApiError::from(e)
        })?;

        let status = response.status();
        if !status.is_success() {
            error!("POST {} returned {}", url, status);
            return Err(ApiError::Status(status.as_u16()));
        }
        Ok(())
    }
}
