// src/storage/memory.rs
use std::collections::VecDeque;

use dashmap::DashMap;
use parking_lot::Mutex;

use crate::models::{
    Command, CommandId, CommandPayload, MessagePayload, Player, PlayerId, Server, ServerId,
};

/// Something the backend was asked to push out to the fleet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatch {
    Message(MessagePayload),
    Command(CommandPayload),
}

/// Dispatches kept by the log; older ones are dropped first.
pub const MAX_DISPATCHES: usize = 1000;

#[derive(Default)]
pub struct ConsoleStore {
    servers: DashMap<ServerId, Server>,
    players: DashMap<PlayerId, Player>,
    commands: DashMap<CommandId, Command>,
    dispatches: Mutex<VecDeque<Dispatch>>,
}

impl ConsoleStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-filled with a small demo fleet.
    pub fn seeded() -> Self {
        let store = Self::new();

        for (id, name, ip, status) in [
            (1, "Server 1", "192.168.1.10", "online"),
            (2, "Server 2", "192.168.1.11", "online"),
            (3, "Server 3", "192.168.1.12", "offline"),
        ] {
            store.add_server(Server {
                id: ServerId(id),
                name: name.to_string(),
                ip: ip.to_string(),
                status: status.to_string(),
            });
        }

        for (id, name, server_id, status) in [
            (1, "Player1", 1, "online"),
            (2, "Player2", 1, "online"),
            (3, "Player3", 2, "online"),
            (4, "Player4", 2, "offline"),
        ] {
            store.add_player(Player {
                id: PlayerId(id),
                name: name.to_string(),
                server_id: ServerId(server_id),
                status: status.to_string(),
            });
        }

        for (id, name, description) in [
            (1, "restart", "Restart server"),
            (2, "stop", "Stop server"),
            (3, "status", "Check server status"),
            (4, "backup", "Create server backup"),
        ] {
            store.add_command(Command {
                id: CommandId(id),
                name: name.to_string(),
                description: description.to_string(),
            });
        }

        store
    }

    pub fn add_server(&self, server: Server) {
        self.servers.insert(server.id, server);
    }

    pub fn add_player(&self, player: Player) {
        self.players.insert(player.id, player);
    }

    pub fn add_command(&self, command: Command) {
        self.commands.insert(command.id, command);
    }

    pub fn remove_player(&self, id: PlayerId) -> Option<Player> {
        self.players.remove(&id).map(|(_, player)| player)
    }

    pub fn get_servers(&self) -> Vec<Server> {
        let mut servers: Vec<Server> = self.servers.iter().map(|r| r.value().clone()).collect();
        servers.sort_by_key(|server| server.id);
        servers
    }

    pub fn get_players(&self) -> Vec<Player> {
        let mut players: Vec<Player> = self.players.iter().map(|r| r.value().clone()).collect();
        players.sort_by_key(|player| player.id);
        players
    }

    pub fn players_on(&self, server: ServerId) -> Vec<Player> {
        let mut players: Vec<Player> = self
            .players
            .iter()
            .filter(|r| r.value().server_id == server)
            .map(|r| r.value().clone())
            .collect();
        players.sort_by_key(|player| player.id);
        players
    }

    pub fn get_commands(&self) -> Vec<Command> {
        let mut commands: Vec<Command> = self.commands.iter().map(|r| r.value().clone()).collect();
        commands.sort_by_key(|command| command.id);
        commands
    }

    pub fn record(&self, dispatch: Dispatch) {
        let mut dispatches = self.dispatches.lock();
        if dispatches.len() == MAX_DISPATCHES {
            dispatches.pop_front();
        }
        dispatches.push_back(dispatch);
    }

    /// Most recent dispatches, oldest first.
    pub fn dispatches(&self) -> Vec<Dispatch> {
        self.dispatches.lock().iter().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_fleet_is_listed_in_id_order() {
        let store = ConsoleStore::seeded();
        let names: Vec<String> = store.get_servers().into_iter().map(|s| s.name).collect();
        assert_eq!(names, ["Server 1", "Server 2", "Server 3"]);
        assert_eq!(store.get_players().len(), 4);
        assert_eq!(store.get_commands()[3].name, "backup");
    }

    #[test]
    fn players_on_filters_by_server() {
        let store = ConsoleStore::seeded();
        let ids: Vec<PlayerId> = store.players_on(ServerId(2)).into_iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![PlayerId(3), PlayerId(4)]);
        assert!(store.players_on(ServerId(404)).is_empty());
    }

    #[test]
    fn dispatches_are_kept_in_order() {
        let store = ConsoleStore::new();
        let message = MessagePayload {
            message: "hi".into(),
            servers: vec![ServerId(1)],
            players: vec![],
        };
        let command = CommandPayload {
            command: "2".into(),
            args: String::new(),
            servers: vec![],
            players: vec![PlayerId(3)],
        };
        store.record(Dispatch::Message(message.clone()));
        store.record(Dispatch::Command(command.clone()));
        assert_eq!(
            store.dispatches(),
            vec![Dispatch::Message(message), Dispatch::Command(command)]
        );
    }

    #[test]
    fn dispatch_log_keeps_the_newest() {
        let store = ConsoleStore::new();
        for n in 0..MAX_DISPATCHES + 5 {
            store.record(Dispatch::Command(CommandPayload {
                command: n.to_string(),
                args: String::new(),
                servers: vec![ServerId(1)],
                players: vec![],
            }));
        }

        let log = store.dispatches();
        assert_eq!(log.len(), MAX_DISPATCHES);
        let commands: Vec<&str> = log
            .iter()
            .map(|d| match d {
                Dispatch::Command(payload) => payload.command.as_str(),
                Dispatch::Message(_) => unreachable!(),
            })
            .collect();
        assert_eq!(commands[0], "5");
        assert_eq!(*commands.last().unwrap(), (MAX_DISPATCHES + 4).to_string());
    }

    #[test]
    fn removed_players_leave_the_listing() {
        let store = ConsoleStore::seeded();
        assert_eq!(store.remove_player(PlayerId(1)).map(|p| p.name), Some("Player1".into()));
        assert!(store.remove_player(PlayerId(1)).is_none());
        assert_eq!(store.get_players().len(), 3);
    }
}
