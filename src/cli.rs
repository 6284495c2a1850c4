use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::config::{DEFAULT_DATA_DIR, StoreConfig};
use crate::server::{DEFAULT_PORT, DEFAULT_SCHEME, PlexServer};

#[derive(Parser)]
#[command(name = "plexdb")]
#[command(about = "Local credential store for a Plex command-line client", long_about = None)]
pub struct CliArgs {
    #[arg(short, long, default_value = DEFAULT_DATA_DIR)]
    pub data_dir: PathBuf,

    /// Log what the store is doing
    #[arg(short, long)]
    pub verbose: bool,

    /// Compact the database when closing it
    #[arg(long)]
    pub compact: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl CliArgs {
    pub fn store_config(&self) -> StoreConfig {
        StoreConfig::new(&self.data_dir)
            .verbose(self.verbose)
            .compact_on_close(self.compact)
    }
}

#[derive(Subcommand)]
pub enum Command {
    /// Application secret
    #[command(subcommand)]
    Secret(SecretCommand),

    /// Plex authentication token
    #[command(subcommand)]
    Token(TokenCommand),

    /// Selected Plex server
    #[command(subcommand)]
    Server(ServerCommand),
}

#[derive(Subcommand)]
pub enum SecretCommand {
    Get,
    Set { value: String },
}

#[derive(Subcommand)]
pub enum TokenCommand {
    Get,
    Set { token: String },
    Clear,
}

#[derive(Subcommand)]
pub enum ServerCommand {
    Get,
    Set(ServerArgs),
    Clear,
}

#[derive(Args)]
pub struct ServerArgs {
    #[arg(long)]
    pub name: String,

    #[arg(long)]
    pub address: String,

    #[arg(long, default_value = DEFAULT_SCHEME)]
    pub scheme: String,

    #[arg(long, default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Server access token
    #[arg(long)]
    pub token: Option<String>,
}

impl From<ServerArgs> for PlexServer {
    fn from(args: ServerArgs) -> Self {
        PlexServer {
            name: args.name,
            scheme: args.scheme,
            address: args.address,
            port: args.port,
            token: args.token,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        CliArgs::command().debug_assert();
    }

    #[test]
    fn server_set_uses_defaults() {
        let args = CliArgs::parse_from([
            "plexdb", "server", "set", "--name", "nas", "--address", "10.0.0.2",
        ]);
        assert_eq!(args.data_dir, PathBuf::from(DEFAULT_DATA_DIR));

        let Command::Server(ServerCommand::Set(server)) = args.command else {
            panic!("expected server set");
        };
        let server = PlexServer::from(server);
        assert_eq!(server.url(), "http://10.0.0.2:32400");
        assert_eq!(server.token, None);
    }

    #[test]
    fn flags_flow_into_store_config() {
        let args = CliArgs::parse_from(["plexdb", "-v", "--compact", "-d", "/tmp/plex", "token", "get"]);
        let config = args.store_config();

        assert!(config.verbose);
        assert!(config.compact_on_close);
        assert_eq!(config.data_dir, PathBuf::from("/tmp/plex"));
    }
}
