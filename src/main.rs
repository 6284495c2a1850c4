use clap::Parser;
use env_logger::Env;
use plexdb::cli::{CliArgs, Command, SecretCommand, ServerCommand, TokenCommand};
use plexdb::{PlexServer, Store};

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let mut store = Store::open(&args.store_config())?;

    match args.command {
        Command::Secret(SecretCommand::Get) => {
            let secret = store.get_secret()?;
            println!("{}", String::from_utf8_lossy(&secret));
        }

        Command::Secret(SecretCommand::Set { value }) => {
            store.save_secret(value.as_bytes())?;
            println!("Saved app secret");
        }

        Command::Token(TokenCommand::Get) => {
            println!("{}", store.get_plex_token()?);
        }

        Command::Token(TokenCommand::Set { token }) => {
            store.save_plex_token(&token)?;
            println!("Saved plex token");
        }

        Command::Token(TokenCommand::Clear) => {
            if store.clear_plex_token()? {
                println!("Cleared plex token");
            } else {
                println!("No plex token saved");
            }
        }

        Command::Server(ServerCommand::Get) => {
            let server = store.get_plex_server()?;
            println!("{} {}", server.name, server.url());
        }

        Command::Server(ServerCommand::Set(server)) => {
            let server = PlexServer::from(server);
            store.save_plex_server(&server)?;
            println!("Saved plex server '{}'", server.name);
        }

        Command::Server(ServerCommand::Clear) => {
            if store.clear_plex_server()? {
                println!("Cleared plex server");
            } else {
                println!("No plex server saved");
            }
        }
    }

    store.close();
    Ok(())
}
