use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use racerx::{
    cli,
    client::ApiClient,
    config, error,
    types::{Credentials, Registration},
};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  author=env!("CARGO_PKG_AUTHORS"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    /// Base URL of the API, absolute or relative to RACERX_ORIGIN
    #[clap(long, global = true)]
    api_url: Option<String>,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Register a new user
    Register(RegisterOptions),

    /// Log in and store the access token
    Login(LoginOptions),

    /// List users (authenticated)
    Users(UsersOptions),

    /// Forget the stored access token
    Logout,

    /// Check backend health
    Health,

    /// Handle tracks
    Tracks(TracksOptions),

    /// Handle links attached to a track
    Links(LinksOptions),

    /// Run the in-memory development backend
    Serve(ServeOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct RegisterOptions {
    #[clap(long, default_value = "testuser")]
    pub username: String,
    #[clap(long, default_value = "test@example.com")]
    pub email: String,
    #[clap(long, default_value = "SecurePass123")]
    pub password: String,
}

#[derive(Parser, Debug, Clone)]
pub struct LoginOptions {
    #[clap(long, default_value = "test@example.com")]
    pub email: String,
    #[clap(long, default_value = "SecurePass123")]
    pub password: String,
}

#[derive(Parser, Debug, Clone)]
pub struct UsersOptions {
    /// Use this token instead of the stored one
    #[clap(long)]
    pub token: Option<String>,
}

#[derive(Parser, Debug, Clone)]
#[command(about = "Handle tracks")]
pub struct TracksOptions {
    /// Subcommands under `tracks`; without one, health and all tracks are shown
    #[command(subcommand)]
    pub command: Option<TracksSubcommand>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum TracksSubcommand {
    /// Show a single track
    Get { id: u64 },

    /// Create a track
    Create {
        #[clap(long)]
        name: String,
        #[clap(long)]
        location: Option<String>,
    },

    /// Change the given fields of a track
    Update {
        id: u64,
        #[clap(long)]
        name: Option<String>,
        #[clap(long)]
        location: Option<String>,
    },

    /// Delete a track
    Delete { id: u64 },

    /// Search tracks by name and/or location
    Search {
        #[clap(long)]
        name: Option<String>,
        #[clap(long)]
        location: Option<String>,
    },
}

#[derive(Parser, Debug, Clone)]
pub struct LinksOptions {
    #[command(subcommand)]
    pub command: LinksSubcommand,
}

#[derive(Subcommand, Debug, Clone)]
pub enum LinksSubcommand {
    /// List the links of a track
    List { track_id: u64 },

    /// Attach a link to a track
    Add {
        track_id: u64,
        #[clap(long = "type")]
        link_type: String,
        #[clap(long = "url")]
        link_url: String,
    },

    /// Change a link
    Update {
        track_id: u64,
        link_id: u64,
        #[clap(long = "type")]
        link_type: Option<String>,
        #[clap(long = "url")]
        link_url: Option<String>,
    },

    /// Remove a link
    Delete { track_id: u64, link_id: u64 },
}

#[derive(Parser, Debug, Clone)]
pub struct ServeOptions {
    /// Address to bind, defaults to SERVER_ADDRESS or 127.0.0.1:5555
    #[clap(long)]
    addr: Option<String>,

    /// Start with the demo users, tracks and links instead of an empty store
    #[clap(long)]
    seed: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        error!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();

    let base_url = match cli.api_url {
        Some(url) => config::resolve_api_url(Some(&url), &config::origin()),
        None => config::api_url(),
    };
    let client = match ApiClient::new(base_url) {
        Ok(client) => client,
        Err(e) => error!("Cannot build HTTP client. Err: {}", e),
    };

    match cli.command {
        Command::Register(opt) => {
            cli::register(
                &client,
                Registration {
                    username: opt.username,
                    email: opt.email,
                    password: opt.password,
                },
            )
            .await
        }
        Command::Login(opt) => {
            cli::login(
                &client,
                Credentials {
                    email: opt.email,
                    password: opt.password,
                },
            )
            .await
        }
        Command::Users(opt) => cli::users(&client, opt.token).await,
        Command::Logout => cli::logout().await,
        Command::Health => cli::tracks::health(&client).await,

        Command::Tracks(opt) => match opt.command {
            None => cli::tracks::overview(&client).await,
            Some(TracksSubcommand::Get { id }) => cli::tracks::get(&client, id).await,
            Some(TracksSubcommand::Create { name, location }) => {
                cli::tracks::create(&client, name, location).await
            }
            Some(TracksSubcommand::Update { id, name, location }) => {
                cli::tracks::update(&client, id, name, location).await
            }
            Some(TracksSubcommand::Delete { id }) => cli::tracks::delete(&client, id).await,
            Some(TracksSubcommand::Search { name, location }) => {
                cli::tracks::search(&client, name, location).await
            }
        },

        Command::Links(opt) => match opt.command {
            LinksSubcommand::List { track_id } => cli::links::list(&client, track_id).await,
            LinksSubcommand::Add {
                track_id,
                link_type,
                link_url,
            } => cli::links::add(&client, track_id, link_type, link_url).await,
            LinksSubcommand::Update {
                track_id,
                link_id,
                link_type,
                link_url,
            } => cli::links::update(&client, track_id, link_id, link_type, link_url).await,
            LinksSubcommand::Delete { track_id, link_id } => {
                cli::links::delete(&client, track_id, link_id).await
            }
        },

        Command::Serve(opt) => {
            cli::serve(opt.addr.unwrap_or_else(config::server_addr), opt.seed).await
        }
        Command::Completions(opt) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
