use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::cli::{login, logout, movies, register, status};

/// Mvcat command
#[derive(Parser, Debug)]
#[command(version, propagate_version = true, subcommand_required = true)]
pub struct MvcatCommand {
    /// Client options
    #[command(flatten)]
    pub client: ClientOptions,
    /// Subcommand
    #[command(subcommand)]
    pub command: Command,
}

/// Client options
#[derive(Args, Debug)]
pub struct ClientOptions {
    /// Remote catalog service base url
    #[arg(long, env = "MVCAT_BASE_URL", global = true)]
    pub base_url: Option<String>,
    /// Persisted token file path
    #[arg(long, env = "MVCAT_TOKEN_PATH", global = true)]
    pub token_path: Option<PathBuf>,
    /// Configuration file path
    #[arg(long, short = 'C', env = "MVCAT_CONFIG_PATH", global = true)]
    pub config: Option<PathBuf>,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show session and navigation state
    Status(status::StatusCommand),
    /// Register a new account
    Register(register::RegisterCommand),
    /// Log in and persist the session token
    Login(login::LoginCommand),
    /// Log out and clear the session
    Logout(logout::LogoutCommand),
    /// Movie catalog operations
    #[command(subcommand)]
    Movies(movies::MoviesCommand),
}

/// Parse command line args
pub fn parse() -> MvcatCommand {
    MvcatCommand::parse()
}
