use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use bw_entities::user::Role;

#[derive(Parser)]
#[command(name = "berlin-wandel", version, about = "Berlin Wandel location reporting backend")]
pub struct Cli {
    /// Configuration file, `berlin-wandel.toml` by default.
    #[arg(long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the web server (the default).
    Serve,
    /// Provision a user record.
    ///
    /// There is no registration endpoint; accounts are created
    /// out-of-band with this command.
    CreateUser(CreateUserArgs),
}

#[derive(Args)]
pub struct CreateUserArgs {
    #[arg(long)]
    pub username: String,

    #[arg(long)]
    pub password: String,

    /// `admin` or `non-admin`.
    #[arg(long, default_value = "non-admin")]
    pub role: Role,

    /// Display name, defaults to the username.
    #[arg(long)]
    pub name: Option<String>,
}
