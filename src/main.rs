use anyhow::Result;
use bw_core::repositories::UserRepo as _;
use clap::Parser;

mod cli;
mod config;
mod gateways;

use cli::{Cli, Command, CreateUserArgs};
use config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let cli = Cli::parse();
    let config = Config::try_load_from_file_or_default(cli.config.as_deref())?;
    let db = bw_db_jfs::Storage::try_new(&config.db.documents_dir)?;

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => {
            if db.count_users()? == 0 {
                log::warn!("No user accounts found. Create one with the create-user command.");
            }
            serve(config, db).await;
        }
        Command::CreateUser(args) => create_user(&db, args)?,
    }
    Ok(())
}

async fn serve(config: Config, db: bw_db_jfs::Storage) {
    let image_host = gateways::image_host_gateway(&config.image_hosting);
    let cfg = bw_webserver::Cfg {
        images_dir: config.webserver.images_dir,
    };
    bw_webserver::run(db, config.webserver.enable_cors, cfg, image_host).await;
}

fn create_user(db: &bw_db_jfs::Storage, args: CreateUserArgs) -> Result<()> {
    let CreateUserArgs {
        username,
        password,
        role,
        name,
    } = args;
    let name = name.unwrap_or_else(|| username.clone());
    bw_core::usecases::create_new_user(
        db,
        bw_core::usecases::NewUser {
            username: username.clone(),
            password,
            role,
            name,
        },
    )?;
    println!("Created user '{username}'");
    Ok(())
}
