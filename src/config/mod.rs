use std::{
    env, fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use anyhow::{anyhow, Result};

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "berlin-wandel.toml";

const ENV_NAME_DOCUMENTS_DIR: &str = "BW_DOCUMENTS_DIR";

pub struct Config {
    pub db: Db,
    pub webserver: WebServer,
    pub image_hosting: ImageHosting,
}

impl Config {
    pub fn try_load_from_file_or_default<P: AsRef<Path>>(file_path: Option<P>) -> Result<Self> {
        let file_path: &Path = file_path.as_ref().map(|p| p.as_ref()).unwrap_or_else(|| {
            log::info!("No configuration file specified. load {DEFAULT_CONFIG_FILE_NAME}");
            Path::new(DEFAULT_CONFIG_FILE_NAME)
        });

        let raw_config = match fs::read_to_string(file_path) {
            Ok(cfg_string) => toml::from_str(&cfg_string)?,
            Err(err) => match err.kind() {
                ErrorKind::NotFound => {
                    log::info!(
                        "{DEFAULT_CONFIG_FILE_NAME} not found => load default configuration."
                    );
                    Ok(raw::Config::default())
                }
                _ => Err(err),
            }?,
        };
        let mut cfg = Self::try_from(raw_config)?;
        if let Ok(documents_dir) = env::var(ENV_NAME_DOCUMENTS_DIR) {
            cfg.db.documents_dir = documents_dir.into();
        }
        Ok(cfg)
    }
}

pub struct Db {
    /// Directory of the JSON document store.
    pub documents_dir: PathBuf,
}

pub struct WebServer {
    pub enable_cors: bool,
    /// Directory with legacy image files, served under `/images`.
    pub images_dir: Option<PathBuf>,
}

pub struct ImageHosting {
    pub gateway: Option<ImageHostingGateway>,
}

pub enum ImageHostingGateway {
    Cloudinary {
        cloud_name: String,
        upload_preset: String,
    },
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;
    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Config {
            db,
            webserver,
            image_hosting,
            gateway,
        } = from;

        let raw::Db { documents_dir } = db.unwrap_or_default();
        let db = Db { documents_dir };

        let raw::WebServer { cors, images_dir } = webserver.unwrap_or_default();
        let webserver = WebServer {
            enable_cors: cors,
            images_dir,
        };

        let image_gateway = match image_hosting.and_then(|i| i.gateway) {
            Some(gw_name) => {
                let gw = match gw_name {
                    raw::ImageHostingGateway::Cloudinary => {
                        let raw::Cloudinary {
                            cloud_name,
                            upload_preset,
                        } = gateway.and_then(|g| g.cloudinary).ok_or_else(|| {
                            anyhow!("Missing 'cloudinary' gateway configuration")
                        })?;
                        ImageHostingGateway::Cloudinary {
                            cloud_name,
                            upload_preset,
                        }
                    }
                };
                Some(gw)
            }
            None => None,
        };
        let image_hosting = ImageHosting {
            gateway: image_gateway,
        };

        Ok(Self {
            db,
            webserver,
            image_hosting,
        })
    }
}
