use std::{io, path::Path, sync::Arc};

use jfs::Store;
use parking_lot::RwLock;

mod models;
mod repo_impl;

/// Document store with one JSON file per record and one directory per
/// collection.
#[derive(Clone)]
pub struct Storage {
    locations: Store,
    users: Store,
    // jfs knows no transactions. The lock serializes writers so that
    // check-then-write sequences stay consistent across handlers.
    lock: Arc<RwLock<()>>,
}

impl Storage {
    pub fn try_new<P: AsRef<Path>>(documents_dir: P) -> io::Result<Self> {
        let documents_dir = documents_dir.as_ref();
        let locations = Store::new(documents_dir.join("locations"))?;
        let users = Store::new(documents_dir.join("users"))?;
        log::info!("Opened document store at {}", documents_dir.display());
        Ok(Self {
            locations,
            users,
            lock: Arc::new(RwLock::new(())),
        })
    }
}
