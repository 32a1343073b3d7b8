use std::{io, path::Path};

use jfs::Store;

use bw_core::gateways::storage::KeyValueStorage;

/// Key-value storage of strings on a `jfs` store, one JSON document
/// per key.
#[derive(Clone)]
pub struct JsonFileStorage {
    store: Store,
}

impl JsonFileStorage {
    pub fn try_new<P: AsRef<Path>>(directory: P) -> io::Result<Self> {
        let store = Store::new(directory)?;
        Ok(Self { store })
    }

    pub fn path(&self) -> &Path {
        self.store.path()
    }
}

impl KeyValueStorage for JsonFileStorage {
    fn get(&self, key: &str) -> anyhow::Result<Option<String>> {
        match self.store.get::<String>(key) {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> anyhow::Result<()> {
        self.store.save_with_id(&value.to_owned(), key)?;
        Ok(())
    }

    fn remove(&self, key: &str) -> anyhow::Result<()> {
        match self.store.delete(key) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}
