/// String key-value storage with the semantics of a browser's
/// local storage: missing keys read as `None`, removal of a missing
/// key is not an error.
pub trait KeyValueStorage {
    fn get(&self, key: &str) -> anyhow::Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> anyhow::Result<()>;
    fn remove(&self, key: &str) -> anyhow::Result<()>;
}
