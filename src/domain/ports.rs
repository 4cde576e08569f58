use crate::utils::error::Result;

/// Persistence port for the snapshot documents. Backends hand out whole
/// documents by name; `Ok(None)` on read means the document does not
/// exist yet, which callers treat as an empty collection.
pub trait Storage: Send + Sync {
    fn read(&self, name: &str) -> Result<Option<Vec<u8>>>;
    fn write(&self, name: &str, data: &[u8]) -> Result<()>;
}

pub trait ConfigProvider: Send + Sync {
    fn data_dir(&self) -> &str;
    fn verbose(&self) -> bool;
}
