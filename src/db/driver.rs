use anyhow::Result;
use bincode::{
    config::{BigEndian, WithOtherEndian},
    DefaultOptions, Options,
};
use serde::{de::DeserializeOwned, Serialize};
use sled::Db as Sled;

/// Typed wrapper over a sled tree: string keys, bincode-encoded values.
/// Big-endian encoding so serialized integers sort the same as their values.
#[derive(Clone)]
pub struct Db {
    handle: Sled,
    codec: WithOtherEndian<DefaultOptions, BigEndian>,
}
impl Db {
    pub fn open(path: &str) -> Result<Self> {
        let handle = sled::open(path)?;
        let codec = bincode::options().with_big_endian();
        Ok(Self { handle, codec })
    }

    /// Monotonic id from sled's internal counter, starting at 0.
    pub fn generate_id(&self) -> Result<u64> {
        Ok(self.handle.generate_id()?)
    }

    pub fn put<T: Serialize, K: AsRef<str>>(&self, key: K, value: &T) -> Result<()> {
        let bytes = self.codec.serialize(value)?;
        self.handle.insert(key.as_ref(), bytes)?;
        Ok(())
    }

    pub fn get<T: DeserializeOwned, K: AsRef<str>>(&self, key: K) -> Result<Option<T>> {
        match self.handle.get(key.as_ref())? {
            Some(bytes) => Ok(Some(self.codec.deserialize(&bytes)?)),
            None => Ok(None),
        }
    }

    /// Removing an absent key is not an error.
    pub fn remove<K: AsRef<str>>(&self, key: K) -> Result<()> {
        self.handle.remove(key.as_ref())?;
        Ok(())
    }

    /// All values whose key starts with `prefix`, in lexicographic key order.
    pub fn scan_prefix<'a, T: DeserializeOwned + 'a>(
        &'a self,
        prefix: &str,
    ) -> impl Iterator<Item = Result<(String, T)>> + 'a {
        self.handle.scan_prefix(prefix).map(move |item| {
            let (key, bytes) = item?;
            let key = String::from_utf8(key.to_vec())?;
            let value = self.codec.deserialize(&bytes)?;
            Ok((key, value))
        })
    }
}

impl std::fmt::Debug for Db {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Db").finish()
    }
}
