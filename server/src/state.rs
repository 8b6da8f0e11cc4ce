use std::sync::{Arc, Mutex, MutexGuard};

use bank::{Store, StoreError};

use super::{config::Config, database::init_store, error::StartupError};

pub struct AppState {
    pub config: Config,
    store: Mutex<Store>,
}

impl AppState {
    pub fn new(config: Config) -> Result<Arc<Self>, StartupError> {
        let store = init_store(&config.database_path)?;

        Ok(Self::with_store(config, store))
    }

    pub fn with_store(config: Config, store: Store) -> Arc<Self> {
        Arc::new(Self {
            config,
            store: Mutex::new(store),
        })
    }

    pub fn store(&self) -> Result<MutexGuard<'_, Store>, StoreError> {
        self.store.lock().map_err(|_| StoreError::Poisoned)
    }
}
