// ============================================================================
// SESSION STORE - Bearer token persistido (localStorage)
// ============================================================================
// Única puerta de acceso al token: se inyecta en el ViewModel, nadie más lee
// localStorage directamente.
// ============================================================================

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::config::CONFIG;
use crate::utils::{load_raw, remove_from_storage, save_raw};

/// Backend clave/valor donde vive el token
pub trait TokenStorage {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&self, key: &str, value: &str) -> Result<(), String>;
    fn remove(&self, key: &str) -> Result<(), String>;
}

/// localStorage del navegador
pub struct LocalStorageBackend;

impl TokenStorage for LocalStorageBackend {
    fn read(&self, key: &str) -> Option<String> {
        load_raw(key)
    }

    fn write(&self, key: &str, value: &str) -> Result<(), String> {
        save_raw(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), String> {
        remove_from_storage(key)
    }
}

/// Backend en memoria (tests y entornos sin localStorage)
#[derive(Default)]
pub struct MemoryStorage {
    items: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_item(key: &str, value: &str) -> Self {
        let storage = Self::new();
        storage
            .items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        storage
    }
}

impl TokenStorage for MemoryStorage {
    fn read(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn write(&self, key: &str, value: &str) -> Result<(), String> {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), String> {
        self.items.borrow_mut().remove(key);
        Ok(())
    }
}

/// Store del token de sesión
#[derive(Clone)]
pub struct SessionStore {
    backend: Rc<dyn TokenStorage>,
    key: String,
}

impl SessionStore {
    pub fn new(backend: Rc<dyn TokenStorage>, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
        }
    }

    /// Store sobre localStorage con la clave configurada
    pub fn browser() -> Self {
        Self::new(Rc::new(LocalStorageBackend), CONFIG.token_storage_key.clone())
    }

    /// Token actual. Un valor vacío cuenta como ausente.
    pub fn get(&self) -> Option<String> {
        self.backend.read(&self.key).filter(|token| !token.is_empty())
    }

    pub fn set(&self, token: &str) {
        if let Err(e) = self.backend.write(&self.key, token) {
            log::warn!("⚠️ [STORE] No se pudo guardar el token: {}", e);
        }
    }

    pub fn clear(&self) {
        if let Err(e) = self.backend.remove(&self.key) {
            log::warn!("⚠️ [STORE] No se pudo eliminar el token: {}", e);
        }
    }
}
