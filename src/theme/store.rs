//! Preference storage backends.

use std::cell::RefCell;

/// Key-value slot holding the raw theme token.
pub trait PreferenceStore {
    fn read(&self) -> Option<String>;
    fn write(&self, value: &str);
}

/// In-memory store for native tests and pages without storage access.
#[derive(Debug, Default)]
pub struct MemoryStore {
    value: RefCell<Option<String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new(initial: Option<&str>) -> Self {
        Self { value: RefCell::new(initial.map(str::to_owned)) }
    }

    /// Last value written (or the initial one).
    #[must_use]
    pub fn value(&self) -> Option<String> {
        self.value.borrow().clone()
    }
}

impl PreferenceStore for MemoryStore {
    fn read(&self) -> Option<String> {
        self.value()
    }

    fn write(&self, value: &str) {
        *self.value.borrow_mut() = Some(value.to_owned());
    }
}

#[cfg(test)]
impl<S: PreferenceStore + ?Sized> PreferenceStore for std::rc::Rc<S> {
    fn read(&self) -> Option<String> {
        (**self).read()
    }

    fn write(&self, value: &str) {
        (**self).write(value);
    }
}

/// `window.localStorage` under a single key.
#[cfg(feature = "browser")]
pub struct LocalStorageStore {
    key: String,
}

#[cfg(feature = "browser")]
impl LocalStorageStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    fn storage() -> Option<web_sys::Storage> {
        match web_sys::window()?.local_storage() {
            Ok(storage) => storage,
            Err(err) => {
                log::debug!("localStorage unavailable: {}", crate::error::SiteError::from(err));
                None
            }
        }
    }
}

#[cfg(feature = "browser")]
impl PreferenceStore for LocalStorageStore {
    fn read(&self) -> Option<String> {
        match Self::storage()?.get_item(&self.key) {
            Ok(value) => value,
            Err(err) => {
                log::debug!("read {}: {}", self.key, crate::error::SiteError::from(err));
                None
            }
        }
    }

    fn write(&self, value: &str) {
        use crate::error::Absorb;

        if let Some(storage) = Self::storage() {
            storage.set_item(&self.key, value).absorb("persist theme preference");
        }
    }
}
