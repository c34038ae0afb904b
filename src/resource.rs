//! A named resource that is released exactly once, either explicitly through
//! [`ScopedResource::release`] or when the handle goes out of scope.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::info;

/// Shared record of release events, in the order they happened.
#[derive(Debug, Clone, Default)]
pub struct ReleaseLog(Rc<RefCell<Vec<String>>>);

impl ReleaseLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<String> {
        self.0.borrow().clone()
    }

    fn record(&self, name: &str) {
        self.0.borrow_mut().push(name.to_string());
    }
}

#[derive(Debug)]
pub struct ScopedResource {
    name: String,
    released: bool,
    log: Option<ReleaseLog>,
}

impl ScopedResource {
    pub fn acquire(name: impl Into<String>) -> Self {
        let name = name.into();
        info!(resource = %name, "acquired");
        Self {
            name,
            released: false,
            log: None,
        }
    }

    /// Same as [`ScopedResource::acquire`], recording the release in `log`.
    pub fn with_log(name: impl Into<String>, log: ReleaseLog) -> Self {
        let mut resource = Self::acquire(name);
        resource.log = Some(log);
        resource
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn do_work(&self) {
        info!(resource = %self.name, "working");
    }

    /// Releases the resource now. The handle is consumed, so it cannot be used afterwards.
    pub fn release(mut self) {
        self.release_once();
    }

    fn release_once(&mut self) {
        if self.released {
            return;
        }
        self.released = true;
        info!(resource = %self.name, "released");
        if let Some(log) = &self.log {
            log.record(&self.name);
        }
    }
}

impl Drop for ScopedResource {
    fn drop(&mut self) {
        self.release_once();
    }
}
