//! Background service check boundary.

use log::debug;
use std::sync::Arc;

/// Collaborator poked after every settings mutation so the platform can
/// start or stop the doze background service.
pub trait ServiceCheck: Send + Sync {
    /// Re-evaluate whether the background service should be running.
    fn recheck(&self);
}

impl<T: ServiceCheck + ?Sized> ServiceCheck for Arc<T> {
    fn recheck(&self) {
        (**self).recheck()
    }
}

/// A [`ServiceCheck`] that only logs the request.
///
/// Useful in demos and hosts where the platform side is wired elsewhere.
#[derive(Debug, Default)]
pub struct LoggingServiceCheck;

impl ServiceCheck for LoggingServiceCheck {
    fn recheck(&self) {
        debug!("doze service recheck requested");
    }
}
