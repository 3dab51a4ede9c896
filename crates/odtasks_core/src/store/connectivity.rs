//! Online/offline signal fed by the host environment.

use log::info;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Shared reachability flag.
///
/// The host keeps one clone and calls `set_online` from its connectivity
/// listener; the store keeps another and only reads it.
#[derive(Debug, Clone)]
pub struct Connectivity {
    online: Arc<AtomicBool>,
}

impl Connectivity {
    pub fn new(online: bool) -> Self {
        Self {
            online: Arc::new(AtomicBool::new(online)),
        }
    }

    pub fn is_online(&self) -> bool {
        self.online.load(Ordering::Acquire)
    }

    /// Records a reachability change. Returns whether the value flipped.
    pub fn set_online(&self, online: bool) -> bool {
        let previous = self.online.swap(online, Ordering::AcqRel);
        if previous != online {
            info!("event=connectivity_change module=store status=ok online={online}");
        }
        previous != online
    }
}

impl Default for Connectivity {
    fn default() -> Self {
        Self::new(true)
    }
}
