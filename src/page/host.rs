use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::RwLock;
use tracing::info;

/// What the recorder needs from the page it is bound to
///
/// A browser page reads the token from `<meta name="csrf-token">` and reloads
/// through `location.reload()`; other hosts supply their own equivalents.
pub trait HostPage: Send + Sync {
    /// Current authenticity token, read at the moment of the call
    fn csrf_token(&self) -> Option<String>;

    /// Resynchronise with the server after an acknowledged submission
    fn reload(&self);
}

/// Host page backed by a fixed token that logs reload requests
///
/// Used by the command-line driver, where there is no document to refresh.
pub struct ConsolePage {
    csrf_token: RwLock<Option<String>>,
    reloads: AtomicUsize,
}

impl ConsolePage {
    pub fn new(csrf_token: Option<String>) -> Self {
        Self {
            csrf_token: RwLock::new(csrf_token),
            reloads: AtomicUsize::new(0),
        }
    }

    /// Replace the token, as a server re-render would
    pub fn set_csrf_token(&self, token: Option<String>) {
        if let Ok(mut guard) = self.csrf_token.write() {
            *guard = token;
        }
    }

    pub fn reload_count(&self) -> usize {
        self.reloads.load(Ordering::SeqCst)
    }
}

impl HostPage for ConsolePage {
    fn csrf_token(&self) -> Option<String> {
        self.csrf_token.read().ok().and_then(|guard| guard.clone())
    }

    fn reload(&self) {
        let count = self.reloads.fetch_add(1, Ordering::SeqCst) + 1;
        info!("Page reload requested (#{})", count);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_console_page_token_is_read_live() {
        let page = ConsolePage::new(Some("first".to_string()));
        assert_eq!(page.csrf_token().as_deref(), Some("first"));

        page.set_csrf_token(Some("second".to_string()));
        assert_eq!(page.csrf_token().as_deref(), Some("second"));
    }

    #[test]
    fn test_console_page_counts_reloads() {
        let page = ConsolePage::new(None);
        page.reload();
        page.reload();

        assert_eq!(page.reload_count(), 2);
    }
}
