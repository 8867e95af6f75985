//! Shutdown coordination for the service.
//!
//! A [`Shutdown`] handle is cheap to clone. Any clone can trigger it; the
//! serve loop waits on [`Shutdown::signalled`].

use std::future::Future;

use tokio::sync::broadcast;
use tokio::task::JoinHandle;

use crate::lifecycle::signals;

/// Handle used to stop a running server.
#[derive(Clone)]
pub struct Shutdown {
    tx: broadcast::Sender<()>,
}

impl Shutdown {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(1);
        Self { tx }
    }

    /// Request shutdown. Servers already waiting begin draining.
    pub fn trigger(&self) {
        let _ = self.tx.send(());
    }

    /// Future resolving once shutdown is triggered or every handle is dropped.
    ///
    /// Subscribes immediately, so a trigger after this call is never missed.
    pub fn signalled(&self) -> impl Future<Output = ()> + Send + 'static {
        let mut rx = self.tx.subscribe();
        async move {
            let _ = rx.recv().await;
        }
    }

    /// Trigger shutdown on the first SIGINT or SIGTERM.
    pub fn trigger_on_os_signal(&self) -> JoinHandle<()> {
        let handle = self.clone();
        tokio::spawn(async move {
            signals::wait_for_signal().await;
            handle.trigger();
        })
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn trigger_from_any_clone_resolves_waiters() {
        let shutdown = Shutdown::new();
        let first = shutdown.signalled();
        let second = shutdown.signalled();

        shutdown.clone().trigger();

        tokio::time::timeout(Duration::from_secs(1), async {
            first.await;
            second.await;
        })
        .await
        .expect("waiters were not released");
    }

    #[tokio::test]
    async fn dropping_every_handle_releases_waiters() {
        let shutdown = Shutdown::new();
        let waiter = shutdown.signalled();
        drop(shutdown);

        tokio::time::timeout(Duration::from_secs(1), waiter)
            .await
            .expect("waiter outlived the handle");
    }

    #[tokio::test]
    async fn untriggered_waiter_stays_pending() {
        let shutdown = Shutdown::new();
        let waiter = shutdown.signalled();
        assert!(tokio::time::timeout(Duration::from_millis(50), waiter)
            .await
            .is_err());
    }
}
