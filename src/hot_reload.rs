//! # Hot Reload Module
//!
//! Rebuilds the route tree when files under the route root change, without
//! restarting the embedding dev server.
//!
//! ## Overview
//!
//! [`watch_routes`] installs a filesystem watcher on the route root and a
//! dedicated rebuild thread. On a change notification the thread re-scans
//! the directory and publishes the complete new tree through an
//! [`ArcSwap`], so a reader (the request dispatcher) always observes either
//! the previous tree or the new one, never a partially populated tree.
//!
//! ## Coalescing
//!
//! Editors and package managers fire bursts of events. Notifications that
//! arrive while a build is in flight are collapsed into at most one pending
//! follow-up build: the rebuild thread drains its queue before each scan.
//! A build is bounded by file count and expected to complete quickly, so
//! there is no mid-build cancellation and no timeout.
//!
//! ## Error Handling
//!
//! If a rebuild fails (a half-saved file with a malformed parameter, or a
//! conflict introduced mid-edit), the error is logged and the previous tree
//! remains published. The dev server keeps serving.

use arc_swap::ArcSwap;
use notify::{Config, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::sync::mpsc;
use std::sync::Arc;
use tracing::{info, warn};

use crate::router::{FrameworkRouter, RouteTree};

/// Watch the router's root directory and republish the tree on change.
///
/// `published` is the slot readers load from; each successful rebuild swaps
/// in a fresh tree wholesale. The callback receives every newly published
/// tree so the caller can invalidate downstream state (bundler caches,
/// open connections).
///
/// The returned watcher must be kept alive; dropping it stops both the
/// notifications and the rebuild thread.
pub fn watch_routes<F>(
    router: FrameworkRouter,
    published: Arc<ArcSwap<RouteTree>>,
    mut on_reload: F,
) -> notify::Result<RecommendedWatcher>
where
    F: FnMut(&RouteTree) + Send + 'static,
{
    let root = router.root().to_path_buf();
    let (tx, rx) = mpsc::channel::<()>();

    // Rebuild worker. Exits when the watcher (and with it the sender) is
    // dropped. One build in flight; queued notifications collapse to one.
    std::thread::spawn(move || {
        while rx.recv().is_ok() {
            while rx.try_recv().is_ok() {}
            match router.scan() {
                Ok(tree) => {
                    let tree = Arc::new(tree);
                    published.store(Arc::clone(&tree));
                    info!(files = tree.file_count(), "hot-reload: route tree republished");
                    on_reload(&tree);
                }
                Err(err) => {
                    warn!(error = %err, "hot-reload: rebuild failed, keeping previous tree");
                }
            }
        }
    });

    let mut watcher = RecommendedWatcher::new(
        move |res: Result<notify::Event, notify::Error>| match res {
            Ok(event) => {
                if matches!(
                    event.kind,
                    EventKind::Create(_) | EventKind::Modify(_) | EventKind::Remove(_)
                ) {
                    let _ = tx.send(());
                }
            }
            Err(e) => warn!(error = ?e, "hot-reload: watch error"),
        },
        Config::default(),
    )?;

    watcher.watch(&root, RecursiveMode::Recursive)?;
    Ok(watcher)
}
