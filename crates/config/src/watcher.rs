use notify::{Config, Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use segbar_core::{Result, SegBarError};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// Signals a reload whenever the bar config file is written or replaced.
///
/// The watch is placed on the file's parent directory rather than on the
/// file, so saves that write a temporary file and rename it over the config
/// keep being observed. Events for sibling files are filtered out.
///
/// # Example
/// ```no_run
/// # async fn demo() -> segbar_core::Result<()> {
/// let (_watcher, mut rx) = segbar_config::ConfigWatcher::spawn("/home/user/.config/segbar/segbar.toml")?;
/// while rx.recv().await.is_some() {
///     println!("config changed; re-rendering");
/// }
/// # Ok(())
/// # }
/// ```
pub struct ConfigWatcher {
    path: PathBuf,
    /// Dropping the handle stops the watch.
    _inner: RecommendedWatcher,
}

impl ConfigWatcher {
    /// Start watching `path`.
    ///
    /// Notifications are coalesced: at most one reload is pending on the
    /// returned receiver at any time.
    pub fn spawn(path: impl AsRef<Path>) -> Result<(Self, mpsc::Receiver<()>)> {
        let path = path.as_ref().to_path_buf();
        let file_name = path
            .file_name()
            .map(OsString::from)
            .ok_or_else(|| SegBarError::Config(format!("'{}' names no file", path.display())))?;
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };

        let (tx, rx) = mpsc::channel(1);
        let mut inner = RecommendedWatcher::new(
            move |res: notify::Result<Event>| match res {
                Ok(event) if touches(&event, &file_name) => {
                    debug!(kind = ?event.kind, "config file changed");
                    // A full channel already holds a pending reload.
                    let _ = tx.try_send(());
                }
                Ok(_) => {}
                Err(e) => warn!("Watcher error: {e}"),
            },
            Config::default().with_poll_interval(Duration::from_secs(1)),
        )
        .map_err(|e| SegBarError::Config(format!("cannot create watcher: {e}")))?;

        inner
            .watch(&dir, RecursiveMode::NonRecursive)
            .map_err(|e| SegBarError::Config(format!("cannot watch '{}': {e}", dir.display())))?;

        info!("Watching bar config: {}", path.display());
        Ok((Self { path, _inner: inner }, rx))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// `true` for a write, creation or rename that lands on `file_name`.
fn touches(event: &Event, file_name: &OsString) -> bool {
    matches!(event.kind, EventKind::Modify(_) | EventKind::Create(_))
        && event
            .paths
            .iter()
            .any(|p| p.file_name() == Some(file_name.as_os_str()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use notify::event::{CreateKind, ModifyKind, RemoveKind, RenameMode};
    use tempfile::TempDir;
    use tokio::time::{sleep, timeout};

    fn event(kind: EventKind, paths: &[&str]) -> Event {
        paths
            .iter()
            .fold(Event::new(kind), |e, p| e.add_path(PathBuf::from(p)))
    }

    #[test]
    fn rename_onto_config_counts() {
        let name = OsString::from("segbar.toml");
        let e = event(
            EventKind::Modify(ModifyKind::Name(RenameMode::Both)),
            &["/cfg/segbar.toml.tmp", "/cfg/segbar.toml"],
        );
        assert!(touches(&e, &name));
    }

    #[test]
    fn sibling_files_and_removals_are_ignored() {
        let name = OsString::from("segbar.toml");
        let tmp = event(EventKind::Create(CreateKind::File), &["/cfg/segbar.toml.tmp"]);
        let removed = event(EventKind::Remove(RemoveKind::File), &["/cfg/segbar.toml"]);
        assert!(!touches(&tmp, &name));
        assert!(!touches(&removed, &name));
    }

    /// Wait for one reload, then swallow the burst of follow-up events.
    async fn next_reload(rx: &mut mpsc::Receiver<()>) -> bool {
        let seen = matches!(timeout(Duration::from_secs(5), rx.recv()).await, Ok(Some(())));
        sleep(Duration::from_millis(300)).await;
        while rx.try_recv().is_ok() {}
        seen
    }

    #[tokio::test]
    async fn survives_saves_that_rename_over_the_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("segbar.toml");
        std::fs::write(&path, "[bar]\n").unwrap();

        let (_watcher, mut rx) = ConfigWatcher::spawn(&path).unwrap();
        sleep(Duration::from_millis(200)).await;

        let tmp = dir.path().join("segbar.toml.tmp");
        let mut seen = 0;
        for round in 0..3 {
            std::fs::write(&tmp, format!("[bar]\npadding = {round}.0\n")).unwrap();
            std::fs::rename(&tmp, &path).unwrap();
            if next_reload(&mut rx).await {
                seen += 1;
            }
        }
        assert_eq!(seen, 3);

        std::fs::write(&path, "[bar]\npadding = 9.0\n").unwrap();
        assert!(next_reload(&mut rx).await);
    }

    #[test]
    fn bare_directory_is_rejected() {
        assert!(ConfigWatcher::spawn("/").is_err());
    }
}
