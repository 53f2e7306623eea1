//! Continuous watch command

use crate::render;
use anyhow::Result;
use clap::Args;
use quill_adapters::{HttpProjectSource, TracedProjectSource};
use quill_core::{Project, ProjectId};
use quill_view::ProjectWatcher;
use std::time::Duration;
use tokio::sync::watch;
use tokio::time;

/// How often the screen is refreshed from the shared view state
const REDRAW_INTERVAL: Duration = Duration::from_millis(250);

#[derive(Args)]
pub struct WatchArgs {
    /// Project feed URL
    #[arg(long)]
    pub url: String,

    /// Poll interval, e.g. "3s" or "500ms"
    #[arg(long, value_parser = humantime::parse_duration)]
    pub interval: Option<Duration>,
}

type ViewKey = (Option<ProjectId>, Option<Project>, usize);

pub async fn handle(args: WatchArgs) -> Result<()> {
    let interval = args.interval.unwrap_or_else(quill_view::poll_interval);
    tracing::debug!(url = %args.url, interval = ?interval, "starting watch");

    let source = TracedProjectSource::new(HttpProjectSource::new(&args.url));
    let (watcher, handle) = ProjectWatcher::new(source, interval);

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    ctrlc::set_handler(move || {
        let _ = shutdown_tx.send(true);
    })?;

    let mut render_shutdown = shutdown_rx.clone();
    let poller = tokio::spawn(watcher.run(shutdown_rx));

    let mut ticker = time::interval(REDRAW_INTERVAL);
    let mut last: Option<ViewKey> = None;

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                if handle.is_loading() {
                    continue;
                }
                let key: ViewKey = (
                    handle.selected_id(),
                    handle.current_project(),
                    handle.projects().len(),
                );
                if last.as_ref() != Some(&key) {
                    print!("{}", render::view(&handle));
                    last = Some(key);
                }
            }
            changed = render_shutdown.changed() => {
                if changed.is_err() || *render_shutdown.borrow() {
                    break;
                }
            }
        }
    }

    poller.await?;
    Ok(())
}
