//! Generic cooperative runtime.
//!
//! A single-task loop that interleaves log synchronization and keyboard
//! input without threads: each iteration runs a sync tick when due, polls
//! for at most one key within a short bound, executes the resulting
//! actions, and sleeps briefly. Within an iteration all newly observed log
//! entries are applied before any input is processed.

use std::time::Duration;

use harborwatch_proto::EmergencyReport;

use crate::{App, AppAction, AppEvent, Driver};

/// Nominal period between log fetches.
pub const SYNC_PERIOD: Duration = Duration::from_secs(1);

/// Upper bound on one input readiness check.
pub const INPUT_POLL_TIMEOUT: Duration = Duration::from_millis(10);

/// Fixed sleep at the end of each iteration, bounding CPU usage.
pub const IDLE_SLEEP: Duration = Duration::from_millis(100);

/// Orchestration loop driving [`App`] through a [`Driver`].
pub struct Runtime<D: Driver> {
    driver: D,
    app: App,
    last_sync: Option<D::Instant>,
}

impl<D: Driver> Runtime<D> {
    /// Create a runtime with a fresh [`App`].
    pub fn new(driver: D) -> Self {
        Self::with_app(driver, App::new())
    }

    /// Create a runtime with a pre-built [`App`].
    pub fn with_app(driver: D, app: App) -> Self {
        Self { driver, app, last_sync: None }
    }

    /// Run the loop until the app quits (interrupt) or the driver fails
    /// fatally. Recoverable fetch/dispatch failures are logged and never
    /// terminate the loop.
    pub async fn run(mut self) -> Result<(), D::Error> {
        loop {
            if self.sync_due() {
                self.sync_tick().await?;
            }

            if let Some(key) = self.driver.poll_key().await? {
                let actions = self.app.handle(AppEvent::Key(key));
                if self.execute(actions).await? {
                    break;
                }
            }

            self.driver.idle().await;
        }
        Ok(())
    }

    /// Whether a sync tick is due, marking it started if so.
    fn sync_due(&mut self) -> bool {
        let now = self.driver.now();
        if let Some(prev) = self.last_sync
            && now - prev < SYNC_PERIOD
        {
            return false;
        }
        self.last_sync = Some(now);
        true
    }

    /// One sync tick: fetch, apply, report.
    ///
    /// Any fetch failure (transport, status, malformed payload) aborts the
    /// tick with a warning; the cursor is untouched and the next tick
    /// retries.
    async fn sync_tick(&mut self) -> Result<(), D::Error> {
        let reply = match self.driver.fetch_log().await {
            Ok(reply) => reply,
            Err(e) => {
                tracing::warn!("log fetch failed: {e}");
                return Ok(());
            },
        };

        tracing::debug!(total = reply.entries.len(), cursor = self.app.cursor(), "log fetched");
        let actions = self.app.handle(AppEvent::LogFetched { entries: reply.entries });
        self.execute(actions).await?;
        Ok(())
    }

    /// Execute app actions. Returns `true` when the app should quit.
    async fn execute(&mut self, actions: Vec<AppAction>) -> Result<bool, D::Error> {
        for action in actions {
            match action {
                AppAction::Console(line) => self.driver.console_line(&line)?,
                AppAction::Echo(echo) => self.driver.echo(echo)?,
                AppAction::Dispatch { message } => {
                    match self.driver.dispatch(EmergencyReport { message }).await {
                        Ok(body) => tracing::info!("emergency dispatched, server said: {body}"),
                        Err(e) => tracing::warn!("emergency dispatch failed: {e}"),
                    }
                },
                AppAction::Quit => return Ok(true),
            }
        }
        Ok(false)
    }

    /// The app state, for inspection in tests.
    pub fn app(&self) -> &App {
        &self.app
    }
}
