//! Card open-action: try the app, fall back to the web
//!
//! Activation navigates to the app URL and arms a one-shot timer. When the
//! timer fires, the web URL is opened only if less than the fallback window
//! has elapsed since activation. A late timer usually means the host was
//! suspended because the app took over. This is a best-effort heuristic and
//! cannot tell for certain whether the app actually opened.

use std::process::Command;
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use super::instagram::{build_links, DeepLinks};

/// Timer settings for the app/web fallback
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LaunchTiming {
    /// Delay before the fallback check runs
    pub fallback_delay: Duration,
    /// Elapsed time under which the app is considered not to have opened
    pub fallback_window: Duration,
}

impl Default for LaunchTiming {
    fn default() -> Self {
        Self {
            fallback_delay: Duration::from_millis(1200),
            fallback_window: Duration::from_millis(1800),
        }
    }
}

/// Monotonic time source
pub trait Clock: Send + Sync {
    fn now(&self) -> Instant;
}

/// One-shot delayed task runner
pub trait Scheduler {
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce() + Send>);
}

/// Where URLs go
pub trait Navigator: Send + Sync {
    /// Replace the current location (app hand-off)
    fn navigate(&self, url: &str);
    /// Open in a new browsing context
    fn open_new(&self, url: &str);
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Runs each task on its own sleeping thread
#[derive(Default)]
pub struct ThreadScheduler {
    handles: Mutex<Vec<JoinHandle<()>>>,
}

impl ThreadScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Block until every scheduled task has run
    pub fn join_all(&self) {
        let handles = match self.handles.lock() {
            Ok(mut guard) => std::mem::take(&mut *guard),
            Err(poisoned) => std::mem::take(&mut *poisoned.into_inner()),
        };
        for handle in handles {
            if handle.join().is_err() {
                tracing::warn!("fallback timer thread panicked");
            }
        }
    }
}

impl Scheduler for ThreadScheduler {
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce() + Send>) {
        let handle = thread::spawn(move || {
            thread::sleep(delay);
            task();
        });
        match self.handles.lock() {
            Ok(mut guard) => guard.push(handle),
            Err(poisoned) => poisoned.into_inner().push(handle),
        }
    }
}

/// Hands URLs to the platform opener
pub struct SystemNavigator;

impl SystemNavigator {
    fn spawn_opener(url: &str) {
        #[cfg(target_os = "macos")]
        let command = {
            let mut command = Command::new("open");
            command.arg(url);
            command
        };

        #[cfg(target_os = "windows")]
        let command = {
            let mut command = Command::new("cmd");
            command.args(["/C", "start", "", url]);
            command
        };

        #[cfg(not(any(target_os = "macos", target_os = "windows")))]
        let command = {
            let mut command = Command::new("xdg-open");
            command.arg(url);
            command
        };

        if let Err(e) = spawn_reaped(command) {
            tracing::warn!(url, error = %e, "failed to launch opener");
        }
    }
}

/// Spawn `command` and wait for it on a detached thread so it never lingers
/// as a zombie in a long-lived host
fn spawn_reaped(mut command: Command) -> std::io::Result<JoinHandle<()>> {
    let mut child = command.spawn()?;
    Ok(thread::spawn(move || match child.wait() {
        Ok(status) if !status.success() => {
            tracing::debug!(%status, "opener exited with failure");
        }
        Ok(_) => {}
        Err(e) => tracing::warn!(error = %e, "failed to wait for opener"),
    }))
}

impl Navigator for SystemNavigator {
    fn navigate(&self, url: &str) {
        Self::spawn_opener(url);
    }

    fn open_new(&self, url: &str) {
        Self::spawn_opener(url);
    }
}

/// Runs the open-action for cards
pub struct Launcher<C, N> {
    clock: Arc<C>,
    navigator: Arc<N>,
    timing: LaunchTiming,
}

impl<C, N> Launcher<C, N>
where
    C: Clock + 'static,
    N: Navigator + 'static,
{
    pub fn new(clock: Arc<C>, navigator: Arc<N>, timing: LaunchTiming) -> Self {
        Self {
            clock,
            navigator,
            timing,
        }
    }

    /// Activate the open-action for `username`
    ///
    /// Each activation arms its own timer; activations never cancel each other.
    pub fn open(&self, username: &str, scheduler: &dyn Scheduler) -> DeepLinks {
        let links = build_links(username);
        let started = self.clock.now();

        self.navigator.navigate(&links.app_url);

        let clock = Arc::clone(&self.clock);
        let navigator = Arc::clone(&self.navigator);
        let window = self.timing.fallback_window;
        let web_url = links.web_url.clone();

        scheduler.schedule(
            self.timing.fallback_delay,
            Box::new(move || {
                let elapsed = clock.now().saturating_duration_since(started);
                if elapsed < window {
                    tracing::debug!(?elapsed, url = %web_url, "app did not take over, opening web");
                    navigator.open_new(&web_url);
                } else {
                    tracing::debug!(?elapsed, "fallback window passed, skipping web");
                }
            }),
        );

        links
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct ManualClock {
        base: Instant,
        offset: Mutex<Duration>,
    }

    impl ManualClock {
        fn new() -> Self {
            Self {
                base: Instant::now(),
                offset: Mutex::new(Duration::ZERO),
            }
        }

        fn advance(&self, by: Duration) {
            *self.offset.lock().unwrap() += by;
        }
    }

    impl Clock for ManualClock {
        fn now(&self) -> Instant {
            self.base + *self.offset.lock().unwrap()
        }
    }

    #[derive(Default)]
    struct ManualScheduler {
        tasks: Mutex<Vec<(Duration, Box<dyn FnOnce() + Send>)>>,
    }

    impl ManualScheduler {
        fn delays(&self) -> Vec<Duration> {
            self.tasks.lock().unwrap().iter().map(|(d, _)| *d).collect()
        }

        fn fire_all(&self) {
            let tasks = std::mem::take(&mut *self.tasks.lock().unwrap());
            for (_, task) in tasks {
                task();
            }
        }
    }

    impl Scheduler for ManualScheduler {
        fn schedule(&self, delay: Duration, task: Box<dyn FnOnce() + Send>) {
            self.tasks.lock().unwrap().push((delay, task));
        }
    }

    #[derive(Default)]
    struct RecordingNavigator {
        navigated: Mutex<Vec<String>>,
        opened: Mutex<Vec<String>>,
    }

    impl Navigator for RecordingNavigator {
        fn navigate(&self, url: &str) {
            self.navigated.lock().unwrap().push(url.to_string());
        }

        fn open_new(&self, url: &str) {
            self.opened.lock().unwrap().push(url.to_string());
        }
    }

    fn setup() -> (
        Arc<ManualClock>,
        Arc<RecordingNavigator>,
        ManualScheduler,
        Launcher<ManualClock, RecordingNavigator>,
    ) {
        let clock = Arc::new(ManualClock::new());
        let navigator = Arc::new(RecordingNavigator::default());
        let launcher = Launcher::new(
            Arc::clone(&clock),
            Arc::clone(&navigator),
            LaunchTiming::default(),
        );
        (clock, navigator, ManualScheduler::default(), launcher)
    }

    #[test]
    fn test_app_navigation_is_immediate() {
        let (_clock, navigator, scheduler, launcher) = setup();
        launcher.open("alice", &scheduler);

        assert_eq!(
            *navigator.navigated.lock().unwrap(),
            vec!["instagram://user?username=alice".to_string()]
        );
        assert!(navigator.opened.lock().unwrap().is_empty());
        assert_eq!(scheduler.delays(), vec![Duration::from_millis(1200)]);
    }

    #[test]
    fn test_fallback_opens_web_when_app_missing() {
        let (clock, navigator, scheduler, launcher) = setup();
        launcher.open("alice", &scheduler);

        // Page never left: the timer fires on schedule
        clock.advance(Duration::from_millis(1200));
        scheduler.fire_all();

        assert_eq!(
            *navigator.opened.lock().unwrap(),
            vec!["https://instagram.com/alice".to_string()]
        );
    }

    #[test]
    fn test_no_fallback_when_app_took_over() {
        let (clock, navigator, scheduler, launcher) = setup();
        launcher.open("alice", &scheduler);

        // Host was suspended while the app was in front
        clock.advance(Duration::from_millis(5000));
        scheduler.fire_all();

        assert!(navigator.opened.lock().unwrap().is_empty());
    }

    #[test]
    fn test_window_boundary_skips_fallback() {
        let (clock, navigator, scheduler, launcher) = setup();
        launcher.open("alice", &scheduler);

        clock.advance(Duration::from_millis(1800));
        scheduler.fire_all();

        assert!(navigator.opened.lock().unwrap().is_empty());
    }

    #[test]
    fn test_activations_are_independent() {
        let (clock, navigator, scheduler, launcher) = setup();
        launcher.open("alice", &scheduler);
        launcher.open("bob", &scheduler);

        clock.advance(Duration::from_millis(1300));
        scheduler.fire_all();

        assert_eq!(navigator.navigated.lock().unwrap().len(), 2);
        assert_eq!(
            *navigator.opened.lock().unwrap(),
            vec![
                "https://instagram.com/alice".to_string(),
                "https://instagram.com/bob".to_string()
            ]
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_spawned_opener_is_reaped() {
        let handle = spawn_reaped(Command::new("true")).unwrap();
        assert!(handle.join().is_ok());
    }

    #[test]
    fn test_spawn_failure_is_reported() {
        assert!(spawn_reaped(Command::new("definitely-not-a-real-opener-binary")).is_err());
    }

    #[test]
    fn test_thread_scheduler_runs_tasks() {
        let scheduler = ThreadScheduler::new();
        let hits = Arc::new(Mutex::new(0));
        for _ in 0..3 {
            let hits = Arc::clone(&hits);
            scheduler.schedule(
                Duration::from_millis(1),
                Box::new(move || *hits.lock().unwrap() += 1),
            );
        }
        scheduler.join_all();
        assert_eq!(*hits.lock().unwrap(), 3);
    }
}
