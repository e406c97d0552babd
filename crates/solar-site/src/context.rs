//! Site-wide context: configuration, submission backend and notifications
//!
//! Built once by `App` and handed down the view tree with `provide_context`.
//! Everything here lives as long as the root reactive owner.

use async_trait::async_trait;
use leptos::*;
use leptos_router::use_location;
use solar_core::{Notification, Page, SimulatedService, SiteConfig, Sleeper, SubmissionService};
use std::rc::Rc;
use std::time::Duration;
use tracing::{info, warn};
use web_sys::window;

/// Read configuration from `data-*` attributes on the document root.
/// A bad value falls back to defaults rather than breaking the site.
pub fn load_config() -> SiteConfig {
    let root = window()
        .and_then(|win| win.document())
        .and_then(|doc| doc.document_element());
    let lookup = |key: &str| root.as_ref().and_then(|el| el.get_attribute(key));

    match SiteConfig::from_lookup(lookup) {
        Ok(config) => {
            info!(?config, "site configuration loaded");
            config
        }
        Err(err) => {
            warn!(%err, "invalid site configuration, using defaults");
            SiteConfig::default()
        }
    }
}

/// The page for the current location. Only notifies when the resolved page
/// changes, so `/refer` to `/refer/` does not remount anything.
pub fn use_current_page() -> Memo<Page> {
    let pathname = use_location().pathname;
    create_memo(move |_| Page::resolve(&pathname.get()))
}

/// Waits on browser timers
pub struct BrowserSleeper;

#[async_trait(?Send)]
impl Sleeper for BrowserSleeper {
    async fn sleep(&self, duration: Duration) {
        gloo_timers::future::sleep(duration).await;
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub notification: Notification,
}

/// Runs a callback once the delay has passed
pub type Schedule = Rc<dyn Fn(Duration, Box<dyn FnOnce()>)>;

fn browser_schedule() -> Schedule {
    Rc::new(|delay: Duration, callback: Box<dyn FnOnce()>| set_timeout(callback, delay))
}

/// Queue of on-screen toasts
#[derive(Clone, Copy)]
pub struct Notifier {
    toasts: RwSignal<Vec<Toast>>,
    next_id: StoredValue<u64>,
    schedule: StoredValue<Schedule>,
}

impl Notifier {
    pub fn new() -> Self {
        Self::with_schedule(browser_schedule())
    }

    pub fn with_schedule(schedule: Schedule) -> Self {
        Self {
            toasts: create_rw_signal(Vec::new()),
            next_id: store_value(0),
            schedule: store_value(schedule),
        }
    }

    pub fn toasts(&self) -> Signal<Vec<Toast>> {
        self.toasts.into()
    }

    pub fn push(&self, notification: Notification) -> u64 {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);
        self.toasts.update(|toasts| toasts.push(Toast { id, notification }));
        id
    }

    pub fn dismiss(&self, id: u64) {
        let _ = self
            .toasts
            .try_update(|toasts| toasts.retain(|toast| toast.id != id));
    }

    /// Show a toast and drop it again after `ttl`
    pub fn notify(&self, notification: Notification, ttl: Duration) {
        let id = self.push(notification);
        let notifier = *self;
        self.schedule
            .with_value(|schedule| schedule(ttl, Box::new(move || notifier.dismiss(id))));
    }
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone)]
pub struct SiteContext {
    pub config: SiteConfig,
    pub service: Rc<dyn SubmissionService>,
    pub notifier: Notifier,
}

impl SiteContext {
    pub fn new(config: SiteConfig) -> Self {
        let service = Rc::new(SimulatedService::new(BrowserSleeper, &config));
        Self {
            config,
            service,
            notifier: Notifier::new(),
        }
    }

    /// Show a toast for the configured lifetime
    pub fn notify(&self, notification: Notification) {
        self.notifier
            .notify(notification, self.config.notification_ttl());
    }
}

pub fn provide_site_context(config: SiteConfig) -> SiteContext {
    let site = SiteContext::new(config);
    provide_context(site.clone());
    site
}

pub fn use_site() -> SiteContext {
    expect_context::<SiteContext>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    type Timers = Rc<RefCell<Vec<(Duration, Box<dyn FnOnce()>)>>>;

    fn manual_notifier() -> (Notifier, Timers) {
        let timers: Timers = Rc::default();
        let queue = timers.clone();
        let schedule: Schedule = Rc::new(move |delay: Duration, callback: Box<dyn FnOnce()>| {
            queue.borrow_mut().push((delay, callback));
        });
        (Notifier::with_schedule(schedule), timers)
    }

    #[test]
    fn test_notify_dismisses_after_ttl() {
        let runtime = create_runtime();
        let (notifier, timers) = manual_notifier();
        let ttl = Duration::from_millis(5000);

        notifier.notify(Notification::referral_submitted(), ttl);
        notifier.notify(Notification::error("Oops", "try again"), ttl);
        assert_eq!(notifier.toasts().get_untracked().len(), 2);

        let pending: Vec<_> = timers.borrow_mut().drain(..).collect();
        assert_eq!(pending.len(), 2);
        assert!(pending.iter().all(|(delay, _)| *delay == ttl));

        let mut pending = pending.into_iter();
        let (_, first) = pending.next().unwrap();
        first();
        let remaining = notifier.toasts().get_untracked();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].notification.title, "Oops");

        let (_, second) = pending.next().unwrap();
        second();
        assert!(notifier.toasts().get_untracked().is_empty());

        runtime.dispose();
    }

    #[test]
    fn test_expiry_after_manual_dismiss_is_harmless() {
        let runtime = create_runtime();
        let (notifier, timers) = manual_notifier();

        notifier.notify(Notification::referral_submitted(), Duration::from_secs(1));
        let id = notifier.toasts().get_untracked()[0].id;
        notifier.dismiss(id);
        notifier.push(Notification::error("Oops", "try again"));

        let (_, expire) = timers.borrow_mut().pop().unwrap();
        expire();
        assert_eq!(notifier.toasts().get_untracked().len(), 1);

        runtime.dispose();
    }

    #[test]
    fn test_notifier_push_and_dismiss() {
        let runtime = create_runtime();

        let (notifier, _timers) = manual_notifier();
        let first = notifier.push(Notification::referral_submitted());
        let second = notifier.push(Notification::error("Oops", "try again"));
        assert_ne!(first, second);
        assert_eq!(notifier.toasts().get_untracked().len(), 2);

        notifier.dismiss(first);
        let remaining = notifier.toasts().get_untracked();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, second);
        assert_eq!(remaining[0].notification.title, "Oops");

        notifier.dismiss(first);
        assert_eq!(notifier.toasts().get_untracked().len(), 1);

        runtime.dispose();
    }
}
