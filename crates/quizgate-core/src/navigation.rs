//! Navigation seam between the session layer and the router.
//!
//! The router itself lives outside this crate. It is reached through the
//! `Navigator` trait, which the API coordinator uses to send the user to the
//! login screen after an auth rejection. `NavigationGuard` is the check the
//! router runs before entering any admin screen.

use std::sync::{Mutex, MutexGuard};

use tracing::debug;
use url::form_urlencoded;

use crate::auth::SessionManager;

/// Root of the admin area
pub const ADMIN_PATH: &str = "/admin";

/// Login screen inside the admin area
pub const LOGIN_PATH: &str = "/admin/login";

/// Query parameter carrying the post-login destination
pub const RETURN_TO_PARAM: &str = "returnTo";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    Login { return_to: Option<String> },
    Path(String),
}

impl Destination {
    pub fn login_returning_to(location: impl Into<String>) -> Self {
        Destination::Login {
            return_to: Some(location.into()),
        }
    }

    /// Full path including query, e.g. `/admin/login?returnTo=%2Fadmin%2Fquestion`
    pub fn to_path(&self) -> String {
        match self {
            Destination::Login { return_to: None } => LOGIN_PATH.to_string(),
            Destination::Login {
                return_to: Some(target),
            } => {
                let query = form_urlencoded::Serializer::new(String::new())
                    .append_pair(RETURN_TO_PARAM, target)
                    .finish();
                format!("{}?{}", LOGIN_PATH, query)
            }
            Destination::Path(path) => path.clone(),
        }
    }
}

/// Where to go once login succeeds, read from the login screen's location.
pub fn return_to_from(location: &str) -> Option<String> {
    let (_, query) = location.split_once('?')?;
    form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == RETURN_TO_PARAM)
        .map(|(_, value)| value.into_owned())
        .filter(|value| !value.is_empty())
}

fn strip_query(location: &str) -> &str {
    location.split(['?', '#']).next().unwrap_or(location)
}

/// True for every admin screen except the login screen itself
pub fn requires_session(location: &str) -> bool {
    let path = strip_query(location).trim_end_matches('/');
    let in_admin = path == ADMIN_PATH || path.starts_with("/admin/");
    in_admin && path != LOGIN_PATH
}

/// The router, as seen from this crate.
pub trait Navigator: Send + Sync {
    /// Full path of the screen currently shown, including query
    fn current_location(&self) -> String;

    fn navigate(&self, destination: Destination);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    Proceed,
    Redirect(Destination),
}

/// Gate evaluated before every entry into the admin area.
#[derive(Clone)]
pub struct NavigationGuard {
    session: SessionManager,
}

impl NavigationGuard {
    pub fn new(session: SessionManager) -> Self {
        Self { session }
    }

    pub fn before_enter(&self, target: &str) -> GuardDecision {
        if requires_session(target) && !self.session.is_authenticated() {
            debug!(target, "Admin screen without session, redirecting to login");
            GuardDecision::Redirect(Destination::login_returning_to(target))
        } else {
            GuardDecision::Proceed
        }
    }
}

/// Navigator keeping its history in memory.
#[derive(Debug)]
pub struct MemoryNavigator {
    history: Mutex<Vec<String>>,
}

impl MemoryNavigator {
    pub fn new(start: impl Into<String>) -> Self {
        Self {
            history: Mutex::new(vec![start.into()]),
        }
    }

    fn history_lock(&self) -> MutexGuard<'_, Vec<String>> {
        self.history.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Enter `target` the way the router would, running the guard first.
    /// Returns the location actually reached.
    pub fn visit(&self, target: &str, guard: &NavigationGuard) -> String {
        let location = match guard.before_enter(target) {
            GuardDecision::Proceed => target.to_string(),
            GuardDecision::Redirect(destination) => destination.to_path(),
        };
        self.history_lock().push(location.clone());
        location
    }

    pub fn history(&self) -> Vec<String> {
        self.history_lock().clone()
    }
}

impl Navigator for MemoryNavigator {
    fn current_location(&self) -> String {
        self.history_lock().last().cloned().unwrap_or_else(|| "/".to_string())
    }

    fn navigate(&self, destination: Destination) {
        let path = destination.to_path();
        debug!(path = %path, "Navigating");
        self.history_lock().push(path);
    }
}
