//! Pre-navigation guard for the doctor dashboard.
//!
//! Every routed render builds a [`NavigationRequest`] and asks
//! [`NavigationGuard::evaluate`] whether to render it or go elsewhere. The
//! guard holds no state between navigations; authentication is re-read from
//! storage each time.

use crate::auth::Credentials;
use crate::routes::MainRoute;
use crate::storage::KeyValueStore;
use log::debug;
use serde::{Deserialize, Serialize};
use url::form_urlencoded;
use yew_router::Routable;
use yew_router::history::Location;

/// The navigation being attempted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationRequest {
    /// Path component only, e.g. `/doctor/dashboard/schedule`.
    pub path: String,
    /// Path with query and fragment, as it should be restored after login.
    pub full_path: String,
    /// Full path of the last navigation that was allowed through.
    pub from: Option<String>,
}

impl NavigationRequest {
    pub fn new(path: impl Into<String>, full_path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            full_path: full_path.into(),
            from: None,
        }
    }

    #[must_use]
    pub fn with_from(mut self, from: Option<String>) -> Self {
        self.from = from;
        self
    }

    pub fn from_location(location: &Location, from: Option<String>) -> Self {
        let path = location.path();
        let mut full_path = path.to_string();
        push_prefixed(&mut full_path, '?', location.query_str());
        push_prefixed(&mut full_path, '#', location.hash());
        Self::new(path, full_path).with_from(from)
    }
}

fn push_prefixed(target: &mut String, prefix: char, part: &str) {
    let part = part.trim_start_matches(prefix);
    if !part.is_empty() {
        target.push(prefix);
        target.push_str(part);
    }
}

/// Query the login view receives when a protected page bounced the visitor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginQuery {
    /// Full path to return to after signing in.
    pub redirect: String,
    /// Always `"true"` when set by the guard.
    #[serde(rename = "requireAuth")]
    pub require_auth: String,
}

impl LoginQuery {
    pub fn returning_to(full_path: impl Into<String>) -> Self {
        Self {
            redirect: full_path.into(),
            require_auth: "true".to_string(),
        }
    }
}

/// Where the guard sends a navigation instead of its target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RedirectTarget {
    Login(LoginQuery),
    Dashboard,
}

impl RedirectTarget {
    pub fn route(&self) -> MainRoute {
        match self {
            RedirectTarget::Login(_) => MainRoute::Login,
            RedirectTarget::Dashboard => MainRoute::DashboardRoot,
        }
    }

    /// Path and encoded query of the redirect, e.g.
    /// `/doctor/login?redirect=%2Fdoctor%2Fdashboard&requireAuth=true`.
    pub fn full_path(&self) -> String {
        let path = self.route().to_path();
        match self {
            RedirectTarget::Login(query) => {
                let query = form_urlencoded::Serializer::new(String::new())
                    .append_pair("redirect", &query.redirect)
                    .append_pair("requireAuth", &query.require_auth)
                    .finish();
                format!("{path}?{query}")
            }
            RedirectTarget::Dashboard => path,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationDecision {
    Proceed,
    Redirect(RedirectTarget),
}

/// Gate in front of `/doctor/dashboard`.
#[derive(Debug, Clone)]
pub struct NavigationGuard<S> {
    credentials: Credentials<S>,
}

impl<S: KeyValueStore> NavigationGuard<S> {
    pub fn new(credentials: Credentials<S>) -> Self {
        Self { credentials }
    }

    /// First match wins:
    /// 1. protected path while signed out goes to login, carrying the target;
    /// 2. the login page while signed in goes to the dashboard;
    /// 3. anything else proceeds.
    pub fn evaluate(&self, request: &NavigationRequest) -> NavigationDecision {
        let authenticated = self.credentials.is_authenticated();
        let protected_prefix = MainRoute::DashboardRoot.to_path();

        let decision = if request.path.starts_with(&protected_prefix) && !authenticated {
            NavigationDecision::Redirect(RedirectTarget::Login(LoginQuery::returning_to(
                request.full_path.clone(),
            )))
        } else if request.path == MainRoute::Login.to_path() && authenticated {
            NavigationDecision::Redirect(RedirectTarget::Dashboard)
        } else {
            NavigationDecision::Proceed
        };

        match &decision {
            NavigationDecision::Proceed => debug!(
                "navigation {} -> {} allowed",
                request.from.as_deref().unwrap_or("<start>"),
                request.full_path
            ),
            NavigationDecision::Redirect(target) => debug!(
                "navigation {} -> {} redirected to {}",
                request.from.as_deref().unwrap_or("<start>"),
                request.full_path,
                target.full_path()
            ),
        }

        decision
    }
}
