use tracing::debug;

use super::table::{Access, RouteTable};
use crate::session::Session;

pub const LOGIN_PATH: &str = "/login";
pub const HOME_PATH: &str = "/";

/// Outcome of a navigation attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavDecision {
    Proceed,
    Redirect(&'static str),
}

/// Intercepts every navigation attempt and decides, from the target route's
/// access tag and a single session snapshot, whether to proceed or redirect.
pub struct RouteAuthorizer {
    table: RouteTable,
}

impl RouteAuthorizer {
    pub fn new(table: RouteTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    /// Decide a navigation attempt. The caller passes one consistent session
    /// snapshot per attempt; a login resolving mid-navigation is observed by
    /// the next attempt, not this one.
    ///
    /// Authenticated users are bounced away from the login page specifically,
    /// but may still reach other guest pages such as registration. Paths that
    /// match no route carry no access tag and proceed.
    pub fn authorize(&self, path: &str, session: &Session) -> NavDecision {
        let authenticated = session.is_authenticated();
        let access = match self.table.resolve(path) {
            Some(m) => m.route.access,
            None => {
                debug!("No route matches '{}'; proceeding untagged", path);
                return NavDecision::Proceed;
            }
        };

        match access {
            Access::RequiresAuth if !authenticated => {
                debug!("Blocking navigation to '{}': not authenticated", path);
                NavDecision::Redirect(LOGIN_PATH)
            }
            Access::GuestOnly if authenticated && is_login_path(path) => {
                debug!("Already authenticated; bouncing '{}' to home", path);
                NavDecision::Redirect(HOME_PATH)
            }
            _ => NavDecision::Proceed,
        }
    }
}

fn is_login_path(path: &str) -> bool {
    path.trim_end_matches('/') == LOGIN_PATH
}
