use std::collections::HashMap;

/// Per-route access classification consumed by the authorizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// Only reachable with a token held.
    RequiresAuth,
    /// Login/registration pages.
    GuestOnly,
    /// No restriction either way.
    Public,
}

/// A navigable route, defined once at startup and immutable thereafter.
#[derive(Debug, Clone)]
pub struct RouteDescriptor {
    pub name: &'static str,
    pub path: &'static str,
    pub access: Access,
}

/// The result of resolving a concrete path against the table. Parameters
/// bound by `:name` segments are passed through opaquely to the view layer.
#[derive(Debug, Clone)]
pub struct RouteMatch<'t> {
    pub route: &'t RouteDescriptor,
    pub params: HashMap<String, String>,
}

/// The navigable surface of the application.
pub struct RouteTable {
    routes: Vec<RouteDescriptor>,
}

impl RouteTable {
    pub fn new(routes: Vec<RouteDescriptor>) -> Self {
        Self { routes }
    }

    /// The full route surface of the legal consultation client.
    pub fn with_default_routes() -> Self {
        use Access::*;
        Self::new(vec![
            RouteDescriptor { name: "home", path: "/", access: RequiresAuth },
            RouteDescriptor { name: "login", path: "/login", access: GuestOnly },
            RouteDescriptor { name: "register", path: "/register", access: GuestOnly },
            RouteDescriptor { name: "legal-articles", path: "/legal-articles", access: RequiresAuth },
            RouteDescriptor { name: "legal-article", path: "/legal-article/:id", access: RequiresAuth },
            RouteDescriptor { name: "discussions", path: "/discussions", access: RequiresAuth },
            RouteDescriptor { name: "discussion", path: "/discussion/:id", access: RequiresAuth },
            RouteDescriptor { name: "user-profile", path: "/user-profile", access: RequiresAuth },
        ])
    }

    pub fn routes(&self) -> &[RouteDescriptor] {
        &self.routes
    }

    /// Match a concrete path against the table. `:name` segments bind any
    /// single non-empty segment; a trailing slash is insignificant except on
    /// the root path.
    pub fn resolve(&self, path: &str) -> Option<RouteMatch<'_>> {
        let target: Vec<&str> = segments(path);
        self.routes.iter().find_map(|route| {
            let pattern: Vec<&str> = segments(route.path);
            if pattern.len() != target.len() {
                return None;
            }
            let mut params = HashMap::new();
            for (pat, seg) in pattern.iter().zip(target.iter()) {
                if let Some(name) = pat.strip_prefix(':') {
                    params.insert(name.to_string(), (*seg).to_string());
                } else if pat != seg {
                    return None;
                }
            }
            Some(RouteMatch { route, params })
        })
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::with_default_routes()
    }
}

fn segments(path: &str) -> Vec<&str> {
    path.split('/').filter(|s| !s.is_empty()).collect()
}
