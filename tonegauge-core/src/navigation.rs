use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Route {
    Login,
    Home,
}

impl Route {
    pub fn title(self) -> &'static str {
        match self {
            Route::Login => "Login",
            Route::Home => "Home",
        }
    }

    pub fn requires_auth(self) -> bool {
        matches!(self, Route::Home)
    }
}

/// Set on login, cleared on logout.
///
/// There is no credential check behind it; it only gates which routes are
/// reachable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AuthState {
    pub is_authenticated: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigator {
    stack: Vec<Route>,
    auth: AuthState,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator {
    pub fn new() -> Self {
        Self {
            stack: vec![Route::Login],
            auth: AuthState::default(),
        }
    }

    pub fn current(&self) -> Route {
        self.stack.last().copied().unwrap_or(Route::Login)
    }

    pub fn auth(&self) -> AuthState {
        self.auth
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Marks the user authenticated and makes Home the only entry on the stack.
    pub fn login(&mut self) -> Route {
        self.auth.is_authenticated = true;
        self.reset_to(Route::Home)
    }

    /// Clears authentication and makes Login the only entry on the stack.
    pub fn logout(&mut self) -> Route {
        self.auth.is_authenticated = false;
        self.reset_to(Route::Login)
    }

    /// Replaces the whole stack with `route`, unless the route needs auth we
    /// don't have; then the stack resets to Login instead.
    pub fn reset_to(&mut self, route: Route) -> Route {
        let target = self.gate(route);
        let prev = self.current();
        self.stack.clear();
        self.stack.push(target);
        if prev != target {
            log::info!("route: {:?} -> {:?}", prev, target);
        }
        target
    }

    pub fn push(&mut self, route: Route) -> Route {
        let target = self.gate(route);
        if target != route {
            return self.reset_to(target);
        }
        log::info!("route: {:?} -> {:?} (push)", self.current(), target);
        self.stack.push(target);
        target
    }

    /// Pops one entry; the root entry stays.
    pub fn back(&mut self) -> Route {
        if self.stack.len() > 1 {
            self.stack.pop();
        }
        self.current()
    }

    fn gate(&self, route: Route) -> Route {
        if route.requires_auth() && !self.auth.is_authenticated {
            log::warn!("route {:?} requires login", route);
            Route::Login
        } else {
            route
        }
    }
}
