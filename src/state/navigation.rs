// Navigation state management.
// Route history for the app shell and the navigator trait views call into.

/// Something that can move the app to a route path such as `/login`.
pub trait Navigator {
    fn navigate_to(&mut self, route: &str);
}

/// Stack of visited route paths (bottom = root, top = current).
#[derive(Debug, Clone)]
pub struct RouteHistory {
    stack: Vec<String>,
}

impl RouteHistory {
    /// Create a new history starting at the given route.
    pub fn new(root: impl Into<String>) -> Self {
        Self {
            stack: vec![root.into()],
        }
    }

    /// Get the current route.
    pub fn current(&self) -> &str {
        // The stack always holds at least the root
        self.stack.last().map(String::as_str).unwrap_or_default()
    }

    /// Check whether the current route is `route`.
    pub fn is_at(&self, route: &str) -> bool {
        self.current() == route
    }

    /// Drop all history and start over at `root`.
    pub fn reset(&mut self, root: impl Into<String>) {
        self.stack.clear();
        self.stack.push(root.into());
    }
}

impl Navigator for RouteHistory {
    fn navigate_to(&mut self, route: &str) {
        if self.current() == route {
            return;
        }
        tracing::info!(from = self.current(), to = route, "navigate");
        self.stack.push(route.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_history() {
        let mut nav = RouteHistory::new("/campaigns");
        assert!(nav.is_at("/campaigns"));

        nav.navigate_to("/settings");
        assert!(nav.is_at("/settings"));
        assert!(!nav.is_at("/campaigns"));

        nav.navigate_to("/login");
        assert_eq!(nav.current(), "/login");
        assert_eq!(nav.stack, ["/campaigns", "/settings", "/login"]);
    }

    #[test]
    fn test_navigate_to_current_is_noop() {
        let mut nav = RouteHistory::new("/campaigns");
        nav.navigate_to("/campaigns");
        assert_eq!(nav.stack, ["/campaigns"]);
    }

    #[test]
    fn test_reset() {
        let mut nav = RouteHistory::new("/campaigns");
        nav.navigate_to("/login");
        nav.reset("/campaigns");
        assert_eq!(nav.stack, ["/campaigns"]);
        assert!(nav.is_at("/campaigns"));
    }
}
