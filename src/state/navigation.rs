//! Route back stack.

use crate::router::Route;

/// Stack of visited routes. Never empty; the bottom is the start route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavStack {
    stack: Vec<Route>,
}

impl Default for NavStack {
    fn default() -> Self {
        Self {
            stack: vec![Route::StudentList],
        }
    }
}

impl NavStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> &Route {
        // The stack is never empty: `pop` refuses to remove the last entry.
        &self.stack[self.stack.len() - 1]
    }

    pub fn push(&mut self, route: Route) {
        tracing::debug!("Navigate: {} -> {}", self.current(), route);
        self.stack.push(route);
    }

    /// Pop the current route. Returns false when already at the start route.
    pub fn pop(&mut self) -> bool {
        if self.stack.len() > 1 {
            self.stack.pop();
            tracing::debug!("Back to {}", self.current());
            true
        } else {
            false
        }
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_on_student_list() {
        let nav = NavStack::new();
        assert_eq!(nav.current(), &Route::StudentList);
        assert_eq!(nav.depth(), 1);
    }

    #[test]
    fn test_push_and_pop() {
        let mut nav = NavStack::new();
        nav.push(Route::detail("Ivan Petrov", "G101"));
        assert_eq!(nav.current(), &Route::detail("Ivan Petrov", "G101"));
        assert!(nav.pop());
        assert_eq!(nav.current(), &Route::StudentList);
        assert!(!nav.pop());
        assert_eq!(nav.depth(), 1);
    }
}
