//! Navigation
//!
//! Routes between the listing, detail and form views, and the navigator
//! seam controllers use to move between them.

use std::fmt;
use std::sync::Mutex;

use crate::contact::EmployeeId;

/// A view destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// The contact listing.
    List,
    /// One contact's detail view.
    Detail(EmployeeId),
    /// The blank form.
    Create,
    /// The form bound to an existing contact.
    Edit(EmployeeId),
}

impl Route {
    /// Renders the route as a path.
    pub fn path(&self) -> String {
        match self {
            Route::List => "/contacts".to_string(),
            Route::Detail(id) => format!("/contacts/{}", id),
            Route::Create => "/contacts/new".to_string(),
            Route::Edit(id) => format!("/contacts/{}/edit", id),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// The `employeeId` route parameter, classified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteParam {
    /// No parameter given.
    Absent,
    /// A positive integer.
    Valid(EmployeeId),
    /// Present but not a positive integer.
    Invalid(String),
}

/// Classifies a raw route parameter.
pub fn parse_route_param(raw: Option<&str>) -> RouteParam {
    match raw {
        None => RouteParam::Absent,
        Some(s) if s.trim().is_empty() => RouteParam::Absent,
        Some(s) => match s.parse::<EmployeeId>() {
            Ok(id) => RouteParam::Valid(id),
            Err(_) => RouteParam::Invalid(s.to_string()),
        },
    }
}

/// Moves the user between views.
pub trait Navigator {
    /// Navigates to `route`.
    fn navigate(&self, route: Route);
}

/// Navigator that only remembers where it was sent.
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    visited: Mutex<Vec<Route>>,
}

impl RecordingNavigator {
    /// Creates a navigator with no history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns every route navigated to, in order.
    pub fn visited(&self) -> Vec<Route> {
        self.visited
            .lock()
            .map(|v| v.clone())
            .unwrap_or_default()
    }

    /// Returns the most recent route.
    pub fn last(&self) -> Option<Route> {
        self.visited().last().copied()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, route: Route) {
        if let Ok(mut visited) = self.visited.lock() {
            visited.push(route);
        }
    }
}

impl<N: Navigator + ?Sized> Navigator for &N {
    fn navigate(&self, route: Route) {
        (**self).navigate(route)
    }
}
