//! Navigation seam kept from the host application
//!
//! The services never touch a rendering layer; after a successful submission
//! they only announce where the application should go next.

/// Routes of the host application.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoutePath {
    Bills,
    NewBill,
    Login,
}

impl RoutePath {
    /// The hash-route path used by the host application.
    pub fn as_str(&self) -> &'static str {
        match self {
            RoutePath::Bills => "#employee/bills",
            RoutePath::NewBill => "#employee/bill/new",
            RoutePath::Login => "/",
        }
    }
}

/// Router/navigation collaborator.
///
/// Implementations decide what "going to a route" means for their surface.
pub trait Navigator: Send + Sync {
    fn navigate(&self, route: RoutePath);
}

/// Navigator that goes nowhere, for surfaces without a navigation concept
/// (e.g. the REST exposure, where the response itself is the outcome).
pub struct NullNavigator;

impl Navigator for NullNavigator {
    fn navigate(&self, _route: RoutePath) {}
}
