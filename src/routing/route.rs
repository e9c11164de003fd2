//! Route declarations.

use crate::routing::view::LazyView;

/// One node of the route tree as declared at startup.
#[derive(Debug)]
pub struct Route {
    pub(crate) path: String,
    pub(crate) name: String,
    pub(crate) view: Option<LazyView>,
    pub(crate) children: Vec<Route>,
    pub(crate) redirect: Option<String>,
}

impl Route {
    /// Declare a route. Child paths are relative to their parent unless
    /// they start with `/`.
    pub fn new(path: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
            view: None,
            children: Vec::new(),
            redirect: None,
        }
    }

    pub fn view(mut self, view: LazyView) -> Self {
        self.view = Some(view);
        self
    }

    pub fn child(mut self, route: Route) -> Self {
        self.children.push(route);
        self
    }

    /// Make the bare path an alias of a descendant.
    pub fn redirect(mut self, target: impl Into<String>) -> Self {
        self.redirect = Some(target.into());
        self
    }
}
