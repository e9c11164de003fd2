//! Route lookup.
//!
//! # Responsibilities
//! - Compile the declared route tree into a flat lookup table
//! - Validate the tree (unique names, descendant redirects, reachable views)
//! - Resolve a path to the view to mount, with its layout chain
//!
//! # Design Decisions
//! - Immutable after construction (thread-safe without locks)
//! - O(1) lookup via HashMap on the canonical full path
//! - Redirects are resolved at build time, so `/home` and its target share
//!   one lookup result
//! - Explicit NotFound rather than silent default

use std::collections::HashMap;
use std::sync::Arc;

use thiserror::Error;

use crate::routing::matcher::{is_descendant_path, join_paths, normalize_path};
use crate::routing::route::Route;
use crate::routing::view::LazyView;
use crate::views::Page;

/// Navigation failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoutingError {
    #[error("no page at '{path}'")]
    NotFound { path: String },
}

/// Invalid route tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteTableError {
    #[error("route name '{0}' is used more than once")]
    DuplicateName(String),

    #[error("path '{path}' is declared by both '{first}' and '{second}'")]
    DuplicatePath {
        path: String,
        first: String,
        second: String,
    },

    #[error("route '{name}' has an invalid path '{path}'")]
    InvalidPath { name: String, path: String },

    #[error("route '{route}' redirects to '{target}', which is not declared")]
    RedirectNotFound { route: String, target: String },

    #[error("route '{route}' redirects to '{target}', which is not below it")]
    RedirectNotDescendant { route: String, target: String },

    #[error("route '{0}' has no view, no children and no redirect")]
    Unreachable(String),
}

#[derive(Debug)]
struct Node {
    name: String,
    full_path: String,
    view: Option<LazyView>,
    parent: Option<usize>,
    redirect: Option<String>,
    /// Final target once the redirect is followed; the node itself otherwise.
    target: usize,
}

/// A successful resolution.
#[derive(Debug, Clone)]
pub struct Resolution {
    /// Name of the route whose view is mounted.
    pub name: String,
    /// Canonical path of that route.
    pub path: String,
    /// The view to mount.
    pub view: Arc<dyn Page>,
    /// Views of enclosing layout routes, outermost first.
    pub layouts: Vec<Arc<dyn Page>>,
}

/// The compiled, immutable route table.
#[derive(Debug)]
pub struct RouteTable {
    nodes: Vec<Node>,
    by_path: HashMap<String, usize>,
    by_name: HashMap<String, usize>,
}

impl RouteTable {
    /// Compile and validate a route tree.
    pub fn new(routes: Vec<Route>) -> Result<Self, RouteTableError> {
        let mut table = Self {
            nodes: Vec::new(),
            by_path: HashMap::new(),
            by_name: HashMap::new(),
        };

        for route in routes {
            table.insert(route, None)?;
        }
        table.link_redirects()?;

        tracing::debug!(routes = table.nodes.len(), "Route table compiled");
        Ok(table)
    }

    fn insert(&mut self, route: Route, parent: Option<usize>) -> Result<(), RouteTableError> {
        let Route {
            path,
            name,
            view,
            children,
            redirect,
        } = route;

        let parent_path = parent.map(|idx| self.nodes[idx].full_path.as_str());
        let valid = match parent_path {
            None => path.starts_with('/'),
            Some(_) => !path.trim_matches('/').is_empty(),
        };
        if !valid {
            return Err(RouteTableError::InvalidPath { name, path });
        }
        let full_path = join_paths(parent_path, &path);

        if self.by_name.contains_key(&name) {
            return Err(RouteTableError::DuplicateName(name));
        }
        if let Some(&existing) = self.by_path.get(&full_path) {
            return Err(RouteTableError::DuplicatePath {
                path: full_path,
                first: self.nodes[existing].name.clone(),
                second: name,
            });
        }
        if view.is_none() && children.is_empty() && redirect.is_none() {
            return Err(RouteTableError::Unreachable(name));
        }

        let idx = self.nodes.len();
        self.by_name.insert(name.clone(), idx);
        self.by_path.insert(full_path.clone(), idx);
        self.nodes.push(Node {
            name,
            full_path,
            view,
            parent,
            redirect,
            target: idx,
        });

        for child in children {
            self.insert(child, Some(idx))?;
        }
        Ok(())
    }

    fn link_redirects(&mut self) -> Result<(), RouteTableError> {
        // Redirects only point downwards, so following them always ends.
        for idx in 0..self.nodes.len() {
            let Some(raw) = self.nodes[idx].redirect.clone() else {
                continue;
            };
            let node = &self.nodes[idx];
            let target_path = join_paths(Some(&node.full_path), &raw);

            let &target = self.by_path.get(&target_path).ok_or_else(|| {
                RouteTableError::RedirectNotFound {
                    route: node.name.clone(),
                    target: raw.clone(),
                }
            })?;
            if !is_descendant_path(&node.full_path, &target_path) {
                return Err(RouteTableError::RedirectNotDescendant {
                    route: node.name.clone(),
                    target: raw,
                });
            }
            self.nodes[idx].target = target;
        }

        for idx in 0..self.nodes.len() {
            let mut target = self.nodes[idx].target;
            while self.nodes[target].target != target {
                target = self.nodes[target].target;
            }
            self.nodes[idx].target = target;
        }
        Ok(())
    }

    /// Resolve a navigation target to the view to mount.
    pub fn resolve(&self, path: &str) -> Result<Resolution, RoutingError> {
        let normalized = normalize_path(path);
        let not_found = || RoutingError::NotFound {
            path: path.to_string(),
        };

        let &idx = self.by_path.get(&normalized).ok_or_else(not_found)?;
        let target = &self.nodes[self.nodes[idx].target];
        // A layout container with neither view nor redirect is not a page.
        let view = target.view.as_ref().ok_or_else(not_found)?;

        let mut layouts = Vec::new();
        let mut parent = target.parent;
        while let Some(p) = parent {
            if let Some(layout) = &self.nodes[p].view {
                layouts.push(layout.get());
            }
            parent = self.nodes[p].parent;
        }
        layouts.reverse();

        tracing::debug!(
            requested = %path,
            route = %target.name,
            resolved = %target.full_path,
            "Route resolved"
        );

        Ok(Resolution {
            name: target.name.clone(),
            path: target.full_path.clone(),
            view: view.get(),
            layouts,
        })
    }

    /// Canonical path of a named route.
    pub fn path_for(&self, name: &str) -> Option<&str> {
        self.by_name
            .get(name)
            .map(|&idx| self.nodes[idx].full_path.as_str())
    }

    /// `(name, path)` for every route, in declaration order.
    pub fn routes(&self) -> Vec<(&str, &str)> {
        self.nodes
            .iter()
            .map(|n| (n.name.as_str(), n.full_path.as_str()))
            .collect()
    }

    /// Whether the view behind a named route has been loaded yet.
    pub fn is_loaded(&self, name: &str) -> bool {
        self.by_name
            .get(name)
            .and_then(|&idx| self.nodes[idx].view.as_ref())
            .map(LazyView::is_loaded)
            .unwrap_or(false)
    }
}
