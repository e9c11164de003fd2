//! Lazily loaded views.

use std::fmt;
use std::sync::{Arc, OnceLock};

use crate::views::Page;

type Loader = Box<dyn Fn() -> Arc<dyn Page> + Send + Sync>;

/// A handle that builds its page on first use and hands out the same page
/// afterwards.
pub struct LazyView {
    loader: Loader,
    page: OnceLock<Arc<dyn Page>>,
}

impl LazyView {
    pub fn new<F>(loader: F) -> Self
    where
        F: Fn() -> Arc<dyn Page> + Send + Sync + 'static,
    {
        Self {
            loader: Box::new(loader),
            page: OnceLock::new(),
        }
    }

    /// A view for a page type with a default constructor.
    pub fn of<P>() -> Self
    where
        P: Page + Default + 'static,
    {
        Self::new(|| Arc::new(P::default()))
    }

    /// The page, loading it if this is the first request.
    pub fn get(&self) -> Arc<dyn Page> {
        self.page
            .get_or_init(|| {
                let page = (self.loader)();
                tracing::debug!(title = page.title(), "View loaded");
                page
            })
            .clone()
    }

    pub fn is_loaded(&self) -> bool {
        self.page.get().is_some()
    }
}

impl fmt::Debug for LazyView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LazyView")
            .field("loaded", &self.is_loaded())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use crate::views::ReaderManagePage;

    #[test]
    fn test_loads_once() {
        let loads = Arc::new(AtomicUsize::new(0));
        let counter = loads.clone();
        let view = LazyView::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
            Arc::new(ReaderManagePage)
        });

        assert!(!view.is_loaded());
        assert_eq!(loads.load(Ordering::SeqCst), 0);

        let first = view.get();
        let second = view.get();
        assert!(view.is_loaded());
        assert_eq!(loads.load(Ordering::SeqCst), 1);
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_concurrent_first_use_yields_one_page() {
        let view = Arc::new(LazyView::of::<ReaderManagePage>());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let view = view.clone();
                std::thread::spawn(move || view.get())
            })
            .collect();

        let pages: Vec<Arc<dyn Page>> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert!(pages.windows(2).all(|w| Arc::ptr_eq(&w[0], &w[1])));
    }
}
