use leptos::queue_microtask;
use leptos_router::NavigateOptions;
use noty::Navigator;

/// Router navigation that runs after the current handler has returned.
///
/// Creating a page happens inside a signal update, and the route change
/// unmounts the page list that owns that signal.
#[derive(Clone)]
pub struct DeferredNavigator<F>
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    navigate: F,
}

impl<F> DeferredNavigator<F>
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    pub fn new(navigate: F) -> Self {
        Self { navigate }
    }
}

impl<F> Navigator for DeferredNavigator<F>
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    fn navigate(&self, path: &str) {
        let navigate = self.navigate.clone();
        let path = path.to_string();
        queue_microtask(move || navigate(&path, NavigateOptions::default()));
    }
}
