use swipe_button_ui::Navigator;
use web_sys::Window;

/// Navigates by assigning `location.href`.
pub struct LocationNavigator {
    window: Window,
}

impl LocationNavigator {
    pub fn new(window: Window) -> Self {
        Self { window }
    }
}

impl Navigator for LocationNavigator {
    fn navigate(&self, url: &str) {
        log::info!("navigating to {url}");
        if let Err(err) = self.window.location().set_href(url) {
            log::error!("failed to navigate to {url}: {err:?}");
        }
    }
}
