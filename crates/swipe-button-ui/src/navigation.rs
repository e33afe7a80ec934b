/// Final side effect of a completed swipe.
pub trait Navigator {
    fn navigate(&self, url: &str);
}
