pub mod swipe_button;

pub use swipe_button::SwipeButton;
