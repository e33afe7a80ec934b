//! Class names of the markup the widget renders.
//!
//! Block/element names derived from [`BASE_CLASS_NAME`]; stylesheets target
//! these.

pub const BASE_CLASS_NAME: &str = "btn-swipe";

pub const CONTAINER: &str = "btn-swipe__container";
pub const WRAPPER: &str = "btn-swipe__wrapper";
pub const NOTE: &str = "btn-swipe__note";
pub const LINK: &str = "btn-swipe__link";
pub const TOGGLER: &str = "btn-swipe__link__toggler";
pub const LABEL: &str = "btn-swipe__link__label";

/// Elements whose default click action the drag takes priority over.
pub const INTERACTIVE_SELECTOR: &str = "a, button";

/// Host nodes that get a swipe button on page load.
pub fn install_selector() -> String {
    selector(BASE_CLASS_NAME)
}

pub fn selector(class_name: &str) -> String {
    format!(".{class_name}")
}

/// Wrapper classes, with the host's extra styling class appended.
pub fn wrapper(extra_class: Option<&str>) -> String {
    match extra_class.map(str::trim).filter(|class| !class.is_empty()) {
        Some(extra) => format!("{WRAPPER} {extra}"),
        None => WRAPPER.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn element_names_follow_base_class() {
        for name in [CONTAINER, WRAPPER, NOTE, LINK, TOGGLER, LABEL] {
            assert!(name.starts_with(BASE_CLASS_NAME), "{name}");
        }
        assert!(TOGGLER.starts_with(LINK));
        assert_eq!(install_selector(), ".btn-swipe");
    }

    #[test]
    fn wrapper_appends_extra_class() {
        assert_eq!(wrapper(Some("btn-swipe--danger")), "btn-swipe__wrapper btn-swipe--danger");
        assert_eq!(wrapper(Some("  ")), "btn-swipe__wrapper");
        assert_eq!(wrapper(None), "btn-swipe__wrapper");
    }
}
