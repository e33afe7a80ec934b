//! DOM rendering of the swipe button.
//!
//! ```text
//! div.btn-swipe__container
//! └─ div.btn-swipe__wrapper [extra class]
//!    ├─ a.btn-swipe__link[href]          (the track)
//!    │  ├─ span.btn-swipe__link__toggler (the handle)
//!    │  └─ span.btn-swipe__link__label
//!    └─ div.btn-swipe__note
//! ```

use swipe_button_foundation::TrackMetrics;
use swipe_button_graphics::{EdgeInsets, Point, Rect, Size};
use swipe_button_ui::{class_names, MountError, SwipeButtonOptions, SwipeView};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, Window};

pub struct DomView {
    window: Window,
    /// The host control the view replaces.
    node: HtmlElement,
    container: HtmlElement,
    link: HtmlElement,
    toggler: HtmlElement,
}

impl DomView {
    /// Builds the detached element tree for `node`.
    pub fn build(
        window: &Window,
        document: &Document,
        node: HtmlElement,
        options: &SwipeButtonOptions,
    ) -> Result<Self, JsValue> {
        let container = create(document, "div", class_names::CONTAINER)?;
        let wrapper = create(
            document,
            "div",
            &class_names::wrapper(options.extra_class.as_deref()),
        )?;

        let note = create(document, "div", class_names::NOTE)?;
        note.set_text_content(options.note.as_deref());

        let link = create(document, "a", class_names::LINK)?;
        if let Some(url) = &options.target_url {
            link.set_attribute("href", url)?;
        }
        let toggler = create(document, "span", class_names::TOGGLER)?;
        let label = create(document, "span", class_names::LABEL)?;
        label.set_text_content(Some(&options.label));

        link.append_child(&toggler)?;
        link.append_child(&label)?;
        wrapper.append_child(&link)?;
        wrapper.append_child(&note)?;
        container.append_child(&wrapper)?;

        Ok(Self {
            window: window.clone(),
            node,
            container,
            link,
            toggler,
        })
    }

    /// The element presses and clicks are read from.
    pub fn track(&self) -> &HtmlElement {
        &self.link
    }

    fn padding_right(&self) -> Result<f32, JsValue> {
        let style = self
            .window
            .get_computed_style(&self.link)?
            .ok_or("no computed style for track")?;
        Ok(parse_css_px(&style.get_property_value("padding-right")?))
    }
}

impl SwipeView for DomView {
    fn measure(&self) -> Option<TrackMetrics> {
        if !self.container.is_connected() {
            return None;
        }
        let track = client_rect(&self.link);
        let handle = client_rect(&self.toggler);
        let padding = self.padding_right().unwrap_or_else(|err| {
            log::error!("failed to read track padding: {err:?}");
            0.0
        });
        Some(TrackMetrics::from_layout(
            track.size(),
            handle.size(),
            EdgeInsets::horizontal(padding),
        ))
    }

    fn render_offset(&mut self, offset: f32) {
        log::trace!("handle left = {offset}px");
        if let Err(err) = self
            .toggler
            .style()
            .set_property("left", &format!("{offset}px"))
        {
            log::error!("failed to position handle: {err:?}");
        }
    }

    fn mount(&mut self) -> Result<(), MountError> {
        let parent = self.node.parent_node().ok_or(MountError::Detached)?;
        parent
            .insert_before(&self.container, Some(&self.node))
            .map_err(host_error)?;
        if let Err(err) = self.node.style().set_property("display", "none") {
            self.container.remove();
            return Err(host_error(err));
        }
        Ok(())
    }

    fn unmount(&mut self) {
        self.container.remove();
        if let Err(err) = self.node.style().set_property("display", "") {
            log::error!("failed to restore host node: {err:?}");
        }
    }
}

fn host_error(err: JsValue) -> MountError {
    MountError::Host(format!("{err:?}"))
}

fn client_rect(element: &Element) -> Rect {
    let rect = element.get_bounding_client_rect();
    Rect::from_origin_size(
        Point::new(rect.x() as f32, rect.y() as f32),
        Size::new(rect.width() as f32, rect.height() as f32),
    )
}

fn create(document: &Document, tag: &str, class_name: &str) -> Result<HtmlElement, JsValue> {
    let element = document.create_element(tag)?;
    element.set_class_name(class_name);
    Ok(element.dyn_into::<HtmlElement>()?)
}

/// Pixel value of a computed CSS length such as `"12.5px"`; 0 when the value
/// has no number in it.
pub fn parse_css_px(value: &str) -> f32 {
    let digits: String = value
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    digits.parse::<f32>().unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::parse_css_px;

    #[test]
    fn parses_computed_lengths() {
        assert_eq!(parse_css_px("12px"), 12.0);
        assert_eq!(parse_css_px("4.5px"), 4.5);
        assert_eq!(parse_css_px(""), 0.0);
        assert_eq!(parse_css_px("auto"), 0.0);
    }
}
