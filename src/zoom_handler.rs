//! Zoom-on-grab interaction for the preview image.
//!
//! A second copy of the image is laid over the preview at full resolution and
//! faded in while the configured gesture is active. Moving the pointer pans it
//! so that the area under the pointer is what gets magnified.

use std::cell::RefCell;
use std::rc::Rc;

use preview_core::{
    PointerEvent, Result, ZoomAction, ZoomGeometry, ZoomOptions, ZoomState, ZoomTrigger,
};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Event, EventTarget, HtmlElement, HtmlImageElement, MouseEvent, TouchEvent};

use crate::dom::{self, js_error};

pub struct ZoomHandler {
    wrapper: HtmlElement,
    zoom_image: HtmlImageElement,
    magnify: f64,
    state: ZoomState,
    geometry: Option<ZoomGeometry>,
    last_client: Option<(f64, f64)>,
}

impl ZoomHandler {
    /// Attach zoom to `wrapper`, showing `source` as the magnified image.
    ///
    /// The listeners live as long as the page.
    pub fn install(
        document: &Document,
        wrapper: &HtmlElement,
        source: &str,
        options: &ZoomOptions,
    ) -> Result<()> {
        dom::set_styles(
            &wrapper.style(),
            &[("position", "relative"), ("overflow", "hidden")],
        )?;

        let zoom_image: HtmlImageElement = dom::create(document, "img")?;
        zoom_image.set_src(source);
        zoom_image.set_alt("");
        zoom_image
            .set_attribute("role", "presentation")
            .map_err(js_error)?;
        let transition = format!("opacity {}ms", options.duration);
        dom::set_styles(
            &zoom_image.style(),
            &[
                ("position", "absolute"),
                ("top", "0"),
                ("left", "0"),
                ("opacity", "0"),
                ("border", "none"),
                ("max-width", "none"),
                ("max-height", "none"),
                ("pointer-events", "none"),
                ("transition", transition.as_str()),
            ],
        )?;
        wrapper.append_child(&zoom_image).map_err(js_error)?;

        let trigger = options.on;
        let load_target = zoom_image.clone();
        let handler = Rc::new(RefCell::new(Self {
            wrapper: wrapper.clone(),
            zoom_image,
            magnify: options.magnify,
            state: ZoomState::new(trigger),
            geometry: None,
            last_client: None,
        }));

        // A gesture may start before the full-size image has arrived
        listen(&load_target, "load", &handler, |h, _: Event| {
            h.image_loaded();
        })?;

        listen(wrapper, "mousedown", &handler, move |h, e: MouseEvent| {
            if trigger == ZoomTrigger::Grab {
                // Keep the browser from starting a native image drag
                e.prevent_default();
            }
            h.pointer_event(PointerEvent::Press, Some(client_pos(&e)));
        })?;
        listen(document, "mouseup", &handler, |h, _: MouseEvent| {
            h.pointer_event(PointerEvent::Release, None);
        })?;
        listen(document, "mousemove", &handler, |h, e: MouseEvent| {
            h.pointer_moved(client_pos(&e));
        })?;
        listen(wrapper, "click", &handler, |h, e: MouseEvent| {
            h.pointer_event(PointerEvent::Click, Some(client_pos(&e)));
        })?;
        listen(wrapper, "mouseenter", &handler, |h, e: MouseEvent| {
            h.pointer_event(PointerEvent::Enter, Some(client_pos(&e)));
        })?;
        listen(wrapper, "mouseleave", &handler, |h, _: MouseEvent| {
            h.pointer_event(PointerEvent::Leave, None);
        })?;

        if options.touch {
            listen(wrapper, "touchstart", &handler, |h, e: TouchEvent| {
                e.prevent_default();
                h.set_visible(true);
                if let Some(pos) = touch_pos(&e) {
                    h.pointer_moved(pos);
                }
            })?;
            listen(wrapper, "touchmove", &handler, |h, e: TouchEvent| {
                e.prevent_default();
                if let Some(pos) = touch_pos(&e) {
                    h.pointer_moved(pos);
                }
            })?;
            listen(wrapper, "touchend", &handler, |h, _: TouchEvent| {
                h.set_visible(false);
            })?;
        }

        log::debug!("Zoom installed ({:?})", trigger);
        Ok(())
    }

    fn pointer_event(&mut self, event: PointerEvent, client: Option<(f64, f64)>) {
        let action = self.state.pointer_event(event, self.is_loaded());
        self.apply(action);
        if let Some(client) = client {
            self.pointer_moved(client);
        }
    }

    fn set_visible(&mut self, visible: bool) {
        let action = self.state.request(visible, self.is_loaded());
        self.apply(action);
    }

    fn image_loaded(&mut self) {
        let action = self.state.image_loaded();
        self.apply(action);
        if let Some(client) = self.last_client {
            self.pointer_moved(client);
        }
    }

    fn is_loaded(&self) -> bool {
        self.zoom_image.natural_width() > 0 && self.zoom_image.natural_height() > 0
    }

    fn apply(&mut self, action: ZoomAction) {
        match action {
            ZoomAction::Show => self.show(),
            ZoomAction::Hide => self.hide(),
            ZoomAction::WaitForLoad => log::debug!("Zoom image not loaded yet, waiting"),
            ZoomAction::Nothing => {}
        }
    }

    fn show(&mut self) {
        let natural = (
            f64::from(self.zoom_image.natural_width()),
            f64::from(self.zoom_image.natural_height()),
        );
        let base = (
            f64::from(self.wrapper.offset_width()),
            f64::from(self.wrapper.offset_height()),
        );
        let geometry = ZoomGeometry::new(base, natural, self.magnify);

        let width = px(geometry.zoom_width);
        let height = px(geometry.zoom_height);
        let result = dom::set_styles(
            &self.zoom_image.style(),
            &[
                ("width", width.as_str()),
                ("height", height.as_str()),
                ("opacity", "1"),
            ],
        );
        if let Err(e) = result {
            log::warn!("Failed to show zoom: {}", e);
        }
        self.geometry = Some(geometry);
    }

    fn hide(&mut self) {
        if let Err(e) = dom::set_style(&self.zoom_image.style(), "opacity", "0") {
            log::warn!("Failed to hide zoom: {}", e);
        }
    }

    fn pointer_moved(&mut self, client: (f64, f64)) {
        self.last_client = Some(client);
        let Some(geometry) = self.geometry.filter(|_| self.state.is_visible()) else {
            return;
        };
        let rect = self.wrapper.get_bounding_client_rect();
        let (left, top) = geometry.offset_at(client.0 - rect.left(), client.1 - rect.top());

        let (left, top) = (px(left), px(top));
        let style = self.zoom_image.style();
        if let Err(e) = dom::set_styles(&style, &[("left", left.as_str()), ("top", top.as_str())]) {
            log::warn!("Failed to move zoom: {}", e);
        }
    }
}

fn listen<E, F>(
    target: &EventTarget,
    event: &str,
    handler: &Rc<RefCell<ZoomHandler>>,
    f: F,
) -> Result<()>
where
    E: JsCast + 'static,
    F: Fn(&mut ZoomHandler, E) + 'static,
{
    let handler = Rc::clone(handler);
    let closure = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        if let Ok(event) = event.dyn_into::<E>() {
            f(&mut handler.borrow_mut(), event);
        }
    });
    target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .map_err(js_error)?;
    closure.forget();
    Ok(())
}

fn client_pos(event: &MouseEvent) -> (f64, f64) {
    (f64::from(event.client_x()), f64::from(event.client_y()))
}

fn touch_pos(event: &TouchEvent) -> Option<(f64, f64)> {
    let touch = event.touches().get(0)?;
    Some((f64::from(touch.client_x()), f64::from(touch.client_y())))
}

fn px(value: f64) -> String {
    format!("{}px", value)
}
