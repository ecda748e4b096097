//! Zoom-on-grab options and geometry.
//!
//! The zoomed image is laid over the preview at its natural size (times
//! `magnify`) and shifted so that the point under the pointer lines up with
//! the same point of the preview.

use serde::{Deserialize, Serialize};

/// Which gesture shows the zoomed image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ZoomTrigger {
    /// Zoom while the mouse button is held down
    #[default]
    Grab,
    /// Click to zoom, click again or leave to stop
    Click,
    /// Click to zoom, click again to stop
    Toggle,
    /// Zoom while hovering
    Mouseover,
}

/// Pointer events that can change whether zoom is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEvent {
    /// Button pressed inside the preview
    Press,
    /// Button released anywhere in the document
    Release,
    /// Click inside the preview
    Click,
    /// Pointer entered the preview
    Enter,
    /// Pointer left the preview
    Leave,
}

impl ZoomTrigger {
    /// Whether zoom is shown after `event`, given whether it was shown before.
    pub fn next_visible(self, visible: bool, event: PointerEvent) -> bool {
        match (self, event) {
            (ZoomTrigger::Grab, PointerEvent::Press) => true,
            (ZoomTrigger::Grab, PointerEvent::Release) => false,
            (ZoomTrigger::Click | ZoomTrigger::Toggle, PointerEvent::Click) => !visible,
            (ZoomTrigger::Click, PointerEvent::Leave) => false,
            (ZoomTrigger::Mouseover, PointerEvent::Enter) => true,
            (ZoomTrigger::Mouseover, PointerEvent::Leave) => false,
            _ => visible,
        }
    }
}

/// Overlay change requested by [`ZoomState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomAction {
    /// Size and fade in the zoom image
    Show,
    /// Fade out the zoom image
    Hide,
    /// Zoom is wanted but the image has no size yet; show it on load
    WaitForLoad,
    /// Nothing to change
    Nothing,
}

/// Whether the zoom overlay is shown, including a show that is waiting for
/// the zoom image to finish loading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZoomState {
    trigger: ZoomTrigger,
    visible: bool,
    awaiting_load: bool,
}

impl ZoomState {
    pub fn new(trigger: ZoomTrigger) -> Self {
        Self {
            trigger,
            visible: false,
            awaiting_load: false,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Whether zoom is shown or about to be.
    pub fn is_wanted(&self) -> bool {
        self.visible || self.awaiting_load
    }

    /// Apply a pointer event through the trigger rules.
    pub fn pointer_event(&mut self, event: PointerEvent, loaded: bool) -> ZoomAction {
        let wanted = self.trigger.next_visible(self.is_wanted(), event);
        self.request(wanted, loaded)
    }

    /// Ask for zoom to be shown or hidden, whatever the trigger.
    pub fn request(&mut self, wanted: bool, loaded: bool) -> ZoomAction {
        if !wanted {
            self.awaiting_load = false;
            if self.visible {
                self.visible = false;
                return ZoomAction::Hide;
            }
            return ZoomAction::Nothing;
        }
        if self.visible {
            ZoomAction::Nothing
        } else if loaded {
            self.visible = true;
            self.awaiting_load = false;
            ZoomAction::Show
        } else {
            self.awaiting_load = true;
            ZoomAction::WaitForLoad
        }
    }

    /// The zoom image finished loading.
    pub fn image_loaded(&mut self) -> ZoomAction {
        if self.awaiting_load {
            self.request(true, true)
        } else {
            ZoomAction::Nothing
        }
    }
}

/// Options for the zoom interaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ZoomOptions {
    /// Gesture that shows the zoom
    pub on: ZoomTrigger,
    /// Multiplier applied to the image's natural size
    pub magnify: f64,
    /// Fade in/out duration in milliseconds
    pub duration: u32,
    /// Whether touch gestures also zoom
    pub touch: bool,
    /// Alternate source for the zoomed image
    pub url: Option<String>,
}

impl Default for ZoomOptions {
    fn default() -> Self {
        Self {
            on: ZoomTrigger::Grab,
            magnify: 1.0,
            duration: 120,
            touch: true,
            url: None,
        }
    }
}

/// Sizes of the preview box and the zoomed image laid over it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomGeometry {
    pub base_width: f64,
    pub base_height: f64,
    pub zoom_width: f64,
    pub zoom_height: f64,
}

impl ZoomGeometry {
    /// Geometry for a preview of `base` size showing an image whose natural
    /// size is `natural`, magnified by `magnify`.
    pub fn new(base: (f64, f64), natural: (f64, f64), magnify: f64) -> Self {
        Self {
            base_width: base.0,
            base_height: base.1,
            zoom_width: natural.0 * magnify,
            zoom_height: natural.1 * magnify,
        }
    }

    /// Offset (`left`, `top`) of the zoomed image for a pointer at (`x`, `y`)
    /// relative to the preview's top-left corner.
    ///
    /// Pointer positions outside the preview are clamped to its edges.
    pub fn offset_at(&self, x: f64, y: f64) -> (f64, f64) {
        (
            offset_1d(x, self.base_width, self.zoom_width),
            offset_1d(y, self.base_height, self.zoom_height),
        )
    }
}

fn offset_1d(pos: f64, base: f64, zoomed: f64) -> f64 {
    if base <= 0.0 {
        return 0.0;
    }
    let pos = pos.clamp(0.0, base);
    let ratio = (zoomed - base) / base;
    // Adding 0.0 turns -0.0 into 0.0 so the style never gets "-0px"
    -pos * ratio + 0.0
}
