// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The widget contract: measure, layout, paint, input, semantics, destroy.

use kurbo::{Point, Rect, Size, Vec2};
use understory_flex::MeasureSpec;

use crate::WidgetError;

bitflags::bitflags! {
    /// Widget state flags.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct WidgetFlags: u8 {
        /// The widget can take keyboard focus.
        const FOCUSABLE = 0b0000_0001;
        /// The widget ignores input and reports itself disabled.
        const DISABLED  = 0b0000_0010;
        /// The widget is not drawn.
        const HIDDEN    = 0b0000_0100;
    }
}

bitflags::bitflags! {
    /// Accessibility state flags.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct SemanticFlags: u8 {
        /// Disabled.
        const DISABLED  = 0b0000_0001;
        /// Selected.
        const SELECTED  = 0b0000_0010;
        /// Can take focus.
        const FOCUSABLE = 0b0000_0100;
        /// Has focus.
        const FOCUSED   = 0b0000_1000;
    }
}

/// Accessibility role.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SemanticRole {
    /// No specific role.
    #[default]
    None,
    /// Push button.
    Button,
    /// Static text.
    Text,
    /// Image.
    Image,
    /// Slider.
    Slider,
    /// Checkbox.
    Checkbox,
    /// On/off switch.
    Switch,
    /// Radio button.
    Radio,
    /// Editable text field.
    TextField,
}

/// Accessibility description of a widget.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Semantics {
    /// Role.
    pub role: SemanticRole,
    /// State flags.
    pub flags: SemanticFlags,
}

/// Straight-alpha RGBA color with channels in `[0, 1]`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Color {
    /// Red.
    pub r: f32,
    /// Green.
    pub g: f32,
    /// Blue.
    pub b: f32,
    /// Alpha.
    pub a: f32,
}

impl Color {
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// Creates a color without checking its channels.
    #[must_use]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Checks that every channel lies in `[0, 1]`.
    pub fn validate(self) -> Result<Self, WidgetError> {
        for (name, value) in [("r", self.r), ("g", self.g), ("b", self.b), ("a", self.a)] {
            if !(0.0..=1.0).contains(&value) {
                return Err(WidgetError::ColorOutOfRange(name));
            }
        }
        Ok(self)
    }
}

/// Drawing sink supplied by the host.
pub trait Painter {
    /// Fill `rect` with `color`.
    fn fill_rect(&mut self, rect: Rect, color: Color) -> Result<(), WidgetError>;
}

/// A pointer sample.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerEvent {
    /// Pointer identifier.
    pub pointer_id: u32,
    /// Position in the widget's coordinate space.
    pub position: Point,
    /// Pressed button mask.
    pub buttons: u32,
    /// Scroll delta, positive toward larger offsets.
    pub scroll_delta: Vec2,
}

/// A keyboard sample.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct KeyEvent {
    /// Platform key code.
    pub key_code: u32,
    /// Modifier mask.
    pub modifiers: u32,
}

/// Input delivered to [`Widget::event`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    /// A pointer button was pressed.
    PointerDown(PointerEvent),
    /// A pointer button was released.
    PointerUp(PointerEvent),
    /// The pointer moved.
    PointerMove(PointerEvent),
    /// A wheel or trackpad scroll.
    PointerScroll(PointerEvent),
    /// A key was pressed.
    KeyDown(KeyEvent),
    /// A key was released.
    KeyUp(KeyEvent),
}

/// Operations a host invokes on a widget.
pub trait Widget {
    /// Desired size under the given constraints.
    fn measure(&self, width: MeasureSpec, height: MeasureSpec) -> Result<Size, WidgetError>;

    /// Assign the widget its bounds.
    fn layout(&mut self, bounds: Rect) -> Result<(), WidgetError>;

    /// Draw the widget.
    fn paint(&self, painter: &mut dyn Painter) -> Result<(), WidgetError>;

    /// Handle input. Returns `true` if the event was consumed.
    fn event(&mut self, event: &InputEvent) -> Result<bool, WidgetError>;

    /// Accessibility description.
    fn semantics(&self) -> Semantics;

    /// Release resources. The widget is inert afterwards.
    fn destroy(&mut self);

    /// State flags.
    fn flags(&self) -> WidgetFlags {
        WidgetFlags::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_channels_are_checked() {
        assert!(Color::new(0.2, 0.4, 0.6, 1.0).validate().is_ok());
        assert_eq!(
            Color::new(0.0, 1.5, 0.0, 1.0).validate(),
            Err(WidgetError::ColorOutOfRange("g"))
        );
        assert_eq!(
            Color::new(0.0, 0.0, 0.0, f32::NAN).validate(),
            Err(WidgetError::ColorOutOfRange("a"))
        );
    }

    #[test]
    fn flag_bits_match_wire_values() {
        assert_eq!(WidgetFlags::DISABLED.bits(), 2);
        assert_eq!(WidgetFlags::HIDDEN.bits(), 4);
        assert_eq!(SemanticFlags::FOCUSED.bits(), 8);
        assert_eq!(Semantics::default().role, SemanticRole::None);
    }
}
