//! Input field component.

use super::{ComponentId, ComponentTrait, ComponentType, Style, MIN_COMPONENT_SIZE};
use kurbo::Rect;
use uuid::Uuid;

/// A single-line text input mockup. Shows its placeholder text while the
/// content is empty.
#[derive(Debug, Clone, PartialEq)]
pub struct InputField {
    pub(crate) id: ComponentId,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub text: String,
    pub style: Style,
    pub placeholder_text: String,
    pub placeholder_color: String,
}

impl InputField {
    pub const DEFAULT_WIDTH: f64 = 200.0;
    pub const DEFAULT_HEIGHT: f64 = 36.0;
    pub const DEFAULT_PLACEHOLDER: &'static str = "Enter text...";

    /// Create an input field with the default size and colors.
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            x,
            y,
            width: Self::DEFAULT_WIDTH,
            height: Self::DEFAULT_HEIGHT,
            text: String::new(),
            style: Style {
                fill_color: "#ffffff".to_string(),
                border_color: "#d1d5db".to_string(),
                text_color: "#374151".to_string(),
                corner_radius: 4,
                ..Style::default()
            },
            placeholder_text: Self::DEFAULT_PLACEHOLDER.to_string(),
            placeholder_color: "#9ca3af".to_string(),
        }
    }

    /// The string a renderer should display: content, or the placeholder
    /// when the content is empty.
    pub fn display_text(&self) -> &str {
        if self.text.is_empty() {
            &self.placeholder_text
        } else {
            &self.text
        }
    }
}

impl ComponentTrait for InputField {
    fn id(&self) -> ComponentId {
        self.id
    }

    fn component_type(&self) -> ComponentType {
        ComponentType::Input
    }

    fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.x + self.width, self.y + self.height)
    }

    fn move_by(&mut self, dx: f64, dy: f64) {
        self.x += dx;
        self.y += dy;
    }

    fn resize(&mut self, width: f64, height: f64) {
        self.width = width.max(MIN_COMPONENT_SIZE);
        self.height = height.max(MIN_COMPONENT_SIZE);
    }

    fn set_position(&mut self, x: f64, y: f64) {
        self.x = x;
        self.y = y;
    }

    fn style(&self) -> &Style {
        &self.style
    }

    fn style_mut(&mut self) -> &mut Style {
        &mut self.style
    }

    fn text(&self) -> &str {
        &self.text
    }

    fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
    }
}
