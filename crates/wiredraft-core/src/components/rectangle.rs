//! Rectangle component.

use super::{ComponentId, ComponentTrait, ComponentType, Style, MIN_COMPONENT_SIZE};
use kurbo::Rect;
use uuid::Uuid;

/// A plain rectangle, the basic building block of a wireframe.
#[derive(Debug, Clone, PartialEq)]
pub struct Rectangle {
    pub(crate) id: ComponentId,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub text: String,
    pub style: Style,
}

impl Rectangle {
    pub const DEFAULT_WIDTH: f64 = 120.0;
    pub const DEFAULT_HEIGHT: f64 = 80.0;

    /// Create a rectangle with the default size and colors.
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            x,
            y,
            width: Self::DEFAULT_WIDTH,
            height: Self::DEFAULT_HEIGHT,
            text: String::new(),
            style: Style {
                fill_color: "#e5e7eb".to_string(),
                border_color: "#6b7280".to_string(),
                corner_radius: 8,
                ..Style::default()
            },
        }
    }
}

impl ComponentTrait for Rectangle {
    fn id(&self) -> ComponentId {
        self.id
    }

    fn component_type(&self) -> ComponentType {
        ComponentType::Rectangle
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
