//! Component definitions for the design canvas.

mod button;
mod group;
mod input_field;
mod rectangle;
mod text_label;

pub use button::Button;
pub use group::Group;
pub use input_field::InputField;
pub use rectangle::Rectangle;
pub use text_label::TextLabel;

use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for components.
pub type ComponentId = Uuid;

/// Minimum width/height a component may be resized to.
pub const MIN_COMPONENT_SIZE: f64 = 10.0;

/// Position offset applied to duplicated components.
pub const CLONE_OFFSET: f64 = 20.0;

/// The closed set of component kinds understood by the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentType {
    Rectangle,
    Button,
    Input,
    Text,
    Group,
}

impl ComponentType {
    /// All known component types.
    pub const ALL: [ComponentType; 5] = [
        ComponentType::Rectangle,
        ComponentType::Button,
        ComponentType::Input,
        ComponentType::Text,
        ComponentType::Group,
    ];

    /// The wire/palette name of this type.
    pub fn name(&self) -> &'static str {
        match self {
            ComponentType::Rectangle => "rectangle",
            ComponentType::Button => "button",
            ComponentType::Input => "input",
            ComponentType::Text => "text",
            ComponentType::Group => "group",
        }
    }

    /// Parse a wire/palette name.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "rectangle" => Some(ComponentType::Rectangle),
            "button" => Some(ComponentType::Button),
            "input" => Some(ComponentType::Input),
            "text" => Some(ComponentType::Text),
            "group" => Some(ComponentType::Group),
            _ => None,
        }
    }
}

/// Font weight options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    #[default]
    Normal,
    Bold,
}

/// Horizontal text alignment for text labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

/// Visual properties shared by every component.
///
/// Colors are hex strings (`"#rrggbb"`); an empty string means
/// none/transparent, which is how text labels render without a background.
#[derive(Debug, Clone, PartialEq)]
pub struct Style {
    pub fill_color: String,
    pub border_color: String,
    pub border_width: u32,
    pub text_color: String,
    pub font_family: String,
    pub font_size: u32,
    pub font_weight: FontWeight,
    /// Corner radius; the renderer clamps it to half the smaller side.
    pub corner_radius: u32,
    /// Overall opacity (0.0–1.0). Persisted but not consulted by core logic.
    pub opacity: f64,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            fill_color: "#3b82f6".to_string(),
            border_color: "#1e40af".to_string(),
            border_width: 2,
            text_color: "#ffffff".to_string(),
            font_family: "Arial".to_string(),
            font_size: 12,
            font_weight: FontWeight::Normal,
            corner_radius: 0,
            opacity: 1.0,
        }
    }
}

/// Common trait for all components.
pub trait ComponentTrait {
    /// Get the unique identifier.
    fn id(&self) -> ComponentId;

    /// Get the component type.
    fn component_type(&self) -> ComponentType;

    /// Get the bounding box in canvas coordinates.
    fn bounds(&self) -> Rect;

    /// Check if a point hits this component. Edges count as inside.
    fn hit_test(&self, point: Point) -> bool {
        let b = self.bounds();
        point.x >= b.x0 && point.x <= b.x1 && point.y >= b.y0 && point.y <= b.y1
    }

    /// Translate the component by an offset. Positions are not clamped;
    /// components may move off-canvas or negative.
    fn move_by(&mut self, dx: f64, dy: f64);

    /// Resize the component, clamping each axis to [`MIN_COMPONENT_SIZE`].
    fn resize(&mut self, width: f64, height: f64);

    /// Set the absolute position of the top-left corner.
    fn set_position(&mut self, x: f64, y: f64);

    /// Get the style.
    fn style(&self) -> &Style;

    /// Get mutable style.
    fn style_mut(&mut self) -> &mut Style;

    /// Get the text content.
    fn text(&self) -> &str;

    /// Set the text content.
    fn set_text(&mut self, text: &str);
}

/// Enum wrapper for all component types.
#[derive(Debug, Clone, PartialEq)]
pub enum Component {
    Rectangle(Rectangle),
    Button(Button),
    Input(InputField),
    Text(TextLabel),
    Group(Group),
}

impl Component {
    /// Construct a component of the given type at a position, with the
    /// type's default size, colors and text.
    pub fn create(component_type: ComponentType, x: f64, y: f64) -> Self {
        match component_type {
            ComponentType::Rectangle => Component::Rectangle(Rectangle::new(x, y)),
            ComponentType::Button => Component::Button(Button::new(x, y)),
            ComponentType::Input => Component::Input(InputField::new(x, y)),
            ComponentType::Text => Component::Text(TextLabel::new(x, y)),
            ComponentType::Group => Component::Group(Group::empty(x, y)),
        }
    }

    pub fn x(&self) -> f64 {
        self.bounds().x0
    }

    pub fn y(&self) -> f64 {
        self.bounds().y0
    }

    pub fn width(&self) -> f64 {
        self.bounds().width()
    }

    pub fn height(&self) -> f64 {
        self.bounds().height()
    }

    /// Center point of the bounding box.
    pub fn center(&self) -> Point {
        self.bounds().center()
    }

    /// Check if this component is a group.
    pub fn is_group(&self) -> bool {
        matches!(self, Component::Group(_))
    }

    /// Get the group if this component is a group.
    pub fn as_group(&self) -> Option<&Group> {
        match self {
            Component::Group(g) => Some(g),
            _ => None,
        }
    }

    /// Get the mutable group if this component is a group.
    pub fn as_group_mut(&mut self) -> Option<&mut Group> {
        match self {
            Component::Group(g) => Some(g),
            _ => None,
        }
    }

    /// Produce an independent copy with fresh identifiers, offset by
    /// [`CLONE_OFFSET`] from the original. Group children are cloned
    /// recursively and receive new ids as well.
    pub fn duplicated(&self) -> Component {
        let mut copy = self.clone();
        copy.regenerate_ids();
        copy.move_by(CLONE_OFFSET, CLONE_OFFSET);
        copy
    }

    /// Assign new unique ids to this component and, for groups, every
    /// descendant. Used when duplicating or pasting.
    pub(crate) fn regenerate_ids(&mut self) {
        match self {
            Component::Rectangle(c) => c.id = Uuid::new_v4(),
            Component::Button(c) => c.id = Uuid::new_v4(),
            Component::Input(c) => c.id = Uuid::new_v4(),
            Component::Text(c) => c.id = Uuid::new_v4(),
            Component::Group(g) => {
                g.id = Uuid::new_v4();
                g.group_id = Uuid::new_v4();
                for child in g.children_mut() {
                    child.regenerate_ids();
                }
            }
        }
    }
}

impl ComponentTrait for Component {
    fn id(&self) -> ComponentId {
        match self {
            Component::Rectangle(c) => c.id(),
            Component::Button(c) => c.id(),
            Component::Input(c) => c.id(),
            Component::Text(c) => c.id(),
            Component::Group(c) => c.id(),
        }
    }

    fn component_type(&self) -> ComponentType {
        match self {
            Component::Rectangle(c) => c.component_type(),
            Component::Button(c) => c.component_type(),
            Component::Input(c) => c.component_type(),
            Component::Text(c) => c.component_type(),
            Component::Group(c) => c.component_type(),
        }
    }

    fn bounds(&self) -> Rect {
        match self {
            Component::Rectangle(c) => c.bounds(),
            Component::Button(c) => c.bounds(),
            Component::Input(c) => c.bounds(),
            Component::Text(c) => c.bounds(),
            Component::Group(c) => c.bounds(),
        }
    }

    fn hit_test(&self, point: Point) -> bool {
        match self {
            Component::Rectangle(c) => c.hit_test(point),
            Component::Button(c) => c.hit_test(point),
            Component::Input(c) => c.hit_test(point),
            Component::Text(c) => c.hit_test(point),
            Component::Group(c) => c.hit_test(point),
        }
    }

    fn move_by(&mut self, dx: f64, dy: f64) {
        match self {
            Component::Rectangle(c) => c.move_by(dx, dy),
            Component::Button(c) => c.move_by(dx, dy),
            Component::Input(c) => c.move_by(dx, dy),
            Component::Text(c) => c.move_by(dx, dy),
            Component::Group(c) => c.move_by(dx, dy),
        }
    }

    fn resize(&mut self, width: f64, height: f64) {
        match self {
            Component::Rectangle(c) => c.resize(width, height),
            Component::Button(c) => c.resize(width, height),
            Component::Input(c) => c.resize(width, height),
            Component::Text(c) => c.resize(width, height),
            Component::Group(c) => c.resize(width, height),
        }
    }

    fn set_position(&mut self, x: f64, y: f64) {
        match self {
            Component::Rectangle(c) => c.set_position(x, y),
            Component::Button(c) => c.set_position(x, y),
            Component::Input(c) => c.set_position(x, y),
            Component::Text(c) => c.set_position(x, y),
            Component::Group(c) => c.set_position(x, y),
        }
    }

    fn style(&self) -> &Style {
        match self {
            Component::Rectangle(c) => c.style(),
            Component::Button(c) => c.style(),
            Component::Input(c) => c.style(),
            Component::Text(c) => c.style(),
            Component::Group(c) => c.style(),
        }
    }

    fn style_mut(&mut self) -> &mut Style {
        match self {
            Component::Rectangle(c) => c.style_mut(),
            Component::Button(c) => c.style_mut(),
            Component::Input(c) => c.style_mut(),
            Component::Text(c) => c.style_mut(),
            Component::Group(c) => c.style_mut(),
        }
    }

    fn text(&self) -> &str {
        match self {
            Component::Rectangle(c) => c.text(),
            Component::Button(c) => c.text(),
            Component::Input(c) => c.text(),
            Component::Text(c) => c.text(),
            Component::Group(c) => c.text(),
        }
    }

    fn set_text(&mut self, text: &str) {
        match self {
            Component::Rectangle(c) => c.set_text(text),
            Component::Button(c) => c.set_text(text),
            Component::Input(c) => c.set_text(text),
            Component::Text(c) => c.set_text(text),
            Component::Group(c) => c.set_text(text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_names_round_trip() {
        for ty in ComponentType::ALL {
            assert_eq!(ComponentType::parse(ty.name()), Some(ty));
        }
        assert_eq!(ComponentType::parse("ellipse"), None);
    }

    #[test]
    fn test_create_dispatches_by_type() {
        let c = Component::create(ComponentType::Button, 10.0, 20.0);
        assert_eq!(c.component_type(), ComponentType::Button);
        assert!((c.x() - 10.0).abs() < f64::EPSILON);
        assert!((c.y() - 20.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_hit_test_includes_edges() {
        let c = Component::create(ComponentType::Rectangle, 0.0, 0.0);
        assert!(c.hit_test(Point::new(0.0, 0.0)));
        assert!(c.hit_test(Point::new(120.0, 80.0)));
        assert!(!c.hit_test(Point::new(120.1, 80.0)));
    }

    #[test]
    fn test_duplicated_gets_new_id_and_offset() {
        let original = Component::create(ComponentType::Rectangle, 50.0, 60.0);
        let copy = original.duplicated();

        assert_ne!(copy.id(), original.id());
        assert!((copy.x() - 70.0).abs() < f64::EPSILON);
        assert!((copy.y() - 80.0).abs() < f64::EPSILON);
        assert_eq!(copy.width(), original.width());
        assert_eq!(copy.style(), original.style());
        assert_eq!(copy.text(), original.text());
    }

    #[test]
    fn test_duplicated_group_regenerates_child_ids() {
        let a = Component::create(ComponentType::Rectangle, 0.0, 0.0);
        let b = Component::create(ComponentType::Button, 200.0, 200.0);
        let child_ids = [a.id(), b.id()];
        let group = Component::Group(Group::new(vec![a, b]));

        let copy = group.duplicated();
        let copied = copy.as_group().unwrap();
        for child in copied.children() {
            assert!(!child_ids.contains(&child.id()));
        }
    }
}
