//! Group component for manipulating several components as one unit.

use super::{Component, ComponentId, ComponentTrait, ComponentType, Style, MIN_COMPONENT_SIZE};
use kurbo::{Point, Rect};
use uuid::Uuid;

/// A group of components. Groups own their children; a group's frame is
/// always the axis-aligned bounding box of its children (100×100 when
/// empty). Groups can contain other groups.
#[derive(Debug, Clone, PartialEq)]
pub struct Group {
    pub(crate) id: ComponentId,
    /// Distinct group identifier, separate from the component id.
    pub(crate) group_id: Uuid,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub text: String,
    /// Style is carried for serialization parity but groups draw only
    /// through their children.
    pub style: Style,
    children: Vec<Component>,
}

impl Group {
    pub const DEFAULT_WIDTH: f64 = 100.0;
    pub const DEFAULT_HEIGHT: f64 = 100.0;

    /// Create a group from existing components. The frame is the tight
    /// bounding box of the children.
    pub fn new(children: Vec<Component>) -> Self {
        let (x, y, width, height) = match Self::bounds_of(&children) {
            Some(b) => (b.x0, b.y0, b.width(), b.height()),
            None => (0.0, 0.0, Self::DEFAULT_WIDTH, Self::DEFAULT_HEIGHT),
        };
        Self {
            id: Uuid::new_v4(),
            group_id: Uuid::new_v4(),
            x,
            y,
            width,
            height,
            text: Self::default_text(children.len()),
            style: Style::default(),
            children,
        }
    }

    /// Create an empty group at a position with the default frame size.
    pub fn empty(x: f64, y: f64) -> Self {
        let mut group = Self::new(Vec::new());
        group.x = x;
        group.y = y;
        group
    }

    /// Reconstruct a group from persisted parts, keeping the stored frame.
    pub(crate) fn reconstruct(
        id: ComponentId,
        group_id: Uuid,
        frame: Rect,
        text: String,
        style: Style,
        children: Vec<Component>,
    ) -> Self {
        Self {
            id,
            group_id,
            x: frame.x0,
            y: frame.y0,
            width: frame.width(),
            height: frame.height(),
            text,
            style,
            children,
        }
    }

    fn default_text(count: usize) -> String {
        format!("Group ({count} items)")
    }

    /// Tight bounding box of a component list, or `None` when empty.
    fn bounds_of(children: &[Component]) -> Option<Rect> {
        let mut iter = children.iter();
        let mut bounds = iter.next()?.bounds();
        for child in iter {
            bounds = bounds.union(child.bounds());
        }
        Some(bounds)
    }

    /// The distinct group identifier.
    pub fn group_id(&self) -> Uuid {
        self.group_id
    }

    /// Child components, in z-order.
    pub fn children(&self) -> &[Component] {
        &self.children
    }

    /// Mutable access to the children. Callers that change geometry should
    /// follow up with [`Group::update_bounds`].
    pub fn children_mut(&mut self) -> &mut Vec<Component> {
        &mut self.children
    }

    /// Add a component to the group and refresh the frame. Adding a child
    /// that is already present is a no-op.
    pub fn add_child(&mut self, component: Component) {
        if self.children.iter().any(|c| c.id() == component.id()) {
            return;
        }
        self.children.push(component);
        self.update_bounds();
    }

    /// Remove a child by id, refreshing the frame. Returns the removed
    /// component, or `None` if it was not a direct child.
    pub fn remove_child(&mut self, id: ComponentId) -> Option<Component> {
        let index = self.children.iter().position(|c| c.id() == id)?;
        let child = self.children.remove(index);
        self.update_bounds();
        Some(child)
    }

    /// Dissolve the group, returning its children in order.
    pub fn ungroup(self) -> Vec<Component> {
        self.children
    }

    /// Recompute the frame from the children. Empty groups keep their
    /// current frame.
    pub fn update_bounds(&mut self) {
        if let Some(b) = Self::bounds_of(&self.children) {
            self.x = b.x0;
            self.y = b.y0;
            self.width = b.width();
            self.height = b.height();
        }
    }

    /// Find a component by id within this group, descending into nested
    /// groups.
    pub fn find(&self, id: ComponentId) -> Option<&Component> {
        for child in &self.children {
            if child.id() == id {
                return Some(child);
            }
            if let Component::Group(group) = child {
                if let Some(found) = group.find(id) {
                    return Some(found);
                }
            }
        }
        None
    }

    /// Mutable variant of [`Group::find`].
    pub fn find_mut(&mut self, id: ComponentId) -> Option<&mut Component> {
        for child in &mut self.children {
            if child.id() == id {
                return Some(child);
            }
            if let Component::Group(group) = child {
                if let Some(found) = group.find_mut(id) {
                    return Some(found);
                }
            }
        }
        None
    }

    /// Check whether a component id lives anywhere inside this group.
    pub fn contains_id(&self, id: ComponentId) -> bool {
        self.find(id).is_some()
    }
}

impl ComponentTrait for Group {
    fn id(&self) -> ComponentId {
        self.id
    }

    fn component_type(&self) -> ComponentType {
        ComponentType::Group
    }

    fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.x + self.width, self.y + self.height)
    }

    /// A point hits the group iff it hits some child — clicking the empty
    /// padding inside the frame selects nothing.
    fn hit_test(&self, point: Point) -> bool {
        self.children.iter().any(|child| child.hit_test(point))
    }

    fn move_by(&mut self, dx: f64, dy: f64) {
        for child in &mut self.children {
            child.move_by(dx, dy);
        }
        self.x += dx;
        self.y += dy;
    }

    /// Proportionally rescale every child into the new frame. Children are
    /// still subject to the minimum size, so extreme shrink targets lose
    /// exact proportionality.
    fn resize(&mut self, width: f64, height: f64) {
        if self.children.is_empty() || self.width == 0.0 || self.height == 0.0 {
            return;
        }
        let width = width.max(MIN_COMPONENT_SIZE);
        let height = height.max(MIN_COMPONENT_SIZE);
        let (group_x, group_y) = (self.x, self.y);
        let (old_width, old_height) = (self.width, self.height);

        for child in &mut self.children {
            let b = child.bounds();
            let rel_x = (b.x0 - group_x) / old_width;
            let rel_y = (b.y0 - group_y) / old_height;
            let rel_w = b.width() / old_width;
            let rel_h = b.height() / old_height;

            child.set_position(group_x + rel_x * width, group_y + rel_y * height);
            child.resize(rel_w * width, rel_h * height);
        }

        self.width = width;
        self.height = height;
    }

    /// Setting the position translates the whole group, children included,
    /// so the frame stays the children's bounding box.
    fn set_position(&mut self, x: f64, y: f64) {
        let (dx, dy) = (x - self.x, y - self.y);
        self.move_by(dx, dy);
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{Button, Rectangle};

    fn sample_children() -> Vec<Component> {
        let mut a = Rectangle::new(0.0, 0.0);
        a.resize(100.0, 50.0);
        let mut b = Rectangle::new(200.0, 200.0);
        b.resize(50.0, 100.0);
        vec![Component::Rectangle(a), Component::Rectangle(b)]
    }

    #[test]
    fn test_group_bounds_are_tight_bbox() {
        let group = Group::new(sample_children());
        assert!((group.x - 0.0).abs() < f64::EPSILON);
        assert!((group.y - 0.0).abs() < f64::EPSILON);
        assert!((group.width - 250.0).abs() < f64::EPSILON);
        assert!((group.height - 300.0).abs() < f64::EPSILON);
        assert_eq!(group.text, "Group (2 items)");
    }

    #[test]
    fn test_empty_group_defaults() {
        let group = Group::empty(30.0, 40.0);
        assert!((group.x - 30.0).abs() < f64::EPSILON);
        assert!((group.width - 100.0).abs() < f64::EPSILON);
        assert!((group.height - 100.0).abs() < f64::EPSILON);
        assert_eq!(group.text, "Group (0 items)");
    }

    #[test]
    fn test_move_shifts_frame_and_children() {
        let mut group = Group::new(sample_children());
        group.move_by(15.0, -5.0);

        assert!((group.x - 15.0).abs() < f64::EPSILON);
        assert!((group.y + 5.0).abs() < f64::EPSILON);
        let first = group.children()[0].bounds();
        assert!((first.x0 - 15.0).abs() < f64::EPSILON);
        assert!((first.y0 + 5.0).abs() < f64::EPSILON);

        // Frame stays the exact bbox of the children after the move.
        let bbox = Group::bounds_of(group.children()).unwrap();
        assert!((group.bounds().x0 - bbox.x0).abs() < 1e-9);
        assert!((group.bounds().y1 - bbox.y1).abs() < 1e-9);
    }

    #[test]
    fn test_set_position_translates_children() {
        let mut group = Group::new(sample_children());
        group.set_position(100.0, 100.0);

        assert!((group.x - 100.0).abs() < f64::EPSILON);
        let first = group.children()[0].bounds();
        assert!((first.x0 - 100.0).abs() < f64::EPSILON);
        let bbox = Group::bounds_of(group.children()).unwrap();
        assert!((group.width - bbox.width()).abs() < 1e-9);
    }

    #[test]
    fn test_proportional_resize() {
        let mut group = Group::new(sample_children());
        group.resize(500.0, 600.0);

        assert!((group.width - 500.0).abs() < f64::EPSILON);
        assert!((group.height - 600.0).abs() < f64::EPSILON);

        // First child occupied x 0..100 of 250 and y 0..50 of 300.
        let first = group.children()[0].bounds();
        assert!((first.x0 - 0.0).abs() < 1e-9);
        assert!((first.width() - 200.0).abs() < 1e-9);
        assert!((first.height() - 100.0).abs() < 1e-9);

        // Second child occupied x 200..250 and y 200..300.
        let second = group.children()[1].bounds();
        assert!((second.x0 - 400.0).abs() < 1e-9);
        assert!((second.width() - 100.0).abs() < 1e-9);
        assert!((second.y0 - 400.0).abs() < 1e-9);
        assert!((second.height() - 200.0).abs() < 1e-9);
    }

    #[test]
    fn test_resize_clamps_children_to_minimum() {
        let mut group = Group::new(sample_children());
        group.resize(25.0, 30.0);

        for child in group.children() {
            assert!(child.width() >= MIN_COMPONENT_SIZE);
            assert!(child.height() >= MIN_COMPONENT_SIZE);
        }
        assert!((group.width - 25.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_hit_test_requires_child_hit() {
        let group = Group::new(sample_children());
        // Inside the first child.
        assert!(group.hit_test(Point::new(50.0, 25.0)));
        // Inside the frame but between the children.
        assert!(!group.hit_test(Point::new(150.0, 150.0)));
    }

    #[test]
    fn test_add_and_remove_child_refresh_bounds() {
        let mut group = Group::new(sample_children());
        let extra = Component::Button(Button::new(400.0, 0.0));
        let extra_id = extra.id();

        group.add_child(extra);
        assert_eq!(group.children().len(), 3);
        assert!((group.width - 520.0).abs() < f64::EPSILON);

        let removed = group.remove_child(extra_id).unwrap();
        assert_eq!(removed.id(), extra_id);
        assert!((group.width - 250.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_nested_group_hit_test() {
        let inner = Group::new(sample_children());
        let outer = Group::new(vec![
            Component::Group(inner),
            Component::Button(Button::new(500.0, 500.0)),
        ]);
        assert!(outer.hit_test(Point::new(50.0, 25.0)));
        assert!(outer.hit_test(Point::new(550.0, 520.0)));
        assert!(!outer.hit_test(Point::new(350.0, 350.0)));
    }

    #[test]
    fn test_ungroup_returns_children_in_order() {
        let children = sample_children();
        let ids: Vec<_> = children.iter().map(|c| c.id()).collect();
        let group = Group::new(children);
        let released = group.ungroup();
        let released_ids: Vec<_> = released.iter().map(|c| c.id()).collect();
        assert_eq!(released_ids, ids);
    }

    #[test]
    fn test_find_descends_into_nested_groups() {
        let children = sample_children();
        let target = children[1].id();
        let inner = Group::new(children);
        let outer = Group::new(vec![Component::Group(inner)]);
        assert!(outer.contains_id(target));
        assert_eq!(outer.find(target).unwrap().id(), target);
    }
}
