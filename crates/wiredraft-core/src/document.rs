//! The design document: root components in z-order, selection state, and
//! the undoable mutation surface the UI layers call into.

use crate::align::{self, Alignment, AlignmentGuide, Arrangement, Distribution};
use crate::components::{Component, ComponentId, ComponentTrait, ComponentType, Group};
use crate::history::History;
use crate::schema::DesignData;
use kurbo::{Point, Rect};

/// Canonical spawn point for components added without explicit coordinates.
pub const DEFAULT_SPAWN: (f64, f64) = (100.0, 100.0);

/// A design document.
///
/// Root components are kept in insertion order, which is the z-order:
/// later entries draw on top and win hit-testing ties. Selection is
/// document state addressed by id and is never persisted. Every mutating
/// operation records a pre-mutation history snapshot, so the first undo
/// reverts exactly that operation.
#[derive(Debug, Clone, Default)]
pub struct DesignDocument {
    components: Vec<Component>,
    selected: Option<ComponentId>,
    multi_selection: Vec<ComponentId>,
    history: History,
}

impl DesignDocument {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Root components in z-order (back to front).
    pub fn components(&self) -> &[Component] {
        &self.components
    }

    /// Number of root components.
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Check if the document has no components.
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Get a root component by id.
    pub fn get(&self, id: ComponentId) -> Option<&Component> {
        self.components.iter().find(|c| c.id() == id)
    }

    /// Get a mutable root component by id.
    pub fn get_mut(&mut self, id: ComponentId) -> Option<&mut Component> {
        self.components.iter_mut().find(|c| c.id() == id)
    }

    /// Find a component anywhere in the document, descending into groups.
    pub fn find(&self, id: ComponentId) -> Option<&Component> {
        for component in &self.components {
            if component.id() == id {
                return Some(component);
            }
            if let Some(group) = component.as_group() {
                if let Some(found) = group.find(id) {
                    return Some(found);
                }
            }
        }
        None
    }

    fn index_of(&self, id: ComponentId) -> Option<usize> {
        self.components.iter().position(|c| c.id() == id)
    }

    /// Record the current state so the next undo returns here.
    fn save_state(&mut self) {
        let snapshot = self.design_data();
        self.history.record(snapshot);
    }

    // ------------------------------------------------------------------
    // Component lifecycle
    // ------------------------------------------------------------------

    /// Create a component by palette/wire name and append it on top.
    /// Unknown names are ignored and return `None`.
    pub fn add_component(&mut self, type_name: &str, x: f64, y: f64) -> Option<ComponentId> {
        let Some(component_type) = ComponentType::parse(type_name) else {
            log::warn!("ignoring unknown component type {type_name:?}");
            return None;
        };

        self.save_state();
        let component = Component::create(component_type, x, y);
        let id = component.id();
        self.components.push(component);
        Some(id)
    }

    /// [`DesignDocument::add_component`] at the canonical spawn point.
    pub fn add_component_default(&mut self, type_name: &str) -> Option<ComponentId> {
        self.add_component(type_name, DEFAULT_SPAWN.0, DEFAULT_SPAWN.1)
    }

    /// Delete a root component. Returns `false` (and records nothing) if
    /// the id is not a root member.
    pub fn delete_component(&mut self, id: ComponentId) -> bool {
        let Some(index) = self.index_of(id) else {
            return false;
        };

        self.save_state();
        self.components.remove(index);
        if self.selected == Some(id) {
            self.selected = None;
        }
        self.multi_selection.retain(|&m| m != id);
        true
    }

    /// Clone a root component (fresh ids, +20/+20 offset) and append the
    /// clone on top. Returns the clone's id, or `None` if the source is
    /// not a root member.
    pub fn duplicate_component(&mut self, id: ComponentId) -> Option<ComponentId> {
        let index = self.index_of(id)?;

        self.save_state();
        let clone = self.components[index].duplicated();
        let clone_id = clone.id();
        self.components.push(clone);
        Some(clone_id)
    }

    /// Remove every component. Records history only when there is
    /// something to clear.
    pub fn clear_canvas(&mut self) {
        if !self.components.is_empty() {
            self.save_state();
        }
        self.components.clear();
        self.selected = None;
        self.multi_selection.clear();
    }

    // ------------------------------------------------------------------
    // Geometry mutation
    // ------------------------------------------------------------------

    /// Translate a root component. Returns `false` if absent.
    pub fn move_component(&mut self, id: ComponentId, dx: f64, dy: f64) -> bool {
        let Some(index) = self.index_of(id) else {
            return false;
        };
        self.save_state();
        self.components[index].move_by(dx, dy);
        true
    }

    /// Resize a root component (10-unit minimum per axis). Returns
    /// `false` if absent.
    pub fn resize_component(&mut self, id: ComponentId, width: f64, height: f64) -> bool {
        let Some(index) = self.index_of(id) else {
            return false;
        };
        self.save_state();
        self.components[index].resize(width, height);
        true
    }

    /// Set a root component's absolute position. Returns `false` if
    /// absent.
    pub fn set_component_position(&mut self, id: ComponentId, x: f64, y: f64) -> bool {
        let Some(index) = self.index_of(id) else {
            return false;
        };
        self.save_state();
        self.components[index].set_position(x, y);
        true
    }

    // ------------------------------------------------------------------
    // Selection
    // ------------------------------------------------------------------

    /// Make a root component the single selection, replacing any previous
    /// one. Returns `false` if the id is not a root member.
    pub fn select_component(&mut self, id: ComponentId) -> bool {
        if self.get(id).is_none() {
            return false;
        }
        self.selected = Some(id);
        true
    }

    /// Clear the single selection.
    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// The single selection, if any.
    pub fn selected_component(&self) -> Option<ComponentId> {
        self.selected
    }

    /// Check if a component is the single selection.
    pub fn is_selected(&self, id: ComponentId) -> bool {
        self.selected == Some(id)
    }

    /// Add a root component to the multi-selection. Adding twice is a
    /// no-op; ids that are not root members are refused.
    pub fn add_to_selection(&mut self, id: ComponentId) -> bool {
        if self.get(id).is_none() {
            return false;
        }
        if !self.multi_selection.contains(&id) {
            self.multi_selection.push(id);
        }
        true
    }

    /// Remove a component from the multi-selection.
    pub fn remove_from_selection(&mut self, id: ComponentId) -> bool {
        let before = self.multi_selection.len();
        self.multi_selection.retain(|&m| m != id);
        self.multi_selection.len() != before
    }

    /// Clear the multi-selection.
    pub fn clear_multi_selection(&mut self) {
        self.multi_selection.clear();
    }

    /// The multi-selection, in the order components were added to it.
    pub fn multi_selection(&self) -> &[ComponentId] {
        &self.multi_selection
    }

    // ------------------------------------------------------------------
    // Hit testing
    // ------------------------------------------------------------------

    /// The topmost component containing the point, scanning front to
    /// back. Groups hit on their children, not their padding.
    pub fn component_at_position(&self, x: f64, y: f64) -> Option<&Component> {
        let point = Point::new(x, y);
        self.components.iter().rev().find(|c| c.hit_test(point))
    }

    /// Check if a component id lives inside any root group.
    pub fn is_component_grouped(&self, id: ComponentId) -> bool {
        self.components
            .iter()
            .filter_map(Component::as_group)
            .any(|group| group.contains_id(id))
    }

    // ------------------------------------------------------------------
    // Grouping
    // ------------------------------------------------------------------

    /// Group the multi-selected components. They leave the root sequence
    /// (in selection order) and the new group is appended on top and
    /// becomes the single selection. Needs at least two selected
    /// components; returns `None` otherwise.
    pub fn group_selected(&mut self) -> Option<ComponentId> {
        if self.multi_selection.len() < 2 {
            return None;
        }

        self.save_state();
        let ids = std::mem::take(&mut self.multi_selection);
        let mut children = Vec::with_capacity(ids.len());
        for id in ids {
            if let Some(index) = self.index_of(id) {
                children.push(self.components.remove(index));
            }
        }

        let group = Group::new(children);
        let group_id = group.id();
        self.components.push(Component::Group(group));
        self.selected = Some(group_id);
        Some(group_id)
    }

    /// Dissolve a group, re-appending its children as root components in
    /// their original order, and clear the selection. Returns the child
    /// ids, or an empty vec if the id is not a root group.
    pub fn ungroup_component(&mut self, id: ComponentId) -> Vec<ComponentId> {
        let Some(index) = self
            .components
            .iter()
            .position(|c| c.id() == id && c.is_group())
        else {
            return Vec::new();
        };

        self.save_state();
        let children = match self.components.remove(index) {
            Component::Group(group) => group.ungroup(),
            other => {
                self.components.insert(index, other);
                return Vec::new();
            }
        };

        let mut child_ids = Vec::with_capacity(children.len());
        for child in children {
            child_ids.push(child.id());
            self.components.push(child);
        }
        self.selected = None;
        self.multi_selection.retain(|&m| m != id);
        child_ids
    }

    // ------------------------------------------------------------------
    // Alignment & layout
    // ------------------------------------------------------------------

    /// Align all root components on an edge or center. Undoable; `false`
    /// with fewer than two components.
    pub fn align_components(&mut self, alignment: Alignment) -> bool {
        if self.components.len() < 2 {
            return false;
        }
        self.save_state();
        align::align(&mut self.components, alignment)
    }

    /// Distribute all root components evenly. Undoable; `false` with
    /// fewer than three components.
    pub fn distribute_components(&mut self, distribution: Distribution) -> bool {
        if self.components.len() < 3 {
            return false;
        }
        self.save_state();
        align::distribute(&mut self.components, distribution)
    }

    /// Auto-arrange all root components. Undoable; `false` when empty.
    pub fn arrange_components(&mut self, arrangement: Arrangement) -> bool {
        if self.components.is_empty() {
            return false;
        }
        self.save_state();
        align::arrange(&mut self.components, arrangement)
    }

    /// Snap a root component to the grid. Undoable; `false` if absent.
    pub fn snap_component_to_grid(&mut self, id: ComponentId) -> bool {
        let Some(index) = self.index_of(id) else {
            return false;
        };
        self.save_state();
        align::snap_to_grid(&mut self.components[index], align::GRID_SIZE);
        true
    }

    /// Snap a root component to nearby sibling edges. Undoable when a
    /// snap actually happens; `false` (and no history entry) otherwise.
    pub fn snap_component_to_siblings(&mut self, id: ComponentId) -> bool {
        let Some(index) = self.index_of(id) else {
            return false;
        };
        let others = self.sibling_bounds(id);

        // Probe on a copy so a miss leaves the history untouched.
        let mut probe = self.components[index].clone();
        if !align::snap_to_siblings(&mut probe, &others, align::SNAP_THRESHOLD) {
            return false;
        }
        self.save_state();
        self.components[index] = probe;
        true
    }

    /// Alignment guides between a root component and its siblings, for
    /// drag feedback. Advisory only.
    pub fn guides_for(&self, id: ComponentId) -> Vec<AlignmentGuide> {
        let Some(target) = self.get(id) else {
            return Vec::new();
        };
        align::alignment_guides(target.bounds(), &self.sibling_bounds(id), align::SNAP_THRESHOLD)
    }

    fn sibling_bounds(&self, id: ComponentId) -> Vec<Rect> {
        self.components
            .iter()
            .filter(|c| c.id() != id)
            .map(|c| c.bounds())
            .collect()
    }

    // ------------------------------------------------------------------
    // History
    // ------------------------------------------------------------------

    /// Undo the last mutation. Returns `false` at the start of history.
    pub fn undo(&mut self) -> bool {
        let current = self.design_data();
        match self.history.undo(current) {
            Some(snapshot) => {
                self.restore(&snapshot);
                true
            }
            None => false,
        }
    }

    /// Redo the last undone mutation. Returns `false` at the end of
    /// history.
    pub fn redo(&mut self) -> bool {
        let current = self.design_data();
        match self.history.redo(current) {
            Some(snapshot) => {
                self.restore(&snapshot);
                true
            }
            None => false,
        }
    }

    /// Check if undo is available.
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Check if redo is available.
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Replace the live components and selection from a snapshot. A full
    /// reload, not an incremental patch.
    fn restore(&mut self, snapshot: &DesignData) {
        self.components = snapshot.components.iter().map(Component::from_record).collect();
        self.selected = None;
        self.multi_selection.clear();
    }

    // ------------------------------------------------------------------
    // Serialization boundary
    // ------------------------------------------------------------------

    /// Snapshot the document as persistable design data.
    pub fn design_data(&self) -> DesignData {
        DesignData::new(self.components.iter().map(Component::to_record).collect())
    }

    /// Replace the document from design data. A loaded document starts a
    /// fresh undo stream: history is cleared and undoing past the load is
    /// not possible.
    pub fn load_design(&mut self, data: &DesignData) {
        self.components = data.components.iter().map(Component::from_record).collect();
        self.selected = None;
        self.multi_selection.clear();
        self.history.clear();
    }
}
