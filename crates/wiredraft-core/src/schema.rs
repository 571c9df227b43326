//! Persisted design schema and conversions between live components and
//! their wire records.
//!
//! The live model in [`crate::components`] never touches serde directly;
//! everything goes through the flat [`ComponentRecord`] form, which is also
//! what history snapshots store.

use crate::components::{
    Component, ComponentId, ComponentTrait, ComponentType, FontWeight, Group, Style, TextAlign,
};
use kurbo::Rect;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Version tag written into every design payload.
pub const DESIGN_VERSION: &str = "1.0";

fn default_version() -> String {
    DESIGN_VERSION.to_string()
}

/// The design payload: a version tag and the root component records in
/// z-order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignData {
    #[serde(default = "default_version")]
    pub version: String,
    #[serde(default)]
    pub components: Vec<ComponentRecord>,
}

impl DesignData {
    /// Wrap component records in a current-version payload.
    pub fn new(components: Vec<ComponentRecord>) -> Self {
        Self {
            version: DESIGN_VERSION.to_string(),
            components,
        }
    }
}

impl Default for DesignData {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

/// Flat wire record for a single component.
///
/// `id`, `type` and the geometry are required; everything else falls back
/// to the variant's construction defaults when absent, which keeps old
/// files loadable. Fields that belong to other variants are omitted on
/// write.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentRecord {
    pub id: ComponentId,
    #[serde(rename = "type")]
    pub component_type: ComponentType,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<FontWeight>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub corner_radius: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    // Input fields only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder_color: Option<String>,
    // Text labels only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_align: Option<TextAlign>,
    // Groups only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_id: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<ComponentRecord>>,
}

/// Overlay the record's present style fields onto variant defaults.
fn apply_style(record: &ComponentRecord, style: &mut Style) {
    if let Some(v) = &record.fill_color {
        style.fill_color = v.clone();
    }
    if let Some(v) = &record.border_color {
        style.border_color = v.clone();
    }
    if let Some(v) = record.border_width {
        style.border_width = v;
    }
    if let Some(v) = &record.text_color {
        style.text_color = v.clone();
    }
    if let Some(v) = &record.font_family {
        style.font_family = v.clone();
    }
    if let Some(v) = record.font_size {
        style.font_size = v;
    }
    if let Some(v) = record.font_weight {
        style.font_weight = v;
    }
    if let Some(v) = record.corner_radius {
        style.corner_radius = v;
    }
    if let Some(v) = record.opacity {
        style.opacity = v;
    }
}

impl Component {
    /// Serialize this component (and, for groups, its subtree) into its
    /// wire record.
    pub fn to_record(&self) -> ComponentRecord {
        let bounds = self.bounds();
        let style = self.style();
        let mut record = ComponentRecord {
            id: self.id(),
            component_type: self.component_type(),
            x: bounds.x0,
            y: bounds.y0,
            width: bounds.width(),
            height: bounds.height(),
            text: Some(self.text().to_string()),
            fill_color: Some(style.fill_color.clone()),
            border_color: Some(style.border_color.clone()),
            border_width: Some(style.border_width),
            text_color: Some(style.text_color.clone()),
            font_family: Some(style.font_family.clone()),
            font_size: Some(style.font_size),
            font_weight: Some(style.font_weight),
            corner_radius: Some(style.corner_radius),
            opacity: Some(style.opacity),
            placeholder_text: None,
            placeholder_color: None,
            text_align: None,
            group_id: None,
            children: None,
        };

        match self {
            Component::Input(input) => {
                record.placeholder_text = Some(input.placeholder_text.clone());
                record.placeholder_color = Some(input.placeholder_color.clone());
            }
            Component::Text(label) => {
                record.text_align = Some(label.text_align);
            }
            Component::Group(group) => {
                record.group_id = Some(group.group_id());
                record.children =
                    Some(group.children().iter().map(Component::to_record).collect());
            }
            _ => {}
        }

        record
    }

    /// Rebuild a component from its wire record. The id and geometry are
    /// taken verbatim; any absent field keeps the variant's constructor
    /// default. Group children are rebuilt recursively.
    pub fn from_record(record: &ComponentRecord) -> Component {
        match record.component_type {
            ComponentType::Group => {
                let children: Vec<Component> = record
                    .children
                    .as_deref()
                    .unwrap_or_default()
                    .iter()
                    .map(Component::from_record)
                    .collect();
                let text = record
                    .text
                    .clone()
                    .unwrap_or_else(|| format!("Group ({} items)", children.len()));
                let mut style = Style::default();
                apply_style(record, &mut style);
                Component::Group(Group::reconstruct(
                    record.id,
                    record.group_id.unwrap_or_else(Uuid::new_v4),
                    Rect::new(
                        record.x,
                        record.y,
                        record.x + record.width,
                        record.y + record.height,
                    ),
                    text,
                    style,
                    children,
                ))
            }
            kind => {
                let mut component = Component::create(kind, record.x, record.y);
                match &mut component {
                    Component::Rectangle(rect) => {
                        rect.id = record.id;
                        rect.width = record.width;
                        rect.height = record.height;
                    }
                    Component::Button(button) => {
                        button.id = record.id;
                        button.width = record.width;
                        button.height = record.height;
                    }
                    Component::Input(input) => {
                        input.id = record.id;
                        input.width = record.width;
                        input.height = record.height;
                        if let Some(v) = &record.placeholder_text {
                            input.placeholder_text = v.clone();
                        }
                        if let Some(v) = &record.placeholder_color {
                            input.placeholder_color = v.clone();
                        }
                    }
                    Component::Text(label) => {
                        label.id = record.id;
                        label.width = record.width;
                        label.height = record.height;
                        if let Some(v) = record.text_align {
                            label.text_align = v;
                        }
                    }
                    Component::Group(_) => unreachable!("handled above"),
                }
                if let Some(text) = &record.text {
                    component.set_text(text);
                }
                apply_style(record, component.style_mut());
                component
            }
        }
    }
}
