//! Alignment, distribution, auto-arrangement and snapping.
//!
//! Pure geometry over component slices; nothing here touches selection or
//! history. The document store wraps these for undoable whole-canvas
//! operations, and interactive tools call them directly.

use crate::components::{Component, ComponentTrait};
use kurbo::Rect;

/// Grid pitch for snapping (matches the visual grid).
pub const GRID_SIZE: f64 = 20.0;

/// Distance threshold for edge/center snapping and guide detection.
pub const SNAP_THRESHOLD: f64 = 10.0;

/// Gap between components placed by auto-arrangement.
pub const ARRANGE_GAP: f64 = 20.0;

/// How far alignment guides extend past the participating components.
const GUIDE_MARGIN: f64 = 10.0;

/// Edge or center to align a set of components on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    Left,
    Right,
    Top,
    Bottom,
    /// Align centers on the average center x of the set.
    CenterHorizontal,
    /// Align centers on the average center y of the set.
    CenterVertical,
}

/// Axis and anchor mode for even spacing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Distribution {
    /// Equal gaps between adjacent edges; outermost edges stay put.
    Horizontal,
    Vertical,
    /// Centers interpolated linearly between the outermost centers.
    HorizontalCenters,
    VerticalCenters,
}

/// Automatic layout patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arrangement {
    Grid,
    Horizontal,
    Vertical,
    Circle,
}

/// Align components on a shared edge or center. Needs at least two
/// components; returns `false` without moving anything otherwise.
pub fn align(components: &mut [Component], alignment: Alignment) -> bool {
    if components.len() < 2 {
        return false;
    }

    match alignment {
        Alignment::Left => {
            let left = fold_bounds(components, f64::INFINITY, |acc, b| acc.min(b.x0));
            for c in components.iter_mut() {
                let b = c.bounds();
                c.set_position(left, b.y0);
            }
        }
        Alignment::Right => {
            let right = fold_bounds(components, f64::NEG_INFINITY, |acc, b| acc.max(b.x1));
            for c in components.iter_mut() {
                let b = c.bounds();
                c.set_position(right - b.width(), b.y0);
            }
        }
        Alignment::Top => {
            let top = fold_bounds(components, f64::INFINITY, |acc, b| acc.min(b.y0));
            for c in components.iter_mut() {
                let b = c.bounds();
                c.set_position(b.x0, top);
            }
        }
        Alignment::Bottom => {
            let bottom = fold_bounds(components, f64::NEG_INFINITY, |acc, b| acc.max(b.y1));
            for c in components.iter_mut() {
                let b = c.bounds();
                c.set_position(b.x0, bottom - b.height());
            }
        }
        Alignment::CenterHorizontal => {
            let center_x = average_center(components, true);
            for c in components.iter_mut() {
                let b = c.bounds();
                c.set_position(center_x - b.width() / 2.0, b.y0);
            }
        }
        Alignment::CenterVertical => {
            let center_y = average_center(components, false);
            for c in components.iter_mut() {
                let b = c.bounds();
                c.set_position(b.x0, center_y - b.height() / 2.0);
            }
        }
    }

    true
}

fn fold_bounds(components: &[Component], init: f64, f: impl Fn(f64, Rect) -> f64) -> f64 {
    components.iter().fold(init, |acc, c| f(acc, c.bounds()))
}

/// Average of the component centers along one axis. This is the tie-break
/// used by center alignment and circular arrangement — the average, not the
/// bounding-box midpoint.
fn average_center(components: &[Component], horizontal: bool) -> f64 {
    let sum: f64 = components
        .iter()
        .map(|c| {
            let center = c.center();
            if horizontal { center.x } else { center.y }
        })
        .sum();
    sum / components.len() as f64
}

/// Space components evenly along an axis. Needs at least three components;
/// returns `false` without moving anything otherwise. The outermost
/// components anchor the span, so the computed gap can be negative
/// (overlap) when the span is too tight — that is a geometric outcome, not
/// an error.
pub fn distribute(components: &mut [Component], distribution: Distribution) -> bool {
    if components.len() < 3 {
        return false;
    }

    match distribution {
        Distribution::Horizontal => distribute_edges(components, true),
        Distribution::Vertical => distribute_edges(components, false),
        Distribution::HorizontalCenters => distribute_centers(components, true),
        Distribution::VerticalCenters => distribute_centers(components, false),
    }

    true
}

fn distribute_edges(components: &mut [Component], horizontal: bool) {
    let mut order: Vec<usize> = (0..components.len()).collect();
    order.sort_by(|&a, &b| {
        let (pa, pb) = (components[a].bounds(), components[b].bounds());
        if horizontal {
            pa.x0.total_cmp(&pb.x0)
        } else {
            pa.y0.total_cmp(&pb.y0)
        }
    });

    let first = components[order[0]].bounds();
    let last = components[order[order.len() - 1]].bounds();
    let span = if horizontal {
        last.x1 - first.x0
    } else {
        last.y1 - first.y0
    };
    let occupied: f64 = order
        .iter()
        .map(|&i| {
            let b = components[i].bounds();
            if horizontal { b.width() } else { b.height() }
        })
        .sum();
    let spacing = (span - occupied) / (order.len() - 1) as f64;

    let mut cursor = if horizontal { first.x0 } else { first.y0 };
    for (rank, &i) in order.iter().enumerate() {
        let b = components[i].bounds();
        if rank > 0 {
            if horizontal {
                components[i].set_position(cursor, b.y0);
            } else {
                components[i].set_position(b.x0, cursor);
            }
        }
        cursor += if horizontal { b.width() } else { b.height() };
        cursor += spacing;
    }
}

fn distribute_centers(components: &mut [Component], horizontal: bool) {
    let mut order: Vec<usize> = (0..components.len()).collect();
    order.sort_by(|&a, &b| {
        let (ca, cb) = (components[a].center(), components[b].center());
        if horizontal {
            ca.x.total_cmp(&cb.x)
        } else {
            ca.y.total_cmp(&cb.y)
        }
    });

    let pick = |c: kurbo::Point| if horizontal { c.x } else { c.y };
    let first_center = pick(components[order[0]].center());
    let last_center = pick(components[order[order.len() - 1]].center());
    let spacing = (last_center - first_center) / (order.len() - 1) as f64;

    // The outermost centers stay anchored.
    for (rank, &i) in order.iter().enumerate().skip(1).take(order.len() - 2) {
        let b = components[i].bounds();
        let target = first_center + rank as f64 * spacing;
        if horizontal {
            components[i].set_position(target - b.width() / 2.0, b.y0);
        } else {
            components[i].set_position(b.x0, target - b.height() / 2.0);
        }
    }
}

/// Lay components out in one of the automatic patterns. Returns `false`
/// for an empty slice.
pub fn arrange(components: &mut [Component], arrangement: Arrangement) -> bool {
    if components.is_empty() {
        return false;
    }

    match arrangement {
        Arrangement::Grid => arrange_grid(components),
        Arrangement::Horizontal => arrange_row(components, true),
        Arrangement::Vertical => arrange_row(components, false),
        Arrangement::Circle => arrange_circle(components),
    }

    true
}

/// Grid layout: roughly square (column count ⌊√n⌋), cell pitch sized by
/// the largest component plus a gap, anchored at the first component.
fn arrange_grid(components: &mut [Component]) {
    let cols = ((components.len() as f64).sqrt() as usize).max(1);
    let max_width = fold_bounds(components, 0.0, |acc, b| acc.max(b.width()));
    let max_height = fold_bounds(components, 0.0, |acc, b| acc.max(b.height()));
    let pitch_x = max_width + ARRANGE_GAP;
    let pitch_y = max_height + ARRANGE_GAP;

    let origin = components[0].bounds();
    for (i, c) in components.iter_mut().enumerate() {
        let (row, col) = (i / cols, i % cols);
        c.set_position(
            origin.x0 + col as f64 * pitch_x,
            origin.y0 + row as f64 * pitch_y,
        );
    }
}

/// Single row/column layout with a fixed gap, keeping the components'
/// relative order along the axis.
fn arrange_row(components: &mut [Component], horizontal: bool) {
    let mut order: Vec<usize> = (0..components.len()).collect();
    order.sort_by(|&a, &b| {
        let (pa, pb) = (components[a].bounds(), components[b].bounds());
        if horizontal {
            pa.x0.total_cmp(&pb.x0)
        } else {
            pa.y0.total_cmp(&pb.y0)
        }
    });

    let start = components[order[0]].bounds();
    let mut cursor = if horizontal { start.x0 } else { start.y0 };
    for &i in &order {
        let b = components[i].bounds();
        if horizontal {
            components[i].set_position(cursor, b.y0);
            cursor += b.width() + ARRANGE_GAP;
        } else {
            components[i].set_position(b.x0, cursor);
            cursor += b.height() + ARRANGE_GAP;
        }
    }
}

/// Circle layout around the set's average center, radius growing with the
/// component count.
fn arrange_circle(components: &mut [Component]) {
    let n = components.len();
    let center_x = average_center(components, true);
    let center_y = average_center(components, false);
    let radius = (n as f64 * 30.0).max(100.0);
    let step = std::f64::consts::TAU / n as f64;

    for (i, c) in components.iter_mut().enumerate() {
        let angle = i as f64 * step;
        let b = c.bounds();
        c.set_position(
            center_x + radius * angle.cos() - b.width() / 2.0,
            center_y + radius * angle.sin() - b.height() / 2.0,
        );
    }
}

/// Snap a component's position to the nearest grid intersection,
/// independently on each axis.
pub fn snap_to_grid(component: &mut Component, grid_size: f64) {
    let b = component.bounds();
    let x = (b.x0 / grid_size).round() * grid_size;
    let y = (b.y0 / grid_size).round() * grid_size;
    component.set_position(x, y);
}

/// Snap a moving component to nearby sibling edges, per axis. For each
/// axis the checks run in priority order — matching left/top edges,
/// matching right/bottom edges, then abutting edges — and the first hit
/// wins. Returns `true` if either axis snapped.
pub fn snap_to_siblings(target: &mut Component, others: &[Rect], threshold: f64) -> bool {
    let t = target.bounds();
    let (tw, th) = (t.width(), t.height());
    let mut snap_x: Option<f64> = None;
    let mut snap_y: Option<f64> = None;

    for o in others {
        if snap_x.is_none() {
            if (t.x0 - o.x0).abs() <= threshold {
                snap_x = Some(o.x0);
            } else if (t.x1 - o.x1).abs() <= threshold {
                snap_x = Some(o.x1 - tw);
            } else if (t.x0 - o.x1).abs() <= threshold {
                snap_x = Some(o.x1);
            } else if (t.x1 - o.x0).abs() <= threshold {
                snap_x = Some(o.x0 - tw);
            }
        }
        if snap_y.is_none() {
            if (t.y0 - o.y0).abs() <= threshold {
                snap_y = Some(o.y0);
            } else if (t.y1 - o.y1).abs() <= threshold {
                snap_y = Some(o.y1 - th);
            } else if (t.y0 - o.y1).abs() <= threshold {
                snap_y = Some(o.y1);
            } else if (t.y1 - o.y0).abs() <= threshold {
                snap_y = Some(o.y0 - th);
            }
        }
        if snap_x.is_some() && snap_y.is_some() {
            break;
        }
    }

    if snap_x.is_some() || snap_y.is_some() {
        target.set_position(snap_x.unwrap_or(t.x0), snap_y.unwrap_or(t.y0));
        true
    } else {
        false
    }
}

/// Which way a guide line runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuideOrientation {
    /// A vertical line at `position` (x), spanning `start..end` in y.
    Vertical,
    /// A horizontal line at `position` (y), spanning `start..end` in x.
    Horizontal,
}

/// An advisory guide line for visual feedback while dragging. Purely
/// descriptive; nothing is moved.
#[derive(Debug, Clone, PartialEq)]
pub struct AlignmentGuide {
    pub orientation: GuideOrientation,
    pub position: f64,
    pub start: f64,
    pub end: f64,
    pub label: &'static str,
}

/// Compute edge/center coincidences (within `threshold`) between a target
/// and the other components' bounds.
pub fn alignment_guides(target: Rect, others: &[Rect], threshold: f64) -> Vec<AlignmentGuide> {
    let mut guides = Vec::new();

    for o in others {
        let vertical_span = (
            target.y0.min(o.y0) - GUIDE_MARGIN,
            target.y1.max(o.y1) + GUIDE_MARGIN,
        );
        let horizontal_span = (
            target.x0.min(o.x0) - GUIDE_MARGIN,
            target.x1.max(o.x1) + GUIDE_MARGIN,
        );

        if (target.x0 - o.x0).abs() <= threshold {
            guides.push(AlignmentGuide {
                orientation: GuideOrientation::Vertical,
                position: o.x0,
                start: vertical_span.0,
                end: vertical_span.1,
                label: "Left align",
            });
        }
        if (target.x1 - o.x1).abs() <= threshold {
            guides.push(AlignmentGuide {
                orientation: GuideOrientation::Vertical,
                position: o.x1,
                start: vertical_span.0,
                end: vertical_span.1,
                label: "Right align",
            });
        }
        if (target.center().x - o.center().x).abs() <= threshold {
            guides.push(AlignmentGuide {
                orientation: GuideOrientation::Vertical,
                position: o.center().x,
                start: vertical_span.0,
                end: vertical_span.1,
                label: "Center align",
            });
        }
        if (target.y0 - o.y0).abs() <= threshold {
            guides.push(AlignmentGuide {
                orientation: GuideOrientation::Horizontal,
                position: o.y0,
                start: horizontal_span.0,
                end: horizontal_span.1,
                label: "Top align",
            });
        }
        if (target.y1 - o.y1).abs() <= threshold {
            guides.push(AlignmentGuide {
                orientation: GuideOrientation::Horizontal,
                position: o.y1,
                start: horizontal_span.0,
                end: horizontal_span.1,
                label: "Bottom align",
            });
        }
        if (target.center().y - o.center().y).abs() <= threshold {
            guides.push(AlignmentGuide {
                orientation: GuideOrientation::Horizontal,
                position: o.center().y,
                start: horizontal_span.0,
                end: horizontal_span.1,
                label: "Middle align",
            });
        }
    }

    guides
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::ComponentType;

    fn rect_at(x: f64, y: f64, w: f64, h: f64) -> Component {
        let mut c = Component::create(ComponentType::Rectangle, x, y);
        c.resize(w, h);
        c
    }

    #[test]
    fn test_align_needs_two_components() {
        let mut single = vec![rect_at(10.0, 10.0, 50.0, 50.0)];
        assert!(!align(&mut single, Alignment::Left));
        assert!((single[0].x() - 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_align_left_uses_minimum_x() {
        let mut comps = vec![
            rect_at(30.0, 0.0, 50.0, 20.0),
            rect_at(10.0, 40.0, 50.0, 20.0),
            rect_at(90.0, 80.0, 50.0, 20.0),
        ];
        assert!(align(&mut comps, Alignment::Left));
        for c in &comps {
            assert!((c.x() - 10.0).abs() < f64::EPSILON);
        }
        // y positions unchanged.
        assert!((comps[0].y() - 0.0).abs() < f64::EPSILON);
        assert!((comps[2].y() - 80.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_align_right_uses_maximum_edge() {
        let mut comps = vec![rect_at(0.0, 0.0, 40.0, 20.0), rect_at(100.0, 50.0, 60.0, 20.0)];
        assert!(align(&mut comps, Alignment::Right));
        assert!((comps[0].x() - 120.0).abs() < f64::EPSILON);
        assert!((comps[1].x() - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_align_center_horizontal_uses_average_center() {
        let mut comps = vec![
            rect_at(0.0, 0.0, 20.0, 20.0),    // center x 10
            rect_at(40.0, 50.0, 20.0, 20.0),  // center x 50
            rect_at(80.0, 100.0, 40.0, 20.0), // center x 100
        ];
        assert!(align(&mut comps, Alignment::CenterHorizontal));
        // Average center x = (10 + 50 + 100) / 3.
        let avg = 160.0 / 3.0;
        for c in &comps {
            assert!((c.center().x - avg).abs() < 1e-9);
        }
    }

    #[test]
    fn test_align_top_and_bottom() {
        let mut comps = vec![rect_at(0.0, 30.0, 20.0, 20.0), rect_at(50.0, 10.0, 20.0, 40.0)];
        assert!(align(&mut comps, Alignment::Top));
        assert!((comps[0].y() - 10.0).abs() < f64::EPSILON);
        assert!((comps[1].y() - 10.0).abs() < f64::EPSILON);

        assert!(align(&mut comps, Alignment::Bottom));
        // Bottommost edge is y 10 + 40 = 50.
        assert!((comps[0].y() - 30.0).abs() < f64::EPSILON);
        assert!((comps[1].y() - 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_distribute_needs_three_components() {
        let mut comps = vec![rect_at(0.0, 0.0, 20.0, 20.0), rect_at(100.0, 0.0, 20.0, 20.0)];
        assert!(!distribute(&mut comps, Distribution::Horizontal));
    }

    #[test]
    fn test_distribute_horizontal_anchors_extremes() {
        let mut comps = vec![
            rect_at(0.0, 0.0, 20.0, 20.0),
            rect_at(90.0, 10.0, 20.0, 20.0),
            rect_at(30.0, 20.0, 20.0, 20.0),
        ];
        assert!(distribute(&mut comps, Distribution::Horizontal));

        // Span 0..110, occupied 60, spacing (110 - 60) / 2 = 25.
        assert!((comps[0].x() - 0.0).abs() < 1e-9);
        assert!((comps[2].x() - 45.0).abs() < 1e-9);
        assert!((comps[1].x() - 90.0).abs() < 1e-9);
        // y untouched.
        assert!((comps[2].y() - 20.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_distribute_allows_negative_spacing() {
        let mut comps = vec![
            rect_at(0.0, 0.0, 60.0, 20.0),
            rect_at(50.0, 0.0, 60.0, 20.0),
            rect_at(100.0, 0.0, 60.0, 20.0),
        ];
        assert!(distribute(&mut comps, Distribution::Horizontal));
        // Span 0..160, occupied 180, spacing -10: middle overlaps at 50.
        assert!((comps[1].x() - 50.0).abs() < 1e-9);
        assert!((comps[2].x() - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_distribute_vertical() {
        let mut comps = vec![
            rect_at(0.0, 0.0, 20.0, 10.0),
            rect_at(10.0, 200.0, 20.0, 10.0),
            rect_at(20.0, 20.0, 20.0, 10.0),
        ];
        assert!(distribute(&mut comps, Distribution::Vertical));
        // Span 0..210, occupied 30, spacing 90.
        assert!((comps[0].y() - 0.0).abs() < 1e-9);
        assert!((comps[2].y() - 100.0).abs() < 1e-9);
        assert!((comps[1].y() - 200.0).abs() < 1e-9);
    }

    #[test]
    fn test_distribute_centers_interpolates() {
        let mut comps = vec![
            rect_at(0.0, 0.0, 20.0, 20.0),    // center 10
            rect_at(15.0, 0.0, 30.0, 20.0),   // center 30
            rect_at(100.0, 0.0, 20.0, 20.0),  // center 110
        ];
        assert!(distribute(&mut comps, Distribution::HorizontalCenters));
        // Centers 10 and 110 anchored; middle center moves to 60.
        assert!((comps[0].center().x - 10.0).abs() < 1e-9);
        assert!((comps[1].center().x - 60.0).abs() < 1e-9);
        assert!((comps[2].center().x - 110.0).abs() < 1e-9);
    }

    #[test]
    fn test_arrange_grid_positions() {
        let mut comps = vec![
            rect_at(100.0, 100.0, 40.0, 20.0),
            rect_at(0.0, 0.0, 40.0, 20.0),
            rect_at(50.0, 50.0, 40.0, 20.0),
            rect_at(70.0, 70.0, 40.0, 20.0),
        ];
        assert!(arrange(&mut comps, Arrangement::Grid));
        // 4 components -> 2 columns, pitch 60 x 40, origin at the first
        // component's pre-layout position (100, 100).
        assert!((comps[0].x() - 100.0).abs() < 1e-9);
        assert!((comps[1].x() - 160.0).abs() < 1e-9);
        assert!((comps[2].x() - 100.0).abs() < 1e-9);
        assert!((comps[2].y() - 140.0).abs() < 1e-9);
        assert!((comps[3].x() - 160.0).abs() < 1e-9);
    }

    #[test]
    fn test_arrange_horizontal_keeps_axis_order() {
        let mut comps = vec![
            rect_at(50.0, 5.0, 30.0, 20.0),
            rect_at(0.0, 15.0, 30.0, 20.0),
        ];
        assert!(arrange(&mut comps, Arrangement::Horizontal));
        // Leftmost stays at x 0, the other follows with a 20 gap.
        assert!((comps[1].x() - 0.0).abs() < 1e-9);
        assert!((comps[0].x() - 50.0).abs() < 1e-9);
        // y coordinates are untouched.
        assert!((comps[0].y() - 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_arrange_circle_uses_minimum_radius() {
        let mut comps = vec![
            rect_at(0.0, 0.0, 20.0, 20.0),
            rect_at(40.0, 0.0, 20.0, 20.0),
            rect_at(20.0, 40.0, 20.0, 20.0),
        ];
        let center_x = average_center(&comps, true);
        let center_y = average_center(&comps, false);
        assert!(arrange(&mut comps, Arrangement::Circle));

        // Radius is max(100, 3 * 30) = 100 around the average center.
        for c in &comps {
            let center = c.center();
            let dist =
                ((center.x - center_x).powi(2) + (center.y - center_y).powi(2)).sqrt();
            assert!((dist - 100.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_arrange_empty_is_noop() {
        let mut comps: Vec<Component> = Vec::new();
        assert!(!arrange(&mut comps, Arrangement::Grid));
    }

    #[test]
    fn test_snap_to_grid_rounds_each_axis() {
        let mut c = rect_at(23.0, 47.0, 50.0, 50.0);
        snap_to_grid(&mut c, GRID_SIZE);
        assert!((c.x() - 20.0).abs() < f64::EPSILON);
        assert!((c.y() - 40.0).abs() < f64::EPSILON);

        let mut c = rect_at(31.0, 51.0, 50.0, 50.0);
        snap_to_grid(&mut c, GRID_SIZE);
        assert!((c.x() - 40.0).abs() < f64::EPSILON);
        assert!((c.y() - 60.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_snap_to_siblings_left_edges() {
        let mut target = rect_at(104.0, 300.0, 50.0, 50.0);
        let others = [Rect::new(100.0, 0.0, 150.0, 40.0)];
        assert!(snap_to_siblings(&mut target, &others, SNAP_THRESHOLD));
        assert!((target.x() - 100.0).abs() < f64::EPSILON);
        // y has no candidate within threshold and stays put.
        assert!((target.y() - 300.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_snap_to_siblings_abutting_edge() {
        // Target's left edge near the other's right edge.
        let mut target = rect_at(157.0, 10.0, 50.0, 50.0);
        let others = [Rect::new(100.0, 500.0, 150.0, 540.0)];
        assert!(snap_to_siblings(&mut target, &others, SNAP_THRESHOLD));
        assert!((target.x() - 150.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_snap_to_siblings_out_of_range() {
        let mut target = rect_at(500.0, 500.0, 50.0, 50.0);
        let others = [Rect::new(0.0, 0.0, 100.0, 100.0)];
        assert!(!snap_to_siblings(&mut target, &others, SNAP_THRESHOLD));
        assert!((target.x() - 500.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_alignment_guides_detects_edges_and_centers() {
        let target = Rect::new(100.0, 95.0, 200.0, 145.0);
        let others = [Rect::new(100.0, 0.0, 180.0, 50.0)];
        let guides = alignment_guides(target, &others, SNAP_THRESHOLD);

        let labels: Vec<&str> = guides.iter().map(|g| g.label).collect();
        assert!(labels.contains(&"Left align"));
        assert!(!labels.contains(&"Right align"));

        let left = guides.iter().find(|g| g.label == "Left align").unwrap();
        assert_eq!(left.orientation, GuideOrientation::Vertical);
        assert!((left.position - 100.0).abs() < f64::EPSILON);
        assert!((left.start - (0.0 - 10.0)).abs() < f64::EPSILON);
        assert!((left.end - (145.0 + 10.0)).abs() < f64::EPSILON);
    }

    #[test]
    fn test_alignment_guides_center_match() {
        // Same center y (within threshold), different edges.
        let target = Rect::new(0.0, 100.0, 40.0, 140.0);
        let others = [Rect::new(200.0, 95.0, 260.0, 150.0)];
        let guides = alignment_guides(target, &others, SNAP_THRESHOLD);
        assert!(guides.iter().any(|g| g.label == "Middle align"));
    }

    #[test]
    fn test_alignment_guides_empty_when_far() {
        let target = Rect::new(0.0, 0.0, 10.0, 10.0);
        let others = [Rect::new(500.0, 500.0, 600.0, 600.0)];
        assert!(alignment_guides(target, &others, SNAP_THRESHOLD).is_empty());
    }
}
