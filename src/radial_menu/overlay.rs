use crate::radial_menu::engine::{Point, RadialAction};
use crate::radial_menu::state::MenuState;
use serde::{Deserialize, Serialize};

const INDICATOR_MIN_DRAG_PX: f32 = 20.0;
const INDICATOR_DRAG_FACTOR: f32 = 0.6;
const INDICATOR_RADIUS_FACTOR: f32 = 0.5;
const ICON_BACKGROUND_FACTOR: f32 = 0.75;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlayMetrics {
    pub density: f32,
    pub menu_radius_dp: f32,
    pub icon_size_dp: f32,
    pub icon_spread_deg: f32,
    pub selected_scale: f32,
    pub scrim_alpha: f32,
}

impl Default for OverlayMetrics {
    fn default() -> Self {
        Self {
            density: 1.0,
            menu_radius_dp: 90.0,
            icon_size_dp: 32.0,
            icon_spread_deg: 45.0,
            selected_scale: 1.4,
            scrim_alpha: 0.5,
        }
    }
}

impl OverlayMetrics {
    pub fn menu_radius_px(&self) -> f32 {
        self.menu_radius_dp * self.density
    }

    pub fn icon_size_px(&self) -> f32 {
        self.icon_size_dp * self.density
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IconPlacement {
    pub action: RadialAction,
    pub angle: f32,
    pub center: Point,
    pub size: f32,
    pub background_radius: f32,
    pub selected: bool,
    /// Draw the filled glyph rather than the outline.
    pub filled: bool,
}

/// Whether the item under the finger is already liked or collected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ItemMarks {
    pub liked: bool,
    pub collected: bool,
}

impl ItemMarks {
    fn filled(self, action: RadialAction) -> bool {
        match action {
            RadialAction::Like => self.liked,
            RadialAction::Share => true,
            RadialAction::Collect => self.collected,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragIndicator {
    pub start: Point,
    pub end: Point,
}

/// Everything a renderer needs to paint one frame of the fan.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayLayout {
    pub center: Point,
    pub scrim_alpha: f32,
    pub icons: [IconPlacement; 3],
    pub indicator: Option<DragIndicator>,
}

impl OverlayLayout {
    pub fn from_state(
        state: &MenuState,
        metrics: &OverlayMetrics,
        marks: ItemMarks,
    ) -> Option<Self> {
        if !state.visible {
            return None;
        }

        let center = state.touch_position;
        let radius = metrics.menu_radius_px();
        let spread = metrics.icon_spread_deg;
        let icons = RadialAction::ALL.map(|action| {
            let angle = match action {
                RadialAction::Like => state.center_angle - spread,
                RadialAction::Share => state.center_angle,
                RadialAction::Collect => state.center_angle + spread,
            };
            let selected = state.selection == Some(action);
            let scale = if selected { metrics.selected_scale } else { 1.0 };
            let size = metrics.icon_size_px() * scale;
            IconPlacement {
                action,
                angle,
                center: polar(center, radius, angle),
                size,
                background_radius: size * ICON_BACKGROUND_FACTOR,
                selected,
                filled: marks.filled(action),
            }
        });

        Some(Self {
            center,
            scrim_alpha: metrics.scrim_alpha,
            icons,
            indicator: drag_indicator(center, state.drag_offset, radius),
        })
    }

    pub fn icon(&self, action: RadialAction) -> &IconPlacement {
        match action {
            RadialAction::Like => &self.icons[0],
            RadialAction::Share => &self.icons[1],
            RadialAction::Collect => &self.icons[2],
        }
    }
}

fn polar(center: Point, radius: f32, angle_deg: f32) -> Point {
    let rad = angle_deg.to_radians();
    Point::new(center.x + radius * rad.cos(), center.y + radius * rad.sin())
}

fn drag_indicator(center: Point, drag: Point, menu_radius: f32) -> Option<DragIndicator> {
    let distance = drag.length();
    if distance <= INDICATOR_MIN_DRAG_PX {
        return None;
    }
    let length = (distance * INDICATOR_DRAG_FACTOR).min(menu_radius * INDICATOR_RADIUS_FACTOR);
    let end = Point::new(
        center.x + drag.x / distance * length,
        center.y + drag.y / distance * length,
    );
    Some(DragIndicator { start: center, end })
}
