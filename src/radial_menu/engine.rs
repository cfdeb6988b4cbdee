use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign, Sub};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn length(self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }
}

impl From<(f32, f32)> for Point {
    fn from(value: (f32, f32)) -> Self {
        Self {
            x: value.0,
            y: value.1,
        }
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl AddAssign for Point {
    fn add_assign(&mut self, rhs: Point) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScreenSize {
    pub width: f32,
    pub height: f32,
}

impl ScreenSize {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RadialAction {
    Like,
    Share,
    Collect,
}

impl RadialAction {
    pub const ALL: [RadialAction; 3] = [
        RadialAction::Like,
        RadialAction::Share,
        RadialAction::Collect,
    ];

    pub fn label(self) -> &'static str {
        match self {
            RadialAction::Like => "like",
            RadialAction::Share => "share",
            RadialAction::Collect => "collect",
        }
    }
}

/// Boundaries of the three selection sectors, in degrees relative to the fan
/// center. Sectors are half-open and contiguous: LIKE is
/// `[like_start, share_start)`, SHARE is `[share_start, collect_start)`
/// wrapping through 0°, COLLECT is `[collect_start, collect_end)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SectorBounds {
    pub like_start: f32,
    pub share_start: f32,
    pub collect_start: f32,
    pub collect_end: f32,
}

impl Default for SectorBounds {
    fn default() -> Self {
        Self {
            like_start: 300.0,
            share_start: 340.0,
            collect_start: 20.0,
            collect_end: 60.0,
        }
    }
}

impl SectorBounds {
    pub fn classify(&self, relative_angle: f32) -> Option<RadialAction> {
        let angle = normalize_angle(relative_angle);
        if in_arc(angle, self.like_start, self.share_start) {
            Some(RadialAction::Like)
        } else if in_arc(angle, self.share_start, self.collect_start) {
            Some(RadialAction::Share)
        } else if in_arc(angle, self.collect_start, self.collect_end) {
            Some(RadialAction::Collect)
        } else {
            None
        }
    }
}

fn in_arc(angle: f32, start: f32, end: f32) -> bool {
    let start = normalize_angle(start);
    let end = normalize_angle(end);
    if start <= end {
        angle >= start && angle < end
    } else {
        angle >= start || angle < end
    }
}

const MIN_CENTER_ANGLE: f32 = 195.0;
const MAX_CENTER_ANGLE: f32 = 345.0;
const LEFT_EDGE_ZONE: f32 = 0.15;
const RIGHT_EDGE_ZONE: f32 = 0.85;
const EDGE_BOOST_PER_RATIO: f32 = 100.0;
const TOP_ZONE: f32 = 0.25;
const TOP_ADJUST_DEG: f32 = 20.0;

pub fn normalize_angle(angle: f32) -> f32 {
    let normalized = angle.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs.
    if normalized >= 360.0 {
        0.0
    } else {
        normalized
    }
}

fn axis_ratio(value: f32, extent: f32) -> f32 {
    if extent <= 0.0 || !extent.is_finite() {
        return 0.5;
    }
    (value / extent).clamp(0.0, 1.0)
}

/// Direction the fan opens towards for a touch at `touch`, in screen-space
/// degrees (0° right, 90° down, 270° up).
///
/// The result always lies in `[195°, 345°]`: the fan never opens downward
/// where the finger would cover it, and tilts sideways near the left and
/// right edges so the icons are not clipped.
pub fn center_angle(touch: Point, screen: ScreenSize) -> f32 {
    let x_ratio = axis_ratio(touch.x, screen.width);
    let y_ratio = axis_ratio(touch.y, screen.height);

    let base = 330.0 - x_ratio * 120.0;

    let edge_boost = if x_ratio < LEFT_EDGE_ZONE {
        (LEFT_EDGE_ZONE - x_ratio) * EDGE_BOOST_PER_RATIO
    } else if x_ratio > RIGHT_EDGE_ZONE {
        -(x_ratio - RIGHT_EDGE_ZONE) * EDGE_BOOST_PER_RATIO
    } else {
        0.0
    };

    let top_adjust = if y_ratio < TOP_ZONE {
        if x_ratio < 0.5 {
            -TOP_ADJUST_DEG
        } else {
            TOP_ADJUST_DEG
        }
    } else {
        0.0
    };

    (base + edge_boost + top_adjust).clamp(MIN_CENTER_ANGLE, MAX_CENTER_ANGLE)
}

/// Resolve a cumulative drag vector into the armed action, if any.
pub fn selection_from_drag(
    drag: Point,
    center_angle: f32,
    dead_zone_px: f32,
    sectors: &SectorBounds,
) -> Option<RadialAction> {
    if drag.length() < dead_zone_px {
        return None;
    }
    let raw = normalize_angle(drag.y.atan2(drag.x).to_degrees());
    let relative = normalize_angle(raw - center_angle);
    sectors.classify(relative)
}
