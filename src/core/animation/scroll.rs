//! Scroll windows and scroll-linked animation bindings.
//!
//! A window is two anchors such as `"top center+=100"`: the first word picks
//! a point on the trigger element, the second a point in the viewport, and
//! the anchor is crossed when the two points line up. Progress through the
//! window runs from 0 at the start anchor to 1 at the end anchor.

use std::str::FromStr;

use super::descriptor::{ElementId, PropertyTrack};
use super::easing::Easing;
use super::error::AnimationError;
use super::timeline::Timeline;

/// Document-space box of an element
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementGeometry {
    /// Distance from the top of the document
    pub top: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub scroll_y: f64,
}

/// A point along an element's or the viewport's height
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Edge {
    Top,
    Center,
    Bottom,
    Percent(f64),
    Pixels(f64),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgePosition {
    pub edge: Edge,
    pub adjust_px: f64,
}

impl EdgePosition {
    /// Offset from the top of a box of height `length`
    pub fn offset_in(&self, length: f64) -> f64 {
        let base = match self.edge {
            Edge::Top => 0.0,
            Edge::Center => length / 2.0,
            Edge::Bottom => length,
            Edge::Percent(p) => length * p / 100.0,
            Edge::Pixels(px) => px,
        };
        base + self.adjust_px
    }
}

impl FromStr for EdgePosition {
    type Err = AnimationError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let invalid = || AnimationError::InvalidScrollAnchor(token.to_string());

        let (base, adjust_px) = match token.find(['+', '-']) {
            Some(0) | None => (token, 0.0),
            Some(i) => {
                let (base, rest) = token.split_at(i);
                let sign = if rest.starts_with('-') { -1.0 } else { 1.0 };
                let amount = rest[1..]
                    .strip_prefix('=')
                    .ok_or_else(invalid)?
                    .trim_end_matches("px")
                    .parse::<f64>()
                    .map_err(|_| invalid())?;
                (base, sign * amount)
            }
        };

        let edge = match base {
            "top" => Edge::Top,
            "center" => Edge::Center,
            "bottom" => Edge::Bottom,
            other if other.ends_with('%') => Edge::Percent(
                other
                    .trim_end_matches('%')
                    .parse()
                    .map_err(|_| invalid())?,
            ),
            other => Edge::Pixels(
                other
                    .trim_end_matches("px")
                    .parse()
                    .map_err(|_| invalid())?,
            ),
        };

        Ok(Self { edge, adjust_px })
    }
}

/// Element point paired with a viewport point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollAnchor {
    pub element: EdgePosition,
    pub viewport: EdgePosition,
}

impl ScrollAnchor {
    /// Scroll offset at which the two points line up
    pub fn scroll_offset(&self, geometry: &ElementGeometry, viewport_height: f64) -> f64 {
        geometry.top + self.element.offset_in(geometry.height)
            - self.viewport.offset_in(viewport_height)
    }
}

impl FromStr for ScrollAnchor {
    type Err = AnimationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split_whitespace();
        let element = parts
            .next()
            .ok_or_else(|| AnimationError::InvalidScrollAnchor(s.to_string()))?
            .parse()?;
        let viewport = match parts.next() {
            Some(token) => token.parse()?,
            None => EdgePosition {
                edge: Edge::Top,
                adjust_px: 0.0,
            },
        };
        if parts.next().is_some() {
            return Err(AnimationError::InvalidScrollAnchor(s.to_string()));
        }
        Ok(Self { element, viewport })
    }
}

/// Start and end anchors of a scroll-linked animation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollWindow {
    pub start: ScrollAnchor,
    pub end: ScrollAnchor,
}

impl ScrollWindow {
    pub fn new(start: &str, end: &str) -> Result<Self, AnimationError> {
        Ok(Self {
            start: start.parse()?,
            end: end.parse()?,
        })
    }

    /// Window that ends when the trigger's bottom leaves the top of the viewport
    pub fn starting_at(start: &str) -> Result<Self, AnimationError> {
        Self::new(start, "bottom top")
    }

    pub fn resolve(&self, geometry: &ElementGeometry, viewport_height: f64) -> ScrollRange {
        ScrollRange {
            start: self.start.scroll_offset(geometry, viewport_height),
            end: self.end.scroll_offset(geometry, viewport_height),
        }
    }
}

/// Window resolved against concrete geometry
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollRange {
    pub start: f64,
    pub end: f64,
}

impl ScrollRange {
    pub fn length(&self) -> f64 {
        (self.end - self.start).max(0.0)
    }

    pub fn progress(&self, scroll_y: f64) -> f64 {
        if self.end <= self.start {
            return if scroll_y >= self.start { 1.0 } else { 0.0 };
        }
        ((scroll_y - self.start) / (self.end - self.start)).clamp(0.0, 1.0)
    }

    pub fn has_started(&self, scroll_y: f64) -> bool {
        scroll_y >= self.start
    }
}

/// What a scroll window drives
#[derive(Debug, Clone, PartialEq)]
pub enum ScrollAnimation {
    /// Tracks follow window progress, optionally trailing it by `lag_ms`
    Scrub {
        target: ElementId,
        tracks: Vec<PropertyTrack>,
        easing: Easing,
        lag_ms: Option<f64>,
    },
    /// Element is held in place while the window is active
    Pin { target: ElementId },
    /// Timeline starts once, the first time the window start is crossed
    PlayOnEnter(Timeline),
}

impl ScrollAnimation {
    pub fn targets(&self) -> Vec<ElementId> {
        match self {
            ScrollAnimation::Scrub { target, .. } | ScrollAnimation::Pin { target } => {
                vec![target.clone()]
            }
            ScrollAnimation::PlayOnEnter(timeline) => timeline.targets(),
        }
    }
}
