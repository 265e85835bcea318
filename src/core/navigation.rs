//! Page destinations reachable from the bottom menu.

use derive_more::Display;

/// Height of the fixed top bar (`h-16`) at a 16px root font; used when the
/// rendered bar cannot be measured
pub const NAV_HEIGHT_PX: f64 = 64.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum NavDestination {
    Home,
    About,
    Projects,
    Skills,
    Contact,
}

impl NavDestination {
    /// Menu order
    pub const ALL: [NavDestination; 5] = [
        NavDestination::Home,
        NavDestination::About,
        NavDestination::Projects,
        NavDestination::Skills,
        NavDestination::Contact,
    ];

    /// Id of the section element the entry scrolls to
    pub fn anchor_id(&self) -> &'static str {
        match self {
            NavDestination::Home => "home",
            NavDestination::About => "about",
            NavDestination::Projects => "projects",
            NavDestination::Skills => "skills",
            NavDestination::Contact => "contact",
        }
    }

    pub fn href(&self) -> String {
        format!("#{}", self.anchor_id())
    }

    pub fn icon(&self) -> &'static str {
        match self {
            NavDestination::Home => "home",
            NavDestination::About => "user",
            NavDestination::Projects => "briefcase",
            NavDestination::Skills => "code",
            NavDestination::Contact => "mail",
        }
    }

    pub fn from_anchor(anchor: &str) -> Option<Self> {
        let anchor = anchor.trim_start_matches('#');
        Self::ALL.into_iter().find(|d| d.anchor_id() == anchor)
    }
}

/// Scroll offset that puts a section's top just below the fixed top bar
pub fn anchor_scroll_offset(section_top: f64, nav_height: f64) -> f64 {
    (section_top - nav_height).max(0.0)
}

/// Offset for a section using the bar's measured height, if there is one
pub fn destination_offset(section_top: f64, rendered_nav_height: Option<f64>) -> f64 {
    let nav_height = rendered_nav_height
        .filter(|height| height.is_finite() && *height >= 0.0)
        .unwrap_or(NAV_HEIGHT_PX);
    anchor_scroll_offset(section_top, nav_height)
}
