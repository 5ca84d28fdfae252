// Tab Items
// The application's fixed set of tabs

use std::fmt;
use std::str::FromStr;

use tui_components::TabCatalog;

/// A tab of the bottom bar, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TabItem {
    #[default]
    Home,
    Search,
    Notification,
    Setting,
}

impl TabItem {
    pub const ALL: [TabItem; 4] = [
        TabItem::Home,
        TabItem::Search,
        TabItem::Notification,
        TabItem::Setting,
    ];
}

impl TabCatalog for TabItem {
    fn all() -> &'static [Self] {
        &Self::ALL
    }

    fn label(&self) -> &'static str {
        match self {
            TabItem::Home => "home",
            TabItem::Search => "search",
            TabItem::Notification => "notification",
            TabItem::Setting => "setting",
        }
    }

    fn symbol(&self) -> &'static str {
        match self {
            TabItem::Home => "house",
            TabItem::Search => "magnifyingglass",
            TabItem::Notification => "bell",
            TabItem::Setting => "gearshape",
        }
    }

    fn glyph(&self) -> &'static str {
        match self {
            TabItem::Home => "⌂",
            TabItem::Search => "⌕",
            TabItem::Notification => "⍾",
            TabItem::Setting => "⚙",
        }
    }
}

impl fmt::Display for TabItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Name that matches no tab
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown tab '{0}' (expected one of: home, search, notification, setting)")]
pub struct UnknownTab(pub String);

impl FromStr for TabItem {
    type Err = UnknownTab;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TabItem::from_label(s.trim()).ok_or_else(|| UnknownTab(s.to_string()))
    }
}
