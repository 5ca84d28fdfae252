// Tab Catalog
// A fixed, ordered set of tab identifiers the tab bar is generic over

use std::fmt::Debug;

/// Fixed, ordered set of tabs
///
/// Implemented by a plain enum: `all()` lists the variants in declaration order,
/// which is also the order the buttons are laid out in.
///
/// ```rust,ignore
/// #[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// enum Tab { Inbox, Archive }
///
/// impl TabCatalog for Tab {
///     fn all() -> &'static [Self] { &[Tab::Inbox, Tab::Archive] }
///     fn label(&self) -> &'static str { match self { Tab::Inbox => "inbox", Tab::Archive => "archive" } }
///     fn symbol(&self) -> &'static str { match self { Tab::Inbox => "tray", Tab::Archive => "archivebox" } }
///     fn glyph(&self) -> &'static str { match self { Tab::Inbox => "▤", Tab::Archive => "▦" } }
/// }
/// ```
pub trait TabCatalog: Copy + Eq + Debug + 'static {
    /// Every tab, in declaration order
    fn all() -> &'static [Self];

    /// Stable raw name, used both as the display label and as the identity key
    fn label(&self) -> &'static str;

    /// Icon reference (symbol name)
    fn symbol(&self) -> &'static str;

    /// Single-cell glyph drawn for the icon
    fn glyph(&self) -> &'static str;

    /// Zero-based position in `all()`
    /// Falls back to 0 for a value missing from `all()`, which a well-formed catalog never has
    fn index(&self) -> usize {
        Self::all().iter().position(|tab| tab == self).unwrap_or(0)
    }

    /// Tab at a position, if in range
    fn from_index(index: usize) -> Option<Self> {
        Self::all().get(index).copied()
    }

    /// Look up a tab by its raw name
    fn from_label(label: &str) -> Option<Self> {
        Self::all().iter().copied().find(|tab| tab.label() == label)
    }

    /// Neighbouring tab, wrapping around both ends
    fn offset(&self, direction: i32) -> Self {
        let all = Self::all();
        if all.is_empty() {
            return *self;
        }
        let count = all.len() as i32;
        let next = (self.index() as i32 + direction).rem_euclid(count);
        all[next as usize]
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::TabCatalog;

    /// Small catalog used by the component tests
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum Demo {
        Home,
        Search,
        Notification,
        Setting,
    }

    impl TabCatalog for Demo {
        fn all() -> &'static [Self] {
            &[Demo::Home, Demo::Search, Demo::Notification, Demo::Setting]
        }

        fn label(&self) -> &'static str {
            match self {
                Demo::Home => "home",
                Demo::Search => "search",
                Demo::Notification => "notification",
                Demo::Setting => "setting",
            }
        }

        fn symbol(&self) -> &'static str {
            match self {
                Demo::Home => "house",
                Demo::Search => "magnifyingglass",
                Demo::Notification => "bell",
                Demo::Setting => "gearshape",
            }
        }

        fn glyph(&self) -> &'static str {
            match self {
                Demo::Home => "H",
                Demo::Search => "S",
                Demo::Notification => "N",
                Demo::Setting => "G",
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::Demo;
    use super::*;

    #[test]
    fn test_index_matches_declaration_order() {
        for (position, tab) in Demo::all().iter().enumerate() {
            assert_eq!(tab.index(), position);
            assert_eq!(Demo::from_index(position), Some(*tab));
        }
        assert_eq!(Demo::from_index(4), None);
    }

    /// Catalog whose `all()` leaves out one of its values
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Partial {
        First,
        Second,
        Unlisted,
    }

    impl TabCatalog for Partial {
        fn all() -> &'static [Self] {
            &[Partial::First, Partial::Second]
        }

        fn label(&self) -> &'static str {
            match self {
                Partial::First => "first",
                Partial::Second => "second",
                Partial::Unlisted => "unlisted",
            }
        }

        fn symbol(&self) -> &'static str {
            "circle"
        }

        fn glyph(&self) -> &'static str {
            "o"
        }
    }

    #[test]
    fn test_index_of_unlisted_value_falls_back_to_zero() {
        assert_eq!(Partial::Second.index(), 1);
        assert_eq!(Partial::Unlisted.index(), 0);
        assert_eq!(Partial::from_label("unlisted"), None);
    }

    #[test]
    fn test_from_label() {
        assert_eq!(Demo::from_label("search"), Some(Demo::Search));
        assert_eq!(Demo::from_label("Search"), None);
    }

    #[test]
    fn test_offset_wraps() {
        assert_eq!(Demo::Home.offset(-1), Demo::Setting);
        assert_eq!(Demo::Setting.offset(1), Demo::Home);
        assert_eq!(Demo::Search.offset(2), Demo::Setting);
    }
}
