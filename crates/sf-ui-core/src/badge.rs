//! Cart and wishlist count badges.

use crate::parse;

/// Which badge family a count belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BadgeKind {
    Cart,
    Wishlist,
}

impl BadgeKind {
    /// Element id shared by every badge of this kind on the page.
    pub fn element_id(self) -> &'static str {
        match self {
            BadgeKind::Cart => "cart-count",
            BadgeKind::Wishlist => "wishlist-count",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct BadgeCount(pub u32);

impl BadgeCount {
    /// Read a count back from badge text. Unreadable or negative text is zero.
    pub fn parse(text: &str) -> Self {
        let value = parse::leading_int(text).unwrap_or(0);
        Self(value.clamp(0, i64::from(u32::MAX)) as u32)
    }

    pub fn is_visible(self) -> bool {
        self.0 > 0
    }

    /// CSS `display` value for the badge.
    pub fn display(self) -> &'static str {
        if self.is_visible() { "inline-block" } else { "none" }
    }

    pub fn text(self) -> String {
        self.0.to_string()
    }
}

impl From<u32> for BadgeCount {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visible_iff_positive() {
        assert!(!BadgeCount(0).is_visible());
        assert_eq!(BadgeCount(0).display(), "none");
        for n in [1, 2, 3, 99, u32::MAX] {
            assert!(BadgeCount(n).is_visible());
            assert_eq!(BadgeCount(n).display(), "inline-block");
        }
    }

    #[test]
    fn parse_tolerates_page_text() {
        assert_eq!(BadgeCount::parse("3"), BadgeCount(3));
        assert_eq!(BadgeCount::parse(" 12 "), BadgeCount(12));
        assert_eq!(BadgeCount::parse(""), BadgeCount(0));
        assert_eq!(BadgeCount::parse("n/a"), BadgeCount(0));
        assert_eq!(BadgeCount::parse("-2"), BadgeCount(0));
    }

    #[test]
    fn element_ids_match_templates() {
        assert_eq!(BadgeKind::Cart.element_id(), "cart-count");
        assert_eq!(BadgeKind::Wishlist.element_id(), "wishlist-count");
    }
}
