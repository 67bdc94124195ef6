//! Sample content shown on the mock screens
//!
//! Presentation data only. Layout code reads these tables and never hardcodes
//! names or dates itself.

use aurora_core::Color;
use aurora_layout::TreeSlot;

use crate::palette::{CORAL, LAVENDER, MINT, PEACH, SKY, VIOLET};

/// One row of a list screen
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Entry {
    pub label: &'static str,
    pub secondary: &'static str,
    /// Short text shown in a pill at the end of the row
    pub badge: Option<&'static str>,
    pub accent: Color,
    /// Switch on, contact selected, etc.
    pub highlighted: bool,
}

impl Entry {
    const fn new(
        label: &'static str,
        secondary: &'static str,
        badge: Option<&'static str>,
        accent: Color,
        highlighted: bool,
    ) -> Self {
        Self {
            label,
            secondary,
            badge,
            accent,
            highlighted,
        }
    }

    /// First character of the label
    pub fn initial(&self) -> &'static str {
        self.label
            .char_indices()
            .nth(1)
            .map_or(self.label, |(end, _)| &self.label[..end])
    }
}

/// Node of the relationship tree
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TreeNode {
    pub id: &'static str,
    pub initials: &'static str,
    pub color: Color,
    pub label: &'static str,
    /// Index of the parent in the same table
    pub parent: Option<usize>,
    /// Horizontal offset from the screen centre, fraction of the width
    pub offset: f64,
}

impl TreeNode {
    pub fn slot(&self) -> TreeSlot {
        TreeSlot {
            parent: self.parent,
            offset: self.offset,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gift {
    pub name: &'static str,
    pub price: &'static str,
    pub color: Color,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Plan {
    pub name: &'static str,
    pub price: &'static str,
    pub popular: bool,
}

// ─────────────────────────────────────────────────────────────────────────────
// Home
// ─────────────────────────────────────────────────────────────────────────────

pub const BIRTHDAYS: &[Entry] = &[
    Entry::new("Emma Andersson", "15 feb · Fyller 30 år", Some("7d"), CORAL, false),
    Entry::new("Oscar Lindqvist", "22 feb · Fyller 25 år", Some("14d"), VIOLET, false),
    Entry::new("Sofia Bergström", "3 mar · Fyller 28 år", Some("23d"), MINT, false),
    Entry::new("Alexander Ek", "14 mar · Fyller 35 år", Some("34d"), SKY, false),
    Entry::new("Maja Johansson", "1 apr · Fyller 22 år", Some("52d"), PEACH, false),
    Entry::new("Erik Nilsson", "18 apr · Fyller 40 år", Some("71d"), VIOLET, false),
];

// ─────────────────────────────────────────────────────────────────────────────
// Countdown
// ─────────────────────────────────────────────────────────────────────────────

pub const COUNTDOWN_NAME: &str = "Emma Andersson";
pub const COUNTDOWN_DETAIL: &str = "Fyller 30 år · 15 februari";
pub const COUNTDOWN_DAYS: &str = "7";
pub const COUNTDOWN_CAPTION: &str = "dagar kvar";

/// Value and unit for each countdown tile
pub const COUNTDOWN_UNITS: &[(&str, &str)] = &[("7", "dagar"), ("4", "timmar"), ("32", "minuter")];

pub const UPCOMING: &[Entry] = &[
    Entry::new("Oscar Lindqvist", "22 feb", Some("14d"), VIOLET, false),
    Entry::new("Sofia Bergström", "3 mar", Some("23d"), MINT, false),
    Entry::new("Alexander Ek", "14 mar", Some("34d"), SKY, false),
    Entry::new("Maja Johansson", "1 apr", Some("52d"), PEACH, false),
    Entry::new("Erik Nilsson", "18 apr", Some("71d"), VIOLET, false),
];

// ─────────────────────────────────────────────────────────────────────────────
// Reminders
// ─────────────────────────────────────────────────────────────────────────────

pub const REMINDERS: &[Entry] = &[
    Entry::new("Samma dag", "Kl. 09:00", None, VIOLET, true),
    Entry::new("En dag innan", "Kl. 18:00", None, SKY, true),
    Entry::new("En vecka innan", "Hinner köpa present", None, CORAL, true),
    Entry::new("Två veckor innan", "För långväga vänner", None, PEACH, false),
    Entry::new("Jämna födelsedagar", "Extra påminnelse vid 30, 40 och 50", None, VIOLET, true),
    Entry::new("Namnsdagar", "Från svenska almanackan", None, LAVENDER, false),
    Entry::new("Veckosammanfattning", "Varje måndag", None, SKY, false),
];

// ─────────────────────────────────────────────────────────────────────────────
// Import
// ─────────────────────────────────────────────────────────────────────────────

pub const CONTACTS: &[Entry] = &[
    Entry::new("Anna Svensson", "12 jan", None, CORAL, true),
    Entry::new("Björn Karlsson", "Saknar datum", None, SKY, false),
    Entry::new("Clara Holm", "9 maj", None, MINT, true),
    Entry::new("David Öberg", "27 jun", None, VIOLET, true),
    Entry::new("Elin Ström", "Saknar datum", None, PEACH, false),
    Entry::new("Fredrik Lund", "2 okt", None, LAVENDER, true),
    Entry::new("Greta Nyberg", "30 nov", None, CORAL, false),
    Entry::new("Hugo Åberg", "16 dec", None, SKY, false),
];

// ─────────────────────────────────────────────────────────────────────────────
// Gifts
// ─────────────────────────────────────────────────────────────────────────────

pub const GIFT_RECIPIENT: &str = "Presenttips för Emma";
pub const GIFT_DETAIL: &str = "Fyller 30 år · 15 februari";
pub const GIFT_BUTTON: &str = "Swisha Emma";

pub const GIFTS: &[Gift] = &[
    Gift {
        name: "Smycken",
        price: "299 kr",
        color: CORAL,
    },
    Gift {
        name: "Böcker",
        price: "199 kr",
        color: VIOLET,
    },
    Gift {
        name: "Hudvård",
        price: "349 kr",
        color: MINT,
    },
    Gift {
        name: "Upplevelse",
        price: "499 kr",
        color: SKY,
    },
];

// ─────────────────────────────────────────────────────────────────────────────
// Relations
// ─────────────────────────────────────────────────────────────────────────────

pub const FAMILY: &[TreeNode] = &[
    TreeNode {
        id: "inga",
        initials: "IL",
        color: VIOLET,
        label: "Mormor Inga",
        parent: None,
        offset: 0.0,
    },
    TreeNode {
        id: "karin",
        initials: "KA",
        color: CORAL,
        label: "Mamma",
        parent: Some(0),
        offset: -0.22,
    },
    TreeNode {
        id: "peter",
        initials: "PL",
        color: SKY,
        label: "Morbror Peter",
        parent: Some(0),
        offset: 0.22,
    },
    TreeNode {
        id: "emma",
        initials: "EA",
        color: MINT,
        label: "Emma",
        parent: Some(1),
        offset: -0.32,
    },
    TreeNode {
        id: "oscar",
        initials: "OA",
        color: PEACH,
        label: "Oscar",
        parent: Some(1),
        offset: -0.1,
    },
    TreeNode {
        id: "sofia",
        initials: "SL",
        color: LAVENDER,
        label: "Sofia",
        parent: Some(2),
        offset: 0.22,
    },
];

/// Tier centre lines by depth, fractions of the screen height
pub const FAMILY_TIERS: &[f64] = &[0.26, 0.46, 0.66];

// ─────────────────────────────────────────────────────────────────────────────
// Calendar
// ─────────────────────────────────────────────────────────────────────────────

pub const CALENDAR_MONTH: &str = "Februari 2026";
pub const WEEKDAYS: [&str; 7] = ["Mån", "Tis", "Ons", "Tor", "Fre", "Lör", "Sön"];
pub const MONTH_DAYS: u32 = 28;
/// Weekday index of the 1st (0 = Monday)
pub const MONTH_START: u32 = 6;
pub const TODAY: u32 = 8;
pub const CALENDAR_BIRTHDAYS: &[(u32, Color)] = &[(15, CORAL), (22, SKY)];

// ─────────────────────────────────────────────────────────────────────────────
// Premium
// ─────────────────────────────────────────────────────────────────────────────

pub const PREMIUM_TITLE: &str = "Birthday Premium";
pub const PREMIUM_FEATURES: &str = "Obegränsat · Reklamfritt · Export";
pub const PREMIUM_BADGE: &str = "Populärast";

pub const PLANS: &[Plan] = &[
    Plan {
        name: "Månadsvis",
        price: "29 kr/mån",
        popular: false,
    },
    Plan {
        name: "Årsvis",
        price: "199 kr/år",
        popular: true,
    },
    Plan {
        name: "Livstid",
        price: "499 kr",
        popular: false,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_handles_multibyte() {
        let entry = Entry::new("Örjan Åberg", "", None, SKY, false);
        assert_eq!(entry.initial(), "Ö");
        assert_eq!(BIRTHDAYS[0].initial(), "E");
    }

    #[test]
    fn test_family_parents_point_backwards() {
        for (i, node) in FAMILY.iter().enumerate() {
            if let Some(p) = node.parent {
                assert!(p < i, "{} points forward", node.id);
            }
        }
    }

    #[test]
    fn test_exactly_one_popular_plan() {
        assert_eq!(PLANS.iter().filter(|p| p.popular).count(), 1);
    }
}
