//! Screen catalog: marketing copy, background and composer per screenshot

use aurora_core::ColorStops;

use crate::composers::{
    calendar, countdown, gifts, home, import, premium, relations, reminders, Composer,
};
use crate::palette::{CORAL, MINT, PEACH, SKY, VIOLET};

/// One screenshot in the store listing
#[derive(Clone)]
pub struct ScreenSpec {
    /// Catalog key
    pub name: &'static str,
    /// Output file name without extension
    pub file_stem: &'static str,
    /// Marketing headline, may span several lines
    pub title: &'static str,
    pub subtitle: &'static str,
    /// Background gradient stops, top to bottom
    pub stops: ColorStops,
    pub composer: Composer,
}

impl std::fmt::Debug for ScreenSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScreenSpec")
            .field("name", &self.name)
            .field("file_stem", &self.file_stem)
            .field("title", &self.title)
            .finish_non_exhaustive()
    }
}

/// All screens in store order
pub fn catalog() -> Vec<ScreenSpec> {
    vec![
        ScreenSpec {
            name: "home",
            file_stem: "01_home",
            title: "Alla födelsedagar\npå ett ställe",
            subtitle: "Smarta påminnelser så du aldrig glömmer",
            stops: ColorStops::three(VIOLET, SKY, MINT),
            composer: home::compose,
        },
        ScreenSpec {
            name: "countdown",
            file_stem: "02_countdown",
            title: "Räkna ner\ntill varje fest",
            subtitle: "Se exakt hur länge det är kvar",
            stops: ColorStops::two(CORAL, VIOLET),
            composer: countdown::compose,
        },
        ScreenSpec {
            name: "reminders",
            file_stem: "03_reminders",
            title: "Påminnelser\nnär du vill",
            subtitle: "En vecka, en dag eller samma morgon",
            stops: ColorStops::two(SKY, VIOLET),
            composer: reminders::compose,
        },
        ScreenSpec {
            name: "import",
            file_stem: "04_import",
            title: "Importera\nfrån kontakter",
            subtitle: "Alla födelsedagar på några sekunder",
            stops: ColorStops::two(MINT, SKY),
            composer: import::compose,
        },
        ScreenSpec {
            name: "gifts",
            file_stem: "05_gifts",
            title: "Smarta presenttips",
            subtitle: "Åldersbaserade förslag via Amazon & Coolstuff",
            stops: ColorStops::two(CORAL, PEACH),
            composer: gifts::compose,
        },
        ScreenSpec {
            name: "relations",
            file_stem: "06_relations",
            title: "Hela familjen\növerblick",
            subtitle: "Håll koll på släkt och vänner",
            stops: ColorStops::two(PEACH, VIOLET),
            composer: relations::compose,
        },
        ScreenSpec {
            name: "calendar",
            file_stem: "07_calendar",
            title: "Kalendervy",
            subtitle: "Se alla födelsedagar i månadsöversikt",
            stops: ColorStops::two(SKY, MINT),
            composer: calendar::compose,
        },
        ScreenSpec {
            name: "premium",
            file_stem: "08_premium",
            title: "Birthday Premium",
            subtitle: "Obegränsat, reklamfritt och mer",
            stops: ColorStops::two(VIOLET, CORAL),
            composer: premium::compose,
        },
    ]
}

/// Look up a screen by catalog key
pub fn find(name: &str) -> Option<ScreenSpec> {
    catalog().into_iter().find(|s| s.name == name)
}

/// Catalog keys in store order
pub fn names() -> Vec<&'static str> {
    catalog().iter().map(|s| s.name).collect()
}
