//! Static sample data shown on the Home screen.
//!
//! The demo has no backend; these lists stand in for catalog content.

/// A browsable garden theme shown in the horizontal strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GardenTheme {
    pub title: &'static str,
}

/// A plant in the "Design your home garden" list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Plant {
    pub title: &'static str,
    pub description: &'static str,
}

/// Tabs in the bottom navigation bar. Only `Home` is active in the demo.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BottomTab {
    Home,
    Favorites,
    Profile,
    Cart,
}

impl BottomTab {
    pub const ALL: [BottomTab; 4] = [
        BottomTab::Home,
        BottomTab::Favorites,
        BottomTab::Profile,
        BottomTab::Cart,
    ];

    pub fn label(self) -> &'static str {
        match self {
            BottomTab::Home => "Home",
            BottomTab::Favorites => "Favorites",
            BottomTab::Profile => "Profile",
            BottomTab::Cart => "Cart",
        }
    }
}

pub const THEMES: [GardenTheme; 5] = [
    GardenTheme { title: "Desert chic" },
    GardenTheme { title: "Tiny terrariums" },
    GardenTheme { title: "Jungle vibes" },
    GardenTheme { title: "Easy care" },
    GardenTheme { title: "Statements" },
];

pub const PLANTS: [Plant; 6] = [
    Plant {
        title: "Monstera",
        description: "This is a description",
    },
    Plant {
        title: "Aglaonema",
        description: "This is a description",
    },
    Plant {
        title: "Peace lily",
        description: "This is a description",
    },
    Plant {
        title: "Fiddle leaf",
        description: "This is a description",
    },
    Plant {
        title: "Snake plant",
        description: "This is a description",
    },
    Plant {
        title: "Pothos",
        description: "This is a description",
    },
];
