//! Menu definitions and choice parsing

use crate::query::{SortDirection, SortKey};

/// Shell state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuState {
    Main,
    Filter,
    Exit,
}

/// Main menu actions (options 1-9)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainAction {
    Add,
    Update,
    Search,
    Filter,
    Sort,
    Statistics,
    ShowAll,
    Save,
    Exit,
}

impl MainAction {
    pub const MENU: &'static str = "\
1. Add country
2. Update country data
3. Search country by name
4. Filter countries
5. Sort countries
6. Show statistics
7. Show all countries
8. Save data
9. Exit";

    pub fn from_choice(choice: &str) -> Option<Self> {
        let action = match choice.trim() {
            "1" => MainAction::Add,
            "2" => MainAction::Update,
            "3" => MainAction::Search,
            "4" => MainAction::Filter,
            "5" => MainAction::Sort,
            "6" => MainAction::Statistics,
            "7" => MainAction::ShowAll,
            "8" => MainAction::Save,
            "9" => MainAction::Exit,
            _ => return None,
        };
        Some(action)
    }
}

/// Filter submenu actions (options 1-4)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterAction {
    Continent,
    PopulationRange,
    AreaRange,
    Back,
}

impl FilterAction {
    pub const MENU: &'static str = "\
1. By continent
2. By population range
3. By area range
4. Back to main menu";

    pub fn from_choice(choice: &str) -> Option<Self> {
        let action = match choice.trim() {
            "1" => FilterAction::Continent,
            "2" => FilterAction::PopulationRange,
            "3" => FilterAction::AreaRange,
            "4" => FilterAction::Back,
            _ => return None,
        };
        Some(action)
    }
}

/// Sort submenu options (1-6)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortOption {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl SortOption {
    pub const MENU: &'static str = "\
1. Sort by name (A-Z)
2. Sort by name (Z-A)
3. Sort by population (ascending)
4. Sort by population (descending)
5. Sort by area (ascending)
6. Sort by area (descending)";

    pub fn from_choice(choice: &str) -> Option<Self> {
        use SortDirection::{Ascending, Descending};

        let (key, direction) = match choice.trim() {
            "1" => (SortKey::Name, Ascending),
            "2" => (SortKey::Name, Descending),
            "3" => (SortKey::Population, Ascending),
            "4" => (SortKey::Population, Descending),
            "5" => (SortKey::Area, Ascending),
            "6" => (SortKey::Area, Descending),
            _ => return None,
        };
        Some(Self { key, direction })
    }

    /// Human-readable description, e.g. "population (descending)"
    pub fn label(&self) -> &'static str {
        match (self.key, self.direction) {
            (SortKey::Name, SortDirection::Ascending) => "name (A-Z)",
            (SortKey::Name, SortDirection::Descending) => "name (Z-A)",
            (SortKey::Population, SortDirection::Ascending) => "population (ascending)",
            (SortKey::Population, SortDirection::Descending) => "population (descending)",
            (SortKey::Area, SortDirection::Ascending) => "area (ascending)",
            (SortKey::Area, SortDirection::Descending) => "area (descending)",
        }
    }
}
