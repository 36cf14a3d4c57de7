//! Shell session
//!
//! Owns the record store for the lifetime of the session and dispatches
//! menu choices to store and query operations.

use std::io::{BufRead, Write};

use crate::config::Config;
use crate::error::{RegistryError, Result};
use crate::model::Country;
use crate::persistence;
use crate::store::RecordStore;

use super::console::Console;
use super::menu::{FilterAction, MainAction, MenuState, SortOption};
use super::render::{render_statistics, render_table};

const EMPTY_STORE: &str = "There are no countries in the registry.";

/// Interactive menu session
pub struct Shell<R, W> {
    console: Console<R, W>,
    store: RecordStore,
    config: Config,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    /// Create a session over an already-built store
    pub fn new(input: R, output: W, store: RecordStore, config: Config) -> Self {
        Self {
            console: Console::new(input, output),
            store,
            config,
        }
    }

    /// Load the data file and create a session
    ///
    /// Any load failure is reported on the console and the session starts
    /// with an empty store. Only console failures are returned.
    pub fn load(input: R, output: W, config: Config) -> Result<Self> {
        let mut shell = Self::new(input, output, RecordStore::new(), config);
        let path = shell.config.data_file.clone();

        match persistence::load_store(&path) {
            Ok(store) => {
                shell
                    .console
                    .say(format!("Data loaded. {} countries found.", store.len()))?;
                shell.store = store;
            }
            Err(RegistryError::DataFileMissing(path)) => {
                tracing::warn!("Data file {} not found, starting empty", path.display());
                shell.console.say(format!(
                    "Data file '{}' does not exist. Starting with an empty registry.",
                    path.display()
                ))?;
            }
            Err(e) => {
                tracing::warn!("Failed to load {}: {}", path.display(), e);
                shell.console.say(format!(
                    "Error reading data file: {}. Starting with an empty registry.",
                    e
                ))?;
            }
        }

        Ok(shell)
    }

    /// Run until the user exits
    ///
    /// Returns `InputClosed` if input ends first; nothing is saved in that case.
    pub fn run(&mut self) -> Result<()> {
        let mut state = MenuState::Main;
        while state != MenuState::Exit {
            let next = match state {
                MenuState::Main => self.main_menu()?,
                MenuState::Filter => self.filter_menu()?,
                MenuState::Exit => MenuState::Exit,
            };
            if next != state {
                tracing::debug!("Menu transition {:?} -> {:?}", state, next);
            }
            state = next;
        }
        Ok(())
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn into_parts(self) -> (RecordStore, W) {
        let (_, output) = self.console.into_parts();
        (self.store, output)
    }

    // =========================================================================
    // Menus
    // =========================================================================

    fn main_menu(&mut self) -> Result<MenuState> {
        let rule = "=".repeat(self.config.table_width.min(50));
        self.console.say("")?;
        self.console.say(&rule)?;
        self.console.say("      COUNTRY REGISTRY")?;
        self.console.say(&rule)?;
        self.console.say(MainAction::MENU)?;
        self.console.say(&rule)?;

        let choice = self.console.read_line("Select an option (1-9): ")?;
        let Some(action) = MainAction::from_choice(&choice) else {
            self.console.say("Invalid option. Please select 1-9.")?;
            return Ok(MenuState::Main);
        };

        match action {
            MainAction::Add => self.add_country()?,
            MainAction::Update => self.update_country()?,
            MainAction::Search => self.search_country()?,
            MainAction::Filter => return Ok(MenuState::Filter),
            MainAction::Sort => self.sort_countries()?,
            MainAction::Statistics => self.show_statistics()?,
            MainAction::ShowAll => self.show_all()?,
            MainAction::Save => self.save()?,
            MainAction::Exit => {
                self.save()?;
                self.console.say("Thank you for using the country registry!")?;
                return Ok(MenuState::Exit);
            }
        }
        Ok(MenuState::Main)
    }

    fn filter_menu(&mut self) -> Result<MenuState> {
        self.console.say("")?;
        self.console.say("--- FILTER COUNTRIES ---")?;
        self.console.say(FilterAction::MENU)?;

        let choice = self.console.read_line("Select an option (1-4): ")?;
        let Some(action) = FilterAction::from_choice(&choice) else {
            self.console.say("Invalid option.")?;
            return Ok(MenuState::Filter);
        };

        match action {
            FilterAction::Continent => self.filter_by_continent()?,
            FilterAction::PopulationRange => self.filter_by_population()?,
            FilterAction::AreaRange => self.filter_by_area()?,
            FilterAction::Back => return Ok(MenuState::Main),
        }
        Ok(MenuState::Filter)
    }

    // =========================================================================
    // Main Menu Actions
    // =========================================================================

    fn add_country(&mut self) -> Result<()> {
        self.console.say("\n--- ADD NEW COUNTRY ---")?;

        let name = self.console.prompt_text("Country name: ")?;
        if self.store.contains(&name) {
            self.console.say("This country already exists in the registry.")?;
            return Ok(());
        }

        let population = self.console.prompt_non_negative("Population: ")?;
        let area = self.console.prompt_non_negative("Area in km²: ")?;
        let continent = self.console.prompt_text("Continent: ")?;

        let added = Country::new(name.as_str(), population, area, continent)
            .and_then(|country| self.store.add(country));
        match added {
            Ok(()) => self
                .console
                .say(format!("Country '{}' added successfully.", name))?,
            Err(e) => self.console.say(format!("Could not add country: {}", e))?,
        }
        Ok(())
    }

    fn update_country(&mut self) -> Result<()> {
        self.console.say("\n--- UPDATE COUNTRY DATA ---")?;
        if self.store.is_empty() {
            return self.console.say(EMPTY_STORE);
        }

        let name = self.console.prompt_text("Name of the country to update: ")?;
        let Some(current) = self.store.get(&name).cloned() else {
            return self.console.say("Country not found.");
        };

        self.console.say("Country found:")?;
        render_table(self.console.output(), [&current], self.config.table_width)?;

        self.console.say("\nNew data:")?;
        let population = self.console.prompt_non_negative("New population: ")?;
        let area = self.console.prompt_non_negative("New area in km²: ")?;

        match self.store.update(&name, population, area) {
            Ok(updated) => {
                let message = format!("Country '{}' updated successfully.", updated.name);
                self.console.say(message)?;
            }
            Err(e) => self.console.say(format!("Could not update country: {}", e))?,
        }
        Ok(())
    }

    fn search_country(&mut self) -> Result<()> {
        self.console.say("\n--- SEARCH COUNTRY ---")?;
        if self.store.is_empty() {
            return self.console.say(EMPTY_STORE);
        }

        let query = self.console.prompt_text("Name to search: ")?;
        let results = self.store.find_by_substring(&query);
        if results.is_empty() {
            return self.console.say("No countries match that name.");
        }

        self.console
            .say(format!("\n{} country(ies) found:", results.len()))?;
        render_table(self.console.output(), results, self.config.table_width)
    }

    fn sort_countries(&mut self) -> Result<()> {
        self.console.say("\n--- SORT COUNTRIES ---")?;
        if self.store.is_empty() {
            return self.console.say(EMPTY_STORE);
        }

        self.console.say(SortOption::MENU)?;
        let choice = self.console.read_line("Select an option (1-6): ")?;
        let Some(option) = SortOption::from_choice(&choice) else {
            return self.console.say("Invalid option.");
        };

        let sorted = self.store.sorted(option.key, option.direction);
        self.console
            .say(format!("\nCountries sorted by {}:", option.label()))?;
        render_table(self.console.output(), &sorted, self.config.table_width)
    }

    fn show_statistics(&mut self) -> Result<()> {
        self.console.say("\n--- STATISTICS ---")?;
        let Some(stats) = self.store.statistics() else {
            return self.console.say(EMPTY_STORE);
        };
        render_statistics(self.console.output(), &stats)
    }

    fn show_all(&mut self) -> Result<()> {
        self.console.say("\n--- ALL COUNTRIES ---")?;
        if self.store.is_empty() {
            return self.console.say(EMPTY_STORE);
        }
        render_table(
            self.console.output(),
            self.store.records(),
            self.config.table_width,
        )
    }

    fn save(&mut self) -> Result<()> {
        let path = &self.config.data_file;
        match persistence::save(self.store.records(), path) {
            Ok(()) => self
                .console
                .say(format!("Data saved to '{}'.", path.display())),
            Err(e) => {
                tracing::warn!("Failed to save {}: {}", path.display(), e);
                self.console.say(format!("Error saving data file: {}", e))
            }
        }
    }

    // =========================================================================
    // Filter Actions
    // =========================================================================

    fn filter_by_continent(&mut self) -> Result<()> {
        self.console.say("\n--- FILTER BY CONTINENT ---")?;
        if self.store.is_empty() {
            return self.console.say(EMPTY_STORE);
        }

        let available = self.store.continents().join(", ");
        self.console
            .say(format!("Available continents: {}", available))?;

        let continent = self.console.prompt_text("Continent to filter: ")?;
        let results = self.store.filter_by_continent(&continent);
        if results.is_empty() {
            return self.console.say("No countries found on that continent.");
        }

        self.console.say(format!(
            "\n{} country(ies) found in {}:",
            results.len(),
            continent
        ))?;
        render_table(self.console.output(), results, self.config.table_width)
    }

    fn filter_by_population(&mut self) -> Result<()> {
        self.console.say("\n--- FILTER BY POPULATION RANGE ---")?;
        if self.store.is_empty() {
            return self.console.say(EMPTY_STORE);
        }

        self.console.say("Enter the population range:")?;
        let min = self.console.prompt_non_negative("Minimum population: ")?;
        let max = self.console.prompt_non_negative("Maximum population: ")?;

        match self.store.filter_by_population_range(min, max) {
            Err(RegistryError::InvalidRange { .. }) => self.console.say(
                "Error: the minimum population cannot be greater than the maximum.",
            ),
            Err(e) => self.console.say(format!("Error: {}", e)),
            Ok(results) if results.is_empty() => self
                .console
                .say("No countries found in that population range."),
            Ok(results) => {
                self.console
                    .say(format!("\n{} country(ies) found in range:", results.len()))?;
                render_table(self.console.output(), results, self.config.table_width)
            }
        }
    }

    fn filter_by_area(&mut self) -> Result<()> {
        self.console.say("\n--- FILTER BY AREA RANGE ---")?;
        if self.store.is_empty() {
            return self.console.say(EMPTY_STORE);
        }

        self.console.say("Enter the area range:")?;
        let min = self.console.prompt_non_negative("Minimum area (km²): ")?;
        let max = self.console.prompt_non_negative("Maximum area (km²): ")?;

        match self.store.filter_by_area_range(min, max) {
            Err(RegistryError::InvalidRange { .. }) => self
                .console
                .say("Error: the minimum area cannot be greater than the maximum."),
            Err(e) => self.console.say(format!("Error: {}", e)),
            Ok(results) if results.is_empty() => {
                self.console.say("No countries found in that area range.")
            }
            Ok(results) => {
                self.console
                    .say(format!("\n{} country(ies) found in range:", results.len()))?;
                render_table(self.console.output(), results, self.config.table_width)
            }
        }
    }
}
