//! REPL Session
//!
//! Holds per-session state (pagination cursors, the Pokedex, the catch RNG)
//! and executes one input line at a time.

use std::io::Write;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use crate::api::PokeApiClient;
use crate::error::{PokedexError, Result};
use crate::models::{Pokedex, Pokemon};
use crate::repl::Command;

/// Whether the REPL should keep reading input after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Returns true when `roll` is low enough to catch.
pub fn catch_succeeds(roll: u32, threshold: u32) -> bool {
    roll <= threshold
}

/// State of one interactive session.
#[derive(Debug)]
pub struct Session {
    client: PokeApiClient,
    next_url: Option<String>,
    prev_url: Option<String>,
    pokedex: Pokedex,
    rng: StdRng,
    catch_threshold: u32,
}

impl Session {
    /// Starts a session positioned before the first page of location areas.
    pub fn new(client: PokeApiClient, catch_threshold: u32) -> Self {
        Self {
            next_url: Some(client.first_locations_url()),
            prev_url: None,
            client,
            pokedex: Pokedex::new(),
            rng: StdRng::from_entropy(),
            catch_threshold,
        }
    }

    /// Replaces the catch RNG, e.g. with a seeded one.
    pub fn with_rng(mut self, rng: StdRng) -> Self {
        self.rng = rng;
        self
    }

    pub fn client(&self) -> &PokeApiClient {
        &self.client
    }

    pub fn pokedex(&self) -> &Pokedex {
        &self.pokedex
    }

    // == Execute ==
    /// Parses and runs one input line, writing user-facing output to `out`.
    ///
    /// Blank lines do nothing. Command names are case-insensitive.
    pub async fn execute<W: Write>(&mut self, line: &str, out: &mut W) -> Result<Flow> {
        let mut words = line.split_whitespace();
        let Some(name) = words.next() else {
            return Ok(Flow::Continue);
        };
        let command: Command = name.to_lowercase().parse()?;
        let arg = words.next().map(str::to_lowercase);
        debug!(%command, ?arg, "executing command");

        match command {
            Command::Help => self.help(out)?,
            Command::Exit => {
                writeln!(out, "Closing the Pokedex... Goodbye!")?;
                return Ok(Flow::Exit);
            }
            Command::Map => self.map(out).await?,
            Command::MapBack => self.map_back(out).await?,
            Command::Explore => {
                let area = arg.ok_or(PokedexError::MissingArgument("a location area name"))?;
                self.explore(&area, out).await?;
            }
            Command::Catch => {
                let name = arg.ok_or(PokedexError::MissingArgument("a Pokemon name"))?;
                self.catch(&name, out).await?;
            }
            Command::Inspect => {
                let name = arg.ok_or(PokedexError::MissingArgument("a Pokemon name"))?;
                self.inspect(&name, out)?;
            }
            Command::Pokedex => self.list_pokedex(out)?,
        }

        Ok(Flow::Continue)
    }

    fn help<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out)?;
        writeln!(out, "Welcome to the Pokedex!")?;
        writeln!(out, "Usage:")?;
        writeln!(out)?;
        for command in Command::ALL {
            writeln!(out, "{}: {}", command.name(), command.description())?;
        }
        writeln!(out)?;
        Ok(())
    }

    async fn map<W: Write>(&mut self, out: &mut W) -> Result<()> {
        let url = self.next_url.clone().ok_or(PokedexError::NoNextPage)?;
        self.show_page(&url, out).await
    }

    async fn map_back<W: Write>(&mut self, out: &mut W) -> Result<()> {
        let url = self.prev_url.clone().ok_or(PokedexError::NoPreviousPage)?;
        self.show_page(&url, out).await
    }

    /// Prints the page at `url` and moves both cursors to its neighbours.
    async fn show_page<W: Write>(&mut self, url: &str, out: &mut W) -> Result<()> {
        let page = self.client.location_areas(url).await?;
        for name in page.names() {
            writeln!(out, "{}", name)?;
        }

        self.next_url = page.next;
        self.prev_url = page.previous;
        Ok(())
    }

    async fn explore<W: Write>(&mut self, area: &str, out: &mut W) -> Result<()> {
        writeln!(out, "Exploring {}...", area)?;
        let location = self.client.location_area(area).await?;

        writeln!(out, "Found Pokemon:")?;
        for name in location.pokemon_names() {
            writeln!(out, " - {}", name)?;
        }
        Ok(())
    }

    async fn catch<W: Write>(&mut self, name: &str, out: &mut W) -> Result<()> {
        let pokemon = self.client.pokemon(name).await?;
        writeln!(out, "Throwing a Pokeball at {}...", pokemon.name)?;

        let difficulty = pokemon.base_experience.unwrap_or(0).max(1);
        let roll = self.rng.gen_range(0..difficulty);
        debug!(pokemon = %pokemon.name, roll, difficulty, "catch roll");

        if !catch_succeeds(roll, self.catch_threshold) {
            writeln!(out, "{} escaped!", pokemon.name)?;
            return Ok(());
        }

        writeln!(out, "{} was caught!", pokemon.name)?;
        writeln!(out, "You may now inspect it with the inspect command.")?;
        info!(pokemon = %pokemon.name, "caught");
        self.pokedex.insert(pokemon);
        Ok(())
    }

    fn inspect<W: Write>(&self, name: &str, out: &mut W) -> Result<()> {
        let record = self
            .pokedex
            .get(name)
            .ok_or_else(|| PokedexError::NotCaught(name.to_string()))?;
        write_details(&record.pokemon, out)?;
        writeln!(out, "Caught: {}", record.caught_at.format("%Y-%m-%d %H:%M:%S UTC"))?;
        Ok(())
    }

    fn list_pokedex<W: Write>(&self, out: &mut W) -> Result<()> {
        if self.pokedex.is_empty() {
            writeln!(out, "Your Pokedex is empty.")?;
            return Ok(());
        }

        writeln!(out, "Your Pokedex:")?;
        for name in self.pokedex.names() {
            writeln!(out, " - {}", name)?;
        }
        Ok(())
    }
}

fn write_details<W: Write>(pokemon: &Pokemon, out: &mut W) -> std::io::Result<()> {
    writeln!(out, "Name: {}", pokemon.name)?;
    writeln!(out, "Height: {}", pokemon.height)?;
    writeln!(out, "Weight: {}", pokemon.weight)?;
    writeln!(out, "Stats:")?;
    for stat in &pokemon.stats {
        writeln!(out, "  -{}: {}", stat.stat.name, stat.base_stat)?;
    }
    writeln!(out, "Types:")?;
    for kind in &pokemon.types {
        writeln!(out, "  - {}", kind.kind.name)?;
    }
    Ok(())
}
