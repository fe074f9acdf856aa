//! Line-oriented command shell over a [`Registry`]
//!
//! All rendering of records and owner listings happens here; the core
//! modules only hand back data. Operation failures are printed and the
//! session carries on.

mod command;

pub use command::{Command, CommandError, USAGE};

use std::io::{self, BufRead, Write};

use tracing::debug;

use crate::registry::Registry;
use crate::roster::{EvolveOutcome, Roster};
use crate::tree::TraversalOrder;

/// Whether the session should keep reading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Read the next command
    Continue,
    /// Stop the session
    Quit,
}

/// Interactive or scripted front end
#[derive(Debug)]
pub struct Shell {
    registry: Registry,
    prompt: bool,
}

impl Shell {
    /// Wrap a registry; `prompt` prints `> ` before each read
    pub fn new(registry: Registry, prompt: bool) -> Self {
        Self { registry, prompt }
    }

    /// The registry being driven
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Read commands until end of input or `quit`
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> io::Result<()> {
        let mut lines = input.lines();
        loop {
            if self.prompt {
                write!(out, "> ")?;
                out.flush()?;
            }
            let Some(line) = lines.next() else {
                break;
            };
            if self.execute_line(&line?, out)? == Flow::Quit {
                break;
            }
        }
        writeln!(out, "Goodbye!")
    }

    /// Parse and execute one line
    pub fn execute_line<W: Write>(&mut self, line: &str, out: &mut W) -> io::Result<Flow> {
        match Command::parse_line(line) {
            Ok(Some(command)) => self.execute(command, out),
            Ok(None) => Ok(Flow::Continue),
            Err(err) => {
                writeln!(out, "{}", err)?;
                Ok(Flow::Continue)
            }
        }
    }

    /// Execute a parsed command
    pub fn execute<W: Write>(&mut self, command: Command, out: &mut W) -> io::Result<Flow> {
        debug!(?command, "executing");
        match command {
            Command::NewOwner { owner, starter } => {
                match self.registry.create_owner(&owner, starter) {
                    Ok(node) => {
                        let starter = node.roster().get(0).map_or("", |record| record.name.as_str());
                        writeln!(
                            out,
                            "New Pokedex created for {} with starter {}.",
                            node.name(),
                            starter
                        )?;
                    }
                    Err(err) => writeln!(out, "{}. No new Pokedex created.", err)?,
                }
            }
            Command::Add { owner, id } => match self.registry.add_species(&owner, id) {
                Ok((node, record)) => writeln!(
                    out,
                    "Pokemon {} (ID {}) added to {}'s Pokedex.",
                    record.name,
                    record.id,
                    node.name()
                )?,
                Err(err) => writeln!(out, "{}. No changes made.", err)?,
            },
            Command::Release { owner, species } => {
                match self.registry.release_species(&owner, &species) {
                    Ok((node, record)) => {
                        writeln!(out, "Releasing {} from {}.", record.name, node.name())?
                    }
                    Err(err) => writeln!(out, "{}.", err)?,
                }
            }
            Command::Evolve { owner, species } => {
                match self.registry.evolve_species(&owner, &species) {
                    Ok(outcome) => render_evolution(&outcome, out)?,
                    Err(err) => writeln!(out, "{}.", err)?,
                }
            }
            Command::Delete { owner } => match self.registry.delete_owner(&owner) {
                Ok(removed) => writeln!(out, "Deleting {}'s entire Pokedex...", removed.name)?,
                Err(err) => writeln!(out, "{}.", err)?,
            },
            Command::Show { owner, filter } => match self.registry.filter_roster(&owner, &filter) {
                Ok(records) if records.is_empty() => writeln!(
                    out,
                    "There are no Pokemons in this Pokedex that match the criteria."
                )?,
                Ok(records) => {
                    for record in records {
                        writeln!(out, "{}", record)?;
                    }
                }
                Err(err) => writeln!(out, "{}.", err)?,
            },
            Command::List(order) => self.render_listing(order, out)?,
            Command::Rank => self.render_ranking(out)?,
            Command::Starters => {
                for (index, record) in self.registry.starters().into_iter().enumerate() {
                    writeln!(out, "{}) {}", index + 1, record.name)?;
                }
            }
            Command::Help => {
                for usage in USAGE {
                    writeln!(out, "  {}", usage)?;
                }
            }
            Command::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    fn render_listing<W: Write>(&self, order: TraversalOrder, out: &mut W) -> io::Result<()> {
        let owners = self.registry.owners(order);
        if owners.is_empty() {
            return writeln!(out, "No owners at all");
        }
        for node in owners {
            writeln!(out, "{}", node)?;
            render_roster(node.roster(), out)?;
        }
        Ok(())
    }

    fn render_ranking<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let ranking = self.registry.ranking();
        if ranking.is_empty() {
            return writeln!(out, "No owners at all");
        }
        writeln!(out, "=== The Owners we have, sorted by number of Pokemons ===")?;
        for summary in ranking {
            writeln!(out, "{}", summary)?;
        }
        Ok(())
    }
}

fn render_roster<W: Write>(roster: &Roster, out: &mut W) -> io::Result<()> {
    for record in roster {
        writeln!(out, "{}", record)?;
    }
    Ok(())
}

fn render_evolution<W: Write>(outcome: &EvolveOutcome, out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", outcome)
}
