//! Command-line interface for inspecting floors and planning pattern changes

use crate::algorithm::cost::{cost_breakdown, plan_cost};
use crate::algorithm::instructions::replay;
use crate::catalog::report::{floor_report, pair_count};
use crate::catalog::{Catalog, Floor, load_catalog};
use crate::io::configuration::{CATALOG_ENV_VAR, DEFAULT_CATALOG_PATH};
use crate::io::error::Result;
use crate::io::presentation::{
    render_catalog, render_cost, render_instructions, render_report,
};
use crate::io::progress::ProgressManager;
use clap::{ArgAction, Args, Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "tilefloor")]
#[command(
    author,
    version,
    about = "Plan flip and swap operations that change one floor pattern into another"
)]
/// Command-line arguments for the floor pattern tool
pub struct Cli {
    /// Catalog file describing floors and their patterns
    #[arg(short, long, global = true, env = CATALOG_ENV_VAR, default_value = DEFAULT_CATALOG_PATH)]
    pub catalog: PathBuf,

    /// Suppress progress output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Operation to perform
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Available operations
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Show every floor and its patterns
    List,

    /// Estimate the minimum cost of changing one pattern into another
    Cost(PairArgs),

    /// List the operations that change one pattern into another
    Instructions {
        /// Floor and pattern codes
        #[command(flatten)]
        pair: PairArgs,

        /// Replay the instructions and report their actual cost
        #[arg(long)]
        verify: bool,
    },

    /// Compare every ordered pair of patterns on one or all floors
    Report {
        /// Restrict the report to this floor
        #[arg(short, long)]
        floor: Option<String>,
    },
}

/// A floor and an origin/destination pattern pair
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct PairArgs {
    /// Floor name
    #[arg(short, long)]
    pub floor: String,

    /// Origin pattern code
    #[arg(long = "from", value_name = "CODE")]
    pub origin: String,

    /// Destination pattern code
    #[arg(long = "to", value_name = "CODE")]
    pub destination: String,
}

/// Executes a parsed command against a catalog, writing results to a sink
pub struct CommandRunner {
    cli: Cli,
    progress: ProgressManager,
}

impl CommandRunner {
    /// Create a runner for the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        let progress = ProgressManager::new(cli.should_show_progress());
        Self { cli, progress }
    }

    /// Load the configured catalog and run the command
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog cannot be loaded, a floor or pattern
    /// is not found, the patterns differ in shape, or output fails
    pub fn run(&mut self, out: &mut impl Write) -> Result<()> {
        let catalog = load_catalog(&self.cli.catalog)?;
        self.run_with_catalog(&catalog, out)
    }

    /// Run the command against an already loaded catalog
    ///
    /// # Errors
    ///
    /// Returns an error if a floor or pattern is not found, the patterns
    /// differ in shape, or output fails
    pub fn run_with_catalog(&mut self, catalog: &Catalog, out: &mut impl Write) -> Result<()> {
        match self.cli.command.clone() {
            Command::List => {
                out.write_all(render_catalog(catalog).as_bytes())?;
            }
            Command::Cost(pair) => Self::cost(catalog, &pair, out)?,
            Command::Instructions { pair, verify } => {
                Self::instructions(catalog, &pair, verify, out)?;
            }
            Command::Report { floor } => self.report(catalog, floor.as_deref(), out)?,
        }
        Ok(())
    }

    fn cost(catalog: &Catalog, pair: &PairArgs, out: &mut impl Write) -> Result<()> {
        let floor = catalog.floor(&pair.floor)?;
        let (source, target) = floor.pattern_pair(&pair.origin, &pair.destination)?;
        let differences = source.count_differences(target)?;
        let breakdown = cost_breakdown(floor.costs(), differences);
        info!(
            floor = floor.name(),
            origin = %pair.origin,
            destination = %pair.destination,
            cost = breakdown.total,
            "computed minimum cost"
        );

        out.write_all(
            render_cost(floor.name(), &pair.origin, &pair.destination, &breakdown).as_bytes(),
        )?;
        Ok(())
    }

    fn instructions(
        catalog: &Catalog,
        pair: &PairArgs,
        verify: bool,
        out: &mut impl Write,
    ) -> Result<()> {
        let floor = catalog.floor(&pair.floor)?;
        let instructions = floor.instructions(&pair.origin, &pair.destination)?;
        out.write_all(
            render_instructions(floor.name(), &pair.origin, &pair.destination, &instructions)
                .as_bytes(),
        )?;

        if verify {
            let (source, target) = floor.pattern_pair(&pair.origin, &pair.destination)?;
            let replayed = replay(source, &instructions)?;
            let remaining = replayed.count_differences(target)?;
            let estimate = floor.minimum_cost(&pair.origin, &pair.destination)?;
            if remaining == 0 {
                writeln!(
                    out,
                    "Verified: {} instruction(s) reproduce pattern {} (plan cost {}, estimated minimum {estimate})",
                    instructions.len(),
                    pair.destination,
                    plan_cost(floor.costs(), &instructions)
                )?;
            } else {
                writeln!(
                    out,
                    "Verification failed: replayed plan differs from pattern {} in {remaining} tile(s)",
                    pair.destination
                )?;
            }
        }
        Ok(())
    }

    fn report(&mut self, catalog: &Catalog, selected: Option<&str>, out: &mut impl Write) -> Result<()> {
        let floors: Vec<&Floor> = match selected {
            Some(name) => vec![catalog.floor(name)?],
            None => catalog.floors().iter().collect(),
        };

        for floor in floors {
            self.progress.start_floor(floor.name(), pair_count(floor));
            let progress = &self.progress;
            let summaries = floor_report(floor, |completed| progress.update(completed));
            self.progress.finish_floor();

            out.write_all(render_report(floor.name(), &summaries?).as_bytes())?;
        }
        Ok(())
    }
}
