//! Solver registry for managing and creating solver instances

use crate::error::{ParseError, RegistrationError, SolverError};
use crate::instance::{self, DynSolver, SolverInstance};
use crate::solver::Solver;
use std::collections::BTreeMap;

/// Days per Advent of Code event
pub const DAYS_PER_YEAR: u8 = 25;

/// Factory creating a solver instance from an input and the known answers
pub type SolverFactory = Box<
    dyn for<'a> Fn(&'a str, &'static [&'static str]) -> Result<Box<dyn DynSolver + 'a>, ParseError>,
>;

/// Metadata about a registered solver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FactoryInfo {
    /// The Advent of Code year
    pub year: u16,
    /// The day number (1-25)
    pub day: u8,
    /// Number of parts this solver supports
    pub parts: u8,
    /// Tags the solver was registered with
    pub tags: &'static [&'static str],
    /// Known answers, index `part - 1`
    pub expected: &'static [&'static str],
}

impl FactoryInfo {
    /// Known answer for `part`, if one was registered
    pub fn expected_answer(&self, part: u8) -> Option<&'static str> {
        instance::expected_answer(self.expected, part)
    }
}

struct SolverFactoryEntry {
    factory: SolverFactory,
    parts: u8,
    tags: &'static [&'static str],
    expected: &'static [&'static str],
}

/// Builder for constructing a [`SolverRegistry`]
///
/// Rejects duplicate `(year, day)` registrations and days outside `1..=25`.
///
/// # Example
///
/// ```
/// use aoc_solver::{AocParser, ParseError, RegistryBuilder, SolveError, Solver, SolverInstance};
///
/// struct Lines;
///
/// impl AocParser for Lines {
///     type SharedData<'a> = Vec<&'a str>;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         Ok(input.lines().collect())
///     }
/// }
///
/// impl Solver for Lines {
///     const PARTS: u8 = 1;
///
///     fn solve_part(shared: &mut Self::SharedData<'_>, _part: u8) -> Result<String, SolveError> {
///         Ok(shared.len().to_string())
///     }
/// }
///
/// let registry = RegistryBuilder::new()
///     .register(2022, 1, Lines::PARTS, |input: &str, expected| {
///         Ok(Box::new(SolverInstance::<Lines>::new(input, expected)?))
///     })
///     .unwrap()
///     .build();
///
/// let mut solver = registry.create_solver(2022, 1, "a\nb\nc").unwrap();
/// assert_eq!(solver.solve(1).unwrap().answer, "3");
/// ```
pub struct RegistryBuilder {
    solvers: BTreeMap<(u16, u8), SolverFactoryEntry>,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self {
            solvers: BTreeMap::new(),
        }
    }

    /// Register a solver factory function for a specific year and day
    ///
    /// # Returns
    /// * `Ok(Self)` - Builder with the solver registered, ready for chaining
    /// * `Err(RegistrationError)` - Duplicate year-day combination or invalid day
    pub fn register<F>(
        mut self,
        year: u16,
        day: u8,
        parts: u8,
        factory: F,
    ) -> Result<Self, RegistrationError>
    where
        F: for<'a> Fn(&'a str, &'static [&'static str]) -> Result<Box<dyn DynSolver + 'a>, ParseError>
            + 'static,
    {
        if day == 0 || day > DAYS_PER_YEAR {
            return Err(RegistrationError::InvalidDay(year, day));
        }
        if self.solvers.contains_key(&(year, day)) {
            return Err(RegistrationError::DuplicateSolver(year, day));
        }
        self.solvers.insert(
            (year, day),
            SolverFactoryEntry {
                factory: Box::new(factory),
                parts,
                tags: &[],
                expected: &[],
            },
        );
        Ok(self)
    }

    /// Register every plugin submitted via `inventory::submit!`
    ///
    /// ```no_run
    /// # use aoc_solver::RegistryBuilder;
    /// let registry = RegistryBuilder::new()
    ///     .register_all_plugins()
    ///     .unwrap()
    ///     .build();
    /// ```
    pub fn register_all_plugins(self) -> Result<Self, RegistrationError> {
        self.register_solver_plugins(|_| true)
    }

    /// Register the plugins for which `filter` returns `true`
    ///
    /// ```no_run
    /// # use aoc_solver::RegistryBuilder;
    /// // Only 2022 solvers tagged "stacks"
    /// let registry = RegistryBuilder::new()
    ///     .register_solver_plugins(|plugin| plugin.year == 2022 && plugin.tags.contains(&"stacks"))
    ///     .unwrap()
    ///     .build();
    /// ```
    pub fn register_solver_plugins<F>(mut self, filter: F) -> Result<Self, RegistrationError>
    where
        F: Fn(&SolverPlugin) -> bool,
    {
        for plugin in inventory::iter::<SolverPlugin> {
            if filter(plugin) {
                self = self.register_plugin(plugin)?;
            }
        }
        Ok(self)
    }

    fn register_plugin(self, plugin: &SolverPlugin) -> Result<Self, RegistrationError> {
        let mut builder = plugin.solver.register_with(self, plugin.year, plugin.day)?;
        if let Some(entry) = builder.solvers.get_mut(&(plugin.year, plugin.day)) {
            entry.tags = plugin.tags;
            entry.expected = plugin.expected;
        }
        Ok(builder)
    }

    /// Finalize the builder into an immutable registry
    pub fn build(self) -> SolverRegistry {
        SolverRegistry {
            solvers: self.solvers,
        }
    }
}

impl Default for RegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Immutable registry mapping `(year, day)` to solver factories
///
/// Iteration is always in ascending `(year, day)` order.
pub struct SolverRegistry {
    solvers: BTreeMap<(u16, u8), SolverFactoryEntry>,
}

impl SolverRegistry {
    /// Parse `input` with the solver registered for `year`/`day`
    ///
    /// The instance judges its answers against the registered expected answers.
    ///
    /// # Returns
    /// * `Ok(Box<dyn DynSolver>)` - Successfully created solver
    /// * `Err(SolverError)` - Solver not found or parsing failed
    pub fn create_solver<'a>(
        &self,
        year: u16,
        day: u8,
        input: &'a str,
    ) -> Result<Box<dyn DynSolver + 'a>, SolverError> {
        let entry = self
            .solvers
            .get(&(year, day))
            .ok_or(SolverError::NotFound(year, day))?;

        (entry.factory)(input, entry.expected).map_err(SolverError::ParseError)
    }

    pub fn contains(&self, year: u16, day: u8) -> bool {
        self.solvers.contains_key(&(year, day))
    }

    /// Metadata for a specific solver
    pub fn info(&self, year: u16, day: u8) -> Option<FactoryInfo> {
        self.solvers
            .get(&(year, day))
            .map(|entry| Self::make_info(year, day, entry))
    }

    /// Metadata for all registered solvers, ascending by year then day
    pub fn iter_info(&self) -> impl Iterator<Item = FactoryInfo> + '_ {
        self.solvers
            .iter()
            .map(|(&(year, day), entry)| Self::make_info(year, day, entry))
    }

    pub fn len(&self) -> usize {
        self.solvers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.solvers.is_empty()
    }

    fn make_info(year: u16, day: u8, entry: &SolverFactoryEntry) -> FactoryInfo {
        FactoryInfo {
            year,
            day,
            parts: entry.parts,
            tags: entry.tags,
            expected: entry.expected,
        }
    }
}

/// Trait for solvers that can register themselves with a registry builder
///
/// Object safe, so plugins of different solver types can sit in one
/// `inventory` collection. Every [`Solver`] gets it through a blanket impl.
pub trait RegisterableSolver: Sync {
    /// Register this solver type with the builder for a specific year and day
    fn register_with(
        &self,
        builder: RegistryBuilder,
        year: u16,
        day: u8,
    ) -> Result<RegistryBuilder, RegistrationError>;
}

impl<S> RegisterableSolver for S
where
    S: Solver + Sync + 'static,
{
    fn register_with(
        &self,
        builder: RegistryBuilder,
        year: u16,
        day: u8,
    ) -> Result<RegistryBuilder, RegistrationError> {
        builder.register(year, day, S::PARTS, |input: &str, expected| {
            Ok(Box::new(SolverInstance::<S>::new(input, expected)?))
        })
    }
}

/// Plugin record for automatic solver registration
///
/// Usually submitted by `#[derive(AutoRegisterSolver)]`; a hand-written
/// submission looks like this:
///
/// ```ignore
/// inventory::submit! {
///     SolverPlugin {
///         year: 2022,
///         day: 1,
///         solver: &Day1,
///         tags: &["grouping"],
///         expected: &["24000", "45000"],
///     }
/// }
/// ```
pub struct SolverPlugin {
    /// The Advent of Code year
    pub year: u16,
    /// The day number (1-25)
    pub day: u8,
    /// The solver instance (type-erased)
    pub solver: &'static dyn RegisterableSolver,
    /// Tags for filtering (e.g. "parsing", "simulation")
    pub tags: &'static [&'static str],
    /// Known answers for parts 1, 2, ... (may be shorter than the part count)
    pub expected: &'static [&'static str],
}

inventory::collect!(SolverPlugin);

/// Register a solver type with a builder variable, panicking on failure
///
/// ```
/// use aoc_solver::{AocParser, ParseError, RegistryBuilder, SolveError, Solver, register_solver};
///
/// struct Echo;
///
/// impl AocParser for Echo {
///     type SharedData<'a> = &'a str;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         Ok(input)
///     }
/// }
///
/// impl Solver for Echo {
///     const PARTS: u8 = 1;
///
///     fn solve_part(shared: &mut Self::SharedData<'_>, _part: u8) -> Result<String, SolveError> {
///         Ok(shared.to_string())
///     }
/// }
///
/// let mut builder = RegistryBuilder::new();
/// register_solver!(builder, Echo, 2022, 1);
/// let registry = builder.build();
/// assert!(registry.contains(2022, 1));
/// ```
#[macro_export]
macro_rules! register_solver {
    ($builder:expr, $solver:ty, $year:expr, $day:expr) => {
        $builder = $builder
            .register(
                $year,
                $day,
                <$solver as $crate::Solver>::PARTS,
                |input: &str, expected| {
                    Ok(Box::new($crate::SolverInstance::<$solver>::new(input, expected)?))
                },
            )
            .expect("Failed to register solver");
    };
}
