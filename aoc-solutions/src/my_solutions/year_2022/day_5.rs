use anyhow::{Context, anyhow, bail, ensure};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2022, day = 5, tags = ["simulation", "stacks"], expected = ["DHBJQJCCW", "WJVRLSJJT"])]
pub struct Solver;

/// Width of one stack column in the drawing, `[X]` plus a separator
const COLUMN_WIDTH: usize = 4;

/// Stacks indexed from 0; the last element of each is the top crate
pub type Stacks = Vec<Vec<char>>;

/// `move {count} from {from} to {to}`, stack numbers 1-based as in the input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub count: usize,
    pub from: usize,
    pub to: usize,
}

/// How a crane carries several crates in one move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CraneModel {
    /// One crate at a time; the moved crates end up reversed
    CrateMover9000,
    /// All crates at once; the moved crates keep their order
    CrateMover9001,
}

#[derive(Debug)]
pub struct SharedData {
    stacks: Stacks,
    moves: Vec<Move>,
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let lines: Vec<&str> = aoc_solver::lines(input).collect();
        let separator = lines
            .iter()
            .position(|line| line.trim().is_empty())
            .ok_or_else(|| {
                ParseError::MissingData("blank line between drawing and moves".to_string())
            })?;

        let stacks = parse_drawing(&lines[..separator])
            .map_err(|e| ParseError::InvalidFormat(format!("drawing: {:#}", e)))?;

        let moves = lines[separator + 1..]
            .iter()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(idx, line)| {
                parse_move(line, stacks.len()).map_err(|e| {
                    ParseError::InvalidFormat(format!("(line {}) {:#}", separator + idx + 2, e))
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(SharedData { stacks, moves })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        rearranged_tops(shared, CraneModel::CrateMover9000)
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        rearranged_tops(shared, CraneModel::CrateMover9001)
    }
}

fn rearranged_tops(shared: &SharedData, crane: CraneModel) -> Result<String, SolveError> {
    let mut stacks = shared.stacks.clone();
    apply_moves(&mut stacks, &shared.moves, crane).map_err(SolveError::failed)?;
    Ok(top_crates(&stacks))
}

/// Read the crate drawing bottom-up; the last line numbers the stacks
fn parse_drawing(drawing: &[&str]) -> anyhow::Result<Stacks> {
    let (numbering, rows) = drawing
        .split_last()
        .context("missing stack numbering line")?;

    let mut count = 0;
    for (idx, label) in numbering.split_whitespace().enumerate() {
        let number: usize = label
            .parse()
            .with_context(|| format!("invalid stack number {:?}", label))?;
        ensure!(number == idx + 1, "stack {} is numbered {}", idx + 1, number);
        count = number;
    }
    ensure!(count > 0, "no stacks in numbering line {:?}", numbering);

    let mut stacks: Stacks = vec![Vec::new(); count];
    for row in rows.iter().rev() {
        ensure!(row.is_ascii(), "non-ASCII characters in row {:?}", row);
        for (idx, cell) in row.as_bytes().chunks(COLUMN_WIDTH).enumerate() {
            match cell {
                [b'[', label, b']', ..] => {
                    let stack = stacks
                        .get_mut(idx)
                        .ok_or_else(|| anyhow!("crate in column {} but only {} stacks", idx + 1, count))?;
                    stack.push(char::from(*label));
                }
                blank if blank.iter().all(|b| *b == b' ') => {}
                _ => bail!("unexpected cell {:?} in row {:?}", String::from_utf8_lossy(cell), row),
            }
        }
    }

    Ok(stacks)
}

fn parse_move(line: &str, stack_count: usize) -> anyhow::Result<Move> {
    let words: Vec<&str> = line.split_whitespace().collect();
    let ["move", count, "from", from, "to", to] = words.as_slice() else {
        bail!("expected `move K from S to D`, got {:?}", line.trim());
    };

    let number = |s: &str| -> anyhow::Result<usize> {
        s.parse().with_context(|| format!("invalid number {:?}", s))
    };
    let mv = Move {
        count: number(*count)?,
        from: number(*from)?,
        to: number(*to)?,
    };

    for stack in [mv.from, mv.to] {
        ensure!(
            (1..=stack_count).contains(&stack),
            "stack {} does not exist (1..={})",
            stack,
            stack_count
        );
    }
    Ok(mv)
}

/// Apply every move in order with the given crane
///
/// Each move is checked before any crate is lifted, so a failing move leaves
/// both stacks untouched.
pub fn apply_moves(stacks: &mut [Vec<char>], moves: &[Move], crane: CraneModel) -> anyhow::Result<()> {
    for (idx, mv) in moves.iter().enumerate() {
        for stack in [mv.from, mv.to] {
            ensure!(
                (1..=stacks.len()).contains(&stack),
                "move {}: stack {} does not exist (1..={})",
                idx + 1,
                stack,
                stacks.len()
            );
        }
        let (from, to) = (mv.from - 1, mv.to - 1);
        let available = stacks[from].len();
        ensure!(
            available >= mv.count,
            "move {}: cannot take {} crates from stack {} holding {}",
            idx + 1,
            mv.count,
            mv.from,
            available
        );

        match crane {
            CraneModel::CrateMover9000 => move_one_at_a_time(stacks, mv.count, from, to),
            CraneModel::CrateMover9001 => move_as_block(stacks, mv.count, from, to),
        }
    }
    Ok(())
}

fn move_one_at_a_time(stacks: &mut [Vec<char>], count: usize, from: usize, to: usize) {
    for _ in 0..count {
        if let Some(crate_label) = stacks[from].pop() {
            stacks[to].push(crate_label);
        }
    }
}

fn move_as_block(stacks: &mut [Vec<char>], count: usize, from: usize, to: usize) {
    let source = &mut stacks[from];
    let block = source.split_off(source.len() - count);
    stacks[to].extend(block);
}

/// Top crate of every stack in stack order; empty stacks are skipped
pub fn top_crates(stacks: &[Vec<char>]) -> String {
    stacks.iter().filter_map(|stack| stack.last()).collect()
}
