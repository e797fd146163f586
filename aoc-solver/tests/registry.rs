use aoc_solver::{
    AocParser, ParseError, RegistrationError, RegistryBuilder, SolveError, Solver, SolverError,
    SolverInstance, Verdict, register_solver,
};

/// Counts non-empty lines; part 2 fails on purpose
struct LineCount;

impl AocParser for LineCount {
    type SharedData<'a> = Vec<&'a str>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let lines: Vec<_> = input.lines().filter(|l| !l.is_empty()).collect();
        if lines.is_empty() {
            return Err(ParseError::MissingData("empty input".to_string()));
        }
        Ok(lines)
    }
}

impl Solver for LineCount {
    const PARTS: u8 = 2;

    fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
        match part {
            1 => Ok(shared.len().to_string()),
            2 => Err(SolveError::failed(format!("{} lines is not enough", shared.len()))),
            _ => Err(SolveError::PartOutOfRange(part)),
        }
    }
}

fn builder_with(year: u16, day: u8) -> Result<RegistryBuilder, RegistrationError> {
    RegistryBuilder::new().register(year, day, LineCount::PARTS, |input: &str, expected| {
        Ok(Box::new(SolverInstance::<LineCount>::new(input, expected)?))
    })
}

#[test]
fn test_duplicate_registration_rejected() {
    let result = builder_with(2022, 1).and_then(|b| {
        b.register(2022, 1, 2, |input: &str, expected| {
            Ok(Box::new(SolverInstance::<LineCount>::new(input, expected)?))
        })
    });
    assert!(matches!(
        result,
        Err(RegistrationError::DuplicateSolver(2022, 1))
    ));
}

#[test]
fn test_invalid_day_rejected() {
    assert!(matches!(
        builder_with(2022, 0),
        Err(RegistrationError::InvalidDay(2022, 0))
    ));
    assert!(matches!(
        builder_with(2022, 26),
        Err(RegistrationError::InvalidDay(2022, 26))
    ));
}

#[test]
fn test_unknown_day_not_found() {
    let registry = builder_with(2022, 1).unwrap().build();
    assert!(matches!(
        registry.create_solver(2022, 2, "x"),
        Err(SolverError::NotFound(2022, 2))
    ));
}

#[test]
fn test_parse_error_reported() {
    let registry = builder_with(2022, 1).unwrap().build();
    assert!(matches!(
        registry.create_solver(2022, 1, "\n\n"),
        Err(SolverError::ParseError(ParseError::MissingData(_)))
    ));
}

#[test]
fn test_instance_reports_parts_and_errors() {
    let registry = builder_with(2022, 1).unwrap().build();
    let mut solver = registry.create_solver(2022, 1, "a\n\nb\nc\n").unwrap();

    assert_eq!(solver.parts(), 2);
    assert!(solver.parse_duration() >= chrono::TimeDelta::zero());

    let result = solver.solve(1).unwrap();
    assert_eq!(result.part, 1);
    assert_eq!(result.answer, "3");
    assert!(result.solve_duration >= chrono::TimeDelta::zero());
    // Registered without known answers
    assert_eq!(result.verdict, Verdict::Unknown);

    assert!(matches!(solver.solve(2), Err(SolveError::SolveFailed(_))));
    assert!(matches!(solver.solve(3), Err(SolveError::PartOutOfRange(3))));
}

#[test]
fn test_iteration_is_ordered_by_year_then_day() {
    let mut builder = RegistryBuilder::new();
    register_solver!(builder, LineCount, 2022, 5);
    register_solver!(builder, LineCount, 2021, 9);
    register_solver!(builder, LineCount, 2022, 1);
    let registry = builder.build();

    let order: Vec<_> = registry.iter_info().map(|i| (i.year, i.day)).collect();
    assert_eq!(order, [(2021, 9), (2022, 1), (2022, 5)]);
    assert_eq!(registry.len(), 3);
    assert!(registry.iter_info().all(|i| i.parts == 2 && i.expected.is_empty()));
}
