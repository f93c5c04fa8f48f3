use std::io::Write;

use marten_prob::{
    builder::ProblemInfo,
    config::Config,
    context::Context,
    reports::Report,
    types::err::{self, ErrorKind},
};

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-12
}

mod problems {
    use super::*;

    #[test]
    fn read_and_solve() {
        let mut ctx = Context::from_config(Config::default());

        let mut problem = vec![];
        let _ = problem.write(
            b"
c the motivating example
3 A B
A : 0.6
B : 0.5
A & B : 0.3
A & !B
",
        );

        let info = ctx.read_problem(problem.as_slice()).unwrap();
        assert_eq!(
            info,
            ProblemInfo {
                variable_count: 2,
                known_count: 3,
                duplicate_count: 0,
            }
        );

        let report = ctx.solve().unwrap();
        match report {
            Report::Value(value) => assert!(close(value, 0.3)),
            Report::Unknown => panic!("derivable by difference"),
        }
    }

    #[test]
    fn comments_and_duplicates() {
        let mut ctx = Context::from_config(Config::default());

        let mut problem = vec![];
        let _ = problem.write(
            b"2 A
c a comment between statements
A : 0.7
A : 0.2
c and before the query
!A
",
        );

        let info = ctx.read_problem(problem.as_slice()).unwrap();
        assert_eq!(info.known_count, 1);
        assert_eq!(info.duplicate_count, 1);

        // The first value wins.
        assert_eq!(ctx.solve(), Ok(Report::Value(1.0 - 0.7)));
    }

    #[test]
    fn variable_names_beginning_with_c() {
        let mut ctx = Context::from_config(Config::default());

        let mut problem = vec![];
        let _ = problem.write(
            b"
c only a bare 'c' marks a comment
1 coin
coin : 0.5
!coin
",
        );

        let info = ctx.read_problem(problem.as_slice()).unwrap();
        assert_eq!(info.known_count, 1);

        let report = ctx.solve().unwrap();
        match report {
            Report::Value(value) => assert!(close(value, 0.5)),
            Report::Unknown => panic!("derivable by complement"),
        }
    }

    #[test]
    fn missing_query() {
        let mut ctx = Context::from_config(Config::default());

        let mut problem = vec![];
        let _ = problem.write(b"1 A\nA : 0.5\n");

        assert_eq!(
            ctx.read_problem(problem.as_slice()),
            Err(ErrorKind::Parse(err::ParseError::MissingQuery))
        );
    }

    #[test]
    fn missing_value() {
        let mut ctx = Context::from_config(Config::default());

        let mut problem = vec![];
        let _ = problem.write(b"1 A B\nA & B\nA\n");

        assert_eq!(
            ctx.read_problem(problem.as_slice()),
            Err(ErrorKind::Parse(err::ParseError::MissingValue))
        );
    }

    #[test]
    fn malformed_header() {
        let mut ctx = Context::from_config(Config::default());

        let mut problem = vec![];
        let _ = problem.write(b"many A B\nA : 0.5\nA\n");

        assert_eq!(
            ctx.read_problem(problem.as_slice()),
            Err(ErrorKind::Parse(err::ParseError::ProblemSpecification))
        );
    }

    #[test]
    fn contradictory_statement_rejected() {
        let mut ctx = Context::from_config(Config::default());

        let mut problem = vec![];
        let _ = problem.write(b"1 A\nA & !A : 0.5\nA\n");

        assert_eq!(
            ctx.read_problem(problem.as_slice()),
            Err(ErrorKind::Build(err::BuildError::ContradictoryStatement))
        );
    }
}
