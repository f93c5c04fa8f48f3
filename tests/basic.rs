use marten_prob::{
    builder::KnownOk,
    config::Config,
    context::Context,
    reports::Report,
    structures::{literal::Literal, statement::Statement},
    types::err::{self, ErrorKind},
};

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-12
}

mod structures {
    use super::*;

    #[test]
    fn literal_negation() {
        let a = Literal::new(0, true);

        assert_eq!(a.negate(), Literal::new(0, false));
        assert_eq!(a.negate().negate(), a);
    }

    #[test]
    fn statement_canonical() {
        let a = Literal::new(0, true);
        let not_b = Literal::new(1, false);

        let one = Statement::from_literals([not_b, a, a]);
        let other = Statement::from_literals([a, not_b]);

        assert_eq!(one, other);
        assert_eq!(one.rank(), 2);
    }

    #[test]
    fn statement_validity() {
        let a = Literal::new(0, true);
        let b = Literal::new(1, true);

        assert!(Statement::from_literals([a, b]).is_valid());
        assert!(!Statement::from_literals([a, b, a.negate()]).is_valid());
    }

    #[test]
    fn containment() {
        let a = Literal::new(0, true);
        let not_b = Literal::new(1, false);

        let narrow = Statement::from_literals([a]);
        let wide = Statement::from_literals([a, not_b]);

        assert!(wide.extends(&narrow));
        assert!(!narrow.extends(&wide));
        assert!(wide.extends(&wide));

        let unrelated = Statement::from_literals([a.negate()]);
        assert!(!wide.extends(&unrelated));
    }
}

mod boundary {
    use super::*;

    #[test]
    fn contradiction_rejected() {
        let mut ctx = Context::from_config(Config::default());
        ctx.fresh_variable("A").unwrap();

        let contradiction = ctx.statement_from_string("A & !A").unwrap();

        assert_eq!(
            ctx.add_known(contradiction.clone(), 0.5),
            Err(ErrorKind::Build(err::BuildError::ContradictoryStatement))
        );
        assert_eq!(
            ctx.set_query(contradiction),
            Err(ErrorKind::Build(err::BuildError::ContradictoryStatement))
        );
    }

    #[test]
    fn empty_statement_rejected() {
        let ctx = Context::from_config(Config::default());

        assert_eq!(
            ctx.statement_from_string(""),
            Err(ErrorKind::Parse(err::ParseError::Empty))
        );
    }

    #[test]
    fn unknown_variable_rejected() {
        let mut ctx = Context::from_config(Config::default());
        ctx.fresh_variable("A").unwrap();

        assert_eq!(
            ctx.statement_from_string("A & B"),
            Err(ErrorKind::Parse(err::ParseError::UnknownVariable(
                "B".to_owned()
            )))
        );

        assert_eq!(
            ctx.statement_from_string("A & !"),
            Err(ErrorKind::Parse(err::ParseError::Negation))
        );
    }

    #[test]
    fn absent_variable_rejected() {
        let mut ctx = Context::from_config(Config::default());
        ctx.fresh_variable("A").unwrap();

        // A statement built directly may mention a variable the context never issued.
        let stray = Statement::from_literals([Literal::new(3, true)]);

        assert_eq!(
            ctx.add_known(stray.clone(), 0.9),
            Err(ErrorKind::Build(err::BuildError::AbsentVariable))
        );
        assert_eq!(
            ctx.set_query(stray),
            Err(ErrorKind::Build(err::BuildError::AbsentVariable))
        );
    }

    #[test]
    fn duplicate_knowledge_first_wins() {
        let mut ctx = Context::from_config(Config::default());
        ctx.fresh_variable("A").unwrap();

        let a = ctx.statement_from_string("A").unwrap();

        assert_eq!(ctx.add_known(a.clone(), 0.25), Ok(KnownOk::Recorded));
        assert_eq!(ctx.add_known(a.clone(), 0.75), Ok(KnownOk::Duplicate));

        ctx.set_query(a.clone()).unwrap();
        assert_eq!(ctx.solve(), Ok(Report::Value(0.25)));
        assert!(close(ctx.value_of(&a).unwrap(), 0.25));
    }

    #[test]
    fn duplicate_variable_name_rejected() {
        let mut ctx = Context::from_config(Config::default());
        ctx.fresh_variable("A").unwrap();

        assert_eq!(
            ctx.fresh_variable("A"),
            Err(ErrorKind::VariableDB(err::VariableDBError::DuplicateName))
        );
    }

    #[test]
    fn variable_ceiling_enforced() {
        let config = Config {
            variable_ceiling: 2,
            ..Config::default()
        };
        let mut ctx = Context::from_config(config);

        ctx.fresh_variable("A").unwrap();
        ctx.fresh_variable("B").unwrap();

        assert_eq!(
            ctx.fresh_variable("C"),
            Err(ErrorKind::VariableDB(
                err::VariableDBError::VariablesExhausted
            ))
        );
    }

    #[test]
    fn hard_variable_cap_enforced() {
        // An unbounded configured ceiling still meets the cap the size arithmetic supports.
        let config = Config {
            variable_ceiling: u32::MAX,
            ..Config::default()
        };
        let mut ctx = Context::from_config(config);

        for variable in 0..40 {
            ctx.fresh_variable(&format!("v{variable}")).unwrap();
        }

        assert_eq!(
            ctx.fresh_variable("v40"),
            Err(ErrorKind::VariableDB(
                err::VariableDBError::VariablesExhausted
            ))
        );
    }
}
