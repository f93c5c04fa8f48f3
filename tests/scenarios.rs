use std::{cell::RefCell, rc::Rc};

use marten_prob::{config::Config, context::Context, reports::Report};

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-12
}

fn value(report: Report) -> f64 {
    match report {
        Report::Value(v) => v,
        Report::Unknown => panic!("expected a value"),
    }
}

mod scenarios {
    use super::*;

    #[test]
    fn difference_over_two_variables() {
        let mut ctx = Context::from_config(Config::default());
        ctx.fresh_variable("A").unwrap();
        ctx.fresh_variable("B").unwrap();

        let a = ctx.statement_from_string("A").unwrap();
        let b = ctx.statement_from_string("B").unwrap();
        let a_b = ctx.statement_from_string("A & B").unwrap();
        let query = ctx.statement_from_string("A & !B").unwrap();

        ctx.add_known(a, 0.6).unwrap();
        ctx.add_known(b, 0.5).unwrap();
        ctx.add_known(a_b, 0.3).unwrap();
        ctx.set_query(query).unwrap();

        let report = ctx.solve().unwrap();
        assert!(close(value(report), 0.6 - 0.3));

        // The complements fall out along the way.
        let not_a = ctx.statement_from_string("!A").unwrap();
        let not_b = ctx.statement_from_string("!B").unwrap();
        assert!(close(ctx.value_of(&not_a).unwrap(), 1.0 - 0.6));
        assert!(close(ctx.value_of(&not_b).unwrap(), 1.0 - 0.5));
    }

    #[test]
    fn complement_alone() {
        let mut ctx = Context::from_config(Config::default());
        ctx.fresh_variable("A").unwrap();

        let a = ctx.statement_from_string("A").unwrap();
        let not_a = ctx.statement_from_string("!A").unwrap();

        ctx.add_known(a, 0.7).unwrap();
        ctx.set_query(not_a).unwrap();

        let report = ctx.solve().unwrap();
        assert!(close(value(report), 1.0 - 0.7));
    }

    #[test]
    fn not_enough_information() {
        let mut ctx = Context::from_config(Config::default());
        ctx.fresh_variable("A").unwrap();
        ctx.fresh_variable("B").unwrap();

        let a = ctx.statement_from_string("A").unwrap();
        let query = ctx.statement_from_string("A & B").unwrap();

        ctx.add_known(a, 0.5).unwrap();
        ctx.set_query(query).unwrap();

        assert_eq!(ctx.solve(), Ok(Report::Unknown));
    }

    #[test]
    fn union_from_complete_refinements() {
        let mut ctx = Context::from_config(Config::default());
        ctx.fresh_variable("A").unwrap();
        ctx.fresh_variable("B").unwrap();

        // Binary-exact values, so the derived sums are exact.
        for (statement, value) in [
            ("A & B", 0.125),
            ("A & !B", 0.375),
            ("!A & B", 0.25),
            ("!A & !B", 0.25),
        ] {
            let statement = ctx.statement_from_string(statement).unwrap();
            ctx.add_known(statement, value).unwrap();
        }

        let a = ctx.statement_from_string("A").unwrap();
        ctx.set_query(a.clone()).unwrap();

        assert_eq!(ctx.solve(), Ok(Report::Value(0.5)));

        // With a complete maximal rank, the whole universe settles.
        assert_eq!(ctx.known_db.known_count(), 8);

        // Cross-check the parent against both of its routes: the {A, B} span group, and the
        // complement of the union over !A.
        let not_a = ctx.statement_from_string("!A").unwrap();
        assert_eq!(ctx.value_of(&not_a), Some(0.5));
        let b = ctx.statement_from_string("B").unwrap();
        assert_eq!(ctx.value_of(&b), Some(0.375));
    }
}

mod convergence {
    use super::*;

    fn seeded_context() -> Context {
        let mut ctx = Context::from_config(Config::default());
        ctx.fresh_variable("A").unwrap();
        ctx.fresh_variable("B").unwrap();

        for (statement, value) in [("A", 0.5), ("B", 0.25), ("A & B", 0.125)] {
            let statement = ctx.statement_from_string(statement).unwrap();
            ctx.add_known(statement, value).unwrap();
        }
        let query = ctx.statement_from_string("!A & !B").unwrap();
        ctx.set_query(query).unwrap();
        ctx
    }

    #[test]
    fn idempotence() {
        let mut ctx = seeded_context();

        let first = ctx.solve().unwrap();
        let settled = ctx.known_db.known_count();

        let second = ctx.solve().unwrap();
        assert_eq!(first, second);
        assert_eq!(ctx.known_db.known_count(), settled);

        // A converged pass derives nothing.
        assert_eq!(ctx.complement_pass(), 0);
        assert_eq!(ctx.partition_pass(), 0);
    }

    #[test]
    fn iteration_counter_accumulates() {
        let mut ctx = seeded_context();

        ctx.solve().unwrap();
        let passes = ctx.counters.total_iterations;

        // A fixed context re-solves in exactly one (empty) pass.
        ctx.solve().unwrap();
        assert_eq!(ctx.counters.total_iterations, passes + 1);
    }

    #[test]
    fn monotone_and_accounted() {
        let mut ctx = seeded_context();
        ctx.solve().unwrap();

        let derived = ctx.counters.complement_deductions
            + ctx.counters.difference_deductions
            + ctx.counters.union_deductions;

        // Three seeds, each deduction adds exactly one entry, nothing is lost.
        assert_eq!(ctx.known_db.known_count(), 3 + derived);
    }

    #[test]
    fn input_order_irrelevant() {
        let mut forward = Context::from_config(Config::default());
        let mut backward = Context::from_config(Config::default());

        for ctx in [&mut forward, &mut backward] {
            ctx.fresh_variable("A").unwrap();
            ctx.fresh_variable("B").unwrap();
        }

        let knowns = [("A", 0.5), ("B", 0.25), ("A & B", 0.125)];
        for (statement, value) in knowns {
            let statement = forward.statement_from_string(statement).unwrap();
            forward.add_known(statement, value).unwrap();
        }
        for (statement, value) in knowns.iter().rev() {
            let statement = backward.statement_from_string(statement).unwrap();
            backward.add_known(statement, *value).unwrap();
        }

        forward.solve().unwrap();
        backward.solve().unwrap();

        for (statement, value) in forward.known_values() {
            assert_eq!(backward.value_of(statement), value);
        }
    }

    #[test]
    fn deductions_form_an_audit_log() {
        let mut ctx = seeded_context();

        let log: Rc<RefCell<Vec<(String, f64)>>> = Rc::default();
        let sink = log.clone();
        ctx.set_callback_deduction(Box::new(move |deduction| {
            sink.borrow_mut()
                .push((deduction.derived().to_string(), deduction.value()));
        }));

        ctx.solve().unwrap();

        let derived = ctx.counters.complement_deductions
            + ctx.counters.difference_deductions
            + ctx.counters.union_deductions;
        assert_eq!(log.borrow().len(), derived);

        // Each logged value matches the settled table.
        for (statement, value) in log.borrow().iter() {
            let statement = ctx
                .known_values()
                .find(|(s, _)| s.to_string() == *statement)
                .unwrap();
            assert!(close(statement.1.unwrap(), *value));
        }
    }
}
