use marten_prob::{
    db::universe::UniverseDB,
    structures::{literal::Literal, statement::Statement},
};

mod construction {
    use super::*;

    #[test]
    fn sizes() {
        for n in 1..5 {
            let universe = UniverseDB::build(n);
            assert_eq!(universe.statement_count(), 3_usize.pow(n) - 1);
        }
    }

    #[test]
    fn deterministic() {
        let one = UniverseDB::build(3);
        let other = UniverseDB::build(3);

        let one_statements: Vec<_> = one.statements().collect();
        let other_statements: Vec<_> = other.statements().collect();
        assert_eq!(one_statements, other_statements);
    }

    #[test]
    fn every_statement_valid_and_indexed() {
        let universe = UniverseDB::build(3);

        for statement in universe.statements() {
            assert!(statement.is_valid());
            assert!(universe.index_of(statement).is_some());
        }
    }

    #[test]
    fn singletons_and_complements() {
        let universe = UniverseDB::build(2);

        let singletons: Vec<_> = universe.singleton_indices().collect();
        assert_eq!(singletons.len(), 4);

        for index in singletons {
            let complement = universe.complement_of(index).unwrap();
            assert_ne!(index, complement);
            assert_eq!(universe.complement_of(complement), Some(index));
        }

        // Complements are only defined for singletons.
        let a_b = Statement::from_literals([Literal::new(0, true), Literal::new(1, true)]);
        let index = universe.index_of(&a_b).unwrap();
        assert_eq!(universe.complement_of(index), None);
    }
}

mod refinement {
    use super::*;

    #[test]
    fn children_extend_parents() {
        let universe = UniverseDB::build(3);

        for parent in universe.indices() {
            let parent = parent as u32;
            for &child in universe.children_of(parent) {
                assert!(universe
                    .statement(child)
                    .extends(universe.statement(parent)));
                assert!(
                    universe.statement(child).rank() > universe.statement(parent).rank()
                );
            }
        }
    }

    #[test]
    fn maximal_statements_childless() {
        let universe = UniverseDB::build(2);

        for parent in universe.indices() {
            let parent = parent as u32;
            if universe.statement(parent).rank() == 2 {
                assert!(universe.children_of(parent).is_empty());
                assert!(universe.partitions_of(parent).is_empty());
            }
        }
    }

    #[test]
    fn singleton_groups_in_three_variables() {
        let universe = UniverseDB::build(3);

        let a = Statement::from_literals([Literal::new(0, true)]);
        let index = universe.index_of(&a).unwrap();

        // A extends to: {A,B}, {A,C} at rank two, and {A,B,C} at rank three.
        let groups = universe.partitions_of(index);
        assert_eq!(groups.len(), 3);

        for group in groups {
            let added = group.span.count_ones() - 1;
            assert_eq!(group.members.len(), 2_usize.pow(added));

            for &member in &group.members {
                let member = universe.statement(member);
                assert!(member.extends(&a));
                let (positive, negative) = member.polarity_masks();
                assert_eq!(positive | negative, group.span);
            }
        }

        assert_eq!(universe.children_of(index).len(), 2 + 2 + 4);
    }
}
