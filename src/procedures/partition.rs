/*!
The partition pass.

Every partition group of a parent statement tiles the parent: the probabilities of the
members sum to the probability of the parent.
So, whenever exactly one value of the family is missing, it is determined:

- *Difference mode*: the parent is known and exactly one member is unknown --- the member is
  valued at the parent minus the sum of its known siblings.
- *Union mode*: every member is known and the parent is unknown --- the parent is valued at
  the sum of the members.

A group with two or more missing values supports no deduction this pass, and a group with the
parent and every member known is left untouched --- redundant input is accepted as given, and
its consistency is not checked.

Parents are processed from largest rank to smallest, as a value settled on a large statement
feeds the groups of the many smaller statements it refines, which reduces the passes needed
overall.
Within a pass a derived value is immediately visible, so one pass may chain several
deductions.
*/

use crate::{
    context::Context,
    db::StatementIndex,
    misc::log::targets::{self},
    reports::Deduction,
};

impl Context {
    /// Applies the partition rule across every parent and span group of the universe.
    ///
    /// Returns the count of values derived.
    pub fn partition_pass(&mut self) -> usize {
        let mut fresh = 0;

        // Disjoint borrows of the databases and the callback, to write values while reading
        // the arena.
        let Context {
            universe_db,
            known_db,
            callback_deduction,
            counters,
            ..
        } = self;

        for parent in universe_db.indices().rev() {
            let parent = parent as StatementIndex;

            // Statements without refinements have no groups, and are skipped here.
            for group in universe_db.partitions_of(parent) {
                let mut unknown: Option<StatementIndex> = None;
                let mut unknown_count = 0;
                let mut sum = 0.0;

                for &member in &group.members {
                    match known_db.value_of(member) {
                        Some(value) => sum += value,
                        None => {
                            unknown_count += 1;
                            unknown = Some(member);
                        }
                    }
                }

                match (known_db.value_of(parent), unknown, unknown_count) {
                    // Difference mode.
                    (Some(parent_value), Some(member), 1) => {
                        let value = parent_value - sum;
                        known_db.record(member, value);
                        counters.difference_deductions += 1;
                        fresh += 1;

                        log::trace!(target: targets::PROPAGATION,
                            "Difference: {} = {value} (from {})",
                            universe_db.statement(member),
                            universe_db.statement(parent)
                        );

                        if let Some(callback) = callback_deduction {
                            callback(&Deduction::Difference {
                                parent: universe_db.statement(parent).clone(),
                                members: group
                                    .members
                                    .iter()
                                    .map(|&m| universe_db.statement(m).clone())
                                    .collect(),
                                derived: universe_db.statement(member).clone(),
                                value,
                            });
                        }
                    }

                    // Union mode.
                    (None, None, 0) => {
                        known_db.record(parent, sum);
                        counters.union_deductions += 1;
                        fresh += 1;

                        log::trace!(target: targets::PROPAGATION,
                            "Union: {} = {sum}",
                            universe_db.statement(parent)
                        );

                        if let Some(callback) = callback_deduction {
                            callback(&Deduction::Union {
                                parent: universe_db.statement(parent).clone(),
                                members: group
                                    .members
                                    .iter()
                                    .map(|&m| universe_db.statement(m).clone())
                                    .collect(),
                                value: sum,
                            });
                        }
                    }

                    _ => {}
                }
            }
        }

        fresh
    }
}
