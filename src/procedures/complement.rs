/*!
The complement pass.

For every known single-literal statement with value p, if the complementary single-literal
statement is not known, it is valued at 1 − p.

The rule is restricted to singletons: the complement of a conjunction is a disjunction, and
disjunctions are outside the language of statements.
A value derived earlier in the same pass is visible to the rest of the pass, though the guard
on the complement being unknown keeps the pass from oscillating --- values are only ever
added.
*/

use crate::{
    context::Context,
    misc::log::targets::{self},
    reports::Deduction,
};

impl Context {
    /// Applies the complement rule across the singleton statements of the universe.
    ///
    /// Returns the count of values derived.
    pub fn complement_pass(&mut self) -> usize {
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

        for index in universe_db.singleton_indices() {
            let Some(value) = known_db.value_of(index) else {
                continue;
            };
            let Some(complement) = universe_db.complement_of(index) else {
                continue;
            };
            if known_db.value_of(complement).is_some() {
                continue;
            }

            let derived = 1.0 - value;
            known_db.record(complement, derived);
            counters.complement_deductions += 1;
            fresh += 1;

            log::trace!(target: targets::PROPAGATION,
                "Complement: {} = {derived}",
                universe_db.statement(complement)
            );

            if let Some(callback) = callback_deduction {
                callback(&Deduction::Complement {
                    known: universe_db.statement(index).clone(),
                    derived: universe_db.statement(complement).clone(),
                    value: derived,
                });
            }
        }

        fresh
    }
}
