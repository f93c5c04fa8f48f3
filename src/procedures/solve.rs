/*!
Iterates the deduction passes to a fixed point, and reports on the query statement.

# Overview

Abstracting from bookkeeping, a solve is:

```rust,ignore
'solve_loop: loop {
    let mut fresh = self.complement_pass();
    fresh += self.partition_pass();

    if fresh == 0 {
        break 'solve_loop;
    }
}
```

The known-value table only ever grows, and is bounded by the finite universe, so the loop
halts on the first pass which adds nothing --- after at most one pass per universe statement.

Before the loop, the universe is built (if the variables of the context have changed since it
was last built) and the recorded input pairs are seeded into a fresh known-value table.
Solving an already-fixed context is permitted and cheap: the first pass derives nothing, and
the report is unchanged --- the fixed point is idempotent.

# Example

```rust
# use marten_prob::config::Config;
# use marten_prob::context::Context;
# use marten_prob::reports::Report;
let mut ctx = Context::from_config(Config::default());

ctx.fresh_variable("A").unwrap();
ctx.fresh_variable("B").unwrap();

let known = ctx.statement_from_string("A").unwrap();
let query = ctx.statement_from_string("A & B").unwrap();

ctx.add_known(known, 0.5).unwrap();
ctx.set_query(query).unwrap();

// P(A) alone fixes no conjunction with B.
assert_eq!(ctx.solve(), Ok(Report::Unknown));
```
*/

use crate::{
    context::{Context, ContextState},
    db::{known::KnownDB, universe::UniverseDB},
    misc::log::targets::{self},
    reports::Report,
    types::err::ErrorKind,
};

impl Context {
    /// Closes the known-value table under the deduction rules and reports on the query.
    pub fn solve(&mut self) -> Result<Report, ErrorKind> {
        let total_time = std::time::Instant::now();

        if self.state == ContextState::Solving {
            return Err(ErrorKind::InvalidState);
        }

        self.ensure_universe();
        self.seed_knowns();

        self.state = ContextState::Solving;

        // The iteration counter is cumulative across solves; the delta is this solve's.
        let passes_before = self.counters.total_iterations;

        'solve_loop: loop {
            self.counters.total_iterations += 1;
            log::trace!(target: targets::SOLVE, "Pass {}", self.counters.total_iterations);

            let mut fresh = self.complement_pass();
            fresh += self.partition_pass();

            if fresh == 0 {
                break 'solve_loop;
            }

            if let Some(ceiling) = self.config.iteration_ceiling {
                if self.counters.total_iterations - passes_before >= ceiling {
                    log::warn!(target: targets::SOLVE,
                        "Iteration ceiling of {ceiling} reached before a fixed point"
                    );
                    break 'solve_loop;
                }
            }
        }

        self.counters.time = total_time.elapsed();
        self.state = ContextState::Fixed;

        log::info!(target: targets::SOLVE,
            "Fixed after {} passes: {} of {} statements known",
            self.counters.total_iterations - passes_before,
            self.known_db.known_count(),
            self.universe_db.statement_count()
        );

        Ok(self.report())
    }

    /// Builds the universe over the variables of the context, unless already built.
    ///
    /// A rebuild resets the known-value table, as indices shift with the arena.
    fn ensure_universe(&mut self) {
        let variable_count = self.variable_db.count() as u32;
        let expected = 3_usize.pow(variable_count).saturating_sub(1);

        if self.universe_db.statement_count() != expected {
            self.universe_db = UniverseDB::build(variable_count);
            self.known_db = KnownDB::new(expected);
        }
    }

    /// Seeds the known-value table from the recorded input pairs.
    ///
    /// Recorded statements are valid and over the variables of the context, so each has a
    /// universe index.
    /// Re-seeding an already-seeded table changes nothing: the first write wins.
    fn seed_knowns(&mut self) {
        let Context {
            universe_db,
            known_db,
            knowns,
            ..
        } = self;

        for (statement, value) in knowns.iter() {
            if let Some(index) = universe_db.index_of(statement) {
                known_db.record(index, *value);
            }
        }
    }
}
