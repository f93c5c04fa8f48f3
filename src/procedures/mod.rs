/*!
Procedures, weaved together to realise a solve.

A solve is the iteration of two deduction passes over the universe until a full pass derives
nothing new:

- The [complement pass](crate::procedures::complement): for every known single-literal
  statement, value the complementary statement at one minus the known value.
- The [partition pass](crate::procedures::partition): for every parent statement, from
  largest rank to smallest, and every partition group of the parent, derive the one missing
  value the group supports --- a missing member by difference, or a missing parent by union.

Both passes only ever add values, so the known count is monotone, bounded by the universe,
and the loop of [solve](crate::context::Context::solve) always terminates.
*/

pub mod complement;
pub mod partition;
pub mod solve;
