/*!
Statements, aka. a duplicate-free collection of literals, interpreted as the conjunction of
those literals --- a joint-probability event.

The canonical representation of a statement is a vector of literals sorted by variable, with
exact duplicates removed at construction.
Equality, hashing, and ordering all derive from this canonical vector, so statements may key
maps and sort stably.

A statement may be constructed holding a variable together with its negation.
Such a statement describes an impossible event, and [is_valid](Statement::is_valid) reports
the absence of this defect --- validity is a query, not an assertion, and statements are
screened at the boundary before entering a known-value table.

```rust
# use marten_prob::structures::literal::Literal;
# use marten_prob::structures::statement::Statement;
let a = Literal::new(0, true);
let b = Literal::new(1, false);

let statement = Statement::from_literals([b, a, a]);

assert_eq!(statement.rank(), 2);
assert!(statement.is_valid());
assert!(statement.contains_literal(&a));

let narrower = Statement::from_literals([a]);
assert!(statement.extends(&narrower));
assert!(!narrower.extends(&statement));

let contradiction = Statement::from_literals([a, a.negate()]);
assert!(!contradiction.is_valid());
```
*/

use crate::structures::literal::Literal;

/// A conjunction of literals, unique by (variable, polarity) and sorted by variable.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Statement {
    /// The literals of the statement, in canonical order.
    literals: Vec<Literal>,
}

impl Statement {
    /// The canonical statement over the given literals.
    ///
    /// Literals are sorted by variable then polarity, and exact duplicates are removed.
    /// A variable occurring with both polarities is kept --- see [is_valid](Self::is_valid).
    pub fn from_literals(literals: impl IntoIterator<Item = Literal>) -> Self {
        let mut literals: Vec<Literal> = literals.into_iter().collect();
        literals.sort();
        literals.dedup();
        Self { literals }
    }

    /// An iterator over the literals of the statement, in canonical order.
    pub fn literals(&self) -> impl Iterator<Item = &Literal> {
        self.literals.iter()
    }

    /// The rank of the statement --- the number of literals it holds.
    pub fn rank(&self) -> usize {
        self.literals.len()
    }

    /// Whether the statement holds the given literal.
    pub fn contains_literal(&self, literal: &Literal) -> bool {
        self.literals.binary_search(literal).is_ok()
    }

    /// Whether the statement extends `other` --- every literal of `other` occurs in the
    /// statement.
    ///
    /// An extending statement describes the more specific event, and so is *contained* in
    /// `other` as an event.
    pub fn extends(&self, other: &Statement) -> bool {
        other
            .literals
            .iter()
            .all(|literal| self.contains_literal(literal))
    }

    /// Whether no variable of the statement occurs with both polarities.
    ///
    /// Both polarities of a variable are adjacent in the canonical order, so a single scan
    /// suffices.
    pub fn is_valid(&self) -> bool {
        self.literals
            .windows(2)
            .all(|pair| pair[0].variable() != pair[1].variable())
    }

    /// The variables of the statement as (positive, negative) polarity bitmasks.
    ///
    /// The union of the two masks is the *span* of the statement.
    pub fn polarity_masks(&self) -> (u64, u64) {
        let mut positive = 0;
        let mut negative = 0;
        for literal in &self.literals {
            match literal.polarity() {
                true => positive |= 1 << literal.variable(),
                false => negative |= 1 << literal.variable(),
            }
        }
        (positive, negative)
    }

    /// The external representation of the statement, given the external names of variables.
    pub fn as_string(&self, names: &[String]) -> String {
        let inner = self
            .literals
            .iter()
            .map(|literal| literal.as_string(names))
            .collect::<Vec<_>>()
            .join(", ");
        format!("P({inner})")
    }
}

impl std::fmt::Display for Statement {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let inner = self
            .literals
            .iter()
            .map(|literal| literal.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "P({inner})")
    }
}
