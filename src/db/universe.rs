/*!
The universe database --- an arena of every valid statement over the variables of a context.

# Construction

The universe over n variables holds one statement for each assignment of 'absent', 'asserted',
or 'negated' to each variable, excluding the all-absent assignment: 3^n − 1 statements.
Construction enumerates these assignments as base-3 codes, so no invalid statement is ever
produced, and sorts the arena by (rank, canonical literal order) for a stable, reproducible
universe.

# The refinement relation

A statement X *refines* a statement Y when the literals of X are a strict superset of the
literals of Y --- X describes the more specific event.
Every ordered pair of distinct statements is compared when the universe is built, an
intrinsically quadratic cost which bounds the library to small variable counts.
Each comparison is O(1) on the polarity bitmasks stored in the arena.

The relation is a strict partial order: irreflexive and antisymmetric by the strict superset
test, and transitive by construction.

# Partition groups

For a parent statement, the refinements introducing the same set of added variables are
exactly the 2^k polarity combinations of those k variables, and so tile the parent: by the
law of total probability, their probabilities sum to the parent's.
The database groups each parent's refinements by *span* --- the u64 mask of the variables
involved, polarity disregarded --- once, at build time.
A parent without refinements has no groups, and contributes nothing to a solve.

```rust
# use marten_prob::db::universe::UniverseDB;
let universe = UniverseDB::build(2);

// A, !A, B, !B, and the four rank-two combinations.
assert_eq!(universe.statement_count(), 8);
```
*/

use std::collections::{BTreeMap, HashMap};

use crate::{
    db::StatementIndex,
    misc::log::targets::{self},
    structures::{literal::Literal, statement::Statement, variable::Variable},
};

/// A statement of the universe, together with the structure precomputed for it.
struct StatementRecord {
    /// The statement.
    statement: Statement,

    /// The mask of variables the statement asserts.
    positive_mask: u64,

    /// The mask of variables the statement negates.
    negative_mask: u64,

    /// Indices of every statement which strictly refines this one.
    children: Vec<StatementIndex>,

    /// The children, grouped by the span of variables they involve.
    partitions: Vec<PartitionGroup>,
}

/// A family of sibling refinements of a parent statement which together tile the parent.
///
/// The members are the 2^k polarity combinations of the k variables the span adds to the
/// parent, and so their probabilities sum to the parent's.
#[derive(Debug)]
pub struct PartitionGroup {
    /// The mask of variables the members involve, polarity disregarded.
    pub span: u64,

    /// The indices of the member statements, in arena order.
    pub members: Vec<StatementIndex>,
}

/// The universe database.
#[derive(Default)]
pub struct UniverseDB {
    /// The statement arena, sorted by (rank, canonical literal order).
    statements: Vec<StatementRecord>,

    /// The map from statement content to arena index.
    index_map: HashMap<Statement, StatementIndex>,
}

impl UniverseDB {
    /// Builds the universe over `variable_count` variables.
    ///
    /// Construction is deterministic: the same variable count always yields the same arena,
    /// in the same order.
    pub fn build(variable_count: u32) -> Self {
        let mut statements: Vec<Statement> = Vec::default();

        // Base-3 codes: digit 0 leaves a variable absent, 1 asserts it, 2 negates it.
        let code_count = 3_usize.pow(variable_count);
        for code in 1..code_count {
            let mut remainder = code;
            let mut literals = Vec::default();
            for variable in 0..variable_count {
                match remainder % 3 {
                    1 => literals.push(Literal::new(variable as Variable, true)),
                    2 => literals.push(Literal::new(variable as Variable, false)),
                    _ => {}
                }
                remainder /= 3;
            }
            statements.push(Statement::from_literals(literals));
        }

        statements.sort_by(|a, b| a.rank().cmp(&b.rank()).then(a.cmp(b)));

        let mut records: Vec<StatementRecord> = statements
            .into_iter()
            .map(|statement| {
                let (positive_mask, negative_mask) = statement.polarity_masks();
                StatementRecord {
                    statement,
                    positive_mask,
                    negative_mask,
                    children: Vec::default(),
                    partitions: Vec::default(),
                }
            })
            .collect();

        let mut index_map = HashMap::default();
        for (index, record) in records.iter().enumerate() {
            index_map.insert(record.statement.clone(), index as StatementIndex);
        }

        // The quadratic pass: record every strict refinement edge.
        // The arena is sorted by rank, so only indices above a parent are candidates.
        for parent in 0..records.len() {
            let parent_positive = records[parent].positive_mask;
            let parent_negative = records[parent].negative_mask;
            let parent_rank = records[parent].statement.rank();

            let mut children = Vec::default();
            for (child, record) in records.iter().enumerate().skip(parent + 1) {
                if record.statement.rank() == parent_rank {
                    continue;
                }
                if record.positive_mask & parent_positive == parent_positive
                    && record.negative_mask & parent_negative == parent_negative
                {
                    children.push(child as StatementIndex);
                }
            }

            let mut spans: BTreeMap<u64, Vec<StatementIndex>> = BTreeMap::default();
            for &child in &children {
                let record = &records[child as usize];
                let span = record.positive_mask | record.negative_mask;
                spans.entry(span).or_default().push(child);
            }

            records[parent].children = children;
            records[parent].partitions = spans
                .into_iter()
                .map(|(span, members)| PartitionGroup { span, members })
                .collect();
        }

        log::info!(target: targets::UNIVERSE,
            "Universe built: {} variables, {} statements",
            variable_count,
            records.len()
        );

        UniverseDB {
            statements: records,
            index_map,
        }
    }

    /// A count of statements in the universe.
    pub fn statement_count(&self) -> usize {
        self.statements.len()
    }

    /// The arena indices, in order --- smallest rank first.
    pub fn indices(&self) -> std::ops::Range<usize> {
        0..self.statements.len()
    }

    /// The statement at `index`.
    pub fn statement(&self, index: StatementIndex) -> &Statement {
        &self.statements[index as usize].statement
    }

    /// An iterator over the statements of the universe, in arena order.
    pub fn statements(&self) -> impl Iterator<Item = &Statement> {
        self.statements.iter().map(|record| &record.statement)
    }

    /// The arena index of `statement`, if the statement belongs to the universe.
    pub fn index_of(&self, statement: &Statement) -> Option<StatementIndex> {
        self.index_map.get(statement).copied()
    }

    /// The indices of every statement which strictly refines the statement at `index`.
    pub fn children_of(&self, index: StatementIndex) -> &[StatementIndex] {
        &self.statements[index as usize].children
    }

    /// The partition groups of the statement at `index`.
    ///
    /// Empty for statements without refinements, e.g. statements of maximal rank.
    pub fn partitions_of(&self, index: StatementIndex) -> &[PartitionGroup] {
        &self.statements[index as usize].partitions
    }

    /// The indices of the single-literal statements of the universe.
    ///
    /// The arena is sorted by rank, so these form an initial segment.
    pub fn singleton_indices(&self) -> impl Iterator<Item = StatementIndex> + '_ {
        self.statements
            .iter()
            .take_while(|record| record.statement.rank() == 1)
            .enumerate()
            .map(|(index, _)| index as StatementIndex)
    }

    /// The index of the complement of the single-literal statement at `index`.
    ///
    /// None if the statement at `index` is not a singleton.
    pub fn complement_of(&self, index: StatementIndex) -> Option<StatementIndex> {
        let statement = &self.statements[index as usize].statement;
        if statement.rank() != 1 {
            return None;
        }
        let negated = Statement::from_literals(statement.literals().map(|l| l.negate()));
        self.index_of(&negated)
    }
}
