/*!
The known-value database --- the values associated with universe statements.

The single mutable structure of a solve.
Values are stored in a vector indexed by [StatementIndex], so reads and writes during
propagation never hash a statement.

The database is insert-only: [record](KnownDB::record) associates a value with a statement
which has none, and leaves a statement which already has a value untouched --- the first
write wins.
Together with the finite universe this gives the termination guarantee of the
[solve procedure](crate::procedures): the known count is monotone and bounded.
*/

use crate::db::StatementIndex;

/// The known-value database.
pub struct KnownDB {
    /// The value of each universe statement, if one has been supplied or derived.
    values: Vec<Option<f64>>,

    /// A count of known values, monotone across a solve.
    known_count: usize,
}

impl KnownDB {
    /// A new [KnownDB] covering a universe of `statement_count` statements, with no value
    /// known.
    pub fn new(statement_count: usize) -> Self {
        KnownDB {
            values: vec![None; statement_count],
            known_count: 0,
        }
    }

    /// The value of the statement at `index`, if known.
    pub fn value_of(&self, index: StatementIndex) -> Option<f64> {
        self.values[index as usize]
    }

    /// Records `value` for the statement at `index`, unless a value is already known.
    ///
    /// Returns true when the value is fresh --- the first write wins, and later writes are
    /// ignored.
    pub fn record(&mut self, index: StatementIndex, value: f64) -> bool {
        match self.values[index as usize] {
            Some(_) => false,
            None => {
                self.values[index as usize] = Some(value);
                self.known_count += 1;
                true
            }
        }
    }

    /// A count of known values.
    pub fn known_count(&self) -> usize {
        self.known_count
    }
}

impl Default for KnownDB {
    fn default() -> Self {
        KnownDB::new(0)
    }
}
