/*!
Literals are variables paired with a (boolean) polarity.

The representation is a plain struct, and every operation on a literal is an explicit method
--- in particular, negation is [negate](Literal::negate) rather than an overloaded operator,
and equality holds only between literals.

An example:

```rust
# use marten_prob::structures::literal::Literal;
let variable = 7;
let literal = Literal::new(variable, true);

assert!(literal.polarity());
assert_eq!(literal.variable(), 7);
assert_eq!(literal.negate(), Literal::new(7, false));
assert_eq!(literal.negate().negate(), literal);
```

Literals are ordered by variable and then polarity, with the (Rust default) ordering of
'false' being (strictly) less than 'true'.
Literals are hashable in order to allow statements, as collections of literals, to key maps.
*/

use crate::structures::variable::Variable;

/// A variable paired with a polarity.
#[derive(Clone, Copy, Debug)]
pub struct Literal {
    /// The variable of the literal.
    variable: Variable,

    /// The polarity of the literal.
    polarity: bool,
}

impl Literal {
    /// A fresh literal, specified by pairing a variable with a polarity.
    pub fn new(variable: Variable, polarity: bool) -> Self {
        Self { variable, polarity }
    }

    /// The negation of the literal --- same variable, flipped polarity.
    pub fn negate(&self) -> Self {
        Self {
            variable: self.variable,
            polarity: !self.polarity,
        }
    }

    /// The variable of the literal.
    pub fn variable(&self) -> Variable {
        self.variable
    }

    /// The polarity of the literal.
    pub fn polarity(&self) -> bool {
        self.polarity
    }

    /// The external representation of the literal, given the external names of variables.
    pub fn as_string(&self, names: &[String]) -> String {
        match self.polarity {
            true => names[self.variable as usize].clone(),
            false => format!("!{}", names[self.variable as usize]),
        }
    }
}

impl PartialOrd for Literal {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Literal {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        if self.variable == other.variable {
            self.polarity.cmp(&other.polarity)
        } else {
            self.variable.cmp(&other.variable)
        }
    }
}

impl PartialEq for Literal {
    fn eq(&self, other: &Self) -> bool {
        self.variable == other.variable && self.polarity == other.polarity
    }
}

impl Eq for Literal {}

impl std::hash::Hash for Literal {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.variable.hash(state);
        self.polarity.hash(state);
    }
}

impl std::fmt::Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.polarity {
            true => write!(f, "{}", self.variable),
            false => write!(f, "!{}", self.variable),
        }
    }
}
