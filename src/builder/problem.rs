/*!
Reading the textual representation of a problem into a context.

A problem is written as:
- A header line: the count of known statements, followed by the variable names. \
  `3 A B`
- One line per known statement: literals, optionally joined by `&`, then a colon and the
  probability. \
  `A & !B : 0.3`
- A final line holding the query statement. \
  `A & !B`

Lines whose first token is exactly `c` are comments, and may appear anywhere.
Variable names are free-form, so a name may itself begin with `c` --- only a `c` standing
alone marks a comment.

```rust
# use marten_prob::context::Context;
# use marten_prob::config::Config;
# use std::io::Write;
let mut ctx = Context::from_config(Config::default());

let mut problem = vec![];
let _ = problem.write(b"
c an example problem
3 A B
A : 0.6
B : 0.5
A & B : 0.3
A & !B
");

assert!(ctx.read_problem(problem.as_slice()).is_ok());
assert!(ctx.solve().is_ok());
```
*/

use std::io::BufRead;

use crate::{
    context::Context,
    misc::log::targets::{self},
    types::err::{self, ErrorKind},
};

/// Details on a problem read into a context.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProblemInfo {
    /// A count of the variables declared.
    pub variable_count: usize,

    /// A count of the known statements recorded.
    pub known_count: usize,

    /// A count of duplicate statements skipped.
    pub duplicate_count: usize,
}

impl Context {
    /// Reads the textual representation of a problem into the context.
    ///
    /// ```rust,ignore
    /// ctx.read_problem(BufReader::new(&file))?;
    /// ```
    pub fn read_problem(&mut self, mut reader: impl BufRead) -> Result<ProblemInfo, ErrorKind> {
        let mut buffer = String::with_capacity(1024);
        let mut line_counter = 0;

        // First phase, read until the header is found.
        let expected: usize = 'header_loop: loop {
            match reader.read_line(&mut buffer) {
                Ok(0) => return Err(ErrorKind::from(err::ParseError::ProblemSpecification)),
                Ok(_) => line_counter += 1,
                Err(_) => return Err(ErrorKind::from(err::ParseError::Line(line_counter))),
            }

            if comment_or_blank(&buffer) {
                buffer.clear();
                continue 'header_loop;
            }

            let mut header = buffer.split_whitespace();

            let known_count: usize = match header.next() {
                None => return Err(ErrorKind::from(err::ParseError::ProblemSpecification)),
                Some(string) => match string.parse() {
                    Err(_) => return Err(ErrorKind::from(err::ParseError::ProblemSpecification)),
                    Ok(count) => count,
                },
            };

            for name in header {
                self.fresh_variable(name)?;
            }

            buffer.clear();
            break 'header_loop known_count;
        };

        // Second phase, one line per expected known statement.
        let mut known_count = 0;
        let mut duplicate_count = 0;
        while known_count + duplicate_count < expected {
            match reader.read_line(&mut buffer) {
                Ok(0) => return Err(ErrorKind::from(err::ParseError::Line(line_counter))),
                Ok(_) => line_counter += 1,
                Err(_) => return Err(ErrorKind::from(err::ParseError::Line(line_counter))),
            }

            if !comment_or_blank(&buffer) {
                let cleaned = buffer.replace(':', " ");
                let mut tokens: Vec<&str> = cleaned.split_whitespace().collect();

                let value: f64 = match tokens.pop() {
                    None => return Err(ErrorKind::from(err::ParseError::MissingValue)),
                    Some(token) => match token.parse() {
                        Err(_) => return Err(ErrorKind::from(err::ParseError::MissingValue)),
                        Ok(value) => value,
                    },
                };

                let statement = self.statement_from_string(&tokens.join(" "))?;
                match self.add_known(statement, value)? {
                    super::KnownOk::Recorded => known_count += 1,
                    super::KnownOk::Duplicate => duplicate_count += 1,
                }
            }

            buffer.clear();
        }

        // Third phase, the query statement.
        'query_loop: loop {
            match reader.read_line(&mut buffer) {
                Ok(0) => return Err(ErrorKind::from(err::ParseError::MissingQuery)),
                Ok(_) => line_counter += 1,
                Err(_) => return Err(ErrorKind::from(err::ParseError::Line(line_counter))),
            }

            if comment_or_blank(&buffer) {
                buffer.clear();
                continue 'query_loop;
            }

            let query = self.statement_from_string(&buffer)?;
            self.set_query(query)?;
            break 'query_loop;
        }

        let info = ProblemInfo {
            variable_count: self.variable_db.count(),
            known_count,
            duplicate_count,
        };
        log::info!(target: targets::PARSER,
            "Problem read: {} variables, {} known statements, {} duplicates skipped",
            info.variable_count,
            info.known_count,
            info.duplicate_count
        );
        Ok(info)
    }
}

/// Whether a line is a comment or blank.
///
/// Variable names are free-form, so a `c` marks a comment only when it stands alone as the
/// first token --- a statement over a variable named `coin` is not a comment.
fn comment_or_blank(line: &str) -> bool {
    match line.split_whitespace().next() {
        Some(token) => token == "c",
        None => true,
    }
}
