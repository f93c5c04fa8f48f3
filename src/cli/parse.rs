use std::path::PathBuf;

use clap::{value_parser, Arg, ArgAction, Command};

pub fn cli() -> Command {
    Command::new("marten_prob")
        .about("Deduces the probability of a joint boolean event from known probability statements")
        .version(env!("CARGO_PKG_VERSION"))

        .arg(Arg::new("path")
            .required(true)
            .value_parser(value_parser!(PathBuf))
            .help("The problem file to read.")
            .long_help("The problem file to read.

A problem is a header line (the count of known statements, then the variable names),
one line per known statement ('A & !B : 0.3'), and a final query line ('A & !B').
Lines whose first token is 'c' are comments."))

        .arg(Arg::new("steps")
            .short('s')
            .long("steps")
            .action(ArgAction::SetTrue)
            .required(false)
            .help("Display each deduction as it is made."))

        .arg(Arg::new("known")
            .short('k')
            .long("known")
            .action(ArgAction::SetTrue)
            .required(false)
            .help("Display the full known-value mapping over the universe after the solve."))

        .arg(Arg::new("variable_ceiling")
            .long("variable-ceiling")
            .value_parser(value_parser!(u32))
            .required(false)
            .num_args(1)
            .help("The maximum number of variables to accept.")
            .long_help("The maximum number of variables to accept.

The universe over n variables holds 3^n - 1 statements and is related pairwise,
so memory and time are exhausted quickly --- the default of 12 is already generous."))

        .arg(Arg::new("iteration_ceiling")
            .long("iteration-ceiling")
            .value_parser(value_parser!(usize))
            .required(false)
            .num_args(1)
            .help("Stop the fixed-point loop after this many passes.")
            .long_help("Stop the fixed-point loop after this many passes.

The loop always terminates on its own; the ceiling is a safety valve.
A solve cut short still reports whatever was derived."))
}
