use std::{fs::File, io::BufReader, path::PathBuf};

use marten_prob::{config::Config, context::Context, reports::Report};

mod parse;

fn main() {
    env_logger::init();

    let matches = parse::cli().get_matches();

    let mut config = Config::default();
    if let Some(ceiling) = matches.get_one::<u32>("variable_ceiling") {
        config.variable_ceiling = *ceiling;
    }
    if let Some(ceiling) = matches.get_one::<usize>("iteration_ceiling") {
        config.iteration_ceiling = Some(*ceiling);
    }

    let path = matches
        .get_one::<PathBuf>("path")
        .expect("c A problem file is required")
        .clone();

    let mut ctx = Context::from_config(config);

    println!("c Reading problem from {path:?}");

    let file = match File::open(&path) {
        Ok(file) => file,
        Err(_) => {
            println!("c Failed to open problem file");
            std::process::exit(1);
        }
    };

    let info = match &path.extension() {
        #[cfg(feature = "xz")]
        Some(extension) if *extension == "xz" => {
            ctx.read_problem(BufReader::new(xz2::read::XzDecoder::new(&file)))
        }

        _ => ctx.read_problem(BufReader::new(&file)),
    };

    match info {
        Ok(info) => {
            println!(
                "c {} variables, {} known statements",
                info.variable_count, info.known_count
            );
            if info.duplicate_count != 0 {
                println!("c {} duplicate statements skipped", info.duplicate_count);
            }
        }
        Err(e) => {
            println!("c Error reading problem: {e:?}");
            std::process::exit(1);
        }
    }

    let names = ctx.variable_db.names().to_vec();

    if matches.get_flag("steps") {
        let step_names = names.clone();
        ctx.set_callback_deduction(Box::new(move |deduction| {
            println!("c {}", deduction.as_string(&step_names));
        }));
    }

    if let Err(e) = ctx.solve() {
        println!("c Solve error: {e:?}");
        std::process::exit(2);
    }

    println!(
        "c Fixed after {} passes ({} of {} statements known)",
        ctx.counters.total_iterations,
        ctx.known_db.known_count(),
        ctx.universe_db.statement_count()
    );

    if matches.get_flag("known") {
        for (statement, value) in ctx.known_values() {
            match value {
                Some(value) => println!("v {} = {value}", statement.as_string(&names)),
                None => println!("v {} = ?", statement.as_string(&names)),
            }
        }
    }

    match ctx.query() {
        Some(query) => {
            let query_string = query.as_string(&names);
            match ctx.report() {
                Report::Value(value) => println!("s {query_string} = {value}"),
                Report::Unknown => println!("s {query_string} = not enough information"),
            }
        }
        None => println!("s no query given"),
    }
}
