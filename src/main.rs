use std::{env, fs::read_to_string, process, time::Instant};

use log::info;
use minic::{
    config::{Config, USAGE},
    display_error,
    evaluator::evaluator::evaluate,
    lexer::{lexer::Lexer, tokens::Token},
    parser::parser::parse,
    scope_checker::scope_checker::check_scopes,
};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = match Config::from_args(env::args().skip(1)) {
        Ok(config) => config,
        Err(error) => {
            eprintln!("Error: {}", error);
            eprintln!("{}", USAGE);
            process::exit(2);
        }
    };

    if config.show_help {
        println!("{}", USAGE);
        return;
    }

    let file_name = config.file_name();
    let source = match read_to_string(&config.input) {
        Ok(source) => source,
        Err(error) => {
            eprintln!("Error: failed to read {}: {}", config.input.display(), error);
            process::exit(1);
        }
    };

    let start = Instant::now();

    let mut lexer = Lexer::new(source.clone(), Some(file_name.clone()));
    if config.trace_tokens {
        lexer.set_observer(Box::new(|token: &Token| {
            println!("Create {} token {}", token.kind, token.lexeme)
        }));
    }

    let program = parse(lexer).unwrap_or_else(|error| fail(&error, &source, &file_name));
    info!("Parsed in {:?}", start.elapsed());

    let check_start = Instant::now();
    check_scopes(&program).unwrap_or_else(|error| fail(&error, &source, &file_name));
    info!("Scope checked in {:?}", check_start.elapsed());

    let evaluate_start = Instant::now();
    let evaluation = evaluate(&program).unwrap_or_else(|error| fail(&error, &source, &file_name));
    info!("Evaluated in {:?}", evaluate_start.elapsed());

    for (name, value) in evaluation.bindings.iter() {
        println!("{} = {}", name, value);
    }
    println!("{}", evaluation.result);

    info!("Total time: {:?}", start.elapsed());
}

fn fail(error: &minic::errors::errors::Error, source: &str, file_name: &str) -> ! {
    display_error(error, source, file_name);
    process::exit(1);
}
