use shunting::fixtures::{run_self_tests, Outcome, EXAMPLES};
use shunting::{Evaluator, ShuntingParser};
use tracing::{debug, info, warn};

struct Options {
    verbosity: usize,
    allow_zero_exponent: bool,
    expr: Vec<String>,
}

fn parse_args() -> Options {
    let mut opts = Options { verbosity: 0, allow_zero_exponent: false, expr: Vec::new() };
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "-v" => opts.verbosity += 1,
            "-vv" => opts.verbosity += 2,
            "--allow-zero-exponent" => opts.allow_zero_exponent = true,
            _ => opts.expr.push(arg),
        }
    }
    opts
}

fn init_logging(verbosity: usize) {
    use tracing_subscriber::EnvFilter;
    let level = match verbosity {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_env("RPNCALC_LOG").unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

mod repl {
    use super::*;

    const HELP: &str = "\
Type in an expression to evaluate. Supported operators are +, -, *, / and ^.
Use spaces between each number, operator and parenthesis: ( 1 + 2 ) * 3
Type examples to see sample input and output.
Type tests to see results of various inputs.";

    pub fn evalexpr(evaluator: &Evaluator, input: &str) {
        match ShuntingParser::parse_str(input) {
            Err(e) => println!("Parse error: {}", e),
            Ok(expr) => {
                debug!(rpn = %expr.postfix(), "converted");
                match evaluator.eval(&expr) {
                    Err(e) => println!("Eval error: {}", e),
                    Ok(result) => println!("{} = {}", expr, result),
                }
            }
        };
    }

    fn examples(evaluator: &Evaluator) {
        for example in EXAMPLES.iter() {
            println!("{}", example);
            evalexpr(evaluator, example);
            println!();
        }
    }

    fn tests() {
        println!("Running test equations!");
        let cases = run_self_tests();
        for case in cases.iter() {
            match &case.outcome {
                Outcome::Passed(r) => {
                    println!("{} == {} \tPASSED! (Calculated: {})", case.expr, case.expected, r)
                }
                Outcome::Failed(r) => {
                    println!("{} == {} \tFAILED! (Calculated: {})", case.expr, case.expected, r)
                }
                Outcome::Errored(e) => {
                    println!("{} == {} \tFAILED! ({})", case.expr, case.expected, e)
                }
            }
        }
        let passed = cases.iter().filter(|c| c.passed()).count();
        if passed < cases.len() {
            warn!(failed = cases.len() - passed, "self tests failed");
        }
        println!("Passed {}/{} tests.", passed, cases.len());
    }

    pub fn dispatch(evaluator: &Evaluator, input: &str) {
        match input.trim() {
            "" => (),
            "help" | "-h" => println!("{}", HELP),
            "examples" => examples(evaluator),
            "tests" => tests(),
            expr => evalexpr(evaluator, expr),
        }
    }
}

fn main() -> Result<(), String> {
    let opts = parse_args();
    init_logging(opts.verbosity);

    let evaluator = Evaluator::new().reject_zero_exponent(!opts.allow_zero_exponent);
    if opts.allow_zero_exponent {
        info!("zero exponents allowed");
    }

    if !opts.expr.is_empty() {
        repl::dispatch(&evaluator, &opts.expr.join(" "));
        return Ok(());
    }

    use rustyline::error::ReadlineError;
    let mut rl = rustyline::DefaultEditor::new().map_err(|e| e.to_string())?;
    let histpath = dirs::home_dir().map(|h| h.join(".rpncalc_history"));
    if let Some(ref path) = histpath {
        if rl.load_history(path).is_err() {
            debug!(path = %path.display(), "no history yet");
        }
    }
    loop {
        match rl.readline(">> ") {
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => return Err(format!("Readline err: {:?}", e)),
            Ok(line) => {
                let _ = rl.add_history_entry(line.as_str());
                repl::dispatch(&evaluator, &line);
            }
        }
    }
    if let Some(ref path) = histpath {
        if let Err(e) = rl.save_history(path) {
            warn!(path = %path.display(), "failed to save history: {}", e);
        }
    }
    Ok(())
}
