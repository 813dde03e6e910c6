use clap::Parser;
use gramit::{annotate::HeuristicAnnotator, Corrector};
use std::io::{self, BufRead};

#[derive(Parser)]
#[clap(version = "0.1.0", about = "Rule-based English grammar correction")]
struct Opts {
    /// Text to correct. Reads lines from stdin when omitted.
    text: Option<String>,
    /// Print the corrections applied to each line instead of only the text.
    #[clap(long, short)]
    trace: bool,
}

fn run(corrector: &Corrector<HeuristicAnnotator>, line: &str, trace: bool) {
    if trace {
        match corrector.correct_with_trace(line) {
            Ok((corrected, applied)) => {
                println!("{}", corrected);
                println!("{:#?}", applied);
            }
            Err(error) => eprintln!("{}", error),
        }
    } else {
        match corrector.correct(line) {
            Ok(corrected) => println!("{}", corrected),
            Err(error) => eprintln!("{}", error),
        }
    }
}

fn main() {
    env_logger::init();
    let opts = Opts::parse();

    let corrector = Corrector::new(HeuristicAnnotator::new());

    if let Some(text) = opts.text {
        run(&corrector, &text, opts.trace);
        return;
    }

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line.expect("stdin is readable");
        if line.trim().is_empty() {
            continue;
        }
        run(&corrector, &line, opts.trace);
    }
}
