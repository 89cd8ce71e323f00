use std::io::BufRead;

pub mod eval;
pub mod formula;
pub mod parser;
pub mod registry;
pub mod session;

use session::{Response, Session};

fn main() {
    env_logger::init();
    let mut session = Session::new();
    let stdin = std::io::stdin();
    for (number, line) in stdin.lock().lines().enumerate() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        };
        let line = line.strip_suffix('\r').unwrap_or(&line);
        let line_number = number + 1;
        match session.process(line_number, line) {
            Response::Quiet => {}
            Response::Answer(answer) => println!("Answer (line {line_number}): {answer}"),
            Response::End => return,
            Response::Error(message) => {
                eprintln!("{message}");
                std::process::exit(1);
            }
        }
    }
}
