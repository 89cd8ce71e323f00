use crate::parser::{parse_assignment, FormulaParser, ParseError};
use crate::registry::Definitions;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
enum Mode {
    #[default]
    Define,
    Evaluate,
}

#[derive(Debug, PartialEq, Eq)]
pub enum Response {
    Quiet,
    Answer(bool),
    End,
    Error(String),
}

#[derive(Debug, Default)]
pub struct Session {
    mode: Mode,
    defs: Definitions,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn process(&mut self, line_number: usize, line: &str) -> Response {
        if let Some(mode) = line.strip_prefix("mode ") {
            return match mode {
                "def" => {
                    self.mode = Mode::Define;
                    Response::Quiet
                }
                "eval" => {
                    self.mode = Mode::Evaluate;
                    Response::Quiet
                }
                "end" => Response::End,
                _ => Response::Error(format!("Error (line {line_number}): unknown mode {line:?}")),
            };
        }
        match self.mode {
            Mode::Define => match FormulaParser::new(line).parse_definition() {
                Ok((name, cform)) => {
                    log::debug!("defined {name} = {cform}");
                    self.defs.define(name, cform);
                    Response::Quiet
                }
                Err(e) => Response::Error(positioned(line_number, e)),
            },
            Mode::Evaluate => {
                let Some(cform) = self.defs.most_recent() else {
                    return Response::Error(format!(
                        "Error (line {line_number}): no formula is defined yet, cannot evaluate"
                    ));
                };
                match parse_assignment(line) {
                    Ok(assignment) => Response::Answer(cform.evaluate(&self.defs, &assignment)),
                    Err(e) => Response::Error(positioned(line_number, e)),
                }
            }
        }
    }
}

fn positioned(line_number: usize, e: ParseError) -> String {
    format!("Error (line {line_number}, char {}): {}", e.index, e.message)
}
