use crate::formula::Cform;
use crate::registry::Definitions;

// bounds structural nesting plus cname hops, so a cyclic definition like
// a=(a^1) terminates instead of overflowing the stack
const MAX_EVAL_DEPTH: usize = 2048;

impl Cform {
    pub fn evaluate(&self, defs: &Definitions, assignment: &[bool]) -> bool {
        self.eval(defs, assignment, 0)
    }

    fn eval(&self, defs: &Definitions, assignment: &[bool], depth: usize) -> bool {
        if depth > MAX_EVAL_DEPTH {
            log::warn!("evaluation of {self} exceeds depth {MAX_EVAL_DEPTH}, assuming false");
            return false;
        }
        // both operands are always evaluated, so diagnostics from the
        // right side are never skipped by a short circuit
        match self {
            Cform::Negate(x) => !x.eval(defs, assignment, depth + 1),
            Cform::And(l, r) => {
                let left = l.eval(defs, assignment, depth + 1);
                let right = r.eval(defs, assignment, depth + 1);
                left && right
            }
            Cform::Or(l, r) => {
                let left = l.eval(defs, assignment, depth + 1);
                let right = r.eval(defs, assignment, depth + 1);
                left || right
            }
            Cform::Implies(l, r) => {
                let left = l.eval(defs, assignment, depth + 1);
                let right = r.eval(defs, assignment, depth + 1);
                !left || right
            }
            Cform::Iff(l, r) => {
                let left = l.eval(defs, assignment, depth + 1);
                let right = r.eval(defs, assignment, depth + 1);
                (left && right) || (!left && !right)
            }
            Cform::Cname(name) => match defs.lookup(*name) {
                Some(cform) => cform.eval(defs, assignment, depth + 1),
                None => {
                    log::warn!("cannot find composite formula {name}, assuming false");
                    false
                }
            },
            // pnames are 1-indexed
            Cform::Pname(index) => {
                if (1..=assignment.len()).contains(index) {
                    assignment[index - 1]
                } else {
                    log::warn!("cannot find truth value of proposition {index}, assuming false");
                    false
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::parser::{parse_assignment, FormulaParser};

    fn init() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[track_caller]
    fn eval(src: &str, assignment: &str) -> bool {
        eval_with(&Definitions::new(), src, assignment)
    }

    #[track_caller]
    fn eval_with(defs: &Definitions, src: &str, assignment: &str) -> bool {
        let cform = FormulaParser::new(src).parse_cform().unwrap();
        cform.evaluate(defs, &parse_assignment(assignment).unwrap())
    }

    #[test]
    fn proposition_truth_tables() {
        init();
        assert_eq!(eval("1", "0"), false);
        assert_eq!(eval("1", "1"), true);
        assert_eq!(eval("2", "01"), true);
        assert_eq!(eval("2", "10"), false);
    }

    #[test]
    fn negate_truth_table() {
        init();
        assert_eq!(eval("(~1)", "0"), true);
        assert_eq!(eval("(~1)", "1"), false);
    }

    #[test]
    fn and_truth_table() {
        init();
        assert_eq!(eval("(1^2)", "00"), false);
        assert_eq!(eval("(1^2)", "01"), false);
        assert_eq!(eval("(1^2)", "10"), false);
        assert_eq!(eval("(1^2)", "11"), true);
    }

    #[test]
    fn or_truth_table() {
        init();
        assert_eq!(eval("(1V2)", "00"), false);
        assert_eq!(eval("(1V2)", "01"), true);
        assert_eq!(eval("(1V2)", "10"), true);
        assert_eq!(eval("(1V2)", "11"), true);
    }

    #[test]
    fn implies_truth_table() {
        init();
        assert_eq!(eval("(1>2)", "00"), true);
        assert_eq!(eval("(1>2)", "01"), true);
        assert_eq!(eval("(1>2)", "10"), false);
        assert_eq!(eval("(1>2)", "11"), true);
    }

    #[test]
    fn iff_truth_table() {
        init();
        assert_eq!(eval("(1-2)", "00"), true);
        assert_eq!(eval("(1-2)", "01"), false);
        assert_eq!(eval("(1-2)", "10"), false);
        assert_eq!(eval("(1-2)", "11"), true);
    }

    #[test]
    fn negated_conjunction_scenario() {
        init();
        // 1 -> false, 2 -> true; and(false, true) = false; negate = true
        assert_eq!(eval("(~(1^2))", "01"), true);
    }

    #[test]
    fn implication_scenario() {
        init();
        let (name, cform) = FormulaParser::new("z=(1>2)").parse_definition().unwrap();
        let mut defs = Definitions::new();
        defs.define(name, cform);
        let assignment = parse_assignment("10").unwrap();
        assert_eq!(defs.most_recent().unwrap().evaluate(&defs, &assignment), false);
    }

    #[test]
    fn named_references_resolve_through_the_registry() {
        init();
        let mut defs = Definitions::new();
        defs.define('a', FormulaParser::new("(1^2)").parse_cform().unwrap());
        assert_eq!(eval_with(&defs, "(~a)", "11"), false);
        assert_eq!(eval_with(&defs, "(~a)", "01"), true);
    }

    #[test]
    fn redefinition_is_visible_to_existing_references() {
        init();
        let mut defs = Definitions::new();
        defs.define('a', FormulaParser::new("1").parse_cform().unwrap());
        let b = FormulaParser::new("a").parse_cform().unwrap();
        let assignment = parse_assignment("1").unwrap();
        assert_eq!(b.evaluate(&defs, &assignment), true);
        // rebinding the name rebinds every reference, with no tree rewritten
        defs.define('a', FormulaParser::new("(~1)").parse_cform().unwrap());
        assert_eq!(b.evaluate(&defs, &assignment), false);
    }

    #[test]
    fn undefined_name_degrades_to_false() {
        init();
        assert_eq!(eval("q", "1"), false);
        assert_eq!(eval("(qV1)", "1"), true);
    }

    #[test]
    fn out_of_range_proposition_degrades_to_false() {
        init();
        assert_eq!(eval("5", "01"), false);
        assert_eq!(eval("0", "01"), false);
        // siblings keep evaluating after the degradation
        assert_eq!(eval("(5V2)", "01"), true);
        assert_eq!(eval("(5^1)", "11"), false);
        assert_eq!(eval("(~5)", "01"), true);
    }

    #[test]
    fn cyclic_definition_terminates() {
        init();
        let mut defs = Definitions::new();
        defs.define('a', FormulaParser::new("(a^1)").parse_cform().unwrap());
        assert_eq!(eval_with(&defs, "a", "1"), false);
    }
}
