use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cform {
    Negate(Box<Cform>),
    And(Box<Cform>, Box<Cform>),
    Or(Box<Cform>, Box<Cform>),
    Implies(Box<Cform>, Box<Cform>),
    Iff(Box<Cform>, Box<Cform>),
    Cname(char),
    Pname(usize),
}

impl Display for Cform {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Cform::Negate(x) => write!(f, "(~{x})"),
            Cform::And(l, r) => write!(f, "({l}^{r})"),
            Cform::Or(l, r) => write!(f, "({l}V{r})"),
            Cform::Implies(l, r) => write!(f, "({l}>{r})"),
            Cform::Iff(l, r) => write!(f, "({l}-{r})"),
            Cform::Cname(name) => write!(f, "{name}"),
            Cform::Pname(index) => write!(f, "{index}"),
        }
    }
}
