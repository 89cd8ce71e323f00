use std::collections::BTreeMap;

use crate::formula::Cform;

// one per session; definitions are looked up by name at evaluation time,
// so redefining a name is visible to every tree that references it
#[derive(Debug, Default)]
pub struct Definitions {
    defs: BTreeMap<char, Cform>,
    last: Option<char>,
}

impl Definitions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn define(&mut self, name: char, cform: Cform) {
        self.defs.insert(name, cform);
        self.last = Some(name);
    }

    pub fn lookup(&self, name: char) -> Option<&Cform> {
        self.defs.get(&name)
    }

    pub fn most_recent(&self) -> Option<&Cform> {
        self.defs.get(&self.last?)
    }
}
