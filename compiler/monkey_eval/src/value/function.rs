//! Closures.

use std::fmt;
use std::rc::Rc;

use monkey_ir::{BlockStatement, FunctionLiteral, Identifier};

use crate::Environment;

/// A function literal paired with the environment it was evaluated in.
///
/// The environment is held by reference, so the closure sees bindings
/// added to its defining scope after it was created.
#[derive(Clone)]
pub struct FunctionValue {
    literal: Rc<FunctionLiteral>,
    env: Environment,
}

impl FunctionValue {
    pub fn new(literal: Rc<FunctionLiteral>, env: Environment) -> Self {
        FunctionValue { literal, env }
    }

    pub fn parameters(&self) -> &[Identifier] {
        &self.literal.parameters
    }

    pub fn body(&self) -> &BlockStatement {
        &self.literal.body
    }

    /// The captured (defining) environment.
    pub fn env(&self) -> &Environment {
        &self.env
    }
}

// Two closures are equal only if they come from the same literal
// evaluation in the same scope.
impl PartialEq for FunctionValue {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.literal, &other.literal) && self.env.ptr_eq(&other.env)
    }
}

// The captured environment can contain this very closure, so Debug stays
// shallow.
impl fmt::Debug for FunctionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.parameters().iter().map(|p| p.name.as_str()).collect();
        f.debug_struct("FunctionValue")
            .field("parameters", &names)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for FunctionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("fn(")?;
        for (i, param) in self.parameters().iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(&param.name)?;
        }
        write!(f, ") {{\n{}\n}}", self.body().statements_display())
    }
}
