use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::error::LoxError;
use crate::value::Value;

/// One link of the lexical environment chain.  The chain grows on block
/// entry and function calls; closures keep captured links alive through
/// their `Rc` handles after the creating frame returns.
#[derive(Debug, Clone, Default)]
pub struct Environment {
    values: HashMap<String, Value>,
    enclosing: Option<Rc<RefCell<Environment>>>,
}

impl Environment {
    pub fn new() -> Self {
        Environment {
            values: HashMap::new(),
            enclosing: None,
        }
    }

    pub fn with_enclosing(enclosing: Rc<RefCell<Environment>>) -> Self {
        Environment {
            values: HashMap::new(),
            enclosing: Some(enclosing),
        }
    }

    pub fn define(&mut self, name: &str, value: Value) {
        self.values.insert(name.to_string(), value);
    }

    pub fn get(&self, name: &str, line: usize) -> Result<Value, LoxError> {
        if let Some(value) = self.values.get(name) {
            Ok(value.clone())
        } else if let Some(enclosing) = &self.enclosing {
            enclosing.borrow().get(name, line)
        } else {
            Err(LoxError::runtime(
                line,
                format!("Undefined variable '{}'.", name),
            ))
        }
    }

    pub fn assign(&mut self, name: &str, value: Value, line: usize) -> Result<(), LoxError> {
        if self.values.contains_key(name) {
            self.values.insert(name.to_string(), value);
            Ok(())
        } else if let Some(enclosing) = &self.enclosing {
            enclosing.borrow_mut().assign(name, value, line)
        } else {
            Err(LoxError::runtime(
                line,
                format!("Undefined variable '{}'.", name),
            ))
        }
    }
}

/// Walk `distance` links outward from `env`.  The resolver guarantees the
/// ancestor exists; a broken chain surfaces as an undefined-variable error
/// at the use site instead of a panic.
fn ancestor(
    env: &Rc<RefCell<Environment>>,
    distance: usize,
) -> Option<Rc<RefCell<Environment>>> {
    let mut current: Rc<RefCell<Environment>> = Rc::clone(env);

    for _ in 0..distance {
        let next = current.borrow().enclosing.clone()?;
        current = next;
    }

    Some(current)
}

/// Read `name` from the environment exactly `distance` hops out.
pub fn get_at(
    env: &Rc<RefCell<Environment>>,
    distance: usize,
    name: &str,
    line: usize,
) -> Result<Value, LoxError> {
    let target = ancestor(env, distance).ok_or_else(|| {
        LoxError::runtime(line, format!("Undefined variable '{}'.", name))
    })?;

    let value = target.borrow().values.get(name).cloned();

    value.ok_or_else(|| LoxError::runtime(line, format!("Undefined variable '{}'.", name)))
}

/// Write `name` in the environment exactly `distance` hops out.
pub fn assign_at(
    env: &Rc<RefCell<Environment>>,
    distance: usize,
    name: &str,
    value: Value,
    line: usize,
) -> Result<(), LoxError> {
    let target = ancestor(env, distance).ok_or_else(|| {
        LoxError::runtime(line, format!("Undefined variable '{}'.", name))
    })?;

    target.borrow_mut().values.insert(name.to_string(), value);

    Ok(())
}
