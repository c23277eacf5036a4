#![allow(dead_code)]

use serde_json::json;
use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};
use usher::{ActionError, BoxError, Controller, FromArgs, RespondWith, Value, actions};

// ============================================================================
// Basic Controllers
// ============================================================================

pub struct Hello;

impl FromArgs for Hello {
    fn from_args(_args: &[Value]) -> Result<Self, BoxError> {
        Ok(Hello)
    }
}

impl Controller for Hello {
    fn call(&mut self, action: &str, _args: &[Value]) -> Result<Value, ActionError> {
        actions!(action, {
            world => Ok(json!("Hello World")),
        })
    }
}

pub struct Ola;

impl FromArgs for Ola {
    fn from_args(_args: &[Value]) -> Result<Self, BoxError> {
        Ok(Ola)
    }
}

impl Controller for Ola {
    fn call(&mut self, action: &str, _args: &[Value]) -> Result<Value, ActionError> {
        actions!(action, {
            mundo => Ok(json!("Olá Mundo")),
        })
    }
}

// ============================================================================
// Respond-With Controller
// ============================================================================

// Sets title/count for the view scope and returns the item list.
#[derive(Default)]
pub struct Widgets {
    responds: RespondWith,
}

impl FromArgs for Widgets {
    fn from_args(_args: &[Value]) -> Result<Self, BoxError> {
        Ok(Widgets::default())
    }
}

impl Controller for Widgets {
    fn call(&mut self, action: &str, _args: &[Value]) -> Result<Value, ActionError> {
        actions!(action, {
            index => {
                self.responds.insert("title".to_string(), json!("All Widgets"));
                self.responds.insert("count".to_string(), json!(2));
                Ok(json!(["sprocket", "flange"]))
            },
        })
    }

    fn responds_with(&self) -> RespondWith {
        self.responds.clone()
    }
}

// ============================================================================
// Constructor-Argument Controller
// ============================================================================

// Requires a numeric seed, so it doubles as the instantiation-failure case
// when dispatched without injection.
pub struct Adder {
    pub seed: i64,
}

impl FromArgs for Adder {
    fn from_args(args: &[Value]) -> Result<Self, BoxError> {
        let seed = args
            .first()
            .and_then(Value::as_i64)
            .ok_or("Adder requires a numeric seed argument")?;
        Ok(Adder { seed })
    }
}

impl Controller for Adder {
    fn call(&mut self, action: &str, args: &[Value]) -> Result<Value, ActionError> {
        actions!(action, {
            total => Ok(json!(self.seed)),
            add => {
                let sum: i64 = args.iter().filter_map(Value::as_i64).sum();
                Ok(json!(self.seed + sum))
            },
        })
    }
}

// ============================================================================
// Failing Controller
// ============================================================================

pub struct Flaky;

impl FromArgs for Flaky {
    fn from_args(_args: &[Value]) -> Result<Self, BoxError> {
        Ok(Flaky)
    }
}

impl Controller for Flaky {
    fn call(&mut self, action: &str, _args: &[Value]) -> Result<Value, ActionError> {
        actions!(action, {
            boom => Err(ActionError::Failed("intentional failure".into())),
        })
    }
}

// ============================================================================
// Shared-State Controller
// ============================================================================

// Registered as a plain-value descriptor; hits accumulate across dispatches.
pub struct Counter {
    hits: Arc<AtomicUsize>,
}

impl Counter {
    pub fn new() -> (Self, Arc<AtomicUsize>) {
        let hits = Arc::new(AtomicUsize::new(0));
        (Self { hits: hits.clone() }, hits)
    }
}

impl Controller for Counter {
    fn call(&mut self, action: &str, _args: &[Value]) -> Result<Value, ActionError> {
        actions!(action, {
            hit => {
                let hits = self.hits.fetch_add(1, Ordering::SeqCst) + 1;
                Ok(json!(hits))
            },
        })
    }
}
