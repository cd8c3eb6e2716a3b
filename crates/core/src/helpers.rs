//! Host-supplied helper functions for label formats.
//!
//! The core never defines helpers itself. A host fills a [`HelperRegistry`]
//! (for instance with text styling functions) and hands it to label format
//! compilation, where every helper becomes callable both as a function,
//! `{{ red(name) }}`, and as a filter, `{{ name | red }}`.
//!
//! A helper named without being called, `{{ red }}`, is not a field of the
//! line and renders as an empty string like any other missing identifier.

use std::fmt::{Debug, Formatter};
use std::sync::Arc;

use indexmap::IndexMap;
use minijinja::value::{from_args, Object, ObjectRepr};
use minijinja::{Environment, State, Value};

type Helper = Arc<dyn Fn(&str) -> String + Send + Sync>;

/// Named helper functions, kept in registration order.
#[derive(Clone, Default)]
pub struct HelperRegistry {
    helpers: IndexMap<String, Helper>,
}

impl HelperRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `helper` under `name`, replacing any helper already using that name.
    pub fn register<F>(&mut self, name: impl Into<String>, helper: F) -> &mut Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        self.helpers.insert(name.into(), Arc::new(helper));
        self
    }

    pub fn contains(&self, name: &str) -> bool {
        self.helpers.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.helpers.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.helpers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.helpers.is_empty()
    }

    pub(crate) fn install(&self, env: &mut Environment<'static>) {
        for (name, helper) in &self.helpers {
            let function = HelperFunction {
                name: name.clone(),
                helper: Arc::clone(helper),
            };
            env.add_global(name.clone(), Value::from_object(function));

            let filter = Arc::clone(helper);
            env.add_filter(name.clone(), move |value: Value| -> String {
                filter(&value.to_string())
            });
        }
    }
}

/// A helper exposed as a callable global.
struct HelperFunction {
    name: String,
    helper: Helper,
}

impl Debug for HelperFunction {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "helper `{}`", self.name)
    }
}

impl Object for HelperFunction {
    fn repr(self: &Arc<Self>) -> ObjectRepr {
        ObjectRepr::Plain
    }

    fn call(
        self: &Arc<Self>,
        _state: &State<'_, '_>,
        args: &[Value],
    ) -> Result<Value, minijinja::Error> {
        let (value,): (Value,) = from_args(args)?;
        Ok(Value::from((self.helper)(&value.to_string())))
    }

    fn render(self: &Arc<Self>, _formatter: &mut Formatter<'_>) -> std::fmt::Result
    where
        Self: Sized + 'static,
    {
        Ok(())
    }
}

impl Debug for HelperRegistry {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("HelperRegistry")
            .field("helpers", &self.helpers.keys().collect::<Vec<_>>())
            .finish()
    }
}
