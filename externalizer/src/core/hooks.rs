//! Hook entries and the external-compatible hook list rewrite.

use serde_yaml::{Mapping, Value};

use crate::core::error::{ExternalizeError, render};

/// Hook injected at the front of every non-empty hook list.
pub const LOGGING_HOOK: &str = "AntithesisLogging";

/// Hooks that need control over the tested process.
pub const INCOMPATIBLE_HOOKS: [&str; 3] =
    ["CleanEveryN", "ContinuousStepdown", "CheckOrphansDeleted"];

const CLASS_KEY: &str = "class";

/// How a hook list spells its entries. Decided once per list from the first
/// entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookStyle {
    /// `- CleanEveryN`
    Plain,
    /// `- class: CleanEveryN` plus optional params.
    Structured,
}

/// A recognized hook entry.
#[derive(Debug, Clone, PartialEq)]
pub enum HookRef {
    Plain(String),
    /// The full entry mapping; `class` is guaranteed to be a string.
    Structured(Mapping),
}

impl HookRef {
    /// Recognize a raw entry, or `None` for any other shape.
    pub fn parse(value: &Value) -> Option<Self> {
        match value {
            Value::String(name) => Some(Self::Plain(name.clone())),
            Value::Mapping(entry) => {
                entry.get(CLASS_KEY)?.as_str()?;
                Some(Self::Structured(entry.clone()))
            }
            _ => None,
        }
    }

    /// The canonical logging hook spelled in `style`.
    pub fn logging(style: HookStyle) -> Self {
        match style {
            HookStyle::Plain => Self::Plain(LOGGING_HOOK.to_string()),
            HookStyle::Structured => {
                let mut entry = Mapping::new();
                entry.insert(
                    Value::String(CLASS_KEY.to_string()),
                    Value::String(LOGGING_HOOK.to_string()),
                );
                Self::Structured(entry)
            }
        }
    }

    pub fn style(&self) -> HookStyle {
        match self {
            Self::Plain(_) => HookStyle::Plain,
            Self::Structured(_) => HookStyle::Structured,
        }
    }

    /// Identifying hook name.
    pub fn name(&self) -> &str {
        match self {
            Self::Plain(name) => name.as_str(),
            Self::Structured(entry) => entry
                .get(CLASS_KEY)
                .and_then(Value::as_str)
                .unwrap_or_default(),
        }
    }

    pub fn is_incompatible(&self) -> bool {
        INCOMPATIBLE_HOOKS.contains(&self.name())
    }

    pub fn into_value(self) -> Value {
        match self {
            Self::Plain(name) => Value::String(name),
            Self::Structured(entry) => Value::Mapping(entry),
        }
    }
}

/// Rewrite a non-empty hook list: logging hook first, incompatible hooks
/// dropped, everything else kept in order.
///
/// Every entry must match the style of the first one. An empty list comes back
/// empty.
pub fn normalize_hooks(hooks: &[Value]) -> Result<Vec<Value>, ExternalizeError> {
    let parsed = parse_uniform(hooks)?;
    let Some(style) = parsed.first().map(HookRef::style) else {
        return Ok(Vec::new());
    };

    let mut normalized = Vec::with_capacity(parsed.len() + 1);
    normalized.push(HookRef::logging(style).into_value());
    normalized.extend(
        parsed
            .into_iter()
            .filter(|hook| !hook.is_incompatible())
            .map(HookRef::into_value),
    );
    Ok(normalized)
}

fn parse_uniform(hooks: &[Value]) -> Result<Vec<HookRef>, ExternalizeError> {
    let mut style = None;
    let mut parsed = Vec::with_capacity(hooks.len());
    for (index, value) in hooks.iter().enumerate() {
        let hook = HookRef::parse(value)
            .filter(|hook| *style.get_or_insert(hook.style()) == hook.style())
            .ok_or_else(|| ExternalizeError::UnsupportedHookShape {
                index,
                entry: render(value),
            })?;
        parsed.push(hook);
    }
    Ok(parsed)
}
