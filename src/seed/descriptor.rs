//! Seed descriptors: the `{name, arg}` form used by presets, saves and the CLI

use super::algorithm::{Coord, SeedAlgorithm};
use crate::error::{LifeError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Unresolved seed algorithm request.
///
/// `arg` is a number for `constant` and `random`, and for `selection` either
/// a list of `[x, y]` pairs or that list encoded as JSON text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeedDescriptor {
    pub name: String,
    #[serde(default)]
    pub arg: Value,
}

impl SeedDescriptor {
    pub fn new(name: impl Into<String>, arg: Value) -> Self {
        Self {
            name: name.into(),
            arg,
        }
    }

    pub fn constant(value: i64) -> Self {
        Self::new("constant", Value::from(value))
    }

    pub fn random(percent: f64) -> Self {
        Self::new("random", Value::from(percent))
    }

    pub fn selection(coords: &[Coord]) -> Self {
        Self::new("selection", Value::from(coords.iter().map(|c| Value::from(c.to_vec())).collect::<Vec<_>>()))
    }

    /// Build a descriptor from CLI-style text, e.g. `random` + `20` or
    /// `selection` + `[[1,0],[1,1]]`
    pub fn parse(name: &str, arg: Option<&str>) -> Result<Self> {
        let arg = match arg {
            None => Value::Null,
            Some(text) => serde_json::from_str(text).unwrap_or_else(|_| Value::String(text.to_string())),
        };
        let descriptor = Self::new(name, arg);
        descriptor.resolve()?;
        Ok(descriptor)
    }

    /// Validate the name and argument
    pub fn resolve(&self) -> Result<SeedAlgorithm> {
        match self.name.as_str() {
            "constant" => Ok(SeedAlgorithm::Constant(Self::constant_arg(&self.arg)?)),
            "random" => {
                let percent = self.arg.as_f64().ok_or_else(|| LifeError::InvalidArgument {
                    algorithm: "random",
                    reason: format!("expected a percent chance, got {}", self.arg),
                })?;
                SeedAlgorithm::random(percent)
            }
            "selection" => Ok(SeedAlgorithm::Selection(Self::selection_arg(&self.arg)?)),
            other => Err(LifeError::UnknownAlgorithm(other.to_string())),
        }
    }

    fn constant_arg(arg: &Value) -> Result<bool> {
        match arg {
            Value::Null => Ok(false),
            Value::Bool(value) => Ok(*value),
            Value::Number(number) => Ok(number.as_f64().is_some_and(|n| n != 0.0)),
            other => Err(LifeError::InvalidArgument {
                algorithm: "constant",
                reason: format!("expected a number or boolean, got {}", other),
            }),
        }
    }

    fn selection_arg(arg: &Value) -> Result<Vec<Coord>> {
        let parsed = match arg {
            Value::Null => return Ok(Vec::new()),
            Value::String(text) => serde_json::from_str(text),
            other => serde_json::from_value(other.clone()),
        };
        parsed.map_err(|e| LifeError::InvalidArgument {
            algorithm: "selection",
            reason: format!("expected a list of [x, y] pairs: {}", e),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_resolve_constant() {
        assert_eq!(SeedDescriptor::constant(0).resolve().unwrap(), SeedAlgorithm::Constant(false));
        assert_eq!(SeedDescriptor::constant(1).resolve().unwrap(), SeedAlgorithm::Constant(true));
        assert_eq!(
            SeedDescriptor::new("constant", json!(true)).resolve().unwrap(),
            SeedAlgorithm::Constant(true)
        );
        assert!(SeedDescriptor::new("constant", json!("x")).resolve().is_err());
    }

    #[test]
    fn test_resolve_random() {
        assert_eq!(SeedDescriptor::random(20.0).resolve().unwrap(), SeedAlgorithm::Random(20.0));
        assert_eq!(
            SeedDescriptor::new("random", json!(5)).resolve().unwrap(),
            SeedAlgorithm::Random(5.0)
        );
        assert!(SeedDescriptor::new("random", Value::Null).resolve().is_err());
        assert!(SeedDescriptor::random(120.0).resolve().is_err());
    }

    #[test]
    fn test_resolve_selection_forms() {
        let expected = SeedAlgorithm::Selection(vec![[1, 0], [1, 1], [1, 2]]);
        let from_list = SeedDescriptor::new("selection", json!([[1, 0], [1, 1], [1, 2]]));
        let from_text = SeedDescriptor::new("selection", json!("[[1,0],[1,1],[1,2]]"));
        assert_eq!(from_list.resolve().unwrap(), expected);
        assert_eq!(from_text.resolve().unwrap(), expected);
        assert_eq!(SeedDescriptor::selection(&[[1, 0], [1, 1], [1, 2]]), from_list);

        let broken = SeedDescriptor::new("selection", json!("[[1,0],"));
        assert!(matches!(broken.resolve(), Err(LifeError::InvalidArgument { algorithm: "selection", .. })));
    }

    #[test]
    fn test_unknown_algorithm() {
        let descriptor = SeedDescriptor::new("bogus", Value::Null);
        assert!(matches!(descriptor.resolve(), Err(LifeError::UnknownAlgorithm(_))));
    }

    #[test]
    fn test_parse_cli_text() {
        let random = SeedDescriptor::parse("random", Some("20")).unwrap();
        assert_eq!(random.arg, json!(20));

        let selection = SeedDescriptor::parse("selection", Some("[[0,0]]")).unwrap();
        assert_eq!(selection.resolve().unwrap(), SeedAlgorithm::Selection(vec![[0, 0]]));

        assert!(SeedDescriptor::parse("constant", None).is_ok());
        assert!(SeedDescriptor::parse("random", Some("lots")).is_err());
    }

    #[test]
    fn test_wire_format() {
        let descriptor: SeedDescriptor = serde_json::from_str(r#"{"name":"random","arg":50}"#).unwrap();
        assert_eq!(descriptor, SeedDescriptor::new("random", json!(50)));

        let bare: SeedDescriptor = serde_json::from_str(r#"{"name":"constant"}"#).unwrap();
        assert_eq!(bare.arg, Value::Null);
    }
}
