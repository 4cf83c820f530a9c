// Author: Dustin Pilgrim
// License: MIT

use crate::ast::{Node, Scalar, Value};
use crate::CfgError;

impl TryFrom<&Value> for String {
    type Error = CfgError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::Scalar(Scalar::String(s)) => Ok(s.clone()),
            _ => Err(CfgError::type_error("", "string", value.kind())),
        }
    }
}

impl TryFrom<&Value> for i64 {
    type Error = CfgError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::Scalar(Scalar::Integer(n)) => Ok(*n),
            _ => Err(CfgError::type_error("", "integer", value.kind())),
        }
    }
}

impl TryFrom<&Value> for i32 {
    type Error = CfgError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        let n = i64::try_from(value)?;
        i32::try_from(n).map_err(|_| CfgError::TypeError {
            message: format!("Number {} out of range for i32", n),
            key: String::new(),
            hint: None,
            code: Some(403),
        })
    }
}

impl TryFrom<&Value> for u32 {
    type Error = CfgError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        let n = i64::try_from(value)?;
        u32::try_from(n).map_err(|_| CfgError::TypeError {
            message: format!("Number {} out of range for u32", n),
            key: String::new(),
            hint: Some("Use a non-negative integer".into()),
            code: Some(403),
        })
    }
}

/// Integers widen to floats; the document writes `5` for a whole number
/// as often as `5.0`.
impl TryFrom<&Value> for f64 {
    type Error = CfgError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::Scalar(Scalar::Float(f)) => Ok(*f),
            Value::Scalar(Scalar::Integer(n)) => Ok(*n as f64),
            _ => Err(CfgError::type_error("", "number", value.kind())),
        }
    }
}

impl TryFrom<&Value> for bool {
    type Error = CfgError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::Scalar(Scalar::Boolean(b)) => Ok(*b),
            Value::Scalar(Scalar::String(s))
                if s.eq_ignore_ascii_case("true") || s.eq_ignore_ascii_case("false") =>
            {
                Err(CfgError::TypeError {
                    message: format!("Quoted boolean '{}'", s),
                    key: String::new(),
                    hint: Some("Write true or false without quotes".into()),
                    code: Some(404),
                })
            }
            _ => Err(CfgError::type_error("", "boolean", value.kind())),
        }
    }
}

impl TryFrom<&Value> for Vec<String> {
    type Error = CfgError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::List(items) => Ok(items.clone()),
            _ => Err(CfgError::type_error("", "list", value.kind())),
        }
    }
}

impl TryFrom<&Value> for Node {
    type Error = CfgError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::Node(node) => Ok(node.clone()),
            _ => Err(CfgError::type_error("", "section", value.kind())),
        }
    }
}
