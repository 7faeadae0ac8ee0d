// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Operator nodes, their attributes and their input/output endpoints.

use serde_json::Value;
use tensor_core::TensorProto;

/// The value of a node attribute.
///
/// There is no "absent" kind: an attribute either has one of these values
/// or is reported as invalid when the node is added.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttributeValue {
    Float(f32),
    Int(i64),
    String(String),
    Tensor(TensorProto),
    Floats(Vec<f32>),
    Ints(Vec<i64>),
    Strings(Vec<String>),
}

impl AttributeValue {
    /// Returns the ONNX attribute type name (`"FLOAT"`, `"INTS"`, ...).
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Float(_) => "FLOAT",
            Self::Int(_) => "INT",
            Self::String(_) => "STRING",
            Self::Tensor(_) => "TENSOR",
            Self::Floats(_) => "FLOATS",
            Self::Ints(_) => "INTS",
            Self::Strings(_) => "STRINGS",
        }
    }

    /// Converts a JSON value from a dynamically-typed caller.
    ///
    /// Returns `Ok(None)` for `null` and `Err(reason)` for values no
    /// attribute kind can hold (objects, nested or mixed arrays).
    pub fn from_json(value: &Value) -> Result<Option<Self>, String> {
        let attr = match value {
            Value::Null => return Ok(None),
            Value::Bool(b) => Self::Int(i64::from(*b)),
            Value::Number(n) if n.is_u64() && !n.is_i64() => {
                return Err(format!("has an integer value {n} outside the int64 range"))
            }
            Value::Number(n) => match (n.as_i64(), n.as_f64()) {
                (Some(i), _) => Self::Int(i),
                (None, Some(f)) => Self::Float(f as f32),
                (None, None) => return Err(format!("has an unsupported number {n}")),
            },
            Value::String(s) => Self::String(s.clone()),
            Value::Array(items) => return Self::from_json_array(items).map(Some),
            Value::Object(_) => return Err("has an unsupported object value".into()),
        };
        Ok(Some(attr))
    }

    fn from_json_array(items: &[Value]) -> Result<Self, String> {
        if items.iter().all(Value::is_string) {
            return Ok(Self::Strings(
                items
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect(),
            ));
        }
        if let Some(n) = items.iter().find(|v| v.is_u64() && !v.is_i64()) {
            return Err(format!("has an integer value {n} outside the int64 range"));
        }
        if items.iter().all(Value::is_i64) {
            return Ok(Self::Ints(items.iter().filter_map(Value::as_i64).collect()));
        }
        if items.iter().all(Value::is_number) {
            return Ok(Self::Floats(
                items
                    .iter()
                    .filter_map(Value::as_f64)
                    .map(|f| f as f32)
                    .collect(),
            ));
        }
        Err(format!("has a list value of mixed types [{}]", json_type_list(items)))
    }
}

impl From<f32> for AttributeValue {
    fn from(v: f32) -> Self {
        Self::Float(v)
    }
}

impl From<f64> for AttributeValue {
    fn from(v: f64) -> Self {
        Self::Float(v as f32)
    }
}

impl From<i64> for AttributeValue {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<i32> for AttributeValue {
    fn from(v: i32) -> Self {
        Self::Int(i64::from(v))
    }
}

/// ONNX has no boolean attributes; flags are stored as `0`/`1`.
impl From<bool> for AttributeValue {
    fn from(v: bool) -> Self {
        Self::Int(i64::from(v))
    }
}

impl From<&str> for AttributeValue {
    fn from(v: &str) -> Self {
        Self::String(v.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<TensorProto> for AttributeValue {
    fn from(v: TensorProto) -> Self {
        Self::Tensor(v)
    }
}

impl From<Vec<f32>> for AttributeValue {
    fn from(v: Vec<f32>) -> Self {
        Self::Floats(v)
    }
}

impl From<Vec<i64>> for AttributeValue {
    fn from(v: Vec<i64>) -> Self {
        Self::Ints(v)
    }
}

impl From<Vec<String>> for AttributeValue {
    fn from(v: Vec<String>) -> Self {
        Self::Strings(v)
    }
}

impl From<Vec<&str>> for AttributeValue {
    fn from(v: Vec<&str>) -> Self {
        Self::Strings(v.into_iter().map(str::to_string).collect())
    }
}

/// A named attribute attached to a node.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AttributeProto {
    pub name: String,
    pub value: AttributeValue,
}

#[derive(Debug, Clone, PartialEq)]
enum Slot {
    Set(AttributeValue),
    Missing,
    Unsupported(String),
}

/// Insertion-ordered attributes for a node about to be added, plus the
/// node's optional name and doc string.
///
/// Values that could not be resolved (`set_opt` with `None`, JSON `null`)
/// are remembered and rejected by
/// [`ModelComponentContainer::add_node`](crate::ModelComponentContainer::add_node).
///
/// # Examples
/// ```
/// use model_ir::Attributes;
///
/// let attrs = Attributes::named("gemm_0")
///     .set("alpha", 1.0)
///     .set("transB", 1)
///     .set_opt("axis", None::<i64>);
/// assert_eq!(attrs.len(), 3);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Attributes {
    node_name: Option<String>,
    doc_string: Option<String>,
    entries: Vec<(String, Slot)>,
}

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts an attribute set for a node with the given name.
    pub fn named(node_name: impl Into<String>) -> Self {
        Self {
            node_name: Some(node_name.into()),
            ..Self::default()
        }
    }

    /// Sets the node's doc string.
    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc_string = Some(doc.into());
        self
    }

    /// Sets an attribute, replacing an earlier value under the same key in place.
    pub fn set(self, key: impl Into<String>, value: impl Into<AttributeValue>) -> Self {
        self.put(key.into(), Slot::Set(value.into()))
    }

    /// Sets an attribute whose value may be absent.
    pub fn set_opt<V: Into<AttributeValue>>(self, key: impl Into<String>, value: Option<V>) -> Self {
        let slot = value.map_or(Slot::Missing, |v| Slot::Set(v.into()));
        self.put(key.into(), slot)
    }

    /// Sets an attribute from a JSON value (see [`AttributeValue::from_json`]).
    pub fn set_json(self, key: impl Into<String>, value: &Value) -> Self {
        let slot = match AttributeValue::from_json(value) {
            Ok(Some(v)) => Slot::Set(v),
            Ok(None) => Slot::Missing,
            Err(reason) => Slot::Unsupported(reason),
        };
        self.put(key.into(), slot)
    }

    /// Returns the resolved value of an attribute.
    pub fn get(&self, key: &str) -> Option<&AttributeValue> {
        self.entries.iter().find_map(|(k, slot)| match slot {
            Slot::Set(v) if k == key => Some(v),
            _ => None,
        })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn put(mut self, key: String, slot: Slot) -> Self {
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = slot,
            None => self.entries.push((key, slot)),
        }
        self
    }

    /// Splits into node name, doc string and attributes, or returns the first
    /// unresolved key with the reason it is invalid.
    pub(crate) fn resolve(self) -> Result<ResolvedAttributes, (String, String)> {
        let mut attribute = Vec::with_capacity(self.entries.len());
        for (name, slot) in self.entries {
            match slot {
                Slot::Set(value) => attribute.push(AttributeProto { name, value }),
                Slot::Missing => return Err((name, "is undefined".into())),
                Slot::Unsupported(reason) => return Err((name, reason)),
            }
        }
        Ok(ResolvedAttributes {
            node_name: self.node_name.unwrap_or_default(),
            doc_string: self.doc_string.unwrap_or_default(),
            attribute,
        })
    }
}

pub(crate) struct ResolvedAttributes {
    pub node_name: String,
    pub doc_string: String,
    pub attribute: Vec<AttributeProto>,
}

/// One operator invocation in the graph.
///
/// Inputs and outputs are value names; resolving them is left to whoever
/// consumes the finished graph. The operator-set version is not stored on
/// the node but recorded in the container's domain-version registry.
#[derive(Debug, Clone, PartialEq, Default, serde::Serialize, serde::Deserialize)]
pub struct NodeProto {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    pub op_type: String,
    /// Empty for the default ONNX domain.
    #[serde(default)]
    pub domain: String,
    pub input: Vec<String>,
    pub output: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attribute: Vec<AttributeProto>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub doc_string: String,
}

impl NodeProto {
    /// Gets an attribute by name.
    pub fn get_attribute(&self, name: &str) -> Option<&AttributeValue> {
        self.attribute
            .iter()
            .find(|attr| attr.name == name)
            .map(|attr| &attr.value)
    }
}

/// Conversion of a node's inputs or outputs into a list of value names.
///
/// A single name becomes a one-element list. Statically typed callers can
/// only pass names; JSON values from dynamically typed callers are checked
/// and, when they are not a string or an array of strings, rejected with the
/// JSON types that were found.
pub trait IntoEndpoints {
    fn into_endpoints(self) -> Result<Vec<String>, String>;
}

impl IntoEndpoints for &str {
    fn into_endpoints(self) -> Result<Vec<String>, String> {
        Ok(vec![self.to_string()])
    }
}

impl IntoEndpoints for String {
    fn into_endpoints(self) -> Result<Vec<String>, String> {
        Ok(vec![self])
    }
}

impl IntoEndpoints for &String {
    fn into_endpoints(self) -> Result<Vec<String>, String> {
        Ok(vec![self.clone()])
    }
}

impl IntoEndpoints for Vec<String> {
    fn into_endpoints(self) -> Result<Vec<String>, String> {
        Ok(self)
    }
}

impl IntoEndpoints for Vec<&str> {
    fn into_endpoints(self) -> Result<Vec<String>, String> {
        Ok(self.into_iter().map(str::to_string).collect())
    }
}

impl IntoEndpoints for &[&str] {
    fn into_endpoints(self) -> Result<Vec<String>, String> {
        Ok(self.iter().map(|s| s.to_string()).collect())
    }
}

impl IntoEndpoints for &[String] {
    fn into_endpoints(self) -> Result<Vec<String>, String> {
        Ok(self.to_vec())
    }
}

impl<const N: usize> IntoEndpoints for [&str; N] {
    fn into_endpoints(self) -> Result<Vec<String>, String> {
        Ok(self.iter().map(|s| s.to_string()).collect())
    }
}

impl IntoEndpoints for &Value {
    fn into_endpoints(self) -> Result<Vec<String>, String> {
        match self {
            Value::String(s) => Ok(vec![s.clone()]),
            Value::Array(items) if items.iter().all(Value::is_string) => Ok(items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()),
            Value::Array(items) => Err(json_type_list(items)),
            other => Err(json_type_name(other).to_string()),
        }
    }
}

impl IntoEndpoints for Value {
    fn into_endpoints(self) -> Result<Vec<String>, String> {
        (&self).into_endpoints()
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn json_type_list(items: &[Value]) -> String {
    items
        .iter()
        .map(json_type_name)
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_attribute_conversions() {
        assert_eq!(AttributeValue::from(1.0), AttributeValue::Float(1.0));
        assert_eq!(AttributeValue::from(1), AttributeValue::Int(1));
        assert_eq!(AttributeValue::from(true), AttributeValue::Int(1));
        assert_eq!(AttributeValue::from("linear"), AttributeValue::String("linear".into()));
        assert_eq!(AttributeValue::from(vec![1i64, 2]).kind(), "INTS");
        assert_eq!(AttributeValue::from(vec!["a", "b"]).kind(), "STRINGS");
    }

    #[test]
    fn test_attribute_from_json() {
        assert_eq!(AttributeValue::from_json(&json!(null)), Ok(None));
        assert_eq!(AttributeValue::from_json(&json!(3)), Ok(Some(AttributeValue::Int(3))));
        assert_eq!(AttributeValue::from_json(&json!(0.5)), Ok(Some(AttributeValue::Float(0.5))));
        assert_eq!(
            AttributeValue::from_json(&json!([1, 2, 3])),
            Ok(Some(AttributeValue::Ints(vec![1, 2, 3])))
        );
        assert_eq!(
            AttributeValue::from_json(&json!([1, 2.5])),
            Ok(Some(AttributeValue::Floats(vec![1.0, 2.5])))
        );
        assert_eq!(
            AttributeValue::from_json(&json!(["a"])),
            Ok(Some(AttributeValue::Strings(vec!["a".into()])))
        );
        assert!(AttributeValue::from_json(&json!({"k": 1})).is_err());
        assert_eq!(
            AttributeValue::from_json(&json!(u64::MAX)),
            Err("has an integer value 18446744073709551615 outside the int64 range".to_string())
        );
        assert!(AttributeValue::from_json(&json!([1, u64::MAX])).is_err());
        assert_eq!(
            AttributeValue::from_json(&json!(i64::MAX)),
            Ok(Some(AttributeValue::Int(i64::MAX)))
        );
        let err = AttributeValue::from_json(&json!([1, "a"])).unwrap_err();
        assert!(err.contains("number,string"));
    }

    #[test]
    fn test_attributes_keep_order_and_replace_in_place() {
        let attrs = Attributes::new().set("b", 1).set("a", 2).set("b", 3);
        let resolved = attrs.resolve().ok().unwrap();
        let names: Vec<_> = resolved.attribute.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, ["b", "a"]);
        assert_eq!(resolved.attribute[0].value, AttributeValue::Int(3));
    }

    #[test]
    fn test_attributes_report_missing_value() {
        let attrs = Attributes::new().set("alpha", 1.0).set_opt("beta", None::<f32>);
        assert_eq!(attrs.get("alpha"), Some(&AttributeValue::Float(1.0)));
        assert_eq!(attrs.get("beta"), None);
        let (key, reason) = attrs.resolve().err().unwrap();
        assert_eq!(key, "beta");
        assert_eq!(reason, "is undefined");
    }

    #[test]
    fn test_attributes_name_and_doc() {
        let resolved = Attributes::named("n0").doc("first").resolve().ok().unwrap();
        assert_eq!(resolved.node_name, "n0");
        assert_eq!(resolved.doc_string, "first");
        assert!(resolved.attribute.is_empty());
    }

    #[test]
    fn test_static_endpoints() {
        assert_eq!("t1".into_endpoints(), Ok(vec!["t1".to_string()]));
        assert_eq!(["a", "b"].into_endpoints(), Ok(vec!["a".to_string(), "b".to_string()]));
        assert_eq!(Vec::<String>::new().into_endpoints(), Ok(vec![]));
    }

    #[test]
    fn test_json_endpoints() {
        assert_eq!(json!("x").into_endpoints(), Ok(vec!["x".to_string()]));
        assert_eq!(
            json!(["x", "y"]).into_endpoints(),
            Ok(vec!["x".to_string(), "y".to_string()])
        );
        assert_eq!(json!(["x", 1, null]).into_endpoints(), Err("string,number,null".to_string()));
        assert_eq!(json!(42).into_endpoints(), Err("number".to_string()));
        assert_eq!(json!({"a": "b"}).into_endpoints(), Err("object".to_string()));
    }

    #[test]
    fn test_get_attribute() {
        let node = NodeProto {
            op_type: "Gemm".into(),
            attribute: vec![AttributeProto {
                name: "transB".into(),
                value: AttributeValue::Int(1),
            }],
            ..Default::default()
        };
        assert_eq!(node.get_attribute("transB"), Some(&AttributeValue::Int(1)));
        assert_eq!(node.get_attribute("alpha"), None);
    }
}
