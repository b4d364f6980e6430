//! Core traits and value types for algorithm plugins.

use std::fmt;

use arbor_common::types::{INFINITY, VertexId, Weight};
use arbor_common::utils::error::{Error, Result};
use arbor_core::graph::EdgeList;
use hashbrown::HashMap;
use serde::{Deserialize, Serialize, Serializer};

use super::algorithms::MstResult;

/// A graph algorithm that can be looked up by name and run on an
/// [`EdgeList`].
///
/// Implementations derive whatever representation they need from the edge
/// list and validate their parameters before calling into the algorithm.
pub trait Algorithm: Send + Sync {
    /// Registry name, e.g. `"dijkstra"`.
    fn name(&self) -> &str;

    /// One-line description for listings.
    fn description(&self) -> &str;

    /// Parameters accepted by [`execute`](Self::execute).
    fn parameters(&self) -> &[ParameterDef];

    /// Runs the algorithm.
    ///
    /// # Errors
    ///
    /// Returns a parameter error if `params` does not match
    /// [`parameters`](Self::parameters), or the algorithm's own failure.
    fn execute(&self, graph: &EdgeList, params: &Parameters) -> Result<AlgorithmResult>;
}

/// Type of a parameter value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterType {
    /// Signed integer.
    Int,
    /// Boolean flag.
    Bool,
    /// Free-form string.
    String,
}

impl fmt::Display for ParameterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int => write!(f, "int"),
            Self::Bool => write!(f, "bool"),
            Self::String => write!(f, "string"),
        }
    }
}

/// A parameter value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParameterValue {
    /// Integer value.
    Int(i64),
    /// Boolean value.
    Bool(bool),
    /// String value.
    String(String),
}

impl ParameterValue {
    /// Returns the type of this value.
    #[must_use]
    pub const fn param_type(&self) -> ParameterType {
        match self {
            Self::Int(_) => ParameterType::Int,
            Self::Bool(_) => ParameterType::Bool,
            Self::String(_) => ParameterType::String,
        }
    }

    /// Returns the integer, if this is one.
    #[must_use]
    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the boolean, if this is one.
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the string, if this is one.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(v) => Some(v),
            _ => None,
        }
    }
}

impl fmt::Display for ParameterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{v}"),
            Self::Bool(v) => write!(f, "{v}"),
            Self::String(v) => write!(f, "{v}"),
        }
    }
}

impl From<i64> for ParameterValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<bool> for ParameterValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for ParameterValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

impl From<String> for ParameterValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

/// Declaration of one algorithm parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParameterDef {
    /// Parameter name.
    pub name: String,
    /// What the parameter controls.
    pub description: String,
    /// Expected value type.
    pub param_type: ParameterType,
    /// Whether the caller must supply a value.
    pub required: bool,
    /// Value used when the caller supplies none.
    pub default: Option<ParameterValue>,
}

impl ParameterDef {
    /// A parameter the caller must supply.
    pub fn required(
        name: impl Into<String>,
        description: impl Into<String>,
        param_type: ParameterType,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            param_type,
            required: true,
            default: None,
        }
    }

    /// An optional parameter with a default value.
    pub fn with_default(
        name: impl Into<String>,
        description: impl Into<String>,
        default: impl Into<ParameterValue>,
    ) -> Self {
        let default = default.into();
        Self {
            name: name.into(),
            description: description.into(),
            param_type: default.param_type(),
            required: false,
            default: Some(default),
        }
    }

    /// An optional parameter with no default; absence is meaningful.
    pub fn optional(
        name: impl Into<String>,
        description: impl Into<String>,
        param_type: ParameterType,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            param_type,
            required: false,
            default: None,
        }
    }
}

/// Named parameter values passed to [`Algorithm::execute`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Parameters {
    values: HashMap<String, ParameterValue>,
}

impl Parameters {
    /// Creates an empty parameter set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style [`set`](Self::set).
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<ParameterValue>) -> Self {
        self.set(name, value);
        self
    }

    /// Sets a parameter, replacing any previous value.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<ParameterValue>) {
        self.values.insert(name.into(), value.into());
    }

    /// Returns the raw value of a parameter.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ParameterValue> {
        self.values.get(name)
    }

    /// Returns true if the parameter has a value.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Returns the number of set parameters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if no parameters are set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Checks these values against `defs` and fills in defaults.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidParameter`] for an undeclared name or a value of the
    ///   wrong type.
    /// - [`Error::MissingParameter`] for a required parameter with no value.
    pub fn resolve(&self, defs: &[ParameterDef]) -> Result<Self> {
        let known = |name: &&String| defs.iter().any(|d| &d.name == *name);
        if let Some(unknown) = self.values.keys().find(|name| !known(name)) {
            return Err(Error::invalid_parameter(unknown.as_str(), "unknown parameter"));
        }

        let mut resolved = Self::new();
        for def in defs {
            match self.values.get(&def.name) {
                Some(value) if value.param_type() != def.param_type => {
                    return Err(Error::invalid_parameter(
                        def.name.as_str(),
                        format!("expected {}, got {}", def.param_type, value.param_type()),
                    ));
                }
                Some(value) => resolved.set(def.name.as_str(), value.clone()),
                None => match &def.default {
                    Some(default) => resolved.set(def.name.as_str(), default.clone()),
                    None if def.required => return Err(Error::MissingParameter(def.name.clone())),
                    None => {}
                },
            }
        }
        Ok(resolved)
    }

    /// Returns an integer parameter.
    ///
    /// # Errors
    ///
    /// Returns an error if the parameter is absent or not an integer.
    pub fn int(&self, name: &str) -> Result<i64> {
        self.typed(name, ParameterValue::as_int, ParameterType::Int)
    }

    /// Returns a boolean parameter.
    ///
    /// # Errors
    ///
    /// Returns an error if the parameter is absent or not a boolean.
    pub fn bool(&self, name: &str) -> Result<bool> {
        self.typed(name, ParameterValue::as_bool, ParameterType::Bool)
    }

    /// Returns a string parameter.
    ///
    /// # Errors
    ///
    /// Returns an error if the parameter is absent or not a string.
    pub fn string(&self, name: &str) -> Result<&str> {
        self.typed(name, ParameterValue::as_str, ParameterType::String)
    }

    /// Returns an integer parameter as a vertex index below `vertex_count`,
    /// or `None` if the parameter is absent.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if the value is not an integer or
    /// not a vertex of the graph.
    pub fn vertex(&self, name: &str, vertex_count: usize) -> Result<Option<VertexId>> {
        if !self.contains(name) {
            return Ok(None);
        }
        let value = self.int(name)?;
        match usize::try_from(value) {
            Ok(vertex) if vertex < vertex_count => Ok(Some(vertex)),
            _ => Err(Error::invalid_parameter(
                name,
                format!("vertex {value} out of range for {vertex_count} vertices"),
            )),
        }
    }

    fn typed<'a, T>(
        &'a self,
        name: &str,
        extract: impl FnOnce(&'a ParameterValue) -> Option<T>,
        expected: ParameterType,
    ) -> Result<T> {
        let value = self
            .get(name)
            .ok_or_else(|| Error::MissingParameter(name.to_owned()))?;
        extract(value).ok_or_else(|| {
            let reason = format!("expected {expected}, got {}", value.param_type());
            Error::invalid_parameter(name, reason)
        })
    }
}

/// Output of an [`Algorithm`].
///
/// Serialized with a `kind` tag. Distances equal to [`INFINITY`] serialize
/// as `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AlgorithmResult {
    /// Single-source distances.
    Distances {
        /// Source vertex.
        source: VertexId,
        /// Distance per vertex; [`INFINITY`] if unreachable.
        #[serde(serialize_with = "serialize_distances")]
        distances: Vec<Weight>,
    },
    /// All-pairs distances.
    DistanceMatrix {
        /// `matrix[i][j]` is the distance from `i` to `j`.
        #[serde(serialize_with = "serialize_distance_rows")]
        matrix: Vec<Vec<Weight>>,
        /// Whether some vertex lies on a negative cycle.
        negative_cycle: bool,
    },
    /// A vertex sequence (traversal or topological order).
    Order {
        /// Vertices in order.
        order: Vec<VertexId>,
    },
    /// A spanning tree or forest.
    SpanningTree(MstResult),
    /// Component label per vertex.
    Components {
        /// Dense label per vertex.
        labels: Vec<usize>,
        /// Number of components.
        count: usize,
    },
    /// A yes/no answer.
    Flag {
        /// The answer.
        value: bool,
    },
}

impl AlgorithmResult {
    /// Returns the variant name used as the serialized `kind` tag.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Distances { .. } => "distances",
            Self::DistanceMatrix { .. } => "distance_matrix",
            Self::Order { .. } => "order",
            Self::SpanningTree(_) => "spanning_tree",
            Self::Components { .. } => "components",
            Self::Flag { .. } => "flag",
        }
    }
}

fn finite(weight: Weight) -> Option<Weight> {
    (weight != INFINITY).then_some(weight)
}

fn serialize_distances<S: Serializer>(
    distances: &[Weight],
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.collect_seq(distances.iter().copied().map(finite))
}

fn serialize_distance_rows<S: Serializer>(
    matrix: &[Vec<Weight>],
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.collect_seq(
        matrix
            .iter()
            .map(|row| row.iter().copied().map(finite).collect::<Vec<_>>()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn defs() -> Vec<ParameterDef> {
        vec![
            ParameterDef::with_default("start", "Start vertex", 0_i64),
            ParameterDef::with_default("directed", "Treat edges as directed", false),
            ParameterDef::required("strategy", "Ordering strategy", ParameterType::String),
            ParameterDef::optional("target", "Target vertex", ParameterType::Int),
        ]
    }

    #[test]
    fn test_resolve_fills_defaults() {
        let params = Parameters::new().with("strategy", "kahn");
        let resolved = params.resolve(&defs()).unwrap();

        assert_eq!(resolved.int("start").unwrap(), 0);
        assert!(!resolved.bool("directed").unwrap());
        assert_eq!(resolved.string("strategy").unwrap(), "kahn");
        assert!(!resolved.contains("target"));
    }

    #[test]
    fn test_resolve_rejects_bad_input() {
        assert_eq!(
            Parameters::new().resolve(&defs()),
            Err(Error::MissingParameter("strategy".to_owned()))
        );

        let wrong_type = Parameters::new().with("strategy", "dfs").with("start", true);
        assert!(matches!(
            wrong_type.resolve(&defs()),
            Err(Error::InvalidParameter { name, .. }) if name == "start"
        ));

        let unknown = Parameters::new().with("strategy", "dfs").with("colour", "red");
        assert!(matches!(
            unknown.resolve(&defs()),
            Err(Error::InvalidParameter { name, .. }) if name == "colour"
        ));
    }

    #[test]
    fn test_vertex_range_check() {
        let params = Parameters::new().with("start", 3_i64).with("bad", -1_i64);

        assert_eq!(params.vertex("start", 4), Ok(Some(3)));
        assert_eq!(params.vertex("missing", 4), Ok(None));
        assert!(params.vertex("start", 3).is_err());
        assert!(params.vertex("bad", 4).is_err());
    }

    #[test]
    fn test_typed_getter_errors() {
        let params = Parameters::new().with("flag", true);

        assert_eq!(params.int("nope"), Err(Error::MissingParameter("nope".to_owned())));
        assert!(params.int("flag").is_err());
        assert_eq!(params.bool("flag"), Ok(true));
    }

    #[test]
    fn test_result_json() {
        let result = AlgorithmResult::Distances {
            source: 0,
            distances: vec![0, 4, INFINITY],
        };
        assert_eq!(
            serde_json::to_string(&result).unwrap(),
            r#"{"kind":"distances","source":0,"distances":[0,4,null]}"#
        );

        let flag = AlgorithmResult::Flag { value: true };
        assert_eq!(serde_json::to_string(&flag).unwrap(), r#"{"kind":"flag","value":true}"#);
        assert_eq!(flag.kind(), "flag");
    }
}
