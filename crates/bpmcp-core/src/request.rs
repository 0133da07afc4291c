//! Argument binding and outbound request construction.

use indexmap::IndexMap;
use serde_json::{Map, Value};

use crate::error::Error;
use crate::types::{ArgKind, ArgSpec, ArgValue, Encoding, Inclusion, Operation, OutboundRequest, Payload};

/// Arguments keyed by local name, in declaration order.
pub type BoundArgs = IndexMap<&'static str, ArgValue>;

/// Bind inbound JSON arguments to the operation's declared parameters.
///
/// Only the JSON type of each value is checked. Unknown keys are ignored and
/// `null` counts as absent. Optional flags default to `false`.
///
/// # Errors
///
/// Returns [`Error::MissingArgument`] for an absent required parameter and
/// [`Error::InvalidArgument`] for a value of the wrong JSON type.
pub fn bind_arguments(op: &Operation, args: &Map<String, Value>) -> Result<BoundArgs, Error> {
    let mut bound = BoundArgs::with_capacity(op.args.len());

    for spec in op.args {
        match args.get(spec.name).filter(|v| !v.is_null()) {
            Some(value) => {
                bound.insert(spec.name, bind_value(spec, value)?);
            }
            None if spec.required => return Err(Error::MissingArgument(spec.name.to_string())),
            None => {
                if spec.kind == ArgKind::Flag {
                    bound.insert(spec.name, ArgValue::Flag(false));
                }
            }
        }
    }

    Ok(bound)
}

fn bind_value(spec: &ArgSpec, value: &Value) -> Result<ArgValue, Error> {
    let invalid = || Error::InvalidArgument {
        name: spec.name.to_string(),
        expected: match spec.kind {
            ArgKind::Text => "a string",
            ArgKind::Flag => "a boolean",
            ArgKind::TextMap => "an object of string values",
        },
    };

    match spec.kind {
        ArgKind::Text => value
            .as_str()
            .map(|s| ArgValue::Text(s.to_string()))
            .ok_or_else(invalid),
        ArgKind::Flag => value.as_bool().map(ArgValue::Flag).ok_or_else(invalid),
        ArgKind::TextMap => {
            let object = value.as_object().ok_or_else(invalid)?;
            let mut map = IndexMap::with_capacity(object.len());
            for (key, v) in object {
                let v = v.as_str().ok_or_else(invalid)?;
                map.insert(key.clone(), v.to_string());
            }
            Ok(ArgValue::TextMap(map))
        }
    }
}

/// Whether a bound argument goes on the wire under the optional-field policy.
fn is_included(spec: &ArgSpec, value: &ArgValue, bound: &BoundArgs) -> bool {
    match spec.inclusion {
        Inclusion::Always => true,
        Inclusion::WhenNonEmpty | Inclusion::WhenTrue => value.is_truthy(),
        Inclusion::WhenFlagSet(flag) => {
            value.is_truthy() && bound.get(flag).is_some_and(ArgValue::is_truthy)
        }
    }
}

/// Map bound arguments onto remote field names and the operation's encoding.
#[must_use]
pub fn build_payload(op: &Operation, bound: &BoundArgs) -> Payload {
    let fields = op.args.iter().filter_map(|spec| {
        bound
            .get(spec.name)
            .filter(|value| is_included(spec, value, bound))
            .map(|value| (spec.remote, value))
    });

    match op.encoding {
        Encoding::JsonBody => Payload::Json(
            fields
                .map(|(remote, value)| (remote.to_string(), value.to_json()))
                .collect(),
        ),
        Encoding::Query => Payload::Query(
            fields
                .map(|(remote, value)| (remote.to_string(), value.to_query_value()))
                .collect(),
        ),
        Encoding::None => Payload::Empty,
    }
}

/// Bind arguments and construct the outbound request for one operation.
///
/// # Errors
///
/// Propagates binding errors from [`bind_arguments`].
pub fn build_request(
    op: &'static Operation,
    args: &Map<String, Value>,
) -> Result<OutboundRequest, Error> {
    let bound = bind_arguments(op, args)?;
    Ok(OutboundRequest {
        method: op.method,
        path: op.path,
        payload: build_payload(op, &bound),
    })
}
