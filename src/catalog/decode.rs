use serde_json::Value;

use crate::catalog::Movie;
use crate::common::Error;
use crate::Result;

/// Decode the list endpoint's response.
///
/// The endpoint returns either `{ "movies": [...] }` or a bare array
/// depending on the service version. Exactly those two shapes are accepted;
/// anything else is a decode error for the calling screen.
pub fn decode_movies(value: Value) -> Result<Vec<Movie>> {
    match value {
        Value::Object(mut object) => match object.remove("movies") {
            Some(movies @ Value::Array(_)) => from_array(movies),
            Some(_) => Err(Error::decode("movies field is not an array").into()),
            None => Err(Error::decode("object response without movies field").into()),
        },
        movies @ Value::Array(_) => from_array(movies),
        other => Err(Error::decode(format!(
            "expected object or array, got {}",
            type_name(&other)
        ))
        .into()),
    }
}

fn from_array(movies: Value) -> Result<Vec<Movie>> {
    serde_json::from_value(movies).map_err(|err| Error::decode(err.to_string()).into())
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
