use serde_json::{Map, Value};

use crate::{model::rank::SetRankDto, server::error::request::RequestError};

/// Parses and type-checks a rank change request body.
///
/// Types are checked strictly against the JSON value rather than through serde, so that a
/// numeric string such as `"7"` or a fractional number such as `7.5` is rejected instead of
/// being coerced. `null` optional fields are treated as absent.
///
/// # Arguments
/// - `body` - Raw request body
///
/// # Returns
/// - `Ok(SetRankDto)` - Body is an object with correctly typed fields
/// - `Err(RequestError::MissingBody)` - Body is empty or `null`
/// - `Err(RequestError::MalformedBody)` - Body is not JSON or not an object
/// - `Err(RequestError::InvalidInput)` - A field is missing or has the wrong type
pub fn parse_set_rank(body: &[u8]) -> Result<SetRankDto, RequestError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(RequestError::MissingBody);
    }

    let value: Value =
        serde_json::from_slice(body).map_err(|e| RequestError::MalformedBody(e.to_string()))?;

    let fields = match value {
        Value::Object(fields) => fields,
        Value::Null => return Err(RequestError::MissingBody),
        other => {
            return Err(RequestError::MalformedBody(format!(
                "expected a JSON object, got {}",
                json_type(Some(&other))
            )))
        }
    };

    let invalid = || RequestError::InvalidInput(type_summary(&fields));

    let target_user_id = optional_integer(&fields, "targetUserID").map_err(|_| invalid())?;
    let user_id = optional_integer(&fields, "userId").map_err(|_| invalid())?;
    let desired_rank_id = optional_integer(&fields, "desiredRankId").map_err(|_| invalid())?;
    let initiator_user_id = optional_integer(&fields, "initiatorUserID").map_err(|_| invalid())?;
    let initiator_username =
        optional_string(&fields, "initiatorUsername").map_err(|_| invalid())?;

    let (Some(target_user_id), Some(desired_rank_id)) =
        (target_user_id.or(user_id), desired_rank_id)
    else {
        return Err(invalid());
    };

    Ok(SetRankDto {
        target_user_id,
        desired_rank_id,
        initiator_user_id,
        initiator_username,
    })
}

fn optional_integer(fields: &Map<String, Value>, key: &str) -> Result<Option<i64>, ()> {
    match fields.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => value.as_i64().map(Some).ok_or(()),
    }
}

fn optional_string(fields: &Map<String, Value>, key: &str) -> Result<Option<String>, ()> {
    match fields.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(value)) => Ok(Some(value.clone())),
        Some(_) => Err(()),
    }
}

fn json_type(value: Option<&Value>) -> &'static str {
    match value {
        None => "undefined",
        Some(Value::Null) => "null",
        Some(Value::Bool(_)) => "boolean",
        Some(Value::Number(n)) if n.is_i64() => "integer",
        Some(Value::Number(_)) => "number",
        Some(Value::String(_)) => "string",
        Some(Value::Array(_)) => "array",
        Some(Value::Object(_)) => "object",
    }
}

fn type_summary(fields: &Map<String, Value>) -> String {
    [
        "targetUserID",
        "userId",
        "desiredRankId",
        "initiatorUserID",
        "initiatorUsername",
    ]
    .iter()
    .map(|key| format!("{}: {}", key, json_type(fields.get(*key))))
    .collect::<Vec<_>>()
    .join(", ")
}
