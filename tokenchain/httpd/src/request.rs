//! Validation and normalization of admin request bodies.
//!
//! Each function checks the fields in a fixed order and stops at the first
//! violation, so the caller always gets the error code of the earliest bad
//! field.

use tokenchain_types::{
    ActivityScore, DailyAllocationBatch, ErrorCode, Json, RoutingUpdate, SingleAllocation,
    coerce_flag, coerce_number, coerce_string, truncate,
};

pub type Body = serde_json::Map<String, Json>;

/// A normalized payload together with the bearer token to forward it with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Authorized<T> {
    pub token: String,
    pub payload: T,
}

/// Parse a raw request body. A JSON value that isn't an object reads as an
/// object without fields.
pub fn parse_body(raw: &[u8]) -> Result<Body, ErrorCode> {
    match serde_json::from_slice::<Json>(raw) {
        Ok(Json::Object(body)) => Ok(body),
        Ok(_) => Ok(Body::new()),
        Err(_) => Err(ErrorCode::InvalidJson),
    }
}

pub fn routing_update(body: &Body, strict: bool) -> Result<Authorized<RoutingUpdate>, ErrorCode> {
    let token = required_string(body, "token", ErrorCode::TokenRequired)?;
    let denom = required_string(body, "denom", ErrorCode::DenomRequired)?;

    let stakers = integer(body, "merchant_incentive_stakers_bps", ErrorCode::InvalidBps)?;
    let treasury = integer(body, "merchant_incentive_treasury_bps", ErrorCode::InvalidBps)?;

    let payload = RoutingUpdate {
        denom,
        merchant_incentive_stakers_bps: stakers,
        merchant_incentive_treasury_bps: treasury,
    };

    if strict && !payload.is_split_balanced() {
        return Err(ErrorCode::InvalidBpsSum);
    }

    Ok(Authorized { token, payload })
}

pub fn single_allocation(body: &Body) -> Result<Authorized<SingleAllocation>, ErrorCode> {
    let token = required_string(body, "token", ErrorCode::TokenRequired)?;
    let date = required_string(body, "date", ErrorCode::DateRequired)?;
    let denom = required_string(body, "denom", ErrorCode::DenomRequired)?;
    let activity_score = positive_number(body, "activity_score", ErrorCode::InvalidActivityScore)?;
    let bucket_c_amount =
        positive_number(body, "bucket_c_amount", ErrorCode::InvalidBucketCAmount)?;

    Ok(Authorized {
        token,
        payload: SingleAllocation {
            date,
            denom,
            activity_score,
            bucket_c_amount,
        },
    })
}

pub fn daily_allocation_batch(body: &Body) -> Result<Authorized<DailyAllocationBatch>, ErrorCode> {
    let token = required_string(body, "token", ErrorCode::TokenRequired)?;
    let date = coerce_string(body.get("date"));
    let total = positive_number(
        body,
        "total_bucket_c_amount",
        ErrorCode::InvalidTotalBucketCAmount,
    )?;

    let raw_items = match body.get("items") {
        Some(Json::Array(items)) if !items.is_empty() => items,
        _ => return Err(ErrorCode::ItemsRequired),
    };

    let items = normalize_items(raw_items);
    if items.is_empty() {
        return Err(ErrorCode::InvalidItems);
    }

    Ok(Authorized {
        token,
        payload: DailyAllocationBatch {
            date,
            total_bucket_c_amount: total,
            allow_overwrite: coerce_flag(body.get("allow_overwrite")),
            dry_run: coerce_flag(body.get("dry_run")),
            items,
        },
    })
}

/// Keep the items with a non-empty denom and a finite, positive score that
/// fits in `i64`, with the score truncated. Items that aren't objects are
/// dropped.
pub fn normalize_items(raw: &[Json]) -> Vec<ActivityScore> {
    raw.iter()
        .filter_map(|item| {
            let item = item.as_object()?;
            let denom = coerce_string(item.get("denom"));
            let score = coerce_number(item.get("activity_score"));

            if denom.is_empty() || score.is_nan() || score <= 0.0 {
                return None;
            }

            Some(ActivityScore {
                denom,
                activity_score: truncate(score)?,
            })
        })
        .collect()
}

fn required_string(body: &Body, field: &str, missing: ErrorCode) -> Result<String, ErrorCode> {
    let value = coerce_string(body.get(field));
    if value.is_empty() {
        return Err(missing);
    }

    Ok(value)
}

/// A numeric field with its fractional part dropped. Values outside `i64`
/// are as invalid as text.
fn integer(body: &Body, field: &str, invalid: ErrorCode) -> Result<i64, ErrorCode> {
    truncate(coerce_number(body.get(field))).ok_or(invalid)
}

fn positive_number(body: &Body, field: &str, invalid: ErrorCode) -> Result<i64, ErrorCode> {
    let value = coerce_number(body.get(field));
    if value.is_nan() || value <= 0.0 {
        return Err(invalid);
    }

    truncate(value).ok_or(invalid)
}
