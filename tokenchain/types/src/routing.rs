use serde::{Deserialize, Serialize};

/// 10000 basis points make up 100%.
pub const BPS_DENOMINATOR: i64 = 10_000;

/// How a token's Bucket C incentive is split between stakers and treasury,
/// as reported by `/v1/loyalty/merchant-routing`.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct RoutingRecord {
    #[serde(deserialize_with = "crate::null_as_default")]
    pub denom: String,
    #[serde(deserialize_with = "crate::null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "crate::null_as_default")]
    pub symbol: String,
    #[serde(deserialize_with = "crate::null_as_default")]
    pub verified: bool,
    #[serde(deserialize_with = "crate::string_or_number")]
    pub max_supply: String,
    #[serde(deserialize_with = "crate::string_or_number")]
    pub minted_supply: String,
    #[serde(deserialize_with = "crate::int_or_string")]
    pub merchant_incentive_stakers_bps: i64,
    #[serde(deserialize_with = "crate::int_or_string")]
    pub merchant_incentive_treasury_bps: i64,
    #[serde(deserialize_with = "crate::null_as_default")]
    pub merchant_incentive_stakers_pct: String,
    #[serde(deserialize_with = "crate::null_as_default")]
    pub merchant_incentive_treasury_pct: String,
}

/// Body forwarded to `POST /v1/admin/loyalty/merchant-routing`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RoutingUpdate {
    pub denom: String,
    pub merchant_incentive_stakers_bps: i64,
    pub merchant_incentive_treasury_bps: i64,
}

impl RoutingUpdate {
    pub fn is_split_balanced(&self) -> bool {
        split_is_balanced(
            self.merchant_incentive_stakers_bps,
            self.merchant_incentive_treasury_bps,
        )
    }
}

fn split_is_balanced(stakers: i64, treasury: i64) -> bool {
    stakers >= 0 && treasury >= 0 && stakers.checked_add(treasury) == Some(BPS_DENOMINATOR)
}

#[cfg(test)]
mod tests {
    use {super::*, test_case::test_case};

    #[test_case(5000, 5000 => true; "even split")]
    #[test_case(10_000, 0 => true; "all to stakers")]
    #[test_case(4999, 5000 => false; "one short")]
    #[test_case(-1, 10_001 => false; "negative stakers")]
    #[test_case(i64::MAX, 1 => false; "overflow")]
    fn balanced_split(stakers: i64, treasury: i64) -> bool {
        RoutingUpdate {
            denom: "ufoo".to_string(),
            merchant_incentive_stakers_bps: stakers,
            merchant_incentive_treasury_bps: treasury,
        }
        .is_split_balanced()
    }

    #[test]
    fn tolerates_null_fields() {
        let record: RoutingRecord = serde_json::from_str(
            r#"{
                "denom": "ucafe",
                "name": null,
                "symbol": null,
                "verified": null,
                "max_supply": null,
                "merchant_incentive_stakers_bps": "7000",
                "merchant_incentive_treasury_bps": 3000
            }"#,
        )
        .unwrap();

        assert_eq!(record.name, "");
        assert!(!record.verified);
        assert_eq!(record.merchant_incentive_stakers_bps, 7000);
    }

    #[test]
    fn parses_upstream_record() {
        let record: RoutingRecord = serde_json::from_str(
            r#"{
                "denom": "factory/tokenchain1abc/ucafe",
                "name": "Cafe Points",
                "symbol": "",
                "verified": true,
                "max_supply": 1000000000,
                "minted_supply": "2500000",
                "merchant_incentive_stakers_bps": 6000,
                "merchant_incentive_treasury_bps": 4000,
                "merchant_incentive_stakers_pct": "60.00%",
                "merchant_incentive_treasury_pct": "40.00%"
            }"#,
        )
        .unwrap();

        assert_eq!(record.max_supply, "1000000000");
        assert_eq!(record.symbol, "");
        assert_eq!(record.merchant_incentive_treasury_bps, 4000);
    }
}
