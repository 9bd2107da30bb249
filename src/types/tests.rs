use super::Monetary;
use anyhow::Result;
use rust_decimal::Decimal;
use serde_json::json;
use std::str::FromStr;

#[test]
fn test_monetary_successfully_parses_valid_strings() -> Result<()> {
    let test_cases = vec![
        ("1.0", "1.00"),
        ("1.12", "1.12"),
        ("0.01", "0.01"),
        ("-1.5", "-1.50"),
        ("  1.0  ", "1.00"),
        ("100", "100.00"),
        ("2.345", "2.35"),
        ("-2.345", "-2.35"),
    ];

    for (input_string, expected_output) in test_cases {
        assert_eq!(Monetary::from_str(input_string)?.to_string(), expected_output);
    }

    Ok(())
}

#[test]
fn test_monetary_fails_to_parse_invalid_strings() {
    assert!(Monetary::from_str("abc").is_err());
    assert!(Monetary::from_str("1.2.3").is_err());
    assert!(Monetary::from_str("").is_err());
}

#[test]
fn test_monetary_rounds_half_away_from_zero() -> Result<()> {
    assert_eq!(Monetary::from_str("10.005")?.rounded(), Monetary::from_str("10.01")?);
    assert_eq!(Monetary::from_str("10.004")?.rounded(), Monetary::from_str("10.00")?);
    assert_eq!(Monetary::from_str("-0.005")?.rounded(), Monetary::from_str("-0.01")?);

    Ok(())
}

#[test]
fn test_monetary_share_is_rounded_to_cents() -> Result<()> {
    let residual = Monetary::from_str("60.00")?;

    assert_eq!(residual.share(Decimal::from_str("0.3333333")?)?, Monetary::from_str("20.00")?);
    assert_eq!(residual.share(Decimal::ONE)?, residual);
    assert_eq!(residual.share(Decimal::ZERO)?, Monetary::new());

    Ok(())
}

#[test]
fn test_monetary_supports_checked_addition_and_subtraction() -> Result<()> {
    let value = Monetary::from_str("1.5")?;
    let total = value.checked_add(Monetary::from_str("2.5")?);

    assert_eq!(total.map(|m| m.to_string()), Some("4.00".to_string()));

    let difference = value.checked_sub(Monetary::from_str("5.0")?);

    assert_eq!(difference.map(|m| m.to_string()), Some("-3.50".to_string()));
    assert!(Monetary::from_str("79228162514264337593543950335")?.checked_add(value).is_none());

    Ok(())
}

#[test]
fn test_monetary_deserializes_numbers_and_numeric_strings() -> Result<()> {
    let from_number: Monetary = serde_json::from_str("12.34")?;
    let from_integer: Monetary = serde_json::from_str("12")?;
    let from_string: Monetary = serde_json::from_str("\"12.34\"")?;

    assert_eq!(from_number, Monetary::from_str("12.34")?);
    assert_eq!(from_integer, Monetary::from_str("12")?);
    assert_eq!(from_string, from_number);
    assert!(serde_json::from_str::<Monetary>("\"twelve\"").is_err());

    Ok(())
}

#[test]
fn test_monetary_serializes_as_json_number() -> Result<()> {
    assert_eq!(serde_json::to_string(&Monetary::from_str("59.99")?)?, "59.99");
    assert_eq!(serde_json::to_string(&Monetary::from_str("100.00")?)?, "100");
    assert_eq!(serde_json::to_string(&Monetary::from_str("0.10")?)?, "0.1");

    Ok(())
}

#[test]
fn test_monetary_sum_is_exact() -> Result<()> {
    let parts = vec![Monetary::from_str("0.10")?, Monetary::from_str("0.20")?, Monetary::from_str("0.30")?];
    let total: Monetary = parts.into_iter().sum();

    assert_eq!(total, Monetary::from_str("0.60")?);

    Ok(())
}

#[test]
fn test_monetary_reads_amounts_from_json_values() -> Result<()> {
    assert_eq!(Monetary::from_json(&json!(12.5)), Some(Monetary::from_str("12.5")?));
    assert_eq!(Monetary::from_json(&json!(" 7.25 ")), Some(Monetary::from_str("7.25")?));
    assert_eq!(Monetary::from_json(&json!(1e21)), Some(Monetary::from_str("1000000000000000000000")?));
    assert_eq!(Monetary::from_json(&json!(null)), None);
    assert_eq!(Monetary::from_json(&json!("")), None);
    assert_eq!(Monetary::from_json(&json!({ "value": 3 })), None);

    Ok(())
}

#[test]
fn test_monetary_to_json_matches_serialized_form() -> Result<()> {
    for value in ["59.99", "100.00", "0.10", "-3"] {
        let monetary = Monetary::from_str(value)?;

        assert_eq!(monetary.to_json(), serde_json::to_value(monetary)?);
    }

    assert_eq!(Monetary::from_str("100.00")?.to_json(), json!(100));

    Ok(())
}
