//! Parsing of deposit expressions

use super::{DepositSpec, FlatDeposits, NestedDeposits};
use crate::config::CompareConfig;
use crate::error::{CalcError, CalcResult};
use crate::rate::parse_rate;

/// Parse a deposit expression, deciding once between the flat and nested forms
pub fn parse_deposits(expr: &str, config: &CompareConfig) -> CalcResult<DepositSpec> {
    if expr.contains(config.nested_separator) {
        parse_nested(expr, config).map(DepositSpec::Nested)
    } else {
        parse_flat(expr, config).map(DepositSpec::Flat)
    }
}

/// Parse `deposit1:deposit2:...[:fill]`
pub fn parse_flat(expr: &str, config: &CompareConfig) -> CalcResult<FlatDeposits> {
    let mut tokens: Vec<&str> = expr.split(':').collect();

    let fill_with_last = tokens.last() == Some(&config.fill_token.as_str());
    if fill_with_last {
        tokens.pop();
    }

    let values = tokens
        .iter()
        .map(|token| {
            token.parse::<f64>().map_err(|_| {
                CalcError::parse(format!("deposit {:?} could not be interpreted", token))
            })
        })
        .collect::<CalcResult<Vec<f64>>>()?;

    if values.is_empty() {
        return Err(CalcError::parse(format!("no deposits given in {:?}", expr)));
    }

    Ok(FlatDeposits {
        values,
        fill_with_last,
    })
}

/// Parse `balance%rate%deposits`
fn parse_nested(expr: &str, config: &CompareConfig) -> CalcResult<NestedDeposits> {
    let fields: Vec<&str> = expr.split(config.nested_separator).collect();
    let [balance, rate, deposits] = fields.as_slice() else {
        return Err(CalcError::parse(format!(
            "could not parse deposit pattern {:?}, expected balance{sep}rate{sep}deposits",
            expr,
            sep = config.nested_separator
        )));
    };

    let initial_balance: f64 = balance
        .parse()
        .map_err(|_| CalcError::parse(format!("could not interpret balance {:?}", balance)))?;

    let sub_rate = parse_rate(rate)
        .map_err(|e| CalcError::parse(format!("could not interpret rate inside deposits: {}", e)))?;

    let sub_deposits = parse_flat(deposits, config).map_err(|e| {
        CalcError::parse(format!("could not interpret deposits of the sub-account: {}", e))
    })?;

    Ok(NestedDeposits {
        initial_balance,
        sub_rate,
        sub_deposits,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::period::Period;

    fn config() -> CompareConfig {
        CompareConfig::default()
    }

    #[test]
    fn test_parse_flat() {
        let spec = parse_deposits("1000:12000:1350", &config()).unwrap();
        assert_eq!(
            spec,
            DepositSpec::Flat(FlatDeposits {
                values: vec![1000.0, 12000.0, 1350.0],
                fill_with_last: false,
            })
        );
    }

    #[test]
    fn test_parse_fill() {
        let DepositSpec::Flat(flat) = parse_deposits("1000:fill", &config()).unwrap() else {
            panic!("expected flat deposits");
        };
        assert_eq!(flat.values, vec![1000.0]);
        assert!(flat.fill_with_last);
    }

    #[test]
    fn test_fill_only_trailing() {
        assert!(matches!(
            parse_deposits("fill:1000", &config()),
            Err(CalcError::Parse(_))
        ));
    }

    #[test]
    fn test_parse_nested() {
        let DepositSpec::Nested(nested) =
            parse_deposits("12000%0.02:Y%100:352:450", &config()).unwrap()
        else {
            panic!("expected nested deposits");
        };
        assert_eq!(nested.initial_balance, 12000.0);
        assert_eq!(nested.sub_deposits.values, vec![100.0, 352.0, 450.0]);
        assert!(!nested.sub_deposits.fill_with_last);
        assert_eq!(nested.sub_rate.nominal_rate, 0.02);
        assert_eq!(nested.sub_rate.basis, Period::Year);
        assert_eq!(nested.sub_rate.compounding, None);
    }

    #[test]
    fn test_parse_nested_with_fill() {
        let DepositSpec::Nested(nested) =
            parse_deposits("12000%0.02:Y:T%12000:1000:fill", &config()).unwrap()
        else {
            panic!("expected nested deposits");
        };
        assert_eq!(nested.sub_rate.compounding, Some(Period::Trimester));
        assert!(nested.sub_deposits.fill_with_last);
    }

    #[test]
    fn test_parse_errors() {
        let config = config();
        assert!(parse_deposits("100:abc", &config).is_err());
        assert!(parse_deposits("fill", &config).is_err());
        assert!(parse_deposits("", &config).is_err());
        assert!(parse_deposits("12000%0.02:Y", &config).is_err());
        assert!(parse_deposits("12000%0.02:Y%100%5", &config).is_err());
        assert!(parse_deposits("abc%0.02:Y%100", &config).is_err());
        assert!(parse_deposits("12000%abc:Y%100", &config).is_err());
        assert!(parse_deposits("12000%0.02:Y%x", &config).is_err());
    }

    #[test]
    fn test_custom_separator() {
        let config = CompareConfig {
            nested_separator: '/',
            fill_token: "repeat".to_string(),
            ..CompareConfig::default()
        };
        let DepositSpec::Nested(nested) = parse_deposits("500/0.01:M/10:repeat", &config).unwrap()
        else {
            panic!("expected nested deposits");
        };
        assert!(nested.sub_deposits.fill_with_last);
        assert!(matches!(
            parse_deposits("500%0.01:M%10", &config),
            Err(CalcError::Parse(_))
        ));
    }
}
