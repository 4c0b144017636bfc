//!
//! The gas report parsing tests.
//!

use crate::report::error::Error;
use crate::report::format::Format;
use crate::report::row::Row;
use crate::report::GasReport;

#[test]
fn single_row() {
    let report = GasReport::from_text("| transferFunds | 21 | 50000 | 10 | 60000 |").unwrap();

    assert_eq!(
        report.rows,
        vec![Row::new("transferFunds".to_owned(), 50000, 60000)]
    );
}

#[test]
fn rows_keep_order_and_duplicates() {
    let text = r#"
| deposit  | 1 | 41000 | 2 | 43500 |
| withdraw | 1 | 30100 | 2 | 31000 |
| deposit  | 1 | 52000 | 2 | 52000 |
"#;

    let report = GasReport::from_text(text).unwrap();

    assert_eq!(
        report.rows,
        vec![
            Row::new("deposit".to_owned(), 41000, 43500),
            Row::new("withdraw".to_owned(), 30100, 31000),
            Row::new("deposit".to_owned(), 52000, 52000),
        ]
    );
}

#[test]
fn foundry_table() {
    let text = r#"
Ran 3 tests for test/Vault.t.sol:VaultTest
[PASS] test_deposit() (gas: 51234)
| src/Vault.sol:Vault contract |                 |       |        |       |         |
|------------------------------|-----------------|-------|--------|-------|---------|
| Deployment Cost              | Deployment Size |       |        |       |         |
| 412345                       | 1873            |       |        |       |         |
| Function Name                | min             | avg   | median | max   | # calls |
| deposit                      | 23456           | 45678 | 45678  | 67890 | 4       |
| withdraw                     | 2345            | 3456  | 3456   | 4567  | 2       |
"#;

    let report = GasReport::from_text(text).unwrap();

    assert_eq!(
        report.rows,
        vec![
            Row::new("deposit".to_owned(), 45678, 67890),
            Row::new("withdraw".to_owned(), 3456, 4567),
        ]
    );
}

#[test]
fn no_rows() {
    let report = GasReport::from_text("Error: Compiler run failed").unwrap();

    assert!(report.rows.is_empty());
    assert!(matches!(
        report.ensure_not_empty(Format::Text),
        Err(Error::NoRows {
            report_format: Format::Text
        })
    ));
}

#[test]
fn gas_cost_overflow() {
    let result = GasReport::from_text("| spin | 0 | 1 | 0 | 99999999999999999999999 |");

    assert!(matches!(
        result,
        Err(Error::InvalidGasCost {
            ref function_name,
            column: "average",
            ..
        }) if function_name == "spin"
    ));
}

#[test]
fn json_report() {
    let text = r#"[
    {
        "contract": "src/Vault.sol:Vault",
        "deployment": { "gas": 412345, "size": 1873 },
        "functions": {
            "withdraw(uint256)": {
                "calls": 2, "min": 2345, "mean": 3456, "median": 3456, "max": 4567
            },
            "deposit(uint256)": {
                "calls": 4, "min": 23456, "mean": 45678, "median": 45678, "max": 67890
            }
        }
    },
    {
        "contract": "src/Token.sol:Token",
        "deployment": { "gas": 99999, "size": 1111 },
        "functions": {
            "transfer(address,uint256)": { "calls": 15, "mean": 9000 }
        }
    }
]"#;

    let report = GasReport::parse(text, Format::Json).unwrap();

    assert_eq!(
        report.rows,
        vec![
            Row::new("deposit(uint256)".to_owned(), 23456, 45678),
            Row::new("withdraw(uint256)".to_owned(), 2345, 3456),
            Row::new("transfer(address,uint256)".to_owned(), 0, 9000),
        ]
    );
}

#[test]
fn json_report_reads_only_function_costs() {
    let text = r#"[{ "functions": { "ping()": { "min": 21000, "mean": 21500 } } }]"#;

    let report = GasReport::parse(text, Format::Json).unwrap();

    assert_eq!(
        report.rows,
        vec![Row::new("ping()".to_owned(), 21000, 21500)]
    );
}

#[test]
fn format_defaults_to_text() {
    assert_eq!(Format::default(), Format::Text);
}

#[test]
fn json_report_malformed() {
    let result = GasReport::parse("| deposit | 1 | 2 | 3 | 4 |", Format::Json);

    assert!(matches!(result, Err(Error::Json(_))));
}

#[test]
fn format_from_str() {
    assert_eq!("TEXT".parse::<Format>().unwrap(), Format::Text);
    assert_eq!("json".parse::<Format>().unwrap(), Format::Json);
    assert!("csv".parse::<Format>().is_err());
}
