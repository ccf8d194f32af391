//! JSON payload shapes shared by the file loader and the HTTP provider.

use analytica_core::{FieldWarning, StateProfile, StateRecord};
use serde::Deserialize;

/// State records as served by the read endpoint or stored in a JSON file.
///
/// Both a bare array and a `{ "data": [...] }` envelope are accepted.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum RecordsPayload {
    Records(Vec<StateRecord>),
    Envelope { data: Vec<StateRecord> },
}

impl RecordsPayload {
    pub fn into_records(self) -> Vec<StateRecord> {
        match self {
            Self::Records(records) | Self::Envelope { data: records } => records,
        }
    }
}

/// Types every record, logging each degraded field.
pub fn convert_records(records: Vec<StateRecord>) -> (Vec<StateProfile>, Vec<FieldWarning>) {
    let mut profiles = Vec::with_capacity(records.len());
    let mut warnings = Vec::new();

    for record in records {
        let conversion = record.into_profile();
        for warning in &conversion.warnings {
            tracing::warn!(
                state = %warning.state,
                field = warning.field,
                value = %warning.value,
                "{}",
                warning.reason
            );
        }
        profiles.push(conversion.profile);
        warnings.extend(conversion.warnings);
    }

    (profiles, warnings)
}

#[cfg(test)]
mod tests {
    use analytica_core::FieldWarningReason;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn bare_array_is_accepted() {
        let json = r#"[{"Name": "Texas", "SalesTax": "6.25"}]"#;

        let records = serde_json::from_str::<RecordsPayload>(json).unwrap().into_records();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "Texas");
        assert_eq!(records[0].sales_tax, "6.25");
    }

    #[test]
    fn data_envelope_is_accepted() {
        let json = r#"{"data": [{"Name": "Ohio", "_id": "65a1", "IncomeTax": 3.5}], "count": 1}"#;

        let records = serde_json::from_str::<RecordsPayload>(json).unwrap().into_records();

        assert_eq!(records[0].name, "Ohio");
        assert_eq!(records[0].income_tax, "3.5");
    }

    #[test]
    fn other_shapes_are_rejected() {
        assert!(serde_json::from_str::<RecordsPayload>(r#"{"states": []}"#).is_err());
        assert!(serde_json::from_str::<RecordsPayload>(r#""Texas""#).is_err());
    }

    #[test]
    fn convert_records_collects_warnings() {
        let records = vec![
            StateRecord {
                name: "Texas".to_string(),
                sales_tax: "6.25".to_string(),
                ..StateRecord::default()
            },
            StateRecord {
                name: "Ohio".to_string(),
                cost_of_living: "cheap".to_string(),
                ..StateRecord::default()
            },
        ];

        let (profiles, warnings) = convert_records(records);

        assert_eq!(profiles.len(), 2);
        assert_eq!(profiles[0].sales_tax, dec!(6.25));
        assert!(
            warnings
                .iter()
                .any(|w| w.state == "Ohio" && w.field == "CostOfLiving"
                    && w.reason == FieldWarningReason::InvalidNumber)
        );
    }
}
