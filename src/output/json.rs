//! JSON serialization for ICC results.

use serde::Serialize;

/// Serialize a result to a compact JSON string.
///
/// Accepts [`IccResult`](crate::IccResult) as well as
/// [`ReplicateSummary`](crate::ReplicateSummary).
///
/// # Errors
///
/// Returns an error if serialization fails (should not happen for the
/// crate's result types).
pub fn to_json<T: Serialize + ?Sized>(result: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string(result)
}

/// Serialize a result to a pretty-printed JSON string.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn to_json_pretty<T: Serialize + ?Sized>(result: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::replicates::ReplicateSummary;
    use crate::result::IccResult;
    use crate::statistics::MeanSquares;

    fn make_result() -> IccResult {
        IccResult {
            icc: 0.75,
            f_value: 12.5,
            lower_bound: 0.5,
            upper_bound: 0.9,
            confidence: 0.95,
            null_correlation: 0.0,
            mean_squares: MeanSquares {
                subjects: 6,
                raters: 4,
                ss: 100.0,
                msr: 12.5,
                msc: 2.0,
                mse: 1.0,
            },
        }
    }

    #[test]
    fn test_to_json() {
        let json = to_json(&make_result()).unwrap();
        assert!(json.contains("\"icc\":0.75"));
        assert!(json.contains("\"f_value\":12.5"));
        assert!(json.contains("\"lower_bound\":0.5"));
        assert!(json.contains("\"upper_bound\":0.9"));
        assert!(json.contains("\"msr\":12.5"));
    }

    #[test]
    fn test_to_json_pretty() {
        let json = to_json_pretty(&make_result()).unwrap();
        assert!(json.contains('\n'));
        assert!(json.contains("mean_squares"));
    }

    #[test]
    fn test_round_trip() {
        let result = make_result();
        let parsed: IccResult = serde_json::from_str(&to_json(&result).unwrap()).unwrap();
        assert_eq!(parsed, result);
    }

    #[test]
    fn test_replicate_summary() {
        let summary = ReplicateSummary {
            area_icc: vec![0.5, 0.7],
            shape_icc: vec![0.4, 0.6],
            mean_area_icc: 0.6,
            mean_shape_icc: 0.5,
        };
        let json = to_json(&summary).unwrap();
        assert!(json.contains("\"area_icc\":[0.5,0.7]"));
        assert!(json.contains("\"mean_shape_icc\":0.5"));
    }
}
