use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod split {
    use super::*;

    /// How an expense total is divided among participants.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "snake_case")]
    pub enum SplitMethod {
        Equal,
        Ratio,
        Fixed,
    }

    /// Per-participant weight entry of a split request.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct ShareInput {
        pub user_id: Uuid,
        /// Relative weight for the `ratio` method. Defaults to 1.
        pub ratio: Option<u64>,
        /// Stated owed amount for the `fixed` method. Defaults to 0.
        pub fixed_minor: Option<i64>,
    }

    /// Request body for previewing the shares of an expense.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct SplitPreview {
        pub amount_minor: i64,
        pub method: SplitMethod,
        /// The participant who fronted the money; absorbs rounding
        /// leftovers.
        pub payer_id: Option<Uuid>,
        pub shares: Vec<ShareInput>,
        /// Reject fixed splits whose stated amounts do not sum to the
        /// total, instead of moving the difference onto the payer.
        pub strict_fixed: Option<bool>,
    }

    /// A participant with their computed share.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct ShareView {
        pub user_id: Uuid,
        pub amount_owed_minor: i64,
    }

    /// Response body for a split preview.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct SplitPreviewResponse {
        pub shares: Vec<ShareView>,
        pub total_minor: i64,
    }
}

#[cfg(test)]
mod tests {
    use super::split::*;

    #[test]
    fn split_method_uses_snake_case_tags() {
        assert_eq!(
            serde_json::to_string(&SplitMethod::Equal).unwrap(),
            "\"equal\""
        );
        assert_eq!(
            serde_json::from_str::<SplitMethod>("\"ratio\"").unwrap(),
            SplitMethod::Ratio
        );
    }

    #[test]
    fn share_input_weights_may_be_omitted() {
        let share: ShareInput = serde_json::from_str(
            r#"{"user_id": "7f2a67f4-67b6-4f5a-a4db-0c54b4a82a0b"}"#,
        )
        .unwrap();
        assert_eq!(share.ratio, None);
        assert_eq!(share.fixed_minor, None);
    }
}
