//! Amount suffix parsing for Tears and Marks ids (`TR[50]`, `MK[5]`).

/// Why an id failed to yield an amount.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AmountError {
    #[error("missing '[' or ']'")]
    MissingBrackets,

    #[error("']' appears before '['")]
    BracketsReversed,

    #[error("bracketed value is not a non-negative integer")]
    NotAnInteger,
}

/// Parses the integer between the first `[` and the first `]` of `id`.
pub fn parse_amount(id: &str) -> Result<u32, AmountError> {
    let (Some(left), Some(right)) = (id.find('['), id.find(']')) else {
        return Err(AmountError::MissingBrackets);
    };
    if right < left {
        return Err(AmountError::BracketsReversed);
    }

    id[left + 1..right]
        .trim()
        .parse()
        .map_err(|_| AmountError::NotAnInteger)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_bracketed_suffix() {
        assert_eq!(parse_amount("TR[50]"), Ok(50));
        assert_eq!(parse_amount("MK[5]"), Ok(5));
        assert_eq!(parse_amount("TR[ 1200 ]"), Ok(1200));
    }

    #[test]
    fn rejects_malformed_ids() {
        assert_eq!(parse_amount("TR50"), Err(AmountError::MissingBrackets));
        assert_eq!(parse_amount("TR[50"), Err(AmountError::MissingBrackets));
        assert_eq!(parse_amount("TR]50["), Err(AmountError::BracketsReversed));
        assert_eq!(parse_amount("TR[]"), Err(AmountError::NotAnInteger));
        assert_eq!(parse_amount("TR[-5]"), Err(AmountError::NotAnInteger));
        assert_eq!(parse_amount("TR[x]"), Err(AmountError::NotAnInteger));
    }
}
