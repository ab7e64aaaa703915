use nutype::nutype;

/// Scores below this are treated as bot traffic.
pub const RECAPTCHA_MIN_SCORE: f64 = 0.5;

#[nutype(
    sanitize(trim),
    validate(not_empty),
    derive(Debug, Clone, PartialEq, Eq, Deref, TryFrom, Serialize, Deserialize)
)]
pub struct RecaptchaResponse(String);

/// Outcome of a single bot verification attempt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum VerificationResult {
    /// Verification is turned off, the submission passes unchecked.
    Disabled,
    /// The provider answered the siteverify request.
    Verified { success: bool, score: f64 },
    /// The provider could not be reached or sent an unreadable answer.
    Unreachable,
}

impl VerificationResult {
    pub fn accepted(&self) -> bool {
        match *self {
            Self::Disabled => true,
            Self::Verified { success, score } => success && score >= RECAPTCHA_MIN_SCORE,
            Self::Unreachable => false,
        }
    }

    pub fn score(&self) -> f64 {
        match *self {
            Self::Disabled => 1.0,
            Self::Verified { score, .. } => score,
            Self::Unreachable => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepted() {
        for (result, expected) in [
            (VerificationResult::Disabled, true),
            (
                VerificationResult::Verified {
                    success: true,
                    score: 0.8,
                },
                true,
            ),
            (
                VerificationResult::Verified {
                    success: true,
                    score: 0.5,
                },
                true,
            ),
            (
                VerificationResult::Verified {
                    success: true,
                    score: 0.3,
                },
                false,
            ),
            (
                VerificationResult::Verified {
                    success: false,
                    score: 0.9,
                },
                false,
            ),
            (VerificationResult::Unreachable, false),
        ] {
            assert_eq!(result.accepted(), expected, "{result:?}");
        }
    }

    #[test]
    fn disabled_scores_one() {
        assert_eq!(VerificationResult::Disabled.score(), 1.0);
        assert_eq!(VerificationResult::Unreachable.score(), 0.0);
    }

    #[test]
    fn blank_response_is_rejected() {
        assert!(RecaptchaResponse::try_new("   ").is_err());
        assert_eq!(
            RecaptchaResponse::try_new(" token ").unwrap().into_inner(),
            "token"
        );
    }
}
