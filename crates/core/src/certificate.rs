//! Completion-certificate eligibility rules.
//!
//! A claim is checked in two phases. The local phase ([`check_local_eligibility`])
//! needs only the learner's enrollment and account; the chain-dependent
//! "already claimed" check happens afterwards in the API layer because it
//! requires the NFT service.

use crate::progress::is_complete;

/// Why a learner may not claim a certificate right now.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClaimRejection {
    /// No enrollment exists for the learner and roadmap.
    NotEnrolled,
    /// The enrollment has not reached 100%.
    Incomplete { current_progress: i32 },
    /// The learner's account has no wallet to receive the token.
    MissingWallet,
    /// A certificate was already issued for this learner and roadmap.
    AlreadyClaimed,
}

impl ClaimRejection {
    pub fn message(&self) -> &'static str {
        match self {
            Self::NotEnrolled => "You are not enrolled in this roadmap",
            Self::Incomplete { .. } => {
                "You must complete 100% of the roadmap to claim a certificate"
            }
            Self::MissingWallet => "No wallet address found for your account",
            Self::AlreadyClaimed => "You have already claimed a certificate for this roadmap",
        }
    }
}

/// Check the enrollment-level preconditions of a certificate claim.
///
/// `progress` is the enrollment's progress, or `None` when the learner is not
/// enrolled. Checks run in a fixed order: enrollment, completion, wallet.
pub fn check_local_eligibility(
    progress: Option<i32>,
    wallet_address: Option<&str>,
) -> Result<(), ClaimRejection> {
    let progress = progress.ok_or(ClaimRejection::NotEnrolled)?;
    if !is_complete(progress) {
        return Err(ClaimRejection::Incomplete {
            current_progress: progress,
        });
    }
    match wallet_address {
        Some(addr) if !addr.trim().is_empty() => Ok(()),
        _ => Err(ClaimRejection::MissingWallet),
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    const WALLET: Option<&str> = Some("0x00000000000000000000000000000000000000aa");

    #[test]
    fn complete_enrollment_with_wallet_is_eligible() {
        assert_eq!(check_local_eligibility(Some(100), WALLET), Ok(()));
    }

    #[test]
    fn not_enrolled_takes_precedence() {
        assert_eq!(
            check_local_eligibility(None, None),
            Err(ClaimRejection::NotEnrolled)
        );
    }

    #[test]
    fn incomplete_reports_current_progress() {
        assert_matches!(
            check_local_eligibility(Some(99), WALLET),
            Err(ClaimRejection::Incomplete { current_progress: 99 })
        );
    }

    #[test]
    fn blank_wallet_is_missing() {
        assert_eq!(
            check_local_eligibility(Some(100), Some("  ")),
            Err(ClaimRejection::MissingWallet)
        );
        assert_eq!(
            check_local_eligibility(Some(100), None),
            Err(ClaimRejection::MissingWallet)
        );
    }

    #[test]
    fn messages_are_distinct() {
        let all = [
            ClaimRejection::NotEnrolled,
            ClaimRejection::Incomplete { current_progress: 0 },
            ClaimRejection::MissingWallet,
            ClaimRejection::AlreadyClaimed,
        ];
        let mut messages: Vec<_> = all.iter().map(ClaimRejection::message).collect();
        messages.sort();
        messages.dedup();
        assert_eq!(messages.len(), all.len());
    }
}
