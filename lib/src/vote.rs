//! Vote-gated consensus rule changes.
//!
//! Stakeholders signal on a pending rule change through the vote bits of their
//! votes. Each [`Vote`] owns a mask over those bits and a small set of
//! [`Choice`]s encoded within the mask. Tallying is left to the validation
//! engine; this module only defines the votes and checks that their encodings
//! cannot be confused with each other.

use chrono::{DateTime, Utc};

use crate::error::VoteError;

pub const VOTE_ID_MAX_BLOCK_SIZE: &str = "maxblocksize";
pub const VOTE_ID_SDIFF_ALGORITHM: &str = "sdiffalgorithm";
pub const VOTE_ID_LN_SUPPORT: &str = "lnsupport";
pub const VOTE_ID_LN_FEATURES: &str = "lnfeatures";
pub const VOTE_ID_FIX_LN_SEQ_LOCKS: &str = "fixlnseqlocks";

/// Start time for votes that are open from genesis.
pub const ALWAYS_AVAILABLE: i64 = 0;
/// Expire time for votes that never close.
pub const NEVER_EXPIRES: i64 = i64::MAX;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChoiceKind {
    /// Not voting either way. Always encoded as zero bits.
    Abstain,
    /// Rejects the rule change.
    No,
    /// Accepts the rule change.
    Yes,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Choice {
    pub id: &'static str,
    pub description: &'static str,
    /// Encoding of this choice within the vote's mask.
    pub bits: u16,
    pub kind: ChoiceKind,
}

impl Choice {
    pub const fn abstain(description: &'static str) -> Self {
        Choice {
            id: "abstain",
            description,
            bits: 0x0000,
            kind: ChoiceKind::Abstain,
        }
    }

    pub const fn no(description: &'static str, bits: u16) -> Self {
        Choice {
            id: "no",
            description,
            bits,
            kind: ChoiceKind::No,
        }
    }

    pub const fn yes(description: &'static str, bits: u16) -> Self {
        Choice {
            id: "yes",
            description,
            bits,
            kind: ChoiceKind::Yes,
        }
    }

    pub fn is_abstain(&self) -> bool {
        self.kind == ChoiceKind::Abstain
    }

    pub fn is_no(&self) -> bool {
        self.kind == ChoiceKind::No
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Vote {
    pub id: &'static str,
    pub description: &'static str,
    /// Vote bits this vote reads.
    pub mask: u16,
    pub choices: Vec<Choice>,
}

impl Vote {
    pub fn abstain_choice(&self) -> Option<&Choice> {
        self.choices.iter().find(|choice| choice.is_abstain())
    }

    /// Interprets a vote bits field against this vote.
    ///
    /// No bits set under the mask means the voter abstained, provided the vote
    /// defines an abstain choice; otherwise there is nothing to report. Bits
    /// matching no choice also yield `None`.
    pub fn choice_for_bits(&self, vote_bits: u16) -> Option<&Choice> {
        let masked = vote_bits & self.mask;
        if masked == 0 {
            return self.abstain_choice();
        }
        self.choices
            .iter()
            .find(|choice| !choice.is_abstain() && choice.bits & self.mask == masked)
    }

    pub fn validate(&self) -> Result<(), VoteError> {
        if self.mask == 0 {
            return Err(VoteError::EmptyMask(self.id));
        }

        let abstains: Vec<&Choice> = self.choices.iter().filter(|c| c.is_abstain()).collect();
        if abstains.len() != 1 {
            return Err(VoteError::AbstainCount {
                vote: self.id,
                count: abstains.len(),
            });
        }
        if abstains[0].bits != 0 {
            return Err(VoteError::AbstainBits {
                vote: self.id,
                choice: abstains[0].id,
            });
        }

        for (i, choice) in self.choices.iter().enumerate() {
            if choice.bits & !self.mask != 0 {
                return Err(VoteError::BitsOutsideMask {
                    vote: self.id,
                    choice: choice.id,
                    bits: choice.bits,
                    mask: self.mask,
                });
            }
            if choice.is_abstain() {
                continue;
            }
            if choice.bits == 0 {
                return Err(VoteError::ZeroBits {
                    vote: self.id,
                    choice: choice.id,
                });
            }
            let clash = self.choices[..i]
                .iter()
                .find(|other| !other.is_abstain() && other.bits & self.mask == choice.bits & self.mask);
            if let Some(other) = clash {
                return Err(VoteError::DuplicateBits {
                    vote: self.id,
                    first: other.id,
                    second: choice.id,
                    bits: choice.bits,
                });
            }
        }

        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConsensusDeployment {
    pub vote: Vote,
    /// Unix time at which voting opens.
    pub start_time: i64,
    /// Unix time at which voting closes, [`NEVER_EXPIRES`] if it never does.
    pub expire_time: i64,
}

impl ConsensusDeployment {
    /// Whether voting is open at `time`. The window is half-open: open at the
    /// start time, closed at the expire time.
    pub fn is_open_at(&self, time: DateTime<Utc>) -> bool {
        let t = time.timestamp();
        self.start_time <= t && t < self.expire_time
    }

    pub fn validate(&self) -> Result<(), VoteError> {
        if self.expire_time <= self.start_time {
            return Err(VoteError::EmptyWindow {
                vote: self.vote.id,
                start_time: self.start_time,
                expire_time: self.expire_time,
            });
        }
        self.vote.validate()
    }
}

/// Checks the deployments registered at a single version: every vote must be
/// well formed and votes must not share mask bits or ids.
pub fn validate_version(deployments: &[ConsensusDeployment]) -> Result<(), VoteError> {
    for (i, deployment) in deployments.iter().enumerate() {
        deployment.validate()?;
        for earlier in &deployments[..i] {
            if earlier.vote.id == deployment.vote.id {
                return Err(VoteError::DuplicateVoteId(deployment.vote.id));
            }
            if earlier.vote.mask & deployment.vote.mask != 0 {
                return Err(VoteError::OverlappingMasks {
                    first: earlier.vote.id,
                    second: deployment.vote.id,
                });
            }
        }
    }
    Ok(())
}
