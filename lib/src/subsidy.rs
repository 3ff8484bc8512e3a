//! Block subsidy schedule.
//!
//! The full subsidy starts at `base_subsidy` and is multiplied by
//! `mul_subsidy / div_subsidy` once per `subsidy_reduction_interval` blocks.
//! It is then split between the miner, the voters and the treasury according
//! to the network's proportions.

use crate::params::Params;

impl Params {
    /// Full block subsidy at `height`, before it is split.
    ///
    /// Never overflows: each step is computed in 128 bits and is clamped to the
    /// previous value. Once the subsidy stops changing, zero included, it
    /// stays there, so even a non-decaying ratio returns promptly.
    pub fn subsidy_at(&self, height: u64) -> u64 {
        let reductions = height / self.subsidy_reduction_interval.max(1);
        let mul = u128::from(self.mul_subsidy);
        let div = u128::from(self.div_subsidy.max(1));

        let mut subsidy = u128::from(self.base_subsidy);
        for _ in 0..reductions {
            let next = (subsidy * mul / div).min(subsidy);
            // a fixed point, zero included, never moves again
            if next == subsidy {
                break;
            }
            subsidy = next;
        }
        u64::try_from(subsidy).unwrap_or(u64::MAX)
    }

    /// Proof-of-work share of the subsidy. Once votes are required, blocks
    /// with fewer than `tickets_per_block` voters earn proportionally less.
    pub fn work_subsidy(&self, height: u64, voters: u16) -> u64 {
        let share = self.proportion_of(self.subsidy_at(height), self.work_reward_proportion);
        self.scale_by_voters(height, share, voters)
    }

    /// Subsidy paid to each individual vote. Zero before stake validation.
    pub fn vote_subsidy(&self, height: u64) -> u64 {
        if !self.is_stake_validation_height(height) {
            return 0;
        }
        let share = self.proportion_of(self.subsidy_at(height), self.stake_reward_proportion);
        share / u64::from(self.tickets_per_block.max(1))
    }

    /// Treasury share of the subsidy, scaled by voters like the work share.
    pub fn treasury_subsidy(&self, height: u64, voters: u16) -> u64 {
        let share = self.proportion_of(self.subsidy_at(height), self.block_tax_proportion);
        self.scale_by_voters(height, share, voters)
    }

    fn proportion_of(&self, subsidy: u64, proportion: u16) -> u64 {
        let total = u128::from(self.total_subsidy_proportions().max(1));
        (u128::from(subsidy) * u128::from(proportion) / total) as u64
    }

    fn scale_by_voters(&self, height: u64, amount: u64, voters: u16) -> u64 {
        if !self.is_stake_validation_height(height) {
            return amount;
        }
        let voters = voters.min(self.tickets_per_block);
        let tickets = u128::from(self.tickets_per_block.max(1));
        (u128::from(amount) * u128::from(voters) / tickets) as u64
    }
}

#[cfg(test)]
mod tests {
    use crate::Network;

    #[test]
    fn first_interval_pays_the_base_subsidy() {
        let params = Network::RegNet.params();
        assert_eq!(params.subsidy_at(0), 50_000_000_000);
        assert_eq!(params.subsidy_at(127), 50_000_000_000);
        // 50_000_000_000 * 100 / 101
        assert_eq!(params.subsidy_at(128), 49_504_950_495);
        assert_eq!(params.subsidy_at(255), 49_504_950_495);
        // 49_504_950_495 * 100 / 101
        assert_eq!(params.subsidy_at(256), 49_014_802_470);
    }

    #[test]
    fn subsidy_reaches_zero_and_stays_there() {
        let params = Network::RegNet.params();
        assert_eq!(params.subsidy_at(u64::MAX), 0);
        assert_eq!(params.subsidy_at(128 * 100_000), 0);
    }

    #[test]
    fn non_decaying_ratio_returns_promptly() {
        let mut params = Network::RegNet.params().clone();
        params.mul_subsidy = params.div_subsidy;
        assert_eq!(params.subsidy_at(u64::MAX), params.base_subsidy);

        // a ratio that stalls above zero stays put too
        params.base_subsidy = 1;
        params.mul_subsidy = 3;
        params.div_subsidy = 2;
        assert_eq!(params.subsidy_at(u64::MAX), 1);
    }

    #[test]
    fn split_before_stake_validation() {
        let params = Network::RegNet.params();
        let height = params.stake_validation_height - 1;
        let full = params.subsidy_at(height);
        assert_eq!(params.work_subsidy(height, 0), full * 6 / 10);
        assert_eq!(params.treasury_subsidy(height, 0), full / 10);
        assert_eq!(params.vote_subsidy(height), 0);
    }

    #[test]
    fn split_after_stake_validation_scales_with_voters() {
        let params = Network::RegNet.params();
        let height = params.stake_validation_height;
        let full = params.subsidy_at(height);
        let work = full * 6 / 10;
        assert_eq!(params.work_subsidy(height, 5), work);
        assert_eq!(params.work_subsidy(height, 3), work * 3 / 5);
        // more voters than tickets per block cannot inflate the reward
        assert_eq!(params.work_subsidy(height, 9), work);
        assert_eq!(params.treasury_subsidy(height, 4), full / 10 * 4 / 5);
        assert_eq!(params.vote_subsidy(height), full * 3 / 10 / 5);
    }
}
