use chaincfg::registry;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[test]
fn subsidy_starts_at_the_base_amount() {
    for params in registry::all() {
        assert_eq!(params.subsidy_at(0), params.base_subsidy, "{}", params.name);
    }
}

#[test]
fn subsidy_never_increases() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    for params in registry::all() {
        let horizon = params.subsidy_reduction_interval * 3_000;
        let mut heights: Vec<u64> = (0..500).map(|_| rng.gen_range(0..horizon)).collect();
        heights.push(u64::MAX);
        heights.sort_unstable();

        let mut previous = params.subsidy_at(0);
        for height in heights {
            let subsidy = params.subsidy_at(height);
            assert!(subsidy <= previous, "{} at {height}", params.name);
            previous = subsidy;
        }
        assert_eq!(previous, 0);
    }
}

#[test]
fn subsidy_changes_only_at_interval_boundaries() {
    let mut rng = StdRng::seed_from_u64(42);
    for params in registry::all() {
        let interval = params.subsidy_reduction_interval;
        for _ in 0..50 {
            let start = rng.gen_range(0..1_000u64) * interval;
            let end = start + interval - 1;
            assert_eq!(params.subsidy_at(start), params.subsidy_at(end));
            assert!(params.subsidy_at(end + 1) < params.subsidy_at(end) || params.subsidy_at(end) == 0);
        }
    }
}

#[test]
fn split_never_exceeds_the_full_subsidy() {
    let mut rng = StdRng::seed_from_u64(7);
    for params in registry::all() {
        for _ in 0..200 {
            let height = rng.gen_range(0..params.stake_validation_height * 4);
            let voters = rng.gen_range(0..=params.tickets_per_block);
            let paid = params.work_subsidy(height, voters)
                + params.treasury_subsidy(height, voters)
                + params.vote_subsidy(height) * u64::from(voters);
            assert!(paid <= params.subsidy_at(height), "{} at {height}", params.name);
        }
    }
}
