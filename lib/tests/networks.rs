use chaincfg::vote::{VOTE_ID_LN_SUPPORT, VOTE_ID_MAX_BLOCK_SIZE, VOTE_ID_SDIFF_ALGORITHM};
use chaincfg::{AddressKind, ChoiceKind, HdKeyKind, Network, SUBSIDY_PROPORTION_TOTAL, registry};
use chrono::{DateTime, TimeDelta, Utc};

fn at(secs: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(secs, 0).unwrap()
}

#[test]
fn every_network_is_consistent() {
    for params in registry::all() {
        assert_eq!(params.validate(), Ok(()), "{}", params.name);
    }
}

#[test]
fn target_timespan_is_time_per_block_times_window() {
    for params in registry::all() {
        let window = i32::try_from(params.work_diff_window_size).unwrap();
        assert_eq!(
            params.target_timespan,
            params.target_time_per_block * window,
            "{}",
            params.name
        );
    }
}

#[test]
fn subsidy_proportions_sum_to_the_whole() {
    for params in registry::all() {
        assert_eq!(params.total_subsidy_proportions(), SUBSIDY_PROPORTION_TOTAL);
    }
}

#[test]
fn stake_heights_match_their_literals() {
    let expected = [
        (Network::MainNet, 512, 4096),
        (Network::TestNet3, 32, 768),
        (Network::SimNet, 32, 144),
        (Network::RegNet, 32, 144),
    ];
    for (network, enabled, validation) in expected {
        let params = network.params();
        assert_eq!(params.stake_enabled_height, enabled, "{network}");
        assert_eq!(params.stake_validation_height, validation, "{network}");
        // the enabled height follows the formula everywhere
        assert_eq!(
            params.stake_enabled_height,
            u64::from(params.coinbase_maturity) + u64::from(params.ticket_maturity)
        );
    }

    // only the simulation and regression networks follow the validation formula
    for network in [Network::SimNet, Network::RegNet] {
        let params = network.params();
        assert_eq!(
            params.stake_validation_height,
            u64::from(params.coinbase_maturity) + u64::from(params.ticket_pool_size) * 2
        );
    }
}

#[test]
fn quorum_is_ten_percent_of_an_interval() {
    for params in registry::all() {
        let votes = params.rule_change_activation_interval * u32::from(params.tickets_per_block);
        assert_eq!(params.rule_change_activation_quorum, votes / 10, "{}", params.name);
    }
}

#[test]
fn every_vote_has_one_abstain_and_distinct_bits() {
    for params in registry::all() {
        for deployments in params.deployments.values() {
            for deployment in deployments {
                let vote = &deployment.vote;
                let abstains: Vec<_> = vote.choices.iter().filter(|c| c.is_abstain()).collect();
                assert_eq!(abstains.len(), 1, "{}", vote.id);
                assert_eq!(abstains[0].bits, 0);

                let mut seen = Vec::new();
                for choice in vote.choices.iter().filter(|c| !c.is_abstain()) {
                    let bits = choice.bits & vote.mask;
                    assert_eq!(bits, choice.bits);
                    assert!(!seen.contains(&bits), "{}: duplicate bits", vote.id);
                    seen.push(bits);
                }
            }
        }
    }
}

#[test]
fn checkpoints_strictly_increase() {
    for params in registry::all() {
        for pair in params.checkpoints.windows(2) {
            assert!(pair[0].height < pair[1].height, "{}", params.name);
        }
    }
}

#[test]
fn checkpoint_lookup() {
    let params = Network::MainNet.params();
    let latest = params.latest_checkpoint().unwrap();
    assert_eq!(params.checkpoint_at(latest.height), Some(latest));
    assert_eq!(params.checkpoint_at(latest.height + 1), None);
    assert_eq!(params.checkpoint_at(440).unwrap().height, 440);

    let regnet = Network::RegNet.params();
    assert!(regnet.latest_checkpoint().is_none());
    assert!(regnet.checkpoint_at(0).is_none());
}

#[test]
fn regnet_scenario() {
    let params = Network::RegNet.params();
    assert_eq!(params.target_time_per_block, TimeDelta::seconds(1));
    assert_eq!(params.work_diff_window_size, 8);
    assert_eq!(params.target_timespan, TimeDelta::seconds(8));
    assert_eq!(params.rule_change_activation_interval, 320);
    assert_eq!(params.tickets_per_block, 5);
    assert_eq!(params.rule_change_activation_quorum, 160);
    assert_eq!(params.rule_change_activation_threshold(), 1200);
    assert_eq!(params.stake_enabled_height, 32);
    assert_eq!(params.stake_validation_height, 144);
    assert!(!params.is_stake_enabled_height(31));
    assert!(params.is_stake_enabled_height(32));
    assert!(!params.is_stake_validation_height(143));
    assert!(params.is_stake_validation_height(144));
}

#[test]
fn regnet_version_four_vote() {
    let params = Network::RegNet.params();
    let votes = params.votes_at(4, Utc::now());
    assert_eq!(votes.len(), 1);

    let vote = votes[0];
    assert_eq!(vote.id, VOTE_ID_MAX_BLOCK_SIZE);
    assert_eq!(vote.mask, 0x0006);
    let bits: Vec<_> = vote.choices.iter().map(|c| (c.bits, c.kind)).collect();
    assert_eq!(
        bits,
        vec![
            (0x0000, ChoiceKind::Abstain),
            (0x0002, ChoiceKind::No),
            (0x0004, ChoiceKind::Yes),
        ]
    );
}

#[test]
fn unknown_versions_have_no_votes() {
    let params = Network::RegNet.params();
    assert!(params.votes_at(3, Utc::now()).is_empty());
    assert!(params.votes_at(99, Utc::now()).is_empty());
    assert!(params.deployments_at(99).is_empty());
}

#[test]
fn mainnet_votes_respect_their_windows() {
    let params = Network::MainNet.params();

    // both version 4 votes open on 2017-04-26
    assert!(params.votes_at(4, at(1_493_164_799)).is_empty());
    let ids: Vec<_> = params.votes_at(4, at(1_493_164_800)).iter().map(|v| v.id).collect();
    assert_eq!(ids, vec![VOTE_ID_SDIFF_ALGORITHM, VOTE_ID_LN_SUPPORT]);

    // the LN support poll closed first
    let ids: Vec<_> = params.votes_at(4, at(1_508_976_000)).iter().map(|v| v.id).collect();
    assert_eq!(ids, vec![VOTE_ID_SDIFF_ALGORITHM]);
    assert!(params.votes_at(4, at(1_524_700_800)).is_empty());

    let (version, deployment) = params.deployment_by_vote_id(VOTE_ID_LN_SUPPORT).unwrap();
    assert_eq!(version, 4);
    assert_eq!(deployment.vote.mask, 0x0018);
    assert!(params.deployment_by_vote_id("nonexistent").is_none());
}

#[test]
fn vote_bits_decode_against_deployed_votes() {
    let params = Network::MainNet.params();
    let deployments = params.deployments_at(4);
    let sdiff = &deployments[0].vote;
    let ln = &deployments[1].vote;

    // yes on the stake difficulty change, abstain on LN support
    let vote_bits = 0x0001 | 0x0004;
    assert_eq!(sdiff.choice_for_bits(vote_bits).unwrap().kind, ChoiceKind::Yes);
    assert!(ln.choice_for_bits(vote_bits).unwrap().is_abstain());

    // an explicit no is not an abstain
    let vote_bits = 0x0008;
    assert!(ln.choice_for_bits(vote_bits).unwrap().is_no());
    assert!(sdiff.choice_for_bits(vote_bits).unwrap().is_abstain());
}

#[test]
fn block_sizes_follow_the_max_block_size_vote() {
    let regnet = Network::RegNet.params();
    assert_eq!(regnet.block_max_size_for_version(1), 1_000_000);
    assert_eq!(regnet.block_max_size_for_version(4), 1_000_000);
    assert_eq!(regnet.block_max_size_for_version(5), 1_310_720);
    assert_eq!(regnet.block_max_size_for_version(u32::MAX), 1_310_720);

    let mainnet = Network::MainNet.params();
    for version in [0, 4, 6, 100] {
        assert_eq!(mainnet.block_max_size_for_version(version), 393_216);
    }
}

#[test]
fn address_magics_round_trip() {
    for params in registry::all() {
        for kind in AddressKind::ALL {
            let magic = params.address_magic(kind);
            assert_eq!(params.address_kind(magic), Some(kind), "{}", params.name);
        }
        for kind in [HdKeyKind::Private, HdKeyKind::Public] {
            assert_eq!(params.hd_key_kind(params.hd_key_magic(kind)), Some(kind));
        }
    }

    let regnet = Network::RegNet.params();
    assert_eq!(regnet.network_address_prefix, "XCC");
    assert_eq!(regnet.address_magic(AddressKind::PubKeyHash), [0x0e, 0x00]);
    assert_eq!(regnet.hd_key_magic(HdKeyKind::Private), [0xea, 0xb4, 0x04, 0x48]);

    let mainnet = Network::MainNet.params();
    assert_eq!(mainnet.address_magic(AddressKind::PubKeyHash), [0x07, 0x3f]);
    assert_eq!(mainnet.address_kind([0xff, 0xff]), None);
    assert_eq!(mainnet.hd_key_magic(HdKeyKind::Public), [0x02, 0xfd, 0xa9, 0x26]);
}

#[test]
fn test_networks_have_no_seeds_and_a_ledger() {
    for network in [Network::SimNet, Network::RegNet] {
        let params = network.params();
        assert!(params.dns_seeds.is_empty());
        let total: u64 = params.block_one_ledger.iter().map(|p| p.amount).sum();
        assert_eq!(total, 300_000 * 100_000_000);
    }
    assert_eq!(Network::MainNet.params().dns_seeds.len(), 3);
}
