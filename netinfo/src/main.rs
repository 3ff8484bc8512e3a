use std::path::PathBuf;

use anyhow::{Context, Result};
use chaincfg::{Network, Params, registry};
use chrono::{DateTime, Utc};
use clap::Parser;
use tracing::*;

mod config;
mod util;

use config::Config;

#[derive(Parser, Debug)]
#[command(author, version, about = "Print the consensus parameters of a network", long_about = None)]
struct Cli {
    /// Network to inspect (mainnet, testnet3, simnet, regnet)
    #[arg(short, long)]
    network: Option<Network>,
    /// TOML file selecting the network, used when none is given on the command line
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Block height to compute the subsidy split for
    #[arg(long, default_value_t = 0)]
    height: u64,
    /// Number of votes included in the block at that height
    #[arg(long)]
    voters: Option<u16>,
    /// Unix time at which to list open votes, defaults to now
    #[arg(long)]
    time: Option<i64>,
}

fn main() -> Result<()> {
    util::setup_tracing()?;
    util::setup_panic_hook();
    let cli = Cli::parse();

    let network = match (cli.network, &cli.config) {
        (Some(network), _) => network,
        (None, Some(path)) => Config::load(path)?.network,
        (None, None) => Network::MainNet,
    };
    debug!(%network, "selected network");

    registry::init();
    let params = network.params();

    let time = match cli.time {
        Some(secs) => DateTime::<Utc>::from_timestamp(secs, 0)
            .with_context(|| format!("Time out of range: {secs}"))?,
        None => Utc::now(),
    };

    print_summary(params);
    print_subsidy(params, cli.height, cli.voters.unwrap_or(params.tickets_per_block));
    print_votes(params, time);
    Ok(())
}

fn print_summary(params: &Params) {
    println!("network:            {} ({})", params.name, params.net);
    println!("default port:       {}", params.default_port);
    println!("genesis:            {}", params.genesis_hash);
    println!("genesis time:       {}", params.genesis_time());
    println!("pow limit bits:     {:#010x}", params.pow_limit_bits);
    println!("block time:         {}s", params.target_time_per_block.num_seconds());
    println!("address prefix:     {}", params.network_address_prefix);
    println!("stake enabled at:   {}", params.stake_enabled_height);
    println!("stake validated at: {}", params.stake_validation_height);
    match params.latest_checkpoint() {
        Some(checkpoint) => println!(
            "latest checkpoint:  {} {}",
            checkpoint.height, checkpoint.hash
        ),
        None => println!("latest checkpoint:  none"),
    }
    for seed in &params.dns_seeds {
        println!("seed:               {}", seed.host);
    }
}

fn print_subsidy(params: &Params, height: u64, voters: u16) {
    println!();
    println!("subsidy at height {height} with {voters} voters");
    println!("  total:    {}", util::atoms_to_coins(params.subsidy_at(height)));
    println!(
        "  work:     {}",
        util::atoms_to_coins(params.work_subsidy(height, voters))
    );
    println!(
        "  per vote: {}",
        util::atoms_to_coins(params.vote_subsidy(height))
    );
    println!(
        "  treasury: {}",
        util::atoms_to_coins(params.treasury_subsidy(height, voters))
    );
}

fn print_votes(params: &Params, time: DateTime<Utc>) {
    println!();
    println!("votes open at {time}");
    let mut any = false;
    for &version in params.deployments.keys() {
        for vote in params.votes_at(version, time) {
            any = true;
            println!("  v{version} {}: {}", vote.id, vote.description);
            for choice in &vote.choices {
                println!("    {:#06x} {}", choice.bits, choice.id);
            }
        }
    }
    if !any {
        println!("  none");
    }
}
