// Entry point for the ledger CLI. One process is one session: the chain
// exists only in memory, so every invocation starts from a fresh genesis.
use clap::Parser;
use ecoin::{block_digest, Command, Ledger, Opt, REWARD_AMOUNT, REWARD_SENDER};
use log::{error, LevelFilter};
use std::process;

fn main() {
    env_logger::builder().filter_level(LevelFilter::Info).init();

    let opt = Opt::parse();

    let ledger = Ledger::new();
    if let Err(e) = run_command(&ledger, opt.command) {
        error!("Error: {e}");
        process::exit(1);
    }
}

fn run_command(ledger: &Ledger, command: Command) -> ecoin::Result<()> {
    match command {
        // Queue a transfer and report which block it will land in
        Command::Transact {
            sender,
            amount,
            recipient,
        } => {
            let index = ledger.submit_transaction(&sender, amount, &recipient)?;
            println!("Transaction will be added to block {index}");
        }
        // Forge a new block: search a proof against the tip, queue the
        // mining reward, then seal with the tip's digest
        Command::Mine { address } => {
            let last_block = ledger.last_block();
            let proof = ledger.get_proof_engine().search(last_block.get_proof());

            // Sender "0" signifies that this node mined a new coin
            ledger.submit_transaction(REWARD_SENDER, REWARD_AMOUNT, &address)?;

            let previous_hash = block_digest(&last_block)?;
            let block = ledger.seal_block(proof, &previous_hash)?;

            println!("Block successfully forged");
            println!("  index: {}", block.get_index());
            println!("  proof: {}", block.get_proof());
            println!("  previous_hash: {}", block.get_previous_hash());
        }
        // Print the whole chain, genesis first
        Command::History => {
            for block in ledger.chain() {
                println!("Block {}", block.get_index());
                println!("  proof: {}", block.get_proof());
                println!("  timestamp: {}", block.get_timestamp());
                println!("  previous_hash: {}", block.get_previous_hash());
                for tx in block.get_transactions() {
                    println!(
                        "  - {} -> {} (amount: {})",
                        tx.get_sender(),
                        tx.get_recipient(),
                        tx.get_amount()
                    );
                }
                println!();
            }
        }
    }
    Ok(())
}
