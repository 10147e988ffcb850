use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "ecoin")]
pub struct Opt {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    #[command(name = "transact", about = "Queue a transfer for the next block")]
    Transact {
        #[arg(help = "Sender address")]
        sender: String,
        #[arg(help = "Amount of coin to send")]
        amount: i64,
        #[arg(help = "Recipient address")]
        recipient: String,
    },
    #[command(name = "mine", about = "Forge a new block and collect the reward")]
    Mine {
        #[arg(help = "Node address to receive the mining reward")]
        address: String,
    },
    #[command(name = "history", about = "Print all forged blocks in the chain")]
    History,
}
