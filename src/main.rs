#![warn(clippy::all)]
use crate::cli::{Args, Cmd};
use clap::Parser;
use std::io;

mod cli;
mod cmd;

fn main() -> anyhow::Result<()> {
    pretty_env_logger::init_timed();
    let args = Args::parse();

    match args.cmd {
        Cmd::Point { points, json } => {
            let stdin = io::stdin();
            let mut stdout = io::stdout().lock();
            cmd::point::execute(stdin.lock(), &mut stdout, points, json)?
        }
        Cmd::Genpriv => cmd::genpriv()?,
        Cmd::GetPubkey { address } => cmd::get_pubkey(address.as_deref())?,
    }
    Ok(())
}
