use clap::{Parser, Subcommand};

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
#[clap(propagate_version = true)]
pub struct Args {
    #[clap(subcommand)]
    pub cmd: Cmd,
}

#[derive(Subcommand, Clone)]
pub enum Cmd {
    /// Validate and normalize transaction output points (hash:index).
    /// Reads whitespace separated points from stdin when none are given
    Point {
        /// Points to convert
        points: Vec<String>,
        /// Print each point as a json object
        #[clap(long, short = 'j', env = "SX_JSON")]
        json: bool,
    },
    /// Obsolete, use HD (BIP32) key derivation instead
    Genpriv,
    /// Get the public key of an address (not implemented)
    GetPubkey {
        /// Bitcoin address
        address: Option<String>,
    },
}
