//! Text codec for transaction output points.
//!
//! A point references one output of a previous transaction and is written as
//! `<txid>:<vout>`, where `txid` is the 64 character hex digest in the usual
//! (byte reversed) Bitcoin display order. These points should not be confused
//! with points on a curve.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use bitcoin::hashes::hex::HexToArrayError;
use bitcoin::hashes::Hash;
use bitcoin::OutPoint;
use bitcoin::Txid;
use serde::{Deserialize, Serialize};

/// Separates the hash from the output index
pub const DELIMITER: char = ':';

/// A reference to an output of a prior transaction
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Point {
    /// Transaction hash, internal byte order
    hash: Txid,
    /// Output position within the transaction
    index: u32,
}

impl Default for Point {
    /// The empty point has an all-zero hash and index 0
    fn default() -> Self {
        Self {
            hash: Txid::all_zeros(),
            index: 0,
        }
    }
}

impl Point {
    /// Creates a new [`Point`] from a transaction `hash` and output `index`
    pub fn new(hash: Txid, index: u32) -> Self {
        Self { hash, index }
    }

    /// Transaction hash
    pub fn hash(&self) -> Txid {
        self.hash
    }

    /// Output index
    pub fn index(&self) -> u32 {
        self.index
    }

    /// Converts to the library-native outpoint
    pub fn to_outpoint(&self) -> OutPoint {
        OutPoint {
            txid: self.hash,
            vout: self.index,
        }
    }
}

impl From<OutPoint> for Point {
    fn from(outpoint: OutPoint) -> Self {
        Self::new(outpoint.txid, outpoint.vout)
    }
}

impl From<Point> for OutPoint {
    fn from(point: Point) -> Self {
        point.to_outpoint()
    }
}

impl FromStr for Point {
    type Err = ParsePointError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let members: Vec<&str> = s.split(DELIMITER).collect();
        if members.len() != 2 {
            return Err(ParsePointError::Delimiter {
                parts: members.len(),
            });
        }

        // index is checked before the hash
        let index = members[1].parse::<u32>().map_err(ParsePointError::Index)?;
        let hash = members[0].parse::<Txid>().map_err(ParsePointError::Hash)?;

        Ok(Self { hash, index })
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.hash, DELIMITER, self.index)
    }
}

/// Parses a [`Point`] from its `hash:index` form
pub fn parse(s: &str) -> Result<Point, ParsePointError> {
    s.parse()
}

/// Formats a [`Point`] as `hash:index`, the inverse of [`parse`]
pub fn format(point: &Point) -> String {
    point.to_string()
}

/// Error parsing a [`Point`] from a string
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsePointError {
    /// Input does not split into exactly two parts
    Delimiter {
        /// Number of parts found
        parts: usize,
    },
    /// Output index is not a valid `u32`
    Index(ParseIntError),
    /// Hash is not a 64 character hex digest
    Hash(HexToArrayError),
}

impl fmt::Display for ParsePointError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Delimiter { .. } => {
                write!(f, "point must have two parts delimited by a colon")
            }
            Self::Index(e) => write!(f, "invalid point index: {e}"),
            Self::Hash(e) => write!(f, "invalid point hash: {e}"),
        }
    }
}

impl std::error::Error for ParsePointError {}
