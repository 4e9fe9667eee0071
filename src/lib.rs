//! ethlotto: brute-force Ethereum address collision scanner
//!
//! - `targets`: immutable target address set, loaded once at startup
//! - `keygen`: random secp256k1 keypair generation and address derivation
//! - `worker`: the tight generate/match/persist loop
//! - `recorder`: serialized append-only match log
//! - `stats`: shared counter drain and throughput reporting

pub mod cli;
pub mod error;
pub mod keygen;
pub mod recorder;
pub mod stats;
pub mod targets;
pub mod worker;
