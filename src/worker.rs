//! The generate-derive-match-persist loop.
//!
//! Each worker owns its producer and runs a tight synchronous loop with no
//! backoff, batching or rate limiting; throughput is bounded only by the
//! producer cost and available cores. A producer or recorder error
//! propagates out of `run` and is fatal to the whole process.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;

use crate::error::Result;
use crate::keygen::{KeyProducer, Keypair};
use crate::recorder::MatchRecorder;
use crate::targets::TargetSet;

pub struct Worker<P: KeyProducer> {
    producer: P,
    targets: Arc<TargetSet>,
    recorder: Arc<MatchRecorder>,
    generated: Arc<AtomicU64>,
}

impl<P: KeyProducer> Worker<P> {
    pub fn new(
        producer: P,
        targets: Arc<TargetSet>,
        recorder: Arc<MatchRecorder>,
        generated: Arc<AtomicU64>,
    ) -> Self {
        Self {
            producer,
            targets,
            recorder,
            generated,
        }
    }

    /// Loop until the shutdown token is set or an error propagates.
    pub fn run(&self, shutdown: &AtomicBool) -> Result<()> {
        while !shutdown.load(Ordering::Relaxed) {
            self.step()?;
        }
        Ok(())
    }

    /// One iteration: generate, test membership, persist on hit, count.
    /// The match must be durably recorded before the notice is printed.
    pub fn step(&self) -> Result<bool> {
        let keypair = self.producer.produce()?;

        let matched = self.targets.contains(&keypair.address);
        if matched {
            self.recorder.record(&keypair)?;
            announce(&keypair);
        }

        self.generated.fetch_add(1, Ordering::Relaxed);
        Ok(matched)
    }
}

/// Operator-facing match notice.
fn announce(keypair: &Keypair) {
    println!("\n\x1b[1;32m");
    println!("╔═══════════════════════════════════════════════════════╗");
    println!("║                      KEY FOUND                        ║");
    println!("╠═══════════════════════════════════════════════════════╣");
    println!("║ Address: {}", keypair.address);
    println!("║ Secret:  {}", keypair.secret_hex);
    println!("║ Public:  {}", keypair.public_hex);
    println!("╚═══════════════════════════════════════════════════════╝");
    println!("\x1b[0m");
}
