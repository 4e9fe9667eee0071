// ETHLOTTO - Ethereum address collision scanner
// Generates random keypairs and tests each derived address against a
// fixed target list. Matches are appended to the match log.

use std::process;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use std::thread;

use clap::Parser;

use ethlotto::cli::Args;
use ethlotto::keygen::RandomKeyProducer;
use ethlotto::recorder::MatchRecorder;
use ethlotto::stats::ThroughputReporter;
use ethlotto::targets::TargetSet;
use ethlotto::worker::Worker;

const TARGETS_FILE: &str = "address.txt";
const MATCHES_FILE: &str = "found.txt";

fn main() {
    println!("\n\x1b[1;36m╔═══════════════════════════════════════════════════════╗");
    println!("║      ETHLOTTO  •  Ethereum Address Collider           ║");
    println!("╚═══════════════════════════════════════════════════════╝\x1b[0m\n");

    let args = Args::parse();
    let worker_count = args.worker_count();
    println!("[▶] Workers = {}", worker_count);

    let targets = match TargetSet::load(TARGETS_FILE) {
        Ok(t) => {
            println!("[✓] Loaded {} target addresses", t.len());
            Arc::new(t)
        }
        Err(e) => {
            eprintln!("[✗] {}", e);
            process::exit(1);
        }
    };

    let recorder = Arc::new(MatchRecorder::new(MATCHES_FILE));
    let generated = Arc::new(AtomicU64::new(0));
    let shutdown = Arc::new(AtomicBool::new(false));

    let shutdown_sig = shutdown.clone();
    ctrlc::set_handler(move || {
        println!("\n[!] Stopping...");
        shutdown_sig.store(true, Ordering::SeqCst);
    })
    .ok();

    println!("[▶] Scanning... (Ctrl+C to stop)\n");

    let mut workers = Vec::with_capacity(worker_count);
    for _ in 0..worker_count {
        let worker = Worker::new(
            RandomKeyProducer,
            targets.clone(),
            recorder.clone(),
            generated.clone(),
        );
        let shutdown = shutdown.clone();
        workers.push(thread::spawn(move || {
            // A single silently dead worker would quietly shed throughput,
            // so any worker error takes the whole process down.
            if let Err(e) = worker.run(&shutdown) {
                eprintln!("[✗] Worker died: {}", e);
                process::exit(1);
            }
        }));
    }

    let mut reporter = ThroughputReporter::new(generated.clone());
    let reporter_shutdown = shutdown.clone();
    let reporter_handle = thread::spawn(move || {
        reporter.run(&reporter_shutdown);
        reporter.total()
    });

    for handle in workers {
        handle.join().ok();
    }
    let total = reporter_handle.join().unwrap_or(0);
    println!("\n[Done] {} keypairs tested", total);
}
