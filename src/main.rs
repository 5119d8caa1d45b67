/*!
 * ReadyPoll - Demonstration Harness
 *
 * Sequences the facility's four operations the way an external driver
 * and caller would:
 * - register interest on a few handles
 * - signal activations from a simulated driver
 * - drain the ready set with a single wait
 */

use std::error::Error;
use std::time::Duration;
use tracing::info;

use readypoll::{init_tracing, EventSet, PollInstance};

fn main() -> Result<(), Box<dyn Error>> {
    // Initialize structured tracing
    init_tracing();

    info!("ReadyPoll demo starting...");
    info!("================================================");

    // Create an instance with room for 10 ready events
    let poll = PollInstance::with_capacity(10)?;
    info!(capacity = poll.capacity(), "poll instance created");

    // Register interest on three handles
    poll.register(1, EventSet::READABLE)?;
    poll.register(2, EventSet::READABLE | EventSet::WRITABLE)?;
    poll.register(3, EventSet::WRITABLE)?;
    info!(interests = poll.interest_count(), "interest registered");

    // Simulated driver reports readiness on two of them
    info!("simulating driver activations");
    poll.activate(1, EventSet::READABLE);
    poll.activate(2, EventSet::WRITABLE);

    // Drain the ready set, pausing briefly first
    let ready = poll.wait(10, Some(Duration::from_millis(100)))?;
    info!(count = ready.len(), "wait drained ready events");

    for event in &ready {
        if event.events.contains(EventSet::READABLE) {
            info!(handle = event.handle, "handle is readable");
        }
        if event.events.contains(EventSet::WRITABLE) {
            info!(handle = event.handle, "handle is writable");
        }
    }

    // Delete a registration; later activations for it are discarded
    poll.unregister(3)?;
    poll.activate(3, EventSet::WRITABLE);
    let leftover = poll.wait(10, None)?;
    info!(count = leftover.len(), "post-delete wait drained nothing");

    let stats = poll.stats();
    info!(stats = %serde_json::to_string(&stats)?, "final stats");
    info!("================================================");
    info!("ReadyPoll demo complete");

    Ok(())
}
