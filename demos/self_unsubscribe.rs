use std::sync::Arc;

use parking_lot::Mutex;
use weakcast::{EventHandler, LogWriter, NoPayload, WeakEventManager};

// A handler that removes itself during its first invocation, using a weak
// handle so the subscription list never owns its own registry.
fn main() -> anyhow::Result<()> {
    env_logger::init();

    let manager: Arc<WeakEventManager> = Arc::new(
        WeakEventManager::builder()
            .with_inspector(Arc::new(LogWriter))
            .build(),
    );
    let handle = manager.handle();

    let slot: Arc<Mutex<Option<EventHandler<NoPayload>>>> = Arc::new(Mutex::new(None));
    let one_shot = {
        let handle = handle.clone();
        let slot = Arc::clone(&slot);
        EventHandler::subscriber(move |_sender, _payload: Option<&NoPayload>| {
            println!("one-shot: fired, unsubscribing myself");
            if let Some(me) = slot.lock().take() {
                handle
                    .remove_event_handler(&me, "Saved")
                    .expect("registry is alive for the whole demo");
            }
        })
    };
    slot.lock().replace(one_shot.clone());

    let steady: EventHandler<NoPayload> =
        EventHandler::subscriber(|_sender, _payload| println!("steady: fired"));

    manager.add_event_handler(&one_shot, "Saved")?;
    manager.add_event_handler(&steady, "Saved")?;

    println!("-- first save --");
    manager.raise(None, "Saved");

    println!("-- second save --");
    manager.raise(None, "Saved");

    Ok(())
}
