use std::any::Any;
use std::sync::Arc;

use weakcast::{EventHandler, WeakEventManager};

struct Sensor {
    name: &'static str,
}

struct Display {
    label: &'static str,
}

impl Display {
    fn on_reading(&self, sender: Option<&dyn Any>, celsius: Option<&f64>) {
        let source = sender
            .and_then(|s| s.downcast_ref::<Sensor>())
            .map_or("unknown", |s| s.name);
        match celsius {
            Some(celsius) => println!("{}: {celsius}°C (from {source})", self.label),
            None => println!("{}: reading unavailable (from {source})", self.label),
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let manager: WeakEventManager<f64> = WeakEventManager::new();
    let sensor = Sensor { name: "greenhouse" };

    let wall_panel = Arc::new(Display { label: "wall-panel" });
    let wall_handler = EventHandler::bound_subscriber(&wall_panel, Display::on_reading);
    manager.add_event_handler(&wall_handler, "ReadingChanged")?;

    let pocket_app = Arc::new(Display { label: "pocket-app" });
    let pocket_handler = EventHandler::bound_subscriber(&pocket_app, Display::on_reading);
    manager.add_event_handler(&pocket_handler, "ReadingChanged")?;

    println!("-- both displays alive --");
    manager.raise_event(Some(&sensor), Some(&21.5), "ReadingChanged");

    // The pocket app goes away; nobody deregisters it.
    drop(pocket_app);

    println!("-- pocket app dropped, broadcast prunes it --");
    manager.raise_event(Some(&sensor), Some(&23.0), "ReadingChanged");
    println!(
        "subscriptions left on ReadingChanged: {}",
        manager.handler_count("ReadingChanged")
    );

    println!("-- payload may be absent --");
    manager.raise_event(Some(&sensor), None, "ReadingChanged");

    Ok(())
}
