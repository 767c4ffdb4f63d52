//! Food Explorer - headless client shell
//!
//! Boots the app, loads the home catalog and logs what the home page would
//! show. A UI front end drives the same `App` through `process_events`.

use std::time::Duration;
use tracing::{info, warn};

use foodexplorer_app::App;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let mut app = App::bootstrap()?;
    app.start()?;

    let timeout = Duration::from_secs(app.config().api.timeout_seconds);
    if tokio::time::timeout(timeout, app.next_event()).await.is_err() {
        warn!("Home catalog did not load within {:?}", timeout);
    }

    let home = &mut app.home_vm;
    for (category, dishes) in home.carousels() {
        info!("{}: {} dishes", category, dishes.len());
    }
    if let Some(message) = home.empty_message() {
        info!("{}", message);
    }
    for notification in home.notifications.drain() {
        warn!("{}", notification.message);
    }

    Ok(())
}
