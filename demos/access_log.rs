//! Access log walkthrough.
//!
//! This example shows the full lifecycle of an access log view:
//! 1. Record lifecycle events for a secret
//! 2. Render them with the host's local time zone
//! 3. Drive the surface through back navigation and a task switch
//!
//! Run with: `cargo run --example access_log`

use secret_access_log::{
    AccessLog, Calendar, Clock, EventType, LogEntry, LogEntryFormatter, LogSurface,
    SurfaceAction, Templates,
};

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let calendar = Calendar::system();
    let now = calendar.now_millis();
    let formatter = LogEntryFormatter::new(Templates::english(), calendar);

    let mut log = AccessLog::new();
    log.record(LogEntry::new(EventType::Created, now - 9 * 86_400_000));
    log.record(LogEntry::new(EventType::Synced, now - 26 * 3_600_000));
    log.record(LogEntry::new(EventType::Changed, now - 2 * 3_600_000));
    log.record(LogEntry::new(EventType::Exported, now - 125_000));
    log.record(LogEntry::new(EventType::Viewed, now - 30_000));

    let mut surface = LogSurface::open("demo", "Home Wi-Fi", &log, &formatter);

    println!("=== Initial display ===");
    show(surface.on_foreground_regain());

    println!("\n=== Back navigation, then resume ===");
    surface.on_back();
    println!("result for parent: {:?}", surface.result());
    show(surface.on_foreground_regain());

    println!("\n=== Task switch, then resume ===");
    show(surface.on_foreground_regain());
}

fn show(action: SurfaceAction<'_>) {
    match action {
        SurfaceAction::Show { title, rows } => {
            println!("{}", title);
            for row in rows {
                println!("  {}", row);
            }
        }
        SurfaceAction::Dismiss => println!("surface dismissed; master password required"),
    }
}
