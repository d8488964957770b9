//! Subcommand implementations.

use std::path::Path;

use berth_common::{BerthError, DockEvent, EventBus};
use berth_config::BerthConfig;
use berth_engine::{DockCommand, DockPanel, LayoutDocument};
use tracing::{debug, info, warn};

use crate::cli::Command;
use crate::options::new_panel;
use crate::{demo, report};

pub async fn run(command: Command, config: &BerthConfig) -> Result<(), BerthError> {
    match command {
        Command::Demo { save } => {
            let panel = demo::build(new_panel(config))?;
            print!("{}", report::render(&panel)?);
            log_passes(&panel, config);
            if let Some(path) = save {
                save_layout(&panel, &path)?;
            }
            Ok(())
        }
        Command::Inspect { file } => {
            let panel = inspect(&file, config)?;
            print!("{}", report::render(&panel)?);
            Ok(())
        }
        Command::Script { file } => {
            let text = std::fs::read_to_string(&file)?;
            let commands: Vec<DockCommand> = serde_json::from_str(&text)?;
            let mut panel = demo::build(new_panel(config))?;
            panel.drain_events();
            let failed = apply(&mut panel, commands);
            print!("{}", report::render(&panel)?);
            log_passes(&panel, config);

            println!("\nevents");
            for event in forward_events(panel.drain_events()).await {
                println!("  {}", serde_json::to_string(&event)?);
            }
            if failed > 0 {
                warn!(failed, "some commands were rejected");
            }
            Ok(())
        }
        Command::Config => {
            print!("{}", berth_config::config_to_toml(config)?);
            Ok(())
        }
    }
}

fn save_layout(panel: &DockPanel, path: &Path) -> Result<(), BerthError> {
    let json = panel.save_layout().to_json()?;
    std::fs::write(path, json)?;
    info!(path = %path.display(), "layout saved");
    Ok(())
}

/// Load the layout in `path` into a fresh panel with placeholder contents.
pub fn inspect(path: &Path, config: &BerthConfig) -> Result<DockPanel, BerthError> {
    let text = std::fs::read_to_string(path)?;
    let doc = LayoutDocument::from_json(&text)?;
    let mut panel = new_panel(config);
    panel.set_client_rect(demo::CLIENT);
    let outcome = panel.load_layout(&doc, demo::placeholder)?;
    for persist in &outcome.skipped {
        warn!(persist = %persist, "content skipped");
    }
    Ok(panel)
}

/// Apply every command, logging the rejected ones. Returns how many failed.
pub fn apply(panel: &mut DockPanel, commands: Vec<DockCommand>) -> usize {
    let mut failed = 0;
    for cmd in commands {
        let label = format!("{cmd:?}");
        if let Err(e) = panel.execute(cmd) {
            warn!(command = %label, "command rejected: {e}");
            failed += 1;
        }
    }
    failed
}

/// Pass drained events through an [`EventBus`] and collect what a
/// subscriber receives.
async fn forward_events(events: Vec<DockEvent>) -> Vec<DockEvent> {
    let bus = EventBus::new(events.len().max(1));
    let mut rx = bus.subscribe();
    let collector = tokio::spawn(async move {
        let mut received = Vec::new();
        while let Ok(event) = rx.recv().await {
            received.push(event);
        }
        received
    });
    bus.publish_all(events);
    drop(bus);
    collector.await.unwrap_or_default()
}

fn log_passes(panel: &DockPanel, config: &BerthConfig) {
    if config.logging.log_layout_passes {
        debug!(passes = panel.layout_passes(), "layout passes");
    }
}
