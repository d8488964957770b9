//! Plain-text description of a laid-out panel.

use std::fmt::Write;

use berth_common::{DockState, Rect};
use berth_engine::DockPanel;

fn rect(r: Rect) -> String {
    format!("{},{} {}x{}", r.x, r.y, r.width, r.height)
}

pub fn render(panel: &DockPanel) -> Result<String, std::fmt::Error> {
    let mut out = String::new();
    write_report(panel, &mut out)?;
    Ok(out)
}

fn write_report(panel: &DockPanel, out: &mut String) -> std::fmt::Result {
    let p = panel.portions();
    writeln!(out, "client      {}", rect(panel.client_rect()))?;
    writeln!(out, "documents   {} ({:?})", rect(panel.document_window_bounds()), panel.document_style())?;
    writeln!(
        out,
        "portions    left {} right {} top {} bottom {}",
        p.left, p.right, p.top, p.bottom
    )?;

    writeln!(out, "\ndock windows (back to front)")?;
    let order = panel
        .dock_window_z_order()
        .iter()
        .copied()
        .chain([DockState::Document]);
    for state in order {
        let Some(window) = panel.dock_window(state) else {
            continue;
        };
        if !window.is_visible() {
            continue;
        }
        let panes: Vec<String> = window.visible_panes().panes().map(|p| p.to_string()).collect();
        writeln!(out, "  {:<12} {:<22} {}", format!("{state:?}"), rect(window.bounds()), panes.join(" "))?;
    }

    writeln!(out, "\npanes")?;
    for pane in panel.panes() {
        let tabs: Vec<String> = pane
            .contents()
            .iter()
            .filter_map(|id| panel.content(*id))
            .map(|h| {
                let marker = if pane.active_content() == Some(h.id()) { "*" } else { "" };
                let hidden = if h.is_hidden() { " (hidden)" } else { "" };
                format!("{}{marker}{hidden}", h.tab_text())
            })
            .collect();
        let focus = if panel.active_pane() == Some(pane.id()) { " [active]" } else { "" };
        writeln!(
            out,
            "  {:<8} {:<18} {:<22} {}{focus}",
            pane.id().to_string(),
            format!("{:?}", pane.dock_state()),
            rect(pane.bounds()),
            tabs.join(", ")
        )?;
        if let Some(chrome) = panel.pane_chrome(pane.id()) {
            writeln!(
                out,
                "           caption {}  tabs {}  content {}",
                rect(chrome.caption),
                rect(chrome.tab_strip),
                rect(chrome.content)
            )?;
        }
    }

    if !panel.float_windows().is_empty() {
        writeln!(out, "\nfloat windows (back to front)")?;
        for window in panel.float_windows() {
            let panes: Vec<String> = window.nested_panes().panes().map(|p| p.to_string()).collect();
            writeln!(out, "  {:<8} {:<22} {}", window.id().to_string(), rect(window.bounds()), panes.join(" "))?;
        }
    }

    if let Some(bounds) = panel.auto_hide_window_bounds() {
        writeln!(out, "\nauto-hide window {}", rect(bounds))?;
    }
    let active = panel
        .active_content()
        .and_then(|id| panel.content(id))
        .map(|h| h.tab_text())
        .unwrap_or_else(|| "none".into());
    writeln!(out, "\nactive content: {active}")
}

#[cfg(test)]
mod tests {
    use berth_config::BerthConfig;

    use super::*;
    use crate::demo;
    use crate::options::new_panel;

    #[test]
    fn report_lists_every_pane() {
        let panel = demo::build(new_panel(&BerthConfig::default())).unwrap();
        let report = render(&panel).unwrap();
        for pane in panel.panes() {
            assert!(report.contains(&pane.id().to_string()), "{report}");
        }
        assert!(report.contains("README.md*"));
        assert!(report.contains("float windows"));
        assert!(report.contains("active content: README.md"));
    }
}
