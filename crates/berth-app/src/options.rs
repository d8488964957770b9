//! Mapping from the config file to engine options and theme.

use berth_common::Size;
use berth_config::schema::MeasuresConfig;
use berth_config::BerthConfig;
use berth_engine::options::{BehaviorToggles, DockOptions, DockPortions};
use berth_engine::theme::{DefaultCaption, DefaultIndicators, DefaultTabStrip, ThemeMeasures};
use berth_engine::{DockPanel, Theme};

pub fn dock_options(config: &BerthConfig) -> DockOptions {
    let panel = &config.panel;
    let behavior = &config.behavior;
    DockOptions {
        portions: DockPortions {
            left: panel.dock_left_portion,
            right: panel.dock_right_portion,
            top: panel.dock_top_portion,
            bottom: panel.dock_bottom_portion,
        },
        default_float_window_size: Size::new(
            f64::from(panel.default_float_window_width),
            f64::from(panel.default_float_window_height),
        ),
        allow_end_user_docking: panel.allow_end_user_docking,
        allow_end_user_nested_docking: panel.allow_end_user_nested_docking,
        document_style: panel.document_style,
        document_tab_strip_location: panel.document_tab_strip_location,
        show_auto_hide_content_on_hover: panel.show_auto_hide_content_on_hover,
        behavior: BehaviorToggles {
            float_splitter_fix: behavior.float_splitter_fix,
            activate_on_dock_fix: behavior.activate_on_dock_fix,
            content_order_fix: behavior.content_order_fix,
            select_closest_on_close: behavior.select_closest_on_close,
        },
    }
}

pub fn theme(measures: &MeasuresConfig) -> Theme {
    let px = f64::from;
    Theme::new(
        ThemeMeasures {
            splitter_size: px(measures.splitter_size),
            dock_padding: px(measures.dock_padding),
            auto_hide_strip_height: px(measures.auto_hide_strip_height),
            float_caption_height: px(measures.float_caption_height),
            min_pane_size: px(measures.min_pane_size),
        },
        DefaultCaption {
            height: px(measures.caption_height),
        },
        DefaultTabStrip {
            height: px(measures.tab_strip_height),
            min_tab_width: px(measures.tab_min_width),
            max_tab_width: px(measures.tab_max_width),
            char_width: px(measures.tab_char_width),
        },
        DefaultIndicators {
            pane_size: px(measures.pane_indicator_size),
            panel_size: px(measures.panel_indicator_size),
            margin: px(measures.indicator_margin),
        },
    )
}

/// A panel configured from `config`, without a client rectangle.
pub fn new_panel(config: &BerthConfig) -> DockPanel {
    DockPanel::new(dock_options(config), theme(&config.measures))
}
