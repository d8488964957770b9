//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# Berth Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[panel]
# Portions below 1 are fractions of the dock area, 1 and above are pixels.
# dock_left_portion = 0.25
# dock_right_portion = 0.25
# dock_top_portion = 0.25
# dock_bottom_portion = 0.25
# default_float_window_width = 300    # 50-4000
# default_float_window_height = 300   # 50-4000
# allow_end_user_docking = true
# allow_end_user_nested_docking = true
# document_style = "docking-mdi"      # docking-mdi, docking-window, docking-sdi, system-mdi
# document_tab_strip_location = "top" # top, bottom
# show_auto_hide_content_on_hover = true

[measures]
# splitter_size = 4                   # 1-16
# dock_padding = 0                    # 0-64
# auto_hide_strip_height = 22
# caption_height = 18
# tab_strip_height = 22
# tab_min_width = 32
# tab_max_width = 200
# tab_char_width = 7
# float_caption_height = 22
# min_pane_size = 24                  # 8-200
# pane_indicator_size = 88
# panel_indicator_size = 32
# indicator_margin = 10

[behavior]
# float_splitter_fix = true
# activate_on_dock_fix = true
# content_order_fix = true
# select_closest_on_close = true

[logging]
# level = "berth=info"
# log_layout_passes = false
"##
    .to_string()
}
