pub mod config_error;
pub mod license_info;
pub mod license_info_panel;
pub mod preview;
