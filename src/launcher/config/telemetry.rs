use tracing::{debug, info};

use super::{java::ConfigNotice, LauncherConfig};

pub fn log_notice(notice: &ConfigNotice) {
    info!(target: "kc::config", "{notice}");
}

pub fn log_resolved(config: &LauncherConfig) {
    debug!(
        target: "kc::config",
        install_root = %config.install_root.path().display(),
        java = %config.java_command,
        java_options = %config.java_options,
        debug_enabled = config.debug.enabled,
        debug_port = config.debug.port,
        debug_suspend = %config.debug.suspend,
        runtime_options = config.runtime_options.tokens().len(),
        config_args = %config.config_args.joined(),
        "Launcher configuration resolved"
    );
}
