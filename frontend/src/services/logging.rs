use gloo::console;

/// Console logger that tags every line with the component it came from.
/// Pages log their failures here before showing the user-facing message.
pub struct Logger;

impl Logger {
    pub fn debug_with_component(component: &str, message: &str) {
        console::debug!(Self::line(component, message));
    }

    pub fn info_with_component(component: &str, message: &str) {
        console::info!(Self::line(component, message));
    }

    pub fn warn_with_component(component: &str, message: &str) {
        console::warn!(Self::line(component, message));
    }

    pub fn error_with_component(component: &str, message: &str) {
        console::error!(Self::line(component, message));
    }

    fn line(component: &str, message: &str) -> String {
        format!("[{}] {}", component, message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_is_tagged_with_component() {
        assert_eq!(
            Logger::line("wallet", "Failed to load cards"),
            "[wallet] Failed to load cards"
        );
    }
}
