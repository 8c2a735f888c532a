// src/cli/handlers/core_actions.rs

use super::{Handler, commons};
use crate::{
    constants::{CORE_CATEGORY, STATUS_DETAIL},
    core::{context::AppContext, settings},
    models::ServiceConfig,
    system::executor,
};
use anyhow::{Context, Result, anyhow, bail};
use std::sync::Arc;

/// Which configured command of a service to run.
#[derive(Debug, Clone, Copy)]
enum ServiceCommand {
    Start,
    Stop,
    Status,
}

impl ServiceCommand {
    fn pick(self, service: &ServiceConfig) -> Option<&str> {
        match self {
            Self::Start => service.start.as_deref(),
            Self::Stop => service.stop.as_deref(),
            Self::Status => service.status.as_deref(),
        }
    }
}

/// Version, status, language and whole-stack start/stop.
#[derive(Debug)]
pub struct CoreHandler {
    context: Arc<AppContext>,
}

impl CoreHandler {
    /// A handler over the shared context.
    pub fn new(context: Arc<AppContext>) -> Self {
        Self { context }
    }

    /// Factory used by the dispatcher bindings.
    pub fn build(context: &Arc<AppContext>) -> Result<Box<dyn Handler>> {
        Ok(Box::new(Self::new(Arc::clone(context))))
    }

    fn run_service(&self, command: ServiceCommand, service: &ServiceConfig) -> Option<Result<String>> {
        let line = command.pick(service)?;
        let cwd = match self.context.working_dir() {
            Ok(cwd) => cwd,
            Err(e) => return Some(Err(e.into())),
        };
        Some(
            executor::split_command_line(line)
                .and_then(|argv| executor::execute_captured(&argv, cwd.as_deref()))
                .map_err(Into::into),
        )
    }

    fn start_or_stop(&self, command: ServiceCommand, done: &str) -> String {
        let palette = &self.context.palette;
        if self.context.settings.services.is_empty() {
            return palette.warning("No services are configured.");
        }
        self.context
            .settings
            .services
            .iter()
            .map(|(name, service)| match self.run_service(command, service) {
                Some(Ok(_)) => format!("{} {}", name, palette.success(done)),
                Some(Err(e)) => format!("{} {}", name, palette.error(&e.to_string())),
                None => format!("{} {}", name, palette.warning("has no command configured")),
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn status(&self, detail: bool) -> String {
        let palette = &self.context.palette;
        if self.context.settings.services.is_empty() {
            return palette.warning("No services are configured.");
        }
        let width = self
            .context
            .settings
            .services
            .keys()
            .map(String::len)
            .max()
            .unwrap_or(0);

        let mut lines = Vec::new();
        for (name, service) in &self.context.settings.services {
            let label = format!("{:<width$}", name, width = width);
            match self.run_service(ServiceCommand::Status, service) {
                Some(Ok(output)) => {
                    lines.push(format!("{}  {}", label, palette.success("running")));
                    if detail && !output.is_empty() {
                        lines.extend(output.lines().map(|l| format!("    {}", l)));
                    }
                }
                Some(Err(e)) => {
                    lines.push(format!("{}  {}", label, palette.error("stopped")));
                    if detail {
                        lines.push(format!("    {}", e));
                    }
                }
                None => lines.push(format!("{}  {}", label, palette.warning("unknown"))),
            }
        }
        lines.join("\n")
    }

    fn language(&self, args: &[String]) -> Result<String> {
        let Some(code) = args.first() else {
            return Ok(format!("Language: {}", self.context.settings.language));
        };
        let valid = (2..=8).contains(&code.len())
            && code.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            bail!("'{}' is not a valid language code", code);
        }

        let mut updated = self.context.settings.clone();
        updated.language = code.to_lowercase();
        let path = self.context.settings_path();
        settings::save(&path, &updated)
            .with_context(|| format!("Could not save '{}'", path.display()))?;
        Ok(format!("Language preference saved as '{}'.", updated.language))
    }
}

impl Handler for CoreHandler {
    fn execute(&self, action: &str, args: &[String]) -> Option<Result<String>> {
        let result = match action {
            "-v" | "--version" => Ok(format!("stackctl {}", env!("CARGO_PKG_VERSION"))),
            "status" => Ok(self.status(args.first().is_some_and(|a| a == STATUS_DETAIL))),
            "lang" => self.language(args),
            "start" => Ok(self.start_or_stop(ServiceCommand::Start, "started")),
            "stop" => Ok(self.start_or_stop(ServiceCommand::Stop, "stopped")),
            other => Err(anyhow!("Unknown core action '{}'", other)),
        };
        Some(result)
    }

    fn help(&self) -> Option<String> {
        Some(commons::render_category_help(
            &self.context.grammar,
            &self.context.palette,
            CORE_CATEGORY,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        core::{grammar::GrammarStore, settings::load_or_init},
        models::Settings,
    };
    use tempfile::TempDir;

    fn handler(settings: Settings) -> (TempDir, CoreHandler) {
        colored::control::set_override(false);
        let dir = TempDir::new().unwrap();
        let context = AppContext::new(
            dir.path().to_path_buf(),
            settings,
            GrammarStore::bundled().unwrap(),
        );
        (dir, CoreHandler::new(Arc::new(context)))
    }

    fn service(status: &str) -> ServiceConfig {
        ServiceConfig {
            start: Some("true".to_string()),
            stop: None,
            status: Some(status.to_string()),
        }
    }

    #[test]
    fn test_version() {
        let (_dir, handler) = handler(Settings::default());
        let text = handler.execute("--version", &[]).unwrap().unwrap();
        assert_eq!(text, format!("stackctl {}", env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn test_language_get_and_set() {
        let (dir, handler) = handler(Settings::default());
        assert_eq!(handler.execute("lang", &[]).unwrap().unwrap(), "Language: en");

        let text = handler.execute("lang", &["ES".to_string()]).unwrap().unwrap();
        assert_eq!(text, "Language preference saved as 'es'.");
        let saved = load_or_init(&dir.path().join("settings.toml")).unwrap();
        assert_eq!(saved.language, "es");
    }

    #[test]
    fn test_invalid_language_code() {
        let (_dir, handler) = handler(Settings::default());
        assert!(handler.execute("lang", &["e s".to_string()]).unwrap().is_err());
    }

    #[test]
    fn test_no_services_configured() {
        let (_dir, handler) = handler(Settings::default());
        let text = handler.execute("start", &[]).unwrap().unwrap();
        assert_eq!(text, "No services are configured.");
    }

    #[cfg(unix)]
    #[test]
    fn test_status_reports_each_service() {
        let mut settings = Settings::default();
        settings.services.insert("apache".to_string(), service("echo pid 42"));
        settings.services.insert("mysql".to_string(), service("false"));
        let (_dir, handler) = handler(settings);

        let text = handler.execute("status", &[]).unwrap().unwrap();
        assert!(text.contains("apache  running"));
        assert!(text.contains("mysql   stopped"));
        assert!(!text.contains("pid 42"));

        let detail = handler
            .execute("status", &["detail".to_string()])
            .unwrap()
            .unwrap();
        assert!(detail.contains("    pid 42"));
    }

    #[cfg(unix)]
    #[test]
    fn test_stop_without_command_is_reported() {
        let mut settings = Settings::default();
        settings.services.insert("apache".to_string(), service("true"));
        let (_dir, handler) = handler(settings);
        let text = handler.execute("stop", &[]).unwrap().unwrap();
        assert_eq!(text, "apache has no command configured");
    }
}
