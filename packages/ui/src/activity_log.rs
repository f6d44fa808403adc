use dioxus::prelude::*;

/// Entries beyond this are dropped oldest-first.
pub const MAX_ENTRIES: usize = 200;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Success,
    Warning,
    Error,
}

impl LogLevel {
    pub fn label(self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warning => "warning",
            LogLevel::Success => "done",
            LogLevel::Info => "info",
        }
    }

    pub fn is_problem(self) -> bool {
        matches!(self, LogLevel::Error | LogLevel::Warning)
    }

    pub fn css_class(self) -> &'static str {
        match self {
            LogLevel::Error => "activity-log-entry error",
            LogLevel::Warning => "activity-log-entry warning",
            LogLevel::Success => "activity-log-entry success",
            LogLevel::Info => "activity-log-entry info",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct LogEntry {
    /// Unique within one log, used to dismiss single entries.
    pub id: u64,
    pub timestamp: String,
    pub level: LogLevel,
    pub message: String,
}

/// Console-visible record of what the admin did and what failed.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ActivityLog {
    pub entries: Vec<LogEntry>,
    pub visible: bool,
    next_id: u64,
}

/// Which entries the panel lists.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LogFilter {
    #[default]
    All,
    Problems,
}

impl ActivityLog {
    pub fn push(&mut self, level: LogLevel, message: impl Into<String>, timestamp: String) {
        self.next_id += 1;
        self.entries.push(LogEntry {
            id: self.next_id,
            timestamp,
            level,
            message: message.into(),
        });
        if self.entries.len() > MAX_ENTRIES {
            let overflow = self.entries.len() - MAX_ENTRIES;
            self.entries.drain(..overflow);
        }
        // Failures open the panel so they are never silent.
        if level == LogLevel::Error {
            self.visible = true;
        }
    }

    pub fn has_errors(&self) -> bool {
        self.count(LogLevel::Error) > 0
    }

    pub fn count(&self, level: LogLevel) -> usize {
        self.entries.iter().filter(|e| e.level == level).count()
    }

    /// Entries matching `filter`, newest first.
    pub fn listed(&self, filter: LogFilter) -> Vec<LogEntry> {
        self.entries
            .iter()
            .rev()
            .filter(|e| filter == LogFilter::All || e.level.is_problem())
            .cloned()
            .collect()
    }

    pub fn dismiss(&mut self, id: u64) {
        self.entries.retain(|e| e.id != id);
        if self.entries.is_empty() {
            self.visible = false;
        }
    }
}

pub fn use_activity_log() -> Signal<ActivityLog> {
    use_context::<Signal<ActivityLog>>()
}

pub fn log_activity(log: &mut Signal<ActivityLog>, level: LogLevel, message: &str) {
    log.write().push(level, message, current_time());
}

#[cfg(target_arch = "wasm32")]
fn current_time() -> String {
    let date = js_sys::Date::new_0();
    let h = date.get_hours();
    let m = date.get_minutes();
    let s = date.get_seconds();
    format!("{h:02}:{m:02}:{s:02}")
}

#[cfg(not(target_arch = "wasm32"))]
fn current_time() -> String {
    "00:00:00".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_errors_open_the_panel() {
        let mut log = ActivityLog::default();
        log.push(LogLevel::Success, "Saved", "10:00:00".into());
        assert!(!log.visible);
        assert!(!log.has_errors());

        log.push(LogLevel::Error, "Delete failed", "10:00:01".into());
        assert!(log.visible);
        assert!(log.has_errors());
        assert_eq!(log.entries[1].message, "Delete failed");
    }

    #[test]
    fn test_problems_filter_and_dismiss() {
        let mut log = ActivityLog::default();
        log.push(LogLevel::Success, "Review created", String::new());
        log.push(LogLevel::Warning, "Session expired", String::new());
        log.push(LogLevel::Error, "Deleting project failed", String::new());

        let problems = log.listed(LogFilter::Problems);
        let messages: Vec<&str> = problems.iter().map(|e| e.message.as_str()).collect();
        assert_eq!(messages, vec!["Deleting project failed", "Session expired"]);
        assert_eq!(log.listed(LogFilter::All).len(), 3);
        assert_eq!(log.count(LogLevel::Warning), 1);

        log.dismiss(problems[0].id);
        assert!(!log.has_errors());
        assert!(log.visible);

        let remaining: Vec<u64> = log.entries.iter().map(|e| e.id).collect();
        for id in remaining {
            log.dismiss(id);
        }
        assert!(log.entries.is_empty());
        assert!(!log.visible);
    }

    #[test]
    fn test_oldest_entries_are_dropped() {
        let mut log = ActivityLog::default();
        for i in 0..MAX_ENTRIES + 5 {
            log.push(LogLevel::Info, format!("entry {i}"), String::new());
        }
        assert_eq!(log.entries.len(), MAX_ENTRIES);
        assert_eq!(log.entries[0].message, "entry 5");
    }
}
