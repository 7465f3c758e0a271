// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::fmt;
use std::sync::Mutex;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Success,
    Warning,
    Error,
    Unauthorized,
}

impl fmt::Display for NoticeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            NoticeKind::Info => "info",
            NoticeKind::Success => "ok",
            NoticeKind::Warning => "warning",
            NoticeKind::Error => "error",
            NoticeKind::Unauthorized => "unauthorized",
        };
        f.write_str(s)
    }
}

/// User-facing notification channel, passed explicitly to command handlers.
pub trait Notifier: Send + Sync {
    fn notify(&self, kind: NoticeKind, message: &str);
}

/// Writes notices to stderr so stdout stays clean for `--json` output.
#[derive(Debug, Default)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, kind: NoticeKind, message: &str) {
        match kind {
            NoticeKind::Error | NoticeKind::Unauthorized => {
                tracing::error!(%kind, "{}", message)
            }
            NoticeKind::Warning => tracing::warn!("{}", message),
            _ => tracing::debug!(%kind, "{}", message),
        }
        eprintln!("[{}] {}", kind, message);
    }
}

#[derive(Debug, Default)]
pub struct MemoryNotifier {
    notices: Mutex<Vec<(NoticeKind, String)>>,
}

impl MemoryNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notices(&self) -> Vec<(NoticeKind, String)> {
        self.notices
            .lock()
            .map(|n| n.clone())
            .unwrap_or_default()
    }

    pub fn kinds(&self) -> Vec<NoticeKind> {
        self.notices().into_iter().map(|(k, _)| k).collect()
    }
}

impl Notifier for MemoryNotifier {
    fn notify(&self, kind: NoticeKind, message: &str) {
        if let Ok(mut n) = self.notices.lock() {
            n.push((kind, message.to_string()));
        }
    }
}
