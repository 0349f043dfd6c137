//! User-facing failure notifications.

use rocket_commerce::CartError;
use std::fmt;

/// The cart operation a failure belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Add,
    Remove,
    Update,
}

impl Operation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Remove => "remove",
            Operation::Update => "update",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One-way channel for user-facing error messages.
///
/// Fire and forget: implementations must not fail back into the store.
pub trait NotificationSink: Send + Sync {
    fn notify_error(&self, message: &str);
}

/// Sink that only logs, for headless use.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl NotificationSink for LogSink {
    fn notify_error(&self, message: &str) {
        tracing::error!(message, "cart notification");
    }
}

/// Message shown to the shopper when `op` fails with `err`.
///
/// Stock failures get their own message; everything else collapses into a
/// generic per-operation message.
pub fn user_message(op: Operation, err: &CartError) -> &'static str {
    if err.is_stock_exceeded() {
        return "Quantidade solicitada fora de estoque";
    }
    match op {
        Operation::Add => "Erro na adição do produto",
        Operation::Remove => "Erro na remoção do produto",
        Operation::Update => "Erro na alteração de quantidade do produto",
    }
}
