//! Bridge from `tracing` events into the bot log
//!
//! Lets code that logs through `tracing::warn!` and friends land in the same
//! daily file, with the same console routing, as direct logger calls.

use std::fmt::{self, Write as _};
use std::sync::Arc;

use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::Layer;

use super::{BotLogger, Severity, SourceLocation};

/// Collects an event's message and any extra fields into one string
#[derive(Default)]
struct MessageVisitor {
    message: String,
    fields: String,
}

impl MessageVisitor {
    fn finish(self) -> String {
        match (self.message.is_empty(), self.fields.is_empty()) {
            (_, true) => self.message,
            (true, false) => self.fields,
            (false, false) => format!("{} {}", self.message, self.fields),
        }
    }
}

impl Visit for MessageVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message.push_str(value);
        } else {
            self.record_debug(field, &value);
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            let _ = write!(self.message, "{:?}", value);
        } else {
            if !self.fields.is_empty() {
                self.fields.push(' ');
            }
            let _ = write!(self.fields, "{}={:?}", field.name(), value);
        }
    }
}

/// `tracing_subscriber` layer forwarding events to a [`BotLogger`]
///
/// `TRACE` events are dropped.
pub struct BotLogLayer {
    logger: Arc<BotLogger>,
}

impl BotLogLayer {
    pub fn new(logger: Arc<BotLogger>) -> Self {
        Self { logger }
    }
}

impl<S> Layer<S> for BotLogLayer
where
    S: Subscriber,
{
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let Some(severity) = Severity::from_tracing(metadata.level()) else {
            return;
        };

        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);
        let message = visitor.finish();

        let location = SourceLocation::new(
            metadata.file().unwrap_or(metadata.target()),
            metadata.line().unwrap_or(0),
        );
        self.logger
            .log_at(severity, location, format_args!("{}", message));
    }
}
