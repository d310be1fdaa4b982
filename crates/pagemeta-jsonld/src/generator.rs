//! Generator factory with lifecycle hooks.
//!
//! A [`Generator`] binds a fixed `(type, id, priority)` identity to a
//! type-specific transform and runs every invocation through the same
//! lifecycle: absent-data check, `before_generate` hook, transform with fault
//! containment, `after_generate` hook, advisory `validate` hook, block wrap.
//! A transform fault never escapes the invocation and never affects sibling
//! generators in the same composition pass.

use std::sync::Arc;

use pagemeta_core::diag::{Diagnostic, DiagnosticSink, TracingSink};
use pagemeta_core::SiteConfig;
use serde_json::Value;
use thiserror::Error;

use crate::block::Block;

/// Fault raised by a transform during generation.
///
/// Contained at the generator boundary: reported to the diagnostic sink and
/// surfaced as a suppressed generation.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct TransformError(String);

impl TransformError {
    /// Create a new transform fault.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// Transform outcome.
///
/// `Ok(Some(payload))` emits a block; `Ok(None)` suppresses generation (a
/// legitimate outcome, e.g. a required input field is absent); `Err` is a
/// contained fault.
pub type TransformResult = Result<Option<Value>, TransformError>;

type TransformFn = dyn Fn(&Value, &SiteConfig) -> TransformResult + Send + Sync;

/// Optional per-call lifecycle callbacks.
///
/// Supplied by value for one generation call; generators never store hooks.
#[derive(Default)]
pub struct Hooks<'a> {
    /// Transforms the input record before the type-specific transform runs.
    pub before_generate: Option<&'a dyn Fn(Value) -> Value>,

    /// Transforms the produced payload before it is wrapped into a block.
    pub after_generate: Option<&'a dyn Fn(Value) -> Value>,

    /// Inspects the final payload. A negative verdict is reported as a
    /// diagnostic but does not suppress emission.
    pub validate: Option<&'a dyn Fn(&Value) -> bool>,
}

impl Hooks<'_> {
    /// Hooks record with no callbacks set.
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }
}

/// A bound generator turning one content record into zero-or-one [`Block`].
pub struct Generator {
    type_name: &'static str,
    id: &'static str,
    priority: i32,
    transform: Box<TransformFn>,
    sink: Arc<dyn DiagnosticSink>,
}

impl std::fmt::Debug for Generator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Generator")
            .field("type_name", &self.type_name)
            .field("id", &self.id)
            .field("priority", &self.priority)
            .finish_non_exhaustive()
    }
}

impl Generator {
    /// Create a generator bound to a fixed identity.
    #[must_use]
    pub fn new(
        type_name: &'static str,
        id: &'static str,
        priority: i32,
        transform: impl Fn(&Value, &SiteConfig) -> TransformResult + Send + Sync + 'static,
    ) -> Self {
        Self {
            type_name,
            id,
            priority,
            transform: Box::new(transform),
            sink: Arc::new(TracingSink),
        }
    }

    /// Replace the diagnostic sink.
    #[must_use]
    pub fn with_sink(mut self, sink: Arc<dyn DiagnosticSink>) -> Self {
        self.sink = sink;
        self
    }

    /// Schema.org type this generator emits.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Block identifier this generator emits.
    #[must_use]
    pub fn id(&self) -> &'static str {
        self.id
    }

    /// Ordering priority of emitted blocks.
    #[must_use]
    pub fn priority(&self) -> i32 {
        self.priority
    }

    /// Run one generation call.
    ///
    /// Returns `None` when input is absent, the transform suppresses output,
    /// or the transform faults. Faults are reported to the sink and contained
    /// here.
    pub fn generate(
        &self,
        data: Option<&Value>,
        config: &SiteConfig,
        hooks: &Hooks<'_>,
    ) -> Option<Block> {
        let Some(data) = data.filter(|value| !value.is_null()) else {
            self.sink
                .report(Diagnostic::warning(self.type_name, "no data provided"));
            return None;
        };

        let working = match hooks.before_generate {
            Some(before) => before(data.clone()),
            None => data.clone(),
        };

        let payload = match (self.transform)(&working, config) {
            Ok(Some(payload)) => payload,
            Ok(None) => {
                self.sink.report(Diagnostic::warning(
                    self.type_name,
                    "generation suppressed: no applicable output for this input",
                ));
                return None;
            }
            Err(fault) => {
                self.sink.report(Diagnostic::error(
                    self.type_name,
                    format!("generation failed: {fault}"),
                ));
                return None;
            }
        };

        let final_payload = match hooks.after_generate {
            Some(after) => after(payload),
            None => payload,
        };

        if let Some(validate) = hooks.validate {
            if !validate(&final_payload) {
                self.sink.report(Diagnostic::warning(
                    self.type_name,
                    "payload failed hook validation",
                ));
            }
        }

        Some(Block::new(
            self.id,
            self.priority,
            self.type_name,
            final_payload,
        ))
    }
}

#[cfg(test)]
mod tests {
    use pagemeta_core::MemorySink;
    use serde_json::json;

    use super::*;

    fn test_config() -> SiteConfig {
        SiteConfig::new("https://example.edu")
    }

    fn echo_generator() -> Generator {
        Generator::new("Thing", "thing", 5, |data, _config| {
            Ok(Some(data.clone()))
        })
    }

    #[test]
    fn test_generates_block() {
        let generator = echo_generator();
        let data = json!({"name": "Jane"});

        let block = generator
            .generate(Some(&data), &test_config(), &Hooks::none())
            .expect("block");

        assert_eq!(block.id, "thing");
        assert_eq!(block.priority, 5);
        assert_eq!(block.type_name, "Thing");
        assert_eq!(block.data, data);
    }

    #[test]
    fn test_absent_data_suppresses_with_diagnostic() {
        let sink = Arc::new(MemorySink::new());
        let generator = echo_generator().with_sink(sink.clone());

        assert!(generator
            .generate(None, &test_config(), &Hooks::none())
            .is_none());
        assert!(generator
            .generate(Some(&Value::Null), &test_config(), &Hooks::none())
            .is_none());

        let diagnostics = sink.take();
        assert_eq!(diagnostics.len(), 2);
        assert!(diagnostics[0].message.contains("no data provided"));
    }

    #[test]
    fn test_transform_suppression_is_not_a_fault() {
        let sink = Arc::new(MemorySink::new());
        let generator =
            Generator::new("Thing", "thing", 5, |_data, _config| Ok(None))
                .with_sink(sink.clone());

        let result = generator.generate(Some(&json!({})), &test_config(), &Hooks::none());

        assert!(result.is_none());
        let diagnostics = sink.take();
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(
            diagnostics[0].severity,
            pagemeta_core::Severity::Warning
        );
    }

    #[test]
    fn test_transform_fault_is_contained() {
        let sink = Arc::new(MemorySink::new());
        let faulty = Generator::new("Thing", "thing", 5, |_data, _config| {
            Err(TransformError::new("boom"))
        })
        .with_sink(sink.clone());

        let result = faulty.generate(Some(&json!({})), &test_config(), &Hooks::none());
        assert!(result.is_none());

        // A sibling generator in the same pass is unaffected
        let sibling = echo_generator();
        let block = sibling.generate(Some(&json!({"ok": true})), &test_config(), &Hooks::none());
        assert!(block.is_some());

        let diagnostics = sink.take();
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].severity, pagemeta_core::Severity::Error);
        assert!(diagnostics[0].message.contains("boom"));
    }

    #[test]
    fn test_before_generate_hook() {
        let generator = echo_generator();
        let before = |mut data: Value| {
            data["injected"] = json!(true);
            data
        };
        let hooks = Hooks {
            before_generate: Some(&before),
            ..Hooks::none()
        };

        let block = generator
            .generate(Some(&json!({})), &test_config(), &hooks)
            .expect("block");

        assert_eq!(block.data["injected"], json!(true));
    }

    #[test]
    fn test_after_generate_hook() {
        let generator = echo_generator();
        let after = |mut payload: Value| {
            payload["stamped"] = json!("yes");
            payload
        };
        let hooks = Hooks {
            after_generate: Some(&after),
            ..Hooks::none()
        };

        let block = generator
            .generate(Some(&json!({"name": "Jane"})), &test_config(), &hooks)
            .expect("block");

        assert_eq!(block.data["stamped"], json!("yes"));
        assert_eq!(block.data["name"], json!("Jane"));
    }

    #[test]
    fn test_validate_hook_is_advisory() {
        let sink = Arc::new(MemorySink::new());
        let generator = echo_generator().with_sink(sink.clone());
        let reject_all = |_payload: &Value| false;
        let hooks = Hooks {
            validate: Some(&reject_all),
            ..Hooks::none()
        };

        // Emission proceeds despite the negative verdict
        let block = generator.generate(Some(&json!({})), &test_config(), &hooks);
        assert!(block.is_some());

        let diagnostics = sink.take();
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].message.contains("hook validation"));
    }
}
