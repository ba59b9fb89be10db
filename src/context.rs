//! Service context bundling all port trait objects.

use crate::adapters::live::process::LiveProcessRunner;
use crate::adapters::live::template::LiveTemplateEngine;
use crate::ports::process::ProcessRunner;
use crate::ports::template::TemplateEngine;

/// Bundles all port trait objects into a single context.
///
/// Each field provides access to one external boundary. Tests wire up
/// scripted adapters by constructing the struct directly.
pub struct ServiceContext {
    /// Template engine for rendering script templates.
    pub template: Box<dyn TemplateEngine>,
    /// Process runner for executing rendered scripts.
    pub runner: Box<dyn ProcessRunner>,
}

impl ServiceContext {
    /// Creates a live context with real adapters.
    #[must_use]
    pub fn live() -> Self {
        Self { template: Box::new(LiveTemplateEngine), runner: Box::new(LiveProcessRunner) }
    }
}
