use std::fmt;

use serde_json::Value;

use crate::models::{FlowDesign, Leaf};

/// Error raised by the analysis engine; the message is shown to the user as is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineError(pub String);

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for EngineError {}

impl From<String> for EngineError {
    fn from(message: String) -> Self {
        Self(message)
    }
}

/// One parse run: sources accumulate through `parse`, `check` validates the whole set.
pub trait Parser {
    fn parse(&mut self, filename: &str, body: &str) -> Result<(), EngineError>;
    fn check(self: Box<Self>) -> Result<Value, EngineError>;
}

/// The external parser/analysis engine.
pub trait SystemEngine {
    fn parser(&self) -> Box<dyn Parser>;
    fn gen_flow(&self, system: &Value) -> Result<FlowDesign, EngineError>;
}

/// Feeds every file to a fresh parser and returns the checked system.
pub fn check_files(engine: &dyn SystemEngine, files: &[Leaf]) -> Result<Value, EngineError> {
    let mut parser = engine.parser();
    for file in files {
        parser.parse(&file.name, &file.body)?;
    }
    parser.check()
}
