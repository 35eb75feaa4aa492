// Public modules
pub mod defaults;
pub mod editor;
pub mod env;
pub mod error;
pub mod paths;
pub mod prompt;
pub mod timing;
pub mod tty;

// Re-export common types for convenience
pub use env::{EnvStore, MemoryEnv, SystemEnv, VarPrompt};
pub use error::{Error, ErrorCode, Result};
pub use prompt::{LineSource, Prompter, ScriptedSource, TerminalSource, UserResponse};
