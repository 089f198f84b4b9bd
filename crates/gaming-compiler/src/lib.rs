//! Gaming Compiler
//!
//! Translates the gaming extension's elements and attributes into the
//! tuples that register a game with Windows Game Explorer.
//!
//! # Architecture
//!
//! ```text
//! File/Game ──► GamingCompiler ──► tasks (roots, task directories)
//!                    │                 └──► identifiers::synthesize
//!                    ├──► Shortcut / WixGameExplorer tuples
//!                    └──► SupportLinkEmitter (host supplied)
//!
//! Extension/@IsRichSavedGame ──► rich_saved_game ──► 4 Registry tuples
//! ```
//!
//! Diagnostics accumulate in `Messaging`. Primary tuples are only emitted
//! while the whole compilation is still error free, and
//! `GamingCompiler::finish` refuses to commit a section once any error has
//! been recorded.
//!
//! # Example
//!
//! ```
//! use gaming_compiler::{ContextValues, GamingCompiler};
//! use gaming_types::{Element, IntermediateSection};
//!
//! let mut compiler = GamingCompiler::default();
//! let mut section = IntermediateSection::new("product");
//! let context = ContextValues::new()
//!     .with("FileId", "GameExe")
//!     .with("ComponentId", "GameComp")
//!     .with("DirectoryId", "INSTALLFOLDER");
//! let game = Element::gaming("Game")
//!     .with_attribute("Id", "{12345678-1234-5678-90AB-1234567890AB}")
//!     .with_child(Element::gaming("PlayTask").with_attribute("Name", "Play"));
//!
//! compiler.parse_element(&mut section, &Element::local("File"), &game, &context);
//! let output = compiler.finish(section).unwrap();
//! assert_eq!(output.section.shortcuts().count(), 1);
//! ```

#![deny(unsafe_code)]

pub mod attributes;
pub mod compiler;
pub mod config;
pub mod context;
pub mod error;
pub mod extension;
pub mod identifiers;
pub mod messaging;
pub mod rich_saved_game;
mod rows;
pub mod short_names;
pub mod tasks;

pub use compiler::{CompilationFailure, CompilationOutput, GamingCompiler, SCHEDULE_GAME_EXPLORER};
pub use config::CompilerConfig;
pub use context::{ContextValues, FileContext};
pub use error::{ErrorKind, GamingError, GamingResult, IdentifierViolation};
pub use extension::{ExtensionHost, NoExtensions, SupportLink, SupportLinkEmitter};
pub use messaging::{Diagnostic, MessageLevel, Messaging};
