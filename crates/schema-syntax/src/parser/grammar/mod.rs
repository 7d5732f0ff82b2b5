//! Grammar rules for the schema language.
//!
//! This module contains the grammar rules organized by category:
//!
//! - `items.rs` - Top-level dispatch, package/import/option statements and
//!   the enum, type and component blocks
//! - `members.rs` - Type names and the statements inside blocks
//! - `annotations.rs` - Annotations and their value grammar
//!
//! Keywords are ordinary identifiers; productions compare identifier text.

mod annotations;
mod items;
mod members;

pub(crate) const KW_PACKAGE: &str = "package";
pub(crate) const KW_IMPORT: &str = "import";
pub(crate) const KW_OPTION: &str = "option";
pub(crate) const KW_ENUM: &str = "enum";
pub(crate) const KW_TYPE: &str = "type";
pub(crate) const KW_COMPONENT: &str = "component";
pub(crate) const KW_ID: &str = "id";
pub(crate) const KW_DATA: &str = "data";
pub(crate) const KW_EVENT: &str = "event";
pub(crate) const KW_COMMAND: &str = "command";
