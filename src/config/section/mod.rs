//! Configuration section definitions.
//!
//! Each module corresponds to a top-level key in `windcfg.toml`:
//!
//! | Module    | Key        | Purpose                                 |
//! |-----------|------------|-----------------------------------------|
//! | `content` | `content`  | Globs of files scanned for class names  |
//! | `theme`   | `theme`    | Token overrides and `extend`            |
//! | `plugins` | `plugins`  | Ordered generator plugins               |

mod content;
mod plugins;
pub mod theme;

pub use content::ContentGlobs;
pub use plugins::{PluginRef, validate_plugins};
pub use theme::{ColorValue, FontStack, ThemeSection, ThemeTokens};
