//! Card template loading.
//!
//! Templates are Jinja documents rendered with `minijinja`. Undefined
//! variables render as empty strings (the default lenient mode), and
//! auto-escaping is off because `svg` escapes values when it builds the
//! context.

use minijinja::{AutoEscape, Environment};

pub const CARD_TEMPLATE: &str = "card.svg";

/// Compile `source` as the card template. Syntax errors surface here, before
/// anything is fetched.
pub fn card_environment(source: &str) -> Result<Environment<'_>, minijinja::Error> {
    let mut env = Environment::new();
    env.set_auto_escape_callback(|_| AutoEscape::None);
    env.set_keep_trailing_newline(true);
    env.add_template(CARD_TEMPLATE, source)?;
    Ok(env)
}
