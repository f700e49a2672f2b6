//! Serialize the key map back into configuration directives

use super::context::contexts;
use super::defaults::name_of;
use super::keymap::KeyMap;
use super::macros::MACRO_SEPARATOR;
use crate::util::text::quote;

impl KeyMap {
    /// Directives that rebuild the current bindings and macros
    ///
    /// Emits `bind-key` lines context by context in registry order, skipping
    /// unbound chords and internal operations, then one `macro` line per macro.
    /// Feeding the output to [`KeyMap::handle_line`] on a fresh key map of the
    /// same flavor reproduces every bound chord and every macro.
    pub fn dump_config(&self) -> Vec<String> {
        let mut lines = Vec::new();

        for ctx in contexts() {
            for (chord, op) in self.bindings(*ctx) {
                if !op.is_user_bindable() {
                    continue;
                }
                lines.push(format!(
                    "bind-key {} {} {}",
                    quote(chord),
                    quote(name_of(*op)),
                    ctx.name()
                ));
            }
        }

        let separator = format!(" {} ", MACRO_SEPARATOR);
        for (trigger, commands) in self.macros().iter() {
            let body = commands
                .iter()
                .map(|cmd| {
                    std::iter::once(quote(name_of(cmd.op)))
                        .chain(cmd.args.iter().map(|arg| quote(arg)))
                        .collect::<Vec<_>>()
                        .join(" ")
                })
                .collect::<Vec<_>>()
                .join(separator.as_str());

            let line = if body.is_empty() {
                format!("macro {}", quote(trigger))
            } else {
                format!("macro {} {}", quote(trigger), body)
            };
            lines.push(line);
        }

        tracing::debug!(lines = lines.len(), "dumped key configuration");
        lines
    }
}
