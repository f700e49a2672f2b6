//! Integration tests for the keymap system

use super::*;

/// Check that `replayed` resolves every chord bound in `original` identically
fn assert_bindings_reproduced(original: &KeyMap, replayed: &KeyMap) {
    for ctx in contexts() {
        for (chord, op) in original.bindings(*ctx) {
            if op.is_nil() {
                continue;
            }
            assert_eq!(
                replayed.resolve(chord, ctx.name()),
                *op,
                "chord {:?} in {}",
                chord,
                ctx.name()
            );
        }
    }
}

fn replay(lines: &[String], flavor: ContextMask) -> KeyMap {
    let mut keymap = KeyMap::new(flavor);
    for line in lines {
        keymap
            .handle_line(line)
            .unwrap_or_else(|e| panic!("replaying {line:?} failed: {e}"));
    }
    keymap
}

#[test]
fn test_round_trip_defaults() {
    let keymap = KeyMap::new(ContextMask::NEWSBOAT);
    let replayed = replay(&keymap.dump_config(), ContextMask::NEWSBOAT);
    assert_eq!(replayed, keymap);
}

#[test]
fn test_round_trip_after_directives() {
    let mut keymap = KeyMap::new(ContextMask::NEWSBOAT);
    let config = r##"
bind-key ^R reload-all feedlist
bind-key SPACE next-unread
bind-key "a b" open article
bind-key "#" quit
unbind-key q articlelist
unbind-key -a urlview
bind-key o open urlview
macro v set browser "mpv %u" ; open-in-browser ; set browser "firefox %u"
macro , open ; ; next
macro "x y" quit
"##;
    assert!(keymap.load_config_str(config).is_empty());

    let dumped = keymap.dump_config();
    let replayed = replay(&dumped, ContextMask::NEWSBOAT);

    assert_bindings_reproduced(&keymap, &replayed);
    assert_eq!(replayed.macros(), keymap.macros());

    // the fresh key map keeps defaults the original cleared, so its dump is a superset
    let redumped = replayed.dump_config();
    for line in &dumped {
        assert!(redumped.contains(line), "missing {line:?}");
    }
}

#[test]
fn test_round_trip_podboat() {
    let mut keymap = KeyMap::new(ContextMask::PODBOAT);
    let errors = keymap.load_config_str("bind-key x pb-play podboat\nunbind-key d podboat");
    assert!(errors.is_empty(), "{errors:?}");

    let replayed = replay(&keymap.dump_config(), ContextMask::PODBOAT);
    assert_bindings_reproduced(&keymap, &replayed);
    assert_eq!(replayed.resolve("x", "podboat"), Operation::PbPlay);
}

#[test]
fn test_resolve_after_set_key_everywhere() {
    let mut keymap = KeyMap::default();
    for d in descriptors().iter().filter(|d| d.op.is_user_bindable()) {
        for ctx in contexts() {
            let chord = format!("^{}", ctx.position());
            keymap.set_key(d.op, &chord, Scope::Only(*ctx));
            assert_eq!(keymap.resolve(&chord, ctx.name()), d.op);
        }
    }
}

#[test]
fn test_unset_all_everywhere_keeps_internal_operations() {
    let mut keymap = KeyMap::default();
    keymap.handle_line("unbind-key -a").unwrap();
    keymap.handle_line("unbind-key -a all").unwrap();

    for ctx in contexts() {
        assert_eq!(keymap.bindings(*ctx), &KeyMap::internal_operations());
        for d in descriptors().iter().filter(|d| d.op.is_internal()) {
            assert_eq!(keymap.resolve(d.default_chord, ctx.name()), d.op);
        }
    }
    assert!(keymap.dump_config().is_empty());
}

#[test]
fn test_all_is_never_stored_as_context() {
    let mut keymap = KeyMap::default();
    keymap.handle_line("bind-key x quit all").unwrap();
    assert_eq!(keymap.resolve("x", ALL_CONTEXTS), Operation::Nil);
    assert!(keymap
        .dump_config()
        .iter()
        .all(|line| !line.ends_with(" all")));
}

#[test]
fn test_macro_resolution_path() {
    let mut keymap = KeyMap::default();
    keymap.handle_line("macro gg open ; next").unwrap();

    // the macro prefix chord is bound; the trigger is looked up separately
    assert_eq!(keymap.resolve(",", "feedlist"), Operation::MacroPrefix);
    let cmds = keymap.get_macro("gg");
    assert_eq!(
        cmds,
        &[
            MacroCommand::new(Operation::Open),
            MacroCommand::new(Operation::Next)
        ]
    );
    assert!(keymap.get_macro("g").is_empty());
}

#[test]
fn test_decoded_default_chords() {
    // every single-character default chord decodes to itself
    for d in descriptors() {
        let mut chars = d.default_chord.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            assert_eq!(decode_chord(d.default_chord), Some(c));
        }
    }
    assert_eq!(decode_chord("^K"), Some('\u{b}'));
}
