//! Detection of shorthand use in raw arguments.
//!
//! Clap records that a flag was set but not whether `-p` or `--port` was
//! written, so shorthand deprecation notices scan the raw argument list.

use std::collections::HashSet;
use std::ffi::OsString;

/// Which shorts and longs consume the following argument as a value.
#[derive(Debug, Default)]
pub(crate) struct ValueOptions {
    pub(crate) shorts: HashSet<char>,
    pub(crate) longs: HashSet<String>,
}

/// Returns every short option written in `args`, skipping the binary name,
/// option values and everything after `--`.
pub(crate) fn shorts_used(args: &[OsString], options: &ValueOptions) -> HashSet<char> {
    let mut used = HashSet::new();
    let mut tokens = args.iter().skip(1).map(|arg| arg.to_string_lossy());
    while let Some(token) = tokens.next() {
        if token == "--" {
            break;
        }
        if let Some(long) = token.strip_prefix("--") {
            if !long.contains('=') && options.longs.contains(long) {
                tokens.next();
            }
            continue;
        }
        let Some(cluster) = token.strip_prefix('-') else {
            continue;
        };
        for (index, short) in cluster.char_indices() {
            used.insert(short);
            if options.shorts.contains(&short) {
                if index + short.len_utf8() == cluster.len() {
                    tokens.next();
                }
                break;
            }
        }
    }
    used
}
