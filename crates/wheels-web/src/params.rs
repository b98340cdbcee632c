// Runtime parameters read from the page URL.

use crate::constants::{DEBUG_PARAM, SEED_PARAM};
use wheels_core::SketchParams;

/// Value of `key` in a `?a=1&b=2` style query string. A bare key yields `""`.
pub fn query_value<'a>(search: &'a str, key: &str) -> Option<&'a str> {
    search
        .trim_start_matches('?')
        .split('&')
        .filter(|pair| !pair.is_empty())
        .find_map(|pair| {
            let (k, v) = pair.split_once('=').unwrap_or((pair, ""));
            (k == key).then_some(v)
        })
}

pub fn sketch_params(search: &str) -> SketchParams {
    let seed = query_value(search, SEED_PARAM).and_then(|v| match v.parse::<u64>() {
        Ok(seed) => Some(seed),
        Err(_) => {
            log::warn!("ignoring invalid seed {:?}", v);
            None
        }
    });
    SketchParams {
        seed,
        ..SketchParams::default()
    }
}

pub fn log_level(search: &str) -> log::Level {
    if query_value(search, DEBUG_PARAM).is_some() {
        log::Level::Debug
    } else {
        log::Level::Info
    }
}
