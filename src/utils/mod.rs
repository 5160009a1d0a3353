pub(crate) mod debug;
pub(crate) mod pipe;
pub(crate) mod time;
pub(crate) mod timezone;

pub(crate) use debug::{debug_enabled, set_debug};
pub(crate) use pipe::{feed, filter_json};
pub(crate) use time::{loaded_at, parse_instant};
pub(crate) use timezone::Timezone;
