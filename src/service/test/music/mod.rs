use crate::model::music::Track;

pub mod enqueue;
pub mod skip;
pub mod stop;

fn track(title: &str) -> Track {
    Track {
        title: title.to_string(),
        requested_by: 42,
    }
}
