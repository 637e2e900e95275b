pub mod mute_sweeper;
