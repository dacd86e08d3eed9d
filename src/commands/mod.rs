pub mod feeds;
pub mod update;
