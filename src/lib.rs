//! Nutrition domain engine behind a diet-tracking chat bot: daily calorie and
//! macro targets, parsing of the language model's nutrition answers, diary
//! aggregation, progress gauges and achievements.
//!
//! Everything here is pure over already-materialized inputs. Persistence and
//! the language model live in the embedding application behind the ports in
//! [`storage`].

pub mod achievements;
pub mod foodlog;
pub mod intake;
pub mod parser;
pub mod profile;
pub mod progress;
pub mod prompts;
pub mod storage;
pub mod summary;
pub mod targets;
pub mod weight;
