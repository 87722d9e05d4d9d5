//! Estate Market CLI
//!
//! Webフロントエンドと同じREST APIを端末から操作する。

pub mod cli;
pub mod client;
pub mod commands;
pub mod config;
pub mod error;
pub mod render;
