#![deny(clippy::all, clippy::pedantic)]
//! # ASCII SDF runtime
//!
//! Terminal front-end for the sphere tracer. Requests frames of one shape
//! in a loop and repaints them in place with a cursor-home escape. Logs go
//! to stderr so stdout carries nothing but frames.

mod app;
mod config;

use anyhow::Result;
use clap::Parser;

use crate::config::Args;

fn main() -> Result<()> {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(args.log_level())
        .init();
    app::run(&args)
}
