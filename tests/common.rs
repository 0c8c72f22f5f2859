#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn pd() -> Command {
    cargo_bin_cmd!("progressdash")
}

/// Config path inside the system temp dir; any existing file is removed so
/// the run starts from defaults.
pub fn temp_config(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_progressdash.conf", name));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// `progressdash --config <temp> --no-color <args…>`
pub fn pd_with(name: &str, args: &[&str]) -> Command {
    let cfg = temp_config(name);
    let mut cmd = pd();
    cmd.args(["--config", &cfg, "--no-color"]).args(args);
    cmd
}
