use std::env;
use std::process::Command;

const PREFIX: &str = "MOMENTS_WRITER_BUILD";

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/refs");

    let status = command_output("git", &["status", "--porcelain"])
        .map(|out| if out.is_empty() { "clean" } else { "dirty" })
        .unwrap_or("unknown");

    let entries = [
        (
            "HASH",
            command_output("git", &["rev-parse", "--short", "HEAD"])
                .filter(|hash| !hash.is_empty())
                .unwrap_or_else(|| "unknown".into()),
        ),
        ("STATUS", status.to_string()),
        (
            "TIMESTAMP",
            chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Secs, true),
        ),
        ("TARGET", env_or("TARGET", "unknown-target")),
        ("PROFILE", env_or("PROFILE", "unknown-profile")),
        (
            "RUSTC",
            command_output("rustc", &["--version"]).unwrap_or_else(|| "unknown".into()),
        ),
    ];

    for (name, value) in entries {
        println!("cargo:rustc-env={PREFIX}_{name}={value}");
    }
}

fn env_or(key: &str, fallback: &str) -> String {
    env::var(key).unwrap_or_else(|_| fallback.to_string())
}

/// Trimmed stdout of a successful command.
fn command_output(program: &str, args: &[&str]) -> Option<String> {
    let output = Command::new(program).args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    String::from_utf8(output.stdout)
        .ok()
        .map(|text| text.trim().to_string())
}
