use std::process::Command;

/// Short commit hash of HEAD, or "unknown" outside a git checkout.
fn git_short_hash() -> String {
    let output = Command::new("git").args(["rev-parse", "--short", "HEAD"]).output();

    match output {
        Ok(output) if output.status.success() => String::from_utf8(output.stdout)
            .map(|s| s.trim().to_string())
            .unwrap_or_else(|_| "unknown".to_string()),
        _ => "unknown".to_string(),
    }
}

fn main() {
    // Embedded in `osmismerka --version`
    println!("cargo:rustc-env=GIT_HASH={}", git_short_hash());

    println!("cargo:rerun-if-changed=.git/HEAD");
}
