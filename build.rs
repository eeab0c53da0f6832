fn main() {
    // Re-run when the checked-out commit moves, so version() stays honest.
    if let Some(git_dir) = git(&["rev-parse", "--git-dir"]) {
        for rel in ["HEAD", "packed-refs", "refs/heads", "refs/tags"] {
            let path = std::path::Path::new(&git_dir).join(rel);
            if path.exists() {
                println!("cargo:rerun-if-changed={}", path.display());
            }
        }
    }

    if let Some(describe) = git(&["describe", "--always", "--tags", "--long", "--dirty"]) {
        println!("cargo:rustc-env=_GIT_INFO={describe}");
    }
}

fn git(args: &[&str]) -> Option<String> {
    let output = std::process::Command::new("git").args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    let stdout = String::from_utf8(output.stdout).ok()?;
    let trimmed = stdout.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
