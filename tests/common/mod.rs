use std::path::Path;

use assert_cmd::Command;

/// CLI in script mode with every file kept under `home`.
pub fn script_command(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("moments_writer_cli").unwrap();
    cmd.env("MOMENTS_WRITER_CLI_SCRIPT", "1")
        .env("MOMENTS_WRITER_HOME", home)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG");
    cmd
}

/// Commands that complete step 1 with valid data.
pub const STEP_ONE: &str = "\
set fullName \"Jane Doe\"
set gender female
set placeBirth \"Houston, Texas\"
set placePassing Chicago
date open birth
date prev-year
date day 1
date confirm
date open passing
date today
date confirm
";
