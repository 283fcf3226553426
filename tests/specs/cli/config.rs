//! Config file specs

use crate::prelude::*;

#[test]
fn config_flag_disables_echo() {
    let bin = Bin::standard();
    let config = bin.work().join("cchell.toml");
    std::fs::write(&config, "[prompt]\necho = false\n").unwrap();
    bin.cchell()
        .args(&["--config", config.to_str().unwrap(), "--", "gret"])
        .stdin("y")
        .passes()
        .stderr_eq("ask: command 'gret' doesn't exist, do you mean 'greet'? [Y/n] ");
}

#[test]
fn config_env_is_read() {
    let bin = Bin::standard();
    let config = bin.work().join("cchell.toml");
    std::fs::write(&config, "[prompt]\necho = false\n").unwrap();
    bin.cchell()
        .env("CCHELL_CONFIG", &config)
        .args(&["--", "gret"])
        .stdin("y")
        .passes()
        .stderr_lacks("[Y/n] y");
}

#[test]
fn default_config_location() {
    let bin = Bin::standard();
    let home = tempfile::tempdir().unwrap();
    let dir = home.path().join("cchell");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("config.toml"), "[prompt]\necho = false\n").unwrap();
    bin.cchell()
        .env("XDG_CONFIG_HOME", home.path())
        .args(&["--", "gret"])
        .stdin("y")
        .passes()
        .stderr_lacks("[Y/n] y");
}

#[test]
fn missing_config_file() {
    cli()
        .args(&["--config", "/nonexistent/cchell.toml", "--", "ls"])
        .fails()
        .code(1)
        .stderr_has("Error: failed to read config '/nonexistent/cchell.toml'");
}

#[test]
fn malformed_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("cchell.toml");
    std::fs::write(&config, "[theme]\nerror_color = \"red\"\n").unwrap();
    cli()
        .args(&["--config", config.to_str().unwrap(), "--", "ls"])
        .fails()
        .code(1)
        .stderr_has("Error: invalid config");
}

#[test]
fn unknown_config_key() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("cchell.toml");
    std::fs::write(&config, "[prompt]\nvolume = 11\n").unwrap();
    cli()
        .args(&["--config", config.to_str().unwrap(), "--", "ls"])
        .fails()
        .code(1)
        .stderr_has("volume");
}
