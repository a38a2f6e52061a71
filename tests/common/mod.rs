use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// An isolated home with its own config directory and word lists.
pub struct TestEnv {
    _tmp: TempDir,
    pub home: PathBuf,
    #[allow(dead_code)]
    pub words: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let home = tmp.path().join("home");
        fs::create_dir_all(home.join(".config")).expect("create isolated home");

        let words = tmp.path().join("words");
        fs::create_dir_all(&words).expect("create words dir");

        Self {
            _tmp: tmp,
            home,
            words,
        }
    }

    #[allow(dead_code)]
    pub fn with_words(self, nouns: &str, adjectives: &str) -> Self {
        fs::write(self.words.join("nouns.txt"), nouns).expect("write nouns");
        fs::write(self.words.join("adjectives.txt"), adjectives).expect("write adjectives");
        self
    }

    #[allow(dead_code)]
    pub fn write_config(&self, json: &str) -> PathBuf {
        let path = self.home.join("config.json");
        fs::write(&path, json).expect("write config");
        path
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("randtxt");
        cmd.env("HOME", &self.home)
            .env("XDG_CONFIG_HOME", self.home.join(".config"))
            .env_remove("RANDTXT_WORDS_DIR")
            .env_remove("RUST_LOG");
        cmd
    }

    /// Runs a successful command and returns its stdout.
    pub fn stdout(&self, args: &[&str]) -> String {
        let out = self
            .cmd()
            .args(args)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        String::from_utf8(out).expect("utf8 output")
    }
}
