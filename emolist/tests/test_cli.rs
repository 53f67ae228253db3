//
// emolist
//
// Copyright 2024 The emolist contributors
//
// This file is part of emolist.
//
// emolist is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// emolist is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with emolist. If not, see <http://www.gnu.org/licenses/>.
//
// SPDX-License-Identifier: GPL-3.0-or-later

use std::{
    collections::BTreeMap,
    io::Write,
    path::{Path, PathBuf},
};

use assert_cmd::{assert::OutputAssertExt, Command};
use predicates::prelude::*;
use rusty_fork::rusty_fork_test;
use tempfile::TempDir;

rusty_fork_test! {
#[test]
fn test_cli_subcommands() {
    run_cli_subcommands();
}
}

type Env = BTreeMap<&'static str, PathBuf>;

fn make_common_env(temp_dir: &Path) -> Env {
    let mut common_env = BTreeMap::default();
    for (var, dir) in [
        ("HOME", temp_dir.to_path_buf()),
        ("XDG_CACHE_HOME", temp_dir.join(".cache")),
        ("XDG_CONFIG_HOME", temp_dir.join(".config")),
        ("XDG_DATA_HOME", temp_dir.join(".local/share")),
    ] {
        std::fs::create_dir_all(&dir).unwrap_or_else(|err| {
            panic!("Could not create {} path, {}: {}", var, dir.display(), err);
        });
        common_env.insert(var, dir);
    }
    common_env
}

// Nothing listens on port 9; every file must come from the cache.
const EMOJI_DATA_URL: &str = "http://127.0.0.1:9/emoji-data.txt";
const EMOJI_SEQUENCES_URL: &str = "http://127.0.0.1:9/emoji-sequences.txt";
const EMOJI_ZWJ_SEQUENCES_URL: &str = "http://127.0.0.1:9/emoji-zwj-sequences.txt";
const CLDR_URL: &str = "http://127.0.0.1:9/cldr-common-46.0.zip";

const EXPECTED: &str = concat!(
    "\u{1F600} grinning face\n",
    "\u{1F44D} thumbs up +1 hand\n",
    "\u{2764}\u{FE0F} red heart\n",
);

/// Write source files for `EXPECTED` into `cache_dir`. Without `complete`,
/// the annotation of U+2764 is left out.
fn write_fixture(cache_dir: &Path, complete: bool) {
    std::fs::create_dir_all(cache_dir).unwrap();
    std::fs::write(
        cache_dir.join("emoji-data.txt"),
        "1F3FB..1F3FF ; Emoji_Modifier # skin tones\n",
    )
    .unwrap();
    std::fs::write(
        cache_dir.join("emoji-sequences.txt"),
        "2764 FE0F ; Basic_Emoji\n1F44D ; Basic_Emoji\n1F3FB ; Basic_Emoji\n1F600 ; \
         Basic_Emoji\n",
    )
    .unwrap();
    std::fs::write(cache_dir.join("emoji-zwj-sequences.txt"), "# empty\n").unwrap();

    let mut annotations = String::from(concat!(
        "<ldml><annotations>\n",
        "<annotation cp=\"\u{1F600}\">face | grin</annotation>\n",
        "<annotation cp=\"\u{1F600}\" type=\"tts\">grinning face</annotation>\n",
        "<annotation cp=\"\u{1F44D}\">+1 | hand | thumb | up</annotation>\n",
        "<annotation cp=\"\u{1F44D}\" type=\"tts\">thumbs up</annotation>\n",
    ));
    if complete {
        annotations.push_str("<annotation cp=\"\u{2764}\" type=\"tts\">red heart</annotation>\n");
    }
    annotations.push_str("</annotations></ldml>\n");
    let collation = concat!(
        "<ldml><collations><collation type=\"emoji\"><cr><![CDATA[\n",
        "<\u{1F600}\n<\u{1F44D}\n<\u{2764}\u{FE0F}\n",
        "]]></cr></collation></collations></ldml>\n",
    );

    let file = std::fs::File::create(cache_dir.join("cldr-common-46.0.zip")).unwrap();
    let mut zip = zip::ZipWriter::new(file);
    let options =
        zip::write::FileOptions::default().compression_method(zip::CompressionMethod::Stored);
    for (name, contents) in [
        ("common/annotations/en.xml", annotations.as_str()),
        ("common/annotationsDerived/en.xml", "<ldml><annotations/></ldml>\n"),
        ("common/collation/root.xml", collation),
    ] {
        zip.start_file(name, options).unwrap();
        zip.write_all(contents.as_bytes()).unwrap();
    }
    zip.finish().unwrap();
}

fn emolist(env: &Env) -> Command {
    let mut cmd = Command::cargo_bin("emolist").unwrap();
    cmd.env_clear().envs(env).args([
        "--emoji-data",
        EMOJI_DATA_URL,
        "--emoji-sequences",
        EMOJI_SEQUENCES_URL,
        "--emoji-zwj-sequences",
        EMOJI_ZWJ_SEQUENCES_URL,
        "--cldr",
        CLDR_URL,
    ]);
    cmd
}

fn help(env: &Env) {
    // --help is successful
    for arg in ["--help", "-h"] {
        let mut cmd = Command::cargo_bin("emolist").unwrap();
        let output = cmd
            .env_clear()
            .envs(env)
            .arg(arg)
            .output()
            .unwrap()
            .assert();
        output
            .code(0)
            .stdout(predicates::str::starts_with("emolist "))
            .stdout(predicates::str::contains("--cache-dir"))
            .stdout(predicates::str::contains("print-config"));
    }
}

fn print_config(env: &Env, temp_dir: &Path) {
    let config_path = temp_dir.join("emolist.toml");
    std::fs::write(
        &config_path,
        "cldr = \"https://example.com/cldr-common-45.0.zip\"\nemoji_data = \
         \"https://example.com/emoji-data.txt\"\n",
    )
    .unwrap();

    // The file overrides the defaults, flags override the file.
    let mut cmd = Command::cargo_bin("emolist").unwrap();
    let output = cmd
        .env_clear()
        .envs(env)
        .arg("-c")
        .arg(&config_path)
        .args(["--emoji-data", EMOJI_DATA_URL, "print-config"])
        .output()
        .unwrap()
        .assert();
    output
        .code(0)
        .stdout(predicates::str::contains(
            "cldr = \"https://example.com/cldr-common-45.0.zip\"",
        ))
        .stdout(predicates::str::contains(format!(
            "emoji_data = \"{}\"",
            EMOJI_DATA_URL
        )))
        .stdout(predicates::str::contains(
            "emoji_zwj_sequences = \"https://www.unicode.org/Public/emoji/16.0/emoji-zwj-sequences.txt\"",
        ));

    // Unknown keys are rejected.
    std::fs::write(&config_path, "cache = true\n").unwrap();
    let mut cmd = Command::cargo_bin("emolist").unwrap();
    let output = cmd
        .env_clear()
        .envs(env)
        .arg("--config")
        .arg(&config_path)
        .arg("print-config")
        .output()
        .unwrap()
        .assert();
    output
        .code(1)
        .stdout(predicates::str::is_empty())
        .stderr(predicates::str::contains("could not parse configuration file"));
}

fn print_cache_dir(env: &Env, temp_dir: &Path) {
    let cache_dir = temp_dir.join("env-cache");
    let mut cmd = Command::cargo_bin("emolist").unwrap();
    let output = cmd
        .env_clear()
        .envs(env)
        .env("EMOLIST_CACHE_DIR", &cache_dir)
        .arg("print-cache-dir")
        .output()
        .unwrap()
        .assert();
    output
        .code(0)
        .stdout(predicates::str::diff(format!("{}\n", cache_dir.display())));

    let mut cmd = Command::cargo_bin("emolist").unwrap();
    let output = cmd
        .env_clear()
        .envs(env)
        .args(["--xdg-cache", "print-cache-dir"])
        .output()
        .unwrap()
        .assert();
    output.code(0).stdout(predicates::str::diff(format!(
        "{}\n",
        env["XDG_CACHE_HOME"].join("emolist").display()
    )));
    assert!(env["XDG_CACHE_HOME"].join("emolist").is_dir());
}

fn generate(env: &Env, temp_dir: &Path) {
    let cache_dir = temp_dir.join("cache");
    write_fixture(&cache_dir, true);

    for args in [&["generate"][..], &[][..]] {
        let output = emolist(env)
            .arg("--cache-dir")
            .arg(&cache_dir)
            .args(args)
            .output()
            .unwrap()
            .assert();
        output
            .code(0)
            .stdout(predicates::str::diff(EXPECTED))
            .stderr(predicates::str::is_empty());
    }

    let out_path = temp_dir.join("emoji.txt");
    let output = emolist(env)
        .arg("-vv")
        .arg("--cache-dir")
        .arg(&cache_dir)
        .arg("-o")
        .arg(&out_path)
        .output()
        .unwrap()
        .assert();
    output
        .code(0)
        .stdout(predicates::str::is_empty())
        .stderr(predicates::str::contains("using cached"));
    assert_eq!(std::fs::read_to_string(&out_path).unwrap(), EXPECTED);
}

fn missing_annotation(env: &Env, temp_dir: &Path) {
    let cache_dir = temp_dir.join("incomplete-cache");
    write_fixture(&cache_dir, false);

    let output = emolist(env)
        .arg("--cache-dir")
        .arg(&cache_dir)
        .output()
        .unwrap()
        .assert();
    output
        .code(1)
        .stdout(predicates::str::diff(concat!(
            "\u{1F600} grinning face\n",
            "\u{1F44D} thumbs up +1 hand\n",
        )))
        .stderr(predicates::str::contains(
            "emoji \"\u{2764}\u{FE0F}\" has no annotation\ncodepoints 2764 FE0F",
        ));
}

fn run_cli_subcommands() {
    let tmp_dir = TempDir::new().unwrap();
    let env = make_common_env(tmp_dir.path());

    help(&env);
    print_config(&env, tmp_dir.path());
    print_cache_dir(&env, tmp_dir.path());
    generate(&env, tmp_dir.path());
    missing_annotation(&env, tmp_dir.path());
}
