use assert_cmd::Command;
use assert_fs::prelude::*;
use predicates::prelude::*;
use test_log::test;

const BIN: &str = "wordcheck";

fn dictionary(temp: &assert_fs::TempDir, words: &str) -> assert_fs::fixture::ChildPath {
    let dict = temp.child("dict.txt");
    dict.write_str(words).expect("dictionary is written");
    dict
}

#[cfg_attr(miri, ignore)]
#[test]
fn cli_argument_parsing() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin(BIN)?;
    cmd.arg("Non-existing-dictionary.txt");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("No such file or directory"));

    cmd = Command::cargo_bin(BIN)?;
    cmd.arg("-h");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Print help"));

    cmd = Command::cargo_bin(BIN)?;
    cmd.arg("--version");
    cmd.assert().success().stdout(predicate::str::contains(BIN));

    cmd = Command::cargo_bin(BIN)?;
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("<DICTIONARY>"));

    cmd = Command::cargo_bin(BIN)?;
    cmd.arg("-x").arg("dict.txt");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("unexpected argument '-x'"));

    cmd = Command::cargo_bin(BIN)?;
    cmd.arg("-v").arg("-q").arg("dict.txt");
    cmd.assert().failure().stderr(predicate::str::contains(
        "argument '--verbose...' cannot be used with '--quiet'",
    ));
    Ok(())
}

#[cfg_attr(miri, ignore)]
#[test]
fn cli_unknown_words() -> Result<(), Box<dyn std::error::Error>> {
    let temp = assert_fs::TempDir::new()?;
    let dict = dictionary(&temp, "apple\nbanana\npear\ncat's\n");

    for robust in [false, true] {
        let mut cmd = Command::cargo_bin(BIN)?;
        cmd.arg(dict.path());
        if robust {
            cmd.arg("-r");
        }
        cmd.write_stdin("Apple kiwi, PEAR! durian cats banana.\n");
        cmd.assert().success().stdout("kiwi\ndurian\n");
    }

    let mut cmd = Command::cargo_bin(BIN)?;
    cmd.arg(dict.path()).arg("-s").arg("1").write_stdin("");
    cmd.assert().success().stdout("");

    temp.close()?;
    Ok(())
}

#[cfg_attr(miri, ignore)]
#[test]
fn cli_non_utf8_input() -> Result<(), Box<dyn std::error::Error>> {
    let temp = assert_fs::TempDir::new()?;
    let dict = temp.child("latin1.txt");
    dict.write_binary(b"apple\ncaf\xe9\nbanana\n")?;

    for robust in [false, true] {
        let mut cmd = Command::cargo_bin(BIN)?;
        cmd.arg(dict.path());
        if robust {
            cmd.arg("-r");
        }
        cmd.write_stdin(&b"apple kiwi caf na\xefve banana\xff\n"[..]);
        cmd.assert().success().stdout("kiwi\nna\nve\n");
    }

    temp.close()?;
    Ok(())
}

#[cfg_attr(miri, ignore)]
#[test]
fn cli_print_table() -> Result<(), Box<dyn std::error::Error>> {
    let temp = assert_fs::TempDir::new()?;
    let dict = dictionary(&temp, "pear apple\nbanana apple\n");

    let mut cmd = Command::cargo_bin(BIN)?;
    cmd.arg(dict.path()).arg("-p").arg("-s").arg("1");
    cmd.assert()
        .success()
        .stdout("pear apple banana apple \n");

    let mut cmd = Command::cargo_bin(BIN)?;
    cmd.arg(dict.path()).arg("-p").arg("-r").arg("--size").arg("1");
    cmd.assert()
        .success()
        .stdout("black: banana red:   apple red:   pear \n");

    let mut cmd = Command::cargo_bin(BIN)?;
    cmd.arg(dict.path()).arg("--print").arg("--size").arg("1000");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("banana \n"))
        .stdout(predicate::function(|out: &str| out.lines().count() == 3));

    temp.close()?;
    Ok(())
}

#[cfg_attr(miri, ignore)]
#[test]
fn cli_info() -> Result<(), Box<dyn std::error::Error>> {
    let temp = assert_fs::TempDir::new()?;
    let dict = dictionary(&temp, "the quick brown fox\n");

    let mut cmd = Command::cargo_bin(BIN)?;
    cmd.arg(dict.path()).arg("-i").arg("-r");
    cmd.write_stdin("the slow brown dog");
    cmd.assert()
        .success()
        .stdout("slow\ndog\n")
        .stderr(predicate::str::contains("Fill time: "))
        .stderr(predicate::str::contains("Search time: "))
        .stderr(predicate::str::contains("Unknown words: 2\n"));

    temp.close()?;
    Ok(())
}
