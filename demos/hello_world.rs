use rooted_fs::{Order, RootedFS};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let tmp = std::env::temp_dir();
    println!("Temp dir: {}", tmp.display());

    // nothing is created yet, the root is only bound
    let fs = RootedFS::new(tmp.join("my_rooted_fs"))?;
    fs.delete_root_recursively()?; // leftovers of an interrupted run

    // creates `<tmp>/my_rooted_fs/docs/first.txt` together with both directories;
    // a leading `/` still means "relative to the root"
    fs.write_file("/docs/first.txt", "Hello")?
        .append_file("docs/second.txt", "World")?;

    let first = fs.read_to_string("docs/first.txt")?;
    let second = fs.read_to_string("docs/second.txt")?;
    println!("{}, {}!", first, second);

    // copies the whole `docs` tree; doing it twice would fail, files are never overwritten
    fs.copy_from_to("docs", "backup/docs")?;
    for entry in fs.walk("backup", Order::Pre) {
        let entry = entry?;
        println!("{:>9} {}", format!("{:?}", entry.entry_type()), entry.path().display());
    }

    // a second create of the same file is refused
    fs.create_file("docs/third.txt")?;
    assert!(fs.create_file("docs/third.txt").is_err());

    // removes everything, the root included; running it again is a no-op
    fs.delete_root_recursively()?.delete_root_recursively()?;
    assert!(!fs.exists(""));
    Ok(())
}
