fn main() -> anyhow::Result<()> {
    // cause i cannot figure out how to uppercase a str literal at compile time
    println!(
        "cargo::rustc-env=CARGO_PKG_NAME_UPPERCASE={}",
        env!("CARGO_PKG_NAME").to_ascii_uppercase()
    );

    Ok(())
}
