use anyhow::Result;

fn main() -> Result<()> {
    alankar::repl::start()
}
