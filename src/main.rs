use anyhow::Result;

fn main() -> Result<()> {
    wordbook::cli::run()
}
